/// 网格数据结构模块
///
/// 定义CPU侧的子网格容器。一个 OBJ 形状（shape）对应一个 `Mesh`，
/// 由所属的 `Model` 独占。

use super::bounds::Bounds;
use super::vertex::Vertex;
use crate::math::geometry;

/// CPU侧子网格
///
/// # 不变式
///
/// - `indices.len()` 是 3 的倍数
/// - 每个索引都小于 `vertices.len()`
/// - 顶点顺序即渲染顺序，导入后不会重排
///
/// # 示例
///
/// ```rust
/// use meshview::geometry::{Mesh, Vertex};
///
/// let mut mesh = Mesh::with_name("Triangle");
/// mesh.push_triangle([
///     Vertex::from_position([0.0, 0.0, 0.0]),
///     Vertex::from_position([1.0, 0.0, 0.0]),
///     Vertex::from_position([0.0, 1.0, 0.0]),
/// ]);
///
/// assert_eq!(mesh.indices, vec![0, 1, 2]);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// 网格名称（来自 OBJ 的 o/g 名称，可能为空）
    pub name: String,

    /// 顶点数组
    pub vertices: Vec<Vertex>,

    /// 三角形顶点索引，每3个索引定义一个三角形
    pub indices: Vec<u32>,

    /// 所属 `Model` 材质列表中的下标
    ///
    /// `None` 表示没有材质；消费方应通过 [`super::Model::material_for`]
    /// 解析，越界或缺失都会回退到 0 号材质。
    pub material_index: Option<usize>,
}

impl Mesh {
    /// 创建一个空网格
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建一个指定名称的空网格
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// 追加一个三角形
    ///
    /// 三个顶点总是作为新顶点追加（不与已有顶点共享），
    /// 索引为 `n, n+1, n+2`，其中 `n` 是追加前的顶点数。
    pub fn push_triangle(&mut self, corners: [Vertex; 3]) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&corners);
        self.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    /// 是否有任意一个顶点带有非零法线
    pub fn has_normals(&self) -> bool {
        geometry::has_any_normal(&self.vertices)
    }

    /// 按面法线平均重建所有顶点法线
    pub fn compute_normals(&mut self) {
        geometry::reconstruct_normals(&mut self.vertices, &self.indices);
    }

    /// 按 UV 导数计算所有顶点切线
    pub fn compute_tangents(&mut self) {
        geometry::compute_tangents(&mut self.vertices, &self.indices);
    }

    /// 合并完全相同的顶点
    pub fn weld(&mut self) {
        let (vertices, indices) = geometry::weld_vertices(&self.vertices, &self.indices);
        self.vertices = vertices;
        self.indices = indices;
    }

    /// 本网格的包围盒
    pub fn bounds(&self) -> Bounds {
        Bounds::from_vertices(&self.vertices)
    }

    /// 验证网格数据的有效性
    ///
    /// 检查：
    /// - 索引数量是3的倍数
    /// - 所有索引都在有效范围内
    pub fn validate(&self) -> Result<(), String> {
        if self.indices.len() % 3 != 0 {
            return Err(format!(
                "索引数量必须是3的倍数，当前为: {}",
                self.indices.len()
            ));
        }

        let vertex_count = self.vertices.len();
        if let Some((i, &index)) = self
            .indices
            .iter()
            .enumerate()
            .find(|(_, index)| **index as usize >= vertex_count)
        {
            return Err(format!(
                "索引 {} 处的值 {} 超出顶点范围 (共 {} 个顶点)",
                i, index, vertex_count
            ));
        }

        Ok(())
    }
}
