/// 模型数据结构模块
///
/// `Model` 是加载/卸载的单位，独占其所有子网格与材质。

use super::bounds::Bounds;
use super::material::Material;
use super::mesh::Mesh;

/// 导入后的完整模型
///
/// 由导入器一次性填充，最后计算包围盒，之后交给渲染器只读使用。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    /// 模型名称（通常为源文件路径）
    pub name: String,

    /// 子网格，顺序与源文件中的形状顺序一致
    pub meshes: Vec<Mesh>,

    /// 材质列表；0 号材质是无效材质下标的回退
    pub materials: Vec<Material>,

    /// 所有子网格的包围盒并集
    pub bounds: Bounds,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// 重新计算包围盒
    ///
    /// 模型没有子网格时为原点；空子网格贡献原点处的零体积盒子。
    pub fn compute_bounds(&mut self) {
        self.bounds = self
            .meshes
            .iter()
            .map(Mesh::bounds)
            .reduce(|acc, b| acc.union(&b))
            .unwrap_or_else(Bounds::zero);
    }

    /// 解析子网格使用的材质
    ///
    /// 材质下标缺失或越界时回退到 0 号材质；
    /// 只有模型没有任何材质时返回 `None`。
    pub fn material_for(&self, mesh: &Mesh) -> Option<&Material> {
        mesh.material_index
            .and_then(|i| self.materials.get(i))
            .or_else(|| self.materials.first())
    }

    pub fn total_vertex_count(&self) -> usize {
        self.meshes.iter().map(Mesh::vertex_count).sum()
    }

    pub fn total_index_count(&self) -> usize {
        self.meshes.iter().map(Mesh::index_count).sum()
    }

    pub fn total_triangle_count(&self) -> usize {
        self.meshes.iter().map(Mesh::triangle_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::vertex::Vertex;
    use crate::math::Vector3;

    fn mesh_at(points: &[[f32; 3]]) -> Mesh {
        let mut mesh = Mesh::new();
        mesh.vertices = points.iter().copied().map(Vertex::from_position).collect();
        mesh
    }

    #[test]
    fn test_empty_model_bounds_at_origin() {
        let mut model = Model::new("empty");
        model.compute_bounds();

        assert_eq!(model.bounds.min, Vector3::zeros());
        assert_eq!(model.bounds.max, Vector3::zeros());
    }

    #[test]
    fn test_bounds_union_over_meshes() {
        let mut model = Model::new("two");
        model.meshes.push(mesh_at(&[[1.0, 1.0, 1.0], [2.0, 3.0, 1.5]]));
        model.meshes.push(mesh_at(&[[-4.0, 2.0, 2.0]]));
        model.compute_bounds();

        assert_eq!(model.bounds.min, Vector3::new(-4.0, 1.0, 1.0));
        assert_eq!(model.bounds.max, Vector3::new(2.0, 3.0, 2.0));
        for mesh in &model.meshes {
            for v in &mesh.vertices {
                assert!(model.bounds.contains(v.position));
            }
        }
    }

    #[test]
    fn test_empty_mesh_contributes_origin() {
        let mut model = Model::new("mixed");
        model.meshes.push(mesh_at(&[[1.0, 1.0, 1.0], [2.0, 2.0, 2.0]]));
        model.meshes.push(Mesh::new());
        model.compute_bounds();

        assert_eq!(model.bounds.min, Vector3::zeros());
        assert_eq!(model.bounds.max, Vector3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn test_material_fallback() {
        let mut model = Model::new("materials");
        model.materials.push(Material::named("first"));
        model.materials.push(Material::named("second"));

        let mut mesh = Mesh::new();
        mesh.material_index = Some(1);
        assert_eq!(model.material_for(&mesh).map(|m| m.name.as_str()), Some("second"));

        mesh.material_index = Some(9);
        assert_eq!(model.material_for(&mesh).map(|m| m.name.as_str()), Some("first"));

        mesh.material_index = None;
        assert_eq!(model.material_for(&mesh).map(|m| m.name.as_str()), Some("first"));

        model.materials.clear();
        assert!(model.material_for(&mesh).is_none());
    }

    #[test]
    fn test_totals() {
        let mut model = Model::new("totals");
        let mut a = Mesh::new();
        a.push_triangle([Vertex::default(); 3]);
        let mut b = Mesh::new();
        b.push_triangle([Vertex::default(); 3]);
        b.push_triangle([Vertex::default(); 3]);
        model.meshes.extend([a, b]);

        assert_eq!(model.total_vertex_count(), 9);
        assert_eq!(model.total_index_count(), 9);
        assert_eq!(model.total_triangle_count(), 3);
    }
}
