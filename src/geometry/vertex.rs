/// 几何体顶点定义模块
///
/// 定义导入器输出的完整顶点结构，包含位置、法线、UV坐标和切线向量。

use bytemuck::{Pod, Zeroable};

/// 完整的3D顶点结构
///
/// 内存布局与GPU兼容，使用 `#[repr(C)]` 保证顺序和对齐，
/// 外部渲染器可以直接将 `&[Vertex]` 转为字节上传。
///
/// # 内存布局
///
/// - position: 12 bytes (3 * f32)
/// - normal: 12 bytes (3 * f32)
/// - texcoord: 8 bytes (2 * f32)
/// - tangent: 12 bytes (3 * f32)
/// - **总计**: 44 bytes
///
/// 所有字段默认为零向量。
#[repr(C)]
#[derive(Default, Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// 顶点位置 (x, y, z)
    pub position: [f32; 3],

    /// 法线向量 (nx, ny, nz)
    ///
    /// 源文件缺少法线时为零向量，直到被重建。
    pub normal: [f32; 3],

    /// 纹理坐标 (u, v)
    pub texcoord: [f32; 2],

    /// 切线向量 (tx, ty, tz)
    ///
    /// 只有开启切线生成时才会被填充。
    pub tangent: [f32; 3],
}

impl Vertex {
    /// 创建一个新的顶点
    #[inline]
    pub fn new(
        position: [f32; 3],
        normal: [f32; 3],
        texcoord: [f32; 2],
        tangent: [f32; 3],
    ) -> Self {
        Self {
            position,
            normal,
            texcoord,
            tangent,
        }
    }

    /// 只指定位置的顶点，其余属性为零
    #[inline]
    pub fn from_position(position: [f32; 3]) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// 法线是否非零
    #[inline]
    pub fn has_normal(&self) -> bool {
        self.normal.iter().any(|&c| c != 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_vertex_size() {
        // 3*4 + 3*4 + 2*4 + 3*4 = 44 bytes
        assert_eq!(size_of::<Vertex>(), 44);
        assert_eq!(std::mem::align_of::<Vertex>(), 4);
    }

    #[test]
    fn test_vertex_default_is_zero() {
        let vertex = Vertex::default();

        assert_eq!(vertex.position, [0.0, 0.0, 0.0]);
        assert_eq!(vertex.normal, [0.0, 0.0, 0.0]);
        assert_eq!(vertex.texcoord, [0.0, 0.0]);
        assert_eq!(vertex.tangent, [0.0, 0.0, 0.0]);
        assert!(!vertex.has_normal());
    }

    #[test]
    fn test_vertex_has_normal() {
        let mut vertex = Vertex::from_position([1.0, 2.0, 3.0]);
        assert!(!vertex.has_normal());

        vertex.normal = [0.0, 0.0, -1.0];
        assert!(vertex.has_normal());
    }

    #[test]
    fn test_vertex_bytes() {
        let vertices = [Vertex::from_position([1.0, 0.0, 0.0])];
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 44);
    }
}
