//! 几何数学工具模块
//!
//! 提供网格后处理相关的数学函数：
//! - 法线重建（面法线累加到顶点）
//! - 切线计算（用于法线贴图）
//! - 顶点焊接（可选后处理）
//!
//! 所有函数只依赖顶点数组与索引数组，不关心网格来自哪种文件格式。

use std::collections::HashMap;

use super::Vector3;
use crate::geometry::vertex::Vertex;

/// 检查顶点数组中是否存在非零法线
///
/// 这是一个全局检查：遇到第一个非零法线即返回 `true`，
/// 即使其余顶点都没有法线。
pub fn has_any_normal(vertices: &[Vertex]) -> bool {
    vertices.iter().any(Vertex::has_normal)
}

/// 从三角形面重建顶点法线
///
/// # 算法
///
/// 1. 将所有顶点法线清零
/// 2. 对于每个三角形 (v0, v1, v2):
///    - face_normal = normalize(cross(v1 - v0, v2 - v0))
///    - 将 face_normal 累加到三个顶点
/// 3. 归一化所有长度非零的顶点法线，长度为零的保持为零向量
///
/// 面积为零的三角形不做保护：其法线为 NaN，并传播到该三角形的三个顶点。
/// 索引越界的三角形被跳过。
///
/// # 示例
///
/// ```rust
/// use meshview::math::geometry::reconstruct_normals;
/// use meshview::geometry::vertex::Vertex;
///
/// let mut vertices = vec![
///     Vertex::from_position([0.0, 0.0, 0.0]),
///     Vertex::from_position([1.0, 0.0, 0.0]),
///     Vertex::from_position([0.0, 1.0, 0.0]),
/// ];
///
/// reconstruct_normals(&mut vertices, &[0, 1, 2]);
/// assert_eq!(vertices[0].normal, [0.0, 0.0, 1.0]);
/// ```
pub fn reconstruct_normals(vertices: &mut [Vertex], indices: &[u32]) {
    for vertex in vertices.iter_mut() {
        vertex.normal = [0.0, 0.0, 0.0];
    }

    for triangle in indices.chunks_exact(3) {
        let Some([i0, i1, i2]) = triangle_indices(triangle, vertices.len()) else {
            continue;
        };

        let p0 = Vector3::from(vertices[i0].position);
        let p1 = Vector3::from(vertices[i1].position);
        let p2 = Vector3::from(vertices[i2].position);

        let face_normal = (p1 - p0).cross(&(p2 - p0)).normalize();

        for i in [i0, i1, i2] {
            accumulate(&mut vertices[i].normal, &face_normal);
        }
    }

    for vertex in vertices.iter_mut() {
        vertex.normal = normalize_nonzero(vertex.normal);
    }
}

/// 计算顶点切线
///
/// 使用 UV 导数公式：
///
/// ```text
/// f       = 1 / (du1 * dv2 - du2 * dv1)
/// tangent = normalize(f * (dv2 * edge1 - dv1 * edge2))
/// ```
///
/// 每个三角形的切线累加到其三个顶点，最后与法线一样归一化。
///
/// UV 参数化退化（行列式为零）时不做保护，结果切线包含 inf/NaN。
pub fn compute_tangents(vertices: &mut [Vertex], indices: &[u32]) {
    for vertex in vertices.iter_mut() {
        vertex.tangent = [0.0, 0.0, 0.0];
    }

    for triangle in indices.chunks_exact(3) {
        let Some([i0, i1, i2]) = triangle_indices(triangle, vertices.len()) else {
            continue;
        };

        let (v0, v1, v2) = (&vertices[i0], &vertices[i1], &vertices[i2]);

        let edge1 = Vector3::from(v1.position) - Vector3::from(v0.position);
        let edge2 = Vector3::from(v2.position) - Vector3::from(v0.position);

        let du1 = v1.texcoord[0] - v0.texcoord[0];
        let dv1 = v1.texcoord[1] - v0.texcoord[1];
        let du2 = v2.texcoord[0] - v0.texcoord[0];
        let dv2 = v2.texcoord[1] - v0.texcoord[1];

        let f = 1.0 / (du1 * dv2 - du2 * dv1);
        let tangent = ((edge1 * dv2 - edge2 * dv1) * f).normalize();

        for i in [i0, i1, i2] {
            accumulate(&mut vertices[i].tangent, &tangent);
        }
    }

    for vertex in vertices.iter_mut() {
        vertex.tangent = normalize_nonzero(vertex.tangent);
    }
}

/// 合并完全相同的顶点并重映射索引
///
/// 只有所有属性逐位相同的顶点才会合并，保留首次出现的顺序。
/// 返回新的顶点数组与索引数组。
pub fn weld_vertices(vertices: &[Vertex], indices: &[u32]) -> (Vec<Vertex>, Vec<u32>) {
    let mut unique: HashMap<[u32; 11], u32> = HashMap::with_capacity(vertices.len());
    let mut welded: Vec<Vertex> = Vec::with_capacity(vertices.len());
    let mut remap: Vec<u32> = Vec::with_capacity(vertices.len());

    for vertex in vertices {
        let key: [u32; 11] = bytemuck::cast(*vertex);
        let index = *unique.entry(key).or_insert_with(|| {
            welded.push(*vertex);
            (welded.len() - 1) as u32
        });
        remap.push(index);
    }

    let indices = indices
        .iter()
        .map(|&i| remap.get(i as usize).copied().unwrap_or(i))
        .collect();

    (welded, indices)
}

// ============================================================================
// 辅助函数
// ============================================================================

/// 将一个三角形的索引转换为 usize，任一越界则返回 None
#[inline]
fn triangle_indices(triangle: &[u32], vertex_count: usize) -> Option<[usize; 3]> {
    let tri = [triangle[0] as usize, triangle[1] as usize, triangle[2] as usize];
    tri.iter().all(|&i| i < vertex_count).then_some(tri)
}

#[inline]
fn accumulate(target: &mut [f32; 3], value: &Vector3) {
    target[0] += value.x;
    target[1] += value.y;
    target[2] += value.z;
}

/// 归一化；长度为零（或非有限）的向量原样返回
#[inline]
fn normalize_nonzero(v: [f32; 3]) -> [f32; 3] {
    let v = Vector3::from(v);
    let length = v.norm();
    if length > 0.0 {
        (v / length).into()
    } else {
        v.into()
    }
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{approx_eq, approx_eq3, EPSILON};

    fn vertex(position: [f32; 3], texcoord: [f32; 2]) -> Vertex {
        Vertex::new(position, [0.0; 3], texcoord, [0.0; 3])
    }

    fn length(v: [f32; 3]) -> f32 {
        Vector3::from(v).norm()
    }

    #[test]
    fn test_has_any_normal_short_circuits_on_first() {
        let mut vertices = vec![Vertex::default(); 4];
        assert!(!has_any_normal(&vertices));

        vertices[0].normal = [0.0, 1.0, 0.0];
        assert!(has_any_normal(&vertices));
    }

    #[test]
    fn test_reconstruct_normals_simple_triangle() {
        let mut vertices = vec![
            vertex([0.0, 0.0, 0.0], [0.0, 0.0]),
            vertex([1.0, 0.0, 0.0], [1.0, 0.0]),
            vertex([0.0, 0.0, 1.0], [0.0, 1.0]),
        ];

        reconstruct_normals(&mut vertices, &[0, 1, 2]);

        // (1,0,0) x (0,0,1) = (0,-1,0)
        for v in &vertices {
            assert!(approx_eq3(v.normal, [0.0, -1.0, 0.0], EPSILON), "{:?}", v.normal);
        }
    }

    #[test]
    fn test_reconstruct_normals_averages_shared_vertex() {
        // 两个互相垂直的三角形共享边 0-1
        let mut vertices = vec![
            vertex([0.0, 0.0, 0.0], [0.0, 0.0]),
            vertex([1.0, 0.0, 0.0], [0.0, 0.0]),
            vertex([0.0, 1.0, 0.0], [0.0, 0.0]),
            vertex([0.0, 0.0, -1.0], [0.0, 0.0]),
        ];

        reconstruct_normals(&mut vertices, &[0, 1, 2, 0, 1, 3]);

        let expected = 1.0 / 2.0_f32.sqrt();
        assert!(approx_eq3(vertices[0].normal, [0.0, expected, expected], 1e-5));
        assert!(approx_eq3(vertices[2].normal, [0.0, 0.0, 1.0], EPSILON));
        assert!(approx_eq3(vertices[3].normal, [0.0, 1.0, 0.0], EPSILON));
    }

    #[test]
    fn test_reconstruct_normals_leaves_unreferenced_vertex_zero() {
        let mut vertices = vec![
            vertex([0.0, 0.0, 0.0], [0.0, 0.0]),
            vertex([1.0, 0.0, 0.0], [0.0, 0.0]),
            vertex([0.0, 1.0, 0.0], [0.0, 0.0]),
            vertex([5.0, 5.0, 5.0], [0.0, 0.0]),
        ];

        reconstruct_normals(&mut vertices, &[0, 1, 2]);

        assert_eq!(vertices[3].normal, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_reconstruct_normals_degenerate_triangle_is_not_finite() {
        let mut vertices = vec![vertex([1.0, 1.0, 1.0], [0.0, 0.0]); 3];

        reconstruct_normals(&mut vertices, &[0, 1, 2]);

        for v in &vertices {
            assert!(v.normal.iter().any(|c| !c.is_finite()), "{:?}", v.normal);
        }
    }

    #[test]
    fn test_reconstruct_normals_skips_out_of_range_triangle() {
        let mut vertices = vec![
            vertex([0.0, 0.0, 0.0], [0.0, 0.0]),
            vertex([1.0, 0.0, 0.0], [0.0, 0.0]),
            vertex([0.0, 1.0, 0.0], [0.0, 0.0]),
        ];

        reconstruct_normals(&mut vertices, &[0, 1, 7]);

        assert_eq!(vertices[0].normal, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_compute_tangents_follows_u_direction() {
        let mut vertices = vec![
            vertex([0.0, 0.0, 0.0], [0.0, 0.0]),
            vertex([2.0, 0.0, 0.0], [1.0, 0.0]),
            vertex([0.0, 2.0, 0.0], [0.0, 1.0]),
        ];

        compute_tangents(&mut vertices, &[0, 1, 2]);

        for v in &vertices {
            assert!(approx_eq3(v.tangent, [1.0, 0.0, 0.0], EPSILON), "{:?}", v.tangent);
            assert!(approx_eq(length(v.tangent), 1.0, 1e-5));
        }
    }

    #[test]
    fn test_compute_tangents_degenerate_uv_is_not_finite() {
        let mut vertices = vec![
            vertex([0.0, 0.0, 0.0], [0.5, 0.5]),
            vertex([1.0, 0.0, 0.0], [0.5, 0.5]),
            vertex([0.0, 1.0, 0.0], [0.5, 0.5]),
        ];

        compute_tangents(&mut vertices, &[0, 1, 2]);

        assert!(vertices[0].tangent.iter().any(|c| !c.is_finite()));
    }

    #[test]
    fn test_weld_vertices_merges_identical() {
        let a = vertex([0.0, 0.0, 0.0], [0.0, 0.0]);
        let b = vertex([1.0, 0.0, 0.0], [0.0, 0.0]);
        let c = vertex([0.0, 1.0, 0.0], [0.0, 0.0]);
        let d = vertex([1.0, 1.0, 0.0], [0.0, 0.0]);

        let vertices = vec![a, b, c, b, d, c];
        let (welded, indices) = weld_vertices(&vertices, &[0, 1, 2, 3, 4, 5]);

        assert_eq!(welded.len(), 4);
        assert_eq!(indices, vec![0, 1, 2, 1, 3, 2]);
    }

    #[test]
    fn test_weld_vertices_keeps_distinct_attributes() {
        let a = vertex([0.0, 0.0, 0.0], [0.0, 0.0]);
        let b = vertex([0.0, 0.0, 0.0], [1.0, 0.0]);

        let (welded, indices) = weld_vertices(&[a, b], &[0, 1]);

        assert_eq!(welded.len(), 2);
        assert_eq!(indices, vec![0, 1]);
    }
}
