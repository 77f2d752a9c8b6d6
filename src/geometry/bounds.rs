/// 轴对齐包围盒
///
/// 渲染器用它来摆放相机。空几何的包围盒是原点处的零体积盒子。

use crate::math::Vector3;
use super::vertex::Vertex;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vector3,
    pub max: Vector3,
}

impl Bounds {
    #[inline]
    pub fn new(min: Vector3, max: Vector3) -> Self {
        Self { min, max }
    }

    /// 原点处的零体积包围盒
    #[inline]
    pub fn zero() -> Self {
        Self::new(Vector3::zeros(), Vector3::zeros())
    }

    /// 从顶点位置计算包围盒；没有顶点时返回 [`Bounds::zero`]
    pub fn from_vertices(vertices: &[Vertex]) -> Self {
        let mut iter = vertices.iter().map(|v| Vector3::from(v.position));
        let Some(first) = iter.next() else {
            return Self::zero();
        };

        iter.fold(Self::new(first, first), |bounds, p| {
            Self::new(bounds.min.inf(&p), bounds.max.sup(&p))
        })
    }

    /// 两个包围盒的并集
    #[inline]
    pub fn union(&self, other: &Bounds) -> Self {
        Self::new(self.min.inf(&other.min), self.max.sup(&other.max))
    }

    #[inline]
    pub fn center(&self) -> Vector3 {
        (self.min + self.max) * 0.5
    }

    /// 各轴尺寸 (max - min)
    #[inline]
    pub fn extent(&self) -> Vector3 {
        self.max - self.min
    }

    /// 点是否在包围盒内（含边界）
    pub fn contains(&self, point: [f32; 3]) -> bool {
        (0..3).all(|i| self.min[i] <= point[i] && point[i] <= self.max[i])
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_vertices_give_zero_bounds() {
        let bounds = Bounds::from_vertices(&[]);
        assert_eq!(bounds, Bounds::zero());
        assert_eq!(bounds.extent(), Vector3::zeros());
    }

    #[test]
    fn test_bounds_from_vertices() {
        let vertices = [
            Vertex::from_position([1.0, -2.0, 3.0]),
            Vertex::from_position([-1.0, 4.0, 0.5]),
            Vertex::from_position([0.0, 0.0, 7.0]),
        ];

        let bounds = Bounds::from_vertices(&vertices);

        assert_eq!(bounds.min, Vector3::new(-1.0, -2.0, 0.5));
        assert_eq!(bounds.max, Vector3::new(1.0, 4.0, 7.0));
        assert_eq!(bounds.center(), Vector3::new(0.0, 1.0, 3.75));
        for v in &vertices {
            assert!(bounds.contains(v.position));
        }
        assert!(!bounds.contains([2.0, 0.0, 1.0]));
    }

    #[test]
    fn test_bounds_away_from_origin_do_not_include_origin() {
        let bounds = Bounds::from_vertices(&[Vertex::from_position([5.0, 5.0, 5.0])]);
        assert_eq!(bounds.min, Vector3::new(5.0, 5.0, 5.0));
        assert!(!bounds.contains([0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_union() {
        let a = Bounds::new(Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0));
        let b = Bounds::new(Vector3::new(-1.0, 0.5, 0.5), Vector3::new(0.5, 2.0, 0.5));

        let u = a.union(&b);
        assert_eq!(u.min, Vector3::new(-1.0, 0.0, 0.0));
        assert_eq!(u.max, Vector3::new(1.0, 2.0, 1.0));
    }
}
