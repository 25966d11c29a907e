use serde::{Deserialize, Serialize};

use crate::point::Point3;
use crate::vector::Vec3;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point3,
    pub max: Point3,
}

impl Bounds {
    /// Bounds of a point set, `None` when the set is empty.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let mut bounds = Bounds {
            min: first,
            max: first,
        };
        for p in iter {
            bounds.min.x = bounds.min.x.min(p.x);
            bounds.min.y = bounds.min.y.min(p.y);
            bounds.min.z = bounds.min.z.min(p.z);
            bounds.max.x = bounds.max.x.max(p.x);
            bounds.max.y = bounds.max.y.max(p.y);
            bounds.max.z = bounds.max.z.max(p.z);
        }
        Some(bounds)
    }

    pub fn center(&self) -> Point3 {
        Point3::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
            (self.min.z + self.max.z) * 0.5,
        )
    }

    pub fn extents(&self) -> Vec3 {
        self.max - self.min
    }

    /// Largest of the three extents.
    pub fn max_extent(&self) -> f64 {
        let e = self.extents();
        e.x.max(e.y).max(e.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_point_set_has_no_bounds() {
        let points: Vec<Point3> = Vec::new();
        assert!(Bounds::from_points(&points).is_none());
    }

    #[test]
    fn bounds_center_and_extent() {
        let points = [Point3::new(-1.0, 0.0, 2.0), Point3::new(3.0, 1.0, 2.5)];
        let b = Bounds::from_points(&points).unwrap();
        assert_eq!(b.center(), Point3::new(1.0, 0.5, 2.25));
        assert_eq!(b.max_extent(), 4.0);
    }

    #[test]
    fn single_point_has_zero_extent() {
        let points = [Point3::new(7.0, 7.0, 7.0)];
        let b = Bounds::from_points(&points).unwrap();
        assert_eq!(b.max_extent(), 0.0);
    }
}
