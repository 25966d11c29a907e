//! Centering and uniform scaling.

use mesh_types::{Bounds, Point3};

/// Translate by `-center`, then scale uniformly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitTransform {
    pub center: Point3,
    pub scale: f64,
}

impl FitTransform {
    /// Transform that centers `bounds` on the origin and makes its largest
    /// extent `target_size`. A zero extent leaves the scale at 1.
    pub fn for_bounds(bounds: &Bounds, target_size: f64) -> Self {
        let max_extent = bounds.max_extent();
        let scale = if max_extent > 0.0 {
            target_size / max_extent
        } else {
            1.0
        };
        Self {
            center: bounds.center(),
            scale,
        }
    }

    pub fn apply(&self, p: Point3) -> Point3 {
        Point3::ORIGIN + (p - self.center) * self.scale
    }
}

/// Center `points` on the origin and scale their largest extent to
/// `target_size`. Returns `None` (and touches nothing) for an empty slice.
pub fn center_and_scale(points: &mut [Point3], target_size: f64) -> Option<FitTransform> {
    let fit = FitTransform::for_bounds(&Bounds::from_points(points.iter())?, target_size);
    for p in points.iter_mut() {
        *p = fit.apply(*p);
    }
    Some(fit)
}
