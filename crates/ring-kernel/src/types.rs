/// Opaque handle to a solid in the geometry kernel.
/// Valid only for the kernel session that produced it; never persisted.
#[derive(Debug, Clone)]
pub struct SolidHandle(pub(crate) u64);

impl SolidHandle {
    pub(crate) fn id(&self) -> u64 {
        self.0
    }
}

/// Identifier of a registered 2D profile awaiting extrusion or revolution.
/// Consumed by the first sweep that uses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProfileId(pub u64);

/// Errors from kernel operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum KernelError {
    #[error("boolean operation failed: {reason}")]
    BooleanFailed { reason: String },

    #[error("degenerate profile: {reason}")]
    DegenerateProfile { reason: String },

    #[error("degenerate sweep: {reason}")]
    DegenerateSweep { reason: String },

    #[error("profile not found (already consumed?): {id:?}")]
    ProfileNotFound { id: ProfileId },

    #[error("solid not found: handle {id}")]
    SolidNotFound { id: u64 },

    #[error("kernel error: {message}")]
    Other { message: String },
}

/// Axis-aligned bounding box, used for read-only introspection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Aabb {
    /// Smallest box containing both operands.
    pub fn union(&self, other: &Aabb) -> Aabb {
        let mut min = [0.0; 3];
        let mut max = [0.0; 3];
        for i in 0..3 {
            min[i] = self.min[i].min(other.min[i]);
            max[i] = self.max[i].max(other.max[i]);
        }
        Aabb { min, max }
    }

    /// Box shifted by a fixed offset.
    pub fn translated(&self, offset: [f64; 3]) -> Aabb {
        let mut min = self.min;
        let mut max = self.max;
        for i in 0..3 {
            min[i] += offset[i];
            max[i] += offset[i];
        }
        Aabb { min, max }
    }

    /// The eight corner points.
    pub fn corners(&self) -> [[f64; 3]; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            [lo[0], lo[1], lo[2]],
            [hi[0], lo[1], lo[2]],
            [lo[0], hi[1], lo[2]],
            [hi[0], hi[1], lo[2]],
            [lo[0], lo[1], hi[2]],
            [hi[0], lo[1], hi[2]],
            [lo[0], hi[1], hi[2]],
            [hi[0], hi[1], hi[2]],
        ]
    }

    /// Smallest box containing a point set. None for an empty set.
    pub fn from_points<I: IntoIterator<Item = [f64; 3]>>(points: I) -> Option<Aabb> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = Aabb {
            min: first,
            max: first,
        };
        for p in iter {
            for i in 0..3 {
                bounds.min[i] = bounds.min[i].min(p[i]);
                bounds.max[i] = bounds.max[i].max(p[i]);
            }
        }
        Some(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_covers_both_operands() {
        let a = Aabb {
            min: [0.0, 0.0, 0.0],
            max: [1.0, 1.0, 1.0],
        };
        let b = Aabb {
            min: [-2.0, 0.5, 0.0],
            max: [0.5, 3.0, 0.5],
        };
        let u = a.union(&b);
        assert_eq!(u.min, [-2.0, 0.0, 0.0]);
        assert_eq!(u.max, [1.0, 3.0, 1.0]);
    }

    #[test]
    fn translated_shifts_both_bounds() {
        let a = Aabb {
            min: [0.0, 0.0, 0.0],
            max: [1.0, 2.0, 3.0],
        };
        let t = a.translated([0.0, 0.0, -1.5]);
        assert_eq!(t.min, [0.0, 0.0, -1.5]);
        assert_eq!(t.max, [1.0, 2.0, 1.5]);
    }

    #[test]
    fn from_points_of_empty_set_is_none() {
        assert_eq!(Aabb::from_points(std::iter::empty()), None);
    }
}
