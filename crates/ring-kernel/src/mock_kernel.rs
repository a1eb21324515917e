//! MockKernel — deterministic test double implementing Kernel + KernelIntrospect.
//!
//! Tracks axis-aligned bounds per solid and records every operation, so
//! callers can assert pipeline shape (replication counts, centering, feature
//! toggles) without running real boolean geometry.

use std::collections::HashMap;

use crate::traits::{Kernel, KernelIntrospect};
use crate::types::*;

/// One recorded kernel call with the arguments that shape geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum OpRecord {
    Polygon { points: usize },
    Cylinder { radius: f64, height: f64, segments: u32 },
    ExtrudeLinear { height: f64 },
    Revolve { angle: f64, segments: u32 },
    Union,
    Subtract,
    Translate { offset: [f64; 3] },
    Rotate { axis: [f64; 3], angle: f64 },
}

/// 2D extent of a registered profile.
#[derive(Debug, Clone, Copy)]
struct ProfileBounds {
    min: [f64; 2],
    max: [f64; 2],
}

/// Deterministic test double for the geometry kernel.
pub struct MockKernel {
    next_handle: u64,
    next_profile: u64,
    solids: HashMap<u64, Aabb>,
    profiles: HashMap<u64, ProfileBounds>,
    ops: Vec<OpRecord>,
}

impl MockKernel {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            next_profile: 1,
            solids: HashMap::new(),
            profiles: HashMap::new(),
            ops: Vec::new(),
        }
    }

    /// Every operation executed so far, in call order.
    pub fn ops(&self) -> &[OpRecord] {
        &self.ops
    }

    fn alloc_handle(&mut self, bounds: Aabb) -> SolidHandle {
        let h = SolidHandle(self.next_handle);
        self.next_handle += 1;
        self.solids.insert(h.id(), bounds);
        h
    }

    fn get_bounds(&self, handle: &SolidHandle) -> Result<Aabb, KernelError> {
        self.solids
            .get(&handle.id())
            .copied()
            .ok_or(KernelError::SolidNotFound { id: handle.id() })
    }

    fn take_profile(&mut self, id: ProfileId) -> Result<ProfileBounds, KernelError> {
        self.profiles
            .remove(&id.0)
            .ok_or(KernelError::ProfileNotFound { id })
    }
}

impl Default for MockKernel {
    fn default() -> Self {
        Self::new()
    }
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Rodrigues rotation of a point about a unit axis through the origin.
fn rotate_point(p: [f64; 3], axis: [f64; 3], angle: f64) -> [f64; 3] {
    let (s, c) = angle.sin_cos();
    let kxp = cross(axis, p);
    let kdp = dot(axis, p);
    let mut out = [0.0; 3];
    for i in 0..3 {
        out[i] = p[i] * c + kxp[i] * s + axis[i] * kdp * (1.0 - c);
    }
    out
}

impl Kernel for MockKernel {
    fn polygon(&mut self, points: &[[f64; 2]]) -> Result<ProfileId, KernelError> {
        if points.len() < 3 {
            return Err(KernelError::DegenerateProfile {
                reason: format!("polygon needs at least 3 points, got {}", points.len()),
            });
        }
        let mut min = points[0];
        let mut max = points[0];
        for p in points {
            for i in 0..2 {
                if !p[i].is_finite() {
                    return Err(KernelError::DegenerateProfile {
                        reason: "polygon contains non-finite coordinates".to_string(),
                    });
                }
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }
        self.ops.push(OpRecord::Polygon {
            points: points.len(),
        });
        let id = ProfileId(self.next_profile);
        self.next_profile += 1;
        self.profiles.insert(id.0, ProfileBounds { min, max });
        Ok(id)
    }

    fn cylinder(
        &mut self,
        radius: f64,
        height: f64,
        segments: u32,
    ) -> Result<SolidHandle, KernelError> {
        if radius <= 0.0 || height <= 0.0 {
            return Err(KernelError::DegenerateSweep {
                reason: format!("cylinder radius {radius} / height {height} must be positive"),
            });
        }
        self.ops.push(OpRecord::Cylinder {
            radius,
            height,
            segments,
        });
        Ok(self.alloc_handle(Aabb {
            min: [-radius, -radius, 0.0],
            max: [radius, radius, height],
        }))
    }

    fn extrude_linear(
        &mut self,
        profile: ProfileId,
        height: f64,
    ) -> Result<SolidHandle, KernelError> {
        if height <= 0.0 {
            return Err(KernelError::DegenerateSweep {
                reason: format!("extrusion height {height} must be positive"),
            });
        }
        let bounds = self.take_profile(profile)?;
        self.ops.push(OpRecord::ExtrudeLinear { height });
        Ok(self.alloc_handle(Aabb {
            min: [bounds.min[0], bounds.min[1], 0.0],
            max: [bounds.max[0], bounds.max[1], height],
        }))
    }

    fn revolve(
        &mut self,
        profile: ProfileId,
        angle: f64,
        segments: u32,
    ) -> Result<SolidHandle, KernelError> {
        if angle == 0.0 || !angle.is_finite() {
            return Err(KernelError::DegenerateSweep {
                reason: format!("revolve angle {angle} must be finite and nonzero"),
            });
        }
        let bounds = self.take_profile(profile)?;
        self.ops.push(OpRecord::Revolve { angle, segments });
        // Full-revolution bounds: the profile's outermost radius swept around Z.
        let outer = bounds.min[0].abs().max(bounds.max[0].abs());
        Ok(self.alloc_handle(Aabb {
            min: [-outer, -outer, bounds.min[1]],
            max: [outer, outer, bounds.max[1]],
        }))
    }

    fn union(&mut self, a: &SolidHandle, b: &SolidHandle) -> Result<SolidHandle, KernelError> {
        let bounds_a = self.get_bounds(a)?;
        let bounds_b = self.get_bounds(b)?;
        self.ops.push(OpRecord::Union);
        Ok(self.alloc_handle(bounds_a.union(&bounds_b)))
    }

    fn subtract(&mut self, a: &SolidHandle, b: &SolidHandle) -> Result<SolidHandle, KernelError> {
        let bounds_a = self.get_bounds(a)?;
        self.get_bounds(b)?;
        self.ops.push(OpRecord::Subtract);
        // Removing material never grows A; bounds kept as-is.
        Ok(self.alloc_handle(bounds_a))
    }

    fn translate(
        &mut self,
        solid: &SolidHandle,
        offset: [f64; 3],
    ) -> Result<SolidHandle, KernelError> {
        let bounds = self.get_bounds(solid)?;
        self.ops.push(OpRecord::Translate { offset });
        Ok(self.alloc_handle(bounds.translated(offset)))
    }

    fn rotate(
        &mut self,
        solid: &SolidHandle,
        axis: [f64; 3],
        angle: f64,
    ) -> Result<SolidHandle, KernelError> {
        let norm = dot(axis, axis).sqrt();
        if norm < 1e-12 {
            return Err(KernelError::Other {
                message: "rotation axis has zero length".to_string(),
            });
        }
        let unit = [axis[0] / norm, axis[1] / norm, axis[2] / norm];
        let bounds = self.get_bounds(solid)?;
        self.ops.push(OpRecord::Rotate { axis, angle });
        let rotated = bounds
            .corners()
            .into_iter()
            .map(|c| rotate_point(c, unit, angle));
        // corners() is never empty, so from_points always succeeds here.
        let rotated_bounds = Aabb::from_points(rotated).ok_or(KernelError::Other {
            message: "empty rotation bounds".to_string(),
        })?;
        Ok(self.alloc_handle(rotated_bounds))
    }
}

impl KernelIntrospect for MockKernel {
    fn bounding_box(&self, solid: &SolidHandle) -> Option<Aabb> {
        self.solids.get(&solid.id()).copied()
    }
}
