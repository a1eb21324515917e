//! TruckKernel — real geometry kernel wrapping truck's API.

use std::collections::HashMap;

// Import truck types selectively to avoid shadowing std::result::Result
use truck_modeling::builder;
use truck_modeling::topology::Solid;
use truck_modeling::{EuclideanSpace, InnerSpace, Point3, Rad, Vector3};

use crate::primitives;
use crate::traits::{Kernel, KernelIntrospect};
use crate::types::*;

/// Tolerance handed to truck's boolean operators.
const BOOLEAN_TOLERANCE: f64 = 0.05;

/// Real geometry kernel backed by the truck BREP library.
pub struct TruckKernel {
    next_handle: u64,
    next_profile: u64,
    solids: HashMap<u64, Solid>,
    /// Registered 2D profiles awaiting a sweep. Placement (XY vs XZ plane)
    /// is decided by the sweep that consumes them, so raw points are kept.
    profiles: HashMap<u64, Vec<[f64; 2]>>,
}

impl TruckKernel {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            next_profile: 1,
            solids: HashMap::new(),
            profiles: HashMap::new(),
        }
    }

    fn alloc_handle(&mut self) -> SolidHandle {
        let h = SolidHandle(self.next_handle);
        self.next_handle += 1;
        h
    }

    fn store_solid(&mut self, solid: Solid) -> SolidHandle {
        let handle = self.alloc_handle();
        self.solids.insert(handle.id(), solid);
        handle
    }

    fn get_solid(&self, handle: &SolidHandle) -> Result<&Solid, KernelError> {
        self.solids
            .get(&handle.id())
            .ok_or(KernelError::SolidNotFound { id: handle.id() })
    }

    fn take_profile(&mut self, id: ProfileId) -> Result<Vec<[f64; 2]>, KernelError> {
        self.profiles
            .remove(&id.0)
            .ok_or(KernelError::ProfileNotFound { id })
    }
}

impl Default for TruckKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Kernel for TruckKernel {
    fn polygon(&mut self, points: &[[f64; 2]]) -> Result<ProfileId, KernelError> {
        if points.len() < 3 {
            return Err(KernelError::DegenerateProfile {
                reason: format!("polygon needs at least 3 points, got {}", points.len()),
            });
        }
        if points.iter().flatten().any(|c| !c.is_finite()) {
            return Err(KernelError::DegenerateProfile {
                reason: "polygon contains non-finite coordinates".to_string(),
            });
        }
        let id = ProfileId(self.next_profile);
        self.next_profile += 1;
        self.profiles.insert(id.0, points.to_vec());
        Ok(id)
    }

    fn cylinder(
        &mut self,
        radius: f64,
        height: f64,
        _segments: u32,
    ) -> Result<SolidHandle, KernelError> {
        // BREP circles are exact; the segments hint only matters at meshing time.
        let solid = primitives::make_cylinder(radius, height)?;
        Ok(self.store_solid(solid))
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
        let points = self.take_profile(profile)?;
        let face = primitives::polygon_face_xy(&points)?;
        let solid = builder::tsweep(&face, Vector3::new(0.0, 0.0, height));
        Ok(self.store_solid(solid))
    }

    fn revolve(
        &mut self,
        profile: ProfileId,
        angle: f64,
        _segments: u32,
    ) -> Result<SolidHandle, KernelError> {
        if angle == 0.0 || !angle.is_finite() {
            return Err(KernelError::DegenerateSweep {
                reason: format!("revolve angle {angle} must be finite and nonzero"),
            });
        }
        let points = self.take_profile(profile)?;
        let face = primitives::polygon_face_xz(&points)?;
        let solid = builder::rsweep(&face, Point3::origin(), Vector3::unit_z(), Rad(angle));
        Ok(self.store_solid(solid))
    }

    fn union(&mut self, a: &SolidHandle, b: &SolidHandle) -> Result<SolidHandle, KernelError> {
        let solid_a = self.get_solid(a)?.clone();
        let solid_b = self.get_solid(b)?.clone();

        let result = truck_shapeops::or(&solid_a, &solid_b, BOOLEAN_TOLERANCE).ok_or_else(|| {
            KernelError::BooleanFailed {
                reason: "truck or() returned None".to_string(),
            }
        })?;
        Ok(self.store_solid(result))
    }

    fn subtract(&mut self, a: &SolidHandle, b: &SolidHandle) -> Result<SolidHandle, KernelError> {
        let solid_a = self.get_solid(a)?.clone();
        let mut solid_b = self.get_solid(b)?.clone();

        // Subtraction = A ∩ ¬B. not() mutates in place.
        solid_b.not();
        let result =
            truck_shapeops::and(&solid_a, &solid_b, BOOLEAN_TOLERANCE).ok_or_else(|| {
                KernelError::BooleanFailed {
                    reason: "truck and() returned None for subtraction".to_string(),
                }
            })?;
        Ok(self.store_solid(result))
    }

    fn translate(
        &mut self,
        solid: &SolidHandle,
        offset: [f64; 3],
    ) -> Result<SolidHandle, KernelError> {
        let source = self.get_solid(solid)?.clone();
        let moved = builder::translated(&source, Vector3::new(offset[0], offset[1], offset[2]));
        Ok(self.store_solid(moved))
    }

    fn rotate(
        &mut self,
        solid: &SolidHandle,
        axis: [f64; 3],
        angle: f64,
    ) -> Result<SolidHandle, KernelError> {
        let axis_vec = Vector3::new(axis[0], axis[1], axis[2]);
        if axis_vec.magnitude() < 1e-12 {
            return Err(KernelError::Other {
                message: "rotation axis has zero length".to_string(),
            });
        }
        let source = self.get_solid(solid)?.clone();
        let rotated = builder::rotated(
            &source,
            Point3::origin(),
            axis_vec.normalize(),
            Rad(angle),
        );
        Ok(self.store_solid(rotated))
    }
}

impl KernelIntrospect for TruckKernel {
    /// Bounds computed from topological vertices. Curved faces can bulge
    /// past the vertex hull, so this is a diagnostic, not an exact extent.
    fn bounding_box(&self, solid: &SolidHandle) -> Option<Aabb> {
        let s = self.solids.get(&solid.id())?;
        let points = s.boundaries().iter().flat_map(|shell| {
            shell
                .vertex_iter()
                .map(|v| {
                    let p = v.point();
                    [p[0], p[1], p[2]]
                })
                .collect::<Vec<_>>()
        });
        Aabb::from_points(points)
    }
}
