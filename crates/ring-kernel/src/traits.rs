use crate::types::*;

/// Geometry kernel capability consumed by the ring generator.
/// Implemented by TruckKernel (real BREP backend) and MockKernel
/// (deterministic test double).
///
/// Conventions shared by all backends:
/// - profiles are 2D point lists registered with [`Kernel::polygon`] and
///   consumed by the first sweep that uses them;
/// - cylinders and linear extrusions start at z = 0 and extend along +Z;
/// - revolutions interpret profile coordinates as (radial, axial) and spin
///   them around the Z axis;
/// - transforms return a new solid, leaving the input untouched.
pub trait Kernel {
    /// Register a closed 2D polygon from ordered points (implicitly closed
    /// from the last point back to the first).
    fn polygon(&mut self, points: &[[f64; 2]]) -> Result<ProfileId, KernelError>;

    /// Cylinder of the given radius and height. `segments` is an
    /// angular-resolution hint; backends with exact circular geometry may
    /// ignore it.
    fn cylinder(&mut self, radius: f64, height: f64, segments: u32)
        -> Result<SolidHandle, KernelError>;

    /// Linearly extrude a profile from z = 0 to z = +height.
    fn extrude_linear(&mut self, profile: ProfileId, height: f64)
        -> Result<SolidHandle, KernelError>;

    /// Revolve a profile around the Z axis by `angle` radians.
    fn revolve(
        &mut self,
        profile: ProfileId,
        angle: f64,
        segments: u32,
    ) -> Result<SolidHandle, KernelError>;

    /// Boolean union of two solids.
    fn union(&mut self, a: &SolidHandle, b: &SolidHandle) -> Result<SolidHandle, KernelError>;

    /// Boolean subtraction: a minus b.
    fn subtract(&mut self, a: &SolidHandle, b: &SolidHandle) -> Result<SolidHandle, KernelError>;

    /// Rigid translation by a fixed offset.
    fn translate(
        &mut self,
        solid: &SolidHandle,
        offset: [f64; 3],
    ) -> Result<SolidHandle, KernelError>;

    /// Rigid rotation about the origin by `angle` radians around `axis`.
    fn rotate(
        &mut self,
        solid: &SolidHandle,
        axis: [f64; 3],
        angle: f64,
    ) -> Result<SolidHandle, KernelError>;
}

/// Read-only queries on kernel geometry.
pub trait KernelIntrospect {
    /// Axis-aligned bounding box of a solid, if the handle is live.
    fn bounding_box(&self, solid: &SolidHandle) -> Option<Aabb>;
}
