//! Solid assembly: extrude, replicate, and boolean-combine the ring.
//!
//! The build is a linear pipeline of named stages, each taking and returning
//! immutable solid handles, so the ordering constraints between booleans are
//! explicit. The finished ring is centered on the origin plane, occupying
//! z ∈ [−thickness/2, +thickness/2]; every cutting tool is positioned in
//! that frame (grub holes on the z = 0 mid-plane, chamfers at z = ±t/2).

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use ring_kernel::{Kernel, SolidHandle};
use ring_types::RingParams;

use crate::config::GenConfig;
use crate::error::GenerationError;
use crate::sizing::GearGeometry;

const X_AXIS: [f64; 3] = [1.0, 0.0, 0.0];
const Y_AXIS: [f64; 3] = [0.0, 1.0, 0.0];
const Z_AXIS: [f64; 3] = [0.0, 0.0, 1.0];

/// Run the full assembly for a validated, sized ring.
pub fn assemble(
    kernel: &mut dyn Kernel,
    params: &RingParams,
    geom: &GearGeometry,
    tooth: &[[f64; 2]],
    config: &GenConfig,
) -> Result<SolidHandle, GenerationError> {
    let tooth_solid = extrude_tooth(kernel, tooth, params.thickness)?;
    let teeth = replicate_teeth(kernel, &tooth_solid, geom.tooth_count, params.thickness)?;
    let disk = root_disk(kernel, geom, params.thickness, config)?;
    let body = kernel.union(&disk, &teeth)?;
    let mut ring = cut_bore(kernel, &body, params, geom, config)?;

    if params.grub_screw {
        ring = cut_grub_screws(kernel, &ring, params, geom, config)?;
    }
    if params.gear_chamfer {
        ring = chamfer_teeth(kernel, &ring, params, geom, config)?;
    }
    if params.inner_chamfer {
        ring = chamfer_bore(kernel, &ring, params, geom, config)?;
    }
    Ok(ring)
}

fn inner_radius(params: &RingParams) -> f64 {
    params.inner_diameter / 2.0
}

/// Stage 1: one tooth volume, extruded from the 2D profile.
fn extrude_tooth(
    kernel: &mut dyn Kernel,
    tooth: &[[f64; 2]],
    thickness: f64,
) -> Result<SolidHandle, GenerationError> {
    let profile = kernel.polygon(tooth)?;
    Ok(kernel.extrude_linear(profile, thickness)?)
}

/// Stage 2: rotate one copy per tooth, union them, center on z = 0.
fn replicate_teeth(
    kernel: &mut dyn Kernel,
    tooth: &SolidHandle,
    tooth_count: u32,
    thickness: f64,
) -> Result<SolidHandle, GenerationError> {
    let spacing = TAU / f64::from(tooth_count);
    let mut merged = kernel.rotate(tooth, Z_AXIS, 0.0)?;
    for i in 1..tooth_count {
        let copy = kernel.rotate(tooth, Z_AXIS, f64::from(i) * spacing)?;
        merged = kernel.union(&merged, &copy)?;
    }
    Ok(kernel.translate(&merged, [0.0, 0.0, -thickness / 2.0])?)
}

/// Stage 3: the root disk beneath the teeth, centered on z = 0.
fn root_disk(
    kernel: &mut dyn Kernel,
    geom: &GearGeometry,
    thickness: f64,
    config: &GenConfig,
) -> Result<SolidHandle, GenerationError> {
    let segments = config.ring_segments(geom.tooth_count);
    let disk = kernel.cylinder(geom.root_radius, thickness, segments)?;
    Ok(kernel.translate(&disk, [0.0, 0.0, -thickness / 2.0])?)
}

/// Stage 5: cut the bore through the whole height, overshooting both faces
/// by half the cut margin.
fn cut_bore(
    kernel: &mut dyn Kernel,
    body: &SolidHandle,
    params: &RingParams,
    geom: &GearGeometry,
    config: &GenConfig,
) -> Result<SolidHandle, GenerationError> {
    let radius = inner_radius(params) + params.print_tolerance;
    let height = params.thickness + config.cut_margin;
    let segments = config.ring_segments(geom.tooth_count);
    let bore = kernel.cylinder(radius, height, segments)?;
    let bore = kernel.translate(&bore, [0.0, 0.0, -height / 2.0])?;
    Ok(kernel.subtract(body, &bore)?)
}

/// Stage 7: radial grub screw holes on the z = 0 mid-plane, the first along
/// +X, the optional second along +Y. Each hole runs from just inside the
/// mid-wall out past the outer surface.
fn cut_grub_screws(
    kernel: &mut dyn Kernel,
    ring: &SolidHandle,
    params: &RingParams,
    geom: &GearGeometry,
    config: &GenConfig,
) -> Result<SolidHandle, GenerationError> {
    let radius = params.grub_screw_diameter / 2.0 - 2.0 * params.print_tolerance;
    let length = geom.outer_radius + config.cut_margin;
    let start = geom.outer_radius / 2.0 - config.cut_margin;

    let hole = kernel.cylinder(radius, length, config.screw_segments)?;
    let hole = kernel.rotate(&hole, Y_AXIS, FRAC_PI_2)?;
    let hole = kernel.translate(&hole, [start, 0.0, 0.0])?;
    let ring = kernel.subtract(ring, &hole)?;

    if !params.grub_screw2 {
        return Ok(ring);
    }
    let hole = kernel.cylinder(radius, length, config.screw_segments)?;
    let hole = kernel.rotate(&hole, X_AXIS, -FRAC_PI_2)?;
    let hole = kernel.translate(&hole, [0.0, start, 0.0])?;
    Ok(kernel.subtract(&ring, &hole)?)
}

/// Stage 8: bevel the tooth flanks. A right-triangle profile spanning from
/// just inside the root radius to just outside the outer radius is revolved
/// into a conic cutter and subtracted from both axial faces.
fn chamfer_teeth(
    kernel: &mut dyn Kernel,
    ring: &SolidHandle,
    params: &RingParams,
    geom: &GearGeometry,
    config: &GenConfig,
) -> Result<SolidHandle, GenerationError> {
    let slope = params.gear_chamfer_angle.to_radians().tan();
    let margin = config.cut_margin;
    let drop = (geom.outer_radius - geom.root_radius + 2.0 * margin) * slope;
    let profile = kernel.polygon(&[
        [geom.root_radius - margin * slope, 0.0],
        [geom.outer_radius + margin, -drop],
        [geom.outer_radius + margin, 0.0],
    ])?;
    let segments = config.ring_segments(geom.tooth_count);
    let cutter = kernel.revolve(profile, TAU, segments)?;
    subtract_on_both_faces(kernel, ring, &cutter, params.thickness)
}

/// Stage 9: bevel the bore edge, same revolve-and-subtract pattern with a
/// triangle profile sized by `inner_chamfer_size`.
fn chamfer_bore(
    kernel: &mut dyn Kernel,
    ring: &SolidHandle,
    params: &RingParams,
    geom: &GearGeometry,
    config: &GenConfig,
) -> Result<SolidHandle, GenerationError> {
    let margin = config.cut_margin;
    let size = params.inner_chamfer_size;
    let bore = inner_radius(params);
    let profile = kernel.polygon(&[
        [bore - margin, 0.0],
        [bore - margin, -margin - size],
        [bore + size + margin, 0.0],
    ])?;
    let segments = config.ring_segments(geom.tooth_count);
    let cutter = kernel.revolve(profile, TAU, segments)?;
    subtract_on_both_faces(kernel, ring, &cutter, params.thickness)
}

/// Subtract a revolved cutter (built hanging below z = 0) from the top face,
/// then from the bottom face via a half-turn about X.
fn subtract_on_both_faces(
    kernel: &mut dyn Kernel,
    ring: &SolidHandle,
    cutter: &SolidHandle,
    thickness: f64,
) -> Result<SolidHandle, GenerationError> {
    let half = thickness / 2.0;
    let top = kernel.translate(cutter, [0.0, 0.0, half])?;
    let ring = kernel.subtract(ring, &top)?;
    let flipped = kernel.rotate(cutter, X_AXIS, PI)?;
    let bottom = kernel.translate(&flipped, [0.0, 0.0, -half])?;
    Ok(kernel.subtract(&ring, &bottom)?)
}
