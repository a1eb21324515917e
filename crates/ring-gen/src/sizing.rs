//! Gear sizing: tooth count and radii derived from the physical parameters.

use std::f64::consts::PI;

use ring_types::RingParams;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// Tooth counts below this produce unreliable boolean assembly (the tooth
/// polygon spans too much of the circle). Sizing that lands under the floor
/// is rejected rather than clamped; see DESIGN.md.
pub const MIN_TOOTH_COUNT: u32 = 6;

/// Radii and tooth count derived once per generation. Never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GearGeometry {
    pub tooth_count: u32,
    pub pitch_radius: f64,
    pub base_radius: f64,
    pub outer_radius: f64,
    pub root_radius: f64,
    pub circular_pitch: f64,
    pub addendum: f64,
    pub dedendum: f64,
}

/// Derive the gear geometry, enforcing that the tooth root clears the bore
/// by at least `min_width`.
///
/// Standard spur-gear relations: p = π·m, addendum = m, dedendum =
/// m + clearance, pitch diameter = m·z. The tooth count is the smallest z
/// whose root radius reaches `inner_radius + min_width`, obtained by solving
/// root = m·z/2 − dedendum for z and rounding up.
pub fn size_gear(params: &RingParams) -> Result<GearGeometry, GenerationError> {
    let circular_pitch = PI * params.gear_modulus;
    let addendum = params.gear_modulus;
    let dedendum = params.gear_modulus + params.clearance;

    let inner_radius = params.inner_diameter / 2.0;
    let target_root_radius = inner_radius + params.min_width;
    let tooth_count =
        ((2.0 * (target_root_radius + dedendum)) / params.gear_modulus).ceil() as u32;

    let pitch_radius = params.gear_modulus * tooth_count as f64 / 2.0;
    let base_radius = pitch_radius * params.pressure_angle.to_radians().cos();
    let outer_radius = pitch_radius + params.gear_modulus;
    let root_radius = pitch_radius - dedendum;

    if root_radius <= inner_radius {
        return Err(GenerationError::WallTooThin {
            root_radius,
            inner_radius,
        });
    }
    if base_radius <= 0.0 || outer_radius <= base_radius {
        return Err(GenerationError::DegenerateInvolute {
            base_radius,
            outer_radius,
        });
    }
    if tooth_count < MIN_TOOTH_COUNT {
        return Err(GenerationError::TooFewTeeth { tooth_count });
    }

    Ok(GearGeometry {
        tooth_count,
        pitch_radius,
        base_radius,
        outer_radius,
        root_radius,
        circular_pitch,
        addendum,
        dedendum,
    })
}
