//! Parametric involute gear-ring generator.
//!
//! Turns [`RingParams`] into a watertight, printable ring solid through four
//! stages: validation, gear sizing, involute tooth profiling, and boolean
//! assembly. The whole computation is pure and deterministic (identical
//! parameters always produce the identical solid), and all geometry work
//! goes through the [`Kernel`] capability supplied by the caller.

pub mod assemble;
pub mod config;
pub mod error;
pub mod profile;
pub mod sizing;
pub mod validate;

use ring_kernel::{Kernel, SolidHandle};
use ring_types::RingParams;

pub use config::GenConfig;
pub use error::GenerationError;
pub use sizing::{GearGeometry, MIN_TOOTH_COUNT};

/// A finished ring: the solid plus its tooth count.
///
/// The tooth count rides along because it is not recoverable from the opaque
/// solid without re-running the sizing math.
#[derive(Debug, Clone)]
pub struct GeneratedRing {
    pub solid: SolidHandle,
    pub tooth_count: u32,
}

/// Validate parameters and derive the gear geometry without building any
/// solid. Useful for previewing radii and tooth count cheaply.
pub fn derive_geometry(params: &RingParams) -> Result<GearGeometry, GenerationError> {
    validate::validate(params)?;
    sizing::size_gear(params)
}

/// Generate a ring with the default [`GenConfig`].
pub fn generate(
    kernel: &mut dyn Kernel,
    params: &RingParams,
) -> Result<GeneratedRing, GenerationError> {
    generate_with(kernel, params, &GenConfig::default())
}

/// Generate a ring with an explicit configuration.
pub fn generate_with(
    kernel: &mut dyn Kernel,
    params: &RingParams,
    config: &GenConfig,
) -> Result<GeneratedRing, GenerationError> {
    if config.involute_samples < 2 {
        return Err(GenerationError::InvalidParameter {
            field: "config.involute_samples",
            reason: format!("must be at least 2, got {}", config.involute_samples),
        });
    }

    validate::validate(params)?;
    let geom = sizing::size_gear(params)?;
    tracing::debug!(
        tooth_count = geom.tooth_count,
        pitch_radius = geom.pitch_radius,
        root_radius = geom.root_radius,
        outer_radius = geom.outer_radius,
        "sized gear ring"
    );

    let tooth = profile::tooth_profile(&geom, config.involute_samples);
    let solid = assemble::assemble(kernel, params, &geom, &tooth, config)?;
    tracing::debug!(tooth_count = geom.tooth_count, "assembled gear ring solid");

    Ok(GeneratedRing {
        solid,
        tooth_count: geom.tooth_count,
    })
}
