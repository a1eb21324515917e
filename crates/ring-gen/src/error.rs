use ring_kernel::KernelError;

/// Errors from gear-ring generation.
///
/// Everything here is terminal for the call that produced it: no partial
/// solid is ever returned, and retrying with identical inputs cannot succeed.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GenerationError {
    /// A single out-of-range input field. Generation does not start.
    #[error("invalid parameter {field}: {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    /// Tooth root collides with the bore.
    #[error("wall too thin: root radius {root_radius:.3} does not clear bore radius {inner_radius:.3}; increase min_width, gear_modulus or tooth count")]
    WallTooThin { root_radius: f64, inner_radius: f64 },

    /// Involute radii degenerate for the given pressure angle / modulus.
    #[error("degenerate involute radii: base {base_radius:.3}, outer {outer_radius:.3}; check pressure_angle and gear_modulus")]
    DegenerateInvolute { base_radius: f64, outer_radius: f64 },

    /// Bore so small the sizing lands below the stable tooth-count floor.
    #[error("tooth count {tooth_count} is too low for stable boolean assembly; enlarge the bore or min_width, or reduce gear_modulus")]
    TooFewTeeth { tooth_count: u32 },

    /// The geometry kernel rejected an operation. Propagated, not retried.
    #[error("kernel error: {0}")]
    Kernel(#[from] KernelError),
}

impl GenerationError {
    /// True for parameter combinations that are internally consistent but
    /// physically infeasible (as opposed to a single out-of-range field).
    pub fn is_infeasible(&self) -> bool {
        matches!(
            self,
            GenerationError::WallTooThin { .. }
                | GenerationError::DegenerateInvolute { .. }
                | GenerationError::TooFewTeeth { .. }
        )
    }
}
