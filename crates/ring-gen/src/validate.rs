//! Fail-fast parameter validation.
//!
//! Downstream trigonometry and boolean CSG degrade into non-manifold or
//! self-intersecting output on bad input instead of erroring, so the cheap
//! range checks all happen here, before any geometry work.

use ring_types::RingParams;

use crate::error::GenerationError;

fn invalid(field: &'static str, reason: impl Into<String>) -> GenerationError {
    GenerationError::InvalidParameter {
        field,
        reason: reason.into(),
    }
}

/// Check every field of [`RingParams`] against its documented constraint.
/// No side effects; the first violation is returned.
pub fn validate(params: &RingParams) -> Result<(), GenerationError> {
    let numeric_fields = [
        ("inner_diameter", params.inner_diameter),
        ("thickness", params.thickness),
        ("min_width", params.min_width),
        ("clearance", params.clearance),
        ("gear_modulus", params.gear_modulus),
        ("pressure_angle", params.pressure_angle),
        ("print_tolerance", params.print_tolerance),
        ("grub_screw_diameter", params.grub_screw_diameter),
        ("gear_chamfer_angle", params.gear_chamfer_angle),
        ("inner_chamfer_size", params.inner_chamfer_size),
    ];
    for (field, value) in numeric_fields {
        if !value.is_finite() {
            return Err(invalid(field, format!("must be finite, got {value}")));
        }
    }

    if params.gear_modulus <= 0.0 {
        return Err(invalid("gear_modulus", "must be > 0"));
    }
    if params.thickness <= 0.0 {
        return Err(invalid("thickness", "must be > 0"));
    }
    if params.inner_diameter <= 0.0 {
        return Err(invalid("inner_diameter", "must be > 0"));
    }
    if params.min_width < 0.0 {
        return Err(invalid("min_width", "must be >= 0"));
    }
    if params.pressure_angle <= 0.0 || params.pressure_angle >= 45.0 {
        return Err(invalid(
            "pressure_angle",
            "must lie strictly between 0 and 45 degrees, e.g. 20",
        ));
    }
    if params.clearance < 0.0 {
        return Err(invalid("clearance", "must be >= 0"));
    }
    if params.print_tolerance < 0.0 {
        return Err(invalid("print_tolerance", "must be >= 0"));
    }
    if params.grub_screw && params.grub_screw_diameter <= 0.0 {
        return Err(invalid(
            "grub_screw_diameter",
            "must be > 0 when grub_screw is enabled",
        ));
    }
    if params.gear_chamfer && params.gear_chamfer_angle <= 0.0 {
        return Err(invalid(
            "gear_chamfer_angle",
            "must be > 0 when gear_chamfer is enabled",
        ));
    }
    if params.inner_chamfer && params.inner_chamfer_size <= 0.0 {
        return Err(invalid(
            "inner_chamfer_size",
            "must be > 0 when inner_chamfer is enabled",
        ));
    }
    Ok(())
}
