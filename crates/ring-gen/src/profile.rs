//! Involute tooth profile: the closed 2D outline of exactly one tooth,
//! ready for extrusion.

use std::f64::consts::PI;

use crate::sizing::GearGeometry;

/// Build the closed polygon of one tooth in the ring's local angular frame,
/// with the first flank starting on the base circle at angle 0.
///
/// Each flank is the involute of the base circle, sampled `samples + 1`
/// times with `angle = max_angle · t^(2/3)` easing — the cube-root exponent
/// concentrates samples near the base, where curvature is highest. The
/// second flank mirrors the first across the tooth's angular width and is
/// walked tip-to-base, so concatenation closes the loop in one consistent
/// winding with no seam. Output length is `2 · (samples + 1)`.
///
/// `samples` must be at least 2 for a non-degenerate tip; the caller
/// (`generate_with`) enforces this.
pub fn tooth_profile(geom: &GearGeometry, samples: u32) -> Vec<[f64; 2]> {
    debug_assert!(samples >= 2, "tooth flank needs at least 2 samples");

    let base = geom.base_radius;

    // Unwound string angles at the tip and at the pitch circle.
    let max_tan_length = (geom.outer_radius.powi(2) - base.powi(2)).sqrt();
    let max_angle = max_tan_length / base;
    let tan_len_at_pitch = (geom.pitch_radius.powi(2) - base.powi(2)).sqrt();
    let angle_at_pitch = tan_len_at_pitch / base;

    // Centering correction so the tooth is symmetric about its mid-flank.
    let diff_angle = angle_at_pitch - angle_at_pitch.atan();
    let tooth_width = PI / geom.tooth_count as f64 + 2.0 * diff_angle;

    let mut points = Vec::with_capacity(2 * (samples as usize + 1));

    // First flank: base circle outward to the tip.
    for i in 0..=samples {
        let t = f64::from(i) / f64::from(samples);
        let angle = max_angle * t.powf(2.0 / 3.0);
        let tan_length = angle * base;
        let (sin, cos) = angle.sin_cos();
        points.push([cos * base + sin * tan_length, sin * base - cos * tan_length]);
    }

    // Second flank: mirrored across the tooth width, walked tip to base.
    for i in (0..=samples).rev() {
        let t = f64::from(i) / f64::from(samples);
        let angle = max_angle * t.powf(2.0 / 3.0);
        let tan_length = angle * base;
        let opp = tooth_width - angle;
        let (sin, cos) = opp.sin_cos();
        points.push([cos * base - sin * tan_length, sin * base + cos * tan_length]);
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sizing::size_gear;
    use approx::assert_relative_eq;
    use ring_types::RingParams;
    use std::f64::consts::TAU;

    fn reference_geometry() -> GearGeometry {
        size_gear(&RingParams::default()).unwrap()
    }

    fn radius(p: [f64; 2]) -> f64 {
        (p[0] * p[0] + p[1] * p[1]).sqrt()
    }

    #[test]
    fn profile_has_2r_plus_2_points() {
        let geom = reference_geometry();
        assert_eq!(tooth_profile(&geom, 12).len(), 26);
        assert_eq!(tooth_profile(&geom, 2).len(), 6);
    }

    #[test]
    fn flanks_start_and_end_on_the_base_circle() {
        let geom = reference_geometry();
        let points = tooth_profile(&geom, 12);

        let first = points[0];
        assert_relative_eq!(first[0], geom.base_radius, epsilon = 1e-9);
        assert_relative_eq!(first[1], 0.0, epsilon = 1e-9);

        let last = *points.last().unwrap();
        assert_relative_eq!(radius(last), geom.base_radius, epsilon = 1e-9);
        assert!(last[1] > 0.0, "second flank ends across the tooth width");
    }

    #[test]
    fn all_points_lie_between_base_and_outer_radius() {
        let geom = reference_geometry();
        let points = tooth_profile(&geom, 12);
        for p in &points {
            let r = radius(*p);
            assert!(r >= geom.base_radius - 1e-9, "point below base circle: {r}");
            assert!(r <= geom.outer_radius + 1e-9, "point past tip: {r}");
        }
    }

    #[test]
    fn tip_reaches_the_outer_radius_on_both_flanks() {
        let geom = reference_geometry();
        let samples = 12usize;
        let points = tooth_profile(&geom, samples as u32);
        // Last sample of flank A and first sample of flank B are the tip.
        assert_relative_eq!(radius(points[samples]), geom.outer_radius, epsilon = 1e-9);
        assert_relative_eq!(
            radius(points[samples + 1]),
            geom.outer_radius,
            epsilon = 1e-9
        );
    }

    #[test]
    fn tooth_fits_inside_its_angular_pitch() {
        let geom = reference_geometry();
        let points = tooth_profile(&geom, 12);
        let spacing = TAU / geom.tooth_count as f64;

        let mut min_theta = f64::MAX;
        let mut max_theta = f64::MIN;
        for p in &points {
            let theta = p[1].atan2(p[0]);
            min_theta = min_theta.min(theta);
            max_theta = max_theta.max(theta);
        }
        assert!(
            max_theta - min_theta <= spacing + 1e-9,
            "tooth spans {} rad but pitch is {} rad",
            max_theta - min_theta,
            spacing
        );
    }

    #[test]
    fn replicated_teeth_tile_the_full_circle() {
        let geom = reference_geometry();
        let spacing = TAU / geom.tooth_count as f64;
        let total = spacing * geom.tooth_count as f64;
        assert_relative_eq!(total, TAU, epsilon = 1e-9);
    }

    #[test]
    fn profile_is_deterministic() {
        let geom = reference_geometry();
        assert_eq!(tooth_profile(&geom, 12), tooth_profile(&geom, 12));
    }
}
