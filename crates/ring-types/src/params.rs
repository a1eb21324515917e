use serde::{Deserialize, Serialize};

/// User-facing parameters for a printable gear ring.
///
/// All lengths are millimeters, all angles degrees. Values are validated by
/// the generator before any geometry work starts; this type itself is plain
/// data and places no constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingParams {
    /// Bore diameter before print tolerance is applied.
    pub inner_diameter: f64,
    /// Axial height of the ring.
    pub thickness: f64,
    /// Minimum radial wall between the bore and the tooth root.
    pub min_width: f64,
    /// Dedendum clearance beyond the module.
    pub clearance: f64,
    /// Gear module: pitch diameter per tooth.
    pub gear_modulus: f64,
    /// Involute pressure angle. Must lie strictly between 0 and 45.
    pub pressure_angle: f64,
    /// Radial clearance added to the bore and to screw holes.
    pub print_tolerance: f64,
    /// Cut a radial grub screw hole along +X.
    pub grub_screw: bool,
    /// Cut a second radial hole along +Y. Only honored when `grub_screw` is set.
    pub grub_screw2: bool,
    /// Screw hole diameter before tolerance.
    pub grub_screw_diameter: f64,
    /// Bevel the tooth flanks on both axial faces.
    pub gear_chamfer: bool,
    /// Tooth chamfer angle.
    pub gear_chamfer_angle: f64,
    /// Bevel the bore edge on both axial faces.
    pub inner_chamfer: bool,
    /// Bore chamfer leg size.
    pub inner_chamfer_size: f64,
}

impl Default for RingParams {
    /// A 71 mm follow-focus ring: the parameter set users start from in the UI.
    fn default() -> Self {
        Self {
            inner_diameter: 71.0,
            thickness: 9.0,
            min_width: 5.0,
            clearance: 0.2,
            gear_modulus: 0.8,
            pressure_angle: 20.0,
            print_tolerance: 0.1,
            grub_screw: true,
            grub_screw2: false,
            grub_screw_diameter: 3.0,
            gear_chamfer: true,
            gear_chamfer_angle: 30.0,
            inner_chamfer: true,
            inner_chamfer_size: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_round_trip_through_json() {
        let params = RingParams::default();
        let json = serde_json::to_string(&params).unwrap();
        let back: RingParams = serde_json::from_str(&json).unwrap();
        assert_eq!(params, back);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let partial: RingParams = serde_json::from_str(r#"{"inner_diameter": 50.0}"#).unwrap();
        assert_eq!(partial.inner_diameter, 50.0);
        assert_eq!(partial.thickness, RingParams::default().thickness);
        assert_eq!(partial.gear_modulus, RingParams::default().gear_modulus);
        assert!(partial.grub_screw);
    }

    #[test]
    fn empty_json_is_the_default_ring() {
        let params: RingParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params, RingParams::default());
    }
}
