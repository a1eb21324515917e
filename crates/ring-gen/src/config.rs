/// Tunables for profile sampling and boolean assembly.
///
/// These were inline magic numbers in earlier revisions; they are named here
/// because each one guards a specific failure mode of the downstream
/// boolean operations.
#[derive(Debug, Clone, PartialEq)]
pub struct GenConfig {
    /// Involute samples per tooth flank. The closed tooth polygon has
    /// 2·(involute_samples + 1) points. Must be at least 2 for a
    /// non-degenerate tip; higher is smoother.
    pub involute_samples: u32,
    /// Overshoot applied to cutting tools (bore, screw holes, chamfer
    /// cutters) so their faces never sit exactly on the faces they cut —
    /// coincident faces make boolean subtraction unreliable.
    pub cut_margin: f64,
    /// Floor for circular resolution of the root disk, bore and revolved
    /// cutters. Actual resolution is `max(min_segments, 4 · tooth_count)`,
    /// tied to tooth count so the disk silhouette never facets visibly
    /// against tooth spacing.
    pub min_segments: u32,
    /// Circular resolution of grub screw holes.
    pub screw_segments: u32,
}

impl GenConfig {
    /// Circular resolution for ring-sized round features.
    pub fn ring_segments(&self, tooth_count: u32) -> u32 {
        self.min_segments.max(tooth_count * 4)
    }
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            involute_samples: 12,
            cut_margin: 0.4,
            min_segments: 64,
            screw_segments: 128,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_segments_scale_with_tooth_count() {
        let config = GenConfig::default();
        assert_eq!(config.ring_segments(10), 64);
        assert_eq!(config.ring_segments(16), 64);
        assert_eq!(config.ring_segments(104), 416);
    }
}
