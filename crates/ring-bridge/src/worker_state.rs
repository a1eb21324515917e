use ring_gen::GeneratedRing;

/// Worker-side state across generation requests.
///
/// Holds the most recent successful generation so the meshing/export
/// collaborators can consume it. A failed generation leaves it untouched:
/// the UI keeps showing the previous ring instead of clearing it.
#[derive(Debug, Default)]
pub struct WorkerState {
    current: Option<GeneratedRing>,
}

impl WorkerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last successfully generated ring, if any.
    pub fn current(&self) -> Option<&GeneratedRing> {
        self.current.as_ref()
    }

    pub(crate) fn store(&mut self, ring: GeneratedRing) {
        self.current = Some(ring);
    }
}
