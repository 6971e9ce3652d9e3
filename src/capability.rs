/// Optional third-party engines found on the page at startup.
///
/// Computed once and handed to every subsystem instead of each feature
/// probing globals on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Declarative timeline engine (`window.gsap`).
    pub timeline: bool,
    /// Vector animation player (`window.lottie`).
    pub vector: bool,
}

impl Capabilities {
    pub const NONE: Capabilities = Capabilities {
        timeline: false,
        vector: false,
    };

    /// Build a descriptor from a lookup of global names.
    pub fn probe(has_global: impl Fn(&str) -> bool) -> Self {
        Self {
            timeline: has_global("gsap"),
            vector: has_global("lottie"),
        }
    }
}
