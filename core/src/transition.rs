/// Outcome of a call that may or may not change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The state changed.
    Applied,
    /// The entity was already in the requested state. Nothing changed.
    Redundant,
}

impl Transition {
    pub fn is_applied(self) -> bool {
        self == Transition::Applied
    }

    pub fn is_redundant(self) -> bool {
        self == Transition::Redundant
    }
}
