//! Show/hide state of the comparison summary.

/// Whether the comparison summary is requested.
///
/// The gate alone does not decide what is drawn; see
/// [`CompareSession::summary_visible`](super::CompareSession::summary_visible).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityGate {
    #[default]
    Hidden,
    Shown,
}

impl VisibilityGate {
    /// Flip between hidden and shown.
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Hidden => Self::Shown,
            Self::Shown => Self::Hidden,
        };
    }

    /// Force the hidden state.
    pub fn hide(&mut self) {
        *self = Self::Hidden;
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, Self::Shown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_starts_hidden() {
        assert!(!VisibilityGate::default().is_shown());
    }

    #[test]
    fn test_gate_toggle_and_hide() {
        let mut gate = VisibilityGate::default();
        gate.toggle();
        assert_eq!(gate, VisibilityGate::Shown);
        gate.toggle();
        assert_eq!(gate, VisibilityGate::Hidden);

        gate.toggle();
        gate.hide();
        gate.hide();
        assert_eq!(gate, VisibilityGate::Hidden);
    }
}
