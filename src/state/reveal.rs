/// How a block plays its entrance animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Entrance {
    /// Right after the first render (hero blocks).
    Immediate,
    /// The first time the block intersects the viewport.
    #[default]
    OnScroll,
}

/// Entrance progress of a single block. Once `Revealed`, always `Revealed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

impl RevealState {
    /// Folds one visibility report into the state.
    pub fn observe(self, intersecting: bool) -> Self {
        match (self, intersecting) {
            (RevealState::Pending, true) => RevealState::Revealed,
            (state, _) => state,
        }
    }

    pub fn is_revealed(self) -> bool {
        matches!(self, RevealState::Revealed)
    }

    pub fn class(self) -> &'static str {
        match self {
            RevealState::Pending => "reveal",
            RevealState::Revealed => "reveal reveal--shown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_pending_until_visible() {
        let state = RevealState::default().observe(false).observe(false);
        assert_eq!(state, RevealState::Pending);
    }

    #[test]
    fn reveals_on_first_intersection() {
        assert!(RevealState::Pending.observe(true).is_revealed());
    }

    #[test]
    fn never_replays_after_scrolling_out_and_back() {
        let visibility = [true, false, true, false, false, true];
        let mut state = RevealState::Pending;
        let mut transitions = 0;
        for visible in visibility {
            let next = state.observe(visible);
            if next != state {
                transitions += 1;
            }
            state = next;
        }
        assert_eq!(state, RevealState::Revealed);
        assert_eq!(transitions, 1);
    }

    #[test]
    fn default_entrance_waits_for_scroll() {
        assert_eq!(Entrance::default(), Entrance::OnScroll);
    }
}
