//! The reveal stage automaton driving which screen is shown.

/// Which screen of the card is currently visible.
///
/// Transitions are monotonic and one-directional: `Greeting` and `Question`
/// advance on a dwell timer, `Prompt` waits indefinitely for the user, and
/// `Celebration` is terminal. Illegal transition requests are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RevealStage {
    Greeting,
    Question,
    Prompt,
    Celebration,
}

impl RevealStage {
    /// Stages in presentation order.
    #[must_use]
    pub const fn all() -> [RevealStage; 4] {
        [
            RevealStage::Greeting,
            RevealStage::Question,
            RevealStage::Prompt,
            RevealStage::Celebration,
        ]
    }

    /// Whether this stage advances on its own once the dwell elapses.
    #[must_use]
    pub const fn auto_advances(self) -> bool {
        matches!(self, RevealStage::Greeting | RevealStage::Question)
    }

    /// The stage the dwell timer advances into, if any.
    ///
    /// `Prompt` has no time-driven successor - leaving it requires the
    /// explicit confirmation, and `Celebration` is terminal.
    #[must_use]
    pub const fn timed_successor(self) -> Option<RevealStage> {
        match self {
            RevealStage::Greeting => Some(RevealStage::Question),
            RevealStage::Question => Some(RevealStage::Prompt),
            RevealStage::Prompt | RevealStage::Celebration => None,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, RevealStage::Celebration)
    }

    /// Short label used in logs and the footer.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            RevealStage::Greeting => "greeting",
            RevealStage::Question => "question",
            RevealStage::Prompt => "prompt",
            RevealStage::Celebration => "celebration",
        }
    }
}

impl std::fmt::Display for RevealStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::RevealStage;

    #[test]
    fn timed_successors_are_monotonic() {
        let mut stage = RevealStage::Greeting;
        let mut seen = vec![stage];
        while let Some(next) = stage.timed_successor() {
            assert!(next > stage, "timed transition must move forward");
            stage = next;
            seen.push(stage);
        }
        assert_eq!(
            seen,
            vec![
                RevealStage::Greeting,
                RevealStage::Question,
                RevealStage::Prompt
            ]
        );
    }

    #[test]
    fn prompt_has_no_timed_successor() {
        assert!(RevealStage::Prompt.timed_successor().is_none());
        assert!(!RevealStage::Prompt.auto_advances());
    }

    #[test]
    fn celebration_is_terminal() {
        assert!(RevealStage::Celebration.is_terminal());
        assert!(RevealStage::Celebration.timed_successor().is_none());
    }

    #[test]
    fn all_lists_stages_in_order() {
        let all = RevealStage::all();
        for pair in all.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
