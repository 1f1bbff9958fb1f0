//! The reveal sequencer - the four-state heart of the card.

use std::time::Duration;

use valentine_types::RevealStage;

/// A transition that happened during a tick or confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageChange {
    pub from: RevealStage,
    pub to: RevealStage,
}

/// Drives `Greeting -> Question -> Prompt` on dwell time and
/// `Prompt -> Celebration` on explicit confirmation.
///
/// All timing is frame-delta accumulation: the owner feeds measured deltas
/// in, so there are no timers that could fire after teardown. At most one
/// transition happens per call, and the accumulator resets on entry to each
/// stage, so a stage can never be skipped.
#[derive(Debug)]
pub struct Sequencer {
    stage: RevealStage,
    dwell: Duration,
    in_stage: Duration,
}

impl Sequencer {
    #[must_use]
    pub fn new(dwell: Duration) -> Self {
        Self {
            stage: RevealStage::Greeting,
            dwell,
            in_stage: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn stage(&self) -> RevealStage {
        self.stage
    }

    /// Advance the dwell clock. Returns the transition if the current stage
    /// auto-advanced; `Prompt` and `Celebration` ignore time entirely.
    pub fn tick(&mut self, delta: Duration) -> Option<StageChange> {
        if !self.stage.auto_advances() {
            // Prompt waits for the user; Celebration is terminal. The clock
            // is not even accumulated, so no amount of elapsed time can
            // produce a transition here.
            return None;
        }

        self.in_stage = self.in_stage.saturating_add(delta);
        if self.in_stage < self.dwell {
            return None;
        }

        let from = self.stage;
        let to = from.timed_successor()?;
        self.enter(to);
        tracing::debug!(%from, %to, "Stage auto-advanced");
        Some(StageChange { from, to })
    }

    /// The user said yes. Only legal from `Prompt`; idempotent otherwise.
    pub fn confirm(&mut self) -> Option<StageChange> {
        if self.stage != RevealStage::Prompt {
            return None;
        }
        self.enter(RevealStage::Celebration);
        tracing::info!("Confirmed - entering celebration");
        Some(StageChange {
            from: RevealStage::Prompt,
            to: RevealStage::Celebration,
        })
    }

    fn enter(&mut self, stage: RevealStage) {
        self.stage = stage;
        self.in_stage = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::Sequencer;
    use std::time::Duration;
    use valentine_types::RevealStage;

    const DWELL: Duration = Duration::from_secs(5);

    fn ticked(seq: &mut Sequencer, total: Duration, step: Duration) -> usize {
        let mut transitions = 0;
        let mut elapsed = Duration::ZERO;
        while elapsed < total {
            if seq.tick(step).is_some() {
                transitions += 1;
            }
            elapsed += step;
        }
        transitions
    }

    #[test]
    fn advances_exactly_once_per_dwell() {
        let mut seq = Sequencer::new(DWELL);
        let transitions = ticked(&mut seq, Duration::from_secs(5), Duration::from_millis(16));
        assert_eq!(transitions, 1);
        assert_eq!(seq.stage(), RevealStage::Question);
    }

    #[test]
    fn reaches_prompt_after_two_dwells_and_stops() {
        let mut seq = Sequencer::new(DWELL);
        let transitions = ticked(&mut seq, Duration::from_secs(60), Duration::from_millis(16));
        assert_eq!(transitions, 2, "no duplicate or skipped transitions");
        assert_eq!(seq.stage(), RevealStage::Prompt);
    }

    #[test]
    fn one_oversized_delta_cannot_skip_a_stage() {
        let mut seq = Sequencer::new(DWELL);
        seq.tick(Duration::from_secs(3600));
        assert_eq!(seq.stage(), RevealStage::Question);
    }

    #[test]
    fn prompt_waits_indefinitely() {
        let mut seq = Sequencer::new(DWELL);
        seq.tick(Duration::from_secs(10));
        seq.tick(Duration::from_secs(10));
        assert_eq!(seq.stage(), RevealStage::Prompt);
        for _ in 0..1000 {
            assert!(seq.tick(Duration::from_secs(10)).is_none());
        }
        assert_eq!(seq.stage(), RevealStage::Prompt);
    }

    #[test]
    fn confirm_only_legal_from_prompt() {
        let mut seq = Sequencer::new(DWELL);
        assert!(seq.confirm().is_none());
        assert_eq!(seq.stage(), RevealStage::Greeting);

        seq.tick(DWELL);
        seq.tick(DWELL);
        assert_eq!(seq.stage(), RevealStage::Prompt);

        let change = seq.confirm().expect("confirm from prompt transitions");
        assert_eq!(change.to, RevealStage::Celebration);
    }

    #[test]
    fn confirm_is_idempotent() {
        let mut seq = Sequencer::new(DWELL);
        seq.tick(DWELL);
        seq.tick(DWELL);
        assert!(seq.confirm().is_some());
        for _ in 0..10 {
            assert!(seq.confirm().is_none());
        }
        assert_eq!(seq.stage(), RevealStage::Celebration);
    }

    #[test]
    fn celebration_ignores_time() {
        let mut seq = Sequencer::new(DWELL);
        seq.tick(DWELL);
        seq.tick(DWELL);
        seq.confirm();
        assert!(seq.tick(Duration::from_secs(3600)).is_none());
        assert_eq!(seq.stage(), RevealStage::Celebration);
    }

    #[test]
    fn zero_dwell_advances_on_first_tick() {
        let mut seq = Sequencer::new(Duration::ZERO);
        assert!(seq.tick(Duration::ZERO).is_some());
        assert_eq!(seq.stage(), RevealStage::Question);
    }
}
