//! The deliberately evasive decline button.
//!
//! Not a real protocol: on hover or activation the button's position is
//! reassigned to a fresh pseudo-random spot within the viewport. There is no
//! reachability guarantee - that is the joke.

use valentine_types::EvadePosition;

#[derive(Debug, Default)]
pub struct DeclineButton {
    /// `None` until the first evasion: the button starts in normal flow
    /// next to the yes button.
    position: Option<EvadePosition>,
    evasions: u32,
}

impl DeclineButton {
    /// Jump to a new pseudo-random position.
    pub fn evade(&mut self) -> EvadePosition {
        self.evade_with(rand::random::<f64>(), rand::random::<f64>())
    }

    /// Deterministic variant: mechanism takes the unit samples, policy
    /// (the caller) decides where they come from.
    pub fn evade_with(&mut self, u: f64, v: f64) -> EvadePosition {
        let position = EvadePosition::from_unit(u, v);
        self.position = Some(position);
        self.evasions = self.evasions.saturating_add(1);
        tracing::debug!(
            top = position.top_pct(),
            left = position.left_pct(),
            evasions = self.evasions,
            "Decline button evaded"
        );
        position
    }

    /// Current absolute position, if the button has left normal flow.
    #[must_use]
    pub fn position(&self) -> Option<EvadePosition> {
        self.position
    }

    #[must_use]
    pub fn evasions(&self) -> u32 {
        self.evasions
    }
}

#[cfg(test)]
mod tests {
    use super::DeclineButton;
    use valentine_types::viewport::MAX_PCT;

    #[test]
    fn starts_in_normal_flow() {
        let button = DeclineButton::default();
        assert!(button.position().is_none());
        assert_eq!(button.evasions(), 0);
    }

    #[test]
    fn every_evasion_stays_in_bounds() {
        let mut button = DeclineButton::default();
        for _ in 0..500 {
            let pos = button.evade();
            assert!(pos.top_pct() >= 0.0 && pos.top_pct() <= MAX_PCT);
            assert!(pos.left_pct() >= 0.0 && pos.left_pct() <= MAX_PCT);
        }
        assert_eq!(button.evasions(), 500);
    }

    #[test]
    fn evade_with_is_deterministic() {
        let mut a = DeclineButton::default();
        let mut b = DeclineButton::default();
        assert_eq!(a.evade_with(0.3, 0.7), b.evade_with(0.3, 0.7));
    }
}
