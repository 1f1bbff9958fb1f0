//! Viewport-relative positioning for the evasive decline button.

/// Maximum percentage for either axis. 80% leaves room for the button
/// itself, so a position never pushes it off screen.
pub const MAX_PCT: f64 = 80.0;

/// A viewport-relative position expressed in percent of width/height.
///
/// Invariant: `top_pct` and `left_pct` are always within `[0, MAX_PCT]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvadePosition {
    top_pct: f64,
    left_pct: f64,
}

impl EvadePosition {
    /// Map two unit-interval samples onto the allowed position range.
    ///
    /// Out-of-range inputs are clamped, so the bounds invariant holds for
    /// any caller-supplied values.
    #[must_use]
    pub fn from_unit(u: f64, v: f64) -> Self {
        Self {
            top_pct: (u.clamp(0.0, 1.0) * MAX_PCT).min(MAX_PCT),
            left_pct: (v.clamp(0.0, 1.0) * MAX_PCT).min(MAX_PCT),
        }
    }

    #[must_use]
    pub fn top_pct(&self) -> f64 {
        self.top_pct
    }

    #[must_use]
    pub fn left_pct(&self) -> f64 {
        self.left_pct
    }

    /// Resolve to cell coordinates within a `width` x `height` viewport,
    /// keeping a `label_width` x `label_height` button fully on screen.
    #[must_use]
    pub fn resolve(&self, width: u16, height: u16, label_width: u16, label_height: u16) -> (u16, u16) {
        let x = (f64::from(width) * self.left_pct / 100.0).round() as u16;
        let y = (f64::from(height) * self.top_pct / 100.0).round() as u16;
        let max_x = width.saturating_sub(label_width);
        let max_y = height.saturating_sub(label_height);
        (x.min(max_x), y.min(max_y))
    }
}

/// A rectangle in terminal cell coordinates, used for pointer hit-testing.
///
/// The engine stays free of TUI dependencies; the renderer reports the cell
/// rectangles it laid out, and input events are tested against them here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl CellRect {
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.x
            && col < self.x.saturating_add(self.width)
            && row >= self.y
            && row < self.y.saturating_add(self.height)
    }
}

impl Default for EvadePosition {
    /// Starting position: centered-ish, as if laid out in normal flow.
    fn default() -> Self {
        Self {
            top_pct: 60.0,
            left_pct: 55.0,
        }
    }
}
