//! Renders the engine's firework sparks over the current frame.

use ratatui::Frame;
use ratatui::layout::Position;

use valentine_engine::App;

use crate::theme::{Glyphs, Palette};

/// Paint every live spark onto the frame buffer. Drawn last so the overlay
/// sits above whichever screen is active without stealing pointer targets.
pub fn render(frame: &mut Frame, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let area = frame.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let colors = palette.spark_colors();
    let frames = glyphs.spark_frames;
    let buf = frame.buffer_mut();

    for spark in app.sparks() {
        let x = area.x + (spark.x * f32::from(area.width.saturating_sub(1))).round() as u16;
        let y = area.y + (spark.y * f32::from(area.height.saturating_sub(1))).round() as u16;
        if x >= area.x + area.width || y >= area.y + area.height {
            continue;
        }

        let ramp = ((spark.age_frac() * frames.len() as f32) as usize).min(frames.len() - 1);
        let color = colors[spark.color_seed as usize % colors.len()];

        if let Some(cell) = buf.cell_mut(Position::new(x, y)) {
            cell.set_symbol(frames[ramp]).set_fg(color);
        }
    }
}
