//! TUI rendering for Valentine using ratatui.

mod art;
mod fireworks;
mod input;
mod theme;

pub use input::{InputPump, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use valentine_engine::{App, CellRect, RevealStage, ease_out_cubic};

use self::art::{HAPPY_MASCOT, MOSAIC_GRID, SAD_MASCOT};

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Card
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    match app.stage() {
        RevealStage::Greeting => {
            let text = app.text().greeting.clone();
            draw_headline_screen(frame, app, chunks[0], &text, &palette, &glyphs);
        }
        RevealStage::Question => {
            let text = app.text().question.clone();
            draw_headline_screen(frame, app, chunks[0], &text, &palette, &glyphs);
        }
        RevealStage::Prompt => draw_prompt(frame, app, chunks[0], &palette, &glyphs),
        RevealStage::Celebration => draw_celebration(frame, app, chunks[0], &palette, &glyphs),
    }

    draw_footer(frame, app, chunks[1], &palette);

    // Overlay last, above whichever screen is active.
    if app.fireworks_active() {
        fireworks::render(frame, app, &palette, &glyphs);
    }
}

/// Style for a headline mid fade-in: muted, then secondary, then bold.
fn fade_style(progress: f32, palette: &Palette) -> Style {
    if progress < 0.35 {
        Style::default().fg(palette.text_muted)
    } else if progress < 0.7 {
        Style::default().fg(palette.text_secondary)
    } else {
        styles::headline(palette)
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

fn to_cell_rect(rect: Rect) -> CellRect {
    CellRect::new(rect.x, rect.y, rect.width, rect.height)
}

fn draw_headline_screen(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    text: &str,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let style = fade_style(app.fade_progress(), palette);
    let lines = vec![
        Line::from(Span::styled(text.to_string(), style)),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} {} {}", glyphs.heart_outline, glyphs.heart, glyphs.heart_outline),
            Style::default().fg(palette.primary_dim),
        )),
    ];
    let rect = centered_rect((text.width() as u16).max(5).saturating_add(2), 3, area);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        rect,
    );
}

/// The faint 6x6 memory mosaic behind the prompt, a photo-wall backdrop
/// rendered in glyphs.
fn draw_mosaic(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    if area.width < MOSAIC_GRID || area.height < MOSAIC_GRID {
        return;
    }
    let cell_w = area.width / MOSAIC_GRID;
    let cell_h = area.height / MOSAIC_GRID;

    let mut lines: Vec<Line> = Vec::with_capacity(area.height as usize);
    for row in 0..area.height {
        let on_center_row = cell_h > 0 && row % cell_h == cell_h / 2 && row / cell_h < MOSAIC_GRID;
        if !on_center_row {
            lines.push(Line::from(""));
            continue;
        }
        let mut text = String::with_capacity(area.width as usize);
        for col in 0..area.width {
            let on_center_col =
                cell_w > 0 && col % cell_w == cell_w / 2 && col / cell_w < MOSAIC_GRID;
            if on_center_col {
                let cx = col / cell_w;
                let cy = row / cell_h;
                let glyph = glyphs.mosaic[((cx + cy) as usize) % glyphs.mosaic.len()];
                text.push_str(glyph);
            } else {
                text.push(' ');
            }
        }
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(palette.bg_highlight),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn button_label(text: &str) -> String {
    format!("  {text}  ")
}

fn draw_prompt(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    draw_mosaic(frame, area, palette, glyphs);

    let text = app.text().clone();
    let style = fade_style(app.fade_progress(), palette);

    // Vertical stack: headline, mascot, button row.
    let content = centered_rect(area.width.saturating_sub(4), 14, area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Headline
            Constraint::Length(5), // Mascot
            Constraint::Length(1), // Gap
            Constraint::Length(3), // Buttons
            Constraint::Min(0),
        ])
        .split(content);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text.prompt.clone(), style)))
            .alignment(Alignment::Center),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(SAD_MASCOT)
            .style(Style::default().fg(palette.text_secondary))
            .alignment(Alignment::Center),
        rows[1],
    );

    // Yes button: always in normal flow, centered in the button row.
    let yes_label = button_label(&text.yes_label);
    let no_label = button_label(&text.no_label);
    let yes_w = yes_label.width() as u16;
    let no_w = no_label.width() as u16;

    let button_row = rows[3];
    let (yes_rect, flow_no_rect) = if app.decline_position().is_some() {
        // Decline has left normal flow: yes alone in the middle.
        (centered_rect(yes_w, 3, button_row), None)
    } else {
        let total = yes_w + 4 + no_w;
        let pair = centered_rect(total, 3, button_row);
        let yes = Rect {
            width: yes_w.min(pair.width),
            ..pair
        };
        let no = Rect {
            x: (pair.x + yes_w + 4).min(pair.x + pair.width.saturating_sub(1)),
            y: pair.y,
            width: no_w.min(pair.width.saturating_sub(yes_w + 4)),
            height: pair.height,
        };
        (yes, Some(no))
    };

    let no_rect = flow_no_rect.unwrap_or_else(|| {
        // Evaded: absolute position within the whole card area.
        let pos = app.decline_position().unwrap_or_default();
        let (x, y) = pos.resolve(area.width, area.height, no_w, 3);
        Rect {
            x: area.x + x,
            y: area.y + y,
            width: no_w.min(area.width),
            height: 3.min(area.height),
        }
    });

    render_button(frame, yes_rect, &yes_label, styles::yes_button(palette), palette);
    render_button(frame, no_rect, &no_label, styles::no_button(palette), palette);

    app.update_prompt_layout(to_cell_rect(yes_rect), to_cell_rect(no_rect));
}

fn render_button(frame: &mut Frame, rect: Rect, label: &str, style: Style, palette: &Palette) {
    if rect.width == 0 || rect.height == 0 {
        return;
    }
    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary_dim));
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(label.to_string(), style)))
            .alignment(Alignment::Center)
            .block(block),
        rect,
    );
}

fn draw_celebration(
    frame: &mut Frame,
    app: &mut App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let text = app.text().clone();
    let style = fade_style(app.fade_progress(), palette);

    let frame_art = app.playback_frame();
    let art_height = frame_art.lines().count() as u16;
    let panel_height = art_height.saturating_add(2);
    let panel_width = 40.min(area.width.saturating_sub(2)).max(10);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                // Headline
            Constraint::Length(panel_height),     // Playback panel
            Constraint::Length(1),                // Sound hint line
            Constraint::Length(5),                // Mascot
            Constraint::Min(0),
        ])
        .split(centered_rect(
            area.width.saturating_sub(2),
            panel_height + 9,
            area,
        ));

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text.celebration.clone(), style)))
            .alignment(Alignment::Center),
        rows[0],
    );

    // Playback panel, framed like a tiny video player.
    let panel = centered_rect(panel_width, panel_height, rows[1]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary))
        .style(Style::default().bg(palette.bg_panel))
        .title(Line::from(vec![Span::styled(
            format!(" {} now playing ", glyphs.heart),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )]));
    frame.render_widget(Clear, panel);
    frame.render_widget(
        Paragraph::new(frame_art)
            .style(Style::default().fg(palette.crimson))
            .alignment(Alignment::Center)
            .block(block),
        panel,
    );

    // "Tap for sound" overlay: slides up into place, dismissed by the
    // explicit gesture that unlocks audio.
    if app.sound_hint_visible() && panel.height >= 2 && panel.width >= 4 {
        let label = format!(" {} Tap for sound ", glyphs.note);
        let hint_w = (label.width() as u16).min(panel.width);
        let slide = ((1.0 - ease_out_cubic(app.fade_progress())) * 2.0).round() as u16;
        let hint = Rect {
            x: panel.x + (panel.width.saturating_sub(hint_w)) / 2,
            y: (panel.y + 1 + slide).min(panel.y + panel.height.saturating_sub(1)),
            width: hint_w,
            height: 1,
        };
        frame.render_widget(Clear, hint);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                label,
                Style::default()
                    .fg(palette.bg_dark)
                    .bg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ))),
            hint,
        );
        app.update_sound_hint_layout(Some(to_cell_rect(hint)));

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "If sound doesn't start, press s (or tap the button) once",
                Style::default().fg(palette.text_muted),
            )))
            .alignment(Alignment::Center),
            rows[2],
        );
    } else {
        app.update_sound_hint_layout(None);
    }

    frame.render_widget(
        Paragraph::new(HAPPY_MASCOT)
            .style(Style::default().fg(palette.success))
            .alignment(Alignment::Center),
        rows[3],
    );
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let mut spans = vec![Span::raw(" ")];
    match app.stage() {
        RevealStage::Greeting | RevealStage::Question => {
            spans.push(Span::styled("q", styles::key_highlight(palette)));
            spans.push(Span::styled(" quit ", styles::key_hint(palette)));
        }
        RevealStage::Prompt => {
            spans.push(Span::styled("y", styles::key_highlight(palette)));
            spans.push(Span::styled(" yes  ", styles::key_hint(palette)));
            spans.push(Span::styled("n", styles::key_highlight(palette)));
            spans.push(Span::styled(" no (good luck)  ", styles::key_hint(palette)));
            spans.push(Span::styled("q", styles::key_highlight(palette)));
            spans.push(Span::styled(" quit ", styles::key_hint(palette)));
        }
        RevealStage::Celebration => {
            if !app.sound_enabled() {
                spans.push(Span::styled("s", styles::key_highlight(palette)));
                spans.push(Span::styled(" sound  ", styles::key_hint(palette)));
            }
            spans.push(Span::styled("q", styles::key_highlight(palette)));
            spans.push(Span::styled(" quit ", styles::key_hint(palette)));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
