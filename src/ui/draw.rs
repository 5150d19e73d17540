//! Rendering of the dashboard surfaces.
//!
//! Pure read of the app state: the event loop owns all transitions, this
//! module only paints them. Surfaces come pre-resolved from the app; each
//! rect is clipped to the frame so a not-yet-debounced resize never draws
//! out of bounds.

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Control};
use crate::ui::theme::Palette;

/// Main draw function
pub fn draw(f: &mut Frame, app: &App, now: Instant) {
    let palette = app.palette();
    let surfaces = app.surfaces();

    // Theme background over the whole frame
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.foreground)),
        f.area(),
    );

    let frame_area = f.area();
    let clip = |rect: Rect| rect.intersection(frame_area);

    draw_greeting(f, app, &palette, clip(surfaces.greeting), now);
    draw_affirmation(f, app, &palette, clip(surfaces.affirmation), now);
    draw_theme_toggle(
        f,
        app,
        &palette,
        clip(surfaces.theme_toggle),
        clip(surfaces.theme_icon),
        now,
    );
    draw_new_affirmation(f, app, &palette, clip(surfaces.new_affirmation), now);
    draw_status(f, app, &palette, clip(surfaces.status));
}

/// Greeting holder: time-of-day greeting, pulsing right after a refresh.
fn draw_greeting(f: &mut Frame, app: &App, palette: &Palette, area: Rect, now: Instant) {
    let style = if app.pulse_greeting(now) {
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD)
    };

    let greeting = Paragraph::new(app.greeting())
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border))
                .title(" Daily Affirmations "),
        );

    f.render_widget(greeting, area);
}

/// Affirmation holder. Blank during the fade-out window, then the new text
/// with a short accent pulse.
fn draw_affirmation(f: &mut Frame, app: &App, palette: &Palette, area: Rect, now: Instant) {
    let text = app.affirmation_display().unwrap_or("");

    let style = if app.pulse_affirmation(now) {
        Style::default().fg(palette.accent).add_modifier(Modifier::ITALIC)
    } else {
        Style::default().fg(palette.foreground).add_modifier(Modifier::ITALIC)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);

    // Center vertically by padding with blank lines above the wrapped text
    let mut lines: Vec<Line> = Vec::new();
    for _ in 0..top_padding(text, inner) {
        lines.push(Line::raw(""));
    }
    lines.push(Line::styled(text, style));

    let affirmation = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(block, area);
    f.render_widget(affirmation, inner);
}

/// Blank lines above the affirmation so the wrapped text sits mid-card.
fn top_padding(text: &str, inner: Rect) -> u16 {
    if inner.width == 0 || inner.height == 0 {
        return 0;
    }
    let wrapped_lines = (text.width() as u16).div_ceil(inner.width).max(1);
    inner.height.saturating_sub(wrapped_lines) / 2
}

/// Theme toggle control with its icon cell.
fn draw_theme_toggle(
    f: &mut Frame,
    app: &App,
    palette: &Palette,
    area: Rect,
    icon: Rect,
    now: Instant,
) {
    draw_control(
        f,
        palette,
        area,
        "Theme",
        app.focus() == Control::ThemeToggle,
        app.pulse_theme_toggle(now),
    );

    // Icon cell carries the glyph for the theme the toggle switches to
    let glyph = Paragraph::new(app.mode().glyph())
        .style(Style::default().fg(palette.control_fg).bg(palette.control_bg));
    f.render_widget(glyph, icon);
}

/// New-affirmation control.
fn draw_new_affirmation(f: &mut Frame, app: &App, palette: &Palette, area: Rect, now: Instant) {
    draw_control(
        f,
        palette,
        area,
        "✨ New Affirmation",
        app.focus() == Control::NewAffirmation,
        app.pulse_new_affirmation(now),
    );
}

/// Shared button rendering: bordered label, accent border when focused,
/// reversed colors while the activation pulse plays.
fn draw_control(
    f: &mut Frame,
    palette: &Palette,
    area: Rect,
    label: &str,
    focused: bool,
    pulsing: bool,
) {
    let border_style = if focused {
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.border)
    };

    let label_style = if pulsing {
        Style::default()
            .fg(palette.control_bg)
            .bg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.control_fg).bg(palette.control_bg)
    };

    let button = Paragraph::new(Line::from(Span::styled(label, label_style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));

    f.render_widget(button, area);
}

/// Status line: the transient startup announcement while it lasts, then the
/// toggle's accessible label and the key help.
fn draw_status(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let (text, style) = match app.announcement_text() {
        Some(announcement) => (
            announcement.to_string(),
            Style::default().fg(palette.accent),
        ),
        None => {
            let help = "Tab: focus | Enter/Space: activate | Alt+T: theme | Alt+N: new | q: quit";
            let text = if app.focus() == Control::ThemeToggle {
                format!(" {} {}", app.theme_toggle_label(), help)
            } else {
                format!(" {help}")
            };
            (text, Style::default().fg(palette.dimmed))
        }
    };

    f.render_widget(Paragraph::new(text).style(style), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_padding_centers_short_text() {
        let inner = Rect::new(0, 0, 40, 7);
        // One wrapped line in a 7-high card leaves 3 above
        assert_eq!(top_padding("short", inner), 3);
    }

    #[test]
    fn test_top_padding_long_text() {
        let inner = Rect::new(0, 0, 10, 5);
        // 35 cells wide wraps to 4 lines in width 10
        let text = "x".repeat(35);
        assert_eq!(top_padding(&text, inner), 0);
    }

    #[test]
    fn test_top_padding_degenerate_area() {
        assert_eq!(top_padding("text", Rect::new(0, 0, 0, 0)), 0);
        assert_eq!(
            top_padding(crate::affirmations::FALLBACK_AFFIRMATION, Rect::new(0, 0, 40, 1)),
            0
        );
    }
}
