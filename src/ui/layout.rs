//! Display surface resolution.
//!
//! The dashboard writes to a fixed set of named regions: greeting holder,
//! affirmation holder, the two controls (theme toggle with its icon cell,
//! new-affirmation button), and the status line. `Surfaces` resolves them
//! all from the frame area once, up front, and is immutable afterward; the
//! debounced resize path replaces the whole struct.
//!
//! Resolution fails when the terminal cannot carry the two critical
//! surfaces (greeting and affirmation holders). Startup treats that as a
//! graceful abort, never a panic.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use thiserror::Error;

/// Smallest frame that still fits the two critical surfaces.
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 12;

/// Logical name of a display surface, used for mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceId {
    ThemeToggle,
    NewAffirmation,
}

/// Named regions of the dashboard, resolved once per frame size.
#[derive(Debug, Clone, PartialEq)]
pub struct Surfaces {
    /// Whole frame, carries the theme background.
    pub root: Rect,
    /// Greeting text holder (critical).
    pub greeting: Rect,
    /// Affirmation text holder (critical).
    pub affirmation: Rect,
    /// Theme toggle control.
    pub theme_toggle: Rect,
    /// Icon cell inside the theme toggle.
    pub theme_icon: Rect,
    /// New-affirmation control.
    pub new_affirmation: Rect,
    /// Status / announcement line.
    pub status: Rect,
}

/// Surface resolution failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("terminal too small: {width}x{height}, need at least {MIN_WIDTH}x{MIN_HEIGHT}")]
    TooSmall { width: u16, height: u16 },
}

impl Surfaces {
    /// Resolve all surfaces from the frame area.
    pub fn resolve(area: Rect) -> Result<Self, LayoutError> {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            return Err(LayoutError::TooSmall {
                width: area.width,
                height: area.height,
            });
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Greeting card
                Constraint::Min(5),    // Affirmation card
                Constraint::Length(3), // Controls row
                Constraint::Length(1), // Status line
            ])
            .split(area);

        let controls = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(14), // Theme toggle
                Constraint::Length(2),  // Gap
                Constraint::Length(24), // New affirmation
                Constraint::Min(0),
            ])
            .split(rows[2]);

        let theme_toggle = controls[0];
        // Icon cell sits just inside the toggle's left border
        let theme_icon = Rect {
            x: theme_toggle.x + 2,
            y: theme_toggle.y + 1,
            width: 2,
            height: 1,
        };

        Ok(Self {
            root: area,
            greeting: rows[0],
            affirmation: rows[1],
            theme_toggle,
            theme_icon,
            new_affirmation: controls[2],
            status: rows[3],
        })
    }

    /// Hit-test a pointer position against the interactive controls.
    pub fn hit(&self, column: u16, row: u16) -> Option<SurfaceId> {
        let inside = |rect: Rect| {
            column >= rect.x
                && column < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height
        };

        if inside(self.theme_toggle) {
            Some(SurfaceId::ThemeToggle)
        } else if inside(self.new_affirmation) {
            Some(SurfaceId::NewAffirmation)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(width: u16, height: u16) -> Rect {
        Rect::new(0, 0, width, height)
    }

    #[test]
    fn test_resolve_on_comfortable_frame() {
        let surfaces = Surfaces::resolve(frame(80, 24)).unwrap();

        assert_eq!(surfaces.root, frame(80, 24));
        assert_eq!(surfaces.greeting.height, 3);
        assert!(surfaces.affirmation.height >= 5);
        assert_eq!(surfaces.status.height, 1);
    }

    #[test]
    fn test_resolve_too_small_is_err_not_panic() {
        assert!(matches!(
            Surfaces::resolve(frame(20, 5)),
            Err(LayoutError::TooSmall { width: 20, height: 5 })
        ));
        assert!(Surfaces::resolve(frame(0, 0)).is_err());
    }

    #[test]
    fn test_resolve_at_minimum_size() {
        assert!(Surfaces::resolve(frame(MIN_WIDTH, MIN_HEIGHT)).is_ok());
        assert!(Surfaces::resolve(frame(MIN_WIDTH - 1, MIN_HEIGHT)).is_err());
        assert!(Surfaces::resolve(frame(MIN_WIDTH, MIN_HEIGHT - 1)).is_err());
    }

    #[test]
    fn test_surfaces_do_not_overlap_vertically() {
        let s = Surfaces::resolve(frame(80, 24)).unwrap();
        assert!(s.greeting.y + s.greeting.height <= s.affirmation.y);
        assert!(s.affirmation.y + s.affirmation.height <= s.theme_toggle.y);
        assert!(s.theme_toggle.y + s.theme_toggle.height <= s.status.y);
    }

    #[test]
    fn test_hit_controls() {
        let s = Surfaces::resolve(frame(80, 24)).unwrap();

        let toggle_mid = (s.theme_toggle.x + 1, s.theme_toggle.y + 1);
        assert_eq!(s.hit(toggle_mid.0, toggle_mid.1), Some(SurfaceId::ThemeToggle));

        let request_mid = (s.new_affirmation.x + 1, s.new_affirmation.y + 1);
        assert_eq!(s.hit(request_mid.0, request_mid.1), Some(SurfaceId::NewAffirmation));

        // Greeting area is not interactive
        assert_eq!(s.hit(s.greeting.x + 1, s.greeting.y + 1), None);
    }

    #[test]
    fn test_icon_cell_inside_toggle() {
        let s = Surfaces::resolve(frame(80, 24)).unwrap();
        assert_eq!(s.hit(s.theme_icon.x, s.theme_icon.y), Some(SurfaceId::ThemeToggle));
    }
}
