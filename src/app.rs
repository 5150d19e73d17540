//! Application state and transitions.
//!
//! Everything observable on screen lives here: theme mode, greeting text,
//! current affirmation, focus, pending timed effects (fade swap, style
//! pulses, the startup announcement, the debounced resize). The event loop
//! feeds it semantic [`Action`]s and drives deadlines through [`App::tick`];
//! rendering only reads.
//!
//! Time and randomness are injected (a [`Clock`] and an owned RNG), so every
//! transition is testable without a terminal.

use std::time::Instant;

use rand::rngs::SmallRng;

use crate::action::Action;
use crate::affirmations::{self, FALLBACK_AFFIRMATION};
use crate::config::Config;
use crate::greeting::{self, Clock};
use crate::prefs::PreferenceStore;
use crate::timer::Debouncer;
use crate::ui::layout::Surfaces;
use crate::ui::theme::{Palette, ThemeMode};

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    ThemeToggle,
    NewAffirmation,
}

impl Control {
    fn next(self) -> Self {
        match self {
            Self::ThemeToggle => Self::NewAffirmation,
            Self::NewAffirmation => Self::ThemeToggle,
        }
    }

    fn prev(self) -> Self {
        // Two controls: previous and next coincide
        self.next()
    }
}

/// Affirmation swap waiting out the fade window.
#[derive(Debug)]
struct PendingSwap {
    swap_at: Instant,
    /// None means selection came up empty and the fallback text goes in.
    next: Option<String>,
}

/// Short style pulse on a surface, active until its deadline.
#[derive(Debug, Default)]
struct Pulses {
    theme_toggle: Option<Instant>,
    new_affirmation: Option<Instant>,
    greeting: Option<Instant>,
    affirmation: Option<Instant>,
}

/// Application state.
pub struct App {
    config: Config,
    surfaces: Surfaces,
    affirmations: Vec<String>,
    prefs: PreferenceStore,
    rng: SmallRng,
    clock: Box<dyn Clock>,

    mode: ThemeMode,
    greeting: &'static str,
    affirmation: String,
    pending_swap: Option<PendingSwap>,
    focus: Control,
    pulses: Pulses,
    announcement: Option<(String, Instant)>,
    resize_debounce: Debouncer,
    pending_resize: Option<(u16, u16)>,
    pub should_quit: bool,
}

impl App {
    /// Build the app and run the startup sequence: apply the persisted (or
    /// overridden) theme, render the greeting, queue the first affirmation,
    /// post the shortcut announcement.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: Config,
        surfaces: Surfaces,
        affirmations: Vec<String>,
        prefs: PreferenceStore,
        rng: SmallRng,
        clock: Box<dyn Clock>,
        theme_override: Option<&str>,
        now: Instant,
    ) -> Self {
        let debounce = config.timing.debounce();
        let mut app = Self {
            config,
            surfaces,
            affirmations,
            prefs,
            rng,
            clock,
            mode: ThemeMode::Light,
            greeting: "",
            affirmation: String::new(),
            pending_swap: None,
            focus: Control::ThemeToggle,
            pulses: Pulses::default(),
            announcement: None,
            resize_debounce: Debouncer::new(debounce),
            pending_resize: None,
            should_quit: false,
        };

        // Theme precedence: CLI override, then the saved preference, then
        // the configured default
        match theme_override {
            Some(name) => app.apply_theme_name(name),
            None => match app.prefs.stored_theme() {
                Some(saved) => app.apply_theme(saved),
                None => {
                    let default = app.config.appearance.default_theme.clone();
                    app.apply_theme_name(&default);
                }
            },
        }

        app.refresh_greeting(now);
        app.show_new_affirmation(now);
        app.announcement = Some((
            "Dashboard loaded. Alt+T toggles the theme, Alt+N shows a new affirmation.".to_string(),
            now + app.config.timing.announcement(),
        ));

        app
    }

    // --- theme -----------------------------------------------------------

    /// Apply a theme by name, coercing unrecognized names to light.
    pub fn apply_theme_name(&mut self, name: &str) {
        let mode = ThemeMode::from_name(name).unwrap_or_else(|| {
            tracing::warn!("theme {name:?} not found, using light theme");
            ThemeMode::Light
        });
        self.apply_theme(mode);
    }

    /// Apply a theme mode and persist it. Idempotent; persistence failures
    /// are logged and swallowed - the displayed theme stays authoritative.
    pub fn apply_theme(&mut self, mode: ThemeMode) {
        self.mode = mode;
        if let Err(e) = self.prefs.save_theme(mode) {
            tracing::warn!("unable to save theme preference: {e:#}");
        }
        tracing::info!("theme switched to: {}", mode.as_name());
    }

    /// Toggle between light and dark, with pointer feedback on the control.
    pub fn toggle_theme(&mut self, now: Instant) {
        self.pulses.theme_toggle = Some(now + self.config.timing.pulse());
        self.apply_theme(self.mode.opposite());
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Palette for the current mode, with any config accent override.
    pub fn palette(&self) -> Palette {
        let base = self.mode.palette();
        let accent = match self.mode {
            ThemeMode::Light => self.config.appearance.light_accent,
            ThemeMode::Dark => self.config.appearance.dark_accent,
        };
        match accent {
            Some(color) => base.with_accent(color),
            None => base,
        }
    }

    /// Accessible label for the toggle: the action first, then the state.
    pub fn theme_toggle_label(&self) -> String {
        format!(
            "Switch to {} theme. Currently using {} theme.",
            self.mode.opposite().as_name(),
            self.mode.as_name()
        )
    }

    // --- greeting ---------------------------------------------------------

    /// Re-resolve the greeting from the current local hour.
    pub fn refresh_greeting(&mut self, now: Instant) {
        let hour = self.clock.local_hour();
        match greeting::resolve_bucket(hour) {
            Some(bucket) => {
                tracing::debug!("hour {hour} matched the {} bucket", bucket.name);
                self.greeting = bucket.text;
            }
            None => {
                tracing::warn!("hour {hour} matched no greeting bucket, falling back");
                self.greeting = greeting::FALLBACK_GREETING;
            }
        }
        self.pulses.greeting = Some(now + self.config.timing.pulse());
    }

    pub fn greeting(&self) -> &str {
        self.greeting
    }

    // --- affirmation -------------------------------------------------------

    /// User-requested affirmation: button feedback plus re-render.
    pub fn request_affirmation(&mut self, now: Instant) {
        self.pulses.new_affirmation = Some(now + self.config.timing.pulse());
        self.show_new_affirmation(now);
        tracing::debug!("new affirmation requested");
    }

    /// Queue a fresh affirmation behind the fade-out window.
    fn show_new_affirmation(&mut self, now: Instant) {
        let next = affirmations::pick(&self.affirmations, &mut self.rng).map(str::to_string);
        self.pending_swap = Some(PendingSwap {
            swap_at: now + self.config.timing.fade(),
            next,
        });
    }

    /// Text for the affirmation holder; `None` during the fade-out phase.
    pub fn affirmation_display(&self) -> Option<&str> {
        if self.pending_swap.is_some() {
            None
        } else {
            Some(&self.affirmation)
        }
    }

    // --- input dispatch ----------------------------------------------------

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::ToggleTheme => self.toggle_theme(now),
            Action::NewAffirmation => self.request_affirmation(now),
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::Activate => match self.focus {
                Control::ThemeToggle => self.toggle_theme(now),
                Control::NewAffirmation => self.request_affirmation(now),
            },
            Action::Quit => self.should_quit = true,
        }
    }

    pub fn focus(&self) -> Control {
        self.focus
    }

    // --- timers -------------------------------------------------------------

    /// Record a resize; the recomputation runs once the debounce settles.
    pub fn schedule_resize(&mut self, width: u16, height: u16, now: Instant) {
        self.pending_resize = Some((width, height));
        self.resize_debounce.trigger(now);
    }

    /// Expire due deadlines: affirmation swap, pulses, announcement,
    /// debounced resize.
    pub fn tick(&mut self, now: Instant) {
        if self.pending_swap.as_ref().is_some_and(|swap| now >= swap.swap_at) {
            if let Some(swap) = self.pending_swap.take() {
                self.affirmation = swap.next.unwrap_or_else(|| FALLBACK_AFFIRMATION.to_string());
                self.pulses.affirmation = Some(now + self.config.timing.pulse());
            }
        }

        for pulse in [
            &mut self.pulses.theme_toggle,
            &mut self.pulses.new_affirmation,
            &mut self.pulses.greeting,
            &mut self.pulses.affirmation,
        ] {
            if pulse.is_some_and(|deadline| now >= deadline) {
                *pulse = None;
            }
        }

        if self.announcement.as_ref().is_some_and(|(_, until)| now >= *until) {
            self.announcement = None;
        }

        if self.resize_debounce.fire(now) {
            if let Some((width, height)) = self.pending_resize.take() {
                self.apply_resize(width, height);
            }
        }
    }

    /// Layout-dependent recomputation after the resize settles.
    fn apply_resize(&mut self, width: u16, height: u16) {
        let area = ratatui::layout::Rect::new(0, 0, width, height);
        match Surfaces::resolve(area) {
            Ok(surfaces) => {
                tracing::debug!("window resized, layout updated to {width}x{height}");
                self.surfaces = surfaces;
            }
            Err(e) => {
                // Keep the previous surfaces; drawing clips as needed
                tracing::warn!("resize to {width}x{height} rejected: {e}");
            }
        }
    }

    /// Nearest pending deadline, used to size the event-poll timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        let mut deadlines: Vec<Instant> = Vec::new();
        if let Some(swap) = &self.pending_swap {
            deadlines.push(swap.swap_at);
        }
        for pulse in [
            self.pulses.theme_toggle,
            self.pulses.new_affirmation,
            self.pulses.greeting,
            self.pulses.affirmation,
        ]
        .into_iter()
        .flatten()
        {
            deadlines.push(pulse);
        }
        if let Some((_, until)) = &self.announcement {
            deadlines.push(*until);
        }
        if let Some(deadline) = self.resize_debounce.deadline() {
            deadlines.push(deadline);
        }
        deadlines.into_iter().min()
    }

    // --- render accessors -----------------------------------------------------

    pub fn surfaces(&self) -> &Surfaces {
        &self.surfaces
    }

    pub fn announcement_text(&self) -> Option<&str> {
        self.announcement.as_ref().map(|(text, _)| text.as_str())
    }

    pub fn pulse_theme_toggle(&self, now: Instant) -> bool {
        self.pulses.theme_toggle.is_some_and(|d| now < d)
    }

    pub fn pulse_new_affirmation(&self, now: Instant) -> bool {
        self.pulses.new_affirmation.is_some_and(|d| now < d)
    }

    pub fn pulse_greeting(&self, now: Instant) -> bool {
        self.pulses.greeting.is_some_and(|d| now < d)
    }

    pub fn pulse_affirmation(&self, now: Instant) -> bool {
        self.pulses.affirmation.is_some_and(|d| now < d)
    }
}
