use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter, Display,
)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The theme after this one, wrapping around.
    pub fn next(self) -> Self {
        let all: Vec<Theme> = Theme::iter().collect();
        let idx = all.iter().position(|t| *t == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

/// Active theme plus whether the user picked it.
///
/// While `manually_set` is false the theme follows the operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThemeState {
    current: Theme,
    manually_set: bool,
}

impl ThemeState {
    /// Picks the startup theme: a manual choice from a previous session wins,
    /// then the system preference, then [`Theme::Light`].
    pub fn resolve(persisted: Option<ThemeState>, system: Option<Theme>) -> Self {
        match persisted {
            Some(state) if state.manually_set => state,
            _ => Self {
                current: system.unwrap_or_default(),
                manually_set: false,
            },
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn is_manual(&self) -> bool {
        self.manually_set
    }

    pub fn toggle_next(&mut self) -> Theme {
        self.current = self.current.next();
        self.manually_set = true;
        self.current
    }

    /// Returns `true` when the theme actually changed.
    pub fn set(&mut self, theme: Theme) -> bool {
        let changed = self.current != theme;
        self.current = theme;
        self.manually_set = true;
        changed
    }

    /// Follows an OS theme switch unless the user has chosen a theme.
    pub fn on_system_change(&mut self, system: Theme) -> bool {
        if self.manually_set || self.current == system {
            return false;
        }
        self.current = system;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_around() {
        assert_eq!(Theme::Light.next(), Theme::Dark);
        assert_eq!(Theme::Dark.next(), Theme::Light);
    }

    #[test]
    fn startup_prefers_manual_then_system() {
        let manual = ThemeState {
            current: Theme::Dark,
            manually_set: true,
        };
        assert_eq!(ThemeState::resolve(Some(manual), Some(Theme::Light)), manual);

        let automatic = ThemeState {
            current: Theme::Dark,
            manually_set: false,
        };
        let resolved = ThemeState::resolve(Some(automatic), Some(Theme::Light));
        assert_eq!(resolved.current(), Theme::Light);
        assert!(!resolved.is_manual());

        assert_eq!(ThemeState::resolve(None, None).current(), Theme::Light);
    }

    #[test]
    fn system_changes_stop_after_a_manual_pick() {
        let mut state = ThemeState::resolve(None, Some(Theme::Light));
        assert!(state.on_system_change(Theme::Dark));
        assert_eq!(state.current(), Theme::Dark);

        assert_eq!(state.toggle_next(), Theme::Light);
        assert!(state.is_manual());
        assert!(!state.on_system_change(Theme::Dark));
        assert_eq!(state.current(), Theme::Light);
    }

    #[test]
    fn set_reports_changes() {
        let mut state = ThemeState::default();
        assert!(!state.set(Theme::Light));
        assert!(state.is_manual());
        assert!(state.set(Theme::Dark));
    }

    #[test]
    fn persists_as_json() {
        let mut state = ThemeState::default();
        state.set(Theme::Dark);
        let json = serde_json::to_string(&state).unwrap();
        let back: ThemeState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
