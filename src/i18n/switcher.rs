//! Locale switching driven by an explicit user selection.
//!
//! The controller is the only stateful piece of the locale layer. It computes
//! the destination path for the new locale (keeping the bare path, query and
//! fragment of the current location), hands it to a [`Navigator`], and once
//! navigation completes moves focus to the page's primary heading through a
//! [`FocusTarget`]. A second selection while a switch is in flight is
//! suppressed.

use crate::i18n::resolver::{build_localized_path, resolve_locale, strip_locale, Location};
use crate::i18n::{LocaleMetrics, Locale};
use tracing::{debug, info};

/// Performs the navigation to a localized path.
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

/// Receives the post-navigation focus request.
pub trait FocusTarget {
    /// Move focus to the primary heading. Returns `false` if it is not present.
    fn focus_primary_heading(&mut self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchState {
    Idle,
    Switching,
}

/// Result of a locale selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// Navigation was issued to this path.
    Navigated(String),
    /// The selected locale is already active; nothing happened.
    AlreadyActive,
    /// A switch is already in flight; the selection was ignored.
    InFlight,
}

/// Orchestrates a user-triggered locale change.
#[derive(Debug)]
pub struct LocaleSwitchController<N: Navigator> {
    navigator: N,
    state: SwitchState,
}

impl<N: Navigator> LocaleSwitchController<N> {
    pub fn new(navigator: N) -> Self {
        Self {
            navigator,
            state: SwitchState::Idle,
        }
    }

    pub fn state(&self) -> SwitchState {
        self.state
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn into_navigator(self) -> N {
        self.navigator
    }

    /// Handle the user selecting `new_locale` while viewing `location`.
    pub fn select(&mut self, new_locale: Locale, location: &Location) -> SwitchOutcome {
        if self.state == SwitchState::Switching {
            debug!(locale = %new_locale, "Locale switch already in flight, ignoring selection");
            return SwitchOutcome::InFlight;
        }

        let current = resolve_locale(&location.path);
        if current == new_locale {
            debug!(locale = %new_locale, "Locale already active");
            return SwitchOutcome::AlreadyActive;
        }

        let bare_path = strip_locale(&location.path);
        let destination = build_localized_path(
            new_locale,
            &bare_path,
            location.hash.as_deref(),
            location.query.as_deref(),
        );

        self.state = SwitchState::Switching;
        info!(from = %current, to = %new_locale, path = %destination, "Switching locale");
        LocaleMetrics::global().record_locale_switch();
        self.navigator.navigate(&destination);

        SwitchOutcome::Navigated(destination)
    }

    /// Signal that navigation finished. Moves focus to the primary heading on
    /// a best-effort basis and returns the controller to `Idle`.
    pub fn navigation_completed<F: FocusTarget>(&mut self, focus: &mut F) {
        if self.state != SwitchState::Switching {
            return;
        }
        self.state = SwitchState::Idle;

        if !focus.focus_primary_heading() {
            debug!("Primary heading not found after locale switch, skipping focus");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::resolver::split_location;

    #[derive(Debug, Default)]
    struct RecordingNavigator {
        visited: Vec<String>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&mut self, path: &str) {
            self.visited.push(path.to_string());
        }
    }

    struct Heading {
        present: bool,
        focused: bool,
    }

    impl FocusTarget for Heading {
        fn focus_primary_heading(&mut self) -> bool {
            if self.present {
                self.focused = true;
            }
            self.present
        }
    }

    fn controller() -> LocaleSwitchController<RecordingNavigator> {
        LocaleSwitchController::new(RecordingNavigator::default())
    }

    #[test]
    fn test_switch_preserves_path_query_and_hash() {
        let mut controller = controller();
        let outcome = controller.select(Locale::ENGLISH, &split_location("/es/services?plan=pro#pricing"));

        assert_eq!(
            outcome,
            SwitchOutcome::Navigated("/en/services?plan=pro#pricing".to_string())
        );
        assert_eq!(controller.navigator().visited, vec!["/en/services?plan=pro#pricing"]);
        assert_eq!(controller.state(), SwitchState::Switching);
    }

    #[test]
    fn test_switch_to_active_locale_is_noop() {
        let mut controller = controller();
        let outcome = controller.select(Locale::SPANISH, &Location::from_path("/es/about"));

        assert_eq!(outcome, SwitchOutcome::AlreadyActive);
        assert!(controller.navigator().visited.is_empty());
        assert_eq!(controller.state(), SwitchState::Idle);
    }

    #[test]
    fn test_switch_from_unprefixed_path_uses_default_as_current() {
        let mut controller = controller();
        assert_eq!(
            controller.select(Locale::CATALAN, &Location::from_path("/about")),
            SwitchOutcome::AlreadyActive
        );
        assert_eq!(
            controller.select(Locale::ENGLISH, &Location::from_path("/about")),
            SwitchOutcome::Navigated("/en/about".to_string())
        );
    }

    #[test]
    fn test_second_selection_while_switching_is_suppressed() {
        let mut controller = controller();
        let location = Location::from_path("/cat");

        controller.select(Locale::ENGLISH, &location);
        let outcome = controller.select(Locale::SPANISH, &location);

        assert_eq!(outcome, SwitchOutcome::InFlight);
        assert_eq!(controller.navigator().visited, vec!["/en"]);
    }

    #[test]
    fn test_navigation_completed_focuses_heading_and_returns_to_idle() {
        let mut controller = controller();
        let mut heading = Heading {
            present: true,
            focused: false,
        };

        controller.select(Locale::ENGLISH, &Location::from_path("/es/blog"));
        controller.navigation_completed(&mut heading);

        assert!(heading.focused);
        assert_eq!(controller.state(), SwitchState::Idle);

        let outcome = controller.select(Locale::SPANISH, &Location::from_path("/en/blog"));
        assert_eq!(outcome, SwitchOutcome::Navigated("/es/blog".to_string()));
    }

    #[test]
    fn test_missing_heading_is_skipped_silently() {
        let mut controller = controller();
        let mut heading = Heading {
            present: false,
            focused: false,
        };

        controller.select(Locale::ENGLISH, &Location::from_path("/es"));
        controller.navigation_completed(&mut heading);

        assert!(!heading.focused);
        assert_eq!(controller.state(), SwitchState::Idle);
    }

    #[test]
    fn test_navigation_completed_while_idle_does_not_focus() {
        let mut controller = controller();
        let mut heading = Heading {
            present: true,
            focused: false,
        };

        controller.navigation_completed(&mut heading);
        assert!(!heading.focused);
    }
}
