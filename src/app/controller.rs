//! Event dispatch over state, theme persistence and analytics.

use crate::analytics::{AnalyticsSink, NoopSink};
use crate::app::theme_controller::ThemeController;
use crate::app::{handle_event, tracking, Action, AppState, Event};
use crate::domain::error::Result;
use crate::storage::PreferenceStore;
use crate::ui::renderer::{present, Presenter};
use crate::ui::theme::ThemeMode;
use crate::ui::viewmodel::ViewModel;

/// Owns the application state together with its injected capabilities.
///
/// Each [`dispatch`](Self::dispatch) runs the primary handler, then the
/// analytics subscription, then executes the internal actions. Actions that
/// need the host (opening a URL, hiding the pane) are returned.
pub struct Controller<S: PreferenceStore, A: AnalyticsSink = NoopSink> {
    state: AppState,
    themes: ThemeController<S>,
    analytics: A,
}

impl<S: PreferenceStore> Controller<S> {
    /// Creates a controller without analytics.
    ///
    /// The stored theme preference is applied before this returns, so the
    /// first render already uses it.
    pub fn new(state: AppState, store: S) -> Self {
        Self::with_analytics(state, store, NoopSink)
    }
}

impl<S: PreferenceStore, A: AnalyticsSink> Controller<S, A> {
    /// Creates a controller reporting interactions to `analytics`.
    pub fn with_analytics(mut state: AppState, store: S, analytics: A) -> Self {
        let mut themes = ThemeController::new(store);
        state.theme_mode = themes.initialize();
        state.apply_filters();
        Self {
            state,
            themes,
            analytics,
        }
    }

    /// Handles one input event.
    ///
    /// Returns whether the view changed and the actions the host must run.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`handle_event`].
    pub fn dispatch(&mut self, event: &Event) -> Result<(bool, Vec<Action>)> {
        let (rerender, actions) = handle_event(&mut self.state, event)?;

        if let Some(tracked) = tracking::track_event(&self.state, event) {
            tracing::debug!(name = %tracked.name, label = %tracked.label, "analytics event");
            self.analytics.emit(&tracked);
        }

        let mut host_actions = Vec::with_capacity(actions.len());
        for action in actions {
            if action == Action::ToggleTheme {
                self.state.theme_mode = self.themes.toggle();
            } else {
                host_actions.push(action);
            }
        }

        Ok((rerender, host_actions))
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub const fn theme(&self) -> ThemeMode {
        self.themes.mode()
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        self.themes.store()
    }

    #[must_use]
    pub const fn analytics(&self) -> &A {
        &self.analytics
    }

    #[must_use]
    pub fn view_model(&self) -> ViewModel {
        self.state.view_model()
    }

    /// Renders the current view and theme through `presenter`.
    pub fn present<P: Presenter + ?Sized>(&self, presenter: &mut P) {
        present(&self.view_model(), presenter);
        presenter.render_theme(self.themes.mode());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::RecordingSink;
    use crate::domain::{bundled_catalog, filter_tools, FilterState, ToolRecord};
    use crate::storage::{JsonPreferenceStore, MemoryPreferenceStore};
    use crate::ui::theme::ThemeIcon;
    use crate::ui::viewmodel::Presentation;
    use crate::ui::HtmlPresenter;
    use tempfile::TempDir;

    fn state() -> AppState {
        AppState::new(
            vec![ToolRecord::new("Echo", "Voice cloning", "audio", "paid").with_website("https://echo.example")],
            Default::default(),
        )
    }

    #[test]
    fn test_toggle_is_executed_not_returned() {
        let mut controller = Controller::new(state(), MemoryPreferenceStore::default());
        let (rerender, actions) = controller.dispatch(&Event::ToggleTheme).unwrap();
        assert!(rerender);
        assert!(actions.is_empty());
        assert_eq!(controller.state().theme_mode, ThemeMode::Dark);
        assert_eq!(controller.theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_visit_is_returned_and_tracked() {
        let sink = RecordingSink::default();
        let mut controller =
            Controller::with_analytics(state(), MemoryPreferenceStore::default(), sink.clone());
        let (_, actions) = controller.dispatch(&Event::VisitTool(0)).unwrap();
        assert_eq!(actions.len(), 1);
        assert!(matches!(&actions[0], Action::OpenUrl { url, .. } if url == "https://echo.example"));

        let events = sink.drain();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].label, "Echo");
    }

    #[test]
    fn test_stored_theme_applied_on_construction() {
        let store = MemoryPreferenceStore::with_value("theme", "dark");
        let controller = Controller::new(state(), store);
        assert_eq!(controller.state().theme_mode, ThemeMode::Dark);
    }

    fn two_tools() -> Vec<ToolRecord> {
        vec![
            ToolRecord::new("Scribe", "AI writing assistant", "writing", "free")
                .with_website("https://scribe.example"),
            ToolRecord::new("Coder", "Pair programmer", "development", "paid")
                .with_website("https://coder.example"),
        ]
    }

    fn controller(catalog: Vec<ToolRecord>) -> Controller<MemoryPreferenceStore> {
        Controller::new(AppState::new(catalog, Default::default()), MemoryPreferenceStore::default())
    }

    fn names<S: PreferenceStore, A: AnalyticsSink>(controller: &Controller<S, A>) -> Vec<String> {
        controller.state().filtered.iter().map(|t| t.name.clone()).collect()
    }

    #[test]
    fn test_analytics_never_surfaces_as_action() {
        let sink = RecordingSink::default();
        let mut c = Controller::with_analytics(
            AppState::new(two_tools(), Default::default()),
            MemoryPreferenceStore::default(),
            sink.clone(),
        );

        let (_, actions) = c.dispatch(&Event::SearchChanged("scribe".into())).unwrap();
        assert!(actions.is_empty());
        let (_, actions) = c.dispatch(&Event::CategoryChanged(Some("writing".into()))).unwrap();
        assert!(actions.is_empty());
        assert_eq!(sink.drain().len(), 2);
    }

    #[test]
    fn test_present_applies_theme_after_toggle() {
        let mut c = controller(two_tools());
        let mut html = HtmlPresenter::default();
        c.present(&mut html);
        assert_eq!(html.body_class(), None);
        assert_eq!(html.theme_icon_class(), "fas fa-moon");

        c.dispatch(&Event::ToggleTheme).unwrap();
        c.present(&mut html);
        assert_eq!(html.body_class(), Some("dark"));
        assert_eq!(html.theme_icon_class(), "fas fa-sun");

        c.dispatch(&Event::ToggleTheme).unwrap();
        c.present(&mut html);
        assert_eq!(html.body_class(), None);
        assert_eq!(html.theme_icon_class(), "fas fa-moon");
    }

    #[test]
    fn test_search_cod_finds_coder() {
        let mut c = controller(two_tools());
        c.dispatch(&Event::SearchChanged("cod".into())).unwrap();
        assert_eq!(names(&c), vec!["Coder"]);
        assert_eq!(c.view_model().result_count, "1 of 2 tools found");
    }

    #[test]
    fn test_pricing_free_finds_scribe() {
        let mut c = controller(two_tools());
        c.dispatch(&Event::PricingChanged(Some("free".into()))).unwrap();
        assert_eq!(names(&c), vec!["Scribe"]);
    }

    #[test]
    fn test_unmatched_search_renders_empty_state() {
        let mut c = controller(two_tools());
        c.dispatch(&Event::SearchChanged("xyz".into())).unwrap();

        let vm = c.view_model();
        assert!(vm.is_empty());
        assert!(vm.cards().is_empty());
        match &vm.content {
            Presentation::Empty(empty) => {
                assert_eq!(empty.icon, "search");
                assert_eq!(empty.heading, "No tools found");
                assert_eq!(empty.hint, "Try adjusting your search or filters");
            }
            Presentation::Cards(_) => panic!("expected the empty state"),
        }

        let mut html = HtmlPresenter::default();
        c.present(&mut html);
        assert!(html.grid_html().contains("empty-state"));
        assert!(!html.grid_html().contains("tool-card"));
        assert_eq!(html.count_text(), "0 of 2 tools found");
    }

    #[test]
    fn test_constraints_only_narrow_the_search_result() {
        let catalog = bundled_catalog();
        for term in ["", "a", "e", "ai", "tool"] {
            let mut by_term = FilterState::default();
            by_term.set_search_term(term);
            let broad = filter_tools(&catalog, &by_term);

            for pricing in ["free", "freemium", "paid"] {
                let mut narrowed = by_term.clone();
                narrowed.set_pricing(Some(pricing));
                let narrow = filter_tools(&catalog, &narrowed);

                let mut rest = broad.iter();
                for tool in &narrow {
                    assert!(rest.any(|b| b == tool), "{} out of order or missing", tool.name);
                }
            }
        }
    }

    #[test]
    fn test_count_matches_filtered_length_for_every_event() {
        let mut c = controller(bundled_catalog());
        let events = [
            Event::Char('a'),
            Event::CycleCategory,
            Event::CyclePricing,
            Event::Backspace,
            Event::CategoryChanged(None),
            Event::SearchChanged("IMAGE".into()),
            Event::ClearFilters,
        ];
        for event in &events {
            c.dispatch(event).unwrap();
            let vm = c.view_model();
            let total = c.state().catalog.len();
            assert!(vm.matched <= total);
            assert_eq!(vm.matched, c.state().filtered.len());
            assert_eq!(vm.total, total);
            assert_eq!(vm.result_count, format!("{} of {} tools found", vm.matched, total));
        }
    }

    #[test]
    fn test_repeating_a_filter_event_is_idempotent() {
        let mut c = controller(bundled_catalog());
        c.dispatch(&Event::SearchChanged("re".into())).unwrap();
        let first = names(&c);
        c.dispatch(&Event::SearchChanged("re".into())).unwrap();
        assert_eq!(names(&c), first);
    }

    #[test]
    fn test_visiting_returns_external_link_for_the_host() {
        let mut c = controller(two_tools());
        c.dispatch(&Event::KeyDown).unwrap();
        let (_, actions) = c.dispatch(&Event::VisitSelected).unwrap();
        assert_eq!(
            actions,
            vec![Action::OpenUrl {
                name: "Coder".into(),
                url: "https://coder.example".into(),
            }]
        );

        let vm = c.view_model();
        let card = &vm.cards()[1];
        assert_eq!(card.link.target, "_blank");
        assert_eq!(card.link.rel, "noopener noreferrer");
    }

    #[test]
    fn test_terminal_frame_shows_count_and_cards() {
        let mut c = controller(two_tools());
        c.dispatch(&Event::Char('s')).unwrap();
        let frame = crate::ui::render_terminal(c.state(), 24, 100);
        assert!(frame.contains("Tooldeck"));
        assert!(frame.contains("1 of 2 tools found"));
        assert!(frame.contains("Scribe"));
        assert!(!frame.contains("Coder"));
    }

    #[test]
    fn test_theme_toggle_round_trip() {
        let mut c = controller(two_tools());
        assert_eq!(c.theme(), ThemeMode::Light);
        assert_eq!(c.store().get("theme").unwrap(), None);

        c.dispatch(&Event::ToggleTheme).unwrap();
        assert_eq!(c.theme(), ThemeMode::Dark);
        assert_eq!(c.store().get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(c.state().theme_mode.indicator(), ThemeIcon::Sun);

        c.dispatch(&Event::ToggleTheme).unwrap();
        assert_eq!(c.theme(), ThemeMode::Light);
        assert_eq!(c.store().get("theme").unwrap().as_deref(), Some("light"));
        assert_eq!(c.state().theme_mode.indicator(), ThemeIcon::Moon);
    }

    #[test]
    fn test_theme_preference_survives_restart() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");

        {
            let store = JsonPreferenceStore::new(&path).unwrap();
            let mut c = Controller::new(AppState::new(two_tools(), Default::default()), store);
            c.dispatch(&Event::ToggleTheme).unwrap();
        }

        let store = JsonPreferenceStore::new(&path).unwrap();
        let c = Controller::new(AppState::new(two_tools(), Default::default()), store);
        assert_eq!(c.theme(), ThemeMode::Dark);
    }

    #[test]
    fn test_no_sink_behaves_identically() {
        let script = [
            Event::SearchChanged("code".into()),
            Event::SearchChanged(String::new()),
            Event::CyclePricing,
            Event::KeyDown,
            Event::VisitSelected,
            Event::ToggleTheme,
        ];

        let mut with_sink = Controller::with_analytics(
            AppState::new(two_tools(), Default::default()),
            MemoryPreferenceStore::default(),
            RecordingSink::default(),
        );
        let mut without = controller(two_tools());

        for event in &script {
            let a = with_sink.dispatch(event).unwrap();
            let b = without.dispatch(event).unwrap();
            assert_eq!(a, b);
            assert_eq!(with_sink.view_model(), without.view_model());
            assert_eq!(with_sink.theme(), without.theme());
        }
    }
}
