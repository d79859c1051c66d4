//! Analytics subscription.
//!
//! [`track_event`] is run on the same events as
//! [`handle_event`](crate::app::handle_event), after it, and never touches
//! the filter. It reads the post-event state to decide what, if anything, is
//! worth reporting.

use crate::analytics::AnalyticsEvent;
use crate::app::{AppState, Event};

/// Search values must be longer than this to be reported.
///
/// Length is measured in UTF-16 code units, the way browsers measure input
/// values, so a single emoji outside the BMP counts as two.
pub const SEARCH_MIN_CHARS: usize = 2;

/// Maps an already-handled event to the analytics event it produces.
///
/// - visits report `tool_visit` with the tool's name
/// - search edits report `search` with the raw search text once it is longer
///   than [`SEARCH_MIN_CHARS`] UTF-16 units
/// - category or pricing changes report `filter_category` or
///   `filter_pricing` with the new key, unless it is empty
#[must_use]
pub fn track_event(state: &AppState, event: &Event) -> Option<AnalyticsEvent> {
    match event {
        Event::VisitTool(index) => state
            .filtered
            .get(*index)
            .map(|tool| AnalyticsEvent::engagement("tool_visit", &tool.name)),
        Event::VisitSelected => state
            .selected_tool()
            .map(|tool| AnalyticsEvent::engagement("tool_visit", &tool.name)),
        Event::SearchChanged(_) | Event::Char(_) | Event::Backspace => {
            let value = &state.search_input;
            (value.encode_utf16().count() > SEARCH_MIN_CHARS)
                .then(|| AnalyticsEvent::engagement("search", value))
        }
        Event::CategoryChanged(_) | Event::CycleCategory => state
            .filter
            .category
            .as_deref()
            .map(|key| AnalyticsEvent::engagement("filter_category", key)),
        Event::PricingChanged(_) | Event::CyclePricing => state
            .filter
            .pricing
            .as_deref()
            .map(|key| AnalyticsEvent::engagement("filter_pricing", key)),
        Event::ClearFilters
        | Event::ToggleTheme
        | Event::KeyDown
        | Event::KeyUp
        | Event::CloseFocus => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::RecordingSink;
    use crate::app::{handle_event, Controller};
    use crate::domain::ToolRecord;
    use crate::storage::MemoryPreferenceStore;

    fn state() -> AppState {
        AppState::new(
            vec![ToolRecord::new("Lumen", "Makes images", "image", "freemium")],
            Default::default(),
        )
    }

    fn run(state: &mut AppState, event: Event) -> Option<AnalyticsEvent> {
        handle_event(state, &event).unwrap();
        track_event(state, &event)
    }

    #[test]
    fn test_search_needs_three_characters() {
        let mut state = state();
        assert_eq!(run(&mut state, Event::SearchChanged("im".into())), None);
        let event = run(&mut state, Event::SearchChanged("Ima".into())).unwrap();
        assert_eq!(event.name, "search");
        assert_eq!(event.label, "Ima");
        assert_eq!(event.category, "engagement");
    }

    #[test]
    fn test_typed_search_reports_current_value() {
        let mut state = state();
        assert!(run(&mut state, Event::Char('a')).is_none());
        assert!(run(&mut state, Event::Char('b')).is_none());
        let event = run(&mut state, Event::Char('c')).unwrap();
        assert_eq!(event.label, "abc");
        assert!(run(&mut state, Event::Backspace).is_none());
    }

    #[test]
    fn test_empty_dropdown_is_not_reported() {
        let mut state = state();
        assert!(run(&mut state, Event::CategoryChanged(Some(String::new()))).is_none());
        assert!(run(&mut state, Event::PricingChanged(None)).is_none());

        let event = run(&mut state, Event::PricingChanged(Some("free".into()))).unwrap();
        assert_eq!(event.name, "filter_pricing");
        assert_eq!(event.label, "free");
    }

    #[test]
    fn test_visit_reports_tool_name() {
        let mut state = state();
        let event = run(&mut state, Event::VisitTool(0)).unwrap();
        assert_eq!(event.name, "tool_visit");
        assert_eq!(event.label, "Lumen");
        assert!(run(&mut state, Event::VisitTool(5)).is_none());
    }

    #[test]
    fn test_search_length_counts_utf16_units() {
        let mut state = state();
        assert_eq!(run(&mut state, Event::SearchChanged("\u{1F600}".into())), None);
        assert_eq!(run(&mut state, Event::SearchChanged("\u{e9}\u{e9}".into())), None);

        let event = run(&mut state, Event::SearchChanged("\u{1F600}\u{1F600}".into())).unwrap();
        assert_eq!(event.name, "search");
        assert_eq!(event.label, "\u{1F600}\u{1F600}");
    }

    fn recorded() -> (Controller<MemoryPreferenceStore, RecordingSink>, RecordingSink) {
        let sink = RecordingSink::default();
        let catalog = vec![
            ToolRecord::new("Scribe", "AI writing assistant", "writing", "free")
                .with_website("https://scribe.example"),
            ToolRecord::new("Coder", "Pair programmer", "development", "paid")
                .with_website("https://coder.example"),
        ];
        let controller = Controller::with_analytics(
            AppState::new(catalog, Default::default()),
            MemoryPreferenceStore::default(),
            sink.clone(),
        );
        (controller, sink)
    }

    #[test]
    fn test_typed_search_reported_from_three_characters() {
        let (mut c, sink) = recorded();
        for ch in "ai w".chars() {
            c.dispatch(&Event::Char(ch)).unwrap();
        }

        let labels: Vec<String> = sink.drain().into_iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["ai ", "ai w"]);
    }

    #[test]
    fn test_only_non_empty_dropdown_values_are_reported() {
        let (mut c, sink) = recorded();
        c.dispatch(&Event::CategoryChanged(Some(String::new()))).unwrap();
        c.dispatch(&Event::CategoryChanged(Some("writing".into()))).unwrap();
        c.dispatch(&Event::PricingChanged(None)).unwrap();
        c.dispatch(&Event::PricingChanged(Some("paid".into()))).unwrap();

        let events = sink.drain();
        let pairs: Vec<(&str, &str)> = events
            .iter()
            .map(|e| (e.name.as_str(), e.label.as_str()))
            .collect();
        assert_eq!(pairs, vec![("filter_category", "writing"), ("filter_pricing", "paid")]);
        assert!(events.iter().all(|e| e.category == "engagement"));
    }

    #[test]
    fn test_tool_visit_is_labelled_with_name() {
        let (mut c, sink) = recorded();
        c.dispatch(&Event::VisitTool(1)).unwrap();

        let events = sink.drain();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "tool_visit");
        assert_eq!(events[0].label, "Coder");
    }
}
