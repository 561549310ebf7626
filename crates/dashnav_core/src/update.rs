use crate::route::{normalize_fragment, DEFAULT_FRAGMENT};
use crate::{AppState, Effect, InitialRoute, Msg, Section};

/// Pure update function: applies a message to state and returns any effects.
///
/// Effects are ordered: a fragment write always precedes the fetch it
/// belongs to.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::PageReady { fragment } => match InitialRoute::resolve(fragment.as_deref()) {
            InitialRoute::Overview => {
                let mut effects = vec![state.set_fragment(DEFAULT_FRAGMENT.to_string())];
                effects.extend(state.load_section(Section::overview()));
                effects
            }
            InitialRoute::Details => {
                let fragment = fragment.unwrap_or_default();
                state.adopt_fragment(normalize_fragment(&fragment));
                state.load_section(Section::details())
            }
        },
        Msg::NavClicked { section } => {
            let section = section.to_lowercase();
            if section.is_empty() {
                Vec::new()
            } else {
                state.navigate_to(Section::new(section))
            }
        }
        Msg::PartialLoaded { section, outcome } => state.apply_loaded(section, outcome),
        Msg::TimestampClicked { row } => match state.timestamp_at(row) {
            Some(timestamp) => state.go_to_details(&timestamp),
            None => Vec::new(),
        },
        Msg::RunSelected { value } => {
            if state.select_run(&value) {
                state.go_to_details(&value)
            } else {
                Vec::new()
            }
        }
        Msg::FilterInput { input_id, value } => {
            state.filter_input(&input_id, &value);
            Vec::new()
        }
        Msg::FilterCleared { input_id } => {
            state.filter_cleared(&input_id);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
