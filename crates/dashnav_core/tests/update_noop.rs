use dashnav_core::{update, AppState, Msg};

#[test]
fn update_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn interactions_before_any_partial_are_ignored() {
    let state = AppState::new();
    for msg in [
        Msg::TimestampClicked { row: 0 },
        Msg::RunSelected {
            value: "x".to_string(),
        },
        Msg::FilterInput {
            input_id: "searchOverview".to_string(),
            value: "x".to_string(),
        },
        Msg::FilterCleared {
            input_id: "searchOverview".to_string(),
        },
    ] {
        let (next, effects) = update(state.clone(), msg);
        assert_eq!(next, state);
        assert!(effects.is_empty());
    }
}
