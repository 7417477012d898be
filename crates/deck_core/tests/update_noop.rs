use deck_core::{update, DeckConfig, DeckState, Msg};

#[test]
fn update_is_noop() {
    let state = DeckState::with_seed(DeckConfig::default(), 1);
    let before = state.view();

    let (next, effects) = update(state, Msg::NoOp);
    assert_eq!(next.view(), before);
    assert!(effects.is_empty());

    let (next, effects) = update(next, Msg::Tick);
    assert_eq!(next.view(), before);
    assert!(effects.is_empty());
}
