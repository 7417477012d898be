#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Open or restart a browsing session with a fresh deck.
    DeckOpened,
    /// Presentation surface reports the deck is at or near its end.
    DeckNearEnd,
    /// A listing page arrived from the fetch layer.
    PageLoaded {
        spots: Vec<crate::Spot>,
        next_cursor: Option<crate::Cursor>,
    },
    /// The post-batch settle delay elapsed.
    SettleElapsed,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
