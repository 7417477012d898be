#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Request the next listing page. Fire-and-forget: the core never
    /// observes completion; a result arrives later as `Msg::PageLoaded`.
    FetchPage { cursor: Option<crate::Cursor> },
    /// Deliver `Msg::SettleElapsed` after a short delay.
    ScheduleSettle,
}
