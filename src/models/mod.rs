mod initialize;
mod slot0;

pub use initialize::InitializeEvent;
pub use slot0::Slot0Result;

/// A decoded `Initialize` event paired with the `getSlot0` state read for its pool id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolReport {
    pub event: InitializeEvent,
    pub slot0: Slot0Result,
}
