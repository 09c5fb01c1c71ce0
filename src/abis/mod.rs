pub mod state_view;
pub mod v4;

pub use state_view::IStateView;
pub use v4::Initialize as V4Initialize;
