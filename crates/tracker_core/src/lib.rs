//! Tracker core: pure listing state machine, fetch coordination and view-model helpers.
mod effect;
pub mod format;
mod item;
mod msg;
mod outcome;
mod query;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use item::{Holding, ItemKey, ListingItem, PortfolioStats, StockInfo, TradeKind};
pub use msg::Msg;
pub use outcome::{FailureReason, FetchOutcome, FetchRequest, Seq};
pub use query::{Event, Phase, QueryState};
pub use state::ListingState;
pub use update::update;
pub use view_model::{row_number, ListingView, Notice, RowView, PAGE_SIZE};
