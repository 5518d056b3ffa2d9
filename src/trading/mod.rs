pub mod listing;
pub mod metrics;
pub mod trade_record;

pub use listing::{decorate, TradeListingEntry};
pub use metrics::TradeMetrics;
pub use trade_record::{TradeRecord, TradeSignal};
