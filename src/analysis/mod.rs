pub mod aggregator;
pub mod analyzer;
pub mod reference;
pub mod report;

pub use aggregator::{aggregate_losses, classify, TradeDirection};
pub use analyzer::{AnalysisError, LossAnalyzer};
pub use reference::ReferenceAssets;
pub use report::{build_entries, LossEntry, LossOrder};
