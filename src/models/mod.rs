pub mod loss;

pub use loss::{LossSummary, TokenLoss, WalletAnalysisResult};
