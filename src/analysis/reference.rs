use std::collections::HashSet;

pub const WRAPPED_SOL_MINT: &str = "So11111111111111111111111111111111111111112";
pub const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
pub const USDT_MINT: &str = "Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB";

/// Assets treated as money when deciding whether a swap is a buy or a sell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceAssets {
    mints: HashSet<String>,
}

impl Default for ReferenceAssets {
    /// SOL, USDC and USDT.
    fn default() -> Self {
        Self::new([WRAPPED_SOL_MINT, USDC_MINT, USDT_MINT])
    }
}

impl ReferenceAssets {
    pub fn new<I, S>(mints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mints: mints.into_iter().map(Into::into).collect(),
        }
    }

    /// Add more money-like mints on top of the current set.
    pub fn with_mints<I, S>(mut self, mints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mints.extend(mints.into_iter().map(Into::into));
        self
    }

    pub fn contains(&self, mint: &str) -> bool {
        self.mints.contains(mint)
    }
}
