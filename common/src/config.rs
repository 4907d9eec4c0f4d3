use crate::money::DEFAULT_CURRENCY_SYMBOL;

#[derive(Debug, Clone)]
pub struct Config {
    /// Skips the banner printed at startup.
    pub no_banner: bool,
    /// Verbosity reduction.
    ///
    /// `1` hides headers, `2` additionally hides per-row details and only
    /// prints summaries.
    pub quiet: u8,
    /// Symbol prepended to every formatted amount.
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_banner: false,
            quiet: 0,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}
