//! Projection configuration: display precisions and sentinels.

/// Fractional digits used to render `price`, `buy` and `sell`.
pub const RATIONAL_PRECISION: u32 = 8;

/// Fractional digits used to render the running `sum` and the buy total.
pub const DEFAULT_PRECISION: u32 = 10;

/// Display value of an order whose price cannot be computed.
pub const UNPRICED: &str = "N/A";

/// Display value of the buy total while the selected token's decimals are unknown.
pub const LOADING: &str = "Loading";

/// Precisions applied when rendering exact rationals to decimal strings.
///
/// Internal comparisons and accumulation always use the unrounded values;
/// these only affect the display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookConfig {
    pub rational_precision: u32,
    pub default_precision: u32,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            rational_precision: RATIONAL_PRECISION,
            default_precision: DEFAULT_PRECISION,
        }
    }
}

impl BookConfig {
    pub fn builder() -> BookConfigBuilder {
        BookConfigBuilder::default()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Default)]
pub struct BookConfigBuilder {
    config: BookConfig,
}

impl BookConfigBuilder {
    pub fn rational_precision(mut self, digits: u32) -> Self {
        self.config.rational_precision = digits;
        self
    }

    pub fn default_precision(mut self, digits: u32) -> Self {
        self.config.default_precision = digits;
        self
    }

    pub fn build(self) -> BookConfig {
        self.config
    }
}
