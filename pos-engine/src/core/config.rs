use rust_decimal::Decimal;

/// Sales tax rate applied to the discounted subtotal (8.25%).
///
/// A fixed deployment constant, not derived from any external tax table.
/// Override with the TAX_RATE environment variable.
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(825, 0, 0, false, 4);

/// Engine configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | DATA_DIR | ./data | Archive database location |
/// | TAX_RATE | 0.0825 | Sales tax rate |
/// | TABLE_COUNT | 10 | Tables seeded at startup |
/// | LOG_LEVEL | info | Tracing level filter |
///
/// # Example
///
/// ```ignore
/// DATA_DIR=/var/lib/mesa TAX_RATE=0.10 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the paid-order archive and logs
    pub data_dir: String,
    /// Tax rate applied by the bill calculator
    pub tax_rate: Decimal,
    /// Number of tables seeded at startup
    pub table_count: u32,
    /// Log level: trace | debug | info | warn | error
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".into()),
            tax_rate: std::env::var("TAX_RATE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TAX_RATE),
            table_count: std::env::var("TABLE_COUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
        }
    }

    /// Override the data directory, keeping everything else from the
    /// environment. Used by tests.
    pub fn with_data_dir(data_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.data_dir = data_dir.into();
        config
    }

    /// Path of the paid-order archive database
    pub fn archive_path(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.data_dir).join("paid_orders.redb")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
