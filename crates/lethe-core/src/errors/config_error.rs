/// Configuration errors. Raised when a config is loaded or validated, or when
/// a section name fails to resolve.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{field} = {value} is out of range: {reason}")]
    OutOfRange {
        field: String,
        value: f64,
        reason: String,
    },

    #[error("threshold {lower} must be below {upper}")]
    InvertedThresholds { lower: String, upper: String },

    #[error("unknown section: {name}")]
    UnknownSection { name: String },
}
