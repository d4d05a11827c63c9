//! Configuration errors

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A restricted-choice field was given a value outside its closed set.
    ///
    /// `supported` is the comma-joined alias list in declaration order.
    #[error("{value} is not a supported {option} ({supported})")]
    UnsupportedOption {
        option: &'static str,
        value: String,
        supported: String,
    },
}

impl ConfigError {
    /// Build an `UnsupportedOption` error, logging the rejected value.
    pub(crate) fn unsupported(option: &'static str, value: &str, supported: &[&str]) -> Self {
        let supported = supported.join(",");
        tracing::warn!(option, value, supported = %supported, "rejected unsupported option");
        ConfigError::UnsupportedOption {
            option,
            value: value.to_string(),
            supported,
        }
    }
}
