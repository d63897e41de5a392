use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] secscout_core::ConfigError),

    #[error(transparent)]
    Pipeline(#[from] secscout_core::PipelineError),

    #[error(transparent)]
    Snapshot(#[from] secscout_core::SnapshotError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 2,
            Self::Pipeline(error) if error.is_transport() => 3,
            Self::Pipeline(_) => 4,
            Self::Snapshot(_) => 5,
            Self::Serialization(_) => 6,
            Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use secscout_core::{ConfigError, HttpError, PipelineError, SelectionError};

    use super::*;

    #[test]
    fn exit_codes_separate_setup_transport_and_selection() {
        let config = CliError::from(ConfigError::MissingSecret {
            key: String::from("SEC_API_TOKEN"),
        });
        let transport = CliError::from(PipelineError::FilingSearch(HttpError::new("down")));
        let selection = CliError::from(PipelineError::Selection(SelectionError::OutOfRange {
            choice: 9,
            max: 2,
        }));

        assert_eq!(config.exit_code(), 2);
        assert_eq!(transport.exit_code(), 3);
        assert_eq!(selection.exit_code(), 4);
    }
}
