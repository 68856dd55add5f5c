use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

use crate::analysis::pipeline::Stage;
use crate::llm_client::LlmError;

/// Run-level error type.
/// Every variant aborts the run; `main` logs it once and maps it to an exit code.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Configuration error: {0:#}")]
    Config(#[from] anyhow::Error),

    #[error("Input error reading {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Input error reading {}: missing header row", path.display())]
    MissingHeader { path: PathBuf },

    #[error("No posts available to analyze")]
    NoData,

    #[error("Completion error: {0}")]
    Completion(#[from] LlmError),

    #[error("Output error writing {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AnalysisError {
    /// The pipeline stage that produced this error.
    pub fn stage(&self) -> Stage {
        match self {
            AnalysisError::Config(_) => Stage::Configuring,
            AnalysisError::Input { .. } | AnalysisError::MissingHeader { .. } => Stage::Loading,
            AnalysisError::NoData => Stage::Ranking,
            AnalysisError::Completion(_) => Stage::Requesting,
            AnalysisError::Output { .. } => Stage::Writing,
        }
    }

    /// Numeric process exit status reported for this error.
    pub fn exit_status(&self) -> u8 {
        match self {
            AnalysisError::Config(_) => 2,
            AnalysisError::Input { .. } | AnalysisError::MissingHeader { .. } => 3,
            AnalysisError::NoData => 4,
            AnalysisError::Completion(_) => 5,
            AnalysisError::Output { .. } => 6,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message_keeps_context_chain() {
        let err = AnalysisError::Config(
            anyhow::anyhow!("not present").context("Required environment variable 'X' is not set"),
        );
        let msg = err.to_string();
        assert!(msg.starts_with("Configuration error: Required environment variable 'X'"));
        assert!(msg.contains("not present"));
        assert_eq!(err.stage(), Stage::Configuring);
    }

    #[test]
    fn test_completion_error_stage_is_requesting() {
        let err = AnalysisError::from(LlmError::Shape("no choices in response".into()));
        assert_eq!(err.stage(), Stage::Requesting);
        assert!(err.to_string().contains("no choices"));
    }

    #[test]
    fn test_no_data_stage_is_ranking() {
        assert_eq!(AnalysisError::NoData.stage(), Stage::Ranking);
        assert_eq!(AnalysisError::NoData.exit_status(), 4);
    }
}
