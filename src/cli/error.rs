//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{0}")]
    Usage(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) | CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Infra(e) => match e {
                InfraError::Io { .. } => crate::exitcode::IOERR,
                InfraError::Application(app) => match app {
                    ApplicationError::Domain(_)
                    | ApplicationError::UnsupportedFormat(_)
                    | ApplicationError::Parse { .. } => crate::exitcode::DATAERR,
                    ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                    ApplicationError::OperationFailed { .. } => crate::exitcode::NOINPUT,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use std::path::PathBuf;

    #[test]
    fn given_errors_when_mapping_exit_codes_then_follow_sysexits() {
        let usage = CliError::Usage("no command".into());
        assert_eq!(usage.exit_code(), crate::exitcode::USAGE);

        let parse: CliError = ApplicationError::Parse {
            path: PathBuf::from("a.json"),
            message: "eof".into(),
        }
        .into();
        assert_eq!(parse.exit_code(), crate::exitcode::DATAERR);

        let domain: CliError =
            ApplicationError::from(DomainError::UnknownEntryKind("grant".into())).into();
        assert_eq!(domain.exit_code(), crate::exitcode::DATAERR);

        let io = CliError::from(InfraError::io(
            "write config",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        ));
        assert_eq!(io.exit_code(), crate::exitcode::IOERR);
    }
}
