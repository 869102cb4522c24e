use thiserror::Error;

/// Every way a registration attempt can be turned away.
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Please connect your wallet to register")]
    NotConnected,
    #[error("Please switch to {network}")]
    WrongNetwork {
        network: String,
        expected: u64,
        actual: Option<u64>,
    },
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter your role")]
    MissingRole,
    #[error("Unknown role: {0}")]
    UnknownRole(String),
    #[error("A registration is already being processed")]
    SubmissionInFlight,
    #[error("No registration is waiting for confirmation")]
    NoPendingSubmission,
    #[error("{0}")]
    SubmissionRejected(String),
    #[error("{0}")]
    TransactionFailed(String),
}

impl RegistrationError {
    /// Whether this error is surfaced to the user as a notification.
    ///
    /// Unmapped roles fall out of the role lookup without any feedback, and
    /// the two flow guards correspond to a disabled submit button.
    pub fn is_user_facing(&self) -> bool {
        !matches!(
            self,
            Self::UnknownRole(_) | Self::SubmissionInFlight | Self::NoPendingSubmission
        )
    }
}

#[derive(Error, Debug)]
pub enum ChronifyError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Config error: {0}")]
    ConfigError(#[from] serde_json::Error),
    #[error(transparent)]
    Registration(#[from] RegistrationError),
}

pub type Result<T> = std::result::Result<T, ChronifyError>;
