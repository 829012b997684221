//! Order submission errors

/// Banner text when a failure carries no server message
pub const SUBMISSION_FAILED_MESSAGE: &str = "Order submission failed";

/// Why an order was not placed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// The server answered with a non-2xx status
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// No usable answer: connection failure or unreadable response
    #[error("{}", SUBMISSION_FAILED_MESSAGE)]
    Transport(String),
}

impl SubmissionError {
    /// Text for the failure banner
    pub fn banner_message(&self) -> String {
        self.to_string()
    }
}

impl From<reqwest::Error> for SubmissionError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
