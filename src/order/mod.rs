//! Order API module for HTTP communication

mod client;
mod error;
mod traits;

pub use client::OrderClient;
pub use error::SubmissionError;
pub use traits::OrderApi;

#[cfg(test)]
pub use error::SUBMISSION_FAILED_MESSAGE;
#[cfg(test)]
pub use traits::MockOrderApi;
