pub mod submission;
pub mod validation_helpers;

pub use submission::{Channel, ChannelKind, Submission, SubmissionError};
