//! Submission handler: normalized payloads and the transports that accept them

mod payload;
mod sink;
mod traits;

pub use payload::Submission;
pub use sink::build_sink;
pub use traits::{Receipt, SubmissionSink};

#[cfg(test)]
pub use traits::MockSubmissionSink;
