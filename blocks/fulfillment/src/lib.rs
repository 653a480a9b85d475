//! Asynchronous half of the pipeline: turns queued slash commands into
//! generated images posted back to Discord.

pub mod retry;
pub mod worker;

pub use retry::RetryPolicy;
pub use worker::{fulfill_job, process_batch, FulfillmentError, JobOutcome, QueuedJob};
