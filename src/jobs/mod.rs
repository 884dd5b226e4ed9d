//! Chart jobs: the job list and its concurrent execution

mod batch;
mod job;

pub use batch::{JobReport, create_graph, run_batch, run_job};
pub use job::{Job, JobList};
