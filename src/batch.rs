//! Batch job orchestration.
//!
//! Every rendering surface in rootshow (scenes, slide decks) is driven through
//! the same small contract: a [`Job`] wraps one opaque, side-effecting unit of
//! work; a [`Catalog`] is the ordered list of jobs for one batch invocation;
//! and [`run_sequential`] / [`run_parallel`] execute the catalog to completion,
//! producing exactly one [`JobResult`] per job.
//!
//! ## Failure isolation
//!
//! A job signals failure by returning `Err` from its action. That failure is
//! converted into a `JobResult` with `succeeded = false` at the per-job
//! boundary — it never aborts the batch, and under [`run_parallel`] it never
//! affects other running or queued jobs. Only catalog-level misconfiguration
//! (invalid sequence numbers, a zero worker count) is fatal, and it is raised
//! before any job runs.
//!
//! ## Ordering
//!
//! Execution and progress events under [`run_parallel`] follow true completion
//! order; the final [`BatchReport`] is always restored to catalog order. There
//! are no retries, no cancellation, and no timeouts: once dispatched, every
//! job runs to completion or failure, and the report covers all of them.
//!
//! ## Progress
//!
//! Callers that want live progress pass an `mpsc::Sender<JobResult>`; one
//! event is sent as each job completes. A dropped receiver is not an error —
//! the batch keeps running and the report is still produced.

use rayon::prelude::*;
use serde::Serialize;
use std::sync::mpsc::Sender;
use thiserror::Error;

/// Errors a job action may surface. Opaque to the orchestrator beyond
/// their `Display` output.
pub type JobError = Box<dyn std::error::Error + Send + Sync>;

/// A job's renderable unit: zero-argument, consumed exactly once.
pub type JobAction = Box<dyn FnOnce() -> Result<(), JobError> + Send>;

#[derive(Error, Debug)]
pub enum BatchError {
    /// Invalid orchestrator parameters — raised before any job runs.
    #[error("invalid batch configuration: {0}")]
    Configuration(String),
    /// The worker pool could not be constructed.
    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

/// One independent unit of rendering work with a declared order position
/// and a display name.
pub struct Job {
    sequence: u32,
    name: String,
    action: JobAction,
}

impl Job {
    pub fn new<F>(sequence: u32, name: impl Into<String>, action: F) -> Self
    where
        F: FnOnce() -> Result<(), JobError> + Send + 'static,
    {
        Self {
            sequence,
            name: name.into(),
            action: Box::new(action),
        }
    }

    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Job")
            .field("sequence", &self.sequence)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The ordered list of jobs for one batch invocation.
///
/// Construction validates the ordering contract: sequence numbers are
/// positive, unique, and ascending in declaration order. The catalog is
/// read-only from that point on and consumed by a single dispatch.
#[derive(Debug)]
pub struct Catalog {
    jobs: Vec<Job>,
}

impl Catalog {
    pub fn new(jobs: Vec<Job>) -> Result<Self, BatchError> {
        let mut previous = 0u32;
        for job in &jobs {
            if job.sequence == 0 {
                return Err(BatchError::Configuration(format!(
                    "job '{}' has sequence 0; sequence numbers start at 1",
                    job.name
                )));
            }
            if job.sequence <= previous {
                return Err(BatchError::Configuration(format!(
                    "job '{}' has sequence {} but the previous job has {}; \
                     sequence numbers must be unique and ascending",
                    job.name, job.sequence, previous
                )));
            }
            previous = job.sequence;
        }
        Ok(Self { jobs })
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Jobs in declaration order, for listings and lookups.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }
}

/// The success/failure outcome and message for one job.
#[derive(Debug, Clone, Serialize)]
pub struct JobResult {
    pub sequence: u32,
    pub name: String,
    pub succeeded: bool,
    pub message: String,
}

/// The complete, order-restored collection of results for a batch.
#[derive(Debug, Serialize)]
pub struct BatchReport {
    /// Number of jobs submitted.
    pub total: usize,
    /// One result per job, sorted by sequence number.
    pub results: Vec<JobResult>,
}

impl BatchReport {
    /// Number of jobs that ran to a terminal state (always equals `total`;
    /// the orchestrator never drops a job).
    pub fn completed(&self) -> usize {
        self.results.len()
    }

    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.succeeded).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &JobResult> {
        self.results.iter().filter(|r| !r.succeeded)
    }

    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(|r| r.succeeded)
    }
}

/// Run one job to its terminal state. The only place an action is invoked.
fn run_one(job: Job) -> JobResult {
    let Job {
        sequence,
        name,
        action,
    } = job;
    match action() {
        Ok(()) => {
            let message = format!("completed {name}");
            JobResult {
                sequence,
                name,
                succeeded: true,
                message,
            }
        }
        Err(e) => JobResult {
            sequence,
            name,
            succeeded: false,
            message: e.to_string(),
        },
    }
}

fn notify(progress: Option<&Sender<JobResult>>, result: &JobResult) {
    // A disconnected receiver means nobody is listening; the batch goes on.
    if let Some(tx) = progress {
        let _ = tx.send(result.clone());
    }
}

/// Run every job in declaration order, one at a time.
///
/// A failing job is recorded and the next job still runs; no job is skipped
/// or retried. One progress event is sent after each job completes. The
/// report order equals the catalog order.
pub fn run_sequential(catalog: Catalog, progress: Option<&Sender<JobResult>>) -> BatchReport {
    let total = catalog.jobs.len();
    let mut results = Vec::with_capacity(total);
    for job in catalog.jobs {
        let result = run_one(job);
        notify(progress, &result);
        results.push(result);
    }
    BatchReport { total, results }
}

/// Run every job with at most `max_workers` executing concurrently.
///
/// Jobs beyond the worker bound queue and are admitted as slots free up;
/// admission order among waiting jobs is not a contract. Progress events
/// arrive in completion order, which may differ from catalog order; the
/// returned report is re-sorted to catalog order.
///
/// `max_workers == 0` is a configuration error, raised before any job runs.
pub fn run_parallel(
    catalog: Catalog,
    max_workers: usize,
    progress: Option<&Sender<JobResult>>,
) -> Result<BatchReport, BatchError> {
    if max_workers == 0 {
        return Err(BatchError::Configuration(
            "max_workers must be at least 1".to_string(),
        ));
    }

    let total = catalog.jobs.len();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(max_workers)
        .build()?;

    let mut results: Vec<JobResult> = pool.install(|| {
        catalog
            .jobs
            .into_par_iter()
            .map(|job| {
                let result = run_one(job);
                notify(progress, &result);
                result
            })
            .collect()
    });

    // Completion order is whatever the pool delivered; the report contract
    // is catalog order.
    results.sort_by_key(|r| r.sequence);
    Ok(BatchReport { total, results })
}
