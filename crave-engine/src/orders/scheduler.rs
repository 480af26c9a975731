//! One-shot delayed tasks
//!
//! The lifecycle controller schedules exactly one task per order (the
//! reveal) and cancels it on reset. Two implementations:
//!
//! - [`TokioScheduler`] - real timers on a tokio runtime
//! - [`ManualScheduler`] - fake clock advanced by hand, for tests and for
//!   callers without a runtime

use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

/// Task run when the delay elapses
pub type ScheduledTask = Box<dyn FnOnce() + Send + 'static>;

/// Handle to a scheduled task
///
/// Cancelling is idempotent; a cancelled task never runs.
#[derive(Debug, Clone)]
pub struct TimerHandle {
    token: CancellationToken,
}

impl TimerHandle {
    fn new(token: CancellationToken) -> Self {
        Self { token }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// Source of one-shot delayed tasks
pub trait DeliveryScheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: ScheduledTask) -> TimerHandle;
}

// ============================================================================
// TokioScheduler
// ============================================================================

/// Scheduler backed by `tokio::time::sleep`
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    pub fn from_handle(handle: Handle) -> Self {
        Self { handle }
    }

    /// Use the runtime of the calling context
    pub fn try_current() -> Result<Self, tokio::runtime::TryCurrentError> {
        Handle::try_current().map(Self::from_handle)
    }
}

impl DeliveryScheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: ScheduledTask) -> TimerHandle {
        let token = CancellationToken::new();
        let cancelled = token.clone();

        self.handle.spawn(async move {
            tokio::select! {
                biased;
                _ = cancelled.cancelled() => {
                    tracing::debug!("Scheduled task cancelled");
                }
                _ = tokio::time::sleep(delay) => {
                    if !cancelled.is_cancelled() {
                        task();
                    }
                }
            }
        });

        TimerHandle::new(token)
    }
}

// ============================================================================
// ManualScheduler
// ============================================================================

struct PendingTask {
    due: Duration,
    seq: u64,
    token: CancellationToken,
    task: ScheduledTask,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_seq: u64,
    pending: Vec<PendingTask>,
}

/// Fake clock: nothing runs until [`ManualScheduler::advance`]
#[derive(Default)]
pub struct ManualScheduler {
    clock: Mutex<ManualClock>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the fake clock
    pub fn now(&self) -> Duration {
        self.clock.lock().now
    }

    /// Number of scheduled tasks that are neither run nor cancelled
    pub fn pending(&self) -> usize {
        self.clock
            .lock()
            .pending
            .iter()
            .filter(|p| !p.token.is_cancelled())
            .count()
    }

    /// Move the clock forward, running due tasks in (due time, schedule
    /// order). Returns how many tasks ran.
    ///
    /// Tasks run without the clock locked, so a task may schedule again.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.clock.lock().now + by;
        let mut fired = 0;

        loop {
            let next = {
                let mut clock = self.clock.lock();
                let idx = clock
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(idx, _)| idx);
                match idx {
                    Some(idx) => {
                        let task = clock.pending.swap_remove(idx);
                        clock.now = task.due.max(clock.now);
                        task
                    }
                    None => {
                        clock.now = target;
                        break;
                    }
                }
            };

            if next.token.is_cancelled() {
                continue;
            }
            (next.task)();
            fired += 1;
        }

        fired
    }
}

impl DeliveryScheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: ScheduledTask) -> TimerHandle {
        let token = CancellationToken::new();
        let mut clock = self.clock.lock();
        let seq = clock.next_seq;
        clock.next_seq += 1;
        let due = clock.now + delay;
        clock.pending.push(PendingTask {
            due,
            seq,
            token: token.clone(),
            task,
        });
        TimerHandle::new(token)
    }
}
