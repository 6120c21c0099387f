// Tue Jan 13 2026 - Alex

use crate::account::Account;
use crate::command::AssembledCommand;
use crate::executor::{LaunchFailure, TaskExecutor, TaskResult};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::thread;

pub type TaskOutcome = Result<TaskResult, LaunchFailure>;

pub struct SyncTask {
    pub account: Arc<Account>,
    pub command: AssembledCommand,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    pub workers_spawned: usize,
    pub peak_active: usize,
}

/// Fixed-size pool of worker threads, each supervising at most one
/// child process at a time.
pub struct WorkerPool {
    size: usize,
}

impl WorkerPool {
    pub fn new(size: usize) -> Self {
        Self { size: size.max(1) }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Runs every task and returns once all of them have finished.
    ///
    /// `on_complete` is called on the calling thread, in completion
    /// order, as outcomes arrive.
    pub fn run<F>(
        &self,
        tasks: Vec<SyncTask>,
        executor: &TaskExecutor,
        mut on_complete: F,
    ) -> (Vec<TaskOutcome>, PoolStats)
    where
        F: FnMut(&TaskOutcome),
    {
        let total = tasks.len();
        let worker_count = self.size.min(total);
        let queue = Mutex::new(tasks.into_iter().collect::<VecDeque<_>>());
        let active = AtomicUsize::new(0);
        let peak = AtomicUsize::new(0);
        let mut outcomes = Vec::with_capacity(total);

        log::debug!("Dispatching {} tasks to {} workers", total, worker_count);

        thread::scope(|scope| {
            let (sender, receiver) = channel::<TaskOutcome>();

            for _ in 0..worker_count {
                let sender = sender.clone();
                let queue = &queue;
                let active = &active;
                let peak = &peak;

                scope.spawn(move || loop {
                    let task = queue.lock().pop_front();
                    let Some(task) = task else {
                        break;
                    };

                    let running = active.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(running, Ordering::SeqCst);

                    let outcome = executor.execute(task.account, &task.command);

                    active.fetch_sub(1, Ordering::SeqCst);

                    if sender.send(outcome).is_err() {
                        break;
                    }
                });
            }

            drop(sender);

            for outcome in receiver {
                on_complete(&outcome);
                outcomes.push(outcome);
            }
        });

        let stats = PoolStats {
            workers_spawned: worker_count,
            peak_active: peak.load(Ordering::SeqCst),
        };

        (outcomes, stats)
    }
}
