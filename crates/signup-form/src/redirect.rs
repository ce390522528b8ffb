//! Deferred navigation after a successful submission

use crate::state::FormState;
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Performs the page change once the grace period is over
pub trait Navigator: Send + Sync {
    fn navigate(&self, target: &str);
}

/// A scheduled redirect
#[derive(Debug)]
pub struct RedirectHandle {
    target: String,
    task: JoinHandle<bool>,
}

impl RedirectHandle {
    /// Spawn the timer; the task only keeps a weak reference to the flow
    pub(crate) fn schedule(
        state: &Arc<Mutex<FormState>>,
        navigator: Arc<dyn Navigator>,
        target: String,
        delay: Duration,
    ) -> Self {
        let flow = Arc::downgrade(state);
        let task_target = target.clone();

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            if !is_live(&flow) {
                debug!("Redirect to {} dropped: flow is gone", task_target);
                return false;
            }

            navigator.navigate(&task_target);
            true
        });

        Self { target, task }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Wait for the timer; true if navigation happened
    pub async fn wait(self) -> bool {
        self.task.await.unwrap_or(false)
    }
}

fn is_live(flow: &Weak<Mutex<FormState>>) -> bool {
    let Some(state) = flow.upgrade() else {
        return false;
    };
    let disposed = state
        .lock()
        .map(|s| s.is_disposed())
        .unwrap_or_else(|poisoned| poisoned.into_inner().is_disposed());
    !disposed
}
