use std::future::Future;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

use crate::error::Error;

/// Spawns tasks while holding at most `max_concurrent` of them in flight.
///
/// `spawn` waits for a free permit before spawning, so callers that spawn in
/// a loop get natural backpressure. With `max_concurrent = 1` the tasks run
/// strictly one after another in submission order.
pub struct LimitedSpawner {
    semaphore: Arc<Semaphore>,
}

impl LimitedSpawner {
    pub fn new(max_concurrent: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(max_concurrent.max(1))),
        }
    }

    pub async fn spawn<F>(&self, f: F) -> Result<JoinHandle<F::Output>, Error>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        let permit = Arc::clone(&self.semaphore).acquire_owned().await?;
        Ok(tokio::spawn(async move {
            let _permit = permit;
            f.await
        }))
    }
}
