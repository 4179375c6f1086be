//! Connection cleanup run during graceful shutdown.

use tracing::{error, info};

/// Close a SeaORM connection pool and log the outcome.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::close_postgres;
///
/// close_postgres(db, "inventory").await;
/// ```
pub async fn close_postgres(db: sea_orm::DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(_) => info!("PostgreSQL connection '{}' closed successfully", name),
        Err(e) => error!("Error closing PostgreSQL connection '{}': {}", name, e),
    }
}

/// Runs named cleanup tasks concurrently and waits for all of them.
///
/// A task that panics is logged; the others still complete.
///
/// # Example
/// ```ignore
/// let mut cleanup = CleanupCoordinator::new();
/// cleanup.add_task("postgres", async move { close_postgres(db, "inventory").await });
/// cleanup.run().await;
/// ```
#[derive(Default)]
pub struct CleanupCoordinator {
    tasks: Vec<(&'static str, tokio::task::JoinHandle<()>)>,
}

impl CleanupCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn `task` now and track it under `name`.
    pub fn add_task<F>(&mut self, name: &'static str, task: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        self.tasks.push((name, tokio::spawn(task)));
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub async fn run(self) {
        info!("Running {} cleanup tasks", self.tasks.len());

        for (name, handle) in self.tasks {
            match handle.await {
                Ok(_) => info!("Cleanup task '{}' completed successfully", name),
                Err(e) => error!("Cleanup task '{}' failed: {}", name, e),
            }
        }

        info!("All cleanup tasks completed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_runs_every_task_even_after_a_panic() {
        let done = Arc::new(AtomicUsize::new(0));
        let mut cleanup = CleanupCoordinator::new();

        for name in ["first", "second"] {
            let done = Arc::clone(&done);
            cleanup.add_task(name, async move {
                done.fetch_add(1, Ordering::SeqCst);
            });
        }
        cleanup.add_task("broken", async { panic!("boom") });
        assert_eq!(cleanup.len(), 3);

        cleanup.run().await;
        assert_eq!(done.load(Ordering::SeqCst), 2);
    }
}
