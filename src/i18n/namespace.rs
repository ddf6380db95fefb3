// SPDX-License-Identifier: MPL-2.0
//! Per-page namespace loading with a ready flag.
//!
//! A page mounts a [`NamespaceGate`] with the namespaces it reads. The load
//! runs on the tokio runtime in the background; the page polls
//! [`NamespaceGate::is_ready`] or awaits [`NamespaceGate::wait`]. Once the
//! gate is dropped the flag is never touched again, though the load itself
//! completes and stays cached in the store.

use crate::application::port::SourceError;
use crate::domain::Namespace;
use crate::error::{Error, Result};
use crate::i18n::store::LocaleStore;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;

#[derive(Debug)]
pub struct NamespaceGate {
    namespaces: Vec<Namespace>,
    ready: Arc<AtomicBool>,
    cancelled: Arc<AtomicBool>,
    task: Option<JoinHandle<Result<()>>>,
    outcome: Option<Result<()>>,
}

impl NamespaceGate {
    /// Starts loading `namespaces` once for this mount.
    ///
    /// Must be called from within a tokio runtime. If everything is already
    /// loaded the gate is ready immediately and no task is spawned.
    pub fn mount(store: &LocaleStore, namespaces: &[Namespace]) -> Self {
        let namespaces = namespaces.to_vec();
        let ready = Arc::new(AtomicBool::new(false));
        let cancelled = Arc::new(AtomicBool::new(false));

        if namespaces.iter().all(|ns| store.is_namespace_loaded(*ns)) {
            ready.store(true, Ordering::Release);
            return Self {
                namespaces,
                ready,
                cancelled,
                task: None,
                outcome: Some(Ok(())),
            };
        }

        let task = tokio::spawn({
            let store = store.clone();
            let namespaces = namespaces.clone();
            let ready = Arc::clone(&ready);
            let cancelled = Arc::clone(&cancelled);
            async move {
                let result = store.load_namespaces(&namespaces).await;
                if result.is_ok() && !cancelled.load(Ordering::Acquire) {
                    ready.store(true, Ordering::Release);
                }
                result
            }
        });

        Self {
            namespaces,
            ready,
            cancelled,
            task: Some(task),
            outcome: None,
        }
    }

    /// Every namespace of this mount is merged.
    ///
    /// Stays `false` after a failed load; [`NamespaceGate::wait`] reports
    /// which namespaces failed and a new mount retries them.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn namespaces(&self) -> &[Namespace] {
        &self.namespaces
    }

    /// Waits for the load and returns its outcome. Later calls return the
    /// same outcome without waiting.
    pub async fn wait(&mut self) -> Result<()> {
        if let Some(task) = self.task.take() {
            let outcome = match task.await {
                Ok(result) => result,
                Err(join_error) => Err(Error::NamespaceLoad {
                    failed: self.namespaces.clone(),
                    source: SourceError::Interrupted(join_error.to_string()),
                }),
            };
            self.outcome = Some(outcome);
        }
        self.outcome.clone().unwrap_or(Ok(()))
    }

    /// Detaches the gate from its page; the ready flag stops updating.
    pub fn unmount(self) {}
}

impl Drop for NamespaceGate {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::Release);
    }
}
