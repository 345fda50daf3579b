//! Main chat event loop
//!
//! Terminal input is read on a background task, turned into [`AppAction`]s,
//! and applied to the shared [`App`] once per loop iteration. Generate
//! requests run on their own tasks and report back over a channel.
//!
//! [`AppAction`]: crate::core::app::AppAction

mod event_loop;
mod keybindings;
mod lifecycle;

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::core::app::App;

pub use event_loop::run_chat;

/// Shared access to the [`App`] from the loop and its helpers.
#[derive(Clone)]
pub struct AppHandle {
    inner: Arc<Mutex<App>>,
}

impl AppHandle {
    pub fn new(app: App) -> Self {
        Self {
            inner: Arc::new(Mutex::new(app)),
        }
    }

    pub async fn read<R>(&self, f: impl FnOnce(&App) -> R) -> R {
        let guard = self.inner.lock().await;
        f(&guard)
    }

    pub async fn update<R>(&self, f: impl FnOnce(&mut App) -> R) -> R {
        let mut guard = self.inner.lock().await;
        f(&mut guard)
    }

    pub(crate) async fn lock(&self) -> MutexGuard<'_, App> {
        self.inner.lock().await
    }
}
