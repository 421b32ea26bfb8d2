//! # Application State
//!
//! Auth and wallet state containers. Each container owns a state cell and a
//! request-layer handle; views receive it as Leptos context.
//!
//! In the app the cell is an `RwSignal`, so every update re-renders the
//! views reading it. The containers only need [`StateCell`], which keeps
//! their logic runnable without a reactive runtime.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::*;

pub mod auth;
pub mod wallet;

/// Shared mutable cell a container writes its state through.
pub trait StateCell<S>: Clone + 'static {
    /// Apply `f`; returns `false` when the cell no longer exists.
    fn update(&self, f: impl FnOnce(&mut S)) -> bool;

    /// Read without subscribing; `None` when the cell no longer exists.
    fn read_with<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R>;
}

impl<S: Send + Sync + 'static> StateCell<S> for RwSignal<S> {
    fn update(&self, f: impl FnOnce(&mut S)) -> bool {
        self.try_update(f).is_some()
    }

    fn read_with<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

/// Liveness flag shared by a container and its in-flight operations.
/// Once detached, operations still run to completion but stop writing state.
#[derive(Debug, Clone)]
pub struct Lifetime(Arc<AtomicBool>);

impl Default for Lifetime {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl Lifetime {
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn detach(&self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
impl<S: 'static> StateCell<S> for Arc<std::sync::Mutex<S>> {
    fn update(&self, f: impl FnOnce(&mut S)) -> bool {
        match self.lock() {
            Ok(mut state) => {
                f(&mut state);
                true
            }
            Err(_) => false,
        }
    }

    fn read_with<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
        self.lock().ok().map(|state| f(&state))
    }
}
