//! Observable state cell shared by the view models.
//!
//! Wraps a `tokio::sync::watch` channel so the rendering layer can hold a
//! receiver and re-render on change, and pairs it with a request generation
//! counter. Both the counter bump and the check at completion happen while
//! the watch lock is held, so a response can never interleave with a newer
//! request between "is this still current?" and "apply it".

use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;

/// Token identifying one issued request. Larger is newer.
pub type Generation = u64;

pub struct StateHolder<S> {
    sender: watch::Sender<S>,
    generation: AtomicU64,
}

impl<S: Clone> StateHolder<S> {
    pub fn new(initial: S) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender,
            generation: AtomicU64::new(0),
        }
    }

    /// Current state, cloned.
    pub fn snapshot(&self) -> S {
        self.sender.borrow().clone()
    }

    /// Receiver that observes every committed change.
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.sender.subscribe()
    }

    /// Latest generation issued so far (0 before any request).
    pub fn current_generation(&self) -> Generation {
        self.generation.load(Ordering::SeqCst)
    }

    /// Issue a new request: bump the generation and apply `start` in one step.
    pub fn begin<F>(&self, start: F) -> Generation
    where
        F: FnOnce(&mut S),
    {
        let mut issued = 0;
        self.sender.send_modify(|state| {
            issued = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            start(state);
        });
        issued
    }

    /// Like `begin`, but only issues a request when `start` accepts the
    /// current state. `start` must leave the state untouched when it returns
    /// false; no generation is consumed and subscribers are not notified.
    pub fn try_begin<F>(&self, start: F) -> Option<Generation>
    where
        F: FnOnce(&mut S) -> bool,
    {
        let mut issued = None;
        self.sender.send_if_modified(|state| {
            if !start(state) {
                return false;
            }
            issued = Some(self.generation.fetch_add(1, Ordering::SeqCst) + 1);
            true
        });
        issued
    }

    /// Apply `finish` only if `generation` is still the latest issued.
    /// Returns false when the result was stale and dropped.
    pub fn complete<F>(&self, generation: Generation, finish: F) -> bool
    where
        F: FnOnce(&mut S),
    {
        self.sender.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            finish(state);
            true
        })
    }

    /// Replace the state outright and invalidate anything in flight.
    pub fn reset(&self, state: S) {
        self.sender.send_modify(|current| {
            self.generation.fetch_add(1, Ordering::SeqCst);
            *current = state;
        });
    }

    /// Read a projection of the state without cloning all of it.
    pub fn inspect<R, F>(&self, read: F) -> R
    where
        F: FnOnce(&S) -> R,
    {
        read(&self.sender.borrow())
    }
}
