// SPDX-License-Identifier: Apache-2.0

use crate::{shared::Registration, Error, Result, SharedHandle};
use derive_more::Display;
use log::trace;
use std::{
    any, fmt,
    sync::{Arc, Weak},
};

/// Lifecycle of a shared handle as seen by an observer.
///
/// The transition from `Alive` to `Released` is one-way.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleState {
    #[display("alive")]
    Alive,
    #[display("released")]
    Released,
}

/// Non-owning observer of a `SharedHandle`.
///
/// Never keeps the handle alive and never delays its release.
pub struct WeakHandle<H: Copy> {
    value: H,
    registration: Weak<Registration<H>>,
}

impl<H: Copy> WeakHandle<H> {
    /// Attempts to obtain a new co-owner.
    ///
    /// Returns `None` once every `SharedHandle` has been dropped.
    pub fn lock(&self) -> Option<SharedHandle<H>> {
        let registration = self.registration.upgrade()?;
        trace!("Promoted weak {} handle", any::type_name::<H>());
        Some(SharedHandle::attach(self.value, registration))
    }

    /// Like [`lock`](Self::lock), reporting expiry as [`Error::Expired`].
    pub fn try_lock(&self) -> Result<SharedHandle<H>> {
        self.lock().ok_or(Error::Expired)
    }

    /// Returns `true` if promotion would currently fail.
    ///
    /// The answer may be stale by the time the caller acts on it; check the
    /// result of `lock` instead of relying on this.
    pub fn expired(&self) -> bool {
        self.registration.strong_count() == 0
    }

    /// Returns the current lifecycle state, with the same caveat as `expired`.
    pub fn state(&self) -> HandleState {
        if self.expired() {
            HandleState::Released
        } else {
            HandleState::Alive
        }
    }

    /// Returns a copy of the observed value. Says nothing about liveness.
    pub fn get(&self) -> H {
        self.value
    }
}

impl<H: Copy> From<&SharedHandle<H>> for WeakHandle<H> {
    fn from(shared: &SharedHandle<H>) -> Self {
        WeakHandle {
            value: shared.get(),
            registration: Arc::downgrade(shared.registration()),
        }
    }
}

impl<H: Copy> Clone for WeakHandle<H> {
    fn clone(&self) -> Self {
        WeakHandle {
            value: self.value,
            registration: Weak::clone(&self.registration),
        }
    }
}

impl<H: Copy + PartialEq> PartialEq for WeakHandle<H> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && Weak::ptr_eq(&self.registration, &other.registration)
    }
}

impl<H: Copy + Eq> Eq for WeakHandle<H> {}

impl<H: Copy + fmt::Debug> fmt::Debug for WeakHandle<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakHandle")
            .field("value", &self.value)
            .field("state", &self.state())
            .finish()
    }
}
