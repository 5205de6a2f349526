// SPDX-License-Identifier: Apache-2.0

use crate::{handle::ReleaseFn, Handle, UniqueHandle, WeakHandle};
use log::{debug, trace};
use std::{
    any, fmt,
    sync::{Arc, Mutex, PoisonError},
};

/// The release registration shared by all co-owners of a handle.
///
/// Runs the release function when the last strong reference goes away. The
/// `Mutex` only makes a `Send` release function shareable; it is reached
/// through `get_mut` in `drop` and never locked.
pub(crate) struct Registration<H: Copy> {
    value: H,
    owned: bool,
    release: Mutex<Option<ReleaseFn<H>>>,
}

impl<H: Copy> Drop for Registration<H> {
    fn drop(&mut self) {
        let release = self
            .release
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(release) = release {
            debug!("Releasing shared {} handle", any::type_name::<H>());
            release(self.value);
        }
    }
}

/// Reference-counted co-owner of an externally managed handle.
///
/// Cloning adds a co-owner. The release function runs once, when the last
/// co-owner is dropped. The count lives in an atomic, so handles may be
/// cloned and dropped from any thread without locking.
pub struct SharedHandle<H: Copy> {
    value: H,
    registration: Arc<Registration<H>>,
}

impl<H: Copy> SharedHandle<H> {
    /// Takes ownership of `value`, to be released through `release` once the
    /// last co-owner is gone.
    pub fn new<F>(value: H, release: F) -> Self
    where
        F: FnOnce(H) + Send + 'static,
    {
        Self::from_release(value, Some(Box::new(release)))
    }

    fn from_release(value: H, release: Option<ReleaseFn<H>>) -> Self {
        SharedHandle {
            value,
            registration: Arc::new(Registration {
                value,
                owned: release.is_some(),
                release: Mutex::new(release),
            }),
        }
    }

    /// Joins an existing registration as one more co-owner.
    pub(crate) fn attach(value: H, registration: Arc<Registration<H>>) -> Self {
        SharedHandle {
            value,
            registration,
        }
    }

    pub(crate) fn registration(&self) -> &Arc<Registration<H>> {
        &self.registration
    }

    /// Returns a copy of the handle value.
    pub fn get(&self) -> H {
        self.value
    }

    /// Checks if the last co-owner's drop will release the handle.
    ///
    /// `false` only for handles converted from a borrowed `UniqueHandle`.
    pub fn is_owned(&self) -> bool {
        self.registration.owned
    }

    /// Returns the number of co-owners.
    ///
    /// Advisory only: other threads may clone or drop co-owners concurrently.
    pub fn use_count(&self) -> usize {
        Arc::strong_count(&self.registration)
    }

    /// Returns the number of weak observers. Advisory, like `use_count`.
    pub fn weak_count(&self) -> usize {
        Arc::weak_count(&self.registration)
    }

    /// Creates a non-owning observer of this handle.
    pub fn downgrade(&self) -> WeakHandle<H> {
        WeakHandle::from(self)
    }

    /// Returns `true` if both handles co-own the same registration.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.registration, &b.registration)
    }
}

impl<H: Copy> Clone for SharedHandle<H> {
    fn clone(&self) -> Self {
        SharedHandle {
            value: self.value,
            registration: Arc::clone(&self.registration),
        }
    }
}

impl<H: Copy> From<UniqueHandle<H>> for SharedHandle<H> {
    /// Moves ownership out of `unique`; its drop becomes a no-op.
    ///
    /// A borrowed `UniqueHandle` yields a shared handle that releases nothing
    /// and reports `is_owned() == false`.
    fn from(mut unique: UniqueHandle<H>) -> Self {
        let value = unique.get();
        let release = unique.take_release();
        if release.is_some() {
            trace!("Moved unique {} handle into shared", any::type_name::<H>());
        }

        Self::from_release(value, release)
    }
}

impl<H: Copy + PartialEq> Handle for SharedHandle<H> {
    type Value = H;

    fn get(&self) -> H {
        self.value
    }

    fn is_owned(&self) -> bool {
        self.registration.owned
    }
}

/// Equal when the values match and both co-own the same registration.
impl<H: Copy + PartialEq> PartialEq for SharedHandle<H> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && Self::ptr_eq(self, other)
    }
}

impl<H: Copy + Eq> Eq for SharedHandle<H> {}

impl<H: Copy + fmt::Debug> fmt::Debug for SharedHandle<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedHandle")
            .field("value", &self.value)
            .field("use_count", &self.use_count())
            .finish()
    }
}
