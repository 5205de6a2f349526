// SPDX-License-Identifier: Apache-2.0

use crate::{handle::ReleaseFn, Error, Handle, Result, SharedHandle};
use log::{debug, trace};
use std::{
    any, fmt,
    sync::{Mutex, PoisonError},
};

/// Sole owner of an externally managed handle.
///
/// The release function runs exactly once, when an owning `UniqueHandle` is
/// dropped. Moving the wrapper moves the obligation with it; there is no
/// `Clone`.
///
/// The release function only has to be `Send`. It is kept behind a `Mutex`
/// so the wrapper stays `Sync`, but it is only ever reached through
/// `&mut self` and the lock is never taken.
pub struct UniqueHandle<H: Copy> {
    value: H,
    release: Mutex<Option<ReleaseFn<H>>>,
    owned: bool,
}

impl<H: Copy> UniqueHandle<H> {
    /// Takes ownership of `value`, to be released through `release`.
    pub fn new<F>(value: H, release: F) -> Self
    where
        F: FnOnce(H) + Send + 'static,
    {
        UniqueHandle {
            value,
            release: Mutex::new(Some(Box::new(release))),
            owned: true,
        }
    }

    /// Creates a non-owning view of a handle owned elsewhere.
    ///
    /// Dropping it never releases anything.
    pub fn borrowed(value: H) -> Self {
        UniqueHandle {
            value,
            release: Mutex::new(None),
            owned: false,
        }
    }

    /// Returns a copy of the handle value.
    pub fn get(&self) -> H {
        self.value
    }

    /// Checks if this instance will release the handle on drop.
    pub fn is_owned(&self) -> bool {
        self.owned
    }

    /// Gives up ownership without releasing and returns the raw value.
    ///
    /// The caller becomes responsible for releasing the handle.
    pub fn into_raw(mut self) -> Result<H> {
        if self.take_release().is_none() {
            return Err(Error::NotOwned);
        }

        trace!("Relinquished {} handle", any::type_name::<H>());
        Ok(self.value)
    }

    /// Moves ownership into a new `SharedHandle`.
    ///
    /// Unlike the `From` conversion this refuses a borrowed handle, which has
    /// no release obligation to hand over.
    pub fn into_shared(self) -> Result<SharedHandle<H>> {
        if !self.owned {
            return Err(Error::NotOwned);
        }

        Ok(SharedHandle::from(self))
    }

    /// Clears the owner flag and hands the release function to the caller.
    pub(crate) fn take_release(&mut self) -> Option<ReleaseFn<H>> {
        self.owned = false;
        self.release
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl<H: Copy> Drop for UniqueHandle<H> {
    fn drop(&mut self) {
        if !self.owned {
            return;
        }

        if let Some(release) = self.take_release() {
            debug!("Releasing unique {} handle", any::type_name::<H>());
            release(self.value);
        }
    }
}

impl<H: Copy + PartialEq> Handle for UniqueHandle<H> {
    type Value = H;

    fn get(&self) -> H {
        self.value
    }

    fn is_owned(&self) -> bool {
        self.owned
    }
}

/// Compares handle values only; ownership plays no part.
impl<H: Copy + PartialEq> PartialEq for UniqueHandle<H> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<H: Copy + Eq> Eq for UniqueHandle<H> {}

impl<H: Copy + fmt::Debug> fmt::Debug for UniqueHandle<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniqueHandle")
            .field("value", &self.value)
            .field("owned", &self.owned)
            .finish()
    }
}
