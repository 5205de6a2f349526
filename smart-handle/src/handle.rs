// SPDX-License-Identifier: Apache-2.0

/// Release function stored by the owning wrappers.
///
/// Invoked at most once, with the handle value, from whichever thread drops
/// the last owner.
pub type ReleaseFn<H> = Box<dyn FnOnce(H) + Send + 'static>;

/// Core trait for all wrappers with handle-based ownership.
pub trait Handle {
    /// The raw value this handle wraps.
    type Value: Copy + PartialEq;

    /// Returns a copy of the raw value.
    fn get(&self) -> Self::Value;

    /// Checks if dropping this instance may release the underlying resource.
    ///
    /// `false` for views created from a borrowed handle, which carry no
    /// release function at all.
    fn is_owned(&self) -> bool;
}
