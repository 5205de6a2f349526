// SPDX-License-Identifier: Apache-2.0

//! Ownership wrappers for handles released through an external API.
//!
//! A handle is an opaque, cheaply copied value (a buffer ID, a native
//! pointer-as-ID) created and destroyed by some other library. The wrappers
//! here pair the value with the matching destroy call and run it exactly once:
//!
//! - [`UniqueHandle`]: sole owner, move-only.
//! - [`SharedHandle`]: reference-counted co-owner, cloneable.
//! - [`WeakHandle`]: non-owning observer of a `SharedHandle`, promotable while
//!   any co-owner is alive.

#[macro_use]
mod macros;

pub mod error;
pub mod handle;
pub mod shared;
pub mod unique;
pub mod weak;

pub use error::{Error, Result};
pub use handle::{Handle, ReleaseFn};
pub use shared::SharedHandle;
pub use unique::UniqueHandle;
pub use weak::{HandleState, WeakHandle};
