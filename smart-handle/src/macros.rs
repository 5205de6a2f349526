// SPDX-License-Identifier: Apache-2.0

/// Defines a resource kind bound to a fixed release function.
///
/// The generated newtype wraps a [`UniqueHandle`](crate::UniqueHandle) and
/// derefs to it. Attributes given before the name are applied to the struct.
///
/// ```
/// use smart_handle::define_handle;
///
/// fn delete_buffer(_id: u32) {}
///
/// define_handle!(
///     /// A graphics buffer object.
///     #[derive(Debug, PartialEq)]
///     pub Buffer, u32, release: delete_buffer
/// );
///
/// let buffer = Buffer::new(3);
/// assert_eq!(buffer.get(), 3);
/// let shared = buffer.into_shared();
/// assert_eq!(shared.use_count(), 1);
/// ```
#[macro_export]
macro_rules! define_handle {
    (
        $(#[$attr:meta])*
        $vis:vis $name:ident, $value:ty, release: $release:path $(,)?
    ) => {
        $(#[$attr])*
        $vis struct $name($crate::UniqueHandle<$value>);

        impl $name {
            /// Takes ownership of a freshly created handle value.
            pub fn new(value: $value) -> Self {
                $name($crate::UniqueHandle::new(value, $release))
            }

            /// Returns a copy of the handle value.
            pub fn get(&self) -> $value {
                self.0.get()
            }

            /// Moves ownership into a `SharedHandle`.
            pub fn into_shared(self) -> $crate::SharedHandle<$value> {
                $crate::SharedHandle::from(self.0)
            }

            /// Gives up ownership without releasing.
            pub fn into_raw(self) -> $crate::Result<$value> {
                self.0.into_raw()
            }
        }

        impl ::std::ops::Deref for $name {
            type Target = $crate::UniqueHandle<$value>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl ::std::convert::From<$name> for $crate::UniqueHandle<$value> {
            fn from(handle: $name) -> Self {
                handle.0
            }
        }
    };
}
