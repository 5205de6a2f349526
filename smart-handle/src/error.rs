// SPDX-License-Identifier: Apache-2.0

use thiserror::Error as ThisError;

/// The core error variants.
#[derive(ThisError, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The instance carries no release obligation to give away.
    #[error("Handle is not owned by this instance")]
    NotOwned,

    /// Every shared owner is gone and the handle has been released.
    #[error("Handle has expired")]
    Expired,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::NotOwned.to_string(),
            "Handle is not owned by this instance"
        );
        assert_eq!(Error::Expired.to_string(), "Handle has expired");
    }
}
