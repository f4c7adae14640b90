// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Errors reported by [`RichText`](crate::RichText) editing and the
/// [`MarkupService`](crate::MarkupService).
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// A range did not fit the text it was applied to.
    Range(attributed_text::Error),
    /// The markup service shut down before answering.
    ServiceClosed,
    /// The importer thread could not be started.
    Spawn(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range(err) => write!(f, "{err}"),
            Self::ServiceClosed => f.write_str("markup service is closed"),
            Self::Spawn(err) => write!(f, "failed to start markup importer thread: {err}"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Range(err) => Some(err),
            Self::ServiceClosed => None,
            Self::Spawn(err) => Some(err),
        }
    }
}

impl From<attributed_text::Error> for Error {
    fn from(err: attributed_text::Error) -> Self {
        Self::Range(err)
    }
}

impl Error {
    /// The range error, if this is one.
    pub fn as_range(&self) -> Option<&attributed_text::Error> {
        match self {
            Self::Range(err) => Some(err),
            _ => None,
        }
    }
}
