//! Type-level proof that an error was reported.

use std::fmt;

/// Proof that at least one error has been reported to a [`Reporter`].
///
/// Only [`Reporter`] can create one, so a function returning
/// `Result<T, ErrorGuaranteed>` cannot fail without a diagnostic.
///
/// [`Reporter`]: crate::Reporter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ErrorGuaranteed(());

impl ErrorGuaranteed {
    #[inline]
    pub(crate) fn new() -> Self {
        ErrorGuaranteed(())
    }
}

impl fmt::Display for ErrorGuaranteed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("error(s) reported")
    }
}
