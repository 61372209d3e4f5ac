// Logging is only ever emitted when the `logging` feature is enabled. Without
// it, every macro here expands to nothing and its arguments are never
// evaluated.
#![allow(unused_macros)]

macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    }
}

/// Used when a value is silently left untouched, e.g., for a JSON `null`.
macro_rules! debug {
    ($($tt:tt)*) => { log!(log::debug!(target: "dte", $($tt)*)) }
}

/// Used for each layout that fails to match while parsing.
macro_rules! trace {
    ($($tt:tt)*) => { log!(log::trace!(target: "dte", $($tt)*)) }
}

/// Used when a value is rejected after it was already successfully parsed.
macro_rules! warn {
    ($($tt:tt)*) => { log!(log::warn!(target: "dte", $($tt)*)) }
}
