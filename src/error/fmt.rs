use alloc::boxed::Box;

use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    ExpectedByte { expected: u8, found: Option<u8> },
    ExpectedDigits { what: &'static str, count: u8 },
    ExpectedHour,
    ExpectedOffset { found: Option<u8> },
    NoLayouts,
    Range { what: &'static str, given: i64, min: i64, max: i64 },
    TrailingInput { unparsed: Box<str> },
}

impl From<Error> for error::ErrorKind {
    fn from(err: Error) -> error::ErrorKind {
        error::ErrorKind::Fmt(err)
    }
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Fmt(err).into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            ExpectedByte { expected, found } => write!(
                f,
                "expected `{expected}`, but found {found}",
                expected = char::from(expected),
                found = Found(found),
            ),
            ExpectedDigits { what, count } => {
                write!(f, "expected {count} digit {what}")
            }
            ExpectedHour => f.write_str("expected one or two digit hour"),
            ExpectedOffset { found } => write!(
                f,
                "expected `Z` or a sign (`+` or `-`) for UTC offset, \
                 but found {found}",
                found = Found(found),
            ),
            NoLayouts => f.write_str("no layouts to try"),
            Range { what, given, min, max } => write!(
                f,
                "{what} value {given} is not in the required range \
                 of {min}..={max}",
            ),
            TrailingInput { ref unparsed } => write!(
                f,
                "parsed value, but unparsed input {unparsed:?} remains \
                 (expected no unparsed input)",
            ),
        }
    }
}

/// Renders the byte found where something else was expected.
struct Found(Option<u8>);

impl core::fmt::Display for Found {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.0 {
            None => f.write_str("end of input"),
            Some(byte) => write!(f, "`{}`", byte.escape_ascii()),
        }
    }
}
