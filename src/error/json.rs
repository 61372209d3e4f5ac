use crate::error;

#[derive(Clone, Debug)]
pub(crate) enum Error {
    NotString { what: &'static str },
    Reformat { what: &'static str },
}

impl From<Error> for error::ErrorKind {
    fn from(err: Error) -> error::ErrorKind {
        error::ErrorKind::Json(err)
    }
}

impl From<Error> for error::Error {
    #[cold]
    #[inline(never)]
    fn from(err: Error) -> error::Error {
        error::ErrorKind::Json(err).into()
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            NotString { what } => write!(
                f,
                "failed to decode {what} from JSON: \
                 input is not a JSON string",
            ),
            Reformat { what } => write!(
                f,
                "failed to reformat decoded RFC 3339 timestamp as a {what}",
            ),
        }
    }
}
