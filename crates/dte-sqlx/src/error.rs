/// An error that can occur when creating or scanning a value in this crate.
///
/// When the error was caused by a failure to parse text, the underlying
/// [`dte::Error`] is available via [`std::error::Error::source`].
#[derive(Clone, Debug)]
pub struct Error {
    kind: ErrorKind,
}

#[derive(Clone, Debug)]
enum ErrorKind {
    InvalidType { found: &'static str },
    New { what: &'static str, err: dte::Error },
    Scan { what: &'static str, err: dte::Error },
}

impl Error {
    pub(crate) fn invalid_type(found: &'static str) -> Error {
        Error { kind: ErrorKind::InvalidType { found } }
    }

    pub(crate) fn new(what: &'static str, err: dte::Error) -> Error {
        Error { kind: ErrorKind::New { what, err } }
    }

    pub(crate) fn scan(what: &'static str, err: dte::Error) -> Error {
        Error { kind: ErrorKind::Scan { what, err } }
    }

    /// Returns true when this error occurred because a value of an
    /// unsupported type was passed to `scan`.
    ///
    /// # Example
    ///
    /// ```
    /// use dte_sqlx::{Date, Value};
    ///
    /// let mut date = Date::default();
    /// assert!(date.scan(Value::Integer(1)).unwrap_err().is_invalid_type());
    /// ```
    pub fn is_invalid_type(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidType { .. })
    }

    /// Returns true when this error occurred because a value passed to
    /// `scan` could not be converted.
    ///
    /// # Example
    ///
    /// ```
    /// use dte_sqlx::{Time, Value};
    ///
    /// let mut time = Time::default();
    /// let err = time.scan(Value::Text("15:04:05")).unwrap_err();
    /// assert!(err.is_scan());
    /// assert!(!err.is_invalid_type());
    /// ```
    pub fn is_scan(&self) -> bool {
        matches!(self.kind, ErrorKind::Scan { .. })
    }

    /// Returns the underlying parse error, if one exists.
    pub fn as_dte(&self) -> Option<&dte::Error> {
        match self.kind {
            ErrorKind::InvalidType { .. } => None,
            ErrorKind::New { ref err, .. } | ErrorKind::Scan { ref err, .. } => {
                Some(err)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.as_dte().map(|err| err as &(dyn std::error::Error + 'static))
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.kind {
            ErrorKind::InvalidType { found } => {
                write!(f, "invalid type passed to scan: found {found}")
            }
            ErrorKind::New { what, ref err } => {
                write!(f, "failed to create new {what}: {err}")
            }
            ErrorKind::Scan { what, ref err } => {
                write!(f, "failed to scan value into {what}: {err}")
            }
        }
    }
}
