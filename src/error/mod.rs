use alloc::{boxed::Box, string::String, sync::Arc};

pub(crate) mod fmt;
pub(crate) mod json;

/// An error that can occur in this crate.
///
/// Errors are produced when text does not match any accepted layout, when a
/// JSON value cannot be decoded into a [`Date`](crate::Date) or a
/// [`Time`](crate::Time), or when Jiff itself rejects a value.
///
/// # Introspection is limited
///
/// Other than implementing the [`std::error::Error`] trait when the `std`
/// feature is enabled, the [`core::fmt::Debug`] trait and the
/// [`core::fmt::Display`] trait, this error type only provides a handful
/// of predicates, such as [`Error::is_date_parse`]. The `Display` impl
/// renders the full chain of causes, separated by `: `, with the most
/// specific cause last.
///
/// # Example
///
/// ```
/// use dte::Date;
///
/// let err = Date::new("2006-02-30").unwrap_err();
/// assert!(err.is_date_parse());
/// assert_eq!(
///     err.to_string(),
///     "failed to parse \"2006-02-30\" as a date: \
///      input does not match layout `YYYY-MM-DDThh:mm:ss±hh:mm`: \
///      day value 30 is not in the required range of 1..=28",
/// );
/// ```
#[derive(Clone)]
pub struct Error {
    /// The internal representation of an error.
    ///
    /// This is in an `Arc` to make an `Error` cheaply cloneable and one word
    /// in size, even though a Jiff error may be embedded inside of it.
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Returns true when this error is the result of text failing to match
    /// any of the layouts accepted for a [`Date`](crate::Date).
    ///
    /// # Example
    ///
    /// ```
    /// use dte::Date;
    ///
    /// assert!(Date::new("0-01-01").unwrap_err().is_date_parse());
    /// ```
    pub fn is_date_parse(&self) -> bool {
        self.chain().any(|err| {
            matches!(*err.kind(), ErrorKind::Parse(Parse::Date { .. }))
        })
    }

    /// Returns true when this error is the result of text failing to match
    /// any of the layouts accepted for a [`Time`](crate::Time).
    ///
    /// # Example
    ///
    /// ```
    /// use dte::Time;
    ///
    /// assert!(Time::new("15:04:05").unwrap_err().is_time_parse());
    /// ```
    pub fn is_time_parse(&self) -> bool {
        self.chain().any(|err| {
            matches!(*err.kind(), ErrorKind::Parse(Parse::Time { .. }))
        })
    }

    /// Returns true when this error occurred while decoding JSON. For
    /// example, when the JSON value given is not a string.
    ///
    /// # Example
    ///
    /// ```
    /// use dte::Date;
    ///
    /// let mut date = Date::default();
    /// assert!(date.set_from_json(b"20060102").unwrap_err().is_json());
    /// ```
    pub fn is_json(&self) -> bool {
        self.chain().any(|err| matches!(*err.kind(), ErrorKind::Json(_)))
    }
}

impl Error {
    /// Contextualizes this error by making it the cause of `consequent`.
    ///
    /// The consequent is rendered first, followed by this error.
    #[inline(never)]
    #[cold]
    pub(crate) fn context(self, consequent: impl Into<ErrorKind>) -> Error {
        let inner = ErrorInner { kind: consequent.into(), cause: Some(self) };
        Error { inner: Arc::new(inner) }
    }

    /// Returns a chain of error values.
    ///
    /// This starts with the most recent error added to the chain. That is,
    /// the highest level context. The last error in the chain is always the
    /// "root" cause.
    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    /// Returns the kind of this error.
    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { inner: Arc::new(ErrorInner { kind, cause: None }) }
    }
}

impl From<jiff::Error> for Error {
    #[cold]
    #[inline(never)]
    fn from(err: jiff::Error) -> Error {
        ErrorKind::Jiff(err).into()
    }
}

/// The underlying kind of a [`Error`].
#[derive(Debug)]
pub(crate) enum ErrorKind {
    Fmt(self::fmt::Error),
    Jiff(jiff::Error),
    Json(self::json::Error),
    Layout(Layout),
    Parse(Parse),
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match *self {
            Fmt(ref err) => err.fmt(f),
            Jiff(ref err) => err.fmt(f),
            Json(ref err) => err.fmt(f),
            Layout(ref err) => err.fmt(f),
            Parse(ref err) => err.fmt(f),
        }
    }
}

/// The top level error for text that matched none of the accepted layouts.
#[derive(Debug)]
pub(crate) enum Parse {
    Date { input: Box<str> },
    Time { input: Box<str> },
}

impl Parse {
    /// Creates an error for text that failed to parse as a date.
    ///
    /// Callers should always attach this as context to the error from the
    /// last layout attempted.
    pub(crate) fn date(input: &[u8]) -> Parse {
        Parse::Date { input: lossy(input) }
    }

    /// Creates an error for text that failed to parse as a time.
    pub(crate) fn time(input: &[u8]) -> Parse {
        Parse::Time { input: lossy(input) }
    }
}

impl From<Parse> for ErrorKind {
    fn from(err: Parse) -> ErrorKind {
        ErrorKind::Parse(err)
    }
}

impl core::fmt::Display for Parse {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            Parse::Date { ref input } => {
                write!(f, "failed to parse {input:?} as a date")
            }
            Parse::Time { ref input } => {
                write!(f, "failed to parse {input:?} as a time")
            }
        }
    }
}

/// Names the layout whose failure is the cause of this error.
#[derive(Debug)]
pub(crate) struct Layout {
    pub(crate) name: &'static str,
}

impl From<Layout> for ErrorKind {
    fn from(err: Layout) -> ErrorKind {
        ErrorKind::Layout(err)
    }
}

impl core::fmt::Display for Layout {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "input does not match layout `{}`", self.name)
    }
}

/// Converts arbitrary bytes into a string suitable for an error message.
pub(crate) fn lossy(bytes: &[u8]) -> Box<str> {
    String::from_utf8_lossy(bytes).into()
}
