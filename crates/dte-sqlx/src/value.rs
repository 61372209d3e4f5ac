use jiff::Zoned;

/// A value read from a database column, as handed to
/// [`Date::scan`](crate::Date::scan) or [`Time::scan`](crate::Time::scan).
///
/// Only [`Value::Bytes`], [`Value::Text`] and [`Value::Timestamp`] can be
/// scanned. The other variants exist so that callers can pass along whatever
/// their driver produced and get a descriptive error back.
///
/// # Example
///
/// ```
/// use dte_sqlx::{Date, Value};
///
/// let mut date = Date::default();
/// date.scan(Value::from("2006-01-02"))?;
/// assert_eq!(date.value(), "2006-01-02");
///
/// let zdt: jiff::Zoned = "2006-01-02T23:00:00-05:00[-05:00]".parse()?;
/// date.scan(Value::from(zdt))?;
/// assert_eq!(date.value(), "2006-01-02");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum Value<'a> {
    /// A SQL `NULL`.
    Null,
    /// An integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A boolean.
    Bool(bool),
    /// Raw bytes. These are parsed as text.
    Bytes(&'a [u8]),
    /// Text.
    Text(&'a str),
    /// A full timestamp, as produced by drivers that decode temporal columns
    /// natively.
    Timestamp(Zoned),
}

impl<'a> Value<'a> {
    /// Returns a short name for the kind of this value, suitable for use in
    /// error messages.
    pub fn kind(&self) -> &'static str {
        match *self {
            Value::Null => "null",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
            Value::Bytes(_) => "bytes",
            Value::Text(_) => "text",
            Value::Timestamp(_) => "timestamp",
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(text: &'a str) -> Value<'a> {
        Value::Text(text)
    }
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(bytes: &'a [u8]) -> Value<'a> {
        Value::Bytes(bytes)
    }
}

impl From<Zoned> for Value<'static> {
    fn from(zdt: Zoned) -> Value<'static> {
        Value::Timestamp(zdt)
    }
}

impl From<i64> for Value<'static> {
    fn from(n: i64) -> Value<'static> {
        Value::Integer(n)
    }
}

impl From<f64> for Value<'static> {
    fn from(n: f64) -> Value<'static> {
        Value::Float(n)
    }
}

impl From<bool> for Value<'static> {
    fn from(b: bool) -> Value<'static> {
        Value::Bool(b)
    }
}
