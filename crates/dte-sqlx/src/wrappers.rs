use crate::{Dialect, Error, Value};

/// A trait for convenient conversions from `dte` types to SQLx types.
///
/// # Example
///
/// This shows how to convert a [`dte::Time`] to a [`Time`]:
///
/// ```
/// use dte_sqlx::ToSqlx;
///
/// let time: dte::Time = "10:04:05-05:00".parse()?;
/// let wrapper = time.to_sqlx();
/// assert_eq!(wrapper.value(), "15:04:05Z");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait ToSqlx {
    /// The wrapper type to convert to.
    type Target;

    /// A conversion method that converts a `dte` type to a SQLx wrapper type.
    fn to_sqlx(self) -> Self::Target;
}

/// A wrapper type for [`dte::Date`].
///
/// This is stored in a `DATE` column in every supported dialect.
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord,
)]
pub struct Date(dte::Date);

impl Date {
    /// Parses a date from the given text.
    ///
    /// This accepts the same layouts as [`dte::Date::new`].
    ///
    /// # Example
    ///
    /// ```
    /// use dte_sqlx::Date;
    ///
    /// assert_eq!(Date::new("2006-01-02")?.value(), "2006-01-02");
    ///
    /// let err = Date::new("2006-01-02Z").unwrap_err();
    /// assert!(err.to_string().starts_with("failed to create new date: "));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(text: &str) -> Result<Date, Error> {
        dte::Date::new(text).map(Date).map_err(|err| Error::new("date", err))
    }

    /// Replaces this date with one read from a database value.
    ///
    /// Bytes and text are parsed with [`dte::Date::set_from_str`], while
    /// timestamps are converted with [`dte::Date::set_from_timestamp`]. On
    /// error, this date is left unchanged.
    ///
    /// # Errors
    ///
    /// When a value of any other kind is given, the error returned reports
    /// true for [`Error::is_invalid_type`]. When the value cannot be
    /// converted, the error returned reports true for [`Error::is_scan`].
    pub fn scan(&mut self, src: Value<'_>) -> Result<(), Error> {
        let result = match src {
            Value::Bytes(bytes) => {
                self.0.set_from_str(&String::from_utf8_lossy(bytes))
            }
            Value::Text(text) => self.0.set_from_str(text),
            Value::Timestamp(ref zdt) => self.0.set_from_timestamp(zdt),
            ref other => return Err(Error::invalid_type(other.kind())),
        };
        result.map_err(|err| Error::scan("date", err))
    }

    /// Returns the value to store in a database, which is always the
    /// canonical `YYYY-MM-DD` rendering.
    pub fn value(&self) -> String {
        self.0.to_string()
    }

    /// Returns the logical column type for dates, which is `date`.
    pub fn data_type() -> &'static str {
        "date"
    }

    /// Returns the column type used to store dates in the given dialect.
    pub fn db_data_type(dialect: Dialect) -> &'static str {
        match dialect {
            Dialect::MySql
            | Dialect::Postgres
            | Dialect::SqlServer
            | Dialect::Sqlite => "DATE",
        }
    }

    /// Converts this wrapper to a [`dte::Date`].
    pub fn to_dte(self) -> dte::Date {
        self.0
    }
}

impl ToSqlx for dte::Date {
    type Target = Date;

    fn to_sqlx(self) -> Date {
        Date(self)
    }
}

impl From<dte::Date> for Date {
    fn from(x: dte::Date) -> Date {
        Date(x)
    }
}

impl From<Date> for dte::Date {
    fn from(x: Date) -> dte::Date {
        x.0
    }
}

impl core::ops::Deref for Date {
    type Target = dte::Date;

    fn deref(&self) -> &dte::Date {
        &self.0
    }
}

impl core::fmt::Display for Date {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A wrapper type for [`dte::Time`].
///
/// Since times are always normalized to UTC, the offset is never lost even
/// in dialects that store times as plain text.
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord,
)]
pub struct Time(dte::Time);

impl Time {
    /// Parses a time from the given text.
    ///
    /// This accepts the same layouts as [`dte::Time::new`].
    pub fn new(text: &str) -> Result<Time, Error> {
        dte::Time::new(text).map(Time).map_err(|err| Error::new("time", err))
    }

    /// Replaces this time with one read from a database value.
    ///
    /// This follows the same rules as [`Date::scan`].
    ///
    /// # Example
    ///
    /// ```
    /// use dte_sqlx::{Time, Value};
    ///
    /// let mut time = Time::default();
    /// time.scan(Value::Bytes(b"10:04:05-05"))?;
    /// assert_eq!(time.value(), "15:04:05Z");
    ///
    /// let err = time.scan(Value::Float(1.5)).unwrap_err();
    /// assert_eq!(err.to_string(), "invalid type passed to scan: found float");
    /// assert_eq!(time.value(), "15:04:05Z");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn scan(&mut self, src: Value<'_>) -> Result<(), Error> {
        let result = match src {
            Value::Bytes(bytes) => {
                self.0.set_from_str(&String::from_utf8_lossy(bytes))
            }
            Value::Text(text) => self.0.set_from_str(text),
            Value::Timestamp(ref zdt) => self.0.set_from_timestamp(zdt),
            ref other => return Err(Error::invalid_type(other.kind())),
        };
        result.map_err(|err| Error::scan("time", err))
    }

    /// Returns the value to store in a database, which is always the
    /// canonical `hh:mm:ssZ` rendering.
    pub fn value(&self) -> String {
        self.0.to_string()
    }

    /// Returns the logical column type for times, which is `time`.
    pub fn data_type() -> &'static str {
        "time"
    }

    /// Returns the column type used to store times in the given dialect.
    ///
    /// SQLite has no type for times with an offset, so text is used.
    pub fn db_data_type(dialect: Dialect) -> &'static str {
        match dialect {
            Dialect::MySql | Dialect::SqlServer => "TIME",
            Dialect::Postgres => "TIME WITH TIME ZONE",
            Dialect::Sqlite => "TEXT",
        }
    }

    /// Converts this wrapper to a [`dte::Time`].
    pub fn to_dte(self) -> dte::Time {
        self.0
    }
}

impl ToSqlx for dte::Time {
    type Target = Time;

    fn to_sqlx(self) -> Time {
        Time(self)
    }
}

impl From<dte::Time> for Time {
    fn from(x: dte::Time) -> Time {
        Time(x)
    }
}

impl From<Time> for dte::Time {
    fn from(x: Time) -> dte::Time {
        x.0
    }
}

impl core::ops::Deref for Time {
    type Target = dte::Time;

    fn deref(&self) -> &dte::Time {
        &self.0
    }
}

impl core::fmt::Display for Time {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, tz::TimeZone};

    use super::*;

    #[test]
    fn scan_date() {
        let mut got = Date::default();
        got.scan(Value::Text("2006-01-02")).unwrap();
        assert_eq!(got.value(), "2006-01-02");

        got.scan(Value::Bytes(b"2007-02-03T04:05:06Z")).unwrap();
        assert_eq!(got.value(), "2007-02-03");

        let zdt = date(2008, 3, 4).to_zoned(TimeZone::UTC).unwrap();
        got.scan(Value::Timestamp(zdt)).unwrap();
        assert_eq!(got.value(), "2008-03-04");
    }

    #[test]
    fn scan_time() {
        let mut got = Time::default();
        got.scan(Value::Text("10:04:05 -05:00")).unwrap();
        assert_eq!(got.value(), "15:04:05Z");

        let tz = TimeZone::fixed(jiff::tz::offset(5));
        let zdt = date(2023, 10, 15).at(20, 4, 5, 0).to_zoned(tz).unwrap();
        got = Time::new("00:00:00Z").unwrap();
        got.scan(Value::Timestamp(zdt)).unwrap();
        assert_eq!(got.value(), "15:04:05Z");
    }

    #[test]
    fn scan_invalid_type() {
        let mut got = Date::new("2006-01-02").unwrap();
        for value in [
            Value::Null,
            Value::Integer(20060102),
            Value::Float(1.0),
            Value::Bool(true),
        ] {
            let err = got.scan(value).unwrap_err();
            assert!(err.is_invalid_type());
            assert!(!err.is_scan());
            assert!(std::error::Error::source(&err).is_none());
        }
        assert_eq!(got.value(), "2006-01-02");

        insta::assert_snapshot!(
            Time::default().scan(Value::Integer(1)).unwrap_err(),
            @"invalid type passed to scan: found integer",
        );
    }

    #[test]
    fn scan_wraps_parse_errors() {
        let mut got = Date::new("2006-01-02").unwrap();
        let err = got.scan(Value::Text("0-01-01")).unwrap_err();
        assert!(err.is_scan());
        assert!(err.as_dte().unwrap().is_date_parse());
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(got.value(), "2006-01-02");

        insta::assert_snapshot!(
            err,
            @r###"failed to scan value into date: failed to parse "0-01-01" as a date: input does not match layout `YYYY-MM-DDThh:mm:ss±hh:mm`: expected 4 digit year"###,
        );

        let err = got.scan(Value::Bytes(b"\xFF")).unwrap_err();
        assert!(err.is_scan());
    }

    #[test]
    fn new_wraps_parse_errors() {
        insta::assert_snapshot!(
            Time::new("15:04:05").unwrap_err(),
            @r###"failed to create new time: failed to parse "15:04:05" as a time: input does not match layout `hh:mm:ss±hh`: expected `Z` or a sign (`+` or `-`) for UTC offset, but found end of input"###,
        );
        let err = Date::new("x").unwrap_err();
        assert!(!err.is_scan());
        assert!(!err.is_invalid_type());
        assert!(err.as_dte().unwrap().is_date_parse());
    }

    #[test]
    fn value_is_canonical() {
        let got = Date::new("2006-01-02T15:04:05+07:00").unwrap();
        assert_eq!(got.value(), "2006-01-02");
        assert_eq!(Date::default().value(), "0001-01-01");

        let got = Time::new("20:04:05+05:00").unwrap();
        assert_eq!(got.value(), "15:04:05Z");
        assert_eq!(Time::default().value(), "00:00:00Z");
    }

    #[test]
    fn column_types() {
        assert_eq!(Date::data_type(), "date");
        assert_eq!(Time::data_type(), "time");

        let cases = [
            ("mysql", "DATE", "TIME"),
            ("postgres", "DATE", "TIME WITH TIME ZONE"),
            ("sqlserver", "DATE", "TIME"),
            ("sqlite", "DATE", "TEXT"),
        ];
        for (name, date, time) in cases {
            let dialect = Dialect::from_name(name).unwrap();
            assert_eq!(Date::db_data_type(dialect), date, "dialect: {name}");
            assert_eq!(Time::db_data_type(dialect), time, "dialect: {name}");
        }
    }

    #[test]
    fn conversions() {
        let time: dte::Time = "10:04:05-05:00".parse().unwrap();
        let wrapper = time.to_sqlx();
        assert_eq!(wrapper.to_dte(), time);
        assert_eq!(dte::Time::from(wrapper), time);
        assert_eq!(wrapper.to_jiff(), jiff::civil::time(15, 4, 5, 0));

        let date: dte::Date = "2006-01-02".parse().unwrap();
        assert_eq!(Date::from(date).to_string(), "2006-01-02");
    }
}
