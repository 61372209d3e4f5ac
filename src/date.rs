use alloc::string::{String, ToString};

use jiff::{civil, Zoned};

use crate::{
    error::{Error, Parse},
    fmt::{
        parse::{first_match, Rfc3339},
        print::DateText,
        DATE_LAYOUTS,
    },
    json::{self, Interchange},
};

/// A calendar date with strict parsing and a single canonical rendering.
///
/// A `Date` is created by parsing text in one of the layouts listed in
/// [`DATE_LAYOUTS`](crate::fmt::DATE_LAYOUTS), or by taking the calendar
/// date of a [`Zoned`] timestamp. It always renders as `YYYY-MM-DD`.
///
/// When parsing a full RFC 3339 timestamp, the calendar date *as written*
/// is kept. The time of day and offset are validated and then dropped.
///
/// # Default value
///
/// The default value is `0001-01-01`.
///
/// # Example
///
/// ```
/// use dte::Date;
///
/// let date: Date = "2006-01-02".parse()?;
/// assert_eq!(date.to_string(), "2006-01-02");
///
/// let date = Date::new("2006-01-02T22:04:05-07:00")?;
/// assert_eq!(date.to_string(), "2006-01-02");
///
/// assert_eq!(Date::default().to_string(), "0001-01-01");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Date(civil::Date);

impl Date {
    /// Parses a date from the given text.
    ///
    /// The layouts in [`DATE_LAYOUTS`](crate::fmt::DATE_LAYOUTS) are tried
    /// in order and the first that matches the whole input is used.
    ///
    /// # Errors
    ///
    /// This returns an error for which [`Error::is_date_parse`] is true when
    /// no layout matches.
    ///
    /// # Example
    ///
    /// ```
    /// use dte::Date;
    ///
    /// assert_eq!(Date::new("0000-01-01")?.to_string(), "0000-01-01");
    /// assert!(Date::new("2006-01-02Z").is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(text: &str) -> Result<Date, Error> {
        Date::parse(text.as_bytes())
    }

    /// Replaces this date with the one parsed from `text`.
    ///
    /// When parsing fails, this date is left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use dte::Date;
    ///
    /// let mut date = Date::new("2006-01-02")?;
    /// assert!(date.set_from_str("2006-01-32").is_err());
    /// assert_eq!(date.to_string(), "2006-01-02");
    ///
    /// date.set_from_str("2024-02-29")?;
    /// assert_eq!(date.to_string(), "2024-02-29");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn set_from_str(&mut self, text: &str) -> Result<(), Error> {
        *self = Date::new(text)?;
        Ok(())
    }

    /// Creates a date from the calendar date of the given timestamp, in the
    /// timestamp's own time zone.
    ///
    /// # Errors
    ///
    /// This returns an error when the timestamp's year is outside of the
    /// range `0..=9999`, since such dates have no canonical rendering.
    ///
    /// # Example
    ///
    /// ```
    /// use dte::Date;
    ///
    /// let zdt = "2023-10-15T23:30:00-05:00[-05:00]".parse()?;
    /// assert_eq!(Date::from_timestamp(&zdt)?.to_string(), "2023-10-15");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_timestamp(zdt: &Zoned) -> Result<Date, Error> {
        let text = DateText(zdt.date()).to_string();
        Date::parse(text.as_bytes())
    }

    /// Replaces this date with the calendar date of the given timestamp.
    ///
    /// When this fails, this date is left unchanged. See
    /// [`Date::from_timestamp`].
    pub fn set_from_timestamp(&mut self, zdt: &Zoned) -> Result<(), Error> {
        *self = Date::from_timestamp(zdt)?;
        Ok(())
    }

    /// Returns the underlying Jiff civil date.
    pub fn to_jiff(self) -> civil::Date {
        self.0
    }

    /// Renders this date as a JSON string, e.g., `"2006-01-02"`.
    pub fn to_json(&self) -> String {
        json::encode(self)
    }

    /// Replaces this date with one decoded from raw JSON.
    ///
    /// A JSON string holding either a date or a full RFC 3339 timestamp is
    /// accepted. A JSON `null`, or the JSON string `"null"`, is accepted but
    /// leaves this date unchanged.
    ///
    /// # Errors
    ///
    /// This returns an error for which [`Error::is_json`] is true when the
    /// input isn't a JSON string. When the contents of the string fail to
    /// parse, the error is the same as the one returned by [`Date::new`].
    /// On error, this date is left unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use dte::Date;
    ///
    /// let mut date = Date::default();
    /// date.set_from_json(br#""2006-01-02T15:04:05Z""#)?;
    /// assert_eq!(date.to_json(), r#""2006-01-02""#);
    ///
    /// date.set_from_json(b"null")?;
    /// assert_eq!(date.to_string(), "2006-01-02");
    ///
    /// assert!(date.set_from_json(b"2006-01-02").unwrap_err().is_json());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn set_from_json(&mut self, data: &[u8]) -> Result<(), Error> {
        if let Some(date) = json::decode_json::<Date>(data)? {
            *self = date;
        }
        Ok(())
    }

    fn parse(input: &[u8]) -> Result<Date, Error> {
        first_match(DATE_LAYOUTS, input)
            .map(Date)
            .map_err(|err| err.context(Parse::date(input)))
    }
}

impl Default for Date {
    fn default() -> Date {
        Date(civil::Date::constant(1, 1, 1))
    }
}

impl core::fmt::Display for Date {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&DateText(self.0), f)
    }
}

impl core::str::FromStr for Date {
    type Err = Error;

    fn from_str(text: &str) -> Result<Date, Error> {
        Date::new(text)
    }
}

impl From<Date> for civil::Date {
    fn from(date: Date) -> civil::Date {
        date.0
    }
}

impl Interchange for Date {
    const NAME: &'static str = "date";

    fn parse_text(input: &[u8]) -> Result<Date, Error> {
        Date::parse(input)
    }

    fn reformat(timestamp: &Rfc3339) -> String {
        DateText(timestamp.date).to_string()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Deserializes a date from a string.
///
/// A `null` value, or the string `"null"`, deserializes to the default date.
/// Since a `null` is accepted, this requires a self describing format.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Date, D::Error> {
        use serde::de;

        struct DateVisitor;

        impl<'de> de::Visitor<'de> for DateVisitor {
            type Value = Date;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("a date string")
            }

            #[inline]
            fn visit_bytes<E: de::Error>(
                self,
                value: &[u8],
            ) -> Result<Date, E> {
                json::decode_str::<Date>(value)
                    .map(Option::unwrap_or_default)
                    .map_err(de::Error::custom)
            }

            #[inline]
            fn visit_str<E: de::Error>(self, value: &str) -> Result<Date, E> {
                self.visit_bytes(value.as_bytes())
            }

            #[inline]
            fn visit_unit<E: de::Error>(self) -> Result<Date, E> {
                Ok(Date::default())
            }

            #[inline]
            fn visit_none<E: de::Error>(self) -> Result<Date, E> {
                Ok(Date::default())
            }
        }

        deserializer.deserialize_any(DateVisitor)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Date {
    fn arbitrary(g: &mut quickcheck::Gen) -> Date {
        let year = (u16::arbitrary(g) % 10_000) as i16;
        let month = (u8::arbitrary(g) % 12 + 1) as i8;
        let first = civil::Date::constant(year, month, 1);
        let day = (u8::arbitrary(g) % first.days_in_month() as u8 + 1) as i8;
        Date(civil::Date::constant(year, month, day))
    }
}
