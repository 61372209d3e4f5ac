use alloc::string::{String, ToString};

use jiff::{civil, Zoned};

use crate::{
    error::{Error, Parse},
    fmt::{
        parse::{first_match, Rfc3339},
        print::TimeText,
        TIME_LAYOUTS,
    },
    json::{self, Interchange},
};

/// A time of day, normalized to UTC, with strict parsing and a single
/// canonical rendering.
///
/// A `Time` is created by parsing text in one of the layouts listed in
/// [`TIME_LAYOUTS`](crate::fmt::TIME_LAYOUTS), all of which require a UTC
/// offset. The parsed wall clock time is converted to UTC (wrapping around
/// midnight when needed) and only the hour, minute and second are kept. It
/// always renders as `hh:mm:ssZ`.
///
/// Two times are equal precisely when they denote the same UTC wall clock
/// time, regardless of the offsets they were written with.
///
/// # Default value
///
/// The default value is `00:00:00Z`.
///
/// # Example
///
/// ```
/// use dte::Time;
///
/// let time: Time = "10:04:05-05:00".parse()?;
/// assert_eq!(time.to_string(), "15:04:05Z");
/// assert_eq!(time, Time::new("20:04:05+05:00")?);
///
/// assert_eq!(Time::default().to_string(), "00:00:00Z");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Time(civil::Time);

impl Time {
    /// Parses a time from the given text and converts it to UTC.
    ///
    /// The layouts in [`TIME_LAYOUTS`](crate::fmt::TIME_LAYOUTS) are tried
    /// in order and the first that matches the whole input is used.
    ///
    /// # Errors
    ///
    /// This returns an error for which [`Error::is_time_parse`] is true when
    /// no layout matches. Notably, a time without any offset is rejected.
    ///
    /// # Example
    ///
    /// ```
    /// use dte::Time;
    ///
    /// assert_eq!(Time::new("10:04:05 -05:00")?.to_string(), "15:04:05Z");
    /// assert_eq!(Time::new("10:04:05-05")?.to_string(), "15:04:05Z");
    /// assert!(Time::new("15:04:05").is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(text: &str) -> Result<Time, Error> {
        Time::parse(text.as_bytes())
    }

    /// Replaces this time with the one parsed from `text`.
    ///
    /// When parsing fails, this time is left unchanged.
    pub fn set_from_str(&mut self, text: &str) -> Result<(), Error> {
        *self = Time::new(text)?;
        Ok(())
    }

    /// Creates a time from the wall clock time of the given timestamp,
    /// converted to UTC.
    ///
    /// The timestamp's offset is truncated to whole minutes before the
    /// conversion.
    ///
    /// # Example
    ///
    /// ```
    /// use dte::Time;
    ///
    /// let zdt = "2023-10-15T20:04:05+05:00[+05:00]".parse()?;
    /// assert_eq!(Time::from_timestamp(&zdt)?.to_string(), "15:04:05Z");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_timestamp(zdt: &Zoned) -> Result<Time, Error> {
        let text = TimeText { time: zdt.time(), offset: zdt.offset() };
        Time::parse(text.to_string().as_bytes())
    }

    /// Replaces this time with the wall clock time of the given timestamp.
    ///
    /// When this fails, this time is left unchanged. See
    /// [`Time::from_timestamp`].
    pub fn set_from_timestamp(&mut self, zdt: &Zoned) -> Result<(), Error> {
        *self = Time::from_timestamp(zdt)?;
        Ok(())
    }

    /// Returns the underlying Jiff civil time, in UTC.
    ///
    /// The sub-second components of the time returned are always zero.
    pub fn to_jiff(self) -> civil::Time {
        self.0
    }

    /// Renders this time as a JSON string, e.g., `"15:04:05Z"`.
    pub fn to_json(&self) -> String {
        json::encode(self)
    }

    /// Replaces this time with one decoded from raw JSON.
    ///
    /// This follows the same rules as
    /// [`Date::set_from_json`](crate::Date::set_from_json). When a full
    /// RFC 3339 timestamp is given, its time of day is converted to UTC.
    ///
    /// # Example
    ///
    /// ```
    /// use dte::Time;
    ///
    /// let mut time = Time::default();
    /// time.set_from_json(br#""2006-01-02T10:04:05-05:00""#)?;
    /// assert_eq!(time.to_json(), r#""15:04:05Z""#);
    ///
    /// time.set_from_json(br#""null""#)?;
    /// assert_eq!(time.to_string(), "15:04:05Z");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn set_from_json(&mut self, data: &[u8]) -> Result<(), Error> {
        if let Some(time) = json::decode_json::<Time>(data)? {
            *self = time;
        }
        Ok(())
    }

    fn parse(input: &[u8]) -> Result<Time, Error> {
        first_match(TIME_LAYOUTS, input)
            .map(|parsed| Time(parsed.to_utc()))
            .map_err(|err| err.context(Parse::time(input)))
    }
}

impl Default for Time {
    fn default() -> Time {
        Time(civil::Time::midnight())
    }
}

impl core::fmt::Display for Time {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&TimeText::utc(self.0), f)
    }
}

impl core::str::FromStr for Time {
    type Err = Error;

    fn from_str(text: &str) -> Result<Time, Error> {
        Time::new(text)
    }
}

impl From<Time> for civil::Time {
    fn from(time: Time) -> civil::Time {
        time.0
    }
}

impl Interchange for Time {
    const NAME: &'static str = "time";

    fn parse_text(input: &[u8]) -> Result<Time, Error> {
        Time::parse(input)
    }

    fn reformat(timestamp: &Rfc3339) -> String {
        let ot = timestamp.offset_time();
        TimeText { time: ot.time, offset: ot.offset }.to_string()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Time {
    #[inline]
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Deserializes a time from a string.
///
/// A `null` value, or the string `"null"`, deserializes to the default time.
/// Since a `null` is accepted, this requires a self describing format.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Time {
    #[inline]
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Time, D::Error> {
        use serde::de;

        struct TimeVisitor;

        impl<'de> de::Visitor<'de> for TimeVisitor {
            type Value = Time;

            fn expecting(
                &self,
                f: &mut core::fmt::Formatter,
            ) -> core::fmt::Result {
                f.write_str("a time string with a UTC offset")
            }

            #[inline]
            fn visit_bytes<E: de::Error>(
                self,
                value: &[u8],
            ) -> Result<Time, E> {
                json::decode_str::<Time>(value)
                    .map(Option::unwrap_or_default)
                    .map_err(de::Error::custom)
            }

            #[inline]
            fn visit_str<E: de::Error>(self, value: &str) -> Result<Time, E> {
                self.visit_bytes(value.as_bytes())
            }

            #[inline]
            fn visit_unit<E: de::Error>(self) -> Result<Time, E> {
                Ok(Time::default())
            }

            #[inline]
            fn visit_none<E: de::Error>(self) -> Result<Time, E> {
                Ok(Time::default())
            }
        }

        deserializer.deserialize_any(TimeVisitor)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Time {
    fn arbitrary(g: &mut quickcheck::Gen) -> Time {
        let hour = (u8::arbitrary(g) % 24) as i8;
        let minute = (u8::arbitrary(g) % 60) as i8;
        let second = (u8::arbitrary(g) % 60) as i8;
        Time(civil::Time::constant(hour, minute, second, 0))
    }
}
