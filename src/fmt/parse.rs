use jiff::{civil, tz::Offset, SignedDuration};

use crate::{
    error::{self, fmt::Error as E, lossy, Error},
    fmt::{DateLayout, TimeLayout},
};

/// The result of parsing a value out of a slice of bytes.
///
/// This contains both the parsed value and the offset at which the value
/// ended in the input given. This makes it possible to parse, for example, a
/// calendar date and then continue parsing the separator that follows it.
#[derive(Debug)]
pub(crate) struct Parsed<'i, V> {
    /// The value parsed.
    pub(crate) value: V,
    /// The remaining unparsed input.
    pub(crate) input: &'i [u8],
}

impl<'i, V> Parsed<'i, V> {
    /// Ensures that the parsed value represents the entire input. This occurs
    /// precisely when the `input` on this parsed value is empty.
    ///
    /// This is useful when one expects a parsed value to consume the entire
    /// input, and to consider it an error if it doesn't.
    pub(crate) fn into_full(self) -> Result<V, Error> {
        if self.input.is_empty() {
            return Ok(self.value);
        }
        Err(E::TrailingInput { unparsed: lossy(self.input) }.into())
    }
}

/// A layout that can parse a value of a specific type.
///
/// Implementations must consume the entire input on success.
pub(crate) trait Layout: Copy {
    type Output;

    fn name(self) -> &'static str;

    fn parse(self, input: &[u8]) -> Result<Self::Output, Error>;
}

impl Layout for DateLayout {
    type Output = civil::Date;

    fn name(self) -> &'static str {
        DateLayout::name(self)
    }

    fn parse(self, input: &[u8]) -> Result<civil::Date, Error> {
        match self {
            DateLayout::DateOnly => parse_date(input)?.into_full(),
            DateLayout::Rfc3339 => Ok(parse_rfc3339(input)?.date),
        }
    }
}

impl Layout for TimeLayout {
    type Output = OffsetTime;

    fn name(self) -> &'static str {
        TimeLayout::name(self)
    }

    fn parse(self, input: &[u8]) -> Result<OffsetTime, Error> {
        let Parsed { value: time, input } = parse_clock(input, true)?;
        let input = match self {
            TimeLayout::WithSpacedOffset => byte(input, b' ')?,
            TimeLayout::WithOffset | TimeLayout::WithShortOffset => input,
        };
        let minutes = !matches!(self, TimeLayout::WithShortOffset);
        let Parsed { value: offset, input } = parse_offset(input, minutes)?;
        Parsed { value: OffsetTime { time, offset }, input }.into_full()
    }
}

/// Tries each of the given layouts, in order, and returns the value from
/// the first one that matches all of `input`.
///
/// When no layout matches, the error from the last layout tried is returned
/// with the name of that layout attached.
pub(crate) fn first_match<L: Layout>(
    layouts: &[L],
    input: &[u8],
) -> Result<L::Output, Error> {
    let mut last = Error::from(E::NoLayouts);
    for &layout in layouts {
        match layout.parse(input) {
            Ok(value) => return Ok(value),
            Err(err) => {
                trace!(
                    "{input:?} does not match layout `{name}`: {err}",
                    input = lossy(input),
                    name = layout.name(),
                );
                last = err.context(error::Layout { name: layout.name() });
            }
        }
    }
    Err(last)
}

/// A time of day along with the UTC offset it was written in.
#[derive(Clone, Copy, Debug)]
pub(crate) struct OffsetTime {
    pub(crate) time: civil::Time,
    pub(crate) offset: Offset,
}

impl OffsetTime {
    /// Returns the wall clock time at UTC corresponding to this time.
    ///
    /// This wraps around midnight in either direction.
    pub(crate) fn to_utc(self) -> civil::Time {
        let seconds = i64::from(self.offset.seconds());
        self.time.wrapping_sub(SignedDuration::from_secs(seconds))
    }
}

/// The components of a fully parsed RFC 3339 timestamp.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Rfc3339 {
    pub(crate) date: civil::Date,
    pub(crate) time: civil::Time,
    pub(crate) offset: Offset,
}

impl Rfc3339 {
    pub(crate) fn offset_time(&self) -> OffsetTime {
        OffsetTime { time: self.time, offset: self.offset }
    }
}

/// Parses an entire RFC 3339 timestamp, e.g., `2006-01-02T15:04:05Z`.
pub(crate) fn parse_rfc3339(input: &[u8]) -> Result<Rfc3339, Error> {
    let Parsed { value: date, input } = parse_date(input)?;
    let input = byte(input, b'T')?;
    let Parsed { value: time, input } = parse_clock(input, false)?;
    let Parsed { value: offset, input } = parse_offset(input, true)?;
    Parsed { value: Rfc3339 { date, time, offset }, input }.into_full()
}

/// Parses `YYYY-MM-DD`.
///
/// The day is checked against the number of days in the month parsed, so
/// `2006-02-29` is rejected.
fn parse_date(input: &[u8]) -> Result<Parsed<'_, civil::Date>, Error> {
    let Parsed { value: year, input } = digits(input, 4, "year")?;
    let input = byte(input, b'-')?;
    let Parsed { value: month, input } = digits(input, 2, "month")?;
    let month = range("month", month, 1, 12)?;
    let input = byte(input, b'-')?;
    let Parsed { value: day, input } = digits(input, 2, "day")?;

    // Both of these casts are fine because of the digit counts and range
    // checks above.
    let (year, month) = (year as i16, month as i8);
    let days_in_month = civil::Date::new(year, month, 1)?.days_in_month();
    let day = range("day", day, 1, i64::from(days_in_month))?;
    let date = civil::Date::new(year, month, day as i8)?;
    Ok(Parsed { value: date, input })
}

/// Parses `hh:mm:ss`, followed by an optional fraction of a second that is
/// skipped.
///
/// When `flexible_hour` is true, the hour may be one or two digits.
fn parse_clock(
    input: &[u8],
    flexible_hour: bool,
) -> Result<Parsed<'_, civil::Time>, Error> {
    let Parsed { value: hour, input } = if flexible_hour {
        one_or_two_digit_hour(input)?
    } else {
        digits(input, 2, "hour")?
    };
    let hour = range("hour", hour, 0, 23)?;
    let input = byte(input, b':')?;
    let Parsed { value: minute, input } = digits(input, 2, "minute")?;
    let minute = range("minute", minute, 0, 59)?;
    let input = byte(input, b':')?;
    let Parsed { value: second, input } = digits(input, 2, "second")?;
    let second = range("second", second, 0, 59)?;
    let input = skip_fraction(input);

    let time = civil::Time::new(hour as i8, minute as i8, second as i8, 0)?;
    Ok(Parsed { value: time, input })
}

/// Parses `Z`, `±hh:mm` or, when `minutes` is false, `±hh`.
fn parse_offset(
    input: &[u8],
    minutes: bool,
) -> Result<Parsed<'_, Offset>, Error> {
    let (sign, input) = match input.split_first() {
        Some((&b'Z', rest)) => {
            return Ok(Parsed { value: Offset::UTC, input: rest })
        }
        Some((&b'+', rest)) => (1, rest),
        Some((&b'-', rest)) => (-1, rest),
        found => {
            let found = found.map(|(&byte, _)| byte);
            return Err(E::ExpectedOffset { found }.into());
        }
    };
    let Parsed { value: hours, input } =
        digits(input, 2, "UTC offset hour")?;
    let hours = range("UTC offset hour", hours, 0, 24)?;
    let (mins, input) = if minutes {
        let input = byte(input, b':')?;
        let Parsed { value, input } = digits(input, 2, "UTC offset minute")?;
        (range("UTC offset minute", value, 0, 60)?, input)
    } else {
        (0, input)
    };
    // At most 25 hours worth of seconds, which always fits in an `i32` and
    // is within the range of an `Offset`.
    let seconds = (sign * (hours * 3600 + mins * 60)) as i32;
    Ok(Parsed { value: Offset::from_seconds(seconds)?, input })
}

fn one_or_two_digit_hour(input: &[u8]) -> Result<Parsed<'_, i64>, Error> {
    let (value, input) = match *input {
        [h1 @ b'0'..=b'9', h2 @ b'0'..=b'9', ref rest @ ..] => {
            (i64::from(h1 - b'0') * 10 + i64::from(h2 - b'0'), rest)
        }
        [h @ b'0'..=b'9', ref rest @ ..] => (i64::from(h - b'0'), rest),
        _ => return Err(E::ExpectedHour.into()),
    };
    Ok(Parsed { value, input })
}

/// Skips a `.` or `,` followed by one or more digits, if present.
fn skip_fraction(input: &[u8]) -> &[u8] {
    match *input {
        [b'.' | b',', b'0'..=b'9', ref rest @ ..] => {
            let end = rest
                .iter()
                .position(|b| !b.is_ascii_digit())
                .unwrap_or(rest.len());
            &rest[end..]
        }
        _ => input,
    }
}

/// Parses exactly `count` ASCII digits as a non-negative integer.
fn digits<'a>(
    input: &'a [u8],
    count: u8,
    what: &'static str,
) -> Result<Parsed<'a, i64>, Error> {
    let len = usize::from(count);
    if input.len() < len {
        return Err(E::ExpectedDigits { what, count }.into());
    }
    let (digits, input) = input.split_at(len);
    let mut value: i64 = 0;
    for &digit in digits {
        if !digit.is_ascii_digit() {
            return Err(E::ExpectedDigits { what, count }.into());
        }
        value = value * 10 + i64::from(digit - b'0');
    }
    Ok(Parsed { value, input })
}

fn byte(input: &[u8], expected: u8) -> Result<&[u8], Error> {
    match input.split_first() {
        Some((&found, rest)) if found == expected => Ok(rest),
        found => {
            let found = found.map(|(&byte, _)| byte);
            Err(E::ExpectedByte { expected, found }.into())
        }
    }
}

fn range(
    what: &'static str,
    given: i64,
    min: i64,
    max: i64,
) -> Result<i64, Error> {
    if !(min <= given && given <= max) {
        return Err(E::Range { what, given, min, max }.into());
    }
    Ok(given)
}

#[cfg(test)]
mod tests {
    use jiff::civil::{date, time};

    use crate::fmt::{DATE_LAYOUTS, TIME_LAYOUTS};

    use super::*;

    fn date_only(input: &str) -> Result<civil::Date, Error> {
        DateLayout::DateOnly.parse(input.as_bytes())
    }

    fn with_offset(input: &str) -> Result<OffsetTime, Error> {
        TimeLayout::WithOffset.parse(input.as_bytes())
    }

    #[test]
    fn ok_date_only() {
        assert_eq!(date_only("2006-01-02").unwrap(), date(2006, 1, 2));
        assert_eq!(date_only("0000-01-01").unwrap(), date(0, 1, 1));
        assert_eq!(date_only("9999-12-31").unwrap(), date(9999, 12, 31));
        assert_eq!(date_only("2024-02-29").unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn err_date_only() {
        insta::assert_snapshot!(
            date_only("0-01-01").unwrap_err(),
            @"expected 4 digit year",
        );
        insta::assert_snapshot!(
            date_only("2006-01-02Z").unwrap_err(),
            @r###"parsed value, but unparsed input "Z" remains (expected no unparsed input)"###,
        );
        insta::assert_snapshot!(
            date_only("2006-13-02").unwrap_err(),
            @"month value 13 is not in the required range of 1..=12",
        );
        insta::assert_snapshot!(
            date_only("2023-02-29").unwrap_err(),
            @"day value 29 is not in the required range of 1..=28",
        );
        insta::assert_snapshot!(
            date_only("2006/01/02").unwrap_err(),
            @"expected `-`, but found `/`",
        );
        insta::assert_snapshot!(
            date_only("2006-01").unwrap_err(),
            @"expected `-`, but found end of input",
        );
        insta::assert_snapshot!(
            date_only("2006-1-02").unwrap_err(),
            @"expected 2 digit month",
        );
    }

    #[test]
    fn ok_rfc3339() {
        let ts = parse_rfc3339(b"2006-01-02T15:04:05-07:00").unwrap();
        assert_eq!(ts.date, date(2006, 1, 2));
        assert_eq!(ts.time, time(15, 4, 5, 0));
        assert_eq!(ts.offset, Offset::constant(-7));

        let ts = parse_rfc3339(b"2006-01-02T23:59:59.999999999Z").unwrap();
        assert_eq!(ts.date, date(2006, 1, 2));
        assert_eq!(ts.time, time(23, 59, 59, 0));
        assert_eq!(ts.offset, Offset::UTC);
    }

    #[test]
    fn err_rfc3339() {
        insta::assert_snapshot!(
            parse_rfc3339(b"2006-01-02").unwrap_err(),
            @"expected `T`, but found end of input",
        );
        insta::assert_snapshot!(
            parse_rfc3339(b"2006-01-02t15:04:05Z").unwrap_err(),
            @"expected `T`, but found `t`",
        );
        insta::assert_snapshot!(
            parse_rfc3339(b"2006-01-02T5:04:05Z").unwrap_err(),
            @"expected 2 digit hour",
        );
        insta::assert_snapshot!(
            parse_rfc3339(b"2006-01-02T15:04:05").unwrap_err(),
            @"expected `Z` or a sign (`+` or `-`) for UTC offset, but found end of input",
        );
        insta::assert_snapshot!(
            parse_rfc3339(b"2006-01-02T15:04:05-07").unwrap_err(),
            @"expected `:`, but found end of input",
        );
    }

    #[test]
    fn ok_time_layouts() {
        let got = with_offset("10:04:05-05:00").unwrap();
        assert_eq!(got.time, time(10, 4, 5, 0));
        assert_eq!(got.offset, Offset::constant(-5));
        assert_eq!(got.to_utc(), time(15, 4, 5, 0));

        let got = with_offset("1:04:05Z").unwrap();
        assert_eq!(got.time, time(1, 4, 5, 0));

        let got = with_offset("15:04:05.123456+01:30").unwrap();
        assert_eq!(got.time, time(15, 4, 5, 0));
        assert_eq!(got.offset.seconds(), 5400);

        let got = TimeLayout::WithSpacedOffset
            .parse(b"10:04:05 -05:00")
            .unwrap();
        assert_eq!(got.to_utc(), time(15, 4, 5, 0));

        let got = TimeLayout::WithShortOffset.parse(b"10:04:05-05").unwrap();
        assert_eq!(got.to_utc(), time(15, 4, 5, 0));
    }

    #[test]
    fn offset_minutes() {
        let got = with_offset("15:04:05+00:60").unwrap();
        assert_eq!(got.offset.seconds(), 3600);
        assert_eq!(got.to_utc(), time(14, 4, 5, 0));

        let got = with_offset("15:04:05-24:60").unwrap();
        assert_eq!(got.offset.seconds(), -90_000);
        assert_eq!(got.to_utc(), time(16, 4, 5, 0));

        insta::assert_snapshot!(
            with_offset("15:04:05+00:61").unwrap_err(),
            @"UTC offset minute value 61 is not in the required range of 0..=60",
        );
    }

    #[test]
    fn utc_conversion_wraps() {
        let got = with_offset("20:04:05-05:00").unwrap();
        assert_eq!(got.to_utc(), time(1, 4, 5, 0));

        let got = with_offset("02:00:00+05:00").unwrap();
        assert_eq!(got.to_utc(), time(21, 0, 0, 0));
    }

    #[test]
    fn err_time_layouts() {
        insta::assert_snapshot!(
            with_offset("15:04:05").unwrap_err(),
            @"expected `Z` or a sign (`+` or `-`) for UTC offset, but found end of input",
        );
        insta::assert_snapshot!(
            with_offset("15:04:05-55:00").unwrap_err(),
            @"UTC offset hour value 55 is not in the required range of 0..=24",
        );
        insta::assert_snapshot!(
            with_offset("15:04:05Z-05:00:00").unwrap_err(),
            @r###"parsed value, but unparsed input "-05:00:00" remains (expected no unparsed input)"###,
        );
        insta::assert_snapshot!(
            with_offset("24:00:00Z").unwrap_err(),
            @"hour value 24 is not in the required range of 0..=23",
        );
        insta::assert_snapshot!(
            with_offset("15:60:00Z").unwrap_err(),
            @"minute value 60 is not in the required range of 0..=59",
        );
        insta::assert_snapshot!(
            with_offset("15:04:60Z").unwrap_err(),
            @"second value 60 is not in the required range of 0..=59",
        );
        insta::assert_snapshot!(
            with_offset("T15:04:05Z").unwrap_err(),
            @"expected one or two digit hour",
        );
        insta::assert_snapshot!(
            TimeLayout::WithSpacedOffset.parse(b"15:04:05Z").unwrap_err(),
            @"expected ` `, but found `Z`",
        );
    }

    #[test]
    fn first_match_reports_last_layout() {
        insta::assert_snapshot!(
            first_match(DATE_LAYOUTS, b"2006-01-02Z").unwrap_err(),
            @"input does not match layout `YYYY-MM-DDThh:mm:ss±hh:mm`: expected `T`, but found `Z`",
        );
        insta::assert_snapshot!(
            first_match(TIME_LAYOUTS, b"15:04:05").unwrap_err(),
            @"input does not match layout `hh:mm:ss±hh`: expected `Z` or a sign (`+` or `-`) for UTC offset, but found end of input",
        );
        insta::assert_snapshot!(
            first_match::<DateLayout>(&[], b"2006-01-02").unwrap_err(),
            @"no layouts to try",
        );
    }
}
