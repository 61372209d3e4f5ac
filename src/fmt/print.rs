use jiff::{civil, tz::Offset};

/// Prints a calendar date as `YYYY-MM-DD`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DateText(pub(crate) civil::Date);

impl core::fmt::Display for DateText {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let DateText(date) = *self;
        write!(f, "{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
    }
}

/// Prints a time of day as `hh:mm:ss` followed by a UTC offset.
///
/// The offset is written as `Z` when it is zero, and as `±hh:mm` otherwise.
/// Any seconds component of the offset is truncated away.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TimeText {
    pub(crate) time: civil::Time,
    pub(crate) offset: Offset,
}

impl TimeText {
    pub(crate) fn utc(time: civil::Time) -> TimeText {
        TimeText { time, offset: Offset::UTC }
    }
}

impl core::fmt::Display for TimeText {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let TimeText { time, offset } = *self;
        write!(
            f,
            "{:02}:{:02}:{:02}",
            time.hour(),
            time.minute(),
            time.second(),
        )?;
        let seconds = offset.seconds();
        if seconds == 0 {
            return f.write_str("Z");
        }
        let minutes = seconds / 60;
        let sign = if minutes < 0 { '-' } else { '+' };
        let minutes = minutes.unsigned_abs();
        write!(f, "{sign}{:02}:{:02}", minutes / 60, minutes % 60)
    }
}
