/*!
The layouts accepted when parsing [`Date`](crate::Date) and
[`Time`](crate::Time) values.

Parsing tries each layout in a fixed order and the first one that matches
the *entire* input wins. If none match, the error returned describes why
the last layout failed.

Regardless of which layout was used to parse a value, a value is always
printed in exactly one canonical layout:

* A [`Date`](crate::Date) prints as `YYYY-MM-DD`.
* A [`Time`](crate::Time) prints as `hh:mm:ssZ`, since it is always
  normalized to UTC.

# Example

This shows that the layout lists can be inspected, for example to build
documentation or a helpful error message for end users:

```
use dte::fmt::{DATE_LAYOUTS, TIME_LAYOUTS};

let names: Vec<&str> = DATE_LAYOUTS.iter().map(|l| l.name()).collect();
assert_eq!(names, ["YYYY-MM-DD", "YYYY-MM-DDThh:mm:ss±hh:mm"]);

let names: Vec<&str> = TIME_LAYOUTS.iter().map(|l| l.name()).collect();
assert_eq!(names, ["hh:mm:ss±hh:mm", "hh:mm:ss ±hh:mm", "hh:mm:ss±hh"]);
```
*/

pub(crate) mod parse;
pub(crate) mod print;

/// The layouts accepted by [`Date`](crate::Date), in the order they are
/// tried.
pub const DATE_LAYOUTS: &[DateLayout] =
    &[DateLayout::DateOnly, DateLayout::Rfc3339];

/// The layouts accepted by [`Time`](crate::Time), in the order they are
/// tried.
pub const TIME_LAYOUTS: &[TimeLayout] = &[
    TimeLayout::WithOffset,
    TimeLayout::WithSpacedOffset,
    TimeLayout::WithShortOffset,
];

/// A textual layout that can be parsed into a [`Date`](crate::Date).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum DateLayout {
    /// A four digit year, a two digit month and a two digit day separated by
    /// `-`. For example, `2006-01-02`.
    ///
    /// This is also the canonical layout used when printing a date.
    DateOnly,
    /// A full RFC 3339 timestamp. For example, `2006-01-02T15:04:05-07:00`.
    ///
    /// Fractional seconds are permitted. Only the calendar date, as written,
    /// is kept. The time of day and offset are validated but otherwise
    /// ignored. That is, the date is *not* converted to UTC first.
    Rfc3339,
}

impl DateLayout {
    /// Returns a short human readable description of this layout.
    pub fn name(self) -> &'static str {
        match self {
            DateLayout::DateOnly => "YYYY-MM-DD",
            DateLayout::Rfc3339 => "YYYY-MM-DDThh:mm:ss±hh:mm",
        }
    }
}

/// A textual layout that can be parsed into a [`Time`](crate::Time).
///
/// Every layout requires hours, minutes and seconds followed by a UTC offset.
/// In every layout, `Z` may be used in place of a numeric offset to mean
/// UTC. Fractional seconds are permitted after the seconds component but are
/// discarded, and the hour may be written with a single digit.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum TimeLayout {
    /// A time with an hour and minute offset. For example, `15:04:05-07:00`
    /// or `15:04:05Z`.
    WithOffset,
    /// A time with an hour and minute offset, separated by a single space.
    /// For example, `15:04:05 -07:00`.
    WithSpacedOffset,
    /// A time with an hour only offset. For example, `15:04:05-07`.
    WithShortOffset,
}

impl TimeLayout {
    /// Returns a short human readable description of this layout.
    pub fn name(self) -> &'static str {
        match self {
            TimeLayout::WithOffset => "hh:mm:ss±hh:mm",
            TimeLayout::WithSpacedOffset => "hh:mm:ss ±hh:mm",
            TimeLayout::WithShortOffset => "hh:mm:ss±hh",
        }
    }
}
