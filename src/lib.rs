/*!
Strict calendar date and time of day value types built on [Jiff](jiff).

This crate provides two small value types:

* [`Date`] is a calendar date that always renders as `YYYY-MM-DD`.
* [`Time`] is a time of day that is always normalized to UTC and always
renders as `hh:mm:ssZ`.

Both types can only be created by parsing text in a fixed list of layouts
(see the [`fmt`] module) or by truncating a [`jiff::Zoned`] timestamp. No
matter how a value was created, it has exactly one textual rendering. This
makes these types well suited for use in JSON payloads and database columns
where a canonical representation matters.

# Example

```
use dte::{Date, Time};

let date = Date::new("2006-01-02T15:04:05-07:00")?;
assert_eq!(date.to_string(), "2006-01-02");

let time = Time::new("10:04:05 -05:00")?;
assert_eq!(time.to_string(), "15:04:05Z");

# Ok::<(), Box<dyn std::error::Error>>(())
```

# JSON

Values encode as JSON strings in their canonical rendering. Decoding accepts
a JSON string in any of the accepted layouts, or a full RFC 3339 timestamp.
A JSON `null`, or the JSON string `"null"`, is accepted as a no-op:
[`Date::set_from_json`] leaves the value untouched, while Serde
deserialization produces the default value.

With the `serde` feature enabled:

```
# #[cfg(feature = "serde")] {
use dte::{Date, Time};

#[derive(serde::Deserialize, serde::Serialize)]
struct Record {
    date: Date,
    time: Time,
}

let json = r#"{"date":"2006-01-02","time":"10:04:05-05:00"}"#;
let record: Record = serde_json::from_str(json)?;
assert_eq!(
    serde_json::to_string(&record)?,
    r#"{"date":"2006-01-02","time":"15:04:05Z"}"#,
);
# }

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Crate features

* **std** (enabled by default) - When enabled, [`Error`] implements
`std::error::Error` and Jiff's `std` feature is enabled. When disabled, this
crate is `no_std` but still requires `alloc`.
* **serde** - Enables `Serialize` and `Deserialize` implementations for
[`Date`] and [`Time`].
* **logging** - When enabled, the `log` crate is used to emit messages about
rejected layouts and ignored `null` values. This is mostly useful for
debugging why some input was not accepted.
*/

#![no_std]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// We generally want all types to impl Debug.
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

pub use crate::{date::Date, error::Error, time::Time};

#[macro_use]
mod logging;

mod date;
mod error;
pub mod fmt;
mod json;
mod time;
