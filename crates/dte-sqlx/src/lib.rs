/*!
This crate provides integration points for [`dte`] and [SQLx][sqlx].

Note that to use the SQLx trait implementations in this crate, you'll need to
enable one of its [database backend features](#crate-features).

# Organization

This crate defines two types that wrap the corresponding types in `dte`:
[`Date`] and [`Time`]. Each wrapper provides:

* A `scan` method that reads a value from a [`Value`] handed over by a
database driver. Text and bytes are parsed, and full timestamps are
truncated. Anything else is rejected.
* A `value` method that returns the canonical text to store.
* Column type declarations via `data_type` and `db_data_type`, the latter
taking a [`Dialect`].
* Implementations of [`sqlx_core::types::Type`], [`sqlx_core::decode::Decode`]
and [`sqlx_core::encode::Encode`] for each supported database.

To minimize the annoyance of wrapper types, the following conveniences are
afforded:

* A [`ToSqlx`] trait is provided for `dte::Date` and `dte::Time`.
* A concrete `to_dte` method is provided on each wrapper type. This is the
reverse of `ToSqlx`.
* There are `From` trait implementations in both directions, and each
wrapper dereferences to the `dte` type it wraps.

# Example

```
use dte_sqlx::{Date, Dialect, Time, Value};

let mut time = Time::default();
time.scan(Value::Text("10:04:05-05:00"))?;
assert_eq!(time.value(), "15:04:05Z");

let err = time.scan(Value::Integer(1)).unwrap_err();
assert!(err.is_invalid_type());

assert_eq!(Time::db_data_type(Dialect::Sqlite), "TEXT");
assert_eq!(Date::db_data_type(Dialect::Sqlite), "DATE");

# Ok::<(), Box<dyn std::error::Error>>(())
```

# Database support

PostgreSQL and SQLite are supported.

In SQLite, both types are stored as their canonical text in `TEXT` columns.

In PostgreSQL, dates are stored in `DATE` columns and times in `TIMETZ`
(`TIME WITH TIME ZONE`) columns. Since SQLx always sends parameters in
PostgreSQL's binary format, values are encoded natively. The offset of a
stored time is always zero. Decoding accepts both the text and binary
formats, and always goes through `scan`, so values read back are held to the
same rules as any other input.

# Crate features

* **postgres** - Enables the `sqlx-postgres` dependency.
* **sqlite** - Enables the `sqlx-sqlite` dependency.

[sqlx]: https://docs.rs/sqlx/0.8
*/

#![deny(missing_docs)]

pub use self::{
    dialect::Dialect,
    error::Error,
    value::Value,
    wrappers::{Date, Time, ToSqlx},
};

mod dialect;
mod error;
#[cfg(feature = "postgres")]
mod postgres;
#[cfg(feature = "sqlite")]
mod sqlite;
mod value;
mod wrappers;
