use jiff::{
    civil,
    tz::{Offset, TimeZone},
    SignedDuration,
};
use sqlx_core::{
    decode::Decode,
    encode::{Encode, IsNull},
    error::BoxDynError,
    types::Type,
};
use sqlx_postgres::{
    types::Oid, PgArgumentBuffer, PgHasArrayType, PgTypeInfo, PgValueFormat,
    PgValueRef, Postgres,
};

use crate::{Date, Time, Value};

/// The wire format of values isn't a documented guarantee of PostgreSQL.[1]
/// These match what `sqlx` itself does for its `chrono` and `time`
/// integrations.
///
/// [1]: https://www.postgresql.org/docs/current/protocol-overview.html#PROTOCOL-FORMAT-CODES
static POSTGRES_EPOCH_DATE: civil::Date = civil::date(2000, 1, 1);
static MIDNIGHT: civil::Time = civil::Time::midnight();

impl Type<Postgres> for Date {
    fn type_info() -> PgTypeInfo {
        // DATE
        PgTypeInfo::with_oid(Oid(1082))
    }
}

impl PgHasArrayType for Date {
    fn array_type_info() -> PgTypeInfo {
        // DATE[]
        PgTypeInfo::with_oid(Oid(1182))
    }
}

impl Encode<'_, Postgres> for Date {
    fn encode_by_ref(
        &self,
        buf: &mut PgArgumentBuffer,
    ) -> Result<IsNull, BoxDynError> {
        // The encoding is the number of days since POSTGRES_EPOCH_DATE.
        let days = (self.to_jiff() - POSTGRES_EPOCH_DATE).get_days();
        Encode::<Postgres>::encode(days, buf)
    }
}

impl<'r> Decode<'r, Postgres> for Date {
    fn decode(value: PgValueRef<'r>) -> Result<Date, BoxDynError> {
        match value.format() {
            PgValueFormat::Binary => {
                let days: i32 = Decode::<Postgres>::decode(value)?;
                decode_date_days(days)
            }
            PgValueFormat::Text => {
                let mut date = Date::default();
                date.scan(Value::Text(value.as_str()?))?;
                Ok(date)
            }
        }
    }
}

impl Type<Postgres> for Time {
    fn type_info() -> PgTypeInfo {
        // TIMETZ
        PgTypeInfo::with_oid(Oid(1266))
    }
}

impl PgHasArrayType for Time {
    fn array_type_info() -> PgTypeInfo {
        // TIMETZ[]
        PgTypeInfo::with_oid(Oid(1270))
    }
}

impl Encode<'_, Postgres> for Time {
    fn encode_by_ref(
        &self,
        buf: &mut PgArgumentBuffer,
    ) -> Result<IsNull, BoxDynError> {
        // The encoding is the number of *microseconds* since midnight,
        // followed by the offset in seconds *west* of UTC. Times are always
        // in UTC, so the offset is always zero.
        let micros = self.to_jiff().duration_since(MIDNIGHT).as_micros();
        let micros = i64::try_from(micros)?;
        match Encode::<Postgres>::encode(micros, buf)? {
            IsNull::No => Encode::<Postgres>::encode(0i32, buf),
            IsNull::Yes => Err("TIMETZ microseconds encoded as NULL".into()),
        }
    }
}

impl<'r> Decode<'r, Postgres> for Time {
    fn decode(value: PgValueRef<'r>) -> Result<Time, BoxDynError> {
        match value.format() {
            PgValueFormat::Binary => decode_time_binary(value.as_bytes()?),
            PgValueFormat::Text => {
                // e.g., `15:04:05+00` or `15:04:05.123-05:30`.
                let mut time = Time::default();
                time.scan(Value::Text(value.as_str()?))?;
                Ok(time)
            }
        }
    }
}

/// Decodes the binary form of a DATE, the number of days since
/// POSTGRES_EPOCH_DATE, by scanning it as a timestamp at midnight UTC.
fn decode_date_days(days: i32) -> Result<Date, BoxDynError> {
    let span = jiff::Span::new().try_days(days)?;
    let zdt =
        POSTGRES_EPOCH_DATE.checked_add(span)?.to_zoned(TimeZone::UTC)?;
    let mut date = Date::default();
    date.scan(Value::Timestamp(zdt))?;
    Ok(date)
}

/// Decodes the binary form of a TIMETZ by scanning it as a timestamp in its
/// own offset.
fn decode_time_binary(bytes: &[u8]) -> Result<Time, BoxDynError> {
    let (micros, west) = decode_timetz(bytes)?;
    let clock = timetz_clock(micros)?;
    let east =
        west.checked_neg().ok_or("invalid UTC offset in TIMETZ value")?;
    let tz = TimeZone::fixed(Offset::from_seconds(east)?);
    let zdt = POSTGRES_EPOCH_DATE.to_datetime(clock).to_zoned(tz)?;
    let mut time = Time::default();
    time.scan(Value::Timestamp(zdt))?;
    Ok(time)
}

/// Splits a binary TIMETZ value into microseconds since midnight and the
/// offset in seconds west of UTC.
fn decode_timetz(bytes: &[u8]) -> Result<(i64, i32), BoxDynError> {
    if bytes.len() != 12 {
        return Err(format!(
            "expected 12 bytes for TIMETZ value, but got {}",
            bytes.len(),
        )
        .into());
    }
    let micros = i64::from_be_bytes(bytes[..8].try_into()?);
    let west = i32::from_be_bytes(bytes[8..].try_into()?);
    Ok((micros, west))
}

/// Converts microseconds since midnight into a civil time.
///
/// PostgreSQL permits `24:00:00` in TIMETZ columns. It denotes the end of
/// the day and is read as the midnight that starts the next one.
fn timetz_clock(micros: i64) -> Result<civil::Time, BoxDynError> {
    const END_OF_DAY: i64 = 86_400_000_000;

    if micros == END_OF_DAY {
        return Ok(MIDNIGHT);
    }
    Ok(MIDNIGHT.checked_add(SignedDuration::from_micros(micros))?)
}
