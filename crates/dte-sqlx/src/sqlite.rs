use sqlx_core::{
    decode::Decode,
    encode::{Encode, IsNull},
    error::BoxDynError,
    types::Type,
};
use sqlx_sqlite::{
    Sqlite, SqliteArgumentValue, SqliteTypeInfo, SqliteValueRef,
};

use crate::{Date, Time, Value};

// SQLite has no dedicated temporal types, so both dates and times are stored
// as their canonical text.

impl Type<Sqlite> for Date {
    fn type_info() -> SqliteTypeInfo {
        <str as Type<Sqlite>>::type_info()
    }
}

impl Encode<'_, Sqlite> for Date {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<SqliteArgumentValue<'_>>,
    ) -> Result<IsNull, BoxDynError> {
        Encode::<Sqlite>::encode(self.value(), buf)
    }
}

impl<'r> Decode<'r, Sqlite> for Date {
    fn decode(value: SqliteValueRef<'r>) -> Result<Date, BoxDynError> {
        let text = <&str as Decode<Sqlite>>::decode(value)?;
        let mut date = Date::default();
        date.scan(Value::Text(text))?;
        Ok(date)
    }
}

impl Type<Sqlite> for Time {
    fn type_info() -> SqliteTypeInfo {
        <str as Type<Sqlite>>::type_info()
    }
}

impl Encode<'_, Sqlite> for Time {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<SqliteArgumentValue<'_>>,
    ) -> Result<IsNull, BoxDynError> {
        Encode::<Sqlite>::encode(self.value(), buf)
    }
}

impl<'r> Decode<'r, Sqlite> for Time {
    fn decode(value: SqliteValueRef<'r>) -> Result<Time, BoxDynError> {
        let text = <&str as Decode<Sqlite>>::decode(value)?;
        let mut time = Time::default();
        time.scan(Value::Text(text))?;
        Ok(time)
    }
}
