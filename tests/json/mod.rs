use dte::{Date, Time};

#[derive(Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
struct DateRecord {
    date: Date,
}

#[derive(Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
struct TimeRecord {
    time: Time,
}

#[test]
fn date_round_trip() {
    let _ = crate::Logger::init();

    let record = DateRecord { date: Date::new("2006-01-02").unwrap() };
    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(json, r#"{"date":"2006-01-02"}"#);

    let got: DateRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(got, record);
}

#[test]
fn time_round_trip() {
    let _ = crate::Logger::init();

    let record = TimeRecord { time: Time::new("10:04:05-05:00").unwrap() };
    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(json, r#"{"time":"15:04:05Z"}"#);

    let got: TimeRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(got, record);
}

#[test]
fn zero_values() {
    let _ = crate::Logger::init();

    let json = serde_json::to_string(&DateRecord::default()).unwrap();
    assert_eq!(json, r#"{"date":"0001-01-01"}"#);

    let json = serde_json::to_string(&TimeRecord::default()).unwrap();
    assert_eq!(json, r#"{"time":"00:00:00Z"}"#);
}

#[test]
fn decode_rfc3339() {
    let _ = crate::Logger::init();

    let got: DateRecord =
        serde_json::from_str(r#"{"date":"2006-01-02T15:04:05Z"}"#).unwrap();
    assert_eq!(got.date.to_string(), "2006-01-02");

    let got: TimeRecord =
        serde_json::from_str(r#"{"time":"2006-01-02T15:04:05Z"}"#).unwrap();
    assert_eq!(got.time.to_string(), "15:04:05Z");

    let got: TimeRecord =
        serde_json::from_str(r#"{"time":"2006-01-02T10:04:05-05:00"}"#)
            .unwrap();
    assert_eq!(got.time.to_string(), "15:04:05Z");
}

// Through Serde, the `null` sentinel can't leave an existing value alone, so
// it produces the default value instead.
#[test]
fn decode_null_sentinel() {
    let _ = crate::Logger::init();

    let got: TimeRecord = serde_json::from_str(r#"{"time":"null"}"#).unwrap();
    assert_eq!(got.time, Time::default());

    let got: TimeRecord = serde_json::from_str(r#"{"time":null}"#).unwrap();
    assert_eq!(got.time, Time::default());

    let got: DateRecord = serde_json::from_str(r#"{"date":null}"#).unwrap();
    assert_eq!(got.date, Date::default());
}

#[test]
fn decode_errors() {
    let _ = crate::Logger::init();

    assert!(serde_json::from_str::<TimeRecord>(r#"{"time":1}"#).is_err());
    assert!(serde_json::from_str::<DateRecord>(r#"{"date":2006-01-02}"#)
        .is_err());
    assert!(serde_json::from_str::<DateRecord>(r#"{"date":true}"#).is_err());

    let err =
        serde_json::from_str::<TimeRecord>(r#"{"time":"15:04:05"}"#)
            .unwrap_err();
    assert!(
        err.to_string().starts_with(
            "failed to parse \"15:04:05\" as a time: input does not match \
             layout `hh:mm:ss±hh`",
        ),
        "unexpected error: {err}",
    );

    let err = serde_json::from_str::<DateRecord>(r#"{"date":"0-01-01"}"#)
        .unwrap_err();
    assert!(
        err.to_string().starts_with("failed to parse \"0-01-01\" as a date"),
        "unexpected error: {err}",
    );
}
