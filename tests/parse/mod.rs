use dte::{Date, Time};

#[test]
fn date_valid() {
    let _ = crate::Logger::init();

    let cases = [
        ("2006-01-02", "2006-01-02"),
        ("0000-01-01", "0000-01-01"),
        ("2006-01-02T15:04:05Z", "2006-01-02"),
        ("2006-01-02T23:04:05-07:00", "2006-01-02"),
        ("2006-01-02T00:04:05+07:00", "2006-01-02"),
    ];
    for (input, expected) in cases {
        let date = Date::new(input).unwrap();
        assert_eq!(date.to_string(), expected, "input: {input:?}");
        // Parsing the rendering again never changes the value.
        assert_eq!(Date::new(&date.to_string()).unwrap(), date);
    }
}

#[test]
fn date_invalid() {
    let _ = crate::Logger::init();

    let cases = [
        "0-01-01",
        "2006-01-02Z",
        "2006-1-2",
        "06-01-02",
        "2006-02-29",
        "2006-01-02 15:04:05Z",
        "2006-01-02T15:04:05",
        " 2006-01-02",
        "",
    ];
    for input in cases {
        let err = Date::new(input).unwrap_err();
        assert!(err.is_date_parse(), "input: {input:?}, error: {err}");
    }
}

#[test]
fn time_valid() {
    let _ = crate::Logger::init();

    let cases = [
        ("15:04:05Z", "15:04:05Z"),
        ("10:04:05-05:00", "15:04:05Z"),
        ("10:04:05 -05:00", "15:04:05Z"),
        ("10:04:05-05", "15:04:05Z"),
        ("20:04:05+05:00", "15:04:05Z"),
        ("00:00:00Z", "00:00:00Z"),
    ];
    for (input, expected) in cases {
        let time = Time::new(input).unwrap();
        assert_eq!(time.to_string(), expected, "input: {input:?}");
        assert_eq!(Time::new(&time.to_string()).unwrap(), time);
    }
}

#[test]
fn time_invalid() {
    let _ = crate::Logger::init();

    let cases = [
        "15:04:05",
        "15:04:05-55:00:00",
        "15:04:05Z-05:00:00",
        "15:04:05Z05:00:00",
        "15:04:05z",
        "15:04Z",
        "2006-01-02T15:04:05Z",
        "",
    ];
    for input in cases {
        let err = Time::new(input).unwrap_err();
        assert!(err.is_time_parse(), "input: {input:?}, error: {err}");
    }
}

#[test]
fn from_timestamp() {
    let _ = crate::Logger::init();

    let zdt: jiff::Zoned = "2023-10-15T20:04:05+05:00[+05:00]".parse().unwrap();

    let mut time = Time::default();
    time.set_from_timestamp(&zdt).unwrap();
    assert_eq!(time.to_string(), "15:04:05Z");

    let mut date = Date::default();
    date.set_from_timestamp(&zdt).unwrap();
    assert_eq!(date.to_string(), "2023-10-15");
}

#[test]
fn raw_json() {
    let _ = crate::Logger::init();

    let mut date = Date::default();
    date.set_from_json(br#""2006-01-02T15:04:05Z""#).unwrap();
    assert_eq!(date.to_json(), r#""2006-01-02""#);

    let mut time = Time::default();
    time.set_from_json(br#""2006-01-02T10:04:05-05:00""#).unwrap();
    assert_eq!(time.to_json(), r#""15:04:05Z""#);

    assert!(time.set_from_json(b"1").unwrap_err().is_json());
    assert!(date.set_from_json(b"2006-01-02").unwrap_err().is_json());
}

#[test]
fn raw_json_object_field() {
    let _ = crate::Logger::init();

    let date = Date::new("2006-01-02").unwrap();
    let object = format!(r#"{{"date":{}}}"#, date.to_json());
    assert_eq!(object, r#"{"date":"2006-01-02"}"#);

    let field = object
        .strip_prefix(r#"{"date":"#)
        .and_then(|rest| rest.strip_suffix('}'))
        .unwrap();
    let mut got = Date::default();
    got.set_from_json(field.as_bytes()).unwrap();
    assert_eq!(got, date);
}
