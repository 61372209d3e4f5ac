#![cfg_attr(fuzzing, no_main)]

use libfuzzer_sys::fuzz_target;

use dte::{Date, Time};

mod shim;

fn do_fuzz(data: &[u8]) {
    // Decoding must never partially update a value, so a failure always
    // leaves the original rendering in place.
    let mut date = Date::default();
    let before = date.to_json();
    match date.set_from_json(data) {
        Ok(()) => {
            let mut again = Date::default();
            again.set_from_json(date.to_json().as_bytes()).unwrap();
            assert_eq!(date, again);
        }
        Err(_) => assert_eq!(before, date.to_json()),
    }

    let mut time = Time::default();
    let before = time.to_json();
    match time.set_from_json(data) {
        Ok(()) => {
            let mut again = Time::default();
            again.set_from_json(time.to_json().as_bytes()).unwrap();
            assert_eq!(time, again);
        }
        Err(_) => assert_eq!(before, time.to_json()),
    }
}

fuzz_target!(|data: &[u8]| do_fuzz(data));

maybe_define_main!();
