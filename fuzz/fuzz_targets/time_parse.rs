#![cfg_attr(fuzzing, no_main)]

use libfuzzer_sys::fuzz_target;

use dte::Time;

mod shim;

fn do_fuzz(data: &[u8]) {
    let Ok(text) = std::str::from_utf8(data) else { return };
    let Ok(first) = Time::new(text) else { return };
    assert_eq!(first.to_jiff().subsec_nanosecond(), 0);

    let rendered = first.to_string();
    assert!(rendered.ends_with('Z'), "rendered time not in UTC: {rendered}");
    match Time::new(&rendered) {
        Ok(second) => {
            assert_eq!(
                first, second,
                "expected the parsed time to be equal to the time after \
                 rendering and re-parsing",
            );
        }
        Err(err) => panic!(
            "should be able to parse a rendered time; \
             failed with `{err}` at: `{rendered}`, from input `{text}`",
        ),
    }
}

fuzz_target!(|data: &[u8]| do_fuzz(data));

maybe_define_main!();
