#![cfg_attr(fuzzing, no_main)]

use libfuzzer_sys::fuzz_target;

use dte::Date;

mod shim;

fn do_fuzz(data: &[u8]) {
    let Ok(text) = std::str::from_utf8(data) else { return };
    let Ok(first) = Date::new(text) else { return };
    let rendered = first.to_string();
    match Date::new(&rendered) {
        Ok(second) => {
            assert_eq!(
                first, second,
                "expected the parsed date to be equal to the date after \
                 rendering and re-parsing",
            );
            assert_eq!(rendered, second.to_string());
        }
        Err(err) => panic!(
            "should be able to parse a rendered date; \
             failed with `{err}` at: `{rendered}`, from input `{text}`",
        ),
    }
}

fuzz_target!(|data: &[u8]| do_fuzz(data));

maybe_define_main!();
