use std::{env, error::Error, ffi::c_int, fs, ptr};

extern "C" {
    // Sets up the panic hook used by libfuzzer-sys.
    fn LLVMFuzzerInitialize(
        argc: *const isize,
        argv: *const *const *const u8,
    ) -> c_int;

    // The entry point generated by `fuzz_target!`. Used to replay inputs.
    #[allow(improper_ctypes)]
    fn rust_fuzzer_test_input(input: &[u8]) -> i32;
}

/// Runs the fuzz target on each file given on the command line.
///
/// This makes it possible to reproduce a crash without `cargo fuzz`.
#[allow(unused)]
pub fn main() -> Result<(), Box<dyn Error>> {
    unsafe {
        let _ = LLVMFuzzerInitialize(ptr::null(), ptr::null());
    }
    let mut replayed = 0usize;
    for path in env::args_os().skip(1) {
        let input = fs::read(&path)?;
        unsafe {
            let _ = rust_fuzzer_test_input(&input);
        }
        replayed += 1;
    }
    if replayed == 0 {
        println!("no inputs given, pass one or more file paths to replay");
    } else {
        println!("replayed {replayed} inputs without failure");
    }
    Ok(())
}

#[macro_export]
macro_rules! maybe_define_main {
    () => {
        #[cfg(not(fuzzing))]
        fn main() {
            let _ = $crate::shim::main();
        }
    };
}
