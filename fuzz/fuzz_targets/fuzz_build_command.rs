#![no_main]

use libfuzzer_sys::fuzz_target;
use mono_meta::{BinaryName, BuildCommand};

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        if let Ok(cmd) = BuildCommand::new(raw) {
            // a validated command always renders a program
            let (program, _) = cmd.render(&BinaryName::default());
            assert!(!program.is_empty());
        }
    }
});
