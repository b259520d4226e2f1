#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        if let Ok(pattern) = mono_meta::ServicePattern::new(raw) {
            let root = Path::new("/repo");
            let _ = pattern.name_of(root, &pattern.absolute(root));
        }
    }
});
