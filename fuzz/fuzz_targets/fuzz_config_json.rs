#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(config) = serde_json::from_slice::<mono_meta::Config>(data) {
        let _ = config.validate();
    }
});
