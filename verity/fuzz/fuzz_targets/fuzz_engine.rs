#![no_main]

use libfuzzer_sys::fuzz_target;
use verity::{Engine, ResourceLimits};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // First line is the original, the rest the simplified form
        let (original, simplified) = s.split_once('\n').unwrap_or((s, s));
        let engine = Engine::with_limits(ResourceLimits::default().with_max_variables(8));

        let _ = engine.run(original, simplified);
    }
});
