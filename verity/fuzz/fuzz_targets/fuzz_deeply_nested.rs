#![no_main]

use libfuzzer_sys::fuzz_target;
use verity::Engine;

fuzz_target!(|depth: u8| {
    let engine = Engine::new();

    let depth = (depth as usize % 150) + 1;

    let mut expr = String::from("A");
    for _ in 0..depth {
        expr = format!("!({}|B)", expr);
    }

    let _ = engine.run(&expr, "A|B");
});
