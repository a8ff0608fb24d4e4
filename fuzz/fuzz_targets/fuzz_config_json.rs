#![no_main]

use gutter_layout::{LayoutConfig, LayoutEngine};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Accepted configs must mount at any container width without panicking.
    if let Ok(config) = LayoutConfig::from_json_str(text) {
        for width in [0_i64, 480, 1024, 4096] {
            let engine = LayoutEngine::new(config.clone(), width).expect("validated config mounts");
            assert_eq!(engine.widths().len(), config.explicit_count());
        }
    }
});
