#![no_main]

use gesturelog::config::AppConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Whatever parses must sanitize into a config the screen accepts
    if let Ok(s) = std::str::from_utf8(data)
        && let Ok(mut config) = serde_json::from_str::<AppConfig>(s)
    {
        config.sanitize();
        assert!(config.gestures.min_fling_velocity <= config.gestures.max_fling_velocity);
        assert!(config.gestures.velocity_units > 0);
    }
});
