#![no_main]

use libfuzzer_sys::fuzz_target;
use qtac::config::{parse_str, ConfigFormat};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing and validation should never panic
        for format in [ConfigFormat::Json, ConfigFormat::Yaml, ConfigFormat::Toml] {
            if let Ok((config, _unknown)) = parse_str(content, format) {
                let _ = config.validate();
            }
        }
    }
});
