#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use qtac::domain::services::resolve_references;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let _ = resolve_references(Path::new("resources/app.qrc"), &text);
});
