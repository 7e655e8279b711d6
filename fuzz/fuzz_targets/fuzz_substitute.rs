#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use qtac::VariableSet;

fuzz_target!(|data: &[u8]| {
    if let Ok(template) = std::str::from_utf8(data) {
        let vars = VariableSet::new().for_source(Path::new(template));
        let _ = vars.substitute(template);
    }
});
