#![no_main]
use libfuzzer_sys::fuzz_target;

use zone_types::types::RecordSet;

fuzz_target!(|data: &str| {
    let parsed = RecordSet::deserialise(data);
    assert_eq!(parsed, RecordSet::deserialise(data));

    // the rendering is presentation-only, so no equality with a
    // re-parse, but neither side may panic
    let _ = RecordSet::deserialise(&parsed.serialise());
});
