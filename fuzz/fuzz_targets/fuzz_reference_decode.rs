#![no_main]

use capture_codec::JsonGzipCodec;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic; malformed gzip and malformed record text both
    // surface as errors.
    let _ = JsonGzipCodec::new().decode(data);
});
