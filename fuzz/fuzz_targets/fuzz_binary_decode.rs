#![no_main]

use capture_codec::{BinaryCodec, CAPTURE_META_LEN};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    match BinaryCodec.decode(data) {
        Ok(packet) => {
            // Payload is always exactly the bytes trailing the header.
            assert_eq!(packet.data.len(), data.len() - CAPTURE_META_LEN);
            assert_eq!(&packet.data[..], &data[CAPTURE_META_LEN..]);
        }
        Err(_) => assert!(data.len() < CAPTURE_META_LEN),
    }
    let _ = BinaryCodec.decode_meta(data);
});
