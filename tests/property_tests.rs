#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Property-based tests using proptest.
//!
//! Validates the codec invariants across randomly generated records:
//! roundtrip fidelity, the fixed output-length relation, and the documented
//! modulo-65536 wrap of the 16-bit wire fields.

use capture_codec::{BinaryCodec, CaptureInfo, CapturePacket, JsonGzipCodec, CAPTURE_META_LEN};
use chrono::{TimeZone, Utc};
use proptest::prelude::*;

fn arb_packet(max_field: u32) -> impl Strategy<Value = CapturePacket> {
    (
        0i64..4_102_444_800_000_000, // micros up to year 2100
        0..max_field,
        0..max_field,
        0..max_field,
        0..max_field,
        prop::collection::vec(any::<u8>(), 0..4096),
    )
        .prop_map(|(micros, cap_len, len, iface, id, data)| CapturePacket {
            info: CaptureInfo {
                timestamp: Utc.timestamp_micros(micros).unwrap(),
                capture_length: cap_len,
                length: len,
                interface_index: iface,
            },
            id,
            data,
        })
}

proptest! {
    // Fields within 16-bit range roundtrip exactly, payload byte-for-byte.
    #[test]
    fn prop_binary_roundtrip(packet in arb_packet(65536)) {
        let encoded = BinaryCodec.encode(&packet);
        let decoded = BinaryCodec.decode(&encoded).unwrap();
        prop_assert_eq!(decoded, packet);
    }
}

proptest! {
    #[test]
    fn prop_encoded_length_relation(packet in arb_packet(65536)) {
        let encoded = BinaryCodec.encode(&packet);
        prop_assert_eq!(encoded.len(), CAPTURE_META_LEN + packet.data.len());
    }
}

proptest! {
    // Above 16 bits the fields wrap modulo 65536: no crash, no unrelated
    // corruption.
    #[test]
    fn prop_binary_wraps_modulo_65536(packet in arb_packet(u32::MAX)) {
        let decoded = BinaryCodec.decode(&BinaryCodec.encode(&packet)).unwrap();
        prop_assert_eq!(decoded.info.capture_length, packet.info.capture_length % 65536);
        prop_assert_eq!(decoded.info.length, packet.info.length % 65536);
        prop_assert_eq!(decoded.info.interface_index, packet.info.interface_index % 65536);
        prop_assert_eq!(decoded.id, packet.id % 65536);
        prop_assert_eq!(decoded.info.timestamp, packet.info.timestamp);
        prop_assert_eq!(decoded.data, packet.data);
    }
}

proptest! {
    // Encoding is deterministic.
    #[test]
    fn prop_binary_deterministic(packet in arb_packet(u32::MAX)) {
        prop_assert_eq!(BinaryCodec.encode(&packet), BinaryCodec.encode(&packet));
    }
}

proptest! {
    // The reference codec never truncates, whatever the field magnitude.
    #[test]
    fn prop_reference_roundtrip_full_width(packet in arb_packet(u32::MAX)) {
        let codec = JsonGzipCodec::new();
        let decoded = codec.decode(&codec.encode(&packet).unwrap()).unwrap();
        prop_assert_eq!(decoded, packet);
    }
}

proptest! {
    // Arbitrary bytes never panic the binary decoder: short input errors,
    // anything else parses.
    #[test]
    fn prop_binary_decode_total(input in prop::collection::vec(any::<u8>(), 0..256)) {
        match BinaryCodec.decode(&input) {
            Ok(packet) => prop_assert_eq!(packet.data.len(), input.len() - CAPTURE_META_LEN),
            Err(_) => prop_assert!(input.len() < CAPTURE_META_LEN),
        }
    }
}

proptest! {
    // Arbitrary bytes never panic the reference decoder either.
    #[test]
    fn prop_reference_decode_total(input in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = JsonGzipCodec::new().decode(&input);
    }
}
