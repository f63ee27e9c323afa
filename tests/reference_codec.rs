#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Reference codec contract tests: exact full-width roundtrips and the two
//! distinct decode failure modes.

use capture_codec::{BinaryCodec, CaptureInfo, CapturePacket, CodecError, JsonGzipCodec};
use chrono::{TimeZone, Utc};
use rand::RngCore;

fn sample_packet(payload_len: usize) -> CapturePacket {
    let mut data = vec![0u8; payload_len];
    rand::rng().fill_bytes(&mut data);
    CapturePacket {
        info: CaptureInfo {
            timestamp: Utc.timestamp_micros(Utc::now().timestamp_micros()).unwrap(),
            capture_length: payload_len as u32,
            length: payload_len as u32,
            interface_index: 7,
        },
        id: 33,
        data,
    }
}

#[test]
fn test_roundtrip_original_benchmark_sizes() {
    let codec = JsonGzipCodec::new();
    for size in [72, 1024, 16 * 1024] {
        let packet = sample_packet(size);
        let decoded = codec.decode(&codec.encode(&packet).unwrap()).unwrap();
        assert_eq!(decoded, packet, "roundtrip failed for {size}-byte payload");
    }
}

#[test]
fn test_full_width_fields_survive() {
    let codec = JsonGzipCodec::new();
    let packet = CapturePacket {
        info: CaptureInfo {
            timestamp: Utc.timestamp_micros(1_700_000_000_123_456).unwrap(),
            capture_length: u32::MAX,
            length: u32::MAX - 1,
            interface_index: 1 << 20,
            },
        id: u32::MAX,
        data: vec![0xAB; 16],
    };

    let decoded = codec.decode(&codec.encode(&packet).unwrap()).unwrap();
    assert_eq!(decoded, packet);
}

#[test]
fn test_microsecond_timestamp_precision_survives() {
    let codec = JsonGzipCodec::new();
    let mut packet = sample_packet(8);
    packet.info.timestamp = Utc.timestamp_micros(1_234_567_890_654_321).unwrap();

    let decoded = codec.decode(&codec.encode(&packet).unwrap()).unwrap();
    assert_eq!(decoded.info.timestamp, packet.info.timestamp);
}

#[test]
fn test_malformed_gzip_distinct_error() {
    let codec = JsonGzipCodec::new();
    let err = codec.decode(&[0x00, 0x01, 0x02, 0x03]).unwrap_err();
    assert!(matches!(err, CodecError::MalformedGzip(_)));
}

#[test]
fn test_truncated_stream_distinct_error() {
    let codec = JsonGzipCodec::new();
    let encoded = codec.encode(&sample_packet(256)).unwrap();
    let err = codec.decode(&encoded[..encoded.len() / 2]).unwrap_err();
    assert!(matches!(err, CodecError::MalformedGzip(_)));
}

#[test]
fn test_valid_gzip_invalid_record_distinct_error() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let codec = JsonGzipCodec::new();
    for bogus in [&b"not json at all"[..], b"[1,2,3]", b"{\"id\": \"nope\"}"] {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::fast());
        encoder.write_all(bogus).unwrap();
        let stream = encoder.finish().unwrap();

        let err = codec.decode(&stream).unwrap_err();
        assert!(
            matches!(err, CodecError::MalformedText(_)),
            "expected MalformedText for {bogus:?}, got {err:?}"
        );
    }
}

#[test]
fn test_reference_output_larger_but_lossless_vs_binary() {
    // The whole point of keeping both: binary is compact but truncating,
    // reference is bigger but exact.
    let mut packet = sample_packet(72);
    packet.id = 100_000;

    let binary = BinaryCodec.decode(&BinaryCodec.encode(&packet)).unwrap();
    assert_ne!(binary.id, packet.id); // wrapped

    let codec = JsonGzipCodec::new();
    let reference = codec.decode(&codec.encode(&packet).unwrap()).unwrap();
    assert_eq!(reference.id, packet.id); // exact
}
