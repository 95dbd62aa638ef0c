use dvpl_convert::{Codec, DvplCodec, DvplError, DvplFooter, FOOTER_SIZE};
use proptest::prelude::*;
use rand::Rng;

proptest! {
    #[test]
    fn roundtrip_any_bytes(data in proptest::collection::vec(any::<u8>(), 0..4096), allow in any::<bool>()) {
        let packed = DvplCodec.compress(&data, allow).unwrap();
        prop_assert_eq!(DvplCodec.decompress(&packed).unwrap(), data);
    }

    #[test]
    fn footer_matches_payload(data in proptest::collection::vec(any::<u8>(), 0..1024)) {
        let packed = DvplCodec.compress(&data, true).unwrap();
        let (payload, footer) = DvplFooter::split(&packed).unwrap();
        prop_assert_eq!(footer.original_size as usize, data.len());
        prop_assert_eq!(footer.compressed_size as usize, payload.len());
        prop_assert!(payload.len() <= data.len());
    }
}

#[test]
fn random_roundtrip() {
    let mut rng = rand::thread_rng();
    for _ in 0..10 {
        let len = rng.gen_range(1..20_000);
        // Small alphabet so LZ4 actually finds matches.
        let data: Vec<u8> = (0..len).map(|_| rng.gen_range(b'a'..=b'd')).collect();
        for allow in [true, false] {
            let packed = DvplCodec.compress(&data, allow).unwrap();
            assert_eq!(DvplCodec.decompress(&packed).unwrap(), data);
        }
    }
}

fn packed_sample() -> Vec<u8> {
    DvplCodec.compress(&b"tank garage ".repeat(50), true).unwrap()
}

#[test]
fn truncated_container_fails() {
    let mut packed = packed_sample();
    packed.truncate(FOOTER_SIZE - 1);
    assert_eq!(
        DvplCodec.decompress(&packed),
        Err(DvplError::TooShort(FOOTER_SIZE - 1))
    );
}

#[test]
fn missing_payload_byte_fails() {
    let packed = packed_sample();
    let shortened = &packed[1..];
    assert!(matches!(
        DvplCodec.decompress(shortened),
        Err(DvplError::PayloadSizeMismatch { .. })
    ));
}

#[test]
fn flipped_payload_byte_fails_crc() {
    let mut packed = packed_sample();
    packed[0] ^= 0xFF;
    assert!(matches!(
        DvplCodec.decompress(&packed),
        Err(DvplError::CrcMismatch { .. })
    ));
}

#[test]
fn corrupted_magic_fails() {
    let mut packed = packed_sample();
    let last = packed.len() - 1;
    packed[last] = b'X';
    assert_eq!(DvplCodec.decompress(&packed), Err(DvplError::BadMagic));
}

#[test]
fn wrong_original_size_fails_lz4() {
    let mut packed = packed_sample();
    let start = packed.len() - FOOTER_SIZE;
    // Claim one byte fewer than the real output.
    let size = u32::from_le_bytes(packed[start..start + 4].try_into().unwrap()) - 1;
    packed[start..start + 4].copy_from_slice(&size.to_le_bytes());
    assert!(matches!(
        DvplCodec.decompress(&packed),
        Err(DvplError::Lz4(_))
    ));
}
