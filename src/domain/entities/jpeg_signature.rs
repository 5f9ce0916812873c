//! JPEG start-of-image signature
//!
//! A JPEG file starts with `FF D8 FF` followed by an APPn marker byte in
//! `E0..=EF`. Carving only ever tests the first four bytes of a block.

/// The three fixed leading bytes of every JPEG start-of-image
pub const JPEG_SOI_PREFIX: [u8; 3] = [0xFF, 0xD8, 0xFF];

/// Inclusive range of the fourth (APPn marker) byte
pub const JPEG_APP_MARKERS: std::ops::RangeInclusive<u8> = 0xE0..=0xEF;

/// Length of the signature in bytes
pub const JPEG_SIGNATURE_LEN: usize = 4;

/// Returns true if `block` begins with a JPEG start-of-image signature.
///
/// Inputs shorter than four bytes never match.
#[inline]
pub fn is_jpeg_signature(block: &[u8]) -> bool {
    match block.get(..JPEG_SIGNATURE_LEN) {
        Some([a, b, c, marker]) => {
            [*a, *b, *c] == JPEG_SOI_PREFIX && JPEG_APP_MARKERS.contains(marker)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_app_marker_matches() {
        for marker in 0xE0..=0xEFu8 {
            assert!(is_jpeg_signature(&[0xFF, 0xD8, 0xFF, marker]));
        }
    }

    #[test]
    fn test_marker_bounds() {
        assert!(!is_jpeg_signature(&[0xFF, 0xD8, 0xFF, 0xDF]));
        assert!(!is_jpeg_signature(&[0xFF, 0xD8, 0xFF, 0xF0]));
        assert!(!is_jpeg_signature(&[0xFF, 0xD8, 0xFF, 0xDB]));
    }

    #[test]
    fn test_short_input() {
        assert!(!is_jpeg_signature(&[]));
        assert!(!is_jpeg_signature(&[0xFF, 0xD8, 0xFF]));
    }

    #[test]
    fn test_only_leading_bytes_count() {
        let mut block = vec![0u8; 512];
        block[1..5].copy_from_slice(&[0xFF, 0xD8, 0xFF, 0xE0]);
        assert!(!is_jpeg_signature(&block));

        block[0..4].copy_from_slice(&[0xFF, 0xD8, 0xFF, 0xE1]);
        assert!(is_jpeg_signature(&block));
    }
}
