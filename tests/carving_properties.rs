//! Property tests for the block carver
//!
//! Inputs are generated as sequences of blocks, each either starting with a
//! JPEG signature or not, plus an optional trailing fragment.

use jpeg_recover::domain::entities::{is_jpeg_signature, BlockSize, OutputName};
use jpeg_recover::domain::services::Carver;
use jpeg_recover::infrastructure::block_device::ReaderBlockSource;
use jpeg_recover::infrastructure::persistence::MemorySinkFactory;
use proptest::prelude::*;
use std::collections::BTreeMap;

const BLOCK_SIZES: [usize; 4] = [4, 16, 64, 512];

fn block(size: usize, is_start: bool, marker: u8, fill: u8) -> Vec<u8> {
    let mut block = vec![fill; size];
    if is_start {
        block[..4].copy_from_slice(&[0xFF, 0xD8, 0xFF, marker]);
    }
    block
}

fn dump() -> impl Strategy<Value = (usize, Vec<Vec<u8>>, Vec<u8>)> {
    (0..BLOCK_SIZES.len()).prop_flat_map(|i| {
        let size = BLOCK_SIZES[i];
        let blocks = prop::collection::vec(
            (any::<bool>(), 0xE0u8..=0xEF, any::<u8>())
                .prop_map(move |(start, marker, fill)| block(size, start, marker, fill)),
            0..24,
        );
        let tail = prop::collection::vec(any::<u8>(), 0..size);
        (Just(size), blocks, tail)
    })
}

fn carve(size: usize, data: &[u8]) -> (usize, BTreeMap<String, Vec<u8>>) {
    let mut carver = Carver::new(MemorySinkFactory::new());
    let summary = carver
        .scan(ReaderBlockSource::new(data), BlockSize::new(size).unwrap())
        .unwrap();
    (summary.file_count(), carver.factory().outputs())
}

/// Expected outputs computed directly from the block list
fn expected_outputs(blocks: &[Vec<u8>]) -> Vec<Vec<u8>> {
    let mut files: Vec<Vec<u8>> = Vec::new();
    for block in blocks {
        if is_jpeg_signature(block) {
            files.push(Vec::new());
        }
        if let Some(current) = files.last_mut() {
            current.extend_from_slice(block);
        }
    }
    files
}

proptest! {
    #[test]
    fn file_count_equals_match_count((size, blocks, tail) in dump()) {
        let data = [blocks.concat(), tail].concat();
        let matches = blocks.iter().filter(|b| is_jpeg_signature(b)).count();

        let (count, outputs) = carve(size, &data);

        prop_assert_eq!(count, matches);
        prop_assert_eq!(outputs.len(), matches);
    }

    #[test]
    fn outputs_hold_exact_block_runs((size, blocks, tail) in dump()) {
        let data = [blocks.concat(), tail].concat();
        let (_, outputs) = carve(size, &data);

        let expected = expected_outputs(&blocks);
        for (index, content) in expected.iter().enumerate() {
            let name = OutputName::for_index(index as u64);
            prop_assert_eq!(outputs.get(name.as_str()), Some(content));
        }
    }

    #[test]
    fn leading_blocks_and_tail_never_written((size, blocks, tail) in dump()) {
        let data = [blocks.concat(), tail.clone()].concat();
        let (_, outputs) = carve(size, &data);

        let leading = blocks.iter().take_while(|b| !is_jpeg_signature(b)).count();
        let written: usize = outputs.values().map(Vec::len).sum();

        prop_assert_eq!(written, (blocks.len() - leading) * size);
        prop_assert!(outputs.values().all(|o| o.len() % size == 0));
    }

    #[test]
    fn names_are_sequential((size, blocks, tail) in dump()) {
        let data = [blocks.concat(), tail].concat();
        let (count, outputs) = carve(size, &data);

        let names: Vec<String> = outputs.keys().cloned().collect();
        let expected: Vec<String> = (0..count as u64)
            .map(|i| OutputName::for_index(i).into_string())
            .collect();
        prop_assert_eq!(names, expected);
    }

    #[test]
    fn rescan_is_byte_identical((size, blocks, tail) in dump()) {
        let data = [blocks.concat(), tail].concat();
        prop_assert_eq!(carve(size, &data), carve(size, &data));
    }

    #[test]
    fn signature_needs_all_four_bytes(bytes in prop::array::uniform4(any::<u8>())) {
        let expected = bytes[0] == 0xFF
            && bytes[1] == 0xD8
            && bytes[2] == 0xFF
            && (0xE0..=0xEF).contains(&bytes[3]);
        prop_assert_eq!(is_jpeg_signature(&bytes), expected);
    }
}
