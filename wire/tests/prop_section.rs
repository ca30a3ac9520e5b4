use std::io::Cursor;

use proptest::prelude::*;
use wire::{read_section, write_section, DecodeError, SectionTag, HISTORY_LEN, WORD_SIZE};
use wordstream::{WordReader, WordWriter, SWAP_ON_READ};

fn history_tag() -> impl Strategy<Value = SectionTag> {
    prop::sample::select(SectionTag::HISTORIES.to_vec())
}

proptest! {
    #[test]
    fn prop_big_endian_bytes_read_as_values(
        tag in history_tag(),
        samples in prop::collection::vec(any::<i16>(), HISTORY_LEN),
    ) {
        let bytes: Vec<u8> = samples.iter().flat_map(|v| v.to_be_bytes()).collect();
        let mut reader = WordReader::new(Cursor::new(bytes));
        let mut buf = [0i16; HISTORY_LEN];
        read_section(tag, &mut buf, &mut reader).unwrap();
        prop_assert_eq!(buf.to_vec(), samples);
    }

    #[test]
    fn prop_swapped_write_reads_back(samples in prop::collection::vec(any::<i16>(), HISTORY_LEN)) {
        let mut writer = WordWriter::new(Vec::new()).with_swap(SWAP_ON_READ);
        write_section(SectionTag::MoneyHistory, &samples, &mut writer).unwrap();
        let bytes = writer.into_inner();
        prop_assert_eq!(bytes.len(), SectionTag::MoneyHistory.byte_len());

        let mut reader = WordReader::new(Cursor::new(bytes));
        let mut buf = [0i16; HISTORY_LEN];
        read_section(SectionTag::MoneyHistory, &mut buf, &mut reader).unwrap();
        prop_assert_eq!(buf.to_vec(), samples);
    }

    #[test]
    fn prop_truncated_section_reports_whole_words(
        tag in history_tag(),
        len in 0..(HISTORY_LEN * WORD_SIZE),
    ) {
        let mut reader = WordReader::new(Cursor::new(vec![0u8; len]));
        let mut buf = [0i16; HISTORY_LEN];
        let err = read_section(tag, &mut buf, &mut reader).unwrap_err();
        prop_assert_eq!(
            err,
            DecodeError::ShortRead {
                section: tag,
                expected: HISTORY_LEN,
                actual: len / WORD_SIZE,
            }
        );
    }
}
