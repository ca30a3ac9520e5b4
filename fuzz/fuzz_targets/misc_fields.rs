#![no_main]

use libfuzzer_sys::fuzz_target;
use schema::{decode_field, encode_field, FieldValue, MISC_FIELDS};
use wire::MISC_LEN;

fuzz_target!(|data: &[u8]| {
    let mut slots = [0i16; MISC_LEN];
    for (slot, bytes) in slots.iter_mut().zip(data.chunks_exact(2)) {
        *slot = i16::from_be_bytes([bytes[0], bytes[1]]);
    }

    for def in &MISC_FIELDS {
        let decoded = decode_field(def, &slots).expect("table slots fit the misc section");
        let mut copy = slots;
        encode_field(def, decoded.value, &mut copy).expect("decoded value matches its kind");
        let again = decode_field(def, &copy).expect("table slots fit the misc section");
        match (decoded.value, again.value) {
            (FieldValue::Fraction(a), FieldValue::Fraction(b)) => {
                assert!((a - b).abs() <= 1.0 / 65_536.0);
            }
            (a, b) => assert_eq!(a, b),
        }
    }
});
