use proptest::prelude::*;
use schema::{
    decode_field, encode_field, field_def, read_packed, write_packed, FieldId, FieldValue,
    SPEED_RANGE, TAX_RANGE,
};
use wordstream::{half_swap_long, swap_shorts, SWAP_ON_READ};

/// Lays out a 32-bit value the way the legacy format stores it on disk:
/// big-endian bytes, high half first.
fn disk_bytes(value: i32) -> [u8; 4] {
    value.to_be_bytes()
}

proptest! {
    #[test]
    fn prop_packed_roundtrip(value in any::<i32>(), slot in 0usize..118) {
        let mut slots = [0i16; 120];
        write_packed(&mut slots, slot, value).unwrap();
        prop_assert_eq!(read_packed(&slots, slot), Some(value));
    }

    #[test]
    fn prop_disk_bytes_decode_through_both_corrections(value in any::<i32>()) {
        // Load the four disk bytes as two host-order words, as a raw read would.
        let bytes = disk_bytes(value);
        let mut slots = [
            i16::from_le_bytes([bytes[0], bytes[1]]),
            i16::from_le_bytes([bytes[2], bytes[3]]),
        ];
        if SWAP_ON_READ {
            swap_shorts(&mut slots);
        }
        prop_assert_eq!(read_packed(&slots, 0), Some(value));
    }

    #[test]
    fn prop_half_swap_is_the_32bit_correction(first in any::<i16>(), second in any::<i16>()) {
        let slots = [first, second];
        let host_assembled = i32::from_le_bytes({
            let a = first.to_le_bytes();
            let b = second.to_le_bytes();
            [a[0], a[1], b[0], b[1]]
        });
        prop_assert_eq!(read_packed(&slots, 0), Some(half_swap_long(host_assembled)));
    }

    #[test]
    fn prop_tax_always_in_range(raw in any::<i16>()) {
        let def = field_def(FieldId::CityTax);
        let mut slots = [0i16; 120];
        slots[def.slot] = raw;
        let decoded = decode_field(&def, &slots).unwrap();
        let tax = decoded.value.as_scalar().unwrap();
        prop_assert!(TAX_RANGE.contains(tax));
        prop_assert_eq!(decoded.defaulted, !TAX_RANGE.contains(raw));
    }

    #[test]
    fn prop_speed_always_in_range(raw in any::<i16>()) {
        let def = field_def(FieldId::SimSpeed);
        let mut slots = [0i16; 120];
        slots[def.slot] = raw;
        let speed = decode_field(&def, &slots).unwrap().value.as_scalar().unwrap();
        prop_assert!(SPEED_RANGE.contains(speed));
    }

    #[test]
    fn prop_city_time_never_negative(raw in any::<i32>()) {
        let def = field_def(FieldId::CityTime);
        let mut slots = [0i16; 120];
        encode_field(&def, FieldValue::Int(raw), &mut slots).unwrap();
        let time = decode_field(&def, &slots).unwrap().value.as_int().unwrap();
        prop_assert_eq!(time, raw.max(0));
    }
}
