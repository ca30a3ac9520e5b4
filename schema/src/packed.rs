//! Decoding and encoding of fields packed into 16-bit slots.
//!
//! A packed 32-bit value occupies two adjacent slots. The slots are first
//! assembled into one integer the way the host would load them from memory,
//! then the two halves are exchanged, because the format stores the high
//! half in the first slot. All functions here are pure over a slot buffer
//! that has already been byte-order normalized.

use wordstream::{half_swap_long, Endian, ASSUMED_HOST_ORDER, SWAP_ON_READ};

use crate::error::{SchemaError, SchemaResult};
use crate::field::{FieldDef, FieldKind, FieldValue};

/// Result of decoding one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decoded {
    /// The value after the field's range policy was applied.
    pub value: FieldValue,
    /// `true` if the stored value was out of range and got replaced.
    pub defaulted: bool,
}

impl Decoded {
    const fn kept(value: FieldValue) -> Self {
        Self {
            value,
            defaulted: false,
        }
    }
}

/// Reads the 32-bit value packed at `slot` and `slot + 1`.
///
/// Returns `None` if the pair does not fit in `slots`.
#[must_use]
pub fn read_packed(slots: &[i16], slot: usize) -> Option<i32> {
    let first = to_bits(*slots.get(slot)?);
    let second = to_bits(*slots.get(slot.checked_add(1)?)?);
    let assembled = match ASSUMED_HOST_ORDER {
        Endian::Little => (u32::from(second) << 16) | u32::from(first),
        Endian::Big => (u32::from(first) << 16) | u32::from(second),
    };
    #[allow(clippy::cast_possible_wrap)]
    let assembled = assembled as i32;
    Some(if SWAP_ON_READ {
        half_swap_long(assembled)
    } else {
        assembled
    })
}

/// Stores `value` at `slot` and `slot + 1` so that [`read_packed`] returns
/// it.
///
/// Returns `None`, leaving `slots` untouched, if the pair does not fit.
pub fn write_packed(slots: &mut [i16], slot: usize, value: i32) -> Option<()> {
    let end = slot.checked_add(2)?;
    let pair = slots.get_mut(slot..end)?;
    let stored = if SWAP_ON_READ {
        half_swap_long(value)
    } else {
        value
    };
    #[allow(clippy::cast_sign_loss)]
    let stored = stored as u32;
    let (high, low) = (from_bits((stored >> 16) as u16), from_bits(stored as u16));
    match ASSUMED_HOST_ORDER {
        Endian::Little => {
            pair[0] = low;
            pair[1] = high;
        }
        Endian::Big => {
            pair[0] = high;
            pair[1] = low;
        }
    }
    Some(())
}

/// Decodes one field from a normalized misc buffer.
///
/// Range policies are applied here: packed integers are raised to their
/// floor, out-of-range scalars become their fallback, and flags collapse to
/// a nonzero test. None of these are errors.
///
/// # Errors
///
/// Returns [`SchemaError::SlotOutOfBounds`] if the field does not fit in
/// `slots`.
pub fn decode_field(def: &FieldDef, slots: &[i16]) -> SchemaResult<Decoded> {
    let out_of_bounds = || SchemaError::SlotOutOfBounds {
        field: def.id,
        slot: def.slot,
        len: slots.len(),
    };

    let decoded = match def.kind {
        FieldKind::PackedInt { floor } => {
            let raw = read_packed(slots, def.slot).ok_or_else(out_of_bounds)?;
            match floor {
                Some(floor) if raw < floor => Decoded {
                    value: FieldValue::Int(floor),
                    defaulted: true,
                },
                _ => Decoded::kept(FieldValue::Int(raw)),
            }
        }
        FieldKind::FixedPoint { scale } => {
            let raw = read_packed(slots, def.slot).ok_or_else(out_of_bounds)?;
            #[allow(clippy::cast_possible_truncation)]
            let fraction = (f64::from(raw) / f64::from(scale)) as f32;
            Decoded::kept(FieldValue::Fraction(fraction))
        }
        FieldKind::Flag => {
            let raw = *slots.get(def.slot).ok_or_else(out_of_bounds)?;
            Decoded::kept(FieldValue::Flag(raw != 0))
        }
        FieldKind::Scalar(range) => {
            let raw = *slots.get(def.slot).ok_or_else(out_of_bounds)?;
            Decoded {
                value: FieldValue::Scalar(range.apply(raw)),
                defaulted: !range.contains(raw),
            }
        }
    };
    Ok(decoded)
}

/// Encodes one field into a misc buffer.
///
/// Values are stored as given; no range policy is applied on the way out.
/// Fractions are rounded to the nearest raw fixed-point step.
///
/// # Errors
///
/// Returns [`SchemaError::TypeMismatch`] if `value` is not the variant the
/// field decodes to, and [`SchemaError::SlotOutOfBounds`] if the field does
/// not fit in `slots`.
pub fn encode_field(def: &FieldDef, value: FieldValue, slots: &mut [i16]) -> SchemaResult<()> {
    let out_of_bounds = SchemaError::SlotOutOfBounds {
        field: def.id,
        slot: def.slot,
        len: slots.len(),
    };

    match (def.kind, value) {
        (FieldKind::PackedInt { .. }, FieldValue::Int(raw)) => {
            write_packed(slots, def.slot, raw).ok_or(out_of_bounds)
        }
        (FieldKind::FixedPoint { scale }, FieldValue::Fraction(fraction)) => {
            let raw = fraction_to_raw(fraction, scale);
            write_packed(slots, def.slot, raw).ok_or(out_of_bounds)
        }
        (FieldKind::Flag, FieldValue::Flag(flag)) => {
            let slot = slots.get_mut(def.slot).ok_or(out_of_bounds)?;
            *slot = i16::from(flag);
            Ok(())
        }
        (FieldKind::Scalar(_), FieldValue::Scalar(raw)) => {
            let slot = slots.get_mut(def.slot).ok_or(out_of_bounds)?;
            *slot = raw;
            Ok(())
        }
        (kind, value) => Err(SchemaError::TypeMismatch {
            field: def.id,
            expected: kind.value_name(),
            found: value.name(),
        }),
    }
}

/// Converts a fraction to its raw fixed-point value, saturating at the
/// `i32` range.
#[must_use]
pub fn fraction_to_raw(fraction: f32, scale: u32) -> i32 {
    #[allow(clippy::cast_possible_truncation)]
    let raw = (f64::from(fraction) * f64::from(scale)).round() as i32;
    raw
}

#[allow(clippy::cast_sign_loss)]
const fn to_bits(slot: i16) -> u16 {
    slot as u16
}

#[allow(clippy::cast_possible_wrap)]
const fn from_bits(bits: u16) -> i16 {
    bits as i16
}
