//! Packed misc-slot field table and field codecs for legacy city saves.
//!
//! The misc section of a city file is 120 signed 16-bit slots. Some slots
//! are standalone scalars or flags; others are halves of a 32-bit integer or
//! 16.16 fixed-point value. The file carries no description of this, so the
//! layout lives here as a static descriptor table ([`MISC_FIELDS`]) with pure
//! [`decode_field`]/[`encode_field`] functions over it.
//!
//! # Design Principles
//!
//! - **Table-driven** - Slot positions appear once, in [`MISC_FIELDS`].
//! - **Tolerant decoding** - Out-of-range legacy values fall back to
//!   defaults instead of failing.
//! - **No I/O** - Everything operates on an already normalized slot buffer.

mod error;
mod field;
mod packed;
mod table;

pub use error::{SchemaError, SchemaResult};
pub use field::{FieldDef, FieldId, FieldKind, FieldValue, ScalarRange};
pub use packed::{decode_field, encode_field, fraction_to_raw, read_packed, write_packed, Decoded};
pub use table::{
    field_def, AUTO_BUDGET_SLOT, AUTO_BULLDOZE_SLOT, AUTO_GOTO_SLOT, CITY_TAX_SLOT,
    CITY_TIME_SLOT, FIRE_FUNDING_SLOT, FIXED_POINT_ONE, MISC_FIELDS, POLICE_FUNDING_SLOT,
    ROAD_FUNDING_SLOT, SIM_SPEED_SLOT, SPEED_RANGE, TAX_RANGE, TOTAL_FUNDS_SLOT, USER_SOUND_SLOT,
};
