//! Field kinds, values and definitions for the misc section.

use std::fmt;

/// Identifies a header field packed into the misc section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FieldId {
    CityTime,
    TotalFunds,
    AutoBulldoze,
    AutoBudget,
    AutoGoto,
    UserSound,
    CityTax,
    SimSpeed,
    PoliceFunding,
    FireFunding,
    RoadFunding,
}

impl FieldId {
    /// Returns a short snake_case name for this field.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CityTime => "city_time",
            Self::TotalFunds => "total_funds",
            Self::AutoBulldoze => "auto_bulldoze",
            Self::AutoBudget => "auto_budget",
            Self::AutoGoto => "auto_goto",
            Self::UserSound => "user_sound",
            Self::CityTax => "city_tax",
            Self::SimSpeed => "sim_speed",
            Self::PoliceFunding => "police_funding",
            Self::FireFunding => "fire_funding",
            Self::RoadFunding => "road_funding",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Legal range of a 16-bit scalar and the value used when it is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalarRange {
    /// Smallest legal value.
    pub min: i16,
    /// Largest legal value.
    pub max: i16,
    /// Replacement for any value outside `min..=max`.
    pub fallback: i16,
}

impl ScalarRange {
    /// Creates a range with a fallback value.
    #[must_use]
    pub const fn new(min: i16, max: i16, fallback: i16) -> Self {
        Self { min, max, fallback }
    }

    /// Returns `true` if `value` lies within the range.
    #[must_use]
    pub const fn contains(self, value: i16) -> bool {
        value >= self.min && value <= self.max
    }

    /// Returns `value` if it is legal, otherwise the fallback.
    #[must_use]
    pub const fn apply(self, value: i16) -> i16 {
        if self.contains(value) {
            value
        } else {
            self.fallback
        }
    }
}

/// How a field is stored in the misc section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// 32-bit integer across two slots, raised to `floor` when below it.
    PackedInt { floor: Option<i32> },

    /// Fixed-point fraction across two slots (raw value divided by `scale`).
    FixedPoint { scale: u32 },

    /// Boolean stored in one slot; any nonzero value is `true`.
    Flag,

    /// 16-bit scalar in one slot with a legal range.
    Scalar(ScalarRange),
}

impl FieldKind {
    /// Creates an unbounded packed integer kind.
    #[must_use]
    pub const fn packed_int() -> Self {
        Self::PackedInt { floor: None }
    }

    /// Creates a packed integer kind floored at `floor`.
    #[must_use]
    pub const fn packed_int_floor(floor: i32) -> Self {
        Self::PackedInt { floor: Some(floor) }
    }

    /// Creates a packed fixed-point kind.
    #[must_use]
    pub const fn fixed_point(scale: u32) -> Self {
        Self::FixedPoint { scale }
    }

    /// Creates a flag kind.
    #[must_use]
    pub const fn flag() -> Self {
        Self::Flag
    }

    /// Creates a range-checked scalar kind.
    #[must_use]
    pub const fn scalar(min: i16, max: i16, fallback: i16) -> Self {
        Self::Scalar(ScalarRange::new(min, max, fallback))
    }

    /// Returns the number of 16-bit slots the field occupies.
    #[must_use]
    pub const fn slot_count(self) -> usize {
        match self {
            Self::PackedInt { .. } | Self::FixedPoint { .. } => 2,
            Self::Flag | Self::Scalar(_) => 1,
        }
    }

    /// Returns the name of the value variant this kind decodes to.
    #[must_use]
    pub const fn value_name(self) -> &'static str {
        match self {
            Self::PackedInt { .. } => "int",
            Self::FixedPoint { .. } => "fraction",
            Self::Flag => "flag",
            Self::Scalar(_) => "scalar",
        }
    }
}

/// A decoded field value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FieldValue {
    Int(i32),
    Fraction(f32),
    Flag(bool),
    Scalar(i16),
}

impl FieldValue {
    /// Returns the name of this variant.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Fraction(_) => "fraction",
            Self::Flag(_) => "flag",
            Self::Scalar(_) => "scalar",
        }
    }

    #[must_use]
    pub const fn as_int(self) -> Option<i32> {
        match self {
            Self::Int(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_fraction(self) -> Option<f32> {
        match self {
            Self::Fraction(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_flag(self) -> Option<bool> {
        match self {
            Self::Flag(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_scalar(self) -> Option<i16> {
        match self {
            Self::Scalar(value) => Some(value),
            _ => None,
        }
    }
}

/// Location and encoding of one field in the misc section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub id: FieldId,
    /// Index of the first 16-bit slot.
    pub slot: usize,
    pub kind: FieldKind,
}

impl FieldDef {
    #[must_use]
    pub const fn new(id: FieldId, slot: usize, kind: FieldKind) -> Self {
        Self { id, slot, kind }
    }

    /// Returns one past the last slot the field occupies.
    #[must_use]
    pub const fn end_slot(self) -> usize {
        self.slot + self.kind.slot_count()
    }
}
