//! The misc section field table.

use crate::field::{FieldDef, FieldId, FieldKind, ScalarRange};

/// Raw 16.16 fixed-point value of 1.0.
pub const FIXED_POINT_ONE: u32 = 1 << 16;

pub const CITY_TIME_SLOT: usize = 8;
pub const TOTAL_FUNDS_SLOT: usize = 50;
pub const AUTO_BULLDOZE_SLOT: usize = 52;
pub const AUTO_BUDGET_SLOT: usize = 53;
pub const AUTO_GOTO_SLOT: usize = 54;
pub const USER_SOUND_SLOT: usize = 55;
pub const CITY_TAX_SLOT: usize = 56;
pub const SIM_SPEED_SLOT: usize = 57;
pub const POLICE_FUNDING_SLOT: usize = 58;
pub const FIRE_FUNDING_SLOT: usize = 60;
pub const ROAD_FUNDING_SLOT: usize = 62;

/// Legal tax rates; anything else loads as 7.
pub const TAX_RANGE: ScalarRange = ScalarRange::new(0, 20, 7);

/// Legal simulation speeds; anything else loads as 3.
pub const SPEED_RANGE: ScalarRange = ScalarRange::new(0, 3, 3);

/// Every field stored in the misc section, indexed by [`FieldId`].
pub const MISC_FIELDS: [FieldDef; 11] = [
    FieldDef::new(
        FieldId::CityTime,
        CITY_TIME_SLOT,
        FieldKind::packed_int_floor(0),
    ),
    FieldDef::new(
        FieldId::TotalFunds,
        TOTAL_FUNDS_SLOT,
        FieldKind::packed_int(),
    ),
    FieldDef::new(FieldId::AutoBulldoze, AUTO_BULLDOZE_SLOT, FieldKind::flag()),
    FieldDef::new(FieldId::AutoBudget, AUTO_BUDGET_SLOT, FieldKind::flag()),
    FieldDef::new(FieldId::AutoGoto, AUTO_GOTO_SLOT, FieldKind::flag()),
    FieldDef::new(FieldId::UserSound, USER_SOUND_SLOT, FieldKind::flag()),
    FieldDef::new(FieldId::CityTax, CITY_TAX_SLOT, FieldKind::Scalar(TAX_RANGE)),
    FieldDef::new(
        FieldId::SimSpeed,
        SIM_SPEED_SLOT,
        FieldKind::Scalar(SPEED_RANGE),
    ),
    FieldDef::new(
        FieldId::PoliceFunding,
        POLICE_FUNDING_SLOT,
        FieldKind::fixed_point(FIXED_POINT_ONE),
    ),
    FieldDef::new(
        FieldId::FireFunding,
        FIRE_FUNDING_SLOT,
        FieldKind::fixed_point(FIXED_POINT_ONE),
    ),
    FieldDef::new(
        FieldId::RoadFunding,
        ROAD_FUNDING_SLOT,
        FieldKind::fixed_point(FIXED_POINT_ONE),
    ),
];

/// Returns the table entry for `id`.
#[must_use]
pub const fn field_def(id: FieldId) -> FieldDef {
    MISC_FIELDS[id as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_id() {
        for (idx, def) in MISC_FIELDS.iter().enumerate() {
            assert_eq!(def.id as usize, idx, "{}", def.id);
            assert_eq!(field_def(def.id), *def);
        }
    }

    #[test]
    fn fields_do_not_overlap() {
        for pair in MISC_FIELDS.windows(2) {
            assert!(
                pair[0].end_slot() <= pair[1].slot,
                "{} overlaps {}",
                pair[0].id,
                pair[1].id
            );
        }
    }

    #[test]
    fn fields_fit_in_misc_section() {
        let last = MISC_FIELDS[MISC_FIELDS.len() - 1];
        assert!(last.end_slot() <= 120);
    }

    #[test]
    fn documented_slots() {
        assert_eq!(field_def(FieldId::CityTime).slot, 8);
        assert_eq!(field_def(FieldId::TotalFunds).slot, 50);
        assert_eq!(field_def(FieldId::CityTax).slot, 56);
        assert_eq!(field_def(FieldId::SimSpeed).slot, 57);
        assert_eq!(field_def(FieldId::PoliceFunding).slot, 58);
        assert_eq!(field_def(FieldId::FireFunding).slot, 60);
        assert_eq!(field_def(FieldId::RoadFunding).slot, 62);
    }

    #[test]
    fn fixed_point_one() {
        assert_eq!(FIXED_POINT_ONE, 65_536);
    }
}
