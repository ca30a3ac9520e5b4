//! Typed view of the header fields packed into the misc section.

use log::warn;
use schema::{encode_field, FieldId, FieldValue, SchemaError, MISC_FIELDS};

use crate::error::CodecResult;
use crate::options::CodecOptions;
use crate::types::MiscBuffer;

/// A city service with a funding fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Service {
    Police,
    Fire,
    Road,
}

impl Service {
    pub const ALL: [Self; 3] = [Self::Police, Self::Fire, Self::Road];

    /// Returns the misc field holding this service's funding.
    #[must_use]
    pub const fn field(self) -> FieldId {
        match self {
            Self::Police => FieldId::PoliceFunding,
            Self::Fire => FieldId::FireFunding,
            Self::Road => FieldId::RoadFunding,
        }
    }
}

/// Decoded header fields of a city file.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CityHeader {
    /// Elapsed city time; never negative after decoding.
    pub city_time: i32,
    pub total_funds: i32,
    /// Police funding as a fraction (1.0 is fully funded).
    pub police_funding: f32,
    pub fire_funding: f32,
    pub road_funding: f32,
    /// Tax rate in percent, 0 to 20 after decoding.
    pub city_tax: i16,
    /// Simulation speed, 0 to 3 after decoding.
    pub sim_speed: i16,
    pub auto_bulldoze: bool,
    pub auto_budget: bool,
    pub auto_goto: bool,
    pub user_sound: bool,
}

impl Default for CityHeader {
    /// The values a load falls back to: default tax and speed, full
    /// funding, everything else zero or off.
    fn default() -> Self {
        Self {
            city_time: 0,
            total_funds: 0,
            police_funding: 1.0,
            fire_funding: 1.0,
            road_funding: 1.0,
            city_tax: schema::TAX_RANGE.fallback,
            sim_speed: schema::SPEED_RANGE.fallback,
            auto_bulldoze: false,
            auto_budget: false,
            auto_goto: false,
            user_sound: false,
        }
    }
}

impl CityHeader {
    /// Decodes every field of the misc table from `misc`.
    ///
    /// Out-of-range values are replaced by their defaults and logged; they
    /// never fail the decode.
    pub fn decode(misc: &MiscBuffer) -> CodecResult<Self> {
        let mut header = Self::default();
        for def in &MISC_FIELDS {
            let decoded = misc.decode(def)?;
            if decoded.defaulted {
                warn!(
                    "{} out of range at slot {}, using {:?}",
                    def.id, def.slot, decoded.value
                );
            }
            header.set(def.id, decoded.value)?;
        }
        Ok(header)
    }

    /// Stores every field into `misc` at its table slot.
    ///
    /// Values are written as they are, without range checks. When
    /// `options.force_full_funding` is set the three funding fields are
    /// written as 100% instead of the header's values.
    pub fn encode_into(&self, misc: &mut MiscBuffer, options: &CodecOptions) -> CodecResult<()> {
        for def in &MISC_FIELDS {
            let value = if options.force_full_funding && is_funding(def.id) {
                FieldValue::Fraction(1.0)
            } else {
                self.get(def.id)
            };
            encode_field(def, value, misc.slots_mut())?;
        }
        Ok(())
    }

    /// Returns the value of one field.
    #[must_use]
    pub const fn get(&self, id: FieldId) -> FieldValue {
        match id {
            FieldId::CityTime => FieldValue::Int(self.city_time),
            FieldId::TotalFunds => FieldValue::Int(self.total_funds),
            FieldId::AutoBulldoze => FieldValue::Flag(self.auto_bulldoze),
            FieldId::AutoBudget => FieldValue::Flag(self.auto_budget),
            FieldId::AutoGoto => FieldValue::Flag(self.auto_goto),
            FieldId::UserSound => FieldValue::Flag(self.user_sound),
            FieldId::CityTax => FieldValue::Scalar(self.city_tax),
            FieldId::SimSpeed => FieldValue::Scalar(self.sim_speed),
            FieldId::PoliceFunding => FieldValue::Fraction(self.police_funding),
            FieldId::FireFunding => FieldValue::Fraction(self.fire_funding),
            FieldId::RoadFunding => FieldValue::Fraction(self.road_funding),
        }
    }

    /// Sets one field.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::TypeMismatch`] (wrapped) if `value` is not the
    /// variant the field holds.
    pub fn set(&mut self, id: FieldId, value: FieldValue) -> CodecResult<()> {
        match (id, value) {
            (FieldId::CityTime, FieldValue::Int(v)) => self.city_time = v,
            (FieldId::TotalFunds, FieldValue::Int(v)) => self.total_funds = v,
            (FieldId::AutoBulldoze, FieldValue::Flag(v)) => self.auto_bulldoze = v,
            (FieldId::AutoBudget, FieldValue::Flag(v)) => self.auto_budget = v,
            (FieldId::AutoGoto, FieldValue::Flag(v)) => self.auto_goto = v,
            (FieldId::UserSound, FieldValue::Flag(v)) => self.user_sound = v,
            (FieldId::CityTax, FieldValue::Scalar(v)) => self.city_tax = v,
            (FieldId::SimSpeed, FieldValue::Scalar(v)) => self.sim_speed = v,
            (FieldId::PoliceFunding, FieldValue::Fraction(v)) => self.police_funding = v,
            (FieldId::FireFunding, FieldValue::Fraction(v)) => self.fire_funding = v,
            (FieldId::RoadFunding, FieldValue::Fraction(v)) => self.road_funding = v,
            (id, value) => {
                return Err(SchemaError::TypeMismatch {
                    field: id,
                    expected: self.get(id).name(),
                    found: value.name(),
                }
                .into())
            }
        }
        Ok(())
    }

    /// Returns the funding fraction of `service`.
    #[must_use]
    pub const fn funding(&self, service: Service) -> f32 {
        match service {
            Service::Police => self.police_funding,
            Service::Fire => self.fire_funding,
            Service::Road => self.road_funding,
        }
    }

    /// Returns the funding of `service` in whole percent.
    #[must_use]
    pub fn funding_percent(&self, service: Service) -> i32 {
        schema::fraction_to_raw(self.funding(service), 100)
    }
}

const fn is_funding(id: FieldId) -> bool {
    matches!(
        id,
        FieldId::PoliceFunding | FieldId::FireFunding | FieldId::RoadFunding
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CodecError;
    use schema::{write_packed, CITY_TAX_SLOT, CITY_TIME_SLOT, SIM_SPEED_SLOT};

    #[test]
    fn default_header_uses_fallbacks() {
        let header = CityHeader::default();
        assert_eq!(header.city_tax, 7);
        assert_eq!(header.sim_speed, 3);
        assert!((header.police_funding - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn decode_zeroed_misc() {
        let header = CityHeader::decode(&MiscBuffer::new()).unwrap();
        assert_eq!(header.city_time, 0);
        assert_eq!(header.city_tax, 0);
        assert_eq!(header.sim_speed, 0);
        assert!(!header.user_sound);
        assert!(header.road_funding.abs() < f32::EPSILON);
    }

    #[test]
    fn decode_tax_rate() {
        let mut misc = MiscBuffer::new();
        misc[CITY_TAX_SLOT] = 25;
        assert_eq!(CityHeader::decode(&misc).unwrap().city_tax, 7);
        misc[CITY_TAX_SLOT] = 15;
        assert_eq!(CityHeader::decode(&misc).unwrap().city_tax, 15);
    }

    #[test]
    fn decode_sim_speed() {
        let mut misc = MiscBuffer::new();
        misc[SIM_SPEED_SLOT] = -1;
        assert_eq!(CityHeader::decode(&misc).unwrap().sim_speed, 3);
        misc[SIM_SPEED_SLOT] = 2;
        assert_eq!(CityHeader::decode(&misc).unwrap().sim_speed, 2);
    }

    #[test]
    fn decode_negative_time_floors_to_zero() {
        let mut misc = MiscBuffer::new();
        write_packed(misc.slots_mut(), CITY_TIME_SLOT, -1).unwrap();
        assert_eq!(CityHeader::decode(&misc).unwrap().city_time, 0);
    }

    #[test]
    fn encode_forces_full_funding() {
        let header = CityHeader {
            police_funding: 0.5,
            fire_funding: 0.25,
            road_funding: 0.0,
            ..CityHeader::default()
        };
        let mut misc = MiscBuffer::new();
        header.encode_into(&mut misc, &CodecOptions::reference()).unwrap();
        let decoded = CityHeader::decode(&misc).unwrap();
        for service in Service::ALL {
            assert_eq!(decoded.funding_percent(service), 100, "{service:?}");
        }
    }

    #[test]
    fn encode_preserves_funding_when_asked() {
        let header = CityHeader {
            police_funding: 0.5,
            ..CityHeader::default()
        };
        let mut misc = MiscBuffer::new();
        let options = CodecOptions::reference().with_funding_preserved();
        header.encode_into(&mut misc, &options).unwrap();
        let decoded = CityHeader::decode(&misc).unwrap();
        assert_eq!(decoded.funding_percent(Service::Police), 50);
        assert_eq!(decoded.funding_percent(Service::Fire), 100);
    }

    #[test]
    fn encode_does_not_clamp() {
        let header = CityHeader {
            city_tax: 99,
            city_time: -12,
            ..CityHeader::default()
        };
        let mut misc = MiscBuffer::new();
        header.encode_into(&mut misc, &CodecOptions::default()).unwrap();
        assert_eq!(misc[CITY_TAX_SLOT], 99);
        assert_eq!(misc.packed(CITY_TIME_SLOT), Some(-12));
    }

    #[test]
    fn encode_then_decode_keeps_legal_values() {
        let header = CityHeader {
            city_time: 1_234,
            total_funds: 987_654,
            city_tax: 12,
            sim_speed: 1,
            auto_bulldoze: true,
            auto_goto: true,
            ..CityHeader::default()
        };
        let mut misc = MiscBuffer::new();
        header.encode_into(&mut misc, &CodecOptions::default()).unwrap();
        assert_eq!(CityHeader::decode(&misc).unwrap(), header);
    }

    #[test]
    fn set_rejects_wrong_variant() {
        let mut header = CityHeader::default();
        let err = header
            .set(FieldId::CityTax, FieldValue::Flag(true))
            .unwrap_err();
        assert!(matches!(err, CodecError::Schema(_)));
        assert_eq!(header.city_tax, 7);
    }

    #[test]
    fn get_set_every_field() {
        let mut header = CityHeader::default();
        for def in &MISC_FIELDS {
            let value = header.get(def.id);
            header.set(def.id, value).unwrap();
        }
        assert_eq!(header, CityHeader::default());
    }
}
