// Shared record fixtures. Equipment 1 unless stated otherwise.

use chrono::{DateTime, Utc};

use crate::modules::equipment::core::records::{
    Equipment, EquipmentId, LocationRecord, PowerRecord, UtilizationEvent,
};

pub const EQUIPMENT_ID: EquipmentId = 1;

pub fn utc_at(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .unwrap_or_else(|err| panic!("bad fixture timestamp {raw}: {err}"))
        .to_utc()
}

pub fn event_at(is_active: bool, raw: &str) -> UtilizationEvent {
    UtilizationEvent {
        equipment_id: EQUIPMENT_ID,
        is_active,
        created_at: utc_at(raw),
    }
}

pub fn power_at(consumption: f64, raw: &str) -> PowerRecord {
    PowerRecord {
        equipment_id: EQUIPMENT_ID,
        consumption: Some(consumption),
        created_at: utc_at(raw),
    }
}

pub fn location_at(latitude: f64, longitude: f64, raw: &str) -> LocationRecord {
    LocationRecord {
        equipment_id: EQUIPMENT_ID,
        latitude,
        longitude,
        created_at: utc_at(raw),
    }
}

pub struct EquipmentBuilder {
    inner: Equipment,
}

impl Default for EquipmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EquipmentBuilder {
    pub fn new() -> Self {
        Self {
            inner: Equipment {
                equipment_id: EQUIPMENT_ID,
                equipment_name: Some("Excavator EX-200".to_string()),
                owner: Some("Cagayan Builders".to_string()),
                expected_location: Some("Cagayan de Oro".to_string()),
            },
        }
    }

    pub fn equipment_id(mut self, v: EquipmentId) -> Self {
        self.inner.equipment_id = v;
        self
    }

    pub fn equipment_name(mut self, v: Option<&str>) -> Self {
        self.inner.equipment_name = v.map(str::to_string);
        self
    }

    pub fn owner(mut self, v: Option<&str>) -> Self {
        self.inner.owner = v.map(str::to_string);
        self
    }

    pub fn expected_location(mut self, v: Option<&str>) -> Self {
        self.inner.expected_location = v.map(str::to_string);
        self
    }

    pub fn build(self) -> Equipment {
        self.inner
    }
}

#[cfg(test)]
mod record_fixture_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_the_defaults() {
        let equipment = EquipmentBuilder::new()
            .equipment_id(9)
            .equipment_name(None)
            .owner(Some("Someone"))
            .expected_location(None)
            .build();
        assert_eq!(equipment.equipment_id, 9);
        assert_eq!(equipment.equipment_name, None);
        assert_eq!(equipment.owner.as_deref(), Some("Someone"));
        assert_eq!(equipment.expected_location, None);
    }
}
