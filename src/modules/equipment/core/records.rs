// Rows as they come back from the equipment store.
//
// Purpose
// - Typed, read-only projections of the store tables.
//
// Responsibilities
// - Decode loosely typed columns (utilization flag, numeric strings) into strict values.
// - Group the per-equipment record sets that the calculations consume.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

pub type EquipmentId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub equipment_id: EquipmentId,
    #[serde(default)]
    pub equipment_name: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub expected_location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilizationEvent {
    pub equipment_id: EquipmentId,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "crate::modules::equipment::core::active_flag::deserialize"
    )]
    pub is_active: bool,
    #[serde(deserialize_with = "crate::shared::core::timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerRecord {
    pub equipment_id: EquipmentId,
    /// Watts. Rows without a reading are kept but left out of averages.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub consumption: Option<f64>,
    #[serde(deserialize_with = "crate::shared::core::timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub equipment_id: EquipmentId,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub latitude: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub longitude: f64,
    #[serde(deserialize_with = "crate::shared::core::timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
}

/// Anything with a creation instant can be windowed and ordered.
pub trait Timestamped {
    fn created_at(&self) -> DateTime<Utc>;
}

impl Timestamped for UtilizationEvent {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Timestamped for PowerRecord {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Timestamped for LocationRecord {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Everything fetched for one equipment, in whatever order the store returned it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EquipmentRecords {
    pub utilization: Vec<UtilizationEvent>,
    pub power: Vec<PowerRecord>,
    pub locations: Vec<LocationRecord>,
}

/// Most recent record by timestamp. Ties resolve to the later element in input order.
pub fn latest<T: Timestamped>(records: &[T]) -> Option<&T> {
    records.iter().max_by_key(|record| record.created_at())
}
