// Seeded store shared by handler, HTTP and e2e tests. Pair with a clock at 2024-05-01T15:00:00Z.
//
// Equipment 1: named, active 08:00-10:00 today and 08:00-20:00 yesterday, two power
// readings today, two locations.
// Equipment 2: no labels, a run on 2024-04-28, one location.

use crate::modules::equipment::adapters::outbound::in_memory::InMemoryEquipmentStore;
use crate::tests::fixtures::records::{EquipmentBuilder, event_at, location_at, power_at};

pub async fn seeded_store() -> InMemoryEquipmentStore {
    let store = InMemoryEquipmentStore::new();

    store.insert_equipment(EquipmentBuilder::new().build()).await;
    store
        .insert_equipment(
            EquipmentBuilder::new()
                .equipment_id(2)
                .equipment_name(None)
                .owner(None)
                .expected_location(None)
                .build(),
        )
        .await;

    store
        .insert_utilization([
            event_at(false, "2024-05-01T10:00:00Z"),
            event_at(true, "2024-05-01T08:05:00Z"),
            event_at(true, "2024-05-01T08:00:00Z"),
            event_at(true, "2024-04-30T08:00:00Z"),
            event_at(false, "2024-04-30T20:00:00Z"),
        ])
        .await;
    store
        .insert_power([
            power_at(200.0, "2024-05-01T10:00:00Z"),
            power_at(100.0, "2024-05-01T09:00:00Z"),
        ])
        .await;
    store
        .insert_locations([
            location_at(8.4542, 124.6319, "2024-04-29T08:00:00Z"),
            location_at(8.4800, 124.6500, "2024-04-30T08:00:00Z"),
        ])
        .await;

    let mut started = event_at(true, "2024-04-28T06:00:00Z");
    started.equipment_id = 2;
    let mut stopped = event_at(false, "2024-04-28T12:00:00Z");
    stopped.equipment_id = 2;
    store.insert_utilization([started, stopped]).await;

    let mut parked = location_at(8.2280, 124.2452, "2024-04-27T08:00:00Z");
    parked.equipment_id = 2;
    store.insert_locations([parked]).await;

    store
}
