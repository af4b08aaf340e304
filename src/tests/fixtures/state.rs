use std::sync::Arc;

use crate::modules::equipment::adapters::outbound::in_memory::InMemoryEquipmentStore;
use crate::modules::equipment::core::utilization::BaselinePolicy;
use crate::shared::core::clock::{Clock, FixedClock};
use crate::shell::state::AppState;
use crate::tests::fixtures::records::utc_at;
use crate::tests::fixtures::store::seeded_store;

pub const NOW: &str = "2024-05-01T15:00:00Z";

pub fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::utc(utc_at(NOW)))
}

pub async fn make_test_state() -> AppState {
    AppState::new(
        Arc::new(seeded_store().await),
        fixed_clock(),
        BaselinePolicy::default(),
    )
}

pub fn make_offline_state() -> AppState {
    let mut store = InMemoryEquipmentStore::new();
    store.toggle_offline();
    AppState::new(Arc::new(store), fixed_clock(), BaselinePolicy::default())
}
