use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    Client, ClientBuilder, Url,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue},
};
use serde::{Deserialize, de::DeserializeOwned};
use serde_with::serde_as;

use crate::modules::equipment::adapters::outbound::equipment_store::{EquipmentStore, StoreError};
use crate::modules::equipment::core::records::{
    Equipment, EquipmentId, LocationRecord, PowerRecord, UtilizationEvent,
};

const EQUIPMENT_TABLE: &str = "tbl_equipments";
const UTILIZATION_TABLE: &str = "tbl_utilizations";
const POWER_TABLE: &str = "tbl_powerconsumptions";
const LOCATION_TABLE: &str = "tbl_locations";

/// PostgREST client for the equipment tables.
pub struct SupabaseEquipmentStore {
    client: Client,
    base_url: Url,
}

impl SupabaseEquipmentStore {
    pub fn try_new(base_url: Url, api_key: &str, timeout: Duration) -> anyhow::Result<Self> {
        let headers = HeaderMap::from_iter([
            (HeaderName::from_static("apikey"), HeaderValue::from_str(api_key)?),
            (AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {api_key}"))?),
            (ACCEPT, HeaderValue::from_static("application/json")),
        ]);
        let client = ClientBuilder::new()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;
        Ok(Self { client, base_url })
    }

    /// `{base}/rest/v1/{table}` with the given PostgREST query pairs.
    pub fn table_url(&self, table: &str, query: &[(&str, String)]) -> Result<Url, StoreError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| StoreError::Unavailable(format!("invalid base URL: {}", self.base_url)))?
            .pop_if_empty()
            .push("rest")
            .push("v1")
            .push(table);
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    #[tracing::instrument(skip(self, query))]
    async fn fetch_rows<T>(&self, table: &str, query: &[(&str, String)]) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        let url = self.table_url(table, query)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "equipment store request failed");
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let rows: Rows<T> = response
            .json()
            .await
            .map_err(|err| StoreError::Decode(err.to_string()))?;
        tracing::debug!(n_rows = rows.0.len(), "fetched");
        Ok(rows.0)
    }
}

/// A table response. Rows that fail to decode are dropped instead of failing the whole fetch.
#[serde_as]
#[derive(Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
struct Rows<T>(#[serde_as(as = "serde_with::VecSkipError<_>")] Vec<T>);

fn by_equipment(equipment_id: EquipmentId) -> (&'static str, String) {
    ("equipment_id", format!("eq.{equipment_id}"))
}

fn newest_first() -> (&'static str, String) {
    ("order", "created_at.desc".to_string())
}

#[async_trait]
impl EquipmentStore for SupabaseEquipmentStore {
    async fn list_equipment(&self) -> Result<Vec<Equipment>, StoreError> {
        self.fetch_rows(EQUIPMENT_TABLE, &[]).await
    }

    async fn get_equipment(
        &self,
        equipment_id: EquipmentId,
    ) -> Result<Option<Equipment>, StoreError> {
        let rows: Vec<Equipment> = self
            .fetch_rows(EQUIPMENT_TABLE, &[by_equipment(equipment_id)])
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn list_utilization_events(
        &self,
        equipment_id: EquipmentId,
    ) -> Result<Vec<UtilizationEvent>, StoreError> {
        self.fetch_rows(UTILIZATION_TABLE, &[by_equipment(equipment_id), newest_first()])
            .await
    }

    async fn list_power_records(
        &self,
        equipment_id: EquipmentId,
    ) -> Result<Vec<PowerRecord>, StoreError> {
        self.fetch_rows(POWER_TABLE, &[by_equipment(equipment_id), newest_first()])
            .await
    }

    async fn list_location_records(
        &self,
        equipment_id: EquipmentId,
    ) -> Result<Vec<LocationRecord>, StoreError> {
        self.fetch_rows(LOCATION_TABLE, &[by_equipment(equipment_id)])
            .await
    }

    async fn list_all_locations(&self) -> Result<Vec<LocationRecord>, StoreError> {
        self.fetch_rows(LOCATION_TABLE, &[]).await
    }
}
