use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::equipment::core::records::{EquipmentId, LocationRecord};
use crate::modules::equipment::core::summary::{EquipmentSummary, UtilizationOverview};
use crate::modules::equipment::use_cases::date_range::DateRangeParams;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: String,
}

impl From<LocationRecord> for GqlLocation {
    fn from(v: LocationRecord) -> Self {
        Self {
            latitude: v.latitude,
            longitude: v.longitude,
            created_at: v.created_at.to_rfc3339(),
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlEquipmentSummary {
    pub equipment_id: EquipmentId,
    pub equipment_name: String,
    pub owner: String,
    pub expected_location: String,
    pub utilization_percentage: f64,
    pub utilization_hours: f64,
    pub idle_hours: f64,
    pub baseline_hours: f64,
    pub power_consumption: f64,
    pub avg_power: f64,
    pub is_active: bool,
    pub latest_location: Option<GqlLocation>,
    pub updated_at: String,
}

impl From<EquipmentSummary> for GqlEquipmentSummary {
    fn from(v: EquipmentSummary) -> Self {
        Self {
            equipment_id: v.equipment_id,
            equipment_name: v.equipment_name,
            owner: v.owner,
            expected_location: v.expected_location,
            utilization_percentage: v.utilization_percentage,
            utilization_hours: v.utilization_hours,
            idle_hours: v.idle_hours,
            baseline_hours: v.baseline_hours,
            power_consumption: v.power_consumption,
            avg_power: v.avg_power,
            is_active: v.is_active,
            latest_location: v.latest_location.map(Into::into),
            updated_at: v.updated_at.to_rfc3339(),
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlUtilizationOverview {
    pub equipment_id: EquipmentId,
    pub equipment_name: String,
    pub owner: String,
    pub expected_location: String,
    pub utilization_percentage: f64,
    pub utilization_hours: f64,
    pub idle_hours: f64,
    pub power_consumption: f64,
    pub avg_power: f64,
    pub is_active: bool,
    pub updated_at: String,
}

impl From<UtilizationOverview> for GqlUtilizationOverview {
    fn from(v: UtilizationOverview) -> Self {
        Self {
            equipment_id: v.equipment_id,
            equipment_name: v.equipment_name,
            owner: v.owner,
            expected_location: v.expected_location,
            utilization_percentage: v.utilization_percentage,
            utilization_hours: v.utilization_hours,
            idle_hours: v.idle_hours,
            power_consumption: v.power_consumption,
            avg_power: v.avg_power,
            is_active: v.is_active,
            updated_at: v.updated_at.to_rfc3339(),
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn equipment_summaries(
        &self,
        context: &Context<'_>,
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> GqlResult<Vec<GqlEquipmentSummary>> {
        let state = context.data_unchecked::<AppState>();
        let summaries = state
            .summaries
            .handle(&DateRangeParams::new(start_date, end_date))
            .await?;
        Ok(summaries.into_iter().map(Into::into).collect())
    }

    async fn equipment_summary(
        &self,
        context: &Context<'_>,
        equipment_id: EquipmentId,
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> GqlResult<GqlEquipmentSummary> {
        let state = context.data_unchecked::<AppState>();
        let summary = state
            .summary
            .handle(equipment_id, &DateRangeParams::new(start_date, end_date))
            .await?;
        Ok(summary.into())
    }

    async fn utilization_overview(
        &self,
        context: &Context<'_>,
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> GqlResult<Vec<GqlUtilizationOverview>> {
        let state = context.data_unchecked::<AppState>();
        let overview = state
            .overview
            .handle(&DateRangeParams::new(start_date, end_date))
            .await?;
        Ok(overview.into_iter().map(Into::into).collect())
    }
}
