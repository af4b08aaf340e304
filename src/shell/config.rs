use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use reqwest::Url;

use crate::modules::equipment::adapters::outbound::equipment_store::EquipmentStore;
use crate::modules::equipment::adapters::outbound::in_memory::InMemoryEquipmentStore;
use crate::modules::equipment::adapters::outbound::supabase::SupabaseEquipmentStore;
use crate::modules::equipment::core::utilization::BaselinePolicy;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Address the HTTP server listens on.
    #[clap(long = "bind-addr", env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind_addr: SocketAddr,

    /// Supabase project URL. Without it the service runs against an empty in-memory store.
    #[clap(long = "supabase-url", env = "SUPABASE_URL", requires = "supabase_key")]
    pub supabase_url: Option<Url>,

    #[clap(long = "supabase-key", env = "SUPABASE_KEY", hide_env_values = true)]
    pub supabase_key: Option<String>,

    /// Per-request timeout against the store.
    #[clap(long = "store-timeout-secs", env = "STORE_TIMEOUT_SECS", default_value = "10")]
    pub store_timeout_secs: u64,

    /// Baseline hours for a report without an explicit date range.
    #[clap(long = "baseline-window-hours", env = "BASELINE_WINDOW_HOURS", default_value = "24")]
    pub baseline_window_hours: f64,

    /// Caps each calendar day of an explicit range, e.g. `8` for a single shift.
    #[clap(long = "daily-hours-cap", env = "DAILY_HOURS_CAP")]
    pub daily_hours_cap: Option<f64>,
}

impl Args {
    pub fn baseline_policy(&self) -> BaselinePolicy {
        BaselinePolicy {
            window_hours: self.baseline_window_hours,
            cap_daily_hours: self.daily_hours_cap,
        }
    }

    pub fn store(&self) -> anyhow::Result<Arc<dyn EquipmentStore>> {
        match (&self.supabase_url, &self.supabase_key) {
            (Some(url), Some(key)) => {
                tracing::info!(%url, "using Supabase equipment store");
                Ok(Arc::new(SupabaseEquipmentStore::try_new(
                    url.clone(),
                    key,
                    Duration::from_secs(self.store_timeout_secs),
                )?))
            }
            _ => {
                tracing::warn!("SUPABASE_URL is not set, serving an empty in-memory store");
                Ok(Arc::new(InMemoryEquipmentStore::new()))
            }
        }
    }
}
