//! Command implementations

pub mod diff;
pub mod services;

use std::sync::Arc;

use anyhow::Result;
use mono_meta::config::{self, Settings};
use mono_meta::infrastructure::{JsonEventSink, TracingEventSink};
use mono_meta::InventoryEventSink;

use crate::cli::CommonArgs;

/// Resolve and validate the layered configuration
///
/// Runs before any git or build work.
fn load_settings(common: &CommonArgs) -> Result<Settings> {
    let (config, warnings) =
        config::resolve(common.file.as_deref(), config::from_env(), common.to_config())?;

    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    Ok(config.validate()?)
}

fn event_sink(events: bool) -> Arc<dyn InventoryEventSink> {
    if events {
        Arc::new(JsonEventSink::stderr())
    } else {
        Arc::new(TracingEventSink)
    }
}
