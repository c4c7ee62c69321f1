use dioxus::prelude::*;
use shared_types::AppConfig;

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

/// Feature flags and simulation timings. No auth required; nothing here is sensitive.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_client_config() -> Result<AppConfig, ServerFnError> {
    crate::config::app_config()
        .cloned()
        .map_err(|e| e.into_server_fn_error())
}
