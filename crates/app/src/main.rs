use dioxus::prelude::*;
use shared_types::{AppConfig, AppError};

mod components;
mod format_helpers;
pub mod notify;
mod routes;
mod session;
mod timer;
use routes::Route;
use session::SessionState;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");
const THEME_LANDING: Asset = asset!("/assets/themes/landing.css");
const THEME_PLAYER: Asset = asset!("/assets/themes/player.css");
const THEME_CLUB: Asset = asset!("/assets/themes/club.css");
const THEME_ADMIN: Asset = asset!("/assets/themes/admin.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let config = server::config::load_config();
        server::health::record_start_time();
        tracing::info!(
            social_login = config.features.social_login,
            manual_court_selection = config.features.manual_court_selection,
            "starting PadelVar"
        );

        let router = dioxus::server::router(App)
            .merge(server::rest::rest_router())
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Fetch config once and provide via context (defaults on error)
    let config_resource =
        use_server_future(move || async move { server::api::get_client_config().await })?;

    let config = config_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(AppConfig::default()))
        .unwrap_or_else(|e| {
            tracing::warn!(
                error = %AppError::friendly_message(&e.to_string()),
                "config fetch failed, using defaults"
            );
            AppConfig::default()
        });

    use_context_provider(|| config.features);
    use_context_provider(|| config.simulation);
    use_context_provider(SessionState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        document::Link { rel: "stylesheet", href: THEME_LANDING }
        document::Link { rel: "stylesheet", href: THEME_PLAYER }
        document::Link { rel: "stylesheet", href: THEME_CLUB }
        document::Link { rel: "stylesheet", href: THEME_ADMIN }
        shared_ui::theme::ThemeSeed {}
        shared_ui::ToastProvider {
            SuspenseBoundary {
                fallback: |_| rsx! {
                    div { class: "session-guard-loading",
                        p { "Loading..." }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
