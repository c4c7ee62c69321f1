use dioxus::prelude::*;
use shared_types::AppError;

use crate::routes::Route;

/// The error recorded when no route matches `segments`.
fn missing_page(segments: &[String]) -> AppError {
    AppError::not_found(format!("No page at /{}", segments.join("/")))
}

/// 404 Not Found page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    use_hook(|| {
        let err = missing_page(&route);
        tracing::warn!(error = %err, "unknown route");
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Court Not Found" }
                p { class: "not-found-message",
                    "Nothing is being played at "
                    code { "{path}" }
                    "."
                }
                Link { to: Route::Home {},
                    class: "not-found-link",
                    "Back to PadelVar"
                }
            }
        }
    }
}
