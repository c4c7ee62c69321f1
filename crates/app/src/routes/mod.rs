pub mod dashboard;
pub mod home;
pub mod not_found;

use dioxus::prelude::*;

use crate::session::use_session;
use dashboard::Dashboard;
use home::Home;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[layout(SessionGuard)]
        #[route("/dashboard")]
        Dashboard {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Sends visitors without a session back to role selection.
///
/// Sessions live only in memory, so a reload on `/dashboard` lands here.
#[component]
fn SessionGuard() -> Element {
    let session = use_session();

    if session.is_authenticated() {
        rsx! { Outlet::<Route> {} }
    } else {
        navigator().push(Route::Home {});
        rsx! {
            div { class: "session-guard-loading",
                p { "Redirecting..." }
            }
        }
    }
}
