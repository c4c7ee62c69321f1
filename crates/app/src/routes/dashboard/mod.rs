mod admin;
mod club;
mod player;

use dioxus::prelude::*;
use shared_types::{Role, View};
use shared_ui::theme::{set_accent, Accent};

use crate::session::use_session;
use admin::AdminDashboard;
use club::ClubDashboard;
use player::PlayerDashboard;

pub(crate) fn accent_for(role: Role) -> Accent {
    match role {
        Role::Player => Accent::Player,
        Role::Club => Accent::Club,
        Role::Admin => Accent::Admin,
    }
}

/// Role-specific dashboard for the signed-in user.
#[component]
pub fn Dashboard() -> Element {
    let session = use_session();

    use_effect(move || {
        if let View::Dashboard(role) = session.view() {
            set_accent(accent_for(role));
        }
    });

    let Some(user) = session.current_user() else {
        return rsx! {};
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        div { class: "dashboard-page",
            match user.role {
                Role::Player => rsx! { PlayerDashboard { user } },
                Role::Club => rsx! { ClubDashboard { user } },
                Role::Admin => rsx! { AdminDashboard { user } },
            }
        }
    }
}

/// Gradient greeting strip at the top of each dashboard.
#[component]
fn WelcomeBanner(title: String, lead: String, art: Element, children: Element) -> Element {
    rsx! {
        section { class: "welcome-banner",
            div { class: "welcome-banner-text",
                h2 { "{title}" }
                p { "{lead}" }
                div { class: "welcome-banner-actions", {children} }
            }
            div { class: "welcome-banner-art", {art} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ALL_ROLES;

    #[test]
    fn each_role_gets_its_own_accent() {
        let accents: Vec<Accent> = ALL_ROLES.iter().map(|r| accent_for(*r)).collect();
        assert_eq!(accents, vec![Accent::Player, Accent::Club, Accent::Admin]);
        assert!(!accents.contains(&Accent::Landing));
    }
}
