use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogOut, LdPlay};
use dioxus_free_icons::Icon;
use shared_types::SessionUser;
use shared_ui::theme::{set_accent, Accent};
use shared_ui::{Button, ButtonSize, ButtonVariant, PersonAvatar};

use crate::routes::Route;
use crate::session::use_session;

/// Sticky top bar shared by the three dashboards.
///
/// `badge` sits left of the avatar (credit chip, court count, admin tag).
#[component]
pub fn DashboardHeader(
    user: SessionUser,
    subtitle: String,
    #[props(default)] badge: Option<Element>,
) -> Element {
    let mut session = use_session();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard_header.css") }
        header { class: "dashboard-header",
            div { class: "dashboard-header-inner",
                div { class: "dashboard-brand",
                    div { class: "dashboard-brand-mark",
                        Icon::<LdPlay> { icon: LdPlay, width: 24, height: 24 }
                    }
                    div {
                        h1 { class: "dashboard-brand-name", "PadelVar" }
                        p { class: "dashboard-brand-subtitle", "{subtitle}" }
                    }
                }
                div { class: "dashboard-header-actions",
                    if let Some(badge) = badge {
                        {badge}
                    }
                    PersonAvatar {
                        src: user.user.profile_photo.clone(),
                        name: user.user.name.clone(),
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Icon,
                        title: "Log out",
                        onclick: move |_| {
                            session.logout();
                            set_accent(Accent::Landing);
                            navigator().push(Route::Home {});
                        },
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                    }
                }
            }
        }
    }
}
