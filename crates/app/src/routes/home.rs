use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBuilding, LdCrown, LdPlay, LdShare, LdTrophy, LdUsers, LdVideo,
};
use dioxus_free_icons::Icon;
use shared_types::{Role, ALL_ROLES};
use shared_ui::{Button, Card, CardContent, CardDescription, CardHeader, CardTitle};

use crate::components::LoginModal;
use crate::session::use_session;

/// What each role card on the landing page promises.
struct RolePitch {
    description: &'static str,
    perks: [&'static str; 4],
    cta: &'static str,
}

fn pitch(role: Role) -> RolePitch {
    match role {
        Role::Player => RolePitch {
            description: "Record and share your matches",
            perks: [
                "Personal video library",
                "QR code court scanning",
                "Social media sharing",
                "Credit-based system",
            ],
            cta: "Join as Player",
        },
        Role::Club => RolePitch {
            description: "Manage your courts and players",
            perks: [
                "Court video management",
                "Player activity tracking",
                "Credit top-up system",
                "Analytics dashboard",
            ],
            cta: "Join as Club",
        },
        Role::Admin => RolePitch {
            description: "Platform administration",
            perks: [
                "User management",
                "Global video access",
                "Credit administration",
                "System analytics",
            ],
            cta: "Admin Access",
        },
    }
}

/// Landing page: hero, feature highlights, and role selection.
#[component]
pub fn Home() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }
        div { class: "home-page",
            header { class: "home-header",
                div { class: "home-header-inner",
                    div { class: "home-brand",
                        div { class: "home-brand-mark",
                            Icon::<LdPlay> { icon: LdPlay, width: 24, height: 24 }
                        }
                        h1 { class: "home-brand-name", "PadelVar" }
                    }
                    div { class: "home-motto",
                        Icon::<LdTrophy> { icon: LdTrophy, width: 20, height: 20 }
                        span { "Record • Share • Play" }
                    }
                }
            }

            section { class: "home-hero",
                h1 { class: "home-hero-title", "Elevate Your Padel Game" }
                p { class: "home-hero-lead",
                    "Record, analyze, and share your padel matches with the ultimate platform for players and clubs. "
                    "Connect with the padel community and take your game to the next level."
                }

                div { class: "home-features",
                    div { class: "home-feature", "data-tint": "player",
                        Icon::<LdVideo> { icon: LdVideo, width: 48, height: 48 }
                        h3 { "Smart Recording" }
                        p { "QR code court integration for seamless match recording" }
                    }
                    div { class: "home-feature", "data-tint": "club",
                        Icon::<LdShare> { icon: LdShare, width: 48, height: 48 }
                        h3 { "Social Sharing" }
                        p { "Share highlights instantly on social media platforms" }
                    }
                    div { class: "home-feature", "data-tint": "admin",
                        Icon::<LdTrophy> { icon: LdTrophy, width: 48, height: 48 }
                        h3 { "Community" }
                        p { "Connect players and clubs in one unified platform" }
                    }
                }

                div { class: "home-roles",
                    h2 { "Choose Your Role" }
                    div { class: "home-role-grid",
                        for role in ALL_ROLES.iter().copied() {
                            RoleCard { key: "{role.as_str()}", role }
                        }
                    }
                }
            }

            LoginModal {}
        }
    }
}

#[component]
fn RoleCard(role: Role) -> Element {
    let mut session = use_session();
    let pitch = pitch(role);

    rsx! {
        div {
            class: "home-role-card",
            "data-tint": role.as_str(),
            onclick: move |_| session.select_role(role),
            Card { interactive: true,
                CardHeader {
                    div { class: "home-role-icon",
                        match role {
                            Role::Player => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 32, height: 32 } },
                            Role::Club => rsx! { Icon::<LdBuilding> { icon: LdBuilding, width: 32, height: 32 } },
                            Role::Admin => rsx! { Icon::<LdCrown> { icon: LdCrown, width: 32, height: 32 } },
                        }
                    }
                    CardTitle { "{role.title()}" }
                    CardDescription { "{pitch.description}" }
                }
                CardContent {
                    ul { class: "home-role-perks",
                        for perk in pitch.perks {
                            li { "• {perk}" }
                        }
                    }
                    Button { full_width: true, "{pitch.cta}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_has_a_pitch() {
        for role in ALL_ROLES {
            let p = pitch(*role);
            assert!(!p.description.is_empty());
            assert!(p.perks.iter().all(|perk| !perk.is_empty()));
        }
    }

    #[test]
    fn call_to_action_matches_role() {
        assert_eq!(pitch(Role::Player).cta, "Join as Player");
        assert_eq!(pitch(Role::Club).cta, "Join as Club");
        assert_eq!(pitch(Role::Admin).cta, "Admin Access");
    }
}
