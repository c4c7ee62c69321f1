use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCalendar, LdClock, LdCreditCard, LdQrCode, LdShare, LdStar, LdTrophy, LdVideo,
};
use dioxus_free_icons::Icon;
use shared_types::catalog::{player_stats, player_videos};
use shared_types::{share_notice, top_up_notice, SessionUser, SimulationConfig};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    PersonAvatar, StatTile, TabContent, TabList, TabTrigger, Tabs,
};

use super::WelcomeBanner;
use crate::components::video_library::copy_to_clipboard;
use crate::components::{DashboardHeader, QrScanner, VideoLibrary};
use crate::format_helpers::format_member_since;
use crate::notify::use_notifier;

#[component]
pub fn PlayerDashboard(user: SessionUser) -> Element {
    let mut scanner_open = use_signal(|| false);
    let videos = use_hook(player_videos);
    let stats = player_stats(&videos);
    let credits = user.credits();

    rsx! {
        DashboardHeader {
            user: user.clone(),
            subtitle: "Player Dashboard",
            badge: rsx! {
                span { class: "credit-chip",
                    Icon::<LdCreditCard> { icon: LdCreditCard, width: 16, height: 16 }
                    "{credits} Credits"
                }
            },
        }

        main { class: "dashboard-body",
            WelcomeBanner {
                title: "Welcome back, {user.user.name}!",
                lead: "Ready to record your next epic match?",
                art: rsx! { Icon::<LdVideo> { icon: LdVideo, width: 64, height: 64 } },
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| {
                        tracing::debug!("opening court scanner");
                        scanner_open.set(true);
                    },
                    Icon::<LdQrCode> { icon: LdQrCode, width: 16, height: 16 }
                    "Scan Court QR"
                }
            }

            div { class: "stat-grid",
                StatTile {
                    label: "Total Matches",
                    value: stats.total_matches.to_string(),
                    icon: rsx! { Icon::<LdTrophy> { icon: LdTrophy, width: 20, height: 20 } },
                }
                StatTile {
                    label: "Total Hours",
                    value: format!("{}h", stats.total_hours),
                    icon: rsx! { Icon::<LdClock> { icon: LdClock, width: 20, height: 20 } },
                }
                StatTile {
                    label: "Avg Match",
                    value: format!("{}min", stats.average_match_minutes),
                    icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 20, height: 20 } },
                }
                StatTile {
                    label: "Win Rate",
                    value: format!("{}%", stats.win_rate_pct),
                    icon: rsx! { Icon::<LdStar> { icon: LdStar, width: 20, height: 20 } },
                }
            }

            Tabs { default_value: "videos", horizontal: true,
                TabList {
                    TabTrigger { value: "videos", index: 0usize, count: videos.len(), "My Videos" }
                    TabTrigger { value: "profile", index: 1usize, "Profile" }
                }
                TabContent { value: "videos", index: 0usize,
                    VideoLibrary { videos: videos.clone(), credits }
                }
                TabContent { value: "profile", index: 1usize,
                    ProfileTab { user: user.clone() }
                }
            }
        }

        QrScanner {
            open: scanner_open(),
            on_close: move |_| scanner_open.set(false),
        }
    }
}

#[component]
fn ProfileTab(user: SessionUser) -> Element {
    let sim = use_context::<SimulationConfig>();
    let notifier = use_notifier();
    let credits = user.credits();
    let member_since = format_member_since(&user.user.member_since);
    let profile_text = format!("Follow {} on PadelVar", user.user.name);

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Profile Information" }
            }
            CardContent {
                div { class: "profile-identity",
                    PersonAvatar {
                        src: user.user.profile_photo.clone(),
                        name: user.user.name.clone(),
                        large: true,
                    }
                    div {
                        h3 { "{user.user.name}" }
                        p { class: "muted", "{user.user.email}" }
                        if let Some(phone) = &user.user.phone {
                            p { class: "muted", "{phone}" }
                        }
                    }
                }
                div { class: "profile-grid",
                    div {
                        h4 { "Account Status" }
                        div { class: "profile-row",
                            span { "Credits Balance:" }
                            Badge { variant: BadgeVariant::Secondary, "{credits} credits" }
                        }
                        div { class: "profile-row",
                            span { "Member Since:" }
                            span { "{member_since}" }
                        }
                    }
                    div {
                        h4 { "Quick Actions" }
                        div { class: "profile-actions",
                            Button {
                                variant: ButtonVariant::Outline,
                                full_width: true,
                                onclick: move |_| notifier.show(top_up_notice(sim.top_up_amount)),
                                Icon::<LdCreditCard> { icon: LdCreditCard, width: 16, height: 16 }
                                "Top Up Credits"
                            }
                            Button {
                                variant: ButtonVariant::Outline,
                                full_width: true,
                                onclick: move |_| {
                                    copy_to_clipboard(&profile_text);
                                    notifier.show(share_notice());
                                },
                                Icon::<LdShare> { icon: LdShare, width: 16, height: 16 }
                                "Share Profile"
                            }
                        }
                    }
                }
            }
        }
    }
}
