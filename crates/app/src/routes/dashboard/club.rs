use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBuilding, LdCalendar, LdCreditCard, LdMapPin, LdPlus, LdSettings, LdTrendingUp, LdUsers,
    LdVideo,
};
use dioxus_free_icons::Icon;
use shared_types::catalog::{club_courts, club_players, club_recent_videos, club_stats};
use shared_types::{
    add_court_notice, club_settings_notice, court_details_notice, top_up_notice, Court,
    CourtStatus, PlayerSummary, SessionUser, SimulationConfig, Video,
};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader,
    CardTitle, Meter, PersonAvatar, StatTile, TabContent, TabList, TabTrigger, Tabs,
};

use super::WelcomeBanner;
use crate::components::DashboardHeader;
use crate::format_helpers::{format_count, format_currency, format_date_human, format_duration};
use crate::notify::use_notifier;

fn status_variant(status: CourtStatus) -> BadgeVariant {
    match status {
        CourtStatus::Active => BadgeVariant::Success,
        CourtStatus::Maintenance => BadgeVariant::Warning,
    }
}

/// Share of courts currently open, as a percentage.
fn courts_in_use_pct(active: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        active as f64 * 100.0 / total as f64
    }
}

#[component]
pub fn ClubDashboard(user: SessionUser) -> Element {
    let notifier = use_notifier();
    let courts = use_hook(club_courts);
    let recent = use_hook(club_recent_videos);
    let players = use_hook(club_players);
    let stats = club_stats(&courts);
    let in_use = courts_in_use_pct(stats.active_courts, stats.total_courts);

    rsx! {
        DashboardHeader {
            user: user.clone(),
            subtitle: "Club Management",
            badge: rsx! {
                Badge { variant: BadgeVariant::Secondary, "{stats.active_courts} Active Courts" }
            },
        }

        main { class: "dashboard-body",
            WelcomeBanner {
                title: "Club Dashboard",
                lead: "Manage your courts and track player activity",
                art: rsx! { Icon::<LdBuilding> { icon: LdBuilding, width: 64, height: 64 } },
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| notifier.show(add_court_notice()),
                    Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                    "Add Court"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    class: "on-banner",
                    onclick: move |_| notifier.show(club_settings_notice()),
                    Icon::<LdSettings> { icon: LdSettings, width: 16, height: 16 }
                    "Settings"
                }
            }

            div { class: "stat-grid",
                StatTile {
                    label: "Total Videos",
                    value: format_count(stats.total_videos),
                    icon: rsx! { Icon::<LdVideo> { icon: LdVideo, width: 20, height: 20 } },
                }
                StatTile {
                    label: "Active Users",
                    value: format_count(stats.active_users),
                    icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 } },
                }
                StatTile {
                    label: "Today Revenue",
                    value: format_currency(stats.today_revenue),
                    icon: rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 20, height: 20 } },
                }
                StatTile {
                    label: "Active Courts",
                    value: format!("{}/{}", stats.active_courts, stats.total_courts),
                    icon: rsx! { Icon::<LdMapPin> { icon: LdMapPin, width: 20, height: 20 } },
                }
            }

            Tabs { default_value: "courts", horizontal: true,
                TabList {
                    TabTrigger { value: "courts", index: 0usize, "Courts" }
                    TabTrigger { value: "videos", index: 1usize, "Recent Videos" }
                    TabTrigger { value: "players", index: 2usize, "Players" }
                }
                TabContent { value: "courts", index: 0usize,
                    Meter { class: "courts-in-use", value: in_use, caption: "Courts in use" }
                    div { class: "card-grid four",
                        for court in courts.iter().cloned() {
                            CourtCard { key: "{court.id}", court }
                        }
                    }
                }
                TabContent { value: "videos", index: 1usize,
                    div { class: "card-grid three",
                        for video in recent.iter().cloned() {
                            ClubVideoCard { key: "{video.id}", video }
                        }
                    }
                }
                TabContent { value: "players", index: 2usize,
                    div { class: "row-list",
                        for player in players.iter().cloned() {
                            ClubPlayerRow { key: "{player.id}", player }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CourtCard(court: Court) -> Element {
    let notifier = use_notifier();
    let details = court_details_notice(&court);

    rsx! {
        Card { interactive: true,
            CardHeader { class: "court-card-header",
                CardTitle { "{court.name}" }
                Badge { variant: status_variant(court.status), "{court.status.as_str()}" }
            }
            CardContent {
                div { class: "kv-row",
                    span { class: "muted", "QR Code:" }
                    span { class: "mono accent", "{court.qr_code}" }
                }
                div { class: "kv-row",
                    span { class: "muted", "Today's Videos:" }
                    strong { "{court.today_videos}" }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Small,
                    full_width: true,
                    onclick: move |_| notifier.show(details.clone()),
                    "View Details"
                }
            }
        }
    }
}

#[component]
fn ClubVideoCard(video: Video) -> Element {
    let player = video.player.clone().unwrap_or_default();
    let duration = format_duration(video.duration_secs);
    let date = format_date_human(&video.date);

    rsx! {
        Card { interactive: true,
            div { class: "video-thumb",
                img { src: "{video.thumbnail}", alt: "{video.title}" }
                span { class: "video-duration", "{duration}" }
            }
            CardContent {
                h3 { class: "video-title", "{video.title}" }
                div { class: "video-meta stacked",
                    span {
                        Icon::<LdUsers> { icon: LdUsers, width: 12, height: 12 }
                        "{player}"
                    }
                    span {
                        Icon::<LdCalendar> { icon: LdCalendar, width: 12, height: 12 }
                        "{date}"
                    }
                }
            }
        }
    }
}

#[component]
fn ClubPlayerRow(player: PlayerSummary) -> Element {
    let sim = use_context::<SimulationConfig>();
    let notifier = use_notifier();
    let player_id = player.id.clone();

    rsx! {
        Card {
            CardContent { class: "row",
                div { class: "row-identity",
                    PersonAvatar { src: player.avatar.clone(), name: player.name.clone() }
                    div {
                        h3 { "{player.name}" }
                        p { class: "muted", "{player.email}" }
                    }
                }
                div { class: "row-figures",
                    div { class: "figure",
                        strong { class: "accent", "{player.credits}" }
                        span { "Credits" }
                    }
                    div { class: "figure",
                        strong { "{player.videos}" }
                        span { "Videos" }
                    }
                    Button {
                        size: ButtonSize::Small,
                        onclick: move |_| {
                            tracing::info!(player_id = %player_id, amount = sim.top_up_amount, "simulated top-up");
                            notifier.show(top_up_notice(sim.top_up_amount));
                        },
                        Icon::<LdCreditCard> { icon: LdCreditCard, width: 16, height: 16 }
                        "Top Up"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maintenance_courts_are_flagged() {
        assert_eq!(status_variant(CourtStatus::Active), BadgeVariant::Success);
        assert_eq!(status_variant(CourtStatus::Maintenance), BadgeVariant::Warning);
    }

    #[test]
    fn courts_in_use_percentage() {
        assert_eq!(courts_in_use_pct(3, 4), 75.0);
        assert_eq!(courts_in_use_pct(0, 0), 0.0);
    }
}
