use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdBuilding, LdCreditCard, LdCrown, LdEye, LdPlus, LdTrash, LdTrendingUp, LdUsers,
    LdVideo,
};
use dioxus_free_icons::Icon;
use shared_types::catalog::{admin_clubs, admin_players, admin_recent_videos, system_stats};
use shared_types::{
    create_account_notice, delete_account_notice, filter_by_name, manage_credits_notice,
    video_action, AccountKind, AccountStatus, ClubSummary, PlayerSummary, SessionUser,
    SimulationConfig, Video, VideoAction,
};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader,
    CardTitle, PersonAvatar, SearchBar, StatTile, TabContent, TabList, TabTrigger, Tabs,
};

use super::WelcomeBanner;
use crate::components::DashboardHeader;
use crate::format_helpers::{
    format_count, format_currency, format_date_human, format_duration, format_growth,
};
use crate::notify::use_notifier;

fn status_variant(status: AccountStatus) -> BadgeVariant {
    match status {
        AccountStatus::Active => BadgeVariant::Success,
        AccountStatus::Suspended => BadgeVariant::Secondary,
    }
}

#[component]
pub fn AdminDashboard(user: SessionUser) -> Element {
    let notifier = use_notifier();
    let stats = use_hook(system_stats);
    let videos = use_hook(admin_recent_videos);

    let create = move |kind: AccountKind| {
        tracing::info!(kind = kind.label(), "simulated account creation");
        notifier.show(create_account_notice(kind));
    };

    rsx! {
        DashboardHeader {
            user: user.clone(),
            subtitle: "System Administration",
            badge: rsx! {
                Badge { variant: BadgeVariant::Secondary, "Super Admin" }
            },
        }

        main { class: "dashboard-body",
            WelcomeBanner {
                title: "System Overview",
                lead: "Complete platform administration and analytics",
                art: rsx! { Icon::<LdCrown> { icon: LdCrown, width: 64, height: 64 } },
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| create(AccountKind::Player),
                    Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                    "Add Player"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    class: "on-banner",
                    onclick: move |_| create(AccountKind::Club),
                    Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                    "Add Club"
                }
            }

            div { class: "stat-grid six",
                StatTile {
                    label: "Total Users",
                    value: format_count(stats.total_users),
                    icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 } },
                }
                StatTile {
                    label: "Total Clubs",
                    value: format_count(stats.total_clubs),
                    icon: rsx! { Icon::<LdBuilding> { icon: LdBuilding, width: 20, height: 20 } },
                }
                StatTile {
                    label: "Total Videos",
                    value: format_count(stats.total_videos),
                    icon: rsx! { Icon::<LdVideo> { icon: LdVideo, width: 20, height: 20 } },
                }
                StatTile {
                    label: "Total Revenue",
                    value: format_currency(stats.total_revenue),
                    icon: rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 20, height: 20 } },
                }
                StatTile {
                    label: "Live Recordings",
                    value: format_count(stats.active_recordings),
                    icon: rsx! { Icon::<LdActivity> { icon: LdActivity, width: 20, height: 20 } },
                }
                StatTile {
                    label: "Growth",
                    value: format_growth(stats.monthly_growth_pct),
                    hint: "this month",
                    icon: rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 20, height: 20 } },
                }
            }

            Tabs { default_value: "players", horizontal: true,
                TabList {
                    TabTrigger { value: "players", index: 0usize, "Players" }
                    TabTrigger { value: "clubs", index: 1usize, "Clubs" }
                    TabTrigger { value: "videos", index: 2usize, count: videos.len(), "All Videos" }
                    TabTrigger { value: "analytics", index: 3usize, "Analytics" }
                }
                TabContent { value: "players", index: 0usize,
                    PlayersTab {}
                }
                TabContent { value: "clubs", index: 1usize,
                    ClubsTab {}
                }
                TabContent { value: "videos", index: 2usize,
                    div { class: "card-grid three",
                        for video in videos.iter().cloned() {
                            AdminVideoCard { key: "{video.id}", video }
                        }
                    }
                }
                TabContent { value: "analytics", index: 3usize,
                    div { class: "card-grid two",
                        AnalyticsPlaceholder {
                            title: "Platform Growth",
                            body: "Analytics charts would be implemented here",
                        }
                        AnalyticsPlaceholder {
                            title: "Revenue Analytics",
                            body: "Revenue charts would be implemented here",
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PlayersTab() -> Element {
    let notifier = use_notifier();
    let players = use_hook(admin_players);
    let mut query = use_signal(String::new);
    let visible: Vec<PlayerSummary> = filter_by_name(&players, &query.read())
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        SearchBar {
            value: query(),
            placeholder: "Search players...",
            on_input: move |e: FormEvent| query.set(e.value()),
            Button {
                onclick: move |_| notifier.show(create_account_notice(AccountKind::Player)),
                Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                "Add Player"
            }
        }
        div { class: "row-list",
            for player in visible {
                AdminPlayerRow { key: "{player.id}", player }
            }
        }
    }
}

#[component]
fn ClubsTab() -> Element {
    let notifier = use_notifier();
    let clubs = use_hook(admin_clubs);
    let mut query = use_signal(String::new);
    let visible: Vec<ClubSummary> = filter_by_name(&clubs, &query.read())
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        SearchBar {
            value: query(),
            placeholder: "Search clubs...",
            on_input: move |e: FormEvent| query.set(e.value()),
            Button {
                onclick: move |_| notifier.show(create_account_notice(AccountKind::Club)),
                Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                "Add Club"
            }
        }
        div { class: "row-list",
            for club in visible {
                AdminClubRow { key: "{club.id}", club }
            }
        }
    }
}

/// Click handler for a row's delete button; only announces the deletion.
fn use_delete_action(id: String, kind: AccountKind) -> impl FnMut(MouseEvent) {
    let notifier = use_notifier();
    move |_| {
        tracing::info!(id = %id, kind = kind.label(), "simulated account deletion");
        notifier.show(delete_account_notice(kind));
    }
}

#[component]
fn AdminPlayerRow(player: PlayerSummary) -> Element {
    let notifier = use_notifier();
    let on_delete = use_delete_action(player.id.clone(), AccountKind::Player);
    let joined = format_date_human(&player.join_date);

    rsx! {
        Card {
            CardContent { class: "row",
                div { class: "row-identity",
                    PersonAvatar { src: player.avatar.clone(), name: player.name.clone() }
                    div {
                        h3 { "{player.name}" }
                        p { class: "muted", "{player.email}" }
                        p { class: "muted small", "Joined: {joined}" }
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
                    Badge { variant: status_variant(player.status), "{player.status.as_str()}" }
                    div { class: "row-actions",
                        Button {
                            size: ButtonSize::Small,
                            variant: ButtonVariant::Outline,
                            title: "Manage credits",
                            onclick: move |_| notifier.show(manage_credits_notice()),
                            Icon::<LdCreditCard> { icon: LdCreditCard, width: 16, height: 16 }
                        }
                        Button {
                            size: ButtonSize::Small,
                            variant: ButtonVariant::Destructive,
                            title: "Delete player",
                            onclick: on_delete,
                            Icon::<LdTrash> { icon: LdTrash, width: 16, height: 16 }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AdminClubRow(club: ClubSummary) -> Element {
    let on_delete = use_delete_action(club.id.clone(), AccountKind::Club);
    let joined = format_date_human(&club.join_date);
    let revenue = format_currency(club.monthly_revenue);

    rsx! {
        Card {
            CardContent { class: "row",
                div { class: "row-identity",
                    div { class: "club-mark",
                        Icon::<LdBuilding> { icon: LdBuilding, width: 24, height: 24 }
                    }
                    div {
                        h3 { "{club.name}" }
                        p { class: "muted", "{club.email}" }
                        p { class: "muted small", "Joined: {joined}" }
                    }
                }
                div { class: "row-figures",
                    div { class: "figure",
                        strong { class: "accent", "{club.courts}" }
                        span { "Courts" }
                    }
                    div { class: "figure",
                        strong { "{club.players}" }
                        span { "Players" }
                    }
                    div { class: "figure",
                        strong { "{revenue}" }
                        span { "Monthly" }
                    }
                    Badge { variant: status_variant(club.status), "{club.status.as_str()}" }
                    div { class: "row-actions",
                        Button {
                            size: ButtonSize::Small,
                            variant: ButtonVariant::Destructive,
                            title: "Delete club",
                            onclick: on_delete,
                            Icon::<LdTrash> { icon: LdTrash, width: 16, height: 16 }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AdminVideoCard(video: Video) -> Element {
    let sim = use_context::<SimulationConfig>();
    let notifier = use_notifier();
    let duration = format_duration(video.duration_secs);
    let date = format_date_human(&video.date);
    let player = video.player.clone().unwrap_or_default();
    let club = video.club.clone().unwrap_or_default();
    let target = video.clone();

    rsx! {
        Card { interactive: true,
            div { class: "video-thumb",
                img { src: "{video.thumbnail}", alt: "{video.title}" }
                span { class: "video-duration", "{duration}" }
                span { class: "video-views",
                    Icon::<LdEye> { icon: LdEye, width: 12, height: 12 }
                    "{video.views} views"
                }
            }
            CardContent {
                h3 { class: "video-title", "{video.title}" }
                div { class: "video-meta stacked",
                    span { "Player: {player}" }
                    span { "Club: {club}" }
                    span { "Date: {date}" }
                }
                Button {
                    size: ButtonSize::Small,
                    variant: ButtonVariant::Outline,
                    full_width: true,
                    onclick: move |_| {
                        match video_action(&target, VideoAction::Play, 0, sim.unlock_cost) {
                            Ok(notice) => notifier.show(notice),
                            Err(e) => tracing::warn!(error = %e, "admin playback rejected"),
                        }
                    },
                    Icon::<LdEye> { icon: LdEye, width: 16, height: 16 }
                    "View"
                }
            }
        }
    }
}

#[component]
fn AnalyticsPlaceholder(title: String, body: String) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "{title}" }
            }
            CardContent {
                div { class: "analytics-placeholder",
                    Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 48, height: 48 }
                    p { class: "muted", "{body}" }
                }
            }
        }
    }
}
