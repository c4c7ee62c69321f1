use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCalendar, LdDownload, LdEye, LdLock, LdMapPin, LdPlay, LdShare,
};
use dioxus_free_icons::Icon;
use shared_types::{
    download_disabled, share_notice, share_text, unlock_failed_notice, video_action,
    SimulationConfig, Video, VideoAction,
};
use shared_ui::{Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent};

use crate::format_helpers::{format_date_human, format_duration, pluralize_credits};
use crate::notify::{use_notifier, Notifier};

/// The signed-in player's recordings with play / share / download actions.
///
/// Locked videos route every action through the credit check, which never
/// changes the balance or the lock.
#[component]
pub fn VideoLibrary(videos: Vec<Video>, credits: u32) -> Element {
    let sim = use_context::<SimulationConfig>();
    let count = videos.len();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./video_library.css") }
        div { class: "video-library",
            div { class: "video-library-header",
                h2 { "My Video Library" }
                Badge { variant: BadgeVariant::Secondary, "{count} videos" }
            }

            if videos.is_empty() {
                div { class: "video-library-empty",
                    div { class: "video-library-empty-icon",
                        Icon::<LdPlay> { icon: LdPlay, width: 48, height: 48 }
                    }
                    h3 { "No videos yet" }
                    p { "Start recording your matches to build your video library!" }
                }
            } else {
                div { class: "video-grid",
                    for video in videos {
                        VideoCard {
                            key: "{video.id}",
                            video: video.clone(),
                            credits,
                            unlock_cost: sim.unlock_cost,
                        }
                    }
                }
            }
        }
    }
}

fn run_action(notifier: Notifier, video: &Video, action: VideoAction, credits: u32, cost: u32) {
    tracing::debug!(video_id = %video.id, ?action, locked = video.locked, "video action");
    match video_action(video, action, credits, cost) {
        Ok(notice) => notifier.show(notice),
        Err(e) => notifier.show(unlock_failed_notice(&e)),
    }
}

#[component]
fn VideoCard(video: Video, credits: u32, unlock_cost: u32) -> Element {
    let notifier = use_notifier();
    let duration = format_duration(video.duration_secs);
    let date = format_date_human(&video.date);
    let location = video
        .court
        .clone()
        .or_else(|| video.club.clone())
        .unwrap_or_default();
    let disabled = download_disabled(&video, credits);

    let play_video = video.clone();
    let share_video = video.clone();
    let download_video = video.clone();

    rsx! {
        Card { interactive: true, class: "video-card",
            div { class: "video-thumb",
                img { src: "{video.thumbnail}", alt: "{video.title}" }
                div { class: "video-thumb-overlay",
                    Button {
                        size: ButtonSize::Small,
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| run_action(notifier, &play_video, VideoAction::Play, credits, unlock_cost),
                        if video.locked {
                            Icon::<LdLock> { icon: LdLock, width: 14, height: 14 }
                            "Unlock"
                        } else {
                            Icon::<LdPlay> { icon: LdPlay, width: 14, height: 14 }
                            "Play"
                        }
                    }
                }
                span { class: "video-duration", "{duration}" }
                if video.locked {
                    span { class: "video-lock-flag",
                        Icon::<LdLock> { icon: LdLock, width: 12, height: 12 }
                    }
                }
                span { class: "video-views",
                    Icon::<LdEye> { icon: LdEye, width: 12, height: 12 }
                    "{video.views}"
                }
            }
            CardContent {
                h3 { class: "video-title", "{video.title}" }
                div { class: "video-meta",
                    span {
                        Icon::<LdCalendar> { icon: LdCalendar, width: 12, height: 12 }
                        "{date}"
                    }
                    if !location.is_empty() {
                        span { class: "video-meta-location",
                            Icon::<LdMapPin> { icon: LdMapPin, width: 12, height: 12 }
                            "{location}"
                        }
                    }
                }

                if video.locked {
                    div { class: "video-locked-panel",
                        div { class: "video-locked-head",
                            span {
                                Icon::<LdLock> { icon: LdLock, width: 14, height: 14 }
                                "Locked Video"
                            }
                            span { class: "video-locked-cost", "{pluralize_credits(unlock_cost)}" }
                        }
                        p { "Use {pluralize_credits(unlock_cost)} to unlock and download this video" }
                    }
                }

                div { class: "video-actions",
                    Button {
                        size: ButtonSize::Small,
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            let text = share_text(&share_video);
                            copy_to_clipboard(&text);
                            notifier.show(share_notice());
                        },
                        Icon::<LdShare> { icon: LdShare, width: 12, height: 12 }
                        span { class: "video-action-label", "Share" }
                    }
                    Button {
                        size: ButtonSize::Small,
                        variant: ButtonVariant::Outline,
                        disabled,
                        onclick: move |_| run_action(notifier, &download_video, VideoAction::Download, credits, unlock_cost),
                        Icon::<LdDownload> { icon: LdDownload, width: 12, height: 12 }
                        span { class: "video-action-label", "Download" }
                    }
                }
            }
        }
    }
}

/// Best-effort clipboard write through the JS bridge.
pub fn copy_to_clipboard(text: &str) {
    match serde_json::to_string(text) {
        Ok(quoted) => {
            document::eval(&format!("navigator.clipboard?.writeText({quoted});"));
        }
        Err(e) => tracing::warn!(error = %e, "could not encode clipboard text"),
    }
}

