//! Cosmetic credit economy.
//!
//! Nothing here decrements a balance or flips a lock flag; every function
//! only decides which notice the user sees.

use crate::{AppError, Notice, Video};

/// Result of pressing play or download on a library video.
#[derive(Debug, Clone, PartialEq)]
pub enum VideoAction {
    Play,
    Download,
}

/// Check the balance and report whether a locked video "unlocks".
pub fn unlock(credits: u32, cost: u32) -> Result<Notice, AppError> {
    if credits > 0 {
        Ok(Notice::success(
            "Video Unlocked!",
            format!(
                "{cost} credit{} been used to unlock this video.",
                if cost == 1 { " has" } else { "s have" }
            ),
        ))
    } else {
        Err(AppError::insufficient_credits(
            "Please top up your credits to unlock this video.",
        ))
    }
}

/// Notice shown when an unlock attempt fails.
pub fn unlock_failed_notice(err: &AppError) -> Notice {
    Notice::error("Insufficient Credits", err.message.clone())
}

/// Play or download: locked videos route through [`unlock`].
pub fn video_action(
    video: &Video,
    action: VideoAction,
    credits: u32,
    cost: u32,
) -> Result<Notice, AppError> {
    if video.locked {
        return unlock(credits, cost);
    }
    Ok(match action {
        VideoAction::Play => {
            Notice::info("Playing Video", format!("Now playing: {}", video.title))
        }
        VideoAction::Download => Notice::info("Downloading...", "Your video download has started."),
    })
}

/// Text placed on the clipboard by "Share".
pub fn share_text(video: &Video) -> String {
    format!("Check out my padel match: {}", video.title)
}

pub fn share_notice() -> Notice {
    Notice::success("Link Copied!", "Video link copied to clipboard.")
}

/// Download is unavailable for a locked video when the wallet is empty.
pub fn download_disabled(video: &Video, credits: u32) -> bool {
    video.locked && credits == 0
}

pub fn top_up_notice(amount: u32) -> Notice {
    Notice::success(
        "Credits Added",
        format!("{amount} credits have been added to the player account."),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::player_videos;
    use crate::AppErrorKind;
    use pretty_assertions::assert_eq;

    fn locked() -> Video {
        player_videos().into_iter().find(|v| v.locked).unwrap()
    }

    fn unlocked() -> Video {
        player_videos().into_iter().find(|v| !v.locked).unwrap()
    }

    #[test]
    fn unlock_succeeds_with_positive_balance() {
        let notice = unlock(1, 1).unwrap();
        assert_eq!(notice.title, "Video Unlocked!");
        assert_eq!(notice.description, "1 credit has been used to unlock this video.");
    }

    #[test]
    fn unlock_fails_with_zero_balance() {
        let err = unlock(0, 1).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::InsufficientCredits);
        assert_eq!(
            unlock_failed_notice(&err),
            Notice::error(
                "Insufficient Credits",
                "Please top up your credits to unlock this video."
            )
        );
    }

    #[test]
    fn unlock_does_not_touch_the_video() {
        let video = locked();
        let before = video.clone();
        let _ = video_action(&video, VideoAction::Play, 5, 1);
        assert_eq!(video, before);
        assert!(video.locked);
    }

    #[test]
    fn locked_video_routes_through_unlock() {
        let video = locked();
        assert_eq!(
            video_action(&video, VideoAction::Download, 3, 1).unwrap().title,
            "Video Unlocked!"
        );
        assert!(video_action(&video, VideoAction::Play, 0, 1).is_err());
    }

    #[test]
    fn unlocked_video_plays_and_downloads() {
        let video = unlocked();
        let play = video_action(&video, VideoAction::Play, 0, 1).unwrap();
        assert_eq!(play.description, format!("Now playing: {}", video.title));
        let download = video_action(&video, VideoAction::Download, 0, 1).unwrap();
        assert_eq!(download.title, "Downloading...");
    }

    #[test]
    fn download_disabled_only_when_locked_and_broke() {
        assert!(download_disabled(&locked(), 0));
        assert!(!download_disabled(&locked(), 1));
        assert!(!download_disabled(&unlocked(), 0));
    }

    #[test]
    fn share_text_names_the_match() {
        assert_eq!(
            share_text(&unlocked()),
            "Check out my padel match: Match vs Carlos & Miguel"
        );
    }

    #[test]
    fn top_up_names_amount() {
        assert_eq!(
            top_up_notice(10).description,
            "10 credits have been added to the player account."
        );
    }
}
