//! Hardcoded sample data rendered by the dashboards.
//!
//! Every function builds a fresh copy; nothing here is shared or mutated.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::{
    AccountStatus, ClubStats, ClubSummary, Court, CourtStatus, PlayerStats, PlayerSummary,
    ScanCourt, SystemStats, Video,
};

const THUMB_MATCH: &str =
    "https://images.unsplash.com/photo-1554068865-24cecd4e34b8?w=300&h=200&fit=crop";
const THUMB_TRAINING: &str =
    "https://images.unsplash.com/photo-1626224583764-f87db24ac4ea?w=300&h=200&fit=crop";
const THUMB_TOURNAMENT: &str =
    "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?w=300&h=200&fit=crop";

const AVATAR_JOHN: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face";
const AVATAR_MARIA: &str =
    "https://images.unsplash.com/photo-1494790108755-2616b612b5bc?w=100&h=100&fit=crop&crop=face";
const AVATAR_CARLOS: &str =
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop&crop=face";

/// `h:mm:ss` → seconds, for readable literals below.
const fn hms(h: u32, m: u32, s: u32) -> u32 {
    h * 3600 + m * 60 + s
}

#[allow(clippy::too_many_arguments)]
fn video(
    id: &str,
    title: &str,
    player: Option<&str>,
    club: Option<&str>,
    court: Option<&str>,
    date: &str,
    duration_secs: u32,
    thumbnail: &str,
    locked: bool,
    views: u32,
) -> Video {
    Video {
        id: id.to_string(),
        title: title.to_string(),
        player: player.map(str::to_string),
        club: club.map(str::to_string),
        court: court.map(str::to_string),
        date: date.to_string(),
        duration_secs,
        thumbnail: thumbnail.to_string(),
        locked,
        views,
    }
}

fn player(
    id: &str,
    name: &str,
    email: &str,
    credits: u32,
    videos: u32,
    join_date: &str,
    avatar: &str,
) -> PlayerSummary {
    PlayerSummary {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        credits,
        videos,
        join_date: join_date.to_string(),
        status: AccountStatus::Active,
        avatar: avatar.to_string(),
    }
}

// ── Player dashboard ──────────────────────────────────

/// The signed-in player's library: two unlocked videos and one locked.
pub fn player_videos() -> Vec<Video> {
    vec![
        video(
            "1",
            "Match vs Carlos & Miguel",
            None,
            None,
            Some("Court 1 - ClubTech"),
            "2024-06-15",
            hms(0, 45, 30),
            THUMB_MATCH,
            false,
            12,
        ),
        video(
            "2",
            "Training Session",
            None,
            None,
            Some("Court 2 - PadelMax"),
            "2024-06-12",
            hms(0, 32, 15),
            THUMB_TRAINING,
            true,
            0,
        ),
        video(
            "3",
            "Tournament Final",
            None,
            None,
            Some("Center Court - Elite Padel"),
            "2024-06-10",
            hms(1, 12, 45),
            THUMB_TOURNAMENT,
            false,
            25,
        ),
    ]
}

pub fn player_stats(videos: &[Video]) -> PlayerStats {
    PlayerStats {
        total_matches: videos.len(),
        total_hours: 3.5,
        average_match_minutes: 42,
        win_rate_pct: 72,
    }
}

// ── Club dashboard ────────────────────────────────────

pub fn club_courts() -> Vec<Court> {
    [
        ("1", "Court 1", CourtStatus::Active, "QR001", 5),
        ("2", "Court 2", CourtStatus::Active, "QR002", 3),
        ("3", "Court 3", CourtStatus::Maintenance, "QR003", 0),
        ("4", "Court 4", CourtStatus::Active, "QR004", 7),
    ]
    .into_iter()
    .map(|(id, name, status, qr, today)| Court {
        id: id.to_string(),
        name: name.to_string(),
        status,
        qr_code: qr.to_string(),
        today_videos: today,
    })
    .collect()
}

pub fn club_recent_videos() -> Vec<Video> {
    vec![
        video(
            "1",
            "Court 1 - Match Recording",
            Some("John Doe"),
            None,
            None,
            "2024-06-20",
            hms(0, 45, 30),
            THUMB_MATCH,
            false,
            0,
        ),
        video(
            "2",
            "Court 2 - Training Session",
            Some("Maria Garcia"),
            None,
            None,
            "2024-06-20",
            hms(0, 32, 15),
            THUMB_TRAINING,
            false,
            0,
        ),
        video(
            "3",
            "Court 4 - Tournament Match",
            Some("Carlos Rodriguez"),
            None,
            None,
            "2024-06-19",
            hms(1, 12, 45),
            THUMB_TOURNAMENT,
            false,
            0,
        ),
    ]
}

pub fn club_players() -> Vec<PlayerSummary> {
    vec![
        player("1", "John Doe", "john@example.com", 5, 8, "2024-01-15", AVATAR_JOHN),
        player("2", "Maria Garcia", "maria@example.com", 12, 15, "2024-02-20", AVATAR_MARIA),
        player("3", "Carlos Rodriguez", "carlos@example.com", 2, 6, "2024-03-05", AVATAR_CARLOS),
    ]
}

/// Club headline numbers; the court counts are derived from `courts`.
pub fn club_stats(courts: &[Court]) -> ClubStats {
    ClubStats {
        total_videos: 156,
        active_users: 48,
        today_revenue: 1250,
        active_courts: courts
            .iter()
            .filter(|c| c.status == CourtStatus::Active)
            .count(),
        total_courts: courts.len(),
    }
}

// ── Admin dashboard ───────────────────────────────────

pub fn system_stats() -> SystemStats {
    SystemStats {
        total_users: 1247,
        total_clubs: 56,
        total_videos: 8943,
        total_revenue: 45678,
        active_recordings: 23,
        monthly_growth_pct: 12.5,
    }
}

pub fn admin_players() -> Vec<PlayerSummary> {
    vec![
        player("1", "John Doe", "john@example.com", 5, 23, "2024-01-15", AVATAR_JOHN),
        player("2", "Maria Garcia", "maria@example.com", 12, 45, "2024-02-20", AVATAR_MARIA),
    ]
}

pub fn admin_clubs() -> Vec<ClubSummary> {
    vec![
        ClubSummary {
            id: "1".to_string(),
            name: "Elite Padel Club".to_string(),
            email: "admin@elitepadel.com".to_string(),
            courts: 8,
            players: 156,
            join_date: "2024-01-10".to_string(),
            status: AccountStatus::Active,
            monthly_revenue: 4500,
        },
        ClubSummary {
            id: "2".to_string(),
            name: "PadelMax Center".to_string(),
            email: "info@padelmax.com".to_string(),
            courts: 6,
            players: 98,
            join_date: "2024-02-15".to_string(),
            status: AccountStatus::Active,
            monthly_revenue: 3200,
        },
    ]
}

pub fn admin_recent_videos() -> Vec<Video> {
    vec![
        video(
            "1",
            "Tournament Final - Court 1",
            Some("Carlos Rodriguez"),
            Some("Elite Padel Club"),
            None,
            "2024-06-20",
            hms(1, 12, 45),
            THUMB_MATCH,
            false,
            87,
        ),
        video(
            "2",
            "Training Session",
            Some("Maria Garcia"),
            Some("PadelMax Center"),
            None,
            "2024-06-20",
            hms(0, 45, 30),
            THUMB_TRAINING,
            false,
            34,
        ),
    ]
}

// ── Recording scanner ─────────────────────────────────

/// Courts the simulated scanner can "detect".
pub fn scan_courts() -> Vec<ScanCourt> {
    [
        ("court-1", "Court 1", "Elite Padel Club", "Downtown Center", "QR001"),
        ("court-2", "Court 2", "Elite Padel Club", "Downtown Center", "QR002"),
        ("court-3", "Court A", "PadelMax Center", "Sports Complex", "QR003"),
    ]
    .into_iter()
    .map(|(id, name, club, location, qr)| ScanCourt {
        id: id.to_string(),
        name: name.to_string(),
        club: club.to_string(),
        location: location.to_string(),
        qr_code: qr.to_string(),
    })
    .collect()
}

/// What a simulated QR scan "finds": any one of the scanner courts.
pub fn detect_court<R: Rng + ?Sized>(rng: &mut R) -> Option<ScanCourt> {
    scan_courts().choose(rng).cloned()
}
