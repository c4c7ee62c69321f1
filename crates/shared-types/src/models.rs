use serde::{Deserialize, Serialize};

/// Platform role, chosen before signing in and fixed for the session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Player,
    Club,
    Admin,
}

/// All roles in the order they appear on the landing page.
pub const ALL_ROLES: &[Role] = &[Role::Player, Role::Club, Role::Admin];

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Player => "player",
            Role::Club => "club",
            Role::Admin => "admin",
        }
    }

    /// Human-readable name used in modal copy and notifications.
    pub fn title(&self) -> &'static str {
        match self {
            Role::Player => "Player",
            Role::Club => "Club",
            Role::Admin => "Super Admin",
        }
    }

    /// One-line tagline shown under the credential modal title.
    pub fn tagline(&self) -> &'static str {
        match self {
            Role::Player => "Join the padel community",
            Role::Club => "Manage your padel facility",
            Role::Admin => "Platform administration",
        }
    }

    /// Only players carry a credit balance.
    pub fn has_credits(&self) -> bool {
        matches!(self, Role::Player)
    }
}

/// Placeholder portrait used for every fabricated account.
pub const DEFAULT_PROFILE_PHOTO: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face";

/// A fabricated, in-memory account. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// `Some` only for players.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<u32>,
    pub profile_photo: String,
    /// ISO date (`YYYY-MM-DD`) the account was fabricated on.
    pub member_since: String,
}

/// The signed-in user together with the role picked before login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub role: Role,
    #[serde(flatten)]
    pub user: User,
}

impl SessionUser {
    /// Credit balance, zero for roles without one.
    pub fn credits(&self) -> u32 {
        self.user.credits.unwrap_or(0)
    }
}

/// Operational state of a club court.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CourtStatus {
    Active,
    Maintenance,
}

impl CourtStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourtStatus::Active => "active",
            CourtStatus::Maintenance => "maintenance",
        }
    }
}

/// A physical court as listed on the club dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Court {
    pub id: String,
    pub name: String,
    pub status: CourtStatus,
    pub qr_code: String,
    pub today_videos: u32,
}

/// A court as resolved by the recording scanner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanCourt {
    pub id: String,
    pub name: String,
    pub club: String,
    pub location: String,
    pub qr_code: String,
}

/// A recorded match video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Video {
    pub id: String,
    pub title: String,
    /// Participant credited on club/admin listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub court: Option<String>,
    pub date: String,
    pub duration_secs: u32,
    pub thumbnail: String,
    pub locked: bool,
    pub views: u32,
}

/// Account status shown as a badge on admin rows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Suspended,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Suspended => "suspended",
        }
    }
}

/// Denormalized player row for club and admin listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub credits: u32,
    /// Videos this month on the club view, lifetime on the admin view.
    pub videos: u32,
    pub join_date: String,
    pub status: AccountStatus,
    pub avatar: String,
}

/// Denormalized club row for the admin listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClubSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub courts: u32,
    pub players: u32,
    pub join_date: String,
    pub status: AccountStatus,
    pub monthly_revenue: u32,
}

/// Headline numbers on the player dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerStats {
    pub total_matches: usize,
    pub total_hours: f32,
    pub average_match_minutes: u32,
    pub win_rate_pct: u32,
}

/// Headline numbers on the club dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClubStats {
    pub total_videos: u32,
    pub active_users: u32,
    pub today_revenue: u32,
    pub active_courts: usize,
    pub total_courts: usize,
}

/// Platform-wide numbers on the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemStats {
    pub total_users: u32,
    pub total_clubs: u32,
    pub total_videos: u32,
    pub total_revenue: u32,
    pub active_recordings: u32,
    pub monthly_growth_pct: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_players_have_credits() {
        assert!(Role::Player.has_credits());
        assert!(!Role::Club.has_credits());
        assert!(!Role::Admin.has_credits());
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Club).unwrap(), r#""club""#);
    }

    #[test]
    fn session_user_flattens_user_fields() {
        let session = SessionUser {
            role: Role::Club,
            user: User {
                id: "abc".into(),
                email: "club@example.com".into(),
                name: "club".into(),
                phone: None,
                credits: None,
                profile_photo: DEFAULT_PROFILE_PHOTO.into(),
                member_since: "2024-06-01".into(),
            },
        };
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["role"], "club");
        assert_eq!(json["email"], "club@example.com");
        assert!(json.get("credits").is_none());
        assert_eq!(session.credits(), 0);
    }
}
