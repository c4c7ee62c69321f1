//! Management buttons on the club and admin dashboards.
//!
//! None of these change any data; each returns the notice to display.

use crate::{Court, Notice};

/// Kind of account an admin action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Player,
    Club,
}

impl AccountKind {
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Player => "Player",
            AccountKind::Club => "Club",
        }
    }
}

pub fn create_account_notice(kind: AccountKind) -> Notice {
    Notice::info(
        format!("Create {}", kind.label()),
        format!("{} creation form would open here.", kind.label()),
    )
}

pub fn delete_account_notice(kind: AccountKind) -> Notice {
    Notice::success(
        "User Deleted",
        format!("{} has been deleted successfully.", kind.label()),
    )
}

pub fn manage_credits_notice() -> Notice {
    Notice::info("Credit Management", "Credit management dialog would open here.")
}

pub fn add_court_notice() -> Notice {
    Notice::info("Add Court", "Court registration form would open here.")
}

pub fn club_settings_notice() -> Notice {
    Notice::info("Club Settings", "Club settings would open here.")
}

pub fn court_details_notice(court: &Court) -> Notice {
    Notice::info(
        court.name.clone(),
        format!(
            "QR {} · {} videos recorded today · {}",
            court.qr_code,
            court.today_videos,
            court.status.as_str()
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::club_courts;
    use pretty_assertions::assert_eq;

    #[test]
    fn create_notice_names_kind() {
        assert_eq!(
            create_account_notice(AccountKind::Club),
            Notice::info("Create Club", "Club creation form would open here.")
        );
    }

    #[test]
    fn delete_notice_names_kind() {
        assert_eq!(
            delete_account_notice(AccountKind::Player).description,
            "Player has been deleted successfully."
        );
    }

    #[test]
    fn placeholder_actions_are_informational() {
        for notice in [manage_credits_notice(), add_court_notice(), club_settings_notice()] {
            assert_eq!(notice.tone, crate::NoticeTone::Info);
        }
    }

    #[test]
    fn court_details_reflect_the_court() {
        let courts = club_courts();
        let notice = court_details_notice(&courts[2]);
        assert_eq!(notice.title, "Court 3");
        assert!(notice.description.contains("QR003"));
        assert!(notice.description.ends_with("maintenance"));
    }
}
