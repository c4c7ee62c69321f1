use serde::{Deserialize, Serialize};

use crate::{AppError, Role, SessionUser, User};

/// Which top-level screen should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    RoleSelection,
    Dashboard(Role),
}

/// Client-local role/session holder.
///
/// Holds the role picked on the landing page, whether the credential
/// modal is showing, and the signed-in user. Nothing is validated and
/// nothing outlives the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub selected_role: Option<Role>,
    pub login_open: bool,
    pub current_user: Option<SessionUser>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember the role and open the credential modal for it.
    pub fn select_role(&mut self, role: Role) {
        self.selected_role = Some(role);
        self.login_open = true;
    }

    /// Dismiss the credential modal. The selected role is kept.
    pub fn close_login(&mut self) {
        self.login_open = false;
    }

    /// Store the fabricated user under the selected role and close the modal.
    ///
    /// Fails only when no role was selected, which the landing page never allows.
    pub fn complete_login(&mut self, user: User) -> Result<&SessionUser, AppError> {
        let role = self
            .selected_role
            .ok_or_else(|| AppError::bad_request("No role selected"))?;
        self.login_open = false;
        Ok(&*self.current_user.insert(SessionUser { role, user }))
    }

    /// Drop the user and the selected role.
    pub fn logout(&mut self) {
        self.current_user = None;
        self.selected_role = None;
        self.login_open = false;
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn view(&self) -> View {
        match &self.current_user {
            Some(user) => View::Dashboard(user.role),
            None => View::RoleSelection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fabricate_user, AuthMode, CredentialForm, SimulationConfig, ALL_ROLES};
    use pretty_assertions::assert_eq;

    fn form(email: &str, password: &str) -> CredentialForm {
        CredentialForm {
            email: email.to_string(),
            password: password.to_string(),
            ..CredentialForm::default()
        }
    }

    #[test]
    fn new_session_shows_role_selection() {
        let session = Session::new();
        assert_eq!(session.view(), View::RoleSelection);
        assert!(!session.login_open);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn select_role_opens_modal() {
        let mut session = Session::new();
        session.select_role(Role::Club);
        assert_eq!(session.selected_role, Some(Role::Club));
        assert!(session.login_open);
        assert_eq!(session.view(), View::RoleSelection);
    }

    #[test]
    fn completed_login_carries_selected_role() {
        let cfg = SimulationConfig::default();
        for role in ALL_ROLES {
            let mut session = Session::new();
            session.select_role(*role);
            let user = fabricate_user(&form("a@b.com", "x"), *role, &cfg, "2024-06-01");
            let stored = session.complete_login(user).unwrap();
            assert_eq!(stored.role, *role);
            assert!(!session.login_open);
            assert_eq!(session.view(), View::Dashboard(*role));
        }
    }

    #[test]
    fn player_login_scenario_lands_with_five_credits() {
        let cfg = SimulationConfig::default();
        let mut session = Session::new();
        session.select_role(Role::Player);
        let user = fabricate_user(&form("a@b.com", "x"), Role::Player, &cfg, "2024-06-01");
        session.complete_login(user).unwrap();

        let current = session.current_user.as_ref().unwrap();
        assert_eq!(current.role, Role::Player);
        assert_eq!(current.user.credits, Some(5));
        assert_eq!(current.user.name, "a");
        assert_eq!(session.view(), View::Dashboard(Role::Player));
    }

    #[test]
    fn complete_login_without_role_is_rejected() {
        let cfg = SimulationConfig::default();
        let mut session = Session::new();
        let user = fabricate_user(&form("a@b.com", "x"), Role::Club, &cfg, "2024-06-01");
        let err = session.complete_login(user).unwrap_err();
        assert_eq!(err.kind, crate::AppErrorKind::BadRequest);
        assert!(session.current_user.is_none());
    }

    #[test]
    fn close_login_keeps_role() {
        let mut session = Session::new();
        session.select_role(Role::Admin);
        session.close_login();
        assert!(!session.login_open);
        assert_eq!(session.selected_role, Some(Role::Admin));
    }

    #[test]
    fn logout_clears_everything() {
        let cfg = SimulationConfig::default();
        let mut session = Session::new();
        session.select_role(Role::Player);
        let user = fabricate_user(&form("a@b.com", "x"), Role::Player, &cfg, "2024-06-01");
        session.complete_login(user).unwrap();

        session.logout();
        assert_eq!(session, Session::new());
        assert_eq!(session.view(), View::RoleSelection);
    }

    #[test]
    fn auth_mode_does_not_change_outcome() {
        let cfg = SimulationConfig::default();
        let mut f = form("", "");
        f.mode = AuthMode::Register;
        let mut session = Session::new();
        session.select_role(Role::Club);
        let user = fabricate_user(&f, Role::Club, &cfg, "2024-06-01");
        assert!(session.complete_login(user).is_ok());
    }
}
