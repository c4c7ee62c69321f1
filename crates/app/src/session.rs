use dioxus::prelude::*;
use shared_types::{AppError, Role, Session, SessionUser, User, View};

/// Global session state: selected role, modal visibility, signed-in user.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub session: Signal<Session>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(Session::new()),
        }
    }

    pub fn select_role(&mut self, role: Role) {
        tracing::debug!(role = role.as_str(), "role selected");
        self.session.write().select_role(role);
    }

    pub fn close_login(&mut self) {
        self.session.write().close_login();
    }

    pub fn complete_login(&mut self, user: User) -> Result<SessionUser, AppError> {
        let mut session = self.session.write();
        let stored = session.complete_login(user)?.clone();
        tracing::info!(role = stored.role.as_str(), user_id = %stored.user.id, "signed in");
        Ok(stored)
    }

    pub fn logout(&mut self) {
        tracing::info!("signed out");
        self.session.write().logout();
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.session.read().current_user.clone()
    }

    pub fn view(&self) -> View {
        self.session.read().view()
    }
}

/// Hook to access session state.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}
