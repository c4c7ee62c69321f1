use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{FeatureFlags, Notice, Role, SimulationConfig, User, DEFAULT_PROFILE_PHOTO};

/// Which face of the credential modal is showing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::Register,
            AuthMode::Register => AuthMode::SignIn,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Welcome Back",
            AuthMode::Register => "Join PadelVar",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::Register => "Create Account",
        }
    }

    /// Prompt and link text of the footer that flips the mode.
    pub fn switch_prompt(&self) -> (&'static str, &'static str) {
        match self {
            AuthMode::SignIn => ("Don't have an account? ", "Sign up"),
            AuthMode::Register => ("Already have an account? ", "Sign in"),
        }
    }
}

/// Raw contents of the credential form. Empty fields are accepted as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CredentialForm {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
}

/// Identity providers offered on the player modal. No call is ever made.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SocialProvider {
    Google,
    Facebook,
}

pub const ALL_PROVIDERS: &[SocialProvider] = &[SocialProvider::Google, SocialProvider::Facebook];

impl SocialProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialProvider::Google => "google",
            SocialProvider::Facebook => "facebook",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SocialProvider::Google => "Google",
            SocialProvider::Facebook => "Facebook",
        }
    }
}

/// Short random account id, nine lowercase hex characters.
fn fabricate_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(9);
    id
}

fn starting_credits(role: Role, cfg: &SimulationConfig) -> Option<u32> {
    role.has_credits().then_some(cfg.starting_credits)
}

/// Build a user from whatever the form holds.
///
/// The name falls back to the local part of the email, and a blank phone
/// is dropped. `today` is the ISO date stamped as `member_since`.
pub fn fabricate_user(
    form: &CredentialForm,
    role: Role,
    cfg: &SimulationConfig,
    today: &str,
) -> User {
    let name = if form.name.trim().is_empty() {
        form.email.split('@').next().unwrap_or_default().to_string()
    } else {
        form.name.trim().to_string()
    };
    let phone = Some(form.phone.trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string);

    User {
        id: fabricate_id(),
        email: form.email.clone(),
        name,
        phone,
        credits: starting_credits(role, cfg),
        profile_photo: DEFAULT_PROFILE_PHOTO.to_string(),
        member_since: today.to_string(),
    }
}

/// Build a user for a social sign-in without contacting the provider.
pub fn social_user(
    provider: SocialProvider,
    role: Role,
    cfg: &SimulationConfig,
    today: &str,
) -> User {
    User {
        id: fabricate_id(),
        email: format!("user@{}.com", provider.as_str()),
        name: format!("{} User", provider.display_name()),
        phone: None,
        credits: starting_credits(role, cfg),
        profile_photo: DEFAULT_PROFILE_PHOTO.to_string(),
        member_since: today.to_string(),
    }
}

pub fn login_notice(mode: AuthMode, role: Role) -> Notice {
    match mode {
        AuthMode::SignIn => Notice::success(
            "Welcome back to PadelVar!",
            format!("Successfully logged in as {}", role.title()),
        ),
        AuthMode::Register => Notice::success(
            "Welcome to PadelVar!",
            format!("Successfully registered as {}", role.title()),
        ),
    }
}

pub fn social_notice(provider: SocialProvider) -> Notice {
    Notice::success(
        "Welcome to PadelVar!",
        format!("Successfully logged in with {}", provider.display_name()),
    )
}

/// Name field is shown on every registration form.
pub fn shows_name_field(mode: AuthMode) -> bool {
    mode == AuthMode::Register
}

/// Phone field is only collected when a player registers.
pub fn shows_phone_field(role: Role, mode: AuthMode) -> bool {
    role == Role::Player && mode == AuthMode::Register
}

/// Social buttons are a player-only affordance.
pub fn shows_social_login(role: Role, flags: &FeatureFlags) -> bool {
    role == Role::Player && flags.social_login
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cfg() -> SimulationConfig {
        SimulationConfig::default()
    }

    #[test]
    fn name_falls_back_to_email_local_part() {
        let form = CredentialForm {
            email: "carla@club.es".into(),
            password: "pw".into(),
            ..Default::default()
        };
        let user = fabricate_user(&form, Role::Club, &cfg(), "2024-06-01");
        assert_eq!(user.name, "carla");
        assert_eq!(user.email, "carla@club.es");
        assert_eq!(user.credits, None);
        assert_eq!(user.phone, None);
        assert_eq!(user.member_since, "2024-06-01");
    }

    #[test]
    fn empty_form_is_accepted() {
        let user = fabricate_user(&CredentialForm::default(), Role::Admin, &cfg(), "2024-06-01");
        assert_eq!(user.email, "");
        assert_eq!(user.name, "");
        assert_eq!(user.id.len(), 9);
    }

    #[test]
    fn registration_keeps_name_and_phone() {
        let form = CredentialForm {
            mode: AuthMode::Register,
            email: "p@x.com".into(),
            password: "pw".into(),
            name: "Paula Ruiz".into(),
            phone: "+34 600 000 000".into(),
        };
        let user = fabricate_user(&form, Role::Player, &cfg(), "2024-06-01");
        assert_eq!(user.name, "Paula Ruiz");
        assert_eq!(user.phone.as_deref(), Some("+34 600 000 000"));
        assert_eq!(user.credits, Some(5));
    }

    #[test]
    fn starting_credits_follow_config() {
        let cfg = SimulationConfig {
            starting_credits: 0,
            ..SimulationConfig::default()
        };
        let user = fabricate_user(&CredentialForm::default(), Role::Player, &cfg, "2024-06-01");
        assert_eq!(user.credits, Some(0));
    }

    #[test]
    fn ids_are_random() {
        let a = fabricate_user(&CredentialForm::default(), Role::Club, &cfg(), "2024-06-01");
        let b = fabricate_user(&CredentialForm::default(), Role::Club, &cfg(), "2024-06-01");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn social_user_is_built_from_provider() {
        let user = social_user(SocialProvider::Facebook, Role::Player, &cfg(), "2024-06-01");
        assert_eq!(user.email, "user@facebook.com");
        assert_eq!(user.name, "Facebook User");
        assert_eq!(user.credits, Some(5));
    }

    #[test]
    fn notices_name_the_role() {
        assert_eq!(
            login_notice(AuthMode::SignIn, Role::Admin).description,
            "Successfully logged in as Super Admin"
        );
        assert_eq!(
            login_notice(AuthMode::Register, Role::Club),
            Notice::success("Welcome to PadelVar!", "Successfully registered as Club")
        );
        assert_eq!(
            social_notice(SocialProvider::Google).description,
            "Successfully logged in with Google"
        );
    }

    #[test]
    fn role_gates_optional_fields() {
        let flags = FeatureFlags::default();
        assert!(shows_phone_field(Role::Player, AuthMode::Register));
        assert!(!shows_phone_field(Role::Player, AuthMode::SignIn));
        assert!(!shows_phone_field(Role::Club, AuthMode::Register));
        assert!(shows_social_login(Role::Player, &flags));
        assert!(!shows_social_login(Role::Club, &flags));
        assert!(!shows_social_login(Role::Admin, &flags));
    }

    #[test]
    fn social_login_flag_hides_buttons() {
        let flags = FeatureFlags {
            social_login: false,
            ..FeatureFlags::default()
        };
        assert!(!shows_social_login(Role::Player, &flags));
    }

    #[test]
    fn mode_toggle_flips() {
        assert_eq!(AuthMode::SignIn.toggled(), AuthMode::Register);
        assert_eq!(AuthMode::Register.toggled(), AuthMode::SignIn);
        assert!(shows_name_field(AuthMode::Register));
        assert!(!shows_name_field(AuthMode::SignIn));
    }
}
