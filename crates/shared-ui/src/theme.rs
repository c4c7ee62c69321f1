use dioxus::prelude::*;

/// Colour accents, one per audience.
///
/// The landing page uses a neutral palette; each dashboard tints the
/// header, buttons, and stat icons with its own accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accent {
    #[default]
    Landing,
    /// Blue.
    Player,
    /// Green.
    Club,
    /// Purple.
    Admin,
}

impl Accent {
    /// Value written to the `data-theme` attribute on `<html>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Accent::Landing => "landing",
            Accent::Player => "player",
            Accent::Club => "club",
            Accent::Admin => "admin",
        }
    }
}

/// Reset the document accent on startup.
///
/// Accents are not persisted; a reload always starts on the landing palette.
#[component]
pub fn ThemeSeed() -> Element {
    use_effect(|| set_accent(Accent::Landing));

    rsx! {}
}

/// Apply `accent` to the document root.
pub fn set_accent(accent: Accent) {
    document::eval(&format!(
        "document.documentElement.setAttribute('data-theme', '{}');",
        accent.as_str()
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_accent_is_landing() {
        assert_eq!(Accent::default(), Accent::Landing);
    }

    #[test]
    fn accent_keys_match_theme_files() {
        let keys: Vec<&str> = [Accent::Landing, Accent::Player, Accent::Club, Accent::Admin]
            .iter()
            .map(Accent::as_str)
            .collect();
        assert_eq!(keys, vec!["landing", "player", "club", "admin"]);
    }
}
