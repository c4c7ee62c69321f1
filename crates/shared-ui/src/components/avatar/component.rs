use dioxus::prelude::*;
use dioxus_primitives::avatar as prim;

/// Upper-cased first character of a display name, or empty.
pub fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}

#[component]
pub fn Avatar(mut props: prim::AvatarProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "pv-avatar", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Avatar { ..props }
    }
}

#[component]
pub fn AvatarImage(mut props: prim::AvatarImageProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "pv-avatar-image", None, false));

    rsx! {
        prim::AvatarImage { ..props }
    }
}

#[component]
pub fn AvatarFallback(mut props: prim::AvatarFallbackProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "pv-avatar-fallback", None, false));

    rsx! {
        prim::AvatarFallback { ..props }
    }
}

/// Photo of a person with their initial shown while it loads or if it fails.
///
/// `large` is the profile-card size; rows and headers use the default.
#[component]
pub fn PersonAvatar(
    src: String,
    name: String,
    #[props(default = false)] large: bool,
) -> Element {
    let initial = avatar_initial(&name);

    rsx! {
        span {
            class: "pv-person",
            "data-size": if large { "lg" } else { "md" },
            title: "{name}",
            Avatar {
                AvatarImage { src }
                AvatarFallback { "{initial}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_is_uppercased_first_char() {
        assert_eq!(avatar_initial("maria Garcia"), "M");
        assert_eq!(avatar_initial("  élodie"), "É");
        assert_eq!(avatar_initial(""), "");
    }
}
