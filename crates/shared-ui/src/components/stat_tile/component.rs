use dioxus::prelude::*;

/// Headline number with a caption and an icon, laid out as a small card.
#[component]
pub fn StatTile(
    label: String,
    value: String,
    #[props(default)] hint: Option<String>,
    #[props(default)] icon: Option<Element>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "pv-stat-tile", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            div { class: "pv-stat-head",
                span { class: "pv-stat-label", "{label}" }
                if let Some(icon) = icon {
                    span { class: "pv-stat-icon", {icon} }
                }
            }
            div { class: "pv-stat-value", "{value}" }
            if let Some(hint) = hint {
                p { class: "pv-stat-hint", "{hint}" }
            }
        }
    }
}
