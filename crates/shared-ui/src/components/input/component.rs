use dioxus::prelude::*;

/// Text input with an optional leading icon slot.
///
/// `leading` renders inside the field, left of the text (mail, lock, user...).
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] leading: Option<Element>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "pv-input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let has_leading = leading.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "pv-input-wrapper",
            "data-leading": if has_leading { "true" } else { "false" },
            if let Some(icon) = leading {
                span { class: "pv-input-icon", {icon} }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                oninput: move |evt| on_input.call(evt),
                ..merged,
            }
        }
    }
}
