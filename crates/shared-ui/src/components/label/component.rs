use dioxus::prelude::*;
use dioxus_primitives::label as prim;

#[component]
pub fn Label(mut props: prim::LabelProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "pv-label", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Label { ..props }
    }
}

/// Label stacked over its control. `html_for` must match the control's id.
#[component]
pub fn Field(
    html_for: String,
    label: String,
    #[props(default)] hint: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "pv-field",
            Label { html_for: html_for, "{label}" }
            {children}
            if let Some(hint) = hint {
                p { class: "pv-field-hint", "{hint}" }
            }
        }
    }
}
