use dioxus::prelude::*;
use dioxus_primitives::tabs as prim;

#[component]
pub fn Tabs(mut props: prim::TabsProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "pv-tabs", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Tabs { ..props }
    }
}

#[component]
pub fn TabList(mut props: prim::TabListProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "pv-tab-list", None, false));

    rsx! {
        prim::TabList { ..props }
    }
}

/// Tab button. `count` adds a small pill after the label (e.g. list sizes).
#[component]
pub fn TabTrigger(
    value: String,
    index: usize,
    #[props(default)] count: Option<usize>,
    children: Element,
) -> Element {
    rsx! {
        prim::TabTrigger { class: "pv-tab-trigger", value: value, index: index,
            {children}
            if let Some(n) = count {
                span { class: "pv-tab-count", "{n}" }
            }
        }
    }
}

#[component]
pub fn TabContent(mut props: prim::TabContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("pv-tab-content".to_string());
    }

    rsx! {
        prim::TabContent { ..props }
    }
}
