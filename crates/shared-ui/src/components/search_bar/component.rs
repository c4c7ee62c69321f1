use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSearch;
use dioxus_free_icons::Icon;

/// Search field with a magnifier glyph, used above the admin lists.
#[component]
pub fn SearchBar(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default = "Search...".to_string())] placeholder: String,
    #[props(default)] children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "pv-search-bar",
            div { class: "pv-search-field",
                Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                input {
                    r#type: "search",
                    value: value,
                    placeholder: placeholder,
                    oninput: move |evt| on_input.call(evt),
                }
            }
            {children}
        }
    }
}
