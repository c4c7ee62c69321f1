use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Field, Input, Meter, StatTile,
};

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn badge_carries_variant() {
    fn app() -> Element {
        rsx! {
            Badge { variant: BadgeVariant::Warning, "maintenance" }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"data-style="warning""#), "{html}");
    assert!(html.contains("maintenance"));
}

#[test]
fn button_renders_size_and_disabled() {
    fn app() -> Element {
        rsx! {
            Button {
                variant: ButtonVariant::Record,
                size: ButtonSize::Large,
                disabled: true,
                "Stop Recording"
            }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"data-style="record""#), "{html}");
    assert!(html.contains(r#"data-size="lg""#), "{html}");
    assert!(html.contains("disabled"), "{html}");
}

#[test]
fn stat_tile_shows_value_and_hint() {
    fn app() -> Element {
        rsx! {
            StatTile {
                label: "Credits".to_string(),
                value: "5".to_string(),
                hint: Some("Available".to_string()),
            }
        }
    }
    let html = render(app);
    assert!(html.contains("Credits"));
    assert!(html.contains("Available"));
}

#[test]
fn stat_tile_without_hint_omits_paragraph() {
    fn app() -> Element {
        rsx! {
            StatTile { label: "Total Videos".to_string(), value: "156".to_string() }
        }
    }
    let html = render(app);
    assert_eq!(html.matches("pv-stat-hint").count(), 0);
}

#[test]
fn submit_button_sets_type() {
    fn app() -> Element {
        rsx! {
            Button { submit: true, "Sign In" }
        }
    }
    let html = render(app);
    assert!(html.contains(r#"type="submit""#), "{html}");
}

#[test]
fn meter_shows_caption() {
    fn app() -> Element {
        rsx! {
            Meter { value: 75.0, caption: "Courts in use" }
        }
    }
    let html = render(app);
    assert!(html.contains("pv-meter"), "{html}");
    assert!(html.contains("Courts in use"), "{html}");
}

#[test]
fn field_links_label_to_control() {
    fn app() -> Element {
        rsx! {
            Field { html_for: "email", label: "Email",
                Input { id: "email" }
            }
        }
    }
    let html = render(app);
    assert!(html.contains("pv-field"), "{html}");
    assert!(html.contains("Email"));
    assert_eq!(html.matches("pv-field-hint").count(), 0);
}
