use dioxus::prelude::*;
use dioxus_primitives::progress as prim;

/// Clamp a percentage into the 0..=100 range the bar can draw.
pub fn clamp_pct(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Thin percentage bar with an optional caption on the left.
///
/// Used for "courts in use" on the club overview and the scanner's
/// indeterminate-looking progress strip.
#[component]
pub fn Meter(
    value: f64,
    #[props(default)] caption: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let pct = clamp_pct(value);
    let base = vec![Attribute::new("class", "pv-meter", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            if let Some(caption) = caption {
                span { class: "pv-meter-caption", "{caption}" }
            }
            prim::Progress { class: "pv-progress", value: Some(pct),
                prim::ProgressIndicator { class: "pv-progress-indicator" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pct_is_clamped() {
        assert_eq!(clamp_pct(75.0), 75.0);
        assert_eq!(clamp_pct(-5.0), 0.0);
        assert_eq!(clamp_pct(140.0), 100.0);
        assert_eq!(clamp_pct(f64::NAN), 0.0);
    }
}
