use dioxus::prelude::*;
use shared_types::{Notice, NoticeTone};
use shared_ui::{use_toast, ToastOptions, Toasts};

#[cfg(feature = "desktop")]
const APP_NAME: &str = "PadelVar";

/// Send a desktop notification (no-op on non-desktop platforms).
#[allow(unused_variables)]
pub fn send(title: &str, body: &str) {
    #[cfg(feature = "desktop")]
    {
        if let Err(e) = dioxus_sdk_notification::Notification::new()
            .app_name(APP_NAME.to_string())
            .summary(title.to_string())
            .body(body.to_string())
            .show()
        {
            tracing::warn!(error = %e, "failed to show desktop notification");
        }
    }
}

/// Only the end of a recording is also sent as a native notification.
fn wants_native(notice: &Notice) -> bool {
    notice.title == "Recording Stopped"
}

/// Turns domain notices into toasts.
#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: Toasts,
}

impl Notifier {
    pub fn show(&self, notice: Notice) {
        tracing::info!(tone = ?notice.tone, title = %notice.title, "notice");
        if wants_native(&notice) {
            send(&notice.title, &notice.description);
        }
        let options = ToastOptions::new().description(notice.description);
        match notice.tone {
            NoticeTone::Success => self.toasts.success(notice.title, options),
            NoticeTone::Info => self.toasts.info(notice.title, options),
            NoticeTone::Error => self.toasts.error(notice.title, options),
        }
    }
}

/// Hook returning a [`Notifier`] bound to the nearest toast provider.
pub fn use_notifier() -> Notifier {
    Notifier {
        toasts: use_toast(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_recording_stop_goes_native() {
        assert!(wants_native(&Notice::success(
            "Recording Stopped",
            "Your match video has been saved to your library."
        )));
        assert!(!wants_native(&Notice::success("Court Detected!", "Found Court 1")));
        assert!(!wants_native(&Notice::error("Insufficient Credits", "")));
    }

    #[test]
    fn send_noop_does_not_panic() {
        // Without the desktop feature, send() is a no-op and must not panic.
        send("Test Title", "Test body text");
    }
}
