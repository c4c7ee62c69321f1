use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCamera, LdMapPin, LdPlay, LdQrCode, LdSquare};
use dioxus_free_icons::Icon;
use shared_types::catalog::{detect_court, scan_courts};
use shared_types::{AppError, FeatureFlags, Recorder, RecorderState, SimulationConfig};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, DialogContent, DialogDescription, DialogRoot,
    DialogTitle, Meter,
};

use crate::format_helpers::format_clock_ms;
use crate::notify::use_notifier;
use crate::timer::delay;

fn rejected(err: AppError) {
    tracing::debug!(error = %err, "recorder transition rejected");
}

/// A timer may act only if it really elapsed and the recorder has not
/// moved on since it was armed.
fn timer_applies(elapsed: bool, armed_epoch: u64, current_epoch: u64) -> bool {
    elapsed && armed_epoch == current_epoch
}

/// Simulated court scanner and match recorder.
///
/// Timers capture the recorder epoch when armed and do nothing if the flow
/// has moved on by the time they fire.
#[component]
pub fn QrScanner(open: bool, on_close: EventHandler<()>) -> Element {
    let flags = use_context::<FeatureFlags>();
    let sim = use_context::<SimulationConfig>();
    let notifier = use_notifier();
    let mut recorder = use_signal(Recorder::new);

    let start_scan = move |_: MouseEvent| {
        if let Err(e) = recorder.write().start_scan() {
            return rejected(e);
        }
        let epoch = recorder.read().epoch();
        tracing::info!(epoch, "scan started");
        spawn(async move {
            let elapsed = delay(sim.scan_delay_ms).await;
            if !timer_applies(elapsed, epoch, recorder.read().epoch()) {
                tracing::debug!(epoch, elapsed, "scan timer ignored");
                return;
            }
            let result = match detect_court(&mut rand::thread_rng()) {
                Some(court) => recorder.write().scan_complete(court),
                None => {
                    tracing::warn!(epoch, "scan found no court");
                    recorder.write().scan_failed()
                }
            };
            match result {
                Ok(notice) => notifier.show(notice),
                Err(e) => rejected(e),
            }
        });
    };

    let start_recording = move |_: MouseEvent| {
        let result = recorder.write().start_recording();
        let notice = match result {
            Ok(notice) => notice,
            Err(e) => return rejected(e),
        };
        notifier.show(notice);
        let epoch = recorder.read().epoch();
        spawn(async move {
            let elapsed = delay(sim.recording_delay_ms).await;
            if !timer_applies(elapsed, epoch, recorder.read().epoch()) {
                tracing::debug!(epoch, elapsed, "recording timer ignored");
                return;
            }
            let result = recorder.write().recording_elapsed();
            match result {
                Ok(()) => {
                    tracing::info!("demo recording finished");
                    on_close.call(());
                }
                Err(e) => rejected(e),
            }
        });
    };

    let stop_recording = move |_: MouseEvent| {
        let result = recorder.write().stop();
        match result {
            Ok(notice) => {
                notifier.show(notice);
                on_close.call(());
            }
            Err(e) => rejected(e),
        }
    };

    let mut close = move || {
        let notice = recorder.write().cancel();
        if let Some(notice) = notice {
            notifier.show(notice);
        }
        on_close.call(());
    };

    let state = recorder.read().state().clone();
    let demo_length = format_clock_ms(sim.recording_delay_ms);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./qr_scanner.css") }
        DialogRoot {
            open: open,
            on_open_change: move |open: bool| {
                if !open {
                    close();
                }
            },
            DialogContent {
                DialogTitle {
                    span { class: "scanner-title",
                        Icon::<LdQrCode> { icon: LdQrCode, width: 20, height: 20 }
                        "Court Scanner"
                    }
                }

                match state {
                    RecorderState::Idle => rsx! {
                        div { class: "scanner-panel",
                            div { class: "scanner-icon", "data-phase": "idle",
                                Icon::<LdQrCode> { icon: LdQrCode, width: 48, height: 48 }
                            }
                            h3 { "Scan Court QR Code" }
                            DialogDescription {
                                "Point your camera at the QR code on the court to start recording"
                            }
                            Button { full_width: true, onclick: start_scan,
                                Icon::<LdCamera> { icon: LdCamera, width: 16, height: 16 }
                                "Start Scanning"
                            }
                            if flags.manual_court_selection {
                                div { class: "scanner-manual",
                                    p { "Or select a court manually:" }
                                    for court in scan_courts() {
                                        div {
                                            key: "{court.id}",
                                            class: "scanner-court-option",
                                            onclick: {
                                                let court = court.clone();
                                                move |_| {
                                                    let result = recorder.write().select_court(court.clone());
                                                    match result {
                                                        Ok(notice) => notifier.show(notice),
                                                        Err(e) => rejected(e),
                                                    }
                                                }
                                            },
                                            Card { interactive: true,
                                                CardContent { class: "scanner-court",
                                                    div {
                                                        div { class: "scanner-court-name", "{court.name}" }
                                                        div { class: "scanner-court-club", "{court.club}" }
                                                    }
                                                    span { class: "scanner-court-location",
                                                        Icon::<LdMapPin> { icon: LdMapPin, width: 12, height: 12 }
                                                        "{court.location}"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    RecorderState::Scanning => rsx! {
                        div { class: "scanner-panel scanner-pulse",
                            div { class: "scanner-icon", "data-phase": "scanning",
                                Icon::<LdCamera> { icon: LdCamera, width: 48, height: 48 }
                            }
                            h3 { "Scanning..." }
                            DialogDescription { "Point your camera at the QR code" }
                            Meter { value: 60.0 }
                        }
                    },
                    RecorderState::CourtSelected(court) => rsx! {
                        div { class: "scanner-panel",
                            div { class: "scanner-icon", "data-phase": "selected",
                                Icon::<LdMapPin> { icon: LdMapPin, width: 48, height: 48 }
                            }
                            h3 { "{court.name}" }
                            DialogDescription { "{court.club}" }
                            p { class: "scanner-location", "{court.location}" }
                            div { class: "scanner-actions",
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| {
                                        let result = recorder.write().change_court();
                                        if let Err(e) = result {
                                            rejected(e);
                                        }
                                    },
                                    "Change Court"
                                }
                                Button { variant: ButtonVariant::Record, onclick: start_recording,
                                    Icon::<LdPlay> { icon: LdPlay, width: 16, height: 16 }
                                    "Start Recording"
                                }
                            }
                        }
                    },
                    RecorderState::Recording(court) => rsx! {
                        div { class: "scanner-panel",
                            div { class: "scanner-icon", "data-phase": "recording",
                                span { class: "scanner-rec-dot" }
                            }
                            h3 { class: "scanner-recording-title", "Recording in Progress" }
                            DialogDescription { "{court.name} - {court.club}" }
                            div { class: "scanner-clock",
                                span { "{demo_length}" }
                                span { class: "scanner-rec-dot small" }
                            }
                            Button { variant: ButtonVariant::Outline, class: "scanner-stop", onclick: stop_recording,
                                Icon::<LdSquare> { icon: LdSquare, width: 16, height: 16 }
                                "Stop Recording"
                            }
                        }
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_acts_only_when_elapsed_and_current() {
        assert!(timer_applies(true, 3, 3));
        assert!(!timer_applies(true, 3, 4));
        assert!(!timer_applies(false, 3, 3));
        assert!(!timer_applies(false, 3, 4));
    }
}
