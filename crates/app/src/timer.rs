use dioxus::prelude::*;

/// Wait `ms` milliseconds. Returns `false` if the JS bridge went away
/// before the timer fired, in which case the wait did not really elapse.
///
/// Runs through the renderer's eval bridge so the same code waits on web,
/// desktop, and mobile.
pub async fn delay(ms: u64) -> bool {
    let mut eval = document::eval(&format!(
        "setTimeout(() => dioxus.send(true), {ms});"
    ));
    match eval.recv::<bool>().await {
        Ok(fired) => fired,
        Err(e) => {
            tracing::debug!(error = ?e, "timer bridge closed");
            false
        }
    }
}
