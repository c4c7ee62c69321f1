use crate::{AppError, Notice, ScanCourt};

/// Discriminant of [`RecorderState`], handy for logging and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderPhase {
    Idle,
    Scanning,
    CourtSelected,
    Recording,
}

impl RecorderPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecorderPhase::Idle => "idle",
            RecorderPhase::Scanning => "scanning",
            RecorderPhase::CourtSelected => "court_selected",
            RecorderPhase::Recording => "recording",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RecorderState {
    #[default]
    Idle,
    Scanning,
    CourtSelected(ScanCourt),
    Recording(ScanCourt),
}

/// Simulated QR scan / recording flow.
///
/// idle → scanning → court-selected → recording → idle. Manual court
/// selection jumps idle → court-selected. `cancel` resets from anywhere.
/// Every accepted transition bumps `epoch`, so a timer armed in an earlier
/// epoch can tell that the flow has moved on without it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Recorder {
    state: RecorderState,
    epoch: u64,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RecorderState {
        &self.state
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn phase(&self) -> RecorderPhase {
        match self.state {
            RecorderState::Idle => RecorderPhase::Idle,
            RecorderState::Scanning => RecorderPhase::Scanning,
            RecorderState::CourtSelected(_) => RecorderPhase::CourtSelected,
            RecorderState::Recording(_) => RecorderPhase::Recording,
        }
    }

    /// Court currently picked or being recorded on.
    pub fn court(&self) -> Option<&ScanCourt> {
        match &self.state {
            RecorderState::CourtSelected(c) | RecorderState::Recording(c) => Some(c),
            RecorderState::Idle | RecorderState::Scanning => None,
        }
    }

    fn enter(&mut self, state: RecorderState) {
        self.state = state;
        self.epoch += 1;
    }

    fn reject(&self, action: &str) -> AppError {
        AppError::invalid_transition(format!(
            "cannot {action} while {}",
            self.phase().as_str()
        ))
    }

    pub fn start_scan(&mut self) -> Result<(), AppError> {
        match self.state {
            RecorderState::Idle => {
                self.enter(RecorderState::Scanning);
                Ok(())
            }
            _ => Err(self.reject("start scanning")),
        }
    }

    /// The scan timer fired and "found" `court`.
    pub fn scan_complete(&mut self, court: ScanCourt) -> Result<Notice, AppError> {
        match self.state {
            RecorderState::Scanning => {
                let notice = Notice::success(
                    "Court Detected!",
                    format!("Found {} at {}", court.name, court.club),
                );
                self.enter(RecorderState::CourtSelected(court));
                Ok(notice)
            }
            _ => Err(self.reject("complete a scan")),
        }
    }

    /// The scan timer fired without finding a court. Back to idle.
    pub fn scan_failed(&mut self) -> Result<Notice, AppError> {
        match self.state {
            RecorderState::Scanning => {
                self.enter(RecorderState::Idle);
                Ok(Notice::error(
                    "No Court Found",
                    "No court QR code was detected. Try again or pick a court manually.",
                ))
            }
            _ => Err(self.reject("fail a scan")),
        }
    }

    /// Pick a court from the manual list instead of scanning.
    pub fn select_court(&mut self, court: ScanCourt) -> Result<Notice, AppError> {
        match self.state {
            RecorderState::Idle => {
                let notice =
                    Notice::success("Court Selected", format!("Ready to record on {}", court.name));
                self.enter(RecorderState::CourtSelected(court));
                Ok(notice)
            }
            _ => Err(self.reject("select a court")),
        }
    }

    pub fn change_court(&mut self) -> Result<(), AppError> {
        match self.state {
            RecorderState::CourtSelected(_) => {
                self.enter(RecorderState::Idle);
                Ok(())
            }
            _ => Err(self.reject("change court")),
        }
    }

    pub fn start_recording(&mut self) -> Result<Notice, AppError> {
        match &self.state {
            RecorderState::CourtSelected(court) => {
                let court = court.clone();
                let notice =
                    Notice::success("Recording Started!", format!("Now recording on {}", court.name));
                self.enter(RecorderState::Recording(court));
                Ok(notice)
            }
            _ => Err(self.reject("start recording")),
        }
    }

    /// The demo recording timer ran out. Returns silently to idle.
    pub fn recording_elapsed(&mut self) -> Result<(), AppError> {
        match self.state {
            RecorderState::Recording(_) => {
                self.enter(RecorderState::Idle);
                Ok(())
            }
            _ => Err(self.reject("finish recording")),
        }
    }

    /// The user pressed "Stop Recording".
    pub fn stop(&mut self) -> Result<Notice, AppError> {
        match self.state {
            RecorderState::Recording(_) => {
                self.enter(RecorderState::Idle);
                Ok(Notice::success(
                    "Recording Stopped",
                    "Your match video has been saved to your library.",
                ))
            }
            _ => Err(self.reject("stop recording")),
        }
    }

    /// Dialog closed: drop whatever was in flight.
    ///
    /// Closing mid-recording still saves the match, so that case reports
    /// the same notice as [`Recorder::stop`].
    pub fn cancel(&mut self) -> Option<Notice> {
        match self.state {
            RecorderState::Idle => None,
            RecorderState::Recording(_) => self.stop().ok(),
            RecorderState::Scanning | RecorderState::CourtSelected(_) => {
                self.enter(RecorderState::Idle);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::scan_courts, AppErrorKind};
    use pretty_assertions::assert_eq;

    fn court() -> ScanCourt {
        scan_courts().remove(0)
    }

    #[test]
    fn full_flow_visits_every_state_in_order() {
        let mut rec = Recorder::new();
        let mut seen = vec![rec.phase()];

        rec.start_scan().unwrap();
        seen.push(rec.phase());
        let detected = rec.scan_complete(court()).unwrap();
        seen.push(rec.phase());
        let started = rec.start_recording().unwrap();
        seen.push(rec.phase());
        rec.recording_elapsed().unwrap();
        seen.push(rec.phase());

        assert_eq!(
            seen,
            vec![
                RecorderPhase::Idle,
                RecorderPhase::Scanning,
                RecorderPhase::CourtSelected,
                RecorderPhase::Recording,
                RecorderPhase::Idle,
            ]
        );
        assert_eq!(detected.title, "Court Detected!");
        assert_eq!(detected.description, "Found Court 1 at Elite Padel Club");
        assert_eq!(started.description, "Now recording on Court 1");
    }

    #[test]
    fn cannot_skip_from_idle_to_recording() {
        let mut rec = Recorder::new();
        let err = rec.start_recording().unwrap_err();
        assert_eq!(err.kind, AppErrorKind::InvalidTransition);
        assert_eq!(err.message, "cannot start recording while idle");
        assert_eq!(rec.phase(), RecorderPhase::Idle);
        assert_eq!(rec.epoch(), 0);
    }

    #[test]
    fn scan_result_ignored_unless_scanning() {
        let mut rec = Recorder::new();
        assert!(rec.scan_complete(court()).is_err());
        rec.select_court(court()).unwrap();
        assert!(rec.scan_complete(court()).is_err());
        assert_eq!(rec.phase(), RecorderPhase::CourtSelected);
    }

    #[test]
    fn failed_scan_returns_to_idle() {
        let mut rec = Recorder::new();
        rec.start_scan().unwrap();
        let epoch = rec.epoch();

        let notice = rec.scan_failed().unwrap();
        assert_eq!(notice.title, "No Court Found");
        assert_eq!(rec.phase(), RecorderPhase::Idle);
        assert_ne!(rec.epoch(), epoch);

        rec.start_scan().unwrap();
        assert_eq!(rec.phase(), RecorderPhase::Scanning);
    }

    #[test]
    fn scan_failure_ignored_unless_scanning() {
        let mut rec = Recorder::new();
        let err = rec.scan_failed().unwrap_err();
        assert_eq!(err.kind, AppErrorKind::InvalidTransition);
        assert_eq!(rec.epoch(), 0);
    }

    #[test]
    fn manual_selection_and_change_court() {
        let mut rec = Recorder::new();
        let notice = rec.select_court(court()).unwrap();
        assert_eq!(notice, Notice::success("Court Selected", "Ready to record on Court 1"));
        assert_eq!(rec.court().map(|c| c.id.as_str()), Some("court-1"));

        rec.change_court().unwrap();
        assert_eq!(rec.phase(), RecorderPhase::Idle);
        assert!(rec.court().is_none());
    }

    #[test]
    fn stop_surfaces_saved_notice() {
        let mut rec = Recorder::new();
        rec.select_court(court()).unwrap();
        rec.start_recording().unwrap();
        let notice = rec.stop().unwrap();
        assert_eq!(notice.title, "Recording Stopped");
        assert_eq!(rec.phase(), RecorderPhase::Idle);
        assert!(rec.stop().is_err());
    }

    #[test]
    fn cancel_resets_from_any_state() {
        let mut rec = Recorder::new();
        rec.start_scan().unwrap();
        assert_eq!(rec.cancel(), None);
        assert_eq!(rec.phase(), RecorderPhase::Idle);

        rec.select_court(court()).unwrap();
        assert_eq!(rec.cancel(), None);
        assert_eq!(rec.phase(), RecorderPhase::Idle);
    }

    #[test]
    fn cancel_while_recording_reports_saved_match() {
        let mut rec = Recorder::new();
        rec.select_court(court()).unwrap();
        rec.start_recording().unwrap();
        let notice = rec.cancel().unwrap();
        assert_eq!(notice.title, "Recording Stopped");
        assert_eq!(rec.phase(), RecorderPhase::Idle);
    }

    #[test]
    fn cancel_when_idle_keeps_epoch() {
        let mut rec = Recorder::new();
        assert_eq!(rec.cancel(), None);
        assert_eq!(rec.epoch(), 0);
    }

    #[test]
    fn stale_timer_is_detectable_by_epoch() {
        let mut rec = Recorder::new();
        rec.start_scan().unwrap();
        let first_scan = rec.epoch();

        let _ = rec.cancel();
        rec.start_scan().unwrap();

        assert_ne!(rec.epoch(), first_scan);
        assert_eq!(rec.phase(), RecorderPhase::Scanning);
    }
}
