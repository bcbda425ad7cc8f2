use std::path::PathBuf;
use std::sync::Arc;

use uuid::Uuid;

use crate::models::config::RecorderConfig;
use crate::models::error::CaptureError;
use crate::models::state::RecordingState;
use crate::traits::audio_capability::{AudioCapability, AudioCapabilityProvider, CaptureMode};
use crate::traits::media_probe::MediaProbe;
use crate::traits::recorder::{RecorderHandle, RecorderProvider};
use crate::traits::session_delegate::SessionDelegate;
use crate::traits::storage_resolver::StorageResolver;

/// Controls the start/stop lifecycle of one audio capture session.
///
/// All collaborators are passed at construction; the controller performs
/// no ambient lookups. It is bound to the UI thread and drives exactly one
/// recording at a time.
///
/// Invariant: the capability guard, the recorder handle, and the target
/// file reference are all present iff the state is `Recording`. A failed
/// start leaves no half-initialized state behind.
pub struct RecordingController {
    capability_provider: Arc<dyn AudioCapabilityProvider>,
    recorder_provider: Arc<dyn RecorderProvider>,
    probe: Arc<dyn MediaProbe>,
    storage: Arc<dyn StorageResolver>,
    delegate: Arc<dyn SessionDelegate>,
    config: RecorderConfig,

    state: RecordingState,
    capability: Option<Box<dyn AudioCapability>>,
    recorder: Option<Box<dyn RecorderHandle>>,
    target_file: Option<PathBuf>,
}

impl RecordingController {
    pub fn new(
        capability_provider: Arc<dyn AudioCapabilityProvider>,
        recorder_provider: Arc<dyn RecorderProvider>,
        probe: Arc<dyn MediaProbe>,
        storage: Arc<dyn StorageResolver>,
        delegate: Arc<dyn SessionDelegate>,
        config: RecorderConfig,
    ) -> Self {
        Self {
            capability_provider,
            recorder_provider,
            probe,
            storage,
            delegate,
            config,
            state: RecordingState::Idle,
            capability: None,
            recorder: None,
            target_file: None,
        }
    }

    pub fn state(&self) -> RecordingState {
        self.state
    }

    pub fn is_recording(&self) -> bool {
        self.state.is_recording()
    }

    /// Acquire the microphone, open a fresh target file, and begin capture.
    ///
    /// On any failure the session stays idle, nothing is retained, and the
    /// error is also logged so the host can surface a plain indicator.
    pub fn start_recording(&mut self) -> Result<(), CaptureError> {
        if self.state.is_recording() {
            return Err(CaptureError::AlreadyRecording);
        }

        match self.try_start() {
            Ok(()) => Ok(()),
            Err(e) => {
                log::warn!("failed to start recording: {}", e);
                Err(e)
            }
        }
    }

    fn try_start(&mut self) -> Result<(), CaptureError> {
        self.config.validate().map_err(CaptureError::RecorderOpen)?;

        let capability = self.capability_provider.acquire(CaptureMode::Record)?;

        let dir = self.storage.documents_dir()?;
        let file = dir.join(format!(
            "{}.{}",
            Uuid::new_v4(),
            self.config.codec.file_extension()
        ));

        let mut recorder = self.recorder_provider.open(&file, &self.config)?;
        recorder.start()?;

        // Commit only once capture is actually running; until here every
        // acquired resource is a local and is released on early return.
        self.capability = Some(capability);
        self.recorder = Some(recorder);
        self.target_file = Some(file);
        self.state = RecordingState::Recording;

        log::debug!("recording started");
        Ok(())
    }

    /// Finalize the capture, hand the recording off as an audio note, and
    /// ask the host to dismiss the recording screen.
    ///
    /// Calling this while idle is a no-op apart from clearing stale
    /// references. A duration that cannot be read suppresses note creation
    /// but never the dismissal.
    pub fn stop_recording(&mut self) {
        if self.state.is_idle() {
            self.capability = None;
            self.recorder = None;
            self.target_file = None;
            return;
        }

        if let Some(mut recorder) = self.recorder.take() {
            if let Err(e) = recorder.stop() {
                log::warn!("recorder failed to finalize cleanly: {}", e);
            }
        }
        self.capability = None;
        self.state = RecordingState::Idle;

        if let Some(file) = self.target_file.take() {
            match self.probe.read_duration(&file) {
                Ok(duration_secs) => {
                    self.delegate.on_audio_note_captured(&file, duration_secs);
                }
                Err(e) => {
                    // The capture itself succeeded; losing the note beats
                    // failing the whole stop.
                    log::warn!("skipping audio note for {}: {}", file.display(), e);
                }
            }
        }

        self.delegate.request_dismiss();
    }

    /// Release the capture resource and capability without creating a note
    /// or requesting dismissal.
    ///
    /// Host teardown hook for abnormal exit paths (screen dismissed while
    /// recording). Also runs on drop.
    pub fn teardown(&mut self) {
        if self.state.is_recording() {
            log::warn!("recording session torn down while active; discarding capture");
        }
        if let Some(mut recorder) = self.recorder.take() {
            if let Err(e) = recorder.stop() {
                log::debug!("recorder stop during teardown: {}", e);
            }
        }
        self.capability = None;
        self.target_file = None;
        self.state = RecordingState::Idle;
    }
}

impl Drop for RecordingController {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::{Cell, RefCell};
    use std::path::Path;
    use std::rc::Rc;

    /// Interactions recorded across all stubs in one test.
    #[derive(Default)]
    struct Recorded {
        acquired_modes: RefCell<Vec<CaptureMode>>,
        opened: RefCell<Vec<PathBuf>>,
        recorder_stops: Cell<usize>,
        captured: RefCell<Vec<(PathBuf, f64)>>,
        dismissals: Cell<usize>,
    }

    struct StubCapability;

    impl AudioCapability for StubCapability {
        fn mode(&self) -> CaptureMode {
            CaptureMode::Record
        }
    }

    struct StubCapabilityProvider {
        recorded: Rc<Recorded>,
        fail: bool,
    }

    impl AudioCapabilityProvider for StubCapabilityProvider {
        fn acquire(&self, mode: CaptureMode) -> Result<Box<dyn AudioCapability>, CaptureError> {
            self.recorded.acquired_modes.borrow_mut().push(mode);
            if self.fail {
                Err(CaptureError::AudioSession("denied".into()))
            } else {
                Ok(Box::new(StubCapability))
            }
        }
    }

    struct StubRecorder {
        recorded: Rc<Recorded>,
        stopped: bool,
    }

    impl RecorderHandle for StubRecorder {
        fn start(&mut self) -> Result<(), CaptureError> {
            Ok(())
        }

        fn stop(&mut self) -> Result<(), CaptureError> {
            if !self.stopped {
                self.stopped = true;
                self.recorded.recorder_stops.set(self.recorded.recorder_stops.get() + 1);
            }
            Ok(())
        }
    }

    struct StubRecorderProvider {
        recorded: Rc<Recorded>,
        fail_open: bool,
    }

    impl RecorderProvider for StubRecorderProvider {
        fn open(
            &self,
            path: &Path,
            _config: &RecorderConfig,
        ) -> Result<Box<dyn RecorderHandle>, CaptureError> {
            if self.fail_open {
                return Err(CaptureError::RecorderOpen("busy".into()));
            }
            self.recorded.opened.borrow_mut().push(path.to_path_buf());
            Ok(Box::new(StubRecorder {
                recorded: Rc::clone(&self.recorded),
                stopped: false,
            }))
        }
    }

    struct StubProbe {
        result: Result<f64, CaptureError>,
    }

    impl MediaProbe for StubProbe {
        fn read_duration(&self, _file: &Path) -> Result<f64, CaptureError> {
            self.result.clone()
        }
    }

    struct TempStorage;

    impl StorageResolver for TempStorage {
        fn documents_dir(&self) -> Result<PathBuf, CaptureError> {
            Ok(std::env::temp_dir())
        }
    }

    struct StubDelegate {
        recorded: Rc<Recorded>,
    }

    impl SessionDelegate for StubDelegate {
        fn on_audio_note_captured(&self, file: &Path, duration_secs: f64) {
            self.recorded
                .captured
                .borrow_mut()
                .push((file.to_path_buf(), duration_secs));
        }

        fn request_dismiss(&self) {
            self.recorded.dismissals.set(self.recorded.dismissals.get() + 1);
        }
    }

    struct Fixture {
        recorded: Rc<Recorded>,
        controller: RecordingController,
    }

    fn fixture(
        capability_fails: bool,
        open_fails: bool,
        probe_result: Result<f64, CaptureError>,
    ) -> Fixture {
        let recorded = Rc::new(Recorded::default());
        let controller = RecordingController::new(
            Arc::new(StubCapabilityProvider {
                recorded: Rc::clone(&recorded),
                fail: capability_fails,
            }),
            Arc::new(StubRecorderProvider {
                recorded: Rc::clone(&recorded),
                fail_open: open_fails,
            }),
            Arc::new(StubProbe {
                result: probe_result,
            }),
            Arc::new(TempStorage),
            Arc::new(StubDelegate {
                recorded: Rc::clone(&recorded),
            }),
            RecorderConfig::default(),
        );
        Fixture {
            recorded,
            controller,
        }
    }

    #[test]
    fn start_then_stop_returns_to_idle() {
        let mut f = fixture(false, false, Ok(2.5));

        f.controller.start_recording().unwrap();
        assert!(f.controller.is_recording());
        assert_eq!(
            *f.recorded.acquired_modes.borrow(),
            vec![CaptureMode::Record]
        );

        f.controller.stop_recording();
        assert_eq!(f.controller.state(), RecordingState::Idle);
        assert_eq!(f.recorded.recorder_stops.get(), 1);
    }

    #[test]
    fn stop_while_idle_is_a_noop() {
        let mut f = fixture(false, false, Ok(2.5));

        f.controller.stop_recording();
        f.controller.stop_recording();

        assert_eq!(f.controller.state(), RecordingState::Idle);
        assert_eq!(f.recorded.recorder_stops.get(), 0);
        assert!(f.recorded.captured.borrow().is_empty());
        assert_eq!(f.recorded.dismissals.get(), 0);
    }

    #[test]
    fn consecutive_sessions_use_fresh_target_files() {
        let mut f = fixture(false, false, Ok(1.0));

        f.controller.start_recording().unwrap();
        f.controller.stop_recording();
        f.controller.start_recording().unwrap();
        f.controller.stop_recording();

        let opened = f.recorded.opened.borrow();
        assert_eq!(opened.len(), 2);
        assert_ne!(opened[0], opened[1]);
    }

    #[test]
    fn successful_stop_emits_exactly_one_note() {
        let mut f = fixture(false, false, Ok(2.5));

        f.controller.start_recording().unwrap();
        f.controller.stop_recording();

        let captured = f.recorded.captured.borrow();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].0, f.recorded.opened.borrow()[0]);
        assert!(captured[0].1 >= 0.0);
        assert_eq!(f.recorded.dismissals.get(), 1);
    }

    #[test]
    fn unreadable_duration_skips_note_but_still_dismisses() {
        let mut f = fixture(
            false,
            false,
            Err(CaptureError::MetadataRead("truncated file".into())),
        );

        f.controller.start_recording().unwrap();
        f.controller.stop_recording();

        assert!(f.recorded.captured.borrow().is_empty());
        assert_eq!(f.recorded.dismissals.get(), 1);
        assert_eq!(f.controller.state(), RecordingState::Idle);
    }

    #[test]
    fn failed_capability_acquisition_leaves_idle() {
        let mut f = fixture(true, false, Ok(1.0));

        let err = f.controller.start_recording().unwrap_err();
        assert!(matches!(err, CaptureError::AudioSession(_)));
        assert_eq!(f.controller.state(), RecordingState::Idle);
        assert!(f.recorded.opened.borrow().is_empty());
    }

    #[test]
    fn failed_recorder_open_leaves_idle_and_recoverable() {
        let mut f = fixture(false, true, Ok(1.0));

        assert!(f.controller.start_recording().is_err());
        assert_eq!(f.controller.state(), RecordingState::Idle);

        // A stop after a failed start must not emit anything.
        f.controller.stop_recording();
        assert!(f.recorded.captured.borrow().is_empty());
        assert_eq!(f.recorded.dismissals.get(), 0);
    }

    #[test]
    fn start_while_recording_is_rejected() {
        let mut f = fixture(false, false, Ok(1.0));

        f.controller.start_recording().unwrap();
        assert_eq!(
            f.controller.start_recording(),
            Err(CaptureError::AlreadyRecording)
        );
        assert!(f.controller.is_recording());
        assert_eq!(f.recorded.opened.borrow().len(), 1);
    }

    #[test]
    fn teardown_releases_recorder_without_events() {
        let mut f = fixture(false, false, Ok(1.0));

        f.controller.start_recording().unwrap();
        f.controller.teardown();

        assert_eq!(f.controller.state(), RecordingState::Idle);
        assert_eq!(f.recorded.recorder_stops.get(), 1);
        assert!(f.recorded.captured.borrow().is_empty());
        assert_eq!(f.recorded.dismissals.get(), 0);
    }

    #[test]
    fn drop_while_recording_releases_recorder() {
        let f = fixture(false, false, Ok(1.0));
        let recorded = Rc::clone(&f.recorded);
        let mut controller = f.controller;

        controller.start_recording().unwrap();
        drop(controller);

        assert_eq!(recorded.recorder_stops.get(), 1);
        assert_eq!(recorded.dismissals.get(), 0);
    }
}
