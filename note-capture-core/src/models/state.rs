/// Recording session state machine.
///
/// State transitions:
/// ```text
/// idle → recording → idle
/// ```
///
/// Start and stop are mutually exclusive by construction: the controller
/// rejects a start while recording and treats a stop while idle as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingState {
    Idle,
    Recording,
}

impl RecordingState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_recording(&self) -> bool {
        matches!(self, Self::Recording)
    }
}
