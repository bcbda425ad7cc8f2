use crate::models::error::CaptureError;

/// Mode requested when acquiring the device audio session.
///
/// The capture lifecycle only ever needs recording-only access; the enum
/// leaves room for richer session modes without widening the contract now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMode {
    /// Recording-only access to the microphone.
    Record,
}

/// An exclusive, revocable grant of access to the device audio input.
///
/// The grant is scoped to the lifetime of the value: dropping it releases
/// the underlying session. Acquiring the capability and opening the
/// recorder happen together, and both are released together on every exit
/// path, including error paths.
pub trait AudioCapability {
    /// The mode this capability was acquired with.
    fn mode(&self) -> CaptureMode;
}

/// Source of audio capabilities, implemented by platform backends.
///
/// Equivalent to activating the platform audio session in record mode.
/// Acquisition may block briefly while the device grants access.
pub trait AudioCapabilityProvider {
    fn acquire(&self, mode: CaptureMode) -> Result<Box<dyn AudioCapability>, CaptureError>;
}
