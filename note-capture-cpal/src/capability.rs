//! Probe-by-open microphone availability check.
//!
//! cpal exposes no explicit permission API, so acquisition resolves the
//! default input device and reads its configuration. A device that cannot
//! be opened is indistinguishable from access being denied in the OS
//! privacy settings, and both map to `AudioSession`.

use cpal::traits::{DeviceTrait, HostTrait};

use note_capture_core::{AudioCapability, AudioCapabilityProvider, CaptureError, CaptureMode};

/// Capability token backed by a successful device probe.
///
/// cpal grants no OS-level exclusive lease; exclusivity is enforced by the
/// controller holding at most one of these per session.
pub struct CpalAudioCapability {
    mode: CaptureMode,
    device_name: String,
}

impl CpalAudioCapability {
    pub fn device_name(&self) -> &str {
        &self.device_name
    }
}

impl AudioCapability for CpalAudioCapability {
    fn mode(&self) -> CaptureMode {
        self.mode
    }
}

/// Acquires audio input access by probing the default capture device.
#[derive(Default)]
pub struct CpalCapabilityProvider;

impl CpalCapabilityProvider {
    pub fn new() -> Self {
        Self
    }
}

impl AudioCapabilityProvider for CpalCapabilityProvider {
    fn acquire(&self, mode: CaptureMode) -> Result<Box<dyn AudioCapability>, CaptureError> {
        let host = cpal::default_host();
        let device = host
            .default_input_device()
            .ok_or(CaptureError::DeviceNotAvailable)?;

        device.default_input_config().map_err(|e| {
            CaptureError::AudioSession(format!("cannot open default input device: {}", e))
        })?;

        let device_name = device
            .name()
            .unwrap_or_else(|_| "unknown input device".to_string());
        log::debug!("audio capability acquired on {}", device_name);

        Ok(Box::new(CpalAudioCapability { mode, device_name }))
    }
}
