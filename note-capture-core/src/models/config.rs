/// Target codec for the finalized audio file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCodec {
    /// AAC in an MPEG-4 container. The default lossy codec.
    Aac,
    /// MP3, for backends without an AAC encoder.
    Mp3,
    /// Uncompressed PCM WAV. Skips the encode step entirely.
    Wav,
}

impl AudioCodec {
    /// File extension for the finalized recording.
    pub fn file_extension(&self) -> &'static str {
        match self {
            Self::Aac => "m4a",
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
        }
    }

    pub fn is_lossy(&self) -> bool {
        !matches!(self, Self::Wav)
    }
}

/// Encoder quality tier, mapped to a bitrate by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EncoderQuality {
    Low,
    Medium,
    High,
}

/// Configuration for a recording session.
///
/// Defaults match voice-note capture: mono, 12 kHz, AAC at the high
/// quality tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecorderConfig {
    /// Target sample rate in Hz (default: 12000).
    pub sample_rate: u32,

    /// Number of channels (default: 1).
    pub channels: u16,

    /// Codec for the finalized file (default: AAC).
    pub codec: AudioCodec,

    /// Encoder quality tier (default: high).
    pub quality: EncoderQuality,
}

impl RecorderConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.sample_rate == 0 {
            return Err("sample rate must be positive".into());
        }
        if ![1, 2].contains(&self.channels) {
            return Err(format!("unsupported channel count: {}", self.channels));
        }
        Ok(())
    }
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            sample_rate: 12_000,
            channels: 1,
            codec: AudioCodec::Aac,
            quality: EncoderQuality::High,
        }
    }
}
