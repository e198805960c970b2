//! Playback sinks for decoded narration audio.
//!
//! Playback is fire-and-forget: `play` returns as soon as the buffer has been
//! handed to the device. Overlapping calls play concurrently.

use std::sync::Arc;
use thiserror::Error;

use super::pcm::PcmBuffer;
use crate::config::AudioConfig;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("No audio output device available: {0}")]
    NoDevice(String),

    #[error("Playback failed: {0}")]
    Playback(String),
}

/// Destination for decoded narration audio.
pub trait AudioSink: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Start playing `buffer`. Must not block until playback ends.
    fn play(&self, buffer: PcmBuffer) -> Result<(), AudioError>;
}

/// Sink that discards audio. Used when playback is disabled or unavailable.
#[derive(Debug, Default)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn name(&self) -> &'static str {
        "null"
    }

    fn play(&self, buffer: PcmBuffer) -> Result<(), AudioError> {
        tracing::debug!(
            frames = buffer.frame_count(),
            seconds = buffer.duration_secs(),
            "Audio playback disabled, dropping narration"
        );
        Ok(())
    }
}

/// Sink playing through the default output device.
///
/// Each call opens its own output stream on a dedicated thread, because the
/// stream handle cannot cross threads and must outlive the playback.
#[cfg(feature = "audio")]
#[derive(Debug, Default)]
pub struct DeviceSink;

#[cfg(feature = "audio")]
impl AudioSink for DeviceSink {
    fn name(&self) -> &'static str {
        "device"
    }

    fn play(&self, buffer: PcmBuffer) -> Result<(), AudioError> {
        if buffer.is_empty() {
            return Ok(());
        }

        let (ready_tx, ready_rx) = std::sync::mpsc::channel::<Result<(), AudioError>>();
        std::thread::spawn(move || {
            let (_stream, handle) = match rodio::OutputStream::try_default() {
                Ok(pair) => pair,
                Err(e) => {
                    let _ = ready_tx.send(Err(AudioError::NoDevice(e.to_string())));
                    return;
                }
            };
            let sink = match rodio::Sink::try_new(&handle) {
                Ok(sink) => sink,
                Err(e) => {
                    let _ = ready_tx.send(Err(AudioError::Playback(e.to_string())));
                    return;
                }
            };

            let source = rodio::buffer::SamplesBuffer::new(
                buffer.channels(),
                buffer.sample_rate(),
                buffer.interleaved(),
            );
            sink.append(source);
            let _ = ready_tx.send(Ok(()));
            sink.sleep_until_end();
            tracing::debug!(seconds = buffer.duration_secs(), "Narration finished");
        });

        ready_rx
            .recv()
            .map_err(|_| AudioError::Playback("playback thread exited early".to_string()))?
    }
}

/// Pick the sink matching the configuration and compiled features.
pub fn build_sink(config: &AudioConfig) -> Arc<dyn AudioSink> {
    if !config.enabled {
        tracing::info!("Audio narration disabled by config");
        return Arc::new(NullSink);
    }

    #[cfg(feature = "audio")]
    {
        Arc::new(DeviceSink)
    }

    #[cfg(not(feature = "audio"))]
    {
        tracing::info!("Built without the `audio` feature; narration is silent");
        Arc::new(NullSink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_config_yields_null_sink() {
        let config = AudioConfig {
            enabled: false,
            ..AudioConfig::default()
        };
        assert_eq!(build_sink(&config).name(), "null");
    }

    #[test]
    fn null_sink_accepts_any_buffer() {
        let buffer = PcmBuffer::decode_le16(&[0, 0, 1, 0], 24_000, 1);
        assert!(NullSink.play(buffer).is_ok());
    }
}
