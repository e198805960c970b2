//! Decoding of raw 16-bit little-endian PCM as returned by the speech model.

/// Divisor mapping an `i16` sample onto [-1.0, 1.0).
const I16_SCALE: f32 = 32768.0;

/// Decoded audio, one plane of normalized samples per channel.
#[derive(Debug, Clone, PartialEq)]
pub struct PcmBuffer {
    sample_rate: u32,
    planes: Vec<Vec<f32>>,
}

impl PcmBuffer {
    /// Decode interleaved signed 16-bit little-endian samples.
    ///
    /// A trailing odd byte and a trailing partial frame are ignored.
    /// `channels` of zero is treated as mono.
    pub fn decode_le16(bytes: &[u8], sample_rate: u32, channels: u16) -> Self {
        let channels = channels.max(1) as usize;
        let samples: Vec<i16> = bytes
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        let frame_count = samples.len() / channels;

        let planes = (0..channels)
            .map(|channel| {
                (0..frame_count)
                    .map(|frame| samples[frame * channels + channel] as f32 / I16_SCALE)
                    .collect()
            })
            .collect();

        Self {
            sample_rate,
            planes,
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.planes.len() as u16
    }

    pub fn frame_count(&self) -> usize {
        self.planes.first().map(Vec::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.frame_count() == 0
    }

    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.planes.get(index).map(Vec::as_slice)
    }

    /// Samples re-interleaved frame by frame, the layout audio devices expect.
    pub fn interleaved(&self) -> Vec<f32> {
        let frames = self.frame_count();
        let mut out = Vec::with_capacity(frames * self.planes.len());
        for frame in 0..frames {
            for plane in &self.planes {
                out.push(plane[frame]);
            }
        }
        out
    }

    /// Playback length in seconds.
    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frame_count() as f32 / self.sample_rate as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn le(samples: &[i16]) -> Vec<u8> {
        samples.iter().flat_map(|s| s.to_le_bytes()).collect()
    }

    #[test]
    fn mono_samples_are_normalized() {
        let buffer = PcmBuffer::decode_le16(&le(&[0, 16384, -32768, 32767]), 24_000, 1);
        assert_eq!(buffer.channels(), 1);
        assert_eq!(buffer.frame_count(), 4);
        let plane = buffer.channel(0).unwrap();
        assert_eq!(plane[0], 0.0);
        assert_eq!(plane[1], 0.5);
        assert_eq!(plane[2], -1.0);
        assert!(plane[3] < 1.0 && plane[3] > 0.9999);
    }

    #[test]
    fn little_endian_byte_order() {
        // 0x0100 little-endian = 1
        let buffer = PcmBuffer::decode_le16(&[0x01, 0x00], 24_000, 1);
        assert_eq!(buffer.channel(0).unwrap()[0], 1.0 / 32768.0);
    }

    #[test]
    fn stereo_is_deinterleaved_per_frame() {
        let buffer = PcmBuffer::decode_le16(&le(&[100, -100, 200, -200]), 24_000, 2);
        assert_eq!(buffer.frame_count(), 2);
        assert_eq!(buffer.channel(0).unwrap(), &[100.0 / 32768.0, 200.0 / 32768.0]);
        assert_eq!(buffer.channel(1).unwrap(), &[-100.0 / 32768.0, -200.0 / 32768.0]);
        assert_eq!(
            buffer.interleaved(),
            vec![100.0 / 32768.0, -100.0 / 32768.0, 200.0 / 32768.0, -200.0 / 32768.0]
        );
    }

    #[test]
    fn odd_byte_and_partial_frame_are_dropped() {
        let mut bytes = le(&[1, 2, 3]);
        bytes.push(0x7f);
        let buffer = PcmBuffer::decode_le16(&bytes, 24_000, 2);
        assert_eq!(buffer.frame_count(), 1);
    }

    #[test]
    fn empty_input_has_no_frames() {
        let buffer = PcmBuffer::decode_le16(&[], 24_000, 1);
        assert!(buffer.is_empty());
        assert_eq!(buffer.duration_secs(), 0.0);
    }

    #[test]
    fn duration_follows_sample_rate() {
        let buffer = PcmBuffer::decode_le16(&vec![0u8; 48_000], 24_000, 1);
        assert_eq!(buffer.duration_secs(), 1.0);
    }
}
