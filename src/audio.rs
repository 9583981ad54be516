//! WAV ingest and egress for the offline harness.
//!
//! Files are held planar (one sample vector per channel) so the repeater
//! can run over each channel independently.

use anyhow::{ensure, Context, Result};
use std::path::Path;

use crate::engine::repeat_held;
use crate::types::{CopyRange, EngineError};

/// Planar audio as read from disk.
#[derive(Debug, Clone)]
pub struct WavAudio {
    /// One sample vector per channel, all the same length.
    pub channels: Vec<Vec<f32>>,
    pub sample_rate: u32,
}

impl WavAudio {
    pub fn frames(&self) -> usize {
        self.channels.first().map(|c| c.len()).unwrap_or(0)
    }
}

/// Read a WAV file into planar f32 channels.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<WavAudio> {
    let path = path.as_ref();
    let mut reader = hound::WavReader::open(path)
        .with_context(|| format!("Failed to open WAV file: {}", path.display()))?;
    let spec = reader.spec();
    let channel_count = spec.channels as usize;
    ensure!(channel_count > 0, "WAV file has no channels: {}", path.display());

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<Result<_, _>>()
            .context("Failed to read float samples")?,
        hound::SampleFormat::Int => {
            let scale = 1.0 / (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 * scale))
                .collect::<Result<_, _>>()
                .context("Failed to read integer samples")?
        }
    };

    // Drop any trailing partial frame so every channel ends up equal length.
    let frame_count = interleaved.len() / channel_count;
    let mut channels = vec![Vec::with_capacity(frame_count); channel_count];
    for (idx, sample) in interleaved
        .into_iter()
        .take(frame_count * channel_count)
        .enumerate()
    {
        channels[idx % channel_count].push(sample);
    }

    Ok(WavAudio {
        channels,
        sample_rate: spec.sample_rate,
    })
}

/// Encode planar audio to 16-bit PCM WAV and write it to file.
pub fn write_wav<P: AsRef<Path>>(audio: &WavAudio, path: P) -> Result<()> {
    let path = path.as_ref();
    let spec = hound::WavSpec {
        channels: audio.channels.len() as u16,
        sample_rate: audio.sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)
        .with_context(|| format!("Failed to create WAV file: {}", path.display()))?;

    for frame in 0..audio.frames() {
        for channel in &audio.channels {
            // Clamp to [-1.0, 1.0] and scale to i16 range
            let clamped = channel[frame].clamp(-1.0, 1.0);
            let i16_sample = (clamped * 32767.0) as i16;

            writer
                .write_sample(i16_sample)
                .context("Failed to write audio sample")?;
        }
    }

    writer.finalize().context("Failed to finalize WAV file")?;

    Ok(())
}

/// Apply the repeater to every channel independently, into fresh buffers
/// of the same length.
pub fn process_wav(
    audio: &WavAudio,
    raw_copies: i64,
    range: CopyRange,
) -> Result<WavAudio, EngineError> {
    if audio.channels.is_empty() {
        return Err(EngineError::InsufficientSamples { count: 0 });
    }

    let mut channels = Vec::with_capacity(audio.channels.len());
    for input in &audio.channels {
        let mut output = vec![0.0; input.len()];
        repeat_held(input, &mut output, raw_copies, range)?;
        channels.push(output);
    }

    Ok(WavAudio {
        channels,
        sample_rate: audio.sample_rate,
    })
}
