//! Core types for the ringrep sample-repeat effect

use anyhow::{ensure, Result};
use serde::Deserialize;
use thiserror::Error;

use crate::descriptor::Port;

/// Inclusive bounds for the copy-count control.
///
/// The effect and its offline harness ship with different bounds
/// ([5, 200] vs [5, 500]), so the pair travels as a value rather than a
/// hardcoded constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyRange {
    min: u32,
    max: u32,
}

impl CopyRange {
    pub fn new(min: u32, max: u32) -> Result<Self> {
        ensure!(min >= 1, "Minimum copy count must be at least 1, got: {}", min);
        ensure!(
            max >= min,
            "Maximum copy count {} must be >= minimum {}",
            max,
            min
        );
        Ok(Self { min, max })
    }

    /// The range the effect advertises to hosts.
    pub const fn production() -> Self {
        Self { min: 5, max: 200 }
    }

    /// The wider range the offline harness accepts.
    pub const fn extended() -> Self {
        Self { min: 5, max: 500 }
    }

    pub const fn min(&self) -> u32 {
        self.min
    }

    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Clamp a raw control reading into the range.
    ///
    /// Total over all `i64` values (negative and huge readings included)
    /// and idempotent.
    pub fn clamp(&self, raw: i64) -> usize {
        if raw < self.min as i64 {
            self.min as usize
        } else if raw > self.max as i64 {
            self.max as usize
        } else {
            raw as usize
        }
    }

    /// The value a host seeds an unset control with: the "low" default
    /// between the bounds, rounded to an integer.
    pub fn low_default(&self) -> u32 {
        (0.75 * self.min as f64 + 0.25 * self.max as f64).round() as u32
    }
}

impl Default for CopyRange {
    fn default() -> Self {
        Self::production()
    }
}

/// Runtime-configurable clamp bounds parsed from JSON input
#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeRange {
    #[serde(alias = "minimum", alias = "minCopies")]
    pub min: u32,
    #[serde(alias = "maximum", alias = "maxCopies")]
    pub max: u32,
}

impl RuntimeRange {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.min >= 1, "Range min must be at least 1");
        ensure!(
            self.max >= self.min,
            "Range max {} must be >= min {}",
            self.max,
            self.min
        );
        Ok(())
    }

    pub fn to_copy_range(&self) -> Result<CopyRange> {
        self.validate()?;
        CopyRange::new(self.min, self.max)
    }
}

/// Failures the repeater engine reports instead of writing.
///
/// Both are recoverable: the output buffer is untouched when one of these
/// comes back, so the caller can fall back to pass-through or silence.
/// Out-of-range copy counts are never an error; they are clamped, because
/// the control originates from a continuously-adjustable host knob.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Fewer than two samples were supplied; there is nothing to repeat.
    #[error("buffer of {count} sample(s) is too short to transform")]
    InsufficientSamples { count: usize },
    /// A required port is unbound, or the bound buffers disagree in length.
    #[error("required {0} buffer is missing or unusable")]
    MissingBuffer(Port),
}
