//! Host-facing adapter around the repeater engine.
//!
//! Mirrors how a plugin host drives the effect: ports are bound one at a
//! time, the control value arrives as a float, and `run` fires once per
//! processing cycle. The engine itself keeps no state between cycles.

use crate::descriptor::Port;
use crate::engine::repeat_held;
use crate::types::{CopyRange, EngineError};

/// One effect instance with its bound ports.
#[derive(Debug, Clone)]
pub struct Ringer {
    range: CopyRange,
    copies: Option<f32>,
    input: Option<Vec<f32>>,
    output: Option<Vec<f32>>,
}

impl Ringer {
    pub fn new(range: CopyRange) -> Self {
        Self {
            range,
            copies: None,
            input: None,
            output: None,
        }
    }

    pub fn range(&self) -> CopyRange {
        self.range
    }

    /// Host control values arrive as floats; the integer reading happens
    /// at run time, the way a host honouring an integer port hint does.
    pub fn set_copies(&mut self, value: f32) {
        self.copies = Some(value);
    }

    pub fn bind_input(&mut self, samples: Vec<f32>) {
        self.input = Some(samples);
    }

    pub fn bind_output(&mut self, samples: Vec<f32>) {
        self.output = Some(samples);
    }

    pub fn output(&self) -> Option<&[f32]> {
        self.output.as_deref()
    }

    pub fn take_output(&mut self) -> Option<Vec<f32>> {
        self.output.take()
    }

    /// One processing cycle over the bound ports.
    pub fn run(&mut self) -> Result<(), EngineError> {
        let input = self
            .input
            .as_deref()
            .ok_or(EngineError::MissingBuffer(Port::Input))?;
        let output = self
            .output
            .as_deref_mut()
            .ok_or(EngineError::MissingBuffer(Port::Output))?;
        repeat_held(input, output, marshal_copies(self.copies, self.range), self.range)
    }

    /// Stateless one-shot over caller-owned buffers; the path a real-time
    /// caller uses once its buffers are settled.
    pub fn process(&self, input: &[f32], output: &mut [f32]) -> Result<(), EngineError> {
        repeat_held(input, output, marshal_copies(self.copies, self.range), self.range)
    }
}

impl Default for Ringer {
    fn default() -> Self {
        Self::new(CopyRange::production())
    }
}

/// Read the float control as an integer, truncating toward zero. An unset
/// control falls back to the low default a host would seed it with.
fn marshal_copies(control: Option<f32>, range: CopyRange) -> i64 {
    match control {
        Some(value) => value as i64,
        None => range.low_default() as i64,
    }
}
