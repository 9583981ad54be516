//! The sample repeater: the core buffer transform.
//!
//! Pure function module:
//! - Takes input/output slices and a raw copy count
//! - Writes every output slot exactly once, or nothing at all
//! - No allocation, no I/O, no logging

use crate::descriptor::Port;
use crate::types::{CopyRange, EngineError};

/// Repeat each retained input sample `copies` times into `output`,
/// advancing through the input in strides of `copies`.
///
/// The stepped repetition imprints a periodic discontinuity pattern tied to
/// the input's own amplitude movement, which lands close to a ring
/// modulator in character.
///
/// `raw_copies` is clamped into `range` before use; an out-of-range value
/// is never an error because the control may transiently read out of range
/// on a live host. When the samples remaining in the input cannot cover a
/// full run, the last reachable input sample fills every remaining output
/// slot, so the output is always written end to end.
///
/// # Arguments
/// * `input` - Source samples; its length is the sample count for the call
/// * `output` - Destination buffer of the same length as `input`
/// * `raw_copies` - Requested copy count, clamped before use
/// * `range` - Clamp bounds for the copy count
///
/// # Returns
/// `Ok(())` once `output` is fully written. On `Err`, `output` has not
/// been touched.
///
/// # Examples
/// ```
/// use ringrep::engine::repeat_held;
/// use ringrep::types::CopyRange;
///
/// let input = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let mut output = [0.0f32; 7];
/// let range = CopyRange::new(1, 16).unwrap();
///
/// repeat_held(&input, &mut output, 3, range).unwrap();
/// assert_eq!(output, [0.0, 0.0, 0.0, 3.0, 3.0, 3.0, 6.0]);
/// ```
pub fn repeat_held(
    input: &[f32],
    output: &mut [f32],
    raw_copies: i64,
    range: CopyRange,
) -> Result<(), EngineError> {
    let sample_count = input.len();
    if sample_count <= 1 {
        return Err(EngineError::InsufficientSamples {
            count: sample_count,
        });
    }
    if output.len() != sample_count {
        return Err(EngineError::MissingBuffer(Port::Output));
    }

    let copies = range.clamp(raw_copies);

    let mut in_index = 0;
    let mut out_index = 0;
    while in_index < sample_count {
        let held = input[in_index];
        // in_index < sample_count here, so this cannot underflow.
        let remaining = sample_count - in_index;
        if remaining <= copies {
            // Tail fill: the held sample cannot complete a full run, so it
            // covers every remaining output slot.
            output[out_index..].fill(held);
            break;
        }
        output[out_index..out_index + copies].fill(held);
        out_index += copies;
        in_index += copies;
    }

    Ok(())
}
