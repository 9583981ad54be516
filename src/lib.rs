//! Sample-repeat ring effect: each retained input sample is repeated N
//! times while the input advances in strides of N, giving the output a
//! ring-modulator character.

pub mod audio;
pub mod descriptor;
pub mod engine;
pub mod instance;
pub mod trace;
pub mod types;

pub use engine::repeat_held;
pub use instance::Ringer;
pub use types::{CopyRange, EngineError};
