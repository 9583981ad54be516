//! Static metadata describing the effect to hosts.
//!
//! The record never changes after construction, so it lives here as
//! `const` data with no load/unload lifecycle.

use std::fmt;

use crate::types::CopyRange;

/// Unique effect identifier, assigned from the plugin id registry.
pub const UNIQUE_ID: u32 = 4303;

/// Stable port indices, in host declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Port {
    Copies,
    Input,
    Output,
}

impl Port {
    pub const fn index(self) -> usize {
        match self {
            Port::Copies => 0,
            Port::Input => 1,
            Port::Output => 2,
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Port::Copies => "copies",
            Port::Input => "input",
            Port::Output => "output",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortDirection {
    In,
    Out,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortKind {
    Control,
    Audio,
}

/// Per-port metadata a host reads before binding buffers.
#[derive(Debug, Clone, Copy)]
pub struct PortInfo {
    pub port: Port,
    pub name: &'static str,
    pub direction: PortDirection,
    pub kind: PortKind,
    /// Inclusive (lower, upper) bounds hint for control ports.
    pub bounds: Option<(f32, f32)>,
    /// Hosts should treat the control as integer-valued.
    pub integer: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct EffectDescriptor {
    pub unique_id: u32,
    pub label: &'static str,
    pub name: &'static str,
    pub maker: &'static str,
    pub copyright: &'static str,
    pub ports: [PortInfo; 3],
}

impl EffectDescriptor {
    pub fn port(&self, port: Port) -> &PortInfo {
        &self.ports[port.index()]
    }
}

pub const DESCRIPTOR: EffectDescriptor = EffectDescriptor {
    unique_id: UNIQUE_ID,
    label: "Ringer",
    name: "Ringer",
    maker: "ringrep",
    copyright: "None",
    ports: [
        PortInfo {
            port: Port::Copies,
            name: "Copies (samples)",
            direction: PortDirection::In,
            kind: PortKind::Control,
            bounds: Some((
                CopyRange::production().min() as f32,
                CopyRange::production().max() as f32,
            )),
            integer: true,
        },
        PortInfo {
            port: Port::Input,
            name: "Input",
            direction: PortDirection::In,
            kind: PortKind::Audio,
            bounds: None,
            integer: false,
        },
        PortInfo {
            port: Port::Output,
            name: "Output",
            direction: PortDirection::Out,
            kind: PortKind::Audio,
            bounds: None,
            integer: false,
        },
    ],
};
