use super::Address;
use crate::lang::token::Sensor;

/// ## Control stack entry
///
/// Only repeating blocks leave a frame behind. IF runs its body at most once
/// and needs nothing to resume.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Loop {
        body_start: Address,
        end: Address,
        remaining: u32,
    },
    While {
        start: Address,
        end: Address,
        sensor: Sensor,
    },
}

impl Frame {
    /// The END that owns this frame.
    pub fn end(&self) -> Address {
        match self {
            Frame::Loop { end, .. } | Frame::While { end, .. } => *end,
        }
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Frame::Loop { end, remaining, .. } => write!(f, "LOOP({}, {})", end, remaining),
            Frame::While { end, sensor, .. } => write!(f, "WHILE({}, {})", end, sensor),
        }
    }
}
