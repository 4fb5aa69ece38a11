/*!
## Rust Machine Module

This Rust module links and runs Vault Runner programs against a robot.

*/

/// Index into a program's token sequence.
pub type Address = usize;

/// Steps a run may take unless [`Options`] says otherwise.
pub const DEFAULT_INSTRUCTION_BUDGET: usize = 10_000;

mod extension;
mod frame;
mod link;
mod program;
mod runtime;
mod stack;

#[cfg(test)]
mod tests;

pub use extension::Extensions;
pub use extension::Scan;
pub use frame::Frame;
pub use link::matching_end;
pub use link::Link;
pub use program::Program;
pub use program::Report;
pub use runtime::Halt;
pub use runtime::Interpreter;
pub use runtime::Options;
pub use runtime::Step;
pub use stack::Stack;
