//! A MOS 6502 CPU interpreter wired as the original Apple II: 48 KB of RAM,
//! a 12 KB system ROM, and a minimal memory-mapped keyboard. The terminal
//! video renderer, the keyboard input driver, and the outer host loop that
//! paces batches are external collaborators -- this crate gives them pure
//! helpers (`keyboard`, `video`) and a bus to poke at, not a UI.
#![allow(clippy::new_without_default)]

pub mod bus;
pub mod constants;
pub mod cpu_6502;
pub mod keyboard;
pub mod operand;
pub mod opcodes;
pub mod rom;
pub mod video;

pub use bus::Bus;
pub use cpu_6502::Cpu6502;
pub use operand::Operand;
