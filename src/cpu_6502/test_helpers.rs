#![macro_use]

use crate::bus::Bus;
use crate::constants::{memory_range, InterruptVectors, ROM_SIZE};
use crate::cpu_6502::{Cpu6502, StatusFlag, RESET_STATUS_FLAG};

pub const P: u8 = RESET_STATUS_FLAG;
pub const C: u8 = StatusFlag::Carry as u8;
pub const Z: u8 = StatusFlag::Zero as u8;
pub const I: u8 = StatusFlag::InterruptDisable as u8;
pub const D: u8 = StatusFlag::Decimal as u8;
pub const B: u8 = StatusFlag::Break as u8;
pub const V: u8 = StatusFlag::Overflow as u8;
pub const N: u8 = StatusFlag::Negative as u8;

/// Program origin used by every test below: inside RAM, clear of the zero
/// page and the stack, so a program can freely poke both.
pub const ORIGIN: u16 = 0x0200;

/// Builds a ROM image whose reset vector points at `ORIGIN`, loads `bytes`
/// into RAM starting there, constructs a `Cpu6502` (which runs reset), and
/// executes exactly `steps` fetch/decode/execute cycles.
pub fn run_program(bytes: &[u8], steps: u32) -> Cpu6502 {
    let mut bus = Bus::new();
    let mut rom = vec![0u8; ROM_SIZE];
    let vector_offset = (InterruptVectors::ResetVector as u16 - memory_range::ROM.min) as usize;
    rom[vector_offset] = (ORIGIN & 0xFF) as u8;
    rom[vector_offset + 1] = (ORIGIN >> 8) as u8;
    bus.load_rom(&rom);
    for (i, &byte) in bytes.iter().enumerate() {
        bus.write(ORIGIN.wrapping_add(i as u16), byte);
    }
    let mut cpu = Cpu6502::new(bus);
    cpu.run_batch(steps);
    cpu
}

/// Two's complement of a u8, handy for spelling out expected negative
/// results without writing out the hex by hand.
pub fn negative(n: u8) -> u8 {
    !n + 1
}

pub fn assert_register_a(bytes: &[u8], steps: u32, value: u8, status: u8) {
    let cpu = run_program(bytes, steps);
    if cpu.a != value {
        panic!(
            "\nExpected register A to be {:#x} ({:#010b}) but it was {:#x} ({:#010b})",
            value, value, cpu.a, cpu.a
        );
    }
    assert_status(&cpu, status);
}

pub fn assert_register_x(bytes: &[u8], steps: u32, value: u8, status: u8) {
    let cpu = run_program(bytes, steps);
    if cpu.x != value {
        panic!(
            "\nExpected register X to be {:#x} ({:#010b}) but it was {:#x} ({:#010b})",
            value, value, cpu.x, cpu.x
        );
    }
    assert_status(&cpu, status);
}

pub fn assert_register_y(bytes: &[u8], steps: u32, value: u8, status: u8) {
    let cpu = run_program(bytes, steps);
    if cpu.y != value {
        panic!(
            "\nExpected register Y to be {:#x} ({:#010b}) but it was {:#x} ({:#010b})",
            value, value, cpu.y, cpu.y
        );
    }
    assert_status(&cpu, status);
}

pub fn assert_status(cpu: &Cpu6502, value: u8) {
    let mut mismatches = String::new();
    let flags: [(&str, StatusFlag); 7] = [
        ("Carry", StatusFlag::Carry),
        ("Zero", StatusFlag::Zero),
        ("InterruptDisable", StatusFlag::InterruptDisable),
        ("Decimal", StatusFlag::Decimal),
        ("Break", StatusFlag::Break),
        ("Overflow", StatusFlag::Overflow),
        ("Negative", StatusFlag::Negative),
    ];
    for (name, flag) in flags {
        let expected = value & flag as u8 != 0;
        let actual = cpu.is_flag_set(flag);
        if expected != actual {
            mismatches.push_str(&format!(
                "Expected StatusFlag::{} to be {} but received {}\n",
                name, expected, actual
            ));
        }
    }
    if cpu.p != value {
        panic!(
            "\nExpected cpu status {:#010b} to match {:#010b}\n{}",
            cpu.p, value, mismatches
        );
    }
}

#[macro_export]
macro_rules! register_a {
    ($name:ident, $a:expr, $p:expr, $steps:expr, $bytes:expr) => {
        #[test]
        fn $name() {
            assert_register_a($bytes, $steps, $a, $p);
        }
    };
}

#[macro_export]
macro_rules! register_x {
    ($name:ident, $x:expr, $p:expr, $steps:expr, $bytes:expr) => {
        #[test]
        fn $name() {
            assert_register_x($bytes, $steps, $x, $p);
        }
    };
}

#[macro_export]
macro_rules! register_y {
    ($name:ident, $y:expr, $p:expr, $steps:expr, $bytes:expr) => {
        #[test]
        fn $name() {
            assert_register_y($bytes, $steps, $y, $p);
        }
    };
}

#[macro_export]
macro_rules! status {
    ($name:ident, $p:expr, $steps:expr, $bytes:expr) => {
        #[test]
        fn $name() {
            let cpu = run_program($bytes, $steps);
            assert_status(&cpu, $p);
        }
    };
}

#[macro_export]
macro_rules! memory_at {
    ($name:ident, $addr:expr, $expected:expr, $steps:expr, $bytes:expr) => {
        #[test]
        fn $name() {
            let mut cpu = run_program($bytes, $steps);
            let actual = cpu.bus.read($addr);
            assert_eq!(
                actual, $expected,
                "expected memory at {:#06x} to be {:#04x} but got {:#04x}",
                $addr, $expected, actual
            );
        }
    };
}
