//! Branches, jumps, subroutine linkage, flag-set/clear instructions, and
//! the no-op/undocumented-opcode fallback.

use crate::constants::InterruptVectors;
use crate::cpu_6502::{Cpu6502, StatusFlag};
use crate::operand::Operand;

fn branch(cpu: &mut Cpu6502, operand: Operand, taken: bool) {
    if taken {
        cpu.pc = cpu.pc.wrapping_add(operand.address);
    }
}

/// BPL - branch if N clear
pub fn bpl(cpu: &mut Cpu6502, operand: Operand) {
    let taken = !cpu.is_flag_set(StatusFlag::Negative);
    branch(cpu, operand, taken);
}

/// BMI - branch if N set
pub fn bmi(cpu: &mut Cpu6502, operand: Operand) {
    let taken = cpu.is_flag_set(StatusFlag::Negative);
    branch(cpu, operand, taken);
}

/// BVC - branch if V clear
pub fn bvc(cpu: &mut Cpu6502, operand: Operand) {
    let taken = !cpu.is_flag_set(StatusFlag::Overflow);
    branch(cpu, operand, taken);
}

/// BVS - branch if V set
pub fn bvs(cpu: &mut Cpu6502, operand: Operand) {
    let taken = cpu.is_flag_set(StatusFlag::Overflow);
    branch(cpu, operand, taken);
}

/// BCC - branch if C clear
pub fn bcc(cpu: &mut Cpu6502, operand: Operand) {
    let taken = !cpu.is_flag_set(StatusFlag::Carry);
    branch(cpu, operand, taken);
}

/// BCS - branch if C set
pub fn bcs(cpu: &mut Cpu6502, operand: Operand) {
    let taken = cpu.is_flag_set(StatusFlag::Carry);
    branch(cpu, operand, taken);
}

/// BNE - branch if Z clear
pub fn bne(cpu: &mut Cpu6502, operand: Operand) {
    let taken = !cpu.is_flag_set(StatusFlag::Zero);
    branch(cpu, operand, taken);
}

/// BEQ - branch if Z set
pub fn beq(cpu: &mut Cpu6502, operand: Operand) {
    let taken = cpu.is_flag_set(StatusFlag::Zero);
    branch(cpu, operand, taken);
}

/// JMP
/// Function: PC <- address
pub fn jmp(cpu: &mut Cpu6502, operand: Operand) {
    cpu.pc = operand.address;
}

/// JSR
/// Function: push PC-1 (the last byte of this 3-byte instruction), PC <- address
pub fn jsr(cpu: &mut Cpu6502, operand: Operand) {
    cpu.push_u16(cpu.pc.wrapping_sub(1));
    cpu.pc = operand.address;
}

/// RTS
/// Function: PC <- pull() + 1
pub fn rts(cpu: &mut Cpu6502, _operand: Operand) {
    let addr = cpu.pull_u16();
    cpu.pc = addr.wrapping_add(1);
}

/// RTI
/// Function: SR <- pull() with U forced to 1 and B forced to 0, PC <- pull()
pub fn rti(cpu: &mut Cpu6502, _operand: Operand) {
    cpu.p = (cpu.pull_u8() & !(StatusFlag::Break as u8)) | StatusFlag::Unused as u8;
    cpu.pc = cpu.pull_u16();
}

/// BRK
/// Function: consume the padding byte, push PC then SR|BREAK, set I,
/// PC <- ($FFFE)
pub fn brk(cpu: &mut Cpu6502, _operand: Operand) {
    cpu.pc = cpu.pc.wrapping_add(1);
    cpu.push_u16(cpu.pc);
    cpu.push_u8(cpu.p | StatusFlag::Break as u8 | StatusFlag::Unused as u8);
    cpu.set_flag(StatusFlag::InterruptDisable, true);
    let lo = cpu.bus.read(InterruptVectors::IrqBrkVector as u16);
    let hi = cpu.bus.read(InterruptVectors::IrqBrkVector as u16 + 1);
    cpu.pc = u16::from_le_bytes([lo, hi]);
}

pub fn clc(cpu: &mut Cpu6502, _operand: Operand) {
    cpu.set_flag(StatusFlag::Carry, false);
}

pub fn sec(cpu: &mut Cpu6502, _operand: Operand) {
    cpu.set_flag(StatusFlag::Carry, true);
}

pub fn cli(cpu: &mut Cpu6502, _operand: Operand) {
    cpu.set_flag(StatusFlag::InterruptDisable, false);
}

pub fn sei(cpu: &mut Cpu6502, _operand: Operand) {
    cpu.set_flag(StatusFlag::InterruptDisable, true);
}

pub fn cld(cpu: &mut Cpu6502, _operand: Operand) {
    cpu.set_flag(StatusFlag::Decimal, false);
}

pub fn sed(cpu: &mut Cpu6502, _operand: Operand) {
    cpu.set_flag(StatusFlag::Decimal, true);
}

pub fn clv(cpu: &mut Cpu6502, _operand: Operand) {
    cpu.set_flag(StatusFlag::Overflow, false);
}

/// NOP - does nothing.
pub fn nop(_cpu: &mut Cpu6502, _operand: Operand) {}

/// UND - the fallback for every opcode with no documented meaning. Paired
/// with the `imp` addressing mode in the dispatch tables, so it consumes
/// only the opcode byte already fetched, never additional operand bytes.
pub fn und(_cpu: &mut Cpu6502, _operand: Operand) {}
