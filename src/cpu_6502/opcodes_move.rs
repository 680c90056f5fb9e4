//! Load, store, register-transfer, and stack operations.

use crate::cpu_6502::{Cpu6502, StatusFlag};
use crate::operand::Operand;

/// LDA
/// Function: A <- M
/// Flags: N Z
pub fn lda(cpu: &mut Cpu6502, operand: Operand) {
    cpu.a = operand.value_u8();
    cpu.update_zero_and_negative(cpu.a);
}

/// LDX
/// Function: X <- M
/// Flags: N Z
pub fn ldx(cpu: &mut Cpu6502, operand: Operand) {
    cpu.x = operand.value_u8();
    cpu.update_zero_and_negative(cpu.x);
}

/// LDY
/// Function: Y <- M
/// Flags: N Z
pub fn ldy(cpu: &mut Cpu6502, operand: Operand) {
    cpu.y = operand.value_u8();
    cpu.update_zero_and_negative(cpu.y);
}

/// STA
/// Function: M <- A
/// Flags: none
pub fn sta(cpu: &mut Cpu6502, operand: Operand) {
    cpu.bus.write(operand.address, cpu.a);
}

/// STX
/// Function: M <- X
/// Flags: none
pub fn stx(cpu: &mut Cpu6502, operand: Operand) {
    cpu.bus.write(operand.address, cpu.x);
}

/// STY
/// Function: M <- Y
/// Flags: none
pub fn sty(cpu: &mut Cpu6502, operand: Operand) {
    cpu.bus.write(operand.address, cpu.y);
}

/// TAX
/// Function: X <- A
/// Flags: N Z
pub fn tax(cpu: &mut Cpu6502, _operand: Operand) {
    cpu.x = cpu.a;
    cpu.update_zero_and_negative(cpu.x);
}

/// TAY
/// Function: Y <- A
/// Flags: N Z
pub fn tay(cpu: &mut Cpu6502, _operand: Operand) {
    cpu.y = cpu.a;
    cpu.update_zero_and_negative(cpu.y);
}

/// TXA
/// Function: A <- X
/// Flags: N Z
pub fn txa(cpu: &mut Cpu6502, _operand: Operand) {
    cpu.a = cpu.x;
    cpu.update_zero_and_negative(cpu.a);
}

/// TYA
/// Function: A <- Y
/// Flags: N Z
pub fn tya(cpu: &mut Cpu6502, _operand: Operand) {
    cpu.a = cpu.y;
    cpu.update_zero_and_negative(cpu.a);
}

/// TSX
/// Function: X <- SP
/// Flags: N Z
pub fn tsx(cpu: &mut Cpu6502, _operand: Operand) {
    cpu.x = cpu.sp;
    cpu.update_zero_and_negative(cpu.x);
}

/// TXS
/// Function: SP <- X
/// Flags: none
pub fn txs(cpu: &mut Cpu6502, _operand: Operand) {
    cpu.sp = cpu.x;
}

/// PHA
/// Function: (SP) <- A, SP <- SP - 1
/// Flags: none
pub fn pha(cpu: &mut Cpu6502, _operand: Operand) {
    cpu.push_u8(cpu.a);
}

/// PLA
/// Function: SP <- SP + 1, A <- (SP)
/// Flags: N Z
pub fn pla(cpu: &mut Cpu6502, _operand: Operand) {
    cpu.a = cpu.pull_u8();
    cpu.update_zero_and_negative(cpu.a);
}

/// PHP
/// Function: (SP) <- SR | B, SP <- SP - 1
/// Flags: none (the pushed copy always has B set; the in-register SR is
/// unaffected)
pub fn php(cpu: &mut Cpu6502, _operand: Operand) {
    cpu.push_u8(cpu.p | StatusFlag::Break as u8 | StatusFlag::Unused as u8);
}

/// PLP
/// Function: SP <- SP + 1, SR <- (SP) with U forced to 1 and B forced to 0
/// Flags: all (restored from the stack)
///
/// The B bit is never actually held in the register -- it exists only in
/// pushed copies (see PHP above) -- so the popped byte has it masked back
/// out here rather than carried into `cpu.p`.
pub fn plp(cpu: &mut Cpu6502, _operand: Operand) {
    cpu.p = (cpu.pull_u8() & !(StatusFlag::Break as u8)) | StatusFlag::Unused as u8;
}
