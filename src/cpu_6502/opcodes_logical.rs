//! Logic, compare, shift/rotate, increment/decrement, and the two
//! arithmetic-with-carry instructions. ADC/SBC carry the NMOS decimal-mode
//! quirk verbatim: flags are derived from the binary result, and the BCD
//! adjust is applied afterward. Do not "fix" this -- it matches hardware.

use crate::cpu_6502::{Cpu6502, StatusFlag};
use crate::operand::Operand;

/// Writes a shift/rotate result back to its target (accumulator or
/// memory) and updates N,Z -- mirrors the source's shared `makeUpdates`.
fn write_shift_result(cpu: &mut Cpu6502, operand: Operand, result: u8) {
    if operand.set_acc {
        cpu.a = result;
    } else {
        cpu.bus.write(operand.address, result);
    }
    cpu.update_zero_and_negative(result);
}

/// ORA
/// Function: A <- A | M
/// Flags: N Z
pub fn ora(cpu: &mut Cpu6502, operand: Operand) {
    cpu.a |= operand.value_u8();
    cpu.update_zero_and_negative(cpu.a);
}

/// AND
/// Function: A <- A & M
/// Flags: N Z
pub fn and(cpu: &mut Cpu6502, operand: Operand) {
    cpu.a &= operand.value_u8();
    cpu.update_zero_and_negative(cpu.a);
}

/// EOR
/// Function: A <- A ^ M
/// Flags: N Z
pub fn eor(cpu: &mut Cpu6502, operand: Operand) {
    cpu.a ^= operand.value_u8();
    cpu.update_zero_and_negative(cpu.a);
}

/// BIT
/// Function: Z <- (A & M) == 0, N <- bit7(M), V <- bit6(M)
/// Flags: N V Z
pub fn bit(cpu: &mut Cpu6502, operand: Operand) {
    let value = operand.value_u8();
    cpu.set_flag(StatusFlag::Zero, cpu.a & value == 0);
    cpu.set_flag(StatusFlag::Negative, value & 0x80 != 0);
    cpu.set_flag(StatusFlag::Overflow, value & 0x40 != 0);
}

/// CMP
/// Function: N Z C <- A - M
/// Flags: N Z C
pub fn cmp(cpu: &mut Cpu6502, operand: Operand) {
    let value = operand.value_u8();
    cpu.update_zero_and_negative(cpu.a.wrapping_sub(value));
    cpu.set_flag(StatusFlag::Carry, cpu.a >= value);
}

/// CPX
/// Function: N Z C <- X - M
/// Flags: N Z C
pub fn cpx(cpu: &mut Cpu6502, operand: Operand) {
    let value = operand.value_u8();
    cpu.update_zero_and_negative(cpu.x.wrapping_sub(value));
    cpu.set_flag(StatusFlag::Carry, cpu.x >= value);
}

/// CPY
/// Function: N Z C <- Y - M
/// Flags: N Z C
pub fn cpy(cpu: &mut Cpu6502, operand: Operand) {
    let value = operand.value_u8();
    cpu.update_zero_and_negative(cpu.y.wrapping_sub(value));
    cpu.set_flag(StatusFlag::Carry, cpu.y >= value);
}

/// INC
/// Function: M <- M + 1
/// Flags: N Z
pub fn inc(cpu: &mut Cpu6502, operand: Operand) {
    let result = operand.value_u8().wrapping_add(1);
    cpu.bus.write(operand.address, result);
    cpu.update_zero_and_negative(result);
}

/// INX
/// Function: X <- X + 1
/// Flags: N Z
pub fn inx(cpu: &mut Cpu6502, _operand: Operand) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_zero_and_negative(cpu.x);
}

/// INY
/// Function: Y <- Y + 1
/// Flags: N Z
pub fn iny(cpu: &mut Cpu6502, _operand: Operand) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_zero_and_negative(cpu.y);
}

/// DEC
/// Function: M <- M - 1
/// Flags: N Z
pub fn dec(cpu: &mut Cpu6502, operand: Operand) {
    let result = operand.value_u8().wrapping_sub(1);
    cpu.bus.write(operand.address, result);
    cpu.update_zero_and_negative(result);
}

/// DEX
/// Function: X <- X - 1
/// Flags: N Z
pub fn dex(cpu: &mut Cpu6502, _operand: Operand) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_zero_and_negative(cpu.x);
}

/// DEY
/// Function: Y <- Y - 1
/// Flags: N Z
pub fn dey(cpu: &mut Cpu6502, _operand: Operand) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_zero_and_negative(cpu.y);
}

/// ASL
/// Function: C <- bit7(M), M <- M << 1
/// Flags: N Z C
pub fn asl(cpu: &mut Cpu6502, operand: Operand) {
    let result = operand.value << 1;
    cpu.set_flag(StatusFlag::Carry, result & 0xFF00 != 0);
    write_shift_result(cpu, operand, (result & 0xFF) as u8);
}

/// LSR
/// Function: C <- bit0(M), M <- M >> 1
/// Flags: N Z C
pub fn lsr(cpu: &mut Cpu6502, operand: Operand) {
    cpu.set_flag(StatusFlag::Carry, operand.value & 1 != 0);
    write_shift_result(cpu, operand, ((operand.value >> 1) & 0xFF) as u8);
}

/// ROL
/// Function: C,M <- M << 1 | old_C
/// Flags: N Z C
pub fn rol(cpu: &mut Cpu6502, operand: Operand) {
    let carry_in = cpu.is_flag_set(StatusFlag::Carry) as u16;
    let result = (operand.value << 1) | carry_in;
    cpu.set_flag(StatusFlag::Carry, result & 0x0100 != 0);
    write_shift_result(cpu, operand, (result & 0xFF) as u8);
}

/// ROR
/// Function: C,M <- M >> 1 | old_C << 7
/// Flags: N Z C
pub fn ror(cpu: &mut Cpu6502, operand: Operand) {
    let carry_in = cpu.is_flag_set(StatusFlag::Carry) as u16;
    let result = (operand.value >> 1) | (carry_in << 7);
    cpu.set_flag(StatusFlag::Carry, operand.value & 1 != 0);
    write_shift_result(cpu, operand, (result & 0xFF) as u8);
}

/// ADC
/// Function: A <- A + M + C, with NMOS decimal-mode BCD adjust when D is set
/// Flags: N V Z C
pub fn adc(cpu: &mut Cpu6502, operand: Operand) {
    let value = operand.value_u8() as u16;
    let carry_in = cpu.is_flag_set(StatusFlag::Carry) as u16;
    let mut result = (cpu.a as u16).wrapping_add(value).wrapping_add(carry_in);
    cpu.update_zero_and_negative(result as u8);
    let overflow = (result ^ cpu.a as u16) & (result ^ value) & 0x80 != 0;
    cpu.set_flag(StatusFlag::Overflow, overflow);
    if cpu.is_flag_set(StatusFlag::Decimal) {
        result = result.wrapping_add(
            (((result.wrapping_add(0x66)) ^ cpu.a as u16 ^ value) >> 3 & 0x22).wrapping_mul(3),
        );
    }
    cpu.set_flag(StatusFlag::Carry, result & 0xFF00 != 0);
    cpu.a = (result & 0xFF) as u8;
}

/// SBC
/// Function: ADC with the operand's bits inverted; same decimal-mode
/// adjust (plus an extra -0x66 on the inverted operand before the add)
/// Flags: N V Z C
pub fn sbc(cpu: &mut Cpu6502, operand: Operand) {
    let mut value = operand.value_u8() as u16;
    value ^= 0xFF;
    if cpu.is_flag_set(StatusFlag::Decimal) {
        value = value.wrapping_sub(0x66);
    }
    let carry_in = cpu.is_flag_set(StatusFlag::Carry) as u16;
    let mut result = (cpu.a as u16).wrapping_add(value).wrapping_add(carry_in);
    cpu.update_zero_and_negative(result as u8);
    let overflow = (result ^ cpu.a as u16) & (result ^ value) & 0x80 != 0;
    cpu.set_flag(StatusFlag::Overflow, overflow);
    if cpu.is_flag_set(StatusFlag::Decimal) {
        result = result.wrapping_add(
            (((result.wrapping_add(0x66)) ^ cpu.a as u16 ^ value) >> 3 & 0x22).wrapping_mul(3),
        );
    }
    cpu.set_flag(StatusFlag::Carry, result & 0xFF00 != 0);
    cpu.a = (result & 0xFF) as u8;
}
