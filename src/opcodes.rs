//! The dispatch tables: two parallel 256-entry arrays indexed by the
//! opcode byte, one giving the addressing-mode resolver and one giving the
//! operation, per the design fulcrum in DESIGN.md. Opcodes with no
//! documented meaning route to `und`/`imp`, which is a total, silent no-op
//! -- undocumented/illegal opcodes are explicitly out of scope.

use crate::cpu_6502::addressing::{abs, abx, aby, acc, idx, idy, imm, imp, ind, rel, zpg, zpx, zpy};
use crate::cpu_6502::opcodes_jump::{
    beq, bcc, bcs, bmi, bne, bpl, brk, bvc, bvs, clc, cld, cli, clv, jmp, jsr, nop, rti, rts, sec,
    sed, sei, und,
};
use crate::cpu_6502::opcodes_logical::{
    adc, and, asl, bit, cmp, cpx, cpy, dec, dex, dey, eor, inc, inx, iny, lsr, ora, rol, ror, sbc,
};
use crate::cpu_6502::opcodes_move::{
    lda, ldx, ldy, pha, php, pla, plp, sta, stx, sty, tax, tay, tsx, txa, txs, tya,
};
use crate::cpu_6502::Cpu6502;
use crate::operand::Operand;

pub type AddressingFn = fn(&mut Cpu6502) -> Operand;
pub type OperationFn = fn(&mut Cpu6502, Operand);

#[rustfmt::skip]
pub const ADDRESSING_TABLE: [AddressingFn; 256] = [
    // 0x00                                                                       0x0F
    imp, idx, imp, imp, imp, zpg, zpg, imp, imp, imm, acc, imp, imp, abs, abs, imp,
    // 0x10
    rel, idy, imp, imp, imp, zpx, zpx, imp, imp, aby, imp, imp, imp, abx, abx, imp,
    // 0x20
    abs, idx, imp, imp, zpg, zpg, zpg, imp, imp, imm, acc, imp, abs, abs, abs, imp,
    // 0x30
    rel, idy, imp, imp, imp, zpx, zpx, imp, imp, aby, imp, imp, imp, abx, abx, imp,
    // 0x40
    imp, idx, imp, imp, imp, zpg, zpg, imp, imp, imm, acc, imp, abs, abs, abs, imp,
    // 0x50
    rel, idy, imp, imp, imp, zpx, zpx, imp, imp, aby, imp, imp, imp, abx, abx, imp,
    // 0x60
    imp, idx, imp, imp, imp, zpg, zpg, imp, imp, imm, acc, imp, ind, abs, abs, imp,
    // 0x70
    rel, idy, imp, imp, imp, zpx, zpx, imp, imp, aby, imp, imp, imp, abx, abx, imp,
    // 0x80
    imp, idx, imp, imp, zpg, zpg, zpg, imp, imp, imp, imp, imp, abs, abs, abs, imp,
    // 0x90
    rel, idy, imp, imp, zpx, zpx, zpy, imp, imp, aby, imp, imp, imp, abx, imp, imp,
    // 0xA0
    imm, idx, imm, imp, zpg, zpg, zpg, imp, imp, imm, imp, imp, abs, abs, abs, imp,
    // 0xB0
    rel, idy, imp, imp, zpx, zpx, zpy, imp, imp, aby, imp, imp, abx, abx, aby, imp,
    // 0xC0
    imm, idx, imp, imp, zpg, zpg, zpg, imp, imp, imm, imp, imp, abs, abs, abs, imp,
    // 0xD0
    rel, idy, imp, imp, imp, zpx, zpx, imp, imp, aby, imp, imp, imp, abx, abx, imp,
    // 0xE0
    imm, idx, imp, imp, zpg, zpg, zpg, imp, imp, imm, imp, imp, abs, abs, abs, imp,
    // 0xF0
    rel, idy, imp, imp, imp, zpx, zpx, imp, imp, aby, imp, imp, imp, abx, abx, imp,
];

#[rustfmt::skip]
pub const OPERATION_TABLE: [OperationFn; 256] = [
    // 0x00
    brk, ora, und, und, und, ora, asl, und, php, ora, asl, und, und, ora, asl, und,
    // 0x10
    bpl, ora, und, und, und, ora, asl, und, clc, ora, und, und, und, ora, asl, und,
    // 0x20
    jsr, and, und, und, bit, and, rol, und, plp, and, rol, und, bit, and, rol, und,
    // 0x30
    bmi, and, und, und, und, and, rol, und, sec, and, und, und, und, and, rol, und,
    // 0x40
    rti, eor, und, und, und, eor, lsr, und, pha, eor, lsr, und, jmp, eor, lsr, und,
    // 0x50
    bvc, eor, und, und, und, eor, lsr, und, cli, eor, und, und, und, eor, lsr, und,
    // 0x60
    rts, adc, und, und, und, adc, ror, und, pla, adc, ror, und, jmp, adc, ror, und,
    // 0x70
    bvs, adc, und, und, und, adc, ror, und, sei, adc, und, und, und, adc, ror, und,
    // 0x80
    und, sta, und, und, sty, sta, stx, und, dey, und, txa, und, sty, sta, stx, und,
    // 0x90
    bcc, sta, und, und, sty, sta, stx, und, tya, sta, txs, und, und, sta, und, und,
    // 0xA0
    ldy, lda, ldx, und, ldy, lda, ldx, und, tay, lda, tax, und, ldy, lda, ldx, und,
    // 0xB0
    bcs, lda, und, und, ldy, lda, ldx, und, clv, lda, tsx, und, ldy, lda, ldx, und,
    // 0xC0
    cpy, cmp, und, und, cpy, cmp, dec, und, iny, cmp, dex, und, cpy, cmp, dec, und,
    // 0xD0
    bne, cmp, und, und, und, cmp, dec, und, cld, cmp, und, und, und, cmp, dec, und,
    // 0xE0
    cpx, sbc, und, und, cpx, sbc, inc, und, inx, sbc, nop, und, cpx, sbc, inc, und,
    // 0xF0
    beq, sbc, und, und, und, sbc, inc, und, sed, sbc, und, und, und, sbc, inc, und,
];

#[rustfmt::skip]
pub const OPCODE_NAMES: [&str; 256] = [
    "BRK", "ORA", "UND", "UND", "UND", "ORA", "ASL", "UND", "PHP", "ORA", "ASL", "UND", "UND", "ORA", "ASL", "UND",
    "BPL", "ORA", "UND", "UND", "UND", "ORA", "ASL", "UND", "CLC", "ORA", "UND", "UND", "UND", "ORA", "ASL", "UND",
    "JSR", "AND", "UND", "UND", "BIT", "AND", "ROL", "UND", "PLP", "AND", "ROL", "UND", "BIT", "AND", "ROL", "UND",
    "BMI", "AND", "UND", "UND", "UND", "AND", "ROL", "UND", "SEC", "AND", "UND", "UND", "UND", "AND", "ROL", "UND",
    "RTI", "EOR", "UND", "UND", "UND", "EOR", "LSR", "UND", "PHA", "EOR", "LSR", "UND", "JMP", "EOR", "LSR", "UND",
    "BVC", "EOR", "UND", "UND", "UND", "EOR", "LSR", "UND", "CLI", "EOR", "UND", "UND", "UND", "EOR", "LSR", "UND",
    "RTS", "ADC", "UND", "UND", "UND", "ADC", "ROR", "UND", "PLA", "ADC", "ROR", "UND", "JMP", "ADC", "ROR", "UND",
    "BVS", "ADC", "UND", "UND", "UND", "ADC", "ROR", "UND", "SEI", "ADC", "UND", "UND", "UND", "ADC", "ROR", "UND",
    "UND", "STA", "UND", "UND", "STY", "STA", "STX", "UND", "DEY", "UND", "TXA", "UND", "STY", "STA", "STX", "UND",
    "BCC", "STA", "UND", "UND", "STY", "STA", "STX", "UND", "TYA", "STA", "TXS", "UND", "UND", "STA", "UND", "UND",
    "LDY", "LDA", "LDX", "UND", "LDY", "LDA", "LDX", "UND", "TAY", "LDA", "TAX", "UND", "LDY", "LDA", "LDX", "UND",
    "BCS", "LDA", "UND", "UND", "LDY", "LDA", "LDX", "UND", "CLV", "LDA", "TSX", "UND", "LDY", "LDA", "LDX", "UND",
    "CPY", "CMP", "UND", "UND", "CPY", "CMP", "DEC", "UND", "INY", "CMP", "DEX", "UND", "CPY", "CMP", "DEC", "UND",
    "BNE", "CMP", "UND", "UND", "UND", "CMP", "DEC", "UND", "CLD", "CMP", "UND", "UND", "UND", "CMP", "DEC", "UND",
    "CPX", "SBC", "UND", "UND", "CPX", "SBC", "INC", "UND", "INX", "SBC", "NOP", "UND", "CPX", "SBC", "INC", "UND",
    "BEQ", "SBC", "UND", "UND", "UND", "SBC", "INC", "UND", "SED", "SBC", "UND", "UND", "UND", "SBC", "INC", "UND",
];
