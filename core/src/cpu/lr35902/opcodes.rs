//! Static per-opcode metadata: mnemonic, immediate-operand length and the
//! default M-cycle cost charged when the handler does not override it.
//!
//! Dispatch itself is the exhaustive `match` in `mod.rs`/`bit.rs`; these
//! tables back the diagnostic trace, operand decoding and the default
//! cycle accounting. Conditional control transfers store their not-taken
//! cost here and override with the taken cost at execution time.

/// Metadata for one opcode.
pub struct OpInfo {
    /// Disassembly template (`d8`/`d16`/`a8`/`a16`/`r8` mark immediates).
    pub mnemonic: &'static str,
    /// Immediate operand length in bytes: 0, 1 or 2.
    pub operand_len: u8,
    /// Default cost in M-cycles (1 M-cycle = 4 T-cycles).
    pub m_cycles: u8,
}

const fn op(mnemonic: &'static str, operand_len: u8, m_cycles: u8) -> OpInfo {
    OpInfo {
        mnemonic,
        operand_len,
        m_cycles,
    }
}

/// The 11 base opcodes the hardware does not define. Executing one faults.
const fn undefined() -> OpInfo {
    op("???", 0, 0)
}

/// Base instruction set (opcode fetched directly at PC).
pub static OPCODES: [OpInfo; 256] = [
    // 0x00
    op("NOP", 0, 1),
    op("LD BC,d16", 2, 3),
    op("LD (BC),A", 0, 2),
    op("INC BC", 0, 2),
    op("INC B", 0, 1),
    op("DEC B", 0, 1),
    op("LD B,d8", 1, 2),
    op("RLCA", 0, 1),
    op("LD (a16),SP", 2, 5),
    op("ADD HL,BC", 0, 2),
    op("LD A,(BC)", 0, 2),
    op("DEC BC", 0, 2),
    op("INC C", 0, 1),
    op("DEC C", 0, 1),
    op("LD C,d8", 1, 2),
    op("RRCA", 0, 1),
    // 0x10
    op("STOP", 1, 1),
    op("LD DE,d16", 2, 3),
    op("LD (DE),A", 0, 2),
    op("INC DE", 0, 2),
    op("INC D", 0, 1),
    op("DEC D", 0, 1),
    op("LD D,d8", 1, 2),
    op("RLA", 0, 1),
    op("JR r8", 1, 3),
    op("ADD HL,DE", 0, 2),
    op("LD A,(DE)", 0, 2),
    op("DEC DE", 0, 2),
    op("INC E", 0, 1),
    op("DEC E", 0, 1),
    op("LD E,d8", 1, 2),
    op("RRA", 0, 1),
    // 0x20
    op("JR NZ,r8", 1, 2),
    op("LD HL,d16", 2, 3),
    op("LD (HL+),A", 0, 2),
    op("INC HL", 0, 2),
    op("INC H", 0, 1),
    op("DEC H", 0, 1),
    op("LD H,d8", 1, 2),
    op("DAA", 0, 1),
    op("JR Z,r8", 1, 2),
    op("ADD HL,HL", 0, 2),
    op("LD A,(HL+)", 0, 2),
    op("DEC HL", 0, 2),
    op("INC L", 0, 1),
    op("DEC L", 0, 1),
    op("LD L,d8", 1, 2),
    op("CPL", 0, 1),
    // 0x30
    op("JR NC,r8", 1, 2),
    op("LD SP,d16", 2, 3),
    op("LD (HL-),A", 0, 2),
    op("INC SP", 0, 2),
    op("INC (HL)", 0, 3),
    op("DEC (HL)", 0, 3),
    op("LD (HL),d8", 1, 3),
    op("SCF", 0, 1),
    op("JR C,r8", 1, 2),
    op("ADD HL,SP", 0, 2),
    op("LD A,(HL-)", 0, 2),
    op("DEC SP", 0, 2),
    op("INC A", 0, 1),
    op("DEC A", 0, 1),
    op("LD A,d8", 1, 2),
    op("CCF", 0, 1),
    // 0x40
    op("LD B,B", 0, 1),
    op("LD B,C", 0, 1),
    op("LD B,D", 0, 1),
    op("LD B,E", 0, 1),
    op("LD B,H", 0, 1),
    op("LD B,L", 0, 1),
    op("LD B,(HL)", 0, 2),
    op("LD B,A", 0, 1),
    op("LD C,B", 0, 1),
    op("LD C,C", 0, 1),
    op("LD C,D", 0, 1),
    op("LD C,E", 0, 1),
    op("LD C,H", 0, 1),
    op("LD C,L", 0, 1),
    op("LD C,(HL)", 0, 2),
    op("LD C,A", 0, 1),
    // 0x50
    op("LD D,B", 0, 1),
    op("LD D,C", 0, 1),
    op("LD D,D", 0, 1),
    op("LD D,E", 0, 1),
    op("LD D,H", 0, 1),
    op("LD D,L", 0, 1),
    op("LD D,(HL)", 0, 2),
    op("LD D,A", 0, 1),
    op("LD E,B", 0, 1),
    op("LD E,C", 0, 1),
    op("LD E,D", 0, 1),
    op("LD E,E", 0, 1),
    op("LD E,H", 0, 1),
    op("LD E,L", 0, 1),
    op("LD E,(HL)", 0, 2),
    op("LD E,A", 0, 1),
    // 0x60
    op("LD H,B", 0, 1),
    op("LD H,C", 0, 1),
    op("LD H,D", 0, 1),
    op("LD H,E", 0, 1),
    op("LD H,H", 0, 1),
    op("LD H,L", 0, 1),
    op("LD H,(HL)", 0, 2),
    op("LD H,A", 0, 1),
    op("LD L,B", 0, 1),
    op("LD L,C", 0, 1),
    op("LD L,D", 0, 1),
    op("LD L,E", 0, 1),
    op("LD L,H", 0, 1),
    op("LD L,L", 0, 1),
    op("LD L,(HL)", 0, 2),
    op("LD L,A", 0, 1),
    // 0x70
    op("LD (HL),B", 0, 2),
    op("LD (HL),C", 0, 2),
    op("LD (HL),D", 0, 2),
    op("LD (HL),E", 0, 2),
    op("LD (HL),H", 0, 2),
    op("LD (HL),L", 0, 2),
    op("HALT", 0, 1),
    op("LD (HL),A", 0, 2),
    op("LD A,B", 0, 1),
    op("LD A,C", 0, 1),
    op("LD A,D", 0, 1),
    op("LD A,E", 0, 1),
    op("LD A,H", 0, 1),
    op("LD A,L", 0, 1),
    op("LD A,(HL)", 0, 2),
    op("LD A,A", 0, 1),
    // 0x80
    op("ADD A,B", 0, 1),
    op("ADD A,C", 0, 1),
    op("ADD A,D", 0, 1),
    op("ADD A,E", 0, 1),
    op("ADD A,H", 0, 1),
    op("ADD A,L", 0, 1),
    op("ADD A,(HL)", 0, 2),
    op("ADD A,A", 0, 1),
    op("ADC A,B", 0, 1),
    op("ADC A,C", 0, 1),
    op("ADC A,D", 0, 1),
    op("ADC A,E", 0, 1),
    op("ADC A,H", 0, 1),
    op("ADC A,L", 0, 1),
    op("ADC A,(HL)", 0, 2),
    op("ADC A,A", 0, 1),
    // 0x90
    op("SUB B", 0, 1),
    op("SUB C", 0, 1),
    op("SUB D", 0, 1),
    op("SUB E", 0, 1),
    op("SUB H", 0, 1),
    op("SUB L", 0, 1),
    op("SUB (HL)", 0, 2),
    op("SUB A", 0, 1),
    op("SBC A,B", 0, 1),
    op("SBC A,C", 0, 1),
    op("SBC A,D", 0, 1),
    op("SBC A,E", 0, 1),
    op("SBC A,H", 0, 1),
    op("SBC A,L", 0, 1),
    op("SBC A,(HL)", 0, 2),
    op("SBC A,A", 0, 1),
    // 0xA0
    op("AND B", 0, 1),
    op("AND C", 0, 1),
    op("AND D", 0, 1),
    op("AND E", 0, 1),
    op("AND H", 0, 1),
    op("AND L", 0, 1),
    op("AND (HL)", 0, 2),
    op("AND A", 0, 1),
    op("XOR B", 0, 1),
    op("XOR C", 0, 1),
    op("XOR D", 0, 1),
    op("XOR E", 0, 1),
    op("XOR H", 0, 1),
    op("XOR L", 0, 1),
    op("XOR (HL)", 0, 2),
    op("XOR A", 0, 1),
    // 0xB0
    op("OR B", 0, 1),
    op("OR C", 0, 1),
    op("OR D", 0, 1),
    op("OR E", 0, 1),
    op("OR H", 0, 1),
    op("OR L", 0, 1),
    op("OR (HL)", 0, 2),
    op("OR A", 0, 1),
    op("CP B", 0, 1),
    op("CP C", 0, 1),
    op("CP D", 0, 1),
    op("CP E", 0, 1),
    op("CP H", 0, 1),
    op("CP L", 0, 1),
    op("CP (HL)", 0, 2),
    op("CP A", 0, 1),
    // 0xC0
    op("RET NZ", 0, 2),
    op("POP BC", 0, 3),
    op("JP NZ,a16", 2, 3),
    op("JP a16", 2, 4),
    op("CALL NZ,a16", 2, 3),
    op("PUSH BC", 0, 4),
    op("ADD A,d8", 1, 2),
    op("RST 00H", 0, 4),
    op("RET Z", 0, 2),
    op("RET", 0, 4),
    op("JP Z,a16", 2, 3),
    op("PREFIX CB", 0, 1),
    op("CALL Z,a16", 2, 3),
    op("CALL a16", 2, 6),
    op("ADC A,d8", 1, 2),
    op("RST 08H", 0, 4),
    // 0xD0
    op("RET NC", 0, 2),
    op("POP DE", 0, 3),
    op("JP NC,a16", 2, 3),
    undefined(), // 0xD3
    op("CALL NC,a16", 2, 3),
    op("PUSH DE", 0, 4),
    op("SUB d8", 1, 2),
    op("RST 10H", 0, 4),
    op("RET C", 0, 2),
    op("RETI", 0, 4),
    op("JP C,a16", 2, 3),
    undefined(), // 0xDB
    op("CALL C,a16", 2, 3),
    undefined(), // 0xDD
    op("SBC A,d8", 1, 2),
    op("RST 18H", 0, 4),
    // 0xE0
    op("LDH (a8),A", 1, 3),
    op("POP HL", 0, 3),
    op("LD (C),A", 0, 2),
    undefined(), // 0xE3
    undefined(), // 0xE4
    op("PUSH HL", 0, 4),
    op("AND d8", 1, 2),
    op("RST 20H", 0, 4),
    op("ADD SP,r8", 1, 4),
    op("JP (HL)", 0, 1),
    op("LD (a16),A", 2, 4),
    undefined(), // 0xEB
    undefined(), // 0xEC
    undefined(), // 0xED
    op("XOR d8", 1, 2),
    op("RST 28H", 0, 4),
    // 0xF0
    op("LDH A,(a8)", 1, 3),
    op("POP AF", 0, 3),
    op("LD A,(C)", 0, 2),
    op("DI", 0, 1),
    undefined(), // 0xF4
    op("PUSH AF", 0, 4),
    op("OR d8", 1, 2),
    op("RST 30H", 0, 4),
    op("LD HL,SP+r8", 1, 3),
    op("LD SP,HL", 0, 2),
    op("LD A,(a16)", 2, 4),
    op("EI", 0, 1),
    undefined(), // 0xFC
    undefined(), // 0xFD
    op("CP d8", 1, 2),
    op("RST 38H", 0, 4),
];

/// CB-prefixed instruction set. All 256 entries are defined; none take an
/// immediate. Register forms cost 2 M-cycles, `(HL)` forms 4, except
/// `BIT n,(HL)` which only reads and costs 3.
pub static CB_OPCODES: [OpInfo; 256] = [
    // 0x00
    op("RLC B", 0, 2),
    op("RLC C", 0, 2),
    op("RLC D", 0, 2),
    op("RLC E", 0, 2),
    op("RLC H", 0, 2),
    op("RLC L", 0, 2),
    op("RLC (HL)", 0, 4),
    op("RLC A", 0, 2),
    op("RRC B", 0, 2),
    op("RRC C", 0, 2),
    op("RRC D", 0, 2),
    op("RRC E", 0, 2),
    op("RRC H", 0, 2),
    op("RRC L", 0, 2),
    op("RRC (HL)", 0, 4),
    op("RRC A", 0, 2),
    // 0x10
    op("RL B", 0, 2),
    op("RL C", 0, 2),
    op("RL D", 0, 2),
    op("RL E", 0, 2),
    op("RL H", 0, 2),
    op("RL L", 0, 2),
    op("RL (HL)", 0, 4),
    op("RL A", 0, 2),
    op("RR B", 0, 2),
    op("RR C", 0, 2),
    op("RR D", 0, 2),
    op("RR E", 0, 2),
    op("RR H", 0, 2),
    op("RR L", 0, 2),
    op("RR (HL)", 0, 4),
    op("RR A", 0, 2),
    // 0x20
    op("SLA B", 0, 2),
    op("SLA C", 0, 2),
    op("SLA D", 0, 2),
    op("SLA E", 0, 2),
    op("SLA H", 0, 2),
    op("SLA L", 0, 2),
    op("SLA (HL)", 0, 4),
    op("SLA A", 0, 2),
    op("SRA B", 0, 2),
    op("SRA C", 0, 2),
    op("SRA D", 0, 2),
    op("SRA E", 0, 2),
    op("SRA H", 0, 2),
    op("SRA L", 0, 2),
    op("SRA (HL)", 0, 4),
    op("SRA A", 0, 2),
    // 0x30
    op("SWAP B", 0, 2),
    op("SWAP C", 0, 2),
    op("SWAP D", 0, 2),
    op("SWAP E", 0, 2),
    op("SWAP H", 0, 2),
    op("SWAP L", 0, 2),
    op("SWAP (HL)", 0, 4),
    op("SWAP A", 0, 2),
    op("SRL B", 0, 2),
    op("SRL C", 0, 2),
    op("SRL D", 0, 2),
    op("SRL E", 0, 2),
    op("SRL H", 0, 2),
    op("SRL L", 0, 2),
    op("SRL (HL)", 0, 4),
    op("SRL A", 0, 2),
    // 0x40
    op("BIT 0,B", 0, 2),
    op("BIT 0,C", 0, 2),
    op("BIT 0,D", 0, 2),
    op("BIT 0,E", 0, 2),
    op("BIT 0,H", 0, 2),
    op("BIT 0,L", 0, 2),
    op("BIT 0,(HL)", 0, 3),
    op("BIT 0,A", 0, 2),
    op("BIT 1,B", 0, 2),
    op("BIT 1,C", 0, 2),
    op("BIT 1,D", 0, 2),
    op("BIT 1,E", 0, 2),
    op("BIT 1,H", 0, 2),
    op("BIT 1,L", 0, 2),
    op("BIT 1,(HL)", 0, 3),
    op("BIT 1,A", 0, 2),
    // 0x50
    op("BIT 2,B", 0, 2),
    op("BIT 2,C", 0, 2),
    op("BIT 2,D", 0, 2),
    op("BIT 2,E", 0, 2),
    op("BIT 2,H", 0, 2),
    op("BIT 2,L", 0, 2),
    op("BIT 2,(HL)", 0, 3),
    op("BIT 2,A", 0, 2),
    op("BIT 3,B", 0, 2),
    op("BIT 3,C", 0, 2),
    op("BIT 3,D", 0, 2),
    op("BIT 3,E", 0, 2),
    op("BIT 3,H", 0, 2),
    op("BIT 3,L", 0, 2),
    op("BIT 3,(HL)", 0, 3),
    op("BIT 3,A", 0, 2),
    // 0x60
    op("BIT 4,B", 0, 2),
    op("BIT 4,C", 0, 2),
    op("BIT 4,D", 0, 2),
    op("BIT 4,E", 0, 2),
    op("BIT 4,H", 0, 2),
    op("BIT 4,L", 0, 2),
    op("BIT 4,(HL)", 0, 3),
    op("BIT 4,A", 0, 2),
    op("BIT 5,B", 0, 2),
    op("BIT 5,C", 0, 2),
    op("BIT 5,D", 0, 2),
    op("BIT 5,E", 0, 2),
    op("BIT 5,H", 0, 2),
    op("BIT 5,L", 0, 2),
    op("BIT 5,(HL)", 0, 3),
    op("BIT 5,A", 0, 2),
    // 0x70
    op("BIT 6,B", 0, 2),
    op("BIT 6,C", 0, 2),
    op("BIT 6,D", 0, 2),
    op("BIT 6,E", 0, 2),
    op("BIT 6,H", 0, 2),
    op("BIT 6,L", 0, 2),
    op("BIT 6,(HL)", 0, 3),
    op("BIT 6,A", 0, 2),
    op("BIT 7,B", 0, 2),
    op("BIT 7,C", 0, 2),
    op("BIT 7,D", 0, 2),
    op("BIT 7,E", 0, 2),
    op("BIT 7,H", 0, 2),
    op("BIT 7,L", 0, 2),
    op("BIT 7,(HL)", 0, 3),
    op("BIT 7,A", 0, 2),
    // 0x80
    op("RES 0,B", 0, 2),
    op("RES 0,C", 0, 2),
    op("RES 0,D", 0, 2),
    op("RES 0,E", 0, 2),
    op("RES 0,H", 0, 2),
    op("RES 0,L", 0, 2),
    op("RES 0,(HL)", 0, 4),
    op("RES 0,A", 0, 2),
    op("RES 1,B", 0, 2),
    op("RES 1,C", 0, 2),
    op("RES 1,D", 0, 2),
    op("RES 1,E", 0, 2),
    op("RES 1,H", 0, 2),
    op("RES 1,L", 0, 2),
    op("RES 1,(HL)", 0, 4),
    op("RES 1,A", 0, 2),
    // 0x90
    op("RES 2,B", 0, 2),
    op("RES 2,C", 0, 2),
    op("RES 2,D", 0, 2),
    op("RES 2,E", 0, 2),
    op("RES 2,H", 0, 2),
    op("RES 2,L", 0, 2),
    op("RES 2,(HL)", 0, 4),
    op("RES 2,A", 0, 2),
    op("RES 3,B", 0, 2),
    op("RES 3,C", 0, 2),
    op("RES 3,D", 0, 2),
    op("RES 3,E", 0, 2),
    op("RES 3,H", 0, 2),
    op("RES 3,L", 0, 2),
    op("RES 3,(HL)", 0, 4),
    op("RES 3,A", 0, 2),
    // 0xA0
    op("RES 4,B", 0, 2),
    op("RES 4,C", 0, 2),
    op("RES 4,D", 0, 2),
    op("RES 4,E", 0, 2),
    op("RES 4,H", 0, 2),
    op("RES 4,L", 0, 2),
    op("RES 4,(HL)", 0, 4),
    op("RES 4,A", 0, 2),
    op("RES 5,B", 0, 2),
    op("RES 5,C", 0, 2),
    op("RES 5,D", 0, 2),
    op("RES 5,E", 0, 2),
    op("RES 5,H", 0, 2),
    op("RES 5,L", 0, 2),
    op("RES 5,(HL)", 0, 4),
    op("RES 5,A", 0, 2),
    // 0xB0
    op("RES 6,B", 0, 2),
    op("RES 6,C", 0, 2),
    op("RES 6,D", 0, 2),
    op("RES 6,E", 0, 2),
    op("RES 6,H", 0, 2),
    op("RES 6,L", 0, 2),
    op("RES 6,(HL)", 0, 4),
    op("RES 6,A", 0, 2),
    op("RES 7,B", 0, 2),
    op("RES 7,C", 0, 2),
    op("RES 7,D", 0, 2),
    op("RES 7,E", 0, 2),
    op("RES 7,H", 0, 2),
    op("RES 7,L", 0, 2),
    op("RES 7,(HL)", 0, 4),
    op("RES 7,A", 0, 2),
    // 0xC0
    op("SET 0,B", 0, 2),
    op("SET 0,C", 0, 2),
    op("SET 0,D", 0, 2),
    op("SET 0,E", 0, 2),
    op("SET 0,H", 0, 2),
    op("SET 0,L", 0, 2),
    op("SET 0,(HL)", 0, 4),
    op("SET 0,A", 0, 2),
    op("SET 1,B", 0, 2),
    op("SET 1,C", 0, 2),
    op("SET 1,D", 0, 2),
    op("SET 1,E", 0, 2),
    op("SET 1,H", 0, 2),
    op("SET 1,L", 0, 2),
    op("SET 1,(HL)", 0, 4),
    op("SET 1,A", 0, 2),
    // 0xD0
    op("SET 2,B", 0, 2),
    op("SET 2,C", 0, 2),
    op("SET 2,D", 0, 2),
    op("SET 2,E", 0, 2),
    op("SET 2,H", 0, 2),
    op("SET 2,L", 0, 2),
    op("SET 2,(HL)", 0, 4),
    op("SET 2,A", 0, 2),
    op("SET 3,B", 0, 2),
    op("SET 3,C", 0, 2),
    op("SET 3,D", 0, 2),
    op("SET 3,E", 0, 2),
    op("SET 3,H", 0, 2),
    op("SET 3,L", 0, 2),
    op("SET 3,(HL)", 0, 4),
    op("SET 3,A", 0, 2),
    // 0xE0
    op("SET 4,B", 0, 2),
    op("SET 4,C", 0, 2),
    op("SET 4,D", 0, 2),
    op("SET 4,E", 0, 2),
    op("SET 4,H", 0, 2),
    op("SET 4,L", 0, 2),
    op("SET 4,(HL)", 0, 4),
    op("SET 4,A", 0, 2),
    op("SET 5,B", 0, 2),
    op("SET 5,C", 0, 2),
    op("SET 5,D", 0, 2),
    op("SET 5,E", 0, 2),
    op("SET 5,H", 0, 2),
    op("SET 5,L", 0, 2),
    op("SET 5,(HL)", 0, 4),
    op("SET 5,A", 0, 2),
    // 0xF0
    op("SET 6,B", 0, 2),
    op("SET 6,C", 0, 2),
    op("SET 6,D", 0, 2),
    op("SET 6,E", 0, 2),
    op("SET 6,H", 0, 2),
    op("SET 6,L", 0, 2),
    op("SET 6,(HL)", 0, 4),
    op("SET 6,A", 0, 2),
    op("SET 7,B", 0, 2),
    op("SET 7,C", 0, 2),
    op("SET 7,D", 0, 2),
    op("SET 7,E", 0, 2),
    op("SET 7,H", 0, 2),
    op("SET 7,L", 0, 2),
    op("SET 7,(HL)", 0, 4),
    op("SET 7,A", 0, 2),
];
