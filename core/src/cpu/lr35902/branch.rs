use crate::core::Bus;
use crate::cpu::lr35902::{Flag, Lr35902};

impl Lr35902 {
    /// Evaluate a condition code (2 bits from opcode bits 4-3).
    /// 0=NZ, 1=Z, 2=NC, 3=C
    pub(crate) fn condition(&self, cc: u8) -> bool {
        match cc {
            0 => !self.flag(Flag::Z),
            1 => self.flag(Flag::Z),
            2 => !self.flag(Flag::C),
            3 => self.flag(Flag::C),
            _ => unreachable!("condition called with code {}", cc),
        }
    }

    /// JP a16 — 4 M
    pub(crate) fn op_jp_a16<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        self.pc = self.fetch16(bus);
    }

    /// JP cc,a16 — 4 M taken / 3 M not taken
    pub(crate) fn op_jp_cc_a16<B: Bus + ?Sized>(&mut self, opcode: u8, bus: &mut B) -> u8 {
        let target = self.fetch16(bus);
        if self.condition((opcode >> 3) & 0x03) {
            self.pc = target;
            4
        } else {
            3
        }
    }

    /// JR r8 — 3 M. The displacement is relative to the byte after the
    /// operand, which is where the fetch cursor already points.
    pub(crate) fn op_jr_r8<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        let disp = self.fetch8(bus) as i8;
        self.pc = self.pc.wrapping_add(disp as i16 as u16);
    }

    /// JR cc,r8 — 3 M taken / 2 M not taken
    pub(crate) fn op_jr_cc_r8<B: Bus + ?Sized>(&mut self, opcode: u8, bus: &mut B) -> u8 {
        let disp = self.fetch8(bus) as i8;
        if self.condition((opcode >> 3) & 0x03) {
            self.pc = self.pc.wrapping_add(disp as i16 as u16);
            3
        } else {
            2
        }
    }

    /// CALL a16 — 6 M. Pushes the return address (past the operand).
    pub(crate) fn op_call_a16<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        let target = self.fetch16(bus);
        let ret = self.pc;
        self.push16(bus, ret);
        self.pc = target;
    }

    /// CALL cc,a16 — 6 M taken / 3 M not taken
    pub(crate) fn op_call_cc_a16<B: Bus + ?Sized>(&mut self, opcode: u8, bus: &mut B) -> u8 {
        let target = self.fetch16(bus);
        if self.condition((opcode >> 3) & 0x03) {
            let ret = self.pc;
            self.push16(bus, ret);
            self.pc = target;
            6
        } else {
            3
        }
    }

    /// RET — 4 M
    pub(crate) fn op_ret<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        self.pc = self.pop16(bus);
    }

    /// RET cc — 5 M taken / 2 M not taken
    pub(crate) fn op_ret_cc<B: Bus + ?Sized>(&mut self, opcode: u8, bus: &mut B) -> u8 {
        if self.condition((opcode >> 3) & 0x03) {
            self.pc = self.pop16(bus);
            5
        } else {
            2
        }
    }

    /// RETI — 4 M. IME is restored immediately, no EI-style delay.
    pub(crate) fn op_reti<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        self.pc = self.pop16(bus);
        self.ime = true;
    }

    /// RST n (0xC7, 0xCF, ... 0xFF) — 4 M. The vector is encoded in
    /// opcode bits 5-3.
    pub(crate) fn op_rst<B: Bus + ?Sized>(&mut self, opcode: u8, bus: &mut B) {
        let ret = self.pc;
        self.push16(bus, ret);
        self.pc = (opcode & 0x38) as u16;
    }
}
