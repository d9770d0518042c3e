use crate::core::Bus;
use crate::cpu::lr35902::Lr35902;

impl Lr35902 {
    /// LD r,r' (0x40-0x7F, HALT excluded). Opcode mask: 01 ddd sss,
    /// index 6 on either side is (HL).
    pub(crate) fn op_ld_r_r<B: Bus + ?Sized>(&mut self, opcode: u8, bus: &mut B) {
        let dst = (opcode >> 3) & 0x07;
        let src = opcode & 0x07;
        let value = if src == 6 {
            bus.read8(self.hl())
        } else {
            self.reg8(src)
        };
        if dst == 6 {
            bus.write8(self.hl(), value);
        } else {
            self.set_reg8(dst, value);
        }
    }

    /// LD r,d8 / LD (HL),d8 (0x06, 0x0E, ... 0x3E).
    pub(crate) fn op_ld_r_d8<B: Bus + ?Sized>(&mut self, opcode: u8, bus: &mut B) {
        let dst = (opcode >> 3) & 0x07;
        let value = self.fetch8(bus);
        if dst == 6 {
            bus.write8(self.hl(), value);
        } else {
            self.set_reg8(dst, value);
        }
    }

    /// LD rr,d16 (0x01/0x11/0x21/0x31).
    pub(crate) fn op_ld_rr_d16<B: Bus + ?Sized>(&mut self, opcode: u8, bus: &mut B) {
        let value = self.fetch16(bus);
        self.set_rp((opcode >> 4) & 0x03, value);
    }

    /// LD (HL+),A
    pub(crate) fn op_ld_hli_a<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        bus.write8(self.hl(), self.a);
        self.set_hl(self.hl().wrapping_add(1));
    }

    /// LD (HL-),A
    pub(crate) fn op_ld_hld_a<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        bus.write8(self.hl(), self.a);
        self.set_hl(self.hl().wrapping_sub(1));
    }

    /// LD A,(HL+)
    pub(crate) fn op_ld_a_hli<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        self.a = bus.read8(self.hl());
        self.set_hl(self.hl().wrapping_add(1));
    }

    /// LD A,(HL-)
    pub(crate) fn op_ld_a_hld<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        self.a = bus.read8(self.hl());
        self.set_hl(self.hl().wrapping_sub(1));
    }

    /// LDH (a8),A — store A into the high I/O page at FF00 + a8.
    pub(crate) fn op_ldh_a8_a<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        let offset = self.fetch8(bus);
        bus.write8(0xFF00 | offset as u16, self.a);
    }

    /// LDH A,(a8)
    pub(crate) fn op_ldh_a_a8<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        let offset = self.fetch8(bus);
        self.a = bus.read8(0xFF00 | offset as u16);
    }

    /// LD (a16),A
    pub(crate) fn op_ld_a16_a<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        bus.write8(addr, self.a);
    }

    /// LD A,(a16)
    pub(crate) fn op_ld_a_a16<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        self.a = bus.read8(addr);
    }

    /// LD (a16),SP — stores SP little-endian.
    pub(crate) fn op_ld_a16_sp<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        bus.write16(addr, self.sp);
    }

    /// LD HL,SP+r8 — flags from the low-byte add, result into HL.
    pub(crate) fn op_ld_hl_sp_r8<B: Bus + ?Sized>(&mut self, bus: &mut B) {
        let offset = self.fetch8(bus);
        let value = self.add_sp_offset(offset);
        self.set_hl(value);
    }
}
