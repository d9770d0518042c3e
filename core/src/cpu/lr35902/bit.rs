use crate::core::Bus;
use crate::cpu::lr35902::opcodes::CB_OPCODES;
use crate::cpu::lr35902::{Flag, Lr35902};

impl Lr35902 {
    /// CB-prefixed instruction set. All 256 opcodes are defined, so this
    /// never faults. Decode: bits 7-6 select the group (rot/shift, BIT,
    /// RES, SET), bits 5-3 the sub-op or bit index, bits 2-0 the target
    /// register (6 = (HL)).
    pub(crate) fn execute_cb<B: Bus + ?Sized>(&mut self, opcode: u8, bus: &mut B) -> u8 {
        let target = opcode & 0x07;
        let index = (opcode >> 3) & 0x07;

        let value = if target == 6 {
            bus.read8(self.hl())
        } else {
            self.reg8(target)
        };

        match opcode >> 6 {
            // Rotates, shifts and SWAP: read-modify-write
            0 => {
                let result = match index {
                    0 => self.rlc_value(value),
                    1 => self.rrc_value(value),
                    2 => self.rl_value(value),
                    3 => self.rr_value(value),
                    4 => self.sla_value(value),
                    5 => self.sra_value(value),
                    6 => self.swap_value(value),
                    7 => self.srl_value(value),
                    _ => unreachable!(),
                };
                if target == 6 {
                    bus.write8(self.hl(), result);
                } else {
                    self.set_reg8(target, result);
                }
            }
            // BIT n,r: read-only, C untouched
            1 => {
                self.set_flag(Flag::Z, value & (1 << index) == 0);
                self.set_flag(Flag::N, false);
                self.set_flag(Flag::H, true);
            }
            // RES n,r: no flags
            2 => {
                let result = value & !(1 << index);
                if target == 6 {
                    bus.write8(self.hl(), result);
                } else {
                    self.set_reg8(target, result);
                }
            }
            // SET n,r: no flags
            3 => {
                let result = value | (1 << index);
                if target == 6 {
                    bus.write8(self.hl(), result);
                } else {
                    self.set_reg8(target, result);
                }
            }
            _ => unreachable!(),
        }

        CB_OPCODES[opcode as usize].m_cycles
    }

    // Rotate/shift kernels. Z comes from the result, C is the shifted-out
    // bit, N and H are always cleared.

    fn rlc_value(&mut self, value: u8) -> u8 {
        let result = value.rotate_left(1);
        self.set_flags(result == 0, false, false, value & 0x80 != 0);
        result
    }

    fn rrc_value(&mut self, value: u8) -> u8 {
        let result = value.rotate_right(1);
        self.set_flags(result == 0, false, false, value & 0x01 != 0);
        result
    }

    fn rl_value(&mut self, value: u8) -> u8 {
        let result = (value << 1) | self.flag(Flag::C) as u8;
        self.set_flags(result == 0, false, false, value & 0x80 != 0);
        result
    }

    fn rr_value(&mut self, value: u8) -> u8 {
        let result = (value >> 1) | ((self.flag(Flag::C) as u8) << 7);
        self.set_flags(result == 0, false, false, value & 0x01 != 0);
        result
    }

    fn sla_value(&mut self, value: u8) -> u8 {
        let result = value << 1;
        self.set_flags(result == 0, false, false, value & 0x80 != 0);
        result
    }

    /// Arithmetic shift right: bit 7 is duplicated.
    fn sra_value(&mut self, value: u8) -> u8 {
        let result = (value >> 1) | (value & 0x80);
        self.set_flags(result == 0, false, false, value & 0x01 != 0);
        result
    }

    fn srl_value(&mut self, value: u8) -> u8 {
        let result = value >> 1;
        self.set_flags(result == 0, false, false, value & 0x01 != 0);
        result
    }

    /// Exchange the nibbles. All of N/H/C clear.
    fn swap_value(&mut self, value: u8) -> u8 {
        let result = value.rotate_left(4);
        self.set_flags(result == 0, false, false, false);
        result
    }
}
