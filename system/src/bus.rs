//! The DMG interconnect: 64 KiB address space, memory-mapped I/O and the
//! boot-ROM overlay. Every read and write in the system is routed here,
//! purely by address range.

use lumen_core::core::Bus;
use lumen_core::core::bus::Interrupt;
use lumen_core::device::{Joypad, Ppu, Timer};

use crate::cartridge::{BOOT_ROM_SIZE, BootRom, Cartridge};

/// First address past the boot ROM overlay.
const BOOT_ROM_END: u16 = 0x0100;

const OAM_START: u16 = 0xFE00;
const OAM_SIZE: u16 = 0xA0;

pub struct DmgBus {
    boot_rom: [u8; BOOT_ROM_SIZE],
    boot_overlay: bool,

    cartridge: Cartridge,

    /// Backing store for everything without dedicated hardware: cartridge
    /// RAM, work RAM, echo space and high RAM.
    ram: [u8; 0x10000],

    pub ppu: Ppu,
    pub timer: Timer,
    pub joypad: Joypad,

    interrupt_flag: u8,
    interrupt_enable: u8,
}

impl DmgBus {
    pub fn new(cartridge: Cartridge, boot_rom: BootRom) -> Self {
        Self {
            boot_rom: *boot_rom.data(),
            boot_overlay: true,
            cartridge,
            ram: [0; 0x10000],
            ppu: Ppu::new(),
            timer: Timer::new(),
            joypad: Joypad::new(),
            interrupt_flag: 0,
            interrupt_enable: 0,
        }
    }

    /// Restore the power-on state. The cartridge and boot ROM images are
    /// kept; the overlay re-engages.
    pub fn reset(&mut self) {
        self.boot_overlay = true;
        self.ram = [0; 0x10000];
        self.ppu = Ppu::new();
        self.timer = Timer::new();
        self.joypad = Joypad::new();
        self.interrupt_flag = 0;
        self.interrupt_enable = 0;
    }

    pub fn boot_overlay_active(&self) -> bool {
        self.boot_overlay
    }

    /// Called by the scheduler with the current PC. The overlay detaches
    /// the first time execution reaches the cartridge entry point and
    /// never re-engages for the session.
    pub fn update_boot_overlay(&mut self, pc: u16) {
        if self.boot_overlay && pc >= BOOT_ROM_END {
            self.boot_overlay = false;
            log::debug!("boot ROM overlay disengaged");
        }
    }

    pub fn request_interrupt(&mut self, interrupt: Interrupt) {
        self.interrupt_flag |= interrupt.mask();
    }

    /// OAM DMA burst: 160 bytes from `source_page << 8`, read through the
    /// normal routing, into OAM.
    fn oam_dma(&mut self, source_page: u8) {
        let base = (source_page as u16) << 8;
        for i in 0..OAM_SIZE {
            let byte = self.read8(base.wrapping_add(i));
            self.ppu.write_oam(OAM_START + i, byte);
        }
    }
}

impl Bus for DmgBus {
    fn read8(&mut self, addr: u16) -> u8 {
        match addr {
            // Boot ROM overlay while engaged
            0x0000..=0x00FF if self.boot_overlay => self.boot_rom[addr as usize],

            // Cartridge ROM
            0x0000..=0x7FFF => self.cartridge.read(addr),

            // PPU-owned memory
            0x8000..=0x9FFF => self.ppu.read_vram(addr),
            0xFE00..=0xFE9F => self.ppu.read_oam(addr),

            // I/O registers
            0xFF00 => self.joypad.read(),
            0xFF04..=0xFF07 => self.timer.read_register(addr),
            0xFF0F => self.interrupt_flag | 0xE0,
            0xFF40..=0xFF4B => self.ppu.read_register(addr),
            // The rest of the I/O page (serial, APU, CGB registers) has
            // no device behind it here: open bus
            0xFF00..=0xFF7F => 0xFF,
            0xFFFF => self.interrupt_enable,

            // Plain RAM: cartridge RAM, work RAM, echo, high RAM
            _ => self.ram[addr as usize],
        }
    }

    fn write8(&mut self, addr: u16, value: u8) {
        match addr {
            // Cartridge ROM is read-only (no MBC)
            0x0000..=0x7FFF => {}

            0x8000..=0x9FFF => self.ppu.write_vram(addr, value),
            0xFE00..=0xFE9F => self.ppu.write_oam(addr, value),

            0xFF00 => self.joypad.write(value),
            0xFF04..=0xFF07 => self.timer.write_register(addr, value),
            0xFF0F => self.interrupt_flag = value & 0x1F,

            // The DMA register write also performs the OAM burst
            0xFF46 => {
                self.ppu.write_register(addr, value);
                self.oam_dma(value);
            }
            0xFF40..=0xFF4B => self.ppu.write_register(addr, value),
            // Unmapped I/O holes drop writes
            0xFF00..=0xFF7F => {}

            0xFFFF => self.interrupt_enable = value,

            _ => self.ram[addr as usize] = value,
        }
    }
}
