//! The DMG machine: CPU plus interconnect, driven by the per-instruction
//! scheduler. One frame is 17 556 M-cycles (70 224 T-cycles) at
//! 4.194304 MHz, ~59.73 Hz.

use lumen_core::core::bus::Interrupt;
use lumen_core::core::Component;
use lumen_core::core::machine::{InputButton, Machine};
use lumen_core::cpu::{Lr35902, StepError};
use lumen_core::device::joypad;
use lumen_core::device::ppu::{LCD_HEIGHT, LCD_WIDTH};

use crate::bus::DmgBus;
use crate::cartridge::{BootRom, Cartridge};

// ---------------------------------------------------------------------------
// Timing
// ---------------------------------------------------------------------------
// CPU clock:  4.194304 MHz (2^22 Hz)
// Frame:      154 scanlines x 456 T-cycles = 70224 T = 17556 M-cycles
// Frame rate: 4194304 / 70224 = 59.7275 Hz

pub const CPU_CLOCK_HZ: u32 = 4_194_304;
pub const CYCLES_PER_FRAME: u32 = 17_556;
pub const T_CYCLES_PER_FRAME: u32 = 70_224;

/// Host-clock spacing between frame deadlines.
pub const FRAME_DURATION_NS: u64 = 16_742_706;

// ---------------------------------------------------------------------------
// Input button IDs
// ---------------------------------------------------------------------------
pub const INPUT_RIGHT: u8 = 0;
pub const INPUT_LEFT: u8 = 1;
pub const INPUT_UP: u8 = 2;
pub const INPUT_DOWN: u8 = 3;
pub const INPUT_A: u8 = 4;
pub const INPUT_B: u8 = 5;
pub const INPUT_SELECT: u8 = 6;
pub const INPUT_START: u8 = 7;

const DMG_INPUT_MAP: &[InputButton] = &[
    InputButton { id: INPUT_RIGHT, name: "Right" },
    InputButton { id: INPUT_LEFT, name: "Left" },
    InputButton { id: INPUT_UP, name: "Up" },
    InputButton { id: INPUT_DOWN, name: "Down" },
    InputButton { id: INPUT_A, name: "A" },
    InputButton { id: INPUT_B, name: "B" },
    InputButton { id: INPUT_SELECT, name: "Select" },
    InputButton { id: INPUT_START, name: "Start" },
];

/// DMG LCD shades, lightest to darkest.
const DMG_PALETTE: [(u8, u8, u8); 4] = [
    (155, 188, 15),
    (139, 172, 15),
    (48, 98, 48),
    (15, 56, 15),
];

/// Game Boy DMG (Nintendo, 1989)
///
/// Hardware: Sharp LR35902 @ 4.194304 MHz, 160x144 4-shade LCD,
/// 8 KiB VRAM, 40-sprite OAM, programmable timer, five interrupt sources.
pub struct DmgSystem {
    cpu: Lr35902,
    bus: DmgBus,

    /// M-cycles accumulated toward the current frame.
    frame_cycles: u32,
}

impl DmgSystem {
    pub fn new(cartridge: Cartridge, boot_rom: BootRom) -> Self {
        Self {
            cpu: Lr35902::new(),
            bus: DmgBus::new(cartridge, boot_rom),
            frame_cycles: 0,
        }
    }

    pub fn cpu(&self) -> &Lr35902 {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Lr35902 {
        &mut self.cpu
    }

    pub fn bus(&self) -> &DmgBus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut DmgBus {
        &mut self.bus
    }

    /// Frame-ready flag from the PPU; reading clears it.
    pub fn take_frame_ready(&mut self) -> bool {
        self.bus.ppu.take_frame_ready()
    }

    /// One scheduler iteration: execute an instruction (or poll HALT),
    /// advance the PPU and timer in lockstep, then dispatch interrupts.
    /// Returns the M-cycles consumed.
    pub fn step_instruction(&mut self) -> Result<u32, StepError> {
        self.bus.update_boot_overlay(self.cpu.pc);

        let cycles = self.cpu.step(&mut self.bus)? as u32;
        self.advance_devices(cycles);

        let dispatch_cycles = self.dispatch_interrupts() as u32;
        if dispatch_cycles > 0 {
            self.advance_devices(dispatch_cycles);
        }

        let total = cycles + dispatch_cycles;
        self.frame_cycles += total;
        Ok(total)
    }

    /// PPU and timer run in lockstep, 4 T-cycles per M-cycle.
    fn advance_devices(&mut self, m_cycles: u32) {
        for _ in 0..m_cycles {
            self.bus.ppu.step(4);
            self.bus.timer.step(4);
        }
    }

    /// Transfer latched device requests into IF, then let the CPU decide.
    fn dispatch_interrupts(&mut self) -> u8 {
        if self.bus.ppu.take_vblank_request() {
            self.bus.request_interrupt(Interrupt::VBlank);
        }
        if self.bus.timer.take_irq_request() {
            self.bus.request_interrupt(Interrupt::Timer);
        }
        self.cpu.service_interrupts(&mut self.bus)
    }

    fn log_fault(&self, err: &StepError) {
        log::error!("emulation halted: {err}");
        log::error!("cpu state: {}", self.cpu.snapshot());
        log::error!("last executed instructions:");
        for entry in self.cpu.trace().entries() {
            log::error!("  {entry}");
        }
    }
}

impl Machine for DmgSystem {
    type Error = StepError;

    fn display_size(&self) -> (u32, u32) {
        (LCD_WIDTH as u32, LCD_HEIGHT as u32)
    }

    fn run_frame(&mut self) -> Result<(), StepError> {
        while self.frame_cycles < CYCLES_PER_FRAME {
            if let Err(err) = self.step_instruction() {
                self.log_fault(&err);
                return Err(err);
            }
        }
        // Keep the overshoot so the long-run average stays exact
        self.frame_cycles -= CYCLES_PER_FRAME;
        Ok(())
    }

    fn render_frame(&self, buffer: &mut [u8]) {
        for (i, &color_index) in self.bus.ppu.framebuffer().iter().enumerate() {
            let (r, g, b) = DMG_PALETTE[(color_index & 0x03) as usize];
            let offset = i * 3;
            buffer[offset] = r;
            buffer[offset + 1] = g;
            buffer[offset + 2] = b;
        }
    }

    fn set_input(&mut self, button: u8, pressed: bool) {
        match button {
            INPUT_RIGHT => self.bus.joypad.set_dpad(joypad::DPAD_RIGHT, pressed),
            INPUT_LEFT => self.bus.joypad.set_dpad(joypad::DPAD_LEFT, pressed),
            INPUT_UP => self.bus.joypad.set_dpad(joypad::DPAD_UP, pressed),
            INPUT_DOWN => self.bus.joypad.set_dpad(joypad::DPAD_DOWN, pressed),
            INPUT_A => self.bus.joypad.set_button(joypad::BTN_A, pressed),
            INPUT_B => self.bus.joypad.set_button(joypad::BTN_B, pressed),
            INPUT_SELECT => self.bus.joypad.set_button(joypad::BTN_SELECT, pressed),
            INPUT_START => self.bus.joypad.set_button(joypad::BTN_START, pressed),
            _ => {}
        }
    }

    fn input_map(&self) -> &[InputButton] {
        DMG_INPUT_MAP
    }

    fn reset(&mut self) {
        self.cpu.reset();
        self.bus.reset();
        self.frame_cycles = 0;
    }

    fn frame_rate_hz(&self) -> f64 {
        CPU_CLOCK_HZ as f64 / T_CYCLES_PER_FRAME as f64
    }
}
