pub mod bus;
pub mod cartridge;
pub mod dmg;

pub use bus::DmgBus;
pub use cartridge::{BootRom, Cartridge, RomLoadError};
pub use dmg::DmgSystem;
