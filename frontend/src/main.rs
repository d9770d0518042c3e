use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lumen_core::core::machine::Machine;
use lumen_system::{BootRom, Cartridge, DmgSystem};

mod config;
mod emulator;
mod input;
mod rom_path;
mod screenshot;
mod video;

#[derive(Parser)]
#[command(name = "lumen", version, about = "Game Boy (DMG) emulator")]
struct Args {
    /// Path to the cartridge image (.gb, or a .zip containing one)
    rom: PathBuf,

    /// Window scale factor (overrides the config file)
    #[arg(long)]
    scale: Option<u32>,

    /// Path to the 256-byte DMG boot ROM
    #[arg(long, default_value = "roms/dmg_boot.bin")]
    boot_rom: PathBuf,

    /// Show an FPS readout in the window title (F1 toggles it)
    #[arg(long)]
    fps: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    let config = config::Config::load();

    let boot_rom = match BootRom::from_file(&args.boot_rom) {
        Ok(boot_rom) => boot_rom,
        Err(e) => {
            eprintln!("error: boot ROM {}: {e}", args.boot_rom.display());
            return ExitCode::FAILURE;
        }
    };

    let rom_bytes = match rom_path::load_rom_bytes(&args.rom) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("error: ROM {}: {e}", args.rom.display());
            return ExitCode::FAILURE;
        }
    };

    let machine = DmgSystem::new(Cartridge::from_bytes(rom_bytes), boot_rom);
    let key_map = input::build_key_map(machine.input_map(), &config.keys);
    let scale = args.scale.unwrap_or(config.scale).max(1);
    let show_fps = args.fps || config.show_fps;

    match emulator::run(machine, &key_map, scale, show_fps) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
