//! The two halves of the frontend: an emulation thread that owns the
//! machine and paces itself against the host monotonic clock, and the
//! SDL loop on the main thread that presents frames and collects input.
//!
//! The emulation thread never waits on the presenter. Frames travel one
//! way through a mutex-guarded buffer plus an atomic ready flag; input
//! and shutdown travel the other way through a channel and a stop flag.

use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, unbounded};
use lumen_core::core::machine::Machine;
use sdl2::event::Event;
use sdl2::keyboard::Scancode;

use crate::input::KeyMap;
use crate::screenshot;
use crate::video::Video;

const WINDOW_TITLE: &str = "Lumen";

/// Events forwarded from the SDL thread to the emulation thread.
enum EmuEvent {
    Input { button: u8, pressed: bool },
}

/// The last finished frame, published by the emulation thread.
struct SharedFrame {
    pixels: Mutex<Vec<u8>>,
    ready: AtomicBool,
}

pub fn run<M>(
    machine: M,
    key_map: &KeyMap,
    scale: u32,
    mut show_fps: bool,
) -> Result<(), Box<dyn Error + Send + Sync>>
where
    M: Machine + Send + 'static,
{
    let sdl_context = sdl2::init()?;
    let sdl_video = sdl_context.video()?;

    let (width, height) = machine.display_size();
    let frame_len = (width * height * 3) as usize;
    let frame_duration = Duration::from_secs_f64(1.0 / machine.frame_rate_hz());

    let shared = Arc::new(SharedFrame {
        pixels: Mutex::new(vec![0; frame_len]),
        ready: AtomicBool::new(false),
    });
    let stop = Arc::new(AtomicBool::new(false));
    let (event_tx, event_rx) = unbounded();

    let emu_thread = {
        let shared = Arc::clone(&shared);
        let stop = Arc::clone(&stop);
        thread::spawn(move || emulation_loop(machine, &shared, &stop, &event_rx, frame_duration))
    };

    let mut video = Video::new(&sdl_video, WINDOW_TITLE, width, height, scale)?;
    let mut event_pump = sdl_context.event_pump()?;

    let mut presented = vec![0u8; frame_len];
    let mut fps = FpsCounter::new();

    'main: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'main,

                Event::KeyDown {
                    scancode: Some(Scancode::Escape),
                    ..
                } => break 'main,

                Event::KeyDown {
                    scancode: Some(Scancode::F1),
                    repeat: false,
                    ..
                } => {
                    show_fps = !show_fps;
                    if !show_fps {
                        video.set_title(WINDOW_TITLE);
                    }
                }

                Event::KeyDown {
                    scancode: Some(Scancode::F12),
                    repeat: false,
                    ..
                } => match screenshot::save(&presented, width, height) {
                    Ok(path) => log::info!("wrote {}", path.display()),
                    Err(e) => log::warn!("screenshot failed: {e}"),
                },

                Event::KeyDown {
                    scancode: Some(sc),
                    repeat: false,
                    ..
                } => {
                    if let Some(button) = key_map.get(sc) {
                        let _ = event_tx.send(EmuEvent::Input {
                            button,
                            pressed: true,
                        });
                    }
                }

                Event::KeyUp {
                    scancode: Some(sc), ..
                } => {
                    if let Some(button) = key_map.get(sc) {
                        let _ = event_tx.send(EmuEvent::Input {
                            button,
                            pressed: false,
                        });
                    }
                }

                _ => {}
            }
        }

        // The emulation thread raises the stop flag itself when it faults
        if stop.load(Ordering::Relaxed) {
            break 'main;
        }

        if shared.ready.swap(false, Ordering::Acquire) {
            let frame = shared.pixels.lock().unwrap();
            presented.copy_from_slice(&frame);
            // The counter refreshes once a second; mirror it into the
            // window title when the readout is on
            if fps.tick() && show_fps {
                video.set_title(&format!("{WINDOW_TITLE} - {:.1} fps", fps.value()));
            }
        }

        video.present(&presented);
        // This loop is paced by VSync (present_vsync in Video::new);
        // the emulation thread paces itself independently.
    }

    stop.store(true, Ordering::Relaxed);
    match emu_thread.join() {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(e),
        Err(_) => Err("emulation thread panicked".into()),
    }
}

fn emulation_loop<M: Machine>(
    mut machine: M,
    shared: &SharedFrame,
    stop: &AtomicBool,
    events: &Receiver<EmuEvent>,
    frame_duration: Duration,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let (width, height) = machine.display_size();
    let mut rgb = vec![0u8; (width * height * 3) as usize];

    let mut next_deadline = Instant::now() + frame_duration;
    loop {
        if stop.load(Ordering::Relaxed) {
            return Ok(());
        }

        for event in events.try_iter() {
            match event {
                EmuEvent::Input { button, pressed } => machine.set_input(button, pressed),
            }
        }

        if let Err(err) = machine.run_frame() {
            stop.store(true, Ordering::Relaxed);
            return Err(Box::new(err));
        }

        // Publish the finished frame; the presenter copies it out when it
        // sees the flag.
        machine.render_frame(&mut rgb);
        {
            let mut pixels = shared.pixels.lock().unwrap();
            pixels.copy_from_slice(&rgb);
        }
        shared.ready.store(true, Ordering::Release);

        sleep_until(next_deadline);
        next_deadline += frame_duration;
    }
}

/// Sleep until `deadline` on the monotonic clock. Wakes ~0.5 ms early and
/// spins the rest, since the OS sleep can overshoot. Already past the
/// deadline: return at once, degrading to as-fast-as-possible.
fn sleep_until(deadline: Instant) {
    let now = Instant::now();
    if now >= deadline {
        return;
    }
    let remaining = deadline - now;
    if remaining > Duration::from_millis(1) {
        thread::sleep(remaining - Duration::from_micros(500));
    }
    while Instant::now() < deadline {}
}

/// Presented-frames-per-second over a one-second window.
struct FpsCounter {
    frames: u32,
    window_start: Instant,
    value: f64,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            frames: 0,
            window_start: Instant::now(),
            value: 0.0,
        }
    }

    /// Count one presented frame. Returns true when the one-second
    /// window closed and `value()` was refreshed.
    fn tick(&mut self) -> bool {
        self.frames += 1;
        let elapsed = self.window_start.elapsed();
        if elapsed >= Duration::from_secs(1) {
            self.value = self.frames as f64 / elapsed.as_secs_f64();
            self.frames = 0;
            self.window_start = Instant::now();
            return true;
        }
        false
    }

    fn value(&self) -> f64 {
        self.value
    }
}
