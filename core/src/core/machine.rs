/// Describes a single input button that a machine accepts.
pub struct InputButton {
    /// Machine-defined button identifier, passed to `set_input()`.
    pub id: u8,
    /// Human-readable name for display/configuration (e.g., "A", "Start").
    pub name: &'static str,
}

/// Machine-agnostic interface for an emulated system.
///
/// The frontend is a pure presentation engine: it drives frames, uploads
/// pixels and forwards input without knowing about the hardware behind
/// this trait (PPU modes, interrupt vectors, palette formats, etc.).
pub trait Machine {
    /// Error surfaced when emulation cannot continue (e.g. the CPU hit an
    /// opcode the hardware does not define). Frame-timing jitter is never
    /// an error.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Native display resolution as (width, height) in pixels.
    fn display_size(&self) -> (u32, u32);

    /// Run one frame of emulation (advance the clock by one frame's worth
    /// of cycles).
    fn run_frame(&mut self) -> Result<(), Self::Error>;

    /// Render the current video state into an RGB24 pixel buffer.
    ///
    /// The buffer must be at least `width * height * 3` bytes (from
    /// `display_size()`). Pixels are stored left-to-right, top-to-bottom,
    /// 3 bytes per pixel (R, G, B).
    fn render_frame(&self, buffer: &mut [u8]);

    /// Handle an input event. `button` is a machine-defined ID from
    /// `input_map()`. `pressed` is true for key-down, false for key-up.
    ///
    /// Called per-event, not per-frame; each call latches the button state
    /// so that `run_frame()` sees the accumulated input.
    fn set_input(&mut self, button: u8, pressed: bool);

    /// Get the list of input buttons this machine accepts.
    fn input_map(&self) -> &[InputButton];

    /// Reset the machine to its initial power-on state.
    fn reset(&mut self);

    /// Nominal display refresh rate, used by the frontend for frame pacing.
    fn frame_rate_hz(&self) -> f64;
}
