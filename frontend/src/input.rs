use std::collections::HashMap;

use lumen_core::core::machine::InputButton;
use sdl2::keyboard::Scancode;

use crate::config::KeyConfig;

/// Maps SDL scancodes to machine button IDs.
pub struct KeyMap {
    map: HashMap<Scancode, u8>,
}

impl KeyMap {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Bind a scancode to a machine button ID.
    pub fn bind(&mut self, scancode: Scancode, button_id: u8) {
        self.map.insert(scancode, button_id);
    }

    /// Look up the machine button ID for a scancode.
    pub fn get(&self, scancode: Scancode) -> Option<u8> {
        self.map.get(&scancode).copied()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the key map for the machine's buttons from the configured key
/// names (SDL scancode names; the defaults are the arrows, Z, X, Return
/// and Left Shift).
pub fn build_key_map(buttons: &[InputButton], keys: &KeyConfig) -> KeyMap {
    let mut km = KeyMap::new();

    for button in buttons {
        let key_name = match button.name {
            "Right" => keys.right.as_str(),
            "Left" => keys.left.as_str(),
            "Up" => keys.up.as_str(),
            "Down" => keys.down.as_str(),
            "A" => keys.a.as_str(),
            "B" => keys.b.as_str(),
            "Select" => keys.select.as_str(),
            "Start" => keys.start.as_str(),
            _ => continue,
        };

        match Scancode::from_name(key_name) {
            Some(sc) => km.bind(sc, button.id),
            None => log::warn!("unknown key name {key_name:?} for button {}", button.name),
        }
    }

    km
}
