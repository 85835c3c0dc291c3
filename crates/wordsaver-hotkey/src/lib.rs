mod hotkey;
mod parse;
mod pump;

pub use hotkey::HotkeyManager;
pub use parse::{HotkeyError, parse_hotkey};
pub use pump::pump_messages;
