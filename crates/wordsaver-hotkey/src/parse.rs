use global_hotkey::hotkey::{Code, HotKey, Modifiers};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HotkeyError {
    #[error("hotkey binding is empty")]
    EmptyBinding,
    #[error("hotkey '{binding}' has invalid token '{token}'")]
    InvalidToken { binding: String, token: String },
    #[error("hotkey '{binding}' must include one non-modifier key")]
    MissingMainKey { binding: String },
    #[error("hotkey '{binding}' has more than one non-modifier key")]
    MultipleMainKeys { binding: String },
    #[error("'{first}' and '{second}' use the same key combination")]
    Conflict { first: String, second: String },
}

/// Parse a combination such as `Ctrl+Alt+1` or `shift+F9`
pub fn parse_hotkey(binding: &str) -> Result<HotKey, HotkeyError> {
    if binding.trim().is_empty() {
        return Err(HotkeyError::EmptyBinding);
    }

    let mut mods = Modifiers::empty();
    let mut main_key = None;

    for raw in binding.split('+') {
        let token = raw.trim().to_ascii_lowercase();
        if let Some(modifier) = modifier(&token) {
            mods |= modifier;
            continue;
        }

        let code = key_code(&token).ok_or_else(|| HotkeyError::InvalidToken {
            binding: binding.to_string(),
            token: raw.trim().to_string(),
        })?;

        if main_key.replace(code).is_some() {
            return Err(HotkeyError::MultipleMainKeys {
                binding: binding.to_string(),
            });
        }
    }

    let code = main_key.ok_or_else(|| HotkeyError::MissingMainKey {
        binding: binding.to_string(),
    })?;

    let mods = if mods.is_empty() { None } else { Some(mods) };
    Ok(HotKey::new(mods, code))
}

fn modifier(token: &str) -> Option<Modifiers> {
    match token {
        "ctrl" | "control" => Some(Modifiers::CONTROL),
        "shift" => Some(Modifiers::SHIFT),
        "alt" | "option" => Some(Modifiers::ALT),
        "super" | "win" | "cmd" | "meta" => Some(Modifiers::SUPER),
        _ => None,
    }
}

fn key_code(token: &str) -> Option<Code> {
    let code = match token {
        "a" => Code::KeyA,
        "b" => Code::KeyB,
        "c" => Code::KeyC,
        "d" => Code::KeyD,
        "e" => Code::KeyE,
        "f" => Code::KeyF,
        "g" => Code::KeyG,
        "h" => Code::KeyH,
        "i" => Code::KeyI,
        "j" => Code::KeyJ,
        "k" => Code::KeyK,
        "l" => Code::KeyL,
        "m" => Code::KeyM,
        "n" => Code::KeyN,
        "o" => Code::KeyO,
        "p" => Code::KeyP,
        "q" => Code::KeyQ,
        "r" => Code::KeyR,
        "s" => Code::KeyS,
        "t" => Code::KeyT,
        "u" => Code::KeyU,
        "v" => Code::KeyV,
        "w" => Code::KeyW,
        "x" => Code::KeyX,
        "y" => Code::KeyY,
        "z" => Code::KeyZ,
        "0" => Code::Digit0,
        "1" => Code::Digit1,
        "2" => Code::Digit2,
        "3" => Code::Digit3,
        "4" => Code::Digit4,
        "5" => Code::Digit5,
        "6" => Code::Digit6,
        "7" => Code::Digit7,
        "8" => Code::Digit8,
        "9" => Code::Digit9,
        "space" => Code::Space,
        "enter" | "return" => Code::Enter,
        "tab" => Code::Tab,
        "esc" | "escape" => Code::Escape,
        _ => return function_key(token),
    };
    Some(code)
}

fn function_key(token: &str) -> Option<Code> {
    let n: u8 = token.strip_prefix('f')?.parse().ok()?;
    let code = match n {
        1 => Code::F1,
        2 => Code::F2,
        3 => Code::F3,
        4 => Code::F4,
        5 => Code::F5,
        6 => Code::F6,
        7 => Code::F7,
        8 => Code::F8,
        9 => Code::F9,
        10 => Code::F10,
        11 => Code::F11,
        12 => Code::F12,
        13 => Code::F13,
        14 => Code::F14,
        15 => Code::F15,
        16 => Code::F16,
        17 => Code::F17,
        18 => Code::F18,
        19 => Code::F19,
        20 => Code::F20,
        21 => Code::F21,
        22 => Code::F22,
        23 => Code::F23,
        24 => Code::F24,
        _ => return None,
    };
    Some(code)
}
