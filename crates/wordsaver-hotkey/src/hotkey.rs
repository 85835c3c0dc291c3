use anyhow::{Context, Result};
use global_hotkey::{
    GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState,
    hotkey::HotKey,
};
use wordsaver_config::hotkey::HotkeyConfig;
use wordsaver_types::HotkeyAction;

use crate::parse::{HotkeyError, parse_hotkey};
use crate::pump::pump_messages;

/// Resolve the configured bindings, rejecting duplicates
pub(crate) fn resolve_bindings(
    config: &HotkeyConfig,
) -> Result<Vec<(HotkeyAction, HotKey)>, HotkeyError> {
    let mut bindings: Vec<(HotkeyAction, HotKey)> = Vec::with_capacity(3);

    for action in HotkeyAction::ALL {
        let hotkey = parse_hotkey(binding_for(config, action))?;

        if let Some((other, _)) = bindings.iter().find(|(_, h)| *h == hotkey) {
            return Err(HotkeyError::Conflict {
                first: binding_for(config, *other).to_string(),
                second: binding_for(config, action).to_string(),
            });
        }

        bindings.push((action, hotkey));
    }

    Ok(bindings)
}

fn binding_for(config: &HotkeyConfig, action: HotkeyAction) -> &str {
    match action {
        HotkeyAction::SaveAndTranslate => &config.save_and_translate,
        HotkeyAction::Save => &config.save,
        HotkeyAction::AutoComplete => &config.auto_complete,
    }
}

pub struct HotkeyManager {
    manager: GlobalHotKeyManager,
    bindings: Vec<(HotkeyAction, HotKey)>,
}

impl HotkeyManager {
    /// Register every configured binding
    pub fn new(config: &HotkeyConfig) -> Result<Self> {
        let bindings = resolve_bindings(config)?;

        let manager = GlobalHotKeyManager::new().context("Failed to create hotkey manager")?;

        for (action, hotkey) in &bindings {
            manager
                .register(*hotkey)
                .with_context(|| format!("Failed to register hotkey for {action}"))?;
            tracing::debug!("Registered {} (id {})", action, hotkey.id());
        }

        Ok(Self { manager, bindings })
    }

    /// Next pressed action, if any (non-blocking).
    /// Must be called from the thread that created the manager.
    pub fn poll(&self) -> Option<HotkeyAction> {
        pump_messages();

        let receiver = GlobalHotKeyEvent::receiver();
        while let Ok(event) = receiver.try_recv() {
            if event.state != HotKeyState::Pressed {
                continue;
            }
            match self.action_for(event.id) {
                Some(action) => return Some(action),
                None => tracing::debug!("Ignoring unknown hotkey id {}", event.id),
            }
        }
        None
    }

    fn action_for(&self, id: u32) -> Option<HotkeyAction> {
        self.bindings
            .iter()
            .find(|(_, hotkey)| hotkey.id() == id)
            .map(|(action, _)| *action)
    }
}

impl Drop for HotkeyManager {
    fn drop(&mut self) {
        for (_, hotkey) in &self.bindings {
            let _ = self.manager.unregister(*hotkey);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_resolve() {
        let bindings = resolve_bindings(&HotkeyConfig::default()).unwrap();
        let actions: Vec<_> = bindings.iter().map(|(a, _)| *a).collect();
        assert_eq!(actions, HotkeyAction::ALL);
    }

    #[test]
    fn duplicate_bindings_conflict() {
        let config = HotkeyConfig {
            save: "ctrl+alt+0".to_string(),
            ..Default::default()
        };
        assert_eq!(
            resolve_bindings(&config).unwrap_err(),
            HotkeyError::Conflict {
                first: "Ctrl+Alt+0".to_string(),
                second: "ctrl+alt+0".to_string(),
            }
        );
    }

    #[test]
    fn invalid_binding_is_reported() {
        let config = HotkeyConfig {
            auto_complete: "Ctrl+".to_string(),
            ..Default::default()
        };
        assert!(resolve_bindings(&config).is_err());
    }
}
