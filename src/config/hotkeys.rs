//! Hotkey configuration management.
//!
//! This module defines the hotkey system for the application, including action
//! types, hotkey bindings, and the default key map.

use super::ConfigError;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Represents all possible actions that can be bound to hotkeys.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    Spin,
    SpinSelected,
    AddRow,
    RemoveRow,
    SelectNext,
    SelectPrev,
    CopyIdea,
    ToggleLog,
    CycleTheme,
    Quit,
}

/// Represents a key combination (KeyCode + modifiers).
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Hotkey {
    fn char(c: char) -> Self {
        Hotkey {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::empty(),
        }
    }
}

/// Custom serialization for Hotkey.
///
impl Serialize for Hotkey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Hotkey", 3)?;
        state.serialize_field("code", &KeyCodeSerde::from(self.code))?;
        if let KeyCode::Char(c) = self.code {
            state.serialize_field("char", &c)?;
        }
        state.serialize_field("modifiers", &KeyModifiersSerde::from(self.modifiers))?;
        state.end()
    }
}

/// Custom deserialization for Hotkey.
///
impl<'de> Deserialize<'de> for Hotkey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct HotkeyHelper {
            code: KeyCodeSerde,
            #[serde(default)]
            char: Option<char>,
            #[serde(default)]
            modifiers: KeyModifiersSerde,
        }

        let helper = HotkeyHelper::deserialize(deserializer)?;
        let code = match helper.code {
            KeyCodeSerde::Char => match helper.char {
                Some(c) => KeyCode::Char(c),
                None => {
                    return Err(serde::de::Error::custom(
                        "Char key code requires 'char' field",
                    ))
                }
            },
            KeyCodeSerde::Esc => KeyCode::Esc,
            KeyCodeSerde::Enter => KeyCode::Enter,
            KeyCodeSerde::Backspace => KeyCode::Backspace,
            KeyCodeSerde::Delete => KeyCode::Delete,
            KeyCodeSerde::Tab => KeyCode::Tab,
            KeyCodeSerde::Up => KeyCode::Up,
            KeyCodeSerde::Down => KeyCode::Down,
            KeyCodeSerde::Left => KeyCode::Left,
            KeyCodeSerde::Right => KeyCode::Right,
        };
        Ok(Hotkey {
            code,
            modifiers: helper.modifiers.into(),
        })
    }
}

/// Helper enum for serializing KeyCode.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
enum KeyCodeSerde {
    Char,
    Esc,
    Enter,
    Backspace,
    Delete,
    Tab,
    Up,
    Down,
    Left,
    Right,
}

impl From<KeyCode> for KeyCodeSerde {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(_) => KeyCodeSerde::Char,
            KeyCode::Esc => KeyCodeSerde::Esc,
            KeyCode::Enter => KeyCodeSerde::Enter,
            KeyCode::Backspace => KeyCodeSerde::Backspace,
            KeyCode::Delete => KeyCodeSerde::Delete,
            KeyCode::Tab => KeyCodeSerde::Tab,
            KeyCode::Up => KeyCodeSerde::Up,
            KeyCode::Down => KeyCodeSerde::Down,
            KeyCode::Left => KeyCodeSerde::Left,
            KeyCode::Right => KeyCodeSerde::Right,
            _ => KeyCodeSerde::Char, // Fallback for unsupported keys
        }
    }
}

/// Helper struct for serializing KeyModifiers.
///
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct KeyModifiersSerde {
    #[serde(default)]
    control: bool,
    #[serde(default)]
    shift: bool,
    #[serde(default)]
    alt: bool,
}

impl From<KeyModifiers> for KeyModifiersSerde {
    fn from(modifiers: KeyModifiers) -> Self {
        KeyModifiersSerde {
            control: modifiers.contains(KeyModifiers::CONTROL),
            shift: modifiers.contains(KeyModifiers::SHIFT),
            alt: modifiers.contains(KeyModifiers::ALT),
        }
    }
}

impl From<KeyModifiersSerde> for KeyModifiers {
    fn from(serde: KeyModifiersSerde) -> Self {
        let mut result = KeyModifiers::empty();
        if serde.control {
            result |= KeyModifiers::CONTROL;
        }
        if serde.shift {
            result |= KeyModifiers::SHIFT;
        }
        if serde.alt {
            result |= KeyModifiers::ALT;
        }
        result
    }
}

/// Maps hotkey actions to their key bindings.
///
pub type Hotkeys = HashMap<HotkeyAction, Hotkey>;

/// Returns the default hotkey mappings.
///
pub fn default_hotkeys() -> Hotkeys {
    let mut hotkeys = HashMap::new();
    hotkeys.insert(HotkeyAction::Spin, Hotkey::char(' '));
    hotkeys.insert(HotkeyAction::SpinSelected, Hotkey::char('r'));
    hotkeys.insert(HotkeyAction::AddRow, Hotkey::char('+'));
    hotkeys.insert(HotkeyAction::RemoveRow, Hotkey::char('x'));
    hotkeys.insert(HotkeyAction::SelectNext, Hotkey::char('j'));
    hotkeys.insert(HotkeyAction::SelectPrev, Hotkey::char('k'));
    hotkeys.insert(HotkeyAction::CopyIdea, Hotkey::char('y'));
    hotkeys.insert(HotkeyAction::ToggleLog, Hotkey::char('l'));
    hotkeys.insert(HotkeyAction::CycleTheme, Hotkey::char('t'));
    hotkeys.insert(HotkeyAction::Quit, Hotkey::char('q'));
    hotkeys
}

/// Return the defaults with any user overrides applied on top.
///
pub fn merge_hotkeys(overrides: &Hotkeys) -> Hotkeys {
    let mut hotkeys = default_hotkeys();
    hotkeys.extend(overrides.iter().map(|(action, key)| (*action, key.clone())));
    hotkeys
}

/// Reject key maps where one key combination triggers two actions.
///
pub fn validate_hotkeys(hotkeys: &Hotkeys) -> Result<(), ConfigError> {
    let mut bindings: Vec<(&HotkeyAction, &Hotkey)> = hotkeys.iter().collect();
    bindings.sort_by_key(|(action, _)| **action);
    let mut seen: HashMap<(KeyCode, KeyModifiers), HotkeyAction> = HashMap::new();
    for (action, hotkey) in bindings {
        if let Some(first) = seen.insert(binding_key(hotkey), *action) {
            return Err(ConfigError::ConflictingHotkeys {
                key: format_hotkey_display(hotkey),
                first: action_name(first),
                second: action_name(*action),
            });
        }
    }
    Ok(())
}

/// Key combination as `matches_hotkey` compares it.
fn binding_key(hotkey: &Hotkey) -> (KeyCode, KeyModifiers) {
    match hotkey.code {
        KeyCode::Char(_) => (hotkey.code, hotkey.modifiers.difference(KeyModifiers::SHIFT)),
        _ => (hotkey.code, hotkey.modifiers),
    }
}

fn action_name(action: HotkeyAction) -> String {
    serde_yaml::to_string(&action)
        .map(|s| s.trim_start_matches("---").trim().to_string())
        .unwrap_or_else(|_| format!("{:?}", action))
}

/// Checks if a KeyEvent matches a Hotkey. For character keys SHIFT is not
/// compared since the character already carries it ('+' arrives as
/// SHIFT+'+' on most layouts).
///
pub fn matches_hotkey(event: &KeyEvent, hotkey: &Hotkey) -> bool {
    if event.code != hotkey.code {
        return false;
    }
    match event.code {
        KeyCode::Char(_) => {
            let ignored = KeyModifiers::SHIFT;
            event.modifiers.difference(ignored) == hotkey.modifiers.difference(ignored)
        }
        _ => event.modifiers == hotkey.modifiers,
    }
}

/// Gets the action bound to a KeyEvent, if any.
///
pub fn get_action_for_event(event: &KeyEvent, hotkeys: &Hotkeys) -> Option<HotkeyAction> {
    hotkeys
        .iter()
        .find(|(_, hotkey)| matches_hotkey(event, hotkey))
        .map(|(action, _)| *action)
}

/// Builds a footer text string from hotkey configurations.
/// Takes a list of tuples: (action, description)
///
pub fn build_footer_text(hotkeys: &Hotkeys, actions: &[(HotkeyAction, &str)]) -> String {
    actions
        .iter()
        .filter_map(|(action, description)| {
            hotkeys
                .get(action)
                .map(|hotkey| format!(" {}: {}", format_hotkey_display(hotkey), description))
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Formats a hotkey for display in the footer.
///
pub fn format_hotkey_display(hotkey: &Hotkey) -> String {
    let mut parts = Vec::new();
    if hotkey.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if hotkey.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift");
    }
    if hotkey.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match &hotkey.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Del".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        _ => "Unknown".to_string(),
    };

    if parts.is_empty() {
        key_str
    } else {
        format!("{}+{}", parts.join("+"), key_str)
    }
}
