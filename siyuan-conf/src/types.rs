//! Integer-encoded option types.
//!
//! The front-end reads and writes these settings as plain integers, so each
//! enum serializes to its numeric code. Unknown codes found in a persisted
//! document fall back to the default variant instead of failing the load;
//! callers that want strict checking use `from_code`.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Appearance mode: `0` light, `1` dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    pub fn code(self) -> i32 {
        match self {
            Mode::Light => 0,
            Mode::Dark => 1,
        }
    }

    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(Mode::Light),
            1 => Ok(Mode::Dark),
            value => Err(ConfigError::UnknownOption {
                field: "mode",
                value,
            }),
        }
    }

    pub fn is_dark(self) -> bool {
        self == Mode::Dark
    }
}

impl From<i32> for Mode {
    fn from(code: i32) -> Self {
        Self::from_code(code).unwrap_or_else(|e| {
            log::warn!("{e}, using light mode");
            Mode::Light
        })
    }
}

impl From<Mode> for i32 {
    fn from(mode: Mode) -> Self {
        mode.code()
    }
}

/// What the window close button does: `0` exit, `1` minimize to tray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum CloseButtonBehavior {
    #[default]
    Exit,
    MinimizeToTray,
}

impl CloseButtonBehavior {
    pub fn code(self) -> i32 {
        match self {
            CloseButtonBehavior::Exit => 0,
            CloseButtonBehavior::MinimizeToTray => 1,
        }
    }

    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(CloseButtonBehavior::Exit),
            1 => Ok(CloseButtonBehavior::MinimizeToTray),
            value => Err(ConfigError::UnknownOption {
                field: "closeButtonBehavior",
                value,
            }),
        }
    }

    /// Display name for settings UI
    pub fn display_name(&self) -> &'static str {
        match self {
            CloseButtonBehavior::Exit => "Exit",
            CloseButtonBehavior::MinimizeToTray => "Minimize to tray",
        }
    }
}

impl From<i32> for CloseButtonBehavior {
    fn from(code: i32) -> Self {
        Self::from_code(code).unwrap_or_else(|e| {
            log::warn!("{e}, falling back to exit");
            CloseButtonBehavior::Exit
        })
    }
}

impl From<CloseButtonBehavior> for i32 {
    fn from(behavior: CloseButtonBehavior) -> Self {
        behavior.code()
    }
}

/// Floating window trigger: `0` cursor hover, `1` Ctrl + hover, `2` never.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum FloatWindowMode {
    #[default]
    Hover,
    CtrlHover,
    Disabled,
}

impl FloatWindowMode {
    pub fn code(self) -> i32 {
        match self {
            FloatWindowMode::Hover => 0,
            FloatWindowMode::CtrlHover => 1,
            FloatWindowMode::Disabled => 2,
        }
    }

    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            0 => Ok(FloatWindowMode::Hover),
            1 => Ok(FloatWindowMode::CtrlHover),
            2 => Ok(FloatWindowMode::Disabled),
            value => Err(ConfigError::UnknownOption {
                field: "floatWindowMode",
                value,
            }),
        }
    }

    /// Display name for settings UI
    pub fn display_name(&self) -> &'static str {
        match self {
            FloatWindowMode::Hover => "Cursor hover",
            FloatWindowMode::CtrlHover => "Ctrl + hover",
            FloatWindowMode::Disabled => "No floating window",
        }
    }

    /// All available modes for UI iteration
    pub fn all() -> &'static [FloatWindowMode] {
        &[
            FloatWindowMode::Hover,
            FloatWindowMode::CtrlHover,
            FloatWindowMode::Disabled,
        ]
    }
}

impl From<i32> for FloatWindowMode {
    fn from(code: i32) -> Self {
        Self::from_code(code).unwrap_or_else(|e| {
            log::warn!("{e}, falling back to cursor hover");
            FloatWindowMode::Hover
        })
    }
}

impl From<FloatWindowMode> for i32 {
    fn from(mode: FloatWindowMode) -> Self {
        mode.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_serialize_as_integers() {
        assert_eq!(serde_json::to_string(&Mode::Dark).unwrap(), "1");
        assert_eq!(
            serde_json::to_string(&CloseButtonBehavior::MinimizeToTray).unwrap(),
            "1"
        );
        assert_eq!(
            serde_json::to_string(&FloatWindowMode::Disabled).unwrap(),
            "2"
        );
    }

    #[test]
    fn test_unknown_code_falls_back_on_load() {
        let mode: Mode = serde_json::from_str("7").unwrap();
        assert_eq!(mode, Mode::Light);
        let float: FloatWindowMode = serde_json::from_str("-1").unwrap();
        assert_eq!(float, FloatWindowMode::Hover);
    }

    #[test]
    fn test_from_code_is_strict() {
        assert!(matches!(
            FloatWindowMode::from_code(3),
            Err(ConfigError::UnknownOption {
                field: "floatWindowMode",
                value: 3
            })
        ));
        assert_eq!(
            CloseButtonBehavior::from_code(1).unwrap(),
            CloseButtonBehavior::MinimizeToTray
        );
    }
}
