//! RDP profile enums — display, performance, and gateway settings.
//!
//! Numeric discriminants match the values the legacy serialized form
//! uses, so snapshots written by older builds keep their meaning.

use serde::{Deserialize, Serialize};

// ─── Display ────────────────────────────────────────────────────────

/// How the session occupies local monitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FullScreenMode {
    /// Windowed session.
    Disabled = 0,
    /// Full screen on the primary monitor.
    FullScreenPrimary = 1,
    /// Full screen spanning every monitor.
    FullScreenAll = 2,
}
impl Default for FullScreenMode { fn default() -> Self { Self::FullScreenPrimary } }

impl FullScreenMode {
    pub fn from_str_loose(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "disabled" | "0" => Self::Disabled,
            "fullscreenall" | "2" => Self::FullScreenAll,
            _ => Self::FullScreenPrimary,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "Disabled",
            Self::FullScreenPrimary => "FullScreenPrimary",
            Self::FullScreenAll => "FullScreenAll",
        }
    }
}

/// How the remote desktop reacts when the local window changes size.
///
/// The two `*FullScreen` variants are the same strategies qualified for
/// a full-screen session; they are only valid while full screen is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowResizeMode {
    /// Ask the server to re-layout at the new resolution.
    AutoResize = 0,
    /// Scale the bitmap client-side.
    Stretch = 1,
    /// Keep the remote resolution, scroll if needed.
    Fixed = 2,
    StretchFullScreen = 3,
    FixedFullScreen = 4,
}
impl Default for WindowResizeMode { fn default() -> Self { Self::AutoResize } }

impl WindowResizeMode {
    /// The non-full-screen counterpart of a full-screen-qualified mode.
    /// Identity for the modes that are already windowed-safe.
    pub fn windowed(self) -> Self {
        match self {
            Self::StretchFullScreen => Self::Stretch,
            Self::FixedFullScreen => Self::Fixed,
            other => other,
        }
    }

    pub fn requires_full_screen(self) -> bool {
        matches!(self, Self::StretchFullScreen | Self::FixedFullScreen)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AutoResize => "AutoResize",
            Self::Stretch => "Stretch",
            Self::Fixed => "Fixed",
            Self::StretchFullScreen => "StretchFullScreen",
            Self::FixedFullScreen => "FixedFullScreen",
        }
    }
}

/// Named performance tier expanded by the compiler into color depth,
/// connection class, and the visual-effects flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayPerformance {
    /// Let the server judge by measured connection speed.
    Auto = 0,
    /// 8-bit color, every effect off.
    Low = 1,
    /// 16-bit color, font smoothing and composition only.
    Middle = 2,
    /// 32-bit color, every effect on.
    High = 3,
}
impl Default for DisplayPerformance { fn default() -> Self { Self::Auto } }

impl DisplayPerformance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::Low => "Low",
            Self::Middle => "Middle",
            Self::High => "High",
        }
    }
}

// ─── Gateway ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GatewayMode {
    AutoDetect = 0,
    UseSpecified = 1,
    DoNotUse = 2,
}
impl Default for GatewayMode { fn default() -> Self { Self::AutoDetect } }

impl GatewayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AutoDetect => "AutoDetect",
            Self::UseSpecified => "UseSpecified",
            Self::DoNotUse => "DoNotUse",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GatewayLogonMethod {
    Password = 0,
    SmartCard = 1,
}
impl Default for GatewayLogonMethod { fn default() -> Self { Self::Password } }

impl GatewayLogonMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Password => "Password",
            Self::SmartCard => "SmartCard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windowed_downgrade_mapping() {
        assert_eq!(WindowResizeMode::StretchFullScreen.windowed(), WindowResizeMode::Stretch);
        assert_eq!(WindowResizeMode::FixedFullScreen.windowed(), WindowResizeMode::Fixed);
        assert_eq!(WindowResizeMode::AutoResize.windowed(), WindowResizeMode::AutoResize);
        assert_eq!(WindowResizeMode::Stretch.windowed(), WindowResizeMode::Stretch);
        assert_eq!(WindowResizeMode::Fixed.windowed(), WindowResizeMode::Fixed);
    }

    #[test]
    fn test_requires_full_screen() {
        assert!(WindowResizeMode::StretchFullScreen.requires_full_screen());
        assert!(WindowResizeMode::FixedFullScreen.requires_full_screen());
        assert!(!WindowResizeMode::Stretch.requires_full_screen());
    }

    #[test]
    fn test_full_screen_mode_from_str_loose() {
        assert_eq!(FullScreenMode::from_str_loose("disabled"), FullScreenMode::Disabled);
        assert_eq!(FullScreenMode::from_str_loose("2"), FullScreenMode::FullScreenAll);
        assert_eq!(FullScreenMode::from_str_loose("bogus"), FullScreenMode::FullScreenPrimary);
    }
}
