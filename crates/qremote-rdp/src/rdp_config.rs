//! Compiled connection descriptor — the flat `.rdp` field set.
//!
//! `RdpConfig` is the output of [`crate::compiler::compile`]: every
//! field is protocol-native (numeric mode ids, enable bits) and carries
//! no invariants of its own. It is a throwaway projection handed to the
//! external RDP engine, never persisted.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RdpConfig {
    // ── Target & credentials ─────────────────────────────────────
    pub full_address: String,
    pub username: String,
    /// Plaintext resolved at compile time; empty when the decrypt
    /// contract was unavailable.
    pub password: String,
    pub authentication_level: u32,

    // ── Screen ───────────────────────────────────────────────────
    /// 1 = windowed, 2 = full screen.
    pub screen_mode_id: u32,
    /// Only meaningful while windowed; 0 otherwise.
    pub desktop_width: u32,
    pub desktop_height: u32,
    pub use_multimon: bool,
    pub display_connection_bar: bool,
    pub smart_sizing: bool,
    pub dynamic_resolution: bool,

    // ── Performance ──────────────────────────────────────────────
    pub network_autodetect: bool,
    /// Connection-speed class 1..=7 (modem .. LAN); 0 = unset.
    pub connection_type: u32,
    pub session_bpp: u32,
    pub allow_desktop_composition: bool,
    pub allow_font_smoothing: bool,
    pub disable_full_window_drag: bool,
    pub disable_themes: bool,
    pub disable_wallpaper: bool,
    pub disable_menu_anims: bool,
    pub disable_cursor_setting: bool,

    // ── Input & audio ────────────────────────────────────────────
    /// 0 = on the local machine, 2 = remote capture of all key combos.
    pub keyboard_hook: u32,
    /// 0 = play locally, 1 = play remotely, 2 = disabled.
    pub audio_mode: u32,
    /// 0 = disabled, 1 = capture from the local machine.
    pub audio_capture_mode: u32,

    // ── Redirection ──────────────────────────────────────────────
    pub redirect_clipboard: bool,
    pub redirect_drives: bool,
    pub redirect_printers: bool,
    pub redirect_com_ports: bool,
    pub redirect_smart_cards: bool,

    // ── Session ──────────────────────────────────────────────────
    pub auto_reconnection_enabled: bool,

    // ── Gateway ──────────────────────────────────────────────────
    /// 0 = never, 1 = always, 2 = detect.
    pub gateway_usage_method: u32,
    pub gateway_hostname: String,
    /// 0 = password, 1 = smart card.
    pub gateway_credentials_source: u32,
}

impl Default for RdpConfig {
    fn default() -> Self {
        Self {
            full_address: String::new(),
            username: String::new(),
            password: String::new(),
            authentication_level: 0,
            screen_mode_id: 2,
            desktop_width: 0,
            desktop_height: 0,
            use_multimon: false,
            display_connection_bar: true,
            smart_sizing: false,
            dynamic_resolution: false,
            network_autodetect: false,
            connection_type: 0,
            session_bpp: 32,
            allow_desktop_composition: false,
            allow_font_smoothing: false,
            disable_full_window_drag: false,
            disable_themes: false,
            disable_wallpaper: false,
            disable_menu_anims: false,
            disable_cursor_setting: false,
            keyboard_hook: 0,
            audio_mode: 2,
            audio_capture_mode: 0,
            redirect_clipboard: false,
            redirect_drives: false,
            redirect_printers: false,
            redirect_com_ports: false,
            redirect_smart_cards: false,
            auto_reconnection_enabled: false,
            gateway_usage_method: 0,
            gateway_hostname: String::new(),
            gateway_credentials_source: 0,
        }
    }
}

fn bit(v: bool) -> u32 {
    if v { 1 } else { 0 }
}

impl RdpConfig {
    /// Render the descriptor as Microsoft `.rdp` file text
    /// (`key:type:value` lines, CRLF separated) for engines that consume
    /// the file format directly. The password is deliberately left out;
    /// `.rdp` files carry credentials via the OS credential store.
    pub fn to_rdp_string(&self) -> String {
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!("full address:s:{}", self.full_address));
        if !self.username.is_empty() {
            lines.push(format!("username:s:{}", self.username));
        }
        lines.push(format!("authentication level:i:{}", self.authentication_level));

        lines.push(format!("screen mode id:i:{}", self.screen_mode_id));
        if self.desktop_width > 0 && self.desktop_height > 0 {
            lines.push(format!("desktopwidth:i:{}", self.desktop_width));
            lines.push(format!("desktopheight:i:{}", self.desktop_height));
        }
        lines.push(format!("use multimon:i:{}", bit(self.use_multimon)));
        lines.push(format!("displayconnectionbar:i:{}", bit(self.display_connection_bar)));
        lines.push(format!("smart sizing:i:{}", bit(self.smart_sizing)));
        lines.push(format!("dynamic resolution:i:{}", bit(self.dynamic_resolution)));

        lines.push(format!("networkautodetect:i:{}", bit(self.network_autodetect)));
        if self.connection_type > 0 {
            lines.push(format!("connection type:i:{}", self.connection_type));
        }
        lines.push(format!("session bpp:i:{}", self.session_bpp));
        lines.push(format!("allow desktop composition:i:{}", bit(self.allow_desktop_composition)));
        lines.push(format!("allow font smoothing:i:{}", bit(self.allow_font_smoothing)));
        lines.push(format!("disable full window drag:i:{}", bit(self.disable_full_window_drag)));
        lines.push(format!("disable themes:i:{}", bit(self.disable_themes)));
        lines.push(format!("disable wallpaper:i:{}", bit(self.disable_wallpaper)));
        lines.push(format!("disable menu anims:i:{}", bit(self.disable_menu_anims)));
        lines.push(format!("disable cursor setting:i:{}", bit(self.disable_cursor_setting)));

        lines.push(format!("keyboardhook:i:{}", self.keyboard_hook));
        lines.push(format!("audiomode:i:{}", self.audio_mode));
        lines.push(format!("audiocapturemode:i:{}", self.audio_capture_mode));

        lines.push(format!("redirectclipboard:i:{}", bit(self.redirect_clipboard)));
        if self.redirect_drives {
            lines.push("drivestoredirect:s:*".to_string());
        }
        lines.push(format!("redirectprinters:i:{}", bit(self.redirect_printers)));
        lines.push(format!("redirectcomports:i:{}", bit(self.redirect_com_ports)));
        lines.push(format!("redirectsmartcards:i:{}", bit(self.redirect_smart_cards)));

        lines.push(format!("autoreconnection enabled:i:{}", bit(self.auto_reconnection_enabled)));

        lines.push(format!("gatewayusagemethod:i:{}", self.gateway_usage_method));
        if !self.gateway_hostname.is_empty() {
            lines.push(format!("gatewayhostname:s:{}", self.gateway_hostname));
        }
        lines.push(format!("gatewaycredentialssource:i:{}", self.gateway_credentials_source));

        lines.join("\r\n")
    }
}
