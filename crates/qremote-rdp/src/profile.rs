//! `RdpProfile` — one saved RDP connection target.
//!
//! Every setting is an [`Observed`] cell, so edits surface as change
//! events the UI can bind to. Setters keep mutually-dependent settings
//! consistent by adjusting the dependent field *through its own cell*
//! before or after storing the edited one; each adjustment emits its own
//! event, so watchers see the full cascade rather than a silent fixup.
//!
//! Invariants held after every mutation:
//! 1. A full-screen-qualified resize mode never coexists with
//!    `FullScreenMode::Disabled` (downgraded to its windowed twin).
//! 2. `FullScreenAll` forces `is_full_screen_connection`; `Disabled`
//!    clears it.
//! 3. Disabling clipboard drags sound playback down with it; enabling
//!    sound playback drags clipboard up. The asymmetry is deliberate.
//! 4. Width/height only matter while windowed (the compiler suppresses
//!    them otherwise).
//!
//! Cascades are single-pass: every rule writes the sibling cell
//! directly, never through the sibling's public setter, so there is no
//! re-entry and no fixed-point iteration.

use qremote_core::{Notifier, Observed};

use crate::credentials::SecretCipher;
use crate::snapshot::ProfileSnapshot;
use crate::types::{
    DisplayPerformance, FullScreenMode, GatewayLogonMethod, GatewayMode, WindowResizeMode,
};

/// Per-client session memory. Not part of the portable profile identity;
/// it just restores the user's last full-screen choice on reconnect.
#[derive(Debug)]
pub struct LocalSetting {
    last_session_full_screen: Observed<bool>,
    last_session_screen_index: Observed<i32>,
}

impl Default for LocalSetting {
    fn default() -> Self {
        Self {
            last_session_full_screen: Observed::new("lastSessionFullScreen", false),
            last_session_screen_index: Observed::new("lastSessionScreenIndex", -1),
        }
    }
}

impl LocalSetting {
    pub fn last_session_full_screen(&self) -> bool {
        self.last_session_full_screen.value()
    }

    pub fn last_session_screen_index(&self) -> i32 {
        self.last_session_screen_index.value()
    }
}

#[derive(Debug)]
pub struct RdpProfile {
    id: String,
    name: Observed<String>,

    // ── Identity / transport ────────────────────────────────────
    address: Observed<String>,
    port: Observed<String>,
    username: Observed<String>,
    /// Encrypted password reference; plaintext only ever exists as the
    /// return value of a [`SecretCipher`] call.
    password: Observed<String>,

    // ── Display ─────────────────────────────────────────────────
    full_screen_mode: Observed<FullScreenMode>,
    is_full_screen_connection: Observed<bool>,
    show_connection_bar: Observed<bool>,
    window_resize_mode: Observed<WindowResizeMode>,
    width: Observed<u32>,
    height: Observed<u32>,
    display_performance: Observed<DisplayPerformance>,

    // ── Resource redirection ────────────────────────────────────
    enable_clipboard: Observed<bool>,
    enable_disk_drives: Observed<bool>,
    enable_key_combinations: Observed<bool>,
    enable_sounds: Observed<bool>,
    enable_audio_capture: Observed<bool>,
    enable_ports: Observed<bool>,
    enable_printers: Observed<bool>,
    enable_smart_cards: Observed<bool>,

    // ── Gateway ─────────────────────────────────────────────────
    gateway_mode: Observed<GatewayMode>,
    gateway_bypass_for_local: Observed<bool>,
    gateway_host_name: Observed<String>,
    gateway_logon_method: Observed<GatewayLogonMethod>,
    gateway_username: Observed<String>,
    gateway_password: Observed<String>,

    local_setting: LocalSetting,

    events: Notifier,
}

impl Default for RdpProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl RdpProfile {
    /// A fresh profile with the documented defaults: port 3389,
    /// Administrator, full screen on the primary monitor, clipboard /
    /// drives / key combinations / sound on, everything else off.
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: Observed::new("name", String::new()),
            address: Observed::new("address", String::new()),
            port: Observed::new("port", "3389".to_string()),
            username: Observed::new("username", "Administrator".to_string()),
            password: Observed::new("password", String::new()),
            full_screen_mode: Observed::new("fullScreenMode", FullScreenMode::FullScreenPrimary),
            is_full_screen_connection: Observed::new("isFullScreenConnection", false),
            show_connection_bar: Observed::new("showConnectionBar", true),
            window_resize_mode: Observed::new("windowResizeMode", WindowResizeMode::AutoResize),
            width: Observed::new("width", 800),
            height: Observed::new("height", 600),
            display_performance: Observed::new("displayPerformance", DisplayPerformance::Auto),
            enable_clipboard: Observed::new("enableClipboard", true),
            enable_disk_drives: Observed::new("enableDiskDrives", true),
            enable_key_combinations: Observed::new("enableKeyCombinations", true),
            enable_sounds: Observed::new("enableSounds", true),
            enable_audio_capture: Observed::new("enableAudioCapture", false),
            enable_ports: Observed::new("enablePorts", false),
            enable_printers: Observed::new("enablePrinters", false),
            enable_smart_cards: Observed::new("enableSmartCards", false),
            gateway_mode: Observed::new("gatewayMode", GatewayMode::AutoDetect),
            gateway_bypass_for_local: Observed::new("gatewayBypassForLocal", true),
            gateway_host_name: Observed::new("gatewayHostName", String::new()),
            gateway_logon_method: Observed::new("gatewayLogonMethod", GatewayLogonMethod::Password),
            gateway_username: Observed::new("gatewayUsername", String::new()),
            gateway_password: Observed::new("gatewayPassword", String::new()),
            local_setting: LocalSetting::default(),
            events: Notifier::new(),
        }
    }

    /// Watch this profile. The callback receives the logical name of
    /// each field that changed, including fields adjusted by cascades.
    pub fn on_change(&mut self, listener: impl FnMut(&str) + 'static) {
        self.events.subscribe(listener);
    }

    // ── Getters ─────────────────────────────────────────────────

    pub fn id(&self) -> &str { &self.id }
    pub fn name(&self) -> &str { self.name.get() }
    pub fn address(&self) -> &str { self.address.get() }
    pub fn port(&self) -> &str { self.port.get() }
    pub fn username(&self) -> &str { self.username.get() }
    pub fn password(&self) -> &str { self.password.get() }
    pub fn full_screen_mode(&self) -> FullScreenMode { self.full_screen_mode.value() }
    pub fn is_full_screen_connection(&self) -> bool { self.is_full_screen_connection.value() }
    pub fn show_connection_bar(&self) -> bool { self.show_connection_bar.value() }
    pub fn window_resize_mode(&self) -> WindowResizeMode { self.window_resize_mode.value() }
    pub fn width(&self) -> u32 { self.width.value() }
    pub fn height(&self) -> u32 { self.height.value() }
    pub fn display_performance(&self) -> DisplayPerformance { self.display_performance.value() }
    pub fn enable_clipboard(&self) -> bool { self.enable_clipboard.value() }
    pub fn enable_disk_drives(&self) -> bool { self.enable_disk_drives.value() }
    pub fn enable_key_combinations(&self) -> bool { self.enable_key_combinations.value() }
    pub fn enable_sounds(&self) -> bool { self.enable_sounds.value() }
    pub fn enable_audio_capture(&self) -> bool { self.enable_audio_capture.value() }
    pub fn enable_ports(&self) -> bool { self.enable_ports.value() }
    pub fn enable_printers(&self) -> bool { self.enable_printers.value() }
    pub fn enable_smart_cards(&self) -> bool { self.enable_smart_cards.value() }
    pub fn gateway_mode(&self) -> GatewayMode { self.gateway_mode.value() }
    pub fn gateway_bypass_for_local(&self) -> bool { self.gateway_bypass_for_local.value() }
    pub fn gateway_host_name(&self) -> &str { self.gateway_host_name.get() }
    pub fn gateway_logon_method(&self) -> GatewayLogonMethod { self.gateway_logon_method.value() }
    pub fn gateway_username(&self) -> &str { self.gateway_username.get() }
    pub fn gateway_password(&self) -> &str { self.gateway_password.get() }
    pub fn local_setting(&self) -> &LocalSetting { &self.local_setting }

    // ── Plain setters ───────────────────────────────────────────

    pub fn set_name(&mut self, v: impl Into<String>) {
        self.name.set(v.into(), &mut self.events);
    }

    pub fn set_address(&mut self, v: impl Into<String>) {
        self.address.set(v.into(), &mut self.events);
    }

    pub fn set_port(&mut self, v: impl Into<String>) {
        self.port.set(v.into(), &mut self.events);
    }

    pub fn set_username(&mut self, v: impl Into<String>) {
        self.username.set(v.into(), &mut self.events);
    }

    /// Stores the encrypted reference, never plaintext.
    pub fn set_password(&mut self, v: impl Into<String>) {
        self.password.set(v.into(), &mut self.events);
    }

    pub fn set_show_connection_bar(&mut self, v: bool) {
        self.show_connection_bar.set(v, &mut self.events);
    }

    pub fn set_width(&mut self, v: u32) {
        self.width.set(v, &mut self.events);
    }

    pub fn set_height(&mut self, v: u32) {
        self.height.set(v, &mut self.events);
    }

    pub fn set_display_performance(&mut self, v: DisplayPerformance) {
        self.display_performance.set(v, &mut self.events);
    }

    pub fn set_is_full_screen_connection(&mut self, v: bool) {
        self.is_full_screen_connection.set(v, &mut self.events);
    }

    pub fn set_enable_disk_drives(&mut self, v: bool) {
        self.enable_disk_drives.set(v, &mut self.events);
    }

    pub fn set_enable_key_combinations(&mut self, v: bool) {
        self.enable_key_combinations.set(v, &mut self.events);
    }

    pub fn set_enable_audio_capture(&mut self, v: bool) {
        self.enable_audio_capture.set(v, &mut self.events);
    }

    pub fn set_enable_ports(&mut self, v: bool) {
        self.enable_ports.set(v, &mut self.events);
    }

    pub fn set_enable_printers(&mut self, v: bool) {
        self.enable_printers.set(v, &mut self.events);
    }

    pub fn set_enable_smart_cards(&mut self, v: bool) {
        self.enable_smart_cards.set(v, &mut self.events);
    }

    pub fn set_gateway_mode(&mut self, v: GatewayMode) {
        self.gateway_mode.set(v, &mut self.events);
    }

    pub fn set_gateway_bypass_for_local(&mut self, v: bool) {
        self.gateway_bypass_for_local.set(v, &mut self.events);
    }

    pub fn set_gateway_host_name(&mut self, v: impl Into<String>) {
        self.gateway_host_name.set(v.into(), &mut self.events);
    }

    pub fn set_gateway_logon_method(&mut self, v: GatewayLogonMethod) {
        self.gateway_logon_method.set(v, &mut self.events);
    }

    pub fn set_gateway_username(&mut self, v: impl Into<String>) {
        self.gateway_username.set(v.into(), &mut self.events);
    }

    pub fn set_gateway_password(&mut self, v: impl Into<String>) {
        self.gateway_password.set(v.into(), &mut self.events);
    }

    pub fn set_last_session_full_screen(&mut self, v: bool) {
        self.local_setting
            .last_session_full_screen
            .set(v, &mut self.events);
    }

    pub fn set_last_session_screen_index(&mut self, v: i32) {
        self.local_setting
            .last_session_screen_index
            .set(v, &mut self.events);
    }

    // ── Coupled setters ─────────────────────────────────────────

    /// Switching to `FullScreenAll` implies a full-screen connection;
    /// switching to `Disabled` clears it and downgrades a
    /// full-screen-qualified resize mode to its windowed twin.
    pub fn set_full_screen_mode(&mut self, v: FullScreenMode) {
        self.full_screen_mode.set(v, &mut self.events);
        match v {
            FullScreenMode::FullScreenAll => {
                self.is_full_screen_connection.set(true, &mut self.events);
            }
            FullScreenMode::FullScreenPrimary => {}
            FullScreenMode::Disabled => {
                self.is_full_screen_connection.set(false, &mut self.events);
                let downgraded = self.window_resize_mode.value().windowed();
                self.window_resize_mode.set(downgraded, &mut self.events);
            }
        }
    }

    /// A full-screen-qualified mode requested while windowed is stored
    /// as its windowed twin; the setter normalizes, it does not reject.
    pub fn set_window_resize_mode(&mut self, v: WindowResizeMode) {
        let v = if self.full_screen_mode.value() == FullScreenMode::Disabled {
            v.windowed()
        } else {
            v
        };
        self.window_resize_mode.set(v, &mut self.events);
    }

    /// Disabling the clipboard takes sound playback down first; sound
    /// redirection rides on the clipboard channel.
    pub fn set_enable_clipboard(&mut self, v: bool) {
        if !v && self.enable_sounds.value() {
            self.enable_sounds.set(false, &mut self.events);
        }
        self.enable_clipboard.set(v, &mut self.events);
    }

    /// Enabling sound playback pulls the clipboard up first. The reverse
    /// of the clipboard rule on purpose: the disable direction is owned
    /// by the clipboard, the enable direction by sound.
    pub fn set_enable_sounds(&mut self, v: bool) {
        if v && !self.enable_clipboard.value() {
            self.enable_clipboard.set(true, &mut self.events);
        }
        self.enable_sounds.set(v, &mut self.events);
    }

    /// Overwrite every field from `snapshot` with notifications
    /// suppressed: a bulk restore is one logical change, not a cascade
    /// of edits against a half-restored profile. Values go through the
    /// cells directly rather than the setters, then get normalized once
    /// at the end — a hand-edited snapshot can pair fields the setters
    /// would never allow, and the restored profile must satisfy the
    /// same invariants an edited one does.
    pub fn apply_snapshot(&mut self, snapshot: ProfileSnapshot) {
        let Self {
            id,
            name,
            address,
            port,
            username,
            password,
            full_screen_mode,
            is_full_screen_connection,
            show_connection_bar,
            window_resize_mode,
            width,
            height,
            display_performance,
            enable_clipboard,
            enable_disk_drives,
            enable_key_combinations,
            enable_sounds,
            enable_audio_capture,
            enable_ports,
            enable_printers,
            enable_smart_cards,
            gateway_mode,
            gateway_bypass_for_local,
            gateway_host_name,
            gateway_logon_method,
            gateway_username,
            gateway_password,
            local_setting,
            events,
        } = self;

        *id = snapshot.id;
        events.muted(|ev| {
            name.set(snapshot.name, ev);
            address.set(snapshot.address, ev);
            port.set(snapshot.port, ev);
            username.set(snapshot.username, ev);
            password.set(snapshot.password, ev);
            full_screen_mode.set(snapshot.full_screen_mode, ev);
            is_full_screen_connection.set(snapshot.is_full_screen_connection, ev);
            show_connection_bar.set(snapshot.show_connection_bar, ev);
            window_resize_mode.set(snapshot.window_resize_mode, ev);
            width.set(snapshot.width, ev);
            height.set(snapshot.height, ev);
            display_performance.set(snapshot.display_performance, ev);
            enable_clipboard.set(snapshot.enable_clipboard, ev);
            enable_disk_drives.set(snapshot.enable_disk_drives, ev);
            enable_key_combinations.set(snapshot.enable_key_combinations, ev);
            enable_sounds.set(snapshot.enable_sounds, ev);
            enable_audio_capture.set(snapshot.enable_audio_capture, ev);
            enable_ports.set(snapshot.enable_ports, ev);
            enable_printers.set(snapshot.enable_printers, ev);
            enable_smart_cards.set(snapshot.enable_smart_cards, ev);
            gateway_mode.set(snapshot.gateway_mode, ev);
            gateway_bypass_for_local.set(snapshot.gateway_bypass_for_local, ev);
            gateway_host_name.set(snapshot.gateway_host_name, ev);
            gateway_logon_method.set(snapshot.gateway_logon_method, ev);
            gateway_username.set(snapshot.gateway_username, ev);
            gateway_password.set(snapshot.gateway_password, ev);
            local_setting
                .last_session_full_screen
                .set(snapshot.local_setting.last_session_full_screen, ev);
            local_setting
                .last_session_screen_index
                .set(snapshot.local_setting.last_session_screen_index, ev);

            // Normalization pass over the restored state.
            match full_screen_mode.value() {
                FullScreenMode::Disabled => {
                    is_full_screen_connection.set(false, ev);
                    let downgraded = window_resize_mode.value().windowed();
                    window_resize_mode.set(downgraded, ev);
                }
                FullScreenMode::FullScreenPrimary => {}
                FullScreenMode::FullScreenAll => {
                    is_full_screen_connection.set(true, ev);
                }
            }
            if !enable_clipboard.value() && enable_sounds.value() {
                enable_sounds.set(false, ev);
            }
        });
    }

    /// Decrypt the gateway secret through the cipher contract. Failure
    /// degrades to an empty credential, never to the raw ciphertext.
    pub fn decrypted_gateway_password(&self, cipher: &dyn SecretCipher) -> String {
        match cipher.decrypt(self.gateway_password.get()) {
            Ok(plain) => plain,
            Err(e) => {
                log::warn!("gateway password for profile {} not decryptable: {}", self.id, e);
                String::new()
            }
        }
    }
}
