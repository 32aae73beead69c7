//! Serialized profile shape.
//!
//! `ProfileSnapshot` is the stable persistence contract: plain data,
//! camelCase keys, one field per profile setting. Restoring a snapshot
//! bypasses the invariant-enforcing setters (a well-formed snapshot
//! already satisfies the invariants) and runs with notifications
//! suppressed, so a bulk load never fans out per-field events against a
//! half-restored profile.

use serde::{Deserialize, Serialize};

use crate::profile::RdpProfile;
use crate::types::{
    DisplayPerformance, FullScreenMode, GatewayLogonMethod, GatewayMode, WindowResizeMode,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSnapshot {
    pub id: String,
    pub name: String,

    pub address: String,
    pub port: String,
    pub username: String,
    pub password: String,

    pub full_screen_mode: FullScreenMode,
    pub is_full_screen_connection: bool,
    pub show_connection_bar: bool,
    pub window_resize_mode: WindowResizeMode,
    pub width: u32,
    pub height: u32,
    pub display_performance: DisplayPerformance,

    pub enable_clipboard: bool,
    pub enable_disk_drives: bool,
    pub enable_key_combinations: bool,
    pub enable_sounds: bool,
    pub enable_audio_capture: bool,
    pub enable_ports: bool,
    pub enable_printers: bool,
    pub enable_smart_cards: bool,

    pub gateway_mode: GatewayMode,
    pub gateway_bypass_for_local: bool,
    pub gateway_host_name: String,
    pub gateway_logon_method: GatewayLogonMethod,
    pub gateway_username: String,
    pub gateway_password: String,

    #[serde(default)]
    pub local_setting: LocalSettingSnapshot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalSettingSnapshot {
    #[serde(default)]
    pub last_session_full_screen: bool,
    #[serde(default = "default_screen_index")]
    pub last_session_screen_index: i32,
}

impl Default for LocalSettingSnapshot {
    fn default() -> Self {
        Self { last_session_full_screen: false, last_session_screen_index: -1 }
    }
}

fn default_screen_index() -> i32 {
    -1
}

impl RdpProfile {
    pub fn to_snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            id: self.id().to_string(),
            name: self.name().to_string(),
            address: self.address().to_string(),
            port: self.port().to_string(),
            username: self.username().to_string(),
            password: self.password().to_string(),
            full_screen_mode: self.full_screen_mode(),
            is_full_screen_connection: self.is_full_screen_connection(),
            show_connection_bar: self.show_connection_bar(),
            window_resize_mode: self.window_resize_mode(),
            width: self.width(),
            height: self.height(),
            display_performance: self.display_performance(),
            enable_clipboard: self.enable_clipboard(),
            enable_disk_drives: self.enable_disk_drives(),
            enable_key_combinations: self.enable_key_combinations(),
            enable_sounds: self.enable_sounds(),
            enable_audio_capture: self.enable_audio_capture(),
            enable_ports: self.enable_ports(),
            enable_printers: self.enable_printers(),
            enable_smart_cards: self.enable_smart_cards(),
            gateway_mode: self.gateway_mode(),
            gateway_bypass_for_local: self.gateway_bypass_for_local(),
            gateway_host_name: self.gateway_host_name().to_string(),
            gateway_logon_method: self.gateway_logon_method(),
            gateway_username: self.gateway_username().to_string(),
            gateway_password: self.gateway_password().to_string(),
            local_setting: LocalSettingSnapshot {
                last_session_full_screen: self.local_setting().last_session_full_screen(),
                last_session_screen_index: self.local_setting().last_session_screen_index(),
            },
        }
    }

    pub fn from_snapshot(snapshot: ProfileSnapshot) -> Self {
        let mut profile = Self::new();
        profile.apply_snapshot(snapshot);
        profile
    }

    pub fn to_json(&self) -> String {
        // A snapshot is plain data; serializing it cannot fail.
        serde_json::to_string_pretty(&self.to_snapshot()).unwrap_or_default()
    }

    /// Parse a persisted snapshot. Malformed input yields no profile,
    /// never a partially-initialized one.
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<ProfileSnapshot>(json) {
            Ok(snapshot) => Some(Self::from_snapshot(snapshot)),
            Err(e) => {
                log::warn!("discarding unreadable profile snapshot: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_json_round_trip_preserves_every_field() {
        let mut p = RdpProfile::new();
        p.set_name("build box");
        p.set_address("10.1.2.3");
        p.set_port("3390");
        p.set_username("builder");
        p.set_password("ZW5jcnlwdGVk");
        p.set_full_screen_mode(FullScreenMode::Disabled);
        p.set_window_resize_mode(WindowResizeMode::Stretch);
        p.set_width(1280);
        p.set_height(1024);
        p.set_display_performance(DisplayPerformance::Middle);
        p.set_enable_printers(true);
        p.set_gateway_mode(GatewayMode::UseSpecified);
        p.set_gateway_host_name("gw.corp.example");
        p.set_gateway_logon_method(GatewayLogonMethod::SmartCard);
        p.set_last_session_full_screen(true);
        p.set_last_session_screen_index(1);

        let restored = RdpProfile::from_json(&p.to_json()).unwrap();
        assert_eq!(restored.id(), p.id());
        assert_eq!(restored.name(), "build box");
        assert_eq!(restored.address(), "10.1.2.3");
        assert_eq!(restored.port(), "3390");
        assert_eq!(restored.full_screen_mode(), FullScreenMode::Disabled);
        assert_eq!(restored.window_resize_mode(), WindowResizeMode::Stretch);
        assert_eq!((restored.width(), restored.height()), (1280, 1024));
        assert_eq!(restored.display_performance(), DisplayPerformance::Middle);
        assert!(restored.enable_printers());
        assert_eq!(restored.gateway_mode(), GatewayMode::UseSpecified);
        assert_eq!(restored.gateway_host_name(), "gw.corp.example");
        assert_eq!(restored.gateway_logon_method(), GatewayLogonMethod::SmartCard);
        assert!(restored.local_setting().last_session_full_screen());
        assert_eq!(restored.local_setting().last_session_screen_index(), 1);
    }

    #[test]
    fn test_snapshot_keys_are_camel_case() {
        let json = RdpProfile::new().to_json();
        assert!(json.contains("\"fullScreenMode\""));
        assert!(json.contains("\"windowResizeMode\""));
        assert!(json.contains("\"enableClipboard\""));
        assert!(json.contains("\"gatewayBypassForLocal\""));
        assert!(json.contains("\"localSetting\""));
        assert!(json.contains("\"lastSessionScreenIndex\""));
    }

    #[test]
    fn test_malformed_json_yields_no_profile() {
        assert!(RdpProfile::from_json("{ definitely not json").is_none());
        assert!(RdpProfile::from_json("{}").is_none());
        assert!(RdpProfile::from_json("[1, 2, 3]").is_none());
    }

    #[test]
    fn test_missing_local_setting_falls_back_to_defaults() {
        let mut value: serde_json::Value =
            serde_json::from_str(&RdpProfile::new().to_json()).unwrap();
        value.as_object_mut().unwrap().remove("localSetting");

        let restored = RdpProfile::from_json(&value.to_string()).unwrap();
        assert!(!restored.local_setting().last_session_full_screen());
        assert_eq!(restored.local_setting().last_session_screen_index(), -1);
    }

    #[test]
    fn test_tampered_snapshot_is_normalized_on_restore() {
        // Well-typed JSON can still pair settings the setters never
        // allow; the restore has to end in a consistent profile.
        let mut value: serde_json::Value =
            serde_json::from_str(&RdpProfile::new().to_json()).unwrap();
        let fields = value.as_object_mut().unwrap();
        fields.insert("enableClipboard".to_string(), false.into());
        fields.insert("enableSounds".to_string(), true.into());
        fields.insert("fullScreenMode".to_string(), "Disabled".into());
        fields.insert("isFullScreenConnection".to_string(), true.into());
        fields.insert("windowResizeMode".to_string(), "StretchFullScreen".into());

        let restored = RdpProfile::from_json(&value.to_string()).unwrap();
        assert!(!restored.enable_clipboard());
        assert!(!restored.enable_sounds());
        assert!(!restored.is_full_screen_connection());
        assert_eq!(restored.window_resize_mode(), WindowResizeMode::Stretch);
    }

    #[test]
    fn test_restored_full_screen_all_forces_connection_flag() {
        let mut value: serde_json::Value =
            serde_json::from_str(&RdpProfile::new().to_json()).unwrap();
        let fields = value.as_object_mut().unwrap();
        fields.insert("fullScreenMode".to_string(), "FullScreenAll".into());
        fields.insert("isFullScreenConnection".to_string(), false.into());

        let restored = RdpProfile::from_json(&value.to_string()).unwrap();
        assert!(restored.is_full_screen_connection());
    }

    #[test]
    fn test_bulk_restore_emits_no_events() {
        let snapshot = {
            let mut p = RdpProfile::new();
            p.set_address("10.0.0.9");
            p.set_full_screen_mode(FullScreenMode::FullScreenAll);
            p.set_enable_clipboard(false);
            p.to_snapshot()
        };

        let mut target = RdpProfile::new();
        let seen = Rc::new(RefCell::new(Vec::<String>::new()));
        let sink = Rc::clone(&seen);
        target.on_change(move |field| sink.borrow_mut().push(field.to_string()));

        target.apply_snapshot(snapshot);
        assert!(seen.borrow().is_empty());
        assert_eq!(target.address(), "10.0.0.9");
        assert!(!target.enable_clipboard());
        assert!(!target.enable_sounds());

        // Notifications resume after the restore.
        target.set_port("3391");
        assert_eq!(seen.borrow().as_slice(), ["port"]);
    }
}
