//! Profile → descriptor lowering.
//!
//! Pure projection of a consistent [`RdpProfile`] into the flat
//! [`RdpConfig`] field set. Nothing here mutates the profile or depends
//! on anything but the profile and the cipher outcome, so compiling the
//! same profile twice yields identical descriptors. Rules run in a
//! fixed order and write disjoint descriptor fields, except for the
//! redirection overlays, which only ever *raise* baseline fields.

use crate::credentials::SecretCipher;
use crate::profile::RdpProfile;
use crate::rdp_config::RdpConfig;
use crate::types::{DisplayPerformance, FullScreenMode, GatewayLogonMethod, GatewayMode, WindowResizeMode};

/// Lower `profile` into a connection descriptor.
///
/// Total for every well-typed profile: the only external call is the
/// cipher, and its failure degrades to an empty credential.
pub fn compile(profile: &RdpProfile, cipher: &dyn SecretCipher) -> RdpConfig {
    let mut config = RdpConfig {
        full_address: format!("{}:{}", profile.address(), profile.port()),
        username: profile.username().to_string(),
        authentication_level: 0,
        ..Default::default()
    };

    // Screen mode. Width/height are windowed-only and stay out of the
    // descriptor for both full-screen modes.
    match profile.full_screen_mode() {
        FullScreenMode::Disabled => {
            config.screen_mode_id = 1;
            config.desktop_width = profile.width();
            config.desktop_height = profile.height();
        }
        FullScreenMode::FullScreenPrimary => {
            config.screen_mode_id = 2;
        }
        FullScreenMode::FullScreenAll => {
            config.screen_mode_id = 2;
            config.use_multimon = true;
        }
    }

    config.display_connection_bar = profile.show_connection_bar();

    match profile.window_resize_mode() {
        WindowResizeMode::AutoResize => {
            config.smart_sizing = false;
            config.dynamic_resolution = true;
        }
        WindowResizeMode::Stretch | WindowResizeMode::StretchFullScreen => {
            config.smart_sizing = true;
            config.dynamic_resolution = false;
        }
        WindowResizeMode::Fixed | WindowResizeMode::FixedFullScreen => {
            config.smart_sizing = false;
            config.dynamic_resolution = false;
        }
    }

    // Performance preset expansion.
    config.network_autodetect = false;
    match profile.display_performance() {
        DisplayPerformance::Auto => {
            config.network_autodetect = true;
        }
        DisplayPerformance::Low => {
            config.connection_type = 1;
            config.session_bpp = 8;
            config.allow_desktop_composition = false;
            config.allow_font_smoothing = false;
            config.disable_full_window_drag = true;
            config.disable_themes = true;
            config.disable_wallpaper = true;
            config.disable_menu_anims = true;
            config.disable_cursor_setting = true;
        }
        DisplayPerformance::Middle => {
            config.connection_type = 3;
            config.session_bpp = 16;
            config.allow_desktop_composition = true;
            config.allow_font_smoothing = true;
            config.disable_full_window_drag = true;
            config.disable_themes = true;
            config.disable_wallpaper = true;
            config.disable_menu_anims = true;
            config.disable_cursor_setting = true;
        }
        DisplayPerformance::High => {
            config.connection_type = 6;
            config.session_bpp = 32;
            config.allow_desktop_composition = true;
            config.allow_font_smoothing = true;
            config.disable_full_window_drag = false;
            config.disable_themes = false;
            config.disable_wallpaper = false;
            config.disable_menu_anims = false;
            config.disable_cursor_setting = false;
        }
    }

    // Baseline, then enable-only redirection overlays. Absent profile
    // flags leave the baseline alone; nothing is turned back off here.
    config.keyboard_hook = 0;
    config.audio_mode = 2;
    config.audio_capture_mode = 0;

    if profile.enable_disk_drives() {
        config.redirect_drives = true;
    }
    if profile.enable_clipboard() {
        config.redirect_clipboard = true;
    }
    if profile.enable_printers() {
        config.redirect_printers = true;
    }
    if profile.enable_ports() {
        config.redirect_com_ports = true;
    }
    if profile.enable_smart_cards() {
        config.redirect_smart_cards = true;
    }
    if profile.enable_key_combinations() {
        config.keyboard_hook = 2;
    }
    if profile.enable_sounds() {
        config.audio_mode = 0;
    }
    if profile.enable_audio_capture() {
        config.audio_capture_mode = 1;
    }

    config.auto_reconnection_enabled = true;

    match profile.gateway_mode() {
        GatewayMode::DoNotUse => {
            config.gateway_usage_method = 0;
        }
        GatewayMode::UseSpecified => {
            config.gateway_usage_method = 1;
            config.gateway_hostname = profile.gateway_host_name().to_string();
        }
        GatewayMode::AutoDetect => {
            config.gateway_usage_method = 2;
        }
    }
    config.gateway_credentials_source = match profile.gateway_logon_method() {
        GatewayLogonMethod::Password => 0,
        GatewayLogonMethod::SmartCard => 1,
    };

    config.password = match cipher.decrypt(profile.password()) {
        Ok(plain) => plain,
        Err(e) => {
            log::warn!("credential for profile {} not decryptable, connecting without: {}", profile.id(), e);
            String::new()
        }
    };

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{Base64Cipher, NoCipher};

    fn profile() -> RdpProfile {
        let mut p = RdpProfile::new();
        p.set_address("srv.example.com");
        p
    }

    #[test]
    fn test_compile_is_idempotent() {
        let p = profile();
        assert_eq!(compile(&p, &NoCipher), compile(&p, &NoCipher));
    }

    #[test]
    fn test_windowed_mode_carries_dimensions() {
        let mut p = profile();
        p.set_full_screen_mode(FullScreenMode::Disabled);
        p.set_width(1440);
        p.set_height(900);

        let config = compile(&p, &NoCipher);
        assert_eq!(config.screen_mode_id, 1);
        assert_eq!(config.desktop_width, 1440);
        assert_eq!(config.desktop_height, 900);
        assert!(!config.use_multimon);
    }

    #[test]
    fn test_full_screen_suppresses_dimensions() {
        let mut p = profile();
        p.set_full_screen_mode(FullScreenMode::FullScreenPrimary);
        p.set_width(1440);
        p.set_height(900);

        let config = compile(&p, &NoCipher);
        assert_eq!(config.screen_mode_id, 2);
        assert_eq!(config.desktop_width, 0);
        assert_eq!(config.desktop_height, 0);
    }

    #[test]
    fn test_full_screen_all_sets_multimon() {
        let mut p = profile();
        p.set_full_screen_mode(FullScreenMode::FullScreenAll);
        let config = compile(&p, &NoCipher);
        assert_eq!(config.screen_mode_id, 2);
        assert!(config.use_multimon);
    }

    #[test]
    fn test_resize_mode_lowering() {
        let mut p = profile();

        p.set_window_resize_mode(WindowResizeMode::AutoResize);
        let config = compile(&p, &NoCipher);
        assert!(!config.smart_sizing);
        assert!(config.dynamic_resolution);

        p.set_window_resize_mode(WindowResizeMode::StretchFullScreen);
        let config = compile(&p, &NoCipher);
        assert!(config.smart_sizing);
        assert!(!config.dynamic_resolution);

        p.set_window_resize_mode(WindowResizeMode::FixedFullScreen);
        let config = compile(&p, &NoCipher);
        assert!(!config.smart_sizing);
        assert!(!config.dynamic_resolution);
    }

    #[test]
    fn test_auto_preset_only_sets_autodetect() {
        let mut p = profile();
        p.set_display_performance(DisplayPerformance::Auto);
        let config = compile(&p, &NoCipher);
        assert!(config.network_autodetect);
        assert_eq!(config.connection_type, 0);
        assert_eq!(config.session_bpp, 32);
    }

    #[test]
    fn test_low_preset_expansion() {
        let mut p = profile();
        p.set_display_performance(DisplayPerformance::Low);
        let config = compile(&p, &NoCipher);
        assert!(!config.network_autodetect);
        assert_eq!(config.connection_type, 1);
        assert_eq!(config.session_bpp, 8);
        assert!(!config.allow_desktop_composition);
        assert!(!config.allow_font_smoothing);
        assert!(config.disable_full_window_drag);
        assert!(config.disable_themes);
        assert!(config.disable_wallpaper);
        assert!(config.disable_menu_anims);
        assert!(config.disable_cursor_setting);
    }

    #[test]
    fn test_middle_preset_expansion() {
        let mut p = profile();
        p.set_display_performance(DisplayPerformance::Middle);
        let config = compile(&p, &NoCipher);
        assert_eq!(config.connection_type, 3);
        assert_eq!(config.session_bpp, 16);
        assert!(config.allow_desktop_composition);
        assert!(config.allow_font_smoothing);
        assert!(config.disable_full_window_drag);
        assert!(config.disable_wallpaper);
    }

    #[test]
    fn test_high_preset_expansion() {
        let mut p = profile();
        p.set_display_performance(DisplayPerformance::High);
        let config = compile(&p, &NoCipher);
        assert_eq!(config.connection_type, 6);
        assert_eq!(config.session_bpp, 32);
        assert!(config.allow_desktop_composition);
        assert!(config.allow_font_smoothing);
        assert!(!config.disable_full_window_drag);
        assert!(!config.disable_themes);
        assert!(!config.disable_wallpaper);
        assert!(!config.disable_menu_anims);
        assert!(!config.disable_cursor_setting);
    }

    #[test]
    fn test_redirection_overlays() {
        let config = compile(&profile(), &NoCipher);
        // Defaults: drives + clipboard + key combos + sound on.
        assert!(config.redirect_drives);
        assert!(config.redirect_clipboard);
        assert!(!config.redirect_printers);
        assert!(!config.redirect_com_ports);
        assert!(!config.redirect_smart_cards);
        assert_eq!(config.keyboard_hook, 2);
        assert_eq!(config.audio_mode, 0);
        assert_eq!(config.audio_capture_mode, 0);

        let mut p = profile();
        p.set_enable_key_combinations(false);
        p.set_enable_sounds(false);
        p.set_enable_audio_capture(true);
        let config = compile(&p, &NoCipher);
        assert_eq!(config.keyboard_hook, 0);
        assert_eq!(config.audio_mode, 2);
        assert_eq!(config.audio_capture_mode, 1);
    }

    #[test]
    fn test_auto_reconnect_always_on() {
        assert!(compile(&profile(), &NoCipher).auto_reconnection_enabled);
    }

    #[test]
    fn test_address_and_port_form_full_address() {
        let mut p = profile();
        p.set_port("13389");
        assert_eq!(compile(&p, &NoCipher).full_address, "srv.example.com:13389");
    }

    #[test]
    fn test_credentials_resolved_through_cipher() {
        let cipher = Base64Cipher;
        let mut p = profile();
        p.set_username("ops");
        p.set_password(cipher.encrypt("hunter2"));

        let config = compile(&p, &cipher);
        assert_eq!(config.username, "ops");
        assert_eq!(config.password, "hunter2");
    }

    #[test]
    fn test_unavailable_cipher_degrades_to_empty_password() {
        let mut p = profile();
        p.set_password("AAAA");
        let config = compile(&p, &NoCipher);
        assert_eq!(config.password, "");
    }

    #[test]
    fn test_gateway_lowering() {
        let mut p = profile();
        p.set_gateway_mode(GatewayMode::UseSpecified);
        p.set_gateway_host_name("gw.example.com");
        p.set_gateway_logon_method(GatewayLogonMethod::SmartCard);

        let config = compile(&p, &NoCipher);
        assert_eq!(config.gateway_usage_method, 1);
        assert_eq!(config.gateway_hostname, "gw.example.com");
        assert_eq!(config.gateway_credentials_source, 1);

        p.set_gateway_mode(GatewayMode::DoNotUse);
        let config = compile(&p, &NoCipher);
        assert_eq!(config.gateway_usage_method, 0);
        assert_eq!(config.gateway_hostname, "");

        p.set_gateway_mode(GatewayMode::AutoDetect);
        let config = compile(&p, &NoCipher);
        assert_eq!(config.gateway_usage_method, 2);
    }
}
