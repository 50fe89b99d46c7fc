use rpassgen::configtool::{Appearance, UiConfig};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_original_ui() {
        let config = UiConfig::default();
        assert_eq!(config.appearance, Appearance::Dark);
        assert_eq!(config.default_length, 16);
        assert!(config.default_selection.include_uppercase);
        assert!(config.default_selection.include_lowercase);
        assert!(config.default_selection.include_digits);
        assert!(!config.default_selection.include_symbols);
        assert_eq!(config.clipboard_clear_secs, 30);
    }

    #[test]
    fn test_config_json_round_trip() {
        let mut config = UiConfig::default();
        config.appearance = Appearance::Light;
        config.default_length = 24;
        config.default_selection.include_symbols = true;

        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: UiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.appearance, Appearance::Light);
        assert_eq!(parsed.default_length, 24);
        assert!(parsed.default_selection.include_symbols);
    }

    #[test]
    fn test_appearance_toggle() {
        assert_eq!(Appearance::Dark.toggled(), Appearance::Light);
        assert_eq!(Appearance::Light.toggled(), Appearance::Dark);
        assert_eq!(Appearance::Dark.to_string(), "Oscuro");
        assert_eq!(Appearance::Light.to_string(), "Claro");
    }
}
