use gloo_utils::document;
use log::{info, warn};
use shared::WheelConfig;

const ASSET_BASE: &str = "/assets";
const WHEEL_CONFIG_ELEMENT_ID: &str = "wheel-config";

pub fn get_asset_url(path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{}/{}", ASSET_BASE, path.trim_start_matches('/'))
    }
}

// Host page may embed <script id="wheel-config" type="application/json">{...}</script>
pub fn load_wheel_config() -> WheelConfig {
    let raw = document()
        .get_element_by_id(WHEEL_CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());

    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        return WheelConfig::default();
    };

    match WheelConfig::from_json(&raw) {
        Ok(config) => {
            info!("Using wheel config from #{}", WHEEL_CONFIG_ELEMENT_ID);
            config
        }
        Err(err) => {
            warn!("{}; falling back to defaults", err);
            WheelConfig::default()
        }
    }
}
