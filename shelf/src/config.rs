use serde::{Deserialize, Serialize};
use stockcut::io::svg::SvgDrawOptions;

pub const DEFAULT_STORE_KEY: &str = "stockcut_layout";

/// Configuration of the shelf front-ends
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ShelfConfig {
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
    /// Write one SVG per sheet next to the solution file
    #[serde(default = "default_write_svg")]
    pub write_svg: bool,
    /// Name of the entry under which the last successful input is kept
    #[serde(default = "default_store_key")]
    pub store_key: String,
}

fn default_write_svg() -> bool {
    true
}

fn default_store_key() -> String {
    DEFAULT_STORE_KEY.to_string()
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            svg_draw_options: SvgDrawOptions::default(),
            write_svg: default_write_svg(),
            store_key: default_store_key(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: ShelfConfig = serde_json::from_str(r#"{"write_svg": false}"#).unwrap();
        assert!(!config.write_svg);
        assert_eq!(config.store_key, DEFAULT_STORE_KEY);
        assert_eq!(config.svg_draw_options, SvgDrawOptions::default());

        let config: ShelfConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ShelfConfig::default());
    }
}
