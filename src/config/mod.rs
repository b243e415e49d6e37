// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file: where the catalog
//! is fetched from and the initial look and volume of the player.

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "songdeck";

const CATALOG_BASE_URL: &str = "https://cdn.jsdelivr.net/gh/luffytaroOnePiece/gists@main/music";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub filters_url: String,
    pub metadata_url: String,
    pub theme: String,
    pub volume: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            filters_url: format!("{}/filters.json", CATALOG_BASE_URL),
            metadata_url: format!("{}/metadata.json", CATALOG_BASE_URL),
            theme: "default".to_string(),
            volume: 80,
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

pub fn save_config(cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store(CONFIG_NAME, None, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_catalog_documents() {
        let cfg = AppConfig::default();

        assert!(cfg.filters_url.ends_with("/music/filters.json"));
        assert!(cfg.metadata_url.ends_with("/music/metadata.json"));
        assert_eq!(cfg.theme, "default");
    }
}
