use serde::{Deserialize, Serialize};

/// neutral base map styles available for the donation map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BaseMapStyle {
    #[default]
    CartodbPositron,
    CartodbDarkMatter,
    OpenStreetMap,
}

impl BaseMapStyle {
    pub fn tile_url(&self) -> &'static str {
        match self {
            BaseMapStyle::CartodbPositron => {
                "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png"
            }
            BaseMapStyle::CartodbDarkMatter => {
                "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png"
            }
            BaseMapStyle::OpenStreetMap => "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
        }
    }

    pub fn attribution(&self) -> &'static str {
        match self {
            BaseMapStyle::CartodbPositron | BaseMapStyle::CartodbDarkMatter => {
                "&copy; OpenStreetMap contributors &copy; CARTO"
            }
            BaseMapStyle::OpenStreetMap => "&copy; OpenStreetMap contributors",
        }
    }
}

/// viewport of the donation map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    /// `[latitude, longitude]` of the initial map center
    pub center: [f64; 2],
    pub zoom: u8,
    pub tiles: BaseMapStyle,
    /// rendered map size in pixels
    pub width: u32,
    pub height: u32,
}

impl Default for MapSettings {
    /// Pune city center.
    fn default() -> Self {
        Self {
            center: [18.5204, 73.8567],
            zoom: 12,
            tiles: BaseMapStyle::CartodbPositron,
            width: 1200,
            height: 600,
        }
    }
}
