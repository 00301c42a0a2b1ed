use std::fs;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub text_muted: String,
    pub accent: String,
    pub border: String,
    pub header_bg: String,
    pub header_fg: String,
    pub bar_filled: String,
    pub bar_empty: String,
    pub rank_first: String,
    pub rank_second: String,
    pub rank_third: String,
    pub button_bg: String,
    pub button_fg: String,
    pub warning: String,
}

impl Theme {
    pub fn load(name: &str) -> Option<Self> {
        // Try user themes dir
        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir
                .join("keytally")
                .join("themes")
                .join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                match toml::from_str::<Theme>(&content) {
                    Ok(theme) => return Some(theme),
                    Err(err) => log::warn!(
                        "ignoring theme {}: {err}",
                        user_theme_path.display()
                    ),
                }
            }
        }

        // Try bundled themes
        let filename = format!("{name}.toml");
        let file = ThemeAssets::get(&filename)?;
        let content = std::str::from_utf8(file.data.as_ref()).ok()?;
        toml::from_str::<Theme>(content).ok()
    }

    pub fn available_themes() -> Vec<String> {
        ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load("catppuccin-mocha").unwrap_or_else(|| Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#1e1e2e".to_string(),
            fg: "#cdd6f4".to_string(),
            text_muted: "#6c7086".to_string(),
            accent: "#89b4fa".to_string(),
            border: "#45475a".to_string(),
            header_bg: "#313244".to_string(),
            header_fg: "#cdd6f4".to_string(),
            bar_filled: "#89b4fa".to_string(),
            bar_empty: "#313244".to_string(),
            rank_first: "#f9e2af".to_string(),
            rank_second: "#bac2de".to_string(),
            rank_third: "#fab387".to_string(),
            button_bg: "#f38ba8".to_string(),
            button_fg: "#1e1e2e".to_string(),
            warning: "#f9e2af".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 && hex.is_ascii() {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Color::Rgb(r, g, b);
            }
        }
        Color::White
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn text_muted(&self) -> Color { Self::parse_color(&self.text_muted) }
    pub fn accent(&self) -> Color { Self::parse_color(&self.accent) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn header_bg(&self) -> Color { Self::parse_color(&self.header_bg) }
    pub fn header_fg(&self) -> Color { Self::parse_color(&self.header_fg) }
    pub fn bar_filled(&self) -> Color { Self::parse_color(&self.bar_filled) }
    pub fn bar_empty(&self) -> Color { Self::parse_color(&self.bar_empty) }
    pub fn button_bg(&self) -> Color { Self::parse_color(&self.button_bg) }
    pub fn button_fg(&self) -> Color { Self::parse_color(&self.button_fg) }
    pub fn warning(&self) -> Color { Self::parse_color(&self.warning) }

    /// Highlight for podium places; `None` past third.
    pub fn rank(&self, position: usize) -> Option<Color> {
        match position {
            1 => Some(Self::parse_color(&self.rank_first)),
            2 => Some(Self::parse_color(&self.rank_second)),
            3 => Some(Self::parse_color(&self.rank_third)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(ThemeColors::parse_color("#ff8000"), Color::Rgb(255, 128, 0));
        assert_eq!(ThemeColors::parse_color("00ff00"), Color::Rgb(0, 255, 0));
        assert_eq!(ThemeColors::parse_color("#fff"), Color::White);
        assert_eq!(ThemeColors::parse_color("#zzzzzz"), Color::White);
    }

    #[test]
    fn test_parse_color_non_ascii_falls_back() {
        // Six bytes, but 'é' straddles the first channel boundary
        assert_eq!(ThemeColors::parse_color("#aébcd"), Color::White);
        assert_eq!(ThemeColors::parse_color("ééé"), Color::White);
    }

    #[test]
    fn test_bundled_themes_parse() {
        let names = Theme::available_themes();
        assert!(names.contains(&"catppuccin-mocha".to_string()));
        for name in names {
            assert!(Theme::load(&name).is_some(), "theme {name} failed to load");
        }
    }

    #[test]
    fn test_rank_colors_only_for_podium() {
        let colors = ThemeColors::default();
        assert!(colors.rank(1).is_some());
        assert!(colors.rank(3).is_some());
        assert_ne!(colors.rank(1), colors.rank(2));
        assert!(colors.rank(4).is_none());
    }
}
