//! Colours for the scheduler grid and conversion from the `#RRGGBB` tokens
//! stored on events.

use egui::Color32;

/// Colours used by the resource grid
#[derive(Debug, Clone, Copy)]
pub struct GridTheme {
    pub is_dark: bool,
    pub app_background: Color32,
    pub grid_background: Color32,
    pub weekend_background: Color32,
    pub today_background: Color32,
    pub selected_border: Color32,
    pub grid_line: Color32,
    pub header_background: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    /// Fallback for events without a colour token
    pub event_default: Color32,
    pub event_text: Color32,
    pub new_event_ring: Color32,
}

impl GridTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            grid_background: Color32::from_rgb(255, 255, 255),
            weekend_background: Color32::from_rgb(250, 250, 252),
            today_background: Color32::from_rgb(230, 240, 255),
            selected_border: Color32::from_rgb(100, 150, 255),
            grid_line: Color32::from_rgb(220, 220, 220),
            header_background: Color32::from_rgb(240, 240, 240),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
            event_default: Color32::from_rgb(219, 234, 254),
            event_text: Color32::from_rgb(31, 41, 55),
            new_event_ring: Color32::from_rgb(59, 130, 246),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            grid_background: Color32::from_rgb(40, 40, 40),
            weekend_background: Color32::from_rgb(35, 35, 38),
            today_background: Color32::from_rgb(50, 60, 80),
            selected_border: Color32::from_rgb(100, 150, 255),
            grid_line: Color32::from_rgb(60, 60, 60),
            header_background: Color32::from_rgb(48, 48, 48),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
            event_default: Color32::from_rgb(219, 234, 254),
            event_text: Color32::from_rgb(31, 41, 55),
            new_event_ring: Color32::from_rgb(96, 165, 250),
        }
    }

    /// Follow the visuals egui is already using
    pub fn for_visuals(visuals: &egui::Visuals) -> Self {
        if visuals.dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        ctx.set_visuals(visuals);
    }

    /// Event fill, falling back to the default tone for missing or
    /// malformed tokens.
    pub fn event_color(&self, token: Option<&str>) -> Color32 {
        token
            .and_then(|hex| hex_to_color(hex).ok())
            .unwrap_or(self.event_default)
    }
}

/// Parse `#RRGGBB` or `#RGB` into a Color32
pub fn hex_to_color(hex: &str) -> Result<Color32, String> {
    let hex = hex.trim().trim_start_matches('#');
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return Err(format!("Invalid hex color: #{}", hex)),
    };

    let channel = |range: std::ops::Range<usize>| {
        expanded
            .get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
            .ok_or_else(|| format!("Invalid hex color: #{}", hex))
    };

    Ok(Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
