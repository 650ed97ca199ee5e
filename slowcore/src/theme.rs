//! Slow Computer theme — e-ink optimized
//!
//! Pure black and white. No grays. 1px black outlines.
//! IBM Plex Sans as the system font when it is installed.

use std::path::PathBuf;

use egui::{FontData, FontDefinitions, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// Only two colors exist on this machine.
pub struct SlowColors;

impl SlowColors {
    pub const WHITE: egui::Color32 = egui::Color32::from_rgb(255, 255, 255);
    pub const BLACK: egui::Color32 = egui::Color32::from_rgb(0, 0, 0);
}

/// Font files looked up at startup: (egui font name, file name, monospace).
const SYSTEM_FONTS: &[(&str, &str, bool)] = &[
    ("IBMPlexSans", "IBMPlexSans-Text.otf", false),
    ("JetBrainsMono", "JetBrainsMono-Regular.ttf", true),
];

/// Theme configuration for slow computer apps
pub struct SlowTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub font_size_small: f32,
    pub window_padding: f32,
    pub item_spacing: f32,
}

impl Default for SlowTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_heading: 22.0,
            font_size_small: 11.0,
            window_padding: 8.0,
            item_spacing: 4.0,
        }
    }
}

/// Directories searched for bundled fonts, in priority order.
fn font_search_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            dirs.push(dir.join("fonts"));
            dirs.push(dir.to_path_buf());
            // cargo builds: target/{debug,release}/../../slowcore/fonts
            if let Some(root) = dir.parent().and_then(|p| p.parent()) {
                dirs.push(root.join("slowcore").join("fonts"));
            }
        }
    }
    dirs.push(PathBuf::from("/usr/share/slowos/fonts"));
    dirs.push(PathBuf::from("/usr/share/fonts"));
    dirs
}

fn load_font(file_name: &str) -> Option<Vec<u8>> {
    font_search_dirs()
        .into_iter()
        .map(|dir| dir.join(file_name))
        .find_map(|path| std::fs::read(&path).ok())
}

impl SlowTheme {
    /// Apply the slow computer theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_fonts(Self::fonts());
        ctx.set_style(self.style());
    }

    /// Font definitions with the system fonts put first in their family.
    /// Falls back to the egui defaults for any font that is not installed.
    fn fonts() -> FontDefinitions {
        let mut fonts = FontDefinitions::default();
        for &(name, file, monospace) in SYSTEM_FONTS {
            let family = if monospace { FontFamily::Monospace } else { FontFamily::Proportional };
            match load_font(file) {
                Some(data) => {
                    fonts.font_data.insert(name.to_owned(), FontData::from_owned(data));
                    fonts.families.entry(family).or_default().insert(0, name.to_owned());
                }
                None => tracing::debug!(font = file, "font not found, using egui default"),
            }
        }
        fonts
    }

    /// Black & white style: no rounding, no shadows, 1px outlines.
    pub fn style(&self) -> Style {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_small, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_heading, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();
        visuals.window_fill = SlowColors::WHITE;
        visuals.panel_fill = SlowColors::WHITE;
        visuals.faint_bg_color = SlowColors::WHITE;
        visuals.extreme_bg_color = SlowColors::WHITE;
        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, SlowColors::BLACK);
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        for widget in [
            &mut visuals.widgets.noninteractive,
            &mut visuals.widgets.inactive,
            &mut visuals.widgets.hovered,
            &mut visuals.widgets.active,
            &mut visuals.widgets.open,
        ] {
            widget.bg_fill = SlowColors::WHITE;
            widget.weak_bg_fill = SlowColors::WHITE;
            widget.bg_stroke = Stroke::new(1.0, SlowColors::BLACK);
            widget.fg_stroke = Stroke::new(1.0, SlowColors::BLACK);
            widget.rounding = Rounding::ZERO;
        }

        visuals.selection.bg_fill = SlowColors::BLACK;
        visuals.selection.stroke = Stroke::new(1.0, SlowColors::WHITE);
        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::same(self.window_padding);
        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);
        style
    }
}

/// Menu bar styling helper
pub fn menu_bar<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    egui::Frame::none()
        .fill(SlowColors::WHITE)
        .stroke(Stroke::new(1.0, SlowColors::BLACK))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner)
}

/// Strip key events egui would otherwise act on itself.
///
/// Tab would cycle focus onto the menu buttons and Cmd +/-/= would zoom
/// the whole window. Call at the start of `update()`.
pub fn consume_special_keys(ctx: &egui::Context) {
    ctx.input_mut(|i| {
        i.events.retain(|event| match event {
            egui::Event::Key { key: egui::Key::Tab, .. } => false,
            egui::Event::Key { key, modifiers, .. } => {
                !(modifiers.command
                    && matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals))
            }
            _ => true,
        });
    });
}
