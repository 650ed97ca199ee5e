//! Custom widgets — pure black and white, dithered overlays

use egui::{Response, Ui, Widget};

use crate::dither;
use crate::theme::SlowColors;

/// A fixed-size keypad button: white bg, 1px outline, dithered when held.
///
/// Unlike `egui::Button` the size is set by the caller so a grid of them
/// lines up regardless of label width.
pub struct KeypadButton<'a> {
    label: &'a str,
    size: egui::Vec2,
    font_size: f32,
    highlighted: bool,
}

impl<'a> KeypadButton<'a> {
    pub fn new(label: &'a str, size: egui::Vec2) -> Self {
        Self { label, size, font_size: 16.0, highlighted: false }
    }

    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Draw as if pressed, e.g. for the operator awaiting its right operand.
    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }
}

impl<'a> Widget for KeypadButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(rect, 0.0, SlowColors::WHITE);
            painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, SlowColors::BLACK));

            let pressed = response.is_pointer_button_down_on() || self.highlighted;
            if pressed {
                dither::draw_dither_selection(painter, rect.shrink(1.0));
            } else if response.hovered() {
                dither::draw_dither_hover(painter, rect.shrink(1.0));
            }

            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(self.font_size),
                if pressed { SlowColors::WHITE } else { SlowColors::BLACK },
            );
        }

        response
    }
}

/// Status bar: white bg, 1px black top border
pub fn status_bar(ui: &mut Ui, text: &str) {
    egui::Frame::none()
        .fill(SlowColors::WHITE)
        .stroke(egui::Stroke::new(1.0, SlowColors::BLACK))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(text);
        });
}
