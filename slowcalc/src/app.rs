//! SlowCalc application

use egui::{Context, Event};
use slowcore::safety::catch_or;
use slowcore::theme::{consume_special_keys, menu_bar, SlowColors};
use slowcore::widgets::{status_bar, KeypadButton};

use crate::calculator::Calculator;
use crate::config::CalcConfig;
use crate::format::format_result;
use crate::keypad::{button_for_key, button_for_text, Button, COLUMNS, LAYOUT};

const DISPLAY_HEIGHT: f32 = 48.0;

pub struct SlowCalcApp {
    calc: Calculator,
    config: CalcConfig,
    show_about: bool,
}

impl SlowCalcApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: CalcConfig) -> Self {
        Self {
            calc: Calculator::new(),
            config,
            show_about: false,
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        consume_special_keys(ctx);
        if !self.config.keyboard_input {
            return;
        }

        let buttons: Vec<Button> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    Event::Text(text) => button_for_text(text),
                    Event::Key { key, pressed: true, modifiers, .. } if !modifiers.command => {
                        button_for_key(*key)
                    }
                    _ => None,
                })
                .collect()
        });
        for button in buttons {
            self.calc.press(button);
        }
    }

    /// Left operand and operator, e.g. `12 ×`, or empty when idle.
    fn pending_text(&self) -> String {
        match (self.calc.cache(), self.calc.pending()) {
            (Some(lhs), Some(op)) => format!("{} {}", format_result(lhs), op.symbol()),
            _ => String::new(),
        }
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(SlowColors::WHITE)
            .stroke(egui::Stroke::new(1.0, SlowColors::BLACK))
            .inner_margin(egui::Margin::symmetric(8.0, 4.0))
            .show(ui, |ui| {
                ui.set_min_height(DISPLAY_HEIGHT);
                ui.set_max_height(DISPLAY_HEIGHT);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(self.calc.display())
                                .font(egui::FontId::proportional(self.config.display_font_size))
                                .strong(),
                        )
                        .truncate(true),
                    );
                });
            });
    }

    fn render_keypad(&mut self, ui: &mut egui::Ui) {
        let gap = ui.spacing().item_spacing.x;
        let columns = COLUMNS as f32;
        let cell_w = ((ui.available_width() - gap * (columns - 1.0)) / columns).max(1.0);
        let cell_h = ((ui.available_height() - gap * (LAYOUT.len() as f32 - 1.0))
            / LAYOUT.len() as f32)
            .clamp(24.0, 64.0);

        let mut pressed = None;
        for row in LAYOUT {
            ui.horizontal(|ui| {
                for &(button, span) in row {
                    let width = cell_w * span as f32 + gap * (span as f32 - 1.0);
                    let highlighted = matches!(button, Button::Operator(op)
                        if self.calc.awaiting_operand() && self.calc.pending() == Some(op));
                    let widget = KeypadButton::new(button.label(), egui::vec2(width, cell_h))
                        .font_size((cell_h * 0.45).clamp(12.0, 24.0))
                        .highlighted(highlighted);
                    if ui.add(widget).clicked() {
                        pressed = Some(button);
                    }
                }
            });
        }
        if let Some(button) = pressed {
            self.calc.press(button);
        }
    }

    fn render_about(&mut self, ctx: &Context) {
        egui::Window::new("about calculator")
            .collapsible(false)
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("calculator");
                    ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                    ui.add_space(4.0);
                    ui.label("calculator for slowOS");
                });
                ui.add_space(4.0);
                ui.separator();
                ui.label("keys:");
                ui.label("  0-9 .  + - * /");
                ui.label("  Enter or =  equals");
                ui.label("  Backspace  delete");
                ui.label("  Esc or C  clear");
                ui.add_space(4.0);
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }
}

impl eframe::App for SlowCalcApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("edit", |ui| {
                    if ui.button("copy").clicked() {
                        let text = self.calc.display().to_owned();
                        ui.ctx().output_mut(|o| o.copied_text = text);
                        ui.close_menu();
                    }
                    if ui.button("clear").clicked() {
                        self.calc.clear();
                        ui.close_menu();
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        if self.config.show_status_bar {
            let text = self.pending_text();
            egui::TopBottomPanel::bottom("status").show(ctx, |ui| status_bar(ui, &text));
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(SlowColors::WHITE).inner_margin(egui::Margin::same(8.0)))
            .show(ctx, |ui| {
                catch_or((), || {
                    self.render_display(ui);
                    ui.add_space(8.0);
                    self.render_keypad(ui);
                });
            });

        if self.show_about {
            self.render_about(ctx);
        }
    }
}
