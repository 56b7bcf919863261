//! CalcPad application
//!
//! Renders the keypad and display, and forwards every interaction to the
//! engine as a single `Action`. The app never edits the calculation text
//! itself; state only changes through `Engine::apply`.

use calccore::{storage, Action, CalcState, CalcTheme, Engine, Operator};
use egui::{Context, Key};

/// One keypad button: label plus the action it dispatches.
#[derive(Clone, Copy)]
struct PadKey {
    label: &'static str,
    action: Action,
    /// Layout weight; wide keys (C, =, 0) take two cells.
    weight: f32,
}

const fn key(label: &'static str, action: Action) -> PadKey {
    PadKey { label, action, weight: 1.0 }
}

const fn wide(label: &'static str, action: Action) -> PadKey {
    PadKey { label, action, weight: 2.0 }
}

/// The keypad, top row first. Mirrors a pocket calculator layout.
const KEYPAD: &[&[PadKey]] = &[
    &[wide("C", Action::Clear), wide("=", Action::Evaluate)],
    &[
        key("1", Action::Digit(1)),
        key("2", Action::Digit(2)),
        key("3", Action::Digit(3)),
        key("+", Action::Operator(Operator::Add)),
    ],
    &[
        key("4", Action::Digit(4)),
        key("5", Action::Digit(5)),
        key("6", Action::Digit(6)),
        key("-", Action::Operator(Operator::Subtract)),
    ],
    &[
        key("7", Action::Digit(7)),
        key("8", Action::Digit(8)),
        key("9", Action::Digit(9)),
        key("*", Action::Operator(Operator::Multiply)),
    ],
    &[
        wide("0", Action::Digit(0)),
        key(".", Action::DecimalPoint),
        key("/", Action::Operator(Operator::Divide)),
    ],
];

pub struct CalcPadApp {
    engine: Engine,
    state: CalcState,
    show_about: bool,
}

impl CalcPadApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            engine: Engine::new(),
            // Resume the calculation from the previous session, if any.
            state: storage::load_state().unwrap_or_default(),
            show_about: false,
        }
    }

    /// The single entry point for user interactions. Keeps action handling
    /// serialized: one `apply` per event, UI re-renders from the new state.
    fn dispatch(&mut self, action: Action) {
        self.state = self.engine.apply(&self.state, action);
    }

    fn handle_keys(&mut self, ctx: &Context) {
        let mut pending = Vec::new();

        ctx.input(|i| {
            for digit in 0u8..=9 {
                if i.key_pressed(digit_key(digit)) {
                    pending.push(Action::Digit(digit));
                }
            }

            if i.key_pressed(Key::Plus) || (i.modifiers.shift && i.key_pressed(Key::Equals)) {
                pending.push(Action::Operator(Operator::Add));
            }
            if i.key_pressed(Key::Minus) {
                pending.push(Action::Operator(Operator::Subtract));
            }
            if i.modifiers.shift && i.key_pressed(Key::Num8) {
                pending.push(Action::Operator(Operator::Multiply));
            }
            if i.key_pressed(Key::Slash) {
                pending.push(Action::Operator(Operator::Divide));
            }

            if i.key_pressed(Key::Period) || i.key_pressed(Key::Comma) {
                pending.push(Action::DecimalPoint);
            }

            if i.key_pressed(Key::Enter) || (!i.modifiers.shift && i.key_pressed(Key::Equals)) {
                pending.push(Action::Evaluate);
            }

            if i.key_pressed(Key::Escape) || i.key_pressed(Key::C) {
                pending.push(Action::Clear);
            }
        });

        for action in pending {
            self.dispatch(action);
        }
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let text = match self.state.display() {
            s if s.is_empty() => "0".to_string(),
            s => s,
        };

        CalcTheme::display_frame().show(ui, |ui| {
            ui.set_min_height(48.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(text)
                        .font(egui::FontId::monospace(26.0))
                        .strong(),
                );
            });
        });
    }

    fn render_keypad(&mut self, ui: &mut egui::Ui) {
        let btn_h = 38.0;
        for row in KEYPAD {
            // A wide key spans two cells plus the gap between them, so the
            // per-cell width divides out the gaps by total weight.
            let cells: f32 = row.iter().map(|k| k.weight).sum();
            let gaps = (cells - 1.0) * ui.spacing().item_spacing.x;
            let cell_w = (ui.available_width() - gaps) / cells;

            let mut pressed = None;
            ui.horizontal(|ui| {
                for k in row.iter() {
                    let w = cell_w * k.weight
                        + (k.weight - 1.0) * ui.spacing().item_spacing.x;
                    if ui
                        .add_sized([w, btn_h], egui::Button::new(k.label))
                        .clicked()
                    {
                        pressed = Some(k.action);
                    }
                }
            });
            if let Some(action) = pressed {
                self.dispatch(action);
            }
        }
    }

    fn render_about(&mut self, ctx: &Context) {
        egui::Window::new("about calcpad")
            .collapsible(false)
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("calcpad");
                    ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                    ui.add_space(4.0);
                    ui.label("keys: 0-9 . + - * / Enter Esc");
                    ui.add_space(4.0);
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }
}

impl eframe::App for CalcPadApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_display(ui);
            ui.add_space(6.0);
            self.render_keypad(ui);
        });

        if self.show_about {
            self.render_about(ctx);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = storage::save_state(&self.state) {
            eprintln!("[calcpad] could not save state: {}", e);
        }
    }
}

fn digit_key(digit: u8) -> Key {
    match digit {
        0 => Key::Num0,
        1 => Key::Num1,
        2 => Key::Num2,
        3 => Key::Num3,
        4 => Key::Num4,
        5 => Key::Num5,
        6 => Key::Num6,
        7 => Key::Num7,
        8 => Key::Num8,
        9 => Key::Num9,
        _ => Key::Num0,
    }
}
