use chrono::NaiveTime;
use eframe::egui;
use egui::{Color32, RichText};

use crate::config::Config;
use crate::plan::{generate, Granularity, PlannerSession, Weekday};

use super::theme::color_to_hex;
use super::views;

pub struct PlannerApp {
    config: Config,
    session: PlannerSession,
    state: AppState,

    // Setup form
    setup_username: String,
    setup_granularity: Granularity,
    setup_start: String,
    setup_end: String,

    // Assignment form
    form_day: Weekday,
    form_start_slot: String,
    form_end_slot: String,
    form_task: String,
    form_color: Color32,

    // Status
    status_message: Option<(String, bool)>, // (message, is_error)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum AppState {
    Setup,
    Main,
}

impl PlannerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = Config::load().unwrap_or_default();
        super::setup_fonts(&cc.egui_ctx);
        super::setup_theme(&cc.egui_ctx);
        cc.egui_ctx.set_zoom_factor(config.font_scale);

        Self {
            setup_username: config.username.clone(),
            setup_granularity: config.granularity,
            setup_start: config.start_time.clone(),
            setup_end: config.end_time.clone(),
            config,
            session: PlannerSession::new(),
            state: AppState::Setup,
            form_day: Weekday::Monday,
            form_start_slot: String::new(),
            form_end_slot: String::new(),
            form_task: String::new(),
            form_color: Color32::from_rgb(255, 255, 0), // default yellow
            status_message: None,
        }
    }

    /// Options for the setup start/end combos: the full day on a 10-minute
    /// grid, independent of the granularity being configured.
    fn full_day_options() -> Vec<String> {
        let start = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        let end = NaiveTime::from_hms_opt(23, 50, 0).unwrap();
        generate(start, end, 10).unwrap_or_default()
    }

    fn confirm_setup(&mut self) {
        let username = self.setup_username.trim().to_string();
        if username.is_empty() {
            self.status_message = Some(("Please fill in all fields".to_string(), true));
            return;
        }

        let parsed = NaiveTime::parse_from_str(&self.setup_start, "%H:%M")
            .and_then(|s| NaiveTime::parse_from_str(&self.setup_end, "%H:%M").map(|e| (s, e)));
        let (start, end) = match parsed {
            Ok(times) => times,
            Err(e) => {
                self.status_message = Some((format!("Invalid time: {}", e), true));
                return;
            }
        };

        if let Err(e) = self
            .session
            .configure(&username, self.setup_granularity, start, end)
        {
            self.status_message = Some((e.to_string(), true));
            return;
        }

        // Seed the assignment form from the fresh grid
        let slots = self.session.plan().map(|p| p.slots().to_vec()).unwrap_or_default();
        self.form_start_slot = slots.first().cloned().unwrap_or_default();
        self.form_end_slot = slots.first().cloned().unwrap_or_default();
        self.form_day = self.session.selected_day();
        self.form_task.clear();
        self.status_message = None;
        self.state = AppState::Main;

        // Remember the choices as defaults for next launch
        self.config.username = username;
        self.config.granularity = self.setup_granularity;
        self.config.start_time = self.setup_start.clone();
        self.config.end_time = self.setup_end.clone();
        if let Err(e) = self.config.save() {
            self.status_message = Some((format!("Failed to save: {}", e), true));
        }
    }

    fn add_task(&mut self) {
        let task = self.form_task.trim().to_string();
        if task.is_empty() {
            self.status_message = Some(("Please fill in all fields".to_string(), true));
            return;
        }

        let color = color_to_hex(self.form_color);
        let day = self.form_day.label();
        match self.session.assign(
            day,
            &self.form_start_slot,
            &self.form_end_slot,
            &task,
            &color,
        ) {
            Ok(()) => {
                self.status_message = Some((
                    format!(
                        "Added \"{}\" to {} {} - {}",
                        task, day, self.form_start_slot, self.form_end_slot
                    ),
                    false,
                ));
                self.form_task.clear();
            }
            Err(e) => {
                self.status_message = Some((e.to_string(), true));
            }
        }
    }

    fn select_day(&mut self, day: Weekday) {
        self.form_day = day;
        if let Err(e) = self.session.select_day(day.label()) {
            self.status_message = Some((e.to_string(), true));
        }
    }

    fn render_setup(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading("Weekplan setup");
            ui.add_space(20.0);
            ui.label("Pick the window and granularity for your week.");
            ui.add_space(20.0);
        });

        let time_options = Self::full_day_options();

        egui::Grid::new("setup_grid")
            .num_columns(2)
            .spacing([20.0, 10.0])
            .show(ui, |ui| {
                ui.label("Name:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.setup_username)
                        .hint_text("Who is this planner for?")
                        .desired_width(220.0),
                );
                ui.end_row();

                ui.label("Granularity:");
                egui::ComboBox::from_id_salt("setup_granularity")
                    .selected_text(self.setup_granularity.label())
                    .show_ui(ui, |ui| {
                        for g in Granularity::ALL {
                            ui.selectable_value(&mut self.setup_granularity, g, g.label());
                        }
                    });
                ui.end_row();

                ui.label("Day starts at:");
                egui::ComboBox::from_id_salt("setup_start")
                    .selected_text(&self.setup_start)
                    .height(240.0)
                    .show_ui(ui, |ui| {
                        for t in &time_options {
                            ui.selectable_value(&mut self.setup_start, t.clone(), t);
                        }
                    });
                ui.end_row();

                ui.label("Day ends at:");
                egui::ComboBox::from_id_salt("setup_end")
                    .selected_text(&self.setup_end)
                    .height(240.0)
                    .show_ui(ui, |ui| {
                        for t in &time_options {
                            ui.selectable_value(&mut self.setup_end, t.clone(), t);
                        }
                    });
                ui.end_row();
            });

        ui.add_space(20.0);

        if ui.button("Start planning").clicked() {
            self.confirm_setup();
        }
    }

    fn render_main(&mut self, ui: &mut egui::Ui) {
        let Some(config) = self.session.config().cloned() else {
            // No confirmed configuration, shouldn't be here
            self.state = AppState::Setup;
            return;
        };
        let slots = self
            .session
            .plan()
            .map(|p| p.slots().to_vec())
            .unwrap_or_default();

        // Header: title left, settings right
        ui.horizontal(|ui| {
            ui.heading(format!("{}'s week", config.username));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let gear = ui.add(
                    egui::Label::new(
                        RichText::new(egui_phosphor::regular::GEAR)
                            .size(18.0)
                            .color(Color32::from_rgb(160, 160, 152)),
                    )
                    .sense(egui::Sense::click()),
                );
                if gear.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                }
                if gear.clicked() {
                    // Back to setup; confirming there rebuilds the week from empty
                    self.setup_username = config.username.clone();
                    self.setup_granularity = config.granularity;
                    self.setup_start = config.start.format("%H:%M").to_string();
                    self.setup_end = config.end.format("%H:%M").to_string();
                    self.state = AppState::Setup;
                }
            });
        });

        ui.add_space(4.0);

        // Assignment form
        ui.horizontal(|ui| {
            egui::ComboBox::from_id_salt("form_day")
                .selected_text(self.form_day.label())
                .show_ui(ui, |ui| {
                    let mut picked = self.form_day;
                    for wd in Weekday::ALL {
                        ui.selectable_value(&mut picked, wd, wd.label());
                    }
                    if picked != self.form_day {
                        self.select_day(picked);
                    }
                });

            egui::ComboBox::from_id_salt("form_start")
                .selected_text(&self.form_start_slot)
                .height(240.0)
                .width(80.0)
                .show_ui(ui, |ui| {
                    for s in &slots {
                        ui.selectable_value(&mut self.form_start_slot, s.clone(), s);
                    }
                });
            ui.label("to");
            egui::ComboBox::from_id_salt("form_end")
                .selected_text(&self.form_end_slot)
                .height(240.0)
                .width(80.0)
                .show_ui(ui, |ui| {
                    for s in &slots {
                        ui.selectable_value(&mut self.form_end_slot, s.clone(), s);
                    }
                });

            ui.add(
                egui::TextEdit::singleline(&mut self.form_task)
                    .hint_text("What are you planning?")
                    .desired_width(220.0),
            );

            ui.color_edit_button_srgba(&mut self.form_color);

            let add_label = format!("{} Add", egui_phosphor::regular::PLUS);
            if ui.button(add_label).clicked() {
                self.add_task();
            }
        });

        ui.add_space(8.0);

        let table = self.session.table();
        let clicked = views::render_week_grid(
            ui,
            &slots,
            &table,
            self.form_day,
            config.granularity,
        );
        if let Some(day) = clicked {
            self.select_day(day);
        }
    }
}

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().inner_margin(egui::Margin::symmetric(12.0, 8.0)))
            .show(ctx, |ui| {
                // Status line with close button
                let mut dismiss_message = false;
                if let Some((msg, is_error)) = &self.status_message {
                    let color = if *is_error {
                        Color32::from_rgb(224, 108, 117)
                    } else {
                        Color32::from_rgb(152, 195, 121)
                    };
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(msg).color(color));

                        let close_btn = ui.add(
                            egui::Label::new(
                                RichText::new(egui_phosphor::regular::X)
                                    .size(14.0)
                                    .color(Color32::from_rgb(120, 120, 130)),
                            )
                            .sense(egui::Sense::click()),
                        );
                        if close_btn.hovered() {
                            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                        }
                        if close_btn.clicked() {
                            dismiss_message = true;
                        }
                    });
                    ui.add_space(4.0);
                }
                if dismiss_message {
                    self.status_message = None;
                }

                match self.state {
                    AppState::Setup => self.render_setup(ui),
                    AppState::Main => self.render_main(ui),
                }
            });
    }
}
