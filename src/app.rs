// src/app.rs
use std::time::Duration;

use eframe::egui;

use crate::settings::Settings;
use crate::state::{AppState, Screen};

pub struct CoalWatchApp {
    state: AppState,
}

impl CoalWatchApp {
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: AppState::new(settings),
        }
    }

    fn show_header(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.heading("🔥 Прогноз самовозгорания угля");
            ui.separator();

            let tabs = [
                (Screen::Upload, "Главная"),
                (Screen::Dashboard, "Дашборд"),
                (Screen::Detail, "Подробнее"),
            ];

            for (screen, label) in tabs {
                if ui
                    .selectable_label(self.state.current_screen == screen, label)
                    .clicked()
                {
                    self.state.navigate(screen);
                }
            }
        });
    }
}

impl eframe::App for CoalWatchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // One in-flight upload at most; its outcome is drained here.
        if let Some(report) = self.state.upload.poll() {
            self.state.finish_upload(report);
        }
        if self.state.upload.submitting() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_header(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.state.current_screen {
            Screen::Upload => crate::ui::upload::draw_upload_view(ui, &mut self.state),
            Screen::Dashboard => crate::ui::dashboard::draw_dashboard_view(ui, &mut self.state),
            Screen::Detail => crate::ui::detail::draw_detail_view(ui, &mut self.state),
        });

        // Show error modal if needed
        let error_msg = self.state.error_message.clone();
        if let Some(error) = error_msg {
            egui::Window::new("Ошибка")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.error_message = None;
                    }
                });
        }
    }
}
