// src/ui/upload.rs
use std::sync::Arc;

use eframe::egui;
use rfd::FileDialog;

use crate::state::AppState;

pub fn draw_upload_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Загрузка CSV-файла");
    ui.add_space(8.0);

    ui.group(|ui| {
        if ui.button("📁 Выберите CSV-файл").clicked() {
            let file_dialog = FileDialog::new()
                .add_filter("CSV files", &["csv"])
                .set_title("Выберите CSV-файл");

            if let Some(path) = file_dialog.pick_file() {
                state.upload.select(path);
            }
        }

        if let Some(name) = state.upload.file_name() {
            ui.label(format!("Выбран файл: {}", name));
        }

        if let Some(error) = state.upload.error() {
            ui.colored_label(egui::Color32::RED, error);
        }

        ui.add_space(8.0);

        let submitting = state.upload.submitting();
        let label = if submitting {
            "Загрузка..."
        } else {
            "Отправить на сервер"
        };
        if ui
            .add_enabled(!submitting, egui::Button::new(label))
            .clicked()
        {
            state.upload.submit(Arc::clone(&state.client));
        }
    });
}
