// src/ui/dashboard.rs
use eframe::egui;

use crate::state::dashboard::DEMO_DATES;
use crate::state::AppState;

pub fn draw_dashboard_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("📊 Дашборд");
    ui.add_space(8.0);

    if !state.dashboard.has_data() {
        ui.label("Данные не загружены. Перейдите на главную.");
        return;
    }

    ui.group(|ui| {
        ui.heading("Температура по дням");
        let plot = egui_plot::Plot::new("dashboard_temps")
            .height(300.0)
            .allow_zoom(false)
            .allow_drag(false)
            .include_y(0.0);

        plot.show(ui, |plot_ui| {
            let line = egui_plot::Line::new(state.dashboard.demo_series())
                .name("Температура, °C")
                .color(egui::Color32::from_rgb(75, 192, 192))
                .width(2.0);
            plot_ui.line(line);
        });

        ui.horizontal(|ui| {
            for date in DEMO_DATES {
                ui.label(date);
            }
        });
    });

    ui.add_space(8.0);

    ui.group(|ui| {
        ui.heading("Календарь прогнозов");
        let calendar = state.dashboard.calendar();
        if calendar.is_empty() {
            ui.label("Нет данных");
        } else {
            for prediction in calendar {
                ui.horizontal(|ui| {
                    ui.strong(&prediction.date);
                    ui.label(&prediction.location);
                });
            }
        }
    });

    ui.add_space(8.0);

    ui.group(|ui| {
        ui.heading("Сводка");
        ui.label(state.dashboard.summary_total());
        ui.label(state.dashboard.summary_high_risk());
    });
}
