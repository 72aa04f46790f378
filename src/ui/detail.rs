// src/ui/detail.rs
use eframe::egui;

use crate::state::AppState;

pub fn draw_detail_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("🔍 Подробнее");
    ui.add_space(8.0);

    if !state.detail.has_data() {
        ui.label("Данные не загружены.");
        return;
    }

    ui.group(|ui| {
        let warehouses = state.detail.warehouses();
        let mut warehouse_choice = state.detail.selected_warehouse.clone();

        egui::ComboBox::from_label("Склад")
            .selected_text(if warehouse_choice.is_empty() {
                "Выберите склад".to_string()
            } else {
                warehouse_choice.clone()
            })
            .show_ui(ui, |ui| {
                for warehouse in &warehouses {
                    ui.selectable_value(&mut warehouse_choice, warehouse.clone(), warehouse);
                }
            });
        if warehouse_choice != state.detail.selected_warehouse {
            state.detail.select_warehouse(warehouse_choice);
        }

        if !state.detail.selected_warehouse.is_empty() {
            ui.add_space(8.0);
            let options = state.detail.stack_options();
            let selected_name = options
                .iter()
                .find(|(id, _)| *id == state.detail.selected_stack)
                .map(|(_, name)| name.clone())
                .unwrap_or_else(|| "Выберите штабель".to_string());

            egui::ComboBox::from_label("Штабель")
                .selected_text(selected_name)
                .show_ui(ui, |ui| {
                    for (id, name) in &options {
                        ui.selectable_value(&mut state.detail.selected_stack, id.clone(), name);
                    }
                });
        }
    });

    if state.detail.selected().is_none() {
        return;
    }

    ui.add_space(8.0);

    ui.group(|ui| {
        ui.heading("График температуры");
        let plot = egui_plot::Plot::new("stack_temps")
            .height(300.0)
            .allow_zoom(false)
            .allow_drag(false)
            .include_y(0.0);

        plot.show(ui, |plot_ui| {
            let line = egui_plot::Line::new(state.detail.chart_points())
                .name("Температура, °C")
                .color(egui::Color32::from_rgb(255, 99, 132))
                .width(2.0);
            plot_ui.line(line);
        });

        ui.add_space(4.0);
        ui.strong("Сводка по штабелю");
        ui.label(state.detail.forecast_line());
        ui.label(state.detail.last_temp_line());
    });
}
