// src/state/detail.rs
use crate::report::{PredictionReport, Stack};
use crate::store::ReportStore;

/// Snapshot of the cache slot plus the two transient selections of the
/// detail screen. Both selections start empty; nothing is auto-selected.
pub struct DetailView {
    report: Option<PredictionReport>,
    pub selected_warehouse: String,
    pub selected_stack: String,
}

impl DetailView {
    pub fn load(store: &dyn ReportStore) -> Self {
        Self {
            report: store.load(),
            selected_warehouse: String::new(),
            selected_stack: String::new(),
        }
    }

    pub fn has_data(&self) -> bool {
        self.report.is_some()
    }

    pub fn warehouses(&self) -> Vec<String> {
        match &self.report {
            Some(report) => report.warehouses().iter().map(|w| w.to_string()).collect(),
            None => Vec::new(),
        }
    }

    /// Switching warehouse drops the stack selection, so a stack from the
    /// previous warehouse can never keep a chart on screen.
    pub fn select_warehouse(&mut self, warehouse: String) {
        if warehouse != self.selected_warehouse {
            self.selected_stack.clear();
            self.selected_warehouse = warehouse;
        }
    }

    /// `(id, name)` pairs for the stack selector, exactly the stacks of the
    /// chosen warehouse; empty while no warehouse is chosen.
    pub fn stack_options(&self) -> Vec<(String, String)> {
        if self.selected_warehouse.is_empty() {
            return Vec::new();
        }
        match &self.report {
            Some(report) => report
                .stacks_in(&self.selected_warehouse)
                .into_iter()
                .map(|s| (s.id.clone(), s.name.clone()))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn selected(&self) -> Option<&Stack> {
        if self.selected_warehouse.is_empty() || self.selected_stack.is_empty() {
            return None;
        }
        self.report
            .as_ref()?
            .find_stack(&self.selected_warehouse, &self.selected_stack)
    }

    /// Chart input for the selected stack; an absent selection or an absent
    /// temperature series both plot as an empty line.
    pub fn chart_points(&self) -> Vec<[f64; 2]> {
        match self.selected() {
            Some(stack) => stack
                .temps
                .iter()
                .enumerate()
                .map(|(i, temp)| [i as f64, *temp])
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn forecast_line(&self) -> String {
        let forecast = self
            .selected()
            .and_then(|s| s.forecast.as_deref())
            .unwrap_or("—");
        format!("Прогноз: {}", forecast)
    }

    pub fn last_temp_line(&self) -> String {
        let last = self
            .selected()
            .and_then(|s| s.last_temp)
            .map(|t| t.to_string())
            .unwrap_or_else(|| "—".to_string());
        format!("Последняя температура: {} °C", last)
    }
}
