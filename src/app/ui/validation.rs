use super::*;

impl DashboardApp {
    pub(super) fn render_validation(&mut self, ui: &mut egui::Ui) {
        let table = self.table;
        let theme = &self.theme;
        let secondary = theme.palette().fg_text_secondary;

        banner(
            ui,
            theme,
            theme.view_color(ViewId::Validation),
            "Risk & Validation",
            "How sensitive the Base Case is to execution, and how it compares to benchmarks",
        );

        card(ui, theme, |ui| {
            card_title(ui, theme, "Base Case Sensitivity");
            egui::Grid::new("sensitivity")
                .striped(true)
                .num_columns(5)
                .spacing([24.0, 8.0])
                .show(ui, |ui| {
                    for header in ["Case", "Addressable", "Conversion vs target", "Reactivation", "Total DAU"] {
                        ui.label(RichText::new(header).strong());
                    }
                    ui.end_row();
                    for row in table.sensitivity_rows() {
                        ui.label(row.label);
                        ui.label(format_percent(row.addressable_rate));
                        ui.label(format_percent(row.conversion_multiplier));
                        ui.label(format!("{}M", format_millions(row.reactivation_millions)));
                        ui.label(RichText::new(format!("{}M", format_millions(row.total_millions))).strong());
                        ui.end_row();
                    }
                });
            if table.sensitivity_rows().is_empty() {
                ui.label(RichText::new("No sensitivity analysis in this revision.").color(secondary));
            }
        });

        card(ui, theme, |ui| {
            card_title(ui, theme, "Validation Metrics");
            egui::Grid::new("validation_metrics")
                .striped(true)
                .num_columns(4)
                .spacing([24.0, 8.0])
                .show(ui, |ui| {
                    for header in ["Metric", "Model", "Benchmark", "Status"] {
                        ui.label(RichText::new(header).strong());
                    }
                    ui.end_row();
                    for metric in table.validation_metrics() {
                        ui.label(metric.label);
                        ui.label(RichText::new(metric.value).strong());
                        ui.label(RichText::new(metric.benchmark).color(secondary));
                        ui.label(
                            RichText::new(status_badge(metric.status))
                                .strong()
                                .color(theme.status_color(metric.status)),
                        );
                        ui.end_row();
                    }
                });
        });
    }
}

fn status_badge(status: MetricStatus) -> String {
    let icon = match status {
        MetricStatus::Pass => "✔",
        MetricStatus::Watch => "⚠",
        MetricStatus::Risk => "✖",
    };
    format!("{icon} {}", status.label())
}
