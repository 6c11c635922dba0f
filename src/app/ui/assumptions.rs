use super::*;

impl DashboardApp {
    pub(super) fn render_assumptions(&mut self, ui: &mut egui::Ui) {
        let table = self.table;
        let headline = *table.headline();
        let theme = &self.theme;
        let secondary = theme.palette().fg_text_secondary;

        banner(
            ui,
            theme,
            theme.view_color(ViewId::Assumptions),
            "Key Assumptions & Data Sources",
            "All assumptions are grounded in historical data, industry benchmarks, or conservative estimates",
        );

        card(ui, theme, |ui| {
            card_title(ui, theme, "Baseline Assumptions");
            ui.columns(4, |cols| {
                let figures = [
                    ("Yahoo Overall MAU", format!("{}M", format_compact(headline.yahoo_mau_millions))),
                    ("Yahoo Mail MAU", format!("{}M", format_compact(headline.mail_mau_millions))),
                    (
                        "Starting DAU (End of 2025)",
                        format!("{}M", format_compact(headline.starting_dau_millions)),
                    ),
                    ("DAU/MAU Ratio", format_percent(headline.dau_mau_ratio)),
                ];
                for (col, (label, value)) in cols.iter_mut().zip(figures) {
                    col.label(RichText::new(label).color(secondary));
                    col.label(RichText::new(value).size(26.0).strong());
                }
            });
            ui.add_space(8.0);
            for note in [
                "Platform coverage: mobile and desktop users across all platforms",
                "Geographic scope: worldwide",
                "External factors: no drastic competitor, regulatory or economic shocks",
                "Time horizon: end of 2026 (12-month forecast from end of 2025)",
            ] {
                ui.label(format!("• {note}"));
            }
        });

        card(ui, theme, |ui| {
            card_title(ui, theme, "1. Retention Rate Assumptions");
            egui::Grid::new("retention_assumptions")
                .striped(true)
                .num_columns(5)
                .spacing([24.0, 8.0])
                .show(ui, |ui| {
                    for header in ["Segment", "Current DAU", "Retention", "Retained", "Reasoning"] {
                        ui.label(RichText::new(header).strong());
                    }
                    ui.end_row();
                    for row in table.retention_rows() {
                        ui.label(row.segment);
                        ui.label(format!("{}M", format_millions(row.current_millions)));
                        ui.label(format_percent(row.retention_rate));
                        ui.label(RichText::new(format!("{}M", format_millions(row.retained_millions))).strong());
                        ui.label(RichText::new(row.source).size(12.0).color(secondary));
                        ui.end_row();
                    }
                });
            if let Some(first) = table.scenarios().first() {
                let retained = first.components.retained_base;
                ui.label(
                    RichText::new(format!(
                        "Blended retention: {} ({}M of {}M retained)",
                        format_percent(retained / headline.starting_dau_millions),
                        format_millions(retained),
                        format_compact(headline.starting_dau_millions),
                    ))
                    .strong(),
                );
            }
        });

        card(ui, theme, |ui| {
            card_title(ui, theme, "2. New Account Growth Assumptions");
            ui.label(format!(
                "Yahoo has about {}M non-Mail MAU across Finance, Sports and News; new Mail users come from this pool.",
                format_compact(headline.non_mail_mau_millions)
            ));
            egui::Grid::new("new_account_assumptions")
                .striped(true)
                .num_columns(5)
                .spacing([24.0, 8.0])
                .show(ui, |ui| {
                    for header in ["Source", "Base MAU", "Conversion", "Engagement", "New DAU"] {
                        ui.label(RichText::new(header).strong());
                    }
                    ui.end_row();
                    for row in table.new_account_rows() {
                        ui.label(row.label);
                        ui.label(format!("{}M", format_millions(row.base_millions)));
                        ui.label(format_percent(row.conversion_rate));
                        ui.label(format_percent(row.engagement_rate));
                        ui.label(RichText::new(format!("{}M", format_millions(row.result_millions))).strong());
                        ui.end_row();
                    }
                });
            if let Some(row) = table.new_account_rows().first() {
                ui.label(RichText::new(row.basis).size(12.0).color(secondary));
            }
        });

        card(ui, theme, |ui| {
            card_title(ui, theme, "3. Reactivation Conversion Rate Assumptions");
            ui.label(format!(
                "{}M inactive MAU are segmented by engagement; each segment has its own conversion target.",
                format_compact(headline.inactive_mau_millions)
            ));
            ui.columns(3, |cols| {
                for (col, segment) in cols.iter_mut().zip(table.get_segments(ViewId::Base)) {
                    col.label(
                        RichText::new(format!(
                            "{} ({}M)",
                            segment.label,
                            format_compact(segment.size_millions)
                        ))
                        .strong(),
                    );
                    col.label(
                        RichText::new(format_percent(segment.conversion_rate))
                            .size(22.0)
                            .strong()
                            .color(theme.palette().accent_primary),
                    );
                    col.label(RichText::new("target conversion").color(secondary));
                    col.label(RichText::new(segment.description).size(12.0).color(secondary));
                }
            });
            ui.add_space(6.0);
            ui.label(RichText::new("What \"Addressable %\" means").strong());
            for scenario in table.scenarios() {
                if let Some(rate) = scenario.addressable_rate {
                    ui.label(format!("• {}: {} addressable", scenario.display_name, format_percent(rate)));
                }
            }
        });

        let benchmark = match table.benchmark() {
            Ok(benchmark) => benchmark,
            Err(err) => {
                tracing::error!("{err}");
                debug_assert!(false, "{err}");
                return;
            }
        };
        card(ui, theme, |ui| {
            card_title(ui, theme, "4. Competitive Benchmarking");
            ui.columns(3, |cols| {
                metric_card(
                    &mut cols[0],
                    theme,
                    theme.palette().accent_error,
                    "Yahoo Mail (Current)",
                    &format_percent(benchmark.current_ratio),
                    "DAU/MAU ratio",
                );
                metric_card(
                    &mut cols[1],
                    theme,
                    theme.palette().accent_primary,
                    "Industry Average",
                    &format!(
                        "{}-{}",
                        format_percent(benchmark.industry_low).trim_end_matches('%'),
                        format_percent(benchmark.industry_high)
                    ),
                    "Typical email products",
                );
                metric_card(
                    &mut cols[2],
                    theme,
                    theme.view_color(ViewId::Base),
                    "Our Base Case Target",
                    &format_percent(benchmark.target_ratio),
                    &format!(
                        "{}M / {}M",
                        format_millions(benchmark.target_total_millions),
                        format_compact(benchmark.mail_mau_millions)
                    ),
                );
            });
            ui.add_space(8.0);
            callout(
                ui,
                theme,
                theme.palette().accent_primary,
                "Key Insight:",
                &format!(
                    "We're not trying to match Gmail (likely 30%+) or even the industry average ({}-{}). \
                     We're targeting {}, a ~{} improvement on our current {}. \
                     Our Base Case of {}M is a realistic stepping stone.",
                    format_percent(benchmark.industry_low).trim_end_matches('%'),
                    format_percent(benchmark.industry_high),
                    format_percent(benchmark.target_ratio),
                    format_percent(benchmark.improvement().round_dp(2)),
                    format_percent(benchmark.current_ratio),
                    format_millions(benchmark.target_total_millions),
                ),
            );
        });
    }
}
