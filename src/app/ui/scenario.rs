use super::*;
use crate::forecast::ScenarioTable;
use crate::theme::{Theme, blend_color};

impl DashboardApp {
    pub(super) fn render_scenario_view(&mut self, ui: &mut egui::Ui, view: ViewId) {
        debug_assert!(view.is_scenario(), "{view} is not a scenario view");
        let table = self.table;
        let scenario = match table.get_scenario(view) {
            Ok(scenario) => scenario,
            Err(err) => {
                // 탭 집합과 데이터가 같은 열거형에서 나오므로 여기 도달하면 구성 오류다.
                tracing::error!("{err}");
                debug_assert!(false, "{err}");
                ui.label(RichText::new(err.to_string()).color(self.theme.palette().accent_error));
                return;
            }
        };
        let theme = &self.theme;
        let accent = theme.view_color(view);
        let headline = table.headline();

        banner(ui, theme, accent, scenario.title, scenario.tagline);

        ui.columns(2, |cols| {
            metric_card(
                &mut cols[0],
                theme,
                accent,
                "DAU by end of 2026",
                &format!("{}M", format_millions(scenario.components.total)),
                &format_change(scenario.components.total, headline.starting_dau_millions),
            );
            let rate = scenario
                .addressable_rate
                .map(format_percent)
                .unwrap_or_else(|| "none".to_string());
            metric_card(
                &mut cols[1],
                theme,
                accent,
                "Addressable rate",
                &rate,
                &format!(
                    "of {}M inactive MAU",
                    format_compact(headline.inactive_mau_millions)
                ),
            );
        });

        if view == ViewId::Baseline {
            retained_base_section(ui, theme, table, accent);
            new_accounts_section(ui, theme, table, scenario, accent);
            organic_reactivation_section(ui, theme, scenario, accent);
        } else {
            reactivation_section(ui, theme, scenario, accent);
        }

        final_calculation(ui, theme, scenario, accent, headline.starting_dau_millions);
        takeaway(ui, theme, scenario, accent);
    }
}

/// 1단계: 참여 수준별 유지율과 합계 행, 자연 이탈 경고.
fn retained_base_section(ui: &mut egui::Ui, theme: &Theme, table: &ScenarioTable, accent: egui::Color32) {
    let summary = table.retention_summary();
    card(ui, theme, |ui| {
        card_title(
            ui,
            theme,
            &format!("1. Retained Base: {}M", format_millions(summary.retained_millions)),
        );
        egui::Grid::new("baseline_retention")
            .striped(true)
            .num_columns(4)
            .spacing([32.0, 8.0])
            .show(ui, |ui| {
                for header in ["Segment", "Current DAU", "Retention", "Retained"] {
                    ui.label(RichText::new(header).strong());
                }
                ui.end_row();
                for row in table.retention_rows() {
                    ui.label(row.segment);
                    ui.label(format!("{}M", format_millions(row.current_millions)));
                    ui.label(format_percent(row.retention_rate));
                    ui.label(
                        RichText::new(format!("{}M", format_millions(row.retained_millions)))
                            .strong()
                            .color(accent),
                    );
                    ui.end_row();
                }
                ui.label(RichText::new("TOTAL").strong());
                ui.label(RichText::new(format!("{}M", format_compact(summary.current_millions))).strong());
                ui.label(RichText::new(format_percent(summary.blended_rate())).strong());
                ui.label(
                    RichText::new(format!("{}M", format_millions(summary.retained_millions)))
                        .strong()
                        .color(accent),
                );
                ui.end_row();
            });
        ui.add_space(8.0);
        callout(
            ui,
            theme,
            theme.palette().accent_error,
            "Warning:",
            &format!(
                "{} churn. We lose {}M users from natural attrition.",
                format_percent(summary.churn_rate()),
                format_millions(summary.lost_millions()),
            ),
        );
    });
}

/// 2단계: 기반 MAU → 전환 MAU → DAU 흐름.
fn new_accounts_section(
    ui: &mut egui::Ui,
    theme: &Theme,
    table: &ScenarioTable,
    scenario: &Scenario,
    accent: egui::Color32,
) {
    card(ui, theme, |ui| {
        card_title(
            ui,
            theme,
            &format!("2. New Accounts: {}M", format_millions(scenario.components.new_accounts)),
        );
        for row in table.new_account_rows() {
            let converted = row.base_millions * row.conversion_rate;
            ui.columns(3, |cols| {
                figure_tile(
                    &mut cols[0],
                    theme.palette().accent_primary,
                    &format!("{}M", format_compact(row.base_millions)),
                    row.label,
                );
                figure_tile(
                    &mut cols[1],
                    theme.view_color(ViewId::Assumptions),
                    &format!("{}M", format_millions(converted)),
                    &format!("→ new Mail MAU ({})", format_percent(row.conversion_rate)),
                );
                figure_tile(
                    &mut cols[2],
                    accent,
                    &format!("{}M", format_millions(row.result_millions)),
                    &format!("→ DAU ({})", format_percent(row.engagement_rate)),
                );
            });
            ui.add_space(4.0);
        }
        if let Some(row) = table.new_account_rows().first() {
            ui.label(RichText::new(row.basis).size(12.0).color(theme.palette().fg_text_secondary));
        }
    });
}

/// 3단계: 캠페인 없이 돌아오는 비활성 MAU.
fn organic_reactivation_section(
    ui: &mut egui::Ui,
    theme: &Theme,
    scenario: &Scenario,
    accent: egui::Color32,
) {
    card(ui, theme, |ui| {
        card_title(
            ui,
            theme,
            &format!("3. Organic Reactivation: {}M", format_millions(scenario.components.reactivation)),
        );
        for segment in &scenario.segments {
            ui.label(RichText::new(segment.description).color(theme.palette().fg_text_secondary));
            let returning = segment.size_millions * segment.conversion_rate;
            egui::Frame::none()
                .fill(theme.palette().bg_muted)
                .rounding(egui::Rounding::same(6.0))
                .inner_margin(egui::Margin::same(10.0))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(format!(
                        "MAU who reactivate: {}M × {} = {}M MAU",
                        format_compact(segment.size_millions),
                        format_percent(segment.conversion_rate),
                        format_compact(returning),
                    ));
                    ui.label(
                        RichText::new(format!(
                            "Convert to DAU: {}M MAU × {} = {}M DAU",
                            format_compact(returning),
                            format_percent(segment.addressable_or_success_rate),
                            format_millions(segment.result_millions),
                        ))
                        .color(accent),
                    );
                });
        }
    });
}

/// 참여 빈도별 세그먼트 표와 Total Reactivation 행.
fn reactivation_section(ui: &mut egui::Ui, theme: &Theme, scenario: &Scenario, accent: egui::Color32) {
    card(ui, theme, |ui| {
        let title = match scenario.addressable_rate {
            Some(rate) => format!("Reactivation Strategy ({} Addressable)", format_percent(rate)),
            None => "Reactivation Strategy".to_string(),
        };
        card_title(ui, theme, &title);
        egui::Grid::new(("segments", scenario.name))
            .striped(true)
            .num_columns(4)
            .spacing([24.0, 8.0])
            .show(ui, |ui| {
                for header in ["Segment", "Calculation", "New DAU", "Tactic"] {
                    ui.label(RichText::new(header).strong());
                }
                ui.end_row();
                for segment in &scenario.segments {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(format!(
                                "{}: {}M",
                                segment.label,
                                format_compact(segment.size_millions)
                            ))
                            .strong(),
                        );
                        ui.label(
                            RichText::new(segment.description)
                                .size(12.0)
                                .color(theme.palette().fg_text_secondary),
                        );
                    });
                    ui.label(format!(
                        "{}M × {} × {}",
                        format_compact(segment.size_millions),
                        format_percent(segment.conversion_rate),
                        format_percent(segment.addressable_or_success_rate),
                    ));
                    ui.label(
                        RichText::new(format!("{}M", format_millions(segment.result_millions)))
                            .strong()
                            .color(accent),
                    );
                    ui.label(RichText::new(segment.tactic).size(12.0));
                    ui.end_row();
                }
            });
        ui.add_space(8.0);
        egui::Frame::none()
            .fill(blend_color(accent, egui::Color32::WHITE, 0.9))
            .stroke(egui::Stroke::new(2.0, accent))
            .rounding(egui::Rounding::same(theme.decorations().card_rounding))
            .inner_margin(egui::Margin::same(12.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Total Reactivation").strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        // 세그먼트 합은 검증에서 0.01 이내로 묶여 있으므로 저작된 값을 보인다.
                        ui.label(
                            RichText::new(format!(
                                "{}M",
                                format_millions(scenario.components.reactivation)
                            ))
                            .size(24.0)
                            .strong()
                            .color(accent),
                        );
                    });
                });
            });
    });
}

fn final_calculation(
    ui: &mut egui::Ui,
    theme: &Theme,
    scenario: &Scenario,
    accent: egui::Color32,
    starting_dau: rust_decimal::Decimal,
) {
    egui::Frame::none()
        .fill(accent)
        .rounding(egui::Rounding::same(theme.decorations().container_rounding))
        .inner_margin(egui::Margin::same(20.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.visuals_mut().override_text_color = Some(egui::Color32::WHITE);
            ui.label(RichText::new("Final Calculation").size(20.0).strong());
            for (component, value) in scenario.components.iter() {
                let label = match component {
                    Component::RetainedBase => component.label().to_string(),
                    Component::Total => format!("= {}", component.label()),
                    _ => format!("+ {}", component.label()),
                };
                let is_total = component == Component::Total;
                if is_total {
                    ui.separator();
                }
                value_row(ui, &label, &format!("{}M", format_millions(value)), is_total);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format_change(scenario.components.total, starting_dau));
            });
        });
}

/// 결론 박스. 요구 조건이 있으면 목록으로 덧붙인다.
fn takeaway(ui: &mut egui::Ui, theme: &Theme, scenario: &Scenario, accent: egui::Color32) {
    let takeaway = &scenario.takeaway;
    callout(ui, theme, accent, takeaway.title, takeaway.body);
    if takeaway.requirements.is_empty() {
        return;
    }
    card(ui, theme, |ui| {
        ui.label(RichText::new("What would need to be true:").strong());
        for requirement in &takeaway.requirements {
            ui.label(format!("• {requirement}"));
        }
    });
}
