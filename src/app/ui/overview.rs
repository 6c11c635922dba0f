use super::*;

/// 단계별 Key Assumptions 링크 문구. 3단계는 시나리오 탭에서 다룬다.
const STEP_LINKS: [Option<&str>; 3] = [Some("See assumptions →"), Some("See calculations →"), None];

impl DashboardApp {
    pub(super) fn render_overview(&mut self, ui: &mut egui::Ui) {
        let table = self.table;
        let headline = *table.headline();
        let theme = &self.theme;

        banner(
            ui,
            theme,
            theme.palette().accent_error,
            "The Problem",
            &format!(
                "{}M DAU from {}M MAU = {} DAU/MAU. Without intervention, DAU declines in 2026.",
                format_compact(headline.starting_dau_millions),
                format_compact(headline.mail_mau_millions),
                format_percent(headline.dau_mau_ratio),
            ),
        );

        if let Ok(benchmark) = table.benchmark() {
            card(ui, theme, |ui| {
                card_title(ui, theme, "Why We Can Win");
                let accent = theme.palette().accent_primary;
                ui.columns(3, |cols| {
                    figure_tile(
                        &mut cols[0],
                        accent,
                        &format!("{}M", format_compact(benchmark.mail_mau_millions)),
                        "MAU give us a massive addressable base for reactivation experiments",
                    );
                    figure_tile(
                        &mut cols[1],
                        accent,
                        "25+ years",
                        "Brand trust and user familiarity in a crowded market",
                    );
                    figure_tile(
                        &mut cols[2],
                        accent,
                        &format!(
                            "{} → {}",
                            format_percent(benchmark.current_ratio),
                            format_percent(benchmark.industry_low)
                        ),
                        &format!(
                            "Moving halfway to the {} benchmark gets us to 18M DAU",
                            format_percent(benchmark.industry_low)
                        ),
                    );
                });
            });
        }

        let mut goto_assumptions = false;
        card(ui, theme, |ui| {
            card_title(ui, theme, "Strategic Approach");
            ui.columns(3, |cols| {
                let steps = [
                    (
                        "Step 1 · Model Retention",
                        "Segment current DAU by engagement and apply retention rates.",
                        format!("Result: {}M retained", format_millions(retained_base(table.scenarios()))),
                        STEP_LINKS[0],
                    ),
                    (
                        "Step 2 · Calculate New Users",
                        "Derive new Mail DAU from non-Mail Yahoo MAU.",
                        format!("Result: {}M new DAU", format_millions(new_accounts(table.scenarios()))),
                        STEP_LINKS[1],
                    ),
                    (
                        "Step 3 · Model Reactivation",
                        "Run experiments on inactive MAU segmented by engagement.",
                        reactivation_range(table.scenarios()),
                        STEP_LINKS[2],
                    ),
                ];
                for (col, (title, body, result, link)) in cols.iter_mut().zip(steps) {
                    col.label(RichText::new(title).strong());
                    col.label(body);
                    col.label(RichText::new(result).strong());
                    if link.is_some_and(|text| col.link(text).clicked()) {
                        goto_assumptions = true;
                    }
                }
            });
        });
        if goto_assumptions {
            self.select_tab(ViewId::Assumptions);
        }

        let theme = &self.theme;
        card(ui, theme, |ui| {
            card_title(ui, theme, "Component Breakdown Across Scenarios");
            ui.label(
                RichText::new("The reactivation lever is the primary driver of growth variance between scenarios")
                    .color(theme.palette().fg_text_secondary),
            );
            ui.add(StackedComponentChart::new(theme, table.scenarios()).height(340.0));
            ui.add_space(8.0);
            callout(
                ui,
                theme,
                theme.palette().accent_primary,
                "Key Insight:",
                &format!(
                    "Retained base and new accounts are relatively stable (~{}M). \
                     Reactivation is our highest-leverage, highest-risk growth driver ({}).",
                    format_millions(stable_base(table.scenarios())),
                    reactivation_span(table.scenarios()),
                ),
            );
        });

        ui.columns(table.scenarios().len().max(1), |cols| {
            for (col, scenario) in cols.iter_mut().zip(table.scenarios()) {
                metric_card(
                    col,
                    theme,
                    theme.view_color(scenario.name),
                    scenario.display_name,
                    &format!("{}M", format_millions(scenario.components.total)),
                    &format_change(scenario.components.total, headline.starting_dau_millions),
                );
            }
        });

        if let Ok(base) = table.get_scenario(ViewId::Base) {
            banner(
                ui,
                theme,
                theme.view_color(ViewId::Base),
                &format!(
                    "Predicted DAU by end of 2026: Target {} ({}M)",
                    base.display_name,
                    format_millions(base.components.total)
                ),
                "Realistic execution with focused experiments and a 50% success rate on reactivation.",
            );
        }
    }
}

fn retained_base(scenarios: &[Scenario]) -> rust_decimal::Decimal {
    scenarios
        .first()
        .map(|s| s.components.retained_base)
        .unwrap_or_default()
}

fn new_accounts(scenarios: &[Scenario]) -> rust_decimal::Decimal {
    scenarios
        .first()
        .map(|s| s.components.new_accounts)
        .unwrap_or_default()
}

/// 시나리오와 무관하게 고정된 유지 + 신규 계정 몫.
fn stable_base(scenarios: &[Scenario]) -> rust_decimal::Decimal {
    retained_base(scenarios) + new_accounts(scenarios)
}

fn reactivation_bounds(scenarios: &[Scenario]) -> Option<(rust_decimal::Decimal, rust_decimal::Decimal)> {
    let values = scenarios.iter().map(|s| s.components.get(Component::Reactivation));
    values.clone().min().zip(values.max())
}

/// 시나리오들의 reactivation 최솟값~최댓값.
fn reactivation_range(scenarios: &[Scenario]) -> String {
    match reactivation_bounds(scenarios) {
        Some((lo, hi)) => format!("Result: {}M to {}M", format_millions(lo), format_millions(hi)),
        None => "Result: n/a".to_string(),
    }
}

fn reactivation_span(scenarios: &[Scenario]) -> String {
    match reactivation_bounds(scenarios) {
        Some((lo, hi)) => format!("{}M → {}M range", format_millions(lo), format_millions(hi)),
        None => "no scenarios".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::{Revision, ScenarioTable};

    #[test]
    fn key_insight_figures_follow_the_revision() {
        let a = ScenarioTable::for_revision(Revision::A).scenarios();
        assert_eq!(format_millions(stable_base(a)), "7.74");
        assert_eq!(reactivation_span(a), "0.005M → 6.27M range");
        let b = ScenarioTable::for_revision(Revision::B).scenarios();
        assert_eq!(format_millions(stable_base(b)), "7.83");
        assert_eq!(reactivation_range(b), "Result: 0.15M to 6.27M");
    }

    #[test]
    fn only_the_first_two_steps_link_to_assumptions() {
        assert_eq!(STEP_LINKS, [Some("See assumptions →"), Some("See calculations →"), None]);
    }

    #[test]
    fn empty_scenario_list_has_no_range() {
        assert_eq!(reactivation_range(&[]), "Result: n/a");
        assert_eq!(reactivation_span(&[]), "no scenarios");
    }
}
