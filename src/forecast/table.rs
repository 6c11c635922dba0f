use super::error::ForecastError;
use super::format::format_millions;
use super::model::{
    Benchmark, Component, Headline, NewAccountRow, RetentionRow, RetentionSummary, Revision,
    Scenario, Segment, SensitivityRow, ValidationMetric, ViewId,
};
use super::revision as dataset;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

static REVISION_A: Lazy<ScenarioTable> = Lazy::new(|| ScenarioTable::build(Revision::A));
static REVISION_B: Lazy<ScenarioTable> = Lazy::new(|| ScenarioTable::build(Revision::B));

/// 리비전 하나의 읽기 전용 예측 테이블이다. 생성 이후 변경 연산은 없다.
#[derive(Debug)]
pub struct ScenarioTable {
    revision: Revision,
    headline: Headline,
    scenarios: Vec<Scenario>,
    retention: Vec<RetentionRow>,
    new_accounts: Vec<NewAccountRow>,
    sensitivity: Vec<SensitivityRow>,
    validation: Vec<ValidationMetric>,
}

impl ScenarioTable {
    /// 프로세스 전체에서 공유되는 리비전별 테이블을 반환한다.
    pub fn for_revision(revision: Revision) -> &'static ScenarioTable {
        match revision {
            Revision::A => Lazy::force(&REVISION_A),
            Revision::B => Lazy::force(&REVISION_B),
        }
    }

    fn build(revision: Revision) -> Self {
        Self {
            revision,
            headline: dataset::headline(),
            scenarios: dataset::scenarios(revision),
            retention: dataset::retention_rows(),
            new_accounts: dataset::new_account_rows(revision),
            sensitivity: dataset::sensitivity_rows(revision),
            validation: dataset::validation_metrics(revision),
        }
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    pub fn headline(&self) -> &Headline {
        &self.headline
    }

    /// Baseline → Aggressive 순서의 시나리오 목록.
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// 뷰 식별자로 시나리오를 조회한다. 시나리오가 없는 뷰는 NotFound이다.
    pub fn get_scenario(&self, view: ViewId) -> Result<&Scenario, ForecastError> {
        self.scenarios
            .iter()
            .find(|s| s.name == view)
            .ok_or_else(|| self.not_found(view.as_str()))
    }

    /// 문자열 식별자로 조회한다. 열거되지 않은 식별자도 NotFound이다.
    #[cfg(test)]
    pub fn get_scenario_by_id(&self, id: &str) -> Result<&Scenario, ForecastError> {
        let view: ViewId = id.parse().map_err(|_| self.not_found(id))?;
        self.get_scenario(view)
    }

    fn not_found(&self, id: &str) -> ForecastError {
        ForecastError::NotFound {
            revision: self.revision,
            view: id.to_string(),
        }
    }

    /// 세그먼트 상세가 없는 뷰(overview 등)는 빈 슬라이스를 반환한다.
    pub fn get_segments(&self, view: ViewId) -> &[Segment] {
        self.get_scenario(view)
            .map(|s| s.segments.as_slice())
            .unwrap_or(&[])
    }

    pub fn retention_rows(&self) -> &[RetentionRow] {
        &self.retention
    }

    /// 유지율 행 합계 (현재 DAU, 유지 DAU).
    pub fn retention_summary(&self) -> RetentionSummary {
        RetentionSummary {
            current_millions: self.retention.iter().map(|r| r.current_millions).sum(),
            retained_millions: self.retention.iter().map(|r| r.retained_millions).sum(),
        }
    }

    /// Base Case 합계를 Mail MAU로 나눈 목표 DAU/MAU와 업계 범위.
    pub fn benchmark(&self) -> Result<Benchmark, ForecastError> {
        let base = self.get_scenario(ViewId::Base)?;
        let (industry_low, industry_high) = dataset::industry_dau_mau_range();
        Ok(Benchmark {
            current_ratio: self.headline.dau_mau_ratio,
            industry_low,
            industry_high,
            target_ratio: base.components.total / self.headline.mail_mau_millions,
            target_total_millions: base.components.total,
            mail_mau_millions: self.headline.mail_mau_millions,
        })
    }

    pub fn new_account_rows(&self) -> &[NewAccountRow] {
        &self.new_accounts
    }

    pub fn sensitivity_rows(&self) -> &[SensitivityRow] {
        &self.sensitivity
    }

    pub fn validation_metrics(&self) -> &[ValidationMetric] {
        &self.validation
    }

    /// 이 리비전에서 선택 가능한 탭의 닫힌 집합 (표시 순서).
    pub fn tabs(&self) -> Vec<ViewId> {
        ViewId::ALL
            .into_iter()
            .filter(|view| *view != ViewId::Validation || !self.validation.is_empty())
            .collect()
    }

    /// 탭 버튼 라벨. 시나리오 탭은 헤드라인 합계와 묶인다 (예: "Base: 11.92M").
    pub fn tab_label(&self, view: ViewId) -> String {
        match view {
            ViewId::Overview => "Overview".to_string(),
            ViewId::Assumptions => "Key Assumptions".to_string(),
            ViewId::Validation => "Risk & Validation".to_string(),
            _ => match self.get_scenario(view) {
                Ok(s) => format!(
                    "{}: {}M",
                    s.short_name,
                    format_millions(s.components.total)
                ),
                Err(_) => view.as_str().to_string(),
            },
        }
    }

    /// 저작된 수치의 합계 불변식을 모두 확인한다.
    pub fn verify(&self) -> Result<(), ForecastError> {
        let rev = self.revision;
        let retained = self.retention_summary().retained_millions;
        let new_accounts: Decimal = self.new_accounts.iter().map(|r| r.result_millions).sum();
        for row in &self.retention {
            ensure_close(
                rev,
                format!("retention {}", row.segment),
                row.current_millions * row.retention_rate,
                row.retained_millions,
            )?;
        }
        for row in &self.new_accounts {
            ensure_close(rev, format!("new accounts {}", row.label), row.product(), row.result_millions)?;
        }
        for scenario in &self.scenarios {
            let c = &scenario.components;
            let check = |component: Component| format!("{} {}", scenario.name, component.key());
            let segments = scenario.segment_total();
            ensure_close(rev, check(Component::Total), c.summed(), c.total)?;
            ensure_close(rev, check(Component::RetainedBase), retained, c.retained_base)?;
            ensure_close(rev, check(Component::NewAccounts), new_accounts, c.new_accounts)?;
            ensure_close(rev, check(Component::Reactivation), segments, c.reactivation)?;
            for segment in &scenario.segments {
                ensure_close(
                    rev,
                    format!("{} segment {}", scenario.name, segment.label),
                    segment.product(),
                    segment.result_millions,
                )?;
            }
        }
        if let Some(base) = self.scenarios.iter().find(|s| s.name == ViewId::Base) {
            for row in &self.sensitivity {
                let expected = dataset::base_case_potential()
                    * row.addressable_rate
                    * row.conversion_multiplier;
                ensure_close(rev, format!("sensitivity {}", row.label), expected, row.reactivation_millions)?;
                let summed = base.components.retained_base
                    + row.reactivation_millions
                    + base.components.new_accounts;
                ensure_close(rev, format!("sensitivity {} total", row.label), summed, row.total_millions)?;
            }
        }
        Ok(())
    }
}

/// 두 리비전을 모두 검증한다.
pub fn verify_all() -> Result<(), ForecastError> {
    Revision::ALL
        .into_iter()
        .try_for_each(|rev| ScenarioTable::for_revision(rev).verify())
}

/// 표시 반올림 단위(0.01) 이내인지 확인한다.
fn ensure_close(
    revision: Revision,
    check: String,
    expected: Decimal,
    actual: Decimal,
) -> Result<(), ForecastError> {
    if (expected - actual).abs() <= Decimal::new(1, 2) {
        Ok(())
    } else {
        Err(ForecastError::Inconsistent {
            revision,
            check,
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::format::format_percent;

    fn tolerance() -> Decimal {
        Decimal::new(1, 2)
    }

    fn totals(revision: Revision) -> Vec<(ViewId, Decimal)> {
        ScenarioTable::for_revision(revision)
            .scenarios()
            .iter()
            .map(|s| (s.name, s.components.total))
            .collect()
    }

    #[test]
    fn both_revisions_pass_verification() {
        assert_eq!(verify_all(), Ok(()));
    }

    #[test]
    fn revision_a_totals_match_authored_figures() {
        assert_eq!(
            totals(Revision::A),
            vec![
                (ViewId::Baseline, Decimal::new(7745, 3)),
                (ViewId::Conservative, Decimal::new(1025, 2)),
                (ViewId::Base, Decimal::new(1192, 2)),
                (ViewId::Aggressive, Decimal::new(1401, 2)),
            ]
        );
    }

    #[test]
    fn revision_b_totals_match_authored_figures() {
        assert_eq!(
            totals(Revision::B),
            vec![
                (ViewId::Baseline, Decimal::new(798, 2)),
                (ViewId::Conservative, Decimal::new(1034, 2)),
                (ViewId::Base, Decimal::new(1201, 2)),
                (ViewId::Aggressive, Decimal::new(141, 1)),
            ]
        );
    }

    #[test]
    fn every_total_is_the_sum_of_its_components() {
        for revision in Revision::ALL {
            for scenario in ScenarioTable::for_revision(revision).scenarios() {
                let c = scenario.components;
                let diff = (c.summed() - c.total).abs();
                assert!(diff <= tolerance(), "{revision}/{}: off by {diff}", scenario.name);
            }
        }
    }

    #[test]
    fn base_case_segments_add_up_to_reactivation() {
        let table = ScenarioTable::for_revision(Revision::A);
        let segments = table.get_segments(ViewId::Base);
        let results: Vec<_> = segments.iter().map(|s| s.result_millions).collect();
        assert_eq!(
            results,
            vec![Decimal::new(14, 1), Decimal::new(1625, 3), Decimal::new(115, 2)]
        );
        let sum: Decimal = results.into_iter().sum();
        assert_eq!(sum, Decimal::new(4175, 3));
        let reactivation = table
            .get_scenario(ViewId::Base)
            .map(|s| s.components.get(Component::Reactivation));
        assert_eq!(reactivation, Ok(Decimal::new(418, 2)));
    }

    #[test]
    fn segment_sums_match_reactivation_for_every_scenario() {
        for revision in Revision::ALL {
            let table = ScenarioTable::for_revision(revision);
            for view in ViewId::SCENARIOS {
                let sum: Decimal = table.get_segments(view).iter().map(|s| s.result_millions).sum();
                let reactivation = table.get_scenario(view).unwrap().components.reactivation;
                assert!((sum - reactivation).abs() <= tolerance(), "{revision}/{view}");
            }
        }
    }

    #[test]
    fn views_without_scenarios_have_no_segments() {
        let table = ScenarioTable::for_revision(Revision::B);
        assert!(table.get_segments(ViewId::Overview).is_empty());
        assert!(table.get_segments(ViewId::Assumptions).is_empty());
        assert!(table.get_segments(ViewId::Validation).is_empty());
    }

    #[test]
    fn lookup_miss_is_an_error_not_a_default() {
        let table = ScenarioTable::for_revision(Revision::A);
        assert_eq!(
            table.get_scenario(ViewId::Overview).map(|s| s.name),
            Err(ForecastError::NotFound {
                revision: Revision::A,
                view: "overview".into(),
            })
        );
        assert_eq!(
            table.get_scenario_by_id("moonshot").map(|s| s.name),
            Err(ForecastError::NotFound {
                revision: Revision::A,
                view: "moonshot".into(),
            })
        );
        assert!(matches!(
            table.get_scenario_by_id("validation"),
            Err(ForecastError::NotFound { .. })
        ));
        assert_eq!(
            table.get_scenario_by_id("aggressive").map(|s| s.short_name),
            Ok("Aggressive")
        );
    }

    #[test]
    fn validation_tab_only_exists_in_revision_b() {
        let a = ScenarioTable::for_revision(Revision::A);
        let b = ScenarioTable::for_revision(Revision::B);
        assert_eq!(a.tabs().len(), 6);
        assert!(!a.tabs().contains(&ViewId::Validation));
        assert_eq!(b.tabs(), ViewId::ALL.to_vec());
        assert!(a.sensitivity_rows().is_empty());
        assert_eq!(b.sensitivity_rows().len(), 5);
        assert!(!b.validation_metrics().is_empty());
    }

    #[test]
    fn tab_labels_bind_to_headline_totals() {
        let a = ScenarioTable::for_revision(Revision::A);
        let b = ScenarioTable::for_revision(Revision::B);
        assert_eq!(a.tab_label(ViewId::Base), "Base: 11.92M");
        assert_eq!(a.tab_label(ViewId::Baseline), "Baseline: 7.75M");
        assert_eq!(b.tab_label(ViewId::Base), "Base: 12.01M");
        assert_eq!(b.tab_label(ViewId::Aggressive), "Aggressive: 14.10M");
        assert_eq!(b.tab_label(ViewId::Assumptions), "Key Assumptions");
    }

    #[test]
    fn retained_base_is_built_from_retention_rows() {
        let table = ScenarioTable::for_revision(Revision::A);
        let retained: Decimal = table.retention_rows().iter().map(|r| r.retained_millions).sum();
        assert_eq!(retained, Decimal::new(74, 1));
    }

    #[test]
    fn new_accounts_derivation_differs_between_revisions() {
        let a = ScenarioTable::for_revision(Revision::A).new_account_rows();
        let b = ScenarioTable::for_revision(Revision::B).new_account_rows();
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 4);
        let b_sum: Decimal = b.iter().map(|r| r.result_millions).sum();
        assert_eq!(b_sum, Decimal::new(429, 3));
    }

    #[test]
    fn retention_summary_matches_the_baseline_breakdown() {
        let summary = ScenarioTable::for_revision(Revision::A).retention_summary();
        assert_eq!(summary.current_millions, Decimal::TEN);
        assert_eq!(summary.retained_millions, Decimal::new(74, 1));
        assert_eq!(format_percent(summary.blended_rate()), "74%");
        assert_eq!(format_percent(summary.churn_rate()), "26%");
        assert_eq!(format_millions(summary.lost_millions()), "2.60");
    }

    #[test]
    fn baseline_build_up_steps_lead_to_the_total() {
        let table = ScenarioTable::for_revision(Revision::A);
        let flow = &table.new_account_rows()[0];
        assert_eq!(flow.base_millions * flow.conversion_rate, Decimal::new(775, 2));
        assert_eq!(format_millions(flow.result_millions), "0.34");
        let baseline = table.get_scenario(ViewId::Baseline).unwrap();
        let organic = &baseline.segments[0];
        assert_eq!(organic.size_millions * organic.conversion_rate, Decimal::new(1075, 4));
        assert_eq!(format_millions(organic.result_millions), "0.005");
        let steps = table.retention_summary().retained_millions
            + baseline.components.new_accounts
            + baseline.components.reactivation;
        assert!((steps - baseline.components.total).abs() <= tolerance());
    }

    #[test]
    fn benchmark_target_comes_from_the_base_case_total() {
        let a = ScenarioTable::for_revision(Revision::A).benchmark().unwrap();
        assert_eq!(a.target_total_millions, Decimal::new(1192, 2));
        assert_eq!(format_percent(a.target_ratio), "5.3%");
        assert_eq!(format_percent(a.current_ratio), "4.4%");
        assert_eq!(format_percent(a.industry_low), "10%");
        assert_eq!(format_percent(a.industry_high), "20%");
        assert_eq!(format_percent(a.improvement()), "20.4%");
        let b = ScenarioTable::for_revision(Revision::B).benchmark().unwrap();
        assert_eq!(format_percent(b.target_ratio), "5.34%");
    }

    #[test]
    fn total_reactivation_rows_stay_within_rounding_of_segments() {
        let table = ScenarioTable::for_revision(Revision::A);
        let mut shown = Vec::new();
        for view in [ViewId::Conservative, ViewId::Base, ViewId::Aggressive] {
            let scenario = table.get_scenario(view).unwrap();
            let drift = (scenario.segment_total() - scenario.components.reactivation).abs();
            assert!(drift <= tolerance(), "{view}: off by {drift}");
            shown.push(format_millions(scenario.components.reactivation));
        }
        assert_eq!(shown, ["2.51", "4.18", "6.27"]);
        // 6.2625는 표시 반올림으로 6.26이 되므로 합계 행은 저작된 값을 쓴다.
        let aggressive = table.get_scenario(ViewId::Aggressive).unwrap();
        assert_eq!(format_millions(aggressive.segment_total()), "6.26");
    }

    #[test]
    fn reactivation_segments_describe_engagement() {
        let table = ScenarioTable::for_revision(Revision::B);
        let descriptions: Vec<_> = table
            .get_segments(ViewId::Conservative)
            .iter()
            .map(|s| s.description)
            .collect();
        assert_eq!(
            descriptions,
            [
                "Check 3-4x/week, close to daily habit",
                "Check ~1x/week",
                "Check less than 4x/month",
            ]
        );
    }

    #[test]
    fn only_the_aggressive_takeaway_lists_requirements() {
        let table = ScenarioTable::for_revision(Revision::A);
        for scenario in table.scenarios() {
            let listed = !scenario.takeaway.requirements.is_empty();
            assert_eq!(listed, scenario.name == ViewId::Aggressive, "{}", scenario.name);
        }
        let baseline = table.get_scenario(ViewId::Baseline).unwrap();
        assert_eq!(baseline.takeaway.title, "The Burning Platform");
    }

    #[test]
    fn verification_reports_drifted_totals() {
        let mut table = ScenarioTable::build(Revision::A);
        table.scenarios[2].components.total = Decimal::new(1250, 2);
        match table.verify() {
            Err(ForecastError::Inconsistent { check, .. }) => assert_eq!(check, "base total"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
