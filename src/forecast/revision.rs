//! 두 리비전의 저작된 수치. 공통 가정은 한 번만 정의하고 리비전별 차이만 분기한다.

use super::model::{
    Components, Headline, MetricStatus, NewAccountRow, RetentionRow, Revision, Scenario, Segment,
    SensitivityRow, Takeaway, ValidationMetric, ViewId,
};
use rust_decimal::Decimal;

/// 백만 명 또는 비율 리터럴 축약.
fn d(mantissa: i64, scale: u32) -> Decimal {
    Decimal::new(mantissa, scale)
}

pub(super) fn headline() -> Headline {
    Headline {
        yahoo_mau_millions: d(1000, 0),
        mail_mau_millions: d(225, 0),
        non_mail_mau_millions: d(775, 0),
        inactive_mau_millions: d(215, 0),
        starting_dau_millions: d(10, 0),
        dau_mau_ratio: d(44, 3),
    }
}

pub(super) fn retention_rows() -> Vec<RetentionRow> {
    vec![
        RetentionRow {
            segment: "Core (5-7x/week)",
            current_millions: d(35, 1),
            retention_rate: d(90, 2),
            retained_millions: d(315, 2),
            source: "Industry avg for high-engagement email users",
        },
        RetentionRow {
            segment: "Casual (2-4x/week)",
            current_millions: d(40, 1),
            retention_rate: d(75, 2),
            retained_millions: d(30, 1),
            source: "Historical Yahoo Mail cohort data (Q3 2024)",
        },
        RetentionRow {
            segment: "At-risk (<2x/week)",
            current_millions: d(25, 1),
            retention_rate: d(50, 2),
            retained_millions: d(125, 2),
            source: "Conservative estimate, peer benchmarks show 45-55%",
        },
    ]
}

/// 도달률 단계별 세그먼트 결과. (크기, 전환율, 결과) 값은 단계마다 저작된 그대로이다.
#[derive(Clone, Copy)]
enum Tier {
    Conservative,
    Base,
    Aggressive,
}

impl Tier {
    fn rate(self) -> Decimal {
        match self {
            Tier::Conservative => d(30, 2),
            Tier::Base => d(50, 2),
            Tier::Aggressive => d(75, 2),
        }
    }

    fn results(self) -> [Decimal; 3] {
        match self {
            Tier::Conservative => [d(84, 2), d(975, 3), d(69, 2)],
            Tier::Base => [d(14, 1), d(1625, 3), d(115, 2)],
            Tier::Aggressive => [d(21, 1), d(24375, 4), d(1725, 3)],
        }
    }

    fn tactics(self) -> [&'static str; 3] {
        match self {
            Tier::Conservative => [
                "Smart notifications",
                "Cross-product integration",
                "Re-engagement campaigns",
            ],
            Tier::Base => [
                "Smart notifications + habit streaks",
                "Inbox cleanup wizard + cross-product alerts",
                "Re-engagement campaigns",
            ],
            Tier::Aggressive => [
                "Experiments exceed targets, viral adoption",
                "Network effects kick in, word-of-mouth growth",
                "Strong product-market fit improvements",
            ],
        }
    }
}

/// 재활성화 대상 MAU 풀: (라벨, 참여 빈도, 규모, 목표 전환율).
fn reactivation_pool() -> [(&'static str, &'static str, Decimal, Decimal); 3] {
    [
        ("Almost Daily Users", "Check 3-4x/week, close to daily habit", d(35, 0), d(8, 2)),
        ("Weekly Users", "Check ~1x/week", d(65, 0), d(5, 2)),
        ("Monthly Users", "Check less than 4x/month", d(115, 0), d(2, 2)),
    ]
}

fn reactivation_segments(tier: Tier) -> Vec<Segment> {
    reactivation_pool()
        .into_iter()
        .zip(tier.results())
        .zip(tier.tactics())
        .map(|(((label, description, size, conversion), result), tactic)| Segment {
            label,
            description,
            size_millions: size,
            conversion_rate: conversion,
            addressable_or_success_rate: tier.rate(),
            result_millions: result,
            tactic,
        })
        .collect()
}

/// 리비전마다 달라지는 저작 값 묶음.
struct Profile {
    new_accounts: Decimal,
    baseline_reactivation: Decimal,
    organic_reactivation_rate: Decimal,
    organic_result: Decimal,
    totals: [Decimal; 4],
}

fn profile(revision: Revision) -> Profile {
    match revision {
        Revision::A => Profile {
            new_accounts: d(34, 2),
            baseline_reactivation: d(47, 4),
            organic_reactivation_rate: d(5, 4),
            organic_result: d(473, 5),
            totals: [d(7745, 3), d(1025, 2), d(1192, 2), d(1401, 2)],
        },
        Revision::B => Profile {
            new_accounts: d(43, 2),
            baseline_reactivation: d(15, 2),
            organic_reactivation_rate: d(16, 3),
            organic_result: d(15136, 5),
            totals: [d(798, 2), d(1034, 2), d(1201, 2), d(1410, 2)],
        },
    }
}

pub(super) fn scenarios(revision: Revision) -> Vec<Scenario> {
    let p = profile(revision);
    let retained_base = d(74, 1);
    let components = |reactivation: Decimal, total: Decimal| Components {
        retained_base,
        reactivation,
        new_accounts: p.new_accounts,
        total,
    };
    let organic = Segment {
        label: "Organic reactivation (inactive MAU)",
        description: "Some inactive users come back on their own (an important email, a reminder the account exists)",
        size_millions: d(215, 0),
        conversion_rate: p.organic_reactivation_rate,
        addressable_or_success_rate: d(44, 3),
        result_millions: p.organic_result,
        tactic: "None. Important emails and account reminders only",
    };
    vec![
        Scenario {
            name: ViewId::Baseline,
            short_name: "Baseline",
            display_name: "Baseline",
            title: "Baseline Scenario: Do Nothing",
            tagline: "Natural retention + organic growth only",
            addressable_rate: None,
            components: components(p.baseline_reactivation, p.totals[0]),
            segments: vec![organic],
            takeaway: Takeaway {
                title: "The Burning Platform",
                body: "Without intervention, Yahoo Mail declines in 2026. \
                       We are not trying to grow, we are trying to reverse a decline.",
                requirements: Vec::new(),
            },
        },
        Scenario {
            name: ViewId::Conservative,
            short_name: "Conservative",
            display_name: "Conservative",
            title: "Conservative: 30% Addressable Rate",
            tagline: "Many experiments fail, but some work",
            addressable_rate: Some(Tier::Conservative.rate()),
            components: components(d(251, 2), p.totals[1]),
            segments: reactivation_segments(Tier::Conservative),
            takeaway: Takeaway {
                title: "Holding the Line",
                body: "Even with most experiments failing, reactivation offsets natural churn \
                       and holds DAU roughly flat.",
                requirements: Vec::new(),
            },
        },
        Scenario {
            name: ViewId::Base,
            short_name: "Base",
            display_name: "Base Case",
            title: "Base Case: 50% Addressable Rate",
            tagline: "Realistic execution with focused experiments",
            addressable_rate: Some(Tier::Base.rate()),
            components: components(d(418, 2), p.totals[2]),
            segments: reactivation_segments(Tier::Base),
            takeaway: Takeaway {
                title: "Recommendation",
                body: "This is the realistic target with focused execution on reactivation \
                       experiments, feature launches and a 50% addressable rate.",
                requirements: Vec::new(),
            },
        },
        Scenario {
            name: ViewId::Aggressive,
            short_name: "Aggressive",
            display_name: "Aggressive",
            title: "Aggressive: 75% Addressable Rate",
            tagline: "Strong execution, experiments exceed expectations",
            addressable_rate: Some(Tier::Aggressive.rate()),
            components: components(d(627, 2), p.totals[3]),
            segments: reactivation_segments(Tier::Aggressive),
            takeaway: Takeaway {
                title: "Upside Scenario",
                body: "Assumes strong execution and some viral or network effects. Possible if \
                       experiments clearly exceed targets and product improvements drive word-of-mouth.",
                requirements: vec![
                    "Notification experiments hit 10-12% conversion (vs 8% target)",
                    "Cross-product features drive unexpected adoption",
                    "NPS improves to 55+ enabling organic word-of-mouth",
                    "Competitor missteps create a switching opportunity",
                ],
            },
        },
    ]
}

pub(super) fn new_account_rows(revision: Revision) -> Vec<NewAccountRow> {
    match revision {
        Revision::A => vec![NewAccountRow {
            label: "Cross-sell from non-Mail Yahoo MAU",
            base_millions: d(775, 0),
            conversion_rate: d(1, 2),
            engagement_rate: d(44, 3),
            result_millions: d(341, 3),
            basis: "775M × 1% annual conversion = 7.75M new Mail MAU, × 4.4% DAU/MAU",
        }],
        Revision::B => {
            let cohort = |label, retention: Decimal, result: Decimal| NewAccountRow {
                label,
                base_millions: d(195, 2),
                conversion_rate: d(8, 2),
                engagement_rate: retention,
                result_millions: result,
                basis: "1.95M new Mail MAU per quarter × 8% day-30 DAU/MAU × retention to year end",
            };
            vec![
                cohort("Q1 cohort", d(50, 2), d(78, 3)),
                cohort("Q2 cohort", d(60, 2), d(936, 4)),
                cohort("Q3 cohort", d(75, 2), d(117, 3)),
                cohort("Q4 cohort", d(90, 2), d(1404, 4)),
            ]
        }
    }
}

/// 일반적인 이메일 제품의 DAU/MAU 범위 (하한, 상한).
pub(super) fn industry_dau_mau_range() -> (Decimal, Decimal) {
    (d(10, 2), d(20, 2))
}

/// Base Case 재활성화 풀의 100% 도달 시 잠재치 (2.8 + 3.25 + 2.3).
pub(super) fn base_case_potential() -> Decimal {
    d(835, 2)
}

pub(super) fn sensitivity_rows(revision: Revision) -> Vec<SensitivityRow> {
    if revision == Revision::A {
        return Vec::new();
    }
    let row = |label, rate, multiplier, reactivation, total| SensitivityRow {
        label,
        addressable_rate: rate,
        conversion_multiplier: multiplier,
        reactivation_millions: reactivation,
        total_millions: total,
    };
    vec![
        row("Base Case as planned", d(50, 2), d(100, 2), d(418, 2), d(1201, 2)),
        row("Addressable slips to 40%", d(40, 2), d(100, 2), d(334, 2), d(1117, 2)),
        row("Addressable reaches 60%", d(60, 2), d(100, 2), d(501, 2), d(1284, 2)),
        row("Conversions 25% below target", d(50, 2), d(75, 2), d(313, 2), d(1096, 2)),
        row("Conversions 25% above target", d(50, 2), d(125, 2), d(522, 2), d(1305, 2)),
    ]
}

pub(super) fn validation_metrics(revision: Revision) -> Vec<ValidationMetric> {
    if revision == Revision::A {
        return Vec::new();
    }
    vec![
        ValidationMetric {
            label: "Implied DAU/MAU (Base Case)",
            value: "5.3%",
            benchmark: "Email industry 10-20%",
            status: MetricStatus::Pass,
        },
        ValidationMetric {
            label: "Blended retention of current DAU",
            value: "74%",
            benchmark: "Peer retention 70-80%",
            status: MetricStatus::Pass,
        },
        ValidationMetric {
            label: "New Mail MAU per quarterly cohort",
            value: "1.95M",
            benchmark: "Q3 2024 actual: 1.8M",
            status: MetricStatus::Watch,
        },
        ValidationMetric {
            label: "Implied DAU/MAU (Aggressive)",
            value: "6.3%",
            benchmark: "Needs 10-12% notification conversion",
            status: MetricStatus::Watch,
        },
        ValidationMetric {
            label: "Reactivation share of added DAU (Base Case)",
            value: "91%",
            benchmark: "Below 75% preferred",
            status: MetricStatus::Risk,
        },
    ]
}
