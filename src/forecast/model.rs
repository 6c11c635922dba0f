use super::error::ForecastError;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// 대시보드 탭(뷰) 식별자이다. 탭 버튼과 데이터 조회가 같은 열거형을 공유한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    /// 문제 정의와 시나리오 비교.
    Overview,
    /// 핵심 가정과 데이터 출처.
    Assumptions,
    /// 아무것도 하지 않는 경우.
    Baseline,
    /// 30% 도달률.
    Conservative,
    /// 50% 도달률.
    Base,
    /// 75% 도달률.
    Aggressive,
    /// 리스크 및 검증 지표.
    Validation,
}

impl ViewId {
    /// 열거 순서 그대로의 전체 식별자 목록이다.
    pub const ALL: [ViewId; 7] = [
        ViewId::Overview,
        ViewId::Assumptions,
        ViewId::Baseline,
        ViewId::Conservative,
        ViewId::Base,
        ViewId::Aggressive,
        ViewId::Validation,
    ];

    /// 시나리오 수치를 가지는 뷰 목록이다.
    pub const SCENARIOS: [ViewId; 4] = [
        ViewId::Baseline,
        ViewId::Conservative,
        ViewId::Base,
        ViewId::Aggressive,
    ];

    /// 직렬화 및 조회에 쓰이는 소문자 식별자를 반환한다.
    pub fn as_str(self) -> &'static str {
        match self {
            ViewId::Overview => "overview",
            ViewId::Assumptions => "assumptions",
            ViewId::Baseline => "baseline",
            ViewId::Conservative => "conservative",
            ViewId::Base => "base",
            ViewId::Aggressive => "aggressive",
            ViewId::Validation => "validation",
        }
    }

    /// 시나리오 수치가 연결된 뷰인지 여부.
    pub fn is_scenario(self) -> bool {
        Self::SCENARIOS.contains(&self)
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewId {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewId::ALL
            .into_iter()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| ForecastError::UnknownView(s.to_string()))
    }
}

/// 대시보드에 내장된 두 데이터셋 리비전이다. 두 리비전은 서로 조정하지 않고 그대로 보존한다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Revision {
    /// 최초 모델. 신규 계정은 고정 교차판매율로 산출한다.
    A,
    /// 검증 모델. 신규 계정은 분기 코호트 유지 곡선으로 산출하고 검증 탭을 포함한다.
    #[default]
    B,
}

impl Revision {
    pub const ALL: [Revision; 2] = [Revision::A, Revision::B];

    pub fn as_str(self) -> &'static str {
        match self {
            Revision::A => "a",
            Revision::B => "b",
        }
    }

    /// UI 표시용 이름.
    pub fn label(self) -> &'static str {
        match self {
            Revision::A => "Revision A · Initial model",
            Revision::B => "Revision B · Validated model",
        }
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Revision {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Revision::A),
            "b" => Ok(Revision::B),
            _ => Err(ForecastError::UnknownRevision(s.to_string())),
        }
    }
}

/// 시나리오 합계를 구성하는 요소 이름이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    RetainedBase,
    Reactivation,
    NewAccounts,
    Total,
}

impl Component {
    /// 표시 및 합산 순서.
    pub const ORDER: [Component; 4] = [
        Component::RetainedBase,
        Component::Reactivation,
        Component::NewAccounts,
        Component::Total,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Component::RetainedBase => "retainedBase",
            Component::Reactivation => "reactivation",
            Component::NewAccounts => "newAccounts",
            Component::Total => "total",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Component::RetainedBase => "Retained Base",
            Component::Reactivation => "Reactivation",
            Component::NewAccounts => "New Accounts",
            Component::Total => "Total DAU",
        }
    }
}

/// 시나리오 하나의 구성 요소 값(백만 명 단위)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Components {
    pub retained_base: Decimal,
    pub reactivation: Decimal,
    pub new_accounts: Decimal,
    /// 저작된 합계. 런타임에 다시 계산해 덮어쓰지 않는다.
    pub total: Decimal,
}

impl Components {
    pub fn get(&self, component: Component) -> Decimal {
        match component {
            Component::RetainedBase => self.retained_base,
            Component::Reactivation => self.reactivation,
            Component::NewAccounts => self.new_accounts,
            Component::Total => self.total,
        }
    }

    /// ORDER 순서로 (요소, 값) 쌍을 순회한다.
    pub fn iter(&self) -> impl Iterator<Item = (Component, Decimal)> + '_ {
        Component::ORDER.into_iter().map(|c| (c, self.get(c)))
    }

    /// 합계를 제외한 세 요소의 합.
    pub fn summed(&self) -> Decimal {
        self.retained_base + self.reactivation + self.new_accounts
    }
}

/// 하나의 예측 결과 시나리오이다.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: ViewId,
    /// 탭 라벨에 쓰이는 짧은 이름 (예: "Base").
    pub short_name: &'static str,
    /// 카드/차트에 쓰이는 이름 (예: "Base Case").
    pub display_name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    /// Baseline은 캠페인이 없으므로 None이다.
    pub addressable_rate: Option<Decimal>,
    pub components: Components,
    /// reactivation 값을 뒷받침하는 세그먼트 분해.
    pub segments: Vec<Segment>,
    /// 시나리오 탭 하단의 결론 박스.
    pub takeaway: Takeaway,
}

impl Scenario {
    /// 세그먼트 결과의 합. 저작된 reactivation 값과 0.01 이내로 일치해야 한다.
    pub fn segment_total(&self) -> Decimal {
        self.segments.iter().map(|s| s.result_millions).sum()
    }
}

/// 시나리오 결론. requirements가 비어 있지 않으면 목록으로 그린다.
#[derive(Debug, Clone, PartialEq)]
pub struct Takeaway {
    pub title: &'static str,
    pub body: &'static str,
    pub requirements: Vec<&'static str>,
}

/// 참여 빈도별 사용자 코호트이다.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub label: &'static str,
    /// 참여 빈도 설명 (예: "Check ~1x/week").
    pub description: &'static str,
    pub size_millions: Decimal,
    pub conversion_rate: Decimal,
    /// 시나리오 도달률, Baseline에서는 DAU/MAU 전환율.
    pub addressable_or_success_rate: Decimal,
    pub result_millions: Decimal,
    pub tactic: &'static str,
}

impl Segment {
    /// size × conversion × rate 곱. 저작된 result와의 차이는 검증에서만 사용한다.
    pub fn product(&self) -> Decimal {
        self.size_millions * self.conversion_rate * self.addressable_or_success_rate
    }
}

/// 현재 DAU를 참여 수준별로 나눈 유지율 행이다.
#[derive(Debug, Clone, PartialEq)]
pub struct RetentionRow {
    pub segment: &'static str,
    pub current_millions: Decimal,
    pub retention_rate: Decimal,
    pub retained_millions: Decimal,
    pub source: &'static str,
}

/// 신규 계정 수치를 도출하는 한 단계이다.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccountRow {
    pub label: &'static str,
    pub base_millions: Decimal,
    pub conversion_rate: Decimal,
    /// 교차판매에서는 DAU/MAU, 코호트에서는 연말까지의 유지율.
    pub engagement_rate: Decimal,
    pub result_millions: Decimal,
    pub basis: &'static str,
}

impl NewAccountRow {
    pub fn product(&self) -> Decimal {
        self.base_millions * self.conversion_rate * self.engagement_rate
    }
}

/// Base Case 가정을 흔들었을 때의 결과 행이다.
#[derive(Debug, Clone, PartialEq)]
pub struct SensitivityRow {
    pub label: &'static str,
    pub addressable_rate: Decimal,
    pub conversion_multiplier: Decimal,
    pub reactivation_millions: Decimal,
    pub total_millions: Decimal,
}

/// 검증 지표의 판정 상태.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricStatus {
    Pass,
    Watch,
    Risk,
}

impl MetricStatus {
    pub fn label(self) -> &'static str {
        match self {
            MetricStatus::Pass => "Pass",
            MetricStatus::Watch => "Watch",
            MetricStatus::Risk => "Risk",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationMetric {
    pub label: &'static str,
    pub value: &'static str,
    pub benchmark: &'static str,
    pub status: MetricStatus,
}

/// 현재 DAU 유지율 행을 합친 결과이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionSummary {
    pub current_millions: Decimal,
    pub retained_millions: Decimal,
}

impl RetentionSummary {
    pub fn blended_rate(&self) -> Decimal {
        if self.current_millions.is_zero() {
            return Decimal::ZERO;
        }
        self.retained_millions / self.current_millions
    }

    pub fn churn_rate(&self) -> Decimal {
        Decimal::ONE - self.blended_rate()
    }

    /// 자연 이탈로 잃는 DAU.
    pub fn lost_millions(&self) -> Decimal {
        self.current_millions - self.retained_millions
    }
}

/// 현재 DAU/MAU를 업계 범위 및 Base Case 목표와 비교한 값이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benchmark {
    pub current_ratio: Decimal,
    pub industry_low: Decimal,
    pub industry_high: Decimal,
    /// Base Case 합계 / Mail MAU.
    pub target_ratio: Decimal,
    pub target_total_millions: Decimal,
    pub mail_mau_millions: Decimal,
}

impl Benchmark {
    /// 현재 비율 대비 목표 비율의 상대 개선폭.
    pub fn improvement(&self) -> Decimal {
        if self.current_ratio.is_zero() {
            return Decimal::ZERO;
        }
        self.target_ratio / self.current_ratio - Decimal::ONE
    }
}

/// 모델 전체에서 공유하는 기준 수치이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Headline {
    pub yahoo_mau_millions: Decimal,
    pub mail_mau_millions: Decimal,
    pub non_mail_mau_millions: Decimal,
    pub inactive_mau_millions: Decimal,
    pub starting_dau_millions: Decimal,
    pub dau_mau_ratio: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_ids_parse_from_their_own_identifiers() {
        for view in ViewId::ALL {
            assert_eq!(view.as_str().parse::<ViewId>(), Ok(view));
        }
    }

    #[test]
    fn unknown_view_identifier_is_rejected() {
        assert_eq!(
            "growth".parse::<ViewId>(),
            Err(ForecastError::UnknownView("growth".into()))
        );
        assert!("Base".parse::<ViewId>().is_err());
    }

    #[test]
    fn revision_parsing_is_case_insensitive() {
        assert_eq!(" B ".parse::<Revision>(), Ok(Revision::B));
        assert_eq!("a".parse::<Revision>(), Ok(Revision::A));
        assert!(matches!(
            "c".parse::<Revision>(),
            Err(ForecastError::UnknownRevision(_))
        ));
    }

    #[test]
    fn components_iterate_in_display_order() {
        let components = Components {
            retained_base: Decimal::new(74, 1),
            reactivation: Decimal::new(418, 2),
            new_accounts: Decimal::new(34, 2),
            total: Decimal::new(1192, 2),
        };
        let keys: Vec<_> = components.iter().map(|(c, _)| c.key()).collect();
        assert_eq!(keys, ["retainedBase", "reactivation", "newAccounts", "total"]);
        assert_eq!(components.summed(), Decimal::new(1192, 2));
    }

    #[test]
    fn default_revision_is_the_validated_model() {
        assert_eq!(Revision::default(), Revision::B);
    }

    #[test]
    fn retention_summary_derives_churn() {
        let summary = RetentionSummary {
            current_millions: Decimal::TEN,
            retained_millions: Decimal::new(74, 1),
        };
        assert_eq!(summary.blended_rate(), Decimal::new(74, 2));
        assert_eq!(summary.churn_rate(), Decimal::new(26, 2));
        assert_eq!(summary.lost_millions(), Decimal::new(26, 1));
    }
}
