use rust_decimal::{Decimal, RoundingStrategy};

/// 표시용 반올림. 저장된 값은 건드리지 않고 복사본만 반올림한다.
fn rounded(value: Decimal, dp: u32) -> Decimal {
    let mut out = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    out.rescale(dp);
    out
}

/// 백만 단위 수치를 소수 둘째 자리로 표시한다. 0.01 미만의 값은 셋째 자리까지 보인다.
pub fn format_millions(value: Decimal) -> String {
    let small = !value.is_zero() && value.abs() < Decimal::new(1, 2);
    rounded(value, if small { 3 } else { 2 }).to_string()
}

/// 225, 1000 같은 규모 수치를 불필요한 0 없이 표시한다.
pub fn format_compact(value: Decimal) -> String {
    value.normalize().to_string()
}

/// 0.044 → "4.4%". 나눗셈으로 얻은 비율은 소수 둘째 자리에서 자른다.
pub fn format_percent(rate: Decimal) -> String {
    let pct = (rate * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    format!("{pct}%")
}

/// 기준 대비 증감을 "+1.92M (+19.2%)" 형태로 표시한다.
pub fn format_change(total: Decimal, starting: Decimal) -> String {
    let delta = total - starting;
    let sign = if delta.is_sign_negative() { "-" } else { "+" };
    let pct = if starting.is_zero() {
        Decimal::ZERO
    } else {
        delta.abs() / starting * Decimal::ONE_HUNDRED
    };
    format!(
        "{sign}{}M ({sign}{}%)",
        format_millions(delta.abs()),
        rounded(pct, 1)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millions_round_half_away_from_zero() {
        assert_eq!(format_millions(Decimal::new(7745, 3)), "7.75");
        assert_eq!(format_millions(Decimal::new(4175, 3)), "4.18");
        assert_eq!(format_millions(Decimal::new(141, 1)), "14.10");
        assert_eq!(format_millions(Decimal::new(74, 1)), "7.40");
    }

    #[test]
    fn smallest_figures_keep_a_third_decimal() {
        assert_eq!(format_millions(Decimal::new(47, 4)), "0.005");
        assert_eq!(format_millions(Decimal::ZERO), "0.00");
    }

    #[test]
    fn formatting_does_not_touch_stored_precision() {
        let stored = Decimal::new(47, 4);
        let _ = format_millions(stored);
        assert_eq!(stored, Decimal::new(47, 4));
    }

    #[test]
    fn percents_and_compact_values_drop_trailing_zeros() {
        assert_eq!(format_percent(Decimal::new(44, 3)), "4.4%");
        assert_eq!(format_percent(Decimal::new(8, 2)), "8%");
        assert_eq!(format_percent(Decimal::new(5, 4)), "0.05%");
        assert_eq!(format_compact(Decimal::new(22500, 2)), "225");
    }

    #[test]
    fn derived_ratios_are_rounded_for_display() {
        let target = Decimal::new(1192, 2) / Decimal::new(225, 0);
        assert_eq!(format_percent(target), "5.3%");
        assert_eq!(format_percent(Decimal::ONE / Decimal::new(3, 0)), "33.33%");
    }

    #[test]
    fn change_is_signed_against_starting_dau() {
        let start = Decimal::TEN;
        assert_eq!(format_change(Decimal::new(1192, 2), start), "+1.92M (+19.2%)");
        assert_eq!(format_change(Decimal::new(7745, 3), start), "-2.26M (-22.6%)");
        assert_eq!(format_change(Decimal::new(1025, 2), start), "+0.25M (+2.5%)");
    }
}
