use crate::forecast::{Component, MetricStatus, ViewId};
use eframe::egui::{self, Color32};

/// 배경/전경/강조 색상 묶음.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_main: Color32,
    pub bg_panel: Color32,
    pub bg_muted: Color32,
    pub border_soft: Color32,
    pub fg_text_primary: Color32,
    pub fg_text_secondary: Color32,
    pub accent_primary: Color32,
    pub accent_error: Color32,
}

/// 모서리, 여백 등 형태 관련 값.
#[derive(Debug, Clone, Copy)]
pub struct Decorations {
    pub container_rounding: f32,
    pub card_rounding: f32,
    pub button_rounding: f32,
    pub card_inner_margin: egui::Margin,
    pub button_height: f32,
    pub button_gap: f32,
    pub banner_height: f32,
}

/// UI 전체에서 참조할 공통 테마 정보.
pub struct Theme {
    palette: Palette,
    decorations: Decorations,
}

impl Default for Theme {
    /// 밝은 slate 계열 기본 테마.
    fn default() -> Self {
        Self {
            palette: Palette {
                bg_main: Color32::from_rgb(241, 245, 249),
                bg_panel: Color32::WHITE,
                bg_muted: Color32::from_rgb(248, 250, 252),
                border_soft: Color32::from_rgb(226, 232, 240),
                fg_text_primary: Color32::from_rgb(15, 23, 42),
                fg_text_secondary: Color32::from_rgb(71, 85, 105),
                accent_primary: Color32::from_rgb(37, 99, 235),
                accent_error: Color32::from_rgb(220, 38, 38),
            },
            decorations: Decorations {
                container_rounding: 10.0,
                card_rounding: 8.0,
                button_rounding: 8.0,
                card_inner_margin: egui::Margin::same(16.0),
                button_height: 36.0,
                button_gap: 8.0,
                banner_height: 72.0,
            },
        }
    }
}

impl Theme {
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn decorations(&self) -> &Decorations {
        &self.decorations
    }

    /// egui Context에 테마 기반 스타일을 적용한다.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::light();
        visuals.window_rounding = egui::Rounding::same(self.decorations.container_rounding);
        visuals.panel_fill = self.palette.bg_main;
        visuals.extreme_bg_color = self.palette.bg_muted;
        visuals.override_text_color = Some(self.palette.fg_text_primary);
        ctx.set_visuals(visuals);
    }

    /// 탭/시나리오별 강조 색상.
    pub fn view_color(&self, view: ViewId) -> Color32 {
        match view {
            ViewId::Overview => Color32::from_rgb(71, 85, 105),
            ViewId::Assumptions => Color32::from_rgb(147, 51, 234),
            ViewId::Baseline => Color32::from_rgb(239, 68, 68),
            ViewId::Conservative => Color32::from_rgb(245, 158, 11),
            ViewId::Base => Color32::from_rgb(16, 185, 129),
            ViewId::Aggressive => Color32::from_rgb(59, 130, 246),
            ViewId::Validation => Color32::from_rgb(234, 88, 12),
        }
    }

    /// 누적 막대 차트의 구성 요소 색상.
    pub fn component_color(&self, component: Component) -> Color32 {
        match component {
            Component::RetainedBase => Color32::from_rgb(148, 163, 184),
            Component::Reactivation => Color32::from_rgb(59, 130, 246),
            Component::NewAccounts => Color32::from_rgb(16, 185, 129),
            Component::Total => Color32::from_rgb(239, 68, 68),
        }
    }

    pub fn status_color(&self, status: MetricStatus) -> Color32 {
        match status {
            MetricStatus::Pass => Color32::from_rgb(22, 163, 74),
            MetricStatus::Watch => Color32::from_rgb(202, 138, 4),
            MetricStatus::Risk => self.palette.accent_error,
        }
    }
}

/// 두 색을 t 비율로 섞는다. t=0이면 a, t=1이면 b.
pub fn blend_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_color_hits_both_endpoints() {
        let a = Color32::from_rgb(0, 100, 200);
        let b = Color32::from_rgb(200, 100, 0);
        assert_eq!(blend_color(a, b, 0.0), a);
        assert_eq!(blend_color(a, b, 1.0), b);
        assert_eq!(blend_color(a, b, 0.5), Color32::from_rgb(100, 100, 100));
    }

    #[test]
    fn applied_theme_sets_light_panel_fill() {
        let ctx = egui::Context::default();
        Theme::default().apply(&ctx);
        let style = ctx.style();
        assert!(!style.visuals.dark_mode);
        assert_eq!(style.visuals.panel_fill, Theme::default().palette().bg_main);
    }

    #[test]
    fn every_view_has_a_distinct_accent() {
        let theme = Theme::default();
        let mut colors: Vec<_> = ViewId::ALL.iter().map(|v| theme.view_color(*v)).collect();
        colors.sort_by_key(|c| c.to_array());
        colors.dedup();
        assert_eq!(colors.len(), ViewId::ALL.len());
    }
}
