use crate::forecast::{Component, Scenario, format_millions};
use crate::theme::{Theme, blend_color};
use eframe::egui::{self, Color32, RichText, Widget};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// 탭 바 버튼. 선택된 탭은 해당 뷰의 강조색으로 채운다.
pub(super) struct TabButton<'a> {
    theme: &'a Theme,
    label: &'a str,
    accent: Color32,
    selected: bool,
}

impl<'a> TabButton<'a> {
    pub(super) fn new(theme: &'a Theme, label: &'a str, accent: Color32) -> Self {
        Self {
            theme,
            label,
            accent,
            selected: false,
        }
    }

    pub(super) fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for TabButton<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let decorations = self.theme.decorations();
        let palette = self.theme.palette();

        let font_size = 15.0;
        let rich = RichText::new(self.label).size(font_size).strong().color(if self.selected {
            Color32::WHITE
        } else {
            palette.fg_text_secondary
        });
        let text_height = ui.ctx().fonts(|f| {
            f.row_height(&egui::FontId::new(font_size, egui::FontFamily::Proportional))
        });
        let fill = if self.selected {
            self.accent
        } else {
            palette.bg_panel
        };
        let button = egui::Button::new(rich)
            .min_size(egui::vec2(0.0, decorations.button_height.max(text_height + 6.0)))
            .rounding(egui::Rounding::same(decorations.button_rounding))
            .stroke(egui::Stroke::new(
                1.0,
                if self.selected {
                    self.accent
                } else {
                    palette.border_soft
                },
            ))
            .fill(fill);

        let response = ui.add(button);
        if response.hovered() {
            ui.output_mut(|o| {
                o.cursor_icon = egui::CursorIcon::PointingHand;
            });
        }
        response
    }
}

/// 단색 배너로 뷰 제목과 부제를 그린다.
pub(super) fn banner(ui: &mut egui::Ui, theme: &Theme, fill: Color32, title: &str, subtitle: &str) {
    let decorations = theme.decorations();
    let size = egui::vec2(ui.available_width(), decorations.banner_height);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let rounding = egui::Rounding::same(decorations.container_rounding);
    ui.painter().rect_filled(rect, rounding, fill);
    let content_rect = rect.shrink2(egui::vec2(20.0, 10.0));
    ui.allocate_ui_at_rect(content_rect, |ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(title).size(24.0).color(Color32::WHITE).strong());
            ui.label(
                RichText::new(subtitle)
                    .size(15.0)
                    .color(blend_color(fill, Color32::WHITE, 0.8)),
            );
        });
    });
}

/// 흰 배경 카드 프레임.
pub(super) fn card<R>(
    ui: &mut egui::Ui,
    theme: &Theme,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    let palette = theme.palette();
    let decorations = theme.decorations();
    egui::Frame::none()
        .fill(palette.bg_panel)
        .stroke(egui::Stroke::new(1.0, palette.border_soft))
        .rounding(egui::Rounding::same(decorations.card_rounding))
        .inner_margin(decorations.card_inner_margin)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
}

/// 카드 제목.
pub(super) fn card_title(ui: &mut egui::Ui, theme: &Theme, title: &str) {
    ui.label(
        RichText::new(title)
            .size(19.0)
            .strong()
            .color(theme.palette().fg_text_primary),
    );
    ui.add_space(6.0);
}

/// 강조색 테두리의 수치 카드 (예: "Base Case / 11.92M / +1.92M").
pub(super) fn metric_card(
    ui: &mut egui::Ui,
    theme: &Theme,
    accent: Color32,
    title: &str,
    value: &str,
    caption: &str,
) {
    egui::Frame::none()
        .fill(blend_color(accent, Color32::WHITE, 0.9))
        .stroke(egui::Stroke::new(2.0, blend_color(accent, Color32::WHITE, 0.5)))
        .rounding(egui::Rounding::same(theme.decorations().card_rounding))
        .inner_margin(egui::Margin::same(14.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(title.to_uppercase()).size(12.0).strong().color(accent));
                ui.label(RichText::new(value).size(28.0).strong().color(accent));
                ui.label(RichText::new(caption).size(13.0).color(theme.palette().fg_text_secondary));
            });
        });
}

/// 옅은 강조색 배경의 안내 박스 (Key Insight, 경고 등).
pub(super) fn callout(ui: &mut egui::Ui, theme: &Theme, tint: Color32, title: &str, body: &str) {
    egui::Frame::none()
        .fill(blend_color(tint, Color32::WHITE, 0.92))
        .stroke(egui::Stroke::new(1.0, blend_color(tint, Color32::WHITE, 0.6)))
        .rounding(egui::Rounding::same(theme.decorations().card_rounding))
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(title).strong().color(blend_color(tint, Color32::BLACK, 0.3)));
                ui.label(RichText::new(body).color(blend_color(tint, Color32::BLACK, 0.45)));
            });
        });
}

/// 큰 수치와 설명 한 줄로 된 단계 칸. 흐름도와 비교 카드에 쓰인다.
pub(super) fn figure_tile(ui: &mut egui::Ui, accent: Color32, value: &str, caption: &str) {
    egui::Frame::none()
        .fill(blend_color(accent, Color32::WHITE, 0.9))
        .rounding(egui::Rounding::same(6.0))
        .inner_margin(egui::Margin::same(10.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(value).size(22.0).strong().color(accent));
                ui.label(RichText::new(caption).size(12.0));
            });
        });
}

/// "라벨 ....... 값" 한 줄. 최종 계산 블록에 쓰인다.
pub(super) fn value_row(ui: &mut egui::Ui, label: &str, value: &str, strong: bool) {
    ui.horizontal(|ui| {
        let label = RichText::new(label);
        ui.label(if strong { label.strong() } else { label });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let value = RichText::new(value);
            ui.label(if strong { value.size(18.0).strong() } else { value.strong() });
        });
    });
}

fn as_f32(value: Decimal) -> f32 {
    value.to_f32().unwrap_or_default()
}

/// 시나리오별 retained/reactivation/new accounts 누적 막대와 합계 선을 그린다.
pub(super) struct StackedComponentChart<'a> {
    theme: &'a Theme,
    scenarios: &'a [Scenario],
    height: f32,
}

impl<'a> StackedComponentChart<'a> {
    pub(super) fn new(theme: &'a Theme, scenarios: &'a [Scenario]) -> Self {
        Self {
            theme,
            scenarios,
            height: 320.0,
        }
    }

    pub(super) fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }
}

impl Widget for StackedComponentChart<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let palette = self.theme.palette();
        let size = egui::vec2(ui.available_width(), self.height);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
        let plot = egui::Rect::from_min_max(
            rect.min + egui::vec2(52.0, 12.0),
            rect.max - egui::vec2(12.0, 30.0),
        );
        let painter = ui.painter_at(rect);
        let axis_font = egui::FontId::proportional(12.0);

        let max_total = self
            .scenarios
            .iter()
            .map(|s| as_f32(s.components.total))
            .fold(0.0_f32, f32::max);
        let step = 2.0;
        let y_max = ((max_total / step).ceil() * step).max(step);
        let to_y = |value: f32| plot.bottom() - value / y_max * plot.height();

        let mut tick = 0.0;
        while tick <= y_max + f32::EPSILON {
            let y = to_y(tick);
            painter.line_segment(
                [egui::pos2(plot.left(), y), egui::pos2(plot.right(), y)],
                egui::Stroke::new(1.0, palette.border_soft),
            );
            painter.text(
                egui::pos2(plot.left() - 8.0, y),
                egui::Align2::RIGHT_CENTER,
                format!("{tick}M"),
                axis_font.clone(),
                palette.fg_text_secondary,
            );
            tick += step;
        }

        if self.scenarios.is_empty() {
            return response;
        }
        let slot = plot.width() / self.scenarios.len() as f32;
        let bar_width = slot * 0.45;
        let mut total_points = Vec::with_capacity(self.scenarios.len());
        for (idx, scenario) in self.scenarios.iter().enumerate() {
            let center_x = plot.left() + slot * (idx as f32 + 0.5);
            let mut running = 0.0;
            for component in [
                Component::RetainedBase,
                Component::Reactivation,
                Component::NewAccounts,
            ] {
                let value = as_f32(scenario.components.get(component));
                let bar = egui::Rect::from_min_max(
                    egui::pos2(center_x - bar_width / 2.0, to_y(running + value)),
                    egui::pos2(center_x + bar_width / 2.0, to_y(running)),
                );
                painter.rect_filled(bar, egui::Rounding::ZERO, self.theme.component_color(component));
                running += value;
            }
            let total = scenario.components.total;
            let point = egui::pos2(center_x, to_y(as_f32(total)));
            total_points.push(point);
            painter.text(
                point - egui::vec2(0.0, 10.0),
                egui::Align2::CENTER_BOTTOM,
                format!("{}M", format_millions(total)),
                egui::FontId::proportional(13.0),
                palette.fg_text_primary,
            );
            painter.text(
                egui::pos2(center_x, plot.bottom() + 8.0),
                egui::Align2::CENTER_TOP,
                scenario.short_name,
                egui::FontId::proportional(14.0),
                self.theme.view_color(scenario.name),
            );
        }
        let line_color = self.theme.component_color(Component::Total);
        painter.add(egui::Shape::line(
            total_points.clone(),
            egui::Stroke::new(3.0, line_color),
        ));
        for point in total_points {
            painter.circle_filled(point, 4.0, line_color);
        }

        ui.horizontal_wrapped(|ui| {
            for component in Component::ORDER {
                legend_swatch(ui, self.theme.component_color(component));
                ui.label(RichText::new(component.label()).size(13.0));
                ui.add_space(12.0);
            }
        });
        response
    }
}

fn legend_swatch(ui: &mut egui::Ui, color: Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, egui::Rounding::same(2.0), color);
}
