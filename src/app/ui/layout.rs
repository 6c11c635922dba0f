use super::*;
use crate::forecast::Revision;

impl DashboardApp {
    /// 제목, 리비전 선택, 탭 바를 그린다.
    fn render_header(&mut self, ctx: &egui::Context) {
        let palette = *self.theme.palette();
        let decorations = *self.theme.decorations();
        let frame = egui::Frame {
            fill: palette.bg_main,
            inner_margin: egui::Margin::symmetric(24.0, 16.0),
            ..Default::default()
        };
        egui::TopBottomPanel::top("dashboard_header")
            .frame(frame)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new("Yahoo Mail DAU Growth Model")
                                .size(30.0)
                                .strong()
                                .color(palette.fg_text_primary),
                        );
                        ui.label(
                            RichText::new("2026 Forecast: Strategic Path from Decline to Growth")
                                .size(16.0)
                                .color(palette.fg_text_secondary),
                        );
                    });
                    if self.config.show_revision_switch {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            self.render_revision_switch(ui);
                        });
                    }
                });
                ui.add_space(12.0);
                egui::ScrollArea::horizontal()
                    .id_source("tab_bar")
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.spacing_mut().item_spacing.x = decorations.button_gap;
                            self.render_tab_bar(ui);
                        });
                    });
            });
    }

    /// 리비전의 닫힌 탭 집합으로부터 버튼을 생성한다.
    fn render_tab_bar(&mut self, ui: &mut egui::Ui) {
        let active = self.active_tab();
        for view in self.table.tabs() {
            let label = self.table.tab_label(view);
            let button = TabButton::new(&self.theme, &label, self.theme.view_color(view))
                .selected(view == active);
            if ui.add(button).clicked() {
                self.select_tab(view);
            }
        }
    }

    fn render_revision_switch(&mut self, ui: &mut egui::Ui) {
        let mut revision = self.table.revision();
        egui::ComboBox::from_id_source("revision_switch")
            .selected_text(revision.label())
            .show_ui(ui, |ui| {
                for candidate in Revision::ALL {
                    ui.selectable_value(&mut revision, candidate, candidate.label());
                }
            });
        self.switch_revision(revision);
    }

    /// 활성 탭에 해당하는 뷰만 그린다.
    fn render_content(&mut self, ctx: &egui::Context) {
        let palette = *self.theme.palette();
        let frame = egui::Frame {
            fill: palette.bg_main,
            inner_margin: egui::Margin::symmetric(24.0, 8.0),
            ..Default::default()
        };
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.spacing_mut().item_spacing.y = 16.0;
                    match self.active_tab() {
                        ViewId::Overview => self.render_overview(ui),
                        ViewId::Assumptions => self.render_assumptions(ui),
                        ViewId::Validation => self.render_validation(ui),
                        view => self.render_scenario_view(ui, view),
                    }
                    ui.add_space(24.0);
                });
        });
    }
}

impl eframe::App for DashboardApp {
    /// egui 메인 루프에서 호출되어 UI를 갱신한다.
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        self.render_header(ctx);
        self.render_content(ctx);
    }
}
