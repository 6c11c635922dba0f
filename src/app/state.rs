use crate::config::DashboardConfig;
use crate::forecast::{Revision, ScenarioTable, ViewId};
use crate::theme::Theme;

/// 현재 선택된 탭을 보관하는 단일 상태값이다. 초기값은 Overview이며 저장하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSelector {
    active: ViewId,
}

impl TabSelector {
    pub fn new() -> Self {
        Self {
            active: ViewId::Overview,
        }
    }

    pub fn active_tab(&self) -> ViewId {
        self.active
    }

    /// 조건 없이 활성 탭을 바꾼다. 마지막 호출이 이긴다.
    pub fn select_tab(&mut self, view: ViewId) {
        if self.active != view {
            tracing::debug!(from = %self.active, to = %view, "탭 전환");
        }
        self.active = view;
    }

    /// Overview로 되돌린다.
    pub fn reset(&mut self) {
        self.select_tab(ViewId::Overview);
    }
}

impl Default for TabSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// egui 애플리케이션의 전체 상태를 보관한다.
pub struct DashboardApp {
    /// UI 테마 정보.
    pub(crate) theme: Theme,
    /// 실행 설정.
    pub(crate) config: DashboardConfig,
    /// 현재 리비전의 읽기 전용 데이터.
    pub(crate) table: &'static ScenarioTable,
    /// 활성 탭 상태.
    pub(crate) tabs: TabSelector,
}

impl DashboardApp {
    /// egui Context를 받아 초기 상태를 구성한다.
    pub fn new(cc: &eframe::CreationContext<'_>, config: DashboardConfig) -> Self {
        let app = Self::with_config(config);
        app.theme.apply(&cc.egui_ctx);
        app
    }

    pub(crate) fn with_config(config: DashboardConfig) -> Self {
        let table = ScenarioTable::for_revision(config.revision);
        tracing::info!(revision = %table.revision(), tabs = table.tabs().len(), "대시보드 초기화");
        Self {
            theme: Theme::default(),
            config,
            table,
            tabs: TabSelector::new(),
        }
    }

    pub(crate) fn active_tab(&self) -> ViewId {
        self.tabs.active_tab()
    }

    pub(crate) fn select_tab(&mut self, view: ViewId) {
        self.tabs.select_tab(view);
    }

    /// 데이터셋 리비전을 바꾼다. 새 리비전에 없는 탭이 활성 상태면 Overview로 돌아간다.
    pub(crate) fn switch_revision(&mut self, revision: Revision) {
        if self.table.revision() == revision {
            return;
        }
        tracing::info!(from = %self.table.revision(), to = %revision, "리비전 전환");
        self.table = ScenarioTable::for_revision(revision);
        if !self.table.tabs().contains(&self.tabs.active_tab()) {
            self.tabs.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_starts_on_overview() {
        assert_eq!(TabSelector::new().active_tab(), ViewId::Overview);
        assert_eq!(TabSelector::default().active_tab(), ViewId::Overview);
    }

    #[test]
    fn selected_tab_is_read_back() {
        let mut selector = TabSelector::new();
        for view in ViewId::ALL {
            selector.select_tab(view);
            assert_eq!(selector.active_tab(), view);
        }
    }

    #[test]
    fn every_tab_reaches_every_other_tab() {
        for from in ViewId::ALL {
            for to in ViewId::ALL {
                let mut selector = TabSelector::new();
                selector.select_tab(from);
                selector.select_tab(to);
                assert_eq!(selector.active_tab(), to);
            }
        }
    }

    #[test]
    fn reselecting_the_active_tab_is_idempotent() {
        let mut selector = TabSelector::new();
        selector.select_tab(ViewId::Base);
        selector.select_tab(ViewId::Base);
        assert_eq!(selector.active_tab(), ViewId::Base);
    }

    #[test]
    fn app_uses_configured_revision() {
        let config = DashboardConfig {
            revision: Revision::A,
            ..DashboardConfig::default()
        };
        let app = DashboardApp::with_config(config);
        assert_eq!(app.table.revision(), Revision::A);
        assert_eq!(app.active_tab(), ViewId::Overview);
    }

    #[test]
    fn switching_to_revision_without_validation_resets_tab() {
        let mut app = DashboardApp::with_config(DashboardConfig::default());
        app.select_tab(ViewId::Validation);
        app.switch_revision(Revision::A);
        assert_eq!(app.table.revision(), Revision::A);
        assert_eq!(app.active_tab(), ViewId::Overview);
    }

    #[test]
    fn switching_revision_keeps_shared_tabs() {
        let mut app = DashboardApp::with_config(DashboardConfig::default());
        app.select_tab(ViewId::Aggressive);
        app.switch_revision(Revision::A);
        assert_eq!(app.active_tab(), ViewId::Aggressive);
        assert_eq!(app.table.tab_label(app.active_tab()), "Aggressive: 14.01M");
    }
}
