#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod forecast;
mod theme;

use app::DashboardApp;
use config::DashboardConfig;
use eframe::egui;

/// 설정과 데이터 검증을 마친 뒤 egui 애플리케이션을 실행하는 진입점입니다.
fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let config = DashboardConfig::resolve();
    if let Err(err) = forecast::verify_all() {
        tracing::error!("내장 예측 데이터 검증 실패: {err}");
        debug_assert!(false, "{err}");
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_app_id("DAU Forecast Dashboard")
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Yahoo Mail DAU Growth Model",
        native_options,
        Box::new(move |cc| Box::new(DashboardApp::new(cc, config))),
    )
}
