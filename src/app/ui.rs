use crate::forecast::{
    Component, MetricStatus, Scenario, ViewId, format_change, format_compact, format_millions,
    format_percent,
};
use eframe::egui::{self, RichText};

use super::state::DashboardApp;
use super::widgets::{
    StackedComponentChart, TabButton, banner, callout, card, card_title, figure_tile, metric_card,
    value_row,
};

mod assumptions;
mod layout;
mod overview;
mod scenario;
mod validation;
