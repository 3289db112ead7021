//! Charts module - view models and chart drawing

mod plotter;
pub mod views;

pub use plotter::{
    ChartPlotter, LineChartStyle, BREAK_EVEN_COLOR, EBAY_FUNNEL_COLOR, MEAN_COLOR, ROAS_COLOR,
};
pub use views::{
    ChartSeries, DashboardViews, DualAxisChart, Funnel, FunnelStage, ReferenceKind, ReferenceLine,
};
