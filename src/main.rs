//! Traffic Report - Marketing Traffic & Sales Dashboard
//!
//! Loads a monthly Google Ads / eBay / SEO report and shows click trends,
//! funnels, CTR/CR, ROAS/CPA and orders/revenue charts.

mod gui;

use anyhow::anyhow;
use eframe::egui;
use env_logger::Env;
use gui::DashboardApp;
use traffic_report::config::DashboardConfig;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = DashboardConfig::default();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.inner_size)
            .with_min_inner_size(config.min_inner_size)
            .with_title(&config.window_title),
        ..Default::default()
    };

    let title = config.window_title.clone();

    // Run the application
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, config)))),
    )
    .map_err(|e| anyhow!("Dashboard exited with error: {e}"))
}
