//! Dashboard Main Application
//! Main window with control panel and tabbed chart viewer.

use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use egui::SidePanel;
use log::{error, info};
use traffic_report::charts::DashboardViews;
use traffic_report::config::DashboardConfig;
use traffic_report::data::{ReportLoader, SourceFormat, Upload};
use traffic_report::error::ReportError;
use traffic_report::report::Report;

/// Main application window.
///
/// Loading runs synchronously on the UI thread; a failed load clears the
/// charts and leaves the error in the control panel until the next attempt.
pub struct DashboardApp {
    loader: ReportLoader,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: DashboardConfig) -> Self {
        let mut app = Self {
            loader: ReportLoader::new(config.source),
            control_panel: ControlPanel::new(),
            chart_viewer: ChartViewer::new(config.chart_height),
        };

        // Start from the fallback report when one is present
        app.load(None);
        app
    }

    /// Handle file selection from the native dialog
    fn handle_open_report(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Reports", &SourceFormat::SUPPORTED_EXTENSIONS)
            .pick_file()
        else {
            return; // User cancelled
        };

        match Upload::from_path(&path) {
            Ok(upload) => self.load(Some(&upload)),
            Err(e) => self.show_error(&e),
        }
    }

    fn load(&mut self, upload: Option<&Upload>) {
        match Report::load(&self.loader, upload) {
            Ok(report) => {
                info!("Showing {} months from {}", report.rows.len(), report.source);
                self.control_panel
                    .set_loaded(&report.source, report.rows.len());
                self.chart_viewer
                    .set_views(DashboardViews::build(&report.rows));
            }
            Err(e) => self.show_error(&e),
        }
    }

    fn show_error(&mut self, err: &ReportError) {
        error!("{}", err);
        self.chart_viewer.clear();
        self.control_panel.set_failed(err.to_string());
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    match self.control_panel.show(ui) {
                        ControlPanelAction::OpenReport => self.handle_open_report(),
                        ControlPanelAction::ReloadFallback => self.load(None),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
