//! Control Panel Widget
//! Left side panel: report source selection and load status.

use egui::{Color32, RichText};

/// Outcome of the last load, shown under the source buttons.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    #[default]
    Ready,
    Loaded { source: String, rows: usize },
    Failed(String),
}

/// Left side control panel with source buttons and status line.
#[derive(Default)]
pub struct ControlPanel {
    pub status: LoadStatus,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_loaded(&mut self, source: &str, rows: usize) {
        self.status = LoadStatus::Loaded {
            source: source.to_string(),
            rows,
        };
    }

    pub fn set_failed(&mut self, message: impl Into<String>) {
        self.status = LoadStatus::Failed(message.into());
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📊 Traffic & Sales")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Google Ads · eBay · SEO")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.label(
                    RichText::new("Open a report (.ods/.xlsx/.xls/.csv). Without one, data/report.ods or data/report.csv is used.")
                        .size(11.0)
                        .color(Color32::GRAY),
                );
                ui.add_space(5.0);
                ui.horizontal(|ui| {
                    if ui.button("Open report…").clicked() {
                        action = ControlPanelAction::OpenReport;
                    }
                    if ui.button("Reload fallback").clicked() {
                        action = ControlPanelAction::ReloadFallback;
                    }
                });
            });

        ui.add_space(10.0);
        ui.separator();

        // ===== Status Section =====
        match &self.status {
            LoadStatus::Ready => {
                ui.label(RichText::new("Ready").color(Color32::GRAY));
            }
            LoadStatus::Loaded { source, rows } => {
                ui.label(RichText::new(format!("✓ {}", source)).strong());
                ui.label(format!("{} months loaded", rows));
            }
            LoadStatus::Failed(message) => {
                ui.label(
                    RichText::new(format!("⚠ {}", message))
                        .color(Color32::from_rgb(220, 53, 69)),
                );
            }
        }

        action
    }
}

/// Actions from control panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPanelAction {
    None,
    OpenReport,
    ReloadFallback,
}
