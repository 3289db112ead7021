//! Chart Viewer Widget
//! Central panel: one tab per dashboard view.

use traffic_report::charts::{
    ChartPlotter, ChartSeries, DashboardViews, LineChartStyle, ReferenceKind, BREAK_EVEN_COLOR,
    EBAY_FUNNEL_COLOR, MEAN_COLOR, ROAS_COLOR,
};
use egui::{Color32, RichText, ScrollArea};
use egui_plot::LineStyle;

/// Dashboard tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Clicks,
    Funnels,
    Rates,
    Returns,
    OrdersRevenue,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 5] = [
        DashboardTab::Clicks,
        DashboardTab::Funnels,
        DashboardTab::Rates,
        DashboardTab::Returns,
        DashboardTab::OrdersRevenue,
    ];

    pub fn title(self) -> &'static str {
        match self {
            DashboardTab::Clicks => "Clicks by source",
            DashboardTab::Funnels => "Funnels",
            DashboardTab::Rates => "CTR / CR",
            DashboardTab::Returns => "ROAS / CPA",
            DashboardTab::OrdersRevenue => "Orders & revenue",
        }
    }
}

/// Tabbed chart area. Holds the views of the last successful load only.
pub struct ChartViewer {
    pub views: Option<DashboardViews>,
    pub tab: DashboardTab,
    chart_height: f32,
}

impl ChartViewer {
    pub fn new(chart_height: f32) -> Self {
        Self {
            views: None,
            tab: DashboardTab::default(),
            chart_height,
        }
    }

    pub fn clear(&mut self) {
        self.views = None;
    }

    pub fn set_views(&mut self, views: DashboardViews) {
        self.views = Some(views);
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        let Some(views) = &self.views else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        ui.horizontal(|ui| {
            for tab in DashboardTab::ALL {
                ui.selectable_value(&mut self.tab, tab, tab.title());
            }
        });
        ui.separator();

        let height = self.chart_height;
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| match self.tab {
                DashboardTab::Clicks => Self::show_clicks(ui, views, height),
                DashboardTab::Funnels => Self::show_funnels(ui, views, height),
                DashboardTab::Rates => Self::show_rates(ui, views, height),
                DashboardTab::Returns => Self::show_returns(ui, views, height),
                DashboardTab::OrdersRevenue => Self::show_orders_revenue(ui, views, height),
            });
    }

    fn colored(series: &[ChartSeries]) -> Vec<(ChartSeries, Color32)> {
        series
            .iter()
            .enumerate()
            .map(|(i, s)| (s.clone(), ChartPlotter::series_color(i)))
            .collect()
    }

    fn subheader(ui: &mut egui::Ui, text: &str) {
        ui.add_space(8.0);
        ui.label(RichText::new(text).size(16.0).strong());
        ui.add_space(4.0);
    }

    fn show_clicks(ui: &mut egui::Ui, views: &DashboardViews, height: f32) {
        let style = LineChartStyle {
            y_label: "Clicks",
            ..Default::default()
        };

        ui.columns(2, |cols| {
            Self::subheader(&mut cols[0], "Google clicks per month");
            ChartPlotter::draw_line_chart(
                &mut cols[0],
                "clicks_google",
                &views.months,
                &Self::colored(std::slice::from_ref(&views.google_clicks)),
                &[],
                style,
                height,
            );

            Self::subheader(&mut cols[1], "eBay and SEO clicks per month");
            let other: Vec<(ChartSeries, Color32)> = views
                .other_clicks
                .iter()
                .enumerate()
                .map(|(i, s)| (s.clone(), ChartPlotter::series_color(i + 1)))
                .collect();
            ChartPlotter::draw_line_chart(
                &mut cols[1],
                "clicks_other",
                &views.months,
                &other,
                &[],
                style,
                height,
            );
        });
    }

    fn show_funnels(ui: &mut egui::Ui, views: &DashboardViews, height: f32) {
        Self::subheader(ui, "Google + SEO funnel (log scale)");
        ChartPlotter::draw_funnel(
            ui,
            &views.google_seo_funnel,
            ChartPlotter::series_color(0),
            height,
        );

        Self::subheader(ui, "eBay funnel (log scale)");
        ChartPlotter::draw_funnel(ui, &views.ebay_funnel, EBAY_FUNNEL_COLOR, height);
    }

    fn show_rates(ui: &mut egui::Ui, views: &DashboardViews, height: f32) {
        Self::subheader(ui, "CTR by source (%)");
        ChartPlotter::draw_line_chart(
            ui,
            "ctr",
            &views.months,
            &Self::colored(&views.ctr),
            &[],
            LineChartStyle {
                y_label: "CTR %",
                ..Default::default()
            },
            height,
        );

        Self::subheader(ui, "Site conversion rate (%)");
        ChartPlotter::draw_line_chart(
            ui,
            "cr",
            &views.months,
            &Self::colored(&views.cr),
            &[],
            LineChartStyle {
                y_label: "CR %",
                ..Default::default()
            },
            height,
        );
    }

    fn show_returns(ui: &mut egui::Ui, views: &DashboardViews, height: f32) {
        Self::subheader(ui, "Google Ads ROAS (%)");
        let references: Vec<_> = views
            .roas_references()
            .into_iter()
            .map(|r| match r.kind {
                ReferenceKind::Mean => (r, MEAN_COLOR, LineStyle::Dashed { length: 10.0 }),
                ReferenceKind::BreakEven => {
                    (r, BREAK_EVEN_COLOR, LineStyle::Dotted { spacing: 6.0 })
                }
            })
            .collect();
        ChartPlotter::draw_line_chart(
            ui,
            "roas",
            &views.months,
            &[(views.roas_google.clone(), ROAS_COLOR)],
            &references,
            LineChartStyle {
                y_label: "ROAS %",
                value_labels: true,
                ..Default::default()
            },
            height,
        );

        Self::subheader(ui, "CPA (cost per order)");
        ChartPlotter::draw_line_chart(
            ui,
            "cpa",
            &views.months,
            &Self::colored(&views.cpa),
            &[],
            LineChartStyle {
                y_label: "€ per order",
                dashed: true,
                ..Default::default()
            },
            height,
        );
    }

    fn show_orders_revenue(ui: &mut egui::Ui, views: &DashboardViews, height: f32) {
        Self::subheader(ui, "Orders and revenue");
        ChartPlotter::draw_dual_axis_chart(
            ui,
            "orders_revenue",
            &views.months,
            &views.orders_revenue,
            "Orders",
            "€",
            height,
        );
    }
}
