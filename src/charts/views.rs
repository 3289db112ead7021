//! Chart View Models
//! Turns the monthly rows into plot-ready series for the five dashboard tabs.
//!
//! Nothing here touches egui, so the numbers behind every chart can be
//! checked without a window.

use crate::metrics::MetricRow;
use statrs::statistics::Statistics;

/// ROAS level at which revenue equals ad spend.
pub const BREAK_EVEN_ROAS: f64 = 100.0;

/// A named line over the month axis. `x` is the row index; rows with a
/// missing value have no point.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub points: Vec<[f64; 2]>,
}

impl ChartSeries {
    pub fn from_rows(
        name: impl Into<String>,
        rows: &[MetricRow],
        value: impl Fn(&MetricRow) -> Option<f64>,
    ) -> Self {
        let points = rows
            .iter()
            .enumerate()
            .filter_map(|(i, row)| value(row).map(|v| [i as f64, v]))
            .collect();
        Self {
            name: name.into(),
            points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest y value, if any point exists.
    pub fn max_value(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|p| p[1])
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))
    }

    /// Copy of the series with every y multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            name: self.name.clone(),
            points: self.points.iter().map(|p| [p[0], p[1] * factor]).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Mean,
    BreakEven,
}

/// A horizontal reference line (mean ROAS, break-even).
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLine {
    pub kind: ReferenceKind,
    pub name: String,
    pub value: f64,
}

/// One bar of a funnel with its conversion from the previous stage.
#[derive(Debug, Clone, PartialEq)]
pub struct FunnelStage {
    pub label: String,
    pub value: f64,
    /// Percent of the previous stage; the first stage is always 100.
    pub conversion: f64,
}

impl FunnelStage {
    /// Bar label, e.g. `1520 (3.25%)`.
    pub fn annotation(&self) -> String {
        format!("{} ({}%)", self.value.trunc() as i64, self.conversion)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Funnel {
    pub title: String,
    pub stages: Vec<FunnelStage>,
}

impl Funnel {
    /// Build a funnel from ordered (label, total) stages.
    pub fn new(title: impl Into<String>, stages: &[(&str, f64)]) -> Self {
        let stages = stages
            .iter()
            .enumerate()
            .map(|(i, &(label, value))| {
                let conversion = if i == 0 {
                    100.0
                } else {
                    stage_conversion(value, stages[i - 1].1)
                };
                FunnelStage {
                    label: label.to_string(),
                    value,
                    conversion,
                }
            })
            .collect();
        Self {
            title: title.into(),
            stages,
        }
    }
}

/// Percent of `previous` reached by `value`, rounded to 2 decimals; 0 when
/// the previous stage is empty.
pub fn stage_conversion(value: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    round2(value / previous * 100.0)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Column total over all rows, skipping missing values.
pub fn column_total(rows: &[MetricRow], value: impl Fn(&MetricRow) -> Option<f64>) -> f64 {
    rows.iter().filter_map(value).sum()
}

/// Mean of the present values, `None` when there are none.
pub fn mean_present(values: impl IntoIterator<Item = Option<f64>>) -> Option<f64> {
    let present: Vec<f64> = values.into_iter().flatten().collect();
    if present.is_empty() {
        return None;
    }
    Some(present.iter().mean())
}

/// Two series sharing the month axis with independent y scales.
#[derive(Debug, Clone, PartialEq)]
pub struct DualAxisChart {
    pub left: ChartSeries,
    pub right: ChartSeries,
    /// Factor mapping right-axis values into the left-axis range
    pub right_scale: f64,
}

impl DualAxisChart {
    pub fn new(left: ChartSeries, right: ChartSeries) -> Self {
        let right_scale = match (left.max_value(), right.max_value()) {
            (Some(l), Some(r)) if l > 0.0 && r > 0.0 => l / r,
            _ => 1.0,
        };
        Self {
            left,
            right,
            right_scale,
        }
    }

    /// Right series mapped onto the left axis for drawing.
    pub fn right_on_left_axis(&self) -> ChartSeries {
        self.right.scaled(self.right_scale)
    }
}

/// Everything the five tabs draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardViews {
    pub months: Vec<String>,

    // Clicks by source
    pub google_clicks: ChartSeries,
    pub other_clicks: Vec<ChartSeries>,

    // Funnels
    pub google_seo_funnel: Funnel,
    pub ebay_funnel: Funnel,

    // CTR / CR
    pub ctr: Vec<ChartSeries>,
    pub cr: Vec<ChartSeries>,

    // ROAS / CPA
    pub roas_google: ChartSeries,
    pub mean_roas: Option<f64>,
    pub cpa: Vec<ChartSeries>,

    // Orders & revenue
    pub orders_revenue: DualAxisChart,
}

impl DashboardViews {
    pub fn build(rows: &[MetricRow]) -> Self {
        let months = rows.iter().map(|r| r.month.clone()).collect();

        let google_clicks = ChartSeries::from_rows("Google", rows, |r| r.inputs.google_clicks);
        let other_clicks = vec![
            ChartSeries::from_rows("eBay", rows, |r| r.inputs.ebay_clicks),
            ChartSeries::from_rows("SEO", rows, |r| r.inputs.seo_clicks),
        ];

        let ctr = vec![
            ChartSeries::from_rows("Google", rows, |r| r.derived.ctr_google),
            ChartSeries::from_rows("eBay", rows, |r| r.derived.ctr_ebay),
            ChartSeries::from_rows("SEO", rows, |r| r.derived.ctr_seo),
        ];
        let cr = vec![
            ChartSeries::from_rows("Cart from clicks", rows, |r| r.derived.cr_cart),
            ChartSeries::from_rows("Order from clicks", rows, |r| r.derived.cr_order),
            ChartSeries::from_rows("Order from cart", rows, |r| {
                r.derived.cr_order_from_cart
            }),
        ];

        let roas_google = ChartSeries::from_rows("ROAS Google", rows, |r| r.derived.roas_google);
        let mean_roas = mean_present(rows.iter().map(|r| r.derived.roas_google));
        let cpa = vec![
            ChartSeries::from_rows("CPA Google", rows, |r| r.derived.cpa_google),
            ChartSeries::from_rows("CPA eBay", rows, |r| r.derived.cpa_ebay),
        ];

        let orders_revenue = DualAxisChart::new(
            ChartSeries::from_rows("Orders", rows, |r| r.inputs.site_orders),
            ChartSeries::from_rows("Revenue (€)", rows, |r| r.inputs.revenue),
        );

        Self {
            months,
            google_clicks,
            other_clicks,
            google_seo_funnel: google_seo_funnel(rows),
            ebay_funnel: ebay_funnel(rows),
            ctr,
            cr,
            roas_google,
            mean_roas,
            cpa,
            orders_revenue,
        }
    }

    /// Reference lines of the ROAS chart: mean (when defined), then break-even.
    pub fn roas_references(&self) -> Vec<ReferenceLine> {
        let mut lines = Vec::with_capacity(2);
        if let Some(mean) = self.mean_roas {
            lines.push(ReferenceLine {
                kind: ReferenceKind::Mean,
                name: format!("Mean ROAS: {:.1}%", mean),
                value: mean,
            });
        }
        lines.push(ReferenceLine {
            kind: ReferenceKind::BreakEven,
            name: "100% break-even".to_string(),
            value: BREAK_EVEN_ROAS,
        });
        lines
    }
}

/// Site funnel fed by Google Ads and organic search.
pub fn google_seo_funnel(rows: &[MetricRow]) -> Funnel {
    let impressions = column_total(rows, |r| r.inputs.google_impressions)
        + column_total(rows, |r| r.inputs.seo_impressions);
    let clicks = column_total(rows, |r| r.inputs.google_clicks)
        + column_total(rows, |r| r.inputs.seo_clicks);
    let cart = column_total(rows, |r| r.inputs.cart_adds);
    let orders = column_total(rows, |r| r.inputs.site_orders);

    Funnel::new(
        "Google + SEO funnel",
        &[
            ("Impressions", impressions),
            ("Clicks", clicks),
            ("Cart", cart),
            ("Orders", orders),
        ],
    )
}

/// Marketplace funnel (no cart stage).
pub fn ebay_funnel(rows: &[MetricRow]) -> Funnel {
    Funnel::new(
        "eBay funnel",
        &[
            ("Impressions", column_total(rows, |r| r.inputs.ebay_impressions)),
            ("Clicks", column_total(rows, |r| r.inputs.ebay_clicks)),
            ("Orders", column_total(rows, |r| r.inputs.ebay_orders)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{ChannelMetrics, MetricDeriver};

    fn row(month: &str, inputs: ChannelMetrics) -> MetricRow {
        MetricRow {
            month: month.to_string(),
            inputs,
            derived: MetricDeriver::derive_row(&inputs),
        }
    }

    fn sample_rows() -> Vec<MetricRow> {
        vec![
            row(
                "Jan",
                ChannelMetrics {
                    google_clicks: Some(100.0),
                    google_impressions: Some(2000.0),
                    google_cost: Some(50.0),
                    seo_clicks: Some(50.0),
                    seo_impressions: Some(1000.0),
                    ebay_clicks: Some(20.0),
                    ebay_impressions: Some(400.0),
                    ebay_orders: Some(2.0),
                    cart_adds: Some(30.0),
                    site_orders: Some(6.0),
                    revenue: Some(300.0),
                    ..Default::default()
                },
            ),
            row(
                "Feb",
                ChannelMetrics {
                    google_clicks: Some(50.0),
                    google_impressions: None,
                    google_cost: Some(0.0),
                    cart_adds: None,
                    site_orders: Some(4.0),
                    revenue: Some(200.0),
                    ..Default::default()
                },
            ),
            row(
                "Mar",
                ChannelMetrics {
                    google_cost: Some(100.0),
                    revenue: Some(100.0),
                    ..Default::default()
                },
            ),
        ]
    }

    #[test]
    fn test_series_skips_missing_points() {
        let rows = sample_rows();
        let ctr = ChartSeries::from_rows("Google", &rows, |r| r.derived.ctr_google);
        assert_eq!(ctr.points, vec![[0.0, 5.0]]);

        let clicks = ChartSeries::from_rows("Google", &rows, |r| r.inputs.google_clicks);
        assert_eq!(clicks.points, vec![[0.0, 100.0], [1.0, 50.0]]);
    }

    #[test]
    fn test_funnel_first_stage_is_baseline() {
        let funnel = Funnel::new("f", &[("A", 1000.0), ("B", 50.0), ("C", 0.0), ("D", 3.0)]);
        let conversions: Vec<f64> = funnel.stages.iter().map(|s| s.conversion).collect();
        assert_eq!(conversions, vec![100.0, 5.0, 0.0, 0.0]);
    }

    #[test]
    fn test_stage_conversion_rounds_to_two_decimals() {
        assert_eq!(stage_conversion(1.0, 3.0), 33.33);
        assert_eq!(stage_conversion(2.0, 3.0), 66.67);
        assert_eq!(stage_conversion(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_google_seo_funnel_totals() {
        let funnel = google_seo_funnel(&sample_rows());
        let values: Vec<f64> = funnel.stages.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![3000.0, 200.0, 30.0, 10.0]);
        assert_eq!(funnel.stages[1].conversion, 6.67);
        assert_eq!(funnel.stages[2].conversion, 15.0);
        assert_eq!(funnel.stages[3].conversion, 33.33);
        assert_eq!(funnel.stages[1].annotation(), "200 (6.67%)");
        assert_eq!(funnel.stages[0].annotation(), "3000 (100%)");
    }

    #[test]
    fn test_ebay_funnel_totals() {
        let funnel = ebay_funnel(&sample_rows());
        let values: Vec<f64> = funnel.stages.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![400.0, 20.0, 2.0]);
        assert_eq!(funnel.stages[1].conversion, 5.0);
        assert_eq!(funnel.stages[2].conversion, 10.0);
    }

    #[test]
    fn test_mean_roas_ignores_missing() {
        let views = DashboardViews::build(&sample_rows());
        // Jan 600%, Feb undefined (zero cost), Mar 100%
        assert_eq!(views.mean_roas, Some(350.0));

        let refs = views.roas_references();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].kind, ReferenceKind::Mean);
        assert_eq!(refs[0].name, "Mean ROAS: 350.0%");
        assert_eq!(refs[1].kind, ReferenceKind::BreakEven);
        assert_eq!(refs[1].value, BREAK_EVEN_ROAS);
    }

    #[test]
    fn test_mean_roas_absent_without_values() {
        assert_eq!(mean_present(vec![None, None]), None);
        let views = DashboardViews::build(&[]);
        assert_eq!(views.mean_roas, None);
        assert_eq!(views.roas_references().len(), 1);
        assert!(views.months.is_empty());
    }

    #[test]
    fn test_dual_axis_scale() {
        let views = DashboardViews::build(&sample_rows());
        let chart = &views.orders_revenue;
        assert_eq!(chart.right_scale, 6.0 / 300.0);
        let scaled = chart.right_on_left_axis();
        assert_eq!(scaled.max_value(), Some(300.0 * (6.0 / 300.0)));
        assert_eq!(scaled.points.len(), 3);
    }

    #[test]
    fn test_dual_axis_without_data_keeps_unit_scale() {
        let empty = ChartSeries {
            name: "x".into(),
            points: Vec::new(),
        };
        let chart = DualAxisChart::new(empty.clone(), empty);
        assert_eq!(chart.right_scale, 1.0);
    }
}
