//! Chart Plotter Module
//! Draws the dashboard views with egui_plot.

use crate::charts::views::{ChartSeries, DualAxisChart, Funnel, ReferenceLine};
use egui::{Align2, Color32, RichText};
use egui_plot::{
    AxisHints, Bar, BarChart, HLine, HPlacement, Legend, Line, LineStyle, Plot, PlotPoint,
    PlotPoints, Points, Text,
};

/// Color palette for series, in drawing order
pub const PALETTE: [Color32; 6] = [
    Color32::from_rgb(52, 152, 219),  // Blue
    Color32::from_rgb(243, 156, 18),  // Orange
    Color32::from_rgb(46, 204, 113),  // Green
    Color32::from_rgb(155, 89, 182),  // Purple
    Color32::from_rgb(231, 76, 60),   // Red
    Color32::from_rgb(96, 125, 139),  // Blue Grey
];

pub const ROAS_COLOR: Color32 = Color32::from_rgb(39, 174, 96);
pub const MEAN_COLOR: Color32 = Color32::from_rgb(231, 76, 60);
pub const BREAK_EVEN_COLOR: Color32 = Color32::GRAY;
pub const EBAY_FUNNEL_COLOR: Color32 = Color32::from_rgb(243, 156, 18);

/// Axis and line styling for a month-based line chart.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineChartStyle<'a> {
    pub y_label: &'a str,
    pub dashed: bool,
    pub value_labels: bool,
}

/// Draws dashboard charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn series_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Month label for an x grid mark; only whole indices inside the range
    /// get a label.
    pub fn month_label(months: &[String], x: f64) -> String {
        let idx = x.round();
        if (x - idx).abs() > 1e-6 || idx < 0.0 {
            return String::new();
        }
        months.get(idx as usize).cloned().unwrap_or_default()
    }

    /// Line chart over months with optional reference lines.
    pub fn draw_line_chart(
        ui: &mut egui::Ui,
        id: &str,
        months: &[String],
        series: &[(ChartSeries, Color32)],
        references: &[(ReferenceLine, Color32, LineStyle)],
        style: LineChartStyle<'_>,
        height: f32,
    ) {
        let labels = months.to_vec();

        Plot::new(id)
            .height(height)
            .legend(Legend::default())
            .allow_scroll(false)
            .y_axis_label(style.y_label)
            .include_y(0.0)
            .x_axis_formatter(move |mark, _range| Self::month_label(&labels, mark.value))
            .show(ui, |plot_ui| {
                for (s, color) in series {
                    if s.is_empty() {
                        continue;
                    }
                    let mut line = Line::new(PlotPoints::from(s.points.clone()))
                        .color(*color)
                        .width(2.0)
                        .name(&s.name);
                    if style.dashed {
                        line = line.style(LineStyle::Dashed { length: 8.0 });
                    }
                    plot_ui.line(line);
                    plot_ui.points(
                        Points::new(PlotPoints::from(s.points.clone()))
                            .radius(3.5)
                            .color(*color)
                            .name(&s.name),
                    );

                    if style.value_labels {
                        for p in &s.points {
                            plot_ui.text(
                                Text::new(
                                    PlotPoint::new(p[0], p[1]),
                                    RichText::new(format!("{:.1}%", p[1])).size(10.0),
                                )
                                .anchor(Align2::CENTER_BOTTOM)
                                .color(*color),
                            );
                        }
                    }
                }

                for (reference, color, line_style) in references {
                    plot_ui.hline(
                        HLine::new(reference.value)
                            .color(*color)
                            .style(*line_style)
                            .name(&reference.name),
                    );
                }
            });
    }

    /// Horizontal funnel bars on a log10 value axis, top stage first.
    pub fn draw_funnel(ui: &mut egui::Ui, funnel: &Funnel, color: Color32, height: f32) {
        let n = funnel.stages.len();
        let labels: Vec<String> = funnel.stages.iter().map(|s| s.label.clone()).collect();

        // First stage at the top: bar position counts down
        let position = move |i: usize| (n - 1 - i) as f64;

        let bars: Vec<Bar> = funnel
            .stages
            .iter()
            .enumerate()
            .map(|(i, stage)| {
                Bar::new(position(i), Self::log_value(stage.value))
                    .name(&stage.label)
                    .width(0.6)
            })
            .collect();

        Plot::new(format!("funnel_{}", funnel.title))
            .height(height)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .include_x(0.0)
            .x_axis_label("log scale")
            .x_axis_formatter(|mark, _range| {
                if mark.value < 0.0 || mark.value.fract().abs() > 1e-6 {
                    String::new()
                } else {
                    format!("{:.0}", 10f64.powf(mark.value))
                }
            })
            .y_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if (mark.value - idx).abs() > 1e-6 || idx < 0.0 || idx as usize >= n {
                    return String::new();
                }
                labels[n - 1 - idx as usize].clone()
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars).horizontal().color(color));

                for (i, stage) in funnel.stages.iter().enumerate() {
                    let x = Self::log_value(stage.value) + 0.05;
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(x, position(i)),
                            RichText::new(stage.annotation()).size(11.0),
                        )
                        .anchor(Align2::LEFT_CENTER),
                    );
                }
            });
    }

    /// Orders on the left axis, revenue on a right axis.
    pub fn draw_dual_axis_chart(
        ui: &mut egui::Ui,
        id: &str,
        months: &[String],
        chart: &DualAxisChart,
        left_label: &str,
        right_label: &str,
        height: f32,
    ) {
        let labels = months.to_vec();
        let scale = chart.right_scale;
        let right = chart.right_on_left_axis();

        let axes = vec![
            AxisHints::new_y().label(left_label),
            AxisHints::new_y()
                .label(right_label)
                .placement(HPlacement::Right)
                .formatter(move |mark, _range| format!("{:.0}", mark.value / scale)),
        ];

        Plot::new(id)
            .height(height)
            .legend(Legend::default())
            .allow_scroll(false)
            .include_y(0.0)
            .custom_y_axes(axes)
            .x_axis_formatter(move |mark, _range| Self::month_label(&labels, mark.value))
            .show(ui, |plot_ui| {
                for (s, color) in [(&chart.left, Self::series_color(0)), (&right, ROAS_COLOR)] {
                    if s.is_empty() {
                        continue;
                    }
                    plot_ui.line(
                        Line::new(PlotPoints::from(s.points.clone()))
                            .color(color)
                            .width(2.0)
                            .name(&s.name),
                    );
                    plot_ui.points(
                        Points::new(PlotPoints::from(s.points.clone()))
                            .radius(3.5)
                            .color(color)
                            .name(&s.name),
                    );
                }
            });
    }

    /// Bar length on the log axis; values below 1 sit at the origin.
    pub fn log_value(value: f64) -> f64 {
        value.max(1.0).log10()
    }
}
