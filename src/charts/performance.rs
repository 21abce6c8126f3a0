use std::time::Duration;

use plotters::prelude::*;

use crate::error::ReportError;
use crate::metrics::MatrixSummary;

const CHART_SIZE: (u32, u32) = (1600, 800);
const ERROR_COLOR: RGBColor = RGBColor(0xEE, 0x66, 0x66);
const FAIL_COLOR: RGBColor = RGBColor(0xFA, 0xC8, 0x58);
const AVERAGE_COLOR: RGBColor = RGBColor(0x54, 0x70, 0xC6);

pub(super) fn report_title(summary: &MatrixSummary) -> String {
    format!(
        "Clients: {}, Iterations: {}",
        summary.clients, summary.iterations
    )
}

/// Latencies are plotted in microseconds and labelled in milliseconds.
fn micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

/// Millisecond axis label with microsecond precision, so sub-millisecond
/// ticks stay distinct.
pub(super) fn ms_label(us: u64) -> String {
    format!("{}.{:03}", us / 1000, us % 1000)
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

fn plot_error<E: std::fmt::Display>(err: E) -> ReportError {
    ReportError::Render {
        message: err.to_string(),
    }
}

/// Renders the combined chart: stacked error/fail bars per iteration on a
/// secondary axis bounded by the client count, one thin line per client and
/// a thick average line on the latency axis.
///
/// # Errors
///
/// Returns an error when plotters fails to draw.
pub fn plot_performance_svg(summary: &MatrixSummary) -> Result<String, ReportError> {
    let iterations = to_u32(summary.iterations.max(1));
    let clients = to_u32(summary.clients.max(1));
    let y_max = micros(summary.max_latency).max(1);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(plot_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(report_title(summary), ("sans-serif", 30).into_font())
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .right_y_label_area_size(60)
            .build_cartesian_2d((0u32..iterations).into_segmented(), 0u64..y_max)
            .map_err(plot_error)?
            .set_secondary_coord((0u32..iterations).into_segmented(), 0u32..clients);

        chart
            .configure_mesh()
            .x_desc("Iteration")
            .y_desc("Response Time(ms)")
            .y_label_formatter(&|us| ms_label(*us))
            .draw()
            .map_err(plot_error)?;

        chart
            .configure_secondary_axes()
            .y_desc("Clients")
            .draw()
            .map_err(plot_error)?;

        let bars = summary
            .error_count
            .iter()
            .zip(summary.fail_count.iter())
            .enumerate();

        chart
            .draw_secondary_series(bars.clone().map(|(iteration, (&errors, _))| {
                let iteration = to_u32(iteration);
                Rectangle::new(
                    [
                        (SegmentValue::Exact(iteration), 0),
                        (
                            SegmentValue::Exact(iteration.saturating_add(1)),
                            to_u32(errors).min(clients),
                        ),
                    ],
                    ERROR_COLOR.mix(0.6).filled(),
                )
            }))
            .map_err(plot_error)?
            .label("error")
            .legend(|(x, y)| {
                Rectangle::new(
                    [(x, y.saturating_sub(5)), (x.saturating_add(20), y.saturating_add(5))],
                    ERROR_COLOR.filled(),
                )
            });

        chart
            .draw_secondary_series(bars.map(|(iteration, (&errors, &fails))| {
                let iteration = to_u32(iteration);
                let bottom = to_u32(errors).min(clients);
                let top = bottom.saturating_add(to_u32(fails)).min(clients);
                Rectangle::new(
                    [
                        (SegmentValue::Exact(iteration), bottom),
                        (SegmentValue::Exact(iteration.saturating_add(1)), top),
                    ],
                    FAIL_COLOR.mix(0.6).filled(),
                )
            }))
            .map_err(plot_error)?
            .label("fail")
            .legend(|(x, y)| {
                Rectangle::new(
                    [(x, y.saturating_sub(5)), (x.saturating_add(20), y.saturating_add(5))],
                    FAIL_COLOR.filled(),
                )
            });

        for (client, series) in summary.client_series.iter().enumerate() {
            let color = Palette99::pick(client).mix(0.5);
            chart
                .draw_series(LineSeries::new(
                    series.iter().enumerate().map(|(iteration, duration)| {
                        (
                            SegmentValue::CenterOf(to_u32(iteration)),
                            micros(*duration).min(y_max),
                        )
                    }),
                    color.stroke_width(1),
                ))
                .map_err(plot_error)?;
        }

        chart
            .draw_series(LineSeries::new(
                summary
                    .avg_latency
                    .iter()
                    .enumerate()
                    .map(|(iteration, duration)| {
                        (
                            SegmentValue::CenterOf(to_u32(iteration)),
                            micros(*duration).min(y_max),
                        )
                    }),
                AVERAGE_COLOR.stroke_width(4),
            ))
            .map_err(plot_error)?
            .label("avg")
            .legend(|(x, y)| {
                PathElement::new(
                    vec![(x, y), (x.saturating_add(20), y)],
                    AVERAGE_COLOR.stroke_width(4),
                )
            });

        chart
            .configure_series_labels()
            .border_style(BLACK)
            .background_style(WHITE.mix(0.8))
            .position(SeriesLabelPosition::UpperRight)
            .draw()
            .map_err(plot_error)?;

        root.present().map_err(plot_error)?;
    }
    Ok(svg)
}
