//! Price Chart Component
//!
//! SVG line chart for an asset's daily price history.

use leptos::*;

use crate::format;
use crate::types::MarketPoint;

const VIEW_WIDTH: f64 = 640.0;
const VIEW_HEIGHT: f64 = 260.0;

// Margins around the plot area
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 32.0;

const GRID_ROWS: usize = 4;
const LINE_COLOR: &str = "#a78bfa"; // primary-400
const GRID_COLOR: &str = "#374151"; // gray-700

/// Price range to plot: min/max padded by 10%, or by 1.0 for a flat series
pub fn price_bounds(points: &[MarketPoint]) -> (f64, f64) {
    if points.is_empty() {
        return (0.0, 1.0);
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for point in points {
        min = min.min(point.price);
        max = max.max(point.price);
    }

    let padding = if max > min { (max - min) * 0.1 } else { 1.0 };
    (min - padding, max + padding)
}

/// Project the series into "x,y x,y ..." polyline coordinates inside a
/// width x height box, oldest point on the left
pub fn polyline_points(points: &[MarketPoint], width: f64, height: f64) -> String {
    if points.is_empty() {
        return String::new();
    }

    let (lo, hi) = price_bounds(points);
    let span = hi - lo;
    let last = points.len() - 1;

    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = if last == 0 {
                width / 2.0
            } else {
                i as f64 * width / last as f64
            };
            let y = (hi - point.price) / span * height;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Axis label for a price: whole dollars once grouping kicks in,
/// cents below that
fn price_label(value: f64) -> String {
    if value >= 1_000.0 {
        format::usd_whole(value)
    } else {
        format!("${value:.2}")
    }
}

#[component]
pub fn PriceChart(points: Vec<MarketPoint>) -> impl IntoView {
    if points.is_empty() {
        return view! {
            <div class="text-center py-8 text-gray-400">
                "No historical data available."
            </div>
        }
        .into_view();
    }

    let inner_width = VIEW_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let inner_height = VIEW_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let (lo, hi) = price_bounds(&points);
    let line = polyline_points(&points, inner_width, inner_height);
    let right_edge = VIEW_WIDTH - MARGIN_RIGHT;
    let label_x = MARGIN_LEFT - 8.0;

    // Horizontal grid lines with a price label each
    let grid = (0..=GRID_ROWS)
        .map(|row| {
            let frac = row as f64 / GRID_ROWS as f64;
            let y = MARGIN_TOP + frac * inner_height;
            let text_y = y + 4.0;
            let value = hi - frac * (hi - lo);
            view! {
                <line
                    x1=MARGIN_LEFT
                    y1=y
                    x2=right_edge
                    y2=y
                    stroke=GRID_COLOR
                    stroke-width="1"
                    stroke-dasharray="3 3"
                />
                <text
                    x=label_x
                    y=text_y
                    text-anchor="end"
                    class="fill-gray-400 text-[10px]"
                >
                    {price_label(value)}
                </text>
            }
        })
        .collect_view();

    // Date labels for the first, middle, and last points
    let last = points.len() - 1;
    let mut picks = vec![0];
    if last > 1 {
        picks.push(last / 2);
    }
    if last > 0 {
        picks.push(last);
    }
    let labels_y = VIEW_HEIGHT - 10.0;
    let x_labels = picks
        .into_iter()
        .map(|i| {
            let x = if last == 0 {
                MARGIN_LEFT + inner_width / 2.0
            } else {
                MARGIN_LEFT + i as f64 * inner_width / last as f64
            };
            let anchor = if i == 0 {
                "start"
            } else if i == last {
                "end"
            } else {
                "middle"
            };
            let label = points[i].date.clone();
            view! {
                <text x=x y=labels_y text-anchor=anchor class="fill-gray-400 text-[10px]">
                    {label}
                </text>
            }
        })
        .collect_view();

    view! {
        <svg
            viewBox=format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")
            class="w-full h-auto"
            role="img"
        >
            {grid}
            <g transform=format!("translate({MARGIN_LEFT},{MARGIN_TOP})")>
                <polyline
                    points=line
                    fill="none"
                    stroke=LINE_COLOR
                    stroke-width="2.5"
                    stroke-linejoin="round"
                    stroke-linecap="round"
                />
            </g>
            {x_labels}
        </svg>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(price: f64) -> MarketPoint {
        MarketPoint {
            date: "Aug 1".to_string(),
            price,
        }
    }

    #[test]
    fn test_price_bounds_pads_range() {
        let (lo, hi) = price_bounds(&[pt(10.0), pt(20.0)]);
        assert_eq!(lo, 9.0);
        assert_eq!(hi, 21.0);
    }

    #[test]
    fn test_price_bounds_flat_series() {
        let (lo, hi) = price_bounds(&[pt(5.0), pt(5.0)]);
        assert_eq!(lo, 4.0);
        assert_eq!(hi, 6.0);
    }

    #[test]
    fn test_price_bounds_empty() {
        assert_eq!(price_bounds(&[]), (0.0, 1.0));
    }

    #[test]
    fn test_polyline_spans_the_box() {
        let line = polyline_points(&[pt(10.0), pt(20.0)], 100.0, 100.0);
        // bounds (9, 21): 10 maps near the bottom, 20 near the top
        assert_eq!(line, "0.0,91.7 100.0,8.3");
    }

    #[test]
    fn test_polyline_single_point_centers() {
        let line = polyline_points(&[pt(5.0)], 100.0, 100.0);
        assert_eq!(line, "50.0,50.0");
    }

    #[test]
    fn test_polyline_empty() {
        assert_eq!(polyline_points(&[], 100.0, 100.0), "");
    }

    #[test]
    fn test_price_label_switches_precision() {
        assert_eq!(price_label(58_000.0), "$58,000");
        assert_eq!(price_label(999.99), "$999.99");
        assert_eq!(price_label(0.1), "$0.10");
    }
}
