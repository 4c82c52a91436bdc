//! SVG geometry for the category pie and the weekly bar chart.

use std::f64::consts::PI;

use crate::stats::{CategoryTotal, WeeklyBucket};

pub const PALETTE: [&str; 9] = [
    "#10b981", "#3b82f6", "#f59e0b", "#ef4444", "#8b5cf6", "#06b6d4", "#f97316", "#84cc16",
    "#6b7280",
];

#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub path: String,
    pub color: &'static str,
    pub label: &'static str,
    pub amount: f64,
    pub share: f64,
}

fn point_on_circle(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    // Angle 0 is twelve o'clock, increasing clockwise.
    (cx + r * angle.sin(), cy - r * angle.cos())
}

/// One slice per category, coloured by position in the palette.
pub fn pie_slices(totals: &[CategoryTotal], cx: f64, cy: f64, r: f64) -> Vec<PieSlice> {
    let total: f64 = totals.iter().map(|t| t.amount).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = 0.0;
    let mut slices = Vec::with_capacity(totals.len());
    for (index, entry) in totals.iter().enumerate() {
        let share = entry.amount / total;
        let sweep = share * 2.0 * PI;
        let path = if share >= 1.0 - 1e-9 {
            // A single arc cannot close on itself; draw two halves.
            format!(
                "M {cx} {top} A {r} {r} 0 1 1 {cx} {bottom} A {r} {r} 0 1 1 {cx} {top} Z",
                cx = cx,
                r = r,
                top = cy - r,
                bottom = cy + r
            )
        } else {
            let (x0, y0) = point_on_circle(cx, cy, r, start);
            let (x1, y1) = point_on_circle(cx, cy, r, start + sweep);
            let large_arc = if sweep > PI { 1 } else { 0 };
            format!(
                "M {} {} L {:.3} {:.3} A {} {} 0 {} 1 {:.3} {:.3} Z",
                cx, cy, x0, y0, r, r, large_arc, x1, y1
            )
        };
        slices.push(PieSlice {
            path,
            color: PALETTE[index % PALETTE.len()],
            label: entry.category.label(),
            amount: entry.amount,
            share,
        });
        start += sweep;
    }
    slices
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
    pub amount: f64,
}

/// Lays bars out left to right inside a `width` x `height` plot area whose
/// baseline is `height`. The tallest bar fills the area.
pub fn bar_layout(buckets: &[WeeklyBucket], width: f64, height: f64) -> Vec<Bar> {
    if buckets.is_empty() {
        return Vec::new();
    }
    let max = buckets.iter().map(|b| b.amount).fold(0.0_f64, f64::max);
    let slot = width / buckets.len() as f64;
    let bar_width = slot * 0.7;

    buckets
        .iter()
        .enumerate()
        .map(|(index, bucket)| {
            let bar_height = if max > 0.0 {
                bucket.amount / max * height
            } else {
                0.0
            };
            Bar {
                x: index as f64 * slot + (slot - bar_width) / 2.0,
                y: height - bar_height,
                width: bar_width,
                height: bar_height,
                label: bucket.label(),
                amount: bucket.amount,
            }
        })
        .collect()
}

/// Evenly spaced axis values from zero to `max`, inclusive.
pub fn axis_ticks(max: f64, steps: usize) -> Vec<f64> {
    if max <= 0.0 || steps == 0 {
        return vec![0.0];
    }
    (0..=steps)
        .map(|i| max * i as f64 / steps as f64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use chrono::NaiveDate;

    fn total(category: Category, amount: f64) -> CategoryTotal {
        CategoryTotal { category, amount }
    }

    #[test]
    fn slices_share_the_whole_circle() {
        let slices = pie_slices(
            &[
                total(Category::FoodAndDining, 150.0),
                total(Category::Travel, 350.0),
            ],
            100.0,
            100.0,
            80.0,
        );
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].color, PALETTE[0]);
        assert_eq!(slices[1].label, "Travel");
        assert!((slices[0].share - 0.3).abs() < 1e-12);
        let shares: f64 = slices.iter().map(|s| s.share).sum();
        assert!((shares - 1.0).abs() < 1e-12);
        // Travel sweeps more than half the circle.
        assert!(slices[1].path.contains(" 0 1 1 "));
        assert!(slices[0].path.contains(" 0 0 1 "));
    }

    #[test]
    fn single_category_draws_full_circle() {
        let slices = pie_slices(&[total(Category::Other, 10.0)], 50.0, 50.0, 40.0);
        assert_eq!(
            slices[0].path,
            "M 50 10 A 40 40 0 1 1 50 90 A 40 40 0 1 1 50 10 Z"
        );
    }

    #[test]
    fn nothing_to_draw_without_spend() {
        assert!(pie_slices(&[], 0.0, 0.0, 10.0).is_empty());
        assert!(pie_slices(&[total(Category::Other, 0.0)], 0.0, 0.0, 10.0).is_empty());
        assert!(bar_layout(&[], 100.0, 100.0).is_empty());
    }

    #[test]
    fn tallest_bar_fills_plot_height() {
        let week = |d: u32, amount: f64| WeeklyBucket {
            week_start: NaiveDate::from_ymd_opt(2026, 10, d).unwrap(),
            amount,
        };
        let bars = bar_layout(&[week(4, 50.0), week(11, 200.0)], 400.0, 100.0);
        assert_eq!(bars[1].height, 100.0);
        assert_eq!(bars[1].y, 0.0);
        assert_eq!(bars[0].height, 25.0);
        assert_eq!(bars[0].y, 75.0);
        assert!(bars[0].x < bars[1].x);
        assert_eq!(bars[0].label, "Week of 10/4/2026");
    }

    #[test]
    fn ticks_run_from_zero_to_max() {
        assert_eq!(axis_ticks(200.0, 4), vec![0.0, 50.0, 100.0, 150.0, 200.0]);
        assert_eq!(axis_ticks(0.0, 4), vec![0.0]);
    }
}
