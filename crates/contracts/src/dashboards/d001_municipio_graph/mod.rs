//! Donut chart of the `/directors/graph` aggregate
//!
//! Angles are in radians, measured clockwise from 12 o'clock, so that the
//! first slice starts at the top the way chart widgets usually draw it.

pub mod dto;

pub use dto::{GraphLabel, GraphSlice, GRAPH_PATH};

use std::f64::consts::{PI, TAU};

/// Slice colours, cycled when there are more slices than entries
pub const PALETTE: [&str; 50] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#A28BFE", "#FF4567", "#32CD32", "#8B008B",
    "#FF1493", "#00FFFF", "#7FFF00", "#D2691E", "#DC143C", "#FFD700", "#ADFF2F", "#8A2BE2",
    "#FF6347", "#40E0D0", "#DA70D6", "#FF4500", "#1E90FF", "#3CB371", "#9932CC", "#FF8C00",
    "#66CDAA", "#B22222", "#FF00FF", "#FFDEAD", "#4B0082", "#20B2AA", "#E6E6FA", "#8B4513",
    "#48D1CC", "#FF69B4", "#CD5C5C", "#4682B4", "#EE82EE", "#FF7F50", "#9ACD32", "#BA55D3",
    "#6495ED", "#2E8B57", "#FFB6C1", "#DB7093", "#5F9EA0", "#FFDAB9", "#FF0000", "#8FBC8F",
    "#7B68EE", "#FA8072",
];

/// Shown instead of the chart when there is nothing to draw
pub const EMPTY_MESSAGE: &str = "No hay datos disponibles";

#[derive(Debug, Clone, PartialEq)]
pub struct PieArc {
    pub label: String,
    pub value: f64,
    /// Share of the total, 0..=100
    pub percent: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: &'static str,
}

impl PieArc {
    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }

    /// Point at `radius` from the centre on the arc bisector
    pub fn label_point(&self, cx: f64, cy: f64, radius: f64) -> (f64, f64) {
        polar(cx, cy, radius, self.mid_angle())
    }
}

/// Lay out slices around the circle
///
/// Non-positive and non-finite totals are skipped. Returns an empty vector
/// when nothing remains, which the view renders as [`EMPTY_MESSAGE`].
pub fn pie_arcs(slices: &[GraphSlice]) -> Vec<PieArc> {
    let drawable: Vec<&GraphSlice> = slices
        .iter()
        .filter(|s| s.total.is_finite() && s.total > 0.0)
        .collect();
    let sum: f64 = drawable.iter().map(|s| s.total).sum();
    if sum <= 0.0 {
        return Vec::new();
    }

    let mut angle = 0.0;
    drawable
        .iter()
        .enumerate()
        .map(|(index, slice)| {
            let sweep = slice.total / sum * TAU;
            let arc = PieArc {
                label: slice.label().to_string(),
                value: slice.total,
                percent: slice.total / sum * 100.0,
                start_angle: angle,
                end_angle: angle + sweep,
                color: PALETTE[index % PALETTE.len()],
            };
            angle += sweep;
            arc
        })
        .collect()
}

fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.sin(), cy - radius * angle.cos())
}

/// SVG path of a donut segment between `inner` and `outer` radii
pub fn arc_path(cx: f64, cy: f64, inner: f64, outer: f64, start: f64, end: f64) -> String {
    let sweep = end - start;
    if sweep >= TAU - 1e-9 {
        // A single SVG arc cannot close on itself; draw two halves.
        let mid = start + PI;
        return format!(
            "{} {}",
            arc_path(cx, cy, inner, outer, start, mid),
            arc_path(cx, cy, inner, outer, mid, start + TAU)
        );
    }

    let large = if sweep > PI { 1 } else { 0 };
    let (ox0, oy0) = polar(cx, cy, outer, start);
    let (ox1, oy1) = polar(cx, cy, outer, end);
    let (ix1, iy1) = polar(cx, cy, inner, end);
    let (ix0, iy0) = polar(cx, cy, inner, start);

    format!(
        "M {:.3} {:.3} A {:.3} {:.3} 0 {} 1 {:.3} {:.3} L {:.3} {:.3} A {:.3} {:.3} 0 {} 0 {:.3} {:.3} Z",
        ox0, oy0, outer, outer, large, ox1, oy1, ix1, iy1, inner, inner, large, ix0, iy0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(name: &str, total: f64) -> GraphSlice {
        GraphSlice {
            total,
            owner: Some(GraphLabel {
                name: name.to_string(),
            }),
        }
    }

    #[test]
    fn test_arcs_cover_the_circle() {
        let arcs = pie_arcs(&[slice("A", 1.0), slice("B", 3.0)]);
        assert_eq!(arcs.len(), 2);
        assert_eq!(arcs[0].start_angle, 0.0);
        assert!((arcs[0].percent - 25.0).abs() < 1e-9);
        assert!((arcs[1].end_angle - TAU).abs() < 1e-9);
        assert_eq!(arcs[0].color, "#0088FE");
        assert_eq!(arcs[1].color, "#00C49F");
    }

    #[test]
    fn test_empty_and_zero_totals_draw_nothing() {
        assert!(pie_arcs(&[]).is_empty());
        assert!(pie_arcs(&[slice("A", 0.0), slice("B", -2.0)]).is_empty());
    }

    #[test]
    fn test_palette_cycles() {
        let many: Vec<GraphSlice> = (0..52).map(|i| slice(&i.to_string(), 1.0)).collect();
        let arcs = pie_arcs(&many);
        assert_eq!(arcs[50].color, PALETTE[0]);
        assert_eq!(arcs[51].color, PALETTE[1]);
    }

    #[test]
    fn test_arc_path_shapes() {
        let quarter = arc_path(100.0, 100.0, 20.0, 50.0, 0.0, PI / 2.0);
        assert!(quarter.starts_with("M 100.000 50.000 A 50.000 50.000 0 0 1 150.000 100.000"));
        assert!(quarter.ends_with("Z"));

        let full = arc_path(100.0, 100.0, 20.0, 50.0, 0.0, TAU);
        assert_eq!(full.matches('M').count(), 2);
    }
}
