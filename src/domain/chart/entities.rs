use super::format::format_value;
use super::value_objects::{AxisTick, LinearScale, TimeScale};
use crate::domain::coin_data::{CoinId, Metric, SeriesPoint};
use crate::time_utils::format_time_tick;

/// Coin and metric currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub coin: CoinId,
    pub metric: Metric,
}

impl Selection {
    pub fn new(coin: CoinId, metric: Metric) -> Self {
        Self { coin, metric }
    }
}

/// The animatable state of the chart: both scale domains and the line
/// in plot pixels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Geometry {
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
    pub line: Vec<(f64, f64)>,
}

impl Geometry {
    /// Mix of `from` and `to` at `t` in `[0, 1]`. Line points beyond the
    /// shorter of the two lines are taken from `to` as they are.
    pub fn interpolate(from: &Geometry, to: &Geometry, t: f64) -> Geometry {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: f64, b: f64| a + (b - a) * t;
        let pair = |a: (f64, f64), b: (f64, f64)| (lerp(a.0, b.0), lerp(a.1, b.1));

        let line = to
            .line
            .iter()
            .enumerate()
            .map(|(i, &target)| match from.line.get(i) {
                Some(&start) => pair(start, target),
                None => target,
            })
            .collect();

        Geometry {
            x_domain: pair(from.x_domain, to.x_domain),
            y_domain: pair(from.y_domain, to.y_domain),
            line,
        }
    }

    /// SVG path data for the line, `M x,y L x,y ...`
    pub fn path_data(&self) -> String {
        let mut data = String::with_capacity(self.line.len() * 16);
        for (i, (x, y)) in self.line.iter().enumerate() {
            let command = if i == 0 { 'M' } else { 'L' };
            data.push_str(&format!("{}{:.2},{:.2}", command, x, y));
        }
        data
    }
}

/// Domain entity - everything one redraw needs, computed from a selection
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    pub selection: Selection,
    /// Valid points of the selected series, ascending by date
    pub points: Vec<SeriesPoint>,
    /// Rows left out for a bad date or value
    pub skipped: usize,
    pub x_scale: TimeScale,
    pub y_scale: LinearScale,
}

impl ChartFrame {
    pub fn y_label(&self) -> &'static str {
        self.selection.metric.axis_label()
    }

    pub fn line(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| self.position(p)).collect()
    }

    /// Plot-pixel position of a point
    pub fn position(&self, point: &SeriesPoint) -> (f64, f64) {
        (self.x_scale.map(point.time_ms), self.y_scale.map(point.value))
    }

    pub fn geometry(&self) -> Geometry {
        Geometry {
            x_domain: self.x_scale.domain(),
            y_domain: self.y_scale.domain,
            line: self.line(),
        }
    }
}

/// Ticks of the x axis for a time scale
pub fn time_axis_ticks(scale: &TimeScale, count: usize) -> Vec<AxisTick> {
    scale
        .ticks(count)
        .into_iter()
        .map(|date| AxisTick { position: scale.map_date(date), label: format_time_tick(date) })
        .collect()
}

/// Ticks of the y axis, labelled like the tooltip
pub fn value_axis_ticks(scale: &LinearScale, count: usize) -> Vec<AxisTick> {
    scale
        .ticks(count)
        .into_iter()
        .map(|value| AxisTick { position: scale.map(value), label: format_value(value) })
        .collect()
}

/// Tooltip snapped to one sample
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    /// Index into [`ChartFrame::points`]
    pub point: usize,
    pub value: f64,
    /// Translation of the tooltip group inside the plot
    pub x: f64,
    pub y: f64,
    pub text: String,
    /// Vertical guide, from the point down to the x axis
    pub x_line_length: f64,
    /// Horizontal guide, from the point left to the y axis (negative)
    pub y_line_length: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(x: (f64, f64), line: &[(f64, f64)]) -> Geometry {
        Geometry { x_domain: x, y_domain: (0.0, 10.0), line: line.to_vec() }
    }

    #[test]
    fn interpolation_is_linear_between_ends() {
        let from = geometry((0.0, 100.0), &[(0.0, 0.0), (10.0, 10.0)]);
        let to = geometry((100.0, 300.0), &[(20.0, 40.0), (30.0, 50.0)]);

        assert_eq!(Geometry::interpolate(&from, &to, 0.0), from);
        assert_eq!(Geometry::interpolate(&from, &to, 1.0), to);
        let mid = Geometry::interpolate(&from, &to, 0.5);
        assert_eq!(mid.x_domain, (50.0, 200.0));
        assert_eq!(mid.line, vec![(10.0, 20.0), (20.0, 30.0)]);
    }

    #[test]
    fn extra_target_points_appear_immediately() {
        let from = geometry((0.0, 1.0), &[(0.0, 0.0)]);
        let to = geometry((0.0, 1.0), &[(10.0, 10.0), (20.0, 20.0), (30.0, 30.0)]);
        let mid = Geometry::interpolate(&from, &to, 0.5);
        assert_eq!(mid.line, vec![(5.0, 5.0), (20.0, 20.0), (30.0, 30.0)]);

        let shrink = Geometry::interpolate(&to, &from, 0.5);
        assert_eq!(shrink.line.len(), 1);
    }

    #[test]
    fn path_data_moves_then_draws() {
        let g = geometry((0.0, 1.0), &[(0.0, 350.0), (670.0, 0.0)]);
        assert_eq!(g.path_data(), "M0.00,350.00L670.00,0.00");
        assert_eq!(Geometry::default().path_data(), "");
    }
}
