use super::entities::{ChartFrame, Selection, Tooltip};
use super::format::format_value;
use super::value_objects::{ChartLayout, LinearScale, TimeScale};
use crate::domain::coin_data::{Dataset, SeriesPoint, derive_points};
use crate::domain::errors::{AppError, AppResult};

/// Relative padding of the y domain around the data
pub const Y_PADDING: f64 = 1.005;

/// `[min / 1.005, max * 1.005]` of `values`; `None` without finite values
pub fn padded_extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    (min <= max).then(|| (min / Y_PADDING, max * Y_PADDING))
}

/// Derives the selected series and the scales for one redraw.
///
/// Fails with [`AppError::UnknownCoin`] when the coin is not in the dataset
/// and with [`AppError::EmptySeries`] when no sample has both a valid date
/// and a numeric value for the metric.
pub fn plan_frame(
    dataset: &Dataset,
    selection: &Selection,
    layout: &ChartLayout,
) -> AppResult<ChartFrame> {
    let samples = dataset
        .series(&selection.coin)
        .ok_or_else(|| AppError::UnknownCoin(selection.coin.to_string()))?;
    let derived = derive_points(samples, selection.metric);

    let (Some(first), Some(last)) = (derived.points.first(), derived.points.last()) else {
        return Err(AppError::EmptySeries { coin: selection.coin.to_string() });
    };
    let x_domain = (first.time_ms, last.time_ms);
    let y_domain = padded_extent(derived.points.iter().map(|p| p.value))
        .ok_or_else(|| AppError::EmptySeries { coin: selection.coin.to_string() })?;

    Ok(ChartFrame {
        selection: selection.clone(),
        x_scale: TimeScale::new(x_domain, (0.0, layout.width())),
        y_scale: LinearScale::new(y_domain, (layout.height(), 0.0)),
        points: derived.points,
        skipped: derived.skipped,
    })
}

/// Leftmost index in `lo..=points.len()` whose time is `>= target`
pub fn bisect_left(points: &[SeriesPoint], target_ms: f64, lo: usize) -> usize {
    let lo = lo.min(points.len());
    lo + points[lo..].partition_point(|p| p.time_ms < target_ms)
}

/// Index of the point closest in time to `target_ms`. Of the two points
/// bracketing the target the later one wins only when strictly closer,
/// so an exact midpoint resolves to the earlier index.
pub fn nearest_point(points: &[SeriesPoint], target_ms: f64) -> Option<usize> {
    if points.is_empty() || target_ms.is_nan() {
        return None;
    }
    let i = bisect_left(points, target_ms, 1);
    let before = i - 1;
    let Some(after) = points.get(i) else {
        return Some(before);
    };
    if target_ms - points[before].time_ms > after.time_ms - target_ms {
        Some(i)
    } else {
        Some(before)
    }
}

/// Tooltip for a pointer at `pointer_x` plot pixels
pub fn tooltip_at(frame: &ChartFrame, pointer_x: f64, layout: &ChartLayout) -> Option<Tooltip> {
    let target = frame.x_scale.invert(pointer_x);
    let index = nearest_point(&frame.points, target)?;
    let point = &frame.points[index];
    let (x, y) = frame.position(point);
    Some(Tooltip {
        point: index,
        value: point.value,
        x,
        y,
        text: format_value(point.value),
        x_line_length: layout.height() - y,
        y_line_length: -x,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::coin_data::{CoinId, Metric, RawSample, epoch_millis, parse_sample_date};

    fn points(dates: &[&str]) -> Vec<SeriesPoint> {
        dates
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let date = parse_sample_date(text).unwrap();
                SeriesPoint { index, date, time_ms: epoch_millis(date), value: index as f64 }
            })
            .collect()
    }

    #[test]
    fn padded_extent_skips_nan() {
        assert_eq!(
            padded_extent([f64::NAN, 1005.0, 2000.0]),
            Some((1005.0 / Y_PADDING, 2000.0 * Y_PADDING))
        );
        assert_eq!(padded_extent([f64::NAN]), None);
        assert_eq!(padded_extent(Vec::new()), None);
    }

    #[test]
    fn bisect_left_honours_lower_bound() {
        let pts = points(&["01/01/2017", "03/01/2017", "05/01/2017"]);
        assert_eq!(bisect_left(&pts, pts[0].time_ms, 0), 0);
        assert_eq!(bisect_left(&pts, pts[0].time_ms, 1), 1);
        assert_eq!(bisect_left(&pts, pts[1].time_ms, 1), 1);
        assert_eq!(bisect_left(&pts, pts[2].time_ms + 1.0, 1), 3);
        assert_eq!(bisect_left(&pts, 0.0, 5), 3);
    }

    #[test]
    fn nearest_point_at_edges() {
        let pts = points(&["01/01/2017", "03/01/2017"]);
        assert_eq!(nearest_point(&pts, pts[0].time_ms - 1e9), Some(0));
        assert_eq!(nearest_point(&pts, pts[1].time_ms + 1e9), Some(1));
        assert_eq!(nearest_point(&pts[..1], pts[1].time_ms), Some(0));
        assert_eq!(nearest_point(&[], 0.0), None);
        assert_eq!(nearest_point(&pts, f64::NAN), None);
    }

    #[test]
    fn midpoint_tie_prefers_earlier() {
        let pts = points(&["01/01/2017", "03/01/2017"]);
        let mid = (pts[0].time_ms + pts[1].time_ms) / 2.0;
        assert_eq!(nearest_point(&pts, mid), Some(0));
        assert_eq!(nearest_point(&pts, mid + 1.0), Some(1));
        assert_eq!(nearest_point(&pts, mid - 1.0), Some(0));
    }

    #[test]
    fn unknown_and_empty_series_are_rejected() {
        let mut dataset = Dataset::default();
        dataset.insert(CoinId::from("ripple"), vec![RawSample::new("bad", "1", "1", "1")]);
        let layout = ChartLayout::default();

        let bitcoin = Selection::new(CoinId::from("bitcoin"), Metric::PriceUsd);
        let unknown = plan_frame(&dataset, &bitcoin, &layout);
        assert_eq!(unknown, Err(AppError::UnknownCoin("bitcoin".to_string())));

        let ripple = Selection::new(CoinId::from("ripple"), Metric::PriceUsd);
        let empty = plan_frame(&dataset, &ripple, &layout);
        assert_eq!(empty, Err(AppError::EmptySeries { coin: "ripple".to_string() }));
    }

    #[test]
    fn tooltip_guides_reach_the_axes() {
        let mut dataset = Dataset::default();
        dataset.insert(
            CoinId::from("bitcoin"),
            vec![
                RawSample::new("01/01/2017", "1000", "0", "0"),
                RawSample::new("01/01/2018", "2000", "0", "0"),
            ],
        );
        let layout = ChartLayout::default();
        let selection = Selection::new(CoinId::from("bitcoin"), Metric::PriceUsd);
        let frame = plan_frame(&dataset, &selection, &layout).unwrap();

        let tip = tooltip_at(&frame, 600.0, &layout).unwrap();
        assert_eq!(tip.point, 1);
        assert_eq!(tip.x, 670.0);
        assert_eq!(tip.text, "2.0k");
        assert_eq!(tip.y_line_length, -670.0);
        assert!((tip.x_line_length - (layout.height() - tip.y)).abs() < 1e-9);
    }
}
