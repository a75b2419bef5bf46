use chrono::NaiveDate;
use coin_stats_wasm::domain::chart::{
    LinearScale, TimeScale, format_value, nearest_point, time_axis_ticks, value_axis_ticks,
};
use coin_stats_wasm::domain::coin_data::{SeriesPoint, date_from_millis, epoch_millis};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

const DAY_MS: f64 = 86_400_000.0;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn series(day_offsets: &[u16]) -> Vec<SeriesPoint> {
    let mut days: Vec<u16> = day_offsets.to_vec();
    days.sort_unstable();
    days.dedup();
    days.into_iter()
        .enumerate()
        .map(|(index, offset)| {
            let time_ms = offset as f64 * DAY_MS;
            SeriesPoint {
                index,
                date: date_from_millis(time_ms).unwrap(),
                time_ms,
                value: index as f64,
            }
        })
        .collect()
}

#[quickcheck]
fn nearest_point_is_closest_and_earliest(day_offsets: Vec<u16>, half_days: u32) -> TestResult {
    let points = series(&day_offsets);
    if points.is_empty() {
        return TestResult::discard();
    }
    let target = (half_days % 140_000) as f64 * DAY_MS / 2.0;
    let Some(index) = nearest_point(&points, target) else {
        return TestResult::failed();
    };

    let distance = |p: &SeriesPoint| (p.time_ms - target).abs();
    let best = points.iter().map(distance).fold(f64::INFINITY, f64::min);
    let chosen = distance(&points[index]);
    let earlier_tie = points[..index].iter().any(|p| distance(p) == best);
    TestResult::from_bool(chosen == best && !earlier_tie)
}

#[quickcheck]
fn value_ticks_stay_inside_domain(a: i32, b: i32, count: u8) -> TestResult {
    if a == b || count == 0 {
        return TestResult::discard();
    }
    let (lo, hi) = (a.min(b) as f64, a.max(b) as f64);
    let scale = LinearScale::new((lo, hi), (350.0, 0.0));
    let ticks = scale.ticks(count as usize);
    let inside = ticks.iter().all(|t| *t >= lo - 1e-9 && *t <= hi + 1e-9);
    let ascending = ticks.windows(2).all(|w| w[0] < w[1]);
    TestResult::from_bool(inside && ascending)
}

#[quickcheck]
fn time_ticks_stay_inside_domain(start: u16, length: u16) -> TestResult {
    if length == 0 {
        return TestResult::discard();
    }
    let lo = start as f64 * DAY_MS + 3_600_000.0;
    let hi = lo + length as f64 * DAY_MS;
    let ticks = TimeScale::new((lo, hi), (0.0, 670.0)).ticks(10);
    let inside = ticks.iter().all(|d| (lo..=hi).contains(&epoch_millis(*d)));
    let ascending = ticks.windows(2).all(|w| w[0] < w[1]);
    TestResult::from_bool(inside && ascending)
}

#[test]
fn value_axis_labels() {
    let y = LinearScale::new((1000.0 / 1.005, 2000.0 * 1.005), (350.0, 0.0));
    let labels: Vec<String> = value_axis_ticks(&y, 6).into_iter().map(|t| t.label).collect();
    insta::assert_snapshot!(labels.join("\n"), @r"
    1.0k
    1.2k
    1.4k
    1.6k
    1.8k
    2.0k
    ");
}

#[test]
fn time_axis_labels_for_one_year() {
    let domain = (epoch_millis(day(2017, 1, 1)), epoch_millis(day(2018, 1, 1)));
    let x = TimeScale::new(domain, (0.0, 670.0));
    let ticks = time_axis_ticks(&x, 10);
    let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["2017", "April", "July", "October", "2018"]);
    assert_eq!(ticks.first().map(|t| t.position), Some(0.0));
    assert_eq!(ticks.last().map(|t| t.position), Some(670.0));
}

#[test]
fn billions_use_b_suffix() {
    assert_eq!(format_value(2_500_000_000.0), "2.5B");
    assert_eq!(format_value(1_200.0), "1.2k");
    assert_eq!(format_value(34_000_000_000.0), "34B");
}
