use contracts::shared::series::{SegmentKind, WaterfallSegment, WaterfallSeries, YearDelta};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// Decompose growth from a base total into waterfall bars.
///
/// Base bar, one bar per delta in ascending year order stacked on the running
/// cumulative, terminal bar carrying the final cumulative.
pub fn waterfall(
    base_year: i32,
    base_total: f64,
    deltas: &[YearDelta],
    terminal_year: i32,
) -> WaterfallSeries {
    let mut ordered = deltas.to_vec();
    ordered.sort_by_key(|d| d.year);

    let mut segments = Vec::with_capacity(ordered.len() + 2);
    segments.push(WaterfallSegment {
        year: base_year,
        kind: SegmentKind::Base,
        base_portion: base_total,
        incremental_portion: 0.0,
        total_value: base_total,
    });

    let mut cumulative = base_total;
    for d in &ordered {
        segments.push(WaterfallSegment {
            year: d.year,
            kind: SegmentKind::Increment,
            base_portion: cumulative,
            incremental_portion: d.delta,
            total_value: cumulative + d.delta,
        });
        cumulative += d.delta;
    }

    segments.push(WaterfallSegment {
        year: terminal_year,
        kind: SegmentKind::Total,
        base_portion: cumulative,
        incremental_portion: 0.0,
        total_value: cumulative,
    });

    WaterfallSeries {
        segments,
        total_incremental_opportunity: ordered.iter().map(|d| d.delta).sum(),
    }
}

/// Year-over-year deltas over `years`, with the schedule as display fallback.
///
/// A year uses its observed change when both it and the previous year have a
/// positive total; otherwise the schedule entry scaled by
/// `base_total / reference_baseline`. Returns the deltas and the years that
/// fell back.
pub fn incremental_deltas(
    totals: &BTreeMap<i32, f64>,
    years: RangeInclusive<i32>,
    base_total: f64,
    schedule: &[f64],
    reference_baseline: f64,
) -> (Vec<YearDelta>, Vec<i32>) {
    let scale = if reference_baseline > 0.0 {
        base_total / reference_baseline
    } else {
        0.0
    };

    let mut deltas = Vec::new();
    let mut fallback_years = Vec::new();
    for (i, year) in years.enumerate() {
        let current = totals.get(&year).copied().unwrap_or(0.0);
        let previous = totals.get(&(year - 1)).copied().unwrap_or(0.0);
        let delta = if current > 0.0 && previous > 0.0 {
            current - previous
        } else {
            fallback_years.push(year);
            schedule.get(i).copied().unwrap_or(0.0) * scale
        };
        deltas.push(YearDelta { year, delta });
    }
    (deltas, fallback_years)
}
