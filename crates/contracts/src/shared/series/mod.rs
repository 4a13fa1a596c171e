//! Derived series consumed verbatim by the chart adapters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Grouped / stacked tables
// ---------------------------------------------------------------------------

/// Year × category table of summed metric values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupedTable {
    /// Column order for the chart legend
    pub categories: Vec<String>,
    /// One row per year, ascending
    pub rows: Vec<GroupedRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedRow {
    pub year: i32,
    /// Summed value per category; every category of the table is present
    pub values: BTreeMap<String, f64>,
}

impl GroupedRow {
    pub fn value(&self, category: &str) -> f64 {
        self.values.get(category).copied().unwrap_or(0.0)
    }

    pub fn total(&self) -> f64 {
        self.values.values().sum()
    }
}

// ---------------------------------------------------------------------------
// Percentage of total
// ---------------------------------------------------------------------------

/// Share of a country within its region for one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionCountryShare {
    pub year: i32,
    pub region: String,
    pub country: String,
    /// Percent of the region-year total (by value) or raw volume (by volume)
    pub value: f64,
    /// "2024 - Europe"
    pub year_region: String,
}

// ---------------------------------------------------------------------------
// Growth
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearValue {
    pub year: i32,
    pub value: f64,
}

/// YoY and CAGR (both in percent) of one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub year: i32,
    pub yoy: f64,
    pub cagr: f64,
}

// ---------------------------------------------------------------------------
// Waterfall
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearDelta {
    pub year: i32,
    pub delta: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentKind {
    Base,
    Increment,
    Total,
}

/// One bar of the waterfall, rendered as exactly two stacked sub-series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterfallSegment {
    pub year: i32,
    pub kind: SegmentKind,
    /// Lower stack: prior cumulative (base bar: the base total)
    pub base_portion: f64,
    /// Upper stack: this year's delta (0 for base and total bars)
    pub incremental_portion: f64,
    /// Cumulative value after this bar
    pub total_value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaterfallSeries {
    pub segments: Vec<WaterfallSegment>,
    /// Sum of all deltas
    pub total_incremental_opportunity: f64,
}

// ---------------------------------------------------------------------------
// Attractiveness
// ---------------------------------------------------------------------------

/// Raw attractiveness of a region over a year window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionAttractiveness {
    pub region: String,
    /// CAGR compressed to 0..10
    pub cagr_index: f64,
    /// Market share compressed to 0..10
    pub market_share_index: f64,
    /// End-year value minus start-year value
    pub incremental_opportunity: f64,
}
