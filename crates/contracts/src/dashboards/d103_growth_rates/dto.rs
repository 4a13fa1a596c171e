use serde::{Deserialize, Serialize};

use crate::shared::series::GrowthPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthEntityKind {
    Country,
    Region,
}

/// Growth series of a single country or region (never summed across entities)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityGrowthSeries {
    pub kind: GrowthEntityKind,
    pub name: String,
    /// "Germany (Europe)" for countries, the region name for regions
    pub label: String,
    pub points: Vec<GrowthPoint>,
}

/// YoY / CAGR tab
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowthRatesResponse {
    pub entities: Vec<EntityGrowthSeries>,
}
