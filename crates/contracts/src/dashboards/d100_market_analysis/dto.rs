use serde::{Deserialize, Serialize};

use crate::enums::MetricMode;
use crate::shared::series::{GroupedTable, RegionCountryShare};

/// Standard market analysis tab
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketAnalysisResponse {
    pub mode: MetricMode,
    /// "Market Size (US$ Million)" / "Market Volume (Units)"
    pub metric_label: String,
    /// Number of facts left after filtering
    pub fact_count: usize,
    pub kpi: MarketKpi,

    // Grouped bar charts
    pub product_type: GroupedTable,
    pub insurance_type: GroupedTable,
    pub plan_type: GroupedTable,
    pub coverage_type: GroupedTable,
    pub region: GroupedTable,

    /// Country share within region, per year
    pub region_country_percentage: Vec<RegionCountryShare>,

    // Year-wise share analysis (stacked, zero segments pruned)
    pub insurance_type_share: GroupedTable,
    pub plan_type_share: GroupedTable,
    pub coverage_type_share: GroupedTable,
    pub distribution_channel_share: GroupedTable,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketKpi {
    /// Raw total of the metric (0 when nothing matched)
    pub total_value: f64,
    /// "1,234.5M", "12.3K Units" or "N/A"
    pub total_value_text: String,
}
