use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::enums::Dimension;

/// Atomic fact of the market dataset: one combination of year, geography and
/// segment values with its measures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketFact {
    pub record_id: u64,
    pub year: i32,
    pub region: String,
    /// Always one of the countries of `region` (see `geography`)
    pub country: String,

    pub insurance_type: String,
    pub plan_type: String,
    pub coverage_type: String,
    pub coverage_option: String,
    pub enterprise_size: String,
    pub product_type: String,
    pub payor_type: String,
    pub distribution_channel: String,

    /// Descriptive only, never aggregated
    pub brand: String,
    pub company: String,

    pub price: f64,
    pub volume_units: u64,
    pub enrollment_count: u64,
    pub revenue: f64,
    /// Monetary value in base currency units; divided by 1000 for US$ million
    pub market_value_usd: f64,
    pub market_share_pct: f64,
    pub cagr: f64,
    pub yoy_growth: f64,
}

/// Value of a fact under one dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionValue<'a> {
    Year(i32),
    Text(&'a str),
}

impl MarketFact {
    pub fn dimension_value(&self, dimension: Dimension) -> DimensionValue<'_> {
        match dimension {
            Dimension::Year => DimensionValue::Year(self.year),
            Dimension::Region => DimensionValue::Text(&self.region),
            Dimension::Country => DimensionValue::Text(&self.country),
            Dimension::InsuranceType => DimensionValue::Text(&self.insurance_type),
            Dimension::PlanType => DimensionValue::Text(&self.plan_type),
            Dimension::CoverageType => DimensionValue::Text(&self.coverage_type),
            Dimension::CoverageOption => DimensionValue::Text(&self.coverage_option),
            Dimension::EnterpriseSize => DimensionValue::Text(&self.enterprise_size),
            Dimension::ProductType => DimensionValue::Text(&self.product_type),
            Dimension::PayorType => DimensionValue::Text(&self.payor_type),
            Dimension::DistributionChannel => DimensionValue::Text(&self.distribution_channel),
        }
    }

    /// Category label of this fact for grouping (empty string when missing)
    pub fn category_key(&self, dimension: Dimension) -> Cow<'_, str> {
        match self.dimension_value(dimension) {
            DimensionValue::Year(year) => Cow::Owned(year.to_string()),
            DimensionValue::Text(text) => Cow::Borrowed(text),
        }
    }
}
