use serde::{Deserialize, Serialize};

/// Filterable / groupable dimensions of a market fact.
///
/// The set is closed: aggregation selects a category by naming one of these
/// variants instead of passing an extractor function around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Year,
    Region,
    Country,
    InsuranceType,
    PlanType,
    CoverageType,
    CoverageOption,
    EnterpriseSize,
    ProductType,
    PayorType,
    DistributionChannel,
}

impl Dimension {
    /// Field code used by filter controls
    pub fn code(&self) -> &'static str {
        match self {
            Dimension::Year => "year",
            Dimension::Region => "region",
            Dimension::Country => "country",
            Dimension::InsuranceType => "insuranceType",
            Dimension::PlanType => "planType",
            Dimension::CoverageType => "coverageType",
            Dimension::CoverageOption => "coverageOption",
            Dimension::EnterpriseSize => "enterpriseSize",
            Dimension::ProductType => "productType",
            Dimension::PayorType => "payorType",
            Dimension::DistributionChannel => "distributionChannel",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Dimension::Year => "Year",
            Dimension::Region => "Region",
            Dimension::Country => "Country",
            Dimension::InsuranceType => "Insurance Type",
            Dimension::PlanType => "Plan Type",
            Dimension::CoverageType => "Coverage Type",
            Dimension::CoverageOption => "Coverage Option",
            Dimension::EnterpriseSize => "Enterprise Size",
            Dimension::ProductType => "Product Type",
            Dimension::PayorType => "Payor Type",
            Dimension::DistributionChannel => "Distribution Channel",
        }
    }

    pub fn all() -> Vec<Dimension> {
        vec![
            Dimension::Year,
            Dimension::Region,
            Dimension::Country,
            Dimension::InsuranceType,
            Dimension::PlanType,
            Dimension::CoverageType,
            Dimension::CoverageOption,
            Dimension::EnterpriseSize,
            Dimension::ProductType,
            Dimension::PayorType,
            Dimension::DistributionChannel,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|d| d.code() == code)
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
