use serde::{Deserialize, Serialize};

use super::dimension::Dimension;

/// Dashboard tab owning an independent filter state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisView {
    /// Standard segment analysis
    Main,
    /// Incremental opportunity (waterfall)
    Incremental,
    /// Market attractiveness (bubble)
    Attractiveness,
    /// YoY / CAGR growth rates
    Growth,
}

impl AnalysisView {
    /// Dimensions a filter state of this view may restrict
    pub fn dimensions(&self) -> &'static [Dimension] {
        match self {
            AnalysisView::Main => &[
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
            ],
            AnalysisView::Incremental | AnalysisView::Growth => &[
                Dimension::Region,
                Dimension::InsuranceType,
                Dimension::Country,
            ],
            AnalysisView::Attractiveness => &[Dimension::Region, Dimension::InsuranceType],
        }
    }

    pub fn accepts(&self, dimension: Dimension) -> bool {
        self.dimensions().contains(&dimension)
    }

    pub fn code(&self) -> &'static str {
        match self {
            AnalysisView::Main => "standard",
            AnalysisView::Incremental => "incremental",
            AnalysisView::Attractiveness => "attractiveness",
            AnalysisView::Growth => "yoy",
        }
    }
}
