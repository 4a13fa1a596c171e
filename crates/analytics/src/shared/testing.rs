//! Fact builders shared by unit tests.

use contracts::domain::a001_market_fact::MarketFact;
use contracts::enums::Dimension;

/// Fact worth `value` US$ million (and `value` units of volume)
pub fn fact(year: i32, region: &str, country: &str, value: f64) -> MarketFact {
    MarketFact {
        record_id: 0,
        year,
        region: region.to_string(),
        country: country.to_string(),
        insurance_type: "Fully-Insured Plans".to_string(),
        plan_type: "Point of Service (POS)".to_string(),
        coverage_type: "Inpatient Coverage".to_string(),
        coverage_option: "Individual Coverage (Employee-Only)".to_string(),
        enterprise_size: "Large Enterprises".to_string(),
        product_type: "Non-Contributory Plans (Employer-Paid)".to_string(),
        payor_type: "Private Insurers".to_string(),
        distribution_channel: "Agents and Brokers".to_string(),
        brand: "Aetna".to_string(),
        company: "Aetna Inc".to_string(),
        price: 100.0,
        volume_units: value.max(0.0) as u64,
        enrollment_count: value.max(0.0) as u64,
        revenue: value * 1000.0,
        market_value_usd: value * 1000.0,
        market_share_pct: 1.0,
        cagr: 5.0,
        yoy_growth: 5.0,
    }
}

/// Same fact with one text dimension replaced
pub fn with(mut fact: MarketFact, dimension: Dimension, text: &str) -> MarketFact {
    let text = text.to_string();
    match dimension {
        Dimension::Year => fact.year = text.parse().unwrap(),
        Dimension::Region => fact.region = text,
        Dimension::Country => fact.country = text,
        Dimension::InsuranceType => fact.insurance_type = text,
        Dimension::PlanType => fact.plan_type = text,
        Dimension::CoverageType => fact.coverage_type = text,
        Dimension::CoverageOption => fact.coverage_option = text,
        Dimension::EnterpriseSize => fact.enterprise_size = text,
        Dimension::ProductType => fact.product_type = text,
        Dimension::PayorType => fact.payor_type = text,
        Dimension::DistributionChannel => fact.distribution_channel = text,
    }
    fact
}

/// Facts numbered in order, as a generator would emit them
pub fn numbered(facts: Vec<MarketFact>) -> Vec<MarketFact> {
    facts
        .into_iter()
        .enumerate()
        .map(|(i, mut f)| {
            f.record_id = 100_000 + i as u64;
            f
        })
        .collect()
}
