use contracts::domain::a001_market_fact::{geography::REGION_COUNTRIES, MarketFact};

use crate::shared::config::DataSourceConfig;
use crate::shared::error::AnalyticsError;

/// Source of the fact table
pub trait FactGenerator: Send + Sync {
    fn generate(&self) -> Result<Vec<MarketFact>, AnalyticsError>;
}

const INSURANCE_TYPES: &[&str] = &["Self-Funded (Employer-Sponsored)", "Fully-Insured Plans"];
const PLAN_TYPES: &[&str] = &[
    "Health Maintenance Organization (HMO)",
    "Preferred Provider Organization (PPO)",
    "Exclusive Provider Organization (EPO)",
    "Point of Service (POS)",
    "High-Deductible Health Plans (HDHPs)",
];
const COVERAGE_TYPES: &[&str] = &[
    "Inpatient Coverage",
    "Outpatient Coverage",
    "Dental & Vision Coverage",
    "Maternity & Newborn Care Coverage",
    "Prescription Drug Coverage",
    "Other (e.g. Mental Health & Wellness Coverage)",
];
const COVERAGE_OPTIONS: &[&str] = &[
    "Individual Coverage (Employee-Only)",
    "Family Coverage (Employee + Dependents such as Spouse Children Parents)",
];
const ENTERPRISE_SIZES: &[&str] = &["Small and Medium Enterprises", "Large Enterprises"];
const PRODUCT_TYPES: &[&str] = &[
    "Contributory Plans (Employer + Employee Premium Share)",
    "Non-Contributory Plans (Employer-Paid)",
];
const PAYOR_TYPES: &[&str] = &["Private Insurers", "Public Insurers"];
const DISTRIBUTION_CHANNELS: &[&str] = &[
    "Direct Sales (Insurer to Employer)",
    "Agents and Brokers",
    "Bancassurance",
    "Online Platforms and Digital Channels",
];
const BRANDS: &[&str] = &[
    "Aetna",
    "UnitedHealth",
    "Cigna",
    "Anthem",
    "Humana",
    "WellCare",
    "Centene",
];
const COMPANIES: &[&str] = &[
    "Aetna Inc",
    "UnitedHealth Group",
    "Cigna Corporation",
    "Anthem Inc",
    "Humana Inc",
    "WellCare Group",
    "Centene Corporation",
];

const FIRST_RECORD_ID: u64 = 100_000;

/// (price, volume, cagr)
fn insurance_multiplier(insurance_type: &str) -> (f64, f64, f64) {
    match insurance_type {
        "Fully-Insured Plans" => (1.1, 0.9, 0.95),
        _ => (1.0, 1.1, 1.1),
    }
}

/// (price, volume)
fn plan_multiplier(plan_type: &str) -> (f64, f64) {
    match plan_type {
        "Health Maintenance Organization (HMO)" => (0.85, 1.2),
        "Preferred Provider Organization (PPO)" => (1.1, 1.0),
        "Exclusive Provider Organization (EPO)" => (0.95, 1.05),
        "Point of Service (POS)" => (1.0, 0.9),
        "High-Deductible Health Plans (HDHPs)" => (0.8, 1.3),
        _ => (1.0, 1.0),
    }
}

fn enterprise_size_volume(size: &str) -> f64 {
    match size {
        "Large Enterprises" => 1.5,
        _ => 1.3,
    }
}

/// (volume, market share)
fn region_multiplier(region: &str) -> (f64, f64) {
    match region {
        "North America" => (1.6, 1.5),
        "Europe" => (1.4, 1.3),
        "Asia Pacific" => (1.9, 1.6),
        "Latin America" => (1.1, 0.9),
        _ => (1.0, 1.0),
    }
}

fn payor_multiplier(payor_type: &str) -> f64 {
    if payor_type == "Private Insurers" {
        1.2
    } else {
        0.95
    }
}

fn brand_premium(brand_index: usize) -> f64 {
    0.9 + (brand_index % 3) as f64 * 0.35
}

fn round_cents(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Linear-congruential sequence of the demo dataset:
/// `seed = (seed * 9301 + 49297) % 233280`, yielding `seed / 233280`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    const MULTIPLIER: u64 = 9301;
    const INCREMENT: u64 = 49297;
    const MODULUS: u64 = 233_280;

    pub fn new(seed: u64) -> Self {
        Self {
            state: seed % Self::MODULUS,
        }
    }

    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * Self::MULTIPLIER + Self::INCREMENT) % Self::MODULUS;
        self.state as f64 / Self::MODULUS as f64
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> (usize, &'a str) {
        let index = ((self.next_f64() * items.len() as f64).floor() as usize).min(items.len() - 1);
        (index, items[index])
    }
}

/// Deterministic synthetic dataset: the full cartesian product of years,
/// geography and the segment vocabularies.
#[derive(Debug, Clone)]
pub struct SyntheticGenerator {
    pub first_year: i32,
    pub last_year: i32,
    pub seed: u64,
}

impl SyntheticGenerator {
    pub fn from_config(config: &DataSourceConfig) -> Self {
        Self {
            first_year: config.first_year,
            last_year: config.last_year,
            seed: config.seed,
        }
    }
}

impl FactGenerator for SyntheticGenerator {
    fn generate(&self) -> Result<Vec<MarketFact>, AnalyticsError> {
        if self.first_year > self.last_year {
            return Err(AnalyticsError::InvalidYearWindow {
                start: self.first_year,
                end: self.last_year,
            });
        }

        let mut rng = SeededRandom::new(self.seed);
        let mut record_id = FIRST_RECORD_ID;
        let mut data = Vec::new();

        for year in self.first_year..=self.last_year {
            let years_since_start = (year - 2023) as f64;

            for (region, countries) in REGION_COUNTRIES {
                let (region_volume, region_share) = region_multiplier(region);

                for country in countries.iter() {
                    for insurance_type in INSURANCE_TYPES {
                        let (ins_price, ins_volume, ins_cagr) = insurance_multiplier(insurance_type);

                        for plan_type in PLAN_TYPES {
                            let (plan_price, plan_volume) = plan_multiplier(plan_type);

                            for coverage_type in COVERAGE_TYPES {
                                for coverage_option in COVERAGE_OPTIONS {
                                    for enterprise_size in ENTERPRISE_SIZES {
                                        let size_volume = enterprise_size_volume(enterprise_size);

                                        for product_type in PRODUCT_TYPES {
                                            for payor_type in PAYOR_TYPES {
                                                let payor_mult = payor_multiplier(payor_type);

                                                // Draw order matters for reproducibility
                                                let (_, distribution_channel) =
                                                    rng.pick(DISTRIBUTION_CHANNELS);
                                                let (brand_index, brand) = rng.pick(BRANDS);
                                                let (_, company) = rng.pick(COMPANIES);

                                                let base_price = 50.0 + rng.next_f64() * 450.0;
                                                let price = base_price
                                                    * ins_price
                                                    * plan_price
                                                    * payor_mult
                                                    * (1.0 + years_since_start * 0.03);

                                                let base_volume = 5000.0 + rng.next_f64() * 45000.0;
                                                let enrollment_count = (base_volume
                                                    * region_volume
                                                    * ins_volume
                                                    * plan_volume
                                                    * size_volume
                                                    * (1.0 + years_since_start * 0.06))
                                                    .floor()
                                                    .max(0.0)
                                                    as u64;

                                                let volume_units =
                                                    (enrollment_count as f64 * 0.8).floor() as u64;
                                                let revenue = price * enrollment_count as f64;
                                                let market_value_usd =
                                                    revenue * (0.85 + rng.next_f64() * 0.3);

                                                let base_market_share =
                                                    0.5 + rng.next_f64() * 4.5;
                                                let market_share_pct = base_market_share
                                                    * region_share
                                                    * brand_premium(brand_index);

                                                let cagr = (3.0 + rng.next_f64() * 8.0) * ins_cagr;
                                                let yoy_growth = 2.0 + rng.next_f64() * 10.0;

                                                data.push(MarketFact {
                                                    record_id,
                                                    year,
                                                    region: region.to_string(),
                                                    country: country.to_string(),
                                                    insurance_type: insurance_type.to_string(),
                                                    plan_type: plan_type.to_string(),
                                                    coverage_type: coverage_type.to_string(),
                                                    coverage_option: coverage_option.to_string(),
                                                    enterprise_size: enterprise_size.to_string(),
                                                    product_type: product_type.to_string(),
                                                    payor_type: payor_type.to_string(),
                                                    distribution_channel: distribution_channel
                                                        .to_string(),
                                                    brand: brand.to_string(),
                                                    company: company.to_string(),
                                                    price: round_cents(price),
                                                    volume_units,
                                                    enrollment_count,
                                                    revenue: round_cents(revenue),
                                                    market_value_usd: round_cents(market_value_usd),
                                                    market_share_pct: round_cents(market_share_pct),
                                                    cagr: round_cents(cagr),
                                                    yoy_growth: round_cents(yoy_growth),
                                                });

                                                record_id += 1;
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        Ok(data)
    }
}
