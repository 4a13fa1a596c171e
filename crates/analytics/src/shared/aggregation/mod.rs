//! Pure aggregations over filtered facts. Nothing here fails: every ratio
//! with a zero denominator evaluates to 0.

pub mod attractiveness;
pub mod growth;
pub mod grouped;
pub mod percent_of_total;
pub mod waterfall;

pub use attractiveness::attractiveness;
pub use growth::{growth_by_entity, growth_series, yearly_totals};
pub use grouped::{aggregate, aggregate_stacked};
pub use percent_of_total::percent_of_total;
pub use waterfall::{incremental_deltas, waterfall};
