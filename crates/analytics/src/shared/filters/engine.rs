use contracts::domain::a001_market_fact::MarketFact;
use contracts::shared::filters::FilterState;

/// Does a fact pass every non-empty selection of the state
pub fn fact_matches(fact: &MarketFact, state: &FilterState) -> bool {
    state.selections.iter().all(|(dimension, selected)| {
        selected.is_empty() || {
            let value = fact.dimension_value(*dimension);
            selected.iter().any(|s| s.matches(value))
        }
    })
}

/// Subset of `facts` passing the filter state, in input order.
///
/// Dimensions with an empty selection impose no constraint. Country is only
/// restricted by an explicit country selection, never implied by regions.
pub fn filter_facts<'a>(facts: &'a [MarketFact], state: &FilterState) -> Vec<&'a MarketFact> {
    if state.is_unrestricted() {
        return facts.iter().collect();
    }
    facts.iter().filter(|f| fact_matches(f, state)).collect()
}
