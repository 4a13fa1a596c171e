//! Shared shapes of the market analytics workspace: the fact record, filter
//! state and every derived series handed to chart adapters.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
