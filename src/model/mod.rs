//! Energy and cost model: usage, pricing, advice, and tenant plans.

/// Advice rule engine.
pub mod advice;
pub mod cost;
/// Chart colours and distribution slices.
pub mod palette;
pub mod tenant;
pub mod types;
pub mod usage;

pub use advice::{AdvicePolicy, AdviceRules, advise};
pub use cost::{compute_cost, pick_cheapest};
pub use tenant::{PlanMode, TenantGroup, TenantSelection, aggregate};
pub use types::{
    ApplianceSpec, CostEstimate, SourceId, TariffTable, UsageEntry, UsageResult, round2,
};
pub use usage::{compute_usage, total_kwh};
