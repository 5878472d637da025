//! Service layer
//!
//! Startup planning on top of a validated configuration.

pub mod sync_plan;

pub use sync_plan::{CollectionPlan, PlanningEngine, SyncPlan};
