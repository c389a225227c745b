//! Typed single-entity lookups. A missing record is reported as `None`; only
//! failures of the store itself are errors.

pub mod accessibility;
pub mod database_info;
pub mod intersection;
pub mod line;
