//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `dysfunction` - Total Cost of Dysfunction engine and readiness score
//! - `analysis` - Priority matrix and training recommendations
//! - `assessment` - The stored assessment record

pub mod analysis;
pub mod assessment;
pub mod dysfunction;
pub mod foundation;
