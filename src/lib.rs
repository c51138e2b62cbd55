//! Dysfunction Cost - Team effectiveness assessment engine
//!
//! Scores a team's seven effectiveness drivers, estimates the annual Total
//! Cost of Dysfunction (TCD) from payroll, team size, industry and optional
//! revenue, and turns the result into a priority matrix and a training
//! recommendation.
//!
//! # Example
//!
//! ```
//! use dysfunction_cost::domain::dysfunction::{
//!     CalculationInput, CalculationService, RawDriverScores,
//! };
//!
//! let input = CalculationInput::new(
//!     1_000_000.0,
//!     10.0,
//!     RawDriverScores::uniform(4.0),
//!     "Technology",
//! );
//! let result = CalculationService::calculate(&input).unwrap();
//! assert!(result.tcd > rust_decimal::Decimal::ZERO);
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
