//! Analysis Module - Pure domain services built on top of the cost engine.
//!
//! # Components
//!
//! - `PriorityMatrixCalculator` - Places each driver in a CRITICAL / HIGH /
//!   MEDIUM / LOW quadrant from its gap, team impact and business value
//! - `TrainingRecommender` - Sizes training programs and their ROI against
//!   the Total Cost of Dysfunction
//!
//! All functions are pure and stateless.

mod priority_matrix;
mod training;

pub use priority_matrix::{
    DriverPriority, PriorityMatrix, PriorityMatrixCalculator, Quadrant, QuadrantCounts,
    QUADRANT_THRESHOLD,
};
pub use training::{RoiCalculation, TrainingRecommendation, TrainingRecommender, TrainingType};
