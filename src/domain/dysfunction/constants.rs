//! Coefficient tables for the dysfunction cost formula.
//!
//! Every coefficient and threshold used by the engine is defined here, once.
//! The values are calibrated together and asserted by tests; changing one in
//! isolation invalidates the others.

use rust_decimal::Decimal;

/// Version tag stamped into every calculation result.
pub const FORMULA_VERSION: &str = "4.0.0";

/// Research-derived cost coefficients for components C1-C6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostCoefficients {
    /// C1, productivity loss (Gallup Q12).
    pub productivity: Decimal,
    /// C2, rework (Love et al. 2010).
    pub rework: Decimal,
    /// C3, turnover (Boushey & Glynn 2012, median across positions).
    pub turnover: Decimal,
    /// C4, opportunity cost.
    pub opportunity: Decimal,
    /// C5, coordination overhead.
    pub overhead: Decimal,
    /// C6 ceiling, actively disengaged workforce (Gallup).
    pub disengagement_max: Decimal,
}

pub const COST_COEFFICIENTS: CostCoefficients = CostCoefficients {
    productivity: Decimal::from_parts(25, 0, 0, false, 2),
    rework: Decimal::from_parts(10, 0, 0, false, 2),
    turnover: Decimal::from_parts(21, 0, 0, false, 2),
    opportunity: Decimal::from_parts(15, 0, 0, false, 2),
    overhead: Decimal::from_parts(12, 0, 0, false, 2),
    disengagement_max: Decimal::from_parts(18, 0, 0, false, 2),
};

/// Fixed 12% reduction applied to the component subtotal.
pub const OVERLAP_DISCOUNT: Decimal = Decimal::from_parts(88, 0, 0, false, 2);

/// Hard ceiling on the final cost, as a multiple of payroll.
pub const TCD_UPPER_BOUND_MULTIPLIER: Decimal = Decimal::from_parts(35, 0, 0, false, 1);

/// Driver score scale.
pub const DRIVER_MIN: Decimal = Decimal::ONE;
pub const DRIVER_MAX: Decimal = Decimal::from_parts(7, 0, 0, false, 0);
pub const DRIVER_RANGE: Decimal = Decimal::from_parts(6, 0, 0, false, 0);

/// Sum of two inverted driver scores at their worst (6 + 6).
pub const PAIR_INVERSION_MAX: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Largest accepted payroll. Keeps every intermediate product exactly representable.
pub const PAYROLL_MAX: Decimal = Decimal::from_parts(0xA764_0000, 0x0DE0_B6B3, 0, false, 0);

/// Team size efficiency thresholds, η(N).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamSizeThresholds {
    /// Teams below this size are understaffed.
    pub understaffed_below: u32,
    /// Upper bound of the optimal range (inclusive).
    pub optimal_max: u32,
    pub understaffed_factor: Decimal,
    pub overstaffed_per_person: Decimal,
}

pub const TEAM_SIZE_THRESHOLDS: TeamSizeThresholds = TeamSizeThresholds {
    understaffed_below: 5,
    optimal_max: 12,
    understaffed_factor: Decimal::from_parts(12, 0, 0, false, 1),
    overstaffed_per_person: Decimal::from_parts(2, 0, 0, false, 2),
};

/// Engagement classification and sigmoid parameters (Kahn 1990, Gallup Q12).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngagementThresholds {
    pub engaged: Decimal,
    pub not_engaged: Decimal,
    pub sigmoid_midpoint: Decimal,
    pub sigmoid_steepness: Decimal,
}

pub const ENGAGEMENT_THRESHOLDS: EngagementThresholds = EngagementThresholds {
    engaged: Decimal::from_parts(55, 0, 0, false, 1),
    not_engaged: Decimal::from_parts(35, 0, 0, false, 1),
    sigmoid_midpoint: Decimal::from_parts(4, 0, 0, false, 0),
    sigmoid_steepness: Decimal::from_parts(2, 0, 0, false, 0),
};

/// Revenue to payroll ratio bounds.
pub const BUSINESS_VALUE_MIN: Decimal = Decimal::ONE;
pub const BUSINESS_VALUE_MAX: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Correlated driver pair tolerances and the resulting penalty curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GamingDetection {
    pub trust_psych_tolerance: Decimal,
    pub comm_coord_tolerance: Decimal,
    pub goal_cognition_tolerance: Decimal,
    /// Anomaly total above which the penalty starts.
    pub anomaly_threshold: Decimal,
    /// Penalty per anomaly point above the threshold.
    pub penalty_rate: Decimal,
    pub max_penalty: Decimal,
}

pub const GAMING_DETECTION: GamingDetection = GamingDetection {
    trust_psych_tolerance: Decimal::from_parts(15, 0, 0, false, 1),
    comm_coord_tolerance: Decimal::from_parts(20, 0, 0, false, 1),
    goal_cognition_tolerance: Decimal::from_parts(25, 0, 0, false, 1),
    anomaly_threshold: Decimal::from_parts(15, 0, 0, false, 1),
    penalty_rate: Decimal::from_parts(1, 0, 0, false, 1),
    max_penalty: Decimal::from_parts(15, 0, 0, false, 1),
};

/// Maximum amplification contributed by poor 4 C's scores.
pub const FOUR_CS_MAX_AMPLIFICATION: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Confidence interval bounds around the final cost (Monte Carlo calibration).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfidenceBounds {
    pub level: Decimal,
    pub lower_multiplier: Decimal,
    pub upper_multiplier: Decimal,
}

pub const CONFIDENCE_BOUNDS: ConfidenceBounds = ConfidenceBounds {
    level: Decimal::from_parts(95, 0, 0, false, 2),
    lower_multiplier: Decimal::from_parts(75, 0, 0, false, 2),
    upper_multiplier: Decimal::from_parts(130, 0, 0, false, 2),
};

/// Readiness weights, indexed in `Driver::ALL` order. Sum to 1.00.
///
/// Trust (Costa & Anderson 2011), Psychological Safety (Frazier et al. 2017),
/// Communication (Marlow et al. 2018), Goal Clarity (Mathieu et al. 2008),
/// Coordination (LePine et al. 2008), Transactive Memory and Team Cognition
/// (DeChurch & Mesmer-Magnus 2010).
pub const DRIVER_WEIGHTS: [Decimal; 7] = [
    Decimal::from_parts(18, 0, 0, false, 2),
    Decimal::from_parts(17, 0, 0, false, 2),
    Decimal::from_parts(15, 0, 0, false, 2),
    Decimal::from_parts(14, 0, 0, false, 2),
    Decimal::from_parts(13, 0, 0, false, 2),
    Decimal::from_parts(12, 0, 0, false, 2),
    Decimal::from_parts(11, 0, 0, false, 2),
];

/// Decimal places kept on the readiness score.
pub const READINESS_DECIMAL_PLACES: u32 = 4;
