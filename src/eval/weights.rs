//! Evaluation weights for Shashki positions
//!
//! Scores are Black-positive: Black maximizes, White minimizes.

/// Evaluation weights and score extremes
pub struct Weights;

impl Weights {
    // Terminal values
    /// Black has won (White has no pieces or is stalemated)
    pub const WIN: f32 = 10_000.0;
    /// White has won
    pub const LOSS: f32 = -10_000.0;

    // Material
    /// Value of a king on top of the piece it counts as
    pub const KING: f32 = 1.1;
    /// Extra king value while the opening lasts
    pub const OPENING_KING: f32 = 0.5;

    // Tempo
    /// Bonus for the side to move
    pub const TEMPO: f32 = 0.25;
    /// Further bonus when the side to move must capture
    pub const FORCED_CAPTURE: f32 = 0.35;

    // Territory
    /// Penalty for a man on the two ranks before promotion in the opening
    pub const ADVANCED_OPENING: f32 = 0.15;
    /// Bonus for the same man once the opening is over
    pub const ADVANCED_LATE: f32 = 0.25;
    /// Bonus for a man still guarding its back rank in the opening
    pub const BACK_RANK: f32 = 0.2;
}

