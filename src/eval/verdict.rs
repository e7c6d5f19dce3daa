//! Human-readable verdict for a displayed evaluation

use std::fmt;

use crate::board::Side;

/// Score margin (in men) above which one side counts as slightly better
pub const SLIGHT_EDGE: f32 = 0.6;
/// Score margin above which one side counts as winning
pub const WINNING_EDGE: f32 = 1.5;

/// Coarse assessment of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    RoughlyEqual,
    SlightlyBetter(Side),
    Winning(Side),
}

impl Verdict {
    /// Classify a Black-positive score
    ///
    /// # Example
    ///
    /// ```
    /// use shashki::eval::Verdict;
    /// use shashki::Side;
    ///
    /// assert_eq!(Verdict::from_score(0.3), Verdict::RoughlyEqual);
    /// assert_eq!(Verdict::from_score(-1.0), Verdict::SlightlyBetter(Side::White));
    /// assert_eq!(Verdict::from_score(2.0), Verdict::Winning(Side::Black));
    /// ```
    #[must_use]
    pub fn from_score(score: f32) -> Self {
        // Bands are half-open toward Black: a tie on a boundary reads in
        // Black's favor
        if score < -WINNING_EDGE {
            Verdict::Winning(Side::White)
        } else if score < -SLIGHT_EDGE {
            Verdict::SlightlyBetter(Side::White)
        } else if score < SLIGHT_EDGE {
            Verdict::RoughlyEqual
        } else if score < WINNING_EDGE {
            Verdict::SlightlyBetter(Side::Black)
        } else {
            Verdict::Winning(Side::Black)
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::RoughlyEqual => f.write_str("roughly equal"),
            Verdict::SlightlyBetter(side) => write!(f, "{side} is slightly better"),
            Verdict::Winning(side) => write!(f, "{side} is winning"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_favor_black() {
        assert_eq!(Verdict::from_score(0.6), Verdict::SlightlyBetter(Side::Black));
        assert_eq!(Verdict::from_score(-0.6), Verdict::RoughlyEqual);
        assert_eq!(Verdict::from_score(1.5), Verdict::Winning(Side::Black));
        assert_eq!(Verdict::from_score(-1.5), Verdict::SlightlyBetter(Side::White));
        assert_eq!(Verdict::from_score(-1.6), Verdict::Winning(Side::White));
        assert_eq!(Verdict::from_score(0.0), Verdict::RoughlyEqual);
        assert_eq!(Verdict::from_score(-10_000.0), Verdict::Winning(Side::White));
    }

    #[test]
    fn test_display() {
        assert_eq!(Verdict::Winning(Side::White).to_string(), "White is winning");
        assert_eq!(Verdict::RoughlyEqual.to_string(), "roughly equal");
    }
}
