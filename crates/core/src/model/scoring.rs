//
// ─── SCORING RULES ─────────────────────────────────────────────────────────────
//

/// Passing threshold (percent) used when quiz metadata does not set one.
pub const DEFAULT_PASSING_THRESHOLD: u32 = 50;

/// Resolved scoring configuration for one attempt.
///
/// Fallbacks are applied here, once, at the start of result computation —
/// not inline where the numbers are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRules {
    passing_threshold: u32,
}

impl ScoringRules {
    #[must_use]
    pub fn new(passing_threshold: u32) -> Self {
        Self { passing_threshold }
    }

    /// Resolves the threshold from quiz metadata, defaulting to
    /// [`DEFAULT_PASSING_THRESHOLD`].
    #[must_use]
    pub fn resolve(quiz_threshold: Option<u32>) -> Self {
        Self::new(quiz_threshold.unwrap_or(DEFAULT_PASSING_THRESHOLD))
    }

    #[must_use]
    pub fn passing_threshold(&self) -> u32 {
        self.passing_threshold
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self::resolve(None)
    }
}

//
// ─── RESULT SUMMARY ────────────────────────────────────────────────────────────
//

/// Outcome of a completed attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSummary {
    correct: u32,
    total: u32,
    percentage: u32,
    passed: bool,
}

impl ResultSummary {
    /// Computes the summary from the server's correct-count.
    ///
    /// The percentage rounds half up. A zero `total` yields 0%, never a
    /// division fault.
    #[must_use]
    pub fn compute(correct: u32, total: u32, rules: ScoringRules) -> Self {
        let percentage = if total == 0 {
            0
        } else {
            // round(100 * correct / total), half up, in integer arithmetic.
            let correct = u64::from(correct);
            let total = u64::from(total);
            u32::try_from((200 * correct + total) / (2 * total)).unwrap_or(u32::MAX)
        };

        Self {
            correct,
            total,
            percentage,
            passed: percentage >= rules.passing_threshold(),
        }
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn percentage(&self) -> u32 {
        self.percentage
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.passed
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_of_ten_at_seventy_passes() {
        let summary = ResultSummary::compute(7, 10, ScoringRules::new(70));
        assert_eq!(summary.percentage(), 70);
        assert!(summary.passed());
    }

    #[test]
    fn six_of_ten_at_seventy_fails() {
        let summary = ResultSummary::compute(6, 10, ScoringRules::new(70));
        assert_eq!(summary.percentage(), 60);
        assert!(!summary.passed());
    }

    #[test]
    fn zero_total_is_zero_percent_not_a_fault() {
        let summary = ResultSummary::compute(0, 0, ScoringRules::default());
        assert_eq!(summary.percentage(), 0);
        assert!(!summary.passed());
    }

    #[test]
    fn percentage_rounds_half_up() {
        // 1/8 = 12.5% -> 13
        let summary = ResultSummary::compute(1, 8, ScoringRules::default());
        assert_eq!(summary.percentage(), 13);

        // 1/3 = 33.33% -> 33
        let summary = ResultSummary::compute(1, 3, ScoringRules::default());
        assert_eq!(summary.percentage(), 33);

        // 2/3 = 66.67% -> 67
        let summary = ResultSummary::compute(2, 3, ScoringRules::default());
        assert_eq!(summary.percentage(), 67);
    }

    #[test]
    fn threshold_defaults_to_fifty() {
        let rules = ScoringRules::resolve(None);
        assert_eq!(rules.passing_threshold(), DEFAULT_PASSING_THRESHOLD);

        let summary = ResultSummary::compute(1, 2, rules);
        assert!(summary.passed());
    }

    #[test]
    fn quiz_threshold_overrides_default() {
        let rules = ScoringRules::resolve(Some(70));
        assert_eq!(rules.passing_threshold(), 70);
    }
}
