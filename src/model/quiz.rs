use std::fmt;
use std::ops::RangeInclusive;

pub const QUESTIONS_PER_ROUND: usize = 10;
pub const FIRST_ATTEMPT_POINTS: u32 = 10;
pub const SECOND_ATTEMPT_POINTS: u32 = 5;
pub const MAX_SCORE: u32 = QUESTIONS_PER_ROUND as u32 * FIRST_ATTEMPT_POINTS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Moderate,
    Advanced,
}

impl Difficulty {
    pub fn operand_range(&self) -> RangeInclusive<i64> {
        match self {
            Difficulty::Easy => 1..=9,
            Difficulty::Moderate => 10..=99,
            Difficulty::Advanced => 1000..=9999,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
}

impl Operation {
    pub fn symbol(&self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
        }
    }

    pub fn apply(&self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Operation::Add => lhs + rhs,
            Operation::Subtract => lhs - rhs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub lhs: i64,
    pub rhs: i64,
    pub operation: Operation,
}

impl Question {
    pub fn answer(&self) -> i64 {
        self.operation.apply(self.lhs, self.rhs)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.operation.symbol(), self.rhs)
    }
}

/// Letter grade for a finished round, derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    APlus,
    A,
    B,
    C,
    D,
}

impl Rank {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 90 => Rank::APlus,
            s if s >= 80 => Rank::A,
            s if s >= 70 => Rank::B,
            s if s >= 60 => Rank::C,
            _ => Rank::D,
        }
    }

    pub fn letter(&self) -> &'static str {
        match self {
            Rank::APlus => "A+",
            Rank::A => "A",
            Rank::B => "B",
            Rank::C => "C",
            Rank::D => "D",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Rank::APlus => "Outstanding!",
            Rank::A => "Excellent!",
            Rank::B => "Good job!",
            Rank::C => "Not bad!",
            Rank::D => "Keep practicing!",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_thresholds_cover_all_scores_without_gaps() {
        for score in 0..=MAX_SCORE {
            let expected = if score >= 90 {
                Rank::APlus
            } else if score >= 80 {
                Rank::A
            } else if score >= 70 {
                Rank::B
            } else if score >= 60 {
                Rank::C
            } else {
                Rank::D
            };
            assert_eq!(Rank::from_score(score), expected, "score {}", score);
        }
    }

    #[test]
    fn rank_boundaries() {
        assert_eq!(Rank::from_score(100), Rank::APlus);
        assert_eq!(Rank::from_score(90), Rank::APlus);
        assert_eq!(Rank::from_score(89), Rank::A);
        assert_eq!(Rank::from_score(80), Rank::A);
        assert_eq!(Rank::from_score(79), Rank::B);
        assert_eq!(Rank::from_score(70), Rank::B);
        assert_eq!(Rank::from_score(69), Rank::C);
        assert_eq!(Rank::from_score(60), Rank::C);
        assert_eq!(Rank::from_score(59), Rank::D);
        assert_eq!(Rank::from_score(0), Rank::D);
    }

    #[test]
    fn rank_messages_match_grades() {
        assert_eq!(Rank::APlus.message(), "Outstanding!");
        assert_eq!(Rank::D.message(), "Keep practicing!");
        assert_eq!(format!("{}", Rank::APlus), "A+");
    }

    #[test]
    fn operations_apply_and_format() {
        let sum = Question {
            lhs: 3,
            rhs: 4,
            operation: Operation::Add,
        };
        assert_eq!(sum.answer(), 7);
        assert_eq!(format!("{}", sum), "3 + 4");

        let diff = Question {
            lhs: 2,
            rhs: 9,
            operation: Operation::Subtract,
        };
        assert_eq!(diff.answer(), -7);
        assert_eq!(format!("{}", diff), "2 - 9");
    }

    #[test]
    fn operand_ranges_per_difficulty() {
        assert_eq!(Difficulty::Easy.operand_range(), 1..=9);
        assert_eq!(Difficulty::Moderate.operand_range(), 10..=99);
        assert_eq!(Difficulty::Advanced.operand_range(), 1000..=9999);
    }
}
