use itertools::Itertools;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::model::quiz::{Difficulty, Operation, Question, QUESTIONS_PER_ROUND};

/// Produces the random questions for a quiz round.
pub struct QuestionGenerator {
    rng: StdRng,
}

impl QuestionGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed seed, for reproducible rounds.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn random_operands(&mut self, difficulty: Difficulty) -> (i64, i64) {
        let range = difficulty.operand_range();
        (self.rng.gen_range(range.clone()), self.rng.gen_range(range))
    }

    pub fn decide_operation(&mut self) -> Operation {
        if self.rng.gen_bool(0.5) {
            Operation::Add
        } else {
            Operation::Subtract
        }
    }

    pub fn next_question(&mut self, difficulty: Difficulty) -> Question {
        let (lhs, rhs) = self.random_operands(difficulty);
        Question {
            lhs,
            rhs,
            operation: self.decide_operation(),
        }
    }

    pub fn generate_round(&mut self, difficulty: Difficulty) -> Vec<Question> {
        (0..QUESTIONS_PER_ROUND)
            .map(|_| self.next_question(difficulty))
            .collect_vec()
    }
}

impl Default for QuestionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operands_stay_within_difficulty_range() {
        let mut generator = QuestionGenerator::seeded(7);
        for difficulty in [Difficulty::Easy, Difficulty::Moderate, Difficulty::Advanced] {
            let range = difficulty.operand_range();
            for _ in 0..200 {
                let (lhs, rhs) = generator.random_operands(difficulty);
                assert!(range.contains(&lhs), "{} out of range for {}", lhs, difficulty);
                assert!(range.contains(&rhs), "{} out of range for {}", rhs, difficulty);
            }
        }
    }

    #[test]
    fn round_has_expected_question_count() {
        let mut generator = QuestionGenerator::seeded(1);
        let round = generator.generate_round(Difficulty::Easy);
        assert_eq!(round.len(), QUESTIONS_PER_ROUND);
    }

    #[test]
    fn coin_flip_produces_both_operations() {
        let mut generator = QuestionGenerator::seeded(42);
        let flips = (0..100).map(|_| generator.decide_operation()).collect_vec();
        assert!(flips.contains(&Operation::Add));
        assert!(flips.contains(&Operation::Subtract));
    }

    #[test]
    fn seeded_rounds_are_reproducible() {
        let round_a = QuestionGenerator::seeded(99).generate_round(Difficulty::Advanced);
        let round_b = QuestionGenerator::seeded(99).generate_round(Difficulty::Advanced);
        assert_eq!(round_a, round_b);
    }

    #[test]
    fn questions_answer_their_own_prompt() {
        let mut generator = QuestionGenerator::seeded(3);
        for _ in 0..50 {
            let question = generator.next_question(Difficulty::Moderate);
            assert_eq!(question.answer(), question.operation.apply(question.lhs, question.rhs));
        }
    }
}
