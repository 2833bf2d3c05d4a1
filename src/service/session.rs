use crate::model::quiz::{
    Difficulty, Question, Rank, FIRST_ATTEMPT_POINTS, SECOND_ATTEMPT_POINTS,
};

/// How a submitted answer resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct { attempt: u8, points: u32 },
    /// First attempt was wrong, a second one is allowed.
    Retry,
    /// Both attempts were wrong, the question resolves with no points.
    Exhausted { correct: i64 },
}

/// One quiz round: the generated questions plus index, score and attempt state.
pub struct QuizSession {
    difficulty: Difficulty,
    questions: Vec<Question>,
    index: usize,
    score: u32,
    attempt: u8,
    resolved: bool,
}

impl QuizSession {
    pub fn new(difficulty: Difficulty, questions: Vec<Question>) -> Self {
        Self {
            difficulty,
            questions,
            index: 0,
            score: 0,
            attempt: 1,
            resolved: false,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn attempt(&self) -> u8 {
        self.attempt
    }

    pub fn question_number(&self) -> usize {
        (self.index + 1).min(self.questions.len())
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.questions.len()
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    /// Checks an answer against the current question. Returns `None` when the
    /// round is over or the question already resolved and awaits `advance`.
    pub fn submit(&mut self, answer: i64) -> Option<AnswerOutcome> {
        if self.resolved {
            return None;
        }
        let question = self.questions.get(self.index)?;

        if answer == question.answer() {
            let points = if self.attempt == 1 {
                FIRST_ATTEMPT_POINTS
            } else {
                SECOND_ATTEMPT_POINTS
            };
            self.score += points;
            self.resolved = true;
            Some(AnswerOutcome::Correct {
                attempt: self.attempt,
                points,
            })
        } else if self.attempt == 1 {
            self.attempt = 2;
            Some(AnswerOutcome::Retry)
        } else {
            self.resolved = true;
            Some(AnswerOutcome::Exhausted {
                correct: question.answer(),
            })
        }
    }

    /// Moves to the next question. Only a resolved question can be left behind.
    pub fn advance(&mut self) {
        if !self.resolved {
            return;
        }
        self.index += 1;
        self.attempt = 1;
        self.resolved = false;
    }

    pub fn rank(&self) -> Rank {
        Rank::from_score(self.score)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;
    use crate::model::quiz::{Operation, MAX_SCORE, QUESTIONS_PER_ROUND};
    use crate::service::generator::QuestionGenerator;

    fn fixed_questions() -> Vec<Question> {
        (0..QUESTIONS_PER_ROUND as i64)
            .map(|i| Question {
                lhs: i,
                rhs: 1,
                operation: Operation::Add,
            })
            .collect()
    }

    #[test]
    fn perfect_round_scores_full_marks() {
        let mut session = QuizSession::new(Difficulty::Easy, fixed_questions());
        while let Some(question) = session.current() {
            let answer = question.answer();
            assert_eq!(
                session.submit(answer),
                Some(AnswerOutcome::Correct {
                    attempt: 1,
                    points: FIRST_ATTEMPT_POINTS
                })
            );
            session.advance();
        }
        assert!(session.is_finished());
        assert_eq!(session.score(), MAX_SCORE);
        assert_eq!(session.rank(), Rank::APlus);
    }

    #[test]
    fn second_attempt_scores_half() {
        let mut session = QuizSession::new(Difficulty::Easy, fixed_questions());
        let answer = session.current().map(|q| q.answer()).unwrap();

        assert_eq!(session.submit(answer + 1), Some(AnswerOutcome::Retry));
        assert_eq!(session.attempt(), 2);
        assert_eq!(
            session.submit(answer),
            Some(AnswerOutcome::Correct {
                attempt: 2,
                points: SECOND_ATTEMPT_POINTS
            })
        );
        assert_eq!(session.score(), SECOND_ATTEMPT_POINTS);
    }

    #[test]
    fn exhausted_question_scores_nothing_and_reveals_answer() {
        let mut session = QuizSession::new(Difficulty::Easy, fixed_questions());
        let answer = session.current().map(|q| q.answer()).unwrap();

        assert_eq!(session.submit(answer + 1), Some(AnswerOutcome::Retry));
        assert_eq!(
            session.submit(answer - 1),
            Some(AnswerOutcome::Exhausted { correct: answer })
        );
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn attempt_counter_resets_after_resolution() {
        let mut session = QuizSession::new(Difficulty::Easy, fixed_questions());
        let answer = session.current().map(|q| q.answer()).unwrap();

        session.submit(answer + 1);
        session.submit(answer);
        assert_eq!(session.attempt(), 2);
        session.advance();
        assert_eq!(session.attempt(), 1);
    }

    #[test]
    fn resolved_question_cannot_be_resubmitted() {
        let mut session = QuizSession::new(Difficulty::Easy, fixed_questions());
        let answer = session.current().map(|q| q.answer()).unwrap();

        session.submit(answer);
        assert_eq!(session.submit(answer), None);
        assert_eq!(session.score(), FIRST_ATTEMPT_POINTS);
    }

    #[test]
    fn advance_requires_a_resolved_question() {
        let mut session = QuizSession::new(Difficulty::Easy, fixed_questions());
        session.advance();
        assert_eq!(session.question_number(), 1);

        let answer = session.current().map(|q| q.answer()).unwrap();
        session.submit(answer + 1);
        session.advance();
        assert_eq!(session.question_number(), 1, "a retry is not a resolution");
    }

    #[test]
    fn finished_session_rejects_submissions() {
        let mut session = QuizSession::new(Difficulty::Easy, vec![Question {
            lhs: 1,
            rhs: 1,
            operation: Operation::Add,
        }]);
        session.submit(2);
        session.advance();
        assert!(session.is_finished());
        assert_eq!(session.submit(2), None);
    }

    #[test]
    fn score_is_always_a_multiple_of_five_within_bounds() {
        let mut rng = StdRng::seed_from_u64(123);
        for seed in 0..20 {
            let questions = QuestionGenerator::seeded(seed).generate_round(Difficulty::Moderate);
            let mut session = QuizSession::new(Difficulty::Moderate, questions);
            let mut previous_score = 0;

            while !session.is_finished() {
                let answer = session.current().map(|q| q.answer()).unwrap();
                // Miss some answers on purpose, on either attempt.
                let submitted = if rng.gen_bool(0.4) { answer } else { answer + 1 };
                if session.submit(submitted) == Some(AnswerOutcome::Retry) {
                    let second = if rng.gen_bool(0.5) { answer } else { answer - 1 };
                    session.submit(second);
                }
                assert!(session.score() >= previous_score, "score must never decrease");
                previous_score = session.score();
                session.advance();
            }

            assert_eq!(session.score() % 5, 0);
            assert!(session.score() <= MAX_SCORE);
        }
    }
}
