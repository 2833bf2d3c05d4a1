use std::{fmt, fs, io, path::Path};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::joke::Joke;

pub const DEFAULT_JOKES_FILE: &str = "randomJokes.txt";

/// All jokes known to the program, parsed once at startup.
#[derive(Debug, Clone, Default)]
pub struct JokeStore {
    jokes: Vec<Joke>,
}

impl JokeStore {
    pub fn load(path: &Path) -> Result<Self, JokeLoadError> {
        let text = fs::read_to_string(path)
            .map_err(|err| JokeLoadError::Io(path.display().to_string(), err))?;
        let store = Self::parse(&text);
        log::info!("loaded {} joke(s) from {}", store.len(), path.display());
        Ok(store)
    }

    pub fn parse(text: &str) -> Self {
        Self {
            jokes: text.lines().filter_map(parse_line).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }

    pub fn jokes(&self) -> &[Joke] {
        &self.jokes
    }

    pub fn random(&self, rng: &mut impl Rng) -> Option<&Joke> {
        self.jokes.choose(rng)
    }
}

/// One joke per line, setup and punchline separated by the first '?'.
/// The setup keeps its question mark; lines without one are skipped.
fn parse_line(line: &str) -> Option<Joke> {
    let (setup, punchline) = line.trim().split_once('?')?;
    Some(Joke {
        setup: format!("{}?", setup.trim()),
        punchline: punchline.trim().to_string(),
    })
}

#[derive(Debug)]
pub enum JokeLoadError {
    Io(String, io::Error),
}

impl fmt::Display for JokeLoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            JokeLoadError::Io(path, err) => {
                write!(f, "could not read joke file {}: {}", path, err)
            }
        }
    }
}

/// The joke currently on stage and whether its punchline has been delivered.
#[derive(Debug, Default)]
pub struct JokeSession {
    current: Option<Joke>,
    punchline_shown: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealError {
    NothingDrawn,
    AlreadyShown,
}

impl fmt::Display for RevealError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RevealError::NothingDrawn => write!(f, "no joke has been drawn yet"),
            RevealError::AlreadyShown => write!(f, "the punchline is already visible"),
        }
    }
}

impl JokeSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws a random joke and hides the punchline again.
    pub fn draw(&mut self, store: &JokeStore, rng: &mut impl Rng) -> Option<&Joke> {
        self.current = store.random(rng).cloned();
        self.punchline_shown = false;
        self.current.as_ref()
    }

    pub fn current(&self) -> Option<&Joke> {
        self.current.as_ref()
    }

    pub fn punchline_shown(&self) -> bool {
        self.punchline_shown
    }

    /// Delivers the punchline, at most once per draw.
    pub fn reveal(&mut self) -> Result<&str, RevealError> {
        if self.current.is_none() {
            return Err(RevealError::NothingDrawn);
        }
        if self.punchline_shown {
            return Err(RevealError::AlreadyShown);
        }
        self.punchline_shown = true;
        match &self.current {
            Some(joke) => Ok(&joke.punchline),
            None => Err(RevealError::NothingDrawn),
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.punchline_shown = false;
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn parsing_yields_one_pair_per_valid_line() {
        let store = JokeStore::parse(
            "Why did the chicken cross the road? To get to the other side.\n\
             \n\
             this line has no delimiter\n\
             What do you call a fish with no eyes? A fsh!\n",
        );
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn split_happens_at_the_first_question_mark() {
        let store = JokeStore::parse("Why? Because? Obviously.");
        assert_eq!(
            store.jokes()[0],
            Joke {
                setup: "Why?".to_string(),
                punchline: "Because? Obviously.".to_string(),
            }
        );
    }

    #[test]
    fn setup_keeps_its_question_mark_and_halves_are_trimmed() {
        let store = JokeStore::parse("  What is brown and sticky  ?   A stick!  ");
        assert_eq!(
            store.jokes()[0],
            Joke {
                setup: "What is brown and sticky?".to_string(),
                punchline: "A stick!".to_string(),
            }
        );
    }

    #[test]
    fn lines_without_delimiter_are_ignored() {
        let store = JokeStore::parse("no setup here\nnor here");
        assert!(store.is_empty());
    }

    #[test]
    fn random_draw_on_empty_store_is_none() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(JokeStore::empty().random(&mut rng).is_none());

        let mut session = JokeSession::new();
        assert!(session.draw(&JokeStore::empty(), &mut rng).is_none());
    }

    #[test]
    fn reveal_requires_a_draw() {
        let mut session = JokeSession::new();
        assert_eq!(session.reveal(), Err(RevealError::NothingDrawn));
    }

    #[test]
    fn punchline_reveals_at_most_once_per_draw() {
        let store = JokeStore::parse("Knock knock, who's there? Nobody.");
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = JokeSession::new();

        session.draw(&store, &mut rng);
        assert_eq!(session.reveal(), Ok("Nobody."));
        assert_eq!(session.reveal(), Err(RevealError::AlreadyShown));

        // A fresh draw arms the punchline again.
        session.draw(&store, &mut rng);
        assert!(!session.punchline_shown());
        assert_eq!(session.reveal(), Ok("Nobody."));
    }

    #[test]
    fn clear_resets_the_stage() {
        let store = JokeStore::parse("Setup? Punchline");
        let mut rng = StdRng::seed_from_u64(2);
        let mut session = JokeSession::new();

        session.draw(&store, &mut rng);
        session.clear();
        assert!(session.current().is_none());
        assert_eq!(session.reveal(), Err(RevealError::NothingDrawn));
    }
}
