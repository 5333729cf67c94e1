#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Static level and tutorial tables for every Ninja Puzzles game.
//!
//! A [`Deck`] bundles one game's ordered levels, its tutorial scripts and the
//! [`TutorialTrigger`] deciding when those scripts interrupt play. Decks can
//! only be built through [`Deck::new`], which validates the authored data, so
//! the world never has to second-guess a level it receives.

use std::collections::HashSet;

use ninja_puzzles_core::{
    ClassificationPuzzle, GameKind, GridError, Level, LevelId, LevelIndex, Puzzle,
    ReferentPuzzle, Tutorial, TutorialContent, TutorialIndex, MAX_STARS_PER_LEVEL,
};
use ninja_puzzles_system_sentence::contains_word;
use ninja_puzzles_system_tutorial::TutorialTrigger;
use thiserror::Error;

mod code_breaker;
mod pattern_matcher;
mod story_solver;

/// Exemplars shown on each side of a classification puzzle.
pub const EXEMPLARS_PER_SIDE: usize = 6;

/// Reasons authored game data may be rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A grid in the authored tables is malformed.
    #[error("malformed grid data: {0}")]
    Grid(#[from] GridError),
    /// The deck contains no levels.
    #[error("{game:?} deck contains no levels")]
    Empty {
        /// Game whose deck is empty.
        game: GameKind,
    },
    /// A level's payload belongs to another game.
    #[error("level {} is not a {expected:?} puzzle", level.get())]
    VariantMismatch {
        /// Offending level.
        level: LevelId,
        /// Game the deck belongs to.
        expected: GameKind,
    },
    /// Input and solution grids differ in size.
    #[error("level {} input is {input:?} but solution is {solution:?}", level.get())]
    DimensionMismatch {
        /// Offending level.
        level: LevelId,
        /// `(columns, rows)` of the input grid.
        input: (u32, u32),
        /// `(columns, rows)` of the solution grid.
        solution: (u32, u32),
    },
    /// The correct answer is not offered as a choice.
    #[error("level {} does not offer its correct answer as a choice", level.get())]
    MissingCorrectChoice {
        /// Offending level.
        level: LevelId,
    },
    /// The same choice is listed twice.
    #[error("level {} lists choice '{choice}' more than once", level.get())]
    DuplicateChoice {
        /// Offending level.
        level: LevelId,
        /// Repeated choice.
        choice: String,
    },
    /// The number of choices is outside the variant's allowed range.
    #[error("level {} offers {count} choices, expected {min}..={max}", level.get())]
    ChoiceCount {
        /// Offending level.
        level: LevelId,
        /// Number of choices offered.
        count: usize,
        /// Fewest choices allowed.
        min: usize,
        /// Most choices allowed.
        max: usize,
    },
    /// A classification side does not hold exactly six exemplars.
    #[error(
        "level {} has {count} exemplars on one side, expected {EXEMPLARS_PER_SIDE}",
        level.get()
    )]
    ExemplarCount {
        /// Offending level.
        level: LevelId,
        /// Number of exemplars found.
        count: usize,
    },
    /// The pronoun does not occur in its sentence as a whole word.
    #[error("level {} sentence does not contain pronoun '{pronoun}'", level.get())]
    PronounNotFound {
        /// Offending level.
        level: LevelId,
        /// Pronoun that was searched for.
        pronoun: String,
    },
    /// The number of tutorials does not match the trigger's breakpoints.
    #[error("deck has {actual} tutorials but its breakpoints require {expected}")]
    TutorialCount {
        /// Tutorials the trigger consumes.
        expected: usize,
        /// Tutorials supplied.
        actual: usize,
    },
    /// A tutorial body belongs to another game.
    #[error("tutorial {} does not match the deck's game", tutorial.get())]
    TutorialMismatch {
        /// Offending tutorial.
        tutorial: TutorialIndex,
    },
    /// A breakpoint lies beyond the last level.
    #[error("breakpoint {} lies beyond the last of {levels} levels", breakpoint.get())]
    BreakpointOutOfRange {
        /// Offending breakpoint.
        breakpoint: LevelIndex,
        /// Number of levels in the deck.
        levels: usize,
    },
}

/// Validated levels, tutorials and tutorial breakpoints of one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    game: GameKind,
    levels: Vec<Level>,
    tutorials: Vec<Tutorial>,
    trigger: TutorialTrigger,
}

impl Deck {
    /// Validates the provided data and assembles a deck.
    pub fn new(
        game: GameKind,
        levels: Vec<Level>,
        tutorials: Vec<Tutorial>,
        trigger: TutorialTrigger,
    ) -> Result<Self, CatalogError> {
        if levels.is_empty() {
            return Err(CatalogError::Empty { game });
        }

        for level in &levels {
            validate_level(game, level)?;
        }

        if tutorials.len() != trigger.tutorial_count() {
            return Err(CatalogError::TutorialCount {
                expected: trigger.tutorial_count(),
                actual: tutorials.len(),
            });
        }

        for (index, tutorial) in (0_u32..).zip(&tutorials) {
            if !tutorial_matches(game, &tutorial.content) {
                return Err(CatalogError::TutorialMismatch {
                    tutorial: TutorialIndex::new(index),
                });
            }
        }

        for &breakpoint in trigger.breakpoints() {
            let in_range = usize::try_from(breakpoint.get())
                .map_or(false, |index| index < levels.len());
            if !in_range {
                return Err(CatalogError::BreakpointOutOfRange {
                    breakpoint,
                    levels: levels.len(),
                });
            }
        }

        Ok(Self {
            game,
            levels,
            tutorials,
            trigger,
        })
    }

    /// Game the deck belongs to.
    #[must_use]
    pub const fn game(&self) -> GameKind {
        self.game
    }

    /// Levels in play order.
    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Level stored at `index`, if any.
    #[must_use]
    pub fn level(&self, index: LevelIndex) -> Option<&Level> {
        usize::try_from(index.get())
            .ok()
            .and_then(|index| self.levels.get(index))
    }

    /// Number of levels in the deck.
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Index of the final level.
    #[must_use]
    pub fn last_level(&self) -> LevelIndex {
        let last = self.levels.len().saturating_sub(1);
        LevelIndex::new(u32::try_from(last).unwrap_or(u32::MAX))
    }

    /// Tutorial scripts in presentation order.
    #[must_use]
    pub fn tutorials(&self) -> &[Tutorial] {
        &self.tutorials
    }

    /// Tutorial stored at `index`, if any.
    #[must_use]
    pub fn tutorial(&self, index: TutorialIndex) -> Option<&Tutorial> {
        usize::try_from(index.get())
            .ok()
            .and_then(|index| self.tutorials.get(index))
    }

    /// Trigger deciding when tutorials interrupt play.
    #[must_use]
    pub fn trigger(&self) -> &TutorialTrigger {
        &self.trigger
    }

    /// Highest star total a playthrough can reach.
    #[must_use]
    pub fn max_stars(&self) -> u32 {
        u32::try_from(self.levels.len())
            .unwrap_or(u32::MAX)
            .saturating_mul(MAX_STARS_PER_LEVEL)
    }
}

/// Builds the standard deck for `game`.
pub fn deck(game: GameKind) -> Result<Deck, CatalogError> {
    let (levels, tutorials) = match game {
        GameKind::CodeBreaker => (code_breaker::levels()?, code_breaker::tutorials()?),
        GameKind::PatternMatcher => (pattern_matcher::levels(), pattern_matcher::tutorials()),
        GameKind::StorySolver => (story_solver::levels(), story_solver::tutorials()),
    };
    Deck::new(game, levels, tutorials, TutorialTrigger::standard())
}

fn validate_level(game: GameKind, level: &Level) -> Result<(), CatalogError> {
    if level.puzzle.game() != game {
        return Err(CatalogError::VariantMismatch {
            level: level.id,
            expected: game,
        });
    }

    match &level.puzzle {
        Puzzle::Grid(puzzle) => {
            if !puzzle.input.same_dimensions(&puzzle.solution) {
                return Err(CatalogError::DimensionMismatch {
                    level: level.id,
                    input: puzzle.input.dimensions(),
                    solution: puzzle.solution.dimensions(),
                });
            }
            Ok(())
        }
        Puzzle::Classification(puzzle) => validate_classification(level.id, puzzle),
        Puzzle::Referent(puzzle) => validate_referent(level.id, puzzle),
    }
}

fn validate_classification(
    level: LevelId,
    puzzle: &ClassificationPuzzle,
) -> Result<(), CatalogError> {
    for side in [&puzzle.left, &puzzle.right] {
        if side.len() != EXEMPLARS_PER_SIDE {
            return Err(CatalogError::ExemplarCount {
                level,
                count: side.len(),
            });
        }
    }
    validate_choices(level, &puzzle.choices, &puzzle.correct_rule, 3, 4)
}

fn validate_referent(level: LevelId, puzzle: &ReferentPuzzle) -> Result<(), CatalogError> {
    if !contains_word(&puzzle.sentence, &puzzle.pronoun) {
        return Err(CatalogError::PronounNotFound {
            level,
            pronoun: puzzle.pronoun.clone(),
        });
    }
    validate_choices(level, &puzzle.choices, &puzzle.correct_referent, 2, 3)
}

fn validate_choices(
    level: LevelId,
    choices: &[String],
    correct: &str,
    min: usize,
    max: usize,
) -> Result<(), CatalogError> {
    if !(min..=max).contains(&choices.len()) {
        return Err(CatalogError::ChoiceCount {
            level,
            count: choices.len(),
            min,
            max,
        });
    }

    let mut seen = HashSet::new();
    for choice in choices {
        if !seen.insert(choice.as_str()) {
            return Err(CatalogError::DuplicateChoice {
                level,
                choice: choice.clone(),
            });
        }
    }

    if !seen.contains(correct) {
        return Err(CatalogError::MissingCorrectChoice { level });
    }

    Ok(())
}

fn tutorial_matches(game: GameKind, content: &TutorialContent) -> bool {
    matches!(
        (game, content),
        (GameKind::CodeBreaker, TutorialContent::GridExamples(_))
            | (GameKind::PatternMatcher, TutorialContent::ShapeExamples { .. })
            | (GameKind::StorySolver, TutorialContent::Sentence(_))
    )
}
