#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Ninja Puzzles engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired session transitions, the world executes those commands
//! via its `apply` entry point, and then broadcasts [`Event`] values for
//! systems to react to deterministically. Systems consume event streams, read
//! immutable level data, and respond exclusively with new command batches.

use std::time::Duration;

use serde::{Deserialize, Serialize};

mod grid;
mod level;

pub use grid::{CellColor, CellCoord, Grid, GridError};
pub use level::{
    ClassificationPuzzle, Difficulty, Exemplar, GridExample, GridPuzzle, Level, LevelTag,
    PatternKind, Puzzle, ReferentPuzzle, SentenceExample, Shape, ShapeColor, ShapeKind,
    ShapePosition, Tutorial, TutorialContent,
};

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Ninja Puzzles.";

/// Highest number of stars a single level can award.
pub const MAX_STARS_PER_LEVEL: u32 = 3;

/// Mini-games offered by the suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameKind {
    /// Grid transformation puzzles: paint the output the hidden rule produces.
    CodeBreaker,
    /// Visual classification puzzles: name the rule separating two groups.
    PatternMatcher,
    /// Pronoun resolution puzzles: decide what a mystery word refers to.
    StorySolver,
}

impl GameKind {
    /// Every game in menu order.
    pub const ALL: [GameKind; 3] = [Self::CodeBreaker, Self::PatternMatcher, Self::StorySolver];

    /// Stable machine-readable label used on the command line and in transfer codes.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CodeBreaker => "code-breaker",
            Self::PatternMatcher => "pattern-matcher",
            Self::StorySolver => "story-solver",
        }
    }

    /// Resolves a game from its [`GameKind::label`].
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|game| game.label() == label)
    }

    /// Title displayed on the game menu.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::CodeBreaker => "CODE BREAKER",
            Self::PatternMatcher => "PATTERN MATCHER",
            Self::StorySolver => "STORY SOLVER",
        }
    }

    /// One-line description displayed beneath the menu title.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::CodeBreaker => "Crack visual patterns and transform grids",
            Self::PatternMatcher => "Find the rule that separates two groups",
            Self::StorySolver => "Figure out what mystery words mean",
        }
    }

    /// Pause between a correct submission and the resulting level advance.
    ///
    /// Adapters use the pause to play a success animation before the world
    /// moves on.
    #[must_use]
    pub const fn success_delay(self) -> Duration {
        match self {
            Self::CodeBreaker => Duration::from_millis(1_500),
            Self::PatternMatcher | Self::StorySolver => Duration::from_millis(800),
        }
    }
}

/// Screen the session currently presents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Title screen shown before a playthrough begins.
    Welcome,
    /// Tutorial dialog explaining the upcoming pattern.
    Dialog,
    /// A level is in play and accepts submissions.
    Playing,
    /// Every level has been solved.
    Victory,
}

/// Zero-based position of a level within a game's level sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LevelIndex(u32);

impl LevelIndex {
    /// Creates a new level index with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the index.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Index of the level that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// Zero-based position of a tutorial script within a game's tutorial sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TutorialIndex(u32);

impl TutorialIndex {
    /// Creates a new tutorial index with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the index.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Stable, one-based identifier authored alongside each level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LevelId(u32);

impl LevelId {
    /// Creates a new level identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Outcome of judging a submission against a level's answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The submission matches the level's answer exactly.
    Correct,
    /// The submission differs from the level's answer.
    Incorrect,
}

impl Verdict {
    /// Converts a boolean comparison result into a verdict.
    #[must_use]
    pub const fn from_match(matches: bool) -> Self {
        if matches {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }

    /// Reports whether the verdict is [`Verdict::Correct`].
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Stars awarded for solving a level after the given number of failed attempts.
///
/// A first-try solve earns three stars, a second-try solve two, and any later
/// solve one.
#[must_use]
pub const fn stars_for_attempts(attempts: u32) -> u32 {
    match attempts {
        0 => 3,
        1 => 2,
        _ => 1,
    }
}

/// Commands that express all permissible session transitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Leaves the welcome screen and opens the first tutorial dialog.
    StartGame,
    /// Dismisses the active tutorial dialog and begins play.
    AcknowledgeTutorial,
    /// Reports the verdict a validator reached for the level in play.
    ResolveSubmission {
        /// Level the submission was judged against.
        level: LevelIndex,
        /// Result of the comparison.
        verdict: Verdict,
    },
    /// Advances the deferred-transition clock by the provided delta time.
    Tick {
        /// Duration of time that elapsed since the previous tick.
        dt: Duration,
    },
    /// Abandons the playthrough and returns to the welcome screen.
    Restart,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Indicates that the deferred-transition clock advanced.
    TimeAdvanced {
        /// Duration of time that elapsed in the tick.
        dt: Duration,
    },
    /// Announces that the session moved to a new phase.
    PhaseChanged {
        /// Phase active before the transition.
        from: Phase,
        /// Phase active after the transition.
        to: Phase,
    },
    /// Announces that a tutorial dialog is now on screen.
    TutorialShown {
        /// Tutorial script being presented.
        tutorial: TutorialIndex,
    },
    /// Announces that a level became playable with a fresh attempt counter.
    LevelStarted {
        /// Level that is now in play.
        level: LevelIndex,
    },
    /// Confirms that a correct submission solved the level.
    SubmissionAccepted {
        /// Level that was solved.
        level: LevelIndex,
        /// Stars earned for the solve.
        stars_awarded: u32,
        /// Running star total after the award.
        total_stars: u32,
    },
    /// Reports that an incorrect submission was recorded.
    SubmissionRejected {
        /// Level the submission targeted.
        level: LevelIndex,
        /// Failed attempts accumulated on the level so far.
        attempts: u32,
    },
    /// Announces that a level advance is queued behind the success delay.
    AdvanceScheduled {
        /// Level whose completion triggered the advance.
        level: LevelIndex,
        /// Time remaining before the advance applies.
        delay: Duration,
    },
    /// Reports that a queued advance fired after the session had moved on.
    AdvanceDiscarded {
        /// Level the discarded advance was scheduled for.
        level: LevelIndex,
    },
    /// Announces that the final level was solved.
    GameCompleted {
        /// Stars accumulated across the playthrough.
        total_stars: u32,
    },
    /// Confirms that all session progress was cleared.
    SessionReset,
    /// Reports that a command was not valid for the current session state.
    CommandRejected {
        /// Specific reason the command was ignored.
        reason: TransitionError,
    },
}

/// Reasons the world may refuse a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitionError {
    /// The command is only valid from a different phase.
    InvalidPhase {
        /// Phase the command requires.
        expected: Phase,
        /// Phase the session was in.
        actual: Phase,
    },
    /// The submission targeted a level that is not in play.
    LevelMismatch {
        /// Level currently in play.
        expected: LevelIndex,
        /// Level named by the submission.
        received: LevelIndex,
    },
    /// The level is already solved and waiting for its advance to apply.
    AdvancePending {
        /// Level awaiting its advance.
        level: LevelIndex,
    },
}

/// Immutable, serializable representation of the session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Screen currently presented.
    pub phase: Phase,
    /// Level in play or about to be played.
    pub level: LevelIndex,
    /// Tutorial most recently selected for presentation.
    pub tutorial: TutorialIndex,
    /// Stars accumulated across the playthrough.
    pub stars: u32,
    /// Failed attempts on the current level.
    pub attempts: u32,
}

impl SessionSnapshot {
    /// Snapshot of a session that has not started yet.
    #[must_use]
    pub const fn fresh() -> Self {
        Self {
            phase: Phase::Welcome,
            level: LevelIndex::new(0),
            tutorial: TutorialIndex::new(0),
            stars: 0,
            attempts: 0,
        }
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::fresh()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        stars_for_attempts, GameKind, LevelIndex, Phase, SessionSnapshot, TransitionError,
        TutorialIndex, Verdict,
    };
    use serde::{de::DeserializeOwned, Serialize};

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn star_award_depends_only_on_attempts() {
        assert_eq!(stars_for_attempts(0), 3);
        assert_eq!(stars_for_attempts(1), 2);
        for attempts in 2..50 {
            assert_eq!(stars_for_attempts(attempts), 1);
        }
        assert_eq!(stars_for_attempts(u32::MAX), 1);
    }

    #[test]
    fn game_labels_resolve_back_to_games() {
        for game in GameKind::ALL {
            assert_eq!(GameKind::from_label(game.label()), Some(game));
        }
        assert_eq!(GameKind::from_label("arc"), None);
    }

    #[test]
    fn level_index_next_saturates() {
        assert_eq!(LevelIndex::new(4).next(), LevelIndex::new(5));
        assert_eq!(LevelIndex::new(u32::MAX).next(), LevelIndex::new(u32::MAX));
    }

    #[test]
    fn verdict_from_match_maps_booleans() {
        assert!(Verdict::from_match(true).is_correct());
        assert!(!Verdict::from_match(false).is_correct());
    }

    #[test]
    fn session_snapshot_round_trips_through_bincode() {
        let snapshot = SessionSnapshot {
            phase: Phase::Dialog,
            level: LevelIndex::new(2),
            tutorial: TutorialIndex::new(1),
            stars: 7,
            attempts: 0,
        };
        assert_round_trip(&snapshot);
    }

    #[test]
    fn transition_error_round_trips_through_bincode() {
        assert_round_trip(&TransitionError::InvalidPhase {
            expected: Phase::Welcome,
            actual: Phase::Victory,
        });
    }

    #[test]
    fn fresh_snapshot_starts_on_welcome_screen() {
        let snapshot = SessionSnapshot::default();
        assert_eq!(snapshot.phase, Phase::Welcome);
        assert_eq!(snapshot.level, LevelIndex::new(0));
        assert_eq!(snapshot.tutorial, TutorialIndex::new(0));
        assert_eq!(snapshot.stars, 0);
        assert_eq!(snapshot.attempts, 0);
    }
}
