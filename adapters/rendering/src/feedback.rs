use ninja_puzzles_core::GameKind;

const CODE_BREAKER_SUCCESS: &[&str] = &[
    "Amazing work! You cracked the code!",
    "Excellent! You're a natural code breaker!",
    "Perfect! Your skills are impressive!",
    "Fantastic! You decoded it perfectly!",
    "Brilliant! Nothing can stop you now!",
];

const CODE_BREAKER_FAILURE: &[&str] = &[
    "Hmm, not quite right. Try again!",
    "So close! Check the pattern carefully.",
    "Almost there! Take another look.",
    "Don't give up! You can solve this!",
];

const PATTERN_MATCHER_SUCCESS: &[&str] = &[
    "Rule found! Sharp eyes, ninja!",
    "Correct! You spotted the difference!",
];

const PATTERN_MATCHER_FAILURE: &[&str] = &[
    "Not that rule. Compare both sides again!",
    "Look closer at what every box shares!",
];

const STORY_SOLVER_SUCCESS: &[&str] = &[
    "Correct! You solved the mystery word!",
    "Great reading, detective!",
];

const STORY_SOLVER_FAILURE: &[&str] = &[
    "Not quite. Read the sentence again!",
    "Think about what makes sense here!",
];

/// Feedback shown after a submission is judged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    /// The submission solved the level.
    Success(&'static str),
    /// The submission was incorrect.
    Failure(&'static str),
}

impl Feedback {
    /// Message carried by the feedback.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Success(message) | Self::Failure(message) => *message,
        }
    }
}

/// Per-game message tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedbackMessages {
    success: &'static [&'static str],
    failure: &'static [&'static str],
    victory: &'static str,
}

impl FeedbackMessages {
    /// Messages used by `game`.
    #[must_use]
    pub const fn for_game(game: GameKind) -> Self {
        match game {
            GameKind::CodeBreaker => Self {
                success: CODE_BREAKER_SUCCESS,
                failure: CODE_BREAKER_FAILURE,
                victory: "You did it! All codes cracked! You're now a Master Code Breaker!",
            },
            GameKind::PatternMatcher => Self {
                success: PATTERN_MATCHER_SUCCESS,
                failure: PATTERN_MATCHER_FAILURE,
                victory: "You did it! Every rule uncovered! You're now a Master Pattern Matcher!",
            },
            GameKind::StorySolver => Self {
                success: STORY_SOLVER_SUCCESS,
                failure: STORY_SOLVER_FAILURE,
                victory: "You did it! Every mystery word solved! You're now a Master Story Solver!",
            },
        }
    }

    /// Success feedback for the `counter`-th correct submission.
    #[must_use]
    pub fn success(&self, counter: usize) -> Feedback {
        Feedback::Success(pick(self.success, counter))
    }

    /// Failure feedback for the `counter`-th incorrect submission.
    #[must_use]
    pub fn failure(&self, counter: usize) -> Feedback {
        Feedback::Failure(pick(self.failure, counter))
    }

    /// Message shown on the victory screen.
    #[must_use]
    pub const fn victory(&self) -> &'static str {
        self.victory
    }
}

fn pick(messages: &'static [&'static str], counter: usize) -> &'static str {
    match messages.len() {
        0 => "",
        len => messages[counter % len],
    }
}
