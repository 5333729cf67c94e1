use ninja_puzzles_core::{
    CellColor, ClassificationPuzzle, Exemplar, GameKind, Grid, ReferentPuzzle, Tutorial,
};
use ninja_puzzles_system_sentence::{highlight, question, Segment};

use crate::Feedback;

/// Label of the button leaving the welcome screen.
pub const START_LABEL: &str = "START MISSION";
/// Label of the button dismissing a tutorial dialog.
pub const CONTINUE_LABEL: &str = "GOT IT!";
/// Heading of the victory screen.
pub const VICTORY_TITLE: &str = "MISSION COMPLETE!";
/// Label of the button restarting after victory.
pub const PLAY_AGAIN_LABEL: &str = "PLAY AGAIN";
/// Heading above the exemplars that follow the rule.
pub const FOLLOWS_RULE_TITLE: &str = "YES ✓";
/// Heading above the exemplars that break the rule.
pub const BREAKS_RULE_TITLE: &str = "NO ✗";
/// Question asked above the candidate rules.
pub const RULE_QUESTION: &str = "WHAT'S THE RULE?";
/// Heading of the exit confirmation.
pub const EXIT_TITLE: &str = "RETURN HOME?";
/// Warning shown in the exit confirmation.
pub const EXIT_MESSAGE: &str = "All your progress will be lost. Are you sure you want to leave?";

/// Run of sentence text, highlighted when it is the pronoun.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentenceSegment {
    /// Text to display. Highlighted pronouns are upper-cased.
    pub text: String,
    /// Whether the segment is the pronoun.
    pub highlighted: bool,
}

impl SentenceSegment {
    /// Converts a tokenized segment into display form.
    #[must_use]
    pub fn from_segment(segment: Segment<'_>) -> Self {
        match segment {
            Segment::Plain(text) => Self {
                text: text.to_owned(),
                highlighted: false,
            },
            Segment::Pronoun(text) => Self {
                text: text.to_uppercase(),
                highlighted: true,
            },
        }
    }
}

/// Splits a sentence into display segments around `pronoun`.
#[must_use]
pub fn sentence_segments(sentence: &str, pronoun: &str) -> Vec<SentenceSegment> {
    highlight(sentence, pronoun)
        .into_iter()
        .map(SentenceSegment::from_segment)
        .collect()
}

/// Variant-specific content of the play screen.
#[derive(Clone, Debug, PartialEq)]
pub enum VariantView {
    /// Grid transformation canvas.
    Grid {
        /// Grid shown as the puzzle input.
        input: Grid,
        /// Player's working grid.
        canvas: Grid,
        /// Palette entry applied by the next stroke.
        selected: CellColor,
    },
    /// Two groups of exemplars with candidate rules.
    Classification {
        /// Exemplars satisfying the rule.
        left: Vec<Exemplar>,
        /// Exemplars breaking the rule.
        right: Vec<Exemplar>,
        /// Rules in dealt order.
        choices: Vec<String>,
        /// Position of the selected rule.
        selected: Option<usize>,
    },
    /// Sentence with a highlighted pronoun and candidate referents.
    Referent {
        /// Sentence split around the pronoun.
        segments: Vec<SentenceSegment>,
        /// Question asked beneath the sentence.
        question: String,
        /// Referents in dealt order.
        choices: Vec<String>,
        /// Position of the selected referent.
        selected: Option<usize>,
    },
}

impl VariantView {
    /// Builds the classification view from a puzzle and the dealt choices.
    #[must_use]
    pub fn classification(
        puzzle: &ClassificationPuzzle,
        choices: &[String],
        selected: Option<usize>,
    ) -> Self {
        Self::Classification {
            left: puzzle.left.clone(),
            right: puzzle.right.clone(),
            choices: choices.to_vec(),
            selected,
        }
    }

    /// Builds the referent view from a puzzle and the dealt choices.
    #[must_use]
    pub fn referent(puzzle: &ReferentPuzzle, choices: &[String], selected: Option<usize>) -> Self {
        Self::Referent {
            segments: sentence_segments(&puzzle.sentence, &puzzle.pronoun),
            question: question(&puzzle.pronoun),
            choices: choices.to_vec(),
            selected,
        }
    }
}

/// Play screen content.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayingView {
    /// One-based number of the level in play.
    pub level_number: u32,
    /// Number of levels in the game.
    pub level_count: usize,
    /// Display name of the level.
    pub level_name: String,
    /// Failed attempts on the level so far.
    pub attempts: u32,
    /// Variant content.
    pub variant: VariantView,
}

/// Phase-specific body of a scene.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneBody {
    /// Title screen.
    Welcome {
        /// Banner greeting the player.
        banner: String,
        /// Short description of the game.
        tagline: &'static str,
    },
    /// Tutorial dialog.
    Dialog(Tutorial),
    /// Level in play.
    Playing(PlayingView),
    /// Completion screen.
    Victory {
        /// Message congratulating the player.
        message: &'static str,
    },
}

/// Modal drawn above the body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Overlay {
    /// Asks the player to confirm abandoning the playthrough.
    ExitConfirmation,
    /// Hint of the current level.
    Hint(String),
    /// Informational text such as help or an exported transfer code.
    Notice(String),
}

/// Scene description for one screen of a game.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Game being played.
    pub game: GameKind,
    /// Stars accumulated so far.
    pub stars: u32,
    /// Highest star total the game can award.
    pub max_stars: u32,
    /// Phase-specific content.
    pub body: SceneBody,
    /// Feedback for the most recent submission.
    pub feedback: Option<Feedback>,
    /// Modal drawn above the body.
    pub overlay: Option<Overlay>,
}

impl Scene {
    /// Creates a scene without feedback or overlay.
    #[must_use]
    pub const fn new(game: GameKind, stars: u32, max_stars: u32, body: SceneBody) -> Self {
        Self {
            game,
            stars,
            max_stars,
            body,
            feedback: None,
            overlay: None,
        }
    }

    /// Star counter formatted as shown on the victory screen.
    #[must_use]
    pub fn star_summary(&self) -> String {
        format!("{} / {} Stars", self.stars, self.max_stars)
    }
}
