use serde::{Deserialize, Serialize};

use crate::{GameKind, Grid, LevelId};

/// Transformation family practised by a Code Breaker level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// Horizontal reflection.
    Mirror,
    /// Quarter-turn clockwise rotation.
    Rotation,
    /// Color swap.
    Transformation,
}

/// Authored difficulty of a Pattern Matcher or Story Solver level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Introductory level.
    Easy,
    /// Intermediate level.
    Medium,
    /// Advanced level.
    Hard,
}

/// Classification tag attached to every level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelTag {
    /// Pattern family of a grid transformation level.
    Pattern(PatternKind),
    /// Difficulty of a multiple-choice level.
    Difficulty(Difficulty),
}

/// Outline drawn for a shape inside an exemplar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Round shape.
    Circle,
    /// Four-sided shape.
    Square,
    /// Three-sided shape.
    Triangle,
}

/// Fill color applied to a shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeColor {
    /// Red fill.
    Red,
    /// Blue fill.
    Blue,
    /// Yellow fill.
    Yellow,
    /// Green fill.
    Green,
    /// Purple fill.
    Purple,
    /// Neutral gray fill.
    Gray,
}

/// Center of a shape expressed as percentages of its exemplar box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapePosition {
    /// Horizontal offset from the left edge, `0..=100`.
    pub x: u8,
    /// Vertical offset from the top edge, `0..=100`.
    pub y: u8,
}

/// Single shape drawn inside an exemplar box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    /// Outline of the shape.
    pub kind: ShapeKind,
    /// Fill color of the shape.
    pub color: ShapeColor,
    /// Extent of the shape as a percentage of the box, `20..=60`.
    pub size: u8,
    /// Center of the shape.
    pub position: ShapePosition,
    /// Clockwise rotation in degrees, used mainly for triangles.
    pub rotation: Option<u16>,
}

impl Shape {
    /// Creates an unrotated shape centered at `(x, y)`.
    #[must_use]
    pub const fn new(kind: ShapeKind, color: ShapeColor, size: u8, x: u8, y: u8) -> Self {
        Self {
            kind,
            color,
            size,
            position: ShapePosition { x, y },
            rotation: None,
        }
    }

    /// Returns a copy of the shape rotated by `degrees`.
    #[must_use]
    pub const fn rotated(self, degrees: u16) -> Self {
        Self {
            rotation: Some(degrees),
            ..self
        }
    }
}

/// One box of shapes shown on either side of a classification puzzle.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Exemplar {
    /// Shapes drawn inside the box.
    pub shapes: Vec<Shape>,
}

impl Exemplar {
    /// Creates an exemplar from the provided shapes.
    #[must_use]
    pub fn new(shapes: impl Into<Vec<Shape>>) -> Self {
        Self {
            shapes: shapes.into(),
        }
    }
}

/// Payload of a grid transformation level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPuzzle {
    /// Grid shown to the player.
    pub input: Grid,
    /// Grid the player must paint.
    pub solution: Grid,
}

/// Payload of a visual classification level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationPuzzle {
    /// Exemplars that satisfy the rule.
    pub left: Vec<Exemplar>,
    /// Exemplars that do not satisfy the rule.
    pub right: Vec<Exemplar>,
    /// Rule separating the two sides.
    pub correct_rule: String,
    /// Candidate rules offered to the player, including the correct one.
    pub choices: Vec<String>,
}

/// Payload of a pronoun resolution level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferentPuzzle {
    /// Sentence containing the ambiguous pronoun.
    pub sentence: String,
    /// Pronoun the player must resolve.
    pub pronoun: String,
    /// Phrase the pronoun refers to.
    pub correct_referent: String,
    /// Candidate referents offered to the player, including the correct one.
    pub choices: Vec<String>,
}

/// Variant-specific payload of a level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Puzzle {
    /// Grid transformation puzzle.
    Grid(GridPuzzle),
    /// Visual classification puzzle.
    Classification(ClassificationPuzzle),
    /// Pronoun resolution puzzle.
    Referent(ReferentPuzzle),
}

impl Puzzle {
    /// Game the puzzle variant belongs to.
    #[must_use]
    pub const fn game(&self) -> GameKind {
        match self {
            Self::Grid(_) => GameKind::CodeBreaker,
            Self::Classification(_) => GameKind::PatternMatcher,
            Self::Referent(_) => GameKind::StorySolver,
        }
    }

    /// Answer choices for multiple-choice variants.
    #[must_use]
    pub fn choices(&self) -> Option<&[String]> {
        match self {
            Self::Grid(_) => None,
            Self::Classification(puzzle) => Some(&puzzle.choices),
            Self::Referent(puzzle) => Some(&puzzle.choices),
        }
    }

    /// Correct choice for multiple-choice variants.
    #[must_use]
    pub fn correct_choice(&self) -> Option<&str> {
        match self {
            Self::Grid(_) => None,
            Self::Classification(puzzle) => Some(&puzzle.correct_rule),
            Self::Referent(puzzle) => Some(&puzzle.correct_referent),
        }
    }

    /// Grid payload, when the puzzle is a grid transformation.
    #[must_use]
    pub fn as_grid(&self) -> Option<&GridPuzzle> {
        match self {
            Self::Grid(puzzle) => Some(puzzle),
            _ => None,
        }
    }
}

/// Authored puzzle instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// Stable identifier of the level.
    pub id: LevelId,
    /// Display name of the level.
    pub name: String,
    /// Pattern family or difficulty.
    pub tag: LevelTag,
    /// Hint offered on request.
    pub hint: String,
    /// Variant payload.
    pub puzzle: Puzzle,
}

/// Worked input/output pair shown in a Code Breaker tutorial.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridExample {
    /// Grid before the transformation.
    pub input: Grid,
    /// Grid after the transformation.
    pub output: Grid,
}

/// Worked sentence shown in a Story Solver tutorial.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceExample {
    /// Example sentence containing a pronoun.
    pub sentence: String,
    /// Pronoun highlighted in the sentence.
    pub pronoun: String,
    /// Phrase the pronoun refers to.
    pub answer: String,
    /// Explanation of the answer.
    pub why: String,
}

/// Variant-specific body of a tutorial script.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TutorialContent {
    /// Worked grid transformations.
    GridExamples(Vec<GridExample>),
    /// Example exemplars that do and do not follow a rule.
    ShapeExamples {
        /// Exemplars following the rule.
        left: Vec<Exemplar>,
        /// Exemplars breaking the rule.
        right: Vec<Exemplar>,
    },
    /// Worked pronoun resolution.
    Sentence(SentenceExample),
}

/// Tutorial dialog shown before a block of levels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tutorial {
    /// Heading of the dialog.
    pub title: String,
    /// Optional prose introducing the examples.
    pub explanation: Option<String>,
    /// Worked examples.
    pub content: TutorialContent,
}
