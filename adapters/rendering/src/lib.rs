#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Ninja Puzzles adapters.

use anyhow::Result as AnyResult;
use glam::Vec2;
use ninja_puzzles_core::{CellColor, Exemplar, ShapeColor, ShapeKind};
use std::{error::Error, fmt, time::Duration};

mod feedback;
mod scene;

pub use feedback::{Feedback, FeedbackMessages};
pub use scene::{
    sentence_segments, Overlay, PlayingView, Scene, SceneBody, SentenceSegment, VariantView,
    BREAKS_RULE_TITLE, CONTINUE_LABEL, EXIT_MESSAGE, EXIT_TITLE, FOLLOWS_RULE_TITLE,
    PLAY_AGAIN_LABEL, RULE_QUESTION, START_LABEL, VICTORY_TITLE,
};

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    /// Byte RGB values of the color.
    #[must_use]
    pub fn to_rgb_u8(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
            .map(|channel| (channel.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    /// Formats the color as a `#rrggbb` hex triplet.
    #[must_use]
    pub fn to_hex(self) -> String {
        let [red, green, blue] = self.to_rgb_u8();
        format!("#{red:02x}{green:02x}{blue:02x}")
    }
}

/// Display color of a grid palette entry.
#[must_use]
pub const fn cell_color(color: CellColor) -> Color {
    match color {
        CellColor::Empty => Color::from_rgb_u8(0xe5, 0xe7, 0xeb),
        CellColor::Red => Color::from_rgb_u8(0xef, 0x3e, 0x40),
        CellColor::Blue => Color::from_rgb_u8(0x46, 0x73, 0xb9),
        CellColor::Yellow => Color::from_rgb_u8(0xea, 0xbb, 0x5c),
        CellColor::Green => Color::from_rgb_u8(0xa7, 0xc8, 0x39),
        CellColor::Purple => Color::from_rgb_u8(0x89, 0x3f, 0x98),
    }
}

/// Display color of a shape fill.
#[must_use]
pub const fn shape_color(color: ShapeColor) -> Color {
    match color {
        ShapeColor::Red => cell_color(CellColor::Red),
        ShapeColor::Blue => cell_color(CellColor::Blue),
        ShapeColor::Yellow => cell_color(CellColor::Yellow),
        ShapeColor::Green => cell_color(CellColor::Green),
        ShapeColor::Purple => cell_color(CellColor::Purple),
        ShapeColor::Gray => Color::from_rgb_u8(0x94, 0xa3, 0xb8),
    }
}

/// Shape positioned inside an exemplar box of known side length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeLayout {
    /// Outline of the shape.
    pub kind: ShapeKind,
    /// Fill color.
    pub color: Color,
    /// Center relative to the box's top-left corner.
    pub center: Vec2,
    /// Side length of the square the shape is inscribed in.
    pub extent: f32,
    /// Clockwise rotation in radians.
    pub rotation: f32,
}

/// Maps an exemplar's percentage coordinates into a box of `side` units.
pub fn layout_exemplar(exemplar: &Exemplar, side: f32) -> Result<Vec<ShapeLayout>, RenderingError> {
    if !side.is_finite() || side <= 0.0 {
        return Err(RenderingError::InvalidBoxSide { side });
    }

    let scale = side / 100.0;
    Ok(exemplar
        .shapes
        .iter()
        .map(|shape| ShapeLayout {
            kind: shape.kind,
            color: shape_color(shape.color),
            center: Vec2::new(f32::from(shape.position.x), f32::from(shape.position.y)) * scale,
            extent: f32::from(shape.size) * scale,
            rotation: f32::from(shape.rotation.unwrap_or(0)).to_radians(),
        })
        .collect())
}

/// Input captured by a backend between two frames.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FrameInput {
    /// Line of text the player entered, if any.
    pub line: Option<String>,
}

/// Instruction returned by the scene update closure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameControl {
    /// Present the scene and wait for the next player input.
    AwaitInput,
    /// Present the scene and run another update after the duration elapses.
    WakeAfter(Duration),
    /// Present the scene one last time and stop.
    Exit,
}

/// Presentation descriptor consumed by rendering backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title printed above every frame.
    pub title: String,
    /// Scene content that should be displayed.
    pub scene: Scene,
}

impl Presentation {
    /// Constructs a new presentation descriptor.
    #[must_use]
    pub fn new<T>(title: T, scene: Scene) -> Self
    where
        T: Into<String>,
    {
        Self {
            title: title.into(),
            scene,
        }
    }
}

/// Rendering backend capable of presenting Ninja Puzzles scenes.
pub trait RenderingBackend {
    /// Runs the rendering backend until the update closure requests an exit.
    ///
    /// The provided `update_scene` closure receives the time elapsed since the
    /// previous update and the input captured by the backend, mutates the scene
    /// and tells the backend when to call it again.
    fn run<F>(self, presentation: Presentation, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) -> FrameControl;
}

/// Errors that can occur when constructing rendering descriptors.
#[derive(Debug, PartialEq)]
pub enum RenderingError {
    /// Exemplar boxes must have a positive, finite side length.
    InvalidBoxSide {
        /// Provided side length that failed validation.
        side: f32,
    },
}

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBoxSide { side } => {
                write!(f, "exemplar box side must be positive (received {side})")
            }
        }
    }
}

impl Error for RenderingError {}

#[cfg(test)]
mod tests {
    use super::*;
    use ninja_puzzles_core::Shape;

    #[test]
    fn palette_matches_published_hex_values() {
        let expected = [
            (CellColor::Empty, "#e5e7eb"),
            (CellColor::Red, "#ef3e40"),
            (CellColor::Blue, "#4673b9"),
            (CellColor::Yellow, "#eabb5c"),
            (CellColor::Green, "#a7c839"),
            (CellColor::Purple, "#893f98"),
        ];

        for (color, hex) in expected {
            assert_eq!(cell_color(color).to_hex(), hex);
        }
        assert_eq!(shape_color(ShapeColor::Gray).to_hex(), "#94a3b8");
    }

    #[test]
    fn layout_scales_percentages_into_box() {
        let exemplar = Exemplar::new([
            Shape::new(ShapeKind::Circle, ShapeColor::Red, 30, 30, 50),
            Shape::new(ShapeKind::Triangle, ShapeColor::Blue, 40, 70, 25)
                .rotated(180),
        ]);

        let layout = layout_exemplar(&exemplar, 200.0).expect("positive side");

        assert_eq!(layout.len(), 2);
        assert_eq!(layout[0].center, Vec2::new(60.0, 100.0));
        assert_eq!(layout[0].extent, 60.0);
        assert_eq!(layout[0].rotation, 0.0);
        assert_eq!(layout[1].center, Vec2::new(140.0, 50.0));
        assert!((layout[1].rotation - std::f32::consts::PI).abs() < 1e-6);
        assert_eq!(layout[1].color, cell_color(CellColor::Blue));
    }

    #[test]
    fn layout_rejects_non_positive_side_without_panicking() {
        let exemplar = Exemplar::new([Shape::new(
            ShapeKind::Square,
            ShapeColor::Green,
            40,
            50,
            50,
        )]);

        assert!(matches!(
            layout_exemplar(&exemplar, 0.0),
            Err(RenderingError::InvalidBoxSide { .. })
        ));
        assert!(layout_exemplar(&exemplar, f32::NAN).is_err());
    }

    #[test]
    fn feedback_rotates_through_messages() {
        let messages = FeedbackMessages::for_game(ninja_puzzles_core::GameKind::CodeBreaker);

        assert_eq!(
            messages.success(0).message(),
            "Amazing work! You cracked the code!"
        );
        assert_eq!(messages.success(5), messages.success(0));
        assert_eq!(
            messages.failure(1),
            Feedback::Failure("So close! Check the pattern carefully.")
        );
    }
}
