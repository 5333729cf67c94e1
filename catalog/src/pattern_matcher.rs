use ninja_puzzles_core::{
    ClassificationPuzzle, Difficulty, Exemplar, Level, LevelId, LevelTag, Puzzle, Shape,
    ShapeColor::{self, Blue, Green, Purple, Red, Yellow},
    ShapeKind, ShapePosition, Tutorial, TutorialContent,
};

const fn circle(color: ShapeColor, size: u8, x: u8, y: u8) -> Shape {
    Shape::new(ShapeKind::Circle, color, size, x, y)
}

const fn square(color: ShapeColor, size: u8, x: u8, y: u8) -> Shape {
    Shape::new(ShapeKind::Square, color, size, x, y)
}

const fn triangle(color: ShapeColor, size: u8, x: u8, y: u8, rotation: u16) -> Shape {
    Shape::new(ShapeKind::Triangle, color, size, x, y)
        .rotated(rotation)
}

/// Exemplar holding a single shape centered in its box.
fn centered(shape: Shape) -> Exemplar {
    Exemplar::new([shape])
}

fn level(
    id: u32,
    name: &str,
    difficulty: Difficulty,
    sides: (Vec<Exemplar>, Vec<Exemplar>),
    correct_rule: &str,
    choices: [&str; 4],
    hint: &str,
) -> Level {
    let (left, right) = sides;
    Level {
        id: LevelId::new(id),
        name: name.to_owned(),
        tag: LevelTag::Difficulty(difficulty),
        hint: hint.to_owned(),
        puzzle: Puzzle::Classification(ClassificationPuzzle {
            left,
            right,
            correct_rule: correct_rule.to_owned(),
            choices: choices.iter().map(|choice| (*choice).to_owned()).collect(),
        }),
    }
}

fn tutorial(title: &str, explanation: &str, left: Vec<Exemplar>, right: Vec<Exemplar>) -> Tutorial {
    Tutorial {
        title: title.to_owned(),
        explanation: Some(explanation.to_owned()),
        content: TutorialContent::ShapeExamples { left, right },
    }
}

fn shape_basics() -> Level {
    let colors = [Red, Blue, Yellow, Green, Purple, Red];
    level(
        1,
        "SHAPE BASICS",
        Difficulty::Easy,
        (
            colors
                .iter()
                .map(|&color| centered(circle(color, 40, 50, 50)))
                .collect(),
            colors
                .iter()
                .map(|&color| centered(square(color, 40, 50, 50)))
                .collect(),
        ),
        "Left has circles, Right has squares",
        [
            "Left has circles, Right has squares",
            "Left is red, Right is blue",
            "Left is large, Right is small",
            "Left has one shape, Right has many shapes",
        ],
        "Look at the shape type - what's different between the two sides?",
    )
}

fn color_match() -> Level {
    let side = |color: ShapeColor| {
        vec![
            centered(circle(color, 40, 50, 50)),
            centered(square(color, 40, 50, 50)),
            centered(triangle(color, 40, 50, 50, 0)),
            centered(circle(color, 50, 50, 50)),
            centered(square(color, 35, 50, 50)),
            centered(triangle(color, 45, 50, 50, 180)),
        ]
    };
    level(
        2,
        "COLOR MATCH",
        Difficulty::Easy,
        (side(Red), side(Blue)),
        "Left is red, Right is blue",
        [
            "Left is red, Right is blue",
            "Left has circles, Right has triangles",
            "Left is at the top, Right is at the bottom",
            "Left is large, Right is small",
        ],
        "Ignore the shapes - what color do you see on each side?",
    )
}

fn size_matters() -> Level {
    let side = |sizes: [u8; 6]| {
        vec![
            centered(circle(Red, sizes[0], 50, 50)),
            centered(square(Blue, sizes[1], 50, 50)),
            centered(triangle(Yellow, sizes[2], 50, 50, 0)),
            centered(circle(Green, sizes[3], 50, 50)),
            centered(square(Purple, sizes[4], 50, 50)),
            centered(triangle(Red, sizes[5], 50, 50, 180)),
        ]
    };
    level(
        3,
        "SIZE MATTERS",
        Difficulty::Medium,
        (side([55, 55, 55, 60, 58, 57]), side([25, 25, 25, 28, 26, 27])),
        "Left shapes are large, Right shapes are small",
        [
            "Left shapes are large, Right shapes are small",
            "Left has circles, Right has squares",
            "Left is red, Right is blue",
            "Left has many shapes, Right has one shape",
        ],
        "Compare the size of the shapes on each side!",
    )
}

fn counting_game() -> Level {
    let triple = |shape: Shape| {
        Exemplar::new([30, 50, 70].map(|x| Shape {
            position: ShapePosition { x, y: 50 },
            ..shape
        }))
    };

    level(
        4,
        "COUNTING GAME",
        Difficulty::Medium,
        (
            vec![
                centered(circle(Red, 40, 50, 50)),
                centered(square(Blue, 40, 50, 50)),
                centered(triangle(Yellow, 40, 50, 50, 0)),
                centered(circle(Green, 45, 50, 50)),
                centered(square(Purple, 38, 50, 50)),
                centered(triangle(Red, 42, 50, 50, 180)),
            ],
            vec![
                triple(circle(Red, 25, 50, 50)),
                triple(square(Blue, 25, 50, 50)),
                triple(triangle(Yellow, 25, 50, 50, 0)),
                triple(circle(Green, 25, 50, 50)),
                triple(square(Purple, 25, 50, 50)),
                triple(circle(Red, 25, 50, 50)),
            ],
        ),
        "Left has one shape, Right has many shapes",
        [
            "Left has one shape, Right has many shapes",
            "Left is large, Right is small",
            "Left has circles, Right has squares",
            "Left is at the top, Right is at the bottom",
        ],
        "Count the number of shapes in each box!",
    )
}

fn position_check() -> Level {
    let side = |rows: [u8; 6]| {
        vec![
            centered(circle(Red, 35, 50, rows[0])),
            centered(square(Blue, 35, 50, rows[1])),
            centered(triangle(Yellow, 35, 50, rows[2], 0)),
            centered(circle(Green, 38, 50, rows[3])),
            centered(square(Purple, 36, 50, rows[4])),
            centered(triangle(Red, 37, 50, rows[5], 180)),
        ]
    };
    level(
        5,
        "POSITION CHECK",
        Difficulty::Hard,
        (side([25, 30, 28, 26, 27, 29]), side([75, 70, 72, 74, 73, 71])),
        "Left shapes are at the top, Right shapes are at the bottom",
        [
            "Left shapes are at the top, Right shapes are at the bottom",
            "Left has circles, Right has triangles",
            "Left is large, Right is small",
            "Left has one shape, Right has many shapes",
        ],
        "Where are the shapes positioned in each box?",
    )
}

fn symmetry_puzzle() -> Level {
    level(
        6,
        "SYMMETRY PUZZLE",
        Difficulty::Hard,
        (
            vec![
                Exemplar::new([circle(Red, 30, 30, 50), circle(Red, 30, 70, 50)]),
                Exemplar::new([square(Blue, 30, 50, 30), square(Blue, 30, 50, 70)]),
                Exemplar::new([
                    triangle(Yellow, 30, 35, 50, 90),
                    triangle(Yellow, 30, 65, 50, 270),
                ]),
                Exemplar::new([circle(Green, 28, 50, 35), circle(Green, 28, 50, 65)]),
                Exemplar::new([square(Purple, 28, 32, 50), square(Purple, 28, 68, 50)]),
                Exemplar::new([triangle(Red, 30, 50, 32, 0), triangle(Red, 30, 50, 68, 180)]),
            ],
            vec![
                Exemplar::new([circle(Red, 30, 35, 40), circle(Red, 25, 65, 60)]),
                Exemplar::new([square(Blue, 32, 40, 35), square(Blue, 28, 60, 70)]),
                Exemplar::new([
                    triangle(Yellow, 30, 30, 45, 45),
                    triangle(Yellow, 26, 70, 60, 135),
                ]),
                Exemplar::new([circle(Green, 28, 38, 38), circle(Green, 32, 62, 65)]),
                Exemplar::new([square(Purple, 26, 42, 42), square(Purple, 30, 58, 62)]),
                Exemplar::new([triangle(Red, 28, 35, 35, 30), triangle(Red, 32, 70, 68, 200)]),
            ],
        ),
        "Left is symmetric, Right is not symmetric",
        [
            "Left is symmetric, Right is not symmetric",
            "Left has two shapes, Right has many shapes",
            "Left is at the top, Right is at the bottom",
            "Left is large, Right is small",
        ],
        "Look at how the shapes are arranged - are they balanced or unbalanced?",
    )
}

pub(crate) fn levels() -> Vec<Level> {
    vec![
        shape_basics(),
        color_match(),
        size_matters(),
        counting_game(),
        position_check(),
        symmetry_puzzle(),
    ]
}

pub(crate) fn tutorials() -> Vec<Tutorial> {
    vec![
        tutorial(
            "WELCOME, NINJA!",
            "Your mission: Find the rule that makes these two groups different. On the LEFT are examples that follow the rule. On the RIGHT are examples that DON'T follow the rule. Ready?",
            vec![centered(circle(Red, 45, 50, 50)), centered(circle(Blue, 45, 50, 50))],
            vec![centered(square(Red, 45, 50, 50)), centered(square(Blue, 45, 50, 50))],
        ),
        tutorial(
            "NEW CHALLENGE UNLOCKED!",
            "Now you'll need to look beyond just shapes and colors. Pay attention to SIZE and how shapes are POSITIONED. The patterns are getting trickier!",
            vec![centered(circle(Yellow, 58, 50, 50)), centered(square(Green, 58, 50, 50))],
            vec![centered(circle(Yellow, 26, 50, 50)), centered(square(Green, 26, 50, 50))],
        ),
        tutorial(
            "EXPERT MODE ACTIVATED!",
            "These final challenges require sharp observation skills! Look for patterns in ARRANGEMENT, POSITION, and SYMMETRY. You've got this, detective!",
            vec![
                Exemplar::new([circle(Purple, 32, 30, 50), circle(Purple, 32, 70, 50)]),
                Exemplar::new([square(Red, 32, 50, 30), square(Red, 32, 50, 70)]),
            ],
            vec![
                Exemplar::new([circle(Purple, 28, 35, 40), circle(Purple, 35, 68, 65)]),
                Exemplar::new([square(Red, 30, 38, 35), square(Red, 33, 65, 68)]),
            ],
        ),
    ]
}
