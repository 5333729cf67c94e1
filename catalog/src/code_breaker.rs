use ninja_puzzles_core::{
    Grid, GridError, GridExample, GridPuzzle, Level, LevelId, LevelTag, PatternKind, Puzzle,
    Tutorial, TutorialContent,
};

fn level<const C: usize>(
    id: u32,
    name: &str,
    pattern: PatternKind,
    input: &[[u8; C]],
    solution: &[[u8; C]],
    hint: &str,
) -> Result<Level, GridError> {
    Ok(Level {
        id: LevelId::new(id),
        name: name.to_owned(),
        tag: LevelTag::Pattern(pattern),
        hint: hint.to_owned(),
        puzzle: Puzzle::Grid(GridPuzzle {
            input: Grid::from_palette_rows(input)?,
            solution: Grid::from_palette_rows(solution)?,
        }),
    })
}

fn example<const C: usize>(
    input: &[[u8; C]],
    output: &[[u8; C]],
) -> Result<GridExample, GridError> {
    Ok(GridExample {
        input: Grid::from_palette_rows(input)?,
        output: Grid::from_palette_rows(output)?,
    })
}

fn tutorial(title: &str, examples: Vec<GridExample>) -> Tutorial {
    Tutorial {
        title: title.to_owned(),
        explanation: None,
        content: TutorialContent::GridExamples(examples),
    }
}

pub(crate) fn levels() -> Result<Vec<Level>, GridError> {
    Ok(vec![
        level(
            1,
            "MIRROR BASICS",
            PatternKind::Mirror,
            &[[1, 0, 0], [0, 2, 0], [0, 0, 3]],
            &[[0, 0, 1], [0, 2, 0], [3, 0, 0]],
            "Flip it like a mirror - left becomes right, right becomes left!",
        )?,
        level(
            2,
            "MIRROR MASTERY",
            PatternKind::Mirror,
            &[[1, 2, 3], [0, 4, 0], [5, 0, 0]],
            &[[3, 2, 1], [0, 4, 0], [0, 0, 5]],
            "Remember: everything flips horizontally!",
        )?,
        level(
            3,
            "ROTATION BASICS",
            PatternKind::Rotation,
            &[[1, 1, 0], [1, 0, 0], [0, 0, 0]],
            &[[0, 1, 1], [0, 0, 1], [0, 0, 0]],
            "Turn it 90 degrees clockwise - imagine rotating the grid to the right!",
        )?,
        level(
            4,
            "ROTATION MASTERY",
            PatternKind::Rotation,
            &[[1, 2, 0], [3, 0, 0], [0, 0, 4]],
            &[[0, 3, 1], [0, 0, 2], [4, 0, 0]],
            "Rotate clockwise: top → right, right → bottom, bottom → left, left → top!",
        )?,
        level(
            5,
            "TRANSFORMATION BASICS",
            PatternKind::Transformation,
            &[[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 2, 2], [0, 0, 2, 2]],
            &[[2, 2, 0, 0], [2, 2, 0, 0], [0, 0, 1, 1], [0, 0, 1, 1]],
            "Swap the red and blue blocks - red goes where blue was, blue goes where red was!",
        )?,
        level(
            6,
            "TRANSFORMATION MASTERY",
            PatternKind::Transformation,
            &[[1, 0, 0, 2], [0, 3, 3, 0], [0, 3, 3, 0], [2, 0, 0, 1]],
            &[[2, 0, 0, 1], [0, 3, 3, 0], [0, 3, 3, 0], [1, 0, 0, 2]],
            "Swap red and blue positions. The yellow blocks stay where they are!",
        )?,
    ])
}

pub(crate) fn tutorials() -> Result<Vec<Tutorial>, GridError> {
    Ok(vec![
        tutorial(
            "MIRROR CODE",
            vec![
                example(
                    &[[1, 2, 0], [0, 3, 0], [0, 0, 0]],
                    &[[0, 2, 1], [0, 3, 0], [0, 0, 0]],
                )?,
                example(
                    &[[1, 0, 4], [0, 2, 0], [3, 0, 0]],
                    &[[4, 0, 1], [0, 2, 0], [0, 0, 3]],
                )?,
            ],
        ),
        tutorial(
            "ROTATION CIPHER",
            vec![
                example(
                    &[[1, 1, 0], [1, 0, 0], [0, 0, 0]],
                    &[[0, 1, 1], [0, 0, 1], [0, 0, 0]],
                )?,
                example(
                    &[[2, 0, 0], [2, 3, 0], [0, 0, 0]],
                    &[[0, 2, 2], [0, 3, 0], [0, 0, 0]],
                )?,
            ],
        ),
        tutorial(
            "TRANSFORMATION",
            vec![
                example(
                    &[[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 2, 2], [0, 0, 2, 2]],
                    &[[2, 2, 0, 0], [2, 2, 0, 0], [0, 0, 1, 1], [0, 0, 1, 1]],
                )?,
                example(
                    &[[1, 0, 0, 2], [0, 0, 0, 0], [0, 0, 0, 0], [2, 0, 0, 1]],
                    &[[2, 0, 0, 1], [0, 0, 0, 0], [0, 0, 0, 0], [1, 0, 0, 2]],
                )?,
            ],
        ),
    ])
}
