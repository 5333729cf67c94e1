use ninja_puzzles_catalog::{deck, Deck};
use ninja_puzzles_core::{
    CellColor, CellCoord, GameKind, Grid, LevelIndex, LevelTag, PatternKind, Puzzle,
    TutorialContent, TutorialIndex,
};
use ninja_puzzles_system_sentence::contains_word;

fn standard(game: GameKind) -> Deck {
    deck(game).expect("standard deck is valid")
}

fn map_cells(grid: &Grid, source: impl Fn(u32, u32) -> CellCoord) -> Grid {
    let mut mapped = Grid::blank(grid.columns(), grid.rows());
    for row in 0..grid.rows() {
        for column in 0..grid.columns() {
            let color = grid.get(source(column, row))
                .expect("source cell in bounds");
            assert!(mapped.set(CellCoord::new(column, row), color));
        }
    }
    mapped
}

fn mirrored(grid: &Grid) -> Grid {
    let last = grid.columns() - 1;
    map_cells(grid, |column, row| CellCoord::new(last - column, row))
}

fn rotated_clockwise(grid: &Grid) -> Grid {
    let last = grid.rows() - 1;
    map_cells(grid, |column, row| CellCoord::new(row, last - column))
}

fn red_blue_swapped(grid: &Grid) -> Grid {
    let mut swapped = grid.clone();
    for row in 0..grid.rows() {
        for column in 0..grid.columns() {
            let cell = CellCoord::new(column, row);
            let color = match grid.get(cell).expect("cell in bounds") {
                CellColor::Red => CellColor::Blue,
                CellColor::Blue => CellColor::Red,
                other => other,
            };
            assert!(swapped.set(cell, color));
        }
    }
    swapped
}

fn apply_pattern(pattern: PatternKind, grid: &Grid) -> Grid {
    match pattern {
        PatternKind::Mirror => mirrored(grid),
        PatternKind::Rotation => rotated_clockwise(grid),
        PatternKind::Transformation => red_blue_swapped(grid),
    }
}

#[test]
fn every_game_has_six_levels_and_three_tutorials() {
    for game in GameKind::ALL {
        let deck = standard(game);

        assert_eq!(deck.game(), game);
        assert_eq!(deck.level_count(), 6);
        assert_eq!(deck.tutorials().len(), 3);
        assert_eq!(deck.max_stars(), 18);
        assert_eq!(deck.last_level(), LevelIndex::new(5));
        assert!(deck.level(LevelIndex::new(6)).is_none());
        assert!(deck.tutorial(TutorialIndex::new(3)).is_none());
    }
}

#[test]
fn level_ids_follow_play_order() {
    for game in GameKind::ALL {
        let ids: Vec<u32> = standard(game)
            .levels()
            .iter()
            .map(|level| level.id.get())
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6], "{game:?}");
    }
}

#[test]
fn code_breaker_solutions_follow_their_pattern() {
    let deck = standard(GameKind::CodeBreaker);

    for level in deck.levels() {
        let LevelTag::Pattern(pattern) = level.tag else {
            panic!("{} has no pattern tag", level.name);
        };
        let grid = level
            .puzzle
            .as_grid()
            .expect("code breaker levels are grids");
        assert_eq!(
            apply_pattern(pattern, &grid.input),
            grid.solution,
            "{}",
            level.name
        );
    }
}

#[test]
fn code_breaker_tutorials_demonstrate_the_following_patterns() {
    let deck = standard(GameKind::CodeBreaker);
    let patterns = [PatternKind::Mirror, PatternKind::Rotation, PatternKind::Transformation];

    for (tutorial, pattern) in deck.tutorials().iter().zip(patterns) {
        let TutorialContent::GridExamples(examples) = &tutorial.content else {
            panic!("{} has no grid examples", tutorial.title);
        };
        assert_eq!(examples.len(), 2);
        for example in examples {
            assert_eq!(apply_pattern(pattern, &example.input), example.output);
        }
    }
}

#[test]
fn first_mirror_level_matches_authored_grids() {
    let deck = standard(GameKind::CodeBreaker);
    let level = deck.level(LevelIndex::new(0)).expect("first level");
    let grid = level.puzzle.as_grid().expect("grid puzzle");

    assert_eq!(level.name, "MIRROR BASICS");
    assert_eq!(grid.input.dimensions(), (3, 3));
    assert_eq!(
        grid.solution,
        Grid::from_palette_rows(&[[0, 0, 1], [0, 2, 0], [3, 0, 0]])
            .expect("valid grid")
    );
}

#[test]
fn multiple_choice_levels_offer_their_answer_once() {
    for game in [GameKind::PatternMatcher, GameKind::StorySolver] {
        for level in standard(game).levels() {
            let choices = level.puzzle.choices().expect("multiple choice");
            let correct = level.puzzle.correct_choice().expect("correct choice");
            assert_eq!(
                choices
                    .iter()
                    .filter(|choice| choice.as_str() == correct)
                    .count(),
                1,
                "{}",
                level.name
            );
        }
    }
}

#[test]
fn classification_levels_show_six_exemplars_per_side() {
    for level in standard(GameKind::PatternMatcher).levels() {
        let Puzzle::Classification(puzzle) = &level.puzzle else {
            panic!("{} is not a classification puzzle", level.name);
        };
        assert_eq!(puzzle.left.len(), 6);
        assert_eq!(puzzle.right.len(), 6);
        assert_eq!(puzzle.choices.len(), 4);
        assert!(puzzle
            .left
            .iter()
            .chain(&puzzle.right)
            .flat_map(|exemplar| &exemplar.shapes)
            .all(|shape| (20..=60).contains(&shape.size)
                && shape.position.x <= 100
                && shape.position.y <= 100));
    }
}

#[test]
fn story_solver_pronouns_occur_in_their_sentences() {
    let deck = standard(GameKind::StorySolver);

    for level in deck.levels() {
        let Puzzle::Referent(puzzle) = &level.puzzle else {
            panic!("{} is not a referent puzzle", level.name);
        };
        assert!(contains_word(&puzzle.sentence, &puzzle.pronoun), "{}", level.name);
    }

    for tutorial in deck.tutorials() {
        let TutorialContent::Sentence(example) = &tutorial.content else {
            panic!("{} has no sentence example", tutorial.title);
        };
        assert!(contains_word(&example.sentence, &example.pronoun));
        assert!(tutorial.explanation.is_some());
    }
}

#[test]
fn tutorial_titles_follow_breakpoints() {
    let deck = standard(GameKind::PatternMatcher);
    let titles: Vec<&str> = deck
        .tutorials()
        .iter()
        .map(|tutorial| tutorial.title.as_str())
        .collect();

    assert_eq!(
        titles,
        vec!["WELCOME, NINJA!", "NEW CHALLENGE UNLOCKED!", "EXPERT MODE ACTIVATED!"]
    );
}
