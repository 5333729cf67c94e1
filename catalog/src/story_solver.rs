use ninja_puzzles_core::{
    Difficulty, Level, LevelId, LevelTag, Puzzle, ReferentPuzzle, SentenceExample, Tutorial,
    TutorialContent,
};

#[allow(clippy::too_many_arguments)]
fn level(
    id: u32,
    name: &str,
    difficulty: Difficulty,
    sentence: &str,
    pronoun: &str,
    correct_referent: &str,
    choices: [&str; 2],
    hint: &str,
) -> Level {
    Level {
        id: LevelId::new(id),
        name: name.to_owned(),
        tag: LevelTag::Difficulty(difficulty),
        hint: hint.to_owned(),
        puzzle: Puzzle::Referent(ReferentPuzzle {
            sentence: sentence.to_owned(),
            pronoun: pronoun.to_owned(),
            correct_referent: correct_referent.to_owned(),
            choices: choices.iter().map(|choice| (*choice).to_owned()).collect(),
        }),
    }
}

fn tutorial(
    title: &str,
    explanation: &str,
    sentence: &str,
    pronoun: &str,
    answer: &str,
    why: &str,
) -> Tutorial {
    Tutorial {
        title: title.to_owned(),
        explanation: Some(explanation.to_owned()),
        content: TutorialContent::Sentence(SentenceExample {
            sentence: sentence.to_owned(),
            pronoun: pronoun.to_owned(),
            answer: answer.to_owned(),
            why: why.to_owned(),
        }),
    }
}

pub(crate) fn levels() -> Vec<Level> {
    vec![
        level(
            1,
            "SENTENCE ONE",
            Difficulty::Easy,
            "The cat chased the mouse until it got tired.",
            "it",
            "the cat",
            ["the cat", "the mouse"],
            "Who was doing the chasing and would get tired from running?",
        ),
        level(
            2,
            "SENTENCE TWO",
            Difficulty::Easy,
            "The trophy does not fit in the brown suitcase because it is too large.",
            "it",
            "the trophy",
            ["the trophy", "the brown suitcase"],
            "What is too large to fit inside?",
        ),
        level(
            3,
            "SENTENCE THREE",
            Difficulty::Medium,
            "The gardeners planted the flowers in the spring because they bloom beautifully.",
            "they",
            "the flowers",
            ["the gardeners", "the flowers"],
            "What blooms beautifully in spring?",
        ),
        level(
            4,
            "SENTENCE FOUR",
            Difficulty::Medium,
            "The baker decorated the cookies with icing because they looked plain.",
            "they",
            "the cookies",
            ["the baker", "the cookies"],
            "What looked plain and needed decoration?",
        ),
        level(
            5,
            "SENTENCE FIVE",
            Difficulty::Hard,
            "The piano does not fit in the music room because it is too small.",
            "it",
            "the music room",
            ["the piano", "the music room"],
            "This time, what is too small? Think carefully!",
        ),
        level(
            6,
            "SENTENCE SIX",
            Difficulty::Hard,
            "The librarians organized the books by genre because they were scattered everywhere.",
            "they",
            "the books",
            ["the librarians", "the books"],
            "What was scattered everywhere and needed organizing?",
        ),
    ]
}

pub(crate) fn tutorials() -> Vec<Tutorial> {
    vec![
        tutorial(
            "WELCOME, NINJA!",
            "Your mission: Figure out what words like \"IT\" or \"THEY\" mean in sentences. Read carefully and choose the right answer!",
            "The dog chased the ball until it rolled into the bushes.",
            "it",
            "the ball",
            "The ball is what rolled into the bushes, not the dog!",
        ),
        tutorial(
            "NEW CHALLENGE UNLOCKED!",
            "Now you need to think harder! Read the whole sentence and figure out what makes sense. Ready?",
            "The teachers praised the students because they worked so hard.",
            "they",
            "the students",
            "The students are the ones who worked hard and got praised!",
        ),
        tutorial(
            "EXPERT MODE ACTIVATED!",
            "These final challenges are tricky! Both answers might seem right. Think carefully about what the sentence means!",
            "The vase does not fit on the table because it is too narrow.",
            "it",
            "the table",
            "The table is too narrow to hold the vase. If the vase was too narrow, it would fit easily!",
        ),
    ]
}
