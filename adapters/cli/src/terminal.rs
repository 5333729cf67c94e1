use std::{
    io::{BufRead, Write},
    thread,
    time::{Duration, Instant},
};

use anyhow::Context;
use ninja_puzzles_core::{
    CellColor, Exemplar, Grid, ShapeColor, ShapeKind, Tutorial, TutorialContent,
};
use ninja_puzzles_rendering::{
    cell_color, layout_exemplar, sentence_segments, Feedback, FrameControl, FrameInput, Overlay,
    PlayingView, Presentation, RenderingBackend, Scene, SceneBody, SentenceSegment, VariantView,
    BREAKS_RULE_TITLE, CONTINUE_LABEL, EXIT_MESSAGE, EXIT_TITLE, FOLLOWS_RULE_TITLE,
    PLAY_AGAIN_LABEL, RULE_QUESTION, START_LABEL, VICTORY_TITLE,
};

/// Character cells across an exemplar box; each cell is two glyphs wide.
const BOX_COLUMNS: usize = 10;
/// Character rows down an exemplar box.
const BOX_ROWS: usize = 5;
/// Side length exemplars are laid out in before being snapped to cells.
const BOX_SIDE: f32 = 100.0;
/// Shapes at least this large are drawn in upper case.
const LARGE_SHAPE_EXTENT: f32 = 45.0;
/// Exemplar boxes drawn per line.
const BOXES_PER_LINE: usize = 3;
/// Blank columns between panels drawn side by side.
const PANEL_GAP: usize = 4;

/// Line-oriented backend that prints scenes and reads one action per line.
#[derive(Debug)]
pub(crate) struct TerminalBackend<R, W> {
    input: R,
    output: W,
}

impl<R, W> TerminalBackend<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Creates a backend reading actions from `input` and printing to `output`.
    pub(crate) const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R, W> RenderingBackend for TerminalBackend<R, W>
where
    R: BufRead,
    W: Write,
{
    fn run<F>(mut self, presentation: Presentation, mut update_scene: F) -> anyhow::Result<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) -> FrameControl,
    {
        let Presentation { title, mut scene } = presentation;
        let mut last_update = Instant::now();
        let mut control = update_scene(Duration::ZERO, FrameInput::default(), &mut scene);

        loop {
            draw(&mut self.output, &title, &scene)?;
            let input = match control {
                FrameControl::Exit => break,
                FrameControl::WakeAfter(delay) => {
                    self.output.flush().context("failed to flush output")?;
                    thread::sleep(delay);
                    FrameInput::default()
                }
                FrameControl::AwaitInput => {
                    write!(self.output, "> ")?;
                    self.output.flush().context("failed to flush output")?;
                    let mut line = String::new();
                    let read = self
                        .input
                        .read_line(&mut line)
                        .context("failed to read player input")?;
                    if read == 0 {
                        break;
                    }
                    FrameInput {
                        line: Some(line.trim().to_owned()),
                    }
                }
            };

            let now = Instant::now();
            control = update_scene(now.duration_since(last_update), input, &mut scene);
            last_update = now;
        }

        self.output.flush().context("failed to flush output")?;
        Ok(())
    }
}

fn draw<W: Write>(out: &mut W, title: &str, scene: &Scene) -> anyhow::Result<()> {
    writeln!(out)?;
    writeln!(out, "==== {title} ====  {}", scene.star_summary())?;

    match &scene.body {
        SceneBody::Welcome { banner, tagline } => {
            writeln!(out, "{banner}")?;
            writeln!(out, "{tagline}")?;
            writeln!(out, "[start] {START_LABEL}")?;
        }
        SceneBody::Dialog(tutorial) => draw_tutorial(out, tutorial)?,
        SceneBody::Playing(view) => draw_playing(out, view)?,
        SceneBody::Victory { message } => {
            writeln!(out, "{VICTORY_TITLE}")?;
            writeln!(out, "{message}")?;
            writeln!(out, "{}", scene.star_summary())?;
            writeln!(out, "[restart] {PLAY_AGAIN_LABEL}")?;
        }
    }

    match scene.feedback {
        Some(Feedback::Success(message)) => writeln!(out, "✓ {message}")?,
        Some(Feedback::Failure(message)) => writeln!(out, "✗ {message}")?,
        None => {}
    }

    match &scene.overlay {
        Some(Overlay::ExitConfirmation) => {
            writeln!(out, "{EXIT_TITLE}")?;
            writeln!(out, "{EXIT_MESSAGE}")?;
            writeln!(out, "[yes] / [no]")?;
        }
        Some(Overlay::Hint(hint)) => writeln!(out, "Hint: {hint}")?,
        Some(Overlay::Notice(notice)) => writeln!(out, "{notice}")?,
        None => {}
    }
    Ok(())
}

fn draw_tutorial<W: Write>(out: &mut W, tutorial: &Tutorial) -> anyhow::Result<()> {
    writeln!(out, "{}", tutorial.title)?;
    if let Some(explanation) = &tutorial.explanation {
        writeln!(out, "{explanation}")?;
    }

    match &tutorial.content {
        TutorialContent::GridExamples(examples) => {
            for (number, example) in examples.iter().enumerate() {
                writeln!(out, "Example {}:", number + 1)?;
                draw_panels(
                    out,
                    &[
                        ("Before".to_owned(), grid_lines(&example.input, false)),
                        ("After".to_owned(), grid_lines(&example.output, false)),
                    ],
                )?;
            }
        }
        TutorialContent::ShapeExamples { left, right } => {
            draw_exemplars(out, FOLLOWS_RULE_TITLE, left)?;
            draw_exemplars(out, BREAKS_RULE_TITLE, right)?;
        }
        TutorialContent::Sentence(example) => {
            draw_sentence(out, &sentence_segments(&example.sentence, &example.pronoun))?;
            writeln!(out, "Answer: {}", example.answer)?;
            writeln!(out, "{}", example.why)?;
        }
    }

    writeln!(out, "[ok] {CONTINUE_LABEL}")?;
    Ok(())
}

fn draw_playing<W: Write>(out: &mut W, view: &PlayingView) -> anyhow::Result<()> {
    writeln!(
        out,
        "Level {}/{}: {}",
        view.level_number, view.level_count, view.level_name
    )?;
    if view.attempts > 0 {
        writeln!(out, "Attempts: {}", view.attempts)?;
    }

    match &view.variant {
        VariantView::Grid {
            input,
            canvas,
            selected,
        } => {
            draw_panels(
                out,
                &[
                    ("Input".to_owned(), grid_lines(input, true)),
                    ("Your answer".to_owned(), grid_lines(canvas, true)),
                ],
            )?;
            for color in CellColor::ALL {
                let marker = if color == *selected { '>' } else { ' ' };
                writeln!(
                    out,
                    "{marker} {} {:<7} {}",
                    color.index(),
                    color.name(),
                    cell_color(color).to_hex()
                )?;
            }
        }
        VariantView::Classification {
            left,
            right,
            choices,
            selected,
        } => {
            draw_exemplars(out, FOLLOWS_RULE_TITLE, left)?;
            draw_exemplars(out, BREAKS_RULE_TITLE, right)?;
            writeln!(out, "{RULE_QUESTION}")?;
            draw_choices(out, choices, *selected)?;
        }
        VariantView::Referent {
            segments,
            question,
            choices,
            selected,
        } => {
            draw_sentence(out, segments)?;
            writeln!(out, "{question}")?;
            draw_choices(out, choices, *selected)?;
        }
    }
    Ok(())
}

fn draw_choices<W: Write>(
    out: &mut W,
    choices: &[String],
    selected: Option<usize>,
) -> anyhow::Result<()> {
    for (index, choice) in choices.iter().enumerate() {
        let marker = if selected == Some(index) { '>' } else { ' ' };
        writeln!(out, "{marker} {}. {choice}", index + 1)?;
    }
    Ok(())
}

fn draw_sentence<W: Write>(out: &mut W, segments: &[SentenceSegment]) -> anyhow::Result<()> {
    let sentence: String = segments
        .iter()
        .map(|segment| {
            if segment.highlighted {
                format!("*{}*", segment.text)
            } else {
                segment.text.clone()
            }
        })
        .collect();
    writeln!(out, "{sentence}")?;
    Ok(())
}

fn draw_exemplars<W: Write>(
    out: &mut W,
    title: &str,
    exemplars: &[Exemplar],
) -> anyhow::Result<()> {
    writeln!(out, "{title}")?;
    for (chunk_index, chunk) in exemplars.chunks(BOXES_PER_LINE).enumerate() {
        let panels = chunk
            .iter()
            .enumerate()
            .map(|(offset, exemplar)| {
                let number = chunk_index * BOXES_PER_LINE + offset + 1;
                Ok((format!("#{number}"), exemplar_lines(exemplar)?))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        draw_panels(out, &panels)?;
    }
    Ok(())
}

fn draw_panels<W: Write>(out: &mut W, panels: &[(String, Vec<String>)]) -> anyhow::Result<()> {
    let widths: Vec<usize> = panels
        .iter()
        .map(|(label, lines)| {
            lines
                .iter()
                .map(|line| line.chars().count())
                .chain(std::iter::once(label.chars().count()))
                .max()
                .unwrap_or_default()
        })
        .collect();
    let height = panels
        .iter()
        .map(|(_, lines)| lines.len())
        .max()
        .unwrap_or_default();

    let labels: Vec<&str> = panels.iter().map(|(label, _)| label.as_str()).collect();
    write_row(out, &labels, &widths)?;
    for row in 0..height {
        let cells: Vec<&str> = panels
            .iter()
            .map(|(_, lines)| lines.get(row).map_or("", String::as_str))
            .collect();
        write_row(out, &cells, &widths)?;
    }
    Ok(())
}

fn write_row<W: Write>(out: &mut W, cells: &[&str], widths: &[usize]) -> anyhow::Result<()> {
    let line: String = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}{:gap$}", "", gap = PANEL_GAP))
        .collect();
    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}

/// Rows of palette digits, empty cells drawn as dots.
///
/// Numbered grids carry row and column indices for the `paint` action.
fn grid_lines(grid: &Grid, numbered: bool) -> Vec<String> {
    let glyph = |color: &CellColor| match color {
        CellColor::Empty => ".".to_owned(),
        other => other.index().to_string(),
    };
    let mut lines = Vec::new();
    if numbered {
        let header: Vec<String> = (0..grid.columns())
            .map(|column| column.to_string())
            .collect();
        lines.push(format!("   {}", header.join(" ")));
    }
    for (row, cells) in grid.iter_rows().enumerate() {
        let cells: Vec<String> = cells.iter().map(glyph).collect();
        if numbered {
            lines.push(format!("{row:<2} {}", cells.join(" ")));
        } else {
            lines.push(cells.join(" "));
        }
    }
    lines
}

/// Coarse character picture of an exemplar.
///
/// Each shape becomes a color letter followed by an outline glyph, snapped to
/// the nearest cell. Large shapes use an upper-case letter.
fn exemplar_lines(exemplar: &Exemplar) -> anyhow::Result<Vec<String>> {
    let mut cells = vec![vec!["  ".to_owned(); BOX_COLUMNS]; BOX_ROWS];
    let layout = layout_exemplar(exemplar, BOX_SIDE)?;

    for (shape, placed) in exemplar.shapes.iter().zip(&layout) {
        let column = snap(placed.center.x, BOX_COLUMNS);
        let row = snap(placed.center.y, BOX_ROWS);
        let letter = color_letter(shape.color);
        let letter = if placed.extent >= LARGE_SHAPE_EXTENT {
            letter.to_ascii_uppercase()
        } else {
            letter
        };
        cells[row][column] = format!("{letter}{}", outline(shape.kind, placed.rotation));
    }

    let border = format!("+{}+", "-".repeat(BOX_COLUMNS * 2));
    let mut lines = vec![border.clone()];
    lines.extend(cells.iter().map(|row| format!("|{}|", row.concat())));
    lines.push(border);
    Ok(lines)
}

fn snap(coordinate: f32, cells: usize) -> usize {
    let scaled = (coordinate / BOX_SIDE * cells as f32).floor();
    (scaled.max(0.0) as usize).min(cells - 1)
}

const fn color_letter(color: ShapeColor) -> char {
    match color {
        ShapeColor::Red => 'r',
        ShapeColor::Blue => 'b',
        ShapeColor::Yellow => 'y',
        ShapeColor::Green => 'g',
        ShapeColor::Purple => 'p',
        ShapeColor::Gray => 'k',
    }
}

fn outline(kind: ShapeKind, rotation: f32) -> char {
    match kind {
        ShapeKind::Circle => 'o',
        ShapeKind::Square => '#',
        ShapeKind::Triangle => {
            let quarter = (rotation.to_degrees().rem_euclid(360.0) / 90.0).round() as u32 % 4;
            match quarter {
                0 => '^',
                1 => '>',
                2 => 'v',
                _ => '<',
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ninja_puzzles_core::{GameKind, Shape};

    fn render(scene: &Scene) -> String {
        let mut out = Vec::new();
        draw(&mut out, "CODE BREAKER", scene)
            .expect("drawing to memory succeeds");
        String::from_utf8(out).expect("output is utf-8")
    }

    #[test]
    fn grid_lines_number_rows_and_columns() {
        let grid = Grid::from_palette_rows(&[[1, 0], [0, 5]])
            .expect("valid palette");

        assert_eq!(grid_lines(&grid, true), vec!["   0 1", "0  1 .", "1  . 5"]);
        assert_eq!(grid_lines(&grid, false), vec!["1 .", ". 5"]);
    }

    #[test]
    fn exemplar_marks_size_color_and_direction() {
        let exemplar = Exemplar::new([
            Shape::new(ShapeKind::Circle, ShapeColor::Red, 55, 5, 10),
            Shape::new(ShapeKind::Triangle, ShapeColor::Blue, 25, 95, 95)
                .rotated(180),
        ]);

        let lines = exemplar_lines(&exemplar).expect("positive box side");

        assert_eq!(lines.len(), BOX_ROWS + 2);
        assert_eq!(lines[0], format!("+{}+", "-".repeat(BOX_COLUMNS * 2)));
        assert!(lines[1].starts_with("|Ro"));
        assert!(lines[BOX_ROWS].ends_with("bv|"));
    }

    #[test]
    fn playing_scene_lists_palette_and_feedback() {
        let input = Grid::from_palette_rows(&[[1, 0, 0], [0, 2, 0], [0, 0, 3]])
            .expect("valid palette");
        let mut scene = Scene::new(
            GameKind::CodeBreaker,
            3,
            18,
            SceneBody::Playing(PlayingView {
                level_number: 1,
                level_count: 6,
                level_name: "MIRROR MIRROR".to_owned(),
                attempts: 1,
                variant: VariantView::Grid {
                    canvas: Grid::blank(3, 3),
                    input,
                    selected: CellColor::Blue,
                },
            }),
        );
        scene.feedback = Some(Feedback::Failure("Almost there! Take another look."));

        let text = render(&scene);

        assert!(text.contains("3 / 18 Stars"));
        assert!(text.contains("Level 1/6: MIRROR MIRROR"));
        assert!(text.contains("Attempts: 1"));
        assert!(text.contains("> 2 Blue    #4673b9"));
        assert!(text.contains("✗ Almost there! Take another look."));
    }

    #[test]
    fn exit_confirmation_is_drawn_above_body() {
        let mut scene = Scene::new(
            GameKind::StorySolver,
            0,
            18,
            SceneBody::Victory { message: "done" },
        );
        scene.overlay = Some(Overlay::ExitConfirmation);

        let text = render(&scene);

        assert!(text.contains(VICTORY_TITLE));
        assert!(text.contains(EXIT_MESSAGE));
        assert!(text.contains("[yes] / [no]"));
    }

    #[test]
    fn backend_stops_at_end_of_input() {
        let backend = TerminalBackend::new("start\nquit\n".as_bytes(), Vec::new());
        let scene = Scene::new(
            GameKind::StorySolver,
            0,
            18,
            SceneBody::Victory { message: "done" },
        );
        let mut lines = Vec::new();

        backend
            .run(Presentation::new("STORY SOLVER", scene), |_, input, _| {
                if let Some(line) = input.line {
                    lines.push(line);
                }
                FrameControl::AwaitInput
            })
            .expect("in-memory run succeeds");

        assert_eq!(lines, vec!["start".to_owned(), "quit".to_owned()]);
    }
}
