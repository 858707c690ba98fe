//! Category templates that embed a call into a statement sequence with
//! visible output.

use crate::call::{Arg, CallExpr};
use crate::literal::LiteralStyle;
use crate::registry::Category;

/// Indentation of snippet lines inside `main`.
const INDENT: &str = "\t";

const REFERENCE_COLOR: [i64; 4] = [255, 192, 0, 255];
const PATH_ANCHOR: (i64, i64) = (100, 100);
const REFERENCE_CIRCLE: (i64, i64, i64) = (200, 200, 100);
const REFERENCE_RECT: (i64, i64, i64, i64) = (100, 100, 150, 100);
const PATH_STROKE_WIDTH: f64 = 3.0;
const STROKE_WIDTH: f64 = 5.0;
const TEXT_FONT_FACE: &str = "sans";
const TEXT_FONT_SIZE: f64 = 48.0;
const TEXT_ORIGIN: (i64, i64) = (100, 300);
const TEXT_SAMPLE: &str = "Test Text";

/// A single statement in a generated program.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// The call under test.
    Subject(CallExpr),
    /// Fixed scaffolding around the call under test.
    Setup(CallExpr),
}

impl Statement {
    #[must_use]
    pub fn call(&self) -> &CallExpr {
        match self {
            Self::Subject(call) | Self::Setup(call) => call,
        }
    }

    #[must_use]
    pub fn is_subject(&self) -> bool {
        matches!(self, Self::Subject(_))
    }
}

/// Ordered statements produced for one test unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Snippet {
    pub category: Category,
    pub statements: Vec<Statement>,
}

impl Snippet {
    /// Position of the call under test within the statement list.
    #[must_use]
    pub fn subject_position(&self) -> Option<usize> {
        self.statements.iter().position(Statement::is_subject)
    }

    /// Function names in statement order.
    #[must_use]
    pub fn functions(&self) -> Vec<&str> {
        self.statements
            .iter()
            .map(|statement| statement.call().function.as_str())
            .collect()
    }

    /// One indented statement per line, no trailing newline.
    #[must_use]
    pub fn render(&self, style: &dyn LiteralStyle) -> String {
        self.statements
            .iter()
            .map(|statement| format!("{INDENT}{}", statement.call().render(style)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Embeds `call` into the fixed template for `category`.
#[must_use]
pub fn compose(category: Category, call: CallExpr) -> Snippet {
    let subject = Statement::Subject(call);
    let statements = match category {
        Category::Shape => vec![begin_path(), subject, fill_color(), fill()],
        Category::Path => vec![
            begin_path(),
            move_to_anchor(),
            subject,
            stroke_color(),
            stroke_width(PATH_STROKE_WIDTH),
            stroke(),
        ],
        Category::Fill => vec![begin_path(), reference_circle(), fill_color(), subject],
        Category::Stroke => vec![
            begin_path(),
            reference_circle(),
            stroke_color(),
            stroke_width(STROKE_WIDTH),
            subject,
        ],
        Category::State | Category::Generic => vec![
            subject,
            begin_path(),
            reference_rect(),
            fill_color(),
            fill(),
        ],
        Category::Text => vec![
            subject,
            setup("nvgFontFace", vec![Arg::str(TEXT_FONT_FACE)]),
            setup("nvgFontSize", vec![Arg::float(TEXT_FONT_SIZE)]),
            fill_color(),
            setup(
                "nvgText",
                vec![
                    Arg::int(TEXT_ORIGIN.0),
                    Arg::int(TEXT_ORIGIN.1),
                    Arg::str(TEXT_SAMPLE),
                    Arg::Null,
                ],
            ),
        ],
    };

    Snippet {
        category,
        statements,
    }
}

fn setup(function: &str, args: Vec<Arg>) -> Statement {
    Statement::Setup(CallExpr::on_context(function, args))
}

fn rgba([r, g, b, a]: [i64; 4]) -> Arg {
    Arg::Call(CallExpr::new(
        "nvgRGBA",
        vec![Arg::int(r), Arg::int(g), Arg::int(b), Arg::int(a)],
    ))
}

fn begin_path() -> Statement {
    setup("nvgBeginPath", Vec::new())
}

fn fill() -> Statement {
    setup("nvgFill", Vec::new())
}

fn stroke() -> Statement {
    setup("nvgStroke", Vec::new())
}

fn fill_color() -> Statement {
    setup("nvgFillColor", vec![rgba(REFERENCE_COLOR)])
}

fn stroke_color() -> Statement {
    setup("nvgStrokeColor", vec![rgba(REFERENCE_COLOR)])
}

fn stroke_width(width: f64) -> Statement {
    setup("nvgStrokeWidth", vec![Arg::float(width)])
}

fn move_to_anchor() -> Statement {
    setup(
        "nvgMoveTo",
        vec![Arg::int(PATH_ANCHOR.0), Arg::int(PATH_ANCHOR.1)],
    )
}

fn reference_circle() -> Statement {
    let (cx, cy, r) = REFERENCE_CIRCLE;
    setup("nvgCircle", vec![Arg::int(cx), Arg::int(cy), Arg::int(r)])
}

fn reference_rect() -> Statement {
    let (x, y, w, h) = REFERENCE_RECT;
    setup(
        "nvgRect",
        vec![Arg::int(x), Arg::int(y), Arg::int(w), Arg::int(h)],
    )
}
