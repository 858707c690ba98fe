//! Static name lists mapping NanoVG functions to usage categories.

use crate::registry::Category;

const SHAPE_FUNCTIONS: &[&str] = &[
    "nvgRect",
    "nvgRoundedRect",
    "nvgRoundedRectVarying",
    "nvgCircle",
    "nvgEllipse",
    "nvgArc",
];

const PATH_FUNCTIONS: &[&str] = &[
    "nvgMoveTo",
    "nvgLineTo",
    "nvgBezierTo",
    "nvgQuadTo",
    "nvgArcTo",
];

const STATE_FUNCTIONS: &[&str] = &[
    "nvgTranslate",
    "nvgRotate",
    "nvgScale",
    "nvgSkewX",
    "nvgSkewY",
    "nvgTransform",
    "nvgGlobalAlpha",
    "nvgStrokeWidth",
    "nvgLineCap",
    "nvgLineJoin",
    "nvgMiterLimit",
];

const TEXT_FUNCTIONS: &[&str] = &[
    "nvgFontSize",
    "nvgFontBlur",
    "nvgTextLetterSpacing",
    "nvgTextLineHeight",
    "nvgTextAlign",
    "nvgFontHinting",
    "nvgTextDirection",
    "nvgSubpixelText",
    "nvgTextSubpixelMode",
    "nvgBaselineShift",
    "nvgKerningEnabled",
    "nvgFontFeature",
];

const FILL_FUNCTIONS: &[&str] = &["nvgFill"];

const STROKE_FUNCTIONS: &[&str] = &["nvgStroke"];

/// Every explicit list, in lookup order. `Generic` has no list.
const CATEGORY_LISTS: [(Category, &[&str]); 6] = [
    (Category::Shape, SHAPE_FUNCTIONS),
    (Category::Path, PATH_FUNCTIONS),
    (Category::Fill, FILL_FUNCTIONS),
    (Category::Stroke, STROKE_FUNCTIONS),
    (Category::State, STATE_FUNCTIONS),
    (Category::Text, TEXT_FUNCTIONS),
];

/// Category for `name`; names on no list are [`Category::Generic`].
#[must_use]
pub fn classify(name: &str) -> Category {
    CATEGORY_LISTS
        .iter()
        .find(|(_, names)| names.contains(&name))
        .map_or(Category::Generic, |(category, _)| *category)
}

/// Every list that mentions `name`. More than one entry is an authoring error.
#[must_use]
pub fn listed_categories(name: &str) -> Vec<Category> {
    CATEGORY_LISTS
        .iter()
        .filter(|(_, names)| names.contains(&name))
        .map(|(category, _)| *category)
        .collect()
}

/// Names that appear on more than one list, with the lists they appear on.
#[must_use]
pub fn classification_conflicts() -> Vec<(&'static str, Vec<Category>)> {
    let mut conflicts = Vec::new();
    for (_, names) in CATEGORY_LISTS {
        for name in names {
            let listed = listed_categories(name);
            if listed.len() > 1 && !conflicts.iter().any(|(seen, _)| seen == name) {
                conflicts.push((*name, listed));
            }
        }
    }
    conflicts
}
