//! Built-in NanoVG registry.
//!
//! Each entry pins its category. Argument comments name the C parameters;
//! only the positional values reach the generated programs.

use crate::registry::{Category, FunctionEntry, ParamValue, ParameterSet, Registry};

fn i(value: i64) -> ParamValue {
    ParamValue::Int(value)
}

fn f(value: f64) -> ParamValue {
    ParamValue::Float(value)
}

fn s(token: &str) -> ParamValue {
    ParamValue::symbol(token)
}

fn entry(name: &str, category: Category, variants: Vec<Vec<ParamValue>>) -> FunctionEntry {
    FunctionEntry::with_category(
        name,
        category,
        variants.into_iter().map(ParameterSet::new).collect(),
    )
}

/// A single zero-argument variant.
fn bare(name: &str, category: Category) -> FunctionEntry {
    FunctionEntry::with_category(name, category, vec![ParameterSet::empty()])
}

/// The registry the `generate` command runs against.
#[must_use]
#[allow(clippy::approx_constant)]
pub fn builtin_registry() -> Registry {
    use Category::{Fill, Generic, Path, Shape, State, Stroke, Text};

    Registry::new(vec![
        // Frame management: width, height, devicePixelRatio
        entry(
            "nvgBeginFrame",
            Generic,
            vec![
                vec![i(800), i(600), f(1.0)],
                vec![i(1920), i(1080), f(2.0)],
                vec![i(400), i(300), f(0.5)],
            ],
        ),
        // State stack
        bare("nvgSave", Generic),
        bare("nvgRestore", Generic),
        bare("nvgReset", Generic),
        // Composite operations
        entry(
            "nvgGlobalCompositeOperation",
            Generic,
            [
                "NVG_SOURCE_OVER",
                "NVG_SOURCE_IN",
                "NVG_SOURCE_OUT",
                "NVG_ATOP",
                "NVG_DESTINATION_OVER",
                "NVG_DESTINATION_IN",
                "NVG_DESTINATION_OUT",
                "NVG_DESTINATION_ATOP",
                "NVG_LIGHTER",
                "NVG_COPY",
                "NVG_XOR",
            ]
            .into_iter()
            .map(|op| vec![s(op)])
            .collect(),
        ),
        // sfactor, dfactor
        entry(
            "nvgGlobalCompositeBlendFunc",
            Generic,
            vec![
                vec![s("NVG_ONE"), s("NVG_ZERO")],
                vec![s("NVG_SRC_ALPHA"), s("NVG_ONE_MINUS_SRC_ALPHA")],
            ],
        ),
        // srcRGB, dstRGB, srcAlpha, dstAlpha
        entry(
            "nvgGlobalCompositeBlendFuncSeparate",
            Generic,
            vec![vec![s("NVG_ONE"), s("NVG_ZERO"), s("NVG_ONE"), s("NVG_ZERO")]],
        ),
        entry(
            "nvgGlobalAlpha",
            State,
            vec![vec![f(0.0)], vec![f(0.25)], vec![f(0.5)], vec![f(0.75)], vec![f(1.0)]],
        ),
        // Shape rendering
        entry("nvgShapeAntiAlias", Generic, vec![vec![i(0)], vec![i(1)]]),
        entry(
            "nvgStrokeWidth",
            State,
            vec![vec![f(1.0)], vec![f(2.0)], vec![f(5.0)], vec![f(10.0)]],
        ),
        entry(
            "nvgLineCap",
            State,
            vec![vec![s("NVG_BUTT")], vec![s("NVG_ROUND")], vec![s("NVG_SQUARE")]],
        ),
        entry(
            "nvgLineJoin",
            State,
            vec![vec![s("NVG_MITER")], vec![s("NVG_ROUND")], vec![s("NVG_BEVEL")]],
        ),
        entry("nvgMiterLimit", State, vec![vec![f(4.0)], vec![f(10.0)]]),
        // Transforms
        bare("nvgResetTransform", Generic),
        // a, b, c, d, e, f
        entry(
            "nvgTransform",
            State,
            vec![
                vec![f(1.0), f(0.0), f(0.0), f(1.0), f(0.0), f(0.0)],
                vec![f(1.5), f(0.0), f(0.0), f(1.5), f(100.0), f(50.0)],
            ],
        ),
        entry(
            "nvgTranslate",
            State,
            vec![vec![i(0), i(0)], vec![i(100), i(50)], vec![i(-50), i(100)]],
        ),
        // Radians: 0, 45, 90 and 180 degrees.
        entry(
            "nvgRotate",
            State,
            vec![vec![f(0.0)], vec![f(0.785)], vec![f(1.57)], vec![f(3.14)]],
        ),
        entry(
            "nvgScale",
            State,
            vec![
                vec![f(1.0), f(1.0)],
                vec![f(0.5), f(0.5)],
                vec![f(2.0), f(2.0)],
                vec![f(1.0), f(2.0)],
            ],
        ),
        entry("nvgSkewX", State, vec![vec![f(0.0)], vec![f(0.1)], vec![f(0.5)]]),
        entry("nvgSkewY", State, vec![vec![f(0.0)], vec![f(0.1)], vec![f(0.5)]]),
        // Scissoring: x, y, w, h
        entry(
            "nvgScissor",
            Generic,
            vec![
                vec![i(0), i(0), i(100), i(100)],
                vec![i(50), i(50), i(200), i(150)],
            ],
        ),
        entry(
            "nvgIntersectScissor",
            Generic,
            vec![vec![i(25), i(25), i(150), i(150)]],
        ),
        bare("nvgResetScissor", Generic),
        // Paths
        bare("nvgBeginPath", Generic),
        entry("nvgMoveTo", Path, vec![vec![i(10), i(10)], vec![i(100), i(100)]]),
        entry("nvgLineTo", Path, vec![vec![i(100), i(10)], vec![i(10), i(100)]]),
        // c1x, c1y, c2x, c2y, x, y
        entry(
            "nvgBezierTo",
            Path,
            vec![vec![i(50), i(10), i(100), i(50), i(100), i(100)]],
        ),
        // cx, cy, x, y
        entry("nvgQuadTo", Path, vec![vec![i(150), i(10), i(200), i(100)]]),
        // x1, y1, x2, y2, radius
        entry(
            "nvgArcTo",
            Path,
            vec![vec![i(100), i(200), i(10), i(200), i(10)]],
        ),
        bare("nvgClosePath", Generic),
        entry(
            "nvgPathWinding",
            Generic,
            vec![vec![s("NVG_CCW")], vec![s("NVG_CW")]],
        ),
        // Shapes. Arc: cx, cy, r, a0, a1, dir
        entry(
            "nvgArc",
            Shape,
            vec![
                vec![i(100), i(100), i(50), i(0), f(3.14), s("NVG_CW")],
                vec![i(200), i(100), i(30), i(0), f(6.28), s("NVG_CCW")],
            ],
        ),
        entry(
            "nvgRect",
            Shape,
            vec![
                vec![i(10), i(10), i(100), i(50)],
                vec![i(150), i(10), i(80), i(80)],
            ],
        ),
        // x, y, w, h, r
        entry(
            "nvgRoundedRect",
            Shape,
            vec![
                vec![i(10), i(100), i(100), i(50), i(5)],
                vec![i(150), i(100), i(80), i(80), i(20)],
            ],
        ),
        // x, y, w, h, radTopLeft, radTopRight, radBottomRight, radBottomLeft
        entry(
            "nvgRoundedRectVarying",
            Shape,
            vec![vec![
                i(10),
                i(200),
                i(100),
                i(50),
                i(5),
                i(10),
                i(15),
                i(20),
            ]],
        ),
        // cx, cy, rx, ry
        entry(
            "nvgEllipse",
            Shape,
            vec![
                vec![i(300), i(100), i(50), i(30)],
                vec![i(400), i(100), i(30), i(50)],
            ],
        ),
        // cx, cy, r
        entry(
            "nvgCircle",
            Shape,
            vec![vec![i(500), i(100), i(40)], vec![i(600), i(100), i(20)]],
        ),
        // Fill and stroke
        bare("nvgFill", Fill),
        bare("nvgStroke", Stroke),
        // Font hinting
        entry(
            "nvgFontHinting",
            Text,
            vec![
                vec![s("NVG_HINTING_NONE")],
                vec![s("NVG_HINTING_LIGHT")],
                vec![s("NVG_HINTING_FULL")],
            ],
        ),
        entry(
            "nvgTextDirection",
            Text,
            vec![
                vec![s("NVG_TEXT_DIR_AUTO")],
                vec![s("NVG_TEXT_DIR_LTR")],
                vec![s("NVG_TEXT_DIR_RTL")],
            ],
        ),
        // tag, enabled
        entry(
            "nvgFontFeature",
            Text,
            vec![
                vec![s("NVG_FEATURE_LIGA"), i(1)],
                vec![s("NVG_FEATURE_CALT"), i(1)],
                vec![s("NVG_FEATURE_ZERO"), i(0)],
            ],
        ),
        bare("nvgFontFeaturesReset", Generic),
        entry(
            "nvgFontSize",
            Text,
            vec![vec![f(12.0)], vec![f(18.0)], vec![f(24.0)], vec![f(36.0)]],
        ),
        entry("nvgFontBlur", Text, vec![vec![f(0.0)], vec![f(1.0)], vec![f(2.0)]]),
        entry(
            "nvgTextLetterSpacing",
            Text,
            vec![vec![f(0.0)], vec![f(1.0)], vec![f(-0.5)]],
        ),
        entry(
            "nvgTextLineHeight",
            Text,
            vec![vec![f(1.0)], vec![f(1.5)], vec![f(2.0)]],
        ),
        entry(
            "nvgTextAlign",
            Text,
            vec![
                vec![s("NVG_ALIGN_LEFT | NVG_ALIGN_TOP")],
                vec![s("NVG_ALIGN_CENTER | NVG_ALIGN_MIDDLE")],
                vec![s("NVG_ALIGN_RIGHT | NVG_ALIGN_BOTTOM")],
            ],
        ),
        // Subpixel rendering
        entry("nvgSubpixelText", Text, vec![vec![i(0)], vec![i(1)]]),
        // 0 = none, 1 = horizontal RGB, 2 = horizontal BGR
        entry(
            "nvgTextSubpixelMode",
            Text,
            vec![vec![i(0)], vec![i(1)], vec![i(2)]],
        ),
        // Baseline and kerning
        entry(
            "nvgBaselineShift",
            Text,
            vec![vec![f(0.0)], vec![f(5.0)], vec![f(-5.0)]],
        ),
        entry("nvgKerningEnabled", Text, vec![vec![i(0)], vec![i(1)]]),
    ])
}
