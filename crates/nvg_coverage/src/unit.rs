//! Test unit construction: naming, classification, call synthesis, snippet
//! composition and the fixed program skeleton around it.
//!
//! Everything here is pure. The same `(function, variant, parameters)` triple
//! always produces byte-identical program text.

use crate::call::{CallExpr, synthesize};
use crate::classify::classify;
use crate::literal::{CStyle, LiteralStyle};
use crate::registry::{Category, ParameterSet};
use crate::snippet::{Snippet, compose};

/// Directory (relative to the output root) holding generated programs.
pub const TESTS_DIR: &str = "tests";

/// Directory the harness writes screenshots into.
pub const SCREENSHOT_DIR: &str = "screendumps";

/// Extension of generated programs.
pub const SOURCE_EXT: &str = "c";

const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;
const FONT_PATH: &str = "fonts/sans/NotoSans-Regular.ttf";

/// Function name with the `nvg` prefix removed, lowercased.
#[must_use]
pub fn normalize_function_name(function: &str) -> String {
    function.replace("nvg", "").to_lowercase()
}

/// Logical test name, e.g. `test_globalalpha_003`.
#[must_use]
pub fn test_name(function: &str, variant: usize) -> String {
    format!("test_{}_{variant:03}", normalize_function_name(function))
}

/// Program path relative to the output root, e.g. `tests/test_circle_001.c`.
#[must_use]
pub fn test_filename(function: &str, variant: usize) -> String {
    format!("{TESTS_DIR}/{}.{SOURCE_EXT}", test_name(function, variant))
}

/// Screenshot path the generated program asks the harness to write.
#[must_use]
pub fn screenshot_path(function: &str, variant: usize) -> String {
    format!("{SCREENSHOT_DIR}/{}.ppm", test_name(function, variant))
}

/// Everything derived for one (function, variant) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct TestUnit {
    pub function: String,
    pub variant: usize,
    pub params: ParameterSet,
    pub category: Category,
    pub call: CallExpr,
    pub snippet: Snippet,
    pub test_name: String,
    pub filename: String,
    pub screenshot: String,
    pub source: String,
}

/// Builds a unit, classifying `function` from the static name lists.
#[must_use]
pub fn build_unit(function: &str, variant: usize, params: &ParameterSet) -> TestUnit {
    build_unit_with(function, classify(function), variant, params)
}

/// Builds a unit with an explicit category, as stored on a registry entry.
#[must_use]
pub fn build_unit_with(
    function: &str,
    category: Category,
    variant: usize,
    params: &ParameterSet,
) -> TestUnit {
    let call = synthesize(function, params);
    let snippet = compose(category, call.clone());
    let test_name = test_name(function, variant);
    let filename = test_filename(function, variant);
    let screenshot = screenshot_path(function, variant);
    let source = render_program(&CStyle, function, variant, params, &snippet, &screenshot);

    TestUnit {
        function: function.to_string(),
        variant,
        params: params.clone(),
        category,
        call,
        snippet,
        test_name,
        filename,
        screenshot,
        source,
    }
}

fn describe_params(style: &dyn LiteralStyle, params: &ParameterSet) -> String {
    if params.is_empty() {
        return "no parameters".to_string();
    }
    let values = params
        .iter()
        .map(|value| style.format(value))
        .collect::<Vec<_>>()
        .join(", ");
    format!("parameters: ({values})")
}

/// Full program text for one unit.
#[must_use]
pub fn render_program(
    style: &dyn LiteralStyle,
    function: &str,
    variant: usize,
    params: &ParameterSet,
    snippet: &Snippet,
    screenshot: &str,
) -> String {
    let window_title = style.string_literal(&format!("{function} Test"));
    let label = style.string_literal(&format!("{function} - variant {variant}"));
    let screenshot = style.string_literal(screenshot);
    let font_path = style.string_literal(FONT_PATH);
    let null = style.null_literal();

    let mut lines: Vec<String> = Vec::new();

    lines.push("#include \"../src/nvg_vk.h\"".into());
    lines.push("#include \"../src/nanovg.h\"".into());
    lines.push("#include \"../src/tools/window_utils.h\"".into());
    lines.push("#include <stdio.h>".into());
    lines.push(String::new());
    lines.push(format!(
        "// Test: {function} with {}",
        describe_params(style, params)
    ));
    lines.push(String::new());
    lines.push("int main(void)".into());
    lines.push("{".into());
    lines.push(format!(
        "\tprintf(\"=== Testing {function} variant {variant} ===\\n\");"
    ));
    lines.push(String::new());
    lines.push(format!(
        "\tWindowVulkanContext* winCtx = window_create_context({WINDOW_WIDTH}, {WINDOW_HEIGHT}, {window_title});"
    ));
    lines.push("\tNVGcontext* vg = nvgCreateVk(winCtx->device, winCtx->physicalDevice,".into());
    lines.push("\t                              winCtx->graphicsQueue, winCtx->commandPool,".into());
    lines.push("\t                              winCtx->renderPass, NVG_ANTIALIAS);".into());
    lines.push(String::new());
    lines.push("\t// Load font".into());
    lines.push(format!("\tint font = nvgCreateFont(vg, \"sans\", {font_path});"));
    lines.push(String::new());
    lines.extend(FRAME_SETUP.iter().map(|line| (*line).to_string()));
    lines.push(String::new());
    lines.push("\tnvgBeginFrame(vg, winCtx->swapchainExtent.width, winCtx->swapchainExtent.height, 1.0f);".into());
    lines.push(String::new());
    lines.push("\t// Test the API function".into());
    lines.push(snippet.render(style));
    lines.push(String::new());
    lines.push("\t// Draw label".into());
    lines.push("\tnvgFontSize(vg, 14.0f);".into());
    lines.push("\tnvgFontFace(vg, \"sans\");".into());
    lines.push("\tnvgFillColor(vg, nvgRGBA(255, 255, 255, 255));".into());
    lines.push(format!("\tnvgText(vg, 10, 20, {label}, {null});"));
    lines.push(String::new());
    lines.push("\tnvgEndFrame(vg);".into());
    lines.push(String::new());
    lines.extend(FRAME_SUBMIT.iter().map(|line| (*line).to_string()));
    lines.push(String::new());
    lines.push(format!(
        "\twindow_save_screenshot(winCtx, imageIndex, {screenshot});"
    ));
    lines.push(String::new());
    lines.push("\tnvgDeleteVk(vg);".into());
    lines.push("\twindow_destroy_context(winCtx);".into());
    lines.push(String::new());
    lines.push(format!(
        "\tprintf(\"Test PASSED: {function} variant {variant}\\n\");"
    ));
    lines.push("\treturn 0;".into());
    lines.push("}".into());

    let mut source = lines.join("\n");
    source.push('\n');
    source
}

const FRAME_SETUP: &[&str] = &[
    "\t// Setup frame",
    "\tuint32_t imageIndex;",
    "\tvkAcquireNextImageKHR(winCtx->device, winCtx->swapchain, UINT64_MAX,",
    "\t                      winCtx->imageAvailableSemaphores[winCtx->currentFrame],",
    "\t                      VK_NULL_HANDLE, &imageIndex);",
    "",
    "\tVkCommandBuffer cmd = nvgVkGetCommandBuffer(vg);",
    "\tVkCommandBufferBeginInfo beginInfo = {0};",
    "\tbeginInfo.sType = VK_STRUCTURE_TYPE_COMMAND_BUFFER_BEGIN_INFO;",
    "\tbeginInfo.flags = VK_COMMAND_BUFFER_USAGE_ONE_TIME_SUBMIT_BIT;",
    "\tvkBeginCommandBuffer(cmd, &beginInfo);",
    "",
    "\tVkRenderPassBeginInfo renderPassInfo = {0};",
    "\trenderPassInfo.sType = VK_STRUCTURE_TYPE_RENDER_PASS_BEGIN_INFO;",
    "\trenderPassInfo.renderPass = winCtx->renderPass;",
    "\trenderPassInfo.framebuffer = winCtx->framebuffers[imageIndex];",
    "\trenderPassInfo.renderArea.extent = winCtx->swapchainExtent;",
    "\tVkClearValue clearValues[2];",
    "\tclearValues[0].color = (VkClearColorValue){{0.2f, 0.2f, 0.2f, 1.0f}};",
    "\tclearValues[1].depthStencil = (VkClearDepthStencilValue){1.0f, 0};",
    "\trenderPassInfo.clearValueCount = 2;",
    "\trenderPassInfo.pClearValues = clearValues;",
    "",
    "\tvkCmdBeginRenderPass(cmd, &renderPassInfo, VK_SUBPASS_CONTENTS_INLINE);",
    "\tVkViewport viewport = {0, 0, (float)winCtx->swapchainExtent.width, (float)winCtx->swapchainExtent.height, 0, 1};",
    "\tvkCmdSetViewport(cmd, 0, 1, &viewport);",
    "\tVkRect2D scissor = {{0, 0}, winCtx->swapchainExtent};",
    "\tvkCmdSetScissor(cmd, 0, 1, &scissor);",
    "\tnvgVkBeginRenderPass(vg, &renderPassInfo, viewport, scissor);",
];

const FRAME_SUBMIT: &[&str] = &[
    "\tvkCmdEndRenderPass(cmd);",
    "\tvkEndCommandBuffer(cmd);",
    "",
    "\tVkSubmitInfo submitInfo = {0};",
    "\tsubmitInfo.sType = VK_STRUCTURE_TYPE_SUBMIT_INFO;",
    "\tVkSemaphore waitSem[] = {winCtx->imageAvailableSemaphores[winCtx->currentFrame]};",
    "\tVkPipelineStageFlags waitStages[] = {VK_PIPELINE_STAGE_COLOR_ATTACHMENT_OUTPUT_BIT};",
    "\tsubmitInfo.waitSemaphoreCount = 1;",
    "\tsubmitInfo.pWaitSemaphores = waitSem;",
    "\tsubmitInfo.pWaitDstStageMask = waitStages;",
    "\tsubmitInfo.commandBufferCount = 1;",
    "\tsubmitInfo.pCommandBuffers = &cmd;",
    "\tVkSemaphore signalSem[] = {winCtx->renderFinishedSemaphores[winCtx->currentFrame]};",
    "\tsubmitInfo.signalSemaphoreCount = 1;",
    "\tsubmitInfo.pSignalSemaphores = signalSem;",
    "",
    "\tvkResetFences(winCtx->device, 1, &winCtx->inFlightFences[winCtx->currentFrame]);",
    "\tvkQueueSubmit(winCtx->graphicsQueue, 1, &submitInfo, winCtx->inFlightFences[winCtx->currentFrame]);",
    "\tvkWaitForFences(winCtx->device, 1, &winCtx->inFlightFences[winCtx->currentFrame], VK_TRUE, UINT64_MAX);",
];

#[cfg(test)]
mod tests {
    use super::{
        build_unit, build_unit_with, normalize_function_name, screenshot_path, test_filename,
        test_name,
    };
    use crate::literal::CStyle;
    use crate::registry::{Category, ParamValue, ParameterSet};

    #[test]
    fn names_strip_prefix_and_pad_index() {
        assert_eq!(normalize_function_name("nvgGlobalAlpha"), "globalalpha");
        assert_eq!(test_name("nvgGlobalAlpha", 0), "test_globalalpha_000");
        assert_eq!(test_name("nvgCircle", 1), "test_circle_001");
        assert_eq!(test_name("nvgCircle", 1234), "test_circle_1234");
        assert_eq!(test_filename("nvgSave", 0), "tests/test_save_000.c");
        assert_eq!(screenshot_path("nvgSave", 0), "screendumps/test_save_000.ppm");
    }

    #[test]
    fn global_alpha_first_variant_uses_float_suffix() {
        let params = ParameterSet::new(vec![ParamValue::Float(0.0)]);
        let unit = build_unit("nvgGlobalAlpha", 0, &params);
        assert_eq!(unit.category, Category::State);
        assert_eq!(unit.call.render(&CStyle), "nvgGlobalAlpha(vg, 0.0f);");
        assert_eq!(unit.filename, "tests/test_globalalpha_000.c");
        assert!(unit.source.contains("\tnvgGlobalAlpha(vg, 0.0f);\n"));
    }

    #[test]
    fn save_has_only_the_context_argument() {
        let unit = build_unit("nvgSave", 0, &ParameterSet::empty());
        assert_eq!(unit.call.render(&CStyle), "nvgSave(vg);");
        assert!(unit.source.contains("// Test: nvgSave with no parameters"));
    }

    #[test]
    fn program_embeds_label_and_screenshot() {
        let params = ParameterSet::new(vec![
            ParamValue::Int(600),
            ParamValue::Int(100),
            ParamValue::Int(20),
        ]);
        let unit = build_unit("nvgCircle", 1, &params);
        let source = &unit.source;

        assert!(source.starts_with("#include \"../src/nvg_vk.h\"\n"));
        assert!(source.contains("// Test: nvgCircle with parameters: (600, 100, 20)"));
        assert!(source.contains("window_create_context(800, 600, \"nvgCircle Test\");"));
        assert!(source.contains("printf(\"=== Testing nvgCircle variant 1 ===\\n\");"));
        assert!(source.contains("nvgText(vg, 10, 20, \"nvgCircle - variant 1\", NULL);"));
        assert!(source.contains(
            "window_save_screenshot(winCtx, imageIndex, \"screendumps/test_circle_001.ppm\");"
        ));
        assert!(source.ends_with("\treturn 0;\n}\n"));
    }

    #[test]
    fn snippet_sits_between_begin_and_end_frame() {
        let unit = build_unit("nvgRect", 0, &ParameterSet::new(vec![ParamValue::Int(10)]));
        let begin = unit.source.find("nvgBeginFrame(").expect("begin frame");
        let call = unit.source.find("nvgRect(vg, 10);").expect("call");
        let label = unit.source.find("// Draw label").expect("label");
        let end = unit.source.find("nvgEndFrame(vg);").expect("end frame");
        let shot = unit.source.find("window_save_screenshot").expect("screenshot");
        assert!(begin < call && call < label && label < end && end < shot);
    }

    #[test]
    fn explicit_category_overrides_name_lists() {
        let unit = build_unit_with("nvgSave", Category::Text, 0, &ParameterSet::empty());
        assert_eq!(unit.category, Category::Text);
        assert!(unit.source.contains("nvgText(vg, 100, 300, \"Test Text\", NULL);"));
    }

    #[test]
    fn build_is_deterministic() {
        let params = ParameterSet::new(vec![ParamValue::symbol("NVG_ALIGN_CENTER | NVG_ALIGN_MIDDLE")]);
        let first = build_unit("nvgTextAlign", 1, &params);
        let second = build_unit("nvgTextAlign", 1, &params);
        assert_eq!(first, second);
        assert!(first.source.contains("nvgTextAlign(vg, NVG_ALIGN_CENTER | NVG_ALIGN_MIDDLE);"));
    }
}
