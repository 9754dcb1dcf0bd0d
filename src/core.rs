//! 核心类型：转换选项与有损转换诊断
//!
//! 转换引擎对其声明的输入域是完备的：格式良好的输入没有致命错误路径，
//! 每种边界情况都有既定的非抛出回退。唯一可上报的状况是 v0→v1 方向
//! 选择器转换中的"有损替换"，通过显式的 [`Diagnostics`] 收集器暴露，
//! 同时镜像到 `tracing` 日志通道。

use std::fmt;

/// Configuration options for tree-level translation
///
/// 控制 [`translate_fragment`](crate::translators::v1tov0::translate_fragment)
/// 在遍历节点树时是否同时改写内嵌的 `<style>` / `<script>` 文本。
/// 文本级入口（`translate_html`、`translate_css`、`translate_js`）不受影响。
#[derive(Debug, Default, Clone)]
pub struct TranslationOptions {
    /// 是否改写内嵌 `<style>` 元素中的样式文本
    pub translate_styles: bool,
    /// 是否改写内嵌 `<script>` 元素中的脚本文本
    pub translate_scripts: bool,
}

/// 一次有损选择器替换的记录
///
/// `input` 是被替换的源选择器片段，`message` 说明目标方言无法精确表达的部分。
/// 产生诊断的替换同时会在输出中留下内联 `FIXME` 注释标记。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub input: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.input, self.message)
    }
}

/// 有损转换诊断收集器
///
/// 替代原实现中进程级的 `console.warn` 环境输出（见设计说明）：
/// 调用方传入一个收集器即可观测并断言每次有损替换，
/// 每条记录同时通过 `tracing::warn!` 写入标准日志通道。
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一次有损替换并写入日志通道
    pub fn warn(&mut self, input: &str, message: &str) {
        let diagnostic = Diagnostic {
            input: input.to_string(),
            message: message.trim().to_string(),
        };
        tracing::warn!(input = %diagnostic.input, "{}", diagnostic.message);
        self.entries.push(diagnostic);
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
