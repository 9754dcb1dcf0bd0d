//! # Shadow-Translate Library
//!
//! 一个用于在 Shadow DOM v1 与 v0 两种方言之间双向转换的工具库。
//! 编写"混合"Web 组件（面向 v1 编写、但需要运行在 v0 环境/polyfill 中）时，
//! 可以用它把模板、样式和脚本统一转换为目标方言。
//!
//! ## 模块组织
//!
//! - `core` - 转换选项与有损转换诊断收集器
//! - `dom` - DOM 解析、序列化与节点操作工具
//! - `translators` - 两个方向模块（`v1tov0`、`v0tov1`），各自提供
//!   标记文本、单个元素、节点树、样式文本和脚本文本五个转换入口

pub mod core;
pub mod dom;
pub mod translators;

// Re-export commonly used items for convenience
pub use crate::core::{Diagnostic, Diagnostics, TranslationOptions};
pub use crate::dom::{html_to_dom, serialize_document};
pub use crate::translators::{v0tov1, v1tov0};
