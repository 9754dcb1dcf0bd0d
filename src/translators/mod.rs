//! 方言转换器模块
//!
//! 两个对称的方向模块各自提供五个入口：
//!
//! - `translate_html` - 标记文本级改写（有序模式替换，不构造解析树）
//! - `translate_element` - 单个分发元素的替换
//! - `translate_fragment` - 节点树的先序遍历改写
//! - `translate_css` - 伴随样式表中分发伪选择器的改写
//! - `translate_js` - 影子根创建调用拼写的改写
//!
//! 树遍历的骨架与方向无关，由本模块的 [`walk_fragment`] 提供，
//! 方向差异收敛为一张 [`DirectionRules`] 规则表（见设计说明：
//! 每个方向只保留一份规范规则集，按表示参数化，避免并行副本漂移）。

pub mod rules;
pub mod v0tov1;
pub mod v1tov0;

use markup5ever_rcdom::{Handle, NodeData};

use crate::core::{Diagnostics, TranslationOptions};
use crate::dom;

/// 单个方向的树级规则表
pub(crate) struct DirectionRules {
    /// 待替换的源方言分发元素标签
    pub source_tag: &'static str,
    /// 元素级改写（rebuild + 映射属性转换）
    pub rewrite_element: fn(&Handle) -> Handle,
    /// 内嵌样式文本改写
    pub rewrite_style_text: fn(&str, &mut Diagnostics) -> String,
    /// 内嵌脚本文本改写
    pub rewrite_script_text: fn(&str) -> String,
}

/// 先序遍历节点树并按规则表原地改写
///
/// 使用显式工作栈而不是语言级递归，深树不会耗尽调用栈。
/// 每个节点恰好被访问一次：入栈发生在父节点被处理（可能被替换）之后，
/// 因此新产生的子树同样会被下降访问，而兄弟顺序不受替换影响。
/// `<template>` 的内容不在 children 中，单独入栈。
///
/// 返回（可能已被替换的）根节点引用。
pub(crate) fn walk_fragment(
    root: &Handle,
    options: &TranslationOptions,
    diagnostics: &mut Diagnostics,
    direction: &DirectionRules,
) -> Handle {
    let root = rewrite_node(root, options, diagnostics, direction);

    let mut pending: Vec<Handle> = Vec::new();
    push_children(&root, &mut pending);

    while let Some(node) = pending.pop() {
        let node = rewrite_node(&node, options, diagnostics, direction);
        push_children(&node, &mut pending);
    }

    root
}

/// 改写单个节点，返回继续遍历的句柄（被替换时为新元素）
fn rewrite_node(
    node: &Handle,
    options: &TranslationOptions,
    diagnostics: &mut Diagnostics,
    direction: &DirectionRules,
) -> Handle {
    match dom::get_node_name(node) {
        Some(tag) if tag.eq_ignore_ascii_case(direction.source_tag) => {
            (direction.rewrite_element)(node)
        }
        Some(tag) if options.translate_styles && tag.eq_ignore_ascii_case(rules::STYLE_TAG) => {
            dom::rewrite_text_children(node, |text| (direction.rewrite_style_text)(text, diagnostics));
            node.clone()
        }
        Some(tag) if options.translate_scripts && tag.eq_ignore_ascii_case(rules::SCRIPT_TAG) => {
            dom::rewrite_text_children(node, direction.rewrite_script_text);
            node.clone()
        }
        _ => node.clone(),
    }
}

/// 将节点的子节点（以及 template 内容）逆序压栈，保证先序出栈顺序
fn push_children(node: &Handle, pending: &mut Vec<Handle>) {
    if let NodeData::Element {
        template_contents, ..
    } = &node.data
    {
        if let Some(contents) = template_contents.borrow().as_ref() {
            pending.push(contents.clone());
        }
    }

    for child in node.children.borrow().iter().rev() {
        pending.push(child.clone());
    }
}
