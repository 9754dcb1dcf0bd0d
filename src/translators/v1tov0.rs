//! v1 → v0 方向转换器
//!
//! 把 Shadow DOM v1 方言（`<slot name>`、`::slotted()`、
//! `attachShadow({mode: 'open'})`）改写为 v0 方言（`<content select>`、
//! `::content`、`createShadowRoot()`）。该方向总是可以精确表达，
//! 不产生有损转换诊断。

use markup5ever_rcdom::Handle;
use regex::{Captures, Regex};

use super::{rules, walk_fragment, DirectionRules};
use crate::core::{Diagnostics, TranslationOptions};
use crate::dom;

static RULES: DirectionRules = DirectionRules {
    source_tag: rules::SLOT_TAG,
    rewrite_element: translate_element,
    rewrite_style_text: style_text,
    rewrite_script_text: translate_js,
};

/// 在标记文本中把所有 `<slot>` 标签改写为 `<content>`
///
/// 有序模式替换，不构造解析树：先闭合标签，再带 name 属性的开标签
/// （name 被消费并映射为 `select="[slot='NAME']"`，容忍单双引号，
/// name 为空视同缺省——与树级路径一致），最后不带 name 的开标签。
/// 未被规则识别的文本原样保留。
pub fn translate_html(markup: &str) -> String {
    let closing_tag = Regex::new(r"(?i)</slot(\s*)>").unwrap();
    let named_open_tag =
        Regex::new(r#"(?i)<slot([^>]*?)\s+name=(?:"([^"]*)"|'([^']*)')([^>]*)>"#).unwrap();
    let plain_open_tag = Regex::new(r"(?i)<slot(\s*|\s+[^>]*)>").unwrap();

    let markup = closing_tag.replace_all(markup, "</content${1}>");
    let markup = named_open_tag.replace_all(&markup, |caps: &Captures| {
        let prefix = caps.get(1).map_or("", |m| m.as_str());
        let suffix = caps.get(4).map_or("", |m| m.as_str());
        let name = caps
            .get(2)
            .or_else(|| caps.get(3))
            .map_or("", |m| m.as_str());

        if name.is_empty() {
            format!("<content{}{}>", prefix, suffix)
        } else {
            format!(
                "<content{}{} select=\"[slot='{}']\">",
                prefix, suffix, name
            )
        }
    });
    let markup = plain_open_tag.replace_all(&markup, "<content${1}>");

    markup.into_owned()
}

/// 把单个 `<slot>` 元素替换为 `<content>` 元素
///
/// 子节点全部移入新元素，属性全部复制（name 除外），
/// `name="X"` 被映射为 `select="[slot='X']"`；无 name（或 name 为空）
/// 的 slot 对应无 select 的 content（两边都是默认分发点）。
/// 源元素从父节点上摘下并被新元素原位取代，返回新元素。
pub fn translate_element(slot: &Handle) -> Handle {
    let name = dom::get_node_attr(slot, rules::NAME_ATTR);

    let content = dom::rebuild_element(slot, rules::CONTENT_TAG, &[rules::NAME_ATTR]);

    if let Some(name) = name.filter(|name| !name.is_empty()) {
        dom::set_node_attr(
            &content,
            rules::SELECT_ATTR,
            &rules::selector_for_slot_name(&name),
        );
    }

    content
}

/// 遍历节点树，替换其中所有 `<slot>` 元素
///
/// 原地修改传入的树并返回（可能已被替换的）根引用；
/// 按选项同时改写内嵌 `<style>` / `<script>` 文本。
pub fn translate_fragment(root: &Handle, options: &TranslationOptions) -> Handle {
    // 该方向不产生诊断，收集器仅用于统一遍历骨架
    let mut diagnostics = Diagnostics::new();
    walk_fragment(root, options, &mut diagnostics, &RULES)
}

/// 在样式文本中把所有 `::slotted(X)` 改写为 `::content>X`
///
/// 直接子代组合器保证了与 v1 一致的"仅匹配直接分发子节点"语义，
/// 因此这个方向总是精确的。
pub fn translate_css(css: &str) -> String {
    let slotted = Regex::new(r"(?i)::slotted\(([^)]*)\)").unwrap();
    slotted.replace_all(css, "::content>${1}").into_owned()
}

/// 在脚本文本中把 `attachShadow(...)` 调用改写为 `createShadowRoot()`
///
/// 纯字面拼写替换：不分析参数，配置对象被整体丢弃。
pub fn translate_js(js: &str) -> String {
    let attach_shadow = Regex::new(r"attachShadow\([^)]*\)").unwrap();
    attach_shadow
        .replace_all(js, "createShadowRoot()")
        .into_owned()
}

fn style_text(css: &str, _diagnostics: &mut Diagnostics) -> String {
    translate_css(css)
}
