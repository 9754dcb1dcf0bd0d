//! v0 → v1 方向转换器
//!
//! 把 Shadow DOM v0 方言（`<content select>`、`::content`、
//! `createShadowRoot()`）改写为 v1 方言（`<slot name>`、`::slotted()`、
//! `attachShadow({mode: 'open'})`）。
//!
//! 这是引擎中唯一有损的方向：只有恰为 `[slot='X']` 属性相等形状的
//! select 值能逆推出 slot 名，其余 select 退化为默认 slot；
//! `::content` 选择器中 v1 无法表达的部分会产生诊断并在输出中
//! 留下内联 `FIXME` 标记（见 [`translate_css`]）。

use markup5ever_rcdom::Handle;
use regex::{Captures, Regex};

use super::{rules, walk_fragment, DirectionRules};
use crate::core::{Diagnostics, TranslationOptions};
use crate::dom;

static RULES: DirectionRules = DirectionRules {
    source_tag: rules::CONTENT_TAG,
    rewrite_element: translate_element,
    rewrite_style_text: translate_css,
    rewrite_script_text: translate_js,
};

/// 在标记文本中把所有 `<content>` 标签改写为 `<slot>`
///
/// 有序模式替换：先闭合标签；再剔除 content 上游离的 name 属性
/// （它在 v1 里会与产出的 name 冲突）；然后处理带规范 select 的开标签
/// （select 被消费并映射为 `name="X"`，容忍两种引号嵌套）；
/// 无法映射的 select 被整体丢弃（与树级路径一致的有意信息丢失）；
/// 最后处理不带 select 的开标签。
pub fn translate_html(markup: &str) -> String {
    let closing_tag = Regex::new(r"(?i)</content(\s*)>").unwrap();
    let stray_name =
        Regex::new(r#"(?i)<content([^>]*?)\s+name=(?:"[^"]*"|'[^']*')([^>]*)>"#).unwrap();
    let mapped_select = Regex::new(
        r#"(?i)<content([^>]*?)\s+select=(?:"\s*\[slot='([^']*)'\]\s*"|'\s*\[slot="([^"]*)"\]\s*')([^>]*)>"#,
    )
    .unwrap();
    let unmapped_select =
        Regex::new(r#"(?i)<content([^>]*?)\s+select=(?:"[^"]*"|'[^']*')([^>]*)>"#).unwrap();
    let plain_open_tag = Regex::new(r"(?i)<content(\s*|\s+[^>]*)>").unwrap();

    let markup = closing_tag.replace_all(markup, "</slot${1}>");
    let markup = stray_name.replace_all(&markup, "<content${1}${2}>");
    let markup = mapped_select.replace_all(&markup, "<slot${1}${4} name=\"${2}${3}\">");
    let markup = unmapped_select.replace_all(&markup, "<slot${1}${2}>");
    let markup = plain_open_tag.replace_all(&markup, "<slot${1}>");

    markup.into_owned()
}

/// 把单个 `<content>` 元素替换为 `<slot>` 元素
///
/// 子节点全部移入新元素，属性全部复制（select 和游离的 name 除外），
/// 规范形状的 `select="[slot='X']"` 被映射为 `name="X"`。
/// select 不是该形状时直接省略 name——产出默认 slot，静默降级而非失败。
/// 源元素从父节点上摘下并被新元素原位取代，返回新元素。
pub fn translate_element(content: &Handle) -> Handle {
    let select = dom::get_node_attr(content, rules::SELECT_ATTR);

    let slot = dom::rebuild_element(
        content,
        rules::SLOT_TAG,
        &[rules::SELECT_ATTR, rules::NAME_ATTR],
    );

    if let Some(name) = select.as_deref().and_then(rules::slot_name_from_selector) {
        dom::set_node_attr(&slot, rules::NAME_ATTR, &name);
    }

    slot
}

/// 遍历节点树，替换其中所有 `<content>` 元素
///
/// 原地修改传入的树并返回（可能已被替换的）根引用；
/// 按选项同时改写内嵌 `<style>` / `<script>` 文本，
/// 样式改写产生的有损诊断写入 diagnostics。
pub fn translate_fragment(
    root: &Handle,
    options: &TranslationOptions,
    diagnostics: &mut Diagnostics,
) -> Handle {
    walk_fragment(root, options, diagnostics, &RULES)
}

/// 在样式文本中把所有 `::content` 选择器改写为 `::slotted()`
///
/// 识别的形状：`::content`，可选的直接子代组合器 `>`，
/// 可选的复合选择器，可选的复杂延续（组合器连接的后续部分），
/// 终止于 `,` 或 `{`。未被该形状覆盖的文本原样通过。
///
/// 两种有损情况（各记一条诊断并在输出中留下 `FIXME` 标记）：
/// 没有 `>` 时 v1 只匹配直接分发子节点，转换是近似的（保留近似，
/// 不做语义"修正"）；存在复杂延续时 v1 无法表达，该部分被丢弃。
pub fn translate_css(css: &str, diagnostics: &mut Diagnostics) -> String {
    let content_selector =
        Regex::new(r"(?i)::content\s*(>)?\s*([^,{\s]*?)([+\s~][^,{]+?)?(\s*[,{])").unwrap();

    content_selector
        .replace_all(css, |caps: &Captures| {
            let direct = caps.get(1).is_some();
            let compound = caps.get(2).map_or("", |m| m.as_str());
            let complex = caps.get(3).map(|m| m.as_str());
            let rest = caps.get(4).map_or("", |m| m.as_str());

            let mut warning = String::new();
            if !direct {
                warning.push_str(" V1 matches only direct children;");
            }
            if let Some(complex) = complex {
                warning.push_str(&format!(
                    " V1 supports only compound selectors, selector skipped:{};",
                    complex
                ));
            }

            if warning.is_empty() {
                format!("::slotted({}){}", compound, rest)
            } else {
                diagnostics.warn(&caps[0], &warning);
                format!("::slotted({})/* FIXME{}*/{}", compound, warning, rest)
            }
        })
        .into_owned()
}

/// 在脚本文本中把 `createShadowRoot()` 调用改写为
/// `attachShadow({mode: 'open'})`
///
/// 纯字面拼写替换，引入规范的 open 模式配置对象。
pub fn translate_js(js: &str) -> String {
    let create_shadow_root = Regex::new(r"createShadowRoot\(\s*\)").unwrap();
    create_shadow_root
        .replace_all(js, "attachShadow({mode: 'open'})")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_html_maps_select_to_name() {
        assert_eq!(
            translate_html("<content class=\"x\" select=\"[slot='a']\">fallback</content>"),
            "<slot class=\"x\" name=\"a\">fallback</slot>"
        );
    }

    #[test]
    fn test_translate_html_alternate_quoting() {
        assert_eq!(
            translate_html("<content select='[slot=\"a\"]'></content>"),
            "<slot name=\"a\"></slot>"
        );
    }

    #[test]
    fn test_translate_html_drops_unmapped_select() {
        assert_eq!(
            translate_html("<content select=\"h1,h2\">heading</content>"),
            "<slot>heading</slot>"
        );
    }

    #[test]
    fn test_translate_css_clean_direct_child() {
        let mut diagnostics = Diagnostics::new();
        assert_eq!(
            translate_css("::content>span { color: red; }", &mut diagnostics),
            "::slotted(span) { color: red; }"
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_translate_css_flags_missing_combinator() {
        let mut diagnostics = Diagnostics::new();
        let translated = translate_css("::content span { color: red; }", &mut diagnostics);

        assert!(translated.starts_with("::slotted(span)/* FIXME"));
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_translate_js_introduces_open_mode() {
        assert_eq!(
            translate_js("var root = el.createShadowRoot();"),
            "var root = el.attachShadow({mode: 'open'});"
        );
    }
}
