//! 规范规则表
//!
//! 两个方向、两种表示（节点树 / 标记文本）共用的唯一事实来源：
//! 分发元素的标签名、映射属性名，以及 `name="X"` 与
//! `select="[slot='X']"` 之间的规范双射。
//!
//! 树级转换器直接调用这里的映射函数；文本级转换器的替换规则
//! 内嵌同一形状的模式（见 `v1tov0` / `v0tov1`），两者必须保持一致。

use regex::Regex;

/// v1 方言的分发元素标签
pub const SLOT_TAG: &str = "slot";
/// v0 方言的分发元素标签
pub const CONTENT_TAG: &str = "content";
/// v1 方言的映射属性
pub const NAME_ATTR: &str = "name";
/// v0 方言的映射属性
pub const SELECT_ATTR: &str = "select";

/// `<style>` 标签名（树级转换时按选项改写其文本）
pub const STYLE_TAG: &str = "style";
/// `<script>` 标签名（树级转换时按选项改写其文本）
pub const SCRIPT_TAG: &str = "script";

/// 由 slot 名构造规范的 content 选择器：`name="X"` → `[slot='X']`
pub fn selector_for_slot_name(name: &str) -> String {
    format!("[slot='{}']", name)
}

/// 由 content 选择器逆推 slot 名
///
/// 只接受整值恰为属性相等形状 `[slot='X']` / `[slot="X"]`
/// （允许首尾空白）的选择器；其余任何 select 值都没有对应的 slot 名，
/// 调用方应退化为未命名的默认 slot——这是文档化的有意信息丢失。
pub fn slot_name_from_selector(select: &str) -> Option<String> {
    let attr_equality = Regex::new(r#"(?i)^\s*\[slot=(?:"([^"]*)"|'([^']*)')\]\s*$"#).unwrap();

    attr_equality.captures(select).and_then(|caps| {
        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().to_string())
    })
}
