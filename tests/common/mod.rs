// 集成测试公共模块
//
// 提供 DOM 解析与结构比较的辅助工具

use markup5ever_rcdom::{Handle, NodeData, RcDom};

use shadow_translate::dom::html_to_dom;

/// 解析 HTML 文本为 DOM
pub fn parse(markup: &str) -> RcDom {
    html_to_dom(markup)
}

/// 深度优先查找第一个指定标签名的元素
pub fn first_element_by_name(node: &Handle, tag_name: &str) -> Option<Handle> {
    if let NodeData::Element { ref name, .. } = node.data {
        if &*name.local == tag_name {
            return Some(node.clone());
        }
    }

    for child in node.children.borrow().iter() {
        if let Some(found) = first_element_by_name(child, tag_name) {
            return Some(found);
        }
    }

    None
}

/// 结构化比较两棵节点树（属性顺序不敏感）
pub fn node_eq(a: &Handle, b: &Handle) -> bool {
    let data_eq = match (&a.data, &b.data) {
        (NodeData::Document, NodeData::Document) => true,
        (NodeData::Doctype { name: a_name, .. }, NodeData::Doctype { name: b_name, .. }) => {
            a_name == b_name
        }
        (NodeData::Text { contents: a_text }, NodeData::Text { contents: b_text }) => {
            *a_text.borrow() == *b_text.borrow()
        }
        (NodeData::Comment { contents: a_text }, NodeData::Comment { contents: b_text }) => {
            a_text == b_text
        }
        (
            NodeData::Element {
                name: a_name,
                attrs: a_attrs,
                ..
            },
            NodeData::Element {
                name: b_name,
                attrs: b_attrs,
                ..
            },
        ) => a_name.local == b_name.local && sorted_attrs(a_attrs) == sorted_attrs(b_attrs),
        _ => false,
    };

    if !data_eq {
        return false;
    }

    let a_children = a.children.borrow();
    let b_children = b.children.borrow();
    a_children.len() == b_children.len()
        && a_children
            .iter()
            .zip(b_children.iter())
            .all(|(a_child, b_child)| node_eq(a_child, b_child))
}

fn sorted_attrs(
    attrs: &std::cell::RefCell<Vec<html5ever::interface::Attribute>>,
) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = attrs
        .borrow()
        .iter()
        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
        .collect();
    pairs.sort();
    pairs
}
