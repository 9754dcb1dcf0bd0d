//! DOM 工具模块
//!
//! 基于 html5ever / markup5ever_rcdom 的节点设施封装：解析、序列化、
//! 属性读写以及转换引擎唯一的叶子原语 [`rebuild_element`]
//! （按属性策略将一个元素重建为另一个标签名）。
//!
//! 转换引擎对节点设施的要求仅限于此：按标签名创建元素、读写属性、
//! 移动子节点、读取父节点、改写文本内容、读取标签名。

use std::cell::RefCell;
use std::rc::Rc;

use html5ever::interface::{Attribute, QualName};
use html5ever::parse_document;
use html5ever::serialize::{serialize, SerializeOpts};
use html5ever::tendril::{format_tendril, TendrilSink};
use html5ever::{namespace_url, ns, LocalName};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};

/// 将 HTML 文本解析为 DOM
pub fn html_to_dom(markup: &str) -> RcDom {
    parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut markup.as_bytes())
        .unwrap()
}

/// 将 DOM 序列化为 HTML 文本
pub fn serialize_document(dom: &RcDom) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let serializable: SerializableHandle = dom.document.clone().into();
    serialize(&mut buf, &serializable, SerializeOpts::default())
        .expect("Unable to serialize DOM into buffer");
    String::from_utf8_lossy(&buf).to_string()
}

/// 获取节点标签名（非元素节点返回 None）
pub fn get_node_name(node: &Handle) -> Option<&'_ str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// 获取节点属性值
pub fn get_node_attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| &*attr.name.local == attr_name)
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

/// 设置节点属性（已存在则更新，否则追加到属性表末尾）
pub fn set_node_attr(node: &Handle, attr_name: &str, attr_value: &str) {
    if let NodeData::Element { attrs, .. } = &node.data {
        let attrs_mut = &mut attrs.borrow_mut();

        if let Some(attr) = attrs_mut
            .iter_mut()
            .find(|attr| &*attr.name.local == attr_name)
        {
            attr.value.clear();
            attr.value.push_slice(attr_value);
        } else {
            attrs_mut.push(Attribute {
                name: QualName::new(None, ns!(), LocalName::from(attr_name)),
                value: format_tendril!("{}", attr_value),
            });
        }
    }
}

/// 按标签名创建一个不挂在任何文档上的空元素
pub fn create_element(tag_name: &str) -> Handle {
    Node::new(NodeData::Element {
        name: QualName::new(None, ns!(html), LocalName::from(tag_name)),
        attrs: RefCell::new(Vec::new()),
        template_contents: RefCell::new(None),
        mathml_annotation_xml_integration_point: false,
    })
}

/// 将 from 的全部子节点按原顺序移动（而非复制）到 to 末尾
pub fn move_children(from: &Handle, to: &Handle) {
    let mut source_children = from.children.borrow_mut();
    let mut target_children = to.children.borrow_mut();

    for child in source_children.drain(..) {
        child.parent.set(Some(Rc::downgrade(to)));
        target_children.push(child);
    }
}

/// 在父节点中用 new 原位替换 old（old 无父节点时不做任何事）
pub fn replace_node(old: &Handle, new: &Handle) {
    if let Some(parent) = old.parent.take().and_then(|weak| weak.upgrade()) {
        let mut siblings = parent.children.borrow_mut();
        if let Some(position) = siblings.iter().position(|child| Rc::ptr_eq(child, old)) {
            siblings[position] = new.clone();
        }
        new.parent.set(Some(Rc::downgrade(&parent)));
    }
}

/// 携带属性的元素重建：两个方向的元素转换器共用的叶子原语
///
/// 以 target_tag 新建元素，把 source 的子节点全部移入、属性全部复制
/// （skip_attrs 中列出的映射属性除外），并在 source 的父节点中原位替换之。
/// 返回新元素，调用方可以从它继续遍历。
pub fn rebuild_element(source: &Handle, target_tag: &str, skip_attrs: &[&str]) -> Handle {
    let target = create_element(target_tag);

    if let (
        NodeData::Element {
            attrs: source_attrs, ..
        },
        NodeData::Element {
            attrs: target_attrs, ..
        },
    ) = (&source.data, &target.data)
    {
        let mut target_attrs = target_attrs.borrow_mut();
        for attr in source_attrs.borrow().iter() {
            if skip_attrs
                .iter()
                .any(|skip| attr.name.local.as_ref().eq_ignore_ascii_case(skip))
            {
                continue;
            }
            target_attrs.push(attr.clone());
        }
    }

    move_children(source, &target);
    replace_node(source, &target);
    target
}

/// 用 f 改写节点的所有直接文本子节点
pub fn rewrite_text_children(node: &Handle, mut f: impl FnMut(&str) -> String) {
    for child in node.children.borrow().iter() {
        if let NodeData::Text { contents } = &child.data {
            let current = contents.borrow().to_string();
            let translated = f(&current);
            contents.replace(format_tendril!("{}", translated));
        }
    }
}
