// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use ego_tree::NodeRef;
use scraper::node::Element;
use scraper::{ElementRef, Html, Node};
use std::borrow::Cow;

/// HTML中无闭合标签的空元素
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// 标记访问器
///
/// 序列化时对元素与文本节点进行改写的钩子。
/// 访问按文档顺序进行，保证同一输入产生相同输出
pub trait MarkupVisitor {
    /// 是否解包该元素（以其子节点原序替换自身，仅丢弃包装标签）
    fn unwrap_element(&self, _element: &Element) -> bool {
        false
    }

    /// 为元素计算内联样式
    ///
    /// 返回`Some`时覆盖原有的style属性；返回`None`时原属性保持不变
    fn style_for(&self, _element: &Element) -> Option<Cow<'static, str>> {
        None
    }

    /// 改写文本节点
    ///
    /// 返回`Some`时以返回的标记整体替换该文本节点（调用方自行完成转义）
    fn rewrite_text(&self, _text: &str) -> Option<String> {
        None
    }
}

/// 恒等访问器，原样序列化
pub struct Identity;

impl MarkupVisitor for Identity {}

/// 序列化单个元素及其子树
pub fn serialize_element<V: MarkupVisitor>(element: ElementRef<'_>, visitor: &V) -> String {
    let mut out = String::new();
    write_node(*element, visitor, &mut out);
    out
}

/// 序列化片段树的全部顶层节点
pub fn serialize_fragment<V: MarkupVisitor>(fragment: &Html, visitor: &V) -> String {
    let mut out = String::new();
    for child in fragment.root_element().children() {
        write_node(child, visitor, &mut out);
    }
    out
}

fn write_node<V: MarkupVisitor>(node: NodeRef<'_, Node>, visitor: &V, out: &mut String) {
    match node.value() {
        Node::Element(element) => {
            if visitor.unwrap_element(element) {
                for child in node.children() {
                    write_node(child, visitor, out);
                }
                return;
            }
            write_open_tag(element, visitor.style_for(element), out);
            if VOID_ELEMENTS.contains(&element.name()) {
                return;
            }
            for child in node.children() {
                write_node(child, visitor, out);
            }
            out.push_str("</");
            out.push_str(element.name());
            out.push('>');
        }
        Node::Text(text) => {
            let raw: &str = text;
            match visitor.rewrite_text(raw) {
                Some(replacement) => out.push_str(&replacement),
                None => out.push_str(&html_escape::encode_text(raw)),
            }
        }
        Node::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(comment);
            out.push_str("-->");
        }
        // 文档与片段根节点只序列化其子节点
        Node::Document | Node::Fragment => {
            for child in node.children() {
                write_node(child, visitor, out);
            }
        }
        _ => {}
    }
}

fn write_open_tag(element: &Element, style: Option<Cow<'static, str>>, out: &mut String) {
    out.push('<');
    out.push_str(element.name());
    for (name, value) in element.attrs() {
        if style.is_some() && name == "style" {
            continue;
        }
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(value));
        out.push('"');
    }
    if let Some(style) = style {
        out.push_str(" style=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(style.as_ref()));
        out.push('"');
    }
    out.push('>');
}
