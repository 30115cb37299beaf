//! Helpers over htmd's `markup5ever_rcdom` nodes.

use std::{cell::Ref, rc::Rc};

use html5ever::Attribute;
use markup5ever_rcdom::{Node, NodeData};

/// Local tag name of an element node.
pub fn tag_name(node: &Node) -> Option<&str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(&*name.local),
        _ => None,
    }
}

pub fn is_element(node: &Node, tag: &str) -> bool {
    tag_name(node).is_some_and(|name| name.eq_ignore_ascii_case(tag))
}

/// Borrow the attribute list of an element node.
pub fn node_attrs(node: &Node) -> Option<Ref<'_, Vec<Attribute>>> {
    match &node.data {
        NodeData::Element { attrs, .. } => Some(attrs.borrow()),
        _ => None,
    }
}

/// Attribute value by name, empty values included.
pub fn get_attr(attrs: &[Attribute], name: &str) -> Option<String> {
    attrs
        .iter()
        .find(|a| attr_named(a, name))
        .map(|a| a.value.to_string())
}

pub fn has_attr(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|a| attr_named(a, name))
}

fn attr_named(attr: &Attribute, name: &str) -> bool {
    let local: &str = &attr.name.local;
    local.eq_ignore_ascii_case(name)
}

/// Whether the `class` attribute lists `class` as one of its tokens.
pub fn has_class(attrs: &[Attribute], class: &str) -> bool {
    get_attr(attrs, "class").is_some_and(|list| list.split_whitespace().any(|c| c == class))
}

/// Parent of `node`, if it is still attached.
pub fn parent_node(node: &Rc<Node>) -> Option<Rc<Node>> {
    // The parent cell only supports take/set
    let weak = node.parent.take();
    node.parent.set(weak.clone());
    weak.and_then(|w| w.upgrade())
}

/// Whether any ancestor of `node` is a `tag` element.
pub fn has_ancestor(node: &Rc<Node>, tag: &str) -> bool {
    let mut current = parent_node(node);
    while let Some(parent) = current {
        if is_element(&parent, tag) {
            return true;
        }
        current = parent_node(&parent);
    }
    false
}

pub fn element_children(node: &Rc<Node>) -> Vec<Rc<Node>> {
    node.children
        .borrow()
        .iter()
        .filter(|child| matches!(child.data, NodeData::Element { .. }))
        .cloned()
        .collect()
}

/// First child that is neither whitespace-only text nor a comment.
pub fn first_significant_child(node: &Rc<Node>) -> Option<Rc<Node>> {
    node.children
        .borrow()
        .iter()
        .find(|child| match &child.data {
            NodeData::Text { contents } => !contents.borrow().trim().is_empty(),
            NodeData::Comment { .. } | NodeData::ProcessingInstruction { .. } => false,
            _ => true,
        })
        .cloned()
}

/// Concatenated text of `node` and its descendants, exactly as parsed.
pub fn raw_text(node: &Rc<Node>) -> String {
    let mut text = String::new();
    push_raw_text(node, &mut text);
    text
}

fn push_raw_text(node: &Rc<Node>, out: &mut String) {
    match &node.data {
        NodeData::Text { contents } => out.push_str(&contents.borrow()),
        NodeData::Element { .. } | NodeData::Document | NodeData::Doctype { .. } => {
            for child in node.children.borrow().iter() {
                push_raw_text(child, out);
            }
        }
        NodeData::Comment { .. } | NodeData::ProcessingInstruction { .. } => {}
    }
}
