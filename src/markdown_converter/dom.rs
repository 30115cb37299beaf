//! Owned, arena-indexed DOM for one paste operation.
//!
//! The clipboard markup is parsed once with `scraper` (html5ever underneath)
//! and copied into an `ego_tree::Tree<DomNode>` that this crate owns outright.
//! The sanitizer and the structural rewrite passes edit that tree in place by
//! `NodeId`, then the tree is serialized back to HTML for the Markdown engine
//! and dropped.
//!
//! Parsing never fails: html5ever recovers from any input, and anything it
//! cannot place ends up as text.

use ego_tree::{NodeId, NodeMut, NodeRef, Tree};
use scraper::{Html, node::Node};

use crate::utils::MAX_HTML_NESTING_DEPTH;

/// Void elements never get a closing tag when serialized.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// A node of the owned DOM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomNode {
    /// Root of a parsed fragment. Never serialized itself.
    Fragment,
    Element(ElementData),
    Text(String),
}

/// Tag name and attributes of an element node.
///
/// Attributes keep source order; names are stored as the parser produced
/// them (html5ever lowercases HTML attribute names).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
}

impl ElementData {
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    /// Case-insensitive attribute lookup.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Whether the whitespace-separated `class` list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }
}

impl DomNode {
    #[must_use]
    pub fn element(tag: &str) -> Self {
        Self::Element(ElementData::new(tag))
    }

    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&ElementData> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// True when this is an element named `tag` (case-insensitive).
    pub fn is_element(&self, tag: &str) -> bool {
        self.as_element()
            .is_some_and(|el| el.tag.eq_ignore_ascii_case(tag))
    }
}

/// The owned tree for a single conversion.
#[derive(Debug, Clone)]
pub struct DomTree {
    tree: Tree<DomNode>,
}

impl DomTree {
    /// Parse `markup` as an HTML body fragment.
    ///
    /// Comments, doctypes and processing instructions are dropped. Elements
    /// nested deeper than [`MAX_HTML_NESTING_DEPTH`] are replaced by their
    /// text content.
    pub fn parse_fragment(markup: &str) -> Self {
        let document = Html::parse_fragment(markup);
        let mut tree = Tree::new(DomNode::Fragment);
        let root_id = tree.root().id();

        // html5ever wraps fragment content in a synthetic <html> element
        let source_root = document.root_element();
        copy_children(*source_root, &mut tree, root_id, 0);

        Self { tree }
    }

    pub fn root_id(&self) -> NodeId {
        self.tree.root().id()
    }

    pub fn get(&self, id: NodeId) -> Option<NodeRef<'_, DomNode>> {
        self.tree.get(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<NodeMut<'_, DomNode>> {
        self.tree.get_mut(id)
    }

    /// Ids of every element reachable from the root, in document order.
    ///
    /// Collected up front so callers can mutate the tree while iterating.
    pub fn element_ids(&self) -> Vec<NodeId> {
        self.tree
            .root()
            .descendants()
            .filter(|node| node.value().as_element().is_some())
            .map(|node| node.id())
            .collect()
    }

    /// Ids of elements whose tag is one of `tags`, in document order.
    pub fn elements_named(&self, tags: &[&str]) -> Vec<NodeId> {
        self.tree
            .root()
            .descendants()
            .filter(|node| tags.iter().any(|tag| node.value().is_element(tag)))
            .map(|node| node.id())
            .collect()
    }

    /// Apply `f` to every element's data.
    pub fn for_each_element_mut(&mut self, mut f: impl FnMut(&mut ElementData)) {
        for id in self.element_ids() {
            if let Some(mut node) = self.tree.get_mut(id)
                && let Some(el) = node.value().as_element_mut()
            {
                f(el);
            }
        }
    }

    /// Ids of the element children of `id`, skipping text.
    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        self.tree
            .get(id)
            .map(|node| {
                node.children()
                    .filter(|child| child.value().as_element().is_some())
                    .map(|child| child.id())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Ids of all children of `id`, in order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.tree
            .get(id)
            .map(|node| node.children().map(|child| child.id()).collect())
            .unwrap_or_default()
    }

    /// Concatenated text of every text node under `id`.
    pub fn text_content(&self, id: NodeId) -> String {
        let Some(node) = self.tree.get(id) else {
            return String::new();
        };
        node.descendants()
            .filter_map(|n| n.value().as_text())
            .collect()
    }

    /// Serialize the fragment back to HTML.
    pub fn to_html(&self) -> String {
        let mut output = String::new();
        for child in self.tree.root().children() {
            serialize_node(child, &mut output);
        }
        output
    }
}

fn copy_children(
    source: ego_tree::NodeRef<'_, Node>,
    tree: &mut Tree<DomNode>,
    parent: NodeId,
    depth: usize,
) {
    for child in source.children() {
        let value = match child.value() {
            Node::Text(text) => DomNode::Text(text.to_string()),
            Node::Element(element) if depth >= MAX_HTML_NESTING_DEPTH => {
                log::debug!(
                    "Flattening <{}> beyond nesting depth {}",
                    element.name(),
                    MAX_HTML_NESTING_DEPTH
                );
                let text: String = child
                    .descendants()
                    .filter_map(|n| match n.value() {
                        Node::Text(t) => Some(t.to_string()),
                        _ => None,
                    })
                    .collect();
                DomNode::Text(text)
            }
            Node::Element(element) => {
                let mut data = ElementData::new(element.name());
                data.attrs = element
                    .attrs()
                    .map(|(name, value)| (name.to_string(), value.to_string()))
                    .collect();
                DomNode::Element(data)
            }
            // Comments (<!--StartFragment-->), doctypes and PIs carry no content
            _ => continue,
        };

        let recurse = matches!(value, DomNode::Element(_));
        let Some(mut parent_node) = tree.get_mut(parent) else {
            return;
        };
        let child_id = parent_node.append(value).id();

        if recurse {
            copy_children(child, tree, child_id, depth + 1);
        }
    }
}

fn serialize_node(node: NodeRef<'_, DomNode>, output: &mut String) {
    match node.value() {
        DomNode::Fragment => {
            for child in node.children() {
                serialize_node(child, output);
            }
        }
        DomNode::Text(text) => {
            output.push_str(&html_escape::encode_text(text));
        }
        DomNode::Element(el) => {
            output.push('<');
            output.push_str(&el.tag);
            for (name, value) in &el.attrs {
                output.push(' ');
                output.push_str(name);
                output.push_str("=\"");
                output.push_str(&html_escape::encode_double_quoted_attribute(value));
                output.push('"');
            }
            output.push('>');

            if VOID_ELEMENTS.contains(&el.tag.as_str()) {
                return;
            }

            // The parser drops one newline right after <pre>/<textarea>; emit
            // an extra one so a leading newline in the content survives
            if matches!(el.tag.as_str(), "pre" | "textarea" | "listing")
                && node
                    .first_child()
                    .and_then(|c| c.value().as_text())
                    .is_some_and(|t| t.starts_with('\n'))
            {
                output.push('\n');
            }

            for child in node.children() {
                serialize_node(child, output);
            }

            output.push_str("</");
            output.push_str(&el.tag);
            output.push('>');
        }
    }
}
