//! Table rule: reads an HTML table into a [`LogicalTable`] and renders it,
//! bypassing the engine's own table handling.

use std::rc::Rc;

use htmd::{Element, element_handler::Handlers};
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Node, NodeData, RcDom};

use super::RuleContext;
use super::node_util::{element_children, is_element, tag_name};
use crate::markdown_converter::table_renderer::LogicalTable;
use crate::utils::SKIPPED_TAGS;

pub(super) fn is_table(_element: &Element<'_>) -> bool {
    true
}

pub(super) fn emit_table(
    _handlers: &dyn Handlers,
    element: &Element<'_>,
    _context: &RuleContext,
) -> String {
    logical_table(element.node).render()
}

/// Build the logical table for a `<table>` node.
///
/// The header is the first row inside `<thead>`, or the first row overall
/// when there is no head section. All other rows are body rows, in
/// document order. Rows of nested tables are not collected.
pub fn logical_table(table: &Rc<Node>) -> LogicalTable {
    let rows = collect_rows(table);
    if rows.is_empty() {
        return LogicalTable::default();
    }

    let header_idx = rows.iter().position(|(in_head, _)| *in_head).unwrap_or(0);

    let mut headers = Vec::new();
    let mut body = Vec::with_capacity(rows.len() - 1);
    for (idx, (_, row)) in rows.iter().enumerate() {
        let cells: Vec<String> = row_cells(row).iter().map(normalize_cell_text).collect();
        if idx == header_idx {
            headers = cells.iter().map(|c| c.replace('\n', " ")).collect();
        } else {
            body.push(cells);
        }
    }

    if body.iter().any(|r| r.len() != headers.len()) {
        log::debug!(
            "Ragged table: {} header cells, row widths {:?}",
            headers.len(),
            body.iter().map(Vec::len).collect::<Vec<_>>()
        );
    }

    LogicalTable::new(headers, body)
}

/// Plain text of a cell: `<br>` becomes `\n`, other markup is dropped,
/// whitespace runs collapse to one space per line, blank leading and
/// trailing lines are trimmed, and `|` is escaped.
///
/// # Examples
/// ```
/// # use kodegen_tools_pastedown::markdown_converter::custom_handlers::normalize_cell_html;
/// assert_eq!(normalize_cell_html("  one <b>two</b><br> three  "), "one two\nthree");
/// assert_eq!(normalize_cell_html("a | b"), r"a \| b");
/// ```
pub fn normalize_cell_text(cell: &Rc<Node>) -> String {
    let mut raw = String::new();
    push_cell_text(cell, &mut raw);

    let lines: Vec<String> = raw
        .split('\n')
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect();

    let Some(start) = lines.iter().position(|l| !l.is_empty()) else {
        return String::new();
    };
    let end = lines.iter().rposition(|l| !l.is_empty()).unwrap_or(start);

    lines[start..=end].join("\n").replace('|', r"\|")
}

/// Run the cell normalizer over an HTML snippet, as if it were the inner
/// markup of a `<td>`.
pub fn normalize_cell_html(markup: &str) -> String {
    let dom = html5ever::parse_document(RcDom::default(), Default::default()).one(markup);
    match find_element(&dom.document, "body") {
        Some(body) => normalize_cell_text(&body),
        None => String::new(),
    }
}

fn find_element(node: &Rc<Node>, tag: &str) -> Option<Rc<Node>> {
    if is_element(node, tag) {
        return Some(Rc::clone(node));
    }
    node.children
        .borrow()
        .iter()
        .find_map(|child| find_element(child, tag))
}

fn push_cell_text(node: &Rc<Node>, out: &mut String) {
    match &node.data {
        NodeData::Text { contents } => {
            out.extend(contents.borrow().chars().map(|c| match c {
                '\n' | '\r' | '\t' => ' ',
                other => other,
            }));
        }
        NodeData::Element { .. } => {
            let tag = tag_name(node).unwrap_or_default();
            if tag == "br" {
                out.push('\n');
            } else if !SKIPPED_TAGS.contains(&tag) {
                for child in node.children.borrow().iter() {
                    push_cell_text(child, out);
                }
            }
        }
        _ => {
            for child in node.children.borrow().iter() {
                push_cell_text(child, out);
            }
        }
    }
}

/// Rows of `table` tagged with whether they sit in `<thead>`.
fn collect_rows(table: &Rc<Node>) -> Vec<(bool, Rc<Node>)> {
    let mut rows = Vec::new();
    for child in element_children(table) {
        let tag = tag_name(&child).unwrap_or_default().to_string();
        match tag.as_str() {
            "tr" => rows.push((false, child)),
            "thead" | "tbody" | "tfoot" => {
                let in_head = tag == "thead";
                rows.extend(
                    element_children(&child)
                        .into_iter()
                        .filter(|row| is_element(row, "tr"))
                        .map(|row| (in_head, row)),
                );
            }
            _ => {}
        }
    }
    rows
}

fn row_cells(row: &Rc<Node>) -> Vec<Rc<Node>> {
    element_children(row)
        .into_iter()
        .filter(|cell| is_element(cell, "td") || is_element(cell, "th"))
        .collect()
}
