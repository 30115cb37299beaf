//! Header-row inference for tables pasted without a `<thead>`.
//!
//! Spreadsheets and chat apps copy tables as bare `<tr>` rows. Markdown
//! tables need a header line, so the first row of every head-less table is
//! promoted: its cells become `<th>` and the row moves into a new `<thead>`.
//! All other rows stay where they are.

use ego_tree::NodeId;

use super::super::dom::{DomNode, DomTree};

/// Table sections that may own rows directly.
const ROW_SECTIONS: [&str; 3] = ["thead", "tbody", "tfoot"];

/// Promote the first row of every table lacking a head section.
///
/// Returns the number of tables that received an inferred header.
pub fn infer_header_rows(tree: &mut DomTree) -> usize {
    let mut promoted = 0;

    for table_id in tree.elements_named(&["table"]) {
        if has_head_section(tree, table_id) {
            continue;
        }

        let Some(row_id) = first_row(tree, table_id) else {
            tracing::debug!("Skipping header inference for table without rows");
            continue;
        };

        promote_row(tree, table_id, row_id);
        promoted += 1;
    }

    tracing::debug!("Inferred header rows for {} tables", promoted);
    promoted
}

fn has_head_section(tree: &DomTree, table_id: NodeId) -> bool {
    tree.element_children(table_id)
        .into_iter()
        .any(|id| tree.get(id).is_some_and(|n| n.value().is_element("thead")))
}

/// First `<tr>` owned by this table, either directly or through a section.
///
/// Rows of nested tables are never considered.
fn first_row(tree: &DomTree, table_id: NodeId) -> Option<NodeId> {
    for child_id in tree.element_children(table_id) {
        let node = tree.get(child_id)?;
        if node.value().is_element("tr") {
            return Some(child_id);
        }
        if ROW_SECTIONS.iter().any(|s| node.value().is_element(s)) {
            let row = tree
                .element_children(child_id)
                .into_iter()
                .find(|id| tree.get(*id).is_some_and(|n| n.value().is_element("tr")));
            if row.is_some() {
                return row;
            }
        }
    }
    None
}

fn promote_row(tree: &mut DomTree, table_id: NodeId, row_id: NodeId) {
    for cell_id in tree.element_children(row_id) {
        if let Some(mut cell) = tree.get_mut(cell_id)
            && let Some(el) = cell.value().as_element_mut()
            && el.tag == "td"
        {
            el.tag = "th".to_string();
        }
    }

    let Some(mut table) = tree.get_mut(table_id) else {
        return;
    };
    let mut thead = table.prepend(DomNode::element("thead"));
    thead.append_id(row_id);
}
