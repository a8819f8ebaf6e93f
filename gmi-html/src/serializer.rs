//! HTML serialization (gemtext document → HTML export)
//!
//! Converts a parsed gemtext document to a complete HTML5 page with embedded CSS.
//! Pipeline: title resolution pass → per-node fragment emission → skeleton wrapping.

use gmi_parser::gmi::{Document, Node};

/// Title used when the document has no level-1 header.
pub const FALLBACK_TITLE: &str = "Page without title";

/// Resolve the document title: the first header node with level exactly 1.
pub fn resolve_title(document: &Document) -> &str {
    for node in document {
        if let Node::Header { level: 1, title } = node {
            return title;
        }
    }
    FALLBACK_TITLE
}

/// Serialize a gemtext document to a self-contained HTML page.
///
/// Infallible: the node set is a closed enum, so every kind has a fragment template and the
/// match below is exhaustive by construction.
pub fn serialize_to_html(document: &Document) -> String {
    let mut body = String::new();
    for node in document {
        render_node(node, &mut body);
    }

    wrap_in_document(resolve_title(document), &body)
}

/// Emit the fragment for one node.
fn render_node(node: &Node, out: &mut String) {
    match node {
        Node::Header { level, title } => {
            out.push_str(&format!("  <h{0}>{1}</h{0}>\n", level, title));
        }
        Node::Paragraph { content } => {
            out.push_str(&format!("  <p>{}</p>\n", content));
        }
        Node::Links { links } => {
            out.push_str("  <ul>\n");
            for link in links {
                out.push_str(&format!(
                    "    <li><a href=\"{}\">{}</a></li>\n",
                    link.target, link.title
                ));
            }
            out.push_str("  </ul>\n");
        }
        Node::List { elements } => {
            out.push_str("  <ul>\n");
            for element in elements {
                out.push_str(&format!("    <li>{}</li>\n", element));
            }
            out.push_str("  </ul>\n");
        }
        Node::Quote { content } => {
            out.push_str("  <pre>\n");
            for block in content {
                out.push_str(block);
                out.push('\n');
            }
            out.push_str("  </pre>\n");
        }
    }
}

/// Wrap the rendered body in the fixed HTML5 skeleton with embedded CSS.
///
/// The skeleton and stylesheet are static constants, identical for every conversion.
fn wrap_in_document(title: &str, body: &str) -> String {
    let css = include_str!("../css/gmi.css");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
   <meta charset="utf-8">
   <title>{}</title>
  <style type="text/css">
{}   </style>
 </head>
 <body>
{} </body>
</html>
"#,
        title, css, body
    )
}
