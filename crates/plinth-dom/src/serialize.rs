//! HTML serialization of the document tree.

use crate::document::{Document, NodeId, NodeKind};

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

impl Document {
    /// Serialize the whole document, with doctype preamble.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n");
        self.write_node(self.root(), &mut out);
        out
    }

    /// Serialize a single node and its subtree. Useful for comparing the
    /// rendered output of one container.
    pub fn serialize_node(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(id, &mut out);
        out
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        match &self.nodes[id.0].kind {
            NodeKind::Text(text) => out.push_str(&escape_text(text)),
            NodeKind::Raw(markup) => out.push_str(markup),
            NodeKind::Element(el) => {
                out.push('<');
                out.push_str(&el.tag);
                for (name, value) in &el.attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape_attr(value));
                    out.push('"');
                }
                if !el.styles.is_empty() {
                    out.push_str(" style=\"");
                    let css = el
                        .styles
                        .iter()
                        .map(|(p, v)| format!("{p}: {v}"))
                        .collect::<Vec<_>>()
                        .join("; ");
                    out.push_str(&escape_attr(&css));
                    out.push('"');
                }
                out.push('>');

                if VOID_ELEMENTS.contains(&el.tag.as_str()) {
                    return;
                }

                for &child in self.children(id) {
                    self.write_node(child, out);
                }

                out.push_str("</");
                out.push_str(&el.tag);
                out.push('>');
            }
        }
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use crate::document::Document;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_attributes_and_text() {
        let mut doc = Document::new();
        let body = doc.body();
        let a = doc.create_element("a");
        doc.set_attribute(a, "href", "https://example.com");
        doc.set_text_content(a, "Example");
        doc.append_child(body, a);

        assert_eq!(
            doc.serialize_node(a),
            r#"<a href="https://example.com">Example</a>"#
        );
    }

    #[test]
    fn escapes_text_but_not_raw_markup() {
        let mut doc = Document::new();
        let p = doc.create_element("p");
        doc.set_text_content(p, "1 < 2 & 3 > 2");
        assert_eq!(doc.serialize_node(p), "<p>1 &lt; 2 &amp; 3 &gt; 2</p>");

        let div = doc.create_element("div");
        doc.set_inner_html(div, "<em>kept</em>");
        assert_eq!(doc.serialize_node(div), "<div><em>kept</em></div>");
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let mut doc = Document::new();
        let meta = doc.create_element("meta");
        doc.set_attribute(meta, "charset", "utf-8");
        assert_eq!(doc.serialize_node(meta), r#"<meta charset="utf-8">"#);
    }

    #[test]
    fn inline_styles_join_into_one_attribute() {
        let mut doc = Document::new();
        let el = doc.create_element("div");
        doc.set_style(el, "opacity", "0");
        doc.set_style(el, "transform", "translateY(30px)");

        assert_eq!(
            doc.serialize_node(el),
            r#"<div style="opacity: 0; transform: translateY(30px)"></div>"#
        );
    }

    #[test]
    fn document_starts_with_doctype() {
        let doc = Document::new();
        let html = doc.to_html();
        assert!(html.starts_with("<!DOCTYPE html>\n<html>"));
        assert!(html.ends_with("</html>"));
    }
}
