//! Document-order queries over the element tree.

use crate::document::{Document, NodeId, NodeKind};

impl Document {
    /// All element nodes reachable from the root, in document order.
    pub fn elements(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.walk(self.root(), &mut out);
        out
    }

    fn walk(&self, id: NodeId, out: &mut Vec<NodeId>) {
        if matches!(self.nodes[id.0].kind, NodeKind::Element(_)) {
            out.push(id);
        }
        for &child in self.children(id) {
            self.walk(child, out);
        }
    }

    /// First element with the given `id` attribute.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.elements()
            .into_iter()
            .find(|&el| self.attribute(el, "id") == Some(id))
    }

    pub fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.elements()
            .into_iter()
            .filter(|&el| self.tag(el) == Some(tag))
            .collect()
    }

    /// Elements carrying the given attribute, regardless of value.
    pub fn elements_with_attribute(&self, name: &str) -> Vec<NodeId> {
        self.elements()
            .into_iter()
            .filter(|&el| self.attribute(el, name).is_some())
            .collect()
    }

    pub fn elements_with_class(&self, class: &str) -> Vec<NodeId> {
        self.elements()
            .into_iter()
            .filter(|&el| self.has_class(el, class))
            .collect()
    }

    /// Anchor elements whose `href` is a same-page fragment (`#...`).
    pub fn anchors_with_fragment_href(&self) -> Vec<NodeId> {
        self.elements_by_tag("a")
            .into_iter()
            .filter(|&el| {
                self.attribute(el, "href")
                    .map(|href| href.starts_with('#'))
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Script elements whose `src` contains the given substring.
    pub fn scripts_with_src_containing(&self, needle: &str) -> Vec<NodeId> {
        self.elements_by_tag("script")
            .into_iter()
            .filter(|&el| {
                self.attribute(el, "src")
                    .map(|src| src.contains(needle))
                    .unwrap_or(false)
            })
            .collect()
    }
}
