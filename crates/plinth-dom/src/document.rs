//! Arena-based document tree and mutation operations.

/// Handle to a node in a [`Document`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// How a scroll request should be animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Auto,
}

/// The most recent scroll request made against the document.
///
/// The headless tree has no viewport; scrolls are recorded so hosts and
/// tests can observe where navigation would have landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: NodeId,
    pub behavior: ScrollBehavior,
}

#[derive(Debug, Clone)]
pub(crate) enum NodeKind {
    Element(ElementData),
    Text(String),
    /// Markup emitted verbatim, without escaping. Only ever created through
    /// [`Document::set_inner_html`]; callers own the trust decision.
    Raw(String),
}

#[derive(Debug, Clone)]
pub(crate) struct ElementData {
    pub tag: String,
    /// Attributes in insertion order. `style` is kept separately in
    /// `styles` and must not appear here.
    pub attrs: Vec<(String, String)>,
    /// Inline style declarations in insertion order.
    pub styles: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub kind: NodeKind,
    pub children: Vec<NodeId>,
}

/// An in-memory document tree.
///
/// Created with `html > head + body` roots, like the parsed form of an
/// empty page. All mutation goes through methods so the tree stays
/// consistent; handles are plain indices and stay valid for the life of
/// the document (removal detaches, it never frees).
#[derive(Debug)]
pub struct Document {
    pub(crate) nodes: Vec<Node>,
    html: NodeId,
    head: NodeId,
    body: NodeId,
    scroll: Option<ScrollRequest>,
}

impl Document {
    /// Create an empty document with `html`, `head`, and `body` elements.
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            html: NodeId(0),
            head: NodeId(0),
            body: NodeId(0),
            scroll: None,
        };
        let html = doc.create_element("html");
        let head = doc.create_element("head");
        let body = doc.create_element("body");
        doc.append_child(html, head);
        doc.append_child(html, body);
        doc.html = html;
        doc.head = head;
        doc.body = body;
        doc
    }

    pub fn root(&self) -> NodeId {
        self.html
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Create a detached element node.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeKind::Element(ElementData {
            tag: tag.to_string(),
            attrs: Vec::new(),
            styles: Vec::new(),
        }))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Text(text.to_string()))
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            children: Vec::new(),
        });
        id
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.push(child);
    }

    /// Detach all children of an element. Node storage is retained; the
    /// children simply become unreachable.
    pub fn clear_children(&mut self, id: NodeId) {
        self.nodes[id.0].children.clear();
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::Element(el) => Some(&el.tag),
            _ => None,
        }
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::Element(el) => el
                .attrs
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    /// Set an attribute, replacing any existing value in place.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        if let NodeKind::Element(el) = &mut self.nodes[id.0].kind {
            match el.attrs.iter_mut().find(|(n, _)| n == name) {
                Some((_, v)) => *v = value.to_string(),
                None => el.attrs.push((name.to_string(), value.to_string())),
            }
        }
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) {
        if let NodeKind::Element(el) = &mut self.nodes[id.0].kind {
            el.attrs.retain(|(n, _)| n != name);
        }
    }

    /// Inline style declaration, replacing any existing value for the
    /// same property.
    pub fn set_style(&mut self, id: NodeId, property: &str, value: &str) {
        if let NodeKind::Element(el) = &mut self.nodes[id.0].kind {
            match el.styles.iter_mut().find(|(p, _)| p == property) {
                Some((_, v)) => *v = value.to_string(),
                None => el.styles.push((property.to_string(), value.to_string())),
            }
        }
    }

    pub fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::Element(el) => el
                .styles
                .iter()
                .find(|(p, _)| p == property)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    /// Set a custom property on the document root, the headless analogue
    /// of `document.documentElement.style.setProperty`.
    pub fn set_root_property(&mut self, property: &str, value: &str) {
        let root = self.html;
        self.set_style(root, property, value);
    }

    pub fn root_property(&self, property: &str) -> Option<&str> {
        self.style(self.html, property)
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.attribute(id, "class")
            .map(|v| v.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if self.has_class(id, class) {
            return;
        }
        let merged = match self.attribute(id, "class") {
            Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.set_attribute(id, "class", &merged);
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        let Some(existing) = self.attribute(id, "class").map(str::to_owned) else {
            return;
        };
        let remaining = existing
            .split_whitespace()
            .filter(|c| *c != class)
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attribute(id, "class", &remaining);
    }

    /// Replace an element's children with a single text node.
    pub fn set_text_content(&mut self, id: NodeId, text: &str) {
        let node = self.create_text(text);
        self.clear_children(id);
        self.append_child(id, node);
    }

    /// Replace an element's children with raw markup, emitted verbatim at
    /// serialization. The markup is trusted as-is.
    pub fn set_inner_html(&mut self, id: NodeId, html: &str) {
        let node = self.push(NodeKind::Raw(html.to_string()));
        self.clear_children(id);
        self.append_child(id, node);
    }

    /// Concatenated text of the node and its descendants. Raw markup
    /// children are excluded.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match &self.nodes[id.0].kind {
            NodeKind::Text(t) => out.push_str(t),
            NodeKind::Raw(_) => {}
            NodeKind::Element(_) => {
                for &child in &self.nodes[id.0].children {
                    self.collect_text(child, out);
                }
            }
        }
    }

    /// Record a scroll request against the document.
    pub fn scroll_to(&mut self, target: NodeId, behavior: ScrollBehavior) {
        self.scroll = Some(ScrollRequest { target, behavior });
    }

    pub fn scroll_state(&self) -> Option<ScrollRequest> {
        self.scroll
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
