//! Event-handler registry with synthetic dispatch.
//!
//! Handlers live outside the tree, keyed by node handle, mirroring how a
//! page script registers listeners against a live document. A host (or a
//! test) drives them by dispatching synthetic clicks and intersection
//! reports; there is no ordering guarantee between independent handlers.

use std::collections::HashSet;

use crate::document::{Document, NodeId};

/// Mutable per-dispatch state handed to click handlers.
#[derive(Debug, Default)]
pub struct EventState {
    default_prevented: bool,
}

impl EventState {
    /// Suppress the default action (e.g. anchor navigation).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

type ClickHandler = Box<dyn Fn(&mut Document, NodeId, &mut EventState)>;
type IntersectAction = Box<dyn Fn(&mut Document, NodeId)>;

/// Watches a set of elements for visibility and runs an action the first
/// time each one becomes sufficiently visible.
///
/// The headless tree has no layout, so geometry is the host's problem:
/// callers report an intersection ratio that already accounts for the
/// watcher's root margin.
pub struct IntersectionWatcher {
    threshold: f64,
    root_margin_bottom: f64,
    observed: Vec<NodeId>,
    revealed: HashSet<NodeId>,
    action: IntersectAction,
}

impl IntersectionWatcher {
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Bottom root margin in CSS pixels; negative values pull the
    /// observation edge inward.
    pub fn root_margin_bottom(&self) -> f64 {
        self.root_margin_bottom
    }

    pub fn observes(&self, id: NodeId) -> bool {
        self.observed.contains(&id)
    }
}

/// Registry of handlers attached to a document's nodes.
#[derive(Default)]
pub struct Events {
    clicks: Vec<(NodeId, ClickHandler)>,
    watchers: Vec<IntersectionWatcher>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a click handler for a node. Multiple handlers on the same
    /// node run in registration order.
    pub fn on_click<F>(&mut self, node: NodeId, handler: F)
    where
        F: Fn(&mut Document, NodeId, &mut EventState) + 'static,
    {
        self.clicks.push((node, Box::new(handler)));
    }

    /// Register an intersection watcher over a set of nodes.
    pub fn observe_intersections<F>(
        &mut self,
        threshold: f64,
        root_margin_bottom: f64,
        nodes: Vec<NodeId>,
        action: F,
    ) where
        F: Fn(&mut Document, NodeId) + 'static,
    {
        self.watchers.push(IntersectionWatcher {
            threshold,
            root_margin_bottom,
            observed: nodes,
            revealed: HashSet::new(),
            action: Box::new(action),
        });
    }

    pub fn watchers(&self) -> &[IntersectionWatcher] {
        &self.watchers
    }

    /// Dispatch a synthetic click on a node. Returns `true` if any handler
    /// prevented the default action. Nodes without handlers are a no-op.
    pub fn dispatch_click(&self, doc: &mut Document, target: NodeId) -> bool {
        let mut state = EventState::default();
        for (node, handler) in &self.clicks {
            if *node == target {
                handler(doc, target, &mut state);
            }
        }
        state.default_prevented()
    }

    /// Report an intersection ratio for a node. Each watcher observing the
    /// node fires its action once, the first time the ratio meets its
    /// threshold.
    pub fn dispatch_intersection(&mut self, doc: &mut Document, target: NodeId, ratio: f64) {
        for watcher in &mut self.watchers {
            if ratio >= watcher.threshold
                && watcher.observed.contains(&target)
                && watcher.revealed.insert(target)
            {
                (watcher.action)(doc, target);
            }
        }
    }
}

impl std::fmt::Debug for Events {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Events")
            .field("clicks", &self.clicks.len())
            .field("watchers", &self.watchers.len())
            .finish()
    }
}

impl std::fmt::Debug for IntersectionWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntersectionWatcher")
            .field("threshold", &self.threshold)
            .field("root_margin_bottom", &self.root_margin_bottom)
            .field("observed", &self.observed.len())
            .finish()
    }
}
