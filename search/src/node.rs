//! Core search node type.

use std::rc::Rc;

/// An immutable point in the search tree.
///
/// Children hold a shared back-reference to the node they were expanded from;
/// a parent never owns its children. A node stays alive while any frontier
/// entry or solution path still references it.
///
/// Nodes are only constructed by [`crate::expander::NodeExpander`].
#[derive(Debug)]
pub struct Node<S, A> {
    state: S,
    parent: Option<Rc<Node<S, A>>>,
    action: Option<A>,
    path_cost: f64,
    depth: u32,
}

impl<S, A> Node<S, A> {
    pub(crate) fn root(state: S) -> Self {
        Self {
            state,
            parent: None,
            action: None,
            path_cost: 0.0,
            depth: 0,
        }
    }

    pub(crate) fn child(
        state: S,
        parent: Option<Rc<Node<S, A>>>,
        action: A,
        path_cost: f64,
        depth: u32,
    ) -> Self {
        Self {
            state,
            parent,
            action: Some(action),
            path_cost,
            depth,
        }
    }

    /// The state at this node.
    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The node this one was expanded from (`None` for the root, or when the
    /// expander discarded parent links).
    #[must_use]
    pub fn parent(&self) -> Option<&Rc<Node<S, A>>> {
        self.parent.as_ref()
    }

    /// The action that produced this node (`None` for the root).
    #[must_use]
    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    /// Accumulated path cost from the root (`g`).
    #[must_use]
    pub fn path_cost(&self) -> f64 {
        self.path_cost
    }

    /// Tree depth (root = 0).
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Whether this node is the root of the search tree.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.action.is_none()
    }

    /// Nodes from the root (or the oldest linked ancestor) down to `node`.
    #[must_use]
    pub fn path(node: &Rc<Self>) -> Vec<Rc<Self>> {
        let mut path = vec![Rc::clone(node)];
        let mut current = node.parent.clone();
        while let Some(n) = current {
            current = n.parent.clone();
            path.push(n);
        }
        path.reverse();
        path
    }
}

impl<S, A: Clone> Node<S, A> {
    /// The actions along the linked path from the root to this node.
    #[must_use]
    pub fn actions(node: &Rc<Self>) -> Vec<A> {
        Self::path(node)
            .iter()
            .filter_map(|n| n.action.clone())
            .collect()
    }
}
