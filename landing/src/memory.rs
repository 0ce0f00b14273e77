//! In-memory document for headless runs and tests.
//!
//! Implements [`Page`] over a small element arena. Supported selectors are the
//! ones the landing page uses: `#id`, `.class`, `tag`, `[attr]` and
//! `[attr="value"]`. Anything else is rejected as invalid, like a browser
//! rejecting a malformed selector.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::dom::{ClickHandler, Page};
use crate::error::{LandingError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

type SharedHandler = Rc<RefCell<ClickHandler>>;

struct Node {
    tag: String,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    handlers: Vec<SharedHandler>,
    scrolls: usize,
}

impl Node {
    fn new(tag: &str, parent: Option<NodeId>) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            text: String::new(),
            children: Vec::new(),
            parent,
            handlers: Vec::new(),
            scrolls: 0,
        }
    }

    fn classes(&self) -> impl Iterator<Item = &str> {
        self.attributes
            .get("class")
            .map(|c| c.split_whitespace())
            .into_iter()
            .flatten()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Selector {
    Id(String),
    Class(String),
    Tag(String),
    Attribute { name: String, value: Option<String> },
}

impl Selector {
    fn parse(input: &str) -> Result<Self> {
        let invalid = || LandingError::InvalidSelector(input.to_string());
        let s = input.trim();

        let is_ident = |v: &str| {
            !v.is_empty()
                && v.chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        };

        if let Some(id) = s.strip_prefix('#') {
            return is_ident(id)
                .then(|| Selector::Id(id.to_string()))
                .ok_or_else(invalid);
        }
        if let Some(class) = s.strip_prefix('.') {
            return is_ident(class)
                .then(|| Selector::Class(class.to_string()))
                .ok_or_else(invalid);
        }
        if let Some(inner) = s.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
            let (name, value) = match inner.split_once('=') {
                Some((name, raw)) => {
                    let value = raw
                        .strip_prefix('"')
                        .and_then(|v| v.strip_suffix('"'))
                        .or_else(|| raw.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
                        .unwrap_or(raw);
                    (name.trim(), Some(value.to_string()))
                }
                None => (inner.trim(), None),
            };
            return is_ident(name)
                .then(|| Selector::Attribute {
                    name: name.to_string(),
                    value,
                })
                .ok_or_else(invalid);
        }
        if is_ident(s) {
            return Ok(Selector::Tag(s.to_ascii_lowercase()));
        }
        Err(invalid())
    }

    fn matches(&self, node: &Node) -> bool {
        match self {
            Selector::Id(id) => node.attributes.get("id") == Some(id),
            Selector::Class(class) => node.classes().any(|c| c == class),
            Selector::Tag(tag) => &node.tag == tag,
            Selector::Attribute { name, value } => match (node.attributes.get(name), value) {
                (Some(actual), Some(expected)) => actual == expected,
                (Some(_), None) => true,
                (None, _) => false,
            },
        }
    }
}

#[derive(Default)]
struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Elements attached under the root, in document (pre-)order.
    fn document_order(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![MemoryPage::BODY];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.node(id).children.iter().rev().copied());
        }
        order
    }
}

/// Shared, clonable in-memory page. Clones observe the same tree.
#[derive(Clone)]
pub struct MemoryPage {
    tree: Rc<RefCell<Tree>>,
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPage {
    /// The root `<body>` element.
    pub const BODY: NodeId = NodeId(0);

    pub fn new() -> Self {
        let tree = Tree {
            nodes: vec![Node::new("body", None)],
        };
        Self {
            tree: Rc::new(RefCell::new(tree)),
        }
    }

    /// Create `<tag>` as the last child of `parent`.
    pub fn append_element(&self, parent: NodeId, tag: &str) -> NodeId {
        let mut tree = self.tree.borrow_mut();
        let id = NodeId(tree.nodes.len());
        tree.nodes.push(Node::new(tag, Some(parent)));
        tree.node_mut(parent).children.push(id);
        id
    }

    pub fn set_attribute(&self, node: NodeId, name: &str, value: &str) {
        self.tree
            .borrow_mut()
            .node_mut(node)
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn set_text(&self, node: NodeId, text: &str) {
        self.tree.borrow_mut().node_mut(node).text = text.to_string();
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.tree.borrow().node(node).children.clone()
    }

    /// Text of each direct child, in order.
    pub fn child_texts(&self, node: NodeId) -> Vec<String> {
        let tree = self.tree.borrow();
        tree.node(node)
            .children
            .iter()
            .map(|child| tree.node(*child).text.clone())
            .collect()
    }

    pub fn tag(&self, node: NodeId) -> String {
        self.tree.borrow().node(node).tag.clone()
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.tree.borrow().node(node).styles.get(property).cloned()
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.tree.borrow().node(node).classes().any(|c| c == class)
    }

    /// How many smooth scrolls have targeted `node`.
    pub fn scroll_count(&self, node: NodeId) -> usize {
        self.tree.borrow().node(node).scrolls
    }

    pub fn is_attached(&self, node: NodeId) -> bool {
        let tree = self.tree.borrow();
        let mut current = Some(node);
        while let Some(id) = current {
            if id == Self::BODY {
                return true;
            }
            current = tree.node(id).parent;
        }
        false
    }

    /// Dispatch a click: run every handler bound to `node`, in binding order.
    pub fn click(&self, node: NodeId) {
        // Handlers re-enter the page, so release the tree before running them
        let handlers = self.tree.borrow().node(node).handlers.clone();
        for handler in handlers {
            let mut handler = handler.borrow_mut();
            (*handler)();
        }
    }
}

impl Page for MemoryPage {
    type Element = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.query_selector(&format!("#{id}")).ok().flatten()
    }

    fn query_selector(&self, selector: &str) -> Result<Option<NodeId>> {
        Ok(self.query_selector_all(selector)?.into_iter().next())
    }

    fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>> {
        let selector = Selector::parse(selector)?;
        let tree = self.tree.borrow();
        Ok(tree
            .document_order()
            .into_iter()
            .filter(|id| selector.matches(tree.node(*id)))
            .collect())
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.tree.borrow().node(*element).attributes.get(name).cloned()
    }

    fn clear_children(&self, element: &NodeId) -> Result<()> {
        let mut tree = self.tree.borrow_mut();
        let children = std::mem::take(&mut tree.node_mut(*element).children);
        for child in children {
            tree.node_mut(child).parent = None;
        }
        tree.node_mut(*element).text.clear();
        Ok(())
    }

    fn append_text_block(&self, parent: &NodeId, text: &str) -> Result<()> {
        let block = self.append_element(*parent, "div");
        self.set_text(block, text);
        Ok(())
    }

    fn set_style(&self, element: &NodeId, property: &str, value: &str) -> Result<()> {
        self.tree
            .borrow_mut()
            .node_mut(*element)
            .styles
            .insert(property.to_string(), value.to_string());
        Ok(())
    }

    fn set_class(&self, element: &NodeId, class: &str, present: bool) -> Result<()> {
        let mut tree = self.tree.borrow_mut();
        let node = tree.node_mut(*element);
        let mut classes: Vec<String> = node.classes().map(str::to_string).collect();
        classes.retain(|c| c != class);
        if present {
            classes.push(class.to_string());
        }
        node.attributes.insert("class".to_string(), classes.join(" "));
        Ok(())
    }

    fn scroll_into_view(&self, element: &NodeId) -> Result<()> {
        self.tree.borrow_mut().node_mut(*element).scrolls += 1;
        Ok(())
    }

    fn on_click(&self, element: &NodeId, handler: ClickHandler) -> Result<()> {
        self.tree
            .borrow_mut()
            .node_mut(*element)
            .handlers
            .push(Rc::new(RefCell::new(handler)));
        Ok(())
    }
}
