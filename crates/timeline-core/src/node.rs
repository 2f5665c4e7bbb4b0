//! Rendered node tree.
//!
//! A minimal element tree with tags, attributes and text, plus the queries
//! accessibility tooling relies on: roles, text content, class lookup.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Accessibility roles exposed by the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    List,
    ListItem,
    Status,
    Alert,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::ListItem => "listitem",
            Self::Status => "status",
            Self::Alert => "alert",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "list" => Some(Self::List),
            "listitem" => Some(Self::ListItem),
            "status" => Some(Self::Status),
            "alert" => Some(Self::Alert),
            _ => None,
        }
    }
}

/// A node: an element or a run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// An element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attributes: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value.
    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        if let Some(slot) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.attributes.push((name, value));
        }
        self
    }

    #[must_use]
    pub fn class(self, classes: impl Into<String>) -> Self {
        self.attr("class", classes)
    }

    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Explicit `role` attribute, else the implicit role of the tag.
    pub fn role(&self) -> Option<Role> {
        match self.get_attr("role") {
            Some(role) => Role::parse(role),
            None => match self.tag {
                "ol" | "ul" => Some(Role::List),
                "li" => Some(Role::ListItem),
                _ => None,
            },
        }
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// This element and all descendant elements, in document order.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        collect_elements(self, &mut out);
        out
    }

    pub fn find_all_by_role(&self, role: Role) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|el| el.role() == Some(role))
            .collect()
    }

    pub fn find_by_role(&self, role: Role) -> Option<&Element> {
        self.descendants()
            .into_iter()
            .find(|el| el.role() == Some(role))
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&Element> {
        self.descendants().into_iter().find(|el| el.tag == tag)
    }

    pub fn find_all_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|el| el.tag == tag)
            .collect()
    }

    /// First element carrying every class in `classes`.
    pub fn find_by_classes(&self, classes: &[&str]) -> Option<&Element> {
        self.descendants()
            .into_iter()
            .find(|el| classes.iter().all(|c| el.has_class(c)))
    }

    /// Whether any text node equals `text` after trimming.
    pub fn has_text(&self, text: &str) -> bool {
        self.descendants().into_iter().any(|el| {
            el.children
                .iter()
                .any(|node| matches!(node, Node::Text(t) if t.trim() == text))
        })
    }
}

fn collect_elements<'a>(element: &'a Element, out: &mut Vec<&'a Element>) {
    out.push(element);
    for node in &element.children {
        if let Node::Element(child) = node {
            collect_elements(child, out);
        }
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => collect_text(&el.children, out),
        }
    }
}

/// Optional handle to a view's root element.
///
/// After rendering, the ref holds a copy of the root. Cloning the ref
/// shares the same slot.
#[derive(Clone, Default)]
pub struct NodeRef(Rc<RefCell<Option<Element>>>);

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<Element> {
        self.0.borrow().clone()
    }

    pub fn is_attached(&self) -> bool {
        self.0.borrow().is_some()
    }

    pub(crate) fn attach(&self, element: &Element) {
        *self.0.borrow_mut() = Some(element.clone());
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("attached", &self.is_attached())
            .finish()
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
