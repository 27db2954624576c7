use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::style::{ResponsiveStyles, StyleProps};

/// Reserved id of the synthetic root container.
pub const ROOT_ID: &str = "root";

/// Closed set of editable component kinds.
///
/// New kinds require an explicit policy change; classification never falls
/// back to an unlisted kind silently — anything the classifier cannot safely
/// decompose becomes `RawMarkup`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    Container,
    Text,
    Button,
    Image,
    Link,
    Video,
    Row,
    Column,
    Grid,
    Hero,
    Card,
    Navbar,
    Footer,
    Divider,
    RawMarkup,
}

/// Per-kind semantic properties.
///
/// Each variant declares only the fields meaningful for its kind, so "which
/// fields are valid here" is a compile-time question rather than a runtime
/// convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Props {
    Container {
        #[serde(skip_serializing_if = "Option::is_none")]
        tag: Option<String>,
    },
    Text {
        text: String,
        tag: String,
    },
    Button {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        href: Option<String>,
    },
    Image {
        src: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
    },
    Link {
        #[serde(skip_serializing_if = "Option::is_none")]
        href: Option<String>,
    },
    Video {
        src: String,
    },
    Row {},
    Column {},
    Grid {
        #[serde(skip_serializing_if = "Option::is_none")]
        columns: Option<u32>,
    },
    Hero {},
    Card {},
    Navbar {},
    Footer {},
    Divider {},
    RawMarkup {
        html: String,
    },
}

impl Props {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Props::Container { .. } => ComponentKind::Container,
            Props::Text { .. } => ComponentKind::Text,
            Props::Button { .. } => ComponentKind::Button,
            Props::Image { .. } => ComponentKind::Image,
            Props::Link { .. } => ComponentKind::Link,
            Props::Video { .. } => ComponentKind::Video,
            Props::Row {} => ComponentKind::Row,
            Props::Column {} => ComponentKind::Column,
            Props::Grid { .. } => ComponentKind::Grid,
            Props::Hero {} => ComponentKind::Hero,
            Props::Card {} => ComponentKind::Card,
            Props::Navbar {} => ComponentKind::Navbar,
            Props::Footer {} => ComponentKind::Footer,
            Props::Divider {} => ComponentKind::Divider,
            Props::RawMarkup { .. } => ComponentKind::RawMarkup,
        }
    }

    /// Whether the editor may drop new children into a node of this kind.
    pub fn is_container(&self) -> bool {
        matches!(
            self.kind(),
            ComponentKind::Container
                | ComponentKind::Link
                | ComponentKind::Row
                | ComponentKind::Column
                | ComponentKind::Grid
                | ComponentKind::Hero
                | ComponentKind::Card
                | ComponentKind::Navbar
                | ComponentKind::Footer
        )
    }
}

/// Sequential id generator seeded per classification run.
///
/// Ids are `{seed}-{n}` with a monotonically increasing counter; the counter
/// never rewinds, so ids are never reused within a tree even after removals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeIdGenerator {
    seed: String,
    count: u32,
}

impl NodeIdGenerator {
    pub fn new(seed: &str) -> Self {
        Self {
            seed: seed.to_string(),
            count: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }
}

/// One node of the component tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentNode {
    pub id: String,
    pub kind: ComponentKind,
    pub props: Props,
    /// Desktop-resolved structured style.
    #[serde(default, skip_serializing_if = "StyleProps::is_empty")]
    pub style: StyleProps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsive_styles: Option<ResponsiveStyles>,
    /// Class tokens the style resolver could not model, preserved verbatim.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub unrecognized_classes: String,
    /// Ordered child ids. Ownership lives here, not in the parent index.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
    pub is_container: bool,
}

impl ComponentNode {
    pub fn new(id: String, props: Props) -> Self {
        let kind = props.kind();
        let is_container = props.is_container();
        Self {
            id,
            kind,
            props,
            style: StyleProps::default(),
            responsive_styles: None,
            unrecognized_classes: String::new(),
            children: Vec::new(),
            is_container,
        }
    }
}

/// The structured, editable representation of a page.
///
/// Nodes are owned by the id-keyed map; parent/child structure is expressed
/// through each node's `children` list. The `parents` map is a non-owning
/// lookup index maintained alongside mutations — it is never a second
/// ownership path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentTree {
    root: String,
    nodes: HashMap<String, ComponentNode>,
    #[serde(default)]
    parents: HashMap<String, String>,
    ids: NodeIdGenerator,
}

impl ComponentTree {
    /// Creates a tree holding only the reserved root container.
    pub fn new() -> Self {
        Self::with_seed("node")
    }

    /// Creates a tree whose generated ids use `seed` as their prefix.
    pub fn with_seed(seed: &str) -> Self {
        let mut nodes = HashMap::new();
        nodes.insert(
            ROOT_ID.to_string(),
            ComponentNode::new(ROOT_ID.to_string(), Props::Container { tag: None }),
        );
        Self {
            root: ROOT_ID.to_string(),
            nodes,
            parents: HashMap::new(),
            ids: NodeIdGenerator::new(seed),
        }
    }

    pub fn root_id(&self) -> &str {
        &self.root
    }

    pub fn get(&self, id: &str) -> Option<&ComponentNode> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut ComponentNode> {
        self.nodes.get_mut(id)
    }

    /// Non-owning parent lookup. The root has no parent.
    pub fn parent_of(&self, id: &str) -> Option<&str> {
        self.parents.get(id).map(String::as_str)
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Mints a fresh, never-reused node id.
    pub fn next_id(&mut self) -> String {
        self.ids.next_id()
    }

    /// Attaches an already-built node as the last child of `parent_id`.
    pub fn attach(&mut self, parent_id: &str, node: ComponentNode) -> EngineResult<()> {
        if !self.nodes.contains_key(parent_id) {
            return Err(EngineError::MissingNode {
                id: parent_id.to_string(),
            });
        }
        let id = node.id.clone();
        self.nodes.insert(id.clone(), node);
        self.parents.insert(id.clone(), parent_id.to_string());
        self.nodes
            .get_mut(parent_id)
            .expect("parent existence checked above")
            .children
            .push(id);
        Ok(())
    }

    /// Creates a node from `props` under `parent_id` and returns its id.
    pub fn insert(&mut self, parent_id: &str, props: Props) -> EngineResult<String> {
        let id = self.next_id();
        let node = ComponentNode::new(id.clone(), props);
        self.attach(parent_id, node)?;
        Ok(id)
    }

    /// Removes a node and its whole subtree, returning the removed node.
    ///
    /// The root is not removable.
    pub fn remove(&mut self, id: &str) -> EngineResult<ComponentNode> {
        if id == self.root {
            return Err(EngineError::RootImmutable);
        }
        if !self.nodes.contains_key(id) {
            return Err(EngineError::MissingNode { id: id.to_string() });
        }

        if let Some(parent_id) = self.parents.get(id).cloned() {
            if let Some(parent) = self.nodes.get_mut(&parent_id) {
                parent.children.retain(|c| c != id);
            }
        }

        // Drop every descendant from both the node map and the parent index.
        let mut stack: Vec<String> = self
            .nodes
            .get(id)
            .map(|n| n.children.clone())
            .unwrap_or_default();
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(&current) {
                stack.extend(node.children);
            }
            self.parents.remove(&current);
        }

        self.parents.remove(id);
        self.nodes
            .remove(id)
            .ok_or_else(|| EngineError::MissingNode { id: id.to_string() })
    }

    /// Reparents `id` under `new_parent`, inserting at `index` (clamped).
    ///
    /// Rejects moves that would detach the root or create a cycle (moving a
    /// node into its own subtree).
    pub fn move_node(&mut self, id: &str, new_parent: &str, index: usize) -> EngineResult<()> {
        if id == self.root {
            return Err(EngineError::InvalidMove {
                id: id.to_string(),
                reason: "the root cannot be moved".to_string(),
            });
        }
        if !self.nodes.contains_key(id) {
            return Err(EngineError::MissingNode { id: id.to_string() });
        }
        if !self.nodes.contains_key(new_parent) {
            return Err(EngineError::MissingNode {
                id: new_parent.to_string(),
            });
        }

        // Walking the parent index from the target upward finds `id` exactly
        // when the target sits inside the moved subtree.
        let mut ancestor = Some(new_parent);
        while let Some(current) = ancestor {
            if current == id {
                return Err(EngineError::InvalidMove {
                    id: id.to_string(),
                    reason: format!("'{}' is inside the moved subtree", new_parent),
                });
            }
            ancestor = self.parent_of(current);
        }

        if let Some(old_parent) = self.parents.get(id).cloned() {
            if let Some(parent) = self.nodes.get_mut(&old_parent) {
                parent.children.retain(|c| c != id);
            }
        }

        let parent = self
            .nodes
            .get_mut(new_parent)
            .expect("existence checked above");
        let index = index.min(parent.children.len());
        parent.children.insert(index, id.to_string());
        self.parents.insert(id.to_string(), new_parent.to_string());
        Ok(())
    }
}

impl Default for ComponentTree {
    fn default() -> Self {
        Self::new()
    }
}
