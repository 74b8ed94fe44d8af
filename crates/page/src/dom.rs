/// Handle to a node in a [`Document`]. Slots are reused once a node is
/// discarded; the generation makes handles to the old occupant resolve to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

#[derive(Debug, Clone)]
pub(crate) enum NodeType {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) node_type: NodeType,
}

#[derive(Debug, Clone)]
pub(crate) struct Element {
    pub(crate) tag_name: String,
    pub(crate) attrs: Vec<(String, String)>,
}

impl Element {
    pub(crate) fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn set_attr(&mut self, name: &str, value: String) {
        match self.attrs.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(key, _)| key != name);
    }

    fn class_tokens(&self) -> Vec<String> {
        self.attr("class")
            .map(|value| value.split_whitespace().map(ToOwned::to_owned).collect())
            .unwrap_or_default()
    }

    fn set_class_tokens(&mut self, classes: &[String]) {
        if classes.is_empty() {
            self.remove_attr("class");
        } else {
            self.set_attr("class", classes.join(" "));
        }
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

#[derive(Debug, Clone)]
pub struct Document {
    slots: Vec<Slot>,
    free: Vec<usize>,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let mut doc = Self {
            slots: Vec::new(),
            free: Vec::new(),
            body: NodeId {
                index: 0,
                generation: 0,
            },
        };
        doc.body = doc.create_element("body");
        doc
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn create_element(&mut self, tag_name: &str) -> NodeId {
        self.push_node(NodeType::Element(Element {
            tag_name: tag_name.to_ascii_lowercase(),
            attrs: Vec::new(),
        }))
    }

    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.push_node(NodeType::Text(text.into()))
    }

    fn push_node(&mut self, node_type: NodeType) -> NodeId {
        let node = Node {
            parent: None,
            children: Vec::new(),
            node_type,
        };
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.node = Some(node);
            return NodeId {
                index,
                generation: slot.generation,
            };
        }
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        NodeId {
            index: self.slots.len() - 1,
            generation: 0,
        }
    }

    pub(crate) fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)?
            .node
            .as_ref()
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)?
            .node
            .as_mut()
    }

    /// Number of live nodes, attached or not.
    pub fn node_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Number of slots the arena has ever allocated.
    pub fn arena_len(&self) -> usize {
        self.slots.len()
    }

    fn element(&self, id: NodeId) -> Option<&Element> {
        match &self.node(id)?.node_type {
            NodeType::Element(element) => Some(element),
            NodeType::Text(_) => None,
        }
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match &mut self.node_mut(id)?.node_type {
            NodeType::Element(element) => Some(element),
            NodeType::Text(_) => None,
        }
    }

    /// Appends `child` as the last child of `parent`, detaching it from any
    /// previous parent first. Appending an ancestor into its own subtree is ignored.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.element(parent).is_none() || self.node(child).is_none() {
            return;
        }
        if self.contains(child, parent) {
            return;
        }
        self.remove(child);
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
    }

    /// Detaches `node` from its parent, keeping it alive so it can be
    /// re-attached. Returns false if it was already detached.
    pub fn remove(&mut self, node: NodeId) -> bool {
        let Some(parent) = self.node(node).and_then(|n| n.parent) else {
            return false;
        };
        if let Some(parent) = self.node_mut(parent) {
            parent.children.retain(|child| *child != node);
        }
        if let Some(node) = self.node_mut(node) {
            node.parent = None;
        }
        true
    }

    /// Detaches `node` and frees it with its whole subtree. Every handle into
    /// the subtree goes stale. Returns false for stale handles and for `body`.
    pub fn discard(&mut self, node: NodeId) -> bool {
        if node == self.body || self.node(node).is_none() {
            return false;
        }
        self.remove(node);
        for id in self.descendants(node) {
            let slot = &mut self.slots[id.index];
            slot.node = None;
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(id.index);
        }
        true
    }

    /// Discards every child of `parent`.
    pub fn clear_children(&mut self, parent: NodeId) {
        let children = self.children(parent).to_vec();
        for child in children {
            self.discard(child);
        }
    }

    /// Swaps the content of `parent` for `children`. Old children that do not
    /// hold any of the new content are discarded.
    pub fn replace_children(&mut self, parent: NodeId, children: impl IntoIterator<Item = NodeId>) {
        let children: Vec<NodeId> = children.into_iter().collect();
        let old = self.children(parent).to_vec();
        for child in old {
            if children.iter().any(|new| self.contains(child, *new)) {
                self.remove(child);
            } else {
                self.discard(child);
            }
        }
        for child in children {
            self.append_child(parent, child);
        }
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node)?.parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.node(node)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    /// True when `node` is `ancestor` itself or sits anywhere below it.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    pub fn is_connected(&self, node: NodeId) -> bool {
        self.contains(self.body, node)
    }

    /// Pre-order walk of `root` and everything below it.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(current) = stack.pop() {
            if self.node(current).is_none() {
                continue;
            }
            out.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        out
    }

    pub fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|e| e.tag_name.as_str())
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node)?.attr(name)
    }

    pub fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
        if let Some(element) = self.element_mut(node) {
            element.set_attr(name, value.into());
        }
    }

    pub fn remove_attribute(&mut self, node: NodeId, name: &str) {
        if let Some(element) = self.element_mut(node) {
            element.remove_attr(name);
        }
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.body)
            .into_iter()
            .find(|node| self.attribute(*node, "id") == Some(id))
    }

    pub fn get_elements_by_class_name(&self, class_name: &str) -> Vec<NodeId> {
        self.descendants(self.body)
            .into_iter()
            .filter(|node| self.has_class(*node, class_name))
            .collect()
    }

    /// First element strictly below `root` with the given tag and, if given, an
    /// exact attribute value.
    pub fn query_descendant(
        &self,
        root: NodeId,
        tag_name: &str,
        attr: Option<(&str, &str)>,
    ) -> Option<NodeId> {
        self.descendants(root).into_iter().skip(1).find(|node| {
            self.tag_name(*node)
                .is_some_and(|tag| tag.eq_ignore_ascii_case(tag_name))
                && attr.map_or(true, |(name, value)| {
                    self.attribute(*node, name)
                        .is_some_and(|actual| actual.eq_ignore_ascii_case(value))
                })
        })
    }

    pub fn has_class(&self, node: NodeId, class_name: &str) -> bool {
        self.attribute(node, "class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class_name))
    }

    pub fn add_class(&mut self, node: NodeId, class_name: &str) {
        if let Some(element) = self.element_mut(node) {
            let mut classes = element.class_tokens();
            if !classes.iter().any(|c| c == class_name) {
                classes.push(class_name.to_string());
                element.set_class_tokens(&classes);
            }
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class_name: &str) {
        if let Some(element) = self.element_mut(node) {
            let mut classes = element.class_tokens();
            classes.retain(|c| c != class_name);
            element.set_class_tokens(&classes);
        }
    }

    /// Flips `class_name` and returns whether it is present afterwards.
    pub fn toggle_class(&mut self, node: NodeId, class_name: &str) -> bool {
        if self.has_class(node, class_name) {
            self.remove_class(node, class_name);
            false
        } else {
            self.add_class(node, class_name);
            self.has_class(node, class_name)
        }
    }

    /// Replaces all children of `node` with a single text node. A lone text
    /// child is rewritten in place.
    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        if self.element(node).is_none() {
            return;
        }
        let text = text.into();
        let lone_child = match self.children(node) {
            [only] => Some(*only),
            _ => None,
        };
        if let Some(only) = lone_child {
            if let Some(Node {
                node_type: NodeType::Text(existing),
                ..
            }) = self.node_mut(only)
            {
                *existing = text;
                return;
            }
        }
        let text_node = self.create_text(text);
        self.replace_children(node, [text_node]);
    }

    pub fn text_content(&self, node: NodeId) -> String {
        self.descendants(node)
            .into_iter()
            .filter_map(|id| match &self.node(id)?.node_type {
                NodeType::Text(text) => Some(text.as_str()),
                NodeType::Element(_) => None,
            })
            .collect()
    }

    pub fn is_disabled(&self, node: NodeId) -> bool {
        self.has_attribute(node, "disabled")
    }

    pub fn set_disabled(&mut self, node: NodeId, disabled: bool) {
        if disabled {
            self.set_attribute(node, "disabled", "");
        } else {
            self.remove_attribute(node, "disabled");
        }
    }

    /// Inline `display` value, if the element carries one.
    pub fn display(&self, node: NodeId) -> Option<&str> {
        self.attribute(node, "style")?
            .split(';')
            .filter_map(|decl| decl.split_once(':'))
            .find(|(prop, _)| prop.trim().eq_ignore_ascii_case("display"))
            .map(|(_, value)| value.trim())
    }

    pub fn set_display(&mut self, node: NodeId, value: &str) {
        let mut decls: Vec<String> = self
            .attribute(node, "style")
            .map(|style| {
                style
                    .split(';')
                    .map(str::trim)
                    .filter(|decl| !decl.is_empty())
                    .filter(|decl| {
                        decl.split_once(':')
                            .map_or(true, |(prop, _)| !prop.trim().eq_ignore_ascii_case("display"))
                    })
                    .map(ToOwned::to_owned)
                    .collect()
            })
            .unwrap_or_default();
        decls.push(format!("display: {value}"));
        self.set_attribute(node, "style", decls.join("; "));
    }
}
