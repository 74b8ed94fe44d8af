use crate::dom::{Document, NodeId};

/// Fluent description of an element subtree, materialized with [`Document::build`].
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    tag_name: String,
    attrs: Vec<(String, String)>,
    classes: Vec<String>,
    text: Option<String>,
    children: Vec<ElementBuilder>,
}

impl ElementBuilder {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attrs: Vec::new(),
            classes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Adds one or more whitespace-separated classes.
    pub fn class(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(ToOwned::to_owned));
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Text placed before any child elements.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: ElementBuilder) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = ElementBuilder>) -> Self {
        self.children.extend(children);
        self
    }
}

impl Document {
    /// Creates the detached subtree described by `builder` and returns its root.
    pub fn build(&mut self, builder: ElementBuilder) -> NodeId {
        let ElementBuilder {
            tag_name,
            attrs,
            classes,
            text,
            children,
        } = builder;

        let node = self.create_element(&tag_name);
        for (name, value) in attrs {
            self.set_attribute(node, &name, value);
        }
        for class_name in classes {
            self.add_class(node, &class_name);
        }
        if let Some(text) = text {
            let text_node = self.create_text(text);
            self.append_child(node, text_node);
        }
        for child in children {
            let child_node = self.build(child);
            self.append_child(node, child_node);
        }
        node
    }

    pub fn append_built(&mut self, parent: NodeId, builder: ElementBuilder) -> NodeId {
        let node = self.build(builder);
        self.append_child(parent, node);
        node
    }
}
