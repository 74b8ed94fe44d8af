use shared::protocol::FormField;

use crate::dom::{Document, NodeId};

const SKIPPED_INPUT_TYPES: &[&str] = &["submit", "button", "reset", "image", "file"];

impl Document {
    /// Name/value pairs a native form submission would send for `form`, in tree order.
    pub fn form_data(&self, form: NodeId) -> Vec<FormField> {
        self.descendants(form)
            .into_iter()
            .skip(1)
            .filter(|node| !self.is_disabled(*node))
            .filter_map(|node| {
                let name = self.attribute(node, "name").filter(|n| !n.is_empty())?;
                let value = self.control_value(node)?;
                Some(FormField::new(name, value))
            })
            .collect()
    }

    fn control_value(&self, node: NodeId) -> Option<String> {
        match self.tag_name(node)? {
            "input" => {
                let input_type = self
                    .attribute(node, "type")
                    .unwrap_or("text")
                    .to_ascii_lowercase();
                if SKIPPED_INPUT_TYPES.contains(&input_type.as_str()) {
                    return None;
                }
                if matches!(input_type.as_str(), "checkbox" | "radio") {
                    if !self.has_attribute(node, "checked") {
                        return None;
                    }
                    return Some(self.attribute(node, "value").unwrap_or("on").to_string());
                }
                Some(self.attribute(node, "value").unwrap_or_default().to_string())
            }
            "textarea" => Some(self.text_content(node)),
            "select" => Some(self.selected_option_value(node)),
            _ => None,
        }
    }

    fn selected_option_value(&self, select: NodeId) -> String {
        let options: Vec<NodeId> = self
            .descendants(select)
            .into_iter()
            .filter(|node| self.tag_name(*node) == Some("option"))
            .collect();
        let chosen = options
            .iter()
            .copied()
            .find(|option| self.has_attribute(*option, "selected"))
            .or_else(|| options.first().copied());
        match chosen {
            Some(option) => self
                .attribute(option, "value")
                .map(ToOwned::to_owned)
                .unwrap_or_else(|| self.text_content(option).trim().to_string()),
            None => String::new(),
        }
    }
}
