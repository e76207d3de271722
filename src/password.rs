//! Password Reveal
//!
//! Toggles one password input between obscured and plain text. The input
//! is bound when the reveal is constructed, never looked up per click:
//! a control names its input with `aria-controls`, otherwise the element
//! right before the control is used.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Obscured,
    Plain,
}

impl RevealState {
    pub fn from_input_type(input_type: &str) -> Self {
        if input_type == "password" {
            RevealState::Obscured
        } else {
            RevealState::Plain
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            RevealState::Obscured => RevealState::Plain,
            RevealState::Plain => RevealState::Obscured,
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            RevealState::Obscured => "password",
            RevealState::Plain => "text",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            RevealState::Obscured => "bi-eye",
            RevealState::Plain => "bi-eye-slash",
        }
    }
}

// ========================
// Binding
// ========================

/// How a control locates its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealBinding {
    ById(String),
    PrecedingSibling,
}

impl RevealBinding {
    /// A blank `aria-controls` counts as absent.
    pub fn from_aria_controls(aria_controls: Option<&str>) -> Self {
        match aria_controls.map(str::trim) {
            Some(id) if !id.is_empty() => RevealBinding::ById(id.to_string()),
            _ => RevealBinding::PrecedingSibling,
        }
    }
}

/// Element lookups around a reveal control.
pub trait RevealControl {
    type Node;
    type Input;

    fn aria_controls(&self) -> Option<String>;
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;
    fn preceding_sibling(&self) -> Option<Self::Node>;
    /// `None` when the node is not a text-capable input.
    fn as_input(&self, node: Self::Node) -> Option<Self::Input>;
}

pub fn resolve_input<C: RevealControl>(control: &C) -> Option<C::Input> {
    let node = match RevealBinding::from_aria_controls(control.aria_controls().as_deref()) {
        RevealBinding::ById(id) => control.element_by_id(&id),
        RevealBinding::PrecedingSibling => control.preceding_sibling(),
    }?;
    control.as_input(node)
}

// ========================
// Toggle
// ========================

/// The input/icon pair a reveal control drives.
pub trait RevealTarget {
    fn input_type(&self) -> String;
    fn set_input_type(&self, input_type: &str);
    fn swap_icon_class(&self, remove: &str, add: &str);
}

pub struct PasswordReveal<T> {
    target: T,
}

impl<T: RevealTarget> PasswordReveal<T> {
    pub fn new(target: T) -> Self {
        Self { target }
    }

    pub fn state(&self) -> RevealState {
        RevealState::from_input_type(&self.target.input_type())
    }

    /// Flip input mode and icon together; returns the new state.
    pub fn toggle(&self) -> RevealState {
        let current = self.state();
        let next = current.toggled();
        self.target.set_input_type(next.input_type());
        self.target
            .swap_icon_class(current.icon_class(), next.icon_class());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeField {
        input_type: RefCell<String>,
        icon_classes: RefCell<Vec<String>>,
    }

    impl FakeField {
        fn password() -> Self {
            Self {
                input_type: RefCell::new("password".to_string()),
                icon_classes: RefCell::new(vec!["bi".to_string(), "bi-eye".to_string()]),
            }
        }
    }

    impl RevealTarget for &FakeField {
        fn input_type(&self) -> String {
            self.input_type.borrow().clone()
        }

        fn set_input_type(&self, input_type: &str) {
            *self.input_type.borrow_mut() = input_type.to_string();
        }

        fn swap_icon_class(&self, remove: &str, add: &str) {
            let mut classes = self.icon_classes.borrow_mut();
            classes.retain(|class| class != remove);
            if !classes.iter().any(|class| class == add) {
                classes.push(add.to_string());
            }
        }
    }

    #[test]
    fn test_toggle_reveals_then_hides() {
        let field = FakeField::password();
        let reveal = PasswordReveal::new(&field);

        assert_eq!(reveal.toggle(), RevealState::Plain);
        assert_eq!(*field.input_type.borrow(), "text");
        assert_eq!(*field.icon_classes.borrow(), vec!["bi", "bi-eye-slash"]);

        assert_eq!(reveal.toggle(), RevealState::Obscured);
        assert_eq!(*field.input_type.borrow(), "password");
        assert_eq!(*field.icon_classes.borrow(), vec!["bi", "bi-eye"]);
    }

    #[derive(Debug, Clone, PartialEq)]
    struct FakeNode {
        name: &'static str,
        is_input: bool,
    }

    struct FakeControl {
        aria_controls: Option<&'static str>,
        by_id: Vec<(&'static str, FakeNode)>,
        sibling: Option<FakeNode>,
    }

    impl RevealControl for FakeControl {
        type Node = FakeNode;
        type Input = &'static str;

        fn aria_controls(&self) -> Option<String> {
            self.aria_controls.map(str::to_string)
        }

        fn element_by_id(&self, id: &str) -> Option<FakeNode> {
            self.by_id
                .iter()
                .find(|(key, _)| *key == id)
                .map(|(_, node)| node.clone())
        }

        fn preceding_sibling(&self) -> Option<FakeNode> {
            self.sibling.clone()
        }

        fn as_input(&self, node: FakeNode) -> Option<&'static str> {
            node.is_input.then_some(node.name)
        }
    }

    fn input(name: &'static str) -> FakeNode {
        FakeNode { name, is_input: true }
    }

    #[test]
    fn test_aria_controls_wins_over_sibling() {
        let control = FakeControl {
            aria_controls: Some("confirm"),
            by_id: vec![("confirm", input("confirm"))],
            sibling: Some(input("password")),
        };
        assert_eq!(resolve_input(&control), Some("confirm"));
    }

    #[test]
    fn test_falls_back_to_preceding_sibling() {
        let control = FakeControl {
            aria_controls: None,
            by_id: vec![("confirm", input("confirm"))],
            sibling: Some(input("password")),
        };
        assert_eq!(resolve_input(&control), Some("password"));

        let blank = FakeControl {
            aria_controls: Some("  "),
            ..control
        };
        assert_eq!(resolve_input(&blank), Some("password"));
    }

    #[test]
    fn test_non_input_target_is_skipped() {
        let label = FakeNode {
            name: "label",
            is_input: false,
        };
        let sibling_label = FakeControl {
            aria_controls: None,
            by_id: Vec::new(),
            sibling: Some(label.clone()),
        };
        assert_eq!(resolve_input(&sibling_label), None);

        let missing_id = FakeControl {
            aria_controls: Some("nope"),
            by_id: Vec::new(),
            sibling: Some(input("password")),
        };
        assert_eq!(resolve_input(&missing_id), None);
    }

    #[test]
    fn test_binding_from_aria_controls() {
        assert_eq!(
            RevealBinding::from_aria_controls(Some(" pw ")),
            RevealBinding::ById("pw".to_string())
        );
        assert_eq!(
            RevealBinding::from_aria_controls(None),
            RevealBinding::PrecedingSibling
        );
    }

    #[test]
    fn test_non_password_input_counts_as_plain() {
        assert_eq!(RevealState::from_input_type("text"), RevealState::Plain);
        assert_eq!(RevealState::from_input_type(""), RevealState::Plain);
    }
}
