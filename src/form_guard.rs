//! Form Guard
//!
//! Submit-time validation for forms carrying the validation marker class.

/// A form as seen by the guard.
pub trait GuardedForm {
    fn has_class(&self, class: &str) -> bool;
    fn check_validity(&self) -> bool;
    fn add_class(&self, class: &str);
}

/// The submit event being guarded.
pub trait SubmitInterception {
    fn prevent_default(&self);
    fn stop_propagation(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardVerdict {
    Allowed,
    Blocked,
}

#[derive(Debug, Clone, Copy)]
pub struct FormGuard {
    marker_class: &'static str,
    validated_class: &'static str,
}

impl FormGuard {
    pub fn new(marker_class: &'static str, validated_class: &'static str) -> Self {
        Self {
            marker_class,
            validated_class,
        }
    }

    /// Only marked forms are ever intercepted.
    pub fn applies_to<F: GuardedForm>(&self, form: &F) -> bool {
        form.has_class(self.marker_class)
    }

    pub fn on_submit<F, E>(&self, form: &F, event: &E) -> GuardVerdict
    where
        F: GuardedForm,
        E: SubmitInterception,
    {
        let verdict = if form.check_validity() {
            GuardVerdict::Allowed
        } else {
            event.prevent_default();
            event.stop_propagation();
            GuardVerdict::Blocked
        };
        form.add_class(self.validated_class);
        verdict
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct FakeForm {
        classes: RefCell<Vec<String>>,
        valid: bool,
    }

    impl FakeForm {
        fn new(classes: &[&str], valid: bool) -> Self {
            Self {
                classes: RefCell::new(classes.iter().map(|c| c.to_string()).collect()),
                valid,
            }
        }
    }

    impl GuardedForm for FakeForm {
        fn has_class(&self, class: &str) -> bool {
            self.classes.borrow().iter().any(|c| c == class)
        }

        fn check_validity(&self) -> bool {
            self.valid
        }

        fn add_class(&self, class: &str) {
            if !self.has_class(class) {
                self.classes.borrow_mut().push(class.to_string());
            }
        }
    }

    #[derive(Default)]
    struct FakeEvent {
        prevented: Cell<bool>,
        stopped: Cell<bool>,
    }

    impl SubmitInterception for FakeEvent {
        fn prevent_default(&self) {
            self.prevented.set(true);
        }

        fn stop_propagation(&self) {
            self.stopped.set(true);
        }
    }

    fn guard() -> FormGuard {
        FormGuard::new("needs-validation", "was-validated")
    }

    #[test]
    fn test_invalid_form_is_blocked_and_marked() {
        let form = FakeForm::new(&["needs-validation"], false);
        let event = FakeEvent::default();

        assert_eq!(guard().on_submit(&form, &event), GuardVerdict::Blocked);
        assert!(event.prevented.get());
        assert!(event.stopped.get());
        assert!(form.has_class("was-validated"));
    }

    #[test]
    fn test_valid_form_passes_and_is_marked() {
        let form = FakeForm::new(&["needs-validation"], true);
        let event = FakeEvent::default();

        assert_eq!(guard().on_submit(&form, &event), GuardVerdict::Allowed);
        assert!(!event.prevented.get());
        assert!(!event.stopped.get());
        assert!(form.has_class("was-validated"));
    }

    #[test]
    fn test_repeated_submits_mark_once() {
        let form = FakeForm::new(&["needs-validation"], false);
        for _ in 0..3 {
            guard().on_submit(&form, &FakeEvent::default());
        }
        assert_eq!(form.classes.borrow().len(), 2);
    }

    #[test]
    fn test_unmarked_form_is_never_guarded() {
        let invalid = FakeForm::new(&["search"], false);
        let valid = FakeForm::new(&[], true);
        assert!(!guard().applies_to(&invalid));
        assert!(!guard().applies_to(&valid));
        assert!(guard().applies_to(&FakeForm::new(&["needs-validation"], true)));
    }
}
