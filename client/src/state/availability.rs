//! Advisory "e-mail already registered" notice for the signup form.
//!
//! A check result is tied to the address it was made for. Results for an
//! address the user has since changed are dropped, and the notice only shows
//! while the form still holds the address that was reported taken.

#[cfg(test)]
#[path = "availability_test.rs"]
mod availability_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmailNotice {
    taken: Option<String>,
}

impl EmailNotice {
    /// Record the result of checking `checked`. Ignored unless `checked` is
    /// still the form's `current` e-mail.
    pub fn resolve(&mut self, checked: &str, current: &str, available: bool) {
        if checked != current {
            log::debug!("dropping stale availability result");
            return;
        }
        self.taken = if available { None } else { Some(checked.to_owned()) };
    }

    pub fn clear(&mut self) {
        self.taken = None;
    }

    /// Whether the notice applies to the e-mail currently in the form.
    pub fn is_taken(&self, current: &str) -> bool {
        self.taken.as_deref() == Some(current)
    }
}
