use contracts::contact::{ContactField, ContactRequest, FieldErrors};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::domain::contact::api::submit_contact;

/// How long the success banner stays up.
pub const SUCCESS_RESET_MS: u32 = 5_000;

/// Numbers successful submissions. Each success-banner reset timer holds the
/// ticket it was started with and fires only if no newer success came after it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuccessTickets {
    latest: u64,
}

impl SuccessTickets {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}

/// State of the contact form
#[derive(Clone, Copy)]
pub struct ContactFormViewModel {
    pub form: RwSignal<ContactRequest>,
    pub field_errors: RwSignal<FieldErrors>,
    pub submitting: RwSignal<bool>,
    pub submitted: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    successes: StoredValue<SuccessTickets>,
}

impl ContactFormViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ContactRequest::default()),
            field_errors: RwSignal::new(FieldErrors::default()),
            submitting: RwSignal::new(false),
            submitted: RwSignal::new(false),
            error: RwSignal::new(None),
            successes: StoredValue::new(SuccessTickets::default()),
        }
    }

    pub fn field(&self, field: ContactField) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || {
            form.with(|f| match field {
                ContactField::Name => f.name.clone(),
                ContactField::Email => f.email.clone(),
                ContactField::Subject => f.subject.clone(),
                ContactField::Message => f.message.clone(),
            })
        })
    }

    pub fn field_error(&self, field: ContactField) -> Signal<Option<String>> {
        let errors = self.field_errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    /// Edit one field. Its stale error is cleared right away.
    pub fn set_field(&self, field: ContactField, value: String) {
        self.form.update(|f| match field {
            ContactField::Name => f.name = value,
            ContactField::Email => f.email = value,
            ContactField::Subject => f.subject = value,
            ContactField::Message => f.message = value,
        });
        self.field_errors.update(|e| match field {
            ContactField::Name => e.name = None,
            ContactField::Email => e.email = None,
            ContactField::Subject => e.subject = None,
            ContactField::Message => e.message = None,
        });
    }

    pub fn submit_command(&self) {
        if self.submitting.get_untracked() {
            return;
        }
        let current = self.form.get_untracked();

        // Validate; no network call on failure
        if let Err(errors) = current.validate() {
            self.field_errors.set(errors);
            return;
        }
        self.field_errors.set(FieldErrors::default());
        self.error.set(None);
        self.submitting.set(true);

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = submit_contact(current).await;
            vm.submitting.set(false);
            match result {
                Ok(()) => {
                    log::info!("Contact form submitted");
                    vm.form.set(ContactRequest::default());
                    vm.submitted.set(true);
                    let ticket = vm.successes.try_update_value(SuccessTickets::issue);
                    TimeoutFuture::new(SUCCESS_RESET_MS).await;
                    let still_latest = ticket
                        .and_then(|t| vm.successes.try_with_value(|s| s.is_latest(t)))
                        .unwrap_or(false);
                    if still_latest {
                        vm.submitted.set(false);
                    }
                }
                Err(e) => {
                    log::error!("Contact form submission failed: {}", e);
                    vm.error.set(Some(e.user_message().to_string()));
                }
            }
        });
    }
}

impl Default for ContactFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_success_supersedes_older_reset() {
        let mut tickets = SuccessTickets::default();
        let first = tickets.issue();
        assert!(tickets.is_latest(first));

        let second = tickets.issue();
        // the first timer expires while the second banner is showing
        assert!(!tickets.is_latest(first));
        assert!(tickets.is_latest(second));
    }
}
