use super::view_model::ContactFormViewModel;
use crate::shared::components::ui::{Button, Input, Textarea};
use contracts::contact::ContactField;
use contracts::contact::validation::MESSAGE_MAX;
use leptos::prelude::*;

#[component]
pub fn ContactForm() -> impl IntoView {
    let vm = ContactFormViewModel::new();
    let busy = vm.submitting;

    let on_field = move |field: ContactField| Callback::new(move |value: String| vm.set_field(field, value));

    let message_len = move || vm.form.with(|f| f.message.trim().chars().count());

    view! {
        <form
            class="contact-form"
            novalidate=true
            on:submit=move |ev| {
                ev.prevent_default();
                vm.submit_command();
            }
        >
            {move || vm.submitted.get().then(|| view! {
                <div class="alert alert--success" role="status">
                    "Thank you! Your message has been sent. We'll get back to you within one business day."
                </div>
            })}
            {move || vm.error.get().map(|e| view! {
                <div class="alert alert--error" role="alert">{e}</div>
            })}

            <div class="form__row">
                <Input
                    id="contact-name"
                    label="Name"
                    autocomplete="name"
                    value=vm.field(ContactField::Name)
                    on_input=on_field(ContactField::Name)
                    error=vm.field_error(ContactField::Name)
                    disabled=busy
                />
                <Input
                    id="contact-email"
                    label="Email"
                    input_type="email"
                    autocomplete="email"
                    value=vm.field(ContactField::Email)
                    on_input=on_field(ContactField::Email)
                    error=vm.field_error(ContactField::Email)
                    disabled=busy
                />
            </div>
            <Input
                id="contact-subject"
                label="Subject"
                value=vm.field(ContactField::Subject)
                on_input=on_field(ContactField::Subject)
                error=vm.field_error(ContactField::Subject)
                disabled=busy
            />
            <Textarea
                id="contact-message"
                label="Message"
                rows=6
                placeholder="Tell us about the process you want to automate"
                value=vm.field(ContactField::Message)
                on_input=on_field(ContactField::Message)
                error=vm.field_error(ContactField::Message)
                disabled=busy
            />
            <div class="form__counter">{move || format!("{} / {}", message_len(), MESSAGE_MAX)}</div>

            <Button button_type="submit" size="lg" disabled=busy>
                {move || if busy.get() { "Sending..." } else { "Send message" }}
            </Button>
        </form>
    }
}
