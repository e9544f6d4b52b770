use std::time::Duration;

use dioxus::prelude::*;
use gloo_timers::future::sleep;
use tracing::{error, info};

use ::common::contact::{ContactForm, Field, Submission};
use api::message::send_message;

use crate::common::use_site;

#[derive(Clone, PartialEq, Props)]
struct FormFieldProps {
    form: Signal<ContactForm>,
    field: Field,
    #[props(default)]
    wide: bool,
}

#[component]
fn FormField(props: FormFieldProps) -> Element {
    let mut form = props.form;
    let field = props.field;

    let (value, error, focused) = {
        let form = form.read();
        (
            form.fields().get(field).to_string(),
            form.errors().get(field).map(String::from),
            form.focused() == Some(field),
        )
    };

    let class = match (focused, error.is_some()) {
        (_, true) => "form-input invalid",
        (true, false) => "form-input focused",
        (false, false) => "form-input",
    };

    rsx! {
        div { class: if props.wide { "form-field wide" } else { "form-field" },
            if field == Field::Message {
                textarea {
                    class: class,
                    name: field.as_str(),
                    rows: "5",
                    placeholder: field.placeholder(),
                    value: "{value}",
                    oninput: move |evt| form.write().set_field(field, evt.value()),
                    onfocus: move |_| form.write().focus(field),
                    onblur: move |_| form.write().blur(field),
                }
            } else {
                input {
                    class: class,
                    name: field.as_str(),
                    r#type: if field == Field::Email { "email" } else { "text" },
                    placeholder: field.placeholder(),
                    value: "{value}",
                    oninput: move |evt| form.write().set_field(field, evt.value()),
                    onfocus: move |_| form.write().focus(field),
                    onblur: move |_| form.write().blur(field),
                }
            }
            if let Some(error) = error {
                span { class: "field-error", "{error}" }
            }
        }
    }
}

// the form owns exactly one send per accepted submit; the controller decides when that is
#[component]
pub fn ContactFormPanel() -> Element {
    let site = use_site();
    let mut form = use_signal(ContactForm::default);

    let mail = site.config.mail.clone();
    let reset = Duration::from_millis(u64::from(site.config.contact.success_reset_ms));

    let submission = form.read().submission();

    rsx! {
        form {
            class: "glass",
            novalidate: true,
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();

                let Some(request) = form.write().submit(&mail.recipient) else {
                    return;
                };
                let attempt = form.peek().attempt();
                let endpoint = mail.endpoint.clone();

                spawn(async move {
                    let outcome = send_message(&endpoint, &request).await;

                    match &outcome {
                        Ok(()) => info!("contact message sent"),
                        Err(err) => error!("failed to send contact message: {err:#}"),
                    }

                    let sent = outcome.is_ok();
                    form.write().resolve(outcome);

                    if sent {
                        sleep(reset).await;
                        form.write().expire_success(attempt);
                    }
                });
            },

            div { class: "form-grid",
                FormField { form, field: Field::Name }
                FormField { form, field: Field::Email }
                FormField { form, field: Field::Subject, wide: true }
                FormField { form, field: Field::Message, wide: true }
            }

            if submission == Submission::Succeeded {
                div { class: "banner banner-success",
                    "Thank you! Your message has been sent successfully. I'll get back to you soon."
                }
            }
            if submission == Submission::Failed {
                div { class: "banner banner-error",
                    "Sorry, there was an error sending your message. Please try again."
                }
            }

            button {
                class: "btn btn-primary btn-block",
                r#type: "submit",
                disabled: submission == Submission::Pending,
                if submission == Submission::Pending {
                    span { class: "spinner" }
                    "Sending..."
                } else {
                    "Send Message"
                    i { class: "fas fa-paper-plane" }
                }
            }
        }
    }
}
