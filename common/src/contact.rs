use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use api::message::SendMessageReq;

use crate::EMAIL_REGEX;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_REGEX).expect("EMAIL_REGEX is a valid pattern"));

pub const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Your Email",
            Field::Subject => "Subject",
            Field::Message => "Tell me about your project...",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }
}

// one slot per field; None means the field passed (or has not been checked)
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Subject => self.subject.as_deref(),
            Field::Message => self.message.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|f| self.get(f).is_none())
    }

    fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Subject => self.subject = None,
            Field::Message => self.message = None,
        }
    }
}

// every failing field is reported, not just the first one
pub fn validate(fields: &ContactFields) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if fields.name.trim().is_empty() {
        errors.name = Some(String::from("Please enter your name"));
    }

    let email = fields.email.trim();
    if email.is_empty() {
        errors.email = Some(String::from("Please enter your email"));
    } else if !EMAIL_SHAPE.is_match(email) {
        errors.email = Some(String::from("Please enter a valid email"));
    }

    if fields.subject.trim().is_empty() {
        errors.subject = Some(String::from("Please enter a subject"));
    }

    let message = fields.message.trim();
    if message.is_empty() {
        errors.message = Some(String::from("Please enter your message"));
    } else if message.chars().count() < MIN_MESSAGE_CHARS {
        errors.message = Some(format!(
            "Message must be at least {MIN_MESSAGE_CHARS} characters"
        ));
    }

    errors
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Submission {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

// contact form controller
//
// Idle -> Pending -> Succeeded | Failed, with Succeeded expiring back to Idle on a timer
// and Failed returning to Idle as soon as the visitor edits something.  submit() hands
// back the outbound request instead of sending it, so the caller owns the single network
// call and the controller only ever sees its outcome
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    fields: ContactFields,
    errors: FieldErrors,
    submission: Submission,
    focused: Option<Field>,
    // bumped on every accepted submit so a stale success timer cannot clear a newer banner
    attempt: u64,
}

impl ContactForm {
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submission(&self) -> Submission {
        self.submission
    }

    pub fn focused(&self) -> Option<Field> {
        self.focused
    }

    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    // the submit control is disabled while a send is in flight
    pub fn can_submit(&self) -> bool {
        self.submission != Submission::Pending
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        *self.fields.slot(field) = value;
        self.errors.clear(field);

        if self.submission == Submission::Failed {
            self.submission = Submission::Idle;
        }
    }

    pub fn focus(&mut self, field: Field) {
        self.focused = Some(field);
    }

    pub fn blur(&mut self, field: Field) {
        if self.focused == Some(field) {
            self.focused = None;
        }
    }

    // validate and, if everything passes, move to Pending and return the one request the
    // caller must send.  returns None when validation fails or a send is already pending
    pub fn submit(&mut self, recipient: &str) -> Option<SendMessageReq> {
        if !self.can_submit() {
            debug!("submit ignored, a message is already pending");
            return None;
        }

        self.errors = validate(&self.fields);
        if !self.errors.is_empty() {
            debug!("contact form failed validation");
            return None;
        }

        self.submission = Submission::Pending;
        self.attempt += 1;

        Some(SendMessageReq {
            sender_name: self.fields.name.clone(),
            sender_email: self.fields.email.clone(),
            subject: self.fields.subject.clone(),
            message: self.fields.message.clone(),
            recipient: String::from(recipient),
        })
    }

    // record the outcome of the send started by the last submit()
    pub fn resolve<E>(&mut self, outcome: Result<(), E>) {
        if self.submission != Submission::Pending {
            warn!("send outcome arrived with no pending submission");
            return;
        }

        match outcome {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.errors = FieldErrors::default();
                self.focused = None;
                self.submission = Submission::Succeeded;
            }
            // values stay put so the visitor can retry
            Err(_) => self.submission = Submission::Failed,
        }
    }

    pub fn expire_success(&mut self, attempt: u64) {
        if self.submission == Submission::Succeeded && self.attempt == attempt {
            self.submission = Submission::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECIPIENT: &str = "owner@example.com";

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field(Field::Name, String::from("Ada Lovelace"));
        form.set_field(Field::Email, String::from("ada@example.com"));
        form.set_field(Field::Subject, String::from("Project"));
        form.set_field(Field::Message, String::from("I would like to build an engine."));
        form
    }

    #[test]
    fn empty_form_reports_every_field() {
        let mut form = ContactForm::default();

        assert!(form.submit(RECIPIENT).is_none());

        let errors = form.errors();
        assert_eq!(errors.name.as_deref(), Some("Please enter your name"));
        assert_eq!(errors.email.as_deref(), Some("Please enter your email"));
        assert_eq!(errors.subject.as_deref(), Some("Please enter a subject"));
        assert_eq!(errors.message.as_deref(), Some("Please enter your message"));
        assert_eq!(form.submission(), Submission::Idle);
    }

    #[test]
    fn short_message_blocks_the_send() {
        let mut form = filled();
        form.set_field(Field::Message, String::from("short"));

        assert!(form.submit(RECIPIENT).is_none());
        assert_eq!(
            form.errors().message.as_deref(),
            Some("Message must be at least 10 characters")
        );
        assert_eq!(form.submission(), Submission::Idle);
        assert_eq!(form.attempt(), 0);
    }

    #[test]
    fn message_length_ignores_surrounding_whitespace() {
        let mut fields = filled().fields().clone();

        fields.message = String::from("   123456789   ");
        assert!(validate(&fields).message.is_some());

        fields.message = String::from("  1234567890  ");
        assert!(validate(&fields).message.is_none());
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut fields = filled().fields().clone();
        fields.name = String::from("   ");
        fields.subject = String::from("\t");

        let errors = validate(&fields);
        assert!(errors.name.is_some());
        assert!(errors.subject.is_some());
        assert!(errors.email.is_none());
    }

    #[test]
    fn email_shapes() {
        let mut fields = filled().fields().clone();

        fields.email = String::from("a@b.c");
        assert!(validate(&fields).email.is_none());

        fields.email = String::from("not-an-email");
        assert_eq!(
            validate(&fields).email.as_deref(),
            Some("Please enter a valid email")
        );

        fields.email = String::from("two words@x.io");
        assert!(validate(&fields).email.is_some());

        // required takes precedence over format
        fields.email = String::new();
        assert_eq!(
            validate(&fields).email.as_deref(),
            Some("Please enter your email")
        );
    }

    #[test]
    fn valid_submit_builds_one_request() {
        let mut form = filled();

        let req = form.submit(RECIPIENT).unwrap();
        assert_eq!(req.sender_name, "Ada Lovelace");
        assert_eq!(req.sender_email, "ada@example.com");
        assert_eq!(req.subject, "Project");
        assert_eq!(req.recipient, RECIPIENT);
        assert_eq!(form.submission(), Submission::Pending);
        assert!(!form.can_submit());

        // no second request while the first is in flight
        assert!(form.submit(RECIPIENT).is_none());
        assert_eq!(form.attempt(), 1);
    }

    #[test]
    fn failure_keeps_values_then_success_clears_them() {
        let mut form = filled();
        let before = form.fields().clone();

        form.submit(RECIPIENT).unwrap();
        form.resolve(Err("provider unreachable"));

        assert_eq!(form.submission(), Submission::Failed);
        assert_eq!(form.fields(), &before);
        assert!(form.can_submit());

        form.submit(RECIPIENT).unwrap();
        form.resolve::<()>(Ok(()));

        assert_eq!(form.submission(), Submission::Succeeded);
        assert_eq!(form.fields(), &ContactFields::default());
    }

    #[test]
    fn success_clears_focus() {
        let mut form = filled();
        form.focus(Field::Message);

        form.submit(RECIPIENT).unwrap();
        form.resolve::<()>(Ok(()));

        assert_eq!(form.focused(), None);
    }

    #[test]
    fn editing_after_failure_returns_to_idle() {
        let mut form = filled();
        form.submit(RECIPIENT).unwrap();
        form.resolve(Err(()));

        form.set_field(Field::Subject, String::from("Another project"));
        assert_eq!(form.submission(), Submission::Idle);
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut form = ContactForm::default();
        form.submit(RECIPIENT);

        form.set_field(Field::Name, String::from("A"));
        assert!(form.errors().name.is_none());
        assert!(form.errors().email.is_some());
    }

    #[test]
    fn stale_success_timer_is_ignored() {
        let mut form = filled();
        form.submit(RECIPIENT).unwrap();
        form.resolve::<()>(Ok(()));
        let first = form.attempt();

        // a second message goes out before the first banner expires
        for field in Field::ALL {
            form.set_field(field, filled().fields().get(field).to_owned());
        }
        form.submit(RECIPIENT).unwrap();
        form.resolve::<()>(Ok(()));

        form.expire_success(first);
        assert_eq!(form.submission(), Submission::Succeeded);

        form.expire_success(form.attempt());
        assert_eq!(form.submission(), Submission::Idle);
    }

    #[test]
    fn blur_only_clears_matching_focus() {
        let mut form = ContactForm::default();
        form.focus(Field::Email);

        form.blur(Field::Name);
        assert_eq!(form.focused(), Some(Field::Email));

        form.blur(Field::Email);
        assert_eq!(form.focused(), None);
    }
}
