use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::mail::DeliveryError;
use crate::timing::deadline_after;

pub const REVERT_AFTER: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        })
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("a message is already being sent")]
    Busy,
    #[error("{0} is required")]
    Missing(Field),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    status: Status,
    revert_at: Option<DateTime<Utc>>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn revert_at(&self) -> Option<DateTime<Utc>> {
        self.revert_at
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.status == Status::Submitting {
            return false;
        }
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
        true
    }

    pub fn submit(&mut self) -> Result<ContactMessage, FormError> {
        if self.status == Status::Submitting {
            return Err(FormError::Busy);
        }
        for field in [Field::Name, Field::Email, Field::Message] {
            if self.field(field).is_empty() {
                return Err(FormError::Missing(field));
            }
        }
        self.status = Status::Submitting;
        self.revert_at = None;
        Ok(ContactMessage {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    pub fn settle(&mut self, outcome: Result<(), DeliveryError>, now: DateTime<Utc>) -> Status {
        if self.status != Status::Submitting {
            log::warn!("ignoring delivery outcome while {:?}", self.status);
            return self.status;
        }
        match outcome {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.status = Status::Success;
            }
            Err(e) => {
                log::error!("failed to send contact message: {e}");
                self.status = Status::Error;
            }
        }
        self.revert_at = Some(deadline_after(now, REVERT_AFTER));
        self.status
    }

    // A deadline from an earlier settle never matches a newer one.
    pub fn poll(&mut self, now: DateTime<Utc>) -> bool {
        match self.revert_at {
            Some(at) if now >= at => {
                self.revert_at = None;
                self.status = Status::Idle;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::Delivery;
    use chrono::{TimeDelta, TimeZone};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingDelivery {
        fail: bool,
        sent: RefCell<Vec<ContactMessage>>,
    }

    impl Delivery for RecordingDelivery {
        async fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
            self.sent.borrow_mut().push(message.clone());
            if self.fail {
                Err(DeliveryError::NotConfigured)
            } else {
                Ok(())
            }
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 2, 12, 0, 0).unwrap()
    }

    fn ms(n: i64) -> TimeDelta {
        TimeDelta::milliseconds(n)
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.edit(Field::Name, "Ada");
        form.edit(Field::Email, "ada@example.com");
        form.edit(Field::Message, "Hello");
        form
    }

    // Same sequence the contact section runs on submit.
    async fn send(form: &mut ContactForm, delivery: &impl Delivery, now: DateTime<Utc>) -> Status {
        match form.submit() {
            Ok(message) => {
                let outcome = delivery.deliver(&message).await;
                form.settle(outcome, now)
            }
            Err(_) => form.status(),
        }
    }

    #[tokio::test]
    async fn test_missing_fields_never_deliver() {
        let delivery = RecordingDelivery::default();
        for missing in [Field::Name, Field::Email, Field::Message] {
            let mut form = filled();
            form.edit(missing, "");
            assert_eq!(form.submit(), Err(FormError::Missing(missing)));
            assert_eq!(send(&mut form, &delivery, t0()).await, Status::Idle);
        }
        assert!(delivery.sent.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_whitespace_counts_as_filled() {
        let delivery = RecordingDelivery::default();
        let mut form = filled();
        form.edit(Field::Message, "   \n");
        assert_eq!(send(&mut form, &delivery, t0()).await, Status::Success);
        assert_eq!(delivery.sent.borrow().len(), 1);
        assert_eq!(delivery.sent.borrow()[0].message, "   \n");
    }

    #[tokio::test]
    async fn test_success_clears_fields() {
        let delivery = RecordingDelivery::default();
        let mut form = filled();
        assert_eq!(send(&mut form, &delivery, t0()).await, Status::Success);
        assert_eq!(
            *delivery.sent.borrow(),
            vec![ContactMessage {
                from_name: "Ada".to_string(),
                from_email: "ada@example.com".to_string(),
                message: "Hello".to_string(),
            }]
        );
        assert_eq!(form.field(Field::Name), "");
        assert_eq!(form.field(Field::Email), "");
        assert_eq!(form.field(Field::Message), "");
    }

    #[tokio::test]
    async fn test_failure_keeps_fields() {
        let delivery = RecordingDelivery {
            fail: true,
            ..Default::default()
        };
        let mut form = filled();
        assert_eq!(send(&mut form, &delivery, t0()).await, Status::Error);
        assert_eq!(delivery.sent.borrow().len(), 1);
        assert_eq!(form.field(Field::Name), "Ada");
        assert_eq!(form.field(Field::Email), "ada@example.com");
        assert_eq!(form.field(Field::Message), "Hello");

        // retry is a new explicit submit
        assert_eq!(send(&mut form, &delivery, t0() + ms(500)).await, Status::Error);
        assert_eq!(delivery.sent.borrow().len(), 2);
    }

    #[test]
    fn test_submitting_blocks_submit_and_edits() {
        let mut form = filled();
        assert!(form.submit().is_ok());
        assert_eq!(form.status(), Status::Submitting);
        assert_eq!(form.submit(), Err(FormError::Busy));
        assert!(!form.edit(Field::Name, "Grace"));
        assert_eq!(form.field(Field::Name), "Ada");
    }

    #[test]
    fn test_edit_keeps_status() {
        let mut form = filled();
        form.submit().unwrap();
        form.settle(Err(DeliveryError::NotConfigured), t0());
        assert!(form.edit(Field::Message, "Hello again"));
        assert_eq!(form.status(), Status::Error);
    }

    #[test]
    fn test_revert_after_three_seconds() {
        for outcome in [Ok(()), Err(DeliveryError::NotConfigured)] {
            let mut form = filled();
            form.submit().unwrap();
            form.settle(outcome, t0());
            assert_eq!(form.revert_at(), Some(t0() + ms(3000)));

            assert!(!form.poll(t0() + ms(2999)));
            assert_ne!(form.status(), Status::Idle);

            assert!(form.poll(t0() + ms(3000)));
            assert_eq!(form.status(), Status::Idle);
            assert!(!form.poll(t0() + ms(9000)));
        }
    }

    #[test]
    fn test_stale_revert_is_ignored() {
        let mut form = filled();
        form.submit().unwrap();
        form.settle(Err(DeliveryError::NotConfigured), t0());

        // resubmitted before the first revert fired
        form.submit().unwrap();
        assert_eq!(form.revert_at(), None);
        assert!(!form.poll(t0() + ms(3000)));
        assert_eq!(form.status(), Status::Submitting);

        form.settle(Ok(()), t0() + ms(2000));
        assert!(!form.poll(t0() + ms(3000)));
        assert_eq!(form.status(), Status::Success);
        assert!(form.poll(t0() + ms(5000)));
        assert_eq!(form.status(), Status::Idle);
    }

    #[test]
    fn test_settle_outside_submitting_is_ignored() {
        let mut form = filled();
        assert_eq!(form.settle(Ok(()), t0()), Status::Idle);
        assert_eq!(form.field(Field::Name), "Ada");
        assert_eq!(form.revert_at(), None);
    }
}
