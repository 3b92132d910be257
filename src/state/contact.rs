//! Contact form state: field values and the submission lifecycle.
//!
//! LIFECYCLE
//! =========
//! `Idle -> Submitting -> Success | Error -> Idle`. The trip back to `Idle`
//! is driven by a timer the page arms with the ticket returned from
//! [`ContactForm::complete_submit`]. A newer submission bumps the ticket, so a
//! timer left over from an earlier result never clears a fresher one.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// How long the success or error panel stays up before the form returns.
pub const STATUS_REVERT_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// The `name`/`id` attribute of the matching input.
    #[must_use]
    pub fn attr(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormData {
    #[must_use]
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    pub data: FormData,
    status: SubmissionStatus,
    revert_ticket: u64,
}

impl ContactForm {
    #[must_use]
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Field edits never touch the status; the browser's `required`
    /// attributes do validation.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.data.slot(field) = value.into();
    }

    /// Enter `Submitting` and hand back a snapshot of the fields to send.
    /// Returns `None` while a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<FormData> {
        if self.is_submitting() {
            return None;
        }
        self.status = SubmissionStatus::Submitting;
        self.revert_ticket = self.revert_ticket.wrapping_add(1);
        Some(self.data.clone())
    }

    /// Record the outcome of the in-flight submission. On success the fields
    /// are cleared; on failure they are kept so the user can retry.
    ///
    /// Returns the ticket for the revert timer, or `None` if nothing was in
    /// flight.
    pub fn complete_submit(&mut self, delivered: bool) -> Option<u64> {
        if !self.is_submitting() {
            return None;
        }
        if delivered {
            self.status = SubmissionStatus::Success;
            self.data = FormData::default();
        } else {
            self.status = SubmissionStatus::Error;
        }
        self.revert_ticket = self.revert_ticket.wrapping_add(1);
        Some(self.revert_ticket)
    }

    /// Revert timer fired. Returns `true` if the status went back to `Idle`.
    pub fn expire_status(&mut self, ticket: u64) -> bool {
        let showing_result = matches!(self.status, SubmissionStatus::Success | SubmissionStatus::Error);
        if !showing_result || ticket != self.revert_ticket {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        true
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.is_submitting() { "Sending..." } else { "Send Message" }
    }
}
