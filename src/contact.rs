use std::time::Duration;

use thiserror::Error;

/// How long the confirmation stays up after a submit.
pub const RESET_DELAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Submissions the browser's native form checks would have refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("email address is not valid")]
    InvalidEmail,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Same checks as `required` plus `type="email"`, nothing more.
    ///
    /// `required` only refuses an empty value, so whitespace counts as input.
    pub fn validate(&self) -> Result<(), ContactError> {
        for field in [Field::Name, Field::Email, Field::Message] {
            if self.get(field).is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        match self.email.trim().split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(())
            }
            _ => Err(ContactError::InvalidEmail),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success,
}

/// Handed out by a submit; only the newest ticket may reset the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket(u64);

#[derive(Debug, Default, Clone)]
pub struct ContactState {
    pub form: ContactForm,
    status: SubmissionStatus,
    generation: u64,
}

impl ContactState {
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status == SubmissionStatus::Success
    }

    /// Simulated send: nothing leaves the page.
    ///
    /// On success the form is cleared and the returned ticket must be passed
    /// to [`ContactState::expire`] once [`RESET_DELAY`] has elapsed.
    pub fn submit(&mut self) -> Result<ResetTicket, ContactError> {
        self.form.validate()?;
        log::info!(
            "contact message accepted ({} chars), delivery simulated",
            self.form.message.chars().count()
        );
        self.form.clear();
        self.status = SubmissionStatus::Success;
        self.generation += 1;
        Ok(ResetTicket(self.generation))
    }

    /// Returns true if this ticket flipped the status back to idle.
    pub fn expire(&mut self, ticket: ResetTicket) -> bool {
        if ticket.0 != self.generation || self.status == SubmissionStatus::Idle {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactState {
        let mut state = ContactState::default();
        state.form.set(Field::Name, "Ada".to_string());
        state.form.set(Field::Email, "ada@example.com".to_string());
        state.form.set(Field::Message, "Hello there".to_string());
        state
    }

    // Minimal simulated clock: timers fire in deadline order when time advances.
    struct Timers {
        now: u64,
        pending: Vec<(u64, ResetTicket)>,
    }

    impl Timers {
        fn new() -> Self {
            Self {
                now: 0,
                pending: Vec::new(),
            }
        }

        fn arm(&mut self, ticket: ResetTicket) {
            let deadline = self.now + RESET_DELAY.as_millis() as u64;
            self.pending.push((deadline, ticket));
        }

        /// Advances to `to`, returning the times at which a reset took effect.
        fn advance(&mut self, state: &mut ContactState, to: u64) -> Vec<u64> {
            self.pending.sort_by_key(|(at, _)| *at);
            let mut resets = Vec::new();
            let (due, rest): (Vec<_>, Vec<_>) =
                self.pending.drain(..).partition(|(at, _)| *at <= to);
            self.pending = rest;
            for (at, ticket) in due {
                if state.expire(ticket) {
                    resets.push(at);
                }
            }
            self.now = to;
            resets
        }
    }

    #[test]
    fn test_submit_clears_fields_and_shows_success() {
        let mut state = filled();
        assert_eq!(state.status(), SubmissionStatus::Idle);
        state.submit().expect("valid form should submit");
        assert!(state.is_success());
        assert_eq!(state.form, ContactForm::default());
        assert_eq!(state.form.get(Field::Name), "");
        assert_eq!(state.form.get(Field::Email), "");
        assert_eq!(state.form.get(Field::Message), "");
    }

    #[test]
    fn test_status_resets_after_delay() {
        let mut state = filled();
        let mut timers = Timers::new();
        timers.arm(state.submit().unwrap());

        assert!(timers.advance(&mut state, 2999).is_empty());
        assert!(state.is_success());
        assert_eq!(timers.advance(&mut state, 3000), vec![3000]);
        assert_eq!(state.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_rapid_resubmit_resets_once_after_last() {
        let mut state = filled();
        let mut timers = Timers::new();
        timers.arm(state.submit().unwrap());

        timers.advance(&mut state, 1200);
        state.form = filled().form;
        timers.arm(state.submit().unwrap());

        // first timer fires at 3000 but has been superseded
        assert!(timers.advance(&mut state, 3000).is_empty());
        assert!(state.is_success());
        assert!(timers.advance(&mut state, 4199).is_empty());
        assert_eq!(timers.advance(&mut state, 10_000), vec![4200]);
        assert_eq!(state.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_typing_does_not_cancel_reset() {
        let mut state = filled();
        let ticket = state.submit().unwrap();
        state.form.set(Field::Name, "Grace".to_string());
        assert!(state.expire(ticket));
        assert_eq!(state.status(), SubmissionStatus::Idle);
        assert_eq!(state.form.name, "Grace");
    }

    #[test]
    fn test_stale_or_repeated_expiry_is_ignored() {
        let mut state = filled();
        let first = state.submit().unwrap();
        state.form = filled().form;
        let second = state.submit().unwrap();
        assert!(!state.expire(first));
        assert!(state.expire(second));
        assert!(!state.expire(second));
    }

    #[test]
    fn test_required_fields() {
        for field in [Field::Name, Field::Email, Field::Message] {
            let mut state = filled();
            state.form.set(field, String::new());
            assert_eq!(state.submit(), Err(ContactError::MissingField(field)));
            assert_eq!(state.status(), SubmissionStatus::Idle);
            // nothing was cleared
            assert_eq!(state.form.get(field), "");
            assert_ne!(state.form, ContactForm::default());
        }
    }

    #[test]
    fn test_whitespace_only_fields_are_accepted() {
        let mut state = ContactState::default();
        state.form.set(Field::Name, "   ".to_string());
        state.form.set(Field::Email, "ada@example.com".to_string());
        state.form.set(Field::Message, "\n\n".to_string());

        assert!(state.submit().is_ok());
        assert!(state.is_success());
        assert_eq!(state.form, ContactForm::default());
    }

    #[test]
    fn test_email_shape() {
        for bad in ["ada", "@example.com", "ada@", "a@b@c"] {
            let mut state = filled();
            state.form.set(Field::Email, bad.to_string());
            assert_eq!(state.submit(), Err(ContactError::InvalidEmail), "{bad}");
        }
        let mut state = filled();
        state.form.set(Field::Email, "vaishnavi@example.com".to_string());
        assert!(state.submit().is_ok());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::MissingField(Field::Email).to_string(),
            "Email is required"
        );
        assert_eq!(
            ContactError::InvalidEmail.to_string(),
            "email address is not valid"
        );
    }
}
