//! Simulated form submissions.
//!
//! Neither form talks to a server. A submit walks a small phase machine from
//! idle through a working pause into a success state that lingers before
//! snapping back to idle. Components schedule the timers; everything here is
//! plain state so the walk is testable.

/// Newsletter: pause before the success flash.
pub const NEWSLETTER_SUBMIT_MS: u32 = 1500;
/// Newsletter: how long the success state lingers before reset.
pub const NEWSLETTER_RESET_MS: u32 = 3000;
/// Contact: pause before the success flash.
pub const CONTACT_SUBMIT_MS: u32 = 2000;
/// Contact: how long the success state lingers before reset.
pub const CONTACT_RESET_MS: u32 = 4000;

/// Where a form is in its submit cycle. The submit control stays disabled
/// through both non-idle phases.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

impl FormPhase {
    pub fn is_busy(self) -> bool {
        self != FormPhase::Idle
    }

    /// Starts a submission. A form already mid-cycle stays where it is, so a
    /// repeated submit cannot restart the timers.
    #[must_use]
    pub fn begin(self) -> Self {
        match self {
            FormPhase::Idle => FormPhase::Submitting,
            other => other,
        }
    }

    /// Applies the submission outcome: success moves to the lingering success
    /// state, failure returns straight to idle. Meaningless outside of a
    /// submission, so other phases are left alone.
    #[must_use]
    pub fn complete<E>(self, outcome: &Result<(), E>) -> Self {
        match (self, outcome) {
            (FormPhase::Submitting, Ok(())) => FormPhase::Succeeded,
            (FormPhase::Submitting, Err(_)) => FormPhase::Idle,
            (other, _) => other,
        }
    }

    /// Ends the success state. A stray reset timer firing in any other phase
    /// changes nothing.
    #[must_use]
    pub fn reset(self) -> Self {
        match self {
            FormPhase::Succeeded => FormPhase::Idle,
            other => other,
        }
    }
}

/// Subscribe button label for a phase.
pub fn newsletter_label(phase: FormPhase) -> &'static str {
    match phase {
        FormPhase::Idle => "Subscribe",
        FormPhase::Submitting => "⏳ Subscribing...",
        FormPhase::Succeeded => "✅ Subscribed!",
    }
}

/// Contact submit button label for a phase.
pub fn contact_label(phase: FormPhase) -> &'static str {
    match phase {
        FormPhase::Idle => "Send Message",
        FormPhase::Submitting => "⏳ Sending...",
        FormPhase::Succeeded => "✅ Message Sent!",
    }
}

/// Everything the contact form collects.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct ContactFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ValidationError {
    MissingFields,
    InvalidEmail,
}

impl ValidationError {
    /// User-facing wording, shown in the blocking alert.
    pub fn message(self) -> &'static str {
        match self {
            ValidationError::MissingFields => "Please fill in all required fields.",
            ValidationError::InvalidEmail => "Please enter a valid email address.",
        }
    }
}

/// Lenient address check: one `@`, no whitespace, and a dot with something on
/// both sides somewhere after the `@`. Deliverability is not our problem.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, ch)| ch == '.' && i > 0 && i + 1 < domain.len())
}

/// Presence first, then address shape. The first failure wins.
pub fn validate_contact(fields: &ContactFields) -> Result<(), ValidationError> {
    let all_present = !fields.first_name.is_empty()
        && !fields.last_name.is_empty()
        && !fields.email.is_empty()
        && !fields.subject.is_empty()
        && !fields.message.is_empty();
    if !all_present {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(&fields.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFields {
        ContactFields {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "A note.".into(),
        }
    }

    #[test]
    fn test_phase_walks_full_cycle() {
        let phase = FormPhase::Idle;
        let phase = phase.begin();
        assert_eq!(phase, FormPhase::Submitting);
        assert!(phase.is_busy());
        let phase = phase.complete(&Ok::<(), ValidationError>(()));
        assert_eq!(phase, FormPhase::Succeeded);
        assert!(phase.is_busy());
        let phase = phase.reset();
        assert_eq!(phase, FormPhase::Idle);
        assert!(!phase.is_busy());
    }

    #[test]
    fn test_failed_submission_returns_to_idle() {
        let phase = FormPhase::Submitting.complete(&Err(ValidationError::InvalidEmail));
        assert_eq!(phase, FormPhase::Idle);
    }

    #[test]
    fn test_repeated_begin_does_not_restart() {
        assert_eq!(FormPhase::Submitting.begin(), FormPhase::Submitting);
        assert_eq!(FormPhase::Succeeded.begin(), FormPhase::Succeeded);
    }

    #[test]
    fn test_stray_timers_are_harmless() {
        // Outcome landing after a reset, or a reset landing while idle.
        assert_eq!(
            FormPhase::Idle.complete(&Ok::<(), ValidationError>(())),
            FormPhase::Idle
        );
        assert_eq!(FormPhase::Idle.reset(), FormPhase::Idle);
        assert_eq!(FormPhase::Submitting.reset(), FormPhase::Submitting);
    }

    #[test]
    fn test_labels_follow_phase() {
        assert_eq!(newsletter_label(FormPhase::Idle), "Subscribe");
        assert_eq!(newsletter_label(FormPhase::Submitting), "⏳ Subscribing...");
        assert_eq!(newsletter_label(FormPhase::Succeeded), "✅ Subscribed!");
        assert_eq!(contact_label(FormPhase::Idle), "Send Message");
        assert_eq!(contact_label(FormPhase::Submitting), "⏳ Sending...");
        assert_eq!(contact_label(FormPhase::Succeeded), "✅ Message Sent!");
    }

    #[test]
    fn test_success_lingers_as_long_as_the_reset_delay() {
        assert_eq!(NEWSLETTER_SUBMIT_MS + NEWSLETTER_RESET_MS, 4500);
        assert_eq!(CONTACT_SUBMIT_MS + CONTACT_RESET_MS, 6000);
    }

    #[test]
    fn test_validation_requires_every_field() {
        assert_eq!(validate_contact(&filled()), Ok(()));
        let wipes: [fn(&mut ContactFields); 5] = [
            |f| f.first_name.clear(),
            |f| f.last_name.clear(),
            |f| f.email.clear(),
            |f| f.subject.clear(),
            |f| f.message.clear(),
        ];
        for wipe in wipes {
            let mut fields = filled();
            wipe(&mut fields);
            assert_eq!(
                validate_contact(&fields),
                Err(ValidationError::MissingFields)
            );
        }
    }

    #[test]
    fn test_missing_fields_reported_before_bad_email() {
        let mut fields = filled();
        fields.email = "not-an-address".into();
        fields.subject.clear();
        assert_eq!(
            validate_contact(&fields),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("plain"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada@.com"));
        assert!(!is_valid_email("ada@com."));
        assert!(!is_valid_email("ada@exa mple.com"));
        assert!(!is_valid_email("ada@@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::MissingFields.message(),
            "Please fill in all required fields."
        );
        assert_eq!(
            ValidationError::InvalidEmail.message(),
            "Please enter a valid email address."
        );
    }
}
