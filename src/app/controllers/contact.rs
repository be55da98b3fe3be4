use thiserror::Error;
use tracing::{debug, info};

use crate::app::domain::contact::{ContactForm, ValidationErrors};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{0}")]
    Invalid(ValidationErrors),

    #[error("a message is already being sent")]
    InFlight,
}

/// Simulated contact submission. Nothing leaves the machine: once a valid
/// form is accepted the caller waits the configured delay and then calls
/// [`ContactController::complete`], which always succeeds.
#[derive(Debug, Default)]
pub struct ContactController {
    pending: Option<ContactForm>,
}

impl ContactController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_sending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn begin_submit(&mut self, form: ContactForm) -> Result<(), SubmitError> {
        if self.is_sending() {
            return Err(SubmitError::InFlight);
        }
        form.validate().map_err(SubmitError::Invalid)?;
        info!("contact form accepted");
        debug!(subject = %form.subject, "pending contact message");
        self.pending = Some(form);
        Ok(())
    }

    /// Finish the pending submission. Returns the form that was "sent".
    pub fn complete(&mut self) -> Option<ContactForm> {
        let sent = self.pending.take();
        if sent.is_some() {
            info!("contact message sent");
        }
        sent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::contact::ContactField;

    fn form(name: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: "jo@example.com".to_string(),
            subject: "Project idea".to_string(),
            message: "Let's build a tool together.".to_string(),
        }
    }

    #[derive(Clone, Default)]
    struct CapturedLog(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_accepted_submission_keeps_visitor_out_of_info_log() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut controller = ContactController::new();
            controller.begin_submit(form("Jo Visitor")).unwrap();
        });

        let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("contact form accepted"));
        assert!(!output.contains("Jo Visitor"));
        assert!(!output.contains("jo@example.com"));
    }

    #[test]
    fn test_valid_submission_round() {
        let mut controller = ContactController::new();
        assert!(!controller.is_sending());
        controller.begin_submit(form("Jo")).unwrap();
        assert!(controller.is_sending());

        let sent = controller.complete().unwrap();
        assert_eq!(sent.name, "Jo");
        assert!(!controller.is_sending());
        assert!(controller.complete().is_none());
    }

    #[test]
    fn test_invalid_form_is_rejected() {
        let mut controller = ContactController::new();
        match controller.begin_submit(form("J")) {
            Err(SubmitError::Invalid(errors)) => {
                assert_eq!(
                    errors.get(ContactField::Name).map(|e| e.message),
                    Some("Name must be at least 2 characters.")
                );
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
        assert!(!controller.is_sending());
    }

    #[test]
    fn test_second_submit_while_sending() {
        let mut controller = ContactController::new();
        controller.begin_submit(form("Jo")).unwrap();
        assert_eq!(controller.begin_submit(form("Ann")), Err(SubmitError::InFlight));
    }
}
