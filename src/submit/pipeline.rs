use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{HtmlButtonElement, HtmlFormElement, HtmlInputElement};

use crate::config::SiteConfig;
use crate::validate::{is_valid_email, is_valid_phone};

use super::fields::FormFields;
use super::mailto;
use super::recaptcha::{self, ChallengeProvider};
use super::relay::{EmailJs, Relay};

const INVALID_EMAIL_MSG: &str = "Please enter a valid email.";
const INVALID_PHONE_MSG: &str = "Please enter a valid phone number.";
const SENT_MSG: &str = "Sent successfully. We will reply soon.";
const SEND_FAILED_MSG: &str = "Failed to send. Please try later or email us directly.";

/// Terminal state of one submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the visitor was told, nothing left the page.
    Rejected,
    /// The relay accepted the submission and the form was cleared.
    Sent,
    /// No relay route available; the mail-client link was opened instead.
    FallbackSent,
    /// The relay call failed; entered values are kept for another try.
    SendFailed,
}

/// The pipeline's view of the page: notifications, the submit control, the
/// hidden token field, field clearing and mail-link navigation. `DomSurface`
/// implements it over the live form; tests substitute a recording mock.
pub trait SubmitSurface {
    fn notify(&self, message: &str);
    fn set_token(&self, token: &str);
    fn disable_control(&self);
    fn show_sending(&self);
    fn restore_control(&self);
    fn clear_fields(&self);
    fn open_mailto(&self, url: &str);
}

/// Runs submissions against the capabilities wired at startup.
pub struct Submitter {
    config: SiteConfig,
    relay: Option<Rc<dyn Relay>>,
    challenge: Rc<dyn ChallengeProvider>,
}

impl Submitter {
    pub fn new(config: SiteConfig) -> Self {
        let relay: Option<Rc<dyn Relay>> = if config.relay_configured() {
            Some(Rc::new(EmailJs::new(
                config.emailjs_service_id,
                config.emailjs_public_key,
            )))
        } else {
            log::info!("relay unconfigured, submissions fall back to mailto");
            None
        };
        let challenge = recaptcha::provider_for(config.recaptcha_site_key);
        Self {
            config,
            relay,
            challenge,
        }
    }

    #[cfg(test)]
    fn with_capabilities(
        config: SiteConfig,
        relay: Option<Rc<dyn Relay>>,
        challenge: Rc<dyn ChallengeProvider>,
    ) -> Self {
        Self {
            config,
            relay,
            challenge,
        }
    }

    pub async fn submit_contact(
        &self,
        surface: &dyn SubmitSurface,
        fields: FormFields,
    ) -> SubmitOutcome {
        self.submit(
            surface,
            fields,
            non_empty(self.config.template_contact),
            Some("contact"),
        )
        .await
    }

    pub async fn submit_worker(
        &self,
        surface: &dyn SubmitSurface,
        fields: FormFields,
    ) -> SubmitOutcome {
        self.submit(
            surface,
            fields,
            non_empty(self.config.template_worker),
            Some("worker_apply"),
        )
        .await
    }

    /// One submission: validate, fetch the challenge token, then exactly one
    /// of relay send or mailto fallback. The submit control is disabled for
    /// the whole run and restored on every exit path, so a second click
    /// cannot start an overlapping attempt.
    pub async fn submit(
        &self,
        surface: &dyn SubmitSurface,
        fields: FormFields,
        template_id: Option<&str>,
        action: Option<&str>,
    ) -> SubmitOutcome {
        surface.disable_control();

        // Unfilled optional inputs serialize as empty strings; only filled
        // fields are checked.
        if let Some(email) = fields.text("email").filter(|email| !email.is_empty()) {
            if !is_valid_email(&email) {
                surface.notify(INVALID_EMAIL_MSG);
                surface.restore_control();
                return SubmitOutcome::Rejected;
            }
        }
        if let Some(phone) = fields.text("phone").filter(|phone| !phone.is_empty()) {
            if !is_valid_phone(&phone) {
                surface.notify(INVALID_PHONE_MSG);
                surface.restore_control();
                return SubmitOutcome::Rejected;
            }
        }

        let token = self.challenge.token(action.unwrap_or("submit")).await;
        surface.set_token(&token);

        let outcome = match (self.relay.as_deref(), template_id) {
            (Some(relay), Some(template_id)) => {
                surface.show_sending();
                let params = fields.to_template_params(self.config.contact_email);
                match relay.send(template_id, &params).await {
                    Ok(()) => {
                        surface.notify(SENT_MSG);
                        surface.clear_fields();
                        SubmitOutcome::Sent
                    }
                    Err(err) => {
                        log::error!("relay send failed: {err}");
                        surface.notify(SEND_FAILED_MSG);
                        SubmitOutcome::SendFailed
                    }
                }
            }
            _ => {
                let link = mailto::fallback_link(self.config.contact_email, action, &fields);
                surface.open_mailto(&link);
                SubmitOutcome::FallbackSent
            }
        };

        surface.restore_control();
        outcome
    }
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

/// Handed down through context so every form reaches the same capabilities.
#[derive(Clone)]
pub struct SubmitterHandle(pub Rc<Submitter>);

impl PartialEq for SubmitterHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// `SubmitSurface` over the live form element. Grabs the submit button and
/// its resting label up front so the label can be restored after "Sending...".
pub struct DomSurface {
    form: HtmlFormElement,
    control: Option<HtmlButtonElement>,
    resting_label: Option<String>,
}

impl DomSurface {
    pub fn new(form: HtmlFormElement) -> Self {
        let control = form
            .query_selector(r#"button[type="submit"]"#)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        let resting_label = control.as_ref().and_then(|btn| btn.text_content());
        Self {
            form,
            control,
            resting_label,
        }
    }
}

impl SubmitSurface for DomSurface {
    fn notify(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn set_token(&self, token: &str) {
        if let Some(input) = self
            .form
            .query_selector(r#"input[name="recaptcha_token"]"#)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            input.set_value(token);
        }
    }

    fn disable_control(&self) {
        if let Some(control) = &self.control {
            control.set_disabled(true);
        }
    }

    fn show_sending(&self) {
        if let Some(control) = &self.control {
            control.set_text_content(Some("Sending..."));
        }
    }

    fn restore_control(&self) {
        if let Some(control) = &self.control {
            control.set_disabled(false);
            control.set_text_content(self.resting_label.as_deref());
        }
    }

    fn clear_fields(&self) {
        self.form.reset();
    }

    fn open_mailto(&self, url: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submit::relay::RelayError;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use serde_json::Value;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct PageMock {
        notices: RefCell<Vec<String>>,
        token: RefCell<Option<String>>,
        disabled: Cell<u32>,
        sending: Cell<bool>,
        restored: Cell<u32>,
        cleared: Cell<bool>,
        mailto: RefCell<Option<String>>,
    }

    impl SubmitSurface for PageMock {
        fn notify(&self, message: &str) {
            self.notices.borrow_mut().push(message.to_string());
        }
        fn set_token(&self, token: &str) {
            *self.token.borrow_mut() = Some(token.to_string());
        }
        fn disable_control(&self) {
            self.disabled.set(self.disabled.get() + 1);
        }
        fn show_sending(&self) {
            self.sending.set(true);
        }
        fn restore_control(&self) {
            self.restored.set(self.restored.get() + 1);
        }
        fn clear_fields(&self) {
            self.cleared.set(true);
        }
        fn open_mailto(&self, url: &str) {
            *self.mailto.borrow_mut() = Some(url.to_string());
        }
    }

    #[derive(Default)]
    struct RelayMock {
        fail: bool,
        calls: RefCell<Vec<(String, Value)>>,
    }

    #[async_trait(?Send)]
    impl Relay for RelayMock {
        async fn send(&self, template_id: &str, params: &Value) -> Result<(), RelayError> {
            self.calls
                .borrow_mut()
                .push((template_id.to_string(), params.clone()));
            if self.fail {
                Err(RelayError::Rejected {
                    status: 400,
                    body: "bad request".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct ChallengeMock {
        token: &'static str,
        actions: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl ChallengeProvider for ChallengeMock {
        async fn token(&self, action: &str) -> String {
            self.actions.borrow_mut().push(action.to_string());
            self.token.to_string()
        }
    }

    fn test_config() -> SiteConfig {
        SiteConfig {
            contact_email: "inbox@example.com",
            emailjs_public_key: "pk_test",
            emailjs_service_id: "service_test",
            template_contact: "template_contact",
            template_worker: "template_worker",
            recaptcha_site_key: "",
        }
    }

    fn submitter_with(relay: Option<Rc<RelayMock>>, challenge: Rc<ChallengeMock>) -> Submitter {
        Submitter::with_capabilities(
            test_config(),
            relay.map(|relay| relay as Rc<dyn Relay>),
            challenge,
        )
    }

    fn fields(pairs: &[(&str, &str)]) -> FormFields {
        FormFields::collect(
            pairs
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string())),
        )
    }

    #[test]
    fn invalid_email_notifies_once_and_never_reaches_the_network() {
        let relay = Rc::new(RelayMock::default());
        let challenge = Rc::new(ChallengeMock::default());
        let submitter = submitter_with(Some(relay.clone()), challenge.clone());
        let page = PageMock::default();

        let outcome = block_on(submitter.submit(
            &page,
            fields(&[("name", "Sam"), ("email", "not-an-address")]),
            Some("template_contact"),
            Some("contact"),
        ));

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(*page.notices.borrow(), vec![INVALID_EMAIL_MSG.to_string()]);
        assert!(relay.calls.borrow().is_empty());
        assert!(challenge.actions.borrow().is_empty());
        assert!(page.mailto.borrow().is_none());
        assert!(!page.cleared.get());
        assert_eq!(page.disabled.get(), 1);
        assert_eq!(page.restored.get(), 1);
    }

    #[test]
    fn short_phone_rejects_with_the_phone_message() {
        let relay = Rc::new(RelayMock::default());
        let challenge = Rc::new(ChallengeMock::default());
        let submitter = submitter_with(Some(relay.clone()), challenge);
        let page = PageMock::default();

        let outcome = block_on(submitter.submit(
            &page,
            fields(&[("name", "Sam"), ("phone", "12345")]),
            Some("template_contact"),
            Some("contact"),
        ));

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(*page.notices.borrow(), vec![INVALID_PHONE_MSG.to_string()]);
        assert!(relay.calls.borrow().is_empty());
    }

    #[test]
    fn empty_optional_fields_are_not_validated() {
        let relay = Rc::new(RelayMock::default());
        let challenge = Rc::new(ChallengeMock::default());
        let submitter = submitter_with(Some(relay.clone()), challenge);
        let page = PageMock::default();

        let outcome = block_on(submitter.submit(
            &page,
            fields(&[("name", "Sam"), ("email", ""), ("phone", ""), ("message", "hi")]),
            Some("template_contact"),
            Some("contact"),
        ));

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(relay.calls.borrow().len(), 1);
    }

    #[test]
    fn unconfigured_relay_falls_back_to_a_mail_link() {
        let challenge = Rc::new(ChallengeMock::default());
        let submitter = submitter_with(None, challenge.clone());
        let page = PageMock::default();

        let outcome = block_on(submitter.submit(
            &page,
            fields(&[("name", "Sam"), ("email", "sam@example.com")]),
            Some("template_worker"),
            Some("worker_apply"),
        ));

        assert_eq!(outcome, SubmitOutcome::FallbackSent);
        let link = page.mailto.borrow().clone().unwrap();
        assert!(link.starts_with("mailto:inbox@example.com?"));
        assert!(link.contains("worker_apply"));
        assert!(link.contains("Sam"));
        assert!(page.notices.borrow().is_empty());
        assert!(!page.cleared.get());
        assert_eq!(page.restored.get(), 1);
        // The token is still fetched and stamped before the fallback branch.
        assert_eq!(*challenge.actions.borrow(), vec!["worker_apply".to_string()]);
        assert_eq!(*page.token.borrow(), Some(String::new()));
    }

    #[test]
    fn missing_template_id_falls_back_even_with_a_relay() {
        let relay = Rc::new(RelayMock::default());
        let challenge = Rc::new(ChallengeMock::default());
        let submitter = submitter_with(Some(relay.clone()), challenge);
        let page = PageMock::default();

        let outcome = block_on(submitter.submit(
            &page,
            fields(&[("name", "Sam")]),
            None,
            Some("contact"),
        ));

        assert_eq!(outcome, SubmitOutcome::FallbackSent);
        assert!(relay.calls.borrow().is_empty());
        assert!(page.mailto.borrow().is_some());
    }

    #[test]
    fn relay_success_clears_fields_and_notifies_once() {
        let relay = Rc::new(RelayMock::default());
        let challenge = Rc::new(ChallengeMock {
            token: "tok-123",
            ..ChallengeMock::default()
        });
        let submitter = submitter_with(Some(relay.clone()), challenge);
        let page = PageMock::default();

        let outcome = block_on(submitter.submit(
            &page,
            fields(&[("name", "Sam"), ("email", "sam@example.com")]),
            Some("template_contact"),
            Some("contact"),
        ));

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert!(page.cleared.get());
        assert!(page.sending.get());
        assert_eq!(*page.notices.borrow(), vec![SENT_MSG.to_string()]);
        assert_eq!(*page.token.borrow(), Some("tok-123".to_string()));
        assert_eq!(page.restored.get(), 1);

        let calls = relay.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "template_contact");
        assert_eq!(calls[0].1["to_email"], "inbox@example.com");
        assert_eq!(calls[0].1["name"], "Sam");
    }

    #[test]
    fn relay_failure_keeps_fields_and_restores_the_control() {
        let relay = Rc::new(RelayMock {
            fail: true,
            ..RelayMock::default()
        });
        let challenge = Rc::new(ChallengeMock::default());
        let submitter = submitter_with(Some(relay.clone()), challenge);
        let page = PageMock::default();

        let outcome = block_on(submitter.submit(
            &page,
            fields(&[("name", "Sam"), ("email", "sam@example.com")]),
            Some("template_contact"),
            Some("contact"),
        ));

        assert_eq!(outcome, SubmitOutcome::SendFailed);
        assert!(!page.cleared.get());
        assert_eq!(*page.notices.borrow(), vec![SEND_FAILED_MSG.to_string()]);
        assert_eq!(page.restored.get(), 1);
    }

    #[test]
    fn wrappers_route_templates_and_action_labels() {
        let relay = Rc::new(RelayMock::default());
        let challenge = Rc::new(ChallengeMock::default());
        let submitter = submitter_with(Some(relay.clone()), challenge.clone());
        let page = PageMock::default();

        block_on(submitter.submit_worker(&page, fields(&[("name", "Sam")])));
        block_on(submitter.submit_contact(&page, fields(&[("name", "Sam")])));

        let calls = relay.calls.borrow();
        assert_eq!(calls[0].0, "template_worker");
        assert_eq!(calls[1].0, "template_contact");
        assert_eq!(
            *challenge.actions.borrow(),
            vec!["worker_apply".to_string(), "contact".to_string()]
        );
    }

    #[test]
    fn missing_action_defaults_to_submit_for_the_challenge() {
        let relay = Rc::new(RelayMock::default());
        let challenge = Rc::new(ChallengeMock::default());
        let submitter = submitter_with(Some(relay), challenge.clone());
        let page = PageMock::default();

        block_on(submitter.submit(&page, fields(&[("name", "Sam")]), Some("template_contact"), None));

        assert_eq!(*challenge.actions.borrow(), vec!["submit".to_string()]);
    }
}
