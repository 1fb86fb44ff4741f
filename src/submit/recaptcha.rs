use async_trait::async_trait;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Source of the proof-of-human token attached to submissions.
///
/// Implementations never fail: when the challenge service is missing or
/// errors out, `token` resolves to the empty string and the submission
/// carries on without it.
#[async_trait(?Send)]
pub trait ChallengeProvider {
    async fn token(&self, action: &str) -> String;
}

/// Wired in when no challenge script is loaded or no site key is set.
pub struct NoChallenge;

#[async_trait(?Send)]
impl ChallengeProvider for NoChallenge {
    async fn token(&self, _action: &str) -> String {
        String::new()
    }
}

struct RecaptchaV3 {
    site_key: &'static str,
}

#[async_trait(?Send)]
impl ChallengeProvider for RecaptchaV3 {
    async fn token(&self, action: &str) -> String {
        self.execute(action).await.unwrap_or_default()
    }
}

impl RecaptchaV3 {
    async fn execute(&self, action: &str) -> Option<String> {
        let grecaptcha = grecaptcha_object()?;
        let execute: js_sys::Function =
            js_sys::Reflect::get(&grecaptcha, &JsValue::from_str("execute"))
                .ok()?
                .dyn_into()
                .ok()?;

        let options = js_sys::Object::new();
        js_sys::Reflect::set(
            &options,
            &JsValue::from_str("action"),
            &JsValue::from_str(action),
        )
        .ok()?;

        let promise: js_sys::Promise = execute
            .call2(&grecaptcha, &JsValue::from_str(self.site_key), &options)
            .ok()?
            .dyn_into()
            .ok()?;

        JsFuture::from(promise).await.ok()?.as_string()
    }
}

fn grecaptcha_object() -> Option<JsValue> {
    let window = web_sys::window()?;
    let grecaptcha = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("grecaptcha")).ok()?;
    (!grecaptcha.is_undefined() && !grecaptcha.is_null()).then_some(grecaptcha)
}

/// Picks the provider once at startup: the live widget when its script has
/// loaded and a site key is configured, the null provider otherwise.
pub fn provider_for(site_key: &'static str) -> Rc<dyn ChallengeProvider> {
    if !site_key.is_empty() && grecaptcha_object().is_some() {
        log::info!("challenge provider: recaptcha v3");
        Rc::new(RecaptchaV3 { site_key })
    } else {
        log::info!("challenge provider: none");
        Rc::new(NoChallenge)
    }
}
