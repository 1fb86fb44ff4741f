use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlFormElement;
use yew::prelude::*;

use crate::submit::fields::FormFields;
use crate::submit::pipeline::{DomSurface, SubmitterHandle};

/// Contact form. Inputs stay uncontrolled; everything is read off the form
/// element when the visitor submits.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let submitter = use_context::<SubmitterHandle>();

    let onsubmit = Callback::from(move |event: SubmitEvent| {
        event.prevent_default();
        let Some(handle) = submitter.clone() else {
            gloo_console::error!("contact form mounted outside the submitter context");
            return;
        };
        let Some(form) = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlFormElement>().ok())
        else {
            return;
        };
        spawn_local(async move {
            let fields = FormFields::from_form(&form);
            let surface = DomSurface::new(form);
            let _ = handle.0.submit_contact(&surface, fields).await;
        });
    });

    html! {
        <form class="form" novalidate=true {onsubmit}>
            <label>
                {"Name"}
                <input type="text" name="name" required=true placeholder="Your name" />
            </label>
            <label>
                {"Email"}
                <input type="email" name="email" required=true placeholder="you@example.com" />
            </label>
            <label>
                {"Phone (optional)"}
                <input type="tel" name="phone" placeholder="+358 40 123 4567" />
            </label>
            <label>
                {"Message"}
                <textarea name="message" rows="5" required=true placeholder="How can we help?" />
            </label>
            <input type="hidden" name="recaptcha_token" />
            <button type="submit" class="btn btn-primary">{"Send Message"}</button>
        </form>
    }
}
