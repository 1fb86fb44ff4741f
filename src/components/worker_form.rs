use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlFormElement;
use yew::prelude::*;

use crate::submit::fields::FormFields;
use crate::submit::pipeline::{DomSurface, SubmitterHandle};

const SKILLS: &[&str] = &["Cleaning", "Delivery", "Moving", "Yard work"];

/// Worker application form. The skills checkboxes share one field name, so
/// checking several serializes them as a list.
#[function_component(WorkerForm)]
pub fn worker_form() -> Html {
    let submitter = use_context::<SubmitterHandle>();

    let onsubmit = Callback::from(move |event: SubmitEvent| {
        event.prevent_default();
        let Some(handle) = submitter.clone() else {
            gloo_console::error!("worker form mounted outside the submitter context");
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
            let _ = handle.0.submit_worker(&surface, fields).await;
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
                {"Phone"}
                <input type="tel" name="phone" required=true placeholder="+358 40 123 4567" />
            </label>
            <label>
                {"City"}
                <input type="text" name="city" placeholder="Helsinki" />
            </label>
            <fieldset class="skills">
                <legend>{"What work are you up for?"}</legend>
                { for SKILLS.iter().map(|&skill| html! {
                    <label class="checkbox">
                        <input type="checkbox" name="skills" value={skill} />
                        {skill}
                    </label>
                }) }
            </fieldset>
            <label>
                {"Tell us about yourself"}
                <textarea name="message" rows="4" placeholder="Experience, availability..." />
            </label>
            <input type="hidden" name="recaptcha_token" />
            <button type="submit" class="btn btn-primary">{"Apply Now"}</button>
        </form>
    }
}
