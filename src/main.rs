use log::{info, Level};
use yew::prelude::*;

mod components {
    pub mod contact_form;
    pub mod footer;
    pub mod nav;
    pub mod observe;
    pub mod reveal;
    pub mod stat_counter;
    pub mod worker_form;
}
mod config;
mod pages {
    pub mod home;
}
mod submit {
    pub mod fields;
    pub mod mailto;
    pub mod pipeline;
    pub mod recaptcha;
    pub mod relay;
}
mod validate;

use config::SiteConfig;
use pages::home::Home;
use submit::pipeline::{Submitter, SubmitterHandle};

#[function_component]
fn App() -> Html {
    let config = SiteConfig::load();

    // Capabilities are wired once; every form reaches them through context.
    let submitter = {
        let config = config.clone();
        use_memo(move |_| Submitter::new(config), ())
    };
    let submitter = SubmitterHandle(submitter);

    html! {
        <ContextProvider<SubmitterHandle> context={submitter}>
            <Home config={config} />
        </ContextProvider<SubmitterHandle>>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting EarnUwant site");
    yew::Renderer::<App>::new().render();
}
