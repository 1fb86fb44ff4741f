use chrono::{Datelike, Local};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub contact_email: &'static str,
}

/// Footer with the always-current copyright year, no hand-edited stamp.
#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <p>{ format!("© {year} EarnUwant. All rights reserved.") }</p>
            <p>
                <a href={format!("mailto:{}", props.contact_email)}>
                    { props.contact_email }
                </a>
            </p>
        </footer>
    }
}
