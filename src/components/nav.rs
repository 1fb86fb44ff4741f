use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#how-it-works", "How it works"),
    ("#services", "Services"),
    ("#apply", "Work with us"),
    ("#contact", "Contact"),
];

/// Smooth-scrolls to the in-page anchor named by `href`. A bare "#" or a
/// missing target keeps the browser's default behavior.
pub fn scroll_to_anchor(event: &MouseEvent, href: &str) {
    let Some(id) = href.strip_prefix('#').filter(|id| !id.is_empty()) else {
        return;
    };
    let target = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));
    if let Some(target) = target {
        event.prevent_default();
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub fn anchor_click(href: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |event: MouseEvent| scroll_to_anchor(&event, href))
}

/// Site header: brand, in-page anchor links and the mobile hamburger toggle.
/// On mobile the link list is hidden until the `open` class is set.
#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <header class="site-header">
            <a class="brand" href="#top" onclick={anchor_click("#top")}>{"EarnUwant"}</a>
            <button
                class="hamburger"
                type="button"
                aria-label="Menu"
                aria-expanded={(*menu_open).to_string()}
                onclick={toggle_menu}
            >
                <span></span>
                <span></span>
                <span></span>
            </button>
            <nav class={classes!("nav", (*menu_open).then_some("open"))}>
                { for NAV_LINKS.iter().map(|&(href, label)| html! {
                    <a href={href} onclick={
                        let close = close_menu.clone();
                        let scroll = anchor_click(href);
                        Callback::from(move |event: MouseEvent| {
                            scroll.emit(event.clone());
                            close.emit(event);
                        })
                    }>{label}</a>
                }) }
            </nav>
        </header>
    }
}
