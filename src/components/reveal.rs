use yew::prelude::*;

use super::observe::ObserveOnce;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades its content in the first time a fifth of it becomes visible.
/// The `reveal-in` class drives the CSS transition.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let observer = node
                    .cast::<web_sys::Element>()
                    .and_then(|el| ObserveOnce::new(&el, 0.2, move || revealed.set(true)));
                move || drop(observer)
            },
            (),
        );
    }

    let mut class = props.class.clone();
    if *revealed {
        class.push("reveal-in");
    }

    html! {
        <div ref={node} data-reveal="1" class={class}>
            { for props.children.iter() }
        </div>
    }
}
