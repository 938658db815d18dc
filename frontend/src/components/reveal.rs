use yew::prelude::*;

use crate::content::RevealSettings;
use crate::reveal::{use_reveal, RevealOptions};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub settings: RevealSettings,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps its children in a div that fades and slides in the first time it
/// scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_reveal(node.clone(), RevealOptions::from_settings(&props.settings, props.delay_ms));

    html! {
        <div ref={node} class={classes!("reveal", state.class(), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
