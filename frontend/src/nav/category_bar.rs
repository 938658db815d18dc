use log::info;
use yew::prelude::*;

use crate::nav::navigator::{NavOutcome, NavigationTarget, ScrollNavigator, WindowSurface};

#[derive(Properties, PartialEq)]
pub struct CategoryBarProps {
    pub targets: Vec<NavigationTarget>,
}

/// Sticky row of buttons, one per section, that smooth-scroll to it.
#[function_component(CategoryBar)]
pub fn category_bar(props: &CategoryBarProps) -> Html {
    let active = use_state(|| None::<String>);

    if props.targets.is_empty() {
        return html! {};
    }

    html! {
        <nav class="category-bar">
            <div class="category-bar__inner">
                { for props.targets.iter().map(|target| {
                    let onclick = {
                        let active = active.clone();
                        let target = target.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            if let NavOutcome::Scrolled { target_y } = ScrollNavigator::new(WindowSurface).go_to(&target) {
                                info!("scrolling to #{} at {}px", target.section_id, target_y);
                                active.set(Some(target.section_id.clone()));
                            }
                        })
                    };
                    let is_active = active.as_deref() == Some(target.section_id.as_str());
                    html! {
                        <button
                            key={target.section_id.clone()}
                            class={classes!("category-bar__button", is_active.then(|| "active"))}
                            {onclick}
                        >
                            { target.label.clone() }
                        </button>
                    }
                }) }
            </div>
            <style>
                {r#"
                .category-bar {
                    position: sticky;
                    top: 74px;
                    z-index: 5;
                    background: rgba(18, 22, 32, 0.92);
                    backdrop-filter: blur(8px);
                    border-bottom: 1px solid rgba(126, 178, 255, 0.15);
                }
                .category-bar__inner {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 0.75rem 1.5rem;
                    display: flex;
                    gap: 0.75rem;
                    overflow-x: auto;
                }
                .category-bar__button {
                    flex: none;
                    padding: 0.5rem 1.1rem;
                    border-radius: 999px;
                    border: 1px solid rgba(126, 178, 255, 0.3);
                    background: transparent;
                    color: #cfd8e6;
                    font-size: 0.95rem;
                    cursor: pointer;
                    transition: background 0.2s ease, color 0.2s ease;
                }
                .category-bar__button:hover,
                .category-bar__button.active {
                    background: #7EB2FF;
                    color: #121620;
                }
                "#}
            </style>
        </nav>
    }
}
