use yew::prelude::*;

use crate::components::Reveal;
use crate::content::{RevealSettings, Steps};
use crate::reveal::{use_stagger, StaggerOptions};

#[derive(Properties, PartialEq)]
pub struct StepsProps {
    pub id: String,
    pub steps: Steps,
    pub settings: RevealSettings,
}

#[function_component(StepsSection)]
pub fn steps_section(props: &StepsProps) -> Html {
    let StepsProps { id, steps, settings } = props;
    let list = use_node_ref();
    let states = use_stagger(list.clone(), steps.steps.len(), StaggerOptions::from_settings(settings));

    html! {
        <section id={id.clone()} class="steps-section">
            <Reveal settings={*settings}>
                <h2>{steps.heading.clone()}</h2>
            </Reveal>
            <ol ref={list} class="steps-list">
                { for steps.steps.iter().enumerate().map(|(i, step)| html! {
                    <li key={i.to_string()} class={classes!("step", "reveal", states.get(i).class())}>
                        <span class="step-number">{(i + 1).to_string()}</span>
                        <div>
                            <h3>{step.title.clone()}</h3>
                            <p>{step.body.clone()}</p>
                        </div>
                    </li>
                }) }
            </ol>
            <style>
                {r#"
                .steps-section {
                    max-width: 820px;
                    margin: 0 auto;
                    padding: 6rem 2rem;
                }
                .steps-section h2 {
                    font-size: 2.4rem;
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .steps-list {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .step {
                    display: flex;
                    gap: 1.5rem;
                    align-items: flex-start;
                    padding: 1.5rem;
                    border-left: 3px solid #1E90FF;
                    background: rgba(30, 144, 255, 0.05);
                    border-radius: 0 12px 12px 0;
                }
                .step-number {
                    flex: none;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: #1E90FF;
                    color: #fff;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .step h3 {
                    margin: 0 0 0.4rem;
                }
                .step p {
                    margin: 0;
                    color: #cfd8e6;
                }
                "#}
            </style>
        </section>
    }
}
