use yew::prelude::*;

use crate::components::Reveal;
use crate::content::{FeatureGrid, RevealSettings};
use crate::reveal::{use_stagger, StaggerOptions};

#[derive(Properties, PartialEq)]
pub struct FeatureGridProps {
    pub id: String,
    pub grid: FeatureGrid,
    pub settings: RevealSettings,
}

#[function_component(FeatureGridSection)]
pub fn feature_grid_section(props: &FeatureGridProps) -> Html {
    let FeatureGridProps { id, grid, settings } = props;
    let container = use_node_ref();
    let states = use_stagger(
        container.clone(),
        grid.features.len(),
        StaggerOptions::from_settings(settings),
    );

    html! {
        <section id={id.clone()} class="feature-section">
            <Reveal settings={*settings}>
                <h2>{grid.heading.clone()}</h2>
                {
                    if let Some(intro) = &grid.intro {
                        html! { <p class="feature-intro">{intro.clone()}</p> }
                    } else {
                        html! {}
                    }
                }
            </Reveal>
            <div ref={container} class="features-grid">
                { for grid.features.iter().enumerate().map(|(i, feature)| html! {
                    <div key={i.to_string()} class={classes!("feature-item", "reveal", states.get(i).class())}>
                        <span class="feature-icon">{feature.icon.clone()}</span>
                        <h3>{feature.title.clone()}</h3>
                        <p>{feature.body.clone()}</p>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .feature-section {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 6rem 2rem;
                    text-align: center;
                }
                .feature-section h2 {
                    font-size: 2.4rem;
                    margin-bottom: 1rem;
                }
                .feature-intro {
                    color: #a8b3c4;
                    max-width: 640px;
                    margin: 0 auto;
                }
                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                    margin-top: 3rem;
                }
                .feature-item {
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(126, 178, 255, 0.15);
                    border-radius: 16px;
                    padding: 2rem 1.5rem;
                    text-align: left;
                }
                .feature-icon {
                    font-size: 2rem;
                }
                .feature-item h3 {
                    margin: 1rem 0 0.5rem;
                    color: #7EB2FF;
                }
                .feature-item p {
                    color: #cfd8e6;
                    line-height: 1.5;
                }
                "#}
            </style>
        </section>
    }
}
