use yew::prelude::*;

use crate::components::Reveal;
use crate::content::{Hero, RevealSettings};
use crate::nav::{NavigationTarget, ScrollNavigator, WindowSurface};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub id: String,
    pub hero: Hero,
    pub settings: RevealSettings,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroProps) -> Html {
    let HeroProps { id, hero, settings } = props;
    // Same delay formula as stagger groups: eyebrow, headline, subtitle, CTA
    let schedule = settings.schedule();

    // In-page links go through the navigator so the sticky bars don't
    // cover the heading
    let on_cta = {
        let href = hero.cta_href.clone();
        let offset = settings.nav_offset_px;
        Callback::from(move |e: MouseEvent| {
            if let Some(section_id) = href.strip_prefix('#') {
                e.prevent_default();
                ScrollNavigator::new(WindowSurface).go_to(&NavigationTarget {
                    section_id: section_id.to_string(),
                    label: String::new(),
                    scroll_offset_px: offset,
                });
            }
        })
    };

    html! {
        <header id={id.clone()} class="hero">
            <div class="hero-background"></div>
            <div class="hero-content">
                {
                    if let Some(eyebrow) = &hero.eyebrow {
                        html! {
                            <Reveal settings={*settings} delay_ms={schedule.delay_for(0)}>
                                <p class="hero-eyebrow">{eyebrow.clone()}</p>
                            </Reveal>
                        }
                    } else {
                        html! {}
                    }
                }
                <Reveal settings={*settings} delay_ms={schedule.delay_for(1)}>
                    <h1>{hero.headline.clone()}</h1>
                </Reveal>
                <Reveal settings={*settings} delay_ms={schedule.delay_for(2)}>
                    <p class="hero-subtitle">{hero.subheadline.clone()}</p>
                </Reveal>
                <Reveal settings={*settings} delay_ms={schedule.delay_for(3)} class="hero-cta-group">
                    <a href={hero.cta_href.clone()} class="hero-cta" onclick={on_cta}>
                        {hero.cta_label.clone()}
                    </a>
                </Reveal>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 88vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 8rem 2rem 4rem;
                    text-align: center;
                    overflow: hidden;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    background: radial-gradient(ellipse at top, rgba(126, 178, 255, 0.25), transparent 60%),
                                linear-gradient(to bottom, #121620, #1a1a1a);
                    z-index: -1;
                }
                .hero-content {
                    max-width: 820px;
                }
                .hero-eyebrow {
                    text-transform: uppercase;
                    letter-spacing: 0.12em;
                    font-size: 0.85rem;
                    color: #7EB2FF;
                }
                .hero h1 {
                    font-size: 3.6rem;
                    line-height: 1.1;
                    margin: 1rem 0 1.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #cfd8e6;
                    line-height: 1.6;
                }
                .hero-cta-group {
                    margin-top: 2.5rem;
                }
                .hero-cta {
                    display: inline-block;
                    padding: 1rem 2.2rem;
                    border-radius: 8px;
                    background: #1E90FF;
                    color: #fff;
                    text-decoration: none;
                    font-weight: 600;
                    transition: background 0.2s ease;
                }
                .hero-cta:hover {
                    background: #1976D2;
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.4rem;
                    }
                }
                "#}
            </style>
        </header>
    }
}
