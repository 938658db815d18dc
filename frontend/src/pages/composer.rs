use yew::prelude::*;

use crate::content::{PageContent, RevealSettings, Section, SectionKind};
use crate::nav::CategoryBar;
use crate::sections::{ComparisonSection, FeatureGridSection, HeroSection, StepsSection};

#[derive(Properties, PartialEq)]
pub struct ComposedPageProps {
    pub page: PageContent,
    pub settings: RevealSettings,
}

/// Index at which the category bar goes: right before the first section it
/// links to, so leading heroes stay above it.
pub fn category_bar_slot(sections: &[Section]) -> usize {
    sections
        .iter()
        .position(|s| s.nav_label.is_some())
        .unwrap_or(sections.len())
}

fn render_section(section: &Section, settings: RevealSettings) -> Html {
    let id = section.id.clone();
    match &section.kind {
        SectionKind::Hero(hero) => html! {
            <HeroSection key={id.clone()} id={id.clone()} hero={hero.clone()} {settings} />
        },
        SectionKind::FeatureGrid(grid) => html! {
            <FeatureGridSection key={id.clone()} id={id.clone()} grid={grid.clone()} {settings} />
        },
        SectionKind::Comparison(comparison) => html! {
            <ComparisonSection key={id.clone()} id={id.clone()} comparison={comparison.clone()} {settings} />
        },
        SectionKind::Steps(steps) => html! {
            <StepsSection key={id.clone()} id={id.clone()} steps={steps.clone()} {settings} />
        },
    }
}

/// Lays out a page's sections top to bottom. Every section brings its own
/// reveal state, so any of them can be dropped or moved in the content file.
#[function_component(ComposedPage)]
pub fn composed_page(props: &ComposedPageProps) -> Html {
    let ComposedPageProps { page, settings } = props;
    let targets = page.navigation_targets(settings.nav_offset_px);
    let (leading, rest) = page.sections.split_at(category_bar_slot(&page.sections));

    html! {
        <div class="composed-page">
            { for leading.iter().map(|s| render_section(s, *settings)) }
            <CategoryBar {targets} />
            { for rest.iter().map(|s| render_section(s, *settings)) }
            <style>
                {r#"
                .composed-page {
                    min-height: 100vh;
                    background: #1a1a1a;
                    color: #ffffff;
                    overflow-x: clip;
                }
                .reveal {
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }
                .reveal--pending {
                    opacity: 0;
                    transform: translateY(24px);
                }
                .reveal--revealed {
                    opacity: 1;
                    transform: none;
                }
                "#}
            </style>
        </div>
    }
}
