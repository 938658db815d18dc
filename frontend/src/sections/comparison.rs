use yew::prelude::*;

use crate::components::Reveal;
use crate::content::{CellValue, Comparison, RevealSettings};
use crate::reveal::{use_stagger, StaggerOptions};

#[derive(Properties, PartialEq)]
pub struct ComparisonProps {
    pub id: String,
    pub comparison: Comparison,
    pub settings: RevealSettings,
}

fn cell(value: &CellValue) -> Html {
    match value {
        CellValue::Flag(true) => html! { <span class="cell-yes">{"✓"}</span> },
        CellValue::Flag(false) => html! { <span class="cell-no">{"✗"}</span> },
        CellValue::Text(text) => html! { <span class="cell-text">{text.clone()}</span> },
    }
}

#[function_component(ComparisonSection)]
pub fn comparison_section(props: &ComparisonProps) -> Html {
    let ComparisonProps { id, comparison, settings } = props;
    let body = use_node_ref();
    let states = use_stagger(
        body.clone(),
        comparison.rows.len(),
        StaggerOptions::from_settings(settings),
    );

    html! {
        <section id={id.clone()} class="comparison-section">
            <Reveal settings={*settings}>
                <h2>{comparison.heading.clone()}</h2>
            </Reveal>
            <div class="comparison-scroll">
                <table class="comparison-table">
                    <thead>
                        <tr>
                            <th></th>
                            { for comparison.columns.iter().enumerate().map(|(i, column)| html! {
                                <th class={classes!((i == 0).then(|| "highlight"))}>{column.clone()}</th>
                            }) }
                        </tr>
                    </thead>
                    <tbody ref={body}>
                        { for comparison.rows.iter().enumerate().map(|(i, row)| html! {
                            <tr key={i.to_string()} class={classes!("reveal", states.get(i).class())}>
                                <td class="row-label">{row.label.clone()}</td>
                                { for row.values.iter().enumerate().map(|(j, value)| html! {
                                    <td class={classes!((j == 0).then(|| "highlight"))}>{cell(value)}</td>
                                }) }
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
            <style>
                {r#"
                .comparison-section {
                    max-width: 960px;
                    margin: 0 auto;
                    padding: 6rem 2rem;
                }
                .comparison-section h2 {
                    font-size: 2.4rem;
                    text-align: center;
                    margin-bottom: 2.5rem;
                }
                .comparison-scroll {
                    overflow-x: auto;
                }
                .comparison-table {
                    width: 100%;
                    border-collapse: collapse;
                }
                .comparison-table th,
                .comparison-table td {
                    padding: 1rem;
                    text-align: center;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                }
                .comparison-table .row-label {
                    text-align: left;
                    color: #cfd8e6;
                }
                .comparison-table .highlight {
                    background: rgba(30, 144, 255, 0.08);
                }
                .cell-yes { color: #4CAF50; font-size: 1.2rem; }
                .cell-no { color: #ff6b6b; font-size: 1.2rem; }
                .cell-text { color: #a8b3c4; }
                "#}
            </style>
        </section>
    }
}
