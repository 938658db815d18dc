use std::rc::Rc;

use log::warn;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::SiteContent;
use crate::pages::composer::ComposedPage;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct InfoPageProps {
    pub slug: AttrValue,
}

/// One of the informational pages, looked up by slug in the site content.
#[function_component(InfoPage)]
pub fn info_page(props: &InfoPageProps) -> Html {
    let site = use_context::<Rc<SiteContent>>();

    // Scroll to top whenever a different page mounts
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            props.slug.clone(),
        );
    }

    let page = site.as_ref().and_then(|site| {
        site.page(&props.slug).map(|page| (page.clone(), site.reveal))
    });

    match page {
        Some((page, settings)) => html! {
            <ComposedPage {page} {settings} />
        },
        None => {
            warn!("no content for page `{}`", props.slug);
            html! { <NotFound /> }
        }
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Students} classes="forward-link">
                {"Back to the start"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    padding-top: 10rem;
                    text-align: center;
                    background: #1a1a1a;
                    color: #fff;
                }
                .not-found .forward-link {
                    color: #7EB2FF;
                }
                "#}
            </style>
        </div>
    }
}
