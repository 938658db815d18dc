use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;
use log::{error, info, warn};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod error;
mod nav;
mod reveal;
mod sections;
mod components;
mod pages {
    pub mod composer;
    pub mod info;
}

use content::SiteContent;
use pages::info::{InfoPage, NotFound};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Students,
    #[at("/instructors")]
    Instructors,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Students => {
            info!("Rendering Students page");
            html! { <InfoPage slug="students" /> }
        },
        Route::Instructors => {
            info!("Rendering Instructors page");
            html! { <InfoPage slug="instructors" /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.clone().map(|window| {
                let target = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = target.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > f64::from(config::NAV_SCROLLED_AFTER_PX));
                }) as Box<dyn FnMut()>);
                if let Err(err) = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                    warn!("could not listen for scroll: {err:?}");
                }
                scroll_callback
            });

            move || {
                if let (Some(window), Some(scroll_callback)) = (window, listener) {
                    if let Err(err) = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                        warn!("could not remove scroll listener: {err:?}");
                    }
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Students} classes="nav-logo">
                    {"groupwise"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Students} classes="nav-link">
                            {"For Students"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Instructors} classes="nav-link">
                            {"For Instructors"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 74px;
                    z-index: 10;
                    background: transparent;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(18, 22, 32, 0.95);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.4);
                }
                .nav-content {
                    max-width: 1100px;
                    height: 100%;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #fff;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    gap: 1.5rem;
                }
                .nav-link {
                    color: #cfd8e6;
                    text-decoration: none;
                }
                .nav-link:hover {
                    color: #7EB2FF;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    margin: 5px 0;
                    background: #fff;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: block;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 74px;
                        left: 0;
                        right: 0;
                        padding: 1rem 1.5rem;
                        background: rgba(18, 22, 32, 0.98);
                    }
                }
                "#}
            </style>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    let site = use_memo(|_| match SiteContent::load() {
        Ok(site) => Some(Rc::new(site)),
        Err(err) => {
            error!("{err}");
            None
        }
    }, ());

    match (*site).clone() {
        Some(site) => html! {
            <ContextProvider<Rc<SiteContent>> context={site}>
                <BrowserRouter>
                    <Nav />
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<Rc<SiteContent>>>
        },
        None => html! {
            <div class="content-error">
                <p>{"This page is temporarily unavailable. Please try again later."}</p>
            </div>
        },
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
