//! Client-side app wiring and routes for the Neural Pulse marketing page.
//!
//! Everything renders in the browser; there is no server half. Page behaviors
//! (theme, eased scrolling, scroll reveals, fake forms, hero decorations) live
//! in their own modules, with the math and state machines kept separate from
//! the DOM adapters so they can be tested natively.

use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MediaQueryListEvent;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod config;
pub mod decor;
pub mod forms;
pub mod observe;
pub mod scroll;
pub mod stats;
pub mod theme;

pub mod components {
    pub mod contact;
    pub mod counter;
    pub mod matrix_rain;
    pub mod neural_network;
    pub mod newsletter;
    pub mod reveal;
    pub mod theme_switch;
}

pub mod pages {
    pub mod home;
    pub mod not_found;
}

use components::theme_switch::ThemeSwitch;
use pages::home::Home;
use pages::not_found::NotFound;
use scroll::ScrollAnimator;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route, on_navigate: Callback<AttrValue>) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home {on_navigate} /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub dark: bool,
    pub on_toggle_dark: Callback<()>,
    pub on_navigate: Callback<AttrValue>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let target = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = target.page_y_offset().unwrap_or_default();
                    is_scrolled.set(offset > 8.0);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Fragment links close the mobile menu before handing the target over.
    let navigate = {
        let on_navigate = props.on_navigate.clone();
        let menu_open = menu_open.clone();
        move |fragment: &'static str| {
            let on_navigate = on_navigate.clone();
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                on_navigate.emit(AttrValue::from(fragment));
            })
        }
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: sticky;
                        top: 0;
                        z-index: 50;
                        height: 64px;
                        background: var(--surface);
                        border-bottom: 1px solid var(--border);
                        transition: box-shadow 0.2s ease;
                    }
                    .top-nav.scrolled {
                        box-shadow: 0 6px 16px rgba(15, 23, 42, 0.12);
                    }
                    .nav-content {
                        max-width: 1100px;
                        height: 100%;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .nav-logo {
                        font-weight: 800;
                        font-size: 1.2rem;
                        color: var(--accent);
                        text-decoration: none;
                        margin-right: auto;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 1.25rem;
                    }
                    .nav-link {
                        color: var(--text);
                        text-decoration: none;
                        font-weight: 500;
                    }
                    .nav-link:hover {
                        color: var(--accent);
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 6px;
                    }
                    .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: var(--text);
                    }
                    .nav-mobile-toggle {
                        display: none;
                    }
                    .switch {
                        position: relative;
                        display: inline-block;
                        width: 46px;
                        height: 24px;
                    }
                    .switch input {
                        opacity: 0;
                        width: 0;
                        height: 0;
                    }
                    .slider {
                        position: absolute;
                        inset: 0;
                        background: var(--border);
                        transition: background 0.2s ease;
                    }
                    .slider:before {
                        content: "";
                        position: absolute;
                        height: 18px;
                        width: 18px;
                        left: 3px;
                        bottom: 3px;
                        background: var(--surface);
                        transition: transform 0.2s ease;
                    }
                    .switch input:checked + .slider {
                        background: var(--accent);
                    }
                    .switch input:checked + .slider:before {
                        transform: translateX(22px);
                    }
                    .slider.round {
                        border-radius: 24px;
                    }
                    .slider.round:before {
                        border-radius: 50%;
                    }
                    @media (max-width: 767px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-desktop-toggle {
                            display: none;
                        }
                        .nav-mobile-toggle {
                            display: block;
                        }
                        .nav-right {
                            position: absolute;
                            top: 64px;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            align-items: flex-start;
                            padding: 1rem 1.5rem;
                            background: var(--surface);
                            border-bottom: 1px solid var(--border);
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href="#home" class="nav-logo" onclick={navigate("#home")}>{"Neural Pulse"}</a>
                <div class="nav-desktop-toggle">
                    <ThemeSwitch
                        id="darkModeToggle"
                        dark={props.dark}
                        on_toggle={props.on_toggle_dark.clone()}
                    />
                </div>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="#home" class="nav-link" onclick={navigate("#home")}>{"Home"}</a>
                    <a href="#categories" class="nav-link" onclick={navigate("#categories")}>{"Categories"}</a>
                    <a href="#articles" class="nav-link" onclick={navigate("#articles")}>{"Articles"}</a>
                    <a href="#about" class="nav-link" onclick={navigate("#about")}>{"About"}</a>
                    <a href="#contact" class="nav-link" onclick={navigate("#contact")}>{"Contact"}</a>
                    <div class="nav-mobile-toggle">
                        <ThemeSwitch
                            id="darkModeToggleMobile"
                            dark={props.dark}
                            on_toggle={props.on_toggle_dark.clone()}
                        />
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let dark = use_state(theme::initial_dark);

    // Repaint the document class whenever the effective value changes.
    {
        use_effect_with_deps(
            move |dark: &bool| {
                theme::apply(*dark);
                || ()
            },
            *dark,
        );
    }

    // Follow the OS signal live, but only while no explicit choice is stored.
    {
        let dark = dark.clone();
        use_effect_with_deps(
            move |_| {
                let query = theme::media_query();

                let listener = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
                    if theme::load_preference().is_none() {
                        dark.set(event.matches());
                    }
                }) as Box<dyn FnMut(MediaQueryListEvent)>);

                if let Some(query) = query.as_ref() {
                    let _ = query
                        .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(query) = query.as_ref() {
                        let _ = query.remove_event_listener_with_callback(
                            "change",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let on_toggle_dark = {
        let dark = dark.clone();
        Callback::from(move |_| {
            let next = !*dark;
            theme::store_preference(next);
            dark.set(next);
        })
    };

    let animator = use_state(ScrollAnimator::new);
    let on_navigate = {
        let animator = (*animator).clone();
        Callback::from(move |fragment: AttrValue| {
            animator.scroll_to_fragment(&fragment);
        })
    };

    let render = {
        let on_navigate = on_navigate.clone();
        move |route: Route| switch(route, on_navigate.clone())
    };

    html! {
        <BrowserRouter>
            <Nav dark={*dark} on_toggle_dark={on_toggle_dark} on_navigate={on_navigate} />
            <Switch<Route> render={render} />
        </BrowserRouter>
    }
}
