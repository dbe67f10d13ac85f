use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use yew::prelude::*;

use crate::decor::{self, RainDrop};

fn current_drops() -> Vec<RainDrop> {
    let width = web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let mut rng = js_sys::Math::random;
    let drops = decor::generate_rain(decor::rain_drop_count(width), &mut rng);
    debug!("decor: rain rebuilt with {} drops", drops.len());
    drops
}

/// Sparse falling-glyph drizzle layered under the node graph.
#[function_component(MatrixRain)]
pub fn matrix_rain() -> Html {
    let drops = use_state(Vec::new);

    {
        let drops = drops.clone();
        use_effect_with_deps(
            move |_| {
                drops.set(current_drops());

                let drops = drops.clone();
                let resize = Closure::wrap(Box::new(move || {
                    drops.set(current_drops());
                }) as Box<dyn FnMut()>);
                let window = web_sys::window().unwrap();
                window
                    .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "resize",
                            resize.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    html! {
        <>
            <style>
                {r#"
                    .matrix-rain {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                    }
                    .matrix-char {
                        position: absolute;
                        top: -5%;
                        font-family: "Courier New", monospace;
                        font-size: 1.1rem;
                        color: #34d399;
                        text-shadow: 0 0 8px rgba(52, 211, 153, 0.7);
                        animation-name: matrix-fall;
                        animation-timing-function: linear;
                        animation-iteration-count: infinite;
                    }
                    @keyframes matrix-fall {
                        from { transform: translateY(-100%); }
                        to { transform: translateY(105vh); }
                    }
                "#}
            </style>
            <div id="matrixRain" class="matrix-rain" aria-hidden="true">
                { for drops.iter().map(|drop| {
                    let style = format!(
                        "left: {:.4}%; animation-delay: {:.3}s; animation-duration: {:.3}s; opacity: {:.3};",
                        drop.left_pct, drop.delay_s, drop.duration_s, drop.opacity
                    );
                    html! { <div class="matrix-char" style={style}>{ drop.glyph.to_string() }</div> }
                }) }
            </div>
        </>
    }
}
