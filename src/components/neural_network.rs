use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use yew::prelude::*;

use crate::decor::{self, NetworkLayout};

fn current_layout() -> NetworkLayout {
    let width = web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let mut rng = js_sys::Math::random;
    let layout = decor::generate_network(decor::network_node_count(width), &mut rng);
    debug!(
        "decor: network rebuilt with {} nodes, {} links",
        layout.nodes.len(),
        layout.links.len()
    );
    layout
}

/// Pulsing node graph behind the hero copy. Pure decoration: rebuilt from
/// fresh randomness on every resize, never interacted with.
#[function_component(NeuralNetwork)]
pub fn neural_network() -> Html {
    let layout = use_state(NetworkLayout::default);

    {
        let layout = layout.clone();
        use_effect_with_deps(
            move |_| {
                layout.set(current_layout());

                let layout = layout.clone();
                let resize = Closure::wrap(Box::new(move || {
                    layout.set(current_layout());
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
                    .neural-network {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                    }
                    .neural-node {
                        position: absolute;
                        width: 8px;
                        height: 8px;
                        border-radius: 50%;
                        background: rgba(96, 165, 250, 0.9);
                        box-shadow: 0 0 12px rgba(96, 165, 250, 0.8);
                        animation: neural-pulse 2s ease-in-out infinite;
                    }
                    .neural-connection {
                        position: absolute;
                        height: 1px;
                        background: linear-gradient(90deg, rgba(96, 165, 250, 0.6), rgba(96, 165, 250, 0.05));
                        animation: connection-glow 3s linear infinite;
                    }
                    @keyframes neural-pulse {
                        0%, 100% { transform: scale(1); opacity: 0.7; }
                        50% { transform: scale(1.6); opacity: 1; }
                    }
                    @keyframes connection-glow {
                        0%, 100% { opacity: 0.15; }
                        50% { opacity: 0.7; }
                    }
                "#}
            </style>
            <div id="neuralNetwork" class="neural-network" aria-hidden="true">
                { for layout.nodes.iter().map(|node| {
                    let style = format!(
                        "left: {:.4}%; top: {:.4}%; animation-delay: {:.3}s;",
                        node.left_pct, node.top_pct, node.delay_s
                    );
                    html! { <div class="neural-node" style={style}></div> }
                }) }
                { for layout.links.iter().map(|link| {
                    let style = format!(
                        "left: {:.4}%; top: {:.4}%; width: {:.4}%; \
                         transform: rotate({:.4}deg); transform-origin: left center; \
                         animation-delay: {:.3}s;",
                        link.left_pct, link.top_pct, link.length_pct, link.angle_deg, link.delay_s
                    );
                    html! { <div class="neural-connection" style={style}></div> }
                }) }
            </div>
        </>
    }
}
