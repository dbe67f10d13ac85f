use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::observe::IntersectionWatcher;

/// Fraction of an element that must be on screen before it reveals.
const REVEAL_THRESHOLD: f64 = 0.1;

/// Marks the grid cards that bounce as a row when one of them reveals.
pub const CONTACT_CARD_CLASS: &str = "contact-card";

/// Entrance an element plays the first time it scrolls into view.
#[derive(Clone, Copy, PartialEq)]
pub enum RevealEffect {
    FadeIn,
    SlideInLeft,
    SlideInRight,
    ScaleIn,
}

impl RevealEffect {
    fn class(self) -> &'static str {
        match self {
            RevealEffect::FadeIn => "fade-in",
            RevealEffect::SlideInLeft => "slide-in-left",
            RevealEffect::SlideInRight => "slide-in-right",
            RevealEffect::ScaleIn => "scale-in",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub effect: RevealEffect,
    /// Pixels shaved off the bottom of the viewport band, so elements reveal
    /// slightly before the fold. Deeper sections use a larger inset.
    #[prop_or(50)]
    pub bottom_inset_px: u32,
    #[prop_or_default]
    pub class: Classes,
    /// Bounce every card in this card's row, staggered, when it reveals.
    #[prop_or(false)]
    pub stagger_cards: bool,
    pub children: Children,
}

/// Wrapper that starts hidden and plays its entrance when scrolled into view.
///
/// The `visible` marker is added every time the element crosses back into the
/// band; re-adding an existing class is a no-op, so only the first crossing
/// shows. Card rows re-bounce on every crossing.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        let stagger_cards = props.stagger_cards;
        let bottom_inset_px = props.bottom_inset_px;
        use_effect_with_deps(
            move |_| {
                let root_margin = format!("0px 0px -{}px 0px", bottom_inset_px);
                let watcher = IntersectionWatcher::new(
                    REVEAL_THRESHOLD,
                    &root_margin,
                    move |element, _| {
                        let _ = element.class_list().add_1("visible");
                        if stagger_cards {
                            bounce_sibling_cards(&element);
                        }
                    },
                );
                if let (Some(watcher), Some(element)) = (&watcher, node.cast::<Element>()) {
                    watcher.observe(&element);
                }
                move || drop(watcher)
            },
            (),
        );
    }

    let class = classes!(
        props.effect.class(),
        props.stagger_cards.then_some(CONTACT_CARD_CLASS),
        props.class.clone(),
    );

    html! {
        <div ref={node} {class}>
            { for props.children.iter() }
        </div>
    }
}

/// Bounces every card in the revealed card's row, 200ms apart, each bounce
/// clearing itself after 1000ms.
fn bounce_sibling_cards(element: &Element) {
    let parent = match element.parent_element() {
        Some(parent) => parent,
        None => return,
    };
    let cards = match parent.query_selector_all(&format!(".{}", CONTACT_CARD_CLASS)) {
        Ok(cards) => cards,
        Err(_) => return,
    };
    for index in 0..cards.length() {
        let card = cards
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok());
        let card = match card {
            Some(card) => card,
            None => continue,
        };
        Timeout::new(index * 200, move || {
            let _ = card.class_list().add_1("animate-bounce");
            Timeout::new(1000, move || {
                let _ = card.class_list().remove_1("animate-bounce");
            })
            .forget();
        })
        .forget();
    }
}
