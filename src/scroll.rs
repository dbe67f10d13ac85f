//! Eased in-page scrolling.
//!
//! Anchor navigation scrolls under its own animation frame loop instead of the
//! browser default, so the sticky nav offset and the easing curve stay
//! consistent across browsers. [`ScrollAnimator`] is a cheap clonable handle;
//! starting a new scroll cancels the one in flight.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

use crate::config;

/// Longest a single scroll animation is allowed to run.
pub const MAX_SCROLL_MS: f64 = 1000.0;

/// Ease-in-out cubic, slow at both ends.
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - 4.0 * (1.0 - t).powi(3)
    }
}

/// Adaptive duration: half a millisecond per pixel, capped at [`MAX_SCROLL_MS`].
pub fn scroll_duration_ms(distance: f64) -> f64 {
    (distance.abs() / 2.0).min(MAX_SCROLL_MS)
}

/// Element id named by a nav fragment, `None` when there is nothing to target.
pub fn fragment_id(fragment: &str) -> Option<&str> {
    let id = fragment.strip_prefix('#').unwrap_or(fragment);
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

struct AnimationSlot {
    // Kept allocated while a frame referencing it may still fire.
    frame: Option<Closure<dyn FnMut(f64)>>,
    pending: Option<i32>,
}

/// Owner of the single in-flight scroll animation.
#[derive(Clone)]
pub struct ScrollAnimator {
    inner: Rc<RefCell<AnimationSlot>>,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        ScrollAnimator {
            inner: Rc::new(RefCell::new(AnimationSlot {
                frame: None,
                pending: None,
            })),
        }
    }
}

impl ScrollAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops the in-flight animation, leaving the page wherever it is.
    pub fn cancel(&self) {
        let handle = self.inner.borrow_mut().pending.take();
        if let Some(handle) = handle {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(handle);
            }
        }
    }

    /// Scrolls to the element a fragment like `"#about"` names, easing over an
    /// adaptive duration and stopping [`config::NAV_HEIGHT_PX`] short so the
    /// sticky nav never covers the section heading. Unknown or empty fragments
    /// are ignored.
    pub fn scroll_to_fragment(&self, fragment: &str) {
        let id = match fragment_id(fragment) {
            Some(id) => id,
            None => return,
        };
        let window = match web_sys::window() {
            Some(window) => window,
            None => return,
        };
        let target = window
            .document()
            .and_then(|document| document.get_element_by_id(id));
        let target = match target {
            Some(target) => target,
            None => return,
        };

        self.cancel();

        let start = window.page_y_offset().unwrap_or_default();
        let dest = target.get_bounding_client_rect().top() + start - config::NAV_HEIGHT_PX;
        let distance = dest - start;
        let duration = scroll_duration_ms(distance);
        if duration <= 0.0 {
            window.scroll_to_with_x_and_y(0.0, dest);
            return;
        }

        let frame = {
            let inner = Rc::clone(&self.inner);
            let window = window.clone();
            let mut begun: Option<f64> = None;
            Closure::wrap(Box::new(move |now: f64| {
                let begun = *begun.get_or_insert(now);
                let progress = ((now - begun) / duration).min(1.0);
                let eased = ease_in_out_cubic(progress);
                window.scroll_to_with_x_and_y(0.0, start + distance * eased);

                let mut slot = inner.borrow_mut();
                if progress < 1.0 {
                    let next = slot.frame.as_ref().and_then(|frame| {
                        window
                            .request_animation_frame(frame.as_ref().unchecked_ref())
                            .ok()
                    });
                    slot.pending = next;
                } else {
                    slot.pending = None;
                }
            }) as Box<dyn FnMut(f64)>)
        };

        let mut slot = self.inner.borrow_mut();
        slot.frame = Some(frame);
        let first = slot.frame.as_ref().and_then(|frame| {
            window
                .request_animation_frame(frame.as_ref().unchecked_ref())
                .ok()
        });
        slot.pending = first;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
    }

    #[test]
    fn test_easing_curve_shape() {
        assert_eq!(ease_in_out_cubic(0.25), 0.0625);
        assert_eq!(ease_in_out_cubic(0.75), 0.9375);
        // Symmetric about the midpoint.
        for step in 0..=10 {
            let t = f64::from(step) / 10.0;
            let mirrored = ease_in_out_cubic(t) + ease_in_out_cubic(1.0 - t);
            assert!((mirrored - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_easing_is_monotonic() {
        let mut last = 0.0;
        for step in 1..=100 {
            let value = ease_in_out_cubic(f64::from(step) / 100.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn test_duration_scales_with_distance() {
        assert_eq!(scroll_duration_ms(400.0), 200.0);
        assert_eq!(scroll_duration_ms(-400.0), 200.0);
        assert_eq!(scroll_duration_ms(0.0), 0.0);
    }

    #[test]
    fn test_duration_is_capped() {
        assert_eq!(scroll_duration_ms(2000.0), MAX_SCROLL_MS);
        assert_eq!(scroll_duration_ms(123_456.0), MAX_SCROLL_MS);
    }

    #[test]
    fn test_fragment_id() {
        assert_eq!(fragment_id("#about"), Some("about"));
        assert_eq!(fragment_id("about"), Some("about"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id(""), None);
    }
}
