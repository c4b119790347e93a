//! Decorative animated scene
//!
//! A canvas-based background animation with rotating polygons and orbiting
//! particles, drawn flat with a pseudo-3D squash on the vertical axis. Purely
//! visual; nothing else in the app depends on it.

use leptos::html;
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use std::cell::RefCell;
#[cfg(not(feature = "ssr"))]
use std::rc::Rc;

/// Animated scene component
///
/// Renders into a full-size canvas on a per-frame animation callback. The
/// loop runs independently of the rest of the page.
#[component]
pub fn AnimatedScene() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::wasm_bindgen::{JsCast, closure::Closure};

        Effect::new(move |_| {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };

            let ctx = canvas
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|c| c.dyn_into::<web_sys::CanvasRenderingContext2d>().ok());
            let Some(ctx) = ctx else {
                return;
            };

            // Size the backing store for the device pixel ratio
            let resize = {
                let canvas = canvas.clone();
                let ctx = ctx.clone();
                move || {
                    if let Some(window) = web_sys::window() {
                        let dpr = window.device_pixel_ratio();
                        let width = canvas.offset_width() as f64 * dpr;
                        let height = canvas.offset_height() as f64 * dpr;
                        canvas.set_width(width as u32);
                        canvas.set_height(height as u32);
                        let _ = ctx.scale(dpr, dpr);
                    }
                }
            };
            resize();

            let resize_closure = Closure::<dyn FnMut()>::new(resize);
            if let Some(window) = web_sys::window() {
                let _ = window.add_event_listener_with_callback(
                    "resize",
                    resize_closure.as_ref().unchecked_ref(),
                );
            }
            // Keep the listener alive for the lifetime of the page
            resize_closure.forget();

            let time = Rc::new(RefCell::new(0.0_f64));
            let animation_frame_closure = Rc::new(RefCell::new(None::<Closure<dyn FnMut()>>));
            let animation_frame_closure_clone = animation_frame_closure.clone();

            let animate = move || {
                let t = {
                    let mut t = time.borrow_mut();
                    *t += 0.02;
                    *t
                };

                draw_frame(&ctx, canvas.width() as f64, canvas.height() as f64, t);

                // Request next frame
                if let Some(window) = web_sys::window() {
                    let closure = animation_frame_closure_clone.borrow();
                    if let Some(closure) = closure.as_ref() {
                        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
                    }
                }
            };

            let closure = Closure::new(animate);

            // Start animation loop
            if let Some(window) = web_sys::window() {
                let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
            }

            *animation_frame_closure.borrow_mut() = Some(closure);
        });
    }

    view! {
        <div class="w-full h-[600px] lg:h-[800px] relative scene-container">
            <canvas
                node_ref=canvas_ref
                class="w-full h-full"
                style="width: 100%; height: 100%;"
            ></canvas>

            // Overlay label
            <div class="absolute top-4 left-4 bg-black/50 text-white p-3 rounded-lg backdrop-blur-sm">
                <h3 class="font-semibold mb-1">"Animated 2D Scene"</h3>
                <p class="text-sm opacity-80">"Canvas-based animations with pseudo-3D effects"</p>
            </div>
        </div>
    }
}

/// Draw a single animation frame
#[cfg(not(feature = "ssr"))]
fn draw_frame(ctx: &web_sys::CanvasRenderingContext2d, width: f64, height: f64, time: f64) {
    use std::f64::consts::PI;

    // Clear canvas
    ctx.set_fill_style_str("#1a1a1a");
    ctx.fill_rect(0.0, 0.0, width, height);

    let center_x = width / 2.0;
    let center_y = height / 2.0;

    // Rotating polygons
    for i in 0..3 {
        let radius = 50.0 + i as f64 * 30.0;
        let sides = 6 + i * 2;
        let rotation = time * (i as f64 + 1.0) * 0.5;
        let alpha = 0.7 - i as f64 * 0.2;

        ctx.begin_path();
        for j in 0..=sides {
            let angle = (j as f64 / sides as f64) * PI * 2.0 + rotation;
            let x = center_x + angle.cos() * radius;
            // Vertical squash gives the pseudo-3D look
            let y = center_y + angle.sin() * radius * 0.6;

            if j == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }

        let hue = (time * 30.0 + i as f64 * 120.0) % 360.0;
        ctx.set_stroke_style_str(&format!("hsla({}, 70%, 60%, {})", hue, alpha));
        ctx.set_line_width(2.0);
        ctx.stroke();
    }

    // Floating particles
    for i in 0..20 {
        let angle = time * 0.5 + i as f64 * 0.3;
        let radius = 100.0 + (time + i as f64).sin() * 50.0;
        let x = center_x + angle.cos() * radius;
        let y = center_y + angle.sin() * radius * 0.3;

        let size = 2.0 + (time * 2.0 + i as f64).sin();
        let hue = (time * 60.0 + i as f64 * 30.0) % 360.0;

        ctx.begin_path();
        let _ = ctx.arc(x, y, size.max(0.5), 0.0, PI * 2.0);
        ctx.set_fill_style_str(&format!("hsla({}, 70%, 60%, 0.8)", hue));
        ctx.fill();
    }
}
