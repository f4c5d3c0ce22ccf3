use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use log::warn;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const COLORS: [&str; 6] = ["#FFD700", "#FF4D4D", "#4DD2FF", "#7CFF4D", "#FF8CF0", "#FFFFFF"];
const GRAVITY: f64 = 0.05;
const PARTICLES_PER_BURST: usize = 60;
const BURST_INTERVAL_MS: f64 = 450.0;

struct Particle {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    life: f64,
    color: &'static str,
}

/// Particle bursts on a canvas. `run` keeps launching bursts until `stop`.
struct Fireworks {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    particles: Vec<Particle>,
    rng: SmallRng,
    intensity: f64,
    last_burst: f64,
    frame: Option<AnimationFrame>,
}

impl Fireworks {
    fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        Some(Self {
            canvas,
            context,
            particles: Vec::new(),
            rng: SmallRng::from_entropy(),
            intensity: 0.0,
            last_burst: f64::NEG_INFINITY,
            frame: None,
        })
    }

    fn spawn_burst(&mut self) {
        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());
        let x = self.rng.gen_range(0.2..0.8) * width;
        let y = self.rng.gen_range(0.1..0.5) * height;
        let color = COLORS[self.rng.gen_range(0..COLORS.len())];
        let speed = 2.0 + 4.0 * self.intensity;

        for _ in 0..PARTICLES_PER_BURST {
            let angle = self.rng.gen_range(0.0..2.0 * PI);
            let velocity = self.rng.gen_range(0.3..1.0) * speed;
            self.particles.push(Particle {
                x,
                y,
                vx: angle.cos() * velocity,
                vy: angle.sin() * velocity,
                life: 1.0,
                color,
            });
        }
    }

    fn step(&mut self, timestamp: f64) {
        let canvas = &self.canvas;
        let (width, height) = (canvas.client_width().max(0) as u32, canvas.client_height().max(0) as u32);
        if canvas.width() != width || canvas.height() != height {
            canvas.set_width(width);
            canvas.set_height(height);
        }

        // Faster runs burst more often
        if timestamp - self.last_burst >= BURST_INTERVAL_MS / self.intensity {
            self.spawn_burst();
            self.last_burst = timestamp;
        }

        let fade = 0.01 + 0.01 * self.intensity;
        for particle in &mut self.particles {
            particle.vy += GRAVITY;
            particle.x += particle.vx;
            particle.y += particle.vy;
            particle.life -= fade;
        }
        self.particles.retain(|particle| particle.life > 0.0);

        self.draw();
    }

    fn draw(&self) {
        let context = &self.context;
        context.clear_rect(0.0, 0.0, f64::from(self.canvas.width()), f64::from(self.canvas.height()));
        for particle in &self.particles {
            context.set_global_alpha(particle.life);
            context.set_fill_style_str(particle.color);
            context.begin_path();
            if let Err(err) = context.arc(particle.x, particle.y, 3.0, 0.0, 2.0 * PI) {
                warn!("Failed to draw firework particle: {:?}", err);
                continue;
            }
            context.fill();
        }
        context.set_global_alpha(1.0);
    }

    fn clear(&mut self) {
        self.particles.clear();
        self.draw();
    }
}

fn schedule(fireworks: Rc<RefCell<Fireworks>>) {
    let next = fireworks.clone();
    let frame = request_animation_frame(move |timestamp| {
        next.borrow_mut().step(timestamp);
        schedule(next);
    });
    fireworks.borrow_mut().frame = Some(frame);
}

fn run(fireworks: &Rc<RefCell<Fireworks>>, intensity: f64) {
    {
        let mut fireworks = fireworks.borrow_mut();
        fireworks.intensity = intensity;
        fireworks.last_burst = f64::NEG_INFINITY;
    }
    schedule(fireworks.clone());
}

fn stop(fireworks: &Rc<RefCell<Fireworks>>) {
    let mut fireworks = fireworks.borrow_mut();
    // Dropping the pending frame breaks the schedule -> closure -> Rc cycle
    fireworks.frame = None;
    fireworks.clear();
}

#[derive(Properties, PartialEq)]
pub struct FireworksCanvasProps {
    /// `Some(intensity)` while the effect runs.
    pub intensity: Option<f64>,
}

#[function_component(FireworksCanvas)]
pub fn fireworks_canvas(props: &FireworksCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(props.intensity.map(f64::to_bits), move |intensity| {
            let fireworks = intensity.and_then(|bits| {
                let canvas = canvas_ref.cast::<HtmlCanvasElement>()?;
                let Some(fireworks) = Fireworks::new(canvas) else {
                    warn!("Canvas 2d context unavailable; skipping fireworks");
                    return None;
                };
                let fireworks = Rc::new(RefCell::new(fireworks));
                run(&fireworks, f64::from_bits(bits));
                Some(fireworks)
            });

            move || {
                if let Some(fireworks) = fireworks {
                    stop(&fireworks);
                }
            }
        });
    }

    html! {
        <canvas ref={canvas_ref} class="absolute w-full h-full"></canvas>
    }
}
