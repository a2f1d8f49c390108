//! Decorative particle field.
//!
//! DESIGN
//! ======
//! One-shot generation on page-ready: 40 `span.particle` elements, each with
//! four independent uniform draws for size, horizontal position, animation
//! duration and animation delay. The generator takes any `Rng` so tests can
//! seed it; the page handler always uses the thread RNG, so two loads never
//! match. Count and ranges are fixed constants.

use std::ops::Range;

use rand::Rng;

use crate::dom::{Element, Page, Render};
use crate::error::ConsoleError;

pub const CONTAINER_ID: &str = "particles";
pub const PARTICLE_CLASS: &str = "particle";
pub const PARTICLE_COUNT: usize = 40;

/// Side length in px.
pub const SIZE_RANGE: Range<f64> = 2.0..6.0;
/// Horizontal offset in % of the container width.
pub const LEFT_RANGE: Range<f64> = 0.0..100.0;
/// Animation duration in seconds.
pub const DURATION_RANGE: Range<f64> = 6.0..16.0;
/// Animation delay in seconds.
pub const DELAY_RANGE: Range<f64> = 0.0..6.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub size: f64,
    pub left: f64,
    pub duration: f64,
    pub delay: f64,
}

impl Particle {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            size: rng.random_range(SIZE_RANGE),
            left: rng.random_range(LEFT_RANGE),
            duration: rng.random_range(DURATION_RANGE),
            delay: rng.random_range(DELAY_RANGE),
        }
    }

    #[must_use]
    pub fn to_element(&self) -> Element {
        let mut el = Element::new("span").with_class(PARTICLE_CLASS);
        el.set_style("width", format!("{}px", self.size));
        el.set_style("height", format!("{}px", self.size));
        el.set_style("left", format!("{}%", self.left));
        el.set_style("animation-duration", format!("{}s", self.duration));
        el.set_style("animation-delay", format!("{}s", self.delay));
        el
    }
}

pub fn generate<R: Rng>(rng: &mut R) -> Vec<Particle> {
    (0..PARTICLE_COUNT).map(|_| Particle::random(&mut *rng)).collect()
}

#[must_use]
pub fn particle_renders(particles: &[Particle]) -> Vec<Render> {
    particles
        .iter()
        .map(|p| Render::append(CONTAINER_ID, p.to_element()))
        .collect()
}

/// Page-ready handler. A page without a `particles` container is left alone.
///
/// # Errors
///
/// Never in practice: the container is checked before anything is appended.
pub fn spawn(page: &mut Page) -> Result<(), ConsoleError> {
    if page.document.get_element_by_id(CONTAINER_ID).is_none() {
        tracing::debug!(location = %page.location, "no particle container");
        return Ok(());
    }
    let particles = generate(&mut rand::rng());
    page.apply(particle_renders(&particles))
}

#[cfg(test)]
#[path = "particles_test.rs"]
mod tests;
