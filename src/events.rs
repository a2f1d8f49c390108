//! Handler registration and dispatch.
//!
//! DESIGN
//! ======
//! A page declares which component answers which trigger in a [`Registry`],
//! an ordered table of `(Trigger, Component)` rows. Dispatch is static: the
//! [`Component`] enum names every handler, so there is no boxing or trait
//! object at the seam. Matching handlers run one after another, never
//! overlapping, in registration order.

use crate::components::{dashboard, detect, live, login, logs, particles};
use crate::dom::Page;
use crate::error::ConsoleError;
use crate::net::ApiClient;

/// Event that starts one component's pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Document finished loading.
    Ready,
    /// The form with this id was submitted.
    Submit(&'static str),
    /// The control with this id was clicked.
    Click(&'static str),
}

impl Trigger {
    fn target(self) -> Option<&'static str> {
        match self {
            Self::Ready => None,
            Self::Submit(id) | Self::Click(id) => Some(id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    FormSubmitter,
    FileUploader,
    ListFetcher,
    StatFetcher,
    LiveTrafficFetcher,
    ParticleField,
}

impl Component {
    /// Run this component's pipeline once against `page`.
    ///
    /// # Errors
    ///
    /// Propagates whatever the component does not turn into an alert or log
    /// line; in practice a missing form or file input.
    pub async fn run(self, page: &mut Page, api: &ApiClient) -> Result<(), ConsoleError> {
        match self {
            Self::FormSubmitter => login::submit(page, api).await,
            Self::FileUploader => detect::click(page, api).await,
            Self::ListFetcher => logs::load(page, api).await,
            Self::StatFetcher => dashboard::load(page, api).await,
            Self::LiveTrafficFetcher => live::load(page, api).await,
            Self::ParticleField => particles::spawn(page),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: Vec<(Trigger, Component)>,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on(mut self, trigger: Trigger, component: Component) -> Self {
        self.entries.push((trigger, component));
        self
    }

    /// Components registered for `trigger`, in registration order.
    pub fn handlers(&self, trigger: Trigger) -> impl Iterator<Item = Component> + '_ {
        self.entries
            .iter()
            .filter(move |(t, _)| *t == trigger)
            .map(|(_, c)| *c)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fire `trigger` on `page` and run every matching handler.
///
/// Handlers are independent: one failing does not stop the rest. Returns the
/// number of handlers run.
///
/// # Errors
///
/// [`ConsoleError::MissingElement`] when a submit/click target is absent
/// (nothing runs); otherwise the first handler error, after all have run.
pub async fn dispatch(
    registry: &Registry,
    trigger: Trigger,
    page: &mut Page,
    api: &ApiClient,
) -> Result<usize, ConsoleError> {
    if let Some(id) = trigger.target() {
        page.document.require(id)?;
    }

    let mut ran = 0;
    let mut first_error = None;
    for component in registry.handlers(trigger) {
        tracing::debug!(?trigger, ?component, "dispatching");
        if let Err(e) = component.run(page, api).await {
            tracing::warn!(?component, error = %e, "handler failed");
            first_error.get_or_insert(e);
        }
        ran += 1;
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(ran),
    }
}

#[cfg(test)]
#[path = "events_test.rs"]
mod tests;
