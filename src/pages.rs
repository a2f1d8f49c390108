//! Page skeletons and their handler tables.
//!
//! Each page is the static markup the server would send (only the nodes the
//! scripts touch) plus the registry wiring its triggers to components. A
//! load always starts from a fresh skeleton, so reloading never accumulates
//! rendered children.

use crate::components::{dashboard, detect, live, login, logs, particles};
use crate::dom::{Document, Element};
use crate::events::{Component, Registry, Trigger};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Login,
    Dashboard,
    Logs,
    Detect,
    LiveMonitor,
}

impl PageKind {
    pub const ALL: [Self; 5] = [Self::Login, Self::Dashboard, Self::Logs, Self::Detect, Self::LiveMonitor];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Dashboard => login::SUCCESS_PATH,
            Self::Logs => "/logs",
            Self::Detect => "/detect",
            Self::LiveMonitor => "/live_monitor",
        }
    }

    /// Resolve a path, ignoring any query string or fragment.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Self::ALL.into_iter().find(|kind| kind.path() == path)
    }

    #[must_use]
    pub fn document(self) -> Document {
        match self {
            Self::Login => Document::new(vec![
                Element::new("div").with_id(particles::CONTAINER_ID),
                Element::new("form")
                    .with_id(login::FORM_ID)
                    .with_child(
                        Element::new("input")
                            .with_id(login::USERNAME_FIELD)
                            .with_name(login::USERNAME_FIELD),
                    )
                    .with_child(
                        Element::new("input")
                            .with_id(login::PASSWORD_FIELD)
                            .with_name(login::PASSWORD_FIELD),
                    )
                    .with_child(Element::new("button").with_text("Login")),
            ]),
            Self::Dashboard => Document::new(vec![
                Element::new("div").with_id(particles::CONTAINER_ID),
                Element::new("span").with_id(dashboard::TOTAL_NETWORK_ID),
                Element::new("span").with_id(dashboard::TOTAL_WEB_ID),
            ]),
            Self::Logs => Document::new(vec![Element::new("ul").with_id(logs::LIST_ID)]),
            Self::Detect => Document::new(vec![
                Element::new("input").with_id(detect::INPUT_ID),
                Element::new("button").with_id(detect::BUTTON_ID).with_text("Detect"),
                Element::new("pre").with_id(detect::RESULT_ID),
            ]),
            Self::LiveMonitor => Document::new(
                [live::SRC_ID, live::DST_ID, live::PROTOCOL_ID, live::LENGTH_ID, live::PREDICTION_ID]
                    .into_iter()
                    .map(|id| Element::new("span").with_id(id))
                    .collect(),
            ),
        }
    }

    #[must_use]
    pub fn registry(self) -> Registry {
        match self {
            Self::Login => Registry::new()
                .on(Trigger::Submit(login::FORM_ID), Component::FormSubmitter)
                .on(Trigger::Ready, Component::ParticleField),
            Self::Dashboard => Registry::new()
                .on(Trigger::Ready, Component::StatFetcher)
                .on(Trigger::Ready, Component::ParticleField),
            Self::Logs => Registry::new().on(Trigger::Ready, Component::ListFetcher),
            Self::Detect => Registry::new().on(Trigger::Click(detect::BUTTON_ID), Component::FileUploader),
            Self::LiveMonitor => Registry::new().on(Trigger::Ready, Component::LiveTrafficFetcher),
        }
    }
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
