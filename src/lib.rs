//! # intruguard-console
//!
//! Headless console for the IntruGuard SOC web pages. Loads each page into an
//! in-memory document, fires its page-ready, submit and click events, talks
//! to the backend over HTTP, and records what the page would show: rendered
//! text, alerts, and navigation.
//!
//! Every interactive script follows one pipeline, trigger to request to
//! render, expressed here as a pure decision step that emits
//! [`dom::Render`] instructions and a single apply step that mutates the page.

pub mod browser;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod events;
pub mod net;
pub mod pages;

pub use browser::Browser;
pub use config::ConsoleConfig;
pub use error::ConsoleError;
