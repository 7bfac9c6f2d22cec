//! Browser detection and URL launch orchestration.
//!
//! The library detects browsers installed on the host, keeps them in an
//! explicit [`BrowserRegistry`], and drives one or more of them through the
//! [`Launcher`]: each browser is started on a temporary countdown
//! [`StartPage`], then the requested URLs are opened either concurrently
//! ([`LaunchMode::Fast`]) or one at a time in input order
//! ([`LaunchMode::Ordered`]).

pub mod discovery;
pub mod error;
pub mod launcher;
pub mod registry;
pub mod start_page;

pub use error::{BstartError, Result};
pub use launcher::{
    BrowserEntry, LaunchMode, LaunchRequest, Launcher, ProcessOpener, UrlOpener,
};
pub use registry::BrowserRegistry;
pub use start_page::{DEFAULT_COUNTDOWN_SECONDS, StartPage};
