//! Single-page navigation: which section is on screen, and keeping the
//! address fragment and scroll position in step with link clicks and
//! back/forward.
//!
//! `registry`, `active`, `tracker` and `reconciler` hold the logic and know
//! nothing about the browser. `browser` binds them to `web_sys`.

pub mod active;
pub mod browser;
pub mod reconciler;
pub mod registry;
pub mod tracker;

pub use browser::{NavigationSession, SectionObserver};
pub use reconciler::Resolution;
pub use registry::RegionId;
