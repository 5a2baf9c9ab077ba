//! Client-side synchronization core for the Vitrine content API.
//!
//! The `application` controllers own all view state (paginated lists, the
//! editor, the tag facet) and talk to the remote API exclusively through the
//! transport trait implemented in `infra`. The `presentation` layer renders
//! controller snapshots and forwards user intents; it never touches the wire
//! itself.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
