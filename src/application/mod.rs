//! Controllers that reconcile local view state with the remote API.

pub mod editor;
pub mod list;
pub mod tag_index;
pub mod transport;
