//! Co-op internship tracker demo page.
//!
//! SYSTEM CONTEXT
//! ==============
//! A server-rendered page that simulates role-based login over fixed mock
//! data. `catalog` holds the data, `session` and `view` model the page
//! state, `render` turns it into HTML, and `routes` exposes it over HTTP.

pub mod catalog;
pub mod config;
pub mod render;
pub mod routes;
pub mod session;
pub mod state;
pub mod view;
