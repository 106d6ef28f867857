//! Hoverline web shell
//!
//! Binds the hover-border engine to DOM widgets in the browser, and runs a
//! scripted headless episode natively.

pub mod demo;

pub use demo::{DemoFrame, run_scripted_episode};

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod host;
#[cfg(target_arch = "wasm32")]
mod local_store;
#[cfg(target_arch = "wasm32")]
mod measure;
#[cfg(target_arch = "wasm32")]
mod pointer_feed;
#[cfg(target_arch = "wasm32")]
mod registry;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use registry::{
    dispose_all, dispose_widget, mount_all, mount_widget, select_option, widget_value,
};
#[cfg(target_arch = "wasm32")]
pub use web::start;
