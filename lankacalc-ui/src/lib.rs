pub mod components;
pub mod config;
pub mod gui;
pub mod logging;
pub mod report;
pub mod strings;

use gpui::{App, actions};
pub use gui::{run, setup_app};
use tracing::info;

actions!(lankacalc, [Quit]);

// Takes a reference to the action (often unused) and mutable app context
pub fn quit(
    _: &Quit,
    cx: &mut App,
) {
    info!("Executing quit handler");
    cx.quit();
}
