#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod ui;

use dioxus::prelude::*;
use dioxus_desktop::{tao::window::WindowBuilder, Config as DesktopConfig};
use log::trace;

use offsite_cost_calculator::util::version::APP_NAME;

fn main() {
    env_logger::builder()
        .filter_module("offsite_cost_calculator", log::LevelFilter::Info)
        .parse_default_env()
        .init();
    trace!("Logger initialised.");

    // Wayland explicit-sync crashes on some drivers; fall back to GL unless the caller opts in.
    if std::env::var("WAYLAND_DISPLAY").is_ok() && std::env::var("WGPU_BACKEND").is_err() {
        std::env::set_var("WGPU_BACKEND", "gl");
    }

    // WebKit's DMABUF renderer opts into explicit sync; disable it unless the user overrides.
    if std::env::var("WAYLAND_DISPLAY").is_ok()
        && std::env::var("WEBKIT_DISABLE_DMABUF_RENDERER").is_err()
    {
        std::env::set_var("WEBKIT_DISABLE_DMABUF_RENDERER", "1");
    }

    let config = DesktopConfig::new().with_window(WindowBuilder::new().with_title(APP_NAME));

    LaunchBuilder::new().with_cfg(config).launch(app::App);
}
