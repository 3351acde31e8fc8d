#![cfg_attr(
    all(windows, not(test), not(debug_assertions)),
    windows_subsystem = "windows"
)]

use anyhow::Context;
use dotenv::dotenv;
use learner_settings::{AppSettings, OpenAiSettings};
use learner_tauri::{
    MAIN_WINDOW, create_overlay_window,
    procedures::{
        capture_procedures::{CaptureApi, CaptureApiImpl},
        hint_procedures::{HintApi, HintApiImpl},
        window_procedures::{WindowApi, WindowApiImpl},
    },
    shared_types::SharedOpenAiClient,
    shortcuts::{register_shortcuts, shortcut_bindings, shortcut_plugin, unregister_all},
};
use log::{debug, warn};
use tauri::{App, Manager, RunEvent, generate_context};
use tauri_plugin_log::fern::colors::ColoredLevelConfig;
use taurpc::Router;

fn setup(tauri_app: &mut App) -> anyhow::Result<()> {
    let app_settings = match AppSettings::load_from_default_path_creating() {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default().with_env_overrides()
        }
    };
    tauri_app.manage(app_settings.clone());
    tauri_app.manage(SharedOpenAiClient::default());

    let app_handle = tauri_app.handle();
    create_overlay_window(app_handle, &app_settings.window).context("create overlay window")?;

    let bindings = shortcut_bindings(&app_settings.hotkeys);
    app_handle
        .plugin(shortcut_plugin(bindings.clone(), app_settings.window.move_step))
        .context("install global shortcut plugin")?;
    register_shortcuts(app_handle, &bindings);

    if OpenAiSettings::api_key().is_none() {
        warn!("OPENAI_API_KEY is not set, hint requests will fail");
    }

    Ok(())
}

fn main() {
    dotenv().ok();

    let tauri_context = generate_context!();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to build tokio runtime")
        .block_on(async {
            debug!("Setting tokio runtime");
            tauri::async_runtime::set(tokio::runtime::Handle::current());

            let builder = tauri::Builder::default()
                .plugin(
                    tauri_plugin_log::Builder::new()
                        .filter(|metadata| {
                            let target = metadata.target();
                            // Rust converts hyphens to underscores in module paths
                            let is_learner_crate = target.starts_with("learner_");
                            let is_webview = target.starts_with("webview");
                            // For third-party crates, only allow warnings and above
                            let is_warning_or_above = metadata.level() <= log::Level::Warn;
                            is_learner_crate || is_webview || is_warning_or_above
                        })
                        .level(if cfg!(debug_assertions) {
                            log::LevelFilter::Trace
                        } else {
                            log::LevelFilter::Info
                        })
                        .with_colors(ColoredLevelConfig::default())
                        .build(),
                )
                .plugin(tauri_plugin_single_instance::init(|app, _, _| {
                    if let Some(window) = app.get_webview_window(MAIN_WINDOW) {
                        let _ = window.show();
                        let _ = window.unminimize();
                        let _ = window.set_focus();
                    }
                }))
                .setup(|tauri_app| {
                    setup(tauri_app)?;
                    Ok(())
                });

            let router = Router::new()
                .export_config(specta_typescript::Typescript::default())
                .merge(CaptureApiImpl.into_handler())
                .merge(WindowApiImpl.into_handler())
                .merge(HintApiImpl.into_handler());

            builder
                .invoke_handler(router.into_handler())
                .build(tauri_context)
                .expect("Failed to build tauri app")
                .run(|app_handle, event| match event {
                    // Closing the last window keeps the app alive on macOS
                    #[cfg(target_os = "macos")]
                    RunEvent::ExitRequested { code: None, api, .. } => {
                        api.prevent_exit();
                    }
                    #[cfg(target_os = "macos")]
                    RunEvent::Reopen { .. } => {
                        if app_handle.get_webview_window(MAIN_WINDOW).is_none() {
                            let settings = app_handle.state::<AppSettings>();
                            if let Err(e) = create_overlay_window(app_handle, &settings.window) {
                                log::error!("Failed to recreate overlay window: {}", e);
                            }
                        }
                    }
                    RunEvent::Exit => {
                        debug!("Releasing global hotkeys");
                        unregister_all(app_handle);
                    }
                    _ => {}
                });
        });
}
