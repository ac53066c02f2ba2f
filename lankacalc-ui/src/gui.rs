use gpui::{
    AnyView, App, AppContext, Application, Bounds, KeyBinding, Menu, MenuItem, TitlebarOptions,
    WindowBounds, WindowOptions,
};
use gpui_component::Root;
use tracing::{error, info};

use crate::{
    Quit,
    components::{AppWindow, WindowPreferences},
    quit,
    strings::WINDOW_TITLE,
};

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    app_cx.activate(true);

    // Bind platform-appropriate quit shortcut
    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: "LankaCalc".into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Opens the calculator window sized by `preferences`.
pub fn open_main_window(
    preferences: WindowPreferences,
    app_cx: &mut App,
) -> anyhow::Result<()> {
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
            None,
            preferences.size,
            app_cx,
        ))),
        titlebar: Some(TitlebarOptions {
            title: Some(WINDOW_TITLE.into()),
            ..Default::default()
        }),
        ..Default::default()
    };

    app_cx.open_window(options, |window, cx| {
        let app_window = cx.new(|window_cx| AppWindow::new(window, window_cx));
        cx.new(|root_cx| Root::new(AnyView::from(app_window), window, root_cx))
    })?;

    info!(
        width = ?preferences.size.width,
        height = ?preferences.size.height,
        "main window opened"
    );
    Ok(())
}

/// Runs the desktop application until the user quits.
pub fn run(preferences: WindowPreferences) {
    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |app_cx: &mut App| {
            setup_app(app_cx);
            if let Err(error) = open_main_window(preferences, app_cx) {
                error!(?error, "failed to open main window");
                app_cx.quit();
            }
        });
}
