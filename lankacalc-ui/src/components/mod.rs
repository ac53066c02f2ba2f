pub mod calculator_card;
pub mod window;

use gpui::{App, SharedString, Window};
use gpui::{ClickEvent, Styled};
use gpui::{Pixels, Size, px};
use gpui_component::button::{Button, ButtonVariants};

pub use calculator_card::CalculatorCard;
pub use window::AppWindow;

use crate::config::WindowConfig;

#[derive(Debug, Clone, Copy)]
pub struct WindowPreferences {
    pub size: Size<Pixels>,
}

impl Default for WindowPreferences {
    fn default() -> Self {
        WindowConfig::default().into()
    }
}

impl WindowPreferences {
    pub fn new(
        width: impl Into<Pixels>,
        height: impl Into<Pixels>,
    ) -> Self {
        Self {
            size: Size {
                width: width.into(),
                height: height.into(),
            },
        }
    }
}

impl From<WindowConfig> for WindowPreferences {
    fn from(config: WindowConfig) -> Self {
        Self::new(px(config.width), px(config.height))
    }
}

/// Creates a ghost-styled button with a custom click handler.
pub fn make_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    Button::new(id.into())
        .ghost()
        .w(px(120.))
        .label(label.into())
        .on_click(on_click)
}
