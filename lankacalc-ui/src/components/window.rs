use gpui::{
    App, AppContext, Context, Entity, IntoElement, ParentElement, Render, Styled, Subscription,
    Window, div,
};
use gpui_component::{ActiveTheme, StyledExt};
use tracing::info;

use crate::{Quit, components::CalculatorCard, quit};

/// Top-level view of the main window: centres the calculator card and quits
/// the application when the window goes away.
pub struct AppWindow {
    card: Entity<CalculatorCard>,
    _window_close_subscription: Subscription,
}

impl AppWindow {
    pub fn new(
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let subscription = cx.on_window_closed(|cx: &mut App| {
            info!("Window closed callback");
            quit(&Quit, cx);
        });

        let card = cx.new(|card_cx| CalculatorCard::new(window, card_cx));

        info!("Window constructed");
        Self {
            card,
            _window_close_subscription: subscription,
        }
    }
}

impl Render for AppWindow {
    fn render(
        &mut self,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        div()
            .v_flex()
            .size_full()
            .p_4()
            .items_center()
            .justify_center()
            .bg(cx.theme().background)
            .child(self.card.clone())
    }
}
