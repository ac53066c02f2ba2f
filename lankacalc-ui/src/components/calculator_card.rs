use gpui::{
    AppContext, ClickEvent, Context, Div, Entity, FontWeight, Hsla, IntoElement, ParentElement,
    Render, SharedString, Styled, Subscription, Window, div, prelude::FluentBuilder, px,
};
use gpui_component::{
    ActiveTheme, h_flex,
    input::{Input, InputEvent, InputState},
    v_flex,
};
use lankacalc_core::{ContributionLine, EarningsCalculator};
use tracing::debug;

use crate::{
    components::make_button,
    strings::{
        BREAKDOWN_HEADING, CARD_DESCRIPTION, CARD_TITLE, EARNINGS_HELP, EARNINGS_LABEL,
        EARNINGS_PLACEHOLDER, EARNINGS_TOO_LARGE, SUMMARY_HEADING,
    },
};

/// The calculator card: one earnings field and the derived contributions.
///
/// Every edit of the field is offered to [`EarningsCalculator::update`].
/// Edits the calculator rejects are rolled back in the field, so the text on
/// screen and the calculator's raw input never diverge.
pub struct CalculatorCard {
    earnings_input: Entity<InputState>,
    calculator: EarningsCalculator,
    _subscriptions: Vec<Subscription>,
}

impl CalculatorCard {
    pub fn new(
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let earnings_input = cx.new(|input_cx| {
            InputState::new(window, input_cx).placeholder(EARNINGS_PLACEHOLDER)
        });
        let subscription = cx.subscribe_in(&earnings_input, window, Self::on_earnings_event);

        Self {
            earnings_input,
            calculator: EarningsCalculator::new(),
            _subscriptions: vec![subscription],
        }
    }

    fn on_earnings_event(
        &mut self,
        state: &Entity<InputState>,
        event: &InputEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if !matches!(event, InputEvent::Change { .. }) {
            return;
        }

        let text = state.read(cx).value().to_string();
        if text == self.calculator.raw_input() {
            return;
        }

        if self.calculator.accepts(&text) {
            self.calculator.update(&text);
            cx.notify();
        } else {
            debug!(rejected = %text, "restoring previous earnings text");
            let previous = self.calculator.raw_input().to_string();
            state.update(cx, |state, state_cx| {
                state.set_value(previous, window, state_cx);
            });
        }
    }

    fn clear(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.calculator.clear();
        self.earnings_input.update(cx, |state, state_cx| {
            state.set_value("", window, state_cx);
        });
        cx.notify();
    }
}

impl Render for CalculatorCard {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let clear_button = make_button(
            "clear-earnings",
            "Clear",
            cx.listener(|this, _: &ClickEvent, window, cx| this.clear(window, cx)),
        );

        let theme = cx.theme();
        let palette = CardPalette {
            primary: theme.primary,
            accent: theme.accent_foreground,
            muted: theme.muted_foreground,
            row_bg: theme.secondary.opacity(0.3),
            border: theme.border,
        };

        v_flex()
            .w(px(480.))
            .gap_6()
            .p_6()
            .rounded_xl()
            .border_1()
            .border_color(palette.border)
            .bg(theme.background)
            .shadow_lg()
            .child(
                v_flex()
                    .items_center()
                    .gap_1()
                    .child(
                        div()
                            .text_3xl()
                            .font_weight(FontWeight::BOLD)
                            .text_color(palette.primary)
                            .child(CARD_TITLE),
                    )
                    .child(div().text_color(palette.muted).child(CARD_DESCRIPTION)),
            )
            .child(
                v_flex()
                    .gap_2()
                    .child(
                        div()
                            .text_lg()
                            .font_weight(FontWeight::MEDIUM)
                            .child(EARNINGS_LABEL),
                    )
                    .child(div().text_xs().text_color(palette.muted).child(EARNINGS_HELP))
                    .child(
                        h_flex()
                            .gap_2()
                            .child(Input::new(&self.earnings_input).flex_grow())
                            .child(clear_button),
                    )
                    .when(self.calculator.exceeds_max_earnings(), |this| {
                        this.child(
                            div()
                                .text_xs()
                                .text_color(theme.danger)
                                .child(EARNINGS_TOO_LARGE),
                        )
                    }),
            )
            .child(separator(palette.border))
            .child(section(
                BREAKDOWN_HEADING,
                &self.calculator.breakdown(),
                palette.primary,
                &palette,
            ))
            .child(separator(palette.border))
            .child(section(
                SUMMARY_HEADING,
                &self.calculator.summary(),
                palette.accent,
                &palette,
            ))
    }
}

/// Colors pulled from the active theme once per frame.
struct CardPalette {
    primary: Hsla,
    accent: Hsla,
    muted: Hsla,
    row_bg: Hsla,
    border: Hsla,
}

fn separator(color: Hsla) -> Div {
    div().w_full().h(px(1.)).bg(color)
}

fn section(
    heading: &'static str,
    lines: &[ContributionLine],
    value_color: Hsla,
    palette: &CardPalette,
) -> Div {
    v_flex()
        .gap_3()
        .child(
            div()
                .text_xl()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(palette.primary)
                .child(heading),
        )
        .children(
            lines
                .iter()
                .map(|line| contribution_row(line, value_color, palette)),
        )
}

fn contribution_row(
    line: &ContributionLine,
    value_color: Hsla,
    palette: &CardPalette,
) -> Div {
    h_flex()
        .justify_between()
        .items_center()
        .p_3()
        .rounded_lg()
        .bg(palette.row_bg)
        .child(
            v_flex()
                .child(div().font_weight(FontWeight::MEDIUM).child(line.label))
                .child(
                    div()
                        .text_xs()
                        .text_color(palette.muted)
                        .child(SharedString::from(line.details.clone())),
                ),
        )
        .child(
            div()
                .text_lg()
                .font_weight(FontWeight::SEMIBOLD)
                .text_color(value_color)
                .child(SharedString::from(line.value.clone())),
        )
}
