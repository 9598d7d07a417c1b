use annota_bridge::article::Credentials;
use gpui::{
    AppContext, Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div,
    prelude::FluentBuilder, px,
};
use gpui_component::{
    ActiveTheme, Disableable, StyledExt,
    button::{Button, ButtonVariants},
    input::{Input, InputEvent, InputState},
};

use crate::BackendBridge;
use crate::entities::DataEntities;
use crate::entities::session_entity::SessionEntity;

/// The login form: two fields, one button, one fixed failure message.
pub struct LoginPage {
    session: Entity<SessionEntity>,
    username_input: Entity<InputState>,
    password_input: Entity<InputState>,
}

impl LoginPage {
    pub fn new(data: &DataEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let username_input = cx.new(|cx| InputState::new(window, cx).placeholder("Username"));
        let password_input =
            cx.new(|cx| InputState::new(window, cx).placeholder("Password").masked(true));

        // Keep the submit control's disabled state in step with the fields.
        cx.subscribe_in(&username_input, window, |_, _, _: &InputEvent, _, cx| {
            cx.notify();
        })
        .detach();
        cx.subscribe_in(&password_input, window, |_, _, _: &InputEvent, _, cx| {
            cx.notify();
        })
        .detach();

        let session = data.session.clone();
        cx.observe_in(&session, window, |_, _, _, cx| {
            cx.notify();
        })
        .detach();

        Self {
            session: data.session.clone(),
            username_input,
            password_input,
        }
    }

    fn submit(&mut self, cx: &mut Context<Self>) {
        let username = self.username_input.read(cx).value().to_string();
        let password = self.password_input.read(cx).value().to_string();
        if username.is_empty() || password.is_empty() {
            return;
        }
        if self.session.read(cx).login_pending {
            return;
        }

        self.session.update(cx, |model, cx| {
            model.login_pending = true;
            model.login_failed = false;
            cx.notify();
        });

        let bridge = cx.global::<BackendBridge>().clone();
        cx.spawn(async move |_, _| {
            bridge.login(Credentials { username, password }).await;
        })
        .detach();
    }
}

impl Render for LoginPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let session = self.session.read(cx).clone();
        let invalid = self.username_input.read(cx).value().is_empty()
            || self.password_input.read(cx).value().is_empty();

        div()
            .flex()
            .flex_col()
            .gap_4()
            .max_w(px(420.))
            .mx_auto()
            .child(div().child("Authentication").text_xl().font_bold().text_center())
            .child(Input::new(&self.username_input))
            .child(Input::new(&self.password_input))
            .child(
                Button::new("login")
                    .primary()
                    .loading(session.login_pending)
                    .disabled(invalid || session.login_pending)
                    .label("Login")
                    .on_click(cx.listener(|this, _, _, cx| {
                        this.submit(cx);
                    })),
            )
            .when(session.login_failed, |this| {
                this.child(
                    div()
                        .child("Username or password is incorrect!")
                        .text_sm()
                        .font_medium()
                        .text_color(cx.theme().danger),
                )
            })
    }
}
