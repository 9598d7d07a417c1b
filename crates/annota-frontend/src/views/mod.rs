mod articles_page;
mod editor_page;
mod login_page;

use gpui::{AnyView, AppContext, Context, IntoElement, ParentElement, Render, Styled, Window, div};
use gpui_component::{ActiveTheme, Root, StyledExt};

use crate::entities::DataEntities;
use crate::entities::router_entity::Route;
use crate::views::{
    articles_page::ArticlesPage, editor_page::EditorPage, login_page::LoginPage,
};

/// The root view: a header bar plus the page the current route resolves to.
///
/// Pages are rebuilt on every navigation, so each page re-runs its mount
/// loads and the route guard re-evaluates every time; neither decision is
/// ever cached.
pub struct FrontendUi {
    data: DataEntities,
    current: Route,
    active_page_view: AnyView,
}

impl FrontendUi {
    pub fn new(data: &DataEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let router = data.router.clone();
        cx.observe_in(&router, window, |this, _, window, cx| {
            this.sync_route(window, cx);
        })
        .detach();

        // Session changes re-run the guard too: logging in settles the
        // requested protected page, signing out falls back to login.
        let session = data.session.clone();
        cx.observe_in(&session, window, |this, _, window, cx| {
            this.sync_route(window, cx);
        })
        .detach();

        let requested = data.router.read(cx).route;
        let authenticated = data.session.read(cx).authenticated;
        let current = requested.resolve(authenticated);
        let active_page_view = Self::build_page(current, data, window, cx);

        Self {
            data: data.clone(),
            current,
            active_page_view,
        }
    }

    fn build_page(
        route: Route,
        data: &DataEntities,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> AnyView {
        match route {
            Route::Login => cx.new(|cx| LoginPage::new(data, window, cx)).into(),
            Route::ArticleList => cx.new(|cx| ArticlesPage::new(data, window, cx)).into(),
            Route::Compose => cx.new(|cx| EditorPage::new(None, data, window, cx)).into(),
            Route::Edit(id) => cx.new(|cx| EditorPage::new(Some(id), data, window, cx)).into(),
        }
    }

    fn sync_route(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let requested = self.data.router.read(cx).route;
        let authenticated = self.data.session.read(cx).authenticated;
        let resolved = requested.resolve(authenticated);
        if resolved != self.current {
            self.current = resolved;
            self.active_page_view = Self::build_page(resolved, &self.data, window, cx);
            cx.notify();
        }
    }
}

impl Render for FrontendUi {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let notification_layer = Root::render_notification_layer(window, cx);

        div()
            .flex()
            .flex_col()
            .size_full()
            .child(
                div()
                    .w_full()
                    .px_4()
                    .py_3()
                    .border_b_1()
                    .border_color(cx.theme().border)
                    .child(div().child("Audio Annotator").text_lg().font_bold()),
            )
            .child(div().p_5().flex_1().overflow_hidden().child(self.active_page_view.clone()))
            .children(notification_layer)
    }
}
