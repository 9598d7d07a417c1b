use gpui::{
    AppContext, Context, IntoElement, ParentElement, Render, SharedString, Styled, Window, div,
    prelude::FluentBuilder,
};
use gpui_component::{
    ActiveTheme, Disableable, StyledExt,
    button::{Button, ButtonVariants},
};

use crate::BackendBridge;
use crate::components::article_row::ArticleRow;
use crate::entities::{DataEntities, articles_entity, router_entity::Route};

/// The home page: the user's profile, the paginated article listing, and the
/// sign-out action.
pub struct ArticlesPage {
    data: DataEntities,
}

impl ArticlesPage {
    pub fn new(data: &DataEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let articles = data.articles.clone();
        cx.observe_in(&articles, window, |_, _, _, cx| {
            cx.notify();
        })
        .detach();
        let profile = data.profile.clone();
        cx.observe_in(&profile, window, |_, _, _, cx| {
            cx.notify();
        })
        .detach();

        // Profile and listing load independently; whichever lands first
        // fills in its part of the page.
        data.articles.update(cx, |model, cx| {
            model.loading = true;
            cx.notify();
        });
        let bridge = cx.global::<BackendBridge>().clone();
        cx.spawn(async move |_, _| {
            bridge.request_profile().await;
            bridge.request_articles_page(1).await;
        })
        .detach();

        Self { data: data.clone() }
    }

    /// Requests another page, clamped into the known page range. The cursor
    /// itself only moves when the response arrives.
    fn go_to_page(&mut self, requested: i64, cx: &mut Context<Self>) {
        let (loading, total_pages) = {
            let articles = self.data.articles.read(cx);
            (articles.loading, articles.total_pages)
        };
        if loading {
            return;
        }

        let page = articles_entity::clamp_page(requested, total_pages);
        self.data.articles.update(cx, |model, cx| {
            model.loading = true;
            cx.notify();
        });

        let bridge = cx.global::<BackendBridge>().clone();
        cx.spawn(async move |_, _| {
            bridge.request_articles_page(page).await;
        })
        .detach();
    }

    fn sign_out(&mut self, cx: &mut Context<Self>) {
        let bridge = cx.global::<BackendBridge>().clone();
        cx.spawn(async move |_, _| {
            bridge.sign_out().await;
        })
        .detach();
    }
}

impl Render for ArticlesPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let articles = self.data.articles.read(cx).clone();
        let profile = self.data.profile.read(cx).clone();
        let router = self.data.router.clone();

        let username: SharedString = profile
            .profile
            .as_ref()
            .map(|profile| profile.username.clone().into())
            .unwrap_or_else(|| "—".into());
        let page_label: SharedString =
            format!("Page {} of {}", articles.page, articles.total_pages).into();
        let current_page = articles.page as i64;

        div()
            .flex()
            .flex_col()
            .gap_3()
            .child(
                div()
                    .child("Your Profile")
                    .text_sm()
                    .text_color(cx.theme().muted_foreground),
            )
            .child(div().child(username).text_xl().font_semibold())
            .child(
                div()
                    .child("Documents")
                    .text_sm()
                    .text_color(cx.theme().muted_foreground),
            )
            .child(
                div()
                    .flex()
                    .gap_2()
                    .child(Button::new("create_article").primary().label("Create New").on_click(
                        move |_, _, cx| {
                            router.update(cx, |model, cx| {
                                model.route = Route::Compose;
                                cx.notify();
                            });
                        },
                    ))
                    .child(
                        Button::new("refresh_articles")
                            .outline()
                            .disabled(articles.loading)
                            .label("Refresh")
                            .on_click(cx.listener(move |this, _, _, cx| {
                                this.go_to_page(current_page, cx);
                            })),
                    )
                    .child(
                        Button::new("sign_out")
                            .ghost()
                            .label("Sign out")
                            .on_click(cx.listener(|this, _, _, cx| {
                                this.sign_out(cx);
                            })),
                    ),
            )
            .child(
                div().flex().flex_col().children(articles.articles.iter().map(|article| {
                    ArticleRow::new(
                        article.clone(),
                        profile.is_owner(&article.user_id),
                        self.data.router.clone(),
                    )
                })),
            )
            .when(articles.articles.is_empty() && !articles.loading, |this| {
                this.child(
                    div()
                        .child("No articles yet.")
                        .text_sm()
                        .text_color(cx.theme().muted_foreground),
                )
            })
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(
                        Button::new("previous_page")
                            .outline()
                            .disabled(articles.loading)
                            .label("Previous")
                            .on_click(cx.listener(move |this, _, _, cx| {
                                this.go_to_page(current_page - 1, cx);
                            })),
                    )
                    .child(
                        div()
                            .child(page_label)
                            .text_sm()
                            .text_color(cx.theme().muted_foreground),
                    )
                    .child(
                        Button::new("next_page")
                            .outline()
                            .disabled(articles.loading)
                            .label("Next")
                            .on_click(cx.listener(move |this, _, _, cx| {
                                this.go_to_page(current_page + 1, cx);
                            })),
                    ),
            )
    }
}
