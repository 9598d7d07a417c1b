use annota_bridge::article::Article;
use chrono::Utc;
use gpui::{Entity, IntoElement, ParentElement, SharedString, Styled, div};
use gpui_component::{
    ActiveTheme, Sizable, StyledExt,
    button::{Button, ButtonVariants},
};

use crate::entities::router_entity::{Route, RouterEntity};
use crate::formatting::format_relative_time;

/// One row of the article listing: id, title, creator, relative creation
/// time, approval badge, and an edit action. The creator's name is
/// highlighted when it is the current user.
#[derive(IntoElement)]
pub struct ArticleRow {
    article: Article,
    is_owner: bool,
    router: Entity<RouterEntity>,
}

impl ArticleRow {
    pub fn new(article: Article, is_owner: bool, router: Entity<RouterEntity>) -> Self {
        Self {
            article,
            is_owner,
            router,
        }
    }
}

impl gpui::RenderOnce for ArticleRow {
    fn render(self, _: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let article_id = self.article.id;
        let router = self.router;

        let creator_color = if self.is_owner {
            cx.theme().primary
        } else {
            cx.theme().muted_foreground
        };
        let (badge_label, badge_color) = if self.article.is_approved() {
            ("Approved", cx.theme().success)
        } else {
            ("In Review", cx.theme().warning)
        };

        let byline: SharedString = format!(
            "#{article_id} · {} · {}",
            self.article.user_id,
            format_relative_time(self.article.created_at, Utc::now())
        )
        .into();

        div()
            .w_full()
            .flex()
            .items_center()
            .gap_3()
            .px_3()
            .py_2()
            .border_b_1()
            .border_color(cx.theme().border)
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .child(div().child(self.article.title.clone()).text_lg().font_medium())
                    .child(div().child(byline).text_sm().text_color(creator_color)),
            )
            .child(
                div()
                    .px_2()
                    .py_1()
                    .rounded_lg()
                    .text_sm()
                    .font_medium()
                    .bg(cx.theme().muted)
                    .text_color(badge_color)
                    .child(badge_label),
            )
            .child(
                Button::new(("edit_article", article_id as usize))
                    .outline()
                    .small()
                    .label("Edit")
                    .on_click(move |_, _, cx| {
                        router.update(cx, |model, cx| {
                            model.route = Route::Edit(article_id);
                            cx.notify();
                        });
                    }),
            )
    }
}
