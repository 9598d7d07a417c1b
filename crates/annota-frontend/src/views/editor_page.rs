use annota_bridge::article::ArticleDraft;
use gpui::{
    AppContext, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled, Window,
    div, prelude::FluentBuilder, px,
};
use gpui_component::{
    ActiveTheme, Disableable, IndexPath, Sizable, StyledExt,
    button::{Button, ButtonVariants},
    group_box::{GroupBox, GroupBoxVariants},
    input::{Input, InputEvent, InputState},
    select::{Select, SelectEvent, SelectItem, SelectState},
};

use crate::BackendBridge;
use crate::components::form_field::FormField;
use crate::entities::{
    DataEntities, editor_entity::EditorEntity, router_entity::Route,
};

#[derive(Debug, Clone)]
struct SpeakerOption {
    id: SharedString,
    name: SharedString,
}

impl SelectItem for SpeakerOption {
    type Value = SharedString;

    fn title(&self) -> SharedString {
        self.name.clone()
    }

    fn value(&self) -> &Self::Value {
        &self.id
    }
}

/// The article editor, composing a new article (`article_id` absent) or
/// updating an existing one (`article_id` present).
///
/// Text fields and the speaker selection live here; the upload sub-flow and
/// the pre-loaded article come in through the editor entity.
pub struct EditorPage {
    article_id: Option<u64>,
    data: DataEntities,
    title_input: Entity<InputState>,
    body_input: Entity<InputState>,
    speaker_select: Entity<SelectState<Vec<SpeakerOption>>>,
    /// Speaker to select once the speaker list contains it; set when a
    /// fetched article arrives before (or after) the speakers do.
    pending_speaker_id: Option<String>,
    /// The form has been pre-filled from the fetched article. Hydration runs
    /// once, so later entity updates never clobber user edits.
    hydrated: bool,
    saving: bool,
}

impl EditorPage {
    pub fn new(
        article_id: Option<u64>,
        data: &DataEntities,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        // A fresh editor starts from a clean slate; upload state from a
        // previous composition must not leak into this one.
        data.editor.update(cx, |model, cx| {
            *model = EditorEntity::default();
            cx.notify();
        });

        let title_input = cx.new(|cx| InputState::new(window, cx).placeholder("Title"));
        let body_input = cx.new(|cx| InputState::new(window, cx).multi_line(true).placeholder("Body"));
        let speaker_select = cx.new(|cx| {
            let options: Vec<SpeakerOption> = data
                .speakers
                .read(cx)
                .speakers
                .iter()
                .map(|speaker| SpeakerOption {
                    id: speaker.id.clone().into(),
                    name: speaker.name.clone().into(),
                })
                .collect();
            SelectState::new(options, None, window, cx)
        });

        // Keep the save control's disabled state in step with the form.
        cx.subscribe_in(&title_input, window, |_, _, _: &InputEvent, _, cx| {
            cx.notify();
        })
        .detach();
        cx.subscribe_in(&body_input, window, |_, _, _: &InputEvent, _, cx| {
            cx.notify();
        })
        .detach();
        cx.subscribe_in(&speaker_select, window, |_, _, event, _, cx| match event {
            SelectEvent::Confirm(_) => cx.notify(),
        })
        .detach();

        let speakers = data.speakers.clone();
        cx.observe_in(&speakers, window, |this, _, window, cx| {
            this.refresh_speakers(window, cx);
        })
        .detach();

        let editor = data.editor.clone();
        cx.observe_in(&editor, window, |this, _, window, cx| {
            this.hydrate_from_loaded(window, cx);
            cx.notify();
        })
        .detach();

        let bridge = cx.global::<BackendBridge>().clone();
        cx.spawn(async move |_, _| {
            bridge.request_speakers().await;
            if let Some(id) = article_id {
                bridge.request_article(id).await;
            }
        })
        .detach();

        Self {
            article_id,
            data: data.clone(),
            title_input,
            body_input,
            speaker_select,
            pending_speaker_id: None,
            hydrated: false,
            saving: false,
        }
    }

    fn refresh_speakers(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let options: Vec<SpeakerOption> = self
            .data
            .speakers
            .read(cx)
            .speakers
            .iter()
            .map(|speaker| SpeakerOption {
                id: speaker.id.clone().into(),
                name: speaker.name.clone().into(),
            })
            .collect();

        self.speaker_select.update(cx, |state, cx| {
            state.set_items(options, window, cx);
        });
        self.apply_pending_speaker(window, cx);
        cx.notify();
    }

    fn hydrate_from_loaded(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.hydrated {
            return;
        }
        let Some(article) = self.data.editor.read(cx).loaded_article.clone() else {
            return;
        };
        self.hydrated = true;

        self.title_input.update(cx, |state, cx| {
            state.set_value(article.title.clone(), window, cx);
        });
        self.body_input.update(cx, |state, cx| {
            state.set_value(article.content.clone(), window, cx);
        });
        self.pending_speaker_id = Some(article.speaker_id.clone());
        self.apply_pending_speaker(window, cx);
    }

    fn apply_pending_speaker(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let Some(speaker_id) = self.pending_speaker_id.clone() else {
            return;
        };
        let index = self
            .data
            .speakers
            .read(cx)
            .speakers
            .iter()
            .position(|speaker| speaker.id == speaker_id);

        if let Some(index) = index {
            self.speaker_select.update(cx, |state, cx| {
                state.set_selected_index(Some(IndexPath::new(index)), window, cx);
            });
            self.pending_speaker_id = None;
        }
    }

    fn current_draft(&self, cx: &Context<Self>) -> ArticleDraft {
        let speaker_id = self
            .speaker_select
            .read(cx)
            .selected_value()
            .map(|value| value.to_string())
            .unwrap_or_default();

        ArticleDraft {
            title: self.title_input.read(cx).value().to_string(),
            content: self.body_input.read(cx).value().to_string(),
            speaker_id,
            audio_id: self
                .data
                .editor
                .read(cx)
                .audio
                .as_ref()
                .map(|asset| asset.id),
        }
    }

    /// Opens the native file picker and starts the upload as soon as a file
    /// is chosen. Any previously uploaded asset is cleared from view while
    /// the new one is in flight.
    fn pick_audio(&mut self, cx: &mut Context<Self>) {
        if self.data.editor.read(cx).uploading {
            return;
        }

        let paths = cx.prompt_for_paths(gpui::PathPromptOptions {
            files: true,
            directories: false,
            multiple: false,
            prompt: None,
        });

        let editor = self.data.editor.clone();
        let bridge = cx.global::<BackendBridge>().clone();
        cx.spawn(async move |_, cx| {
            if let Ok(Ok(Some(mut selected))) = paths.await
                && let Some(path) = selected.pop()
            {
                let _ = editor.update(cx, |model, cx| {
                    model.uploading = true;
                    model.audio = None;
                    model.playback_url = None;
                    cx.notify();
                });
                bridge.upload_audio(path).await;
            }
        })
        .detach();
    }

    fn save(&mut self, cx: &mut Context<Self>) {
        let draft = self.current_draft(cx);
        if !draft.is_complete() || self.saving {
            return;
        }

        self.saving = true;
        cx.notify();

        let bridge = cx.global::<BackendBridge>().clone();
        let article_id = self.article_id;
        cx.spawn(async move |_, _| {
            bridge.save_article(article_id, draft).await;
        })
        .detach();
    }
}

impl Render for EditorPage {
    fn render(&mut self, _: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let editor = self.data.editor.read(cx).clone();
        let draft = self.current_draft(cx);
        let router = self.data.router.clone();

        let heading = if self.article_id.is_some() {
            "Edit Article"
        } else {
            "New Article"
        };
        let audio_label: SharedString = if editor.uploading {
            "Uploading…".into()
        } else {
            match &editor.audio {
                Some(asset) => asset.filename.clone().into(),
                None => "No audio uploaded".into(),
            }
        };

        div()
            .flex()
            .flex_col()
            .gap_4()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(Button::new("back_to_list").ghost().small().label("Back").on_click(
                        move |_, _, cx| {
                            router.update(cx, |model, cx| {
                                model.route = Route::ArticleList;
                                cx.notify();
                            });
                        },
                    ))
                    .child(div().child(heading).text_2xl().font_bold()),
            )
            .child(
                FormField::new().label("Audio").child(
                    div()
                        .flex()
                        .items_center()
                        .gap_3()
                        .child(
                            Button::new("choose_audio")
                                .outline()
                                .loading(editor.uploading)
                                .disabled(editor.uploading)
                                .label("Choose audio file")
                                .on_click(cx.listener(|this, _, _, cx| {
                                    this.pick_audio(cx);
                                })),
                        )
                        .child(
                            div()
                                .child(audio_label)
                                .text_sm()
                                .text_color(cx.theme().muted_foreground),
                        ),
                ),
            )
            .when(editor.playback_url.is_some(), |this| {
                let url = editor.playback_url.clone().unwrap();
                this.child(
                    FormField::new().label("Playback").child(
                        Button::new("open_playback")
                            .outline()
                            .small()
                            .label("Open in player")
                            .on_click(move |_, _, cx| {
                                cx.open_url(&url);
                            }),
                    ),
                )
            })
            .child(
                FormField::new()
                    .label("Speaker")
                    .child(Select::new(&self.speaker_select).placeholder("(Select speaker)")),
            )
            .child(
                FormField::new()
                    .label("Title")
                    .child(Input::new(&self.title_input)),
            )
            .child(
                FormField::new()
                    .label("Body")
                    .child(Input::new(&self.body_input).h(px(280.))),
            )
            .child(
                div().flex().gap_2().child(
                    Button::new("save_article")
                        .primary()
                        .loading(self.saving)
                        .disabled(!draft.is_complete() || self.saving)
                        .label("Save")
                        .on_click(cx.listener(|this, _, _, cx| {
                            this.save(cx);
                        })),
                ),
            )
            .child(
                GroupBox::new()
                    .outline()
                    .child(div().child("Note").text_sm().font_semibold())
                    .child(div().child("1. Please be careful to review each word").text_sm()),
            )
    }
}
