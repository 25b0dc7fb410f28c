use api::ReportTransport;
use dioxus::prelude::*;

use crate::core::dom::{self, DROP_AREA_ID, FILE_INPUT_ID};
use crate::core::platform::{self, PlatformFile};
use crate::t;
use crate::upload::{Effect, UploadController};

/// Apply controller effects; a chart that fails to draw is reported back.
fn run_effects(mut controller: Signal<UploadController<PlatformFile>>, effects: Vec<Effect>) {
    if let Err(reason) = dom::apply_effects(effects) {
        let effects = controller.with_mut(|c| c.chart_failed(&reason));
        if let Err(reason) = dom::apply_effects(effects) {
            tracing::error!("unexpected draw while reporting a chart failure: {reason}");
        }
    }
}

/// Drop area, hidden file picker, file name line, submit button and spinner.
#[component]
pub fn UploadPanel(controller: Signal<UploadController<PlatformFile>>) -> Element {
    let mut controller = controller;
    let transport = use_hook(|| platform::transport(controller.peek().config()));

    let state = controller.read();
    let drop_class = if state.drag_active() {
        "drop-area drop-area--highlight"
    } else {
        "drop-area"
    };
    let loading_class = if state.loading() {
        "loading"
    } else {
        "loading hidden"
    };
    let submit_disabled = !state.submit_enabled();
    let file_name = state.file_name().to_string();
    drop(state);

    let on_mounted = move |_evt: MountedEvent| {
        let armed = dom::install_drop_target(
            DROP_AREA_ID,
            move |active| {
                if controller.peek().drag_active() != active {
                    controller.with_mut(|c| c.set_drag_active(active));
                }
            },
            move |candidate| {
                let effects = controller.with_mut(|c| c.drop_file(candidate));
                run_effects(controller, effects);
            },
        );
        if let Err(err) = armed {
            tracing::error!("drop target unavailable: {err}");
        }
    };

    let on_pick = move |_evt: FormEvent| {
        let effects = controller.with_mut(|c| c.pick_file(dom::picked_file(FILE_INPUT_ID)));
        run_effects(controller, effects);
    };

    let on_submit = move |_evt: MouseEvent| {
        let Some(file) = controller.with_mut(|c| c.begin_upload()) else {
            return;
        };
        let transport = transport.clone();
        spawn(async move {
            let outcome = transport.upload(&file).await;
            let effects = controller.with_mut(|c| c.finish_upload(outcome));
            // Draw and alert once the results card and spinner reflect the outcome.
            wait_for_next_render().await;
            run_effects(controller, effects);
        });
    };

    rsx! {
        div { class: "upload-panel",
            div {
                id: DROP_AREA_ID,
                class: "{drop_class}",
                role: "button",
                tabindex: "0",
                onmounted: on_mounted,
                onclick: move |_| dom::open_file_picker(FILE_INPUT_ID),
                onkeydown: move |evt| {
                    let key = evt.key().to_string().to_lowercase();
                    if key == " " || key == "space" || key == "spacebar" || key == "enter" {
                        evt.prevent_default();
                        dom::open_file_picker(FILE_INPUT_ID);
                    }
                },
                p { class: "drop-area__prompt", {t!("drop-prompt")} }
                p { class: "drop-area__hint", {t!("drop-hint")} }
            }
            // Outside the drop area so its click does not bubble back into it.
            input {
                id: FILE_INPUT_ID,
                class: "visually-hidden",
                r#type: "file",
                accept: ".csv",
                onchange: on_pick,
            }
            p { class: "upload-panel__file",
                {t!("file-label")}
                " "
                span { id: "file-name", "{file_name}" }
            }
            button {
                id: "generate-btn",
                class: "button button--primary",
                disabled: submit_disabled,
                onclick: on_submit,
                {t!("generate-button")}
            }
            div { id: "loading", class: "{loading_class}",
                span { class: "loading__spinner", aria_hidden: "true" }
                span { class: "loading__label", {t!("loading-label")} }
            }
        }
    }
}
