use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use super::model::{RequestStatus, UploadAction, UploadEvent, UploadModel, COPY_CONFIRM_MS};
use crate::shared::{clipboard, download};

#[component]
pub fn RefactorPage() -> impl IntoView {
    let model = RwSignal::new(UploadModel::default());

    // The raw file handle is not part of the model; it is only needed at the
    // moment a submit actually fires.
    let file_handle = StoredValue::new_local(Option::<web_sys::File>::None);

    let dispatch = move |event: UploadEvent| {
        let mut action = None;
        model.update(|m| action = m.apply(event));

        match action {
            Some(UploadAction::SubmitUpload) => {
                let Some(file) = file_handle.get_value() else {
                    return;
                };
                spawn_local(async move {
                    let result = super::api::refactor_file(&file).await;
                    model.update(|m| {
                        m.apply(UploadEvent::ResponseReceived(result));
                    });
                });
            }
            Some(UploadAction::ScheduleCopyReset { token }) => {
                spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(COPY_CONFIRM_MS).await;
                    model.update(|m| {
                        m.apply(UploadEvent::CopyResetElapsed { token });
                    });
                });
            }
            None => {}
        }
    };

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        if let Some(input) = input {
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                let name = file.name();
                let size = file.size() as u64;
                file_handle.set_value(Some(file));
                dispatch(UploadEvent::FileSelected { name, size });
            }
        }
    };

    let handle_copy = move |_| {
        let Some(text) = model.with_untracked(|m| m.result_text.clone()) else {
            return;
        };
        clipboard::copy_to_clipboard(&text);
        dispatch(UploadEvent::CopyRequested);
    };

    let handle_download = move |_| {
        model.with_untracked(|m| {
            if let Some(text) = m.result_text.as_ref() {
                if let Err(e) = download::save_text_file(text, &m.output_filename) {
                    log::error!("download failed: {}", e);
                }
            }
        });
    };

    let selected_name = move || model.with(|m| m.selected_file.as_ref().map(|f| f.name.clone()));
    let is_loading = move || model.with(|m| m.status == RequestStatus::Loading);
    let has_result = move || model.with(|m| m.result_text.is_some());
    let error_message = move || model.with(|m| m.error_message.clone());

    view! {
        <div class="app-container">
            <div class=move || {
                if has_result() { "main-layout split-view" } else { "main-layout centered-view" }
            }>
                // Input panel
                <div class="glass-card input-panel">
                    <header>
                        <h1>"Code Alchemy"</h1>
                        <p class="subtitle">"AI-Powered Refactoring Engine"</p>
                    </header>

                    <div class="upload-section">
                        <div class=move || {
                            if selected_name().is_some() { "drop-zone active" } else { "drop-zone" }
                        }>
                            <input type="file" id="file-input" on:change=handle_file_select />
                            <label for="file-input">
                                {move || match selected_name() {
                                    Some(name) => view! {
                                        <div class="file-info">
                                            <span class="file-name">{name}</span>
                                            <span class="file-change-text">"Click to change"</span>
                                        </div>
                                    }
                                    .into_any(),
                                    None => view! {
                                        <div class="upload-placeholder">
                                            <span>"Drop your messy file here"</span>
                                            <span class="sub-text">"Supports .py, .js, .java, .cpp"</span>
                                        </div>
                                    }
                                    .into_any(),
                                }}
                            </label>
                        </div>

                        <button
                            class="cta-button"
                            on:click=move |_| dispatch(UploadEvent::SubmitRequested)
                            prop:disabled=move || !model.with(|m| m.can_submit())
                        >
                            {move || if is_loading() { "Refactoring..." } else { "Magic Fix" }}
                        </button>
                    </div>

                    <Show when=move || error_message().is_some()>
                        <div class="error-banner">
                            {move || error_message().unwrap_or_default()}
                        </div>
                    </Show>
                </div>

                // Output panel
                <Show when=has_result>
                    <div class="glass-card output-panel">
                        <div class="panel-header">
                            <div class="header-left">
                                <h3>"Refactored Result"</h3>
                                <span class="badge">
                                    {move || model.with(|m| m.output_filename.clone())}
                                </span>
                            </div>
                            <div class="header-actions">
                                <button class="icon-btn" title="Copy code" on:click=handle_copy>
                                    {move || {
                                        if model.with(|m| m.copy_confirmed) { "Copied" } else { "Copy" }
                                    }}
                                </button>
                                <button class="primary-btn-small" on:click=handle_download>
                                    "Download"
                                </button>
                            </div>
                        </div>

                        <div class="editor-window">
                            <pre class="code-scroll-area">
                                <code>{move || model.with(|m| m.result_text.clone().unwrap_or_default())}</code>
                            </pre>
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}
