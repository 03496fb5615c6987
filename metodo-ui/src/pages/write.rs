//! Write Page
//!
//! Writing assistant: concept development, absurd realities, analysis and
//! free chat against the agent endpoints.

use leptos::*;

use metodo::client::EntryResult;

use crate::api::BrowserStore;
use crate::components::Loading;
use crate::state::global::log_error;
use crate::state::use_global_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Assist {
    Develop,
    Absurd,
    Analyze,
    Chat,
}

impl Assist {
    const ALL: [Assist; 4] = [Assist::Develop, Assist::Absurd, Assist::Analyze, Assist::Chat];

    fn label(&self) -> &'static str {
        match self {
            Assist::Develop => "Desarrollar concepto",
            Assist::Absurd => "Realidades absurdas",
            Assist::Analyze => "Analizar concepto",
            Assist::Chat => "Conversar",
        }
    }

    fn placeholder(&self) -> &'static str {
        match self {
            Assist::Develop | Assist::Analyze => "Un concepto: el gimnasio, las bodas...",
            Assist::Absurd => "Un elemento mecánico: \"siempre está vigilando\"",
            Assist::Chat => "Pregunta lo que quieras sobre tu chiste...",
        }
    }

    async fn run(self, store: &BrowserStore, input: &str, include_library: bool) -> EntryResult<String> {
        match self {
            Assist::Develop => store.develop(input).await,
            Assist::Absurd => store.absurd(input).await,
            Assist::Analyze => store.analyze(input).await,
            Assist::Chat => store.chat(input, include_library).await,
        }
    }
}

#[component]
pub fn Write() -> impl IntoView {
    let state = use_global_state();
    let (mode, set_mode) = create_signal(Assist::Develop);
    let (input, set_input) = create_signal(String::new());
    let (include_library, set_include_library) = create_signal(true);
    let (busy, set_busy) = create_signal(false);
    let reply = create_rw_signal::<Option<Result<String, String>>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = input.get_untracked();
        if text.trim().is_empty() || busy.get_untracked() {
            return;
        }

        set_busy.set(true);
        reply.set(None);
        let store = state.store.clone();
        let assist = mode.get_untracked();
        let library = include_library.get_untracked();
        spawn_local(async move {
            let result = assist.run(&store, text.trim(), library).await;
            if let Err(e) = &result {
                log_error(&format!("Assistant request failed: {}", e));
            }
            reply.set(Some(result.map_err(|e| e.to_string())));
            set_busy.set(false);
        });
    };

    view! {
        <div class="write">
            <div class="assist-modes">
                {Assist::ALL
                    .into_iter()
                    .map(|assist| view! {
                        <button
                            type="button"
                            class="btn btn-ghost"
                            class:active=move || mode.get() == assist
                            on:click=move |_| set_mode.set(assist)
                        >
                            {assist.label()}
                        </button>
                    })
                    .collect_view()}
            </div>

            <form class="card" on:submit=on_submit>
                <textarea
                    class="input textarea"
                    placeholder=move || mode.get().placeholder()
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                />

                <Show when=move || mode.get() == Assist::Chat>
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || include_library.get()
                            on:change=move |ev| set_include_library.set(event_target_checked(&ev))
                        />
                        "Usar mis análisis guardados"
                    </label>
                </Show>

                <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                    "Enviar"
                </button>
            </form>

            {move || {
                if busy.get() {
                    return view! { <Loading /> }.into_view();
                }
                match reply.get() {
                    Some(Ok(text)) => view! { <pre class="card assist-reply">{text}</pre> }.into_view(),
                    Some(Err(_)) => view! {
                        <div class="placeholder placeholder-error">"El asistente no respondió"</div>
                    }.into_view(),
                    None => view! {}.into_view(),
                }
            }}
        </div>
    }
}
