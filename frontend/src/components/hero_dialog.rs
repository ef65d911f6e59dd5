use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlInputElement;

use crate::admin::{HeroDraft, MutationFlow};
use crate::components::form_dialog::{
    FlowDeps, FormDialog, InlineError, reset_on_close, submit_flow,
};
use crate::web::files::take_selected;

#[component]
pub fn HeroDialog(
    flow: RwSignal<MutationFlow<HeroDraft>>,
    open: RwSignal<bool>,
    deps: FlowDeps,
) -> impl IntoView {
    let busy = deps.busy;
    let file_error = RwSignal::new(Option::<String>::None);

    let on_file = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        file_error.set(None);
        spawn_local(async move {
            let staged = match take_selected(&input).await {
                Ok(files) => match files.into_iter().next() {
                    Some(file) => flow.try_update(|f| f.draft.stage(file)),
                    None => return,
                },
                Err(e) => Some(Err(e)),
            };
            if let Some(Err(e)) = staged {
                file_error.try_set(Some(e.to_string()));
            }
        });
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        submit_flow(flow, open, deps.clone());
    };

    reset_on_close(flow, open, busy);

    let title = Signal::derive(move || {
        if flow.with(|f| f.is_editing()) {
            "Edit Hero Slide".to_string()
        } else {
            "Add Hero Slide".to_string()
        }
    });

    // 新选的文件还没有 URL，只显示文件名
    let preview = move || flow.with(|f| (f.draft.image.clone(), f.draft.staged.as_ref().map(|s| s.name.clone())));

    view! {
        <FormDialog open=open title=title>
            <InlineError flow=flow />
            <form on:submit=on_submit>
                // 保存期间锁定全部输入
                <fieldset class="space-y-4" disabled=move || busy.get()>
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text font-bold">"Image"</span>
                        </label>
                        {move || match preview() {
                            (_, Some(name)) => view! {
                                <div class="alert alert-info text-sm py-2">
                                    <span>"Selected: " {name}</span>
                                </div>
                            }
                            .into_any(),
                            (url, None) if !url.is_empty() => view! {
                                <img src=url class="h-40 w-full rounded-lg object-cover" />
                            }
                            .into_any(),
                            _ => view! {
                                <p class="text-sm text-base-content/60">"No image selected"</p>
                            }
                            .into_any(),
                        }}
                        <input
                            type="file"
                            accept="image/*"
                            class="file-input file-input-bordered w-full mt-2"
                            on:change=on_file
                        />
                        <Show when=move || file_error.get().is_some()>
                            <label class="label">
                                <span class="label-text-alt text-error">
                                    {move || file_error.get().unwrap_or_default()}
                                </span>
                            </label>
                        </Show>
                    </div>

                    <div class="form-control">
                        <label class="label" for="hero_label">
                            <span class="label-text">"Label (optional)"</span>
                        </label>
                        <input
                            id="hero_label"
                            type="text"
                            class="input input-bordered w-full"
                            prop:value=move || flow.with(|f| f.draft.label.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                flow.update(|f| f.draft.label = value);
                            }
                        />
                    </div>

                    <div class="form-control">
                        <label class="label" for="hero_order">
                            <span class="label-text">"Order"</span>
                        </label>
                        <input
                            id="hero_order"
                            type="number"
                            class="input input-bordered w-full"
                            prop:value=move || flow.with(|f| f.draft.order.to_string())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                flow.update(|f| f.draft.set_order(&value));
                            }
                        />
                        <label class="label">
                            <span class="label-text-alt text-base-content/50">"Lower numbers appear first"</span>
                        </label>
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="btn bg-[#1e3a5f] hover:bg-[#15233f] text-white"
                            disabled=move || busy.get() || !flow.with(|f| f.can_submit())
                        >
                            {move || match (busy.get(), flow.with(|f| f.is_editing())) {
                                (true, _) => view! { <span class="loading loading-spinner"></span> "Saving..." }.into_any(),
                                (false, true) => "Update".into_any(),
                                (false, false) => "Create".into_any(),
                            }}
                        </button>
                    </div>
                </fieldset>
            </form>
        </FormDialog>
    }
}
