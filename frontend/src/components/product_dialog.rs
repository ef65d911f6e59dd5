use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlInputElement;

use crate::admin::{MutationFlow, ProductDraft};
use crate::components::form_dialog::{
    FlowDeps, FormDialog, InlineError, reset_on_close, submit_flow,
};
use crate::components::icons::{Plus, Trash};
use crate::web::files::take_selected;

#[component]
pub fn ProductDialog(
    flow: RwSignal<MutationFlow<ProductDraft>>,
    open: RwSignal<bool>,
    deps: FlowDeps,
) -> impl IntoView {
    let busy = deps.busy;
    let file_error = RwSignal::new(Option::<String>::None);

    // 规格和用途的临时输入
    let (spec_key, set_spec_key) = signal(String::new());
    let (spec_value, set_spec_value) = signal(String::new());
    let (application, set_application) = signal(String::new());

    let edit = move |f: fn(&mut ProductDraft, String), ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        flow.update(|flow| f(&mut flow.draft, value));
    };

    let add_spec = move |_| {
        let added = flow
            .try_update(|f| f.draft.add_spec(&spec_key.get_untracked(), &spec_value.get_untracked()))
            .unwrap_or(false);
        if added {
            set_spec_key.set(String::new());
            set_spec_value.set(String::new());
        }
    };

    let add_application = move |_| {
        let added = flow
            .try_update(|f| f.draft.add_application(&application.get_untracked()))
            .unwrap_or(false);
        if added {
            set_application.set(String::new());
        }
    };

    let on_files = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        file_error.set(None);
        spawn_local(async move {
            let staged = match take_selected(&input).await {
                Ok(files) => flow.try_update(|f| f.draft.stage(files)),
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
            "Edit Product".to_string()
        } else {
            "Add New Product".to_string()
        }
    });

    view! {
        <FormDialog open=open title=title>
            <InlineError flow=flow />
            <form on:submit=on_submit>
                // 保存期间锁定全部输入
                <fieldset class="space-y-4" disabled=move || busy.get()>
                    <div class="form-control">
                        <label class="label" for="product_name">
                            <span class="label-text">"Product Name"</span>
                        </label>
                        <input
                            id="product_name"
                            type="text"
                            required
                            class="input input-bordered w-full"
                            prop:value=move || flow.with(|f| f.draft.name.clone())
                            on:input=move |ev| edit(|d, v| d.name = v, ev)
                        />
                    </div>

                    <div class="form-control">
                        <label class="label" for="product_description">
                            <span class="label-text">"Description"</span>
                        </label>
                        <textarea
                            id="product_description"
                            rows="4"
                            required
                            class="textarea textarea-bordered w-full"
                            prop:value=move || flow.with(|f| f.draft.description.clone())
                            on:input=move |ev| edit(|d, v| d.description = v, ev)
                        ></textarea>
                    </div>

                    <div class="grid grid-cols-2 gap-4 items-end">
                        <div class="form-control">
                            <label class="label" for="product_category">
                                <span class="label-text">"Category"</span>
                            </label>
                            <input
                                id="product_category"
                                type="text"
                                placeholder="Industrial Mineral"
                                class="input input-bordered w-full"
                                prop:value=move || flow.with(|f| f.draft.category.clone())
                                on:input=move |ev| edit(|d, v| d.category = v, ev)
                            />
                        </div>
                        <label class="label cursor-pointer justify-start gap-3">
                            <input
                                type="checkbox"
                                class="toggle toggle-primary"
                                prop:checked=move || flow.with(|f| f.draft.is_featured)
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    flow.update(|f| f.draft.is_featured = checked);
                                }
                            />
                            <span class="label-text">"Featured Product"</span>
                        </label>
                    </div>

                    // 技术规格
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text font-bold">"Specifications"</span>
                        </label>
                        <div class="join w-full">
                            <input
                                type="text"
                                placeholder="Key (e.g. Purity)"
                                class="input input-bordered join-item w-full"
                                prop:value=spec_key
                                on:input=move |ev| set_spec_key.set(event_target_value(&ev))
                            />
                            <input
                                type="text"
                                placeholder="Value (e.g. 98%)"
                                class="input input-bordered join-item w-full"
                                prop:value=spec_value
                                on:input=move |ev| set_spec_value.set(event_target_value(&ev))
                            />
                            <button type="button" class="btn join-item" on:click=add_spec>
                                <Plus attr:class="h-4 w-4" />
                            </button>
                        </div>
                        <ul class="mt-2 space-y-1">
                            {move || {
                                flow.with(|f| {
                                    f.draft
                                        .specifications
                                        .iter()
                                        .map(|(k, v)| (k.to_string(), v.to_string()))
                                        .collect::<Vec<_>>()
                                })
                                    .into_iter()
                                    .map(|(key, value)| {
                                        let label = key.clone();
                                        view! {
                                            <li class="flex items-center justify-between bg-base-200 rounded-lg px-3 py-1 text-sm">
                                                <span><strong>{key}</strong> ": " {value}</span>
                                                <button
                                                    type="button"
                                                    class="btn btn-ghost btn-xs text-error"
                                                    on:click=move |_| flow.update(|f| f.draft.remove_spec(&label))
                                                >
                                                    <Trash attr:class="h-3 w-3" />
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </div>

                    // 用途
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text font-bold">"Applications"</span>
                        </label>
                        <div class="join w-full">
                            <input
                                type="text"
                                placeholder="e.g. Fertilizers"
                                class="input input-bordered join-item w-full"
                                prop:value=application
                                on:input=move |ev| set_application.set(event_target_value(&ev))
                            />
                            <button type="button" class="btn join-item" on:click=add_application>
                                <Plus attr:class="h-4 w-4" />
                            </button>
                        </div>
                        <div class="mt-2 flex flex-wrap gap-2">
                            {move || {
                                flow.with(|f| f.draft.applications.clone())
                                    .into_iter()
                                    .map(|app| {
                                        let target = app.clone();
                                        view! {
                                            <span class="badge badge-outline gap-1">
                                                {app}
                                                <button
                                                    type="button"
                                                    class="text-error"
                                                    on:click=move |_| flow.update(|f| f.draft.remove_application(&target))
                                                >
                                                    "✕"
                                                </button>
                                            </span>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </div>

                    // 图片：已上传的和待上传的
                    <div class="form-control">
                        <label class="label">
                            <span class="label-text font-bold">"Images"</span>
                        </label>
                        <div class="flex flex-wrap gap-2">
                            {move || {
                                flow.with(|f| f.draft.images.clone())
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, url)| {
                                        view! {
                                            <div class="relative h-20 w-20">
                                                <img src=url class="h-full w-full rounded-lg object-cover" />
                                                <button
                                                    type="button"
                                                    class="btn btn-circle btn-xs btn-error absolute -top-2 -right-2"
                                                    on:click=move |_| {
                                                        flow.update(|f| {
                                                            f.draft.remove_image(index);
                                                        })
                                                    }
                                                >
                                                    "✕"
                                                </button>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                        <ul class="mt-2 space-y-1">
                            {move || {
                                flow.with(|f| {
                                    f.draft.staged.iter().map(|s| s.name.clone()).collect::<Vec<_>>()
                                })
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, name)| {
                                        view! {
                                            <li class="flex items-center justify-between text-sm">
                                                <span class="badge badge-info badge-outline">"pending"</span>
                                                <span class="flex-1 px-2 truncate">{name}</span>
                                                <button
                                                    type="button"
                                                    class="btn btn-ghost btn-xs text-error"
                                                    on:click=move |_| flow.update(|f| f.draft.unstage(index))
                                                >
                                                    <Trash attr:class="h-3 w-3" />
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                        <input
                            type="file"
                            accept="image/*"
                            multiple
                            class="file-input file-input-bordered w-full mt-2"
                            on:change=on_files
                        />
                        <Show when=move || file_error.get().is_some()>
                            <label class="label">
                                <span class="label-text-alt text-error">
                                    {move || file_error.get().unwrap_or_default()}
                                </span>
                            </label>
                        </Show>
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
