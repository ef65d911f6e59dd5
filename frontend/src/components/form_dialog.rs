//! 后台表单对话框的公共部分
//!
//! `MutationFlow` 是普通结构体：这里把它从信号中复制出来，在异步任务里执行，
//! 完成后用 `settle` 写回。执行期间 `busy` 为 true，表单和列表上的
//! 新建、编辑、删除入口都被锁定。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::admin::{Draft, MutationFlow, Notice};
use crate::auth::AuthContext;
use crate::client::ApiClient;
use crate::web::{FetchTransport, after, confirm};

/// 对话框执行写操作所需的依赖
#[derive(Clone)]
pub struct FlowDeps {
    pub client: ApiClient<FetchTransport>,
    pub auth: AuthContext,
    /// 保存成功后延迟关闭对话框（毫秒）
    pub close_delay_ms: u32,
    /// 刷新对应列表
    pub refetch: Callback<()>,
    /// 把结果提示交给页面级 toast
    pub on_notice: Callback<Notice>,
    /// 有写操作进行中
    pub busy: RwSignal<bool>,
}

pub fn submit_flow<D>(flow: RwSignal<MutationFlow<D>>, open: RwSignal<bool>, deps: FlowDeps)
where
    D: Draft + Send + Sync + 'static,
{
    let busy = deps.busy;
    if busy.get_untracked() {
        return;
    }
    busy.set(true);

    let started = flow.get_untracked();
    let mut working = started.clone();
    spawn_local(async move {
        let FlowDeps {
            client,
            auth,
            close_delay_ms,
            refetch,
            on_notice,
            ..
        } = deps;

        let result = working.submit(&client, || refetch.run(())).await;
        if let Some(notice) = working.notice().cloned() {
            on_notice.run(notice);
        }
        match result {
            Ok(()) => after(close_delay_ms, move || {
                open.try_set(false);
            }),
            Err(e) => auth.check(&e),
        }
        flow.try_update(|f| f.settle(&started, working));
        busy.try_set(false);
    });
}

/// 删除不需要草稿：在空白流程上执行，只把结果提示写回
pub fn delete_record<D>(flow: RwSignal<MutationFlow<D>>, id: String, deps: FlowDeps)
where
    D: Draft + Send + Sync + 'static,
{
    let busy = deps.busy;
    if busy.get_untracked() {
        return;
    }
    busy.set(true);

    spawn_local(async move {
        let FlowDeps {
            client,
            auth,
            refetch,
            on_notice,
            ..
        } = deps;

        let started = MutationFlow::<D>::new();
        let mut outcome = started.clone();
        let result = outcome
            .delete(&id, confirm, &client, || refetch.run(()))
            .await;
        if let Err(e) = &result {
            auth.check(e);
        }
        // 用户取消时什么都不写回
        if !matches!(result, Ok(false)) {
            if let Some(notice) = outcome.notice().cloned() {
                on_notice.run(notice);
            }
            flow.try_update(|f| f.settle(&started, outcome));
        }
        busy.try_set(false);
    });
}

/// 对话框关闭后清空草稿；写操作进行中的由 `settle` 负责
pub fn reset_on_close<D>(
    flow: RwSignal<MutationFlow<D>>,
    open: RwSignal<bool>,
    busy: RwSignal<bool>,
) where
    D: Draft + Send + Sync + 'static,
{
    Effect::new(move |_| {
        if !open.get() && !busy.get_untracked() {
            flow.update(|f| f.reset());
        }
    });
}

/// 模态框外壳，`open` 控制显示
#[component]
pub fn FormDialog(
    open: RwSignal<bool>,
    #[prop(into)] title: Signal<String>,
    children: Children,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| open.set(false)>
            <div class="modal-box max-w-2xl">
                <h3 class="font-bold text-lg text-[#1e3a5f] mb-4">{move || title.get()}</h3>
                {children()}
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}

/// 对话框内的错误提示
#[component]
pub fn InlineError<D>(flow: RwSignal<MutationFlow<D>>) -> impl IntoView
where
    D: Draft + Send + Sync + 'static,
{
    let message = move || {
        flow.with(|f| {
            f.notice()
                .filter(|n| n.is_error())
                .map(|n| n.message().to_string())
        })
    };

    view! {
        <Show when=move || message().is_some()>
            <div role="alert" class="alert alert-error text-sm py-2 mb-4">
                <span>{move || message().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}
