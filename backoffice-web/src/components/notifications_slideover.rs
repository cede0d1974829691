use i18nrs::yew::use_translation;
use yew::prelude::*;

use crate::hooks::use_dashboard;

/// Right-hand drawer toggled with `n` or the bell button.
#[function_component(NotificationsSlideover)]
pub fn notifications_slideover() -> Html {
    let (i18n, ..) = use_translation();
    let dashboard = use_dashboard();
    let close = {
        let set_open = dashboard.set_notifications_open.clone();
        Callback::from(move |_| set_open.emit(false))
    };

    html! {
        <div class={classes!("drawer", "drawer-end", "z-40", dashboard.notifications_open.then_some("drawer-open"))}>
            <input type="checkbox" class="drawer-toggle" checked={dashboard.notifications_open} readonly=true />
            <div class="drawer-side">
                <label class="drawer-overlay" onclick={close.clone()}></label>
                <aside class="bg-base-200 min-h-full w-80 p-4">
                    <div class="flex items-center justify-between">
                        <h2 class="text-lg font-semibold">{ i18n.t("notifications.title") }</h2>
                        <button class="btn btn-ghost btn-sm btn-circle" onclick={close}>
                            <i class="fa-solid fa-xmark"></i>
                        </button>
                    </div>
                    <p class="mt-4 text-sm text-base-content/70">{ i18n.t("notifications.empty") }</p>
                </aside>
            </div>
        </div>
    }
}
