use leptos::prelude::*;

use crate::app::ActiveView;
use crate::shared::icons::icon;

#[component]
pub fn Sidebar(active: RwSignal<ActiveView>) -> impl IntoView {
    view! {
        <nav class="sidebar">
            {ActiveView::all()
                .into_iter()
                .map(|view| {
                    view! {
                        <button
                            class="sidebar__item"
                            class=("sidebar__item--active", move || active.get() == view)
                            on:click=move |_| active.set(view)
                        >
                            {icon(view.icon_name())}
                            <span>{view.label()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
