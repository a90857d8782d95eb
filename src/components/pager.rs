//! Pager Component
//!
//! Prev/next buttons plus a window of page numbers. Renders nothing for a single page.

use goal_sync::projection::PaginationControls;
use leptos::prelude::*;

#[component]
pub fn Pager(
    #[prop(into)] controls: Signal<Option<PaginationControls>>,
    #[prop(into)] on_page: Callback<u32>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    move || {
        controls.get().map(|controls| {
            let page = controls.page;
            view! {
                <nav class="pager">
                    <button
                        class="page-btn prev"
                        disabled=move || !controls.prev_enabled || busy.get()
                        on:click=move |_| on_page.run(page.saturating_sub(1))
                    >
                        "‹ Prev"
                    </button>
                    {controls.pages.iter().map(|&number| {
                        view! {
                            <button
                                class=if number == page { "page-btn active" } else { "page-btn" }
                                disabled=move || busy.get()
                                on:click=move |_| on_page.run(number)
                            >
                                {number}
                            </button>
                        }
                    }).collect_view()}
                    <button
                        class="page-btn next"
                        disabled=move || !controls.next_enabled || busy.get()
                        on:click=move |_| on_page.run(page + 1)
                    >
                        "Next ›"
                    </button>
                    <span class="page-info">{format!("Page {} of {}", page, controls.total_pages)}</span>
                </nav>
            }
        })
    }
}
