//! Archive Confirm Button Component
//!
//! Archiving asks once more before calling the API. The card stays put until the server
//! accepts the archive, so the button never hides anything by itself.

use leptos::prelude::*;

/// "Archive" that turns into a keep/archive choice on first click
#[component]
pub fn ArchiveConfirmButton(#[prop(into)] on_confirm: Callback<()>) -> impl IntoView {
    let (asking, set_asking) = signal(false);
    // Clicks must not reach the card underneath
    let choose = move |ev: leptos::ev::MouseEvent, archive: bool| {
        ev.stop_propagation();
        set_asking.set(false);
        if archive {
            on_confirm.run(());
        }
    };

    view! {
        <Show
            when=move || asking.get()
            fallback=move || view! {
                <button
                    class="archive-btn"
                    title="Move to archived goals"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(true);
                    }
                >
                    "Archive"
                </button>
            }
        >
            <span class="archive-confirm">
                <span class="archive-confirm-text">"Archive this goal?"</span>
                <button class="confirm-btn" on:click=move |ev| choose(ev, true)>"Archive"</button>
                <button class="cancel-btn" on:click=move |ev| choose(ev, false)>"Keep"</button>
            </span>
        </Show>
    }
}
