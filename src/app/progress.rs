use leptos::prelude::*;

use super::hooks::use_scroll_progress;

#[component]
pub fn ScrollProgress() -> impl IntoView {
    let progress = use_scroll_progress();
    view! {
        <div class="fixed right-4 top-1/2 -translate-y-1/2 z-50 hidden md:block">
            <div class="w-1 h-32 bg-muted/30 rounded-full overflow-hidden">
                <div
                    class="w-full bg-gradient-to-b from-primary to-secondary rounded-full transition-all duration-150"
                    style=move || format!("height: {:.2}%", progress.get())
                ></div>
            </div>
        </div>
    }
}
