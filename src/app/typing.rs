use std::time::Duration;

use leptos::prelude::*;

use super::hooks::use_typing;

#[component]
pub fn TypingText(
    #[prop(into)] text: Signal<String>,
    #[prop(optional)] delay: Duration,
) -> impl IntoView {
    let (revealed, cursor) = use_typing(text, delay);
    view! {
        <span>
            {move || revealed.get()}
            <span class=move || {
                if cursor.get() {
                    "typing-cursor text-primary opacity-100"
                } else {
                    "typing-cursor text-primary opacity-0"
                }
            }>"|"</span>
        </span>
    }
}
