use leptos::prelude::*;

use crate::content::PROFILE;

const BUILD_TIME: &str = env!("BUILD_TIME");
const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 px-4 border-t border-border/50">
            <div class="container mx-auto text-center">
                <p class="text-muted-foreground text-sm font-mono">
                    <span class="text-primary">"<"</span>
                    {format!("Designed & Built by {}", PROFILE.full_name())}
                    <span class="text-primary">" />"</span>
                </p>
                <p class="text-muted-foreground/50 text-xs mt-2">
                    "© " <time datetime=BUILD_TIME>{BUILD_YEAR}</time> " All rights reserved."
                </p>
            </div>
        </footer>
    }
}
