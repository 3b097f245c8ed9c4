use leptos::prelude::*;

use crate::content::SectionId;

#[component]
pub fn SectionHeading(
    section: SectionId,
    #[prop(default = "mb-12")] spacing: &'static str,
) -> impl IntoView {
    view! {
        <h2 class=format!("text-4xl md:text-5xl font-bold {spacing} text-center")>
            <span class="text-primary font-mono text-xl block mb-2">{section.ordinal()}</span>
            <span class="text-gradient">{section.heading()}</span>
        </h2>
    }
}

/// Terminal prompt line, e.g. `$ skills --list --all`.
#[component]
pub fn Prompt(command: &'static str, #[prop(optional)] extra: &'static str) -> impl IntoView {
    view! {
        <div class=format!("font-mono text-sm text-muted-foreground {extra}")>
            <span class="text-primary">"$"</span>
            " "
            {command}
        </div>
    }
}
