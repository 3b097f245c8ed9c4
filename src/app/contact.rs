use leptos::{html, prelude::*};

use crate::{
    config::SECTION_THRESHOLD,
    content::{SectionId, SocialLink, PROFILE, SOCIAL_LINKS},
    motion::reveal_class,
};

use super::{hooks::use_section_visibility, section::SectionHeading};

#[component]
pub fn ContactSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_section_visibility(section_ref, SECTION_THRESHOLD);
    view! {
        <section id=SectionId::Contact.anchor() node_ref=section_ref class="py-20 px-4 relative">
            <div class="container mx-auto max-w-4xl text-center">
                <SectionHeading section=SectionId::Contact spacing="mb-6" />
                <p class="text-xl text-muted-foreground mb-12 max-w-2xl mx-auto">
                    {PROFILE.contact_pitch}
                </p>
                <div class=move || {
                    reveal_class(
                        "flex flex-col md:flex-row gap-6 justify-center items-center transition-all duration-700",
                        visible.get(),
                    )
                }>
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| view! { <SocialCard link=*link /> })
                        .collect_view()}
                </div>
                <div class="mt-16 font-mono text-sm">
                    <p>
                        <span class="text-primary">"$"</span>
                        " "
                        <span class="text-muted-foreground">"echo"</span>
                        " "
                        <span class="text-secondary">"\"Thanks for visiting!\""</span>
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SocialCard(link: SocialLink) -> impl IntoView {
    let (target, rel) = if link.opens_new_tab() {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    };
    view! {
        <a
            href=link.href
            target=target
            rel=rel
            class="glass-card p-6 w-full md:w-auto md:min-w-[200px] card-hover flex flex-col items-center gap-3 group"
        >
            <div class="w-14 h-14 rounded-full bg-muted/50 flex items-center justify-center group-hover:bg-primary/20 transition-colors">
                <i class=format!("{} text-2xl text-primary", link.icon_class())></i>
            </div>
            <span class="text-foreground font-medium">{link.name()}</span>
            <span class="text-muted-foreground text-sm font-mono">{link.label}</span>
        </a>
    }
}
