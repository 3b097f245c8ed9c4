use leptos::prelude::*;

use crate::{config::HERO_TAGLINE_DELAY, content::PROFILE, motion::reveal_class};

use super::{hooks::use_mount_reveal, typing::TypingText};

#[component]
pub fn HeroSection() -> impl IntoView {
    let visible = use_mount_reveal();
    view! {
        <section id="hero" class="min-h-screen flex items-center justify-center relative px-4">
            <div class=move || {
                reveal_class(
                    "w-full max-w-6xl grid grid-cols-1 md:grid-cols-2 gap-8 lg:gap-12 items-center transition-all duration-1000",
                    visible.get(),
                )
            }>
                <div class="flex flex-col justify-center">
                    <div class="font-mono text-primary mb-6 text-sm md:text-base">
                        <span class="text-muted-foreground">"$"</span>
                        " "
                        {format!("{} --status", PROFILE.handle)}
                    </div>
                    <h1 class="text-4xl md:text-6xl lg:text-7xl font-bold mb-4 tracking-tight">
                        <span class="text-gradient">{PROFILE.first_name.to_uppercase()}</span>
                        " "
                        <span class="text-foreground">{PROFILE.last_name.to_uppercase()}</span>
                    </h1>
                    <div class="text-lg md:text-xl text-muted-foreground mb-8 h-8">
                        <TypingText text=PROFILE.tagline.to_string() delay=HERO_TAGLINE_DELAY />
                    </div>
                    <div class="font-mono text-sm text-muted-foreground mb-10 space-y-1">
                        <StatusLine label="status" value=PROFILE.status />
                        <StatusLine label="location" value=PROFILE.location />
                    </div>
                    <div class="flex flex-col sm:flex-row gap-4 items-start sm:items-center">
                        <a
                            href=PROFILE.mailto()
                            class="group relative px-8 py-3 font-semibold text-lg text-primary border-2 border-primary rounded-full overflow-hidden transition-all duration-300 hover:shadow-lg hover:shadow-primary/50 hover:scale-105 active:scale-95"
                        >
                            <span class="relative z-10 flex items-center gap-2">
                                <i class="icon-mail" aria-hidden="true"></i>
                                "Hire Me"
                            </span>
                            <div class="absolute inset-0 bg-primary/0 group-hover:bg-primary/10 transition-colors duration-300"></div>
                        </a>
                        <a
                            href=PROFILE.resume
                            class="group relative px-8 py-3 font-semibold text-lg text-secondary border-2 border-secondary rounded-full overflow-hidden transition-all duration-300 hover:shadow-lg hover:shadow-secondary/50 hover:scale-105 active:scale-95"
                        >
                            <span class="relative z-10 flex items-center gap-2">
                                <i class="icon-download" aria-hidden="true"></i>
                                "Download Resume"
                            </span>
                            <div class="absolute inset-0 bg-secondary/0 group-hover:bg-secondary/10 transition-colors duration-300"></div>
                        </a>
                    </div>
                </div>
                <div class="flex justify-center items-center w-full px-4 sm:px-0">
                    <div class="w-full max-w-sm">
                        <img src=PROFILE.image alt=PROFILE.image_alt class="w-full h-auto" />
                    </div>
                </div>
                <div class="absolute -bottom-[80px] left-1/2 -translate-x-1/2 scroll-indicator">
                    <i class="icon-chevron-down text-primary text-3xl" aria-hidden="true"></i>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatusLine(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <p>
            <span class="text-primary">">"</span>
            {format!(" {label}: ")}
            <span class="text-secondary">{value}</span>
        </p>
    }
}
