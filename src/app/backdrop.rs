use leptos::prelude::*;

struct Blob {
    class: &'static str,
    colour: &'static str,
    position: &'static str,
}

const BLOBS: [Blob; 3] = [
    Blob {
        class: "floating-blob w-[500px] h-[500px] opacity-20 blur-[120px]",
        colour: "#00FF41",
        position: "top: 10%; left: 10%",
    },
    Blob {
        class: "floating-blob-2 w-[600px] h-[600px] opacity-15 blur-[150px]",
        colour: "#00F3FF",
        position: "top: 50%; right: 5%",
    },
    Blob {
        class: "floating-blob-3 w-[400px] h-[400px] opacity-20 blur-[100px]",
        colour: "#A855F7",
        position: "bottom: 10%; left: 30%",
    },
];

/// Blurred gradient blobs drifting behind the page. Purely decorative.
#[component]
pub fn FloatingBlobs() -> impl IntoView {
    view! {
        <div class="fixed inset-0 overflow-hidden pointer-events-none z-0" aria-hidden="true">
            {BLOBS
                .iter()
                .map(|blob| {
                    view! {
                        <div
                            class=format!("absolute rounded-full {}", blob.class)
                            style=format!(
                                "background: radial-gradient(circle, {} 0%, transparent 70%); {}",
                                blob.colour,
                                blob.position,
                            )
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}
