use leptos::prelude::*;

use crate::content::PORTFOLIO;

#[component]
pub fn Hero() -> impl IntoView {
    let profile = &PORTFOLIO.profile;
    view! {
        <section class="py-20 bg-blue-600 text-white">
            <div class="container mx-auto px-4 text-center">
                <h1 class="text-4xl md:text-5xl font-bold mb-4">{profile.name.as_str()}</h1>
                <p class="text-xl mb-8">{profile.headline.as_str()}</p>
                <div class="flex justify-center gap-4">
                    <a
                        href=profile.linkedin.as_str()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center gap-2 text-white hover:text-blue-100 transition-colors"
                        aria-label="LinkedIn Profile"
                    >
                        <span>"LinkedIn"</span>
                        <span aria-hidden="true">"↗"</span>
                    </a>
                </div>
            </div>
        </section>
    }
}
