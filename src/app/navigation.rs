use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::navigation::Section;

fn scroll_to_section(section: Section) {
    let id = section.anchor_id();
    let el = if let Some(el) = document().get_element_by_id(id) {
        el
    } else {
        log::warn!("scroll target #{id} not found");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <section class="py-8 bg-white border-b">
            <div class="container mx-auto px-4">
                <nav class="flex flex-wrap justify-center gap-4">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    type="button"
                                    data-target=section.anchor_id()
                                    on:click=move |_| {
                                        log::debug!("navigating to #{}", section.anchor_id());
                                        scroll_to_section(section);
                                    }
                                    class="bg-blue-600 text-white px-6 py-2 rounded-md font-medium hover:bg-blue-700 transition-colors"
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </section>
    }
}

#[component]
pub fn BackToTop() -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=move |_| scroll_to_top()
            class="fixed bottom-8 right-8 bg-blue-600 text-white p-3 rounded-full shadow-lg hover:bg-blue-700 transition-colors z-50"
            aria-label="Back to top"
        >
            "↑"
        </button>
    }
}
