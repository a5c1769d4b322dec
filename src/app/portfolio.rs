use leptos::{ev::KeyboardEvent, prelude::*};
use leptos_use::{use_document, use_event_listener};

use super::gallery::ProjectGallery;
use super::hero::Hero;
use super::modal::ProjectModal;
use super::navigation::{BackToTop, NavBar};
use super::resume::{Certifications, Experience, Skills};
use crate::selection::ProjectSelection;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let (selection, set_selection) = signal(ProjectSelection::NoSelection);

    // Escape closes the modal, matching the close control and backdrop.
    let _ = use_event_listener(
        use_document(),
        leptos::ev::keydown,
        move |ev: KeyboardEvent| {
            if ev.key() == "Escape" && selection.get_untracked().is_visible() {
                log::debug!("closing project details on Escape");
                set_selection.update(ProjectSelection::close);
            }
        },
    );

    view! {
        <main class="min-h-screen bg-white">
            <Hero />
            <NavBar />
            <Skills />
            <ProjectGallery set_selection />
            <Experience />
            <Certifications />
            <BackToTop />
            <ProjectModal selection set_selection />
        </main>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::navigation::Section;

    #[test]
    fn test_page_renders_every_section_without_modal() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <PortfolioPage /> }.to_html());

        let mut cursor = 0;
        for section in Section::ALL {
            let id = format!("id=\"{}\"", section.anchor_id());
            let at = html[cursor..]
                .find(&id)
                .unwrap_or_else(|| panic!("section #{} should render in order", section.anchor_id()));
            cursor += at + id.len();
        }

        assert!(html.contains("John Doe"));
        assert!(html.contains("href=\"https://linkedin.com/in/your-profile\""));
        assert!(html.contains("aria-label=\"Back to top\""));
        assert!(!html.contains("role=\"dialog\""));
    }
}
