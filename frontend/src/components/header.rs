use leptos::*;
use crate::{APP_NAME, APP_TAGLINE};

/// An in-page navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Features", href: "#features" },
    NavLink { label: "How It Works", href: "#how-it-works" },
    NavLink { label: "Security", href: "#security" },
    NavLink { label: "Pricing", href: "#pricing" },
];

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);

    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };

    view! {
        <header>
            <div class="header-left">
                <div class="logo-mark">"🧠"</div>
                <div>
                    <a href="#" class="logo">{APP_NAME}</a>
                    <div class="tagline">{APP_TAGLINE}</div>
                </div>
            </div>

            <nav class="header-nav">
                {NAV_LINKS.iter().map(|link| view! {
                    <a href=link.href class="nav-link">{link.label}</a>
                }).collect_view()}
            </nav>

            <div class="header-right">
                <button class="btn btn-ghost">"Sign In"</button>
                <button class="btn btn-primary">"Get Started"</button>
            </div>

            <button
                class="btn btn-ghost btn-icon menu-toggle"
                aria-label="Toggle menu"
                aria-expanded=move || menu_open.get().to_string()
                on:click=toggle_menu
            >
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>

            <Show when=move || menu_open.get()>
                <nav class="mobile-menu">
                    {NAV_LINKS.iter().map(|link| view! {
                        <a
                            href=link.href
                            class="nav-link"
                            on:click=move |_| set_menu_open.set(false)
                        >
                            {link.label}
                        </a>
                    }).collect_view()}
                    <div class="mobile-actions">
                        <button class="btn btn-ghost">"Sign In"</button>
                        <button class="btn btn-primary">"Get Started"</button>
                    </div>
                </nav>
            </Show>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_are_anchors() {
        assert!(NAV_LINKS.iter().all(|link| link.href.starts_with('#')));
        assert_eq!(NAV_LINKS[0].href, "#features");
    }
}
