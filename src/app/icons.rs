use leptos::prelude::*;

/// Line icons drawn on a 24x24 grid with `currentColor` strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Menu,
    Close,
    ArrowDown,
    Mail,
    Code,
    Palette,
    Zap,
    ExternalLink,
    MapPin,
    Send,
    Heart,
}

fn shapes(icon: Icon) -> AnyView {
    match icon {
        Icon::Menu => view! {
            <line x1="4" x2="20" y1="12" y2="12" />
            <line x1="4" x2="20" y1="6" y2="6" />
            <line x1="4" x2="20" y1="18" y2="18" />
        }
        .into_any(),
        Icon::Close => view! {
            <path d="M18 6 6 18" />
            <path d="m6 6 12 12" />
        }
        .into_any(),
        Icon::ArrowDown => view! {
            <path d="M12 5v14" />
            <path d="m19 12-7 7-7-7" />
        }
        .into_any(),
        Icon::Mail => view! {
            <rect width="20" height="16" x="2" y="4" rx="2" />
            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
        }
        .into_any(),
        Icon::Code => view! {
            <polyline points="16 18 22 12 16 6" />
            <polyline points="8 6 2 12 8 18" />
        }
        .into_any(),
        Icon::Palette => view! {
            <circle cx="13.5" cy="6.5" r=".5" fill="currentColor" />
            <circle cx="17.5" cy="10.5" r=".5" fill="currentColor" />
            <circle cx="8.5" cy="7.5" r=".5" fill="currentColor" />
            <circle cx="6.5" cy="12.5" r=".5" fill="currentColor" />
            <path d="M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.926 0 1.648-.746 1.648-1.688 0-.437-.18-.835-.437-1.125-.29-.289-.438-.652-.438-1.125a1.64 1.64 0 0 1 1.668-1.668h1.996c3.051 0 5.555-2.503 5.555-5.554C21.965 6.012 17.461 2 12 2z" />
        }
        .into_any(),
        Icon::Zap => view! { <polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2" /> }.into_any(),
        Icon::ExternalLink => view! {
            <path d="M15 3h6v6" />
            <path d="M10 14 21 3" />
            <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" />
        }
        .into_any(),
        Icon::MapPin => view! {
            <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" />
            <circle cx="12" cy="10" r="3" />
        }
        .into_any(),
        Icon::Send => view! {
            <path d="m22 2-7 20-4-9-9-4Z" />
            <path d="M22 2 11 13" />
        }
        .into_any(),
        Icon::Heart => view! {
            <path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" />
        }
        .into_any(),
    }
}

#[component]
pub fn Glyph(
    icon: Icon,
    #[prop(default = 24)] size: u32,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] filled: bool,
) -> impl IntoView {
    view! {
        <svg
            class=format!("inline-flex shrink-0 {class}")
            width=size
            height=size
            viewBox="0 0 24 24"
            fill={if filled { "currentColor" } else { "none" }}
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {shapes(icon)}
        </svg>
    }
}

/// Brand marks come from the devicon font loaded in the shell.
#[component]
pub fn BrandIcon(name: &'static str, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <i class=format!("devicon-{name}-plain {class}") aria-hidden="true"></i> }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(icon: Icon, filled: bool) -> String {
        Owner::new().with(|| view! { <Glyph icon size=16 filled /> }.to_html())
    }

    #[test]
    fn test_glyph_is_inline_svg() {
        let html = render(Icon::Menu, false);
        assert!(html.starts_with("<svg"));
        assert!(html.contains(r#"width="16" height="16" viewBox="0 0 24 24" fill="none""#));
        assert_eq!(html.matches("<line").count(), 3);
    }

    #[test]
    fn test_filled_glyph_uses_current_color() {
        let html = render(Icon::Heart, true);
        assert!(html.contains(r#"fill="currentColor" stroke="currentColor""#));
    }
}
