//! Project preview art.
//!
//! Each scene is a literal table drawn inside a `0 0 400 192` SVG, so the
//! same table always renders the same markup.

mod dashboard;
mod storefront;
mod task_board;

use leptos::{either::EitherOf3, prelude::*};

use crate::content::Illustration;

use dashboard::DashboardArt;
use storefront::StorefrontArt;
use task_board::TaskBoardArt;

#[component]
pub fn ProjectArt(illustration: Illustration) -> impl IntoView {
    match illustration {
        Illustration::Storefront => EitherOf3::A(view! { <StorefrontArt /> }),
        Illustration::TaskBoard => EitherOf3::B(view! { <TaskBoardArt /> }),
        Illustration::Dashboard => EitherOf3::C(view! { <DashboardArt /> }),
    }
}

/// Shared frame: diagonal gradient background, the scene, then the caption
/// band along the bottom edge. Gradient ids must differ per scene since all
/// three end up in the same document.
#[component]
fn Frame(
    gradient_id: &'static str,
    from: &'static str,
    to: &'static str,
    caption: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <svg viewBox="0 0 400 192" class="w-full h-full" aria-label=caption>
            <defs>
                <linearGradient id=gradient_id x1="0%" y1="0%" x2="100%" y2="100%">
                    <stop offset="0%" stop-color=from />
                    <stop offset="100%" stop-color=to />
                </linearGradient>
            </defs>
            <rect x="0" y="0" width="400" height="192" fill=format!("url(#{gradient_id})") />
            {children()}
            <rect x="0" y="172" width="400" height="20" fill="black" fill-opacity="0.2" />
            <text
                x="200"
                y="185"
                text-anchor="middle"
                font-size="10"
                fill="white"
                fill-opacity="0.7"
                font-family="monospace"
                letter-spacing="2"
            >
                {caption}
            </text>
        </svg>
    }
}

#[cfg(test)]
pub(crate) fn render_to_string(illustration: Illustration) -> String {
    Owner::new().with(|| view! { <ProjectArt illustration /> }.to_html())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Illustration; 3] = [
        Illustration::Storefront,
        Illustration::TaskBoard,
        Illustration::Dashboard,
    ];

    #[test]
    fn test_rendering_is_deterministic() {
        for ill in ALL {
            let first = render_to_string(ill);
            for _ in 0..5 {
                assert_eq!(render_to_string(ill), first);
            }
        }
    }

    #[test]
    fn test_fixed_view_box() {
        for ill in ALL {
            let html = render_to_string(ill);
            assert!(html.starts_with("<svg"), "{ill:?} is not an svg root");
            assert_eq!(html.matches(r#"viewBox="0 0 400 192""#).count(), 1);
        }
    }

    #[test]
    fn test_gradient_ids_are_distinct() {
        // all three are inlined into the same document
        for (ill, id) in ALL.into_iter().zip(["ec1", "tm1", "db1"]) {
            let html = render_to_string(ill);
            assert!(html.contains(&format!(r#"<linearGradient id="{id}""#)));
            assert!(html.contains(&format!("url(#{id})")));
        }
    }

    #[test]
    fn test_captions() {
        let captions = [
            "E-COMMERCE PLATFORM",
            "TASK MANAGEMENT APP",
            "SOCIAL MEDIA DASHBOARD",
        ];
        for (ill, caption) in ALL.into_iter().zip(captions) {
            let html = render_to_string(ill);
            assert!(
                html.trim_end_matches("</svg>").ends_with(&format!(">{caption}</text>")),
                "{ill:?} should end with its caption"
            );
        }
    }
}
