use leptos::prelude::*;

use super::Frame;

struct StoreScene {
    /// Left edge of each product card inside the browser frame.
    product_xs: &'static [i32],
    price_color: &'static str,
    button_color: &'static str,
    checkout_color: &'static str,
    /// (width, fill-opacity) of the line items in the cart panel.
    cart_lines: &'static [(i32, &'static str)],
}

const STORE: StoreScene = StoreScene {
    product_xs: &[32, 106, 180],
    price_color: "#34d399",
    button_color: "#38bdf8",
    checkout_color: "#34d399",
    cart_lines: &[(88, "0.25"), (60, "0.15"), (72, "0.15"), (50, "0.15")],
};

const TRAFFIC_LIGHTS: [(i32, &str); 3] = [(36, "#ff5f57"), (50, "#febc2e"), (64, "#28c840")];

#[component]
fn ProductCard(x: i32, price_color: &'static str, button_color: &'static str) -> impl IntoView {
    view! {
        <g>
            <rect x=x y="52" width="62" height="84" rx="5" fill="white" fill-opacity="0.13" />
            <rect x=x y="52" width="62" height="42" rx="5" fill="white" fill-opacity="0.1" />
            <rect x={x + 18} y="62" width="26" height="22" rx="3" fill="white" fill-opacity="0.25" />
            <rect x={x + 8} y="100" width="46" height="7" rx="3" fill="white" fill-opacity="0.4" />
            <rect x={x + 8} y="112" width="28" height="6" rx="3" fill=price_color fill-opacity="0.85" />
            <rect x={x + 8} y="124" width="46" height="8" rx="4" fill=button_color fill-opacity="0.6" />
        </g>
    }
}

#[component]
fn CartPanel() -> impl IntoView {
    view! {
        <g>
            <rect x="268" y="18" width="112" height="156" rx="8" fill="white" fill-opacity="0.1" />
            <text x="324" y="46" text-anchor="middle" font-size="22" fill="white">
                "🛒"
            </text>
            {STORE
                .cart_lines
                .iter()
                .enumerate()
                .map(|(i, &(width, opacity))| {
                    view! {
                        <rect
                            x="280"
                            y={56 + 12 * i as i32}
                            width=width
                            height="6"
                            rx="3"
                            fill="white"
                            fill-opacity=opacity
                        />
                    }
                })
                .collect_view()}
            <rect x="280" y="110" width="88" height="1" rx="1" fill="white" fill-opacity="0.15" />
            <rect x="280" y="118" width="88" height="6" rx="3" fill="white" fill-opacity="0.3" />
            <rect x="280" y="140" width="88" height="26" rx="6" fill=STORE.checkout_color fill-opacity="0.9" />
            <text
                x="324"
                y="158"
                text-anchor="middle"
                font-size="10"
                fill="white"
                font-weight="bold"
                font-family="sans-serif"
            >
                "CHECKOUT →"
            </text>
        </g>
    }
}

/// A storefront browser window with product cards and a cart panel.
#[component]
pub fn StorefrontArt() -> impl IntoView {
    view! {
        <Frame gradient_id="ec1" from="#1e40af" to="#0891b2" caption="E-COMMERCE PLATFORM">
            <circle cx="350" cy="30" r="60" fill="white" fill-opacity="0.04" />
            <circle cx="60" cy="160" r="50" fill="white" fill-opacity="0.04" />
            <rect x="20" y="18" width="230" height="156" rx="8" fill="white" fill-opacity="0.1" />
            <rect x="20" y="18" width="230" height="24" rx="8" fill="white" fill-opacity="0.18" />
            {TRAFFIC_LIGHTS
                .into_iter()
                .map(|(cx, color)| view! { <circle cx=cx cy="30" r="4" fill=color /> })
                .collect_view()}
            <rect x="80" y="24" width="120" height="12" rx="6" fill="white" fill-opacity="0.15" />
            {STORE
                .product_xs
                .iter()
                .map(|&x| {
                    view! {
                        <ProductCard
                            x
                            price_color=STORE.price_color
                            button_color=STORE.button_color
                        />
                    }
                })
                .collect_view()}
            <CartPanel />
        </Frame>
    }
}
