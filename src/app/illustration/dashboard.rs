use leptos::prelude::*;

use super::Frame;

struct StatCard {
    x: i32,
    icon: &'static str,
    label: &'static str,
    value: &'static str,
    color: &'static str,
}

struct DonutSegment {
    color: &'static str,
    label: &'static str,
    dash: i32,
    offset: i32,
}

struct DashboardScene {
    stats: &'static [StatCard],
    /// Chart x positions shared by both series.
    xs: &'static [i32],
    primary: &'static [i32],
    secondary: &'static [i32],
    series_colors: (&'static str, &'static str),
    grid_ys: &'static [i32],
    segments: &'static [DonutSegment],
    share: &'static str,
}

const DASHBOARD: DashboardScene = DashboardScene {
    stats: &[
        StatCard {
            x: 14,
            icon: "👥",
            label: "FOLLOWERS",
            value: "24.5K",
            color: "#38bdf8",
        },
        StatCard {
            x: 114,
            icon: "❤️",
            label: "LIKES",
            value: "8.2K",
            color: "#f472b6",
        },
        StatCard {
            x: 214,
            icon: "📈",
            label: "REACH",
            value: "142K",
            color: "#34d399",
        },
    ],
    xs: &[22, 62, 102, 142, 182, 222, 258],
    primary: &[152, 132, 140, 112, 122, 96, 106],
    secondary: &[158, 148, 154, 136, 144, 122, 130],
    series_colors: ("#38bdf8", "#f472b6"),
    grid_ys: &[100, 116, 132, 148],
    segments: &[
        DonutSegment {
            color: "#38bdf8",
            label: "Twitter",
            dash: 72,
            offset: 39,
        },
        DonutSegment {
            color: "#f472b6",
            label: "Instagram",
            dash: 46,
            offset: -33,
        },
        DonutSegment {
            color: "#34d399",
            label: "LinkedIn",
            dash: 36,
            offset: -79,
        },
    ],
    share: "57%",
};

const BACKGROUND: &str = "#0f172a";
const DONUT_CX: i32 = 334;
const DONUT_CY: i32 = 108;
const DONUT_R: i32 = 36;
// rounded circumference of the donut ring
const DONUT_TRACK: i32 = 154;

fn points(xs: &[i32], ys: &[i32]) -> String {
    xs.iter()
        .zip(ys)
        .map(|(x, y)| format!("{x},{y}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
fn Stat(card: &'static StatCard) -> impl IntoView {
    let x = card.x;
    view! {
        <g>
            <rect x=x y="12" width="88" height="56" rx="7" fill="white" fill-opacity="0.07" />
            <text x={x + 12} y="36" font-size="16">
                {card.icon}
            </text>
            <text
                x={x + 44}
                y="31"
                font-size="7"
                fill=card.color
                font-family="monospace"
                font-weight="bold"
            >
                {card.label}
            </text>
            <text x={x + 44} y="50" font-size="15" fill="white" font-weight="bold">
                {card.value}
            </text>
        </g>
    }
}

#[component]
fn TrendChart() -> impl IntoView {
    let (primary, secondary) = DASHBOARD.series_colors;
    let (left, right) = match (DASHBOARD.xs.first(), DASHBOARD.xs.last()) {
        (Some(&l), Some(&r)) => (l, r),
        _ => (0, 0),
    };

    view! {
        <g>
            <rect x="14" y="78" width="252" height="86" rx="7" fill="white" fill-opacity="0.05" />
            <text x="24" y="92" fill="white" fill-opacity="0.45" font-size="8" font-family="monospace">
                "ENGAGEMENT TREND"
            </text>
            {DASHBOARD
                .grid_ys
                .iter()
                .map(|&y| {
                    view! {
                        <line
                            x1=left
                            y1=y
                            x2=right
                            y2=y
                            stroke="white"
                            stroke-opacity="0.06"
                            stroke-width="1"
                        />
                    }
                })
                .collect_view()}
            <polyline
                points=points(DASHBOARD.xs, DASHBOARD.primary)
                stroke=primary
                stroke-width="2.5"
                fill="none"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
            <polyline
                points=points(DASHBOARD.xs, DASHBOARD.secondary)
                stroke=secondary
                stroke-width="2"
                fill="none"
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-dasharray="5 3"
            />
            {DASHBOARD
                .xs
                .iter()
                .zip(DASHBOARD.primary)
                .map(|(&cx, &cy)| view! { <circle cx=cx cy=cy r="3.5" fill=primary /> })
                .collect_view()}
        </g>
    }
}

#[component]
fn ShareDonut() -> impl IntoView {
    view! {
        <g>
            <circle cx=DONUT_CX cy=DONUT_CY r="46" fill="white" fill-opacity="0.05" />
            <circle
                cx=DONUT_CX
                cy=DONUT_CY
                r=DONUT_R
                fill="none"
                stroke=BACKGROUND
                stroke-width="18"
            />
            {DASHBOARD
                .segments
                .iter()
                .map(|seg| {
                    view! {
                        <circle
                            cx=DONUT_CX
                            cy=DONUT_CY
                            r=DONUT_R
                            fill="none"
                            stroke=seg.color
                            stroke-width="18"
                            stroke-dasharray=format!("{} {DONUT_TRACK}", seg.dash)
                            stroke-dashoffset=seg.offset
                            stroke-linecap="round"
                        />
                    }
                })
                .collect_view()}
            <text
                x=DONUT_CX
                y={DONUT_CY + 5}
                text-anchor="middle"
                font-size="14"
                fill="white"
                font-weight="bold"
            >
                {DASHBOARD.share}
            </text>
            {DASHBOARD
                .segments
                .iter()
                .enumerate()
                .map(|(i, seg)| {
                    let y = 148 + 14 * i as i32;
                    view! {
                        <circle cx="308" cy=y r="4" fill=seg.color />
                        <text
                            x="316"
                            y={y + 4}
                            fill="white"
                            fill-opacity="0.6"
                            font-size="8"
                            font-family="monospace"
                        >
                            {seg.label}
                        </text>
                    }
                })
                .collect_view()}
        </g>
    }
}

/// An analytics dashboard: stat cards, a trend chart and a share donut.
#[component]
pub fn DashboardArt() -> impl IntoView {
    view! {
        <Frame gradient_id="db1" from=BACKGROUND to="#1e3a5f" caption="SOCIAL MEDIA DASHBOARD">
            <circle cx="380" cy="10" r="80" fill="#38bdf8" fill-opacity="0.04" />
            {DASHBOARD.stats.iter().map(|card| view! { <Stat card /> }).collect_view()}
            <TrendChart />
            <ShareDonut />
        </Frame>
    }
}

#[cfg(test)]
mod tests {
    use super::super::render_to_string;
    use super::*;
    use crate::content::Illustration;

    #[test]
    fn test_series_points() {
        assert_eq!(
            points(DASHBOARD.xs, DASHBOARD.primary),
            "22,152 62,132 102,140 142,112 182,122 222,96 258,106"
        );
        assert_eq!(
            points(DASHBOARD.xs, DASHBOARD.secondary),
            "22,158 62,148 102,154 142,136 182,144 222,122 258,130"
        );
    }

    #[test]
    fn test_one_marker_per_primary_point() {
        let html = render_to_string(Illustration::Dashboard);
        assert_eq!(html.matches(r#"r="3.5""#).count(), DASHBOARD.xs.len());
    }

    #[test]
    fn test_stat_values_and_legend() {
        let html = render_to_string(Illustration::Dashboard);
        for v in ["24.5K", "8.2K", "142K", "57%", "Twitter", "Instagram", "LinkedIn"] {
            assert!(html.contains(&format!(">{v}</text>")), "missing {v}");
        }
        assert!(html.contains(r#"stroke-dasharray="46 154" stroke-dashoffset="-33""#));
        assert!(html.contains(r#"stroke-dasharray="5 3""#));
    }
}
