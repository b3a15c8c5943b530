use leptos::{either::Either, prelude::*};

use super::Frame;

struct Column {
    x: i32,
    label: &'static str,
    color: &'static str,
    /// (title, done)
    items: &'static [(&'static str, bool)],
}

const COLUMNS: [Column; 3] = [
    Column {
        x: 16,
        label: "TO DO",
        color: "#f87171",
        items: &[("Design login", false), ("API docs", false), ("DB schema", false)],
    },
    Column {
        x: 148,
        label: "IN PROGRESS",
        color: "#fbbf24",
        items: &[("Auth module", false), ("Dashboard UI", false)],
    },
    Column {
        x: 280,
        label: "DONE",
        color: "#34d399",
        items: &[
            ("Project setup", true),
            ("Wireframes", true),
            ("Tech stack", true),
            ("Repo init", true),
        ],
    },
];

const CARD_TOP: i32 = 52;
const CARD_PITCH: i32 = 30;
const DONE_COLOR: &str = "#34d399";

#[component]
fn Card(x: i32, row: usize, done: bool, accent: &'static str) -> impl IntoView {
    let y = CARD_TOP + CARD_PITCH * row as i32;
    let (bar_x, bar_width, bar_opacity) = if done { (30, 60, "0.25") } else { (28, 65, "0.45") };
    let marker = if done {
        Either::Left(view! {
            <text x={x + 18} y={y + 16} font-size="11" fill=DONE_COLOR>
                "✓"
            </text>
        })
    } else {
        Either::Right(view! {
            <rect x={x + 14} y={y + 8} width="8" height="8" rx="2" fill="white" fill-opacity="0.3" />
        })
    };

    view! {
        <g>
            <rect
                x={x + 8}
                y=y
                width="102"
                height="24"
                rx="5"
                fill="white"
                fill-opacity={if done { "0.16" } else { "0.1" }}
            />
            {marker}
            <rect
                x={x + bar_x}
                y={y + 7}
                width=bar_width
                height="5"
                rx="2"
                fill="white"
                fill-opacity=bar_opacity
            />
            <rect x={x + 14} y={y + 15} width="24" height="3" rx="2" fill=accent fill-opacity="0.6" />
        </g>
    }
}

#[component]
fn BoardColumn(column: &'static Column) -> impl IntoView {
    let x = column.x;
    view! {
        <g>
            <rect x=x y="16" width="118" height="160" rx="8" fill="white" fill-opacity="0.08" />
            <rect x=x y="16" width="118" height="28" rx="8" fill="white" fill-opacity="0.14" />
            <circle cx={x + 14} cy="30" r="5" fill=column.color fill-opacity="0.8" />
            <text
                x={x + 26}
                y="34"
                fill="white"
                fill-opacity="0.85"
                font-size="9"
                font-weight="bold"
                font-family="monospace"
            >
                {column.label}
            </text>
            {column
                .items
                .iter()
                .enumerate()
                .map(|(row, &(_, done))| view! { <Card x row done accent=column.color /> })
                .collect_view()}
        </g>
    }
}

/// A three-column kanban board.
#[component]
pub fn TaskBoardArt() -> impl IntoView {
    view! {
        <Frame gradient_id="tm1" from="#4f46e5" to="#7c3aed" caption="TASK MANAGEMENT APP">
            <circle cx="370" cy="20" r="70" fill="white" fill-opacity="0.04" />
            <circle cx="30" cy="175" r="55" fill="white" fill-opacity="0.04" />
            {COLUMNS.iter().map(|column| view! { <BoardColumn column /> }).collect_view()}
        </Frame>
    }
}
