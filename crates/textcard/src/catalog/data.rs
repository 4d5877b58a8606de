//! Built-in asset tables, in display order.

use super::{BackgroundEntry, FontEntry, TextColorEntry};

pub(super) const FONTS: &[FontEntry] = &[
    FontEntry::new("inter", "Inter", "font-inter font-semibold"),
    FontEntry::new("playfair", "Playfair Display", "font-playfair font-bold"),
    FontEntry::new("bebas", "Bebas Neue", "font-bebas tracking-wide"),
    FontEntry::new("montserrat", "Montserrat", "font-montserrat font-extrabold"),
    FontEntry::new("dm-serif", "DM Serif Display", "font-dm-serif"),
    FontEntry::new("space-mono", "Space Mono", "font-space-mono font-bold"),
    FontEntry::new("caveat", "Caveat", "font-caveat font-semibold"),
    FontEntry::new("lobster", "Lobster", "font-lobster"),
    FontEntry::new("archivo-black", "Archivo Black", "font-archivo-black"),
    FontEntry::new("eb-garamond", "EB Garamond", "font-eb-garamond font-medium italic"),
];

pub(super) const TEXT_COLORS: &[TextColorEntry] = &[
    TextColorEntry {
        label: "White",
        text: "text-white",
        stroke: Some("[--stroke-color:#0a0a0a]"),
        glow: Some("[--glow-color:#ffffff]"),
    },
    TextColorEntry {
        label: "Black",
        text: "text-neutral-950",
        stroke: Some("[--stroke-color:#ffffff]"),
        glow: Some("[--glow-color:#0a0a0a]"),
    },
    TextColorEntry {
        label: "Cream",
        text: "text-amber-50",
        stroke: Some("[--stroke-color:#78350f]"),
        glow: None,
    },
    TextColorEntry {
        label: "Sunflower",
        text: "text-yellow-300",
        stroke: Some("[--stroke-color:#713f12]"),
        glow: Some("[--glow-color:#fde047]"),
    },
    TextColorEntry {
        label: "Coral",
        text: "text-rose-400",
        stroke: None,
        glow: Some("[--glow-color:#fb7185]"),
    },
    TextColorEntry {
        label: "Mint",
        text: "text-emerald-300",
        stroke: None,
        glow: Some("[--glow-color:#6ee7b7]"),
    },
    TextColorEntry {
        label: "Sky",
        text: "text-sky-300",
        stroke: Some("[--stroke-color:#0c4a6e]"),
        glow: Some("[--glow-color:#7dd3fc]"),
    },
    TextColorEntry {
        label: "Lavender",
        text: "text-violet-300",
        stroke: None,
        glow: None,
    },
];

pub(super) const SOLID_BACKGROUNDS: &[BackgroundEntry] = &[
    BackgroundEntry::new("white", "White", "bg-white", &["#ffffff"]),
    BackgroundEntry::new("black", "Black", "bg-black", &["#000000"]),
    BackgroundEntry::new("slate", "Slate", "bg-slate-800", &["#1e293b"]),
    BackgroundEntry::new("rose", "Rose", "bg-rose-500", &["#f43f5e"]),
    BackgroundEntry::new("amber", "Amber", "bg-amber-400", &["#fbbf24"]),
    BackgroundEntry::new("emerald", "Emerald", "bg-emerald-500", &["#10b981"]),
    BackgroundEntry::new("sky", "Sky", "bg-sky-500", &["#0ea5e9"]),
    BackgroundEntry::new("violet", "Violet", "bg-violet-500", &["#8b5cf6"]),
];

pub(super) const GRADIENT_BACKGROUNDS: &[BackgroundEntry] = &[
    BackgroundEntry::new(
        "sunset",
        "Sunset",
        "bg-gradient-to-br from-orange-400 via-rose-500 to-purple-600",
        &["#fb923c", "#f43f5e", "#9333ea"],
    ),
    BackgroundEntry::new(
        "ocean",
        "Ocean",
        "bg-gradient-to-b from-cyan-400 to-blue-700",
        &["#22d3ee", "#1d4ed8"],
    ),
    BackgroundEntry::new(
        "forest",
        "Forest",
        "bg-gradient-to-tr from-emerald-700 to-lime-300",
        &["#047857", "#bef264"],
    ),
    BackgroundEntry::new(
        "candy",
        "Candy",
        "bg-gradient-to-r from-pink-300 via-fuchsia-300 to-sky-300",
        &["#f9a8d4", "#f0abfc", "#7dd3fc"],
    ),
    BackgroundEntry::new(
        "midnight",
        "Midnight",
        "bg-gradient-to-b from-slate-900 via-indigo-950 to-black",
        &["#0f172a", "#1e1b4b", "#000000"],
    ),
    BackgroundEntry::new(
        "peach",
        "Peach",
        "bg-gradient-to-bl from-amber-200 to-orange-400",
        &["#fde68a", "#fb923c"],
    ),
];

pub(super) const MESH_BACKGROUNDS: &[BackgroundEntry] = &[
    BackgroundEntry::new(
        "aurora",
        "Aurora",
        "bg-mesh-aurora",
        &["rgb(56, 189, 248)", "hsl(280, 80%, 60%)", "#22d3ee", "#a3e635"],
    ),
    BackgroundEntry::new(
        "lagoon",
        "Lagoon",
        "bg-mesh-lagoon",
        &["#0891b2", "#14b8a6", "rgba(186, 230, 253, 0.9)"],
    ),
    BackgroundEntry::new(
        "ember",
        "Ember",
        "bg-mesh-ember",
        &["#7f1d1d", "#ea580c", "hsl(45 93% 58%)"],
    ),
    BackgroundEntry::new(
        "dusk",
        "Dusk",
        "bg-mesh-dusk",
        &["#312e81", "#db2777", "#f59e0b", "#1e1b4b"],
    ),
];
