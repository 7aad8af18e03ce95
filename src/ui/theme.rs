use crate::domain::entities::preferences::Theme;

pub const ACCENT: &str = "#f97316";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub header: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub border: &'static str,
}

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            background: "#f9fafb",
            surface: "#ffffff",
            header: "#f3f4f6",
            text: "#111827",
            muted: "#6b7280",
            border: "#e5e7eb",
        },
        Theme::Dark => Palette {
            background: "#111827",
            surface: "#1f2937",
            header: "#374151",
            text: "#f9fafb",
            muted: "#9ca3af",
            border: "#374151",
        },
    }
}

/// Badge colours per status; unknown statuses get the neutral grey badge.
pub fn status_badge_style(status: &str, theme: Theme) -> String {
    let dark = theme.is_dark();
    let (background, color) = match status.trim().to_lowercase().as_str() {
        "completed" | "active" if dark => ("#14532d", "#bbf7d0"),
        "completed" | "active" => ("#dcfce7", "#166534"),
        "pending" if dark => ("#713f12", "#fef08a"),
        "pending" => ("#fef9c3", "#854d0e"),
        "failed" if dark => ("#7f1d1d", "#fecaca"),
        "failed" => ("#fee2e2", "#991b1b"),
        "processing" if dark => ("#1e3a8a", "#bfdbfe"),
        "processing" => ("#dbeafe", "#1e40af"),
        "inactive" if dark => ("#7c2d12", "#fed7aa"),
        "inactive" => ("#ffedd5", "#9a3412"),
        _ if dark => ("#111827", "#e5e7eb"),
        _ => ("#f3f4f6", "#1f2937"),
    };
    format!(
        "display: inline-flex; padding: 2px 8px; font-size: 12px; font-weight: 600; border-radius: 9999px; background: {background}; color: {color};"
    )
}

pub fn table_header_cell_style(palette: &Palette) -> String {
    format!(
        "position: sticky; top: 0; z-index: 2; background: {}; color: {}; text-align: left; padding: 10px 16px; font-size: 12px; text-transform: uppercase; letter-spacing: 0.05em; cursor: pointer; user-select: none; border-bottom: 1px solid {};",
        palette.header, palette.muted, palette.border
    )
}

pub fn table_cell_style(palette: &Palette) -> String {
    format!(
        "padding: 12px 16px; white-space: nowrap; font-size: 14px; color: {}; border-bottom: 1px solid {};",
        palette.text, palette.border
    )
}

pub fn control_style(palette: &Palette) -> String {
    format!(
        "padding: 6px 10px; border: 1px solid {}; border-radius: 6px; background: {}; color: {};",
        palette.border, palette.surface, palette.text
    )
}

pub fn pager_button_style(palette: &Palette, current: bool) -> String {
    if current {
        format!(
            "padding: 4px 12px; border: 1px solid {ACCENT}; border-radius: 6px; background: {ACCENT}; color: #fff; cursor: pointer;"
        )
    } else {
        format!(
            "padding: 4px 12px; border: 1px solid {}; border-radius: 6px; background: transparent; color: {}; cursor: pointer;",
            palette.border, palette.text
        )
    }
}
