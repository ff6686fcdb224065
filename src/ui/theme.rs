use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(140, 115, 200);
pub const HEADER_BG: Color = Color::Rgb(25, 25, 38);
pub const STATUS_BG: Color = Color::Rgb(30, 30, 40);
pub const SEPARATOR: Color = Color::Rgb(55, 55, 75);
pub const SELECTED_BG: Color = Color::Rgb(50, 50, 80);
pub const DIM_TEXT: Color = Color::Rgb(100, 100, 120);
pub const BORDER_COLOR: Color = Color::Rgb(70, 70, 95);
pub const ACTIVE_BORDER: Color = Color::Rgb(120, 120, 180);
pub const INPUT_COLOR: Color = Color::Cyan;
pub const ERROR_FG: Color = Color::LightRed;
pub const LINK_FG: Color = Color::Rgb(110, 160, 230);
pub const STAR_FG: Color = Color::Yellow;

/// Bar colours, cycled in label order.
pub const CHART_COLORS: &[Color] = &[
    Color::Rgb(0x3B, 0x82, 0xF6),
    Color::Rgb(0x10, 0xB9, 0x81),
    Color::Rgb(0xF5, 0x9E, 0x0B),
    Color::Rgb(0xEF, 0x44, 0x44),
    Color::Rgb(0x63, 0x66, 0xF1),
];

pub fn chart_color(index: usize) -> Color {
    CHART_COLORS[index % CHART_COLORS.len()]
}
