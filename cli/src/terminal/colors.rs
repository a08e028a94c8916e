use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::Yellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 192, g: 192, b: 192 };

pub const FIELD_NUMBER: Color = Color::BrightCyan;
pub const FIELD_TRUE: Color = Color::Green;
pub const FIELD_FALSE: Color = Color::Red;
