use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 160, g: 82, b: 45 };
pub const ACCENT: Color = Color::TrueColor { r: 222, g: 184, b: 135 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 150, g: 92, b: 22 };
pub const PRICE: Color = Color::TrueColor { r: 184, g: 135, b: 83 };

pub const STARTER: Color = Color::TrueColor { r: 210, g: 180, b: 140 };
pub const MAIN: Color = Color::TrueColor { r: 160, g: 82, b: 45 };
pub const DESSERT: Color = Color::TrueColor { r: 139, g: 92, b: 47 };
