use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Point in viewBox space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Color in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    pub const BLACK: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };

    /// Ritual gold, the default stroke color
    pub const GOLD: Color = Color {
        r: 0xD4,
        g: 0xAF,
        b: 0x37,
        a: 255,
    };

    /// Create color from hex string (e.g., "#FF0000" or "#FF0000FF")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Color {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
                a: 255,
            }),
            8 => Some(Color {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
                a: channel(6)?,
            }),
            _ => None,
        }
    }

    /// `#RRGGBB`, alpha dropped
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Alpha as a 0-1 fraction
    pub fn alpha(&self) -> f32 {
        self.a as f32 / 255.0
    }
}

/// Stroke style applied to every path of a document
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    /// `None` or 1.0 means fully opaque
    pub opacity: Option<f32>,
}

/// Single SVG path command in absolute coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { control: Point, to: Point },
    Close,
}

/// Ordered path commands, rendered as an SVG `d` attribute
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathData {
    pub commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Render as a `d` attribute value, e.g. `M 20 80 L 50 20`
    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                d.push(' ');
            }
            // Writing to a String cannot fail
            let _ = match command {
                PathCommand::MoveTo(p) => write!(d, "M {} {}", fmt_num(p.x), fmt_num(p.y)),
                PathCommand::LineTo(p) => write!(d, "L {} {}", fmt_num(p.x), fmt_num(p.y)),
                PathCommand::QuadTo { control, to } => write!(
                    d,
                    "Q {} {} {} {}",
                    fmt_num(control.x),
                    fmt_num(control.y),
                    fmt_num(to.x),
                    fmt_num(to.y)
                ),
                PathCommand::Close => write!(d, "Z"),
            };
        }
        d
    }
}

/// The value a number takes once written into markup: two decimals, no `-0`.
pub fn round_num(value: f32) -> f32 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Format a number with at most two decimals and no trailing zeros.
///
/// Output is byte-stable for identical input.
pub fn fmt_num(value: f32) -> String {
    format!("{}", round_num(value))
}
