use crate::render::primitives::{fmt_num, Color, PathData, Stroke};
use std::fmt::Write;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// A path tagged with the letter that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedPath {
    pub letter: char,
    pub data: PathData,
}

/// Self-contained SVG document - declarative description of one rendering
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    /// Rendered size in px (the `width`/`height` attributes)
    pub width: f32,
    pub height: f32,
    /// Square viewBox edge; geometry lives in `0 0 view_box view_box`
    pub view_box: f32,
    pub background: Option<Color>,
    pub stroke: Stroke,
    pub paths: Vec<TaggedPath>,
}

impl SvgDocument {
    /// Create a new empty document
    pub fn new(width: f32, height: f32, view_box: f32, stroke: Stroke) -> Self {
        Self {
            width,
            height,
            view_box,
            background: None,
            stroke,
            paths: Vec::new(),
        }
    }

    pub fn view_box_attr(&self) -> String {
        format!("0 0 {} {}", fmt_num(self.view_box), fmt_num(self.view_box))
    }

    /// Serialize to SVG markup
    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            r#"<svg xmlns="{}" width="{}" height="{}" viewBox="{}">"#,
            SVG_NS,
            fmt_num(self.width),
            fmt_num(self.height),
            self.view_box_attr()
        );

        if let Some(bg) = self.background {
            let _ = write!(
                out,
                r#"  <rect x="0" y="0" width="{0}" height="{0}" fill="{1}""#,
                fmt_num(self.view_box),
                bg.to_hex()
            );
            if bg.a != 255 {
                let _ = write!(out, r#" fill-opacity="{}""#, fmt_num(bg.alpha()));
            }
            out.push_str("/>\n");
        }

        let stroke_attrs = self.stroke_attrs();
        for path in &self.paths {
            let _ = writeln!(
                out,
                r#"  <path data-letter="{}" d="{}"{}/>"#,
                path.letter,
                path.data.to_svg_d(),
                stroke_attrs
            );
        }

        out.push_str("</svg>\n");
        out
    }

    fn stroke_attrs(&self) -> String {
        let mut attrs = format!(
            r#" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round""#,
            self.stroke.color.to_hex(),
            fmt_num(self.stroke.width)
        );
        let opacity = self.stroke.opacity.unwrap_or(1.0) * self.stroke.color.alpha();
        if opacity < 1.0 {
            let _ = write!(attrs, r#" stroke-opacity="{}""#, fmt_num(opacity));
        }
        attrs
    }
}
