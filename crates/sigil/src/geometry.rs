//! Letter geometry
//!
//! Every letter maps to a fixed stroke template over a 5x5 node lattice
//! (a kamea-style grid). The lattice is centered in a 100x100 viewBox, so
//! all fragments overlay in one shared square. Fragments carry no styling.

use crate::letters::Letter;
use crate::render::{PathCommand, PathData, Point};

/// Edge length of the square viewBox shared by every document
pub const VIEW_BOX: f32 = 100.0;
/// Nodes per lattice side
pub const GRID_NODES: usize = 5;
/// Distance between adjacent lattice nodes in viewBox units
pub const GRID_SPACING: f32 = 15.0;

/// One template step, addressed in lattice nodes `(col, row)`, row 0 on top
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Move(u8, u8),
    Line(u8, u8),
    /// Control node, then end node
    Quad(u8, u8, u8, u8),
    Close,
}

use self::Step::{Close, Line, Move, Quad};

const A: &[Step] = &[Move(0, 4), Line(2, 0), Line(4, 4), Move(1, 2), Line(3, 2)];
const B: &[Step] = &[
    Move(0, 4),
    Line(0, 0),
    Line(2, 0),
    Quad(4, 1, 2, 2),
    Line(0, 2),
    Move(2, 2),
    Quad(4, 3, 2, 4),
    Line(0, 4),
];
const C: &[Step] = &[Move(4, 0), Quad(0, 0, 0, 2), Quad(0, 4, 4, 4)];
const D: &[Step] = &[
    Move(0, 0),
    Line(0, 4),
    Line(1, 4),
    Quad(4, 4, 4, 2),
    Quad(4, 0, 1, 0),
    Close,
];
const E: &[Step] = &[
    Move(4, 0),
    Line(0, 0),
    Line(0, 4),
    Line(4, 4),
    Move(0, 2),
    Line(3, 2),
];
const F: &[Step] = &[Move(4, 0), Line(0, 0), Line(0, 4), Move(0, 2), Line(3, 2)];
const G: &[Step] = &[
    Move(4, 0),
    Quad(0, 0, 0, 2),
    Quad(0, 4, 4, 4),
    Line(4, 2),
    Line(2, 2),
];
const H: &[Step] = &[
    Move(0, 0),
    Line(0, 4),
    Move(4, 0),
    Line(4, 4),
    Move(0, 2),
    Line(4, 2),
];
const I: &[Step] = &[
    Move(1, 0),
    Line(3, 0),
    Move(2, 0),
    Line(2, 4),
    Move(1, 4),
    Line(3, 4),
];
const J: &[Step] = &[
    Move(1, 0),
    Line(4, 0),
    Move(3, 0),
    Line(3, 3),
    Quad(3, 4, 1, 4),
    Line(0, 3),
];
const K: &[Step] = &[Move(0, 0), Line(0, 4), Move(4, 0), Line(0, 2), Line(4, 4)];
const L: &[Step] = &[Move(0, 0), Line(0, 4), Line(4, 4)];
const M: &[Step] = &[Move(0, 4), Line(0, 0), Line(2, 2), Line(4, 0), Line(4, 4)];
const N: &[Step] = &[Move(0, 4), Line(0, 0), Line(4, 4), Line(4, 0)];
const O: &[Step] = &[
    Move(2, 0),
    Quad(4, 0, 4, 2),
    Quad(4, 4, 2, 4),
    Quad(0, 4, 0, 2),
    Quad(0, 0, 2, 0),
    Close,
];
const P: &[Step] = &[Move(0, 4), Line(0, 0), Line(2, 0), Quad(4, 1, 2, 2), Line(0, 2)];
const Q: &[Step] = &[
    Move(2, 0),
    Quad(4, 0, 4, 2),
    Quad(4, 4, 2, 4),
    Quad(0, 4, 0, 2),
    Quad(0, 0, 2, 0),
    Close,
    Move(2, 2),
    Line(4, 4),
];
const R: &[Step] = &[
    Move(0, 4),
    Line(0, 0),
    Line(2, 0),
    Quad(4, 1, 2, 2),
    Line(0, 2),
    Move(2, 2),
    Line(4, 4),
];
const S: &[Step] = &[
    Move(4, 0),
    Line(1, 0),
    Quad(0, 0, 0, 1),
    Quad(0, 2, 2, 2),
    Quad(4, 2, 4, 3),
    Quad(4, 4, 3, 4),
    Line(0, 4),
];
const T: &[Step] = &[Move(0, 0), Line(4, 0), Move(2, 0), Line(2, 4)];
const U: &[Step] = &[
    Move(0, 0),
    Line(0, 3),
    Quad(0, 4, 2, 4),
    Quad(4, 4, 4, 3),
    Line(4, 0),
];
const V: &[Step] = &[Move(0, 0), Line(2, 4), Line(4, 0)];
const W: &[Step] = &[Move(0, 0), Line(1, 4), Line(2, 2), Line(3, 4), Line(4, 0)];
const X: &[Step] = &[Move(0, 0), Line(4, 4), Move(4, 0), Line(0, 4)];
const Y: &[Step] = &[Move(0, 0), Line(2, 2), Line(4, 0), Move(2, 2), Line(2, 4)];
const Z: &[Step] = &[Move(0, 0), Line(4, 0), Line(0, 4), Line(4, 4)];

/// Stroke templates indexed by alphabet position
pub const TEMPLATES: [&[Step]; 26] = [
    A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
];

/// Template for one letter
pub fn template(letter: Letter) -> &'static [Step] {
    TEMPLATES[letter.index()]
}

/// Lattice node to viewBox coordinates, centering the grid
pub fn node_to_point(col: u8, row: u8) -> Point {
    let center = VIEW_BOX / 2.0;
    let half = (GRID_NODES as f32 - 1.0) / 2.0;
    Point {
        x: center + (col as f32 - half) * GRID_SPACING,
        y: center + (row as f32 - half) * GRID_SPACING,
    }
}

/// Path fragment for one letter in viewBox coordinates
pub fn letter_path(letter: Letter) -> PathData {
    let mut path = PathData::new();
    for step in template(letter) {
        path.push(match *step {
            Move(c, r) => PathCommand::MoveTo(node_to_point(c, r)),
            Line(c, r) => PathCommand::LineTo(node_to_point(c, r)),
            Quad(cc, cr, c, r) => PathCommand::QuadTo {
                control: node_to_point(cc, cr),
                to: node_to_point(c, r),
            },
            Close => PathCommand::Close,
        });
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letters::CasePolicy;

    #[test]
    fn test_lattice_is_centered() {
        assert_eq!(node_to_point(0, 0), Point::new(20.0, 20.0));
        assert_eq!(node_to_point(2, 2), Point::new(50.0, 50.0));
        assert_eq!(node_to_point(4, 4), Point::new(80.0, 80.0));
    }

    #[test]
    fn test_every_template_is_drawable() {
        for (i, steps) in TEMPLATES.iter().enumerate() {
            assert!(matches!(steps.first(), Some(Move(..))), "template {i} must start with a move");
            assert!(
                steps.iter().any(|s| matches!(s, Line(..) | Quad(..))),
                "template {i} draws nothing"
            );
        }
    }

    #[test]
    fn test_templates_stay_on_lattice() {
        let max = (GRID_NODES - 1) as u8;
        for steps in TEMPLATES {
            for step in steps {
                let nodes: Vec<u8> = match *step {
                    Move(c, r) | Line(c, r) => vec![c, r],
                    Quad(a, b, c, r) => vec![a, b, c, r],
                    Close => vec![],
                };
                assert!(nodes.iter().all(|&n| n <= max));
            }
        }
    }

    #[test]
    fn test_letter_path_is_template_in_order() {
        let x = Letter::new('X', CasePolicy::Strict).unwrap();
        assert_eq!(letter_path(x).to_svg_d(), "M 20 20 L 80 80 M 80 20 L 20 80");
    }
}
