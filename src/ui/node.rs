//! src/ui/node.rs
//!
//! Recursive layout tree + Panel trait the frame is composed from.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Any renderable surface.
pub trait Panel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect);
}

/// Layout tree rebuilt each frame.
pub enum Node {
    Split {
        direction: Direction,
        constraints: Vec<Constraint>,
        children: Vec<Node>,
    },
    Leaf(Box<dyn Panel>),
}

impl Node {
    pub fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        match self {
            Node::Split {
                direction,
                constraints,
                children,
            } => {
                let chunks = Layout::default()
                    .direction(*direction)
                    .constraints(constraints.clone())
                    .split(area);
                for (child, chunk) in children.iter().zip(chunks.iter()) {
                    child.draw(f, *chunk);
                }
            }
            Node::Leaf(panel) => panel.draw(f, area),
        }
    }
}

/// Stack children top to bottom.
pub fn rows(constraints: Vec<Constraint>, children: Vec<Node>) -> Node {
    Node::Split {
        direction: Direction::Vertical,
        constraints,
        children,
    }
}

/// Stack children left to right.
pub fn cols(constraints: Vec<Constraint>, children: Vec<Node>) -> Node {
    Node::Split {
        direction: Direction::Horizontal,
        constraints,
        children,
    }
}

pub fn leaf(panel: impl Panel + 'static) -> Node {
    Node::Leaf(Box::new(panel))
}
