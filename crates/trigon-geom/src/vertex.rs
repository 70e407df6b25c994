use crate::vec::{Rgb, Vec2, Vec3};

/// A single shape vertex.
///
/// Color and texture coordinate are fixed at construction; only the position
/// changes afterwards, and only through [`Shape`](crate::Shape) transforms.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vertex {
    pub(crate) pos: Vec3,
    color: Rgb,
    tex: Option<Vec2>,
}

impl Vertex {
    #[inline]
    pub const fn new(pos: Vec3, color: Rgb) -> Self {
        Self { pos, color, tex: None }
    }

    #[inline]
    pub const fn textured(pos: Vec3, color: Rgb, tex: Vec2) -> Self {
        Self { pos, color, tex: Some(tex) }
    }

    #[inline]
    pub const fn pos(&self) -> Vec3 {
        self.pos
    }

    #[inline]
    pub const fn color(&self) -> Rgb {
        self.color
    }

    #[inline]
    pub const fn tex(&self) -> Option<Vec2> {
        self.tex
    }
}
