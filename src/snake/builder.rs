use std::collections::VecDeque;
use std::fmt::{self, Display, Formatter};

use super::{Body, Snake, Type};
use crate::basic::{Color, Dir, Point};
use crate::snake_control;

#[derive(Debug, Error)]
#[must_use]
pub struct BuilderError(pub Box<Builder>, pub &'static str);

impl Display for BuilderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "snake builder error: {}", self.1)?;
        write!(f, "builder: {:?}", self.0)
    }
}

#[derive(Default, Clone, Debug)]
pub struct Builder {
    pub snake_type: Option<Type>,
    pub pos: Option<Point>,
    pub dir: Option<Dir>,
    pub color: Option<Color>,
    pub controller: Option<snake_control::Template>,
}

impl Builder {
    #[inline(always)]
    #[must_use]
    pub fn snake_type(mut self, value: Type) -> Self {
        self.snake_type = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn pos(mut self, value: Point) -> Self {
        self.pos = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn dir(mut self, value: Dir) -> Self {
        self.dir = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn color(mut self, value: Color) -> Self {
        self.color = Some(value);
        self
    }

    #[inline(always)]
    #[must_use]
    pub fn controller(mut self, value: snake_control::Template) -> Self {
        self.controller = Some(value);
        self
    }

    pub fn build(&self) -> Result<Snake, BuilderError> {
        let snake_type = self
            .snake_type
            .ok_or_else(|| BuilderError(Box::new(self.clone()), "missing field `snake_type`"))?;
        let pos = self
            .pos
            .ok_or_else(|| BuilderError(Box::new(self.clone()), "missing field `pos`"))?;
        let color = self
            .color
            .ok_or_else(|| BuilderError(Box::new(self.clone()), "missing field `color`"))?;

        // AI snakes must have a strategy attached, the player must not
        let controller = match snake_type {
            Type::Player => None,
            Type::Ai => Some(
                self.controller
                    .ok_or_else(|| {
                        BuilderError(Box::new(self.clone()), "missing field `controller`")
                    })?
                    .into_controller(),
            ),
        };

        let mut cells = VecDeque::new();
        cells.push_back(pos);

        Ok(Snake {
            snake_type,
            body: Body {
                cells,
                dir: self.dir.unwrap_or(Dir::R),
                grow: false,
            },
            color,
            controller,
        })
    }
}
