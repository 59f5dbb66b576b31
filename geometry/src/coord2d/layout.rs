//! Maze layouts, parsed from the usual text format.
//!
//! Each character of a layout is one grid square:
//!
//! - `%` is a wall
//! - `P` is where the agent starts
//! - `.` is a piece of food
//! - ` `, `o` and `G` are open squares
//!
//! The first line of the layout is row `y = 0`.

use std::collections::HashSet;
use std::str::FromStr;

use thiserror::Error;

use super::map::Map;
use super::Point;
use crate::Position;

/// Error returned when a layout can't be parsed.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Layout is empty")]
    Empty,

    #[error("Unexpected layout character {0:?} at {1}")]
    UnexpectedCharacter(char, Point),

    #[error("Layout has no start position")]
    MissingStart,

    #[error("Layout has two start positions: {0} and {1}")]
    DuplicateStart(Point, Point),
}

/// A walled maze on a rectangular grid.
#[derive(Debug, Clone)]
pub struct Layout {
    walls: HashSet<Point>,
    food: Vec<Point>,
    start: Point,
    width: Position,
    height: Position,
}

impl Layout {
    pub fn width(&self) -> Position {
        self.width
    }

    pub fn height(&self) -> Position {
        self.height
    }

    /// Where the agent starts.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Food locations, in reading order.
    pub fn food(&self) -> &[Point] {
        &self.food
    }

    pub fn is_wall(&self, location: Point) -> bool {
        self.walls.contains(&location)
    }

    /// The four squares just inside the outer wall.
    ///
    /// Ordered top left, top right, bottom left, bottom right.
    pub fn corners(&self) -> [Point; 4] {
        let (right, bottom) = (self.width - 2, self.height - 2);
        [
            Point::new(1, 1),
            Point::new(right, 1),
            Point::new(1, bottom),
            Point::new(right, bottom),
        ]
    }

    fn contains(&self, location: Point) -> bool {
        (0..self.width).contains(&location.x) && (0..self.height).contains(&location.y)
    }
}

impl Map for Layout {
    fn is_traversable(&self, location: Point) -> bool {
        self.contains(location) && !self.is_wall(location)
    }
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(|l| l.trim_end())
            .skip_while(|l| l.is_empty())
            .collect();
        let rows = match lines.iter().rposition(|l| !l.is_empty()) {
            Some(last) => &lines[..=last],
            None => return Err(LayoutError::Empty),
        };

        let mut walls = HashSet::new();
        let mut food = Vec::new();
        let mut start: Option<Point> = None;

        for (y, line) in rows.iter().enumerate() {
            for (x, c) in line.chars().enumerate() {
                let point = Point::new(x as Position, y as Position);
                match c {
                    '%' => {
                        walls.insert(point);
                    }
                    '.' => food.push(point),
                    'P' => {
                        if let Some(first) = start {
                            return Err(LayoutError::DuplicateStart(first, point));
                        }
                        start = Some(point);
                    }
                    ' ' | 'o' | 'G' => {}
                    _ => return Err(LayoutError::UnexpectedCharacter(c, point)),
                }
            }
        }

        let width = rows.iter().map(|l| l.chars().count()).max().unwrap_or(0);

        Ok(Layout {
            walls,
            food,
            start: start.ok_or(LayoutError::MissingStart)?,
            width: width as Position,
            height: rows.len() as Position,
        })
    }
}
