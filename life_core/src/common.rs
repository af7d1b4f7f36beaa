/// Grid coordinate as `(x, y)`, column first.
pub type Point = (usize, usize);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Compass {
    North,
    East,
    South,
    West,
}

impl Compass {
    /// Moves the point one square in this direction, or returns None if that
    /// would leave a `width` by `height` area.
    pub fn add_to_point(self, (x, y): Point, width: usize, height: usize) -> Option<Point> {
        match self {
            Self::North => y.checked_sub(1).map(|y| (x, y)),
            Self::East => (x + 1 < width).then_some((x + 1, y)),
            Self::South => (y + 1 < height).then_some((x, y + 1)),
            Self::West => x.checked_sub(1).map(|x| (x, y)),
        }
    }
}

#[cfg(test)]
mod test {
    use test_log::test;

    use super::*;

    #[test]
    fn add_to_point_rejects_leaving_the_area() {
        assert_eq!(Compass::North.add_to_point((0, 0), 3, 3), None);
        assert_eq!(Compass::West.add_to_point((0, 2), 3, 3), None);
        assert_eq!(Compass::East.add_to_point((2, 0), 3, 3), None);
        assert_eq!(Compass::South.add_to_point((0, 2), 3, 3), None);

        assert_eq!(Compass::North.add_to_point((1, 1), 3, 3), Some((1, 0)));
        assert_eq!(Compass::East.add_to_point((1, 1), 3, 3), Some((2, 1)));
        assert_eq!(Compass::South.add_to_point((1, 1), 3, 3), Some((1, 2)));
        assert_eq!(Compass::West.add_to_point((1, 1), 3, 3), Some((0, 1)));
    }
}
