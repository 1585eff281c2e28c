/// Single grid axis, used for board width, height, and positions.
pub type Coord = u8;

/// Area count, used for mine counts and cell totals.
pub type CellCount = u16;

/// Grid coordinates `(x, y)`, `x` being the column and `y` the row.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Iterates over every coordinate of a `size` board, column by column.
pub fn iter_coords((size_x, size_y): Coord2) -> impl Iterator<Item = Coord2> {
    (0..size_x).flat_map(move |x| (0..size_y).map(move |y| (x, y)))
}

const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Shifts `coords` by `offset`, only when the result stays inside `bounds`.
fn shift(coords: Coord2, offset: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let x = coords.0.checked_add_signed(offset.0)?;
    let y = coords.1.checked_add_signed(offset.1)?;
    (x < bounds.0 && y < bounds.1).then_some((x, y))
}

/// Iterator over the up to 8 cells surrounding a center cell.
#[derive(Clone, Debug)]
pub struct Neighbors {
    center: Coord2,
    bounds: Coord2,
    next: usize,
}

impl Neighbors {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            next: 0,
        }
    }
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&offset) = OFFSETS.get(self.next) {
            self.next += 1;
            if let Some(coords) = shift(self.center, offset, self.bounds) {
                return Some(coords);
            }
        }
        None
    }
}
