/// Single coordinate axis, used for column and row indices.
pub type Coord = u8;

/// Board address `(column, row)`: column is the category, row is the clue.
pub type Coord2 = (Coord, Coord);

/// Identifier the category API is queried with.
pub type CategoryId = u32;

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
