use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};

/// A length in PDF points (1/72 of an inch).
///
/// All geometry in this crate (page sizes, margins, cursor positions,
/// measured text widths) is expressed in points, matching the unit the
/// PDF content stream operators take.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    Display,
    From,
    Into,
)]
#[display("{_0}pt")]
pub struct Pt(pub f32);

impl std::ops::Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl std::ops::Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}
