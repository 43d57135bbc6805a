use crate::geometry::SolidKind;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitRecord {
    pub time: f64,
    pub solid_index: usize,
    pub kind: SolidKind,
}

impl HitRecord {
    pub fn new(time: f64, solid_index: usize, kind: SolidKind) -> Self {
        HitRecord {
            time,
            solid_index,
            kind,
        }
    }
}
