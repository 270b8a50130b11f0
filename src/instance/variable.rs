use std::fmt;

/// A boolean decision slot. The wrapped value is the position of the
/// variable in its model, so it doubles as an index into coefficient rows.
/// Only a `ModelBuilder` hands them out.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Variable(pub(crate) u64);

impl Variable {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "x{}", self.0)
    }
}
