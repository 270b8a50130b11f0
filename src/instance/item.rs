use std::fmt;

/// A knapsack item, as read from one body line of the input.
#[derive(Clone, Copy, PartialEq)]
pub struct Item {
    pub value: f64,
    pub weight: f64,
}

impl Item {
    pub fn new(value: f64, weight: f64) -> Item {
        Item { value, weight }
    }
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(v={}, w={})", self.value, self.weight)
    }
}
