use std::fmt;

/// The world regions a ticking area can live in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    Overworld,
    Nether,
    TheEnd,
}

impl Dimension {
    /// Every dimension, in the order ticking areas are searched
    pub const ALL: [Dimension; 3] = [Dimension::Overworld, Dimension::Nether, Dimension::TheEnd];

    /// The host identifier of the dimension
    pub fn id(&self) -> &'static str {
        match self {
            Dimension::Overworld => "overworld",
            Dimension::Nether => "nether",
            Dimension::TheEnd => "the_end",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
