use crate::screen::EdgePolicy;

/// Behavior that differs between Chip-8 interpreters and that some ROMs depend on.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// How sprites drawn across the edge of the screen are handled.
    pub edges: EdgePolicy,
}

impl Config {
    pub fn with_edges(edges: EdgePolicy) -> Self {
        Config { edges }
    }
}
