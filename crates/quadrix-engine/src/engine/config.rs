use std::time::Duration;

/// Immutable game configuration, constructed once at startup and carried by
/// the session. There are no module-level board constants; every component
/// reads dimensions from here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    cols: i32,
    rows: i32,
    fall_interval: Duration,
}

impl Default for GameConfig {
    /// The reference configuration: a 10×20 board with a 0.5 s gravity
    /// interval.
    fn default() -> Self {
        Self::new(10, 20, Duration::from_millis(500))
    }
}

impl GameConfig {
    /// Creates a configuration.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is not positive.
    #[must_use]
    pub fn new(cols: i32, rows: i32, fall_interval: Duration) -> Self {
        assert!(cols > 0, "board must have at least one column");
        assert!(rows > 0, "board must have at least one row");
        Self {
            cols,
            rows,
            fall_interval,
        }
    }

    #[must_use]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    #[must_use]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// The accumulated elapsed time after which gravity forces the falling
    /// piece down one row.
    #[must_use]
    pub fn fall_interval(&self) -> Duration {
        self.fall_interval
    }
}
