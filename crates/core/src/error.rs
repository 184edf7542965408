use thiserror::Error;

/// Top-level error type used across the entire workspace.
#[derive(Debug, Error)]
pub enum BarError {
    /// Every grid slot is taken — the bar region cannot fit another row.
    /// The caller must enlarge the region or shrink the cell size.
    #[error("button bar grid is full ({cols}x{rows} slots); the bar needs to be made larger")]
    GridFull { cols: i32, rows: i32 },

    /// A button finished construction without an assigned rectangle.
    #[error("button '{name}' has no assigned slot rectangle")]
    Unconfigured { name: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = BarError> = std::result::Result<T, E>;
