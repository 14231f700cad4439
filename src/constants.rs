//! Global Constants
//!
//! Centralized constants for configuration and tuning.
//! All magic numbers should be defined here with documentation.

/// Batch pacing constants
pub mod batch {
    /// Screens documented concurrently per batch
    pub const SCREENS_PER_BATCH: usize = 5;

    /// Unconditional pause between batches (milliseconds)
    ///
    /// Fixed-window rate-limit avoidance, not adaptive backoff. The pause
    /// is taken even when the vendor responded quickly.
    pub const INTER_BATCH_DELAY_MS: u64 = 2000;
}

/// Response parsing constants
pub mod parse {
    /// Literal line separating flow documentation from the edge-case JSON
    pub const EDGE_CASE_DELIMITER: &str = "---EDGE-CASES---";

    /// Placeholder a human replaces with the real component library link
    pub const LINK_PLACEHOLDER: &str = "[Add link to component library]";
}

/// Error classification constants
pub mod classify {
    /// Cap on the fallthrough user-facing message (characters)
    pub const MAX_USER_MESSAGE_CHARS: usize = 300;
}

/// Screen regeneration constants
pub mod regen {
    /// Attempts per missing-screen item when the visual spec fails to parse
    /// (one initial attempt plus exactly one retry)
    pub const MAX_PARSE_ATTEMPTS: usize = 2;
}

/// Canvas extraction and layout constants
pub mod canvas {
    /// Maximum depth of the textual layer tree sent with each frame
    pub const LAYER_TREE_MAX_DEPTH: usize = 4;

    /// Gap between a source frame and generated card sets (canvas units)
    pub const CARD_GAP: f64 = 100.0;

    /// Width of generated documentation cards
    pub const CARD_WIDTH: f64 = 480.0;

    /// Inner padding of generated cards
    pub const CARD_PADDING: f64 = 24.0;

    /// Vertical gap between stacked cards in one set
    pub const CARD_SPACING: f64 = 40.0;

    /// Body text size on generated cards
    pub const CARD_FONT_SIZE: f64 = 12.0;

    /// Heading text size on generated cards
    pub const CARD_HEADING_SIZE: f64 = 16.0;

    /// Most-frequent entries reported per frequency table in the context block
    pub const SNAPSHOT_TOP_N: usize = 8;
}

/// HTTP/Network constants
pub mod network {
    /// Default request timeout (seconds)
    pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
}
