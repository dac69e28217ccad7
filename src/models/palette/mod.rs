//! Event colour palette.
//!
//! New events take a base/hover colour pair from a fixed eight-entry
//! palette. Which pair is chosen is decided by an injected
//! [`PalettePolicy`] so that creation stays deterministic under test.

/// A base colour and the slightly stronger tone used on hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub color: &'static str,
    pub hover: &'static str,
}

pub const EVENT_PALETTE: [PaletteEntry; 8] = [
    PaletteEntry { name: "blue", color: "#DBEAFE", hover: "#BFDBFE" },
    PaletteEntry { name: "green", color: "#DCFCE7", hover: "#BBF7D0" },
    PaletteEntry { name: "purple", color: "#F3E8FF", hover: "#E9D5FF" },
    PaletteEntry { name: "pink", color: "#FCE7F3", hover: "#FBCFE8" },
    PaletteEntry { name: "yellow", color: "#FEF9C3", hover: "#FEF08A" },
    PaletteEntry { name: "indigo", color: "#E0E7FF", hover: "#C7D2FE" },
    PaletteEntry { name: "red", color: "#FEE2E2", hover: "#FECACA" },
    PaletteEntry { name: "orange", color: "#FFEDD5", hover: "#FED7AA" },
];

/// Chooses the colour pair for a newly created event.
#[cfg_attr(test, mockall::automock)]
pub trait PalettePolicy {
    /// `event_count` is the number of events already in the collection.
    fn pick(&self, event_count: usize) -> PaletteEntry;
}

/// Walks the palette in order: entry = event count mod palette size.
#[derive(Debug, Default, Clone, Copy)]
pub struct CyclicPalette;

impl PalettePolicy for CyclicPalette {
    fn pick(&self, event_count: usize) -> PaletteEntry {
        EVENT_PALETTE[event_count % EVENT_PALETTE.len()]
    }
}
