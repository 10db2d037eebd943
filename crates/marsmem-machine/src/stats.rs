//! Running counters for a [`Machine`](crate::Machine).

/// Operation counts since the machine was created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MachineStats {
    /// Successful heap allocations, including zero-sized ones.
    pub allocations: u64,
    /// Elements handed out by the heap arena.
    pub heap_elements: u64,
    /// Successful pixel writes.
    pub pixels_drawn: u64,
    /// Display width changes.
    pub display_configures: u64,
    /// Stores that landed outside every mapped region (unchecked only).
    pub stray_stores: usize,
}
