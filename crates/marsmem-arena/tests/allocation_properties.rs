use marsmem_arena::{ArenaConfig, ArenaError, BumpArena};
use marsmem_core::{BoundsMode, MemoryLayout};
use marsmem_test_utils::fixtures::{tiny_layout, TINY_HEAP_BASE, TINY_HEAP_CAPACITY};
use proptest::prelude::*;

fn default_arena(bounds: BoundsMode) -> BumpArena {
    BumpArena::new(ArenaConfig::from_layout(&MemoryLayout::new(bounds))).unwrap()
}

proptest! {
    #[test]
    fn addresses_follow_previous_address_plus_size(
        sizes in proptest::collection::vec(0u32..256, 1..64),
    ) {
        let mut arena = default_arena(BoundsMode::Checked);
        let mut expected = MemoryLayout::DEFAULT_HEAP_BASE.0;
        for &size in &sizes {
            let a = arena.allocate(size).unwrap();
            prop_assert_eq!(a.start().0, expected);
            expected += size * 4;
        }
        prop_assert_eq!(arena.cursor().0, expected);
    }

    #[test]
    fn ranges_are_pairwise_disjoint_and_ordered(
        sizes in proptest::collection::vec(0u32..64, 1..32),
    ) {
        let mut arena = default_arena(BoundsMode::Checked);
        let allocations: Vec<_> = sizes.iter().map(|&s| arena.allocate(s).unwrap()).collect();
        for (i, a) in allocations.iter().enumerate() {
            for b in &allocations[i + 1..] {
                prop_assert!(!a.overlaps(b));
                prop_assert!(a.start() <= b.start());
            }
        }
    }

    #[test]
    fn checked_arena_never_hands_out_memory_past_the_heap(
        sizes in proptest::collection::vec(0u32..16, 1..32),
    ) {
        let mut arena =
            BumpArena::new(ArenaConfig::from_layout(&tiny_layout(BoundsMode::Checked))).unwrap();
        let heap_end = TINY_HEAP_BASE.0 as u64 + TINY_HEAP_CAPACITY as u64 * 4;
        for &size in &sizes {
            match arena.allocate(size) {
                Ok(a) => prop_assert!(a.end() <= heap_end),
                Err(ArenaError::Exhausted { requested, remaining }) => {
                    prop_assert_eq!(requested, size);
                    prop_assert!(remaining < size);
                }
                Err(other) => prop_assert!(false, "unexpected error {}", other),
            }
        }
        prop_assert!(!arena.is_overrun());
    }

    #[test]
    fn cursor_is_monotonic_in_unchecked_mode(
        sizes in proptest::collection::vec(0u32..1024, 1..64),
    ) {
        let mut arena =
            BumpArena::new(ArenaConfig::from_layout(&tiny_layout(BoundsMode::Unchecked))).unwrap();
        let mut previous = arena.cursor();
        for &size in &sizes {
            arena.allocate(size).unwrap();
            prop_assert!(arena.cursor() >= previous);
            previous = arena.cursor();
        }
        let total: u64 = sizes.iter().map(|&s| s as u64).sum();
        prop_assert_eq!(arena.used(), total);
        prop_assert_eq!(arena.is_overrun(), total > TINY_HEAP_CAPACITY as u64);
    }
}

#[test]
fn two_arenas_keep_independent_cursors() {
    let mut a = default_arena(BoundsMode::Checked);
    let mut b = default_arena(BoundsMode::Checked);
    a.allocate(10).unwrap();
    assert_eq!(b.allocate(1).unwrap().start(), MemoryLayout::DEFAULT_HEAP_BASE);
    assert_eq!(a.used(), 10);
    assert_eq!(b.used(), 1);
}

#[test]
fn unchecked_heap_overrun_walks_into_following_memory() {
    marsmem_test_utils::init_tracing();
    let mut arena =
        BumpArena::new(ArenaConfig::from_layout(&tiny_layout(BoundsMode::Unchecked))).unwrap();
    arena.allocate(TINY_HEAP_CAPACITY).unwrap();
    let beyond = arena.allocate(1).unwrap();
    assert_eq!(beyond.start().0, TINY_HEAP_BASE.0 + TINY_HEAP_CAPACITY * 4);
}
