//! Property-based tests for complete drags through the simulator.
//!
//! 1. Dragging row `from` to row `to` in a list that fits the viewport puts
//!    the item at `to` and keeps everyone else in relative order.
//! 2. Auto-scroll never leaves the host outside its content extent.

use dragsort_core::DragConfig;
use dragsort_harness::{Simulator, sample_items};
use dragsort_list::ItemId;
use proptest::prelude::*;

// ═════════════════════════════════════════════════════════════════════════
// 1. Drag placement
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn drag_places_item_and_keeps_relative_order(
        (len, from, to) in (1usize..12).prop_flat_map(|len| (Just(len), 0..len, 0..len)),
        frames in 1usize..5,
    ) {
        // 12 rows of 60px end well above the bottom band of a 2000px viewport.
        let mut sim = Simulator::new(sample_items(len), DragConfig::default(), 2_000.0, 60.0);
        prop_assert!(sim.drag_row(from, to, frames));

        let ids = sim.sequence().ids();
        let moved = from as ItemId + 1;
        prop_assert_eq!(ids[to], moved);

        let others: Vec<ItemId> = ids.iter().copied().filter(|id| *id != moved).collect();
        let expected: Vec<ItemId> = (1..=len as ItemId).filter(|id| *id != moved).collect();
        prop_assert_eq!(others, expected);
        prop_assert!(!sim.session().is_dragging());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Scroll stays inside the content
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn host_scroll_stays_in_extent(
        len in 1usize..80,
        viewport in 200.0f32..1_200.0,
        y in -300.0f32..1_500.0,
        frames in 0usize..400,
    ) {
        let mut sim = Simulator::new(sample_items(len), DragConfig::default(), viewport, 48.0);
        prop_assert!(sim.press_row(0));
        sim.drag_to(y);
        sim.run_frames(frames);

        let max = sim.host().max_scroll_offset();
        let offset = sim.host().scroll_offset();
        prop_assert!((0.0..=max).contains(&offset), "offset {} outside 0..={}", offset, max);

        let tracked = sim.session().geometry().scroll_offset();
        prop_assert!((0.0..=max).contains(&tracked), "tracked {} outside 0..={}", tracked, max);
        prop_assert!(sim.session().drag_index().is_some_and(|ix| ix < len));
    }
}
