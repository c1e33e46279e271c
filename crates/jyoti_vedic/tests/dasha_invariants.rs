//! Partition invariants of the full four-level Vimshottari tree.

use jyoti_vedic::{vimshottari_hierarchy, DashaLevel, DashaPeriod, DAYS_PER_YEAR};

const BIRTH: f64 = 2_450_592.884;

#[test]
fn every_level_partitions_the_span() {
    // Moon at a few different points of the zodiac
    for moon in [3.7, 95.0, 244.65, 333.2] {
        let h = vimshottari_hierarchy(BIRTH, moon, DashaLevel::Sookshmadasha);
        let span_start = h.levels[0][0].start_jd;
        let span_end = h.levels[0][8].end_jd;

        for (depth, level) in h.levels.iter().enumerate() {
            assert_eq!(level[0].start_jd, span_start, "level {depth}");
            assert_eq!(level.last().unwrap().end_jd, span_end, "level {depth}");
            for w in level.windows(2) {
                assert_eq!(
                    w[0].end_jd, w[1].start_jd,
                    "gap at level {depth} (moon {moon})"
                );
            }
        }
    }
}

#[test]
fn children_sum_to_parent_everywhere() {
    let h = vimshottari_hierarchy(BIRTH, 244.65, DashaLevel::Sookshmadasha);
    for depth in 1..h.levels.len() {
        let parents = &h.levels[depth - 1];
        let children = &h.levels[depth];
        for (pi, parent) in parents.iter().enumerate() {
            let sum: f64 = children
                .iter()
                .filter(|c| c.parent_idx == Some(pi))
                .map(DashaPeriod::duration_days)
                .sum();
            assert!(
                (sum - parent.duration_days()).abs() < 1e-6,
                "level {depth} parent {pi}: {sum} vs {}",
                parent.duration_days()
            );
        }
    }
}

#[test]
fn full_cycle_from_a_mansion_edge() {
    // Moon exactly at a nakshatra start: no elapsed fraction, the whole
    // 120 years materialize
    let h = vimshottari_hierarchy(BIRTH, 240.0, DashaLevel::Mahadasha);
    let total_days = h.levels[0][8].end_jd - BIRTH;
    assert!(
        (total_days - 120.0 * DAYS_PER_YEAR).abs() < 1e-6,
        "total {total_days}"
    );
}
