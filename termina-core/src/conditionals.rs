//! Reduction of conditional requirements once a placement is accepted.

use std::collections::BTreeMap;

use log::trace;

use crate::items::{is_fake_item, is_temporary_item, MASK_BLAST};
use crate::logic::ItemGraph;
use crate::resolver::path_is_temporary;

/// Folds `target`'s conditional groups towards plain dependencies.
///
/// A single group becomes unconditional. With several groups, one member
/// shared by all of them is promoted per call. A group left empty means the
/// location is reachable without any of the alternatives, so every
/// conditional is dropped.
pub fn update_conditionals(graph: &mut ItemGraph, current: usize, target: usize) {
    if !graph.items[target].has_conditionals() {
        return;
    }

    if graph.items[target].conditionals.len() == 1 {
        let group = std::mem::take(&mut graph.items[target].conditionals).remove(0);
        for member in group {
            graph.items[target].add_dependency(member);
            graph.items[member].add_cannot_require(current);
        }
        return;
    }

    let item = &mut graph.items[target];
    let common = item.conditionals[0]
        .iter()
        .copied()
        .find(|member| item.conditionals.iter().all(|group| group.contains(member)));

    if let Some(member) = common {
        trace!("promoting {member} to a requirement of {target}");
        item.add_dependency(member);
        for group in &mut item.conditionals {
            group.retain(|&id| id != member);
        }
        if item.conditionals.iter().any(Vec::is_empty) {
            item.conditionals.clear();
        }
    }
}

/// Walks the requirements of `target` after `current` has been placed there,
/// recording that none of them may later come to require `current`.
pub fn check_conditionals(graph: &mut ItemGraph, current: usize, target: usize, path: &[usize]) {
    let mut checked = Vec::new();
    check_conditionals_inner(graph, current, target, path, &mut checked);
}

fn check_conditionals_inner(
    graph: &mut ItemGraph,
    current: usize,
    target: usize,
    path: &[usize],
    checked: &mut Vec<usize>,
) {
    if target == MASK_BLAST && !is_temporary_item(current) {
        graph.items[target].depends_on_items.clear();
    }

    checked.push(target);
    update_conditionals(graph, current, target);

    let mut i = 0;
    while i < graph.items[target].depends_on_items.len() {
        let dependency = graph.items[target].depends_on_items[i];
        i += 1;

        graph.items[dependency].add_cannot_require(current);

        if is_fake_item(dependency) || graph.items[dependency].replaces_another_item() {
            let d = graph.items[dependency]
                .replaces_item_id
                .unwrap_or(dependency);
            if !checked.contains(&d) {
                let mut child_path = path.to_vec();
                child_path.push(d);
                check_conditionals_inner(graph, current, d, &child_path, checked);
            }
        } else if graph.items[current].time_needed != 0
            && is_temporary_item(dependency)
            && path_is_temporary(graph, path)
        {
            let needed = graph.items[current].time_needed;
            graph.items[dependency].time_needed &= needed;
        }
    }
}

/// Drops the conditional groups that the last resolution found to depend on
/// `current`. Members of the surviving groups may no longer require
/// `current`. A location whose every group was marked keeps its groups.
pub fn remove_conditionals(graph: &mut ItemGraph, current: usize, removes: &[(usize, usize)]) {
    let mut by_target: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for &(target, group) in removes {
        let groups = by_target.entry(target).or_default();
        if !groups.contains(&group) {
            groups.push(group);
        }
    }

    for (target, marked) in by_target {
        let group_count = graph.items[target].conditionals.len();
        if marked.len() >= group_count {
            continue;
        }

        let survivors: Vec<usize> = graph.items[target]
            .conditionals
            .iter()
            .enumerate()
            .filter(|(index, _)| !marked.contains(index))
            .flat_map(|(_, group)| group.iter().copied())
            .collect();
        for member in survivors {
            graph.items[member].add_cannot_require(current);
        }

        let mut index = 0;
        graph.items[target].conditionals.retain(|_| {
            let keep = !marked.contains(&index);
            index += 1;
            keep
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{AREA_SOUTH_ACCESS, TOTAL_NUMBER_OF_ITEMS, TRADE_ITEM_ROOM_KEY};

    fn graph() -> ItemGraph {
        ItemGraph::without_logic(TOTAL_NUMBER_OF_ITEMS)
    }

    #[test]
    fn single_group_becomes_dependencies() {
        let mut g = graph();
        g.items[4].depends_on_items = vec![5];
        g.items[4].conditionals = vec![vec![5, 6]];
        update_conditionals(&mut g, 3, 4);

        assert_eq!(g.items[4].depends_on_items, vec![5, 6]);
        assert!(g.items[4].conditionals.is_empty());
        assert_eq!(g.items[5].cannot_require_items, vec![3]);
        assert_eq!(g.items[6].cannot_require_items, vec![3]);
    }

    #[test]
    fn common_member_is_promoted_one_at_a_time() {
        let mut g = graph();
        g.items[4].conditionals = vec![vec![5, 6, 7], vec![6, 7, 8]];

        update_conditionals(&mut g, 3, 4);
        assert_eq!(g.items[4].depends_on_items, vec![6]);
        assert_eq!(g.items[4].conditionals, vec![vec![5, 7], vec![7, 8]]);

        update_conditionals(&mut g, 3, 4);
        assert_eq!(g.items[4].depends_on_items, vec![6, 7]);
        assert_eq!(g.items[4].conditionals, vec![vec![5], vec![8]]);

        // Nothing left in common.
        update_conditionals(&mut g, 3, 4);
        assert_eq!(g.items[4].conditionals, vec![vec![5], vec![8]]);
    }

    #[test]
    fn emptied_group_drops_every_alternative() {
        let mut g = graph();
        g.items[4].conditionals = vec![vec![5], vec![5, 6]];
        update_conditionals(&mut g, 3, 4);
        assert_eq!(g.items[4].depends_on_items, vec![5]);
        assert!(g.items[4].conditionals.is_empty());
    }

    #[test]
    fn reduction_is_idempotent_once_reduced() {
        let mut g = graph();
        g.items[4].conditionals = vec![vec![5, 6]];
        update_conditionals(&mut g, 3, 4);
        let reduced = g.clone();
        update_conditionals(&mut g, 3, 4);
        assert_eq!(g, reduced);

        let mut untouched = graph();
        let before = untouched.clone();
        update_conditionals(&mut untouched, 3, 4);
        assert_eq!(untouched, before);
    }

    #[test]
    fn check_records_back_edges_through_fake_items() {
        let mut g = graph();
        g.items[4].depends_on_items = vec![AREA_SOUTH_ACCESS];
        g.items[AREA_SOUTH_ACCESS].depends_on_items = vec![6];
        check_conditionals(&mut g, 3, 4, &[4]);

        assert_eq!(g.items[AREA_SOUTH_ACCESS].cannot_require_items, vec![3]);
        assert_eq!(g.items[6].cannot_require_items, vec![3]);
    }

    #[test]
    fn check_narrows_time_of_temporary_dependencies() {
        let mut g = graph();
        g.items[3].time_needed = 0b000110;
        g.items[TRADE_ITEM_ROOM_KEY].time_needed = 0b000011;
        g.items[4].depends_on_items = vec![TRADE_ITEM_ROOM_KEY];
        check_conditionals(&mut g, 3, 4, &[4]);
        assert_eq!(g.items[TRADE_ITEM_ROOM_KEY].time_needed, 0b000010);
    }

    #[test]
    fn blast_mask_requirements_cleared_for_permanent_items() {
        let mut g = graph();
        g.items[MASK_BLAST].depends_on_items = vec![6];
        check_conditionals(&mut g, 3, MASK_BLAST, &[MASK_BLAST]);
        assert!(g.items[MASK_BLAST].depends_on_items.is_empty());
        assert!(g.items[6].cannot_require_items.is_empty());
    }

    #[test]
    fn remove_drops_marked_groups_and_guards_survivors() {
        let mut g = graph();
        g.items[4].conditionals = vec![vec![5], vec![6, 7], vec![8]];
        remove_conditionals(&mut g, 3, &[(4, 0), (4, 2), (4, 0)]);

        assert_eq!(g.items[4].conditionals, vec![vec![6, 7]]);
        assert_eq!(g.items[6].cannot_require_items, vec![3]);
        assert_eq!(g.items[7].cannot_require_items, vec![3]);
        assert!(g.items[5].cannot_require_items.is_empty());
    }

    #[test]
    fn remove_keeps_groups_when_all_are_marked() {
        let mut g = graph();
        g.items[4].conditionals = vec![vec![5], vec![6]];
        remove_conditionals(&mut g, 3, &[(4, 0), (4, 1)]);
        assert_eq!(g.items[4].conditionals, vec![vec![5], vec![6]]);
    }
}
