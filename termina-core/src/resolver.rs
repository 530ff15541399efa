//! Dependency resolution for a single placement candidate.
//!
//! A `DependencyResolver` answers whether putting one item at a location
//! would make that location (transitively) require the item itself. Results
//! are memoised for the lifetime of one resolver, which callers create fresh
//! for every candidate.

use std::collections::HashMap;

use log::trace;

use crate::items::{is_fake_item, is_temporary_item, MASK_BLAST};
use crate::logic::ItemGraph;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dependence {
    NotDependent,
    Dependent,
    /// The search looped back onto the current path through these ids.
    Circular(Vec<usize>),
}

impl Dependence {
    pub fn is_dependent(&self) -> bool {
        !matches!(self, Dependence::NotDependent)
    }

    /// A cycle made only of `id` cannot be escaped from outside.
    fn is_self_cycle(&self, id: usize) -> bool {
        matches!(self, Dependence::Circular(ids) if ids.iter().all(|&i| i == id))
    }
}

/// True when every location on `path` after the root holds a fake or a
/// temporary item.
pub(crate) fn path_is_temporary(graph: &ItemGraph, path: &[usize]) -> bool {
    path.iter().skip(1).all(|&location| {
        is_fake_item(location) || graph.item_at(location).map_or(false, is_temporary_item)
    })
}

pub struct DependencyResolver<'a> {
    graph: &'a ItemGraph,
    current: usize,
    /// Nothing can depend on `current`, so every check is trivially clear.
    unreferenced: bool,
    checked: HashMap<usize, Dependence>,
    condition_removes: Vec<(usize, usize)>,
}

impl<'a> DependencyResolver<'a> {
    /// Resolver for placing `current` at `target`. The target itself is
    /// seeded as dependent so a search that reaches it again stops there.
    pub fn new(graph: &'a ItemGraph, current: usize, target: usize) -> Self {
        let unreferenced = graph.items[current].time_needed == 0
            && !graph.items.iter().any(|item| {
                item.depends_on_items.contains(&current)
                    || item.conditionals.iter().any(|group| group.contains(&current))
            });

        let mut checked = HashMap::new();
        checked.insert(target, Dependence::Dependent);

        DependencyResolver {
            graph,
            current,
            unreferenced,
            checked,
            condition_removes: Vec::new(),
        }
    }

    /// `(location, group index)` pairs whose conditional group could only be
    /// satisfied through the current item.
    pub fn into_condition_removes(self) -> Vec<(usize, usize)> {
        self.condition_removes
    }

    fn memo(&self, id: usize) -> Dependence {
        self.checked
            .get(&id)
            .cloned()
            .unwrap_or(Dependence::NotDependent)
    }

    /// Missing entries and cycles that were closed on a different path must
    /// be recomputed.
    fn needs_check(&self, id: usize, path: &[usize]) -> bool {
        match self.checked.get(&id) {
            None => true,
            Some(Dependence::Circular(ids)) => !ids.iter().all(|i| path.contains(i)),
            Some(_) => false,
        }
    }

    fn resolve_child(&mut self, id: usize, path: &[usize]) {
        if self.needs_check(id, path) {
            let mut child_path = path.to_vec();
            child_path.push(id);
            let result = self.check_dependence(id, &child_path);
            self.checked.insert(id, result);
        }
    }

    /// Whether `target` requires the current item. `path` is the chain of
    /// locations visited so far, starting at the placement target.
    pub fn check_dependence(&mut self, target: usize, path: &[usize]) -> Dependence {
        let graph = self.graph;
        let current = self.current;
        trace!("check_dependence({current}, {target})");

        if self.unreferenced {
            return Dependence::NotDependent;
        }

        // Permanent items are never lost, so Blast Mask's requirements do not apply.
        if target == MASK_BLAST && !is_temporary_item(current) {
            return Dependence::NotDependent;
        }

        let current_item = &graph.items[current];
        let target_item = &graph.items[target];

        if current_item.time_needed != 0
            && path_is_temporary(graph, path)
            && current_item.time_needed & target_item.time_available == 0
        {
            trace!(
                "{current} is needed at {} but {target} is only available at {}",
                current_item.time_needed,
                target_item.time_available
            );
            return Dependence::Dependent;
        }

        if target_item.has_conditionals() {
            let groups = &target_item.conditionals;

            if groups.iter().all(|group| group.contains(&current)) {
                trace!("all conditionals of {target} contain {current}");
                return Dependence::Dependent;
            }

            for forbidden in &current_item.cannot_require_items {
                if groups
                    .iter()
                    .all(|group| group.contains(forbidden) || group.contains(&current))
                {
                    trace!("all conditionals of {target} cannot be required by {current}");
                    return Dependence::Dependent;
                }
            }

            let mut matched_groups = 0;
            let mut circular: Vec<usize> = Vec::new();

            for (group_index, group) in groups.iter().enumerate() {
                let mut group_matched = false;

                for &member in group {
                    let member_item = &graph.items[member];
                    if !is_fake_item(member)
                        && !member_item.replaces_another_item()
                        && member != current
                    {
                        continue;
                    }

                    let d = member_item.replaces_item_id.unwrap_or(member);
                    if d == current {
                        self.checked.insert(d, Dependence::Dependent);
                    } else {
                        if path.contains(&d) {
                            self.checked.insert(d, Dependence::Circular(vec![d]));
                        }
                        self.resolve_child(d, path);
                    }

                    let mut result = self.memo(d);
                    if !result.is_dependent() {
                        continue;
                    }

                    if !path.contains(&d) && result.is_self_cycle(d) {
                        result = Dependence::Dependent;
                        self.checked.insert(d, Dependence::Dependent);
                    }

                    match result {
                        Dependence::Circular(ids) => {
                            for id in ids {
                                if !circular.contains(&id) {
                                    circular.push(id);
                                }
                            }
                        }
                        _ => {
                            if !self.condition_removes.contains(&(target, group_index)) {
                                self.condition_removes.push((target, group_index));
                            }
                        }
                    }

                    if !group_matched {
                        matched_groups += 1;
                        group_matched = true;
                    }
                }
            }

            if matched_groups == groups.len() {
                if !circular.is_empty() {
                    return Dependence::Circular(circular);
                }
                trace!("all conditionals of {target} failed dependency check for {current}");
                return Dependence::Dependent;
            }
        }

        for &dependency in &target_item.depends_on_items {
            if dependency == current {
                trace!("{target} has direct dependence on {current}");
                return Dependence::Dependent;
            }

            if let Some(forbidden) = current_item
                .cannot_require_items
                .iter()
                .find(|id| target_item.depends_on_items.contains(id))
            {
                trace!("dependence {forbidden} of {target} cannot be required by {current}");
                return Dependence::Dependent;
            }

            let dependency_item = &graph.items[dependency];
            if !is_fake_item(dependency) && !dependency_item.replaces_another_item() {
                continue;
            }

            let d = dependency_item.replaces_item_id.unwrap_or(dependency);
            if path.contains(&d) {
                let cycle = Dependence::Circular(vec![d]);
                self.checked.insert(d, cycle.clone());
                return cycle;
            }
            self.resolve_child(d, path);

            let result = self.memo(d);
            if result.is_dependent() {
                trace!("{current} is dependent on {d}");
                if result.is_self_cycle(d) {
                    self.checked.insert(d, Dependence::Dependent);
                    return Dependence::Dependent;
                }
                return result;
            }
        }

        Dependence::NotDependent
    }
}

/// Runs a fresh resolution of placing `current` at `target`.
pub fn check_dependence(
    graph: &ItemGraph,
    current: usize,
    target: usize,
) -> (Dependence, Vec<(usize, usize)>) {
    let mut resolver = DependencyResolver::new(graph, current, target);
    let dependence = resolver.check_dependence(target, &[target]);
    (dependence, resolver.into_condition_removes())
}
