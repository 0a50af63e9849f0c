use std::sync::Arc;

use lexicon::{CandidateSet, Label};

use crate::types::{IdentitySet, Schema};

#[derive(Debug, Clone)]
struct Member {
    position: usize,
    lemma: String,
}

/// Candidates of one name grouped by label, in label order.
#[derive(Debug, Clone, Default)]
struct Groups {
    by_label: [Vec<Member>; 4],
    positions: usize,
}

impl Groups {
    fn new(candidates: &[CandidateSet]) -> Self {
        let mut groups = Groups {
            positions: candidates.len(),
            ..Groups::default()
        };

        for (position, set) in candidates.iter().enumerate() {
            for candidate in set {
                groups.by_label[candidate.label.index()].push(Member {
                    position,
                    lemma: candidate.lemma.clone(),
                });
            }
        }
        groups
    }

    fn get(&self, label: Label) -> &[Member] {
        &self.by_label[label.index()]
    }

    fn slot(&self, group: usize) -> &[Member] {
        &self.by_label[group]
    }

    /// Flat index over every group, used by the singles stage.
    fn single(&self, group: usize, item: usize) -> Option<&Member> {
        self.by_label.get(group)?.get(item)
    }
}

#[derive(Debug, Clone)]
enum Stage {
    Singles { group: usize, item: usize },
    Pairs { first: usize, last: usize },
    /// `slots` holds the group index of each schema label.
    Schema {
        schema: usize,
        slots: Vec<usize>,
        odometer: Option<Vec<usize>>,
    },
    Done,
}

/// Lazy, capped sequence of identity sets for one name.
///
/// Order: every single candidate (grouped firstname, patronymic, lastname,
/// no-match), then firstname × lastname pairs, then each configured schema.
/// Combinations drawing two members from the same token position are
/// skipped. At most `cap` sets are yielded.
#[derive(Debug, Clone)]
pub struct Combinations {
    groups: Groups,
    schemas: Arc<[Schema]>,
    stage: Stage,
    cap: usize,
    emitted: usize,
    truncated: bool,
}

impl Combinations {
    pub(crate) fn new(candidates: &[CandidateSet], schemas: Arc<[Schema]>, cap: usize) -> Self {
        Self {
            groups: Groups::new(candidates),
            schemas,
            stage: Stage::Singles { group: 0, item: 0 },
            cap,
            emitted: 0,
            truncated: false,
        }
    }

    /// Number of sets yielded so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// True once the cap stopped generation before the sequence was exhausted.
    pub fn truncated(&self) -> bool {
        self.truncated
    }

    fn schema_stage(&self, schema: usize) -> Stage {
        match self.schemas.get(schema) {
            Some(found) => Stage::Schema {
                schema,
                slots: found.labels().iter().map(|label| label.index()).collect(),
                odometer: None,
            },
            None => Stage::Done,
        }
    }

    fn advance(&mut self) -> Option<IdentitySet> {
        loop {
            match &mut self.stage {
                Stage::Singles { group, item } => {
                    if *group >= Label::ALL.len() {
                        self.stage = Stage::Pairs { first: 0, last: 0 };
                        continue;
                    }
                    match self.groups.single(*group, *item) {
                        Some(member) => {
                            *item += 1;
                            return Some(IdentitySet::from_iter([member.lemma.as_str()]));
                        }
                        None => {
                            *group += 1;
                            *item = 0;
                        }
                    }
                }
                Stage::Pairs { first, last } => {
                    let firsts = self.groups.get(Label::Firstname);
                    let lasts = self.groups.get(Label::Lastname);

                    if self.groups.positions < 2 || *first >= firsts.len() || lasts.is_empty() {
                        self.stage = self.schema_stage(0);
                        continue;
                    }

                    let f = &firsts[*first];
                    let l = &lasts[*last];
                    *last += 1;
                    if *last == lasts.len() {
                        *last = 0;
                        *first += 1;
                    }

                    if f.position != l.position {
                        return Some(IdentitySet::from_iter([
                            f.lemma.as_str(),
                            l.lemma.as_str(),
                        ]));
                    }
                }
                Stage::Schema {
                    schema,
                    slots,
                    odometer,
                } => {
                    let groups = &self.groups;
                    let current = match odometer {
                        None if slots.iter().any(|&g| groups.slot(g).is_empty()) => None,
                        None => Some(odometer.insert(vec![0; slots.len()])),
                        Some(digits) => tick(digits, slots, groups).then_some(digits),
                    };

                    let Some(digits) = current else {
                        let next = *schema + 1;
                        self.stage = self.schema_stage(next);
                        continue;
                    };

                    let chosen: Vec<&Member> = digits
                        .iter()
                        .zip(slots.iter())
                        .map(|(&digit, &group)| &groups.slot(group)[digit])
                        .collect();
                    if distinct_positions(&chosen) {
                        return Some(chosen.iter().map(|m| m.lemma.as_str()).collect());
                    }
                }
                Stage::Done => return None,
            }
        }
    }
}

/// Advance an odometer with the last slot fastest. Returns false on wrap.
fn tick(digits: &mut [usize], slots: &[usize], groups: &Groups) -> bool {
    for slot in (0..digits.len()).rev() {
        digits[slot] += 1;
        if digits[slot] < groups.slot(slots[slot]).len() {
            return true;
        }
        digits[slot] = 0;
    }
    false
}

fn distinct_positions(chosen: &[&Member]) -> bool {
    chosen
        .iter()
        .enumerate()
        .all(|(i, a)| chosen[i + 1..].iter().all(|b| a.position != b.position))
}

impl Iterator for Combinations {
    type Item = IdentitySet;

    fn next(&mut self) -> Option<Self::Item> {
        if self.emitted >= self.cap {
            if !self.truncated && !matches!(self.stage, Stage::Done) {
                self.truncated = self.advance().is_some();
                self.stage = Stage::Done;
            }
            return None;
        }

        let set = self.advance()?;
        self.emitted += 1;
        Some(set)
    }
}
