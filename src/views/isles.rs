use crate::models::{Boss, Isle};

/// Bosses partitioned into the three isles, each bucket in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IsleGroups<'a> {
    buckets: [Vec<&'a Boss>; 3],
}

impl<'a> IsleGroups<'a> {
    pub fn bucket(&self, isle: Isle) -> &[&'a Boss] {
        &self.buckets[isle.index()]
    }

    /// `(isle, bosses)` pairs in isle order, empty buckets included.
    pub fn iter(&self) -> impl Iterator<Item = (Isle, &[&'a Boss])> + '_ {
        Isle::ALL
            .into_iter()
            .map(move |isle| (isle, self.bucket(isle)))
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}

/// Group bosses by isle.
pub fn group_by_isle<'a, I>(bosses: I) -> IsleGroups<'a>
where
    I: IntoIterator<Item = &'a Boss>,
{
    let mut groups = IsleGroups::default();
    for boss in bosses {
        groups.buckets[boss.isle.index()].push(boss);
    }
    groups
}
