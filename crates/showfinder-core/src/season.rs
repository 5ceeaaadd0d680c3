//! Season grouping
//!
//! Buckets a flat episode list by season number for display. Seasons keep the
//! order in which they first appear in the input and episodes keep their input
//! order inside each season. Nothing is sorted.

use std::collections::HashMap;

use crate::types::Episode;

/// Key of a season group
pub type SeasonKey = u32;

/// Episodes of one season, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonGroup {
    pub season: SeasonKey,
    pub episodes: Vec<Episode>,
}

impl SeasonGroup {
    /// Label shown for the season section
    pub fn label(&self) -> String {
        self.season.to_string()
    }
}

/// Insertion-ordered mapping from season to episodes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeasonGroups {
    groups: Vec<SeasonGroup>,
    index: HashMap<SeasonKey, usize>,
}

impl SeasonGroups {
    /// Append `episode` to its season, opening the season on first sight
    fn push(&mut self, episode: Episode) {
        match self.index.get(&episode.season) {
            Some(&position) => self.groups[position].episodes.push(episode),
            None => {
                self.index.insert(episode.season, self.groups.len());
                self.groups.push(SeasonGroup {
                    season: episode.season,
                    episodes: vec![episode],
                });
            }
        }
    }

    /// Episodes of `season`, if any were seen
    pub fn get(&self, season: SeasonKey) -> Option<&[Episode]> {
        self.index
            .get(&season)
            .map(|&position| self.groups[position].episodes.as_slice())
    }

    /// Season keys in first-occurrence order
    pub fn keys(&self) -> impl Iterator<Item = SeasonKey> + '_ {
        self.groups.iter().map(|g| g.season)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeasonGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<'a> IntoIterator for &'a SeasonGroups {
    type Item = &'a SeasonGroup;
    type IntoIter = std::slice::Iter<'a, SeasonGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Group episodes by season.
///
/// # Examples
/// ```
/// use showfinder_core::{group_by_season, Episode};
///
/// let ep = |id, season| Episode { id, name: format!("e{}", id), season, number: None };
/// let groups = group_by_season(&[ep(1, 2), ep(2, 1), ep(3, 2)]);
///
/// assert_eq!(groups.keys().collect::<Vec<_>>(), vec![2, 1]);
/// assert_eq!(groups.get(2).unwrap().len(), 2);
/// ```
pub fn group_by_season(episodes: &[Episode]) -> SeasonGroups {
    let mut groups = SeasonGroups::default();
    for episode in episodes {
        groups.push(episode.clone());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn episode(id: u64, season: u32) -> Episode {
        Episode {
            id,
            name: format!("Episode {}", id),
            season,
            number: None,
        }
    }

    #[test]
    fn test_group_empty() {
        let groups = group_by_season(&[]);
        assert!(groups.is_empty());
        assert_eq!(groups.len(), 0);
        assert_eq!(groups.get(1), None);
    }

    #[test]
    fn test_group_keeps_first_occurrence_order() {
        let groups = group_by_season(&[episode(1, 3), episode(2, 1), episode(3, 3), episode(4, 2)]);
        assert_eq!(groups.keys().collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn test_group_does_not_sort_within_season() {
        let groups = group_by_season(&[episode(9, 1), episode(2, 1), episode(5, 1)]);
        let ids: Vec<u64> = groups.get(1).unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![9, 2, 5]);
    }

    #[test]
    fn test_group_label() {
        let groups = group_by_season(&[episode(1, 12)]);
        let labels: Vec<String> = groups.iter().map(SeasonGroup::label).collect();
        assert_eq!(labels, vec!["12"]);
    }

    proptest! {
        #[test]
        fn prop_group_preserves_per_season_order(seasons in prop::collection::vec(1u32..6, 0..60)) {
            let episodes: Vec<Episode> = seasons
                .iter()
                .enumerate()
                .map(|(i, &s)| episode(i as u64, s))
                .collect();
            let groups = group_by_season(&episodes);

            for group in &groups {
                let expected: Vec<u64> = episodes
                    .iter()
                    .filter(|e| e.season == group.season)
                    .map(|e| e.id)
                    .collect();
                let actual: Vec<u64> = group.episodes.iter().map(|e| e.id).collect();
                prop_assert_eq!(actual, expected);
            }

            let total: usize = groups.iter().map(|g| g.episodes.len()).sum();
            prop_assert_eq!(total, episodes.len());
        }

        #[test]
        fn prop_group_keys_unique_in_first_occurrence_order(seasons in prop::collection::vec(1u32..10, 0..60)) {
            let episodes: Vec<Episode> = seasons
                .iter()
                .enumerate()
                .map(|(i, &s)| episode(i as u64, s))
                .collect();
            let groups = group_by_season(&episodes);

            let mut expected = Vec::new();
            for &season in &seasons {
                if !expected.contains(&season) {
                    expected.push(season);
                }
            }
            prop_assert_eq!(groups.keys().collect::<Vec<_>>(), expected);
        }
    }
}
