// SPDX-License-Identifier: MPL-2.0
//! Per-owner story groups.
//!
//! Groups are never stored: they are recomputed from the story sequence
//! whenever needed, so membership cannot drift from the data.

use super::{OwnerId, Story, ViewedSet};

/// Stories sharing one owner, in their original relative order.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryGroup<'a> {
    stories: &'a [Story],
    owner: &'a OwnerId,
    /// Indices into `stories`, ascending.
    members: Vec<usize>,
}

impl<'a> StoryGroup<'a> {
    #[must_use]
    pub fn owner(&self) -> &'a OwnerId {
        self.owner
    }

    /// Sequence index the viewer opens at when this group is selected.
    #[must_use]
    pub fn start_index(&self) -> usize {
        self.members[0]
    }

    /// Sequence indices of the group's stories.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.members
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates the group's stories in order.
    pub fn stories(&self) -> impl Iterator<Item = &'a Story> + '_ {
        let stories = self.stories;
        self.members.iter().map(move |&index| &stories[index])
    }

    /// Position within the group of the story at sequence index `index`.
    #[must_use]
    pub fn position_of(&self, index: usize) -> Option<usize> {
        self.members.iter().position(|&member| member == index)
    }

    /// Returns true if any story in the group has not been viewed yet.
    #[must_use]
    pub fn has_unviewed(&self, viewed: &ViewedSet) -> bool {
        self.stories().any(|story| !viewed.contains(story.id))
    }

    /// Returns the newest story of the group.
    #[must_use]
    pub fn most_recent(&self) -> &'a Story {
        // Members are never empty: a group exists because a story has this owner.
        self.stories()
            .fold(&self.stories[self.members[0]], |newest, story| {
                if story.created_at > newest.created_at {
                    story
                } else {
                    newest
                }
            })
    }
}

/// Groups stories by owner, ordered by each owner's first appearance.
#[must_use]
pub fn group_by_owner(stories: &[Story]) -> Vec<StoryGroup<'_>> {
    let mut groups: Vec<StoryGroup<'_>> = Vec::new();
    for (index, story) in stories.iter().enumerate() {
        match groups.iter_mut().find(|group| group.owner == &story.owner) {
            Some(group) => group.members.push(index),
            None => groups.push(StoryGroup {
                stories,
                owner: &story.owner,
                members: vec![index],
            }),
        }
    }
    groups
}

/// Returns the group of the story at sequence index `index`.
#[must_use]
pub fn group_containing(stories: &[Story], index: usize) -> Option<StoryGroup<'_>> {
    let owner = &stories.get(index)?.owner;
    let members = stories
        .iter()
        .enumerate()
        .filter(|(_, story)| &story.owner == owner)
        .map(|(member, _)| member)
        .collect();
    Some(StoryGroup {
        stories,
        owner,
        members,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::story::fixtures::stories;
    use crate::story::StoryId;

    #[test]
    fn groups_follow_first_appearance_and_keep_order() {
        let stories = stories(&[(1, "ann"), (2, "bob"), (3, "ann"), (4, "cid"), (5, "bob")]);
        let groups = group_by_owner(&stories);

        let owners: Vec<_> = groups.iter().map(|g| g.owner().as_str()).collect();
        assert_eq!(owners, vec!["ann", "bob", "cid"]);
        assert_eq!(groups[0].indices(), &[0, 2]);
        assert_eq!(groups[1].indices(), &[1, 4]);
        assert_eq!(groups[1].start_index(), 1);
        assert_eq!(groups[2].len(), 1);
    }

    #[test]
    fn every_story_belongs_to_exactly_one_group() {
        let stories = stories(&[(1, "ann"), (2, "bob"), (3, "ann")]);
        let groups = group_by_owner(&stories);
        let total: usize = groups.iter().map(StoryGroup::len).sum();
        assert_eq!(total, stories.len());
    }

    #[test]
    fn group_containing_matches_grouping() {
        let stories = stories(&[(1, "ann"), (2, "bob"), (3, "ann")]);
        let group = group_containing(&stories, 2).expect("index in range");
        assert_eq!(group.owner().as_str(), "ann");
        assert_eq!(group.position_of(2), Some(1));
        assert_eq!(group.position_of(1), None);
        assert!(group_containing(&stories, 3).is_none());
    }

    #[test]
    fn has_unviewed_tracks_viewed_set() {
        let stories = stories(&[(1, "ann"), (2, "ann")]);
        let groups = group_by_owner(&stories);
        let mut viewed = ViewedSet::new();

        assert!(groups[0].has_unviewed(&viewed));
        viewed.insert(StoryId(1));
        assert!(groups[0].has_unviewed(&viewed));
        viewed.insert(StoryId(2));
        assert!(!groups[0].has_unviewed(&viewed));
    }

    #[test]
    fn most_recent_picks_latest_timestamp() {
        // Fixture timestamps decrease with position, so the first is newest.
        let stories = stories(&[(1, "ann"), (2, "ann"), (3, "ann")]);
        let groups = group_by_owner(&stories);
        assert_eq!(groups[0].most_recent().id, StoryId(1));
    }

    #[test]
    fn empty_sequence_has_no_groups() {
        assert!(group_by_owner(&[]).is_empty());
    }
}
