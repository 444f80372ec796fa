//! First-name based partition of channel members.

use super::members::{MemberId, MemberMap};
use super::names::NameSet;

/// Classification bucket for one member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Unknown];

    /// File stem used for this bucket's output.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unknown => "unknown",
        }
    }
}

/// Disjoint, order-preserving partition of a [`MemberMap`]'s keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationResult {
    pub male: Vec<MemberId>,
    pub female: Vec<MemberId>,
    pub unknown: Vec<MemberId>,
}

impl ClassificationResult {
    pub fn group(&self, gender: Gender) -> &[MemberId] {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
            Gender::Unknown => &self.unknown,
        }
    }

    fn group_mut(&mut self, gender: Gender) -> &mut Vec<MemberId> {
        match gender {
            Gender::Male => &mut self.male,
            Gender::Female => &mut self.female,
            Gender::Unknown => &mut self.unknown,
        }
    }

    pub fn len(&self) -> usize {
        self.male.len() + self.female.len() + self.unknown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Output labels for one bucket, in classification order.
    ///
    /// Ids missing from `members` are skipped.
    pub fn labels(&self, gender: Gender, members: &MemberMap) -> Vec<String> {
        self.group(gender)
            .iter()
            .filter_map(|id| members.get(id).map(|profile| profile.label(*id)))
            .collect()
    }
}

/// Bucket for a single first name. Male wins when a name is in both sets.
pub fn classify_name(
    first_name: Option<&str>,
    male_names: &NameSet,
    female_names: &NameSet,
) -> Gender {
    let Some(name) = first_name else {
        return Gender::Unknown;
    };
    let name = name.to_lowercase();
    if male_names.contains(&name) {
        Gender::Male
    } else if female_names.contains(&name) {
        Gender::Female
    } else {
        Gender::Unknown
    }
}

/// Partition members by first name. Last names are ignored.
pub fn classify(
    members: &MemberMap,
    male_names: &NameSet,
    female_names: &NameSet,
) -> ClassificationResult {
    let mut result = ClassificationResult::default();
    for (id, profile) in members {
        let gender = classify_name(profile.first_name.as_deref(), male_names, female_names);
        result.group_mut(gender).push(*id);
    }
    result
}
