//! Skill inventory across experience records.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::experience::record::ExperienceRecord;

/// A skill as written in the resume data: either a bare name or a name with a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Skill {
    Name(String),
    Categorized {
        name: String,
        #[serde(default)]
        category: Option<String>,
    },
}

impl Skill {
    pub fn name(&self) -> &str {
        match self {
            Skill::Name(name) => name,
            Skill::Categorized { name, .. } => name,
        }
    }

    pub fn category(&self) -> Option<&str> {
        match self {
            Skill::Name(_) => None,
            Skill::Categorized { category, .. } => category.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCount {
    pub name: String,
    pub mentions: usize,
}

/// Number of times each skill is listed across all records, keyed case-insensitively.
///
/// Sorted by count descending, then name.
pub fn skill_frequency(records: &[ExperienceRecord], limit: usize) -> Vec<SkillCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for skill in records.iter().flat_map(|r| r.details.skills.iter()) {
        let name = skill.name().trim().to_lowercase();
        if !name.is_empty() {
            *counts.entry(name).or_default() += 1;
        }
    }

    let mut ranked: Vec<SkillCount> = counts
        .into_iter()
        .map(|(name, mentions)| SkillCount { name, mentions })
        .collect();
    ranked.sort_by(|a, b| b.mentions.cmp(&a.mentions).then_with(|| a.name.cmp(&b.name)));
    ranked.truncate(limit);
    ranked
}

/// Distinct skills ignoring case, ordered by the lowercase name.
///
/// The last spelling seen wins. A category given by any spelling is kept.
pub fn distinct_skills(records: &[ExperienceRecord]) -> Vec<Skill> {
    let mut seen: BTreeMap<String, Skill> = BTreeMap::new();
    for skill in records.iter().flat_map(|r| r.details.skills.iter()) {
        let key = skill.name().trim().to_lowercase();
        if key.is_empty() {
            continue;
        }
        let category = skill
            .category()
            .or_else(|| seen.get(&key).and_then(Skill::category))
            .map(str::to_string);
        let merged = match category {
            Some(category) => Skill::Categorized {
                name: skill.name().to_string(),
                category: Some(category),
            },
            None => skill.clone(),
        };
        seen.insert(key, merged);
    }
    seen.into_values().collect()
}
