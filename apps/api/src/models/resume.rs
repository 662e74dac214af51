use serde::{Deserialize, Serialize};

use crate::experience::record::ExperienceDetails;

/// Resume data as stored on disk, before any date is parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawResume {
    #[serde(flatten)]
    pub person: Person,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub exp: Vec<RawExperience>,
    #[serde(default)]
    pub edu: Vec<Education>,
    #[serde(default)]
    pub spoken_languages: Vec<SpokenLanguage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: Option<String>,
    pub tel: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub expected_position: String,
    pub expected_salary: Option<String>,
    pub photo: Option<String>,
    pub about: Option<String>,
}

impl Person {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub icon: Option<String>,
    pub link: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub university: String,
    pub programme: String,
    pub year_start: i32,
    pub year_end: i32,
    pub website: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpokenLanguage {
    pub name: String,
    pub level: String,
}

/// One `exp` entry. Dates stay as entered until the profile is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawExperience {
    pub work_start_date: Option<String>,
    pub work_end_date: Option<String>,
    #[serde(flatten)]
    pub details: ExperienceDetails,
}
