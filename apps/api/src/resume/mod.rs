// Resume profile: loading the data file and turning it into typed records.

pub mod handlers;
pub mod profile;
pub mod source;
