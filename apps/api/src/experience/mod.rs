// Experience duration engine.
// Parses work periods, derives per-record durations, and totals months across
// records without counting overlapping roles twice. Pure and synchronous: no I/O here
// apart from the HTTP handlers.

pub mod aggregate;
pub mod dates;
pub mod duration;
pub mod error;
pub mod handlers;
pub mod labels;
pub mod record;
pub mod skills;
