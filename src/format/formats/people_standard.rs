//! Counting lines, one entry per role.

use crate::format::error::FormatError;
use crate::format::formats::semicolon_list;
use crate::format::traits::OutputFormat;
use crate::session::{AnnotationSession, Mode, PeopleState};

/// `line-crossing-<Role>=x;y;...` for every drawn role, in role order.
pub struct PeopleStandardFormat;

/// Standard entries for the lines drawn so far.
pub(crate) fn standard_lines(people: &PeopleState) -> Vec<String> {
    people
        .lines()
        .map(|line| format!("{}={}", line.role.key(), semicolon_list(line.logical_points())))
        .collect()
}

impl OutputFormat for PeopleStandardFormat {
    fn id(&self) -> &'static str {
        "standard"
    }

    fn display_name(&self) -> &'static str {
        "Standard"
    }

    fn description(&self) -> &'static str {
        "3 separate lines: Main + Entry + Exit"
    }

    fn mode(&self) -> Mode {
        Mode::People
    }

    fn encode(&self, session: &AnnotationSession) -> Result<String, FormatError> {
        Ok(standard_lines(session.people()).join("\n"))
    }
}
