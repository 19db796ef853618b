//! Counting lines merged into Entry and Exit paths.
//!
//! With all three roles drawn, the Entry path is the Entry line followed by
//! the Main line, and the Exit path is the Exit line followed by the Main
//! line walked backwards. Until then the standard layout is emitted with a
//! reminder appended.

use crate::format::error::FormatError;
use crate::format::formats::people_standard::standard_lines;
use crate::format::formats::semicolon_list;
use crate::format::traits::OutputFormat;
use crate::model::Role;
use crate::session::{AnnotationSession, Mode};

/// Appended to the standard layout while a role is still missing.
pub const INCOMPLETE_HINT: &str = "// Draw all 3 lines for combined format";

pub struct PeopleCombinedFormat;

impl OutputFormat for PeopleCombinedFormat {
    fn id(&self) -> &'static str {
        "combined"
    }

    fn display_name(&self) -> &'static str {
        "Combined"
    }

    fn description(&self) -> &'static str {
        "Combined: Entry & Exit each merged with Main endpoints"
    }

    fn mode(&self) -> Mode {
        Mode::People
    }

    fn encode(&self, session: &AnnotationSession) -> Result<String, FormatError> {
        let people = session.people();
        let (Some(main), Some(entry), Some(exit)) = (
            people.line(Role::Main),
            people.line(Role::Entry),
            people.line(Role::Exit),
        ) else {
            let lines = standard_lines(people);
            if lines.is_empty() {
                return Ok(String::new());
            }
            return Ok(format!("{}\n\n{}", lines.join("\n"), INCOMPLETE_HINT));
        };

        let entry_path = entry.logical_points().chain(main.logical_points());
        let exit_path = exit.logical_points().chain(main.logical_points().rev());
        Ok(format!(
            "{}={}\n{}={}",
            Role::Entry.key(),
            semicolon_list(entry_path),
            Role::Exit.key(),
            semicolon_list(exit_path)
        ))
    }
}
