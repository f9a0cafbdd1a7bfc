//! The `examiner take` command.

use std::io;
use std::path::PathBuf;

use anyhow::Result;

use examiner_core::parser::{parse_exam_definition, validate_exam};
use examiner_core::subject::Subject;

use crate::config::load_config_from;
use crate::console::{ConsoleInput, ConsoleOutput};
use crate::session;

pub fn execute(definition: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config.as_deref())?;

    let mut input = ConsoleInput::new(io::stdin().lock());
    let mut out = ConsoleOutput::new(io::stdout().lock());

    let (mut subject, exam) = match definition {
        Some(path) => {
            let def = parse_exam_definition(&path, config.default_time_minutes)?;
            for w in validate_exam(&def.exam) {
                match w.question {
                    Some(n) => tracing::warn!("{}: question {n}: {}", path.display(), w.message),
                    None => tracing::warn!("{}: {}", path.display(), w.message),
                }
            }
            let subject = match def.subject {
                Some(header) => Subject::new(header.id, header.name),
                None => Subject::new(config.subject_id, config.subject_name),
            };
            (subject, def.exam)
        }
        None => {
            let subject = Subject::new(config.subject_id, config.subject_name);
            (subject, session::build_exam(&mut input, &mut out)?)
        }
    };

    subject.assign_exam(exam);
    let grade = session::run(&mut subject, &mut input, &mut out)?;
    tracing::info!(
        subject = %subject.name,
        earned = grade.earned,
        possible = grade.possible,
        "session complete"
    );

    Ok(())
}
