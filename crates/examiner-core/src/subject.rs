//! Subjects: a labelled holder for at most one exam.

use std::fmt;

use crate::exam::Exam;

/// A named subject that owns zero or one exam.
#[derive(Debug, Clone)]
pub struct Subject {
    pub id: u32,
    pub name: String,
    exam: Option<Exam>,
}

impl Subject {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            exam: None,
        }
    }

    /// Attach an exam, replacing any exam already held. The replaced exam
    /// is returned.
    pub fn assign_exam(&mut self, exam: Exam) -> Option<Exam> {
        let previous = self.exam.replace(exam);
        if previous.is_some() {
            tracing::debug!(subject = self.id, "replacing existing exam");
        }
        previous
    }

    pub fn exam(&self) -> Option<&Exam> {
        self.exam.as_ref()
    }

    pub fn exam_mut(&mut self) -> Option<&mut Exam> {
        self.exam.as_mut()
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Subject ID: {}, Name: {}", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exam::ExamKind;

    #[test]
    fn new_subject_has_no_exam() {
        let subject = Subject::new(1, "Rust Programming");
        assert!(subject.exam().is_none());
        assert_eq!(subject.to_string(), "Subject ID: 1, Name: Rust Programming");
    }

    #[test]
    fn assign_replaces_previous_exam() {
        let mut subject = Subject::new(2, "Networks");
        assert!(subject.assign_exam(Exam::new(ExamKind::Final, 60, 10)).is_none());

        let previous = subject
            .assign_exam(Exam::new(ExamKind::Practical, 30, 3))
            .unwrap();
        assert_eq!(previous.kind(), ExamKind::Final);

        let held = subject.exam().unwrap();
        assert_eq!(held.kind(), ExamKind::Practical);
        assert_eq!(held.time_minutes(), 30);
    }

    #[test]
    fn exam_mut_reaches_held_exam() {
        let mut subject = Subject::new(3, "Maths");
        subject.assign_exam(Exam::new(ExamKind::Final, 60, 1));
        subject
            .exam_mut()
            .unwrap()
            .add_question(crate::model::Question::true_false("Q", "B", 1, true));
        assert_eq!(subject.exam().unwrap().questions().len(), 1);
    }
}
