// The marks ledger: grade scale, per-student subject scores, and the
// line format used by the marks table.
//
// A marks line is `<username> <count>` followed by exactly `count`
// subject/score pairs, all single tokens. `parse_marks_line` is the
// inverse of `encode_marks_line` and rejects any line whose shape does
// not match its declared count.

use std::collections::BTreeMap;

/// Letter grade derived from a score. Never stored; recomputed on
/// display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_mark(mark: u8) -> Grade {
        if mark >= 90 {
            Grade::A
        } else if mark >= 80 {
            Grade::B
        } else if mark >= 70 {
            Grade::C
        } else if mark >= 60 {
            Grade::D
        } else {
            Grade::F
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        write!(f, "{}", letter)
    }
}

/// Subject to score mapping for one student. Iteration order is subject
/// order, which is also the on-disk order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarkSet {
    scores: BTreeMap<String, u8>,
}

impl MarkSet {
    pub fn new() -> MarkSet {
        MarkSet {
            scores: BTreeMap::new(),
        }
    }

    /// Insert or overwrite the score for a subject.
    pub fn set(&mut self, subject: &str, mark: u8) {
        self.scores.insert(subject.to_owned(), mark);
    }

    pub fn mark_for(&self, subject: &str) -> Option<u8> {
        self.scores.get(subject).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Display rows: subject, score, derived grade.
    pub fn rows(&self) -> impl Iterator<Item = (&str, u8, Grade)> {
        self.scores
            .iter()
            .map(|(subject, &mark)| (subject.as_str(), mark, Grade::from_mark(mark)))
    }
}

/// One marks-table line for one student.
pub fn encode_marks_line(username: &str, marks: &MarkSet) -> String {
    let mut line = format!("{} {}", username, marks.len());
    for (subject, mark, _) in marks.rows() {
        line.push_str(&format!(" {} {}", subject, mark));
    }
    line
}

/// Parse one marks-table line. `None` when the line is empty, the count
/// does not parse, or the pairs do not match the count.
pub fn parse_marks_line(line: &str) -> Option<(String, MarkSet)> {
    let mut fields = line.split_whitespace();
    let username = fields.next()?.to_owned();
    let count: usize = fields.next()?.parse().ok()?;

    let mut marks = MarkSet::new();
    for _ in 0..count {
        let subject = fields.next()?;
        let mark: u8 = fields.next()?.parse().ok()?;
        marks.set(subject, mark);
    }
    if fields.next().is_some() {
        return None;
    }
    Some((username, marks))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_boundaries_match_the_scale() {
        assert_eq!(Grade::from_mark(100), Grade::A);
        assert_eq!(Grade::from_mark(90), Grade::A);
        assert_eq!(Grade::from_mark(89), Grade::B);
        assert_eq!(Grade::from_mark(80), Grade::B);
        assert_eq!(Grade::from_mark(79), Grade::C);
        assert_eq!(Grade::from_mark(70), Grade::C);
        assert_eq!(Grade::from_mark(69), Grade::D);
        assert_eq!(Grade::from_mark(60), Grade::D);
        assert_eq!(Grade::from_mark(59), Grade::F);
        assert_eq!(Grade::from_mark(0), Grade::F);
    }

    #[test]
    fn grades_never_improve_as_scores_drop() {
        let rank = |g: Grade| match g {
            Grade::A => 4,
            Grade::B => 3,
            Grade::C => 2,
            Grade::D => 1,
            Grade::F => 0,
        };
        let mut prev = rank(Grade::from_mark(100));
        for mark in (0..100).rev() {
            let cur = rank(Grade::from_mark(mark));
            assert!(cur <= prev, "grade improved at {}", mark);
            prev = cur;
        }
    }

    #[test]
    fn marks_line_roundtrip() {
        let mut marks = MarkSet::new();
        marks.set("math", 91);
        marks.set("art", 70);

        let line = encode_marks_line("alice", &marks);
        assert_eq!(line, "alice 2 art 70 math 91");

        let (username, parsed) = parse_marks_line(&line).expect("well formed");
        assert_eq!(username, "alice");
        assert_eq!(parsed, marks);
    }

    #[test]
    fn empty_ledger_encodes_as_zero_count() {
        let line = encode_marks_line("bob", &MarkSet::new());
        assert_eq!(line, "bob 0");

        let (username, parsed) = parse_marks_line(&line).expect("well formed");
        assert_eq!(username, "bob");
        assert!(parsed.is_empty());
    }

    #[test]
    fn malformed_lines_are_rejected() {
        assert!(parse_marks_line("").is_none());
        assert!(parse_marks_line("alice").is_none());
        assert!(parse_marks_line("alice two").is_none());
        // truncated pair list
        assert!(parse_marks_line("alice 2 math 91").is_none());
        assert!(parse_marks_line("alice 1 math ninety").is_none());
        // trailing tokens beyond the declared count
        assert!(parse_marks_line("alice 1 math 91 extra").is_none());
        assert!(parse_marks_line("alice 0 math 91").is_none());
    }

    #[test]
    fn parser_tolerates_extra_spacing() {
        let (username, parsed) = parse_marks_line("  bob   1   math   77  ").expect("well formed");
        assert_eq!(username, "bob");
        assert_eq!(parsed.mark_for("math"), Some(77));
    }

    #[test]
    fn set_overwrites_existing_subject() {
        let mut marks = MarkSet::new();
        marks.set("math", 50);
        marks.set("math", 97);
        assert_eq!(marks.len(), 1);
        assert_eq!(marks.mark_for("math"), Some(97));
    }

    #[test]
    fn rows_carry_derived_grades_in_subject_order() {
        let mut marks = MarkSet::new();
        marks.set("physics", 62);
        marks.set("art", 88);

        let rows: Vec<_> = marks.rows().collect();
        assert_eq!(rows, vec![("art", 88, Grade::B), ("physics", 62, Grade::D)]);
    }
}
