// Account records and role identities.
//
// The admin account is synthetic and never lives in a table; teachers
// carry the one subject they grade; students carry their marks. `User`
// is the identity handed out by authentication and is always a detached
// copy of the stored record.

use crate::marks::MarkSet;

/// The one built-in account, recognized before any table lookup.
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let token = match self {
            Role::Admin => "admin",
            Role::Teacher => "teacher",
            Role::Student => "student",
        };
        write!(f, "{}", token)
    }
}

/// One row of the student table plus that student's marks.
#[derive(Clone, Debug, PartialEq)]
pub struct StudentRecord {
    pub username: String,
    pub password: String,
    pub marks: MarkSet,
}

impl StudentRecord {
    pub fn new(username: &str, password: &str) -> StudentRecord {
        StudentRecord {
            username: username.to_owned(),
            password: password.to_owned(),
            marks: MarkSet::new(),
        }
    }

    /// Parse a `<username> <password>` table line. `None` when the line
    /// does not have exactly two fields.
    pub fn from_table_line(line: &str) -> Option<StudentRecord> {
        let mut fields = line.split_whitespace();
        let username = fields.next()?;
        let password = fields.next()?;
        if fields.next().is_some() {
            return None;
        }
        Some(StudentRecord::new(username, password))
    }

    pub fn to_table_line(&self) -> String {
        format!("{} {}", self.username, self.password)
    }
}

/// One row of the teacher table.
#[derive(Clone, Debug, PartialEq)]
pub struct TeacherRecord {
    pub username: String,
    pub password: String,
    pub subject: String,
}

impl TeacherRecord {
    pub fn new(username: &str, password: &str, subject: &str) -> TeacherRecord {
        TeacherRecord {
            username: username.to_owned(),
            password: password.to_owned(),
            subject: subject.to_owned(),
        }
    }

    /// Parse a `<username> <password> <subject>` table line. `None`
    /// when the line does not have exactly three fields.
    pub fn from_table_line(line: &str) -> Option<TeacherRecord> {
        let mut fields = line.split_whitespace();
        let username = fields.next()?;
        let password = fields.next()?;
        let subject = fields.next()?;
        if fields.next().is_some() {
            return None;
        }
        Some(TeacherRecord::new(username, password, subject))
    }

    pub fn to_table_line(&self) -> String {
        format!("{} {} {}", self.username, self.password, self.subject)
    }
}

/// An authenticated identity: a detached copy of the matched record,
/// tagged with its role.
#[derive(Clone, Debug)]
pub enum User {
    Admin,
    Teacher(TeacherRecord),
    Student(StudentRecord),
}

impl User {
    pub fn username(&self) -> &str {
        match self {
            User::Admin => ADMIN_USERNAME,
            User::Teacher(t) => &t.username,
            User::Student(s) => &s.username,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            User::Admin => Role::Admin,
            User::Teacher(_) => Role::Teacher,
            User::Student(_) => Role::Student,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_table_line_roundtrip() {
        let rec = StudentRecord::new("alice", "hunter2");
        let parsed = StudentRecord::from_table_line(&rec.to_table_line()).expect("two fields");
        assert_eq!(parsed, rec);
    }

    #[test]
    fn student_line_field_count_is_strict() {
        assert!(StudentRecord::from_table_line("").is_none());
        assert!(StudentRecord::from_table_line("alice").is_none());
        assert!(StudentRecord::from_table_line("alice pw extra").is_none());
    }

    #[test]
    fn teacher_table_line_roundtrip() {
        let rec = TeacherRecord::new("tina", "pw", "math");
        let parsed = TeacherRecord::from_table_line(&rec.to_table_line()).expect("three fields");
        assert_eq!(parsed, rec);
    }

    #[test]
    fn teacher_line_field_count_is_strict() {
        assert!(TeacherRecord::from_table_line("tina pw").is_none());
        assert!(TeacherRecord::from_table_line("tina pw math extra").is_none());
    }

    #[test]
    fn parser_tolerates_surrounding_whitespace() {
        let rec = StudentRecord::from_table_line("  alice   pw  ").expect("two fields");
        assert_eq!(rec.username, "alice");
        assert_eq!(rec.password, "pw");
    }

    #[test]
    fn identity_accessors_dispatch_by_variant() {
        let admin = User::Admin;
        assert_eq!(admin.username(), ADMIN_USERNAME);
        assert_eq!(admin.role(), Role::Admin);

        let teacher = User::Teacher(TeacherRecord::new("tina", "pw", "math"));
        assert_eq!(teacher.username(), "tina");
        assert_eq!(teacher.role(), Role::Teacher);

        let student = User::Student(StudentRecord::new("alice", "pw"));
        assert_eq!(student.username(), "alice");
        assert_eq!(student.role(), Role::Student);
    }
}
