// The record store: owns the student and teacher collections and the
// three flat tables behind them.
//
// Loading is forgiving: a missing table is created empty, an
// unreadable one is treated as empty, and a malformed line is skipped
// with a warning. Writes are not: any I/O failure propagates. The
// marks table is rewritten through a temp file and a rename so an
// interrupted save leaves the previous table intact.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::config::Config;
use crate::marks;
use crate::user::{StudentRecord, TeacherRecord, ADMIN_PASSWORD, ADMIN_USERNAME};

/// Rejections a caller can act on, as opposed to I/O failures, which
/// surface as plain `anyhow` errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot create student with reserved username {0:?}")]
    ReservedUsername(String),
    #[error("no student named {0:?}")]
    UnknownStudent(String),
}

pub struct Store {
    students: Vec<StudentRecord>,
    teachers: Vec<TeacherRecord>,
    students_path: PathBuf,
    teachers_path: PathBuf,
    marks_path: PathBuf,
}

impl Store {
    /// Open the store in the configured data directory, creating the
    /// directory and any missing table so a first run starts from empty
    /// tables. The built-in admin account always gets a student record
    /// in memory; that record is never written to the student table.
    pub fn open(cfg: &Config) -> Result<Store> {
        fs::create_dir_all(&cfg.data_dir).with_context(|| {
            format!("failed to create data directory {}", cfg.data_dir.display())
        })?;

        let mut store = Store {
            students: Vec::new(),
            teachers: Vec::new(),
            students_path: cfg.students_path(),
            teachers_path: cfg.teachers_path(),
            marks_path: cfg.marks_path(),
        };
        store.load_students()?;
        store.load_teachers()?;
        store.load_marks()?;

        if !store.students.iter().any(|s| s.username == ADMIN_USERNAME) {
            store
                .students
                .push(StudentRecord::new(ADMIN_USERNAME, ADMIN_PASSWORD));
        }

        log::info!(
            "store opened: {} students, {} teachers",
            store.students.len(),
            store.teachers.len()
        );
        Ok(store)
    }

    pub fn students(&self) -> &[StudentRecord] {
        &self.students
    }

    pub fn teachers(&self) -> &[TeacherRecord] {
        &self.teachers
    }

    /// Register a new student and append it to the student table. The
    /// admin username is reserved. The file write happens before the
    /// in-memory append so a failed write changes nothing.
    pub fn add_student(&mut self, username: &str, password: &str) -> Result<()> {
        if username == ADMIN_USERNAME {
            return Err(StoreError::ReservedUsername(username.to_owned()).into());
        }
        let rec = StudentRecord::new(username, password);
        append_line(&self.students_path, &rec.to_table_line())?;
        log::info!("added student {}", rec.username);
        self.students.push(rec);
        Ok(())
    }

    /// Register a new teacher and append it to the teacher table.
    pub fn add_teacher(&mut self, username: &str, password: &str, subject: &str) -> Result<()> {
        let rec = TeacherRecord::new(username, password, subject);
        append_line(&self.teachers_path, &rec.to_table_line())?;
        log::info!("added teacher {} for {}", rec.username, rec.subject);
        self.teachers.push(rec);
        Ok(())
    }

    /// Set one student's score for one subject. Does not persist; call
    /// `save_marks` afterwards.
    pub fn set_mark(&mut self, username: &str, subject: &str, mark: u8) -> Result<()> {
        match self.students.iter_mut().find(|s| s.username == username) {
            Some(student) => {
                student.marks.set(subject, mark);
                log::debug!("set mark {} {} {}", username, subject, mark);
                Ok(())
            }
            None => Err(StoreError::UnknownStudent(username.to_owned()).into()),
        }
    }

    /// Rewrite the marks table with one line per student, the admin
    /// record included.
    pub fn save_marks(&self) -> Result<()> {
        let mut text = String::new();
        for student in &self.students {
            text.push_str(&marks::encode_marks_line(&student.username, &student.marks));
            text.push('\n');
        }

        let tmp_path = self.marks_path.with_extension("dat.tmp");
        fs::write(&tmp_path, &text).with_context(|| {
            format!("failed to write temp marks table {}", tmp_path.display())
        })?;
        fs::rename(&tmp_path, &self.marks_path).with_context(|| {
            format!("failed to move marks table to {}", self.marks_path.display())
        })?;

        log::info!("saved marks for {} students", self.students.len());
        Ok(())
    }

    fn load_students(&mut self) -> Result<()> {
        let text = read_table(&self.students_path)?;
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match StudentRecord::from_table_line(line) {
                Some(rec) => self.students.push(rec),
                None => log::warn!("skipping malformed student line {:?}", line),
            }
        }
        log::debug!(
            "loaded {} students from {}",
            self.students.len(),
            self.students_path.display()
        );
        Ok(())
    }

    fn load_teachers(&mut self) -> Result<()> {
        let text = read_table(&self.teachers_path)?;
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match TeacherRecord::from_table_line(line) {
                Some(rec) => self.teachers.push(rec),
                None => log::warn!("skipping malformed teacher line {:?}", line),
            }
        }
        log::debug!(
            "loaded {} teachers from {}",
            self.teachers.len(),
            self.teachers_path.display()
        );
        Ok(())
    }

    /// Merge persisted scores into the students loaded so far. Lines
    /// for usernames with no student record are ignored.
    fn load_marks(&mut self) -> Result<()> {
        let text = read_table(&self.marks_path)?;
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let (username, loaded) = match marks::parse_marks_line(line) {
                Some(parsed) => parsed,
                None => {
                    log::warn!("skipping malformed marks line {:?}", line);
                    continue;
                }
            };
            match self.students.iter_mut().find(|s| s.username == username) {
                Some(student) => {
                    for (subject, mark, _) in loaded.rows() {
                        student.marks.set(subject, mark);
                    }
                }
                None => log::debug!("ignoring marks for unknown student {:?}", username),
            }
        }
        Ok(())
    }
}

/// Read a whole table, creating it empty when it does not exist yet.
/// Any other read failure loads as empty; only writes are fatal.
fn read_table(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            fs::File::create(path)
                .with_context(|| format!("failed to create table {}", path.display()))?;
            Ok(String::new())
        }
        Err(e) => {
            log::warn!("treating unreadable table {} as empty: {}", path.display(), e);
            Ok(String::new())
        }
    }
}

fn append_line(path: &Path, line: &str) -> Result<()> {
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open {} for append", path.display()))?;
    writeln!(file, "{}", line)
        .with_context(|| format!("failed to append to {}", path.display()))?;
    Ok(())
}
