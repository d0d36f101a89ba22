// Credential resolution. The order is fixed: the built-in admin
// account, then the student table, then the teacher table. The first
// username match decides the outcome; a wrong password there fails the
// attempt outright instead of falling through to a later table.

use crate::store::Store;
use crate::user::{User, ADMIN_PASSWORD, ADMIN_USERNAME};

/// Resolve a username/password pair to an identity, or `None` when the
/// credentials do not match. The returned identity is a detached copy
/// of the matched record; later store mutations do not show through it.
pub fn authenticate(store: &Store, username: &str, password: &str) -> Option<User> {
    log::trace!("authenticate({:?})", username);

    if username == ADMIN_USERNAME && password == ADMIN_PASSWORD {
        log::info!("admin logged in");
        return Some(User::Admin);
    }

    if let Some(student) = store.students().iter().find(|s| s.username == username) {
        if student.password == password {
            log::info!("student {} logged in", student.username);
            return Some(User::Student(student.clone()));
        }
        log::info!("rejected login for student {}", username);
        return None;
    }

    if let Some(teacher) = store.teachers().iter().find(|t| t.username == username) {
        if teacher.password == password {
            log::info!("teacher {} logged in ({})", teacher.username, teacher.subject);
            return Some(User::Teacher(teacher.clone()));
        }
        log::info!("rejected login for teacher {}", username);
        return None;
    }

    log::info!("rejected login for unknown username {}", username);
    None
}
