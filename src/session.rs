// The session layer: role-dispatched menu loops. One open store drives
// everything. Authenticated identities are detached copies, so a
// student's view is a login-time snapshot and teacher updates go
// through the store, never through the teacher's own identity.

use anyhow::Result;

use crate::auth;
use crate::store::{Store, StoreError};
use crate::ui;
use crate::user::{StudentRecord, TeacherRecord, User, ADMIN_USERNAME};

/// Top-level loop: Login or Exit. Exit saves the marks table one last
/// time before returning.
pub fn main_menu(store: &mut Store) -> Result<()> {
    loop {
        ui::header("Student Management System")?;
        match ui::menu(&["Login", "Exit"])? {
            0 => handle_login(store)?,
            1 => {
                store.save_marks()?;
                return Ok(());
            }
            _ => {}
        }
    }
}

/// Collect credentials and hand control to the matching role menu.
/// A failed attempt reports generically and returns to the top loop.
fn handle_login(store: &mut Store) -> Result<()> {
    ui::header("Login")?;
    let username = ui::prompt_field("Username")?;
    let password = ui::prompt_password("Password")?;

    match auth::authenticate(store, &username, &password) {
        Some(user) => {
            log::debug!("{} session started for {}", user.role(), user.username());
            println!("\nLogin successful!");
            ui::pause()?;
            match user {
                User::Admin => admin_menu(store)?,
                User::Teacher(teacher) => teacher_menu(store, &teacher)?,
                User::Student(student) => student_menu(&student)?,
            }
        }
        None => {
            println!("Invalid username or password!");
            ui::pause()?;
        }
    }
    Ok(())
}

fn admin_menu(store: &mut Store) -> Result<()> {
    loop {
        ui::header("Admin Dashboard")?;
        match ui::menu(&["Add Student", "Add Teacher", "Logout"])? {
            0 => handle_add_student(store)?,
            1 => handle_add_teacher(store)?,
            2 => return Ok(()),
            _ => {}
        }
    }
}

fn handle_add_student(store: &mut Store) -> Result<()> {
    ui::header("Add New Student")?;
    let username = ui::prompt_field("Enter student username")?;
    let password = ui::prompt_new_password("Enter student password")?;

    match store.add_student(&username, &password) {
        Ok(()) => println!("\nStudent added successfully!"),
        Err(e) => match e.downcast_ref::<StoreError>() {
            Some(StoreError::ReservedUsername(_)) => {
                println!("Cannot create student with username '{}'", ADMIN_USERNAME);
            }
            _ => return Err(e),
        },
    }
    ui::pause()?;
    Ok(())
}

fn handle_add_teacher(store: &mut Store) -> Result<()> {
    ui::header("Add New Teacher")?;
    let username = ui::prompt_field("Enter teacher username")?;
    let password = ui::prompt_new_password("Enter teacher password")?;
    let subject = ui::prompt_field("Enter subject")?;

    store.add_teacher(&username, &password, &subject)?;
    println!("\nTeacher added successfully!");
    ui::pause()?;
    Ok(())
}

fn teacher_menu(store: &mut Store, teacher: &TeacherRecord) -> Result<()> {
    loop {
        ui::header(&format!("Teacher Menu ({})", teacher.subject))?;
        match ui::menu(&["Update Marks", "Logout"])? {
            0 => handle_update_marks(store, teacher)?,
            1 => return Ok(()),
            _ => {}
        }
    }
}

/// Roster loop: pick a student, then enter the new score. The admin
/// record never appears in the roster. Each successful update is
/// persisted immediately, and the roster re-renders with the new mark.
fn handle_update_marks(store: &mut Store, teacher: &TeacherRecord) -> Result<()> {
    loop {
        ui::header(&format!("Update Marks for {}", teacher.subject))?;

        let rows: Vec<(String, Option<u8>)> = store
            .students()
            .iter()
            .filter(|s| s.username != ADMIN_USERNAME)
            .map(|s| (s.username.clone(), s.marks.mark_for(&teacher.subject)))
            .collect();

        let mut items: Vec<String> = rows
            .iter()
            .map(|(username, current)| {
                let shown = match current {
                    Some(mark) => mark.to_string(),
                    None => "N/A".to_owned(),
                };
                format!("{:<25}{}", username, shown)
            })
            .collect();
        items.push("Return to main menu".to_owned());

        let choice = ui::menu(&items)?;
        if choice == rows.len() {
            return Ok(());
        }

        let (username, current) = &rows[choice];
        ui::header(&format!("Update Marks for {}", username))?;
        match current {
            Some(mark) => println!("Current mark in {}: {}", teacher.subject, mark),
            None => println!("No existing mark for {}", teacher.subject),
        }

        if let Some(mark) = ui::prompt_mark("Enter new mark (0-100) or -1 to cancel")? {
            store.set_mark(username, &teacher.subject, mark)?;
            store.save_marks()?;
            println!("\nMark updated successfully!");
            ui::pause()?;
        }
    }
}

fn student_menu(student: &StudentRecord) -> Result<()> {
    loop {
        ui::header("Student Menu")?;
        match ui::menu(&["View Marks", "Logout"])? {
            0 => view_marks(student)?,
            1 => return Ok(()),
            _ => {}
        }
    }
}

/// Render the login-time snapshot of the student's marks with derived
/// grades.
fn view_marks(student: &StudentRecord) -> Result<()> {
    ui::header("Your Marks")?;

    if student.marks.is_empty() {
        println!("No marks available yet.");
        ui::pause()?;
        return Ok(());
    }

    println!("╔{}╗", "═".repeat(ui::BOX_WIDTH));
    println!("║ {:<15}{:<10}{:<11} ║", "Subject", "Marks", "Grade");
    println!("╠{}╣", "═".repeat(ui::BOX_WIDTH));
    for (subject, mark, grade) in student.marks.rows() {
        println!("║ {:<15}{:<10}{:<11} ║", subject, mark, grade);
    }
    println!("╚{}╝", "═".repeat(ui::BOX_WIDTH));
    ui::pause()?;
    Ok(())
}
