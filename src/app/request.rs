//! No-WASM application implementation
//!
//! Terminal frontend for non-WASM environments: fetches the course list
//! through the reqwest client and drives a selection session over
//! stdin/stdout.

use reqwest::Client;

use crate::app::{
    parse_course_list, SelectionSession, SubmitOutcome, ToggleOutcome, MAX_SEMESTER_CREDITS,
};
use crate::client::request;
use crate::error::Result;
use crate::model::structs::{Course, CourseId};

/// Fetch and parse the course list from the endpoint.
pub async fn fetch_course_list(client: &Client, endpoint: &str) -> Result<Vec<Course>> {
    let resp = request::get_course_list(client, endpoint).await?;
    parse_course_list(resp)
}

pub fn print_available(session: &SelectionSession) {
    println!("================Available courses================");
    for course in session.available_view() {
        let mark = if session.is_picked(&course.id) {
            "[x]"
        } else {
            "[ ]"
        };
        println!(
            "{} {:<10} {:<28} {:<12} {} Credits",
            mark,
            course.id.to_string(),
            course.name,
            course.course_type(),
            course.credits
        );
    }
    println!("Total Credits: {}", session.total_credits());
}

pub fn print_selected(session: &SelectionSession) {
    println!("================Selected courses=================");
    for course in session.selected_courses() {
        println!(
            "    {:<10} {:<28} {:<12} {} Credits",
            course.id.to_string(),
            course.name,
            course.course_type(),
            course.credits
        );
    }
    println!("=================================================");
}

// Resolve typed input against the ids the user can currently see.
fn resolve_course_id(session: &SelectionSession, input: &str) -> Option<CourseId> {
    session
        .available_view()
        .iter()
        .map(|c| &c.id)
        .find(|id| id.to_string() == input)
        .cloned()
}

/// Blocking yes/no confirmation showing the chosen total, then the commit.
fn submit_with_confirmation(session: &mut SelectionSession) -> Result<SubmitOutcome> {
    if session.locked() {
        return Ok(session.submit(true));
    }

    println!(
        "You have chosen {} credits for this semester. You cannot change once you submit. Do you want to confirm? (y/N)",
        session.total_credits()
    );
    std::io::Write::flush(&mut std::io::stdout())?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    let confirmed = matches!(answer.trim(), "y" | "Y" | "yes");

    Ok(session.submit(confirmed))
}

/// Interactive selection loop. One command per line: a course id toggles,
/// `submit` commits after confirmation, `list` re-renders, `quit` leaves.
pub fn run_session(session: &mut SelectionSession) -> Result<()> {
    print_available(session);
    println!("Enter a course id to toggle, or submit / list / quit:");

    let mut line = String::new();
    loop {
        std::io::Write::flush(&mut std::io::stdout())?;
        line.clear();
        if std::io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "" => continue,
            "quit" => break,
            "list" => {
                print_available(session);
                if session.locked() {
                    print_selected(session);
                }
            }
            "submit" => match submit_with_confirmation(session)? {
                SubmitOutcome::Committed(_) => print_selected(session),
                SubmitOutcome::Declined => println!("Submission cancelled."),
                SubmitOutcome::AlreadyCommitted => {}
            },
            input => {
                if session.locked() {
                    // One-shot workflow: gestures after the commit are ignored.
                    continue;
                }
                let Some(id) = resolve_course_id(session, input) else {
                    println!("No such course: {input}");
                    continue;
                };
                match session.toggle(&id) {
                    ToggleOutcome::Selected(total) | ToggleOutcome::Deselected(total) => {
                        println!("Total Credits: {total}");
                    }
                    ToggleOutcome::CapExceeded { .. } => {
                        println!(
                            "You can only choose up to {MAX_SEMESTER_CREDITS} credits in one semester"
                        );
                    }
                    ToggleOutcome::Unknown | ToggleOutcome::Ignored => {}
                }
            }
        }
    }

    Ok(())
}
