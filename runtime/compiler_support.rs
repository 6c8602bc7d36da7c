//! Entry points called by compiled programs

use std::any::Any;
use std::{panic, process};

use ansi_term::Colour;

use crate::task::Task;

type TaskEntry = extern "C-unwind" fn(&mut Task);

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_owned()
    } else {
        "Unexpected panic type".to_owned()
    }
}

/// Runs `entry` inside a new task
///
/// Returns the task's panic message if it panicked.
pub fn run_task(entry: impl FnOnce(&mut Task)) -> Result<(), String> {
    let mut task = Task::new();

    panic::catch_unwind(panic::AssertUnwindSafe(|| entry(&mut task))).map_err(panic_message)
}

/// Runs a compiled program's entry function
///
/// If the task panics its message is printed to stderr and the process exits with status 1.
#[export_name = "kons_runtime_launch_task"]
pub extern "C" fn launch_task(entry: TaskEntry) {
    log::debug!("launching task");

    if let Err(message) = run_task(|task| entry(task)) {
        eprintln!("{}: {}", Colour::Red.bold().paint("error"), message);
        process::exit(1);
    }

    log::debug!("task finished");
}
