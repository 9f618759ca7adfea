//! Interactive console menu for a locker sale session.
//!
//! Thin glue over the core engine: every command maps onto one public
//! `Session` operation, boolean rejections are reported as plain messages,
//! and invalid-argument errors cause a re-prompt as the engine prescribes.

use locker_sale_core::{Client, Session, SessionError, MAX_UNITS_PER_CLIENT};
use std::io::{self, BufRead, Write};

const MENU: &str = "\
1) queue a client
2) serve next client
3) place an order
4) amend an order
5) close the session
6) session status
0) quit";

fn main() {
    if let Err(e) = run() {
        eprintln!("fatal: {e}");
        std::process::exit(1);
    }
}

fn run() -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Locker sale session (max {MAX_UNITS_PER_CLIENT} lockers per client)");
    let mut session = loop {
        match read_u32(&mut lines, "Lockers on sale? ")? {
            Some(units) => match Session::new(units) {
                Ok(session) => break session,
                Err(e) => println!("{e}"),
            },
            None => return Ok(()),
        }
    };

    loop {
        println!("\n{MENU}");
        let Some(choice) = read_line(&mut lines, "> ")? else {
            break;
        };
        match choice.as_str() {
            "1" => {
                let Some(client) = read_client(&mut lines)? else {
                    break;
                };
                match session.enqueue(&client) {
                    Ok(true) => println!("{} is now waiting", client.name()),
                    Ok(false) => println!("{} could not be queued", client.name()),
                    Err(e) => println!("{e}"),
                }
            }
            "2" => match session.dequeue_next() {
                Some(client) => println!(
                    "next up: {} (priority {})",
                    client.name(),
                    client.priority()
                ),
                None => println!("nobody is waiting"),
            },
            "3" => {
                let Some(client) = read_client(&mut lines)? else {
                    break;
                };
                let Some(quantity) = read_u32(&mut lines, "how many lockers? ")? else {
                    break;
                };
                match session.place_order(&client, quantity) {
                    Ok(true) => println!("order placed, {} left", session.remaining_units()),
                    Ok(false) => println!("order refused (cap or availability)"),
                    Err(e @ SessionError::DuplicateOrder { .. }) => {
                        println!("{e}; use amend instead")
                    }
                    Err(e) => println!("{e}"),
                }
            }
            "4" => {
                let Some(client) = read_client(&mut lines)? else {
                    break;
                };
                let Some(extra) = read_u32(&mut lines, "how many more? ")? else {
                    break;
                };
                match session.amend_order(&client, extra) {
                    Ok(true) => println!("order amended, {} left", session.remaining_units()),
                    Ok(false) => println!("amendment refused (cap or availability)"),
                    Err(e) => println!("{e}"),
                }
            }
            "5" => {
                session.close_session();
                println!("session closed (round {})", session.close_count());
            }
            "6" => {
                println!("{session}");
                match serde_json::to_string_pretty(&session.summary()) {
                    Ok(json) => println!("{json}"),
                    Err(e) => println!("could not serialize summary: {e}"),
                }
            }
            "0" => break,
            other => println!("unknown choice: {other}"),
        }
    }

    Ok(())
}

/// Prompt and read one trimmed line; None on EOF.
fn read_line(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

/// Prompt until a non-negative integer is entered; None on EOF.
fn read_u32(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> io::Result<Option<u32>> {
    loop {
        match read_line(lines, prompt)? {
            Some(input) => match input.parse::<u32>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => println!("please enter a whole number"),
            },
            None => return Ok(None),
        }
    }
}

/// Prompt until a valid client name is entered; None on EOF.
fn read_client(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> io::Result<Option<Client>> {
    loop {
        match read_line(lines, "client name? ")? {
            Some(name) => match Client::new(name) {
                Ok(client) => return Ok(Some(client)),
                Err(e) => println!("{e}"),
            },
            None => return Ok(None),
        }
    }
}
