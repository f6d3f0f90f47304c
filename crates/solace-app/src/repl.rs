//! Line-oriented terminal front-end for the chat controller.

use std::io::Write;

use solace_chat::{ChatController, IgnoreReason, LifecycleState, Role, SubmitOutcome, Turn};
use solace_config::schema::ThemeMode;
use solace_config::ThemePreference;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Quit,
    History,
    Retry,
    Theme,
    Session,
    Unknown(String),
    Message(String),
}

fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    match trimmed {
        "/quit" | "/exit" => Command::Quit,
        "/history" => Command::History,
        "/retry" => Command::Retry,
        "/theme" => Command::Theme,
        "/session" => Command::Session,
        _ if trimmed.starts_with('/') && !trimmed.contains(char::is_whitespace) => {
            Command::Unknown(trimmed.to_string())
        }
        _ => Command::Message(line.to_string()),
    }
}

/// ANSI color for the assistant label, per theme.
fn assistant_color(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Dark => "\x1b[36m",
        ThemeMode::Light => "\x1b[34m",
    }
}

fn format_turn(turn: &Turn, theme: ThemeMode) -> String {
    match turn.role() {
        Role::Assistant => format!(
            "{}assistant>\x1b[0m {}",
            assistant_color(theme),
            turn.content()
        ),
        Role::User => format!("\x1b[2myou>\x1b[0m {}", turn.content()),
    }
}

fn current_mode(theme: &Option<ThemePreference>) -> ThemeMode {
    theme.as_ref().map(ThemePreference::mode).unwrap_or_default()
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

/// Read lines from stdin until EOF or `/quit`.
pub async fn run(
    controller: &ChatController,
    theme: &mut Option<ThemePreference>,
) -> std::io::Result<()> {
    for turn in controller.history() {
        println!("{}", format_turn(&turn, current_mode(theme)));
    }
    println!("(type /quit to leave, /history to review the conversation)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Command::Quit => break,
            Command::History => {
                for turn in controller.history() {
                    println!("{}", format_turn(&turn, current_mode(theme)));
                }
            }
            Command::Session => match controller.session_token() {
                Some(token) => println!("session: {token}"),
                None => println!("session: not ready"),
            },
            Command::Theme => match theme.as_mut() {
                Some(pref) => match pref.toggle() {
                    Ok(mode) => println!("theme: {mode}"),
                    Err(e) => tracing::warn!("Failed to save theme: {e}"),
                },
                None => println!("theme: unavailable"),
            },
            Command::Unknown(cmd) => println!("unknown command: {cmd}"),
            Command::Retry => {
                if controller.input().trim().is_empty() {
                    println!("nothing to resend");
                } else {
                    send(controller, current_mode(theme)).await;
                }
            }
            // A blank line keeps whatever is pending.
            Command::Message(text) if text.trim().is_empty() => {}
            Command::Message(text) => {
                controller.set_input(&text);
                send(controller, current_mode(theme)).await;
            }
        }
        prompt();
    }

    Ok(())
}

/// Resolve once the controller reports a request in flight.
async fn wait_in_flight(mut states: watch::Receiver<LifecycleState>) {
    loop {
        if states.borrow_and_update().is_in_flight() {
            return;
        }
        if states.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

/// Submit the pending input, calling `on_dispatch` only if the request
/// actually goes out to the gateway.
async fn submit_with_indicator(
    controller: &ChatController,
    on_dispatch: impl FnOnce(),
) -> SubmitOutcome {
    let states = controller.subscribe();
    let submit = controller.submit_pending();
    tokio::pin!(submit);

    tokio::select! {
        biased;
        outcome = &mut submit => outcome,
        () = wait_in_flight(states) => {
            on_dispatch();
            submit.await
        }
    }
}

/// Submit the pending input and print whatever the cycle appended.
async fn send(controller: &ChatController, theme: ThemeMode) {
    let before = controller.history_len();
    let outcome = submit_with_indicator(controller, || {
        println!("\x1b[2mAssistant is thinking...\x1b[0m");
    })
    .await;
    if let SubmitOutcome::Ignored(reason) = outcome {
        if reason != IgnoreReason::EmptyInput {
            tracing::debug!(?reason, "submission ignored");
        }
        return;
    }

    for turn in controller.history().iter().skip(before) {
        if turn.role() == Role::Assistant {
            println!("{}", format_turn(turn, theme));
        }
    }
    if matches!(outcome, SubmitOutcome::Failed(_)) && !controller.input().is_empty() {
        println!("(your message was kept, type /retry to send it again)");
    }
}
