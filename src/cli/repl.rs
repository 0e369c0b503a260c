//! 交互式终端循环

use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::cli::commands::{parse_command, Command, USAGE};
use crate::cli::render::{render_message, render_view};
use crate::tutor::{TutorError, TutorSession, View};

/// 运行终端循环，直到输入结束或收到 `/quit`
pub async fn run<R, W>(session: &mut TutorSession, input: R, out: &mut W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "Welcome to EnglishMate! Type /? for commands.")?;
    session.show_help().await;
    write!(out, "{}", render_view(session.view(), session.transcript()))?;

    let mut lines = input.lines();
    loop {
        write!(out, "{}> ", session.view().name())?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let in_chat = matches!(session.view(), View::Chat);
        let Some(command) = parse_command(&line, in_chat) else {
            continue;
        };

        let show_view = match command {
            Command::Quit => break,
            Command::Usage => {
                writeln!(out, "{}", USAGE)?;
                false
            }
            Command::Unknown(text) => {
                writeln!(out, "Unknown command: {} (type /? for commands)", text)?;
                false
            }
            Command::Say(text) => {
                if let Some(reply) = session.send_message(&text).await {
                    write!(out, "{}", render_message(reply))?;
                }
                false
            }
            Command::Select(number) => match session.select(number - 1).await {
                Ok(()) => true,
                Err(TutorError::NotFound(_)) => {
                    writeln!(out, "No item #{}.", number)?;
                    false
                }
                Err(e) => {
                    tracing::error!("加载详情失败: {}", e);
                    writeln!(out, "{}", failure_notice(session.view()))?;
                    false
                }
            },
            Command::More => {
                let outcome = session.load_more().await;
                if outcome.added == 0 && !outcome.has_more {
                    writeln!(out, "No more items.")?;
                }
                true
            }
            Command::Refresh => {
                session.refresh().await;
                true
            }
            Command::ShowHelp => {
                session.show_help().await;
                true
            }
            Command::ShowGrammar => {
                session.show_grammar().await;
                true
            }
            Command::ShowVocabulary => {
                session.show_vocabulary().await;
                true
            }
            Command::ShowChat => {
                session.show_chat();
                true
            }
        };

        if show_view {
            write!(out, "{}", render_view(session.view(), session.transcript()))?;
        }
    }

    Ok(())
}

fn failure_notice(view: &View) -> &'static str {
    match view {
        View::Help(_) => "Failed to load conversation details. Please try again.",
        View::Grammar(_) => "Failed to load grammar details. Please try again.",
        View::Vocabulary(_) => "Failed to load lesson content. Please try again.",
        View::Chat => "Nothing to open in chat.",
    }
}
