use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::discovery::{find_session_by_id, find_session_files, list_sessions};
use crate::parsers::parse_session_files;
use crate::summary::{DetailLevel, LogSummarizer, Summarizer, extract_user_prompts};
use crate::utils::{
    extract_user_content, format_path_with_tilde, get_claude_dir, truncate_content,
};

// Display truncation limits
const USER_CONTENT_MAX_CHARS: usize = 1000;
const PROMPT_MAX_CHARS: usize = 2000;

#[derive(Parser)]
#[command(name = "cc-summarize")]
#[command(version = "0.1.0")]
#[command(about = "Summarize Claude Code session logs into conversation turns", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List recorded sessions for a project
    Sessions {
        /// Project path as used when running Claude Code
        project: PathBuf,
        /// Show at most this many sessions (newest first)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show summarized conversation turns for a session
    Show {
        /// Project path as used when running Claude Code
        project: PathBuf,
        /// Session id, full or prefix; defaults to the most recent session
        #[arg(long)]
        session: Option<String>,
        #[arg(long, value_enum, default_value_t = DetailLevel::Normal)]
        detail: DetailLevel,
        /// Print only the genuine user prompts
        #[arg(long)]
        prompts_only: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Sessions { project, limit }) => {
            show_sessions(project, *limit)?;
        }
        Some(Commands::Show { project, session, detail, prompts_only }) => {
            show_session(project, session.as_deref(), *detail, *prompts_only)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn show_sessions(project: &Path, limit: Option<usize>) -> Result<()> {
    let claude_dir = get_claude_dir()?;
    let sessions = list_sessions(&claude_dir, project, limit)?;

    if sessions.is_empty() {
        println!("No sessions found for {}", format_path_with_tilde(project));
        return Ok(());
    }

    println!("Sessions for {}", format_path_with_tilde(project));
    for info in &sessions {
        println!(
            "{}  {} messages, {} bytes, last active {}",
            info.session_id,
            info.message_count,
            info.file_size,
            info.last_modified.format("%Y-%m-%d %H:%M:%S")
        );
    }

    Ok(())
}

fn show_session(
    project: &Path,
    session: Option<&str>,
    detail: DetailLevel,
    prompts_only: bool,
) -> Result<()> {
    let claude_dir = get_claude_dir()?;

    let session_file = match session {
        Some(id) => find_session_by_id(&claude_dir, project, id)?
            .with_context(|| format!("No session matching '{}'", id))?,
        None => find_session_files(&claude_dir, project)?
            .into_iter()
            .next()
            .with_context(|| {
                format!("No sessions found for {}", format_path_with_tilde(project))
            })?,
    };

    let parsed = parse_session_files(&[session_file])?;
    let session_id = parsed
        .messages
        .iter()
        .map(|m| m.session_id.as_str())
        .find(|id| !id.is_empty())
        .unwrap_or_default()
        .to_string();

    if prompts_only {
        for prompt in extract_user_prompts(&parsed.turns) {
            println!(
                "[{}] {}",
                prompt.turn_number,
                truncate_content(&prompt.content, PROMPT_MAX_CHARS)
            );
        }
        return Ok(());
    }

    for (idx, turn) in parsed.turns.iter().enumerate() {
        let label = turn.user_message.category.map(|c| c.label()).unwrap_or("USER");
        let content = extract_user_content(&turn.user_message.content);

        println!("Turn {} [{}]", idx + 1, label);
        println!("{}", truncate_content(&content, USER_CONTENT_MAX_CHARS));

        let result = LogSummarizer.summarize_turn(turn, detail, &session_id);
        println!("  {}", result.summary.replace('\n', "\n  "));
        for call in &result.tool_calls {
            println!("  - {}", call);
        }

        let mut footer = Vec::new();
        if let Some(duration) = turn.duration_seconds {
            footer.push(format!("{:.0}s", duration));
        }
        if let Some(tokens) = turn.total_tokens {
            footer.push(format!("{} tokens", tokens));
        }
        if !footer.is_empty() {
            println!("  ({})", footer.join(", "));
        }
        println!();
    }

    Ok(())
}
