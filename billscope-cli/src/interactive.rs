//! Interactive analysis session over stdin.

use crate::display;
use crate::session::{Session, REJECTION_MESSAGE};
use billscope_analysis::GroqProvider;
use billscope_common::Config;
use billscope_extract::{DocumentFetcher, DocumentSource};
use std::io::Write;
use tokio::io::AsyncBufReadExt;

const HELP: &str = "\
Commands:
  file <path>   Load a bill PDF from disk
  url <url>     Load a bill document from a URL
  preview       Show the first 3000 characters of the extracted text
  analyze       Ask the model for a policy analysis
  report        Redisplay the most recent analysis
  help          Show this help
  quit          Exit";

/// Run the interactive loop until EOF or `quit`.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    let fetcher = DocumentFetcher::from_config(config);
    let provider = GroqProvider::from_config(config);
    let mut session = Session::new();

    println!("Public policy bill analyzer. Type 'help' for commands.");

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();

        let (command, arg) = match line.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "help" => println!("{HELP}"),
            "quit" | "exit" => break,
            "file" => {
                if arg.is_empty() {
                    println!("Usage: file <path>");
                    continue;
                }
                match tokio::fs::read(arg).await {
                    Ok(bytes) => {
                        load(&mut session, &fetcher, DocumentSource::Upload { bytes }).await;
                    }
                    Err(e) => println!("❌ Cannot read {arg}: {e}"),
                }
            }
            "url" => {
                if arg.is_empty() {
                    println!("Usage: url <url>");
                    continue;
                }
                load(
                    &mut session,
                    &fetcher,
                    DocumentSource::Url {
                        url: arg.to_string(),
                    },
                )
                .await;
            }
            "preview" => match session.text() {
                Some(text) => display::print_preview(text),
                None => println!("No bill loaded yet."),
            },
            "analyze" => {
                println!("Analyzing...");
                match session.request_analysis(&provider).await {
                    Ok(_) => {
                        if let Some(analysis) = session.analysis() {
                            display::print_report(analysis);
                        }
                    }
                    Err(e) => println!("❌ {e}"),
                }
            }
            "report" => match session.analysis() {
                Some(analysis) => display::print_report(analysis),
                None => println!("No analysis yet. Load a bill and run 'analyze'."),
            },
            _ => println!("Unknown command '{command}'. Type 'help' for commands."),
        }
    }

    Ok(())
}

/// Load a document into the session and report the gate's verdict.
async fn load(session: &mut Session, fetcher: &DocumentFetcher, source: DocumentSource) {
    match session.load(fetcher, source).await {
        Ok(true) => println!("✅ Valid government bill detected."),
        Ok(false) => println!("❌ {REJECTION_MESSAGE}"),
        Err(e) => println!("❌ {e}"),
    }
}
