mod cli;
mod display;
mod input;
mod tracker;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio_stream::StreamExt;
use tracing::{error, info};
use tutor_app::{ChatSession, FragmentSource, MisconfiguredSource, WELCOME};
use tutor_domain::Error as DomainError;
use tutor_provider::{API_KEY_ENV, GeminiProvider};

use crate::cli::Cli;
use crate::display::StreamDisplay;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let _guard = tracker::init_tracing(cli.log_dir.clone())?;

    let source = create_source(&cli);
    let mut session = ChatSession::new(source);
    let mut display = StreamDisplay::new();

    if let Some(prompt) = cli.prompt {
        run_turn(&mut session, &mut display, &prompt).await;
        return Ok(());
    }

    display.show_message(WELCOME);

    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline("em> ") {
            Ok(line) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(&line);
                match line.as_str() {
                    "/exit" | "/quit" => break,
                    "/clear" => {
                        session.clear();
                        display.show_message(WELCOME);
                    }
                    _ => run_turn(&mut session, &mut display, &line).await,
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    info!("Session ended");
    Ok(())
}

fn create_source(cli: &Cli) -> Arc<dyn FragmentSource> {
    match GeminiProvider::from_env() {
        Ok(mut provider) => {
            if let Some(model) = &cli.model {
                provider = provider.model(model.as_str());
            }
            if let Some(base_url) = &cli.base_url {
                provider = provider.base_url(base_url.clone());
            }
            if let Some(temperature) = cli.temperature {
                provider = provider.temperature(temperature);
            }
            Arc::new(provider)
        }
        Err(e) => {
            // The chat still opens; the first send surfaces the
            // configuration message in the transcript
            error!(error = %e, "Model collaborator is not configured");
            Arc::new(MisconfiguredSource::new(API_KEY_ENV))
        }
    }
}

async fn run_turn(session: &mut ChatSession, display: &mut StreamDisplay, line: &str) {
    let (text, attachment) = match input::parse(line) {
        Ok(parsed) => parsed,
        Err(e) => {
            display.show_message(&format!("**Không gửi được ảnh**: {e}"));
            return;
        }
    };

    let mut stream = match session.send(text, attachment) {
        Ok(stream) => stream,
        Err(DomainError::EmptyMessage) => return,
        Err(e) => {
            display.show_message(&format!("**Lỗi**: {e}"));
            return;
        }
    };

    display.begin_turn();
    while let Some(event) = stream.next().await {
        session.apply(&event);
        display.handle(&event);
    }
}
