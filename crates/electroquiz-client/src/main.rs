//! ElectroQuiz chat - terminal front end for the chat assistant.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::error;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use electroquiz_client::{
    ChatSession, ClientConfig, HttpClient, RejectReason, SubmitOutcome, TopicList,
};
use electroquiz_core::{ChatRole, Message};

/// ElectroQuiz chat - ask the Electronics Engineering assistant
#[derive(Parser)]
#[command(name = "electroquiz-chat")]
#[command(about = "Terminal chat with the ElectroQuiz assistant", long_about = None)]
struct Cli {
    /// ElectroQuiz server URL
    #[arg(short, long, env = "ELECTROQUIZ_SERVER", default_value = "http://localhost:3000")]
    server: String,

    /// Request timeout in seconds (waits indefinitely when omitted)
    #[arg(long)]
    timeout_secs: Option<u64>,
}

const HELP: &str = "Commands:
  /topics        list suggested topics
  /topic <n>     put topic <n> in the input (send it with an empty line)
  /pdf <path>    extract the text of a PDF
  /help          show this help
  /quit          leave";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let config = ClientConfig {
        base_url: cli.server,
        request_timeout: cli.timeout_secs.map(Duration::from_secs),
    };
    let client = HttpClient::with_config(&config)?;

    let mut session = ChatSession::new();
    let mut rendered = 0;
    let mut topics: Vec<String> = Vec::new();

    println!("Electronics Engineering AI Assistant ({})", config.base_url);
    println!("{}\n", HELP);
    render(&session, &mut rendered);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim_end();

        if let Some(command) = line.strip_prefix('/') {
            let (name, arg) = command.split_once(' ').unwrap_or((command, ""));
            match name {
                "quit" | "exit" => break,
                "help" => println!("{}", HELP),
                "topics" => match client.topics().await {
                    Ok(list) => {
                        topics = flatten_topics(&list);
                        for (i, topic) in topics.iter().enumerate() {
                            println!("{:>3}. {}", i + 1, topic);
                        }
                    }
                    Err(e) => error!(error = %e, "Failed to fetch topics"),
                },
                "topic" => match pick_topic(&topics, arg) {
                    Some(topic) => {
                        session.prefill_topic(topic);
                        println!("input: {}", session.input());
                    }
                    None => println!("unknown topic; run /topics first"),
                },
                "pdf" => extract_pdf(&client, PathBuf::from(arg.trim())).await,
                other => println!("unknown command '/{}'", other),
            }
            continue;
        }

        // An empty line sends whatever is already in the input (e.g. a prefilled topic).
        if !line.is_empty() {
            session.set_input(line);
        }

        match session.submit(&client).await {
            SubmitOutcome::Rejected(RejectReason::EmptyInput) => continue,
            SubmitOutcome::Rejected(RejectReason::Busy) => println!("still waiting for a reply"),
            SubmitOutcome::Replied | SubmitOutcome::Failed => {}
        }
        render(&session, &mut rendered);
    }

    Ok(())
}

/// Print every message appended since the last call.
fn render(session: &ChatSession, rendered: &mut usize) {
    for message in &session.messages()[*rendered..] {
        print_message(message);
    }
    *rendered = session.messages().len();
}

fn print_message(message: &Message) {
    let who = match message.role {
        ChatRole::User => "you",
        ChatRole::Assistant => "assistant",
        ChatRole::System => "system",
    };
    let local = message.timestamp.with_timezone(&chrono::Local);
    let time = local.format("%H:%M");
    println!("[{}] {}: {}\n", time, who, message.content);
}

/// Topics are numbered from 1 as printed by `/topics`.
fn pick_topic<'a>(topics: &'a [String], arg: &str) -> Option<&'a String> {
    let n: usize = arg.trim().parse().ok()?;
    topics.get(n.checked_sub(1)?)
}

fn flatten_topics(list: &TopicList) -> Vec<String> {
    list.popular
        .iter()
        .chain(list.categories.iter().flat_map(|c| c.topics.iter()))
        .cloned()
        .collect()
}

async fn extract_pdf(client: &HttpClient, path: PathBuf) {
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!(path = %path.display(), error = %e, "Failed to read file");
            return;
        }
    };
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document.pdf".to_string());

    match client.extract_pdf(&file_name, bytes).await {
        Ok(response) => println!("{}\n", response.content),
        Err(e) => error!(error = %e, "Failed to extract PDF text"),
    }
}
