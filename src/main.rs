use std::process::ExitCode;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tracing::info;

use memo_summarizer::{
    cli::{Args, Command, INTERACTIVE_HELP},
    setup_logging, view, Config, HttpSummarizer, SubmitOutcome, SummarizerForm,
};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    setup_logging();
    let args = Args::parse();

    // Load configuration, then let flags override it
    let mut config = Config::load()?;
    if let Some(endpoint) = &args.endpoint {
        config = config.with_endpoint(endpoint)?;
    }
    if let Some(secs) = args.timeout_secs {
        config = config.with_timeout_secs(secs)?;
    }
    info!(endpoint = %config.endpoint, timeout = ?config.timeout, "using summarization service");

    let form = SummarizerForm::new(HttpSummarizer::from_config(&config)?);

    if args.interactive {
        run_interactive(&form).await?;
        return Ok(ExitCode::SUCCESS);
    }

    let text = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => tokio::fs::read_to_string(path).await?,
        (None, None) => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        }
    };
    form.set_text(text);

    let outcome = form.submit().await;
    print!("{}", view::render(&form.snapshot()));

    match outcome {
        SubmitOutcome::Completed => Ok(ExitCode::SUCCESS),
        _ => Ok(ExitCode::FAILURE),
    }
}

async fn run_interactive(form: &SummarizerForm<HttpSummarizer>) -> std::io::Result<()> {
    println!("{INTERACTIVE_HELP}");
    print!("{}", view::render(&form.snapshot()));

    // Redraw the controls whenever a request starts
    let mut updates = form.subscribe();
    tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let loading = updates.borrow_and_update().is_loading;
            if loading {
                println!("{}", view::render_controls(&updates.borrow()));
            }
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Input(text) => {
                form.append_line(text);
            }
            Command::Summarize => {
                form.submit().await;
                print!("{}", view::render(&form.snapshot()));
            }
            Command::Clear => {
                form.clear();
                print!("{}", view::render(&form.snapshot()));
            }
            Command::Show => print!("{}", view::render(&form.snapshot())),
            Command::Quit => break,
            Command::Unknown(other) => println!("Unknown command :{other}. {INTERACTIVE_HELP}"),
        }
    }

    Ok(())
}
