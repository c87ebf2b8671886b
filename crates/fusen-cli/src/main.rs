use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tokio::io::{AsyncBufReadExt, BufReader};

use fusen_core::app::{App, FormController, Submission};
use fusen_core::domain::{Action, TaskId};
use fusen_core::view::{LabelStyle, render_list};

const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/todos";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Labels {
    Text,
    Icons,
}

impl From<Labels> for LabelStyle {
    fn from(labels: Labels) -> Self {
        match labels {
            Labels::Text => LabelStyle::Text,
            Labels::Icons => LabelStyle::Icons,
        }
    }
}

/// Interactive to-do list, seeded once from a remote endpoint.
#[derive(Debug, Parser)]
#[command(name = "fusen")]
struct Args {
    /// Seed collection endpoint (GET, JSON array of {id, title, ...}).
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Row control labels.
    #[arg(long, value_enum, default_value_t = Labels::Text)]
    labels: Labels,

    /// Skip the seed fetch and start empty.
    #[arg(long)]
    no_seed: bool,
}

/// One parsed REPL line.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    List,
    Status,
    Help,
    Quit,
    Add { title: String },
    Edit { id: TaskId, title: String },
    Toggle(TaskId),
    Delete(TaskId),
}

fn parse_id(raw: &str) -> Result<TaskId, String> {
    raw.parse()
        .map_err(|_| format!("not a task id: {raw}"))
}

fn parse_command(line: &str) -> Result<Command, String> {
    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };

    match cmd {
        "list" | "ls" => Ok(Command::List),
        "status" => Ok(Command::Status),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        // An empty title is passed through on purpose: the form controller
        // owns that rule and reports it as an error.
        "add" => Ok(Command::Add {
            title: rest.to_string(),
        }),
        "edit" => {
            let (id, title) = rest
                .split_once(char::is_whitespace)
                .ok_or("usage: edit <id> <title>")?;
            Ok(Command::Edit {
                id: parse_id(id)?,
                title: title.trim().to_string(),
            })
        }
        "toggle" => Ok(Command::Toggle(parse_id(rest)?)),
        "delete" | "rm" => Ok(Command::Delete(parse_id(rest)?)),
        other => Err(format!("unknown command: {other} (try `help`)")),
    }
}

fn print_help() {
    println!("commands:");
    println!("  list                 show the task list");
    println!("  add <title>          add a task");
    println!("  edit <id> <title>    change a task's title");
    println!("  toggle <id>          flip completion");
    println!("  delete <id>          remove a task");
    println!("  status               completed/pending counts");
    println!("  quit                 exit");
}

async fn render(app: &App, style: LabelStyle) {
    let tasks = app.store().snapshot().await;
    print!("{}", render_list(&tasks, style));
}

/// Run one command. Returns false when the loop should stop.
async fn handle_command(app: &App, form: &mut FormController, style: LabelStyle, command: Command) -> bool {
    match command {
        Command::Quit => return false,
        Command::Help => print_help(),
        Command::List => render(app, style).await,
        Command::Status => {
            let counts = app.store().counts().await;
            println!(
                "{} tasks: {} completed, {} pending",
                counts.total, counts.completed, counts.pending
            );
        }
        Command::Add { title } => {
            form.set_title(title);
            match form.submit(app.store(), app.ids().as_ref()).await {
                Ok(Submission::Added(id)) | Ok(Submission::Updated(id)) => {
                    println!("added {id}")
                }
                Err(err) => println!("{err}"),
            }
        }
        Command::Edit { id, title } => match app.store().get(id).await {
            Some(task) => {
                form.begin_edit(&task);
                form.set_title(title);
                match form.submit(app.store(), app.ids().as_ref()).await {
                    Ok(_) => println!("updated {id}"),
                    Err(err) => println!("{err}"),
                }
            }
            None => println!("no task with id {id}"),
        },
        Command::Toggle(id) => app.store().dispatch(Action::ToggleTask(id)).await,
        Command::Delete(id) => app.store().dispatch(Action::DeleteTask(id)).await,
    }
    true
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let mut builder = App::builder();
    if !args.no_seed {
        builder = builder.endpoint(&args.endpoint);
    }
    let app = builder.build()?;
    tracing::info!(endpoint = %args.endpoint, no_seed = args.no_seed, "fusen starting");
    app.mount();

    let style = LabelStyle::from(args.labels);
    let mut form = FormController::new();
    let mut revisions = app.store().subscribe();

    println!("What's the plan for today...?");
    print_help();
    render(&app, style).await;

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        tokio::select! {
            changed = revisions.changed() => {
                // Seed tasks landing mid-session re-render the list.
                if changed.is_ok() {
                    revisions.borrow_and_update();
                    render(&app, style).await;
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match parse_command(line) {
                    Ok(command) => {
                        if !handle_command(&app, &mut form, style, command).await {
                            break;
                        }
                    }
                    Err(message) => println!("{message}"),
                }
            }
        }
    }

    app.shutdown();
    Ok(())
}
