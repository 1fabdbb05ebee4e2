use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use healthbook::api::HttpBookingApi;
use healthbook::config::Config;
use healthbook::models::SessionUser;
use healthbook::navigation::History;
use healthbook::session::{FileSessionStore, SessionContext};
use healthbook::status::AppointmentStatus;
use healthbook::toast::ToastLog;
use healthbook::views::{CenterDetailsView, DashboardView, ViewContext};

/// Drives the booking pages against a REST backend and prints what they show.
#[derive(Parser, Debug)]
#[command(name = "healthbook")]
#[command(about = "Healthcare booking pages in the terminal")]
struct Args {
    /// Backend base URL (overrides API_BASE_URL)
    #[arg(long)]
    api: Option<String>,

    /// Session file (overrides SESSION_FILE)
    #[arg(long)]
    session_file: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage the stored session
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
    /// The signed-in patient's dashboard
    Dashboard {
        #[command(subcommand)]
        action: DashboardAction,
    },
    /// A diagnostic center's details page
    Center {
        center_id: String,
        #[command(subcommand)]
        action: Option<CenterAction>,
    },
}

#[derive(Subcommand, Debug)]
enum SessionAction {
    /// Store a token and user record, as the login page would
    Set {
        #[arg(long)]
        token: String,
        /// User record as JSON: {"id","name","email","role"}
        #[arg(long)]
        user: String,
    },
    /// Forget the stored session
    Clear,
}

#[derive(Subcommand, Debug)]
enum DashboardAction {
    Show,
    /// Change an appointment's date and status
    Edit {
        appointment_id: String,
        /// YYYY-MM-DD; defaults to the appointment's current date
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    Delete { appointment_id: String },
    Logout,
}

#[derive(Subcommand, Debug)]
enum CenterAction {
    Show,
    /// Update an appointment's status through the dialog
    Update {
        appointment_id: String,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        reason: Option<String>,
    },
    /// One-click cancel
    Cancel { appointment_id: String },
}

fn parse_status(raw: &str) -> anyhow::Result<AppointmentStatus> {
    AppointmentStatus::parse(raw).with_context(|| format!("unknown status {raw:?}"))
}

fn report(toasts: &ToastLog, history: &History) {
    for toast in toasts.drain() {
        let marker = if toast.is_failure() { "!" } else { "+" };
        println!("{marker} {}: {}", toast.title, toast.description);
    }
    if let Some(route) = history.current() {
        println!("-> {route}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut cfg = Config::from_env()?;
    if let Some(api) = args.api {
        cfg.api_base_url = api.trim_end_matches('/').to_string();
    }
    if let Some(path) = args.session_file {
        cfg.session_file = path;
    }

    let store = Arc::new(FileSessionStore::new(&cfg.session_file));
    let session = SessionContext::new(store.clone());
    let toasts = Arc::new(ToastLog::new());
    let history = Arc::new(History::new());
    let ctx = ViewContext {
        api: Arc::new(HttpBookingApi::new(&cfg.api_base_url, cfg.request_timeout)?),
        session: session.clone(),
        toaster: toasts.clone(),
        navigator: history.clone(),
    };

    match args.command {
        Command::Session { action } => match action {
            SessionAction::Set { token, user } => {
                let user: SessionUser =
                    serde_json::from_str(&user).context("user must be a JSON user record")?;
                session.establish(&token, &user)?;
                println!("session stored in {}", store.path().display());
            }
            SessionAction::Clear => {
                session.clear()?;
                println!("session cleared");
            }
        },
        Command::Dashboard { action } => {
            let view = DashboardView::new(ctx);
            view.mount().await;
            if history.current().is_none() {
                match action {
                    DashboardAction::Show => {}
                    DashboardAction::Edit {
                        appointment_id,
                        date,
                        status,
                    } => {
                        if !view.open_edit(&appointment_id) {
                            anyhow::bail!("appointment {appointment_id} cannot be edited");
                        }
                        if let Some(date) = date {
                            view.set_edit_date(date);
                        }
                        if let Some(status) = status {
                            view.set_edit_status(parse_status(&status)?);
                        }
                        view.submit_edit().await;
                    }
                    DashboardAction::Delete { appointment_id } => {
                        if !view.request_delete(&appointment_id) {
                            anyhow::bail!("appointment {appointment_id} cannot be deleted");
                        }
                        view.confirm_delete().await;
                    }
                    DashboardAction::Logout => view.logout(),
                }
                print!("{}", view.render());
            }
            report(&toasts, &history);
        }
        Command::Center { center_id, action } => {
            let view = CenterDetailsView::new(ctx, center_id);
            println!("{}\n", view.route());
            view.mount().await;
            match action.unwrap_or(CenterAction::Show) {
                CenterAction::Show => {}
                CenterAction::Update {
                    appointment_id,
                    status,
                    notes,
                    reason,
                } => {
                    if !view.open_edit(&appointment_id) {
                        anyhow::bail!("appointment {appointment_id} is not listed on this page");
                    }
                    if let Some(status) = status {
                        view.set_edit_status(parse_status(&status)?);
                    }
                    if let Some(notes) = notes {
                        view.set_edit_notes(notes);
                    }
                    if let Some(reason) = reason {
                        view.set_edit_reason(reason);
                    }
                    view.submit_edit().await;
                }
                CenterAction::Cancel { appointment_id } => {
                    view.cancel_appointment(&appointment_id).await;
                }
            }
            print!("{}", view.render());
            report(&toasts, &history);
        }
    }
    Ok(())
}
