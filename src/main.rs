use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use intruguard_console::components::{detect, login, particles};
use intruguard_console::dom::{Element, Page, SelectedFile};
use intruguard_console::{Browser, ConsoleConfig, ConsoleError};

/// Drive the IntruGuard SOC pages headlessly against a running backend.
#[derive(Debug, Parser)]
#[command(name = "intruguard-console", version, about, long_about = None)]
struct Cli {
    /// Backend origin. Overrides INTRUGUARD_BASE_URL.
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Submit the login form; on success, open the dashboard.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Open the log viewer.
    Logs,
    /// Open the dashboard counters.
    Dashboard,
    /// Upload a file to the detection endpoint.
    Detect {
        /// File to upload. Omit to see the validation alert.
        file: Option<PathBuf>,
    },
    /// Open the live traffic monitor.
    Live,
    /// Generate the particle field on the login page.
    Particles,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env loaded");
    }

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), ConsoleError> {
    let mut config = ConsoleConfig::from_env()?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url);
    }
    let browser = Browser::from_config(&config)?;
    tracing::info!(base_url = browser.api().base_url(), "console ready");

    match cli.command {
        Command::Login { username, password } => {
            let mut page = browser.open("/").await?;
            page.document.set_value(login::USERNAME_FIELD, &username)?;
            page.document.set_value(login::PASSWORD_FIELD, &password)?;
            browser.submit(&mut page, login::FORM_ID).await?;
            print_page(&page);
            if let Some(next) = browser.follow(&page).await? {
                print_page(&next);
            }
        }
        Command::Logs => print_page(&browser.open("/logs").await?),
        Command::Dashboard => print_page(&browser.open("/dashboard").await?),
        Command::Live => print_page(&browser.open("/live_monitor").await?),
        Command::Detect { file } => {
            let mut page = browser.open("/detect").await?;
            if let Some(path) = file {
                let bytes = tokio::fs::read(&path).await.map_err(|e| ConsoleError::FileRead {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?;
                let name = path
                    .file_name()
                    .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
                page.document.select_file(detect::INPUT_ID, SelectedFile { name, bytes })?;
            }
            browser.click(&mut page, detect::BUTTON_ID).await?;
            print_page(&page);
        }
        Command::Particles => {
            let page = browser.open("/").await?;
            print_particles(&page);
        }
    }
    Ok(())
}

fn print_page(page: &Page) {
    println!("page     : {}", page.path);
    if let Some(target) = page.navigated_to() {
        println!("location : {target}");
    }
    for alert in &page.alerts {
        println!("alert    : {alert}");
    }
    print_nodes(page.document.body());
}

/// Print every id'd node with its text; list items get one line each.
/// Particle containers are summarised, not dumped.
fn print_nodes(el: &Element) {
    for child in &el.children {
        match child.id.as_deref() {
            Some(particles::CONTAINER_ID) => {
                println!("#{:<14} {} particles", particles::CONTAINER_ID, child.children.len());
            }
            Some(id) if child.tag == "ul" => {
                println!("#{id:<14} {} items", child.children.len());
                for item in &child.children {
                    println!("  - {}", item.text_content());
                }
            }
            Some(id) if matches!(child.tag.as_str(), "span" | "pre") => {
                println!("#{id:<14} {}", child.text_content());
            }
            _ => print_nodes(child),
        }
    }
}

fn print_particles(page: &Page) {
    let Some(container) = page.document.get_element_by_id(particles::CONTAINER_ID) else {
        println!("no particle container on {}", page.path);
        return;
    };
    println!("{:>4}  {:<22}  {:<22}  {:<22}  {:<22}", "#", "size", "left", "duration", "delay");
    for (i, p) in container.children.iter().enumerate() {
        println!(
            "{:>4}  {:<22}  {:<22}  {:<22}  {:<22}",
            i + 1,
            p.style("width").unwrap_or_default(),
            p.style("left").unwrap_or_default(),
            p.style("animation-duration").unwrap_or_default(),
            p.style("animation-delay").unwrap_or_default(),
        );
    }
}
