use ballot::{MemoryDocument, ShellConfig, StrictChecks};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Render the voting application headlessly and print the mounted HTML.
#[derive(Parser)]
#[command(name = "ballot-render")]
#[command(about = "Render the voting application shell for a path", long_about = None)]
struct Cli {
    /// Location the host reports at load time
    #[arg(short, long, default_value = "/")]
    path: String,

    /// Identifier of the element to mount into
    #[arg(short, long, default_value = ballot::DEFAULT_MOUNT_ID)]
    mount_id: String,

    /// Element identifier the host document actually provides
    #[arg(long)]
    host_element: Option<String>,

    /// Disable strict-mode checks
    #[arg(long)]
    no_strict: bool,

    /// Paths to navigate to after start-up, in order
    #[arg(short, long)]
    navigate: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ballot=info,ballot_std=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let host_element = cli.host_element.as_deref().unwrap_or(&cli.mount_id);
    let document = MemoryDocument::new()
        .with_location(cli.path.as_str())
        .with_element(host_element);

    let strict = if cli.no_strict {
        StrictChecks::empty()
    } else {
        StrictChecks::all()
    };
    let config = ShellConfig::new()
        .with_mount_id(cli.mount_id.as_str())
        .with_strict(strict);

    let mut app = match ballot::start(&document, &config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "Failed to start");
            return Err(e.into());
        }
    };

    println!("{}\t{}", app.location(), app.element().html());
    for path in cli.navigate {
        app.navigate(path);
        println!("{}\t{}", app.location(), app.element().html());
    }

    Ok(())
}
