use clap::{Parser, Subcommand};
use folio::{config, content, mail, output, render, server};
use std::path::PathBuf;
use std::sync::Arc;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio site server with a contact-form relay")]
#[command(long_about = "\
Portfolio site server with a contact-form relay

The page is rendered once at startup and served as a cached document.
The only dynamic endpoint is POST /api/contact, which forwards form
submissions to your inbox over SMTP.

Configuration resolution (first available wins):
  Port:        FOLIO_PORT → config.toml [server].port → 5000
  Credentials: EMAIL_USER / EMAIL_PASS → config.toml [mail]
  Base URL:    PUBLIC_BASE_URL → config.toml [site].base_url → \"\"

Without SMTP credentials the server still runs; contact submissions are
accepted, validated, and recorded in memory instead of delivered.

Run 'folio gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Config file
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Output directory for the build command
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the page and serve it with the contact relay
    Serve,
    /// Write the rendered site to the output directory as static files
    Build,
    /// Validate config and print the content inventory without serving
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => {
            init_tracing();
            let cfg = config::SiteConfig::load(&cli.config)?;
            let portfolio = content::portfolio();

            let mailer: Arc<dyn mail::Mailer> = if cfg.mail_ready() {
                Arc::new(mail::SmtpMailer::new(&cfg.mail)?)
            } else {
                tracing::warn!(
                    "EMAIL_USER / EMAIL_PASS not set; contact submissions will be recorded, not delivered"
                );
                Arc::new(mail::MemoryMailer::new())
            };

            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::run(&cfg, &portfolio, mailer))?;
        }
        Command::Build => {
            let cfg = config::SiteConfig::load(&cli.config)?;
            let portfolio = content::portfolio();
            let assets_dir = PathBuf::from(&cfg.server.assets_dir);
            println!("==> Building {}", cli.output.display());
            let summary = render::write_site(&portfolio, &cfg, &cli.output, &assets_dir)?;
            output::print_build_summary(&summary, &cli.output);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            let cfg = config::SiteConfig::load(&cli.config)?;
            let portfolio = content::portfolio();
            println!("==> Checking {}", cli.config.display());
            output::print_inventory(&portfolio, &cfg);
            println!("==> Config and content are valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Initialize tracing from RUST_LOG, defaulting to info for this crate.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("folio=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
