use clap::{CommandFactory, Parser as ClapParser, Subcommand};
use tracing::debug;
use vpi_bridge::header::{self, Platform};
use vpibc::{PlatformArg, hex_dump, write_header};

/// vpi-bridge - C header and diagnostics for the VPI host bridge
#[derive(ClapParser)]
#[command(name = "vpi-bridge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the C header the host binding compiles against
    Header {
        /// Target platform (default: the platform this tool was built for)
        #[arg(short, long, value_enum)]
        platform: Option<PlatformArg>,

        /// Write the header to a file instead of stdout
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<String>,
    },

    /// Show the bytes a host string becomes on the C side
    Marshal {
        /// Text to marshal
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Generate shell completions for bash, zsh, fish, or powershell
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries the header
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Header { platform, output } => header_command(platform, output.as_deref()),
        Commands::Marshal { text } => {
            println!("{}", hex_dump(&text)?);
            Ok(())
        }
        Commands::Completions { shell } => {
            generate_completions(shell);
            Ok(())
        }
    }
}

fn header_command(
    platform: Option<PlatformArg>,
    output: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let platform: Platform = platform.map(Platform::from).unwrap_or_else(PlatformArg::host);
    debug!(?platform, "rendering header");

    let rendered = header::render(platform);

    match output {
        Some(path) => write_header(path, &rendered)?,
        None => print!("{}", rendered),
    }

    Ok(())
}

fn generate_completions(shell: clap_complete::Shell) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
}
