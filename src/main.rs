use std::path::PathBuf;

use clap::{Parser, Subcommand};

use promptgen::{DEFAULT_CONFIG_PATH, RawFields};

#[derive(Parser)]
#[command(name = "promptgen")]
#[command(version)]
#[command(
    about = "Assemble structured code-generation prompts and copy them to the clipboard",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a prompt from field flags and print it
    #[clap(visible_alias = "g")]
    Generate {
        /// Language or stack the engineer specializes in
        #[arg(long)]
        language_stack: Option<String>,
        /// Feature goal the prompt asks for
        #[arg(long)]
        goal: Option<String>,
        /// Concrete tech stack and versions
        #[arg(long)]
        tech_stack: Option<String>,
        /// Architectural style to follow
        #[arg(long)]
        architecture: Option<String>,
        /// Design patterns to apply
        #[arg(long)]
        design_patterns: Option<String>,
        /// Non-functional requirements
        #[arg(long)]
        non_functional: Option<String>,
        /// Error handling expectations
        #[arg(long)]
        error_handling: Option<String>,
        /// Configuration approach
        #[arg(long)]
        configuration: Option<String>,
        /// Unit test framework to use
        #[arg(long)]
        unit_test_framework: Option<String>,
        /// Free-text style and quality notes
        #[arg(long)]
        style_quality: Option<String>,
        /// Copy the generated prompt to the clipboard
        #[arg(long)]
        copy: bool,
        /// Path to a defaults file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },
    /// Collect fields interactively, then build and optionally copy
    #[clap(visible_alias = "w")]
    Wizard {
        /// Path to a defaults file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },
    /// Copy text from stdin to the clipboard
    #[clap(visible_alias = "c")]
    Copy,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            language_stack,
            goal,
            tech_stack,
            architecture,
            design_patterns,
            non_functional,
            error_handling,
            configuration,
            unit_test_framework,
            style_quality,
            copy,
            config,
        } => {
            let raw = RawFields {
                language_stack,
                goal,
                tech_stack,
                architecture,
                design_patterns,
                non_functional,
                error_handling,
                configuration,
                unit_test_framework,
                style_quality,
            };
            promptgen::generate(raw, &config, copy).map(|_| ())
        }
        Commands::Wizard { config } => promptgen::wizard(&config).map(|_| ()),
        Commands::Copy => promptgen::copy_stdin().map(|_| ()),
    };

    if result.is_err() {
        // The status sink already carried the message to stderr.
        std::process::exit(1);
    }
}
