use clap::{Args, Parser, Subcommand};

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\nOPTIONS:\n{options}\n\
COMMANDS:\n{subcommands}\n";

#[derive(Parser)]
#[command(name = "deckguide")]
#[command(version)]
#[command(about = "Publish Random Dice deck guides to a Discord webhook")]
#[command(help_template = HELP_TEMPLATE)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(
        about = "Render every guide and print the cards",
        long_about = "Dry run fetches, transforms and renders the guides, then prints the resulting cards as JSON without contacting Discord.",
        after_help = "Example:\n    deckguide dry-run"
    )]
    DryRun,
    #[command(
        about = "Render every guide and post the cards to the webhook",
        long_about = "Run posts each card to the webhook one second apart. Credentials fall back to WEBHOOK_ID and WEBHOOK_TOKEN when the flags are omitted.",
        after_help = "Example:\n    deckguide run --webhook-id 751231833232113684 --webhook-token <TOKEN>"
    )]
    Run(RunArgs),
}

#[derive(Args)]
pub struct RunArgs {
    /// Webhook ID (default: WEBHOOK_ID)
    #[arg(long, value_name = "ID")]
    pub webhook_id: Option<String>,

    /// Webhook token (default: WEBHOOK_TOKEN)
    #[arg(long, value_name = "TOKEN")]
    pub webhook_token: Option<String>,
}
