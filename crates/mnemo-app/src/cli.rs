use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "mnemo")]
#[command(about = "Build mnemonic vocabulary flashcards from Cambridge Dictionary entries", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config profile to use
    #[arg(long, default_value = "main", global = true)]
    pub profile: String,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up a word, generate a mnemonic and add the card to Anki
    Add(AddArgs),

    /// Print the dictionary record for a word as JSON
    Lookup {
        word: String,

        #[command(flatten)]
        languages: LanguageArgs,
    },

    /// List supported native/target language pairs
    Languages,

    /// List models offered for each provider
    Models {
        /// Only show this provider (groq/openai)
        #[arg(long)]
        provider: Option<String>,
    },

    /// List deck names from Anki
    Decks,

    /// Show or initialize the config profile
    Config {
        /// Write the default profile if it does not exist yet
        #[arg(long)]
        init: bool,

        /// Only print the profile path
        #[arg(long)]
        path: bool,
    },
}

#[derive(clap::Args, Clone, Default)]
pub struct LanguageArgs {
    /// Language you speak (e.g. english, french, turkish)
    #[arg(long)]
    pub native: Option<String>,

    /// Language you are learning
    #[arg(long)]
    pub target: Option<String>,
}

#[derive(clap::Args, Clone, Default)]
pub struct AddArgs {
    /// Word to add, asked interactively when omitted
    pub word: Option<String>,

    #[command(flatten)]
    pub languages: LanguageArgs,

    /// LLM provider (groq/openai)
    #[arg(long)]
    pub provider: Option<String>,

    /// Model name for the provider
    #[arg(long)]
    pub model: Option<String>,

    /// Target deck
    #[arg(long)]
    pub deck: Option<String>,

    /// Definition to use when the dictionary has no entry
    #[arg(long)]
    pub definition: Option<String>,

    /// Card color theme
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Print the note as JSON instead of sending it to Anki
    #[arg(long)]
    pub dry_run: bool,

    /// Never prompt; fail when a required value is missing
    #[arg(long)]
    pub no_input: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_flags() {
        let cli = Cli::try_parse_from([
            "mnemo", "add", "Bonjour", "--native", "french", "--target", "english", "--theme", "dark",
            "--dry-run",
        ])
        .unwrap();

        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.word.as_deref(), Some("Bonjour"));
                assert_eq!(args.languages.native.as_deref(), Some("french"));
                assert_eq!(args.theme, Some(Theme::Dark));
                assert!(args.dry_run);
                assert!(!args.no_input);
            }
            _ => panic!("expected add command"),
        }
        assert_eq!(cli.profile, "main");
    }

    #[test]
    fn profile_flag_is_global() {
        let cli = Cli::try_parse_from(["mnemo", "decks", "--profile", "work", "-v"]).unwrap();
        assert_eq!(cli.profile, "work");
        assert!(cli.verbose);
    }
}
