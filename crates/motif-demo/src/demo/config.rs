use anyhow::bail;
use clap::{Parser, ValueEnum};
use core::fmt;
use motif::ThemeKind;

/// Which scenario to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Pattern {
    /// Enqueue the values, walk them with the iterator, then drain them.
    Queue,
    /// Send one request down a Date -> String -> Data handler chain.
    Chain,
    /// Send the same request through a router holding the same types.
    Router,
    /// Style a label with each selected theme.
    Theme,
    /// Everything above, in order.
    All,
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Queue => "queue",
            Self::Chain => "chain",
            Self::Router => "router",
            Self::Theme => "theme",
            Self::All => "all scenarios",
        };
        f.write_str(name)
    }
}

/// The kind of value sent through the chain and the router.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RequestKind {
    /// The current `SystemTime`.
    Date,
    /// A short `String`.
    String,
    /// Ten zero bytes.
    Data,
    /// The integer 42, which no handler accepts.
    Int,
}

/// Runtime configuration for the `motif-demo` binary.
///
/// Every option can also come from the environment (or a `.env` file).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "motif-demo",
    version,
    about = "Walks through the motif queue, handler chain, router and theme factory"
)]
pub struct CliArgs {
    /// Scenario to run.
    ///
    /// Environment variable: `MOTIF_PATTERN`
    #[arg(long, env = "MOTIF_PATTERN", value_enum, default_value_t = Pattern::All)]
    pub pattern: Pattern,

    /// Comma separated integers to push through the queue.
    ///
    /// Environment variable: `MOTIF_QUEUE_VALUES`
    #[arg(
        long,
        env = "MOTIF_QUEUE_VALUES",
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_value = "1,2,3,4,5,9108,10482,5,2,2,5,2"
    )]
    pub values: Vec<i64>,

    /// Request sent through the chain and the router.
    ///
    /// Environment variable: `MOTIF_REQUEST`
    #[arg(long, env = "MOTIF_REQUEST", value_enum, default_value_t = RequestKind::Int)]
    pub request: RequestKind,

    /// Theme to apply (light, dark or brown). Applies all three when unset.
    ///
    /// Environment variable: `MOTIF_THEME`
    #[arg(long, env = "MOTIF_THEME")]
    pub theme: Option<ThemeKind>,

    /// Text of the label styled by the theme scenario.
    ///
    /// Environment variable: `MOTIF_LABEL`
    #[arg(long, env = "MOTIF_LABEL", default_value_t = String::from("What It Smell Like"))]
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub pattern: Pattern,
    pub values: Vec<i64>,
    pub request: RequestKind,
    pub themes: Vec<ThemeKind>,
    pub label: String,
}

impl TryFrom<CliArgs> for DemoConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.values.is_empty() {
            bail!("MOTIF_QUEUE_VALUES must contain at least one value");
        }

        if args.label.trim().is_empty() {
            bail!("MOTIF_LABEL must not be blank");
        }

        let themes = match args.theme {
            Some(kind) => vec![kind],
            None => ThemeKind::ALL.to_vec(),
        };

        Ok(Self {
            pattern: args.pattern,
            values: args.values,
            request: args.request,
            themes,
            label: args.label,
        })
    }
}
