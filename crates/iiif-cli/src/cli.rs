use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "iiif",
    about = "Inspect, normalize, and create IIIF Presentation 2.x documents",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Kind {
    Manifest,
    Collection,
    Sequence,
    Canvas,
    Range,
    Layer,
    AnnotationList,
    Annotation,
    ImageResource,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Compact,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a document and print it normalized
    Tidy(TidyArgs),
    /// Print one property of a document
    Get(GetArgs),
    /// Create a new resource
    New(NewArgs),
    /// List the accessor vocabularies and their document keys
    Vocab,
}

#[derive(Args)]
pub struct TidyArgs {
    /// Path to a JSON file, or inline JSON text
    pub source: String,
    #[arg(short, long, value_enum, default_value_t = Kind::Manifest)]
    pub kind: Kind,
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct GetArgs {
    /// Path to a JSON file, or inline JSON text
    pub source: String,
    /// Vocabulary property name (e.g. `see_also`) or raw document key
    pub property: String,
    #[arg(short, long, value_enum, default_value_t = Kind::Manifest)]
    pub kind: Kind,
}

#[derive(Args)]
pub struct NewArgs {
    #[arg(short, long, value_enum)]
    pub kind: Kind,
    #[arg(long)]
    pub id: Option<String>,
    #[arg(long)]
    pub label: Option<String>,
    /// Always include the JSON-LD context
    #[arg(long, conflicts_with = "no_context")]
    pub context: bool,
    /// Never include the JSON-LD context
    #[arg(long)]
    pub no_context: bool,
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tidy_defaults() {
        let cli = Cli::try_parse_from(["iiif", "tidy", "manifest.json"]).unwrap();
        match cli.command {
            Command::Tidy(args) => {
                assert_eq!(args.source, "manifest.json");
                assert_eq!(args.kind, Kind::Manifest);
                assert_eq!(args.format, OutputFormat::Pretty);
            }
            _ => panic!("expected tidy"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn kebab_case_kinds() {
        let cli = Cli::try_parse_from([
            "iiif",
            "get",
            "list.json",
            "label",
            "--kind",
            "annotation-list",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Command::Get(args) => {
                assert_eq!(args.kind, Kind::AnnotationList);
                assert_eq!(args.property, "label");
            }
            _ => panic!("expected get"),
        }
    }

    #[test]
    fn new_requires_kind() {
        assert!(Cli::try_parse_from(["iiif", "new"]).is_err());
    }

    #[test]
    fn context_flags_conflict() {
        let parsed = Cli::try_parse_from([
            "iiif",
            "new",
            "--kind",
            "canvas",
            "--context",
            "--no-context",
        ]);
        assert!(parsed.is_err());
    }
}
