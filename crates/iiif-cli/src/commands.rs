use anyhow::Context;
use colored::Colorize;
use iiif_presentation::{
    Annotation, AnnotationList, Canvas, Collection, DocumentStore, ImageResource, Layer,
    Manifest, Map, PresentationError, PresentationObject, Range, Sequence, Value, Vocabulary,
    ALLOWED_ANYWHERE_PROPS, JSON_LD_PROPS,
};

use crate::cli::*;

/// Call a generic command function with the resource type selected by `kind`.
macro_rules! with_kind {
    ($kind:expr, $func:ident($($arg:expr),*)) => {
        match $kind {
            Kind::Manifest => $func::<Manifest>($($arg),*),
            Kind::Collection => $func::<Collection>($($arg),*),
            Kind::Sequence => $func::<Sequence>($($arg),*),
            Kind::Canvas => $func::<Canvas>($($arg),*),
            Kind::Range => $func::<Range>($($arg),*),
            Kind::Layer => $func::<Layer>($($arg),*),
            Kind::AnnotationList => $func::<AnnotationList>($($arg),*),
            Kind::Annotation => $func::<Annotation>($($arg),*),
            Kind::ImageResource => $func::<ImageResource>($($arg),*),
        }
    };
}

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Tidy(args) => with_kind!(args.kind, cmd_tidy(&args)),
        Command::Get(args) => with_kind!(args.kind, cmd_get(&args)),
        Command::New(args) => with_kind!(args.kind, cmd_new(&args)),
        Command::Vocab => cmd_vocab(),
    }
}

fn cmd_tidy<T: PresentationObject>(args: &TidyArgs) -> anyhow::Result<()> {
    let mut resource = T::parse(args.source.as_str())
        .with_context(|| format!("failed to parse {}", args.source))?;
    println!("{}", render(&mut resource, args.format)?);
    Ok(())
}

fn cmd_get<T: PresentationObject>(args: &GetArgs) -> anyhow::Result<()> {
    let resource = T::parse(args.source.as_str())
        .with_context(|| format!("failed to parse {}", args.source))?;
    match lookup(&resource, &args.property)? {
        Some(value) => {
            println!("{}", serde_json::to_string_pretty(value)?);
            Ok(())
        }
        None => anyhow::bail!("{} is not set", args.property),
    }
}

fn cmd_new<T: PresentationObject>(args: &NewArgs) -> anyhow::Result<()> {
    let mut resource = T::with_data(Map::new(), include_context::<T>(args));
    if let Some(id) = &args.id {
        resource.set_id(id.as_str());
    }
    if let Some(label) = &args.label {
        resource.set_label(label.as_str());
    }
    println!("{}", render(&mut resource, args.format)?);
    Ok(())
}

fn cmd_vocab() -> anyhow::Result<()> {
    for (title, table) in [
        ("JSON-LD properties", JSON_LD_PROPS),
        ("Allowed anywhere", ALLOWED_ANYWHERE_PROPS),
    ] {
        println!("{}", title.bold());
        for spec in table {
            println!("  {} → {}", format!("{:<12}", spec.name).cyan(), spec.key);
        }
    }
    println!(
        "{}",
        "metadata and viewing_hint (viewingHint) have dedicated accessors".dimmed()
    );
    Ok(())
}

/// Resolve a vocabulary property, falling back to a raw document key.
fn lookup<'a, T: PresentationObject>(
    resource: &'a T,
    property: &str,
) -> anyhow::Result<Option<&'a Value>> {
    match resource.get_property(property) {
        Ok(value) => Ok(value),
        Err(PresentationError::UnknownProperty(_)) => Ok(resource.get(property)),
        Err(e) => Err(e.into()),
    }
}

fn include_context<T: PresentationObject>(args: &NewArgs) -> bool {
    if args.context {
        true
    } else if args.no_context {
        false
    } else {
        T::TOP_LEVEL
    }
}

fn render<T: PresentationObject>(resource: &mut T, format: OutputFormat) -> anyhow::Result<String> {
    let text = match format {
        OutputFormat::Pretty => resource.to_pretty_json()?,
        OutputFormat::Compact => resource.to_json()?,
    };
    Ok(text)
}
