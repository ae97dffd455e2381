//! Apply command implementation

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use miette::{IntoDiagnostic, Result, miette};
use textsplice_ast::Node;
use textsplice_core::{Config, Find, Ignore, Options, Pattern, Replace, Schema, find_and_replace};
use tracing::{debug, info};

use crate::cli::ApplyArgs;

/// Runs `apply`. Returns true when `--check` found something to change.
pub fn run_apply(args: &ApplyArgs, config_path: Option<&Path>) -> Result<bool> {
    let config = load_config(config_path)?;
    let schema = build_schema(args, config.as_ref())?;
    let options = build_options(args, config.as_ref());

    let mut tree = read_tree(&args.input)?;
    let original = args.check.then(|| tree.clone());

    find_and_replace(&mut tree, schema, &options).into_diagnostic()?;

    if let Some(original) = original {
        let changed = tree != original;
        if changed {
            info!("{} would change", args.input.display());
        } else {
            info!("No changes");
        }
        return Ok(changed);
    }

    write_tree(&tree, args.output.as_deref(), args.pretty)?;
    Ok(false)
}

fn load_config(path: Option<&Path>) -> Result<Option<Config>> {
    if let Some(path) = path {
        debug!("Using config: {}", path.display());
        return Config::from_file(path).into_diagnostic().map(Some);
    }

    match Config::discover(".") {
        Some(path) => {
            info!("Using config: {}", path.display());
            Config::from_file(&path).into_diagnostic().map(Some)
        }
        None => {
            debug!("No config file found");
            Ok(None)
        }
    }
}

fn build_schema(args: &ApplyArgs, config: Option<&Config>) -> Result<Schema<'static>> {
    if let Some(find) = &args.find {
        let find = if args.regex {
            Find::Pattern(Pattern::with_flags(find, true, args.ignore_case).into_diagnostic()?)
        } else {
            Find::from(find.as_str())
        };
        let replace = Replace::from(args.replace.clone().unwrap_or_default());
        return Ok(Schema::single(find, Some(replace)));
    }

    match config {
        Some(config) => config.schema().into_diagnostic(),
        None => Err(miette!(
            "No rules to apply. Pass --find or create a config with `textsplice init`."
        )),
    }
}

fn build_options(args: &ApplyArgs, config: Option<&Config>) -> Options {
    let mut options = config.map(Config::options).unwrap_or_default();

    if !args.ignore.is_empty() {
        options.ignore = Ignore::new(args.ignore.clone());
    }

    options
}

fn read_tree(input: &Path) -> Result<Node> {
    let content = if input == Path::new("-") {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content).into_diagnostic()?;
        content
    } else {
        fs::read_to_string(input)
            .map_err(|e| miette!("Failed to read {}: {}", input.display(), e))?
    };

    serde_json::from_str(&content)
        .map_err(|e| miette!("Invalid hast tree in {}: {}", input.display(), e))
}

fn write_tree(tree: &Node, output: Option<&Path>, pretty: bool) -> Result<()> {
    let mut json = if pretty {
        serde_json::to_string_pretty(tree)
    } else {
        serde_json::to_string(tree)
    }
    .into_diagnostic()?;
    json.push('\n');

    match output {
        Some(path) => {
            fs::write(path, json)
                .map_err(|e| miette!("Failed to write {}: {}", path.display(), e))?;
            info!("Wrote {}", path.display());
        }
        None => io::stdout().write_all(json.as_bytes()).into_diagnostic()?,
    }

    Ok(())
}
