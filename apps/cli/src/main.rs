//! cinnabar - FHIR R4 JSON checker and formatter
//!
//! Usage:
//!   cinnabar check patient.json bundle.json
//!   cinnabar check --ndjson export/Observation.ndjson
//!   cinnabar fmt --pretty observation.json
//!   cinnabar types Observation

mod logging;

use anyhow::{bail, Context, Result};
use cinnabar_format::{CodecOptions, Decoded, JsonCodec};
use cinnabar_models::{r4, FieldDef, FieldKind, Resource, StructureShape};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[clap(name = "cinnabar")]
#[clap(about = "Check, format and inspect FHIR R4 JSON resources")]
struct Cli {
    #[clap(flatten)]
    codec: CodecArgs,

    /// Log debug output (overridden by RUST_LOG)
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct CodecArgs {
    /// JSON file with codec options (camelCase keys)
    #[clap(long, global = true, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Report unknown fields, codes and resource types as warnings
    #[clap(long, global = true)]
    lenient: bool,

    /// Maximum nesting depth below the root resource
    #[clap(long, global = true, value_name = "N")]
    max_depth: Option<usize>,

    /// Normalise decimals through f64 instead of keeping their text
    #[clap(long, global = true)]
    lossy_decimals: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode resources and report errors and warnings
    Check {
        /// Input files, or `-` for stdin
        #[clap(required = true)]
        files: Vec<PathBuf>,

        /// Treat each input as newline-delimited JSON
        #[clap(long)]
        ndjson: bool,
    },
    /// Decode a resource and write it back in canonical field order
    Fmt {
        /// Input file, or `-` for stdin
        file: PathBuf,

        /// Indent with two spaces
        #[clap(long)]
        pretty: bool,

        /// Write to a file instead of stdout
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
    /// List resource types, or show the fields of one type
    Types {
        /// Resource or datatype name
        name: Option<String>,

        /// List datatypes instead of resource types
        #[clap(long)]
        datatypes: bool,
    },
}

impl CodecArgs {
    fn resolve(&self) -> Result<CodecOptions> {
        let mut options = match &self.options {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("Invalid options in {}", path.display()))?
            }
            None => CodecOptions::default(),
        };
        if self.lenient {
            options = options
                .with_strict_unknown_fields(false)
                .with_strict_enumerations(false)
                .with_strict_resource_types(false);
        }
        if let Some(depth) = self.max_depth {
            options = options.with_max_recursion_depth(depth);
        }
        if self.lossy_decimals {
            options = options.with_preserve_decimal_precision(false);
        }
        Ok(options)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether every input decoded.
fn run(cli: Cli) -> Result<bool> {
    let options = cli.codec.resolve()?;
    tracing::debug!(?options, "codec options");
    let codec = JsonCodec::r4(options);

    match cli.command {
        Command::Check { files, ndjson } => {
            let mut ok = true;
            for file in &files {
                let input = read_input(file)?;
                ok &= if ndjson {
                    check_ndjson(&codec, file, &input)
                } else {
                    check_one(&codec, file, &input)
                };
            }
            Ok(ok)
        }
        Command::Fmt {
            file,
            pretty,
            output,
        } => {
            let input = read_input(&file)?;
            let decoded = codec
                .decode(&input)
                .with_context(|| format!("Failed to decode {}", file.display()))?;
            report_warnings(&file.display().to_string(), &decoded);
            let mut text = if pretty {
                codec.encode_pretty(&decoded.value)?.into_bytes()
            } else {
                codec.encode(&decoded.value)?
            };
            text.push(b'\n');
            match output {
                Some(path) => fs::write(&path, text)
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => io::stdout().lock().write_all(&text)?,
            }
            Ok(true)
        }
        Command::Types { name, datatypes } => {
            match name {
                Some(name) => print_shape(&name)?,
                None if datatypes => r4().datatype_names().iter().for_each(|n| println!("{n}")),
                None => r4().resource_types().iter().for_each(|n| println!("{n}")),
            }
            Ok(true)
        }
    }
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn check_one(codec: &JsonCodec<'_>, file: &Path, input: &[u8]) -> bool {
    let label = file.display().to_string();
    match codec.decode(input) {
        Ok(decoded) => {
            report_warnings(&label, &decoded);
            println!(
                "{label}: ok ({}{})",
                decoded.value.resource_type(),
                id_suffix(&decoded.value)
            );
            true
        }
        Err(err) => {
            println!("{label}: {} {err}", err.kind());
            false
        }
    }
}

fn check_ndjson(codec: &JsonCodec<'_>, file: &Path, input: &[u8]) -> bool {
    let mut ok = true;
    let (mut passed, mut failed) = (0usize, 0usize);
    for (index, result) in codec.decode_ndjson(input).enumerate() {
        let label = format!("{}[{index}]", file.display());
        match result {
            Ok(decoded) => {
                report_warnings(&label, &decoded);
                passed += 1;
            }
            Err(err) => {
                println!("{label}: {} {err}", err.kind());
                failed += 1;
                ok = false;
            }
        }
    }
    println!("{}: {passed} ok, {failed} failed", file.display());
    ok
}

fn report_warnings(label: &str, decoded: &Decoded<Resource>) {
    for warning in &decoded.warnings {
        println!(
            "{label}: warning {} at {}: {}",
            warning.kind, warning.path, warning.detail
        );
    }
}

fn id_suffix(resource: &Resource) -> String {
    resource.id().map(|id| format!("/{id}")).unwrap_or_default()
}

fn print_shape(name: &str) -> Result<()> {
    let registry = r4();
    let Some(shape) = registry.resource(name).or_else(|| registry.datatype(name)) else {
        bail!("Unknown resource type or datatype: {name}");
    };
    print_fields(shape, 0, &mut Vec::new());
    Ok(())
}

/// Prints a field tree. Recursive backbones are printed once.
fn print_fields(
    shape: &'static StructureShape,
    indent: usize,
    seen: &mut Vec<*const StructureShape>,
) {
    seen.push(shape);
    for def in shape.all_fields() {
        println!(
            "{:indent$}{} {} {}",
            "",
            def.display_name(),
            def.cardinality,
            type_label(def),
            indent = indent * 2
        );
        if let FieldKind::Backbone(child) = def.kind {
            if !seen.contains(&(child as *const StructureShape)) {
                print_fields(child, indent + 1, seen);
            }
        }
    }
    seen.pop();
}

fn type_label(def: &FieldDef) -> String {
    let mut label = match def.kind {
        FieldKind::Primitive(ty) => ty.code().to_string(),
        FieldKind::Complex(name) => name.to_string(),
        FieldKind::Backbone(shape) => format!("<{}>", shape.name),
        FieldKind::Resource => "Resource".to_string(),
        FieldKind::Choice(types) => types.join("|"),
    };
    if let Some(codes) = def.binding {
        label.push_str(&format!(" [{}]", codes.join(", ")));
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinnabar_models::catalog::OBSERVATION;

    #[test]
    fn flags_map_onto_options() {
        let cli = Cli::try_parse_from([
            "cinnabar",
            "check",
            "--lenient",
            "--max-depth",
            "8",
            "--lossy-decimals",
            "a.json",
        ])
        .unwrap();
        let options = cli.codec.resolve().unwrap();
        assert!(!options.strict_unknown_fields);
        assert!(!options.strict_enumerations);
        assert!(!options.strict_resource_types);
        assert_eq!(options.max_recursion_depth, 8);
        assert!(!options.preserve_decimal_precision);
    }

    #[test]
    fn defaults_are_strict() {
        let cli = Cli::try_parse_from(["cinnabar", "types"]).unwrap();
        assert_eq!(cli.codec.resolve().unwrap(), CodecOptions::default());
    }

    #[test]
    fn check_requires_a_file() {
        assert!(Cli::try_parse_from(["cinnabar", "check"]).is_err());
    }

    #[test]
    fn labels_show_types_and_bindings() {
        let status = OBSERVATION.field("status").unwrap();
        assert!(type_label(status).starts_with("code [registered, preliminary, final"));
        let value = OBSERVATION.field("value").unwrap();
        assert!(type_label(value).starts_with("Quantity|CodeableConcept|string"));
        assert!(print_shape("Widget").is_err());
    }
}
