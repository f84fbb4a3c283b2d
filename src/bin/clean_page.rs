//! Reduce an HTML file (or stdin) and print the result as JSON.
//!
//! Usage: clean-page [OPTIONS] <PATH>
//!
//! `RUST_LOG=debug` shows per-pass summaries on stderr.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde_json::json;

use rs_page_cleaner::{extract_recipes, parse_bytes, reduce, AllowedTags, CleanOptions, Result};

/// Reduce a rendered web page to whitelisted HTML or minimal text.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// HTML file to read, or `-` for stdin.
    path: PathBuf,
    /// Allowed tags: a preset (`default`, `recipe-minimal`) or a comma separated list.
    #[clap(long)]
    allowed_tags: Option<String>,
    /// Remove images and media elements.
    #[clap(long, overrides_with = "no_drop_media")]
    drop_media: bool,
    #[clap(long, overrides_with = "drop_media", hide = true)]
    no_drop_media: bool,
    /// Only keep http(s) and relative URLs.
    #[clap(long, overrides_with = "no_strict_urls")]
    strict_urls: bool,
    #[clap(long, overrides_with = "strict_urls", hide = true)]
    no_strict_urls: bool,
    /// Keep table structure instead of flattening it to text.
    #[clap(long, overrides_with = "no_keep_tables")]
    keep_tables: bool,
    #[clap(long, overrides_with = "keep_tables", hide = true)]
    no_keep_tables: bool,
    /// Maximum number of elements the unwrap pass processes.
    #[clap(long)]
    max_depth: Option<usize>,
    /// Remove cookie-consent banners before reducing.
    #[clap(long, overrides_with = "no_apply_consent_ui_heuristics")]
    apply_consent_ui_heuristics: bool,
    #[clap(long, overrides_with = "apply_consent_ui_heuristics", hide = true)]
    no_apply_consent_ui_heuristics: bool,
    /// Output structured plain text instead of HTML.
    #[clap(long, overrides_with = "no_output_minimal_text")]
    output_minimal_text: bool,
    #[clap(long, overrides_with = "output_minimal_text", hide = true)]
    no_output_minimal_text: bool,
    /// Also extract JSON-LD recipes.
    #[clap(long)]
    recipes: bool,
    /// Pretty-print the JSON output.
    #[clap(long)]
    pretty: bool,
}

/// Resolve a `--flag`/`--no-flag` pair against a default.
fn toggle(on: bool, off: bool, default: bool) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        default
    }
}

impl Cli {
    fn options(&self) -> Result<CleanOptions> {
        let defaults = CleanOptions::default();
        let allowed_tags = match &self.allowed_tags {
            Some(spec) => spec.parse::<AllowedTags>()?,
            None => defaults.allowed_tags.clone(),
        };
        Ok(CleanOptions {
            allowed_tags,
            drop_media: toggle(self.drop_media, self.no_drop_media, defaults.drop_media),
            strict_urls: toggle(self.strict_urls, self.no_strict_urls, defaults.strict_urls),
            keep_tables: toggle(self.keep_tables, self.no_keep_tables, defaults.keep_tables),
            max_depth: self.max_depth.unwrap_or(defaults.max_depth),
            apply_consent_ui_heuristics: toggle(
                self.apply_consent_ui_heuristics,
                self.no_apply_consent_ui_heuristics,
                defaults.apply_consent_ui_heuristics,
            ),
            output_minimal_text: toggle(
                self.output_minimal_text,
                self.no_output_minimal_text,
                defaults.output_minimal_text,
            ),
            ..defaults
        })
    }

    fn read_input(&self) -> Result<Vec<u8>> {
        if self.path.as_os_str() == "-" {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        } else {
            Ok(std::fs::read(&self.path)?)
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let options = cli.options()?;
    let bytes = cli.read_input()?;
    let doc = parse_bytes(&bytes);

    // Extraction reads script blocks that the reducer removes.
    let recipes = cli.recipes.then(|| extract_recipes(&doc));
    let result = reduce(&doc, &options);

    let value = match recipes {
        Some(recipes) => json!({ "result": result, "recipes": recipes }),
        None => serde_json::to_value(&result)?,
    };

    let out = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(out)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("clean-page: {e}");
            ExitCode::FAILURE
        }
    }
}
