use anyhow::{Context, Result, bail};
use markdown_folio_config::Config;
use markdown_folio_engine::{
    Frontmatter, Rendered, RenderOptions, TocEntry, render_markdown_with, render_toc_html,
};
use serde::Serialize;
use std::{
    env, fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process,
};

/// File extensions picked up when a directory is given as input.
const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

const USAGE: &str = "\
Usage: markdown-folio [OPTIONS] <FILE|DIR|GLOB>...

Options:
  -o, --output-dir DIR  Write <stem>.html (or .json) files into DIR
  -c, --config PATH     Read settings from PATH instead of the default location
      --json            Emit frontmatter, toc and html as JSON
      --toc             Prepend the table of contents to the HTML
  -h, --help            Show this help";

#[derive(Debug, Default, PartialEq)]
struct Args {
    inputs: Vec<String>,
    output_dir: Option<PathBuf>,
    config_path: Option<PathBuf>,
    json: bool,
    toc: bool,
}

#[derive(Serialize)]
struct JsonPost<'a> {
    frontmatter: &'a Frontmatter,
    toc: &'a [TocEntry],
    html: &'a str,
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&args) {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{USAGE}");
            return;
        }
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

/// Parses command-line arguments. `Ok(None)` means help was requested.
fn parse_args(raw: &[String]) -> Result<Option<Args>> {
    let mut args = Args::default();
    let mut iter = raw.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--json" => args.json = true,
            "--toc" => args.toc = true,
            "-o" | "--output-dir" => {
                let dir = iter.next().with_context(|| format!("{arg} needs a directory"))?;
                args.output_dir = Some(PathBuf::from(dir));
            }
            "-c" | "--config" => {
                let path = iter.next().with_context(|| format!("{arg} needs a path"))?;
                args.config_path = Some(PathBuf::from(path));
            }
            flag if flag.starts_with('-') && flag.len() > 1 => bail!("unknown option: {flag}"),
            input => args.inputs.push(input.to_string()),
        }
    }

    if args.inputs.is_empty() {
        bail!("no input files given");
    }
    Ok(Some(args))
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config_path {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("config file not found: {}", path.display()))?,
        None => Config::load()?.unwrap_or_default(),
    };

    let files = expand_inputs(&args.inputs)?;
    if files.is_empty() {
        bail!("no Markdown files matched");
    }

    let output_dir = args.output_dir.clone().or(config.output_dir);
    let Some(output_dir) = output_dir else {
        if files.len() > 1 {
            bail!("{} files matched; use --output-dir to convert more than one", files.len());
        }
        let out = convert_file(&files[0], &config.render, args)?;
        io::stdout()
            .write_all(out.as_bytes())
            .context("failed to write to stdout")?;
        return Ok(());
    };

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;
    let extension = if args.json { "json" } else { "html" };
    for file in &files {
        let out = convert_file(file, &config.render, args)?;
        let target = output_path(&output_dir, file, extension);
        fs::write(&target, out)
            .with_context(|| format!("failed to write {}", target.display()))?;
        log::info!("{} -> {}", file.display(), target.display());
    }
    Ok(())
}

/// Expands files, directories (non-recursive, Markdown files only) and glob
/// patterns into a sorted list of paths.
fn expand_inputs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            files.extend(
                entries
                    .flatten()
                    .map(|entry| entry.path())
                    .filter(|p| p.is_file() && is_markdown(p)),
            );
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {pattern}"))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            log::warn!("no files matched: {pattern}");
        }
        files.extend(matches);
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| MARKDOWN_EXTENSIONS.contains(&ext))
}

/// `posts/hello.md` -> `<dir>/hello.<extension>`
fn output_path(dir: &Path, source: &Path, extension: &str) -> PathBuf {
    let mut name = source
        .file_stem()
        .unwrap_or(source.as_os_str())
        .to_os_string();
    name.push(".");
    name.push(extension);
    dir.join(name)
}

fn convert_file(path: &Path, options: &RenderOptions, args: &Args) -> Result<String> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let rendered = render_markdown_with(&source, options);
    format_output(&rendered, options, args)
}

fn format_output(rendered: &Rendered, options: &RenderOptions, args: &Args) -> Result<String> {
    let html = if args.toc {
        let toc = render_toc_html(&rendered.toc, options.toc_max_level);
        if toc.is_empty() {
            rendered.html.clone()
        } else {
            format!("{toc}\n{}", rendered.html)
        }
    } else {
        rendered.html.clone()
    };

    if args.json {
        let post = JsonPost {
            frontmatter: &rendered.frontmatter,
            toc: &rendered.toc,
            html: &html,
        };
        return serde_json::to_string_pretty(&post).context("failed to serialize post");
    }
    Ok(html)
}
