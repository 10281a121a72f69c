use std::io::Write as _;
use std::time::Duration;

use clap::{error::ErrorKind, Parser};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::browse::{self, GalleryCommand, ProfileCommand, Session};
use crate::cli::args::CliArgs;
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::directory::DEFAULT_API_URL;
use crate::runner::{Options, Runner};
use crate::utils;
use crate::view;

fn print_banner() {
    const BANNER: &str = r#"
       __        ______    __
  ___ / /_____ _/ __/ _/__/ /__ __ __
 (_-</ __/ _ `/ /_/ _/ _  / -_) \ \ /
/___/\__/\_,_/_/ /_/ \_,_/\__/ /_\_\

       v0.4.1 - terminal employee directory
    "#;
    print!("{}", BANNER);
    println!();
}

fn format_kv_line(label: &str, value: &str) {
    println!(":: {:<10}: {}", label, value);
}

fn format_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[derive(Clone, Debug)]
struct RunConfig {
    api_url: String,
    results: u32,
    nationalities: Vec<String>,
    seed: Option<String>,
    pages: u32,
    concurrency: u32,
    rate: u32,
    timeout: usize,
    workers: usize,
    proxy: Option<String>,
    header: Option<String>,
    search: Option<String>,
    regex: bool,
    output: Option<String>,
    output_format: Option<String>,
    no_color: bool,
    no_browse: bool,
    open: Option<usize>,
    verbose: u8,
}

fn build_run_config(args: CliArgs, cfg: ConfigFile) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let no_color = if args.color {
        false
    } else {
        args.no_color || cfg.no_color.unwrap_or(false)
    };

    let api_url = args
        .api
        .or(cfg.api)
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    if reqwest::Url::parse(&api_url).is_err() {
        return Err(format!("invalid API URL: {api_url}"));
    }

    let results = args.results.or(cfg.results).unwrap_or(12);
    let nat_raw = args.nat.or(cfg.nat);
    let nationalities = match nat_raw {
        Some(raw) => {
            utils::parse_nat_csv(&raw).map_err(|e| format!("invalid --nat '{raw}': {e}"))?
        }
        None => ["au", "ca", "gb", "ie", "nz", "us"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    };
    let seed = args.seed.or(cfg.seed).filter(|s| !s.trim().is_empty());
    let pages = args.pages.or(cfg.pages).unwrap_or(1);

    let concurrency = args.concurrency.or(cfg.concurrency).unwrap_or(4);
    let rate = args.rate.or(cfg.rate).unwrap_or(5);
    let timeout = args.timeout.or(cfg.timeout).unwrap_or(10);
    if timeout == 0 {
        return Err("invalid timeout, expected positive integer".to_string());
    }
    let workers = args.workers.or(cfg.workers).unwrap_or(4);

    let proxy = args.proxy.or(cfg.proxy).filter(|p| !p.trim().is_empty());
    let header = args.header.or(cfg.header).filter(|h| !h.trim().is_empty());

    let search = args.search.filter(|q| !q.trim().is_empty());

    let output = args
        .output
        .or(cfg.output)
        .map(|p| config::expand_tilde_string(&p));
    let output_format = args.output_format.or(cfg.output_format);

    let no_browse = args.no_browse || cfg.no_browse.unwrap_or(false);

    Ok(RunConfig {
        api_url,
        results,
        nationalities,
        seed,
        pages,
        concurrency,
        rate,
        timeout,
        workers,
        proxy,
        header,
        search,
        regex: args.regex,
        output,
        output_format,
        no_color,
        no_browse,
        open: args.open,
        verbose: args.verbose,
    })
}

async fn run_async(run: RunConfig) -> Result<(), String> {
    if run.no_color {
        colored::control::set_override(false);
    }
    print_banner();

    format_kv_line(
        "Directory",
        &format!(
            "results={} nat={} pages={} seed={}",
            run.results,
            utils::join_nat_csv(&run.nationalities),
            run.pages,
            run.seed.as_deref().unwrap_or("none"),
        ),
    );
    format_kv_line(
        "HTTP",
        &format!(
            "timeout={}s rate={} conc={} workers={} proxy={}",
            run.timeout,
            run.rate,
            run.concurrency,
            run.workers,
            if run.proxy.is_some() { "on" } else { "off" },
        ),
    );
    format_kv_line(
        "Search",
        &match run.search.as_deref() {
            Some(q) if run.regex => format!("regex:{q}"),
            Some(q) => q.to_string(),
            None => "none".to_string(),
        },
    );
    if run.verbose > 0 {
        format_kv_line("Api", &run.api_url);
        format_kv_line(
            "Browse",
            &format!(
                "interactive={} open={}",
                format_bool(!run.no_browse),
                run.open
                    .map(|i| i.to_string())
                    .unwrap_or_else(|| "none".to_string())
            ),
        );
    }
    println!();

    let runner = Runner::new(Options {
        api_url: run.api_url.clone(),
        results: run.results,
        nationalities: run.nationalities.clone(),
        seed: run.seed.clone(),
        pages: run.pages,
        concurrency: run.concurrency,
        rate: run.rate,
        timeout_seconds: run.timeout,
        proxy: run.proxy.clone(),
        header: run.header.clone(),
    })
    .map_err(|e| e.to_string())?;

    let pb = ProgressBar::new(run.pages as u64);
    pb.set_draw_target(ProgressDrawTarget::stderr());
    pb.enable_steady_tick(Duration::from_millis(200));
    pb.set_style(
        ProgressStyle::with_template(
            ":: Fetching: [{pos}/{len}] :: Duration: [{elapsed_precise}] :: {msg}",
        )
        .map_err(|e| format!("failed to build progress bar style: {e}"))?
        .progress_chars(r#"#>-"#),
    );

    let result = runner
        .fetch_with_progress(Some(pb.clone()))
        .await
        .map_err(|e| e.to_string())?;
    pb.finish_and_clear();

    let mut session = Session::new(result.employees);
    if let Some(query) = run.search.as_deref() {
        if run.regex {
            session.apply_regex_filter(query)?;
        } else {
            session.apply_filter(query);
        }
    }

    print!("{}", view::render_gallery(session.active(), session.query()));
    println!();

    if let Some(outfile_path) = run.output.as_ref() {
        let output_format = run
            .output_format
            .as_deref()
            .and_then(crate::output::OutputFormat::parse)
            .or_else(|| crate::output::infer_format_from_path(outfile_path))
            .unwrap_or(crate::output::OutputFormat::Text);

        let records = crate::output::build_records(session.active());
        let rendered = match output_format {
            crate::output::OutputFormat::Text => crate::output::render_text(&records),
            crate::output::OutputFormat::Json => crate::output::render_json(&records),
            crate::output::OutputFormat::Csv => crate::output::render_csv(&records),
            crate::output::OutputFormat::Html => crate::output::render_html(&records),
        };

        let mut outfile = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(outfile_path)
            .await
            .map_err(|e| format!("failed to open output file: {e}"))?;
        outfile
            .write_all(&rendered)
            .await
            .map_err(|_| "failed to write output file".to_string())?;
        format_kv_line("Export", outfile_path);
    }

    format_kv_line(
        "Fetched",
        &format!(
            "{} employees in {}ms seed={}",
            session.all().len(),
            result.elapsed.as_millis(),
            result.seed.as_deref().unwrap_or("none"),
        ),
    );

    if !run.no_browse {
        println!();
        browse_loop(session, run.open, run.regex).await?;
    }

    Ok(())
}

fn print_help_lines() {
    println!("{}", "commands:".bold());
    println!("  <n>          open the profile for card n");
    println!("  s <query>    filter cards by name (also: /query)");
    println!("  r            reset the filter");
    println!("  l            list the cards again");
    println!("  q            quit");
}

fn prompt(label: &str) {
    print!("{} ", format!("{label}>").bold().cyan());
    let _ = std::io::stdout().flush();
}

/// Reads commands from stdin: a gallery prompt over the active cards, and a
/// profile prompt with prev/next paging while one card is open.
async fn browse_loop(
    mut session: Session,
    open: Option<usize>,
    regex: bool,
) -> Result<(), String> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    let mut pager = open.and_then(|start| session.open(start));
    match pager.as_ref() {
        Some(p) => print!(
            "{}",
            view::render_profile(&session.active()[p.index()], p.index(), p.len())
        ),
        None => print_help_lines(),
    }

    loop {
        prompt(if pager.is_some() { "profile" } else { "staffdex" });
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => return Err(format!("failed to read stdin: {e}")),
        };

        if pager.is_some() {
            match browse::parse_profile_command(&line) {
                ProfileCommand::Back => {
                    pager = None;
                    print!("{}", view::render_gallery(session.active(), session.query()));
                }
                ProfileCommand::Quit => break,
                ProfileCommand::Unknown(cmd) => {
                    println!("unknown command '{cmd}' (n/p/b/q)");
                }
                cmd => {
                    let forward = matches!(cmd, ProfileCommand::Next);
                    if let Some(p) = pager.as_mut() {
                        let moved = if forward { p.next() } else { p.prev() };
                        if !moved && forward {
                            println!("already at the last card");
                        } else if !moved {
                            println!("already at the first card");
                        }
                        print!(
                            "{}",
                            view::render_profile(&session.active()[p.index()], p.index(), p.len())
                        );
                    }
                }
            }
            continue;
        }

        match browse::parse_gallery_command(&line) {
            GalleryCommand::Open(index) => match session.open(index) {
                Some(p) => {
                    print!(
                        "{}",
                        view::render_profile(&session.active()[p.index()], p.index(), p.len())
                    );
                    pager = Some(p);
                }
                None => println!("nothing to open"),
            },
            GalleryCommand::Search(query) => {
                if regex {
                    if let Err(e) = session.apply_regex_filter(&query) {
                        println!("{e}");
                        continue;
                    }
                } else {
                    session.apply_filter(&query);
                }
                print!("{}", view::render_gallery(session.active(), session.query()));
            }
            GalleryCommand::Reset => {
                session.reset();
                print!("{}", view::render_gallery(session.active(), session.query()));
            }
            GalleryCommand::List => {
                print!("{}", view::render_gallery(session.active(), session.query()));
            }
            GalleryCommand::Help => print_help_lines(),
            GalleryCommand::Quit => break,
            GalleryCommand::Unknown(cmd) => {
                println!("unknown command '{cmd}' (h for help)");
            }
        }
    }

    Ok(())
}

pub fn run_cli() -> Result<(), String> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = e.print();
                return Ok(());
            }
            _ => return Err(e.to_string()),
        },
    };

    if args.init_config {
        let path = config::default_config_path()
            .ok_or_else(|| "could not determine home directory".to_string())?;
        config::ensure_default_config_file(&path)?;
        println!(":: wrote {}", path.display());
        return Ok(());
    }

    let user_config_path = args.config.clone().map(|p| config::expand_tilde(&p));
    let cfg = match user_config_path.as_ref() {
        Some(path) => config::load_config(path, false)?,
        None => match config::default_config_path() {
            Some(path) => config::load_config(&path, true)?,
            None => ConfigFile::default(),
        },
    };

    let run = build_run_config(args, cfg)?;

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .worker_threads(run.workers)
        .build()
        .map_err(|e| format!("failed to build runtime: {e}"))?;

    rt.block_on(run_async(run))?;
    Ok(())
}
