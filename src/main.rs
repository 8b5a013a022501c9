// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use djdeck::{LibraryService, SessionFile, Track, TracingSink};
use tracing::Level;

fn print_usage() {
    println!("DJDECK - DJ Track Library");
    println!();
    println!("Usage: djdeck <SESSION> [OPTIONS]");
    println!();
    println!("Arguments:");
    println!("  <SESSION>               Session file (.yaml, .yml or .toml)");
    println!();
    println!("Options:");
    println!("  --playlist <NAME>       Load the named playlist (default: session default)");
    println!("  --list                  List the library masters and playlist names");
    println!("  --find <TITLE>          Look up a track in the loaded playlist");
    println!("  -v, -vv                 More log output");
    println!("  -q                      Errors only");
    println!("  --help                  Show this help message");
}

/// Parsed command line
#[derive(Debug, Default)]
struct Options {
    session: Option<PathBuf>,
    playlist: Option<String>,
    find: Option<String>,
    list: bool,
    verbose: u8,
    quiet: bool,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => options.help = true,
            "--list" => options.list = true,
            "-q" | "--quiet" => options.quiet = true,
            "-v" => options.verbose = options.verbose.saturating_add(1),
            "-vv" => options.verbose = options.verbose.saturating_add(2),
            "--playlist" => {
                let name = iter
                    .next()
                    .ok_or_else(|| anyhow!("--playlist requires a playlist name"))?;
                options.playlist = Some(name.clone());
            }
            "--find" => {
                let title = iter
                    .next()
                    .ok_or_else(|| anyhow!("--find requires a track title"))?;
                options.find = Some(title.clone());
            }
            other if other.starts_with('-') => {
                return Err(anyhow!("Unknown option: {}", other));
            }
            path => {
                if options.session.is_some() {
                    return Err(anyhow!("Unexpected argument: {}", path));
                }
                options.session = Some(PathBuf::from(path));
            }
        }
    }

    Ok(options)
}

fn init_logging(options: &Options) {
    let level = if options.quiet {
        Level::ERROR
    } else {
        match options.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn list_session(session: &SessionFile, service: &mut LibraryService) {
    service.build_library(&session.library);

    println!("Session: {}", session.session.name);
    println!();
    println!("Library ({} tracks):", service.library().len());
    for (i, track) in service.library().iter().enumerate() {
        println!(
            "{:>3}. {} [{} {}]",
            i + 1,
            track.title(),
            track.format(),
            track.details()
        );
    }
    println!();
    println!("Playlists:");
    for (name, positions) in &session.playlists {
        println!("  {} -> {:?}", name, positions);
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(&args)?;

    if options.help {
        print_usage();
        return Ok(());
    }

    let Some(path) = options.session.as_ref() else {
        println!("DJDECK - DJ Track Library");
        println!("Run with --help for usage information");
        return Ok(());
    };

    init_logging(&options);

    let session = SessionFile::load(path)?;
    let mut service = LibraryService::new(Box::new(TracingSink));

    if options.list {
        list_session(&session, &mut service);
        return Ok(());
    }

    service
        .load_session(&session, options.playlist.as_deref())
        .with_context(|| format!("Cannot load playlist from {:?}", path))?;

    print!("{}", service.render());

    if let Some(title) = options.find.as_deref() {
        match service.find_track(title) {
            Some(track) => println!(
                "Found '{}' by {} ({} {})",
                track.title(),
                track.artists().join(", "),
                track.format(),
                track.details()
            ),
            None => println!("Track '{}' is not in the playlist", title),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_full_command_line() {
        let options = parse_args(&args(&[
            "set.yaml",
            "--playlist",
            "peak",
            "--find",
            "Song A",
            "-vv",
        ]))
        .unwrap();

        assert_eq!(options.session, Some(PathBuf::from("set.yaml")));
        assert_eq!(options.playlist.as_deref(), Some("peak"));
        assert_eq!(options.find.as_deref(), Some("Song A"));
        assert_eq!(options.verbose, 2);
        assert!(!options.list);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&["set.yaml", "--playlist"])).is_err());
        assert!(parse_args(&args(&["set.yaml", "--bogus"])).is_err());
        assert!(parse_args(&args(&["a.yaml", "b.yaml"])).is_err());
    }

    #[test]
    fn test_parse_flags() {
        let options = parse_args(&args(&["--help"])).unwrap();
        assert!(options.help);
        assert!(options.session.is_none());

        let options = parse_args(&args(&["set.toml", "--list", "-q"])).unwrap();
        assert!(options.list);
        assert!(options.quiet);
    }
}
