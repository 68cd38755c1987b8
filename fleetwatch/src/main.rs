//! Entry point for the fleetwatch TUI. Parses args, resolves the API
//! endpoint, and runs the App.

use anyhow::{bail, Result};
use fleetwatch::api::ApiClient;
use fleetwatch::app::App;
use fleetwatch::profiles::{
    config_dir, load_profiles, save_profiles, EndpointRequest, ProfileEntry, ResolveEndpoint,
    API_URL_ENV, DEFAULT_API_URL,
};
use std::env;
use std::io::{self, Write};

struct ParsedArgs {
    url: Option<String>,
    profile: Option<String>,
    save: bool,
    dry_run: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<ParsedArgs, String> {
    let mut it = args.into_iter();
    let prog = it.next().unwrap_or_else(|| "fleetwatch".into());
    let mut url: Option<String> = None;
    let mut profile: Option<String> = None;
    let mut save = false; // --save
    let mut dry_run = false; // --dry-run

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                return Err(format!(
                    "Usage: {prog} [--profile NAME|-P NAME] [--save] [--dry-run] [API_BASE_URL]\n\
                     Defaults to ${API_URL_ENV}, falling back to {DEFAULT_API_URL}"
                ));
            }
            "--profile" | "-P" => {
                profile = it.next();
            }
            "--save" => {
                save = true;
            }
            "--dry-run" => {
                dry_run = true;
            }
            _ if arg.starts_with("--profile=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    if !v.is_empty() {
                        profile = Some(v.to_string());
                    }
                }
            }
            _ => {
                if url.is_none() {
                    url = Some(arg);
                } else {
                    return Err(format!(
                        "Unexpected argument. Usage: {prog} [--profile NAME|-P NAME] [--save] [--dry-run] [API_BASE_URL]"
                    ));
                }
            }
        }
    }
    Ok(ParsedArgs {
        url,
        profile,
        save,
        dry_run,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let parsed = match parse_args(env::args()) {
        Ok(v) => v,
        Err(msg) => {
            eprintln!("{msg}");
            return Ok(());
        }
    };

    init_tracing();

    let profiles_file = load_profiles();
    let req = EndpointRequest {
        profile_name: parsed.profile.clone(),
        url: parsed.url.clone(),
    };
    let resolved = req.resolve(&profiles_file);

    // Determine the final endpoint (and maybe mutated profiles to persist)
    let mut profiles_mut = profiles_file.clone();
    let url: String = match resolved {
        ResolveEndpoint::Direct(u) => {
            // Possibly save if profile specified and --save or new entry
            if let Some(name) = parsed.profile.as_ref() {
                let existing = profiles_mut.profiles.get(name);
                match existing {
                    None => {
                        // New profile: auto-save immediately
                        profiles_mut
                            .profiles
                            .insert(name.clone(), ProfileEntry { url: u.clone() });
                        let _ = save_profiles(&profiles_mut);
                    }
                    Some(entry) => {
                        if entry.url != u {
                            let overwrite = if parsed.save {
                                true
                            } else {
                                prompt_yes_no(&format!(
                                    "Overwrite existing profile '{name}'? [y/N]: "
                                ))
                            };
                            if overwrite {
                                profiles_mut
                                    .profiles
                                    .insert(name.clone(), ProfileEntry { url: u.clone() });
                                let _ = save_profiles(&profiles_mut);
                            }
                        }
                    }
                }
            }
            u
        }
        ResolveEndpoint::Loaded(u) | ResolveEndpoint::Fallback(u) => u,
        ResolveEndpoint::PromptSelect(names) => {
            eprintln!("Select endpoint profile:");
            for (i, n) in names.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, n);
            }
            eprint!("Enter number (or blank to abort): ");
            let _ = io::stderr().flush();
            let mut line = String::new();
            if io::stdin().read_line(&mut line).is_ok() {
                if let Ok(idx) = line.trim().parse::<usize>() {
                    if idx >= 1 && idx <= names.len() {
                        let name = &names[idx - 1];
                        if let Some(entry) = profiles_mut.profiles.get(name) {
                            entry.url.clone()
                        } else {
                            return Ok(());
                        }
                    } else {
                        return Ok(());
                    }
                } else {
                    return Ok(());
                }
            } else {
                return Ok(());
            }
        }
        ResolveEndpoint::PromptCreate(name) => {
            eprintln!("Profile '{name}' does not exist yet.");
            let url = prompt_string("Enter API base URL (e.g. http://localhost:8000/api/v1): ")?;
            if url.trim().is_empty() {
                return Ok(());
            }
            profiles_mut.profiles.insert(
                name.clone(),
                ProfileEntry {
                    url: url.trim().to_string(),
                },
            );
            let _ = save_profiles(&profiles_mut);
            url.trim().to_string()
        }
    };

    if let Err(e) = url::Url::parse(&url) {
        bail!("invalid API base URL '{url}': {e}");
    }

    if parsed.dry_run {
        println!("fleetwatch would poll {url}");
        return Ok(());
    }

    let api = ApiClient::new(&url)?;
    let mut app = App::new(api);
    app.run().await
}

// Log to a file under the config dir so the TUI output stays clean.
// FLEETWATCH_LOG takes an EnvFilter directive string.
fn init_tracing() {
    let dir = config_dir();
    let _ = std::fs::create_dir_all(&dir);
    if let Ok(file) = std::fs::File::create(dir.join("fleetwatch.log")) {
        let filter = tracing_subscriber::EnvFilter::try_from_env("FLEETWATCH_LOG")
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .try_init();
    }
}

fn prompt_yes_no(prompt: &str) -> bool {
    eprint!("{prompt}");
    let _ = io::stderr().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_ok() {
        matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

fn prompt_string(prompt: &str) -> io::Result<String> {
    eprint!("{prompt}");
    let _ = io::stderr().flush();
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}
