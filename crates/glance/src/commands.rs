use std::time::Duration;

use clap::ArgMatches;
use tokio::sync::watch;
use tracing::{error, info};
use uuid::Uuid;

use glance_core::catalog::{self, FilterRule};
use glance_core::events;
use glance_core::focus::FocusCoordinator;
use glance_core::hotkey::{self, Resolution};
use glance_core::observer::{SourceEvent, SourceObserver, WatchConfig, run_watch_loop};
use glance_core::platform::XcapSourceQuery;
use glance_config::load_settings;

use crate::table;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("sources", sub_matches)) => handle_sources(sub_matches),
        Some(("focused", sub_matches)) => handle_focused(sub_matches),
        Some(("bindings", sub_matches)) => handle_bindings(sub_matches),
        Some(("watch", sub_matches)) => handle_watch(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

fn handle_sources(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let ignore_filter = matches.get_flag("all");

    let settings = load_settings();
    if let Some(warning) = &settings.load_error {
        eprintln!("Warning: {}", warning);
    }

    let rule = if ignore_filter {
        FilterRule::default()
    } else {
        settings.filter
    };

    info!(
        event = "cli.sources_started",
        json_output = json_output,
        rule = %rule.name
    );

    match catalog::list_filtered_sources(&XcapSourceQuery, &rule) {
        Ok(sources) => {
            let groups = catalog::grouped(&sources);

            if json_output {
                println!("{}", serde_json::to_string_pretty(&groups)?);
            } else if groups.is_empty() {
                println!("No capturable windows found.");
            } else {
                table::print_sources_table(&groups);
            }

            info!(event = "cli.sources_completed", count = sources.len());
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to list sources: {}", e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_focused(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    let (coordinator, _rx) = FocusCoordinator::new("glance");
    let state = coordinator.refresh(&XcapSourceQuery);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        match (&state.focused_app, state.focused_process_id) {
            (Some(app), Some(pid)) => {
                let marker = if state.is_own_app_focused { " (this app)" } else { "" };
                println!("Frontmost: {} (pid {}){}", app, pid, marker);
            }
            _ => println!("No frontmost application detected."),
        }
    }

    info!(event = "cli.focused_completed", pid = ?state.focused_process_id);
    Ok(())
}

fn handle_bindings(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("list", sub_matches)) => handle_bindings_list(sub_matches),
        Some(("check", _)) => handle_bindings_check(),
        Some(("resolve", sub_matches)) => handle_bindings_resolve(sub_matches),
        _ => {
            error!(event = "cli.bindings_subcommand_unknown");
            Err("Unknown bindings subcommand".into())
        }
    }
}

fn handle_bindings_list(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings();

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&settings.bindings)?);
    } else if settings.bindings.is_empty() {
        println!("No bindings stored.");
    } else {
        table::print_bindings_table(&settings.bindings);
    }
    Ok(())
}

fn handle_bindings_check() -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings();
    let mut problems = 0usize;

    for (i, binding) in settings.bindings.iter().enumerate() {
        if let Err(e) = hotkey::validate(binding) {
            println!("invalid: {}", e);
            problems += 1;
            continue;
        }
        if hotkey::conflicts(&settings.bindings[..i], binding) {
            println!(
                "conflict: {} ('{}') reuses an earlier chord",
                binding.chord_label(),
                binding.target_title
            );
            problems += 1;
        }
    }

    if problems == 0 {
        println!("{} binding(s) ok.", settings.bindings.len());
        Ok(())
    } else {
        Err(format!("{} binding problem(s) found", problems).into())
    }
}

fn handle_bindings_resolve(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let title = matches.get_one::<String>("title").expect("required arg");
    let settings = load_settings();

    let Some(binding) = settings.bindings.iter().find(|b| &b.target_title == title) else {
        return Err(format!("No stored binding targets '{}'", title).into());
    };

    let sources = match catalog::list_sources(&XcapSourceQuery) {
        Ok(sources) => sources,
        Err(e) => {
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    match hotkey::resolve(binding, &sources) {
        Resolution::Resolved(window) => {
            println!(
                "{} -> '{}' in {} (pid {}, window {})",
                binding.chord_label(),
                window.display_title(),
                window.app_name,
                window.process_id,
                window.window_id
            );
        }
        Resolution::Ambiguous(count) => {
            // Deliberately not picking one: see the resolver contract.
            println!(
                "Warning: {} windows share the title '{}' - not resolving.",
                count, title
            );
        }
        Resolution::NotFound => {
            println!(
                "No window titled '{}' - the binding is stale; activation would be a no-op.",
                title
            );
        }
    }
    Ok(())
}

fn handle_watch(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let interval_ms = *matches.get_one::<u64>("interval-ms").expect("has default");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(watch_events(Duration::from_millis(interval_ms)))
}

/// Composition root for the observation stack: one observer hub, one
/// focus coordinator, one polling watch loop, plus our own printer
/// registration. Everything shuts down on Ctrl-C.
async fn watch_events(interval: Duration) -> Result<(), Box<dyn std::error::Error>> {
    let observer = SourceObserver::new();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let (coordinator, mut focus_rx) = FocusCoordinator::new("glance");
    let focus_id = coordinator.observer_id();
    let focus_task = tokio::spawn(coordinator.run(observer.clone(), XcapSourceQuery));

    let printer_id = Uuid::new_v4();
    let mut subscription = observer.register(printer_id);

    let watch_task = tokio::spawn(run_watch_loop(
        XcapSourceQuery,
        observer.clone(),
        WatchConfig { interval },
        shutdown_rx,
    ));

    println!("Watching focus and title changes (Ctrl-C to stop)...");

    // Mark the initial refresh as seen so only real edges print.
    let _ = focus_rx.borrow_and_update();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = focus_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = focus_rx.borrow_and_update().clone();
                match (&state.focused_app, state.focused_process_id) {
                    (Some(app), Some(pid)) => {
                        let marker = if state.is_own_app_focused { " (this app)" } else { "" };
                        println!("focus -> {} (pid {}){}", app, pid, marker);
                    }
                    _ => println!("focus -> none"),
                }
            }
            event = subscription.events.recv() => {
                match event {
                    Some(SourceEvent::TitlesChanged) => println!("titles changed"),
                    Some(SourceEvent::FocusChanged) => {} // printed via focus state
                    None => break,
                }
            }
        }
    }

    shutdown_tx.send(true).ok();
    observer.unregister(printer_id);
    observer.unregister(focus_id);

    let _ = watch_task.await;
    let _ = focus_task.await;

    info!(event = "cli.watch_stopped");
    Ok(())
}
