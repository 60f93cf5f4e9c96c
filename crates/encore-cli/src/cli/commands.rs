use super::args::*;
use encore_core::storage::Store;
use encore_core::{aggregate, config, event, gate, report};
use std::path::Path;

pub mod exit_codes {
    pub const OK: i32 = 0;
    pub const OPERATION_FAILED: i32 = 1;
    pub const CONFIG_ERROR: i32 = 2;
}

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Init(args) => cmd_init(args),
        Command::Seed(args) => cmd_seed(args),
        Command::Event(args) => match args.cmd {
            EventSub::Status(db) => cmd_event_status(db),
            EventSub::Toggle(db) => cmd_event_toggle(db),
        },
        Command::Performer(args) => match args.cmd {
            PerformerSub::List(db) => cmd_performer_list(db),
            PerformerSub::Set(set) => cmd_performer_set(set),
            PerformerSub::Current(db) => cmd_performer_current(db),
        },
        Command::Scores(args) => match args.cmd {
            ScoresSub::Current(view) => cmd_scores_current(view),
            ScoresSub::Final(view) => cmd_scores_final(view),
        },
        Command::CanVote(args) => cmd_can_vote(args),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(exit_codes::OK)
        }
    }
}

fn open_store(path: &Path) -> anyhow::Result<Store> {
    let store = Store::open(path)?;
    store.init_schema()?;
    Ok(store)
}

fn cmd_init(args: InitArgs) -> anyhow::Result<i32> {
    if args.config.exists() {
        eprintln!("config {} already exists, leaving it alone", args.config.display());
    } else {
        std::fs::write(&args.config, crate::templates::EVENT_YAML)?;
        println!("wrote sample config to {}", args.config.display());
    }
    open_store(&args.db)?;
    println!("database ready at {}", args.db.display());
    Ok(exit_codes::OK)
}

fn cmd_seed(args: SeedArgs) -> anyhow::Result<i32> {
    let cfg = match config::load_event_config(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{e}");
            return Ok(exit_codes::CONFIG_ERROR);
        }
    };
    let store = open_store(&args.db)?;
    store.seed(&cfg)?;
    println!(
        "seeded event '{}': {} judges, {} performers",
        cfg.event,
        cfg.judges.len(),
        cfg.performers.len()
    );
    Ok(exit_codes::OK)
}

fn cmd_event_status(args: DbArgs) -> anyhow::Result<i32> {
    let store = open_store(&args.db)?;
    let ongoing = event::event_phase(&store)?;
    println!("{}", if ongoing { "in progress" } else { "not started" });
    Ok(exit_codes::OK)
}

fn cmd_event_toggle(args: DbArgs) -> anyhow::Result<i32> {
    let store = open_store(&args.db)?;
    let new_status = event::toggle_event_phase(&store)?;
    if new_status {
        println!("event started, score ledger cleared");
    } else {
        println!("event ended, scores retained");
    }
    Ok(exit_codes::OK)
}

fn cmd_performer_list(args: DbArgs) -> anyhow::Result<i32> {
    let store = open_store(&args.db)?;
    for performer in store.performers()? {
        println!("{:>4}  {}", performer.id, performer.name);
    }
    Ok(exit_codes::OK)
}

fn cmd_performer_set(args: SetPerformerArgs) -> anyhow::Result<i32> {
    let store = open_store(&args.db)?;
    match event::set_current_performer(&store, args.id) {
        Ok(()) => {
            println!("current performer set to {}", args.id);
            Ok(exit_codes::OK)
        }
        Err(e) => {
            eprintln!("{e}");
            Ok(exit_codes::OPERATION_FAILED)
        }
    }
}

fn cmd_performer_current(args: DbArgs) -> anyhow::Result<i32> {
    let store = open_store(&args.db)?;
    match event::current_performer(&store)? {
        Some(performer) => println!("{:>4}  {}", performer.id, performer.name),
        None => println!("no current performer set"),
    }
    Ok(exit_codes::OK)
}

fn cmd_scores_current(args: ScoresViewArgs) -> anyhow::Result<i32> {
    let store = open_store(&args.db)?;
    let rows = aggregate::current_scores(&store)?;
    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        report::console::print_current_scores(&rows);
    }
    Ok(exit_codes::OK)
}

fn cmd_scores_final(args: ScoresViewArgs) -> anyhow::Result<i32> {
    let store = open_store(&args.db)?;
    let results = aggregate::compute_final_scores(&store)?;
    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        report::console::print_leaderboard(&results);
    }
    Ok(exit_codes::OK)
}

fn cmd_can_vote(args: CanVoteArgs) -> anyhow::Result<i32> {
    let store = open_store(&args.db)?;
    match gate::can_vote(&store, args.judge_id) {
        Ok(allowed) => {
            println!("{allowed}");
            Ok(exit_codes::OK)
        }
        Err(e) => {
            eprintln!("{e}");
            Ok(exit_codes::OPERATION_FAILED)
        }
    }
}
