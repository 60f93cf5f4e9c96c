use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "encore",
    version,
    about = "Organizer tooling for the Encore live-judging service"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write a sample event config and create the database
    Init(InitArgs),
    /// Load judges and performers from an event config
    Seed(SeedArgs),
    /// Inspect or toggle the event phase
    Event(EventArgs),
    /// Inspect or advance the current performer
    Performer(PerformerArgs),
    /// Show the live raw view or the final weighted leaderboard
    Scores(ScoresArgs),
    /// Check whether a judge is unlocked for the current performer
    CanVote(CanVoteArgs),
    Version,
}

#[derive(clap::Args, Debug, Clone)]
pub struct InitArgs {
    #[arg(long, default_value = "event.yaml")]
    pub config: PathBuf,

    #[arg(long, default_value = "encore.db")]
    pub db: PathBuf,
}

#[derive(clap::Args, Debug, Clone)]
pub struct SeedArgs {
    #[arg(long, default_value = "event.yaml")]
    pub config: PathBuf,

    #[arg(long, default_value = "encore.db")]
    pub db: PathBuf,
}

#[derive(Parser, Clone)]
pub struct EventArgs {
    #[command(subcommand)]
    pub cmd: EventSub,
}

#[derive(Subcommand, Clone)]
pub enum EventSub {
    /// Print the current phase
    Status(DbArgs),
    /// Flip the phase; starting the event clears all stored scores
    Toggle(DbArgs),
}

#[derive(Parser, Clone)]
pub struct PerformerArgs {
    #[command(subcommand)]
    pub cmd: PerformerSub,
}

#[derive(Subcommand, Clone)]
pub enum PerformerSub {
    /// List the roster
    List(DbArgs),
    /// Point the event at a performer
    Set(SetPerformerArgs),
    /// Print the performer currently being judged
    Current(DbArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct SetPerformerArgs {
    #[arg(long)]
    pub id: i64,

    #[arg(long, default_value = "encore.db")]
    pub db: PathBuf,
}

#[derive(Parser, Clone)]
pub struct ScoresArgs {
    #[command(subcommand)]
    pub cmd: ScoresSub,
}

#[derive(Subcommand, Clone)]
pub enum ScoresSub {
    /// Flat unweighted per-(judge, performer) rows
    Current(ScoresViewArgs),
    /// Weighted leaderboard, best first
    Final(ScoresViewArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct ScoresViewArgs {
    #[arg(long, default_value = "encore.db")]
    pub db: PathBuf,

    /// Output format: text | json
    #[arg(long, default_value = "text")]
    pub format: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct CanVoteArgs {
    #[arg(long)]
    pub judge_id: i64,

    #[arg(long, default_value = "encore.db")]
    pub db: PathBuf,
}

#[derive(clap::Args, Debug, Clone)]
pub struct DbArgs {
    #[arg(long, default_value = "encore.db")]
    pub db: PathBuf,
}
