//! LifeGame terminal client.
//!
//! Thin presentation layer over `lifegame-engine`: every subcommand loads the
//! player's state, runs one engine operation, persists on success, and
//! renders the result. Rejections (low energy, short gold, bad input) are
//! user-visible messages, never process failures.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::path::PathBuf;

use lifegame_engine::{
    ActivityDef, BadgeStatus, BadgeTier, Category, JsonFileStore, LifeGame, PlayerState,
    SkillTrack, UnitMode, add_activity, add_reward, claim_reward, complete_activity,
    sanitize_player_key,
};

const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Quantity is minutes spent
    Time,
    /// Quantity is repetitions
    Count,
}

impl From<ModeArg> for UnitMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Time => Self::Time,
            ModeArg::Count => Self::Count,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CategoryArg {
    Morning,
    Work,
    Life,
    Night,
}

impl From<CategoryArg> for Category {
    fn from(value: CategoryArg) -> Self {
        match value {
            CategoryArg::Morning => Self::Morning,
            CategoryArg::Work => Self::Work,
            CategoryArg::Life => Self::Life,
            CategoryArg::Night => Self::Night,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "lifegame", version)]
#[command(about = "Gamify your habits: earn XP and gold, level up, claim rewards")]
struct Args {
    /// Player name; sanitized to an alphanumeric save key
    #[arg(long, default_value = "Guest")]
    player: String,

    /// Directory holding per-player save files
    #[arg(long, default_value = "saves")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show level, XP, energy and gold
    Status,
    /// List the activity catalog grouped by daypart
    Activities,
    /// List the reward catalog against current gold
    Rewards,
    /// Complete an activity
    Done {
        /// Activity name, exactly as listed
        activity: String,
        /// Minutes or repetitions, depending on the activity's mode
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=600))]
        qty: u16,
        /// Seed the critical roll for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Add or overwrite an activity definition
    AddActivity {
        name: String,
        /// XP granted per unit
        #[arg(long, default_value_t = 1.0)]
        xp: f32,
        /// Energy change per unit; positive recovers, negative drains
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        energy: f32,
        #[arg(long, value_enum, default_value_t = ModeArg::Count)]
        mode: ModeArg,
        #[arg(long, value_enum, default_value_t = CategoryArg::Life)]
        category: CategoryArg,
    },
    /// Add or overwrite a reward
    AddReward {
        name: String,
        #[arg(long)]
        cost: f32,
    },
    /// Claim a reward, spending gold
    Claim {
        /// Reward name, exactly as listed
        reward: String,
    },
    /// Show badge ranks for the three skill tracks
    Ranks,
    /// Rank every saved player by score
    Leaderboard,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let game = LifeGame::new(JsonFileStore::new(&args.data_dir));
    let key = sanitize_player_key(&args.player);
    log::debug!("player '{}' resolves to save key '{key}'", args.player);

    match args.command {
        Command::Status => {
            let state = load(&game, &args.player)?;
            print_status(&args.player, &state);
        }
        Command::Activities => {
            let state = load(&game, &args.player)?;
            print_activities(&state);
        }
        Command::Rewards => {
            let state = load(&game, &args.player)?;
            print_rewards(&state);
        }
        Command::Done {
            activity,
            qty,
            seed,
        } => {
            let mut state = load(&game, &args.player)?;
            let mut rng = seed.map_or_else(ChaCha20Rng::from_entropy, ChaCha20Rng::seed_from_u64);
            match complete_activity(&mut state, &activity, qty, &mut rng) {
                Ok(outcome) => {
                    persist(&game, &args.player, &state)?;
                    if outcome.critical {
                        println!(
                            "{} XP +{:.0}",
                            "🔥 CRIT!".bright_yellow().bold(),
                            outcome.final_xp
                        );
                    } else {
                        println!("Done. XP +{:.0}", outcome.final_xp);
                    }
                    for _ in 0..outcome.levels_gained {
                        println!("{} LV.{}", "LEVEL UP!".bright_green().bold(), state.level);
                    }
                    for track in outcome.tracks {
                        println!("{} +1", track.short_label().cyan());
                    }
                }
                Err(err) => println!("{} {err}", "REJECTED:".red().bold()),
            }
        }
        Command::AddActivity {
            name,
            xp,
            energy,
            mode,
            category,
        } => {
            let mut state = load(&game, &args.player)?;
            let def = ActivityDef::new(xp, energy, mode.into(), category.into());
            match add_activity(&mut state, &name, def) {
                Ok(()) => {
                    persist(&game, &args.player, &state)?;
                    println!("Added activity '{}'", name.trim());
                }
                Err(err) => println!("{} {err}", "REJECTED:".red().bold()),
            }
        }
        Command::AddReward { name, cost } => {
            let mut state = load(&game, &args.player)?;
            match add_reward(&mut state, &name, cost) {
                Ok(()) => {
                    persist(&game, &args.player, &state)?;
                    println!("Added reward '{}' ({cost:.0} gold)", name.trim());
                }
                Err(err) => println!("{} {err}", "REJECTED:".red().bold()),
            }
        }
        Command::Claim { reward } => {
            let mut state = load(&game, &args.player)?;
            match claim_reward(&mut state, &reward) {
                Ok(cost) => {
                    persist(&game, &args.player, &state)?;
                    println!(
                        "{} {reward} (-{cost:.0} gold, {:.0} left)",
                        "🎉 CLAIMED".bright_magenta().bold(),
                        state.gold
                    );
                }
                Err(err) => println!("{} {err}", "REJECTED:".red().bold()),
            }
        }
        Command::Ranks => {
            let state = load(&game, &args.player)?;
            print_ranks(&state);
        }
        Command::Leaderboard => {
            let board = game.leaderboard().context("scanning saves")?;
            if board.is_empty() {
                println!("No saves yet.");
            }
            for (rank, entry) in board.iter().enumerate() {
                println!(
                    "{:>3}. {:<20} LV.{:<4} {:>8.0}",
                    rank + 1,
                    entry.player,
                    entry.level,
                    entry.score
                );
            }
        }
    }
    Ok(())
}

fn load(game: &LifeGame<JsonFileStore>, player: &str) -> Result<PlayerState> {
    game.get_or_create(player)
        .with_context(|| format!("loading save for '{player}'"))
}

fn persist(game: &LifeGame<JsonFileStore>, player: &str, state: &PlayerState) -> Result<()> {
    game.persist(player, state)
        .with_context(|| format!("saving '{player}'"))
}

fn print_status(player: &str, state: &PlayerState) {
    println!("{} {}", "LifeGame:".bold(), player.bold());
    println!("LEVEL {}", state.level.to_string().bright_white().bold());
    println!("XP     {} {:>3.0}/100", bar(state.xp, 100.0), state.xp);
    println!(
        "ENERGY {} {:>3.0}/100",
        bar(state.energy, 100.0),
        state.energy
    );
    println!("GOLD   {}", format!("{:.0}", state.gold).bright_yellow());
}

fn print_activities(state: &PlayerState) {
    for category in Category::ALL {
        let mut in_category = state
            .activities
            .iter()
            .filter(|(_, def)| def.category == category)
            .peekable();
        if in_category.peek().is_none() {
            continue;
        }
        println!("{}", category.as_str().to_uppercase().bold());
        for (name, def) in in_category {
            let energy = if def.is_recovering() {
                format!("RECOVER {:.1}", def.energy_per_unit).green()
            } else {
                format!("DRAIN {:.1}", -def.energy_per_unit).red()
            };
            println!(
                "  {name}  XP +{:.1} · {energy} / {}",
                def.xp_per_unit,
                def.mode.unit_label()
            );
        }
    }
}

fn print_rewards(state: &PlayerState) {
    for (name, cost) in &state.rewards {
        if state.gold >= *cost {
            println!("  {name}  {:.0}  {}", cost, "CLAIMABLE".green());
        } else {
            println!("  {name}  {:.0}  (short {:.0})", cost, cost - state.gold);
        }
    }
}

fn print_ranks(state: &PlayerState) {
    for track in SkillTrack::ALL {
        let status = BadgeStatus::new(state.skills.count(track));
        let card = match status.tier {
            BadgeTier::Locked => format!(
                "{} {} {}/{}",
                status.tier.icon(),
                track.short_label(),
                status.count,
                status.next_threshold().unwrap_or(0)
            ),
            tier => format!(
                "{} {} {} ({})",
                tier.icon(),
                track.short_label(),
                tier.as_str().bold(),
                status.count
            ),
        };
        println!("  {card}");
    }
}

/// Fixed-width text gauge, clamped to `[0, max]`.
fn bar(value: f32, max: f32) -> String {
    let ratio = (value / max).clamp(0.0, 1.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = (ratio * BAR_WIDTH as f32).round() as usize;
    let mut out = String::with_capacity(BAR_WIDTH * 3);
    for _ in 0..filled {
        out.push('█');
    }
    for _ in filled..BAR_WIDTH {
        out.push('░');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_clamps_both_ends() {
        assert_eq!(bar(-5.0, 100.0), "░".repeat(BAR_WIDTH));
        assert_eq!(bar(250.0, 100.0), "█".repeat(BAR_WIDTH));
        let half = bar(50.0, 100.0);
        assert_eq!(half.chars().filter(|c| *c == '█').count(), BAR_WIDTH / 2);
    }

    #[test]
    fn arg_enums_map_onto_engine_types() {
        assert_eq!(UnitMode::from(ModeArg::Time), UnitMode::Time);
        assert_eq!(Category::from(CategoryArg::Night), Category::Night);
    }

    #[test]
    fn cli_parses_done_with_bounds() {
        let args = Args::try_parse_from([
            "lifegame",
            "--player",
            "Ana",
            "done",
            "🔥 Focus Zone",
            "--qty",
            "60",
        ])
        .unwrap();
        assert!(matches!(
            args.command,
            Command::Done { qty: 60, seed: None, .. }
        ));
        assert!(
            Args::try_parse_from(["lifegame", "done", "Walk", "--qty", "601"]).is_err()
        );
    }
}
