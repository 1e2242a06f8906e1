use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use savvy_ai::AiConfig;
use savvy_core::{
    challenges, compute_analysis, compute_goal_progress, compute_streaks, today_in_tz,
    unlocked_badges, Classification, ProfilePatch, Streaks, Transaction, UserProfile,
};
use savvy_store::{parse_expense_csv, TransactionStore};
use std::io::Write as _;
use std::path::PathBuf;
use std::time::Duration;

mod auth;
mod config;
mod state;
mod views;

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "savvy", version, about = "AI-assisted expense & lifestyle ledger")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// One-time setup: write ~/.savvy/config.toml
    Setup,

    /// Log one expense; the AI classifies it (falls back to "Other" on failure)
    Add {
        /// Item or service ("McDonald's", "Nike Shoes", ...)
        #[arg(long)]
        name: String,

        /// Positive amount
        #[arg(long)]
        amount: f64,

        /// Expense date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Bulk-import expenses from a CSV (Date,Name,Amount)
    Import {
        #[arg(long)]
        csv: PathBuf,

        /// Skip AI classification; every row gets the default classification
        #[arg(long)]
        no_ai: bool,
    },

    /// Monthly summary, streaks, badges, and coach advice
    Dashboard,

    /// Category breakdown, daily series, calories
    Analytics {
        /// Also ask for healthier meal alternatives
        #[arg(long)]
        meal_ideas: bool,
    },

    /// Progress bars and challenges
    Goals,

    /// AI monthly performance review
    Report,

    /// Savings tips from recent transactions
    Coach,

    /// Update monthly limits and the savings goal
    Settings {
        #[arg(long)]
        junk_food_limit: Option<f64>,

        #[arg(long)]
        impulse_limit: Option<f64>,

        #[arg(long)]
        savings_goal: Option<f64>,
    },

    /// Follow the transaction log and reprint the summary on change
    Watch {
        /// Poll interval in seconds
        #[arg(long, default_value_t = 2)]
        interval_secs: u64,
    },

    /// Store API keys for the AI provider
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },
}

#[derive(Subcommand, Debug)]
enum AuthCommand {
    /// Paste a Gemini API key
    PasteGeminiKey,

    /// Paste an OpenAI API key
    PasteOpenaiKey,
}

struct Ctx {
    config: Config,
    store: TransactionStore,
    today: NaiveDate,
}

impl Ctx {
    fn load() -> Result<Self> {
        let config = config::load_config()?;
        let store = TransactionStore::open(state::store_root()?)?;
        let today = today_in_tz(&config.user.timezone)
            .with_context(|| format!("resolving today in {}", config.user.timezone))?;
        Ok(Self { config, store, today })
    }

    fn owner(&self) -> &str {
        &self.config.user.owner
    }

    /// Provider config from stored keys; `None` means "run without AI",
    /// which every caller tolerates via fallbacks.
    fn ai(&self) -> Result<Option<AiConfig>> {
        let auth = auth::load_auth()?;
        let mut ai = match self.config.llm.provider.as_str() {
            "openai" => auth.openai_api_key.map(AiConfig::openai),
            _ => auth
                .gemini_api_key
                .map(AiConfig::gemini)
                .or(auth.openai_api_key.map(AiConfig::openai)),
        };
        if let Some(cfg) = ai.as_mut() {
            if !self.config.llm.model.is_empty() {
                cfg.model = self.config.llm.model.clone();
            }
        }
        Ok(ai)
    }

    /// Recompute streaks from the log and persist the advisory cache.
    /// An empty log keeps the previously cached values.
    fn refresh_streaks(&self, list: &[Transaction]) -> Result<Streaks> {
        match compute_streaks(list, self.today) {
            Some(streaks) => {
                self.store.save_streaks(self.owner(), streaks)?;
                Ok(streaks)
            }
            None => {
                let doc = self
                    .store
                    .get_or_create_profile(self.owner(), UserProfile::default())?;
                Ok(doc.streaks)
            }
        }
    }

    fn profile(&self) -> Result<UserProfile> {
        Ok(self
            .store
            .get_or_create_profile(self.owner(), UserProfile::default())?
            .profile)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Setup => run_setup()?,

        Command::Add { name, amount, date } => {
            let ctx = Ctx::load()?;
            add_expense(&ctx, &name, amount, date).await?;
        }

        Command::Import { csv, no_ai } => {
            let ctx = Ctx::load()?;
            import_csv(&ctx, &csv, no_ai).await?;
        }

        Command::Dashboard => {
            let ctx = Ctx::load()?;
            show_dashboard(&ctx).await?;
        }

        Command::Analytics { meal_ideas } => {
            let ctx = Ctx::load()?;
            show_analytics(&ctx, meal_ideas).await?;
        }

        Command::Goals => {
            let ctx = Ctx::load()?;
            show_goals(&ctx)?;
        }

        Command::Report => {
            let ctx = Ctx::load()?;
            let list = ctx.store.list(ctx.owner())?;
            let analysis = compute_analysis(&list, ctx.today);
            let report = savvy_ai::monthly_report(ctx.ai()?.as_ref(), &analysis).await;
            println!("# Monthly report\n\n{report}");
        }

        Command::Coach => {
            let ctx = Ctx::load()?;
            let list = ctx.store.list(ctx.owner())?;
            let advice = savvy_ai::coach_advice(ctx.ai()?.as_ref(), &list).await;
            println!("# AI Savings Coach\n\n{advice}");
        }

        Command::Settings {
            junk_food_limit,
            impulse_limit,
            savings_goal,
        } => {
            let ctx = Ctx::load()?;
            update_settings(&ctx, junk_food_limit, impulse_limit, savings_goal)?;
        }

        Command::Watch { interval_secs } => {
            let ctx = Ctx::load()?;
            watch(ctx, interval_secs).await?;
        }

        Command::Auth { command } => match command {
            AuthCommand::PasteGeminiKey => auth::gemini_paste_key()?,
            AuthCommand::PasteOpenaiKey => auth::openai_paste_key()?,
        },
    }

    Ok(())
}

fn run_setup() -> Result<()> {
    state::ensure_savvy_home()?;
    let p = config::config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }

    let mut cfg = Config::default();
    print!("Your name (owner id) [{}]: ", cfg.user.owner);
    std::io::stdout().flush().ok();
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let owner = line.trim();
    if !owner.is_empty() {
        cfg.user.owner = owner.to_string();
    }

    config::save_config(&cfg)?;
    println!("Wrote {}", p.display());
    println!("Next: add an API key via `savvy auth paste-gemini-key`, then `savvy add`.");
    Ok(())
}

async fn add_expense(ctx: &Ctx, name: &str, amount: f64, date: Option<NaiveDate>) -> Result<()> {
    if name.trim().is_empty() {
        bail!("--name must not be empty");
    }
    if !(amount.is_finite() && amount > 0.0) {
        bail!("--amount must be positive, got {amount}");
    }

    let ai = ctx.ai()?;
    if ai.is_none() {
        println!("(no API key configured; using default classification)");
    }
    let classification = savvy_ai::classify(ai.as_ref(), name, amount).await;
    let suggestion = classification.suggestion.clone();

    let txn = Transaction::new(
        ctx.owner(),
        name,
        amount,
        date.unwrap_or(ctx.today),
        classification,
    );
    let stored = ctx.store.append(txn)?;

    let list = ctx.store.list(ctx.owner())?;
    let streaks = ctx.refresh_streaks(&list)?;

    println!(
        "Added \"{}\" (₹{:.2}) as {} [{}]",
        stored.name,
        stored.amount,
        stored.category.label(),
        stored.id
    );
    println!("AI Insight: {suggestion}");
    println!(
        "Streaks: {} days no junk food, {} days no impulse buys",
        streaks.no_junk_food, streaks.no_impulse_spending
    );
    Ok(())
}

async fn import_csv(ctx: &Ctx, csv_path: &PathBuf, no_ai: bool) -> Result<()> {
    if !csv_path.exists() {
        bail!("CSV not found: {} (pass --csv <path>)", csv_path.display());
    }

    let rows = parse_expense_csv(csv_path)
        .with_context(|| format!("parsing {}", csv_path.display()))?;
    if rows.is_empty() {
        bail!("no importable rows in {}", csv_path.display());
    }

    let ai = if no_ai { None } else { ctx.ai()? };
    let mut imported = 0usize;
    for row in &rows {
        let classification = if ai.is_some() {
            savvy_ai::classify(ai.as_ref(), &row.name, row.amount).await
        } else {
            Classification::fallback()
        };
        let txn = Transaction::new(ctx.owner(), row.name.clone(), row.amount, row.date, classification);
        ctx.store.append(txn)?;
        imported += 1;
    }

    let list = ctx.store.list(ctx.owner())?;
    ctx.refresh_streaks(&list)?;

    println!("Imported {imported} transactions from {}", csv_path.display());
    Ok(())
}

async fn show_dashboard(ctx: &Ctx) -> Result<()> {
    let list = ctx.store.list(ctx.owner())?;
    let analysis = compute_analysis(&list, ctx.today);
    let streaks = ctx.refresh_streaks(&list)?;
    let profile = ctx.profile()?;
    let badges = unlocked_badges(&streaks, &analysis);

    let ai = ctx.ai()?;
    let advice = savvy_ai::coach_advice(ai.as_ref(), &list).await;
    let alert = savvy_ai::health_alert(ai.as_ref(), &list, ctx.today).await;

    views::render_dashboard(
        &analysis,
        &profile,
        &streaks,
        &badges,
        &list,
        &advice,
        alert.as_deref(),
    );
    Ok(())
}

async fn show_analytics(ctx: &Ctx, meal_ideas: bool) -> Result<()> {
    let list = ctx.store.list(ctx.owner())?;
    let analysis = compute_analysis(&list, ctx.today);

    let ideas = if meal_ideas {
        Some(savvy_ai::meal_ideas(ctx.ai()?.as_ref(), &list, ctx.today).await)
    } else {
        None
    };

    views::render_analytics(&analysis, ideas.as_deref());
    Ok(())
}

fn show_goals(ctx: &Ctx) -> Result<()> {
    let list = ctx.store.list(ctx.owner())?;
    let analysis = compute_analysis(&list, ctx.today);
    let streaks = ctx.refresh_streaks(&list)?;
    let profile = ctx.profile()?;
    let progress = compute_goal_progress(&analysis, &profile);
    let challenge_list = challenges(&streaks, &progress);

    views::render_goals(&analysis, &profile, &progress, &challenge_list);
    Ok(())
}

fn update_settings(
    ctx: &Ctx,
    junk_food_limit: Option<f64>,
    impulse_limit: Option<f64>,
    savings_goal: Option<f64>,
) -> Result<()> {
    let patch = ProfilePatch {
        junk_food_limit,
        impulse_spending_limit: impulse_limit,
        savings_goal,
    };
    if junk_food_limit.is_none() && impulse_limit.is_none() && savings_goal.is_none() {
        bail!("nothing to update; pass --junk-food-limit, --impulse-limit, or --savings-goal");
    }
    for (flag, value) in [
        ("--junk-food-limit", junk_food_limit),
        ("--impulse-limit", impulse_limit),
        ("--savings-goal", savings_goal),
    ] {
        if let Some(v) = value {
            if !(v.is_finite() && v > 0.0) {
                bail!("{flag} must be positive, got {v}");
            }
        }
    }

    let doc = ctx.store.update_profile(ctx.owner(), &patch)?;
    println!("Settings saved:");
    println!("  junk food limit:   ₹{:.0}", doc.profile.junk_food_limit);
    println!("  impulse limit:     ₹{:.0}", doc.profile.impulse_spending_limit);
    println!("  savings goal:      ₹{:.0}", doc.profile.savings_goal);
    Ok(())
}

async fn watch(ctx: Ctx, interval_secs: u64) -> Result<()> {
    let today = ctx.today;
    let owner = ctx.config.user.owner.clone();
    println!("Watching {}'s ledger (Ctrl-C to stop)...\n", owner);

    let sub = savvy_store::subscribe(
        ctx.store.clone(),
        owner,
        Duration::from_secs(interval_secs.max(1)),
        move |list| {
            let analysis = compute_analysis(&list, today);
            let streaks = compute_streaks(&list, today).unwrap_or_default();
            println!(
                "[{} txns] spent ₹{:.2} this month | junk ₹{:.2} | impulse ₹{:.2} | streaks {}/{}",
                list.len(),
                analysis.total_spent,
                analysis.junk_food_spending,
                analysis.impulse_spending,
                streaks.no_junk_food,
                streaks.no_impulse_spending
            );
        },
    );

    tokio::signal::ctrl_c().await.context("waiting for Ctrl-C")?;
    sub.unsubscribe();
    println!("\nStopped watching.");
    Ok(())
}
