//! Plain-text rendering of the dashboard, analytics, and goals screens.

use savvy_core::{
    percent_of_total, Analysis, Badge, Challenge, GoalProgress, Streaks, Transaction, UserProfile,
};

fn progress_bar(pct: f64) -> String {
    // Bar clamps at 100%; the printed number does not.
    let filled = (pct.clamp(0.0, 100.0) / 5.0).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(20 - filled))
}

pub fn render_dashboard(
    analysis: &Analysis,
    profile: &UserProfile,
    streaks: &Streaks,
    badges: &[Badge],
    recent: &[Transaction],
    coach_advice: &str,
    alert: Option<&str>,
) {
    println!("# Dashboard\n");

    if let Some(alert) = alert {
        println!("💡 Health & Wellness Tip\n{alert}\n");
    }

    println!("Total spent this month:  ₹{:.2}", analysis.total_spent);
    println!(
        "Unnecessary spending:    ₹{:.2} ({:.1}% of total)",
        analysis.unnecessary_spending,
        percent_of_total(analysis.unnecessary_spending, analysis.total_spent)
    );
    println!(
        "Junk food spending:      ₹{:.2} (limit ₹{:.0})",
        analysis.junk_food_spending, profile.junk_food_limit
    );
    println!(
        "Impulse purchases:       ₹{:.2} (limit ₹{:.0})",
        analysis.impulse_spending, profile.impulse_spending_limit
    );

    println!("\n## Streaks\n");
    println!("🥗 {} days without junk food", streaks.no_junk_food);
    println!("🛍️ {} days without impulse buys", streaks.no_impulse_spending);

    println!("\n## Badges\n");
    if badges.is_empty() {
        println!("Keep up the good habits!");
    } else {
        for b in badges {
            println!("{} {}", b.icon(), b.name());
        }
    }

    println!("\n## AI Savings Coach\n");
    println!("{coach_advice}");

    println!("\n## Recent transactions\n");
    for t in recent.iter().take(5) {
        let mut tags = vec![t.category.label().to_string()];
        if let Some(ft) = t.food_tag {
            tags.push(ft.label().to_string());
        }
        if t.is_impulse {
            tags.push("Impulse".to_string());
        }
        println!("- {} | {} | ₹{:.2} [{}]", t.date, t.name, t.amount, tags.join(", "));
    }
}

pub fn render_analytics(analysis: &Analysis, meal_ideas: Option<&str>) {
    println!("# Analytics\n");

    println!("## Spending by category\n");
    if analysis.category_breakdown.is_empty() {
        println!("(no transactions this month)");
    }
    for (category, value) in &analysis.category_breakdown {
        println!(
            "{:<14} ₹{:>10.2}  {:.1}%",
            category.label(),
            value,
            percent_of_total(*value, analysis.total_spent)
        );
    }

    println!("\n## Calories vs. cost\n");
    println!("Junk food spend:    ₹{:.2}", analysis.junk_food_spending);
    println!("Estimated calories: {:.0} kcal", analysis.total_calories);

    println!("\n## Daily spending\n");
    for (i, v) in analysis.daily_series.iter().enumerate() {
        if *v > 0.0 {
            println!("day {:>2}: ₹{:.2}", i + 1, v);
        }
    }

    if let Some(ideas) = meal_ideas {
        println!("\n## Healthier alternatives\n");
        println!("{ideas}");
    }
}

pub fn render_goals(
    analysis: &Analysis,
    profile: &UserProfile,
    progress: &GoalProgress,
    challenges: &[Challenge],
) {
    println!("# Goals & Challenges\n");

    println!(
        "Junk food budget    {} ₹{:.0} / ₹{:.0}",
        progress_bar(progress.junk_pct),
        analysis.junk_food_spending,
        profile.junk_food_limit
    );
    println!(
        "Impulse limit       {} ₹{:.0} / ₹{:.0}",
        progress_bar(progress.impulse_pct),
        analysis.impulse_spending,
        profile.impulse_spending_limit
    );
    println!(
        "Savings goal        {} save ₹{:.0}",
        progress_bar(progress.savings_pct),
        (profile.savings_goal - analysis.total_spent).max(0.0)
    );

    println!("\n## Challenges\n");
    for c in challenges {
        let status = if c.completed { "✅" } else { "⏳" };
        println!("{status} {} {} — {}", c.icon, c.name, c.description);
    }
}
