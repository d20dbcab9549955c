use crate::analysis::comparator::ComparisonResult;
use crate::analysis::reducer::{AggregateStats, StatField};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct StatRow {
    stat: String,
    older: String,
    newer: String,
    change: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

fn average_of(stats: &AggregateStats, field: StatField) -> Option<f64> {
    stats
        .averages
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, v)| *v)
}

fn champion_icon_url(version: &str, champion: &str) -> String {
    format!(
        "https://ddragon.leagueoflegends.com/cdn/{}/img/champion/{}.png",
        version, champion
    )
}

fn kda_line(stats: &AggregateStats) -> Option<String> {
    let kills = average_of(stats, StatField::Kills)?;
    let deaths = average_of(stats, StatField::Deaths)?;
    let assists = average_of(stats, StatField::Assists)?;
    let kda = average_of(stats, StatField::Kda)?;
    Some(format!("{}/{}/{} ({})", kills, deaths, assists, kda))
}

/// Renders the full trend report: headline win-rate movement, the
/// per-stat old → new table, the KDA summary, and the most-played
/// champion change. `half` is the size of one comparison window.
pub fn display_trend_report(
    player_name: &str,
    half: usize,
    old: &AggregateStats,
    new: &AggregateStats,
    comparison: &ComparisonResult,
    dd_version: &str,
) {
    // Positive delta is old minus new, so the win rate went down.
    let headline = if comparison.win_rate == 0.0 {
        format!(
            "{}, your winrate has stayed the same over the last {} matches!",
            player_name, half
        )
    } else {
        let direction = if comparison.win_rate > 0.0 {
            "decreased".red()
        } else {
            "increased".green()
        };
        format!(
            "{}, your winrate has {} by {}% over the last {} matches!",
            player_name,
            direction,
            comparison.win_rate.abs(),
            half
        )
    };

    println!("\n{}", headline.bold());
    println!("{}\n", "=".repeat(70).cyan());

    println!(
        "{} {}% → {}%\n",
        "📈 Win rate:".bold(),
        old.win_rate,
        new.win_rate
    );

    let rows: Vec<StatRow> = comparison
        .deltas
        .iter()
        .map(|(field, delta)| StatRow {
            stat: field.label().to_string(),
            older: average_of(old, *field)
                .map(|v| v.to_string())
                .unwrap_or_default(),
            newer: average_of(new, *field)
                .map(|v| v.to_string())
                .unwrap_or_default(),
            change: format!("{:+.2}", 0.0 - delta),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);

    if let (Some(old_kda), Some(new_kda)) = (kda_line(old), kda_line(new)) {
        println!("{} {} → {}", "Average KDA:".bold(), old_kda, new_kda);
    }

    println!(
        "{} {} → {}",
        "Most played champion:".bold(),
        old.most_played.yellow(),
        new.most_played.yellow()
    );
    println!("  {}", champion_icon_url(dd_version, &old.most_played));
    println!("  {}", champion_icon_url(dd_version, &new.most_played));

    println!(
        "\n{}",
        format!("Report generated at {}", chrono::Utc::now().format("%Y-%m-%d %H:%M UTC"))
            .dimmed()
    );
}
