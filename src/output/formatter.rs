use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::analysis::Comparison;
use crate::catalog::{BodyCatalog, BodyProfile};
use crate::factors::{FactorSet, WeightTable};
use crate::launch::LaunchReport;
use crate::scoring::{assess_survival, calculate_score, classify, SurvivalAssessment, SurvivalEstimate, Verdict};

const LABEL_WIDTH: usize = 26;
const DEFAULT_BAR_WIDTH: usize = 30;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Bar width that fits the terminal, defaulting for pipes
fn bar_width() -> usize {
    match terminal_size() {
        Some((Width(w), _)) => (w as usize).saturating_sub(LABEL_WIDTH + 20).clamp(10, 50),
        None => DEFAULT_BAR_WIDTH,
    }
}

fn heading(title: &str, use_colors: bool) -> String {
    let rule = "=".repeat(50);
    if use_colors {
        format!("{}\n{}\n{}", rule.dimmed(), title.bold(), rule.dimmed())
    } else {
        format!("{}\n{}\n{}", rule, title, rule)
    }
}

fn section(title: &str, use_colors: bool) -> String {
    let text = format!("=== {} ===", title);
    if use_colors {
        text.bold().to_string()
    } else {
        text
    }
}

/// Colour text by how habitable a 0-100 score is (green / yellow / red)
fn paint_score(text: &str, score: f64, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }
    match classify(score) {
        Verdict::Habitable => text.green().to_string(),
        Verdict::MarginallyHabitable => text.yellow().to_string(),
        Verdict::Uninhabitable => text.red().to_string(),
    }
}

/// Colour text by survival tier; separate from the habitability bands
fn paint_assessment(text: &str, assessment: SurvivalAssessment, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }
    match assessment {
        SurvivalAssessment::Excellent | SurvivalAssessment::Good => text.green().to_string(),
        SurvivalAssessment::Moderate | SurvivalAssessment::Concerning => text.yellow().to_string(),
        SurvivalAssessment::Critical | SurvivalAssessment::Extreme => text.red().to_string(),
    }
}

/// Format a percentage with one decimal ("96.7%")
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Horizontal bar for a value on the 0-100 scale, e.g. "████░░░░"
pub fn format_bar(value: f64, width: usize) -> String {
    let ratio = (value / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

fn bar_line(label: &str, value: f64, width: usize, use_colors: bool) -> String {
    let bar = paint_score(&format_bar(value, width), value, use_colors);
    format!("{:<w$} {} {:>6}", label, bar, format_percent(value), w = LABEL_WIDTH)
}

fn field(label: &str, value: impl std::fmt::Display) -> String {
    format!("{:<w$}: {}", label, value, w = LABEL_WIDTH)
}

/// Format the astronomical data of a body
pub fn format_body_detail(body: &BodyProfile) -> String {
    [
        field("Name", &body.name),
        field("Distance from Earth (AU)", format!("{:.2}", body.distance_au)),
        field("Travel time (years)", format!("{:.1}", body.travel_time_years)),
        field("Distance from star (AU)", format!("{:.3}", body.star_distance_au)),
        field("Habitable zone", if body.habitable_zone { "Yes" } else { "No" }),
    ]
    .join("\n")
}

/// Format the full comparison report between Earth and the active body
pub fn format_comparison(comparison: &Comparison, use_colors: bool) -> String {
    let earth_score = comparison.earth_score.score;
    let body_score = comparison.body_score.score;
    let body_name = &comparison.body.name;

    let mut lines = vec![
        heading("HABITABILITY COMPARISON", use_colors),
        String::new(),
        section("ASTRONOMICAL DATA", use_colors),
        format_body_detail(&comparison.body),
        String::new(),
        section("SURVIVAL RATES", use_colors),
        field(&comparison.earth.name, paint_score(&format_percent(earth_score), earth_score, use_colors)),
        field(body_name, paint_score(&format_percent(body_score), body_score, use_colors)),
        field("Difference", format!("{:.1} points", comparison.difference)),
        String::new(),
    ];

    let verdict = format!("VERDICT FOR {}: {}", body_name.to_uppercase(), comparison.verdict);
    lines.push(paint_score(&verdict, body_score, use_colors));

    if let Some(ref projection) = comparison.projection {
        let mission = &projection.mission;
        let outcome = &projection.outcome;
        lines.extend([
            String::new(),
            section("COLONIZATION PROJECTION", use_colors),
            format!(
                "Initial colonists: {} men + {} women",
                mission.males, mission.females
            ),
            format!("Frozen embryos: {}", mission.frozen_embryos),
            format!("Mission duration: {} years", mission.duration_years),
            String::new(),
            "Projected population growth:".to_string(),
            format!("- Potential births: {}", outcome.potential_births),
            format!(
                "- Surviving children: {} (rate of {})",
                outcome.surviving_children,
                format_percent(outcome.surviving_percent())
            ),
            format!("- Estimated final population: {}", outcome.final_population),
        ]);
    }

    let width = bar_width();
    lines.extend([
        String::new(),
        section("SCORES", use_colors),
        bar_line(&comparison.earth.name, earth_score, width, use_colors),
        bar_line(body_name, body_score, width, use_colors),
        String::new(),
        section("FACTORS", use_colors),
        format_factor_table(
            &comparison.earth.factors,
            &comparison.body.factors,
            body_name,
            use_colors,
        ),
    ]);

    lines.join("\n")
}

/// Per-factor side-by-side table of Earth and another body.
pub fn format_factor_table(earth: &FactorSet, body: &FactorSet, body_name: &str, use_colors: bool) -> String {
    let width = (bar_width() / 2).max(5);
    let header = format!(
        "{:<w$} {:>6} {:>6}  {}",
        "Factor",
        "Earth",
        truncate_name(body_name, 6),
        "",
        w = LABEL_WIDTH
    );
    let header = if use_colors { header.bold().to_string() } else { header };

    let rows = earth.iter().zip(body.iter()).map(|((factor, earth_value), (_, body_value))| {
        let bar = paint_score(&format_bar(body_value, width), body_value, use_colors);
        format!(
            "{:<w$} {:>6.0} {:>6.0}  {}",
            factor.label(),
            earth_value,
            body_value,
            bar,
            w = LABEL_WIDTH
        )
    });

    std::iter::once(header).chain(rows).collect::<Vec<_>>().join("\n")
}

fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else {
        chars[..max_width].iter().collect()
    }
}

/// One line per reference body: menu number, key, name, score, verdict
pub fn format_body_list(weights: &WeightTable, use_colors: bool) -> String {
    BodyCatalog::references()
        .iter()
        .map(|body| {
            let profile = body.profile();
            let score = calculate_score(&profile.factors, weights, profile.habitable_zone).score;
            let verdict = classify(score);
            let line = format!(
                "{:>2}. {:<12} {:<22} {:>6}  {}",
                body.menu_number(),
                body.key(),
                profile.name,
                format_percent(score),
                verdict.label()
            );
            paint_score(&line, score, use_colors)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the Earth survival estimate with its per-factor details
pub fn format_survival(estimate: &SurvivalEstimate, use_colors: bool) -> String {
    let assessment = assess_survival(estimate.probability);
    let probability = paint_assessment(&format_percent(estimate.probability), assessment, use_colors);

    let mut lines = vec![
        heading("HUMAN SURVIVAL ON EARTH", use_colors),
        String::new(),
        format!("Estimated survival probability: {}", probability),
        format!("Assessment: {}", assessment),
        format!(
            "Evaluation year: {} (degradation factor {:.3})",
            estimate.year, estimate.decay
        ),
        String::new(),
        section("FACTOR DETAILS", use_colors),
    ];

    lines.extend(estimate.factors.iter().map(|a| {
        format!(
            "{}: {:.1} (Ideal: {:.0}, Score: {})",
            a.factor.label(),
            a.value,
            a.ideal,
            format_percent(a.score_percent)
        )
    }));

    lines.push(String::new());
    lines.push("Note: this is a simplified, illustrative estimate.".to_string());
    lines.join("\n")
}

/// Format the launch feasibility report
pub fn format_launch(report: &LaunchReport, use_colors: bool) -> String {
    use crate::launch::LaunchStatus;

    let status = match (report.status, use_colors) {
        (LaunchStatus::Ready, true) => report.status.message().green().to_string(),
        (_, true) => report.status.message().red().to_string(),
        (_, false) => report.status.message().to_string(),
    };

    [
        heading("LAUNCH REPORT", use_colors),
        field("Rocket volume (m³)", format!("{:.2}", report.rocket_volume_m3)),
        field("Occupied volume (m³)", format!("{:.2}", report.occupied_volume_m3)),
        field("Total cargo mass (kg)", format!("{:.2}", report.total_mass_kg)),
        field("Fuel loaded (L)", format!("{:.2}", report.fuel_l)),
        field("Minimum fuel needed (L)", format!("{:.2}", report.minimum_fuel_l)),
        String::new(),
        status,
    ]
    .join("\n")
}
