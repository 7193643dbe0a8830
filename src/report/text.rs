// src/report/text.rs
//
// Fixed wording of the report. Everything variable is passed in; nothing here
// looks at snapshots.

use super::Movement;

pub const PREAMBLE: &str = "# MERCO RANKING

In today's business environment, measuring reputation is a cornerstone of sustainable success for any company. We understand how valuable corporate reputation is and, as a result, we provide a detailed look at reputational analysis.

Our reputation report goes beyond collecting data and adds highly relevant context. This month we have included the company's standing in the prestigious Merco ranking in our analysis.

Merco evaluates corporate reputation through a multi-stakeholder methodology that combines six evaluations and more than twenty sources of information. A position in this ranking directly reflects the recognition a company has earned across a wide range of stakeholders. The methodology used by Merco is fully public and available on its website.

";

pub const CLOSING: &str = "

---

### Ready to take your reputation management strategy to the next level?

This is only the beginning: we offer a range of advanced tools to strengthen your news monitoring, across traditional media and social platforms alike.

**Find out how we can help you measure, manage and improve your corporate reputation effectively and accurately!**
";

pub fn positions(n: u32) -> String {
    if n == 1 { s!("1 position") } else { format!("{n} positions") }
}

/// "improved by 2 positions" / "declined by 1 position" / "held its position"
pub fn direction_phrase(m: Movement) -> String {
    match m {
        Movement::Improved(n) => join!("improved by ", &positions(n)),
        Movement::Declined(n) => join!("declined by ", &positions(n)),
        Movement::Held => s!("held its position"),
    }
}

pub fn direction_emoji(m: Movement) -> &'static str {
    match m {
        Movement::Improved(_) => "📈",
        Movement::Declined(_) => "📉",
        Movement::Held => "➡️",
    }
}

/// Listing indicator: "↑ (↑2)", "↓ (↓3)" or "=".
pub fn indicator(m: Movement) -> String {
    match m {
        Movement::Improved(n) => format!("↑ (↑{n})"),
        Movement::Declined(n) => format!("↓ (↓{n})"),
        Movement::Held => s!("="),
    }
}

pub fn headline(company: &str, rank: u32, label: &str, year: u16) -> String {
    format!(
        "**This month, we are pleased to report that {company} reached position {rank} in the Merco {label} {year} ranking.**\n"
    )
}

pub fn prior_line(prev_year: u16, prior: u32, m: Movement) -> String {
    format!(
        "\n**By comparison, in {prev_year} it ranked {prior}; this year it {}.** {}\n",
        direction_phrase(m),
        direction_emoji(m)
    )
}

pub fn score_delta_line(year: u16, score: u32, prev_year: u16, prior_score: u32) -> String {
    let delta = i64::from(score) - i64::from(prior_score);
    if delta > 0 {
        format!("\n*Score {year}: {score} points (+{delta} vs {prev_year}: {prior_score})*\n")
    } else if delta < 0 {
        format!("\n*Score {year}: {score} points ({delta} vs {prev_year}: {prior_score})*\n")
    } else {
        format!("\n*Score {year}: {score} points (no change vs {prev_year})*\n")
    }
}

pub fn score_line(year: u16, score: u32) -> String {
    format!("\n*Score {year}: {score} points*\n")
}

pub fn new_entrant_line(year: u16, score: u32) -> String {
    format!("\n*This company is new to the {year} ranking with {score} points.* ⭐\n")
}

pub fn listing_heading(top_n: usize, label: &str, prev_year: u16, year: u16) -> String {
    format!(
        "**Relative to its sector, the ranking was distributed as follows:**\n\n### Top {top_n} Merco {label} - {prev_year} vs {year}\n\n"
    )
}

/// Listing marker for an entry with no known prior position.
pub const NEW_MARKER: &str = "**NEW** ⭐\n\n";

/// Listing tail for an entry with a prior position: "2024: #3 ↑ (↑2)".
pub fn listing_prior(prev_year: u16, prior: u32, m: Movement) -> String {
    format!("{prev_year}: #{prior} {}\n\n", indicator(m))
}

pub fn listing_row(rank: u32, leader: &str, company: &str, score: u32) -> String {
    format!("**{rank}.** {leader} - *{company}* | {score} pts | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singular_and_plural_positions() {
        assert_eq!(positions(1), "1 position");
        assert_eq!(positions(3), "3 positions");
    }

    #[test]
    fn delta_signs() {
        assert!(score_delta_line(2025, 900, 2024, 850).contains("(+50 vs 2024: 850)"));
        assert!(score_delta_line(2025, 800, 2024, 850).contains("(-50 vs 2024: 850)"));
        assert!(score_delta_line(2025, 850, 2024, 850).contains("(no change vs 2024)"));
    }

    #[test]
    fn indicators() {
        assert_eq!(indicator(Movement::Improved(2)), "↑ (↑2)");
        assert_eq!(indicator(Movement::Declined(1)), "↓ (↓1)");
        assert_eq!(indicator(Movement::Held), "=");
    }

    #[test]
    fn listing_tails() {
        assert_eq!(listing_prior(2024, 3, Movement::Improved(2)), "2024: #3 ↑ (↑2)\n\n");
        assert_eq!(listing_prior(2024, 5, Movement::Held), "2024: #5 =\n\n");
        assert_eq!(NEW_MARKER, "**NEW** ⭐\n\n");
    }
}
