use crate::explanation::types::OutfitExplanation;

/// Markdown formatter for explanations
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format explanation as markdown
    pub fn format(explanation: &OutfitExplanation) -> String {
        let mut md = String::with_capacity(1024);

        // Title with stars and score
        md.push_str(&format!(
            "# {} - {}\n\n",
            explanation.overall.stars, explanation.overall.label
        ));
        md.push_str(&format!(
            "**Overall Score:** {:.1}/100\n\n",
            explanation.overall.score
        ));
        md.push_str(&format!("{}\n\n", explanation.overall.message));

        // Weather
        md.push_str("## Weather\n\n");
        md.push_str(&format!("{}  \n", explanation.weather.summary));
        md.push_str(&format!("{}\n\n", explanation.weather.message));

        // Outfit
        md.push_str("## Outfit\n\n");
        md.push_str("| Slot | Item | Colour | Formality | Swappable |\n");
        md.push_str("|------|------|--------|-----------|-----------|\n");
        for line in &explanation.slots {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                line.slot,
                line.name,
                line.color.as_deref().unwrap_or("-"),
                line.formality_band.display_name(),
                if line.swappable { "yes" } else { "no" }
            ));
        }
        md.push('\n');

        // Warnings
        if !explanation.warnings.is_empty() {
            md.push_str("## Warnings\n\n");
            for warning in &explanation.warnings {
                md.push_str(&format!("{} **{}**\n\n", warning.icon, warning.message));
                md.push_str(&format!("{}  \n", warning.detail));
                md.push_str(&format!("*Advice:* {}\n\n", warning.advice));
            }
        }

        // Dimension breakdown
        md.push_str("## Compatibility Breakdown\n\n");
        md.push_str("| Dimension | Score | Interpretation |\n");
        md.push_str("|-----------|-------|----------------|\n");
        for dimension in &explanation.dimensions {
            md.push_str(&format!(
                "| {} | {:.1} | {} |\n",
                dimension.name, dimension.score, dimension.interpretation
            ));
        }

        md.push('\n');
        md
    }
}
