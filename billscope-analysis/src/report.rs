//! Sectioning of the returned analysis for display.

use crate::prompt::SECTION_HEADERS;

/// One labeled section of the analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    /// Section label without the trailing colon (e.g. "SECTOR").
    pub heading: String,
    /// Section body, trimmed.
    pub body: String,
}

/// The model's analysis, split into the requested sections when the
/// completion honored the headers. The raw completion is always kept so
/// display can fall back to it.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub raw: String,
    pub sections: Vec<ReportSection>,
}

impl AnalysisReport {
    /// Parse a completion into labeled sections.
    ///
    /// A line beginning with one of the known headers starts a section;
    /// following lines accumulate into its body until the next header.
    /// Completions without any recognizable header yield no sections and
    /// are displayed raw.
    pub fn parse(raw: &str) -> Self {
        let mut sections: Vec<ReportSection> = Vec::new();

        for line in raw.lines() {
            let trimmed = line.trim_start();
            if let Some(header) = SECTION_HEADERS.iter().find(|h| trimmed.starts_with(**h)) {
                let inline = trimmed[header.len()..].trim();
                sections.push(ReportSection {
                    heading: header.trim_end_matches(':').to_string(),
                    body: inline.to_string(),
                });
            } else if let Some(current) = sections.last_mut() {
                if !current.body.is_empty() {
                    current.body.push('\n');
                }
                current.body.push_str(line.trim_end());
            }
        }

        for section in &mut sections {
            section.body = section.body.trim().to_string();
        }

        Self {
            raw: raw.to_string(),
            sections,
        }
    }

    /// Whether the completion could be split into labeled sections.
    pub fn is_sectioned(&self) -> bool {
        !self.sections.is_empty()
    }
}
