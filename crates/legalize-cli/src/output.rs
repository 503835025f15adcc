//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use legalize_domain::{ProvenanceIdentity, Record, Stat};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format synthesized records.
    pub fn format_records(&self, records: &[Record]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_records_json(records),
            OutputFormat::Table => self.format_records_table(records),
            OutputFormat::Quiet => Ok(self.format_records_quiet(records)),
        }
    }

    /// Format a single record.
    pub fn format_record(&self, record: &Record) -> Result<String> {
        self.format_records(std::slice::from_ref(record))
    }

    /// Format records as JSON.
    fn format_records_json(&self, records: &[Record]) -> Result<String> {
        let json_records: Vec<serde_json::Value> = records
            .iter()
            .map(|r| {
                let spread = |values: &legalize_domain::StatSpread| {
                    Stat::ALL
                        .iter()
                        .map(|s| (s.as_str().to_string(), serde_json::json!(values.get(*s))))
                        .collect::<serde_json::Map<_, _>>()
                };
                serde_json::json!({
                    "species": r.display_species(),
                    "nickname": r.nickname,
                    "gender": r.gender.as_str(),
                    "ability": r.ability,
                    "item": r.held_item,
                    "nature": r.nature.as_str(),
                    "level": r.level,
                    "shiny": r.shiny,
                    "language": r.language.as_str(),
                    "ivs": spread(&r.ivs),
                    "evs": spread(&r.evs),
                    "moves": r.moves,
                    "origin": {
                        "version": r.origin_version.as_str(),
                        "generation": r.generation,
                        "met_location": r.met_location,
                        "met_level": r.met_level
                    },
                    "pid": format!("{:08X}", r.pid),
                    "trainer": identity_json(&r.trainer)
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_records)?)
    }

    /// Format records as a table.
    fn format_records_table(&self, records: &[Record]) -> Result<String> {
        if records.is_empty() {
            return Ok(self.colorize("No records synthesized.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Species", "Lv", "Origin", "Met", "OT", "TID/SID", "Lang", "PID", "Shiny"]);

        for record in records {
            builder.push_record([
                record.display_species(),
                record.level.to_string(),
                record.origin_version.to_string(),
                format!("{} @ Lv{}", record.met_location, record.met_level),
                record.trainer.ot_name.clone(),
                format!("{:05}/{:05}", record.trainer.tid, record.trainer.sid),
                record.language.to_string(),
                format!("{:08X}", record.pid),
                if record.is_shiny_by_pid() { "yes" } else { "no" }.to_string(),
            ]);
        }

        Ok(self.finish_table(builder))
    }

    /// Format records in quiet mode (one line each).
    fn format_records_quiet(&self, records: &[Record]) -> String {
        records
            .iter()
            .map(|r| format!("{} {} {}", r.display_species(), r.origin_version, r.trainer.ot_name))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format trainer identities.
    pub fn format_trainers(&self, trainers: &[ProvenanceIdentity]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = trainers.iter().map(identity_json).collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => {
                if trainers.is_empty() {
                    return Ok(self.colorize("No trainers found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Version", "Gen", "Language", "OT", "Gender", "TID", "SID"]);
                for trainer in trainers {
                    builder.push_record([
                        trainer.version.to_string(),
                        trainer.generation().to_string(),
                        trainer.language.to_string(),
                        trainer.ot_name.clone(),
                        trainer.ot_gender.as_str().to_string(),
                        format!("{:05}", trainer.tid),
                        format!("{:05}", trainer.sid),
                    ]);
                }
                Ok(self.finish_table(builder))
            }
            OutputFormat::Quiet => Ok(trainers
                .iter()
                .map(|t| format!("{} {} {}/{}", t.version, t.ot_name, t.tid, t.sid))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn finish_table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Whether machine-readable output is selected.
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn identity_json(identity: &ProvenanceIdentity) -> serde_json::Value {
    serde_json::json!({
        "version": identity.version.as_str(),
        "language": identity.language.as_str(),
        "ot_name": identity.ot_name,
        "ot_gender": identity.ot_gender.as_str(),
        "tid": identity.tid,
        "sid": identity.sid
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use legalize_domain::{Gender, GameVersion, LanguageId, Nature, StatSpread};

    fn create_test_record() -> Record {
        Record {
            species: "Meowstic".to_string(),
            form: Some("F".to_string()),
            nickname: None,
            gender: Gender::Female,
            ability: "Keen Eye".to_string(),
            held_item: None,
            nature: Nature::Timid,
            level: 100,
            shiny: false,
            language: LanguageId::English,
            ivs: StatSpread::perfect_ivs(),
            evs: StatSpread::zero(),
            moves: vec!["Psyshock".to_string()],
            origin_version: GameVersion::US,
            generation: 7,
            met_location: 40,
            met_level: 21,
            pid: 0x1234_5678,
            trainer: ProvenanceIdentity::new(GameVersion::US, LanguageId::English, "ALM", 12345, 54321),
        }
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_record(&create_test_record()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed[0]["species"], "Meowstic-F");
        assert_eq!(parsed[0]["origin"]["version"], "US");
        assert_eq!(parsed[0]["trainer"]["tid"], 12345);
        assert_eq!(parsed[0]["ivs"]["SpA"], 31);
        assert_eq!(parsed[0]["pid"], "12345678");
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_record(&create_test_record()).unwrap();
        assert_eq!(output, "Meowstic-F US ALM");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_record(&create_test_record()).unwrap();
        assert!(output.contains("Species"));
        assert!(output.contains("12345/54321"));
        assert!(output.contains("40 @ Lv21"));
    }

    #[test]
    fn test_empty_records() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_records(&[]).unwrap();
        assert!(output.contains("No records synthesized"));
    }

    #[test]
    fn test_trainers_format() {
        let trainers = vec![ProvenanceIdentity::new(
            GameVersion::BD,
            LanguageId::German,
            "Meister",
            1,
            2,
        )];

        let table = Formatter::new(OutputFormat::Table, false)
            .format_trainers(&trainers)
            .unwrap();
        assert!(table.contains("Meister"));
        assert!(table.contains("00001"));

        let quiet = Formatter::new(OutputFormat::Quiet, false)
            .format_trainers(&trainers)
            .unwrap();
        assert_eq!(quiet, "BD Meister 1/2");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.error("test"), "✗ test");
    }
}
