//! `tvl run` — the interactive career session.
//!
//! One command drives one engine transition; the record (with its dice
//! stream position) is written back to disk after every step, so a session
//! can be stopped and resumed at any point without changing the rolls.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;
use tvl_core::{
    CareerEvent, CharacterRecord, DiceRng, ReenlistmentPreference, Requirements, Service,
    SkillTable, attempt_enlistment, attempt_reenlistment, available_reenlistment_options,
    available_skill_tables, check_ageing, check_commission, check_promotion, check_survival,
    commission_requirements, muster_out, promotion_requirements, resolve_skill,
    success_probability, survival_requirements,
};

use crate::commands::{load_record, save_record};
use crate::error::{CliError, CliResult};

/// Run the interactive session against the record in `path`.
pub fn run(path: &Path) -> CliResult<()> {
    let record = load_record(path)?;
    let mut session = Session {
        record,
        path: path.to_path_buf(),
    };

    println!(
        "{} {} (phase {})",
        "resumed".green().bold(),
        session.record.name,
        session.record.current_phase()
    );
    println!("type 'help' for commands, 'quit' to leave");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
            break;
        }
        match session.process(input) {
            Ok(output) if output.is_empty() => {}
            Ok(output) => println!("{output}"),
            Err(err) => println!("{} {err}", "error:".red().bold()),
        }
    }
    Ok(())
}

/// An interactive career session bound to a character file.
pub struct Session {
    /// The record being driven.
    pub record: CharacterRecord,
    path: PathBuf,
}

impl Session {
    /// Process one line of input and return the response text.
    pub fn process(&mut self, input: &str) -> CliResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }
        let mut parts = trimmed.splitn(2, ' ');
        let cmd = parts.next().unwrap_or("").to_lowercase();
        let rest = parts.next().map(str::trim).unwrap_or("");

        match cmd.as_str() {
            "enlist" => self.do_enlist(rest),
            "survival" => self.transition(check_survival),
            "commission" => self.transition(check_commission),
            "promotion" => self.transition(check_promotion),
            "skill" => self.do_skill(rest),
            "ageing" | "aging" => self.transition(check_ageing),
            "reenlist" => self.do_reenlist(rest),
            "muster" => self.do_muster(rest),
            "status" => Ok(self.do_status()),
            "odds" => Ok(self.do_odds()),
            "help" => Ok(help_text().to_string()),
            other => Err(CliError::Input(format!(
                "unknown command '{other}' (try 'help')"
            ))),
        }
    }

    /// Run a no-argument transition, persist, and describe the new events.
    fn transition(
        &mut self,
        f: fn(&mut DiceRng, &mut CharacterRecord) -> tvl_core::ChargenResult<()>,
    ) -> CliResult<String> {
        let mut rng = DiceRng::for_record(&self.record);
        let before = self.record.career_history.len();
        f(&mut rng, &mut self.record)?;
        save_record(&self.path, &self.record)?;
        Ok(self.describe_since(before))
    }

    fn do_enlist(&mut self, rest: &str) -> CliResult<String> {
        let service = Service::parse(rest)
            .ok_or_else(|| CliError::Chargen(tvl_core::ChargenError::UnknownService(rest.to_string())))?;
        let mut rng = DiceRng::for_record(&self.record);
        let before = self.record.career_history.len();
        attempt_enlistment(&mut rng, &mut self.record, service)?;
        save_record(&self.path, &self.record)?;
        Ok(self.describe_since(before))
    }

    fn do_skill(&mut self, rest: &str) -> CliResult<String> {
        if rest.is_empty() {
            let tables: Vec<String> = available_skill_tables(&self.record)
                .into_iter()
                .map(|(table, unlocked)| {
                    if unlocked {
                        table.to_string()
                    } else {
                        format!("{table} (locked)")
                    }
                })
                .collect();
            return Err(CliError::Input(format!(
                "usage: skill <table> — tables: {}",
                tables.join(", ")
            )));
        }
        let table = SkillTable::parse(rest)
            .ok_or_else(|| CliError::Chargen(tvl_core::ChargenError::UnknownTable(rest.to_string())))?;
        let mut rng = DiceRng::for_record(&self.record);
        let before = self.record.career_history.len();
        resolve_skill(&mut rng, &mut self.record, table)?;
        save_record(&self.path, &self.record)?;
        Ok(self.describe_since(before))
    }

    fn do_reenlist(&mut self, rest: &str) -> CliResult<String> {
        let preference = ReenlistmentPreference::parse(rest).ok_or_else(|| {
            CliError::Chargen(tvl_core::ChargenError::UnknownPreference(rest.to_string()))
        })?;
        let mut rng = DiceRng::for_record(&self.record);
        let before = self.record.career_history.len();
        attempt_reenlistment(&mut rng, &mut self.record, preference)?;
        save_record(&self.path, &self.record)?;
        Ok(self.describe_since(before))
    }

    fn do_muster(&mut self, rest: &str) -> CliResult<String> {
        let cash_rolls = if rest.is_empty() {
            None
        } else {
            Some(rest.parse::<u32>().map_err(|_| {
                CliError::Input(format!("cash roll count must be a number, got '{rest}'"))
            })?)
        };
        let mut rng = DiceRng::for_record(&self.record);
        let before = self.record.career_history.len();
        muster_out(&mut rng, &mut self.record, cash_rolls)?;
        save_record(&self.path, &self.record)?;
        Ok(self.describe_since(before))
    }

    fn do_status(&self) -> String {
        let record = &self.record;
        let mut out = format!(
            "{} — age {}, UPP {}\n",
            record.name,
            record.age,
            record.characteristics.upp()
        );
        match record.career {
            Some(career) => {
                let title = tvl_core::rank_title(career, record.rank);
                if title.is_empty() {
                    out.push_str(&format!("career: {career} (rank {})\n", record.rank));
                } else {
                    out.push_str(&format!("career: {career} ({title})\n"));
                }
            }
            None => out.push_str("career: none (enlist to begin)\n"),
        }
        out.push_str(&format!(
            "term {}, {} terms completed, phase {}\n",
            record.current_term(),
            record.terms_served,
            record.current_phase()
        ));
        if record.skill_eligibility > 0 {
            out.push_str(&format!("skill rolls banked: {}\n", record.skill_eligibility));
        }
        let options = available_reenlistment_options(record);
        if !options.is_empty() {
            let names: Vec<String> = options.iter().map(|o| format!("{o:?}").to_lowercase()).collect();
            out.push_str(&format!("reenlistment options: {}\n", names.join(", ")));
        }
        if let Some(benefits) = &record.mustering_out_benefits {
            out.push_str(&format!(
                "mustered out with Cr{} and {} item(s)\n",
                benefits.cash,
                benefits.items.values().sum::<u32>()
            ));
        }
        out.trim_end().to_string()
    }

    fn do_odds(&self) -> String {
        let mut out = String::new();
        for (label, requirements) in [
            ("survival", survival_requirements(&self.record)),
            ("commission", commission_requirements(&self.record)),
            ("promotion", promotion_requirements(&self.record)),
        ] {
            match requirements {
                Requirements::Check { target, modifier, details } => {
                    let p = success_probability(target, modifier);
                    out.push_str(&format!(
                        "{label}: target {target}, modifier +{modifier} — {}\n",
                        p.description
                    ));
                    for detail in details {
                        out.push_str(&format!("  {detail}\n"));
                    }
                }
                Requirements::NotApplicable { reasons } => {
                    out.push_str(&format!("{label}: not applicable ({})\n", reasons.join("; ")));
                }
            }
        }
        out.trim_end().to_string()
    }

    /// Describe the events appended since `index`, newest last.
    fn describe_since(&self, index: usize) -> String {
        self.record.career_history[index..]
            .iter()
            .map(describe_event)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn describe_event(event: &CareerEvent) -> String {
    let text = event.to_string();
    match event {
        CareerEvent::Enlistment { .. }
        | CareerEvent::Survival { .. }
        | CareerEvent::Commission { .. }
        | CareerEvent::Promotion { .. }
        | CareerEvent::Reenlistment { .. } => format!("{} {text}", "»".cyan()),
        _ => format!("  {text}"),
    }
}

fn help_text() -> &'static str {
    "\
Career commands (one engine step each):
  enlist <service>     Navy, Marines, Army, Scouts, Merchants, Others
  survival             roll this term's survival check
  commission           roll (or skip) the commission check
  promotion            roll (or skip) the promotion check
  skill <table>        personal, service, advanced, education (EDU 8+)
  ageing               advance age and roll ageing checks
  reenlist <choice>    reenlist, discharge, retire (5th term+)
  muster [cash rolls]  final payout; cash rolls 0-3 (default: max)

Information:
  status               where the character stands
  odds                 targets and success chances for upcoming checks
  help                 this text
  quit                 leave (progress is saved after every step)"
}

#[cfg(test)]
mod tests {
    use super::*;
    use tvl_core::create_record;

    fn session_with_record() -> (tempfile::TempDir, Session) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("char.json");
        let mut record = create_record(42);
        let mut rng = DiceRng::from_seed(42);
        record.name = tvl_core::generate_name(&mut rng);
        tvl_core::generate_all_characteristics(&mut rng, &mut record);
        save_record(&path, &record).unwrap();
        let session = Session { record, path };
        (dir, session)
    }

    #[test]
    fn unknown_command_is_an_input_error() {
        let (_dir, mut session) = session_with_record();
        assert!(session.process("dance").is_err());
    }

    #[test]
    fn empty_input_is_ignored() {
        let (_dir, mut session) = session_with_record();
        assert_eq!(session.process("   ").unwrap(), "");
    }

    #[test]
    fn enlist_then_status() {
        let (_dir, mut session) = session_with_record();
        let output = session.process("enlist navy").unwrap();
        assert!(output.contains("Navy") || output.contains("drafted"));

        let status = session.process("status").unwrap();
        assert!(status.contains("career:"));
        assert!(status.contains("term 1"));
    }

    #[test]
    fn enlisting_twice_reports_the_engine_error() {
        let (_dir, mut session) = session_with_record();
        session.process("enlist army").unwrap();
        assert!(session.process("enlist navy").is_err());
    }

    #[test]
    fn survival_before_enlistment_fails() {
        let (_dir, mut session) = session_with_record();
        assert!(session.process("survival").is_err());
    }

    #[test]
    fn progress_is_persisted_between_commands() {
        let (_dir, mut session) = session_with_record();
        session.process("enlist merchants").unwrap();
        let on_disk = load_record(&session.path).unwrap();
        assert_eq!(on_disk, session.record);
        assert!(on_disk.career.is_some());
    }

    #[test]
    fn odds_reports_all_three_checks() {
        let (_dir, mut session) = session_with_record();
        session.process("enlist scouts").unwrap();
        let odds = session.process("odds").unwrap();
        assert!(odds.contains("survival:"));
        assert!(odds.contains("commission:"));
        assert!(odds.contains("promotion:"));
    }

    #[test]
    fn skill_without_table_lists_choices() {
        let (_dir, mut session) = session_with_record();
        session.process("enlist navy").unwrap();
        let err = session.process("skill").unwrap_err();
        assert!(err.to_string().contains("personal"));
    }

    #[test]
    fn full_term_via_the_repl() {
        let (_dir, mut session) = session_with_record();
        session.process("enlist others").unwrap();
        session.process("survival").unwrap();
        if session.record.skill_eligibility > 0 && !session.record.ready.ageing {
            while session.record.skill_eligibility > 0 {
                session.process("skill service").unwrap();
            }
        }
        session.process("ageing").unwrap();
        if session.record.ready.reenlistment {
            session.process("reenlist discharge").unwrap();
        }
        if session.record.ready.muster_out {
            session.process("muster").unwrap();
            assert!(session.record.is_complete());
        }
    }
}
