//! Application state

use crate::settings::TuiSettings;
use armour_core::config::ensure_default_catalog;
use armour_core::{BodySlot, DamageReport, DamageType, LoadReport, Session};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Longest number accepted in the ATK/DMG fields (always fits a u32)
const MAX_INPUT_DIGITS: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Roster,
    Armour,
    Log,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Roster, Tab::Armour, Tab::Log, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Roster => "Roster",
            Tab::Armour => "Armour",
            Tab::Log => "Log",
            Tab::Help => "Help",
        }
    }
}

/// Which number field digits go into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Attack,
    Damage,
}

/// Text prompts standing in for file dialogs and name entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    AddCharacter,
    RenameCharacter,
    LoadCharacter,
    LoadArmour,
    LoadConfig,
    SaveConfig,
    Equip,
}

impl Prompt {
    pub fn title(&self) -> &'static str {
        match self {
            Prompt::AddCharacter => "Character name (empty for a generated one)",
            Prompt::RenameCharacter => "New name",
            Prompt::LoadCharacter => "Character file (.char)",
            Prompt::LoadArmour => "Armour definitions file (.hba)",
            Prompt::LoadConfig => "Configuration file (.hacfg)",
            Prompt::SaveConfig => "Save configuration to (.hacfg)",
            Prompt::Equip => "Armour to equip",
        }
    }

    fn needs_character(&self) -> bool {
        matches!(
            self,
            Prompt::RenameCharacter | Prompt::LoadCharacter | Prompt::Equip
        )
    }
}

/// Hit log export error
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write hit log: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to serialize hit log: {0}")]
    Json(#[from] serde_json::Error),
}

pub struct App {
    pub current_tab: Tab,
    pub session: Session,
    pub settings: TuiSettings,
    pub selected_character: usize,
    pub selected_slot: usize,
    pub attack_input: String,
    pub damage_input: String,
    pub focus: InputField,
    pub last_report: Option<DamageReport>,
    pub reports: Vec<DamageReport>,
    pub message_log: Vec<String>,
    pub log_scroll: usize,
    pub catalog_scroll: usize,
    pub prompt: Option<Prompt>,
    pub prompt_input: String,
}

impl App {
    /// Create the app and load the default armour definitions
    pub fn new(settings: TuiSettings) -> Self {
        let mut app = App::with_session(Session::new(), settings);
        app.load_default_armour();
        app
    }

    /// Create the app around an existing session without touching the disk
    pub fn with_session(session: Session, settings: TuiSettings) -> Self {
        App {
            current_tab: Tab::Roster,
            session,
            settings,
            selected_character: 0,
            selected_slot: 0,
            attack_input: String::new(),
            damage_input: String::new(),
            focus: InputField::Attack,
            last_report: None,
            reports: Vec::new(),
            message_log: vec!["Armour tracker ready.".to_string()],
            log_scroll: 0,
            catalog_scroll: 0,
            prompt: None,
            prompt_input: String::new(),
        }
    }

    fn load_default_armour(&mut self) {
        let path = self.settings.default_armour.clone();
        match ensure_default_catalog(&path) {
            Ok(true) => self.log(format!(
                "Default armour definitions don't exist, created {}",
                path.display()
            )),
            Ok(false) => {}
            Err(e) => {
                self.log(format!("Could not create {}: {}", path.display(), e));
                return;
            }
        }
        self.load_armour(&path);
    }

    /// Add a line to the in-app log (also traced)
    pub fn log(&mut self, message: impl Into<String>) {
        let message = message.into();
        info!("{}", message);
        self.message_log.push(message);
    }

    // === Selection ===

    pub fn selected_name(&self) -> Option<String> {
        self.session
            .roster()
            .names()
            .nth(self.selected_character)
            .map(String::from)
    }

    pub fn selected_slot(&self) -> BodySlot {
        BodySlot::all()[self.selected_slot]
    }

    fn select_name(&mut self, name: &str) {
        if let Some(index) = self.session.roster().names().position(|n| n == name) {
            self.selected_character = index;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.session.roster().len();
        if self.selected_character >= len {
            self.selected_character = len.saturating_sub(1);
        }
    }

    // === Tabs ===

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let next_idx = (current_idx + 1) % tabs.len();
        self.current_tab = tabs[next_idx];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.current_tab = tabs[prev_idx];
    }

    pub fn set_tab(&mut self, index: usize) {
        let tabs = Tab::all();
        if index < tabs.len() {
            self.current_tab = tabs[index];
        }
    }

    pub fn toggle_help(&mut self) {
        self.current_tab = if self.current_tab == Tab::Help {
            Tab::Roster
        } else {
            Tab::Help
        };
    }

    // === Navigation ===

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Roster => {
                if self.selected_character > 0 {
                    self.selected_character -= 1;
                }
            }
            Tab::Armour => {
                if self.catalog_scroll > 0 {
                    self.catalog_scroll -= 1;
                }
            }
            Tab::Log => {
                if self.log_scroll > 0 {
                    self.log_scroll -= 1;
                }
            }
            Tab::Help => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Roster => {
                if self.selected_character < self.session.roster().len().saturating_sub(1) {
                    self.selected_character += 1;
                }
            }
            Tab::Armour => {
                if self.catalog_scroll < self.session.catalog().len().saturating_sub(1) {
                    self.catalog_scroll += 1;
                }
            }
            Tab::Log => {
                if self.log_scroll < self.message_log.len().saturating_sub(1) {
                    self.log_scroll += 1;
                }
            }
            Tab::Help => {}
        }
    }

    pub fn on_left(&mut self) {
        if self.current_tab == Tab::Roster && self.selected_slot > 0 {
            self.selected_slot -= 1;
        }
    }

    pub fn on_right(&mut self) {
        if self.current_tab == Tab::Roster && self.selected_slot < BodySlot::all().len() - 1 {
            self.selected_slot += 1;
        }
    }

    // === ATK / DMG input ===

    pub fn type_digit(&mut self, c: char) {
        if !c.is_ascii_digit() {
            return;
        }
        let field = match self.focus {
            InputField::Attack => &mut self.attack_input,
            InputField::Damage => &mut self.damage_input,
        };
        if field.len() < MAX_INPUT_DIGITS {
            field.push(c);
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            InputField::Attack => self.attack_input.pop(),
            InputField::Damage => self.damage_input.pop(),
        };
    }

    pub fn toggle_field(&mut self) {
        self.focus = match self.focus {
            InputField::Attack => InputField::Damage,
            InputField::Damage => InputField::Attack,
        };
    }

    /// Reduce the entered hit for the selected character
    pub fn calculate(&mut self, damage_type: DamageType) {
        let Some(name) = self.selected_name() else {
            self.log("Add a character first.");
            return;
        };
        let Ok(roll) = self.attack_input.parse::<u32>() else {
            self.log("Enter an attack roll first.");
            return;
        };
        let Ok(raw_damage) = self.damage_input.parse::<u32>() else {
            self.log("Enter the damage first.");
            return;
        };

        match self.session.evaluate(&name, roll, raw_damage, damage_type) {
            Ok(report) => {
                self.log(format!(
                    "━━━ {} is hit on their {} ━━━",
                    report.character, report.slot
                ));
                for layer in &report.layers {
                    self.log(format!(
                        "  {} reduces {} damage by {}.",
                        layer.armour, report.damage_type, layer.reduction
                    ));
                }
                for armour in &report.unknown_armour {
                    self.log(format!(
                        "  Error: {} is wearing undefined armour: {}",
                        report.character, armour
                    ));
                }
                self.log(format!(
                    "  ▶ {} {} damage reduced to {}",
                    report.raw_damage, report.damage_type, report.final_damage
                ));
                self.last_report = Some(report.clone());
                self.reports.push(report);
            }
            Err(e) => self.log(e.to_string()),
        }
    }

    // === Prompts ===

    pub fn open_prompt(&mut self, prompt: Prompt) {
        if prompt.needs_character() && self.selected_name().is_none() {
            self.log("Add a character first.");
            return;
        }
        self.prompt_input = match prompt {
            Prompt::SaveConfig => self.settings.save_path.display().to_string(),
            Prompt::RenameCharacter => self.selected_name().unwrap_or_default(),
            _ => String::new(),
        };
        self.prompt = Some(prompt);
    }

    pub fn cancel_prompt(&mut self) {
        self.prompt = None;
        self.prompt_input.clear();
    }

    pub fn prompt_push(&mut self, c: char) {
        self.prompt_input.push(c);
    }

    pub fn prompt_backspace(&mut self) {
        self.prompt_input.pop();
    }

    pub fn submit_prompt(&mut self) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };
        let input = std::mem::take(&mut self.prompt_input);
        let input = input.trim();

        if input.is_empty() && prompt != Prompt::AddCharacter {
            self.log("Nothing entered.");
            return;
        }

        match prompt {
            Prompt::AddCharacter => self.add_character(input),
            Prompt::RenameCharacter => self.rename_selected(input),
            Prompt::LoadCharacter => self.load_character(Path::new(input)),
            Prompt::LoadArmour => self.load_armour(Path::new(input)),
            Prompt::LoadConfig => self.load_configuration(Path::new(input)),
            Prompt::SaveConfig => self.save_config(Path::new(input)),
            Prompt::Equip => self.equip_selected(input),
        }
    }

    // === Session operations ===

    fn add_character(&mut self, name: &str) {
        let name = if name.is_empty() { None } else { Some(name) };
        match self.session.add_character(name) {
            Ok(name) => {
                self.log(format!("Added {}.", name));
                self.select_name(&name);
            }
            Err(e) => self.log(e.to_string()),
        }
    }

    fn rename_selected(&mut self, new_name: &str) {
        let Some(name) = self.selected_name() else {
            return;
        };
        match self.session.rename_character(&name, new_name) {
            Ok(()) => {
                self.log(format!("{} is now called {}.", name, new_name));
                self.select_name(new_name);
            }
            Err(e) => self.log(e.to_string()),
        }
    }

    pub fn remove_selected(&mut self) {
        let Some(name) = self.selected_name() else {
            self.log("No character to remove.");
            return;
        };
        match self.session.remove_character(&name) {
            Ok(_) => {
                self.log(format!("Removed {}.", name));
                self.clamp_selection();
            }
            Err(e) => self.log(e.to_string()),
        }
    }

    fn load_character(&mut self, path: &Path) {
        let Some(name) = self.selected_name() else {
            return;
        };
        match self.session.load_character(&name, path) {
            Ok(load) => {
                for diagnostic in &load.diagnostics {
                    self.log(format!("{}: {}", path.display(), diagnostic));
                }
                self.log(format!("{} loaded.", load.name));
                self.select_name(&load.name);
                self.report_unresolved();
            }
            Err(e) => self.log(e.to_string()),
        }
    }

    fn load_armour(&mut self, path: &Path) {
        match self.session.load_catalog(path) {
            Ok(diagnostics) => {
                for diagnostic in &diagnostics {
                    self.log(format!("{}: {}", path.display(), diagnostic));
                }
                self.catalog_scroll = 0;
                self.log(format!(
                    "Armour definitions loaded ({} types).",
                    self.session.catalog().len()
                ));
                self.report_unresolved();
            }
            Err(e) => self.log(e.to_string()),
        }
    }

    pub fn load_configuration(&mut self, path: &Path) {
        match self.session.load_configuration(path) {
            Ok(report) => self.log_load_report(&report),
            Err(e) => self.log(e.to_string()),
        }
    }

    fn log_load_report(&mut self, report: &LoadReport) {
        for diagnostic in &report.diagnostics {
            self.log(diagnostic.to_string());
        }
        for failure in &report.failures {
            self.log(failure.clone());
        }
        for name in &report.characters_loaded {
            self.log(format!("{} loaded.", name));
        }
        if report.catalog_loaded {
            self.catalog_scroll = 0;
            self.log("Armour definitions loaded.");
        }
        self.clamp_selection();
        self.report_unresolved();
    }

    fn save_config(&mut self, path: &Path) {
        match self.session.save_configuration(path) {
            Ok(files) => self.log(format!(
                "Saved {} files, configuration at {}.",
                files.len(),
                path.display()
            )),
            Err(e) => self.log(e.to_string()),
        }
    }

    fn equip_selected(&mut self, armour: &str) {
        let Some(name) = self.selected_name() else {
            return;
        };
        let slot = self.selected_slot();
        match self.session.equip(&name, slot, armour) {
            Ok(()) => {
                self.log(format!("{} now wears {} on their {}.", name, armour, slot));
                if !self.session.catalog().contains(armour) {
                    self.log(format!("  Warning: {} is not a defined armour type.", armour));
                }
            }
            Err(e) => self.log(e.to_string()),
        }
    }

    /// Take off the outermost layer of the selected slot
    pub fn unequip_selected(&mut self) {
        let Some(name) = self.selected_name() else {
            self.log("Add a character first.");
            return;
        };
        let slot = self.selected_slot();
        let worn = self
            .session
            .character(&name)
            .map(|c| c.armour(slot).len())
            .unwrap_or(0);
        if worn == 0 {
            self.log(format!("{} wears nothing on their {}.", name, slot));
            return;
        }
        match self.session.unequip(&name, slot, worn - 1) {
            Ok(armour) => self.log(format!("{} took off {} from their {}.", name, armour, slot)),
            Err(e) => self.log(e.to_string()),
        }
    }

    fn report_unresolved(&mut self) {
        for unresolved in self.session.unresolved_armour() {
            self.log(format!("  Warning: {}", unresolved));
        }
    }

    // === Export ===

    pub fn export_log(&mut self) {
        match self.write_export() {
            Ok(path) => self.log(format!(
                "Exported {} hits to {}.",
                self.reports.len(),
                path.display()
            )),
            Err(e) => self.log(e.to_string()),
        }
    }

    fn write_export(&self) -> Result<PathBuf, ExportError> {
        let json = serde_json::to_string_pretty(&self.reports)?;
        fs::write(&self.settings.export_path, json)?;
        Ok(self.settings.export_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let mut session = Session::new();
        session.load_catalog_str(
            "Leather\n\tpiercing: 1\n\tslashing: 2\n\tbludgeoning: 1\n\ttoHitSpells: 2\n",
        );
        App::with_session(session, TuiSettings::default())
    }

    fn type_number(app: &mut App, number: &str) {
        for c in number.chars() {
            app.type_digit(c);
        }
    }

    fn submit(app: &mut App, prompt: Prompt, input: &str) {
        app.open_prompt(prompt);
        app.prompt_input = input.to_string();
        app.submit_prompt();
    }

    #[test]
    fn test_tab_cycle() {
        let mut app = test_app();
        app.prev_tab();
        assert_eq!(app.current_tab, Tab::Help);
        app.next_tab();
        assert_eq!(app.current_tab, Tab::Roster);
        app.set_tab(1);
        assert_eq!(app.current_tab, Tab::Armour);
        app.toggle_help();
        assert_eq!(app.current_tab, Tab::Help);
        app.toggle_help();
        assert_eq!(app.current_tab, Tab::Roster);
    }

    #[test]
    fn test_calculate_flow() {
        let mut app = test_app();
        submit(&mut app, Prompt::AddCharacter, "Bob");
        app.selected_slot = BodySlot::Torso.index();
        submit(&mut app, Prompt::Equip, "Leather");

        type_number(&mut app, "4");
        app.toggle_field();
        type_number(&mut app, "5");
        app.calculate(DamageType::Slashing);

        let report = app.last_report.as_ref().unwrap();
        assert_eq!(report.final_damage, 3);
        assert_eq!(app.reports.len(), 1);
        assert!(app
            .message_log
            .iter()
            .any(|l| l.contains("Leather reduces slashing damage by 2.")));
    }

    #[test]
    fn test_calculate_needs_input() {
        let mut app = test_app();
        app.calculate(DamageType::Piercing);
        assert_eq!(app.message_log.last().unwrap(), "Add a character first.");

        submit(&mut app, Prompt::AddCharacter, "");
        app.calculate(DamageType::Piercing);
        assert_eq!(app.message_log.last().unwrap(), "Enter an attack roll first.");

        type_number(&mut app, "3");
        app.calculate(DamageType::Piercing);
        assert_eq!(app.message_log.last().unwrap(), "Enter the damage first.");
        assert!(app.reports.is_empty());
    }

    #[test]
    fn test_digit_input_is_bounded() {
        let mut app = test_app();
        type_number(&mut app, "12345678901234");
        app.type_digit('x');
        assert_eq!(app.attack_input, "123456789");
        app.backspace();
        assert_eq!(app.attack_input, "12345678");
    }

    #[test]
    fn test_unknown_armour_warns() {
        let mut app = test_app();
        submit(&mut app, Prompt::AddCharacter, "Bob");
        app.selected_slot = BodySlot::Head.index();
        submit(&mut app, Prompt::Equip, "Plate");
        assert!(app.message_log.last().unwrap().contains("not a defined armour type"));

        type_number(&mut app, "8");
        app.toggle_field();
        type_number(&mut app, "3");
        app.calculate(DamageType::Bludgeoning);

        assert_eq!(app.last_report.as_ref().unwrap().final_damage, 3);
        assert!(app
            .message_log
            .iter()
            .any(|l| l.contains("Error: Bob is wearing undefined armour: Plate")));
    }

    #[test]
    fn test_remove_clamps_selection() {
        let mut app = test_app();
        submit(&mut app, Prompt::AddCharacter, "Alice");
        submit(&mut app, Prompt::AddCharacter, "Bob");
        assert_eq!(app.selected_name().as_deref(), Some("Bob"));

        app.remove_selected();
        assert_eq!(app.selected_name().as_deref(), Some("Alice"));
        app.remove_selected();
        assert_eq!(app.selected_name(), None);
        app.remove_selected();
        assert_eq!(app.message_log.last().unwrap(), "No character to remove.");
    }

    #[test]
    fn test_rename_keeps_selection() {
        let mut app = test_app();
        submit(&mut app, Prompt::AddCharacter, "");
        submit(&mut app, Prompt::RenameCharacter, "Zed");
        assert_eq!(app.selected_name().as_deref(), Some("Zed"));
    }

    #[test]
    fn test_prompt_requires_character() {
        let mut app = test_app();
        app.open_prompt(Prompt::Equip);
        assert!(app.prompt.is_none());
        app.open_prompt(Prompt::SaveConfig);
        assert_eq!(app.prompt, Some(Prompt::SaveConfig));
        assert_eq!(app.prompt_input, "./campaign.hacfg");
        app.cancel_prompt();
        assert!(app.prompt.is_none());
        assert!(app.prompt_input.is_empty());
    }

    #[test]
    fn test_unequip_outermost() {
        let mut app = test_app();
        submit(&mut app, Prompt::AddCharacter, "Bob");
        app.unequip_selected();
        assert_eq!(app.message_log.last().unwrap(), "Bob wears nothing on their feet.");

        submit(&mut app, Prompt::Equip, "Leather");
        submit(&mut app, Prompt::Equip, "Boots");
        app.unequip_selected();

        let bob = app.session.character("Bob").unwrap();
        assert_eq!(bob.armour(BodySlot::Feet), ["Leather"]);
    }

    #[test]
    fn test_export_log() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app();
        app.settings.export_path = dir.path().join("hits.json");

        submit(&mut app, Prompt::AddCharacter, "Bob");
        type_number(&mut app, "10");
        app.toggle_field();
        type_number(&mut app, "2");
        app.calculate(DamageType::Piercing);
        app.export_log();

        let written = fs::read_to_string(&app.settings.export_path).unwrap();
        let reports: Vec<DamageReport> = serde_json::from_str(&written).unwrap();
        assert_eq!(reports, app.reports);
        assert_eq!(reports[0].slot, BodySlot::Feet);
    }

    #[test]
    fn test_missing_file_keeps_state() {
        let mut app = test_app();
        submit(&mut app, Prompt::LoadArmour, "/definitely/not/here.hba");
        assert!(app.session.catalog().contains("Leather"));
        assert!(app.message_log.last().unwrap().contains("Failed to access"));
    }
}
