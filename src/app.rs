use std::{
    collections::VecDeque,
    path::{Path, PathBuf},
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use tracing::{error, info, warn};

use crate::{
    command,
    common::{DPI_SLOT_COUNT, DRIVER_BIN},
    driver::Driver,
    error::{ConfigError, DriverError},
    settings::{self, DeviceSettings},
    state::*,
};

pub(crate) struct SharkApp {
    pub(crate) settings: DeviceSettings,
    pub(crate) config_path: String,
    pub(crate) dpi_drafts: DpiDrafts,

    driver: Driver,

    pub(crate) active_section: Section,

    pub(crate) status_message: String,
    pub(crate) status_is_error: bool,
    pub(crate) notices: VecDeque<Notice>,
    pub(crate) confirm_reset: bool,

    task_tx: Sender<TaskOutcome>,
    task_rx: Receiver<TaskOutcome>,
    tasks_in_flight: usize,
}

impl SharkApp {
    pub(crate) fn new(driver: Driver, config_path: PathBuf) -> Self {
        let settings = DeviceSettings::default();
        let dpi_drafts = DpiDrafts::from_settings(&settings);
        let (task_tx, task_rx) = mpsc::channel();

        let mut app = Self {
            settings,
            config_path: config_path.display().to_string(),
            dpi_drafts,

            driver,

            active_section: Section::Dpi,

            status_message: "Ready".to_string(),
            status_is_error: false,
            notices: VecDeque::new(),
            confirm_reset: false,

            task_tx,
            task_rx,
            tasks_in_flight: 0,
        };

        if config_path.exists() {
            app.load_config();
        }

        app
    }

    fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
        self.status_is_error = false;
    }

    fn set_error_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
        self.status_is_error = true;
    }

    fn sync_drafts(&mut self) {
        self.dpi_drafts = DpiDrafts::from_settings(&self.settings);
    }

    pub(crate) fn tasks_in_flight(&self) -> usize {
        self.tasks_in_flight
    }

    /// The argument vector Apply would run right now.
    pub(crate) fn apply_command(&self) -> Vec<String> {
        command::build(&self.settings, &self.config_path)
    }

    pub(crate) fn load_config(&mut self) {
        let path = self.config_path.clone();

        match settings::load(Path::new(&path)) {
            Ok(mut loaded) => {
                loaded.reapply_config = self.settings.reapply_config;
                self.settings = loaded;
                self.sync_drafts();

                let issues = self.settings.issues();
                for issue in &issues {
                    warn!(%path, "{issue}");
                }

                info!(%path, "Config loaded");
                if issues.is_empty() {
                    self.set_status(format!("Config loaded from {path}"));
                } else {
                    self.set_status(format!(
                        "Config loaded from {path}, {} value(s) out of range", issues.len()
                    ));
                }
            }
            Err(ConfigError::NotFound(_)) => {
                warn!(%path, "Config file not found");
                self.notices.push_back(Notice::error("Config file not found", path.clone()));
                self.set_error_status(format!("Config file not found: {path}"));
            }
            Err(e) => {
                error!(%path, "Failed to load config: {e}");
                self.notices.push_back(Notice::error("Failed to load config", e.to_string()));
                self.set_error_status("Error loading config");
            }
        }
    }

    pub(crate) fn save_config(&mut self) {
        let path = self.config_path.clone();

        if path.trim().is_empty() {
            self.notices.push_back(Notice::error("Error", "Please specify a config file path"));
            return;
        }

        match settings::save(Path::new(&path), &self.settings) {
            Ok(()) => {
                info!(%path, "Config saved");
                self.set_status(format!("Config saved to {path}"));

                if self.settings.reapply_config {
                    self.apply_settings();
                }
            }
            Err(e) => {
                error!(%path, "Failed to save config: {e}");
                self.notices.push_back(Notice::error("Failed to save config", e.to_string()));
                self.set_error_status("Error saving config");
            }
        }
    }

    pub(crate) fn apply_settings(&mut self) {
        let cmd = self.apply_command();
        for issue in self.settings.issues() {
            warn!("Applying out-of-range value: {issue}");
        }
        info!(command = %command::display(&cmd), "Applying settings");
        self.spawn_driver(TaskKind::Apply, cmd);
    }

    pub(crate) fn query_charge(&mut self) {
        info!("Querying battery charge");
        self.spawn_driver(TaskKind::QueryCharge, command::query_charge());
    }

    fn spawn_driver(&mut self, kind: TaskKind, cmd: Vec<String>) {
        let driver = self.driver.clone();
        let tx = self.task_tx.clone();

        self.tasks_in_flight += 1;
        thread::spawn(move || {
            let result = driver.run(&cmd);
            let _ = tx.send(TaskOutcome { kind, result });
        });
    }

    /// Drains finished driver runs without blocking.
    pub(crate) fn poll_tasks(&mut self) {
        while let Ok(outcome) = self.task_rx.try_recv() {
            self.tasks_in_flight = self.tasks_in_flight.saturating_sub(1);
            self.handle_outcome(outcome);
        }
    }

    pub(crate) fn handle_outcome(&mut self, outcome: TaskOutcome) {
        match (outcome.kind, outcome.result) {
            (TaskKind::Apply, Ok(stdout)) => {
                info!("Settings applied");
                if !stdout.is_empty() {
                    self.notices.push_back(Notice::info("Success", stdout));
                }
                self.set_status("Settings applied successfully");
            }
            (TaskKind::QueryCharge, Ok(stdout)) => {
                info!(charge = %stdout.trim(), "Battery charge queried");
                self.notices.push_back(Notice::info("Battery Charge", stdout));
                self.set_status("Battery charge queried successfully");
            }
            (_, Err(DriverError::Launch(program))) => {
                error!(%program, "Driver executable not found");
                self.notices.push_back(Notice::error(
                    "Driver not found",
                    format!("Make sure {DRIVER_BIN} is in your PATH."),
                ));
                self.set_error_status("Driver command not found");
            }
            (TaskKind::Apply, Err(DriverError::Execution { stderr, .. })) => {
                self.notices.push_back(Notice::error(
                    "Error",
                    format!("Failed to apply settings:\n\nError: {stderr}"),
                ));
                self.set_error_status("Error applying settings");
            }
            (TaskKind::QueryCharge, Err(DriverError::Execution { stderr, .. })) => {
                self.notices.push_back(Notice::error("Failed to query charge", stderr));
                self.set_error_status("Error querying battery charge");
            }
            (kind, Err(e)) => {
                error!(?kind, "Unexpected driver error: {e}");
                self.notices.push_back(Notice::error("Unexpected error", e.to_string()));
                self.set_error_status("Unexpected error");
            }
        }
    }

    pub(crate) fn request_reset(&mut self) {
        self.confirm_reset = true;
    }

    pub(crate) fn answer_reset(&mut self, confirmed: bool) {
        self.confirm_reset = false;
        if confirmed {
            self.reset_to_defaults();
        }
    }

    pub(crate) fn reset_to_defaults(&mut self) {
        let mut fresh = settings::reset();
        fresh.reapply_config = self.settings.reapply_config;
        self.settings = fresh;
        self.sync_drafts();

        info!("Settings reset to defaults");
        self.set_status("Settings reset to defaults");
    }

    pub(crate) fn browse_config(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Select Config File")
            .add_filter("JSON files", &["json"])
            .set_file_name("config.json")
            .save_file()
        else {
            return;
        };

        self.config_path = path.display().to_string();
    }

    /// Called after the entry for `slot` changed. Text that is not a
    /// non-negative integer leaves the model as it was.
    pub(crate) fn edit_dpi_text(&mut self, slot: usize) {
        let Some(i) = slot.checked_sub(1).filter(|&i| i < DPI_SLOT_COUNT) else { return };

        match self.dpi_drafts.text[i].trim().parse::<u32>() {
            Ok(value) => {
                self.settings.set_dpi(slot, value);
                self.dpi_drafts.invalid[i] = false;
            }
            Err(_) => self.dpi_drafts.invalid[i] = true,
        }
    }

    pub(crate) fn set_slot_enabled(&mut self, slot: usize, enabled: bool) {
        let Some(i) = slot.checked_sub(1).filter(|&i| i < DPI_SLOT_COUNT) else { return };

        if !enabled {
            self.settings.disable_slot(slot);
            self.dpi_drafts.text[i] = "0".to_string();
            self.dpi_drafts.invalid[i] = false;
        } else if !self.settings.is_slot_enabled(slot) {
            self.set_status(format!("Enter a DPI value to enable slot {slot}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, time::{Duration, Instant}};

    use super::*;

    fn app_at(driver: &str, path: &Path) -> SharkApp {
        SharkApp::new(Driver::new(driver), path.to_path_buf())
    }

    fn wait_for_tasks(app: &mut SharkApp) {
        let deadline = Instant::now() + Duration::from_secs(10);
        while app.tasks_in_flight() > 0 {
            assert!(Instant::now() < deadline, "driver task did not finish");
            app.poll_tasks();
            thread::sleep(Duration::from_millis(10));
        }
    }

    fn last_notice(app: &SharkApp) -> &Notice {
        app.notices.back().expect("no notice raised")
    }

    #[test]
    fn test_startup_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_at("true", &dir.path().join("config.json"));

        assert_eq!(app.settings, DeviceSettings::default());
        assert_eq!(app.status_message, "Ready");
        assert!(app.notices.is_empty());
    }

    #[test]
    fn test_startup_loads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"polling_rate": 250, "dpi": {"2": 1600}}"#).unwrap();

        let app = app_at("true", &path);
        assert_eq!(app.settings.polling_rate, 250);
        assert_eq!(app.settings.dpi(2), Some(1600));
        assert_eq!(app.dpi_drafts.text[1], "1600");
        assert_eq!(app.status_message, format!("Config loaded from {}", path.display()));
    }

    #[test]
    fn test_failed_load_keeps_model() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_at("true", &dir.path().join("config.json"));
        app.settings.polling_rate = 125;
        app.settings.set_dpi(3, 2400);
        let before = app.settings.clone();

        app.load_config();
        assert_eq!(app.settings, before);
        assert_eq!(last_notice(&app).title, "Config file not found");
        assert!(app.status_message.starts_with("Config file not found: "));
        assert!(app.status_is_error);

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{ not json").unwrap();
        app.config_path = bad.display().to_string();
        app.load_config();
        assert_eq!(app.settings, before);
        assert_eq!(last_notice(&app).title, "Failed to load config");
        assert_eq!(app.status_message, "Error loading config");
    }

    #[test]
    fn test_load_and_reset_keep_reapply_switch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        settings::save(&path, &DeviceSettings::default()).unwrap();

        let mut app = app_at("true", &path);
        app.settings.reapply_config = true;
        app.load_config();
        assert!(app.settings.reapply_config);

        app.settings.angle_snap = true;
        app.reset_to_defaults();
        assert!(app.settings.reapply_config);
        assert!(!app.settings.angle_snap);
        assert_eq!(app.status_message, "Settings reset to defaults");
    }

    #[test]
    fn test_reset_requires_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_at("true", &dir.path().join("config.json"));
        app.settings.polling_rate = 500;

        app.request_reset();
        assert!(app.confirm_reset);
        app.answer_reset(false);
        assert!(!app.confirm_reset);
        assert_eq!(app.settings.polling_rate, 500);

        app.request_reset();
        app.answer_reset(true);
        assert_eq!(app.settings.polling_rate, 1000);
    }

    #[test]
    fn test_save_with_empty_path() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_at("true", &dir.path().join("config.json"));
        app.config_path = "  ".to_string();

        app.save_config();
        assert_eq!(last_notice(&app).title, "Error");
        assert_eq!(last_notice(&app).message, "Please specify a config file path");
        assert_eq!(app.status_message, "Ready");
    }

    #[test]
    fn test_save_writes_file_without_applying() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("config.json");
        let mut app = app_at("true", &path);
        app.settings.key_response_time = 20;

        app.save_config();
        assert_eq!(app.tasks_in_flight(), 0);
        assert_eq!(settings::load(&path).unwrap().key_response_time, 20);
        assert_eq!(app.status_message, format!("Config saved to {}", path.display()));
    }

    #[cfg(unix)]
    #[test]
    fn test_save_with_reapply_runs_driver() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_at("true", &dir.path().join("config.json"));
        app.settings.reapply_config = true;

        app.save_config();
        assert_eq!(app.tasks_in_flight(), 1);
        wait_for_tasks(&mut app);
        assert_eq!(app.status_message, "Settings applied successfully");
        assert!(app.notices.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_apply_reports_driver_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_at("false", &dir.path().join("config.json"));

        app.apply_settings();
        wait_for_tasks(&mut app);
        assert_eq!(last_notice(&app).title, "Error");
        assert!(last_notice(&app).message.starts_with("Failed to apply settings:\n\nError: "));
        assert_eq!(app.status_message, "Error applying settings");
    }

    #[test]
    fn test_apply_and_query_with_missing_driver() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_at("attack-shark-r1-driver-missing", &dir.path().join("config.json"));

        app.apply_settings();
        app.query_charge();
        wait_for_tasks(&mut app);

        assert_eq!(app.notices.len(), 2);
        assert!(app.notices.iter().all(|n| n.title == "Driver not found"
            && n.message == "Make sure attack-shark-r1-driver is in your PATH."));
        assert_eq!(app.status_message, "Driver command not found");
    }

    #[test]
    fn test_outcome_routing() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_at("true", &dir.path().join("config.json"));

        app.handle_outcome(TaskOutcome { kind: TaskKind::QueryCharge, result: Ok("Charge: 64%\n".into()) });
        assert_eq!(last_notice(&app).title, "Battery Charge");
        assert_eq!(last_notice(&app).message, "Charge: 64%\n");
        assert_eq!(app.status_message, "Battery charge queried successfully");

        app.handle_outcome(TaskOutcome {
            kind: TaskKind::QueryCharge,
            result: Err(DriverError::Execution { code: Some(1), stderr: "no device".into() }),
        });
        assert_eq!(last_notice(&app).title, "Failed to query charge");
        assert_eq!(last_notice(&app).message, "no device");
        assert_eq!(app.status_message, "Error querying battery charge");

        app.handle_outcome(TaskOutcome { kind: TaskKind::Apply, result: Ok("applied\n".into()) });
        assert_eq!(last_notice(&app).title, "Success");
        assert_eq!(app.status_message, "Settings applied successfully");

        app.handle_outcome(TaskOutcome {
            kind: TaskKind::Apply,
            result: Err(DriverError::Unexpected("boom".into())),
        });
        assert_eq!(last_notice(&app).title, "Unexpected error");
        assert_eq!(app.status_message, "Unexpected error");
    }

    #[test]
    fn test_invalid_dpi_text_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_at("true", &dir.path().join("config.json"));

        app.dpi_drafts.text[1] = "16a0".to_string();
        app.edit_dpi_text(2);
        assert_eq!(app.settings.dpi(2), Some(0));
        assert!(app.dpi_drafts.invalid[1]);

        app.dpi_drafts.text[1] = "-5".to_string();
        app.edit_dpi_text(2);
        assert_eq!(app.settings.dpi(2), Some(0));

        app.dpi_drafts.text[1] = "1600".to_string();
        app.edit_dpi_text(2);
        assert_eq!(app.settings.dpi(2), Some(1600));
        assert!(!app.dpi_drafts.invalid[1]);
        assert!(app.apply_command().contains(&"-dpi:2=1600".to_string()));
    }

    #[test]
    fn test_slot_switch() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_at("true", &dir.path().join("config.json"));

        app.set_slot_enabled(1, false);
        assert_eq!(app.settings.dpi(1), Some(0));
        assert_eq!(app.dpi_drafts.text[0], "0");
        assert!(!app.apply_command().iter().any(|a| a.starts_with("-dpi:")));

        app.set_slot_enabled(1, true);
        assert_eq!(app.settings.dpi(1), Some(0));
        assert_eq!(app.status_message, "Enter a DPI value to enable slot 1");
    }

    #[test]
    fn test_failed_save_reports_and_skips_reapply() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let mut app = app_at("true", &blocker.join("config.json"));
        app.settings.reapply_config = true;

        app.save_config();
        assert_eq!(last_notice(&app).title, "Failed to save config");
        assert_eq!(app.status_message, "Error saving config");
        assert!(app.status_is_error);
        assert_eq!(app.tasks_in_flight(), 0);
    }
}
