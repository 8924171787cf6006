#![allow(dead_code)]

use gruntgate::config::{ConfigFile, GateSection, RunnerSection};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    runner: RunnerSection,
    gate: GateSection,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            runner: RunnerSection::default(),
            gate: GateSection::default(),
        }
    }

    pub fn command(mut self, command: &str) -> Self {
        self.runner.command = command.to_string();
        self
    }

    pub fn arguments(mut self, arguments: &str) -> Self {
        self.runner.arguments = arguments.to_string();
        self
    }

    pub fn working_directory(mut self, dir: &str) -> Self {
        self.runner.working_directory = dir.to_string();
        self
    }

    pub fn triggerfile(mut self, path: &str) -> Self {
        self.gate.triggerfiles.push(path.to_string());
        self
    }

    pub fn srcdir(mut self, dir: &str) -> Self {
        self.gate.srcdir = Some(dir.to_string());
        self
    }

    pub fn outputdir(mut self, dir: &str) -> Self {
        self.gate.outputdir = Some(dir.to_string());
        self
    }

    pub fn exclude(mut self, pattern: &str) -> Self {
        self.gate.exclude.push(pattern.to_string());
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile {
            runner: self.runner,
            gate: self.gate,
        }
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
