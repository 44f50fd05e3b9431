use crate::protocol::{ArgError, Command};

/// Owner of the movement-enable flag.
///
/// Movement starts disabled. The flag only changes through
/// [`MotionGate::on_enable`].
#[derive(Debug)]
pub struct MotionGate {
    name: String,
    enabled: bool,
}

impl MotionGate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), enabled: false }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Handles an enable command and returns the value applied.
    ///
    /// A bare command enables movement. On a decode error the flag is
    /// left as it was.
    pub fn on_enable(&mut self, cmd: &Command) -> Result<bool, ArgError> {
        let value = cmd.arg_or(true)?;
        log::debug!("{}: enable_pid {}", self.name, value);

        if value != self.enabled {
            log::info!(
                "{}: movement {}",
                self.name,
                if value { "enabled" } else { "disabled" }
            );
        }

        self.enabled = value;
        Ok(value)
    }
}
