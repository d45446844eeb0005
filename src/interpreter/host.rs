use tracing::warn;

use crate::{
    error::RuntimeError,
    interpreter::{
        capability::{CapabilityError, CapabilityTable},
        evaluator::core::EvalResult,
        value::core::Value,
    },
};

/// A sink for printed lines.
///
/// Everything a program prints, including capability notices, goes through
/// this trait one line at a time, without the trailing newline.
pub trait Output {
    /// Receives one printed line.
    fn write_line(&mut self, line: &str);
}

/// Collects lines in memory.
impl Output for Vec<String> {
    fn write_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Writes lines to the process's standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl Output for Stdout {
    fn write_line(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Everything an executing program can observe or affect.
///
/// Both evaluator backends talk to the outside world only through a `Host`,
/// which is what makes their observable behavior comparable.
pub struct Host<'h> {
    output:       &'h mut dyn Output,
    capabilities: &'h mut CapabilityTable,
}

impl<'h> Host<'h> {
    #[must_use]
    pub fn new(output: &'h mut dyn Output, capabilities: &'h mut CapabilityTable) -> Self {
        Self { output,
               capabilities }
    }

    /// Prints a value as one line.
    pub fn print(&mut self, value: &Value) {
        self.output.write_line(&value.to_string());
    }

    /// Runs an automation call.
    ///
    /// An unavailable or failing capability prints one notice line and
    /// counts as success; the program goes on with its next statement.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnknownCapability`] if `name` is not a known
    /// alias.
    pub fn invoke(&mut self, name: &str, args: &[Value], line: usize) -> EvalResult<()> {
        let Some(outcome) = self.capabilities.invoke(name, args) else {
            return Err(RuntimeError::UnknownCapability { name: name.to_string(),
                                                         line });
        };

        let notice = match outcome {
            Ok(_) => return Ok(()),
            Err(CapabilityError::Unavailable(reason)) => {
                warn!(name, %reason, line, "capability unavailable");
                format!("System: '{name}' is unavailable ({reason}). Skipping execution.")
            },
            Err(CapabilityError::Failed(reason)) => {
                warn!(name, %reason, line, "capability failed");
                format!("Runtime Error in '{name}': {reason}")
            },
        };
        self.output.write_line(&notice);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::capability::Action;

    #[test]
    fn print_uses_display_form() {
        let mut lines: Vec<String> = Vec::new();
        let mut table = CapabilityTable::new();
        let mut host = Host::new(&mut lines, &mut table);

        host.print(&Value::Bool(true));
        host.print(&Value::from(2.5));

        assert_eq!(lines, ["真", "2.5"]);
    }

    #[test]
    fn notices_for_unavailable_and_failed() {
        let mut lines: Vec<String> = Vec::new();
        let mut table = CapabilityTable::new();
        table.provide(Action::Press,
                      |_: &[Value]| Err(CapabilityError::Failed("no keyboard".to_string())));
        let mut host = Host::new(&mut lines, &mut table);

        host.invoke("截图", &[], 1).unwrap();
        host.invoke("press", &[Value::from("a")], 2).unwrap();

        assert_eq!(lines,
                   ["System: '截图' is unavailable (no provider for screenshot). Skipping execution.",
                    "Runtime Error in 'press': no keyboard"]);
    }

    #[test]
    fn unknown_name_is_fatal() {
        let mut lines: Vec<String> = Vec::new();
        let mut table = CapabilityTable::new();
        let mut host = Host::new(&mut lines, &mut table);

        assert_eq!(host.invoke("fly", &[], 4),
                   Err(RuntimeError::UnknownCapability { name: "fly".to_string(),
                                                         line: 4, }));
        drop(host);
        assert!(lines.is_empty());
    }
}
