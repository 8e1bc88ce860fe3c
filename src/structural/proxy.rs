// Proxy
// A stand-in with the same interface as the real service. It controls
// access and does work before or after forwarding. Unlike a decorator, the
// proxy manages the lifecycle of the object it wraps.
//
// Context: the big assembly machine at the end of the line is expensive to
// start and may only be operated by authorized personnel.

use std::cell::OnceCell;

use itertools::Itertools;
use tracing::debug;

use crate::console::Transcript;
use crate::error::PatternError;

pub trait AssemblyMachineInterface {
    fn assemble_components(
        &self,
        components: &[&str],
        out: &mut Transcript,
    ) -> Result<String, PatternError>;
}

#[derive(Debug)]
pub struct AssemblyMachine;

impl AssemblyMachine {
    pub fn start() -> Self {
        debug!("assembly machine started");
        Self
    }
}

impl AssemblyMachineInterface for AssemblyMachine {
    fn assemble_components(
        &self,
        components: &[&str],
        _out: &mut Transcript,
    ) -> Result<String, PatternError> {
        Ok(format!(
            "Final assembled part from components: {}",
            components.iter().join("_")
        ))
    }
}

/// Checks the operator, then starts the real machine on first use.
#[derive(Debug)]
pub struct AssemblyMachineProxy {
    user: String,
    authorized_users: Vec<String>,
    machine: OnceCell<AssemblyMachine>,
}

impl AssemblyMachineProxy {
    pub fn new(user: impl Into<String>, authorized_users: &[&str]) -> Self {
        Self {
            user: user.into(),
            authorized_users: authorized_users.iter().map(|u| u.to_string()).collect(),
            machine: OnceCell::new(),
        }
    }

    fn is_user_authorized(&self, out: &mut Transcript) -> bool {
        out.line(format!(
            "Validating User access for {} before proceeding ...",
            self.user
        ));
        self.authorized_users.contains(&self.user)
    }

    pub fn is_machine_started(&self) -> bool {
        self.machine.get().is_some()
    }
}

impl AssemblyMachineInterface for AssemblyMachineProxy {
    fn assemble_components(
        &self,
        components: &[&str],
        out: &mut Transcript,
    ) -> Result<String, PatternError> {
        if !self.is_user_authorized(out) {
            return Err(PatternError::unauthorized(&self.user));
        }

        self.machine
            .get_or_init(AssemblyMachine::start)
            .assemble_components(components, out)
    }
}

// ============================================================================
// Driver script
// ============================================================================

pub fn demo(out: &mut Transcript) -> Result<(), PatternError> {
    let components = ["Doors", "Wheels", "Engine"];

    let proxy = AssemblyMachineProxy::new("Hugo", &["Hugo"]);
    let part = proxy.assemble_components(&components, out)?;
    out.line(part);

    let intruder = AssemblyMachineProxy::new("Eve", &["Hugo"]);
    if let Err(err) = intruder.assemble_components(&components, out) {
        out.line(format!("Access denied: {}", err));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_joins_components() {
        let mut out = Transcript::new();
        let part = AssemblyMachine::start()
            .assemble_components(&["A", "B"], &mut out)
            .unwrap();
        assert_eq!(part, "Final assembled part from components: A_B");
    }

    #[test]
    fn test_machine_starts_lazily() {
        let mut out = Transcript::new();
        let proxy = AssemblyMachineProxy::new("Hugo", &["Hugo"]);
        assert!(!proxy.is_machine_started());

        proxy.assemble_components(&["Doors"], &mut out).unwrap();
        assert!(proxy.is_machine_started());
    }

    #[test]
    fn test_unauthorized_user_never_starts_machine() {
        let mut out = Transcript::new();
        let proxy = AssemblyMachineProxy::new("Eve", &["Hugo"]);

        let err = proxy.assemble_components(&["Doors"], &mut out).unwrap_err();
        assert_eq!(err, PatternError::unauthorized("Eve"));
        assert!(!proxy.is_machine_started());
        assert!(out.contains("Validating User access for Eve"));
    }

    #[test]
    fn test_demo_transcript() {
        let mut out = Transcript::new();
        demo(&mut out).unwrap();
        assert_eq!(
            out.lines(),
            &[
                "Validating User access for Hugo before proceeding ...",
                "Final assembled part from components: Doors_Wheels_Engine",
                "Validating User access for Eve before proceeding ...",
                "Access denied: User 'Eve' is not authorized to operate the assembly machine",
            ]
        );
    }
}
