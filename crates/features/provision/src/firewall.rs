use crate::error::ProvisionError;
use crate::host::Host;
use postbox_domain::ports::MailPort;
use std::fmt;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirewallKind {
    Ufw,
    Firewalld,
}

impl FirewallKind {
    const fn program(self) -> &'static str {
        match self {
            Self::Ufw => "ufw",
            Self::Firewalld => "firewall-cmd",
        }
    }

    /// `firewall-cmd --version` answers with the daemon stopped; `--state` does not.
    const fn probe_args(self) -> &'static [&'static str] {
        match self {
            Self::Ufw => &["--version"],
            Self::Firewalld => &["--state"],
        }
    }
}

impl fmt::Display for FirewallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ufw => f.write_str("ufw"),
            Self::Firewalld => f.write_str("firewalld"),
        }
    }
}

/// Result of the best-effort firewall stage. None of these stop the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FirewallOutcome {
    Configured(FirewallKind),
    /// No supported firewall manager was found.
    Unavailable,
    Failed { kind: FirewallKind, reason: String },
    Skipped,
}

impl fmt::Display for FirewallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configured(kind) => write!(f, "ports opened with {kind}"),
            Self::Unavailable => f.write_str("no firewall manager found, ports left unchanged"),
            Self::Failed { kind, reason } => write!(f, "{kind} configuration failed: {reason}"),
            Self::Skipped => f.write_str("skipped"),
        }
    }
}

/// Returns the first supported firewall manager present on the host (ufw before a running
/// firewalld).
pub fn detect<H: Host>(host: &H) -> Option<FirewallKind> {
    [FirewallKind::Ufw, FirewallKind::Firewalld]
        .into_iter()
        .find(|kind| host.probe(kind.program(), kind.probe_args()))
}

/// Opens every port as TCP on the detected firewall manager.
///
/// Never fails the run: missing tooling and command failures are reported as warnings
/// and returned as the outcome.
pub fn open_ports<H: Host>(host: &H, ports: &[MailPort]) -> FirewallOutcome {
    let Some(kind) = detect(host) else {
        warn!("No firewall manager (ufw, firewalld) detected; make sure mail ports are reachable");
        return FirewallOutcome::Unavailable;
    };

    match apply(host, kind, ports) {
        Ok(()) => {
            info!(firewall = %kind, count = ports.len(), "Mail ports opened");
            FirewallOutcome::Configured(kind)
        },
        Err(err) => {
            warn!(firewall = %kind, error = %err, "Failed to open mail ports, continuing");
            FirewallOutcome::Failed { kind, reason: err.to_string() }
        },
    }
}

fn apply<H: Host>(host: &H, kind: FirewallKind, ports: &[MailPort]) -> Result<(), ProvisionError> {
    match kind {
        FirewallKind::Ufw => {
            for port in ports {
                host.run(kind.program(), &["allow", &port.tcp_rule()])?;
            }
        },
        FirewallKind::Firewalld => {
            for port in ports {
                let arg = format!("--add-port={}", port.tcp_rule());
                host.run(kind.program(), &["--permanent", &arg])?;
            }
            host.run(kind.program(), &["--reload"])?;
        },
    }
    Ok(())
}
