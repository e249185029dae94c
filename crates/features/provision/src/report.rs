use crate::ProvisionReport;
use postbox_domain::config::ResolvedConfig;
use std::fmt;

/// Access instructions printed after a successful run.
#[must_use]
pub fn summary(config: &ResolvedConfig, report: &ProvisionReport) -> String {
    Summary { config, report }.to_string()
}

#[derive(Debug, Clone, Copy)]
pub struct Summary<'a> {
    pub config: &'a ResolvedConfig,
    pub report: &'a ProvisionReport,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { config, report } = self;

        writeln!(f, "✨ Poste.io is starting for {}", config.domain)?;
        writeln!(f, "📄 Manifest:    {}", report.manifest_path.display())?;
        writeln!(f, "🔗 Admin panel: {}", config.admin_url())?;
        writeln!(f, "📬 Webmail:     {}", config.webmail_url())?;
        writeln!(f, "👤 Admin email: {}", config.admin_email)?;
        writeln!(f, "🧱 Firewall:    {}", report.firewall)?;

        if let Some(install) = report.install.filter(|i| !i.nothing_to_do()) {
            let mut parts = Vec::new();
            if install.engine_installed {
                parts.push("container engine");
            }
            if install.compose_installed {
                parts.push("compose plugin");
            }
            writeln!(f, "📦 Installed:   {}", parts.join(", "))?;
        }

        writeln!(
            f,
            "\nPoint the DNS record for {} at this host, then finish setup in the admin panel.",
            config.hostname
        )
    }
}
