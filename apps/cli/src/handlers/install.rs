use crate::models::args::InstallArgs;
use anyhow::Result;
use postbox_domain::config::ResolvedConfig;
use postbox_provision::{Options, Provisioner, SystemHost, report};

/// Runs the full provisioning pipeline on this machine and prints access instructions.
///
/// # Errors
/// Returns the first failing stage as a [`postbox_provision::ProvisionError`].
pub(crate) fn provision(config: &ResolvedConfig, args: &InstallArgs) -> Result<()> {
    let options = Options {
        skip_install: args.skip_install,
        skip_firewall: args.skip_firewall,
        ..Options::default()
    };

    let outcome = Provisioner::new(config, &SystemHost, options).run()?;

    println!("\n{}", report::summary(config, &outcome));
    Ok(())
}
