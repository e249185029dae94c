/// A TCP port published by the mail container and opened on the host firewall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MailPort {
    pub port: u16,
    pub service: &'static str,
}

impl MailPort {
    const fn new(port: u16, service: &'static str) -> Self {
        Self { port, service }
    }

    /// Compose short syntax publishing the port on the same host port (`"25:25"`).
    #[must_use]
    pub fn compose_mapping(&self) -> String {
        format!("{0}:{0}", self.port)
    }

    /// Firewall rule target (`"25/tcp"`).
    #[must_use]
    pub fn tcp_rule(&self) -> String {
        format!("{}/tcp", self.port)
    }
}

/// Ports Poste.io listens on, in ascending order.
pub const MAIL_PORTS: &[MailPort] = &[
    MailPort::new(25, "SMTP"),
    MailPort::new(80, "HTTP"),
    MailPort::new(110, "POP3"),
    MailPort::new(143, "IMAP"),
    MailPort::new(443, "HTTPS"),
    MailPort::new(465, "SMTPS"),
    MailPort::new(587, "Submission"),
    MailPort::new(993, "IMAPS"),
    MailPort::new(995, "POP3S"),
    MailPort::new(4190, "ManageSieve"),
];
