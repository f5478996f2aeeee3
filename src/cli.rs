use clap::Parser;

/// Simple program to list daemonsets in kubernetes clusters.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the kube config file.
    #[arg(long)]
    pub kube_config: Option<String>,

    /// Context to use, defined in kube config.
    #[arg(long)]
    pub context: Option<String>,

    /// Kubernetes namespaces to list resources in, comma separated.
    #[arg(long, short)]
    pub namespace: Option<String>,

    /// List resources in all namespaces.
    #[arg(long)]
    pub all_namespaces: bool,

    /// Label selector to filter the listed resources with.
    #[arg(long, short = 'l')]
    pub selector: Option<String>,
}

impl Args {
    /// Returns context or default if context is `None`.
    pub fn context<'a>(&'a self, default: Option<&'a str>) -> Option<&'a str> {
        if self.context.is_some() {
            self.context.as_deref()
        } else {
            default
        }
    }

    /// Returns the namespace selection respecting the `--all-namespaces` switch.
    pub fn namespace<'a>(&'a self, default: &'a str) -> &'a str {
        if self.all_namespaces {
            return crate::kubernetes::ALL_NAMESPACES;
        }

        self.namespace.as_deref().unwrap_or(default)
    }

    /// Returns the label selector or default if none was given.
    pub fn selector<'a>(&'a self, default: Option<&'a str>) -> Option<&'a str> {
        if self.selector.is_some() {
            self.selector.as_deref()
        } else {
            default
        }
    }
}
