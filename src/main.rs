use anyhow::Result;
use clap::Parser;
use kube::api::ListParams;
use tokio::runtime::Builder;
use tracing::{error, info};

pub mod cli;
pub mod config;
pub mod kubernetes;
pub mod logging;
pub mod notifications;
pub mod view;

use crate::config::{APP_NAME, APP_VERSION, Config};
use crate::kubernetes::client::KubernetesClient;
use crate::kubernetes::resources::{DaemonSetService, ResourceService};
use crate::kubernetes::{NamespaceSelector, SessionSelection};
use crate::notifications::{NotificationKind, NotificationSink};
use crate::view::{ResourceListView, column, daemon_set_view};

fn main() -> Result<()> {
    let args = cli::Args::parse();

    let _logging_guard = logging::initialize()?;
    info!("{APP_NAME} v{APP_VERSION} started");

    if let Err(error) = run_application(&args) {
        error!("{APP_NAME} v{APP_VERSION} terminated with an error: {error}");
        Err(error)
    } else {
        info!("{APP_NAME} v{APP_VERSION} stopped");
        Ok(())
    }
}

fn run_application(args: &cli::Args) -> Result<()> {
    let rt = Builder::new_multi_thread().enable_all().build()?;
    rt.block_on(run(args))
}

async fn run(args: &cli::Args) -> Result<()> {
    let config = Config::load_or_create().await?;
    let client = KubernetesClient::new(args.kube_config.as_deref(), args.context(config.context.as_deref())).await?;
    info!("connected to context {} ({})", client.context(), client.k8s_version());

    let session = SessionSelection::new(NamespaceSelector::from(args.namespace(&config.namespace)));
    let service = DaemonSetService::new(&client, session.get());
    let (sink, mut messages) = NotificationSink::channel();
    let mut view = daemon_set_view(service, session).with_notifications(sink);

    let mut params = ListParams::default();
    if let Some(selector) = args.selector(config.label_selector.as_deref()) {
        params = params.labels(selector);
    }

    view.refresh(params).await;

    while let Ok(message) = messages.try_recv() {
        match message.kind {
            NotificationKind::Error => eprintln!("{}", message.text),
            NotificationKind::Info => println!("{}", message.text),
        }
    }

    if let Some(error) = view.error() {
        return Err(anyhow::anyhow!(error.to_owned()));
    }

    print_table(&view);

    Ok(())
}

/// Prints the view as a plain text table together with its cumulative stats.
fn print_table<S: ResourceService>(view: &ResourceListView<S>) {
    let columns = view.visible_columns();
    let rows = view
        .items()
        .iter()
        .map(|item| {
            columns
                .iter()
                .map(|c| match c.id {
                    column::STATUS_ICON_ID => view.status_of(item).map(|b| b.icon.to_string()).unwrap_or_default(),
                    column::MENU_ID => String::new(),
                    id => item.cell_text(id).into_owned(),
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let mut widths = columns.iter().map(|c| c.title.chars().count()).collect::<Vec<_>>();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let header = columns
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{:<width$}", c.title, width = widths[i]))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", header.trim_end());

    for row in &rows {
        let line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line.trim_end());
    }

    let stats = view.stats();
    println!(
        "\n{} daemonsets, pods: {} desired, {} ready, {} pending, {} warnings",
        view.items().len(),
        stats.desired,
        stats.ready,
        stats.pending,
        stats.warnings
    );
}
