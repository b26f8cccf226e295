//! Scripted registry session used by the `session` command.

use std::sync::Arc;

use tracing::info;

use mvcore_core::{DataProxy, Model, ModelCores, ModelError, Proxy};

type Catalogue = DataProxy<Vec<String>>;

fn catalogue(name: &str, items: &[&str]) -> Arc<Catalogue> {
    Arc::new(DataProxy::new(
        name,
        items.iter().map(|s| s.to_string()).collect(),
    ))
}

/// What the session observed, one line per step.
pub(crate) struct SessionReport {
    pub lines: Vec<String>,
}

impl SessionReport {
    fn record(&mut self, line: String) {
        info!("{}", line);
        self.lines.push(line);
    }
}

/// Register, retrieve and remove the `colors`, `sizes` and `aces` catalogues.
pub(crate) fn run(cores: &ModelCores, core: &str) -> Result<SessionReport, ModelError> {
    let model = cores.instance(core)?;
    let mut report = SessionReport { lines: Vec::new() };

    model.register_proxy(catalogue("colors", &["red", "green", "blue"]))?;
    let colors = read(&model, "colors");
    report.record(format!("colors -> {:?}", colors));

    model.register_proxy(catalogue("sizes", &["7", "13", "21"]))?;
    if let Some(removed) = model.remove_proxy("sizes") {
        report.record(format!(
            "removed '{}', still present: {}",
            removed.proxy_name(),
            model.retrieve_proxy("sizes").is_some()
        ));
    }

    model.register_proxy(catalogue("aces", &["clubs", "spades", "hearts", "diamonds"]))?;
    let before = model.has_proxy("aces");
    model.remove_proxy("aces");
    report.record(format!(
        "aces registered: {} -> {}",
        before,
        model.has_proxy("aces")
    ));

    let mut names = model.proxy_names();
    names.sort();
    report.record(format!("core '{}' holds {:?}", core, names));

    Ok(report)
}

fn read(model: &Model, name: &str) -> Vec<String> {
    model
        .retrieve_proxy_as::<Catalogue>(name)
        .map(|proxy| proxy.data())
        .unwrap_or_default()
}
