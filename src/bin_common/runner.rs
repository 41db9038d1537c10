//! Binary runner utilities
//!
//! Provides a standardized way to run demonstration binaries with
//! banners around the run and a runner for strategy chains.

use ordering::{create_strategy, Context, StrategyKind};
use tracing::info;

/// Configuration for running a binary application
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Name of the binary (for logging)
    pub name: String,
    /// One-line description shown in the banner
    pub description: Option<String>,
}

impl RunConfig {
    /// Create a new run configuration
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Set banner description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Trait for binary applications
pub trait DemoRunner {
    /// Run the application
    fn run(&mut self) -> anyhow::Result<()>;

    /// Get the run configuration
    fn config(&self) -> &RunConfig;

    /// Print startup banner
    fn print_banner(&self) {
        let config = self.config();
        info!("");
        info!("========================================");
        info!("Starting {}", config.name);
        if let Some(description) = &config.description {
            info!("{}", description);
        }
        info!("========================================");
        info!("");
    }

    /// Print shutdown banner
    fn print_shutdown(&self, stats: Option<&str>) {
        let config = self.config();
        info!("");
        info!("========================================");
        info!("{} finished", config.name);
        if let Some(stats) = stats {
            info!("{}", stats);
        }
        info!("========================================");
    }

    /// Execute the binary with banners around the run
    fn execute(&mut self) -> anyhow::Result<()> {
        self.print_banner();
        let result = self.run();
        self.print_shutdown(None);
        result
    }
}

/// Runs one data set through a chain of strategies on a single context
///
/// The first strategy is installed when the context is built; every later
/// one replaces it before the next ordering.
#[derive(Debug)]
pub struct ChainRunner {
    config: RunConfig,
    data: Vec<String>,
    chain: Vec<StrategyKind>,
    results: Vec<(StrategyKind, Vec<String>)>,
}

impl ChainRunner {
    /// Create a new chain runner
    pub fn new(config: RunConfig, data: Vec<String>, chain: Vec<StrategyKind>) -> Self {
        Self {
            config,
            data,
            chain,
            results: Vec::new(),
        }
    }

    /// Strategy names in run order, e.g. `sort -> reverse`
    pub fn chain_summary(&self) -> String {
        self.chain
            .iter()
            .map(StrategyKind::name)
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    /// Results of the last run, one per strategy in chain order
    pub fn results(&self) -> &[(StrategyKind, Vec<String>)] {
        &self.results
    }
}

impl DemoRunner for ChainRunner {
    fn run(&mut self) -> anyhow::Result<()> {
        let Some((first, rest)) = self.chain.split_first() else {
            anyhow::bail!("Strategy chain is empty");
        };

        self.results.clear();
        info!("Strategies: {}", self.chain_summary());

        info!("Client: strategy set to '{}'", first);
        let mut context = Context::new(create_strategy(first));
        let result = order_with_narration(&context, &self.data)?;
        self.results.push((*first, result));

        for kind in rest {
            info!("");
            info!("Client: strategy changed to '{}'", kind);
            context.set_strategy(create_strategy(kind));
            let result = order_with_narration(&context, &self.data)?;
            self.results.push((*kind, result));
        }

        Ok(())
    }

    fn config(&self) -> &RunConfig {
        &self.config
    }
}

/// Order `data` through the context, narrating around the call
fn order_with_narration(context: &Context, data: &[String]) -> anyhow::Result<Vec<String>> {
    info!("Context: ordering data with some strategy, without knowing which one or how");
    let result = context.do_order(data.iter().cloned());
    info!("Context: result {}", serde_json::to_string(&result)?);
    Ok(result)
}
